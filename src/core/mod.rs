pub mod lookup;

pub use crate::domain::model::{AddressRecord, PostalCode};
pub use crate::domain::ports::{ConfigProvider, Transport};
pub use crate::utils::error::Result;
