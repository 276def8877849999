pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::ReqwestTransport;
pub use config::LookupConfig;
pub use core::lookup::CepClient;
pub use domain::model::{AddressRecord, PostalCode};
pub use utils::error::{ErrorKind, LookupError, Result};
