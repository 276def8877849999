use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

/// The single I/O seam of a lookup: fetch `url` and hand back the body.
///
/// Implementations report connection failures, timeouts and non-2xx
/// statuses as [`LookupError::Transport`](crate::utils::error::LookupError::Transport).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn timeout_secs(&self) -> u64;
}
