use crate::adapters::http::ReqwestTransport;
use crate::config;
use crate::core::{AddressRecord, ConfigProvider, PostalCode, Transport};
use crate::utils::error::{LookupError, Result};
use std::time::Duration;
use url::Url;

pub struct CepClient<T: Transport> {
    transport: T,
    base_url: Url,
}

impl CepClient<ReqwestTransport> {
    /// Validates `config` and wires a reqwest-backed client with its timeout.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let base_url = config::validate_provider(config)?;
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs()))?;
        Ok(Self::new(transport, base_url))
    }
}

impl<T: Transport> CepClient<T> {
    pub fn new(transport: T, base_url: Url) -> Self {
        Self {
            transport,
            base_url,
        }
    }

    /// `{base}/{code}/json/`
    pub fn endpoint_for(&self, code: &PostalCode) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::ConfigError {
                message: format!("Endpoint {} cannot be used as a base URL", self.base_url),
            })?
            .pop_if_empty()
            .push(code.as_str())
            .push("json")
            .push("");
        Ok(url)
    }

    /// Looks up the address for `raw_input`.
    ///
    /// Validation happens before any I/O: input that does not reduce to
    /// exactly 8 digits never reaches the transport. Otherwise exactly one
    /// request is made.
    pub async fn lookup(&self, raw_input: &str) -> Result<AddressRecord> {
        let code = match PostalCode::parse(raw_input) {
            Ok(code) => code,
            Err(e) => {
                tracing::debug!(input = raw_input, "Rejected postal code: {}", e);
                return Err(e);
            }
        };

        let url = self.endpoint_for(&code)?;
        tracing::debug!(cep = %code, %url, "Looking up postal code");

        let body = match self.transport.get(&url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(cep = %code, "Lookup request failed: {}", e);
                return Err(e);
            }
        };

        let record: AddressRecord = match serde_json::from_str(&body) {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!(cep = %code, body_len = body.len(), "Undecodable response: {}", e);
                return Err(LookupError::Decode(e));
            }
        };

        if record.is_not_found() {
            tracing::debug!(cep = %code, "Postal code not found");
            return Err(LookupError::NotFound {
                code: code.to_string(),
            });
        }

        tracing::debug!(cep = %code, fields = record.fields().len(), "Lookup succeeded");
        Ok(record)
    }
}
