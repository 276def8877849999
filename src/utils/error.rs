use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Invalid postal code {input:?}: expected 8 digits, found {digits}")]
    InvalidFormat { input: String, digits: usize },

    #[error("Postal code {code} not found")]
    NotFound { code: String },

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Fieldless discriminant of [`LookupError`], for callers that branch on the
/// failure without caring about its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidFormat,
    NotFound,
    Transport,
    Decode,
    Config,
}

impl LookupError {
    pub fn transport(url: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            url: url.into(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Decode(_) => ErrorKind::Decode,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => ErrorKind::Config,
        }
    }

    /// Message shown to the person at the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidFormat { .. } => "CEP inválido! O CEP deve conter 8 dígitos.".to_string(),
            Self::NotFound { code } => format!("CEP {} não encontrado!", code),
            Self::Transport { source, .. } => format!("Erro ao fazer requisição: {}", source),
            Self::Decode(e) => format!("Erro ao decodificar JSON: {}", e),
            Self::ConfigError { message } => format!("Configuração inválida: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuração inválida para {}: {}", field, reason)
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Config => 1,
            ErrorKind::InvalidFormat => 2,
            ErrorKind::NotFound => 3,
            ErrorKind::Transport => 4,
            ErrorKind::Decode => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
