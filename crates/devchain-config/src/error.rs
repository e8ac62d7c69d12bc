use thiserror::Error;

/// Why a network descriptor was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    #[error("host cannot be empty")]
    EmptyHost,

    #[error("port {0} is outside 1-65535")]
    PortOutOfRange(u32),

    #[error("malformed from address: {0}")]
    MalformedAddress(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid descriptor for network '{name}': {reason}")]
    InvalidDescriptor { name: String, reason: InvalidReason },

    #[error("Network already registered: {0}")]
    DuplicateName(String),

    #[error("Network not found: {0}")]
    NotFound(String),

    #[error("Network name cannot be empty")]
    EmptyName,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Environment error: {0}")]
    EnvironmentError(String),

    #[error("Unknown preset: {0}")]
    InvalidPreset(String),
}

impl ConfigError {
    /// The validation sub-reason, if this is a descriptor rejection
    pub fn invalid_reason(&self) -> Option<&InvalidReason> {
        match self {
            ConfigError::InvalidDescriptor { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
