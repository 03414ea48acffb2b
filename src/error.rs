use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvictionError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type ConvictionResult<T> = Result<T, ConvictionError>;
