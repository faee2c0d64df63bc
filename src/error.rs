use thiserror::Error;

#[derive(Error, Debug)]
pub enum BarError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Expected data missing from response: {0}")]
    DataUnavailable(&'static str),

    #[error("Failed to parse {field}: {value:?}")]
    Parse {
        field: &'static str,
        value: String,
    },

    #[error("Failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("Failed to decode config JSON: {0}")]
    ConfigDecode(#[from] serde_json::Error),

    #[error("Request signing failed: {0}")]
    Auth(String),
}
