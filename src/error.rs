/// Common error type for the widgets
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed reply: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type WidgetResult<T> = Result<T, WidgetError>;
