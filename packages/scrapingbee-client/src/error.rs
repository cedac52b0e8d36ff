use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapingBeeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ScrapingBee API error {status}: {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, ScrapingBeeError>;
