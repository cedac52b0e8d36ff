use thiserror::Error;

#[derive(Debug, Error)]
pub enum SerpApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("SerpAPI ERROR {status}: {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, SerpApiError>;
