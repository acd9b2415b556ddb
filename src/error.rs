use thiserror::Error;

/// Errors surfaced by the utility functions.
///
/// Nothing in this crate retries, falls back, or swallows failures:
/// every error propagates unchanged to the immediate caller, wrapped in
/// the matching variant here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("blocking worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    #[error("response body is not valid utf-8: {0}")]
    BodyEncoding(#[from] std::string::FromUtf8Error),

    #[error("proxy list parsing failed: {0}")]
    ProxyList(String),
}

pub type Result<T> = std::result::Result<T, Error>;
