//! Utility functions for CAPTCHA-solving automation.
//!
//! This crate collects the support pieces the solver leans on, organized
//! by functionality:
//! - `http`: page fetching with platform-selected transports and proxy support
//! - `files`: whole-file persistence and object snapshot serialization
//! - `images`: splitting puzzle images into grid tiles
//! - `proxies`: scraped proxy list retrieval
//! - `runtime`: blocking-call bridge and one-time process setup

pub mod error;
pub mod files;
pub mod http;
pub mod images;
pub mod proxies;
pub mod runtime;

// Re-export commonly used functions for convenience
pub use error::{Error, Result};
pub use files::{deserialize, load_file, load_text, save_file, serialize};
pub use http::{
    get_page, select_transport, AsyncTransport, BlockingTransport, FetchBody, FetchRequest,
    ProxyAuth, ProxyServer, Transport,
};
pub use images::split_image;
pub use proxies::{get_proxies, get_random_proxy};
pub use runtime::{run_blocking, suppress_tls_warnings};
