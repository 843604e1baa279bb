//!
//! src/errors.rs  Andrew Belles  Oct 19th, 2026
//!
//! Error type for everything around a search: loading config,
//! building the http client, logging setup and printing results.
//! A search itself returns the transport's own error untouched.
//!

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error)
}
