//!
//! src/lib.rs  Andrew Belles  Oct 19th, 2026
//!
//! Client for the saavn.dev song search endpoint
//!

pub mod config;
pub mod errors;
pub mod fetch;
pub mod logging;
pub mod types;

pub use crate::errors::AppError;
pub use crate::fetch::SaavnClient;
pub use crate::types::{Album, Artist, Artists, DownloadUrl, Image, Song};
