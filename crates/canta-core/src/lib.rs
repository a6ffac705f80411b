//! # canta-core
//!
//! Shared domain types and error handling for the canta search proxy.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{ResolvedTrack, SearchHit};
