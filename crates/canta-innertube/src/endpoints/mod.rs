//! Endpoint implementations for the `InnerTube` client.

pub mod reel;
pub mod search;
