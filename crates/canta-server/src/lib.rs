//! # canta-server
//!
//! The HTTP surface of canta: one route that searches `YouTube` Music and
//! resolves a direct audio URL per result.

pub mod routes;

pub use routes::app;
