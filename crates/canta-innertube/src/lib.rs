//! # canta-innertube
//!
//! `YouTube` Music `InnerTube` API client for canta.
//!
//! Two endpoints are implemented: the songs search on `music.youtube.com`,
//! and the short-form watch endpoint on `youtubei.googleapis.com` used to
//! resolve direct audio stream URLs.

pub mod client;
pub mod context;
pub mod endpoints;
pub mod parser;
pub mod types;

pub use client::InnerTubeClient;
