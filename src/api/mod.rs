//! # API Adapter
//!
//! HTTP side of the effect system. The core hands out `FetchJson`
//! descriptors; this module performs the GET, decodes the body, and turns
//! the outcome into the completion `Action` the descriptor names.

pub mod client;
pub mod error;
pub mod runner;

pub use client::{HttpFetcher, JsonFetcher};
pub use error::FetchError;
pub use runner::fetch_json;
