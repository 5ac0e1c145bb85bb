//! API Error Module
//!
//! Error types shared by all HTTP handlers, plus their conversion into
//! JSON error responses.

pub mod conversion;
pub mod types;

pub use types::ApiError;
