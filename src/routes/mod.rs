//! Routes Module
//!
//! Route configuration and router assembly.

pub mod api_routes;
pub mod router;
