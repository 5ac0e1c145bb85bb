//! Request Middleware
//!
//! Middleware applied to protected routes; currently bearer-token
//! authentication.

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
