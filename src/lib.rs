//! WITTI Backend - Main Library
//!
//! Server-side API for the WITTI teacher-community platform. It provides
//! account registration and login with hashed credentials, signed bearer-token
//! sessions, and a transactional checkout path recording one payment plus its
//! class enrollments, backed by PostgreSQL.
//!
//! # Module Structure
//!
//! - **`auth`** - Validators, password hashing, token codec, user store, handlers
//! - **`commerce`** - Payment/enrollment writer and read-only views
//! - **`middleware`** - Bearer-token authentication middleware
//! - **`routes`** - Route configuration and router assembly
//! - **`server`** - Configuration, application state, initialization
//! - **`error`** - API error types and HTTP response conversion

pub mod auth;
pub mod commerce;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
