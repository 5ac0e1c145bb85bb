//! Commerce Module
//!
//! The enrollment/payment write path and its read-only companions:
//!
//! - **`db`** - Transactional checkout writer and list queries
//! - **`handlers`** - HTTP handlers for checkout and "my" views
//! - **`types`** - Request/response bodies and row views

pub mod db;
pub mod handlers;
pub mod types;

pub use handlers::{create_payment, my_enrollments, my_payments};
