//! Authentication Module
//!
//! Everything credential- and session-related:
//!
//! - **`validators`** - Pure input predicates, run before any hash or store work
//! - **`password`** - bcrypt hashing and verification
//! - **`tokens`** - Signed bearer-token issuance and verification
//! - **`users`** - Credential store access over the `users` table
//! - **`handlers`** - HTTP handlers for check-email, signup, login, me

pub mod handlers;
pub mod password;
pub mod tokens;
pub mod users;
pub mod validators;

pub use handlers::{check_email, get_me, login, signup};
