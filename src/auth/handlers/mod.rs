//! Authentication Handlers
//!
//! HTTP handlers for the auth endpoints:
//!
//! - `POST /api/auth/check-email` - Email availability check
//! - `POST /api/auth/signup` - User registration
//! - `POST /api/auth/login` - User login
//! - `GET /api/auth/me` - Current user (bearer token required)

pub mod check_email;
pub mod login;
pub mod me;
pub mod signup;
pub mod types;

pub use check_email::check_email;
pub use login::login;
pub use me::get_me;
pub use signup::signup;
