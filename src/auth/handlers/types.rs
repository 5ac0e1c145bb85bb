//! Authentication Handler Types
//!
//! Request and response bodies shared by the auth handlers. Every success
//! response carries `success: true`; failures go through
//! [`crate::error::ApiError`] and carry `success: false`.

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Body for POST /api/auth/check-email
#[derive(Deserialize, Serialize, Debug)]
pub struct CheckEmailRequest {
    pub email: String,
}

/// Response for POST /api/auth/check-email
#[derive(Serialize, Debug)]
pub struct CheckEmailResponse {
    pub success: bool,
    pub available: bool,
}

/// Body for POST /api/auth/signup
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    pub email: String,
    /// Hashed before storage, never logged
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Response for POST /api/auth/signup (201)
#[derive(Serialize, Debug)]
pub struct SignupResponse {
    pub success: bool,
    pub user: UserResponse,
}

/// Body for POST /api/auth/login
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for POST /api/auth/login
#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    /// Bearer token, valid for 7 days
    pub token: String,
    pub user: UserResponse,
}

/// Response for GET /api/auth/me
#[derive(Serialize, Debug)]
pub struct MeResponse {
    pub success: bool,
    pub user: UserResponse,
}

/// User fields safe to return to clients (no password hash)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}
