//! API Route Configuration
//!
//! # Routes
//!
//! ## Public
//! - `POST /api/auth/check-email` - Email availability
//! - `POST /api/auth/signup` - User registration
//! - `POST /api/auth/login` - User login
//!
//! ## Protected (bearer token, via the auth middleware)
//! - `GET /api/auth/me` - Current user
//! - `POST /api/payment/create` - Transactional checkout
//! - `GET /api/my/enrollments` - My enrollments
//! - `GET /api/my/payments` - My payments with covered classes

use axum::routing::{get, post};
use axum::Router;

use crate::auth::{check_email, get_me, login, signup};
use crate::commerce::{create_payment, my_enrollments, my_payments};
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// Routes that require no authentication
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/check-email", post(check_email))
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
}

/// Routes behind the bearer-token middleware
pub fn protected_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/me", get(get_me))
        .route("/api/payment/create", post(create_payment))
        .route("/api/my/enrollments", get(my_enrollments))
        .route("/api/my/payments", get(my_payments))
        .route_layer(axum::middleware::from_fn_with_state(
            app_state,
            auth_middleware,
        ))
}
