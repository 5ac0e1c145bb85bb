//! Commerce Handlers
//!
//! HTTP handlers for the checkout write path and the read-only "my" views.
//! All three routes sit behind the auth middleware; the user identity comes
//! from the verified token, never from the request body.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use sqlx::PgPool;

use crate::commerce::db::{checkout, list_enrollments, list_payments};
use crate::commerce::types::{
    CheckoutRequest, CheckoutResponse, EnrollmentsResponse, PaymentsResponse,
};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Record a completed payment and enroll the user in the purchased classes
///
/// POST /api/payment/create. The payment row and all enrollment rows are
/// written in one transaction; on failure nothing persists and the client
/// gets a generic 500.
///
/// # Errors
///
/// * `401 Unauthorized` - Missing/invalid token (from the middleware)
/// * `500 Internal Server Error` - Write failure (whole batch rolled back)
pub async fn create_payment(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    Json(request): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<CheckoutResponse>), ApiError> {
    let class_ids: Vec<i64> = request.items.iter().map(|item| item.id).collect();

    tracing::info!(
        user_id = user.user_id,
        order_id = %request.order_id,
        classes = class_ids.len(),
        "checkout request"
    );

    let payment_id = checkout(
        &pool,
        user.user_id,
        &request.order_id,
        request.amount,
        &request.payment_method,
        &class_ids,
    )
    .await?;

    tracing::info!(payment_id, "checkout committed");

    Ok((
        StatusCode::CREATED,
        Json(CheckoutResponse {
            success: true,
            payment_id,
            order_id: request.order_id,
        }),
    ))
}

/// List the authenticated user's enrollments
///
/// GET /api/my/enrollments
pub async fn my_enrollments(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
) -> Result<Json<EnrollmentsResponse>, ApiError> {
    let enrollments = list_enrollments(&pool, user.user_id).await?;
    Ok(Json(EnrollmentsResponse {
        success: true,
        enrollments,
    }))
}

/// List the authenticated user's payments with their covered classes
///
/// GET /api/my/payments
pub async fn my_payments(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
) -> Result<Json<PaymentsResponse>, ApiError> {
    let payments = list_payments(&pool, user.user_id).await?;
    Ok(Json(PaymentsResponse {
        success: true,
        payments,
    }))
}
