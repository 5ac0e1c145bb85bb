//! Commerce Types
//!
//! Request/response bodies for the checkout and "my" endpoints, plus the
//! enrollment status enum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Enrollment lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Enrolled,
    Completed,
    Cancelled,
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enrolled => "enrolled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "enrolled" => Some(Self::Enrolled),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// Body for POST /api/payment/create
///
/// `items` carries the cart entries; only each entry's class id matters to
/// the writer, other fields the client includes are ignored.
#[derive(Deserialize, Serialize, Debug)]
pub struct CheckoutRequest {
    pub order_id: String,
    pub amount: i64,
    pub payment_method: String,
    pub items: Vec<CheckoutItem>,
}

/// One cart entry: a class id
#[derive(Deserialize, Serialize, Debug)]
pub struct CheckoutItem {
    pub id: i64,
}

/// Response for POST /api/payment/create
#[derive(Serialize, Debug)]
pub struct CheckoutResponse {
    pub success: bool,
    pub payment_id: i64,
    pub order_id: String,
}

/// One row of GET /api/my/enrollments: an enrollment joined to its class
#[derive(Serialize, Debug)]
pub struct EnrollmentView {
    pub id: i64,
    pub class_id: i64,
    pub class_title: String,
    pub instructor_name: String,
    pub status: EnrollmentStatus,
    pub enrolled_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Response for GET /api/my/enrollments
#[derive(Serialize, Debug)]
pub struct EnrollmentsResponse {
    pub success: bool,
    pub enrollments: Vec<EnrollmentView>,
}

/// A class covered by a payment's enrollments
#[derive(Serialize, Debug, Clone)]
pub struct PaymentClass {
    pub id: i64,
    pub title: String,
}

/// One row of GET /api/my/payments: a payment and the classes it covered
#[derive(Serialize, Debug)]
pub struct PaymentView {
    pub id: i64,
    pub order_id: String,
    pub amount: i64,
    pub payment_method: String,
    pub payment_status: String,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub classes: Vec<PaymentClass>,
}

/// Response for GET /api/my/payments
#[derive(Serialize, Debug)]
pub struct PaymentsResponse {
    pub success: bool,
    pub payments: Vec<PaymentView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            EnrollmentStatus::Enrolled,
            EnrollmentStatus::Completed,
            EnrollmentStatus::Cancelled,
        ] {
            assert_eq!(EnrollmentStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(EnrollmentStatus::from_str("refunded"), None);
    }

    #[test]
    fn test_checkout_request_ignores_extra_item_fields() {
        let body = r#"{
            "order_id": "ORD-1",
            "amount": 29000,
            "payment_method": "card",
            "items": [{"id": 5, "title": "Classroom Play", "price": 29000}]
        }"#;
        let request: CheckoutRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].id, 5);
    }
}
