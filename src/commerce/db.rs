//! Database operations for payments and enrollments
//!
//! This module owns the `payments` and `enrollments` tables: the checkout
//! writer is the only code path that creates rows in either.
//!
//! The checkout write is atomic. The payment insert and every enrollment
//! insert run inside one transaction; if any statement fails the whole batch
//! rolls back, so a payment row can never be left referencing a partial
//! enrollment set.

use chrono::Utc;
use sqlx::{PgPool, Row};

use crate::commerce::types::{EnrollmentStatus, EnrollmentView, PaymentClass, PaymentView};

/// Record a completed payment and its enrollments
///
/// Inserts one payment row (status `completed`, `paid_at = now`) and one
/// enrollment row per class id, all referencing the new payment. Returns the
/// payment id. An empty `class_ids` slice creates the payment row and zero
/// enrollments.
pub async fn checkout(
    pool: &PgPool,
    user_id: i64,
    order_id: &str,
    amount: i64,
    payment_method: &str,
    class_ids: &[i64],
) -> Result<i64, sqlx::Error> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let payment_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO payments (user_id, order_id, amount, payment_method, payment_status, paid_at, created_at)
        VALUES ($1, $2, $3, $4, 'completed', $5, $5)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(order_id)
    .bind(amount)
    .bind(payment_method)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    for &class_id in class_ids {
        sqlx::query(
            r#"
            INSERT INTO enrollments (user_id, class_id, payment_id, status, enrolled_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user_id)
        .bind(class_id)
        .bind(payment_id)
        .bind(EnrollmentStatus::Enrolled.as_str())
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(payment_id)
}

/// List a user's enrollments joined to their classes
pub async fn list_enrollments(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<EnrollmentView>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT e.id, e.class_id, c.title AS class_title, c.instructor_name,
               e.status, e.enrolled_at, e.completed_at
        FROM enrollments e
        JOIN classes c ON c.id = e.class_id
        WHERE e.user_id = $1
        ORDER BY e.enrolled_at DESC, e.id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| EnrollmentView {
            id: row.get("id"),
            class_id: row.get("class_id"),
            class_title: row.get("class_title"),
            instructor_name: row.get("instructor_name"),
            status: EnrollmentStatus::from_str(row.get::<String, _>("status").as_str())
                .unwrap_or(EnrollmentStatus::Enrolled),
            enrolled_at: row.get("enrolled_at"),
            completed_at: row.get("completed_at"),
        })
        .collect())
}

/// List a user's payments, each with the classes its enrollments cover
///
/// One join over payments/enrollments/classes, grouped in process, rather
/// than a per-payment sub-query; the observable output is the same.
pub async fn list_payments(pool: &PgPool, user_id: i64) -> Result<Vec<PaymentView>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT p.id, p.order_id, p.amount, p.payment_method, p.payment_status,
               p.paid_at, p.created_at,
               c.id AS class_id, c.title AS class_title
        FROM payments p
        LEFT JOIN enrollments e ON e.payment_id = p.id
        LEFT JOIN classes c ON c.id = e.class_id
        WHERE p.user_id = $1
        ORDER BY p.created_at DESC, p.id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let mut payments: Vec<PaymentView> = Vec::new();
    for row in rows {
        let payment_id: i64 = row.get("id");

        if payments.last().map(|p| p.id) != Some(payment_id) {
            payments.push(PaymentView {
                id: payment_id,
                order_id: row.get("order_id"),
                amount: row.get("amount"),
                payment_method: row.get("payment_method"),
                payment_status: row.get("payment_status"),
                paid_at: row.get("paid_at"),
                created_at: row.get("created_at"),
                classes: Vec::new(),
            });
        }

        // LEFT JOIN: a payment without enrollments yields NULL class columns.
        if let Some(class_id) = row.get::<Option<i64>, _>("class_id") {
            if let Some(payment) = payments.last_mut() {
                payment.classes.push(PaymentClass {
                    id: class_id,
                    title: row.get::<Option<String>, _>("class_title").unwrap_or_default(),
                });
            }
        }
    }

    Ok(payments)
}
