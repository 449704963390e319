use axum::Json;
use posture_core::notify::{self, BillingEvent, CustomerContext};

use crate::error::AppError;

#[derive(serde::Deserialize)]
pub struct BillingPreviewBody {
    pub event: BillingEvent,
    pub customer: CustomerContext,
}

/// POST /api/billing/preview — render the sales notification for a billing
/// event without delivering it. Delivery stays with the webhook collaborator.
pub async fn preview(
    Json(body): Json<BillingPreviewBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let notification = notify::notification_for(&body.event, &body.customer);
    let payload = notify::slack_payload(&notification);
    Ok(Json(serde_json::json!({
        "notification": notification,
        "slack_payload": payload,
    })))
}
