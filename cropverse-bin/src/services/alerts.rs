use crate::{ApiError, DbConn, IntoApiErr};
use chrono::naive::NaiveDateTime;
use cropverse_db::{alerts::Alerts, enums::AlertType};
use rocket::serde::json::Json;
use serde::Serialize;

// The dashboard polls this endpoint, so the feed is capped
const ALERT_FEED_LIMIT: i64 = 50;

#[derive(Serialize)]
pub struct AlertCard {
    pub alert_id: i32,
    pub alert_type: AlertType,
    pub message: String,
    pub created_at: NaiveDateTime,
}

#[get("/alerts")]
pub async fn recent_alerts(conn: DbConn) -> Result<Json<Vec<AlertCard>>, ApiError> {
    let alerts = conn
        .run(|c| Alerts::latest(c, ALERT_FEED_LIMIT))
        .await
        .into_api_err()?;
    Ok(Json(
        alerts
            .into_iter()
            .map(|alert| AlertCard {
                alert_id: alert.get_id(),
                alert_type: alert.get_alert_type().clone(),
                message: alert.get_message().to_string(),
                created_at: *alert.get_created_at(),
            })
            .collect(),
    ))
}
