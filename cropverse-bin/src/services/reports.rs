use crate::{ApiError, DbConn, IntoApiErr};
use cropverse_db::reports::IncompleteReport;
use rocket::serde::json::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ReportFiled {
    pub report_id: String,
}

// The severity threshold lives in the database: reports at 8 or above
// raise an outbreak alert through the trigger on this insert.
#[post("/disease-reports", data = "<report>")]
pub async fn create_report(
    report: Json<IncompleteReport>,
    conn: DbConn,
) -> Result<Json<ReportFiled>, ApiError> {
    let report_id = conn
        .run(move |c| report.into_inner().file(c))
        .await
        .into_api_err()?;
    Ok(Json(ReportFiled { report_id }))
}
