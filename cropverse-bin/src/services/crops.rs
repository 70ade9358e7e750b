use crate::{ApiError, DbConn, IntoApiErr};
use cropverse_db::crops::Crops;
use rocket::serde::json::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct CropCard {
    pub crop_id: String,
    pub crop_name: String,
}

// The catalogue clients build their crop pickers from
#[get("/crops")]
pub async fn all_crops(conn: DbConn) -> Result<Json<Vec<CropCard>>, ApiError> {
    let catalogue = conn.run(|c| Crops::list(c)).await.into_api_err()?;
    Ok(Json(
        catalogue
            .into_iter()
            .map(|crop| CropCard {
                crop_id: crop.get_id().to_string(),
                crop_name: crop.get_name().to_string(),
            })
            .collect(),
    ))
}
