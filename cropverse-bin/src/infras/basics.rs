use cropverse_db::error::CropDbError;
use rocket::{
    fairing::{Fairing, Info, Kind},
    http::{Header, Status},
    response::{self, Responder},
    serde::json::Json,
    Request, Response,
};
use serde::Serialize;

/// The uniform error body: every failing request answers with `{"error": "..."}`.
#[derive(Serialize)]
pub struct ErrMsg {
    pub error: String,
}

// An error response carrying its HTTP status
pub struct ApiError {
    status: Status,
    body: ErrMsg,
}

impl ApiError {
    pub fn new(status: Status, error: impl ToString) -> Self {
        Self {
            status,
            body: ErrMsg {
                error: error.to_string(),
            },
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let mut resp = Json(self.body).respond_to(req)?;
        resp.set_status(self.status);
        Ok(resp)
    }
}

impl From<CropDbError> for ApiError {
    fn from(e: CropDbError) -> Self {
        let status = match &e {
            CropDbError::FarmerNotFound
            | CropDbError::CropNotFound
            | CropDbError::ListingNotFound => Status::NotFound,
            CropDbError::ListingNotAvailable
            | CropDbError::IllegalPriceOrQuantity
            | CropDbError::InsufficientQuantity { .. }
            | CropDbError::SeverityOutOfRange => Status::BadRequest,
            _ => {
                log::error!("request failed on the database layer: {}", e);
                Status::InternalServerError
            }
        };
        Self::new(status, e)
    }
}

pub trait IntoApiErr<T> {
    fn into_api_err(self) -> Result<T, ApiError>;
}

impl<T> IntoApiErr<T> for Result<T, CropDbError> {
    fn into_api_err(self) -> Result<T, ApiError> {
        self.map_err(ApiError::from)
    }
}

// The dashboard is served from another origin, so every response carries CORS
// headers; preflights are answered by the catch-all OPTIONS route.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _req: &'r Request<'_>, resp: &mut Response<'r>) {
        resp.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        resp.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, OPTIONS",
        ));
        resp.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type"));
    }
}
