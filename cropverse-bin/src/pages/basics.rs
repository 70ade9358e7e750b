use crate::ApiError;
use rocket::http::Status;

#[get("/")]
pub async fn index() -> &'static str {
    "CropVerse backend is running"
}

// Preflights carry no body; the CORS fairing fills in the headers.
#[options("/<_..>")]
pub async fn preflight() -> Status {
    Status::NoContent
}

#[catch(400)]
pub async fn bad_request() -> ApiError {
    ApiError::new(Status::BadRequest, "malformed request")
}

#[catch(404)]
pub async fn not_found() -> ApiError {
    ApiError::new(Status::NotFound, "resource not found")
}

#[catch(422)]
pub async fn unprocessable() -> ApiError {
    ApiError::new(
        Status::UnprocessableEntity,
        "missing or malformed fields in request body",
    )
}

#[catch(500)]
pub async fn internal_error() -> ApiError {
    ApiError::new(Status::InternalServerError, "internal server error")
}
