use thiserror::Error;

pub type CropDbResult<T> = Result<T, CropDbError>;

#[derive(Error, Debug)]
pub enum CropDbError {
    #[error("database query failed with: {0}")]
    QueryError(#[from] diesel::result::Error),

    #[error("failed to parse uuid: {0}")]
    UuidError(#[from] uuid::Error),

    #[error("farmer doesn't exist")]
    FarmerNotFound,

    #[error("crop doesn't exist")]
    CropNotFound,

    #[error("listing doesn't exist")]
    ListingNotFound,

    #[error("listing is not available")]
    ListingNotAvailable,

    #[error("quantity and price are required to be positive")]
    IllegalPriceOrQuantity,

    #[error("only {available} kg available")]
    InsufficientQuantity { available: i64 },

    #[error("severity is required to lie between 1 and 10")]
    SeverityOutOfRange,

    #[error("crop already existed")]
    CropExisted,

    #[error("farmer already existed")]
    FarmerExisted,
}
