// alert feed APIs
pub mod alerts;
// crop catalogue APIs
pub mod crops;
// listing APIs
pub mod listings;
// purchase APIs
pub mod orders;
// disease report APIs
pub mod reports;
