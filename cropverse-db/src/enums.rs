use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};

// The stored values ('available', 'sold_out', ...) are also written by the
// triggers in the migrations, so the style is pinned rather than implied.
#[derive(DbEnum, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[DbValueStyle = "snake_case"]
pub enum ListingStatus {
    // The listing still has stock left and can be purchased
    Available,
    // Stock has been drained down to zero
    SoldOut,
}

impl Default for ListingStatus {
    fn default() -> Self {
        Self::Available
    }
}

#[derive(DbEnum, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[DbValueStyle = "snake_case"]
pub enum AlertType {
    // Raised by the database when a disease report crosses the severity threshold
    DiseaseOutbreak,
    // Raised by the database when a purchase drains a listing
    SoldOut,
}
