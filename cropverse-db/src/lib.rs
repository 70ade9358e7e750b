// For the time being, the diesel doesn't play well without macro use, see also: https://github.com/diesel-rs/diesel/issues/1894
#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;

pub mod alerts;
pub mod crops;
pub mod enums;
pub mod error;
pub mod farmers;
pub mod listings;
pub mod reports;
#[rustfmt::skip]
mod schema;
pub mod test_utils;
pub mod transactions;

/// Enum representing order
pub enum Order {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

/// Enum used for comparison operation
pub enum Cmp {
    /// Greater than
    GreaterThan,
    /// Less than,
    LessThan,
    /// Greater than or equal to,
    GreaterEqual,
    /// Less than or equal to
    LessEqual,
    /// Equal to
    Equal,
    /// Not equal to
    NotEqual,
}
