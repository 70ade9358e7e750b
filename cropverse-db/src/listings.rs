use crate::{
    crops::Crops,
    enums::ListingStatus,
    error::{CropDbError, CropDbResult as Result},
    farmers::Farmers,
    schema::listings,
    Cmp, Order,
};
use chrono::naive::NaiveDateTime;
use diesel::{prelude::*, sqlite::Sqlite};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pseudo struct used to manage the table `listings`
pub struct Listings;

impl Listings {
    // The storefront view: available stock only, newest first
    pub fn list_available(conn: &SqliteConnection) -> Result<Vec<ListingInfo>> {
        ListingFinder::new(conn, None)
            .status(ListingStatus::Available, Cmp::Equal)
            .order_by_listed_at(Order::Desc)
            .search_info()
    }
}

/// A listing creation request, yet to be validated against the database
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IncompleteListing {
    pub farmer_id: String,
    pub crop_id: String,
    pub quantity_kg: i64,
    pub price_per_kg: i64,
}

impl IncompleteListing {
    pub fn create(self, conn: &SqliteConnection) -> Result<ListingId> {
        use crate::schema::listings::dsl::*;

        if self.quantity_kg <= 0 || self.price_per_kg <= 0 {
            return Err(CropDbError::IllegalPriceOrQuantity);
        }

        // Both lookups double as existence checks on the referenced rows
        let farmer = Farmers::find_by_id(conn, &self.farmer_id)?;
        let crop = Crops::find_by_id(conn, &self.crop_id)?;

        let listing = ListingInfo {
            id: Uuid::new_v4().to_string(),
            farmer_id: farmer.get_id().to_string(),
            crop_id: crop.get_id().to_string(),
            quantity_kg: self.quantity_kg,
            price_per_kg: self.price_per_kg,
            status: ListingStatus::Available,
            listed_at: chrono::offset::Local::now().naive_utc(),
        };
        let id_cloned = listing.id.clone();
        diesel::insert_into(listings).values(listing).execute(conn)?;
        Ok(ListingId { id: id_cloned })
    }
}

// The ID referencing a single listing
#[derive(Debug, Serialize, Deserialize, Identifiable, Queryable, Clone)]
#[table_name = "listings"]
pub struct ListingId {
    id: String,
}

impl ListingId {
    pub fn new(id_provided: impl ToString) -> Self {
        Self {
            id: id_provided.to_string(),
        }
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_info(&self, conn: &SqliteConnection) -> Result<ListingInfo> {
        use crate::schema::listings::dsl::*;
        listings
            .filter(id.eq(&self.id))
            .first::<ListingInfo>(conn)
            .optional()?
            .ok_or(CropDbError::ListingNotFound)
    }
}

/// A single listing entry, corresponding to a row in the table `listings`
#[derive(
    Debug, Serialize, Deserialize, Queryable, Identifiable, Insertable, AsChangeset, Clone,
)]
#[table_name = "listings"]
pub struct ListingInfo {
    id: String,
    farmer_id: String,
    crop_id: String,
    quantity_kg: i64,
    price_per_kg: i64,
    status: ListingStatus,
    listed_at: NaiveDateTime,
}

impl ListingInfo {
    pub fn to_id(&self) -> ListingId {
        ListingId {
            id: self.id.clone(),
        }
    }

    /// Get a reference to the listing's id.
    pub fn get_id(&self) -> &str {
        &self.id
    }

    /// Get a reference to the listing's farmer id.
    pub fn get_farmer_id(&self) -> &str {
        &self.farmer_id
    }

    /// Get a reference to the listing's crop id.
    pub fn get_crop_id(&self) -> &str {
        &self.crop_id
    }

    /// Get the remaining quantity in kilograms.
    pub fn get_quantity_kg(&self) -> i64 {
        self.quantity_kg
    }

    /// Get the asking price per kilogram.
    pub fn get_price_per_kg(&self) -> i64 {
        self.price_per_kg
    }

    /// Get a reference to the listing's status.
    pub fn get_status(&self) -> &ListingStatus {
        &self.status
    }

    /// Get a reference to the time the listing was put up.
    pub fn get_listed_at(&self) -> &NaiveDateTime {
        &self.listed_at
    }
}

type BoxedQuery<'a> = listings::BoxedQuery<'a, Sqlite, listings::SqlType>;

/// A search query helper (builder)
pub struct ListingFinder<'a> {
    conn: &'a SqliteConnection,
    query: BoxedQuery<'a>,
}

impl<'a> ListingFinder<'a> {
    pub fn list_info(conn: &'a SqliteConnection) -> Result<Vec<ListingInfo>> {
        Self::new(conn, None).search_info()
    }

    pub fn new(conn: &'a SqliteConnection, query: Option<BoxedQuery<'a>>) -> Self {
        use crate::schema::listings::dsl::*;
        if let Some(q) = query {
            Self { conn, query: q }
        } else {
            Self {
                conn,
                query: listings.into_boxed(),
            }
        }
    }

    pub fn search_info(self) -> Result<Vec<ListingInfo>> {
        Ok(self.query.load::<ListingInfo>(self.conn)?)
    }

    pub fn first_info(self) -> Result<ListingInfo> {
        Ok(self.query.first::<ListingInfo>(self.conn)?)
    }

    pub fn id(mut self, id_provided: &'a str) -> Self {
        use crate::schema::listings::dsl::*;
        self.query = self.query.filter(id.eq(id_provided));
        self
    }

    pub fn farmer(mut self, farmer: &'a str) -> Self {
        use crate::schema::listings::dsl::*;
        self.query = self.query.filter(farmer_id.eq(farmer));
        self
    }

    pub fn crop(mut self, crop: &'a str) -> Self {
        use crate::schema::listings::dsl::*;
        self.query = self.query.filter(crop_id.eq(crop));
        self
    }

    pub fn status(mut self, status_provided: ListingStatus, cmp: Cmp) -> Self {
        use crate::schema::listings::dsl::*;
        match cmp {
            Cmp::Equal => self.query = self.query.filter(status.eq(status_provided)),
            Cmp::NotEqual => self.query = self.query.filter(status.ne(status_provided)),
            // Currently it makes no sense for us to do so
            _ => unimplemented!(),
        }
        self
    }

    pub fn price(mut self, price_provided: i64, cmp: Cmp) -> Self {
        use crate::schema::listings::dsl::*;
        match cmp {
            Cmp::GreaterThan => self.query = self.query.filter(price_per_kg.gt(price_provided)),
            Cmp::LessThan => self.query = self.query.filter(price_per_kg.lt(price_provided)),
            Cmp::GreaterEqual => self.query = self.query.filter(price_per_kg.ge(price_provided)),
            Cmp::LessEqual => self.query = self.query.filter(price_per_kg.le(price_provided)),
            Cmp::Equal => self.query = self.query.filter(price_per_kg.eq(price_provided)),
            Cmp::NotEqual => self.query = self.query.filter(price_per_kg.ne(price_provided)),
        }
        self
    }

    pub fn order_by_listed_at(mut self, order: Order) -> Self {
        use crate::schema::listings::dsl::*;
        match order {
            Order::Asc => self.query = self.query.order(listed_at.asc()),
            Order::Desc => self.query = self.query.order(listed_at.desc()),
        }
        self
    }
}

#[cfg(test)]
mod tests;
