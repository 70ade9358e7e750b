use crate::{
    enums::ListingStatus,
    error::{CropDbError, CropDbResult as Result},
    listings::ListingId,
    schema::transactions,
};
use chrono::naive::NaiveDateTime;
use diesel::{prelude::*, sqlite::Sqlite};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// A pseudo struct for managing transactions
pub struct Transactions;

impl Transactions {
    // The whole read-validate-insert sequence runs in one database transaction:
    // a concurrent purchase cannot invalidate the quantity we just checked.
    pub fn purchase(
        conn: &SqliteConnection,
        listing_p: &ListingId,
        buyer_p: &str,
        quantity_p: i64,
    ) -> Result<TransactionId> {
        use crate::schema::transactions::dsl::*;

        conn.transaction(|| {
            let listing = listing_p.get_info(conn)?;

            if listing.get_status() != &ListingStatus::Available {
                return Err(CropDbError::ListingNotAvailable);
            }
            if quantity_p <= 0 {
                return Err(CropDbError::IllegalPriceOrQuantity);
            }
            if quantity_p > listing.get_quantity_kg() {
                return Err(CropDbError::InsufficientQuantity {
                    available: listing.get_quantity_kg(),
                });
            }

            let id_cloned = Uuid::new_v4();
            let tx = TransactionInfo {
                id: id_cloned.to_string(),
                listing_id: listing.get_id().to_string(),
                buyer_id: buyer_p.to_string(),
                quantity_bought: quantity_p,
                total_price: listing.get_price_per_kg() * quantity_p,
                transaction_date: chrono::offset::Local::now().naive_utc(),
            };

            // The stock decrement and, on a drained listing, the status change
            // and sold-out alert are derived by the database triggers off this insert.
            diesel::insert_into(transactions).values(tx).execute(conn)?;

            Ok(TransactionId {
                id: id_cloned.to_string(),
            })
        })
    }
}

// The ID referencing a single transaction
#[derive(Debug, Serialize, Deserialize, Identifiable, Queryable, Clone)]
#[table_name = "transactions"]
pub struct TransactionId {
    id: String,
}

impl TransactionId {
    pub fn to_uuid(&self) -> Result<Uuid> {
        Ok(<Uuid as std::str::FromStr>::from_str(&self.id)?)
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_info(&self, conn: &SqliteConnection) -> Result<TransactionInfo> {
        use crate::schema::transactions::dsl::*;
        Ok(transactions
            .filter(id.eq(&self.id))
            .first::<TransactionInfo>(conn)?)
    }
}

/// A single transaction entry, corresponding to a row in the table `transactions`
#[derive(
    Debug, Serialize, Deserialize, Queryable, Identifiable, Insertable, AsChangeset, Clone,
)]
#[table_name = "transactions"]
pub struct TransactionInfo {
    id: String,
    listing_id: String,
    buyer_id: String,
    quantity_bought: i64,
    total_price: i64,
    transaction_date: NaiveDateTime,
}

impl TransactionInfo {
    /// Get a reference to the transaction's id.
    pub fn get_id(&self) -> &str {
        &self.id
    }

    /// Get a reference to the purchased listing's id.
    pub fn get_listing_id(&self) -> &str {
        &self.listing_id
    }

    /// Get a reference to the buyer's id.
    pub fn get_buyer_id(&self) -> &str {
        &self.buyer_id
    }

    /// Get the purchased quantity in kilograms.
    pub fn get_quantity_bought(&self) -> i64 {
        self.quantity_bought
    }

    /// Get the total price settled for the purchase.
    pub fn get_total_price(&self) -> i64 {
        self.total_price
    }

    /// Get a reference to the time the purchase went through.
    pub fn get_transaction_date(&self) -> &NaiveDateTime {
        &self.transaction_date
    }
}

type BoxedQuery<'a> = transactions::BoxedQuery<'a, Sqlite, transactions::SqlType>;

/// A search query helper (builder)
pub struct TransactionFinder<'a> {
    conn: &'a SqliteConnection,
    query: BoxedQuery<'a>,
}

impl<'a> TransactionFinder<'a> {
    pub fn list_info(conn: &'a SqliteConnection) -> Result<Vec<TransactionInfo>> {
        Self::new(conn, None).search_info()
    }

    pub fn new(conn: &'a SqliteConnection, query: Option<BoxedQuery<'a>>) -> Self {
        use crate::schema::transactions::dsl::*;
        if let Some(q) = query {
            Self { conn, query: q }
        } else {
            Self {
                conn,
                query: transactions.into_boxed(),
            }
        }
    }

    pub fn search_info(self) -> Result<Vec<TransactionInfo>> {
        Ok(self.query.load::<TransactionInfo>(self.conn)?)
    }

    pub fn buyer(mut self, buyer: &'a str) -> Self {
        use crate::schema::transactions::dsl::*;
        self.query = self.query.filter(buyer_id.eq(buyer));
        self
    }

    pub fn listing(mut self, listing: &'a str) -> Self {
        use crate::schema::transactions::dsl::*;
        self.query = self.query.filter(listing_id.eq(listing));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        alerts::Alerts,
        crops::Crop,
        enums::AlertType,
        farmers::Farmer,
        listings::IncompleteListing,
        test_utils::establish_connection,
    };

    fn listing_of(conn: &SqliteConnection, quantity_kg: i64, price_per_kg: i64) -> ListingId {
        let farmer = Farmer::create(conn, "Abdul Karim", "Dhaka").unwrap();
        let crop = Crop::create_with_id(conn, "Rice", "rice").unwrap();
        IncompleteListing {
            farmer_id: farmer.get_id().to_string(),
            crop_id: crop.get_id().to_string(),
            quantity_kg,
            price_per_kg,
        }
        .create(conn)
        .unwrap()
    }

    #[test]
    fn purchase_decrements_stock() {
        let conn = establish_connection();
        let listing = listing_of(&conn, 100, 40);

        let tx = Transactions::purchase(&conn, &listing, "buyer-demo", 30).unwrap();
        // IDs are genuine v4 UUIDs
        tx.to_uuid().unwrap();

        let info = tx.get_info(&conn).unwrap();
        assert_eq!(info.get_total_price(), 1200);
        assert_eq!(info.get_quantity_bought(), 30);
        assert_eq!(info.get_buyer_id(), "buyer-demo");
        assert_eq!(info.get_listing_id(), listing.get_id());

        // The trigger took the purchase out of the listing
        let listing_info = listing.get_info(&conn).unwrap();
        assert_eq!(listing_info.get_quantity_kg(), 70);
        assert_eq!(listing_info.get_status(), &ListingStatus::Available);
        // ... without announcing anything yet
        assert_eq!(Alerts::latest(&conn, 50).unwrap().len(), 0);
    }

    #[test]
    fn drained_listing_is_closed_and_announced() {
        let conn = establish_connection();
        let listing = listing_of(&conn, 100, 40);

        Transactions::purchase(&conn, &listing, "buyer-demo", 30).unwrap();
        Transactions::purchase(&conn, &listing, "buyer-other", 70).unwrap();

        let listing_info = listing.get_info(&conn).unwrap();
        assert_eq!(listing_info.get_quantity_kg(), 0);
        assert_eq!(listing_info.get_status(), &ListingStatus::SoldOut);

        let alerts = Alerts::latest(&conn, 50).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].get_alert_type(), &AlertType::SoldOut);
        assert!(alerts[0].get_message().contains("Rice"));

        // Sold out listings are no longer subject to purchases
        assert!(Transactions::purchase(&conn, &listing, "buyer-late", 1).is_err());

        assert_eq!(TransactionFinder::list_info(&conn).unwrap().len(), 2);
        assert_eq!(
            TransactionFinder::new(&conn, None)
                .buyer("buyer-other")
                .search_info()
                .unwrap()
                .len(),
            1
        );
        assert_eq!(
            TransactionFinder::new(&conn, None)
                .listing(listing.get_id())
                .search_info()
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn invalid_purchases_rejected() {
        let conn = establish_connection();
        let listing = listing_of(&conn, 100, 40);

        // Quantity must be positive
        assert!(Transactions::purchase(&conn, &listing, "buyer-demo", 0).is_err());
        // ... and within the remaining stock
        match Transactions::purchase(&conn, &listing, "buyer-demo", 150) {
            Err(CropDbError::InsufficientQuantity { available }) => assert_eq!(available, 100),
            other => panic!("expected insufficient quantity, got {:?}", other.map(|t| t.get_id().to_string())),
        }
        // The listing has to exist in the first place
        assert!(
            Transactions::purchase(&conn, &ListingId::new("no-such-listing"), "buyer-demo", 1)
                .is_err()
        );

        // No partial writes: the listing is untouched and no transaction was recorded
        assert_eq!(listing.get_info(&conn).unwrap().get_quantity_kg(), 100);
        assert_eq!(TransactionFinder::list_info(&conn).unwrap().len(), 0);
    }
}
