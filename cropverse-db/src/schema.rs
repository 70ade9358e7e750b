table! {
    farmers (id) {
        id -> Text,
        name -> Text,
        district -> Text,
    }
}

table! {
    crops (id) {
        id -> Text,
        name -> Text,
    }
}

table! {
    use diesel::sql_types::*;
    use crate::enums::ListingStatusMapping;

    listings (id) {
        id -> Text,
        farmer_id -> Text,
        crop_id -> Text,
        quantity_kg -> BigInt,
        price_per_kg -> BigInt,
        status -> ListingStatusMapping,
        listed_at -> Timestamp,
    }
}

table! {
    disease_reports (id) {
        id -> Text,
        farmer_id -> Text,
        crop_id -> Text,
        disease_name -> Text,
        severity -> Integer,
        notes -> Text,
        district -> Text,
        report_date -> Timestamp,
    }
}

table! {
    transactions (id) {
        id -> Text,
        listing_id -> Text,
        buyer_id -> Text,
        quantity_bought -> BigInt,
        total_price -> BigInt,
        transaction_date -> Timestamp,
    }
}

table! {
    use diesel::sql_types::*;
    use crate::enums::AlertTypeMapping;

    alerts (id) {
        id -> Integer,
        alert_type -> AlertTypeMapping,
        message -> Text,
        created_at -> Timestamp,
    }
}

joinable!(listings -> farmers (farmer_id));
joinable!(listings -> crops (crop_id));
joinable!(disease_reports -> farmers (farmer_id));
joinable!(disease_reports -> crops (crop_id));
joinable!(transactions -> listings (listing_id));

allow_tables_to_appear_in_same_query!(
    farmers,
    crops,
    listings,
    disease_reports,
    transactions,
    alerts,
);
