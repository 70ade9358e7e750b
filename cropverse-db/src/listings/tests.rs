use super::*;
use crate::{crops::Crop, farmers::Farmer, test_utils::establish_connection};

fn seed(conn: &SqliteConnection) -> (Farmer, Crop) {
    let farmer = Farmer::create(conn, "Abdul Karim", "Dhaka").unwrap();
    let crop = Crop::create_with_id(conn, "Rice", "rice").unwrap();
    (farmer, crop)
}

#[test]
fn create_listing() {
    let conn = establish_connection();
    let (farmer, crop) = seed(&conn);

    let listing_id = IncompleteListing {
        farmer_id: farmer.get_id().to_string(),
        crop_id: crop.get_id().to_string(),
        quantity_kg: 120,
        price_per_kg: 55,
    }
    .create(&conn)
    .unwrap();

    let info = listing_id.get_info(&conn).unwrap();
    assert_eq!(info.get_quantity_kg(), 120);
    assert_eq!(info.get_status(), &ListingStatus::Available);
    assert_eq!(ListingFinder::list_info(&conn).unwrap().len(), 1);
}

#[test]
fn nonpositive_amounts_rejected() {
    let conn = establish_connection();
    let (farmer, crop) = seed(&conn);

    let incomplete = IncompleteListing {
        farmer_id: farmer.get_id().to_string(),
        crop_id: crop.get_id().to_string(),
        quantity_kg: 0,
        price_per_kg: 55,
    };
    assert!(incomplete.clone().create(&conn).is_err());

    let incomplete = IncompleteListing {
        price_per_kg: -55,
        quantity_kg: 120,
        ..incomplete
    };
    assert!(incomplete.create(&conn).is_err());

    // Nothing was written on either attempt
    assert_eq!(ListingFinder::list_info(&conn).unwrap().len(), 0);
}

#[test]
fn unknown_references_rejected() {
    let conn = establish_connection();
    let (farmer, crop) = seed(&conn);

    let ghost_farmer = IncompleteListing {
        farmer_id: "no-such-farmer".to_string(),
        crop_id: crop.get_id().to_string(),
        quantity_kg: 120,
        price_per_kg: 55,
    };
    assert!(ghost_farmer.create(&conn).is_err());

    let ghost_crop = IncompleteListing {
        farmer_id: farmer.get_id().to_string(),
        crop_id: "mango".to_string(),
        quantity_kg: 120,
        price_per_kg: 55,
    };
    assert!(ghost_crop.create(&conn).is_err());
}

#[test]
fn missing_listing_not_found() {
    let conn = establish_connection();
    assert!(ListingId::new("no-such-listing").get_info(&conn).is_err());
}

#[test]
fn storefront_is_newest_first() {
    let conn = establish_connection();
    let (farmer, crop) = seed(&conn);
    let wheat = Crop::create_with_id(&conn, "Wheat", "wheat").unwrap();

    let older = IncompleteListing {
        farmer_id: farmer.get_id().to_string(),
        crop_id: crop.get_id().to_string(),
        quantity_kg: 120,
        price_per_kg: 55,
    }
    .create(&conn)
    .unwrap();
    let newer = IncompleteListing {
        farmer_id: farmer.get_id().to_string(),
        crop_id: wheat.get_id().to_string(),
        quantity_kg: 80,
        price_per_kg: 42,
    }
    .create(&conn)
    .unwrap();

    let storefront = Listings::list_available(&conn).unwrap();
    assert_eq!(storefront.len(), 2);
    assert_eq!(storefront[0].get_id(), newer.get_id());
    assert_eq!(storefront[1].get_id(), older.get_id());
}

#[test]
fn search_listings() {
    let conn = establish_connection();
    let (farmer, rice) = seed(&conn);
    let wheat = Crop::create_with_id(&conn, "Wheat", "wheat").unwrap();

    for (crop, price) in [(&rice, 55), (&rice, 48), (&wheat, 42)].iter() {
        IncompleteListing {
            farmer_id: farmer.get_id().to_string(),
            crop_id: crop.get_id().to_string(),
            quantity_kg: 100,
            price_per_kg: *price,
        }
        .create(&conn)
        .unwrap();
    }

    assert_eq!(
        ListingFinder::new(&conn, None)
            .crop("rice")
            .search_info()
            .unwrap()
            .len(),
        2
    );
    assert_eq!(
        ListingFinder::new(&conn, None)
            .farmer(farmer.get_id())
            .price(50, Cmp::LessThan)
            .search_info()
            .unwrap()
            .len(),
        2
    );

    let cheapest = ListingFinder::new(&conn, None)
        .price(42, Cmp::Equal)
        .first_info()
        .unwrap();
    assert_eq!(cheapest.get_crop_id(), "wheat");
    assert_eq!(cheapest.to_id().get_info(&conn).unwrap().get_price_per_kg(), 42);
}
