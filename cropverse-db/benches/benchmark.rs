use criterion::{criterion_group, criterion_main, Criterion};
use cropverse_db::{
    crops::Crop,
    enums::ListingStatus,
    farmers::Farmer,
    listings::{IncompleteListing, ListingFinder, Listings},
    test_utils::establish_connection,
    Cmp,
};

fn listings(c: &mut Criterion) {
    let conn = establish_connection();
    let farmer = Farmer::create(&conn, "Abdul Karim", "Dhaka").unwrap();
    let rice = Crop::create_with_id(&conn, "Rice", "rice").unwrap();
    let wheat = Crop::create_with_id(&conn, "Wheat", "wheat").unwrap();

    for i in 0..200i64 {
        let crop = if i % 2 == 0 { &rice } else { &wheat };
        IncompleteListing {
            farmer_id: farmer.get_id().to_string(),
            crop_id: crop.get_id().to_string(),
            quantity_kg: 100,
            price_per_kg: 40 + (i % 25),
        }
        .create(&conn)
        .unwrap();
    }

    c.bench_function("search listings by crop and price", |b| {
        b.iter(|| {
            ListingFinder::new(&conn, None)
                .crop("rice")
                .price(45, Cmp::LessThan)
                .status(ListingStatus::Available, Cmp::Equal)
                .search_info()
                .unwrap()
        })
    });

    c.bench_function("storefront listing", |b| {
        b.iter(|| Listings::list_available(&conn).unwrap())
    });
}

criterion_group!(benches, listings);
criterion_main!(benches);
