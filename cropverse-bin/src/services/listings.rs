use crate::{ApiError, DbConn, IntoApiErr};
use chrono::naive::NaiveDateTime;
use cropverse_db::{
    crops::Crops,
    enums::ListingStatus,
    error::CropDbError,
    farmers::Farmers,
    listings::{IncompleteListing, ListingFinder},
    Cmp, Order,
};
use rocket::serde::json::Json;
use serde::Serialize;

/// A listing as shown on the storefront, with the farmer and crop resolved
#[derive(Serialize)]
pub struct ListingCard {
    pub listing_id: String,
    pub farmer_name: String,
    pub district: String,
    pub crop_name: String,
    pub quantity_kg: i64,
    pub price_per_kg: i64,
    pub status: ListingStatus,
    pub listed_at: NaiveDateTime,
}

#[get("/listings?<crop>")]
pub async fn all_listings(
    crop: Option<String>,
    conn: DbConn,
) -> Result<Json<Vec<ListingCard>>, ApiError> {
    let cards = conn
        .run(move |c| -> Result<Vec<ListingCard>, CropDbError> {
            let mut finder = ListingFinder::new(c, None)
                .status(ListingStatus::Available, Cmp::Equal)
                .order_by_listed_at(Order::Desc);
            if let Some(crop) = crop.as_deref() {
                finder = finder.crop(crop);
            }

            finder
                .search_info()?
                .into_iter()
                .map(|listing| {
                    let farmer = Farmers::find_by_id(c, listing.get_farmer_id())?;
                    let crop = Crops::find_by_id(c, listing.get_crop_id())?;
                    Ok(ListingCard {
                        listing_id: listing.get_id().to_string(),
                        farmer_name: farmer.get_name().to_string(),
                        district: farmer.get_district().to_string(),
                        crop_name: crop.get_name().to_string(),
                        quantity_kg: listing.get_quantity_kg(),
                        price_per_kg: listing.get_price_per_kg(),
                        status: listing.get_status().clone(),
                        listed_at: *listing.get_listed_at(),
                    })
                })
                .collect()
        })
        .await
        .into_api_err()?;
    Ok(Json(cards))
}

#[derive(Serialize)]
pub struct ListingCreated {
    pub listing_id: String,
}

#[post("/listings", data = "<info>")]
pub async fn create_listing(
    info: Json<IncompleteListing>,
    conn: DbConn,
) -> Result<Json<ListingCreated>, ApiError> {
    let listing_id = conn
        .run(move |c| info.into_inner().create(c))
        .await
        .into_api_err()?;
    Ok(Json(ListingCreated {
        listing_id: listing_id.get_id().to_string(),
    }))
}
