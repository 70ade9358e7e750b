use crate::{ApiError, DbConn, IntoApiErr};
use cropverse_db::{
    error::CropDbError,
    listings::ListingId,
    transactions::{TransactionInfo, Transactions},
};
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};

/// The body of a purchase request
#[derive(Debug, Deserialize, Clone)]
pub struct PurchaseOrder {
    pub listing_id: String,
    pub buyer_id: String,
    pub quantity_bought: i64,
}

#[derive(Serialize)]
pub struct PurchaseReceipt {
    pub transaction_id: String,
    pub total_price: i64,
}

#[post("/purchase", data = "<order>")]
pub async fn purchase(
    order: Json<PurchaseOrder>,
    conn: DbConn,
) -> Result<Json<PurchaseReceipt>, ApiError> {
    let info = conn
        .run(move |c| -> Result<TransactionInfo, CropDbError> {
            let order = order.into_inner();
            Transactions::purchase(
                c,
                &ListingId::new(&order.listing_id),
                &order.buyer_id,
                order.quantity_bought,
            )?
            .get_info(c)
        })
        .await
        .into_api_err()?;

    Ok(Json(PurchaseReceipt {
        transaction_id: info.get_id().to_string(),
        total_price: info.get_total_price(),
    }))
}
