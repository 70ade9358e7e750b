use crate::{
    error::{CropDbError, CropDbResult as Result},
    schema::crops,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, sync::Arc};

/// A pseudo struct used to manage the table `crops`
pub struct Crops;

impl Crops {
    pub fn list(conn: &SqliteConnection) -> Result<Vec<Crop>> {
        use crate::schema::crops::dsl::*;
        Ok(crops.order(name.asc()).load::<Crop>(conn)?)
    }

    pub fn find_by_id(conn: &SqliteConnection, id_provided: &str) -> Result<Crop> {
        use crate::schema::crops::dsl::*;
        crops
            .filter(id.eq(id_provided))
            .first::<Crop>(conn)
            .optional()?
            .ok_or(CropDbError::CropNotFound)
    }
}

/// A crop in the catalogue, corresponding to a row in the table `crops`
#[derive(Debug, Serialize, Deserialize, Queryable, Identifiable, Insertable, AsChangeset, Clone)]
#[table_name = "crops"]
pub struct Crop {
    id: String,
    name: String,
}

impl Crop {
    // The catalogue is seeded from configuration, so IDs are always caller-provided slugs.
    pub fn create_with_id(
        conn: &SqliteConnection,
        name_provided: impl ToString,
        id_provided: impl ToString,
    ) -> Result<Self> {
        use crate::schema::crops::dsl::*;
        let crop = Crop {
            id: id_provided.to_string(),
            name: name_provided.to_string(),
        };

        if let Ok(0) = crops.filter(id.eq(&crop.id)).count().get_result(conn) {
            diesel::insert_into(crops).values(&crop).execute(conn)?
        } else {
            return Err(CropDbError::CropExisted);
        };
        Ok(crop)
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CropsBuilder {
    #[serde(rename = "crops")]
    inner: HashMap<Arc<str>, String>,
}

impl CropsBuilder {
    pub fn new(inner: HashMap<Arc<str>, String>) -> Self {
        Self { inner }
    }

    // Same idempotency contract as FarmersBuilder: listings reference crops.
    pub fn build(self, conn: &SqliteConnection) -> Result<()> {
        for (id, name) in self.inner {
            match Crop::create_with_id(conn, name, id) {
                Ok(_) | Err(CropDbError::CropExisted) => (),
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
