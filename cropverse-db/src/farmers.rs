use crate::{
    error::{CropDbError, CropDbResult as Result},
    schema::farmers,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, sync::Arc};
use uuid::Uuid;

/// A pseudo struct used to manage the table `farmers`
pub struct Farmers;

impl Farmers {
    pub fn list(conn: &SqliteConnection) -> Result<Vec<Farmer>> {
        use crate::schema::farmers::dsl::*;
        Ok(farmers.load::<Farmer>(conn)?)
    }

    pub fn find_by_id(conn: &SqliteConnection, id_provided: &str) -> Result<Farmer> {
        use crate::schema::farmers::dsl::*;
        farmers
            .filter(id.eq(id_provided))
            .first::<Farmer>(conn)
            .optional()?
            .ok_or(CropDbError::FarmerNotFound)
    }
}

/// A single farmer, corresponding to a row in the table `farmers`
#[derive(Debug, Serialize, Deserialize, Queryable, Identifiable, Insertable, AsChangeset, Clone)]
#[table_name = "farmers"]
pub struct Farmer {
    id: String,
    name: String,
    district: String,
}

impl Farmer {
    fn new(id: impl ToString, name: impl ToString, district: impl ToString) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            district: district.to_string(),
        }
    }

    // Register a new farmer with a random UUID
    pub fn create(
        conn: &SqliteConnection,
        name_provided: impl ToString,
        district_provided: impl ToString,
    ) -> Result<Self> {
        Self::create_with_id(
            conn,
            name_provided,
            district_provided,
            Uuid::new_v4().to_string(),
        )
    }

    // Register a new farmer with a specific ID (seeding uses human-readable ones)
    pub fn create_with_id(
        conn: &SqliteConnection,
        name_provided: impl ToString,
        district_provided: impl ToString,
        id_provided: impl ToString,
    ) -> Result<Self> {
        use crate::schema::farmers::dsl::*;
        let farmer = Farmer::new(id_provided, name_provided, district_provided);

        if let Ok(0) = farmers.filter(id.eq(&farmer.id)).count().get_result(conn) {
            diesel::insert_into(farmers).values(&farmer).execute(conn)?
        } else {
            return Err(CropDbError::FarmerExisted);
        };
        Ok(farmer)
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_district(&self) -> &str {
        &self.district
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Value {
    pub name: String,
    pub district: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FarmersBuilder {
    #[serde(rename = "farmers")]
    inner: HashMap<Arc<str>, Value>,
}

impl FarmersBuilder {
    pub fn new(inner: HashMap<Arc<str>, Value>) -> Self {
        Self { inner }
    }

    // Listings hold foreign keys into farmers, so seeding leaves existing rows alone
    // rather than deleting and recreating them.
    pub fn build(self, conn: &SqliteConnection) -> Result<()> {
        for (id, value) in self.inner {
            match Farmer::create_with_id(conn, &value.name, &value.district, id) {
                Ok(_) | Err(CropDbError::FarmerExisted) => (),
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::establish_connection;

    #[test]
    fn create_farmer() {
        let conn = establish_connection();
        let farmer = Farmer::create(&conn, "Abdul Karim", "Dhaka").unwrap();
        assert_eq!(
            Farmers::find_by_id(&conn, farmer.get_id())
                .unwrap()
                .get_district(),
            "Dhaka"
        );
        assert!(Farmers::find_by_id(&conn, "no-such-farmer").is_err());
    }

    #[test]
    fn duplicated_id_rejected() {
        let conn = establish_connection();
        Farmer::create_with_id(&conn, "Abdul Karim", "Dhaka", "farmer-demo").unwrap();
        assert!(Farmer::create_with_id(&conn, "Someone Else", "Khulna", "farmer-demo").is_err());
    }

    #[test]
    fn seeding_is_idempotent() {
        let conn = establish_connection();
        let mut inner = HashMap::new();
        inner.insert(
            Arc::from("farmer-demo"),
            Value {
                name: "Demo Farmer".to_string(),
                district: "Dhaka".to_string(),
            },
        );

        FarmersBuilder::new(inner.clone()).build(&conn).unwrap();
        // A second startup must not duplicate or overwrite
        FarmersBuilder::new(inner).build(&conn).unwrap();
        assert_eq!(Farmers::list(&conn).unwrap().len(), 1);
    }
}
