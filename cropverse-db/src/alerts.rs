use crate::{enums::AlertType, error::CropDbResult as Result, schema::alerts};
use chrono::naive::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A pseudo struct used to manage the table `alerts`
pub struct Alerts;

impl Alerts {
    // Newest first; the rowid breaks ties since CURRENT_TIMESTAMP only carries seconds
    pub fn latest(conn: &SqliteConnection, limit_provided: i64) -> Result<Vec<Alert>> {
        use crate::schema::alerts::dsl::*;
        Ok(alerts
            .order(created_at.desc())
            .then_order_by(id.desc())
            .limit(limit_provided)
            .load::<Alert>(conn)?)
    }

    // The database triggers insert most alerts; manual announcements go through here.
    pub fn create(
        conn: &SqliteConnection,
        alert_type_p: AlertType,
        message_p: impl ToString,
    ) -> Result<()> {
        use crate::schema::alerts::dsl::*;
        diesel::insert_into(alerts)
            .values((alert_type.eq(alert_type_p), message.eq(message_p.to_string())))
            .execute(conn)?;
        Ok(())
    }
}

/// A single alert, corresponding to a row in the table `alerts`
#[derive(Debug, Serialize, Deserialize, Queryable, Identifiable, Clone)]
#[table_name = "alerts"]
pub struct Alert {
    id: i32,
    alert_type: AlertType,
    message: String,
    created_at: NaiveDateTime,
}

impl Alert {
    /// Get the alert's id.
    pub fn get_id(&self) -> i32 {
        self.id
    }

    /// Get a reference to the alert's type.
    pub fn get_alert_type(&self) -> &AlertType {
        &self.alert_type
    }

    /// Get a reference to the alert's message.
    pub fn get_message(&self) -> &str {
        &self.message
    }

    /// Get a reference to the time the alert was raised.
    pub fn get_created_at(&self) -> &NaiveDateTime {
        &self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::establish_connection;

    #[test]
    fn latest_is_newest_first_and_bounded() {
        let conn = establish_connection();
        Alerts::create(&conn, AlertType::SoldOut, "first").unwrap();
        Alerts::create(&conn, AlertType::DiseaseOutbreak, "second").unwrap();
        Alerts::create(&conn, AlertType::DiseaseOutbreak, "third").unwrap();

        let all = Alerts::latest(&conn, 50).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].get_message(), "third");
        assert_eq!(all[0].get_alert_type(), &AlertType::DiseaseOutbreak);
        assert_eq!(all[2].get_message(), "first");
        assert!(all[0].get_created_at() >= all[2].get_created_at());

        let bounded = Alerts::latest(&conn, 2).unwrap();
        assert_eq!(bounded.len(), 2);
        assert_eq!(bounded[1].get_id(), all[1].get_id());
    }
}
