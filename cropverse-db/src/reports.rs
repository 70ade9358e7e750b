use crate::{
    crops::Crops,
    error::{CropDbError, CropDbResult as Result},
    farmers::Farmers,
    schema::disease_reports,
};
use chrono::naive::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pseudo struct used to manage the table `disease_reports`
pub struct DiseaseReports;

impl DiseaseReports {
    pub fn list(conn: &SqliteConnection) -> Result<Vec<DiseaseReport>> {
        use crate::schema::disease_reports::dsl::*;
        Ok(disease_reports
            .order(report_date.desc())
            .load::<DiseaseReport>(conn)?)
    }
}

/// A disease report as filed by a farmer, yet to be validated against the database
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IncompleteReport {
    pub farmer_id: String,
    pub crop_id: String,
    pub disease_name: String,
    pub severity: i32,
    pub notes: Option<String>,
    pub district: String,
}

impl IncompleteReport {
    // Returns the ID of the filed report. When severity crosses the threshold,
    // the database trigger raises the outbreak alert off this insert.
    pub fn file(self, conn: &SqliteConnection) -> Result<String> {
        use crate::schema::disease_reports::dsl::*;

        if self.severity < 1 || self.severity > 10 {
            return Err(CropDbError::SeverityOutOfRange);
        }

        let farmer = Farmers::find_by_id(conn, &self.farmer_id)?;
        let crop = Crops::find_by_id(conn, &self.crop_id)?;

        let report = DiseaseReport {
            id: Uuid::new_v4().to_string(),
            farmer_id: farmer.get_id().to_string(),
            crop_id: crop.get_id().to_string(),
            disease_name: self.disease_name,
            severity: self.severity,
            notes: self.notes.unwrap_or_default(),
            district: self.district,
            report_date: chrono::offset::Local::now().naive_utc(),
        };
        let id_cloned = report.id.clone();
        diesel::insert_into(disease_reports)
            .values(report)
            .execute(conn)?;
        Ok(id_cloned)
    }
}

/// A single disease report, corresponding to a row in the table `disease_reports`
#[derive(
    Debug, Serialize, Deserialize, Queryable, Identifiable, Insertable, AsChangeset, Clone,
)]
#[table_name = "disease_reports"]
pub struct DiseaseReport {
    id: String,
    farmer_id: String,
    crop_id: String,
    disease_name: String,
    severity: i32,
    notes: String,
    district: String,
    report_date: NaiveDateTime,
}

impl DiseaseReport {
    /// Get a reference to the report's id.
    pub fn get_id(&self) -> &str {
        &self.id
    }

    /// Get a reference to the reporting farmer's id.
    pub fn get_farmer_id(&self) -> &str {
        &self.farmer_id
    }

    /// Get a reference to the afflicted crop's id.
    pub fn get_crop_id(&self) -> &str {
        &self.crop_id
    }

    /// Get a reference to the disease name.
    pub fn get_disease_name(&self) -> &str {
        &self.disease_name
    }

    /// Get the reported severity on the 1-10 scale.
    pub fn get_severity(&self) -> i32 {
        self.severity
    }

    /// Get a reference to the free-form notes.
    pub fn get_notes(&self) -> &str {
        &self.notes
    }

    /// Get a reference to the district the report came from.
    pub fn get_district(&self) -> &str {
        &self.district
    }

    /// Get a reference to the time the report was filed.
    pub fn get_report_date(&self) -> &NaiveDateTime {
        &self.report_date
    }
}
