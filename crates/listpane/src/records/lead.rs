//! The sales-lead roster.

use listpane_export::Column;
use listpane_seeker::{Number, Seekable, Value};
use serde::{Deserialize, Serialize};

use crate::error::ViewError;
use crate::view::{FilterField, ViewSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub source: String,
    pub status: String,
    pub sales_rep: String,
}

impl Lead {
    pub fn new(id: u32, name: &str, email: &str, source: &str, status: &str, sales_rep: &str) -> Self {
        Lead {
            id,
            name: name.to_string(),
            email: email.to_string(),
            source: source.to_string(),
            status: status.to_string(),
            sales_rep: sales_rep.to_string(),
        }
    }
}

impl Seekable for Lead {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match field {
            "id" => Value::Number(Number::from(self.id)),
            "name" => Value::String(&self.name),
            "email" => Value::String(&self.email),
            "source" => Value::String(&self.source),
            "status" => Value::String(&self.status),
            "sales_rep" => Value::String(&self.sales_rep),
            _ => Value::None,
        }
    }
}

/// The "Lead Management" view. Its select options come from the data.
pub fn schema() -> Result<ViewSchema<Lead>, ViewError> {
    ViewSchema::builder("Lead Management")
        .search_fields(["name", "email", "source"])
        .filter(FilterField::distinct("status", "All Statuses"))
        .filter(FilterField::distinct("source", "All Sources"))
        .filter(FilterField::distinct("sales_rep", "All Sales Reps"))
        .column(Column::field("Name", "name"))
        .column(Column::field("Email", "email"))
        .column(Column::field("Source", "source"))
        .column(Column::field("Status", "status"))
        .column(Column::field("Sales Rep", "sales_rep"))
        .export_filename("leads.csv")
        .build()
}

pub fn sample_leads() -> Vec<Lead> {
    vec![
        Lead::new(1, "John Doe", "john@example.com", "Website", "New", "Alice"),
        Lead::new(2, "Jane Smith", "jane@example.com", "Referral", "Contacted", "Bob"),
        Lead::new(3, "Bob Johnson", "bob@example.com", "Social Media", "Qualified", "Charlie"),
        Lead::new(4, "Alice Brown", "alice@example.com", "Website", "In Progress", "David"),
        Lead::new(5, "Charlie Wilson", "charlie@example.com", "Ad Campaign", "Closed", "Eve"),
        Lead::new(6, "Emily Davis", "emily@example.com", "Webinar", "New", "Frank"),
        Lead::new(7, "Michael Clark", "michael@example.com", "Cold Call", "Contacted", "Grace"),
        Lead::new(8, "Sarah White", "sarah@example.com", "Email Campaign", "Qualified", "Hank"),
        Lead::new(9, "James Harris", "james@example.com", "Website", "In Progress", "Ivy"),
        Lead::new(10, "Sophia Miller", "sophia@example.com", "Referral", "Closed", "Jack"),
        Lead::new(11, "Oliver King", "oliver@example.com", "Social Media", "New", "Kate"),
        Lead::new(12, "Ava Scott", "ava@example.com", "Webinar", "Contacted", "Leo"),
        Lead::new(13, "William Adams", "william@example.com", "Cold Call", "Qualified", "Mia"),
        Lead::new(14, "Isabella Lee", "isabella@example.com", "Email Campaign", "In Progress", "Nick"),
        Lead::new(15, "Lucas Green", "lucas@example.com", "Ad Campaign", "Closed", "Olivia"),
        Lead::new(16, "Charlotte Evans", "charlotte@example.com", "Website", "New", "Paul"),
        Lead::new(17, "Liam Mitchell", "liam@example.com", "Referral", "Contacted", "Quinn"),
        Lead::new(18, "Mason Roberts", "mason@example.com", "Social Media", "Qualified", "Rachel"),
        Lead::new(19, "Mia Thomas", "mia@example.com", "Webinar", "In Progress", "Sam"),
        Lead::new(20, "Amelia Walker", "amelia@example.com", "Cold Call", "Closed", "Tom"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_camel_case_rep() {
        let lead = &sample_leads()[0];
        let json = serde_json::to_value(lead).unwrap();
        assert_eq!(json["salesRep"], "Alice");

        let back: Lead = serde_json::from_value(json).unwrap();
        assert_eq!(&back, lead);
    }

    #[test]
    fn schema_builds() {
        let schema = schema().unwrap();
        assert_eq!(schema.export_filename(), "leads.csv");
        assert!(schema.range_filter().is_none());
    }
}
