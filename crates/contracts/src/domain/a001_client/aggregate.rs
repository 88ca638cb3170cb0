use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{de_i64, de_opt_id, de_string, id_to_input};
use crate::domain::common::{Entity, EntityKind, RecordStatus};
use crate::shared::form::{FieldKind, FieldSpec, FormValues};
use crate::shared::list_query::FilterSpec;

// ============================================================================
// Record
// ============================================================================

/// Customer buying finished goods.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Client {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    #[serde(deserialize_with = "de_string")]
    pub name: String,
    #[serde(deserialize_with = "de_string", alias = "contactPerson")]
    pub contact_person: String,
    #[serde(deserialize_with = "de_string")]
    pub email: String,
    #[serde(deserialize_with = "de_string")]
    pub phone: String,
    #[serde(deserialize_with = "de_string")]
    pub address: String,
    #[serde(deserialize_with = "de_string")]
    pub city: String,
    #[serde(deserialize_with = "de_string", alias = "gstNumber")]
    pub gst_number: String,
    #[serde(deserialize_with = "de_opt_id", alias = "clientTypeId")]
    pub client_type_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "clientTypeName")]
    pub client_type_name: String,
    #[serde(deserialize_with = "de_opt_id", alias = "paymentTermId")]
    pub payment_term_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "paymentTermName")]
    pub payment_term_name: String,
    pub status: RecordStatus,
    #[serde(deserialize_with = "de_string", alias = "createdAt")]
    pub created_at: String,
}

// ============================================================================
// Form & filters
// ============================================================================

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Client Name", FieldKind::Text),
    FieldSpec::required("contact_person", "Contact Person", FieldKind::Text),
    FieldSpec::required("email", "Email", FieldKind::Email),
    FieldSpec::required("phone", "Phone", FieldKind::Text),
    FieldSpec::optional("gst_number", "GST Number", FieldKind::Text),
    FieldSpec::optional(
        "client_type_id",
        "Client Type",
        FieldKind::Lookup(EntityKind::ClientType),
    ),
    FieldSpec::optional(
        "payment_term_id",
        "Payment Term",
        FieldKind::Lookup(EntityKind::PaymentTerm),
    ),
    FieldSpec::optional("city", "City", FieldKind::Text),
    FieldSpec::optional("address", "Address", FieldKind::TextArea),
];

const FILTERS: &[FilterSpec] = &[
    FilterSpec::from_data("client_type", "Client Type"),
    FilterSpec::from_data("city", "City"),
];

impl Entity for Client {
    const KIND: EntityKind = EntityKind::Client;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.contact_person.as_str(),
            self.email.as_str(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "client_type" => Some(self.client_type_name.clone()),
            "city" => Some(self.city.clone()),
            _ => None,
        }
    }

    fn filters() -> &'static [FilterSpec] {
        FILTERS
    }

    fn form_fields() -> &'static [FieldSpec] {
        FORM_FIELDS
    }

    fn form_values(&self) -> FormValues {
        FormValues::from([
            ("name".to_string(), self.name.clone()),
            ("contact_person".to_string(), self.contact_person.clone()),
            ("email".to_string(), self.email.clone()),
            ("phone".to_string(), self.phone.clone()),
            ("gst_number".to_string(), self.gst_number.clone()),
            ("client_type_id".to_string(), id_to_input(self.client_type_id)),
            ("payment_term_id".to_string(), id_to_input(self.payment_term_id)),
            ("city".to_string(), self.city.clone()),
            ("address".to_string(), self.address.clone()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::validate;

    #[test]
    fn accepts_camel_and_snake_case() {
        let snake: Client = serde_json::from_str(
            r#"{"id":1,"name":"Acme","contact_person":"Ravi","client_type_id":"2","status":1}"#,
        )
        .unwrap();
        let camel: Client = serde_json::from_str(
            r#"{"id":"1","name":"Acme","contactPerson":"Ravi","clientTypeId":2,"status":"1"}"#,
        )
        .unwrap();
        assert_eq!(snake, camel);
        assert_eq!(camel.client_type_id, Some(2));
    }

    #[test]
    fn edit_values_round_trip_through_validation() {
        let client = Client {
            id: 5,
            name: "Acme".into(),
            contact_person: "Ravi".into(),
            email: "ravi@acme.in".into(),
            phone: "98200 00000".into(),
            ..Default::default()
        };
        assert!(validate(Client::form_fields(), &client.form_values()).is_ok());
    }
}
