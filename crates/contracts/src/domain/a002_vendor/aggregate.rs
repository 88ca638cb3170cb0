use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{de_i64, de_opt_id, de_string, id_to_input};
use crate::domain::common::{Entity, EntityKind, RecordStatus};
use crate::shared::form::{FieldKind, FieldSpec, FormValues};
use crate::shared::list_query::FilterSpec;

/// Supplier of raw materials.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Vendor {
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
    #[serde(deserialize_with = "de_string", alias = "gstNumber")]
    pub gst_number: String,
    #[serde(deserialize_with = "de_string", alias = "materialSupplied")]
    pub material_supplied: String,
    #[serde(deserialize_with = "de_opt_id", alias = "paymentTermId")]
    pub payment_term_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "paymentTermName")]
    pub payment_term_name: String,
    pub status: RecordStatus,
    #[serde(deserialize_with = "de_string", alias = "createdAt")]
    pub created_at: String,
}

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Vendor Name", FieldKind::Text),
    FieldSpec::required("contact_person", "Contact Person", FieldKind::Text),
    FieldSpec::required("phone", "Phone", FieldKind::Text),
    FieldSpec::optional("email", "Email", FieldKind::Email),
    FieldSpec::optional("gst_number", "GST Number", FieldKind::Text),
    FieldSpec::optional("material_supplied", "Material Supplied", FieldKind::Text),
    FieldSpec::optional(
        "payment_term_id",
        "Payment Term",
        FieldKind::Lookup(EntityKind::PaymentTerm),
    ),
    FieldSpec::optional("address", "Address", FieldKind::TextArea),
];

const FILTERS: &[FilterSpec] = &[FilterSpec::from_data("payment_term", "Payment Term")];

impl Entity for Vendor {
    const KIND: EntityKind = EntityKind::Vendor;

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
            self.phone.as_str(),
            self.material_supplied.as_str(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "payment_term" => Some(self.payment_term_name.clone()),
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
            ("phone".to_string(), self.phone.clone()),
            ("email".to_string(), self.email.clone()),
            ("gst_number".to_string(), self.gst_number.clone()),
            ("material_supplied".to_string(), self.material_supplied.clone()),
            ("payment_term_id".to_string(), id_to_input(self.payment_term_id)),
            ("address".to_string(), self.address.clone()),
        ])
    }
}
