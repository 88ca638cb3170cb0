use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{
    de_f64, de_i64, de_opt_id, de_string, id_to_input, number_to_input,
};
use crate::domain::common::{Entity, EntityKind, RecordStatus};
use crate::shared::form::{FieldKind, FieldSpec, FormValues};
use crate::shared::list_query::FilterSpec;

pub const PO_STATES: &[&str] = &["Pending", "Approved", "Received", "Cancelled"];

/// Order placed with a vendor for a raw material.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseOrder {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    #[serde(deserialize_with = "de_string", alias = "poNumber")]
    pub po_number: String,
    #[serde(deserialize_with = "de_opt_id", alias = "vendorId")]
    pub vendor_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "vendorName")]
    pub vendor_name: String,
    #[serde(deserialize_with = "de_opt_id", alias = "rawMaterialId")]
    pub raw_material_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "rawMaterialName")]
    pub raw_material_name: String,
    #[serde(deserialize_with = "de_f64")]
    pub quantity: f64,
    #[serde(deserialize_with = "de_f64", alias = "unitPrice")]
    pub unit_price: f64,
    #[serde(deserialize_with = "de_string", alias = "orderDate")]
    pub order_date: String,
    #[serde(deserialize_with = "de_string", alias = "expectedDate")]
    pub expected_date: String,
    #[serde(deserialize_with = "de_string", alias = "poStatus")]
    pub po_status: String,
    #[serde(deserialize_with = "de_string")]
    pub remarks: String,
    pub status: RecordStatus,
}

impl PurchaseOrder {
    pub fn total_amount(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("po_number", "PO Number", FieldKind::Text),
    FieldSpec::required("vendor_id", "Vendor", FieldKind::Lookup(EntityKind::Vendor)),
    FieldSpec::required(
        "raw_material_id",
        "Raw Material",
        FieldKind::Lookup(EntityKind::RawMaterial),
    ),
    FieldSpec::required("quantity", "Quantity", FieldKind::Number),
    FieldSpec::required("unit_price", "Unit Price", FieldKind::Number),
    FieldSpec::required("order_date", "Order Date", FieldKind::Date),
    FieldSpec::optional("expected_date", "Expected Delivery", FieldKind::Date),
    FieldSpec::required("po_status", "PO Status", FieldKind::Select(PO_STATES)),
    FieldSpec::optional("remarks", "Remarks", FieldKind::TextArea),
];

const FILTERS: &[FilterSpec] = &[
    FilterSpec::from_data("vendor", "Vendor"),
    FilterSpec::fixed("po_status", "PO Status", PO_STATES),
];

impl Entity for PurchaseOrder {
    const KIND: EntityKind = EntityKind::PurchaseOrder;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn display_name(&self) -> String {
        self.po_number.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.po_number.as_str(),
            self.vendor_name.as_str(),
            self.raw_material_name.as_str(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "vendor" => Some(self.vendor_name.clone()),
            "po_status" => Some(self.po_status.clone()),
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
            ("po_number".to_string(), self.po_number.clone()),
            ("vendor_id".to_string(), id_to_input(self.vendor_id)),
            ("raw_material_id".to_string(), id_to_input(self.raw_material_id)),
            ("quantity".to_string(), number_to_input(self.quantity)),
            ("unit_price".to_string(), number_to_input(self.unit_price)),
            ("order_date".to_string(), self.order_date.clone()),
            ("expected_date".to_string(), self.expected_date.clone()),
            ("po_status".to_string(), self.po_status.clone()),
            ("remarks".to_string(), self.remarks.clone()),
        ])
    }
}
