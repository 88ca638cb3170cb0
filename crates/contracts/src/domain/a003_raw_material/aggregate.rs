use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{de_f64, de_i64, de_opt_id, de_string, id_to_input, number_to_input};
use crate::domain::common::{Entity, EntityKind, RecordStatus};
use crate::shared::form::{FieldKind, FieldSpec, FormValues};
use crate::shared::list_query::FilterSpec;

pub const STOCK_LOW: &str = "Low Stock";
pub const STOCK_OK: &str = "In Stock";

/// Input material consumed by production.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMaterial {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    #[serde(deserialize_with = "de_string")]
    pub name: String,
    #[serde(deserialize_with = "de_string")]
    pub code: String,
    #[serde(deserialize_with = "de_opt_id", alias = "categoryId")]
    pub category_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "categoryName")]
    pub category_name: String,
    #[serde(deserialize_with = "de_opt_id", alias = "unitId")]
    pub unit_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "unitName")]
    pub unit_name: String,
    #[serde(deserialize_with = "de_opt_id", alias = "vendorId")]
    pub vendor_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "vendorName")]
    pub vendor_name: String,
    #[serde(deserialize_with = "de_f64", alias = "currentStock")]
    pub current_stock: f64,
    #[serde(deserialize_with = "de_f64", alias = "reorderLevel")]
    pub reorder_level: f64,
    #[serde(deserialize_with = "de_f64", alias = "unitPrice")]
    pub unit_price: f64,
    pub status: RecordStatus,
}

impl RawMaterial {
    /// Stock at or below the reorder level (a zero level never triggers).
    pub fn is_low_stock(&self) -> bool {
        self.reorder_level > 0.0 && self.current_stock <= self.reorder_level
    }

    pub fn stock_label(&self) -> &'static str {
        if self.is_low_stock() {
            STOCK_LOW
        } else {
            STOCK_OK
        }
    }
}

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Material Name", FieldKind::Text),
    FieldSpec::required("code", "Material Code", FieldKind::Text),
    FieldSpec::required(
        "category_id",
        "Category",
        FieldKind::Lookup(EntityKind::Category),
    ),
    FieldSpec::required("unit_id", "Unit", FieldKind::Lookup(EntityKind::Unit)),
    FieldSpec::optional(
        "vendor_id",
        "Preferred Vendor",
        FieldKind::Lookup(EntityKind::Vendor),
    ),
    FieldSpec::optional("current_stock", "Current Stock", FieldKind::Number),
    FieldSpec::optional("reorder_level", "Reorder Level", FieldKind::Number),
    FieldSpec::optional("unit_price", "Unit Price", FieldKind::Number),
];

const FILTERS: &[FilterSpec] = &[
    FilterSpec::from_data("category", "Category"),
    FilterSpec::fixed("stock", "Stock", &[STOCK_LOW, STOCK_OK]),
];

impl Entity for RawMaterial {
    const KIND: EntityKind = EntityKind::RawMaterial;

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
            self.code.as_str(),
            self.vendor_name.as_str(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "category" => Some(self.category_name.clone()),
            "stock" => Some(self.stock_label().to_string()),
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
            ("code".to_string(), self.code.clone()),
            ("category_id".to_string(), id_to_input(self.category_id)),
            ("unit_id".to_string(), id_to_input(self.unit_id)),
            ("vendor_id".to_string(), id_to_input(self.vendor_id)),
            ("current_stock".to_string(), number_to_input(self.current_stock)),
            ("reorder_level".to_string(), number_to_input(self.reorder_level)),
            ("unit_price".to_string(), number_to_input(self.unit_price)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_stock_threshold() {
        let mut m = RawMaterial {
            current_stock: 10.0,
            reorder_level: 10.0,
            ..Default::default()
        };
        assert!(m.is_low_stock());
        m.current_stock = 10.5;
        assert!(!m.is_low_stock());
        m.reorder_level = 0.0;
        m.current_stock = 0.0;
        assert!(!m.is_low_stock());
    }

    #[test]
    fn stock_filter_uses_label() {
        let m: RawMaterial =
            serde_json::from_str(r#"{"id":1,"currentStock":"3","reorderLevel":5}"#).unwrap();
        assert_eq!(m.filter_value("stock").as_deref(), Some(STOCK_LOW));
    }
}
