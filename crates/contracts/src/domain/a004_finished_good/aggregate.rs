use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{de_f64, de_i64, de_opt_id, de_string, id_to_input, number_to_input};
use crate::domain::common::{Entity, EntityKind, RecordStatus};
use crate::shared::form::{FieldKind, FieldSpec, FormValues};
use crate::shared::list_query::FilterSpec;

/// Sellable product coming out of production.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinishedGood {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    #[serde(deserialize_with = "de_string")]
    pub name: String,
    #[serde(deserialize_with = "de_string")]
    pub sku: String,
    #[serde(deserialize_with = "de_opt_id", alias = "brandId")]
    pub brand_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "brandName")]
    pub brand_name: String,
    #[serde(deserialize_with = "de_opt_id", alias = "categoryId")]
    pub category_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "categoryName")]
    pub category_name: String,
    #[serde(deserialize_with = "de_opt_id", alias = "unitId")]
    pub unit_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "unitName")]
    pub unit_name: String,
    #[serde(deserialize_with = "de_f64")]
    pub price: f64,
    #[serde(deserialize_with = "de_f64", alias = "stockQuantity")]
    pub stock_quantity: f64,
    #[serde(deserialize_with = "de_string")]
    pub description: String,
    pub status: RecordStatus,
}

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Product Name", FieldKind::Text),
    FieldSpec::required("sku", "SKU", FieldKind::Text),
    FieldSpec::optional("brand_id", "Brand", FieldKind::Lookup(EntityKind::Brand)),
    FieldSpec::optional(
        "category_id",
        "Category",
        FieldKind::Lookup(EntityKind::Category),
    ),
    FieldSpec::required("unit_id", "Unit", FieldKind::Lookup(EntityKind::Unit)),
    FieldSpec::required("price", "Price", FieldKind::Number),
    FieldSpec::optional("stock_quantity", "Stock Quantity", FieldKind::Number),
    FieldSpec::optional("description", "Description", FieldKind::TextArea),
];

const FILTERS: &[FilterSpec] = &[
    FilterSpec::from_data("brand", "Brand"),
    FilterSpec::from_data("category", "Category"),
];

impl Entity for FinishedGood {
    const KIND: EntityKind = EntityKind::FinishedGood;

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
        vec![self.name.as_str(), self.sku.as_str(), self.brand_name.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "brand" => Some(self.brand_name.clone()),
            "category" => Some(self.category_name.clone()),
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
            ("sku".to_string(), self.sku.clone()),
            ("brand_id".to_string(), id_to_input(self.brand_id)),
            ("category_id".to_string(), id_to_input(self.category_id)),
            ("unit_id".to_string(), id_to_input(self.unit_id)),
            ("price".to_string(), number_to_input(self.price)),
            ("stock_quantity".to_string(), number_to_input(self.stock_quantity)),
            ("description".to_string(), self.description.clone()),
        ])
    }
}
