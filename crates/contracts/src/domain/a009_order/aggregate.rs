use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{de_f64, de_i64, de_opt_id, de_string, id_to_input, number_to_input};
use crate::domain::common::{Entity, EntityKind, RecordStatus};
use crate::shared::form::{FieldKind, FieldSpec, FormValues};
use crate::shared::list_query::FilterSpec;

pub const ORDER_STATES: &[&str] = &[
    "Pending",
    "Confirmed",
    "In Production",
    "Dispatched",
    "Completed",
    "Cancelled",
];

/// Customer order for a finished good.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    #[serde(deserialize_with = "de_string", alias = "orderNo")]
    pub order_no: String,
    #[serde(deserialize_with = "de_opt_id", alias = "clientId")]
    pub client_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "clientName")]
    pub client_name: String,
    #[serde(deserialize_with = "de_opt_id", alias = "finishedGoodId")]
    pub finished_good_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "finishedGoodName")]
    pub finished_good_name: String,
    #[serde(deserialize_with = "de_f64")]
    pub quantity: f64,
    #[serde(deserialize_with = "de_f64", alias = "unitPrice")]
    pub unit_price: f64,
    #[serde(deserialize_with = "de_string", alias = "orderDate")]
    pub order_date: String,
    #[serde(deserialize_with = "de_string", alias = "deliveryDate")]
    pub delivery_date: String,
    #[serde(deserialize_with = "de_string", alias = "orderStatus")]
    pub order_status: String,
    #[serde(deserialize_with = "de_string")]
    pub remarks: String,
    pub status: RecordStatus,
}

impl Order {
    pub fn total_amount(&self) -> f64 {
        self.quantity * self.unit_price
    }

    /// Values that pre-fill a production batch raised from this order.
    pub fn production_handoff(&self) -> FormValues {
        FormValues::from([
            ("batch_no".to_string(), format!("B-{}", self.order_no)),
            ("order_id".to_string(), self.id.to_string()),
            ("finished_good_id".to_string(), id_to_input(self.finished_good_id)),
            ("quantity".to_string(), number_to_input(self.quantity)),
        ])
    }
}

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("order_no", "Order No", FieldKind::Text),
    FieldSpec::required("client_id", "Client", FieldKind::Lookup(EntityKind::Client)),
    FieldSpec::required(
        "finished_good_id",
        "Product",
        FieldKind::Lookup(EntityKind::FinishedGood),
    ),
    FieldSpec::required("quantity", "Quantity", FieldKind::Number),
    FieldSpec::optional("unit_price", "Unit Price", FieldKind::Number),
    FieldSpec::required("order_date", "Order Date", FieldKind::Date),
    FieldSpec::optional("delivery_date", "Delivery Date", FieldKind::Date),
    FieldSpec::required("order_status", "Order Status", FieldKind::Select(ORDER_STATES)),
    FieldSpec::optional("remarks", "Remarks", FieldKind::TextArea),
];

const FILTERS: &[FilterSpec] = &[
    FilterSpec::fixed("order_status", "Order Status", ORDER_STATES),
    FilterSpec::from_data("client", "Client"),
];

impl Entity for Order {
    const KIND: EntityKind = EntityKind::Order;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn display_name(&self) -> String {
        self.order_no.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.order_no.as_str(),
            self.client_name.as_str(),
            self.finished_good_name.as_str(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "order_status" => Some(self.order_status.clone()),
            "client" => Some(self.client_name.clone()),
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
            ("order_no".to_string(), self.order_no.clone()),
            ("client_id".to_string(), id_to_input(self.client_id)),
            ("finished_good_id".to_string(), id_to_input(self.finished_good_id)),
            ("quantity".to_string(), number_to_input(self.quantity)),
            ("unit_price".to_string(), number_to_input(self.unit_price)),
            ("order_date".to_string(), self.order_date.clone()),
            ("delivery_date".to_string(), self.delivery_date.clone()),
            ("order_status".to_string(), self.order_status.clone()),
            ("remarks".to_string(), self.remarks.clone()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_production_batch::aggregate::ProductionBatch;
    use crate::shared::form::{blank_values, validate};

    #[test]
    fn handoff_prefills_a_valid_batch_once_dated() {
        let order = Order {
            id: 11,
            order_no: "SO-11".into(),
            finished_good_id: Some(4),
            quantity: 250.0,
            ..Default::default()
        };
        let mut values = blank_values(ProductionBatch::form_fields());
        values.extend(order.production_handoff());
        assert_eq!(values["order_id"], "11");
        assert_eq!(values["finished_good_id"], "4");
        assert_eq!(values["quantity"], "250");
        assert_eq!(values["stage"], "planned");
        assert_eq!(
            validate(ProductionBatch::form_fields(), &values)
                .unwrap_err()
                .key(),
            "start_date"
        );
        values.insert("start_date".into(), "2024-06-01".into());
        assert!(validate(ProductionBatch::form_fields(), &values).is_ok());
    }

    #[test]
    fn total_amount() {
        let order = Order {
            quantity: 4.0,
            unit_price: 12.5,
            ..Default::default()
        };
        assert_eq!(order.total_amount(), 50.0);
    }
}
