use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{de_f64, de_i64, de_opt_id, de_string, id_to_input, number_to_input};
use crate::domain::common::{Entity, EntityKind, RecordStatus};
use crate::shared::form::{FieldKind, FieldSpec, FormValues};
use crate::shared::list_query::FilterSpec;

pub const DISPATCH_STATES: &[&str] = &["Pending", "Dispatched", "In Transit", "Delivered"];

/// Shipment of an order to a client.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchOrder {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    #[serde(deserialize_with = "de_string", alias = "dispatchNo")]
    pub dispatch_no: String,
    #[serde(deserialize_with = "de_opt_id", alias = "orderId")]
    pub order_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "orderName")]
    pub order_name: String,
    #[serde(deserialize_with = "de_opt_id", alias = "clientId")]
    pub client_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "clientName")]
    pub client_name: String,
    #[serde(deserialize_with = "de_opt_id", alias = "locationId")]
    pub location_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "locationName")]
    pub location_name: String,
    #[serde(deserialize_with = "de_f64")]
    pub quantity: f64,
    #[serde(deserialize_with = "de_string", alias = "dispatchDate")]
    pub dispatch_date: String,
    #[serde(deserialize_with = "de_string", alias = "vehicleNo")]
    pub vehicle_no: String,
    #[serde(deserialize_with = "de_string", alias = "driverName")]
    pub driver_name: String,
    #[serde(deserialize_with = "de_string", alias = "dispatchStatus")]
    pub dispatch_status: String,
    pub status: RecordStatus,
}

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("dispatch_no", "Dispatch No", FieldKind::Text),
    FieldSpec::required("order_id", "Order", FieldKind::Lookup(EntityKind::Order)),
    FieldSpec::required("client_id", "Client", FieldKind::Lookup(EntityKind::Client)),
    FieldSpec::optional(
        "location_id",
        "From Location",
        FieldKind::Lookup(EntityKind::Location),
    ),
    FieldSpec::required("quantity", "Quantity", FieldKind::Number),
    FieldSpec::required("dispatch_date", "Dispatch Date", FieldKind::Date),
    FieldSpec::optional("vehicle_no", "Vehicle No", FieldKind::Text),
    FieldSpec::optional("driver_name", "Driver Name", FieldKind::Text),
    FieldSpec::required(
        "dispatch_status",
        "Dispatch Status",
        FieldKind::Select(DISPATCH_STATES),
    ),
];

const FILTERS: &[FilterSpec] = &[
    FilterSpec::fixed("dispatch_status", "Dispatch Status", DISPATCH_STATES),
    FilterSpec::from_data("client", "Client"),
];

impl Entity for DispatchOrder {
    const KIND: EntityKind = EntityKind::DispatchOrder;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn display_name(&self) -> String {
        self.dispatch_no.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.dispatch_no.as_str(),
            self.order_name.as_str(),
            self.client_name.as_str(),
            self.vehicle_no.as_str(),
            self.driver_name.as_str(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "dispatch_status" => Some(self.dispatch_status.clone()),
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
            ("dispatch_no".to_string(), self.dispatch_no.clone()),
            ("order_id".to_string(), id_to_input(self.order_id)),
            ("client_id".to_string(), id_to_input(self.client_id)),
            ("location_id".to_string(), id_to_input(self.location_id)),
            ("quantity".to_string(), number_to_input(self.quantity)),
            ("dispatch_date".to_string(), self.dispatch_date.clone()),
            ("vehicle_no".to_string(), self.vehicle_no.clone()),
            ("driver_name".to_string(), self.driver_name.clone()),
            ("dispatch_status".to_string(), self.dispatch_status.clone()),
        ])
    }
}
