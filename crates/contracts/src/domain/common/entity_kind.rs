use serde::{Deserialize, Serialize};

use crate::domain::{
    a001_client::aggregate::Client, a002_vendor::aggregate::Vendor,
    a003_raw_material::aggregate::RawMaterial, a004_finished_good::aggregate::FinishedGood,
    a005_purchase_order::aggregate::PurchaseOrder,
    a006_production_batch::aggregate::ProductionBatch,
    a007_dispatch_order::aggregate::DispatchOrder, a008_qc_record::aggregate::QcRecord,
    a009_order::aggregate::Order, a010_master_data::aggregate as master,
};
use crate::domain::common::Entity;
use crate::shared::form::FieldSpec;

/// Every entity the dashboard manages, keyed by its REST path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Client,
    Vendor,
    RawMaterial,
    FinishedGood,
    PurchaseOrder,
    ProductionBatch,
    DispatchOrder,
    QcRecord,
    Order,
    Brand,
    Category,
    Location,
    Unit,
    PaymentTerm,
    ClientType,
    AdminUser,
    AdminRole,
}

impl EntityKind {
    pub const ALL: [EntityKind; 17] = [
        EntityKind::Client,
        EntityKind::Vendor,
        EntityKind::RawMaterial,
        EntityKind::FinishedGood,
        EntityKind::PurchaseOrder,
        EntityKind::ProductionBatch,
        EntityKind::DispatchOrder,
        EntityKind::QcRecord,
        EntityKind::Order,
        EntityKind::Brand,
        EntityKind::Category,
        EntityKind::Location,
        EntityKind::Unit,
        EntityKind::PaymentTerm,
        EntityKind::ClientType,
        EntityKind::AdminUser,
        EntityKind::AdminRole,
    ];

    /// REST path segment, e.g. `{BASE_URL}/raw-material/get-all/{token}`.
    pub fn path(self) -> &'static str {
        match self {
            EntityKind::Client => "client",
            EntityKind::Vendor => "vendor",
            EntityKind::RawMaterial => "raw-material",
            EntityKind::FinishedGood => "finished-good",
            EntityKind::PurchaseOrder => "purchase-order",
            EntityKind::ProductionBatch => "production",
            EntityKind::DispatchOrder => "dispatch",
            EntityKind::QcRecord => "quality-control",
            EntityKind::Order => "order",
            EntityKind::Brand => "brand",
            EntityKind::Category => "category",
            EntityKind::Location => "location",
            EntityKind::Unit => "unit",
            EntityKind::PaymentTerm => "payment-term",
            EntityKind::ClientType => "client-type",
            EntityKind::AdminUser => "admin-user",
            EntityKind::AdminRole => "admin-role",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.path() == path)
    }

    /// Plural page title.
    pub fn title(self) -> &'static str {
        match self {
            EntityKind::Client => "Clients",
            EntityKind::Vendor => "Vendors",
            EntityKind::RawMaterial => "Raw Materials",
            EntityKind::FinishedGood => "Finished Goods",
            EntityKind::PurchaseOrder => "Purchase Orders",
            EntityKind::ProductionBatch => "Production",
            EntityKind::DispatchOrder => "Dispatch",
            EntityKind::QcRecord => "Quality Control",
            EntityKind::Order => "Orders",
            EntityKind::Brand => "Brands",
            EntityKind::Category => "Categories",
            EntityKind::Location => "Locations",
            EntityKind::Unit => "Units",
            EntityKind::PaymentTerm => "Payment Terms",
            EntityKind::ClientType => "Client Types",
            EntityKind::AdminUser => "Admin Users",
            EntityKind::AdminRole => "Admin Roles",
        }
    }

    /// Singular noun for dialog titles ("New Client", "Edit Client").
    pub fn singular(self) -> &'static str {
        match self {
            EntityKind::Client => "Client",
            EntityKind::Vendor => "Vendor",
            EntityKind::RawMaterial => "Raw Material",
            EntityKind::FinishedGood => "Finished Good",
            EntityKind::PurchaseOrder => "Purchase Order",
            EntityKind::ProductionBatch => "Production Batch",
            EntityKind::DispatchOrder => "Dispatch",
            EntityKind::QcRecord => "QC Record",
            EntityKind::Order => "Order",
            EntityKind::Brand => "Brand",
            EntityKind::Category => "Category",
            EntityKind::Location => "Location",
            EntityKind::Unit => "Unit",
            EntityKind::PaymentTerm => "Payment Term",
            EntityKind::ClientType => "Client Type",
            EntityKind::AdminUser => "Admin User",
            EntityKind::AdminRole => "Admin Role",
        }
    }

    pub fn is_master_data(self) -> bool {
        matches!(
            self,
            EntityKind::Brand
                | EntityKind::Category
                | EntityKind::Location
                | EntityKind::Unit
                | EntityKind::PaymentTerm
                | EntityKind::ClientType
                | EntityKind::AdminUser
                | EntityKind::AdminRole
        )
    }

    /// Form descriptors used by both the dialog and server-side validation.
    pub fn form_fields(self) -> &'static [FieldSpec] {
        match self {
            EntityKind::Client => Client::form_fields(),
            EntityKind::Vendor => Vendor::form_fields(),
            EntityKind::RawMaterial => RawMaterial::form_fields(),
            EntityKind::FinishedGood => FinishedGood::form_fields(),
            EntityKind::PurchaseOrder => PurchaseOrder::form_fields(),
            EntityKind::ProductionBatch => ProductionBatch::form_fields(),
            EntityKind::DispatchOrder => DispatchOrder::form_fields(),
            EntityKind::QcRecord => QcRecord::form_fields(),
            EntityKind::Order => Order::form_fields(),
            EntityKind::Brand => master::Brand::form_fields(),
            EntityKind::Category => master::Category::form_fields(),
            EntityKind::Location => master::Location::form_fields(),
            EntityKind::Unit => master::Unit::form_fields(),
            EntityKind::PaymentTerm => master::PaymentTerm::form_fields(),
            EntityKind::ClientType => master::ClientType::form_fields(),
            EntityKind::AdminUser => master::AdminUser::form_fields(),
            EntityKind::AdminRole => master::AdminRole::form_fields(),
        }
    }

    /// JSON keys tried, in order, when a record is shown as a dropdown option.
    pub fn label_keys(self) -> &'static [&'static str] {
        match self {
            EntityKind::PurchaseOrder => &["po_number", "poNumber"],
            EntityKind::ProductionBatch => &["batch_no", "batchNo"],
            EntityKind::DispatchOrder => &["dispatch_no", "dispatchNo"],
            EntityKind::Order => &["order_no", "orderNo"],
            EntityKind::AdminUser => &["username", "full_name", "fullName"],
            EntityKind::QcRecord => &["batch_name", "batchName"],
            _ => &["name"],
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_and_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_path(kind.path()), Some(kind));
            assert!(seen.insert(kind.path()));
        }
        assert_eq!(EntityKind::from_path("unknown"), None);
    }

    #[test]
    fn every_kind_has_a_required_field() {
        for kind in EntityKind::ALL {
            assert!(
                kind.form_fields().iter().any(|f| f.required),
                "{kind} has no required field"
            );
        }
    }

    #[test]
    fn master_data_split() {
        let master = EntityKind::ALL
            .iter()
            .filter(|k| k.is_master_data())
            .count();
        assert_eq!(master, 8);
    }
}
