use contracts::domain::a002_vendor::aggregate::Vendor;
use contracts::domain::common::EntityKind;
use contracts::shared::format::or_dash;

use crate::shared::list_page::{Column, ListEntity, RelatedColumn, RelatedList};

const PURCHASE_COLUMNS: &[RelatedColumn] = &[
    RelatedColumn { header: "PO No", keys: &["po_number", "poNumber"] },
    RelatedColumn { header: "Material", keys: &["raw_material_name", "rawMaterialName"] },
    RelatedColumn { header: "Quantity", keys: &["quantity"] },
    RelatedColumn { header: "Order Date", keys: &["order_date", "orderDate"] },
    RelatedColumn { header: "PO Status", keys: &["po_status", "poStatus"] },
];

impl ListEntity for Vendor {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Name", |v| v.name.clone()),
            Column::new("Contact Person", |v| or_dash(&v.contact_person)),
            Column::new("Email", |v| or_dash(&v.email)),
            Column::new("Phone", |v| or_dash(&v.phone)),
            Column::new("Material Supplied", |v| or_dash(&v.material_supplied)),
            Column::new("GST No", |v| or_dash(&v.gst_number)),
            Column::new("Payment Term", |v| or_dash(&v.payment_term_name)),
        ]
    }

    fn related() -> Option<RelatedList> {
        Some(RelatedList {
            kind: EntityKind::PurchaseOrder,
            field: "vendor_id",
            title: "Purchase Orders",
            columns: PURCHASE_COLUMNS,
        })
    }
}
