use contracts::domain::a005_purchase_order::aggregate::PurchaseOrder;
use contracts::shared::format::{display_amount, display_date, display_quantity, or_dash};
use contracts::shared::stats::count_by;

use crate::shared::components::stat_card::StatTone;
use crate::shared::list_page::{Column, ExtraStat, ListEntity};

impl ListEntity for PurchaseOrder {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("PO No", |p| p.po_number.clone()),
            Column::new("Vendor", |p| or_dash(&p.vendor_name)),
            Column::new("Material", |p| or_dash(&p.raw_material_name)),
            Column::new("Quantity", |p| display_quantity(p.quantity)),
            Column::new("Total", |p| display_amount(p.total_amount())),
            Column::new("Order Date", |p| display_date(&p.order_date)),
            Column::new("Expected", |p| display_date(&p.expected_date)),
            Column::new("PO Status", |p| or_dash(&p.po_status)),
        ]
    }

    fn extra_stats(items: &[Self]) -> Vec<ExtraStat> {
        let by_state = count_by(items, |p| p.po_status.clone());
        let count = |state: &str| by_state.get(state).copied().unwrap_or(0);
        vec![
            ExtraStat::new("Pending", count("Pending"), StatTone::Warning),
            ExtraStat::new("Received", count("Received"), StatTone::Success),
        ]
    }
}
