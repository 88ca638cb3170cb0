use contracts::domain::a009_order::aggregate::Order;
use contracts::domain::common::EntityKind;
use contracts::shared::format::{display_amount, display_date, display_quantity, or_dash};

use crate::shared::components::stat_card::StatTone;
use crate::shared::list_page::{Column, ExtraStat, ListEntity, RelatedColumn, RelatedList, RowAction};

const BATCH_COLUMNS: &[RelatedColumn] = &[
    RelatedColumn { header: "Batch No", keys: &["batch_no", "batchNo"] },
    RelatedColumn { header: "Product", keys: &["finished_good_name", "finishedGoodName"] },
    RelatedColumn { header: "Quantity", keys: &["quantity"] },
    RelatedColumn { header: "Stage", keys: &["stage"] },
    RelatedColumn { header: "Start", keys: &["start_date", "startDate"] },
];

/// States past which a new production batch makes no sense.
const CLOSED_STATES: &[&str] = &["Dispatched", "Completed", "Cancelled"];

impl ListEntity for Order {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Order No", |o| o.order_no.clone()),
            Column::new("Client", |o| or_dash(&o.client_name)),
            Column::new("Product", |o| or_dash(&o.finished_good_name)),
            Column::new("Quantity", |o| display_quantity(o.quantity)),
            Column::new("Total", |o| display_amount(o.total_amount())),
            Column::new("Order Date", |o| display_date(&o.order_date)),
            Column::new("Delivery", |o| display_date(&o.delivery_date)),
            Column::new("Order Status", |o| or_dash(&o.order_status)),
        ]
    }

    fn extra_stats(items: &[Self]) -> Vec<ExtraStat> {
        let pending = items.iter().filter(|o| o.order_status == "Pending").count();
        let in_production = items.iter().filter(|o| o.order_status == "In Production").count();
        vec![
            ExtraStat::new("Pending", pending, StatTone::Warning),
            ExtraStat::new("In Production", in_production, StatTone::Neutral),
        ]
    }

    fn related() -> Option<RelatedList> {
        Some(RelatedList {
            kind: EntityKind::ProductionBatch,
            field: "order_id",
            title: "Production Batches",
            columns: BATCH_COLUMNS,
        })
    }

    fn row_actions(&self) -> Vec<RowAction> {
        if !self.status.is_active() || CLOSED_STATES.contains(&self.order_status.as_str()) {
            return Vec::new();
        }
        vec![RowAction::Handoff {
            label: "Start production",
            icon: "play",
            kind: EntityKind::ProductionBatch,
            values: self.production_handoff(),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::RecordStatus;

    fn order(state: &str) -> Order {
        Order {
            id: 3,
            order_no: "SO-3".into(),
            finished_good_id: Some(8),
            quantity: 120.0,
            order_status: state.into(),
            status: RecordStatus::Active,
            ..Default::default()
        }
    }

    #[test]
    fn handoff_prefills_batch_form() {
        let actions = order("Confirmed").row_actions();
        match actions.as_slice() {
            [RowAction::Handoff { kind, values, .. }] => {
                assert_eq!(*kind, EntityKind::ProductionBatch);
                assert_eq!(values["order_id"], "3");
                assert_eq!(values["finished_good_id"], "8");
                assert_eq!(values["quantity"], "120");
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn closed_orders_have_no_handoff() {
        assert!(order("Cancelled").row_actions().is_empty());
        assert!(order("Completed").row_actions().is_empty());
    }
}
