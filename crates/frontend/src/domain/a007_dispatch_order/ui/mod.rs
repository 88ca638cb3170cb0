use contracts::domain::a007_dispatch_order::aggregate::DispatchOrder;
use contracts::shared::format::{display_date, display_quantity, or_dash};

use crate::shared::components::stat_card::StatTone;
use crate::shared::list_page::{Column, ExtraStat, ListEntity};

impl ListEntity for DispatchOrder {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Dispatch No", |d| d.dispatch_no.clone()),
            Column::new("Order", |d| or_dash(&d.order_name)),
            Column::new("Client", |d| or_dash(&d.client_name)),
            Column::new("From", |d| or_dash(&d.location_name)),
            Column::new("Quantity", |d| display_quantity(d.quantity)),
            Column::new("Date", |d| display_date(&d.dispatch_date)),
            Column::new("Vehicle", |d| or_dash(&d.vehicle_no)),
            Column::new("Driver", |d| or_dash(&d.driver_name)),
            Column::new("Dispatch Status", |d| or_dash(&d.dispatch_status)),
        ]
    }

    fn extra_stats(items: &[Self]) -> Vec<ExtraStat> {
        let count = |state: &str| items.iter().filter(|d| d.dispatch_status == state).count();
        vec![
            ExtraStat::new("In Transit", count("In Transit"), StatTone::Warning),
            ExtraStat::new("Delivered", count("Delivered"), StatTone::Success),
        ]
    }
}
