use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::common::EntityKind;
use contracts::shared::format::or_dash;

use crate::shared::list_page::{Column, ListEntity, RelatedColumn, RelatedList};

const ORDER_COLUMNS: &[RelatedColumn] = &[
    RelatedColumn { header: "Order No", keys: &["order_no", "orderNo"] },
    RelatedColumn { header: "Product", keys: &["finished_good_name", "finishedGoodName"] },
    RelatedColumn { header: "Quantity", keys: &["quantity"] },
    RelatedColumn { header: "Order Date", keys: &["order_date", "orderDate"] },
    RelatedColumn { header: "Order Status", keys: &["order_status", "orderStatus"] },
];

impl ListEntity for Client {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Name", |c| c.name.clone()),
            Column::new("Contact Person", |c| or_dash(&c.contact_person)),
            Column::new("Email", |c| or_dash(&c.email)),
            Column::new("Phone", |c| or_dash(&c.phone)),
            Column::new("City", |c| or_dash(&c.city)),
            Column::new("Client Type", |c| or_dash(&c.client_type_name)),
            Column::new("Payment Term", |c| or_dash(&c.payment_term_name)),
        ]
    }

    fn related() -> Option<RelatedList> {
        Some(RelatedList {
            kind: EntityKind::Order,
            field: "client_id",
            title: "Orders",
            columns: ORDER_COLUMNS,
        })
    }
}
