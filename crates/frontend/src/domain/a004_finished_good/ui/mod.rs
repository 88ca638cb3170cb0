use contracts::domain::a004_finished_good::aggregate::FinishedGood;
use contracts::shared::format::{display_amount, display_quantity, or_dash};

use crate::shared::list_page::{Column, ListEntity};

impl ListEntity for FinishedGood {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("SKU", |g| g.sku.clone()),
            Column::new("Name", |g| g.name.clone()),
            Column::new("Brand", |g| or_dash(&g.brand_name)),
            Column::new("Category", |g| or_dash(&g.category_name)),
            Column::new("Unit", |g| or_dash(&g.unit_name)),
            Column::new("Price", |g| display_amount(g.price)),
            Column::new("In Stock", |g| display_quantity(g.stock_quantity)),
        ]
    }
}
