use contracts::domain::a003_raw_material::aggregate::RawMaterial;
use contracts::shared::format::{display_amount, display_quantity, or_dash};

use crate::shared::components::stat_card::StatTone;
use crate::shared::list_page::{Column, ExtraStat, ListEntity};

fn stock_text(m: &RawMaterial) -> String {
    if m.unit_name.trim().is_empty() {
        display_quantity(m.current_stock)
    } else {
        format!("{} {}", display_quantity(m.current_stock), m.unit_name)
    }
}

impl ListEntity for RawMaterial {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Code", |m| or_dash(&m.code)),
            Column::new("Name", |m| m.name.clone()),
            Column::new("Category", |m| or_dash(&m.category_name)),
            Column::new("Vendor", |m| or_dash(&m.vendor_name)),
            Column::new("Stock", stock_text),
            Column::new("Reorder Level", |m| display_quantity(m.reorder_level)),
            Column::new("Unit Price", |m| display_amount(m.unit_price)),
            Column::new("Stock Status", |m| m.stock_label().to_string()),
        ]
    }

    fn extra_stats(items: &[Self]) -> Vec<ExtraStat> {
        let low = items.iter().filter(|m| m.is_low_stock()).count();
        vec![ExtraStat::new("Low Stock", low, StatTone::Warning)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_stock_is_counted() {
        let items = vec![
            RawMaterial {
                id: 1,
                current_stock: 5.0,
                reorder_level: 10.0,
                ..Default::default()
            },
            RawMaterial {
                id: 2,
                current_stock: 50.0,
                reorder_level: 10.0,
                ..Default::default()
            },
        ];
        let stats = RawMaterial::extra_stats(&items);
        assert_eq!(stats[0].value, 1);
    }

    #[test]
    fn stock_shows_unit() {
        let m = RawMaterial {
            current_stock: 12.5,
            unit_name: "kg".into(),
            ..Default::default()
        };
        assert_eq!(stock_text(&m), "12.50 kg");
    }
}
