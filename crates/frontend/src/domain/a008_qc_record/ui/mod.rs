use contracts::domain::a008_qc_record::aggregate::QcRecord;
use contracts::shared::format::{display_date, display_quantity, or_dash};

use crate::shared::components::stat_card::StatTone;
use crate::shared::list_page::{Column, ExtraStat, ListEntity};

fn pass_rate_text(record: &QcRecord) -> String {
    record
        .pass_rate()
        .map(|rate| format!("{:.1}%", rate))
        .unwrap_or_else(|| "-".to_string())
}

impl ListEntity for QcRecord {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Batch", |q| or_dash(&q.batch_name)),
            Column::new("Inspector", |q| or_dash(&q.inspector)),
            Column::new("Date", |q| display_date(&q.inspection_date)),
            Column::new("Sample", |q| display_quantity(q.sample_size)),
            Column::new("Passed", |q| display_quantity(q.passed_quantity)),
            Column::new("Failed", |q| display_quantity(q.failed_quantity)),
            Column::new("Pass Rate", pass_rate_text),
            Column::new("Result", |q| or_dash(&q.result)),
        ]
    }

    fn extra_stats(items: &[Self]) -> Vec<ExtraStat> {
        let count = |result: &str| items.iter().filter(|q| q.result == result).count();
        vec![
            ExtraStat::new("Passed", count("Pass"), StatTone::Success),
            ExtraStat::new("Failed", count("Fail"), StatTone::Error),
            ExtraStat::new("Rework", count("Rework"), StatTone::Warning),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_rate_formats_percent() {
        let record = QcRecord {
            passed_quantity: 45.0,
            failed_quantity: 5.0,
            ..Default::default()
        };
        assert_eq!(pass_rate_text(&record), "90.0%");
        assert_eq!(pass_rate_text(&QcRecord::default()), "-");
    }
}
