use contracts::domain::a006_production_batch::aggregate::{BatchStage, ProductionBatch};
use contracts::domain::common::EntityKind;
use contracts::shared::format::{display_date, display_quantity, or_dash};
use contracts::shared::stats::count_by;

use crate::shared::components::stat_card::StatTone;
use crate::shared::list_page::{Column, ExtraStat, ListEntity, RelatedColumn, RelatedList, RowAction};

const QC_COLUMNS: &[RelatedColumn] = &[
    RelatedColumn { header: "Inspector", keys: &["inspector"] },
    RelatedColumn { header: "Date", keys: &["inspection_date", "inspectionDate"] },
    RelatedColumn { header: "Sample", keys: &["sample_size", "sampleSize"] },
    RelatedColumn { header: "Passed", keys: &["passed_quantity", "passedQuantity"] },
    RelatedColumn { header: "Failed", keys: &["failed_quantity", "failedQuantity"] },
    RelatedColumn { header: "Result", keys: &["result"] },
];

fn stage_tone(stage: BatchStage) -> StatTone {
    match stage {
        BatchStage::Completed => StatTone::Success,
        BatchStage::Cancelled => StatTone::Error,
        BatchStage::QualityCheck => StatTone::Warning,
        BatchStage::Planned | BatchStage::InProgress => StatTone::Neutral,
    }
}

impl ListEntity for ProductionBatch {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Batch No", |b| b.batch_no.clone()),
            Column::new("Product", |b| or_dash(&b.finished_good_name)),
            Column::new("Order", |b| or_dash(&b.order_name)),
            Column::new("Quantity", |b| display_quantity(b.quantity)),
            Column::new("Start", |b| display_date(&b.start_date)),
            Column::new("End", |b| display_date(&b.end_date)),
            Column::new("Stage", |b| b.stage.label().to_string()),
            Column::new("Supervisor", |b| or_dash(&b.supervisor)),
        ]
    }

    fn extra_stats(items: &[Self]) -> Vec<ExtraStat> {
        count_by(items, |b| b.stage)
            .into_iter()
            .map(|(stage, n)| ExtraStat::new(stage.label(), n, stage_tone(stage)))
            .collect()
    }

    fn related() -> Option<RelatedList> {
        Some(RelatedList {
            kind: EntityKind::QcRecord,
            field: "batch_id",
            title: "Quality Checks",
            columns: QC_COLUMNS,
        })
    }

    fn row_actions(&self) -> Vec<RowAction> {
        match self.stage.next() {
            Some(next) if self.status.is_active() => vec![RowAction::AdvanceStage { id: self.id, next }],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::RecordStatus;

    fn batch(stage: BatchStage, status: RecordStatus) -> ProductionBatch {
        ProductionBatch {
            id: 9,
            stage,
            status,
            ..Default::default()
        }
    }

    #[test]
    fn advance_offered_until_terminal() {
        assert_eq!(
            batch(BatchStage::Planned, RecordStatus::Active).row_actions(),
            vec![RowAction::AdvanceStage {
                id: 9,
                next: BatchStage::InProgress
            }]
        );
        assert!(batch(BatchStage::Completed, RecordStatus::Active).row_actions().is_empty());
        assert!(batch(BatchStage::Planned, RecordStatus::Inactive).row_actions().is_empty());
    }

    #[test]
    fn stage_stats_follow_stage_order() {
        let items = vec![
            batch(BatchStage::Completed, RecordStatus::Active),
            batch(BatchStage::Planned, RecordStatus::Active),
            batch(BatchStage::Planned, RecordStatus::Active),
        ];
        let stats = ProductionBatch::extra_stats(&items);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].label, "Planned");
        assert_eq!(stats[0].value, 2);
        assert_eq!(stats[1].label, "Completed");
    }
}
