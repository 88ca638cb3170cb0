use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{de_f64, de_i64, de_opt_id, de_string, id_to_input, number_to_input};
use crate::domain::common::{Entity, EntityKind, RecordStatus};
use crate::shared::form::{FieldKind, FieldSpec, FormValues};
use crate::shared::list_query::FilterSpec;

pub const QC_RESULTS: &[&str] = &["Pass", "Fail", "Rework"];

/// Inspection of a production batch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QcRecord {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    #[serde(deserialize_with = "de_opt_id", alias = "batchId", alias = "production_batch_id")]
    pub batch_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "batchName", alias = "batch_no")]
    pub batch_name: String,
    #[serde(deserialize_with = "de_string")]
    pub inspector: String,
    #[serde(deserialize_with = "de_string", alias = "inspectionDate")]
    pub inspection_date: String,
    #[serde(deserialize_with = "de_f64", alias = "sampleSize")]
    pub sample_size: f64,
    #[serde(deserialize_with = "de_f64", alias = "passedQuantity")]
    pub passed_quantity: f64,
    #[serde(deserialize_with = "de_f64", alias = "failedQuantity")]
    pub failed_quantity: f64,
    #[serde(deserialize_with = "de_string")]
    pub result: String,
    #[serde(deserialize_with = "de_string")]
    pub remarks: String,
    pub status: RecordStatus,
}

impl QcRecord {
    /// Share of inspected units that passed, in percent; `None` when nothing was inspected.
    pub fn pass_rate(&self) -> Option<f64> {
        let inspected = self.passed_quantity + self.failed_quantity;
        if inspected <= 0.0 {
            None
        } else {
            Some(self.passed_quantity / inspected * 100.0)
        }
    }
}

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(
        "batch_id",
        "Batch",
        FieldKind::Lookup(EntityKind::ProductionBatch),
    ),
    FieldSpec::required("inspector", "Inspector", FieldKind::Text),
    FieldSpec::required("inspection_date", "Inspection Date", FieldKind::Date),
    FieldSpec::optional("sample_size", "Sample Size", FieldKind::Number),
    FieldSpec::required("passed_quantity", "Passed Qty", FieldKind::Number),
    FieldSpec::required("failed_quantity", "Failed Qty", FieldKind::Number),
    FieldSpec::required("result", "Result", FieldKind::Select(QC_RESULTS)),
    FieldSpec::optional("remarks", "Remarks", FieldKind::TextArea),
];

const FILTERS: &[FilterSpec] = &[
    FilterSpec::fixed("result", "Result", QC_RESULTS),
    FilterSpec::from_data("inspector", "Inspector"),
];

impl Entity for QcRecord {
    const KIND: EntityKind = EntityKind::QcRecord;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn display_name(&self) -> String {
        if self.batch_name.is_empty() {
            format!("QC #{}", self.id)
        } else {
            format!("QC {}", self.batch_name)
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.batch_name.as_str(),
            self.inspector.as_str(),
            self.remarks.as_str(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "result" => Some(self.result.clone()),
            "inspector" => Some(self.inspector.clone()),
            _ => None,
        }
    }

    fn filters() -> &'static [FilterSpec] {
        FILTERS
    }

    fn form_fields() -> &'static [FieldSpec] {
        FORM_FIELDS
    }

    fn form_values(&self) -> FormValues {
        FormValues::from([
            ("batch_id".to_string(), id_to_input(self.batch_id)),
            ("inspector".to_string(), self.inspector.clone()),
            ("inspection_date".to_string(), self.inspection_date.clone()),
            ("sample_size".to_string(), number_to_input(self.sample_size)),
            ("passed_quantity".to_string(), number_to_input(self.passed_quantity)),
            ("failed_quantity".to_string(), number_to_input(self.failed_quantity)),
            ("result".to_string(), self.result.clone()),
            ("remarks".to_string(), self.remarks.clone()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_rate() {
        let qc = QcRecord {
            passed_quantity: 45.0,
            failed_quantity: 5.0,
            ..Default::default()
        };
        assert_eq!(qc.pass_rate(), Some(90.0));
        assert_eq!(QcRecord::default().pass_rate(), None);
    }
}
