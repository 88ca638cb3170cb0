use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::common::lenient::{
    de_f64, de_i64, de_opt_id, de_string, id_to_input, number_to_input,
};
use crate::domain::common::{Entity, EntityKind, RecordStatus};
use crate::shared::form::{FieldKind, FieldSpec, FormValues};
use crate::shared::list_query::FilterSpec;

// ============================================================================
// Stage
// ============================================================================

/// Production workflow stage. Each transition is one server round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum BatchStage {
    #[default]
    Planned,
    InProgress,
    QualityCheck,
    Completed,
    Cancelled,
}

impl BatchStage {
    pub const ALL: [BatchStage; 5] = [
        BatchStage::Planned,
        BatchStage::InProgress,
        BatchStage::QualityCheck,
        BatchStage::Completed,
        BatchStage::Cancelled,
    ];

    /// Wire value, e.g. `quality_check`.
    pub fn as_str(self) -> &'static str {
        match self {
            BatchStage::Planned => "planned",
            BatchStage::InProgress => "in_progress",
            BatchStage::QualityCheck => "quality_check",
            BatchStage::Completed => "completed",
            BatchStage::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BatchStage::Planned => "Planned",
            BatchStage::InProgress => "In Progress",
            BatchStage::QualityCheck => "Quality Check",
            BatchStage::Completed => "Completed",
            BatchStage::Cancelled => "Cancelled",
        }
    }

    /// The stage "Advance" moves to; terminal stages have none.
    pub fn next(self) -> Option<Self> {
        match self {
            BatchStage::Planned => Some(BatchStage::InProgress),
            BatchStage::InProgress => Some(BatchStage::QualityCheck),
            BatchStage::QualityCheck => Some(BatchStage::Completed),
            BatchStage::Completed | BatchStage::Cancelled => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Accepts wire values, labels and camelCase (`inProgress`, `In Progress`, `in-progress`).
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "planned" | "pending" => Some(BatchStage::Planned),
            "inprogress" | "running" => Some(BatchStage::InProgress),
            "qualitycheck" | "qc" => Some(BatchStage::QualityCheck),
            "completed" | "done" => Some(BatchStage::Completed),
            "cancelled" | "canceled" => Some(BatchStage::Cancelled),
            _ => None,
        }
    }
}

impl Serialize for BatchStage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BatchStage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.trim().is_empty() {
            return Ok(BatchStage::default());
        }
        BatchStage::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown batch stage: {}", raw)))
    }
}

pub const STAGE_WIRE_VALUES: &[&str] = &[
    "planned",
    "in_progress",
    "quality_check",
    "completed",
    "cancelled",
];

pub const STAGE_LABELS: &[&str] = &[
    "Planned",
    "In Progress",
    "Quality Check",
    "Completed",
    "Cancelled",
];

// ============================================================================
// Record
// ============================================================================

/// A run of one finished good, optionally raised from a customer order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionBatch {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    #[serde(deserialize_with = "de_string", alias = "batchNo")]
    pub batch_no: String,
    #[serde(deserialize_with = "de_opt_id", alias = "finishedGoodId")]
    pub finished_good_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "finishedGoodName")]
    pub finished_good_name: String,
    #[serde(deserialize_with = "de_opt_id", alias = "orderId")]
    pub order_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "orderName")]
    pub order_name: String,
    #[serde(deserialize_with = "de_f64")]
    pub quantity: f64,
    #[serde(deserialize_with = "de_string", alias = "startDate")]
    pub start_date: String,
    #[serde(deserialize_with = "de_string", alias = "endDate")]
    pub end_date: String,
    pub stage: BatchStage,
    #[serde(deserialize_with = "de_string")]
    pub supervisor: String,
    #[serde(deserialize_with = "de_string")]
    pub remarks: String,
    pub status: RecordStatus,
}

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("batch_no", "Batch No", FieldKind::Text),
    FieldSpec::required(
        "finished_good_id",
        "Product",
        FieldKind::Lookup(EntityKind::FinishedGood),
    ),
    FieldSpec::optional("order_id", "Order", FieldKind::Lookup(EntityKind::Order)),
    FieldSpec::required("quantity", "Quantity", FieldKind::Number),
    FieldSpec::required("start_date", "Start Date", FieldKind::Date),
    FieldSpec::optional("end_date", "End Date", FieldKind::Date),
    FieldSpec::required("stage", "Stage", FieldKind::Select(STAGE_WIRE_VALUES)),
    FieldSpec::optional("supervisor", "Supervisor", FieldKind::Text),
    FieldSpec::optional("remarks", "Remarks", FieldKind::TextArea),
];

const FILTERS: &[FilterSpec] = &[
    FilterSpec::fixed("stage", "Stage", STAGE_LABELS),
    FilterSpec::from_data("product", "Product"),
];

impl Entity for ProductionBatch {
    const KIND: EntityKind = EntityKind::ProductionBatch;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn display_name(&self) -> String {
        self.batch_no.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.batch_no.as_str(),
            self.finished_good_name.as_str(),
            self.order_name.as_str(),
            self.supervisor.as_str(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "stage" => Some(self.stage.label().to_string()),
            "product" => Some(self.finished_good_name.clone()),
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
            ("batch_no".to_string(), self.batch_no.clone()),
            ("finished_good_id".to_string(), id_to_input(self.finished_good_id)),
            ("order_id".to_string(), id_to_input(self.order_id)),
            ("quantity".to_string(), number_to_input(self.quantity)),
            ("start_date".to_string(), self.start_date.clone()),
            ("end_date".to_string(), self.end_date.clone()),
            ("stage".to_string(), self.stage.as_str().to_string()),
            ("supervisor".to_string(), self.supervisor.clone()),
            ("remarks".to_string(), self.remarks.clone()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_advance_in_order() {
        let mut stage = BatchStage::Planned;
        let mut visited = vec![stage];
        while let Some(next) = stage.next() {
            stage = next;
            visited.push(stage);
        }
        assert_eq!(
            visited,
            vec![
                BatchStage::Planned,
                BatchStage::InProgress,
                BatchStage::QualityCheck,
                BatchStage::Completed
            ]
        );
        assert!(BatchStage::Cancelled.is_terminal());
    }

    #[test]
    fn stage_parses_loose_spellings() {
        for raw in ["in_progress", "inProgress", "In Progress", "in-progress"] {
            assert_eq!(BatchStage::parse(raw), Some(BatchStage::InProgress), "{raw}");
        }
        assert_eq!(BatchStage::parse("QC"), Some(BatchStage::QualityCheck));
        assert_eq!(BatchStage::parse("shipped"), None);
    }

    #[test]
    fn wire_values_match_variants() {
        let wire: Vec<&str> = BatchStage::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(wire, STAGE_WIRE_VALUES);
        let labels: Vec<&str> = BatchStage::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, STAGE_LABELS);
    }

    #[test]
    fn missing_stage_defaults_to_planned() {
        let batch: ProductionBatch =
            serde_json::from_str(r#"{"id":3,"batchNo":"B-003","stage":null}"#).unwrap();
        assert_eq!(batch.stage, BatchStage::Planned);
        assert_eq!(batch.batch_no, "B-003");
    }
}
