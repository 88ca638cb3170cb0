use std::collections::HashMap;

use contracts::domain::a006_production_batch::aggregate::BatchStage;
use contracts::domain::common::lenient::value_to_string;
use contracts::domain::common::{EntityKind, RecordStatus};
use contracts::shared::api::GENERIC_ERROR;
use contracts::shared::form::{validate, FieldKind, FieldSpec, FormValues};
use sea_orm::DatabaseConnection;
use serde_json::{Map, Number, Value};
use thiserror::Error;

use super::repository::{self, Model};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid or expired session token")]
    Unauthorized,
    #[error("Unknown entity '{0}'")]
    UnknownEntity(String),
    #[error("{0}")]
    Invalid(String),
    #[error("{singular} #{id} not found")]
    NotFound { singular: &'static str, id: i64 },
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ServiceError {
    /// Text placed in the `message` of an `errFlag = 1` response.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Internal(_) => GENERIC_ERROR.to_string(),
            other => other.to_string(),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

pub fn resolve_kind(path: &str) -> ServiceResult<EntityKind> {
    EntityKind::from_path(path).ok_or_else(|| ServiceError::UnknownEntity(path.to_string()))
}

/// Every record of `kind`, with `{stem}_name` filled in for each lookup field.
pub async fn list(db: &DatabaseConnection, kind: EntityKind) -> ServiceResult<Vec<Value>> {
    let rows = repository::list(db, kind).await?;
    let labels = lookup_labels(db, kind).await?;
    Ok(rows
        .iter()
        .map(|row| render(kind, row, &labels))
        .collect())
}

/// Records of `kind` whose `field` equals `value` (compared as text).
pub async fn get_by(
    db: &DatabaseConnection,
    kind: EntityKind,
    field: &str,
    value: &str,
) -> ServiceResult<Vec<Value>> {
    let known = field == "id"
        || field == "status"
        || kind.form_fields().iter().any(|f| f.key == field);
    if !known {
        return Err(ServiceError::Invalid(format!(
            "{} has no field '{}'",
            kind.singular(),
            field
        )));
    }
    let value = value.trim();
    Ok(list(db, kind)
        .await?
        .into_iter()
        .filter(|record| {
            record
                .get(field)
                .map(|v| value_to_string(v) == value)
                .unwrap_or(false)
        })
        .collect())
}

pub async fn add(
    db: &DatabaseConnection,
    kind: EntityKind,
    values: &FormValues,
) -> ServiceResult<i64> {
    let fields = checked_fields(db, kind, values).await?;
    let row = repository::insert(db, kind, fields).await?;
    tracing::info!(entity = %kind, id = row.id, "record added");
    Ok(row.id)
}

pub async fn update(
    db: &DatabaseConnection,
    kind: EntityKind,
    id: i64,
    values: &FormValues,
) -> ServiceResult<()> {
    let existing = find(db, kind, id).await?;
    let mut fields = existing.fields();
    let submitted = checked_fields(db, kind, values).await?;
    if kind == EntityKind::ProductionBatch {
        if let Some(target) = submitted.get("stage").and_then(stage_of) {
            check_stage_change(stored_stage(&fields), target)?;
        }
    }
    fields.extend(submitted);
    repository::update_fields(db, existing, fields).await?;
    tracing::info!(entity = %kind, id, "record updated");
    Ok(())
}

pub async fn change_status(
    db: &DatabaseConnection,
    kind: EntityKind,
    id: i64,
    raw_status: &str,
) -> ServiceResult<RecordStatus> {
    let status = RecordStatus::parse(raw_status)
        .ok_or_else(|| ServiceError::Invalid(format!("Unknown status '{}'", raw_status)))?;
    let existing = find(db, kind, id).await?;
    repository::set_status(db, existing, status).await?;
    tracing::info!(entity = %kind, id, status = status.as_flag(), "status changed");
    Ok(status)
}

/// Move a production batch to `raw_stage`; finished batches stay where they are.
pub async fn change_stage(
    db: &DatabaseConnection,
    id: i64,
    raw_stage: &str,
) -> ServiceResult<BatchStage> {
    let stage = BatchStage::parse(raw_stage)
        .ok_or_else(|| ServiceError::Invalid(format!("Unknown stage '{}'", raw_stage)))?;
    let existing = find(db, EntityKind::ProductionBatch, id).await?;
    let mut fields = existing.fields();
    check_stage_change(stored_stage(&fields), stage)?;

    fields.insert("stage".to_string(), Value::String(stage.as_str().to_string()));
    repository::update_fields(db, existing, fields).await?;
    tracing::info!(id, stage = stage.as_str(), "batch stage changed");
    Ok(stage)
}

fn stage_of(value: &Value) -> Option<BatchStage> {
    BatchStage::parse(&value_to_string(value))
}

fn stored_stage(fields: &Map<String, Value>) -> BatchStage {
    fields.get("stage").and_then(stage_of).unwrap_or_default()
}

/// Completed and cancelled batches are frozen, whether moved by stage change or by edit.
fn check_stage_change(current: BatchStage, target: BatchStage) -> ServiceResult<()> {
    if current.is_terminal() && current != target {
        return Err(ServiceError::Invalid(format!(
            "Batch is already {}",
            current.label().to_lowercase()
        )));
    }
    Ok(())
}

async fn find(db: &DatabaseConnection, kind: EntityKind, id: i64) -> ServiceResult<Model> {
    repository::get(db, kind, id)
        .await?
        .ok_or(ServiceError::NotFound {
            singular: kind.singular(),
            id,
        })
}

/// Validate a submission and convert it to stored JSON fields.
async fn checked_fields(
    db: &DatabaseConnection,
    kind: EntityKind,
    values: &FormValues,
) -> ServiceResult<Map<String, Value>> {
    let specs = kind.form_fields();
    validate(specs, values).map_err(|e| ServiceError::Invalid(e.to_string()))?;

    let mut fields = Map::new();
    for spec in specs {
        let raw = values.get(spec.key).map(|v| v.trim()).unwrap_or_default();
        let value = typed_value(spec, raw)?;
        if let (FieldKind::Lookup(target), Some(ref_id)) = (spec.kind, value.as_i64()) {
            if repository::get(db, target, ref_id).await?.is_none() {
                return Err(ServiceError::Invalid(format!(
                    "{} #{} does not exist",
                    target.singular(),
                    ref_id
                )));
            }
        }
        fields.insert(spec.key.to_string(), value);
    }
    Ok(fields)
}

fn typed_value(spec: &FieldSpec, raw: &str) -> ServiceResult<Value> {
    if raw.is_empty() {
        return Ok(match spec.kind {
            FieldKind::Number | FieldKind::Lookup(_) => Value::Null,
            _ => Value::String(String::new()),
        });
    }
    match spec.kind {
        FieldKind::Number => raw
            .parse::<f64>()
            .ok()
            .and_then(number_value)
            .ok_or_else(|| ServiceError::Invalid(format!("{} must be a number", spec.label))),
        FieldKind::Lookup(_) => raw
            .parse::<i64>()
            .map(|id| Value::Number(id.into()))
            .map_err(|_| ServiceError::Invalid(format!("{} must be selected", spec.label))),
        FieldKind::Select(options) if !options.iter().any(|o| *o == raw) => Err(ServiceError::Invalid(
            format!("{} must be one of: {}", spec.label, options.join(", ")),
        )),
        _ => Ok(Value::String(raw.to_string())),
    }
}

/// Whole numbers are stored as integers so `get-by` matches `"250"`, not `"250.0"`.
fn number_value(n: f64) -> Option<Value> {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        Some(Value::Number((n as i64).into()))
    } else {
        Number::from_f64(n).map(Value::Number)
    }
}

type Labels = HashMap<EntityKind, HashMap<i64, String>>;

async fn lookup_labels(db: &DatabaseConnection, kind: EntityKind) -> anyhow::Result<Labels> {
    let mut labels = Labels::new();
    for spec in kind.form_fields() {
        let FieldKind::Lookup(target) = spec.kind else {
            continue;
        };
        if labels.contains_key(&target) {
            continue;
        }
        let rows = repository::list(db, target).await?;
        let by_id = rows
            .iter()
            .map(|row| (row.id, label_of(target, row.id, &row.fields())))
            .collect();
        labels.insert(target, by_id);
    }
    Ok(labels)
}

fn label_of(kind: EntityKind, id: i64, fields: &Map<String, Value>) -> String {
    kind.label_keys()
        .iter()
        .filter_map(|key| fields.get(*key))
        .map(value_to_string)
        .find(|s| !s.trim().is_empty())
        .unwrap_or_else(|| format!("#{}", id))
}

fn render(kind: EntityKind, row: &Model, labels: &Labels) -> Value {
    let mut out = row.fields();
    for spec in kind.form_fields() {
        let FieldKind::Lookup(target) = spec.kind else {
            continue;
        };
        let name = out
            .get(spec.key)
            .and_then(Value::as_i64)
            .and_then(|ref_id| labels.get(&target).and_then(|m| m.get(&ref_id)))
            .cloned()
            .unwrap_or_default();
        let stem = spec.key.strip_suffix("_id").unwrap_or(spec.key);
        out.insert(format!("{}_name", stem), Value::String(name));
    }
    out.insert("id".to_string(), Value::Number(row.id.into()));
    out.insert(
        "status".to_string(),
        Value::Number(row.record_status().as_flag().into()),
    );
    out.insert(
        "created_at".to_string(),
        row.created_at
            .map(|t| Value::String(t.to_rfc3339()))
            .unwrap_or(Value::Null),
    );
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use contracts::domain::a001_client::aggregate::Client;
    use contracts::domain::a006_production_batch::aggregate::ProductionBatch;
    use contracts::domain::common::Entity;
    use contracts::shared::api::{decode_list, ApiEnvelope};

    fn form(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    async fn client_type(db: &DatabaseConnection, name: &str) -> i64 {
        add(db, EntityKind::ClientType, &form(&[("name", name)]))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn add_rejects_missing_required_field() {
        let db = connect_in_memory().await.unwrap();
        let err = add(&db, EntityKind::Brand, &form(&[("code", "X")]))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Name is required");
        assert!(list(&db, EntityKind::Brand).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_fills_lookup_names() {
        let db = connect_in_memory().await.unwrap();
        let retail = client_type(&db, "Retail").await;
        add(
            &db,
            EntityKind::Client,
            &form(&[
                ("name", "Acme Corp"),
                ("contact_person", "Jane Roe"),
                ("email", "jane@acme.test"),
                ("phone", "555-0100"),
                ("client_type_id", &retail.to_string()),
            ]),
        )
        .await
        .unwrap();

        let records = list(&db, EntityKind::Client).await.unwrap();
        let body = serde_json::to_string(&ApiEnvelope::ok(records)).unwrap();
        let clients: Vec<Client> = decode_list(&body).unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name, "Acme Corp");
        assert_eq!(clients[0].client_type_id, Some(retail));
        assert_eq!(clients[0].client_type_name, "Retail");
        assert_eq!(clients[0].status, RecordStatus::Active);
    }

    #[tokio::test]
    async fn dangling_lookup_is_rejected() {
        let db = connect_in_memory().await.unwrap();
        let err = add(
            &db,
            EntityKind::Client,
            &form(&[
                ("name", "Acme"),
                ("contact_person", "Jane"),
                ("email", "jane@acme.test"),
                ("phone", "1"),
                ("client_type_id", "99"),
            ]),
        )
        .await
        .unwrap_err();
        assert_eq!(err.user_message(), "Client Type #99 does not exist");
    }

    #[tokio::test]
    async fn status_toggle_is_visible_in_next_list() {
        let db = connect_in_memory().await.unwrap();
        let id = client_type(&db, "Wholesale").await;

        change_status(&db, EntityKind::ClientType, id, "0")
            .await
            .unwrap();
        let records = list(&db, EntityKind::ClientType).await.unwrap();
        assert_eq!(records[0]["status"], 0);

        change_status(&db, EntityKind::ClientType, id, "1")
            .await
            .unwrap();
        let records = list(&db, EntityKind::ClientType).await.unwrap();
        assert_eq!(records[0]["status"], 1);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_missing_id_is_not_found() {
        let db = connect_in_memory().await.unwrap();
        let id = client_type(&db, "Retail").await;
        update(&db, EntityKind::ClientType, id, &form(&[("name", "Retail Chain")]))
            .await
            .unwrap();
        let records = list(&db, EntityKind::ClientType).await.unwrap();
        assert_eq!(records[0]["name"], "Retail Chain");

        let err = update(&db, EntityKind::ClientType, 404, &form(&[("name", "x")]))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { id: 404, .. }));
    }

    #[tokio::test]
    async fn get_by_matches_text_and_rejects_unknown_field() {
        let db = connect_in_memory().await.unwrap();
        let retail = client_type(&db, "Retail").await;
        let other = client_type(&db, "Export").await;
        for (name, ty) in [("A", retail), ("B", other), ("C", retail)] {
            add(
                &db,
                EntityKind::Client,
                &form(&[
                    ("name", name),
                    ("contact_person", "Pat"),
                    ("email", "pat@example.test"),
                    ("phone", "1"),
                    ("client_type_id", &ty.to_string()),
                ]),
            )
            .await
            .unwrap();
        }

        let found = get_by(&db, EntityKind::Client, "client_type_id", &retail.to_string())
            .await
            .unwrap();
        let names: Vec<_> = found.iter().map(|r| r["name"].clone()).collect();
        assert_eq!(names, ["A", "C"]);

        assert!(matches!(
            get_by(&db, EntityKind::Client, "password", "x").await,
            Err(ServiceError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn select_values_are_checked() {
        let db = connect_in_memory().await.unwrap();
        let err = add(
            &db,
            EntityKind::Location,
            &form(&[("name", "Main"), ("location_type", "Spaceport")]),
        )
        .await
        .unwrap_err();
        assert!(err.user_message().starts_with("Type must be one of"));
    }

    async fn batch(db: &DatabaseConnection) -> i64 {
        let unit = add(db, EntityKind::Unit, &form(&[("name", "Piece"), ("symbol", "pc")]))
            .await
            .unwrap();
        let category = add(db, EntityKind::Category, &form(&[("name", "Chairs")]))
            .await
            .unwrap();
        let good = add(
            db,
            EntityKind::FinishedGood,
            &form(&[
                ("name", "Oak Chair"),
                ("sku", "CH-1"),
                ("category_id", &category.to_string()),
                ("unit_id", &unit.to_string()),
                ("price", "120"),
            ]),
        )
        .await
        .unwrap();
        add(
            db,
            EntityKind::ProductionBatch,
            &form(&[
                ("batch_no", "B-1"),
                ("finished_good_id", &good.to_string()),
                ("quantity", "40"),
                ("start_date", "2024-06-01"),
                ("stage", "planned"),
            ]),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn stage_advances_until_terminal() {
        let db = connect_in_memory().await.unwrap();
        let id = batch(&db).await;

        let mut stage = BatchStage::Planned;
        while let Some(next) = stage.next() {
            stage = change_stage(&db, id, next.as_str()).await.unwrap();
        }
        assert_eq!(stage, BatchStage::Completed);

        let records = list(&db, EntityKind::ProductionBatch).await.unwrap();
        let body = serde_json::to_string(&records).unwrap();
        let batches: Vec<ProductionBatch> = decode_list(&body).unwrap();
        assert_eq!(batches[0].stage, BatchStage::Completed);
        assert_eq!(batches[0].finished_good_name, "Oak Chair");

        let err = change_stage(&db, id, "cancelled").await.unwrap_err();
        assert_eq!(err.user_message(), "Batch is already completed");
        assert!(change_stage(&db, id, "warp").await.is_err());
    }

    #[tokio::test]
    async fn edit_cannot_reopen_finished_batch() {
        let db = connect_in_memory().await.unwrap();
        let id = batch(&db).await;
        change_stage(&db, id, "completed").await.unwrap();

        let records = list(&db, EntityKind::ProductionBatch).await.unwrap();
        let body = serde_json::to_string(&records).unwrap();
        let batches: Vec<ProductionBatch> = decode_list(&body).unwrap();
        let mut values = batches[0].form_values();

        values.insert("stage".to_string(), "planned".to_string());
        let err = update(&db, EntityKind::ProductionBatch, id, &values)
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Batch is already completed");

        values.insert("stage".to_string(), "completed".to_string());
        values.insert("quantity".to_string(), "45".to_string());
        update(&db, EntityKind::ProductionBatch, id, &values)
            .await
            .unwrap();
        let records = list(&db, EntityKind::ProductionBatch).await.unwrap();
        assert_eq!(records[0]["stage"], "completed");
        assert_eq!(records[0]["quantity"], 45);
    }

    #[test]
    fn internal_errors_hide_details() {
        let err = ServiceError::Internal(anyhow::anyhow!("disk I/O error"));
        assert_eq!(err.user_message(), GENERIC_ERROR);
        assert_eq!(
            resolve_kind("gadget").unwrap_err().user_message(),
            "Unknown entity 'gadget'"
        );
    }
}
