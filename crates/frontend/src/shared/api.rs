//! REST client for the dashboard backend.
//!
//! Every call reads the session token from storage when the request is built and
//! returns `Result<_, ApiError>`; callers log the error and toast `user_message()`.

use contracts::domain::a006_production_batch::aggregate::BatchStage;
use contracts::domain::common::lenient::value_to_string;
use contracts::domain::common::{Entity, EntityKind, RecordStatus};
use contracts::shared::api::{decode_ack, decode_list, ApiError};
use contracts::shared::form::{multipart_fields, FormMode, FormValues};
use gloo_net::http::{Request, Response};
use serde_json::Value;
use wasm_bindgen::JsValue;

use crate::shared::api_utils::endpoints;
use crate::shared::session;

fn session_token() -> Result<String, ApiError> {
    session::token().ok_or_else(|| ApiError::Server {
        code: 1,
        message: "Session token missing".to_string(),
    })
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Network(format!("{e:?}"))
}

async fn read_text(resp: Response) -> Result<String, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Network(format!("HTTP {}", resp.status())));
    }
    resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_text(url: &str) -> Result<String, ApiError> {
    let resp = Request::get(url).send().await.map_err(network)?;
    read_text(resp).await
}

/// `GET {entity}/get-all/{token}`, decoded into typed records.
pub async fn fetch_list<E: Entity>() -> Result<Vec<E>, ApiError> {
    let url = endpoints().get_all(E::KIND, &session_token()?);
    decode_list(&get_text(&url).await?)
}

/// Same list, untyped; used for dropdown options and related tables.
pub async fn fetch_raw(kind: EntityKind) -> Result<Vec<Value>, ApiError> {
    let url = endpoints().get_all(kind, &session_token()?);
    decode_list(&get_text(&url).await?)
}

/// `GET {entity}/get-by/{field}/{value}/{token}`.
pub async fn fetch_related(
    kind: EntityKind,
    field: &str,
    value: &str,
) -> Result<Vec<Value>, ApiError> {
    let url = endpoints().get_by(kind, field, value, &session_token()?);
    decode_list(&get_text(&url).await?)
}

/// Multipart `add` / `update`; returns the server's confirmation text.
pub async fn submit_form(
    kind: EntityKind,
    mode: FormMode,
    values: &FormValues,
) -> Result<String, ApiError> {
    let token = session_token()?;
    let form = web_sys::FormData::new().map_err(js_error)?;
    for (name, value) in multipart_fields(kind.form_fields(), mode, values, &token) {
        form.append_with_str(&name, &value).map_err(js_error)?;
    }

    let url = match mode {
        FormMode::Create => endpoints().add(kind),
        FormMode::Update(_) => endpoints().update(kind),
    };
    log::debug!("POST {} ({:?})", url, mode);
    let resp = Request::post(&url)
        .body(form)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    decode_ack(&read_text(resp).await?)
}

/// `GET {entity}/change-status/{id}/{status}/{token}`.
pub async fn change_status(
    kind: EntityKind,
    id: i64,
    new_status: RecordStatus,
) -> Result<String, ApiError> {
    let url = endpoints().change_status(kind, id, new_status, &session_token()?);
    decode_ack(&get_text(&url).await?)
}

/// `GET production/change-stage/{id}/{stage}/{token}`.
pub async fn change_stage(id: i64, stage: BatchStage) -> Result<String, ApiError> {
    let url = endpoints().change_stage(id, stage, &session_token()?);
    decode_ack(&get_text(&url).await?)
}

/// One entry of a lookup dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOption {
    pub id: String,
    pub label: String,
    pub active: bool,
}

impl LookupOption {
    /// Builds an option from a raw record using the kind's label keys.
    pub fn from_record(kind: EntityKind, record: &Value) -> Option<Self> {
        let id = record.get("id").map(value_to_string)?;
        if id.is_empty() || id == "0" {
            return None;
        }
        let label = kind
            .label_keys()
            .iter()
            .filter_map(|key| record.get(*key))
            .map(value_to_string)
            .find(|s| !s.trim().is_empty())
            .unwrap_or_else(|| format!("#{}", id));
        let active = record
            .get("status")
            .map(value_to_string)
            .and_then(|s| RecordStatus::parse(&s))
            .unwrap_or_default()
            .is_active();
        Some(Self { id, label, active })
    }
}

pub async fn fetch_options(kind: EntityKind) -> Result<Vec<LookupOption>, ApiError> {
    let records = fetch_raw(kind).await?;
    Ok(records
        .iter()
        .filter_map(|r| LookupOption::from_record(kind, r))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn option_label_follows_kind_keys() {
        let opt = LookupOption::from_record(
            EntityKind::PurchaseOrder,
            &json!({"id": "12", "poNumber": "PO-12", "status": "0"}),
        )
        .unwrap();
        assert_eq!(opt.id, "12");
        assert_eq!(opt.label, "PO-12");
        assert!(!opt.active);
    }

    #[test]
    fn option_without_label_uses_id() {
        let opt = LookupOption::from_record(EntityKind::Brand, &json!({"id": 3})).unwrap();
        assert_eq!(opt.label, "#3");
        assert!(opt.active);
        assert!(LookupOption::from_record(EntityKind::Brand, &json!({"name": "x"})).is_none());
    }
}
