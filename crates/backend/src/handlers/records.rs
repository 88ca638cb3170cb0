use axum::extract::{Multipart, Path, State};
use axum::Json;
use contracts::domain::common::{EntityKind, RecordStatus};
use contracts::shared::api::ApiEnvelope;
use contracts::shared::form::FormValues;
use serde_json::{json, Value};

use crate::domain::records::service::{self, ServiceError, ServiceResult};
use crate::shared::state::AppState;

type Reply = Json<ApiEnvelope<Value>>;

fn reply(action: &str, result: ServiceResult<ApiEnvelope<Value>>) -> Reply {
    match result {
        Ok(envelope) => Json(envelope),
        Err(err) => {
            match &err {
                ServiceError::Internal(e) => tracing::error!("{action} failed: {e:#}"),
                other => tracing::warn!("{action} rejected: {other}"),
            }
            Json(ApiEnvelope::failure(err.user_message()))
        }
    }
}

fn authorize(state: &AppState, token: &str) -> ServiceResult<()> {
    if state.config.auth.accepts(token) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

fn parse_id(raw: &str) -> ServiceResult<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ServiceError::Invalid(format!("Invalid id '{}'", raw)))
}

/// GET /:entity/get-all/:token
pub async fn get_all(
    State(state): State<AppState>,
    Path((entity, token)): Path<(String, String)>,
) -> Reply {
    let result = async {
        authorize(&state, &token)?;
        let kind = service::resolve_kind(&entity)?;
        let records = service::list(&state.db, kind).await?;
        Ok::<_, ServiceError>(ApiEnvelope::ok(Value::Array(records)))
    }
    .await;
    reply("get-all", result)
}

/// GET /:entity/get-by/:field/:value/:token
pub async fn get_by(
    State(state): State<AppState>,
    Path((entity, field, value, token)): Path<(String, String, String, String)>,
) -> Reply {
    let result = async {
        authorize(&state, &token)?;
        let kind = service::resolve_kind(&entity)?;
        let records = service::get_by(&state.db, kind, &field, &value).await?;
        Ok::<_, ServiceError>(ApiEnvelope::ok(Value::Array(records)))
    }
    .await;
    reply("get-by", result)
}

/// POST /:entity/add (multipart)
pub async fn add(
    State(state): State<AppState>,
    Path(entity): Path<String>,
    multipart: Multipart,
) -> Reply {
    let result = async {
        let submission = read_submission(multipart).await?;
        authorize(&state, &submission.token)?;
        let kind = service::resolve_kind(&entity)?;
        let id = service::add(&state.db, kind, &submission.values).await?;
        Ok::<_, ServiceError>(ApiEnvelope {
            data: Some(json!({ "id": id })),
            ..ApiEnvelope::ok_message(format!("{} added successfully", kind.singular()))
        })
    }
    .await;
    reply("add", result)
}

/// POST /:entity/update (multipart, `id` first)
pub async fn update(
    State(state): State<AppState>,
    Path(entity): Path<String>,
    multipart: Multipart,
) -> Reply {
    let result = async {
        let submission = read_submission(multipart).await?;
        authorize(&state, &submission.token)?;
        let kind = service::resolve_kind(&entity)?;
        let id = submission
            .id
            .as_deref()
            .ok_or_else(|| ServiceError::Invalid("Missing record id".into()))
            .and_then(parse_id)?;
        service::update(&state.db, kind, id, &submission.values).await?;
        Ok::<_, ServiceError>(ApiEnvelope::ok_message(format!(
            "{} updated successfully",
            kind.singular()
        )))
    }
    .await;
    reply("update", result)
}

/// GET /:entity/change-status/:id/:status/:token
pub async fn change_status(
    State(state): State<AppState>,
    Path((entity, id, status, token)): Path<(String, String, String, String)>,
) -> Reply {
    let result = async {
        authorize(&state, &token)?;
        let kind = service::resolve_kind(&entity)?;
        let id = parse_id(&id)?;
        let applied = service::change_status(&state.db, kind, id, &status).await?;
        let verb = match applied {
            RecordStatus::Active => "activated",
            RecordStatus::Inactive => "deactivated",
        };
        Ok::<_, ServiceError>(ApiEnvelope::ok_message(format!(
            "{} {}",
            kind.singular(),
            verb
        )))
    }
    .await;
    reply("change-status", result)
}

/// GET /:entity/change-stage/:id/:stage/:token (production only)
pub async fn change_stage(
    State(state): State<AppState>,
    Path((entity, id, stage, token)): Path<(String, String, String, String)>,
) -> Reply {
    let result = async {
        authorize(&state, &token)?;
        let kind = service::resolve_kind(&entity)?;
        if kind != EntityKind::ProductionBatch {
            return Err(ServiceError::Invalid(format!(
                "{} has no stages",
                kind.singular()
            )));
        }
        let id = parse_id(&id)?;
        let applied = service::change_stage(&state.db, id, &stage).await?;
        Ok::<_, ServiceError>(ApiEnvelope::ok_message(format!(
            "Batch moved to {}",
            applied.label()
        )))
    }
    .await;
    reply("change-stage", result)
}

/// Multipart body split into the record id, session token and form values.
#[derive(Debug, Default, PartialEq)]
struct Submission {
    id: Option<String>,
    token: String,
    values: FormValues,
}

impl Submission {
    fn from_parts(parts: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut submission = Submission::default();
        for (name, value) in parts {
            match name.as_str() {
                "id" => submission.id = Some(value),
                "token" => submission.token = value,
                _ => {
                    submission.values.insert(name, value);
                }
            }
        }
        submission
    }
}

async fn read_submission(mut multipart: Multipart) -> ServiceResult<Submission> {
    let malformed = |e: axum::extract::multipart::MultipartError| {
        ServiceError::Invalid(format!("Malformed form data: {}", e.body_text()))
    };
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field.text().await.map_err(malformed)?;
        parts.push((name, value));
    }
    Ok(Submission::from_parts(parts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::test_config;
    use crate::shared::data::db::connect_in_memory;
    use contracts::domain::a010_master_data::aggregate::Brand;
    use contracts::shared::api::{decode_ack, decode_list, ApiError};

    async fn state() -> AppState {
        AppState::new(connect_in_memory().await.unwrap(), test_config())
    }

    fn path2(a: &str, b: &str) -> Path<(String, String)> {
        Path((a.to_string(), b.to_string()))
    }

    fn path4(a: &str, b: &str, c: &str, d: &str) -> Path<(String, String, String, String)> {
        Path((a.to_string(), b.to_string(), c.to_string(), d.to_string()))
    }

    fn body(reply: Reply) -> String {
        serde_json::to_string(&reply.0).unwrap()
    }

    #[test]
    fn submission_splits_id_token_and_values() {
        let parts = [("id", "7"), ("name", "Acme"), ("code", ""), ("token", "t")]
            .map(|(k, v)| (k.to_string(), v.to_string()));
        let submission = Submission::from_parts(parts);
        assert_eq!(submission.id.as_deref(), Some("7"));
        assert_eq!(submission.token, "t");
        assert_eq!(submission.values.len(), 2);
        assert_eq!(submission.values["name"], "Acme");
    }

    #[tokio::test]
    async fn wrong_token_yields_err_flag() {
        let state = state().await;
        let reply = get_all(State(state), path2("brand", "nope")).await;
        let err = decode_list::<Brand>(&body(reply)).unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                code: 1,
                message: "Invalid or expired session token".into()
            }
        );
    }

    #[tokio::test]
    async fn unknown_entity_yields_err_flag() {
        let state = state().await;
        let reply = get_all(State(state), path2("gadget", "dev-token")).await;
        assert_eq!(reply.0.err_flag, 1);
        assert_eq!(reply.0.message.as_deref(), Some("Unknown entity 'gadget'"));
    }

    #[tokio::test]
    async fn status_change_round_trip() {
        let state = state().await;
        let mut values = FormValues::new();
        values.insert("name".into(), "Acme".into());
        let id = service::add(&state.db, EntityKind::Brand, &values)
            .await
            .unwrap();

        let reply = change_status(
            State(state.clone()),
            path4("brand", &id.to_string(), "0", "dev-token"),
        )
        .await;
        assert_eq!(decode_ack(&body(reply)).unwrap(), "Brand deactivated");

        let reply = get_all(State(state), path2("brand", "dev-token")).await;
        let brands: Vec<Brand> = decode_list(&body(reply)).unwrap();
        assert_eq!(brands.len(), 1);
        assert_eq!(brands[0].status, RecordStatus::Inactive);
    }

    #[tokio::test]
    async fn stage_change_is_production_only() {
        let state = state().await;
        let reply = change_stage(
            State(state),
            path4("brand", "1", "completed", "dev-token"),
        )
        .await;
        assert_eq!(reply.0.message.as_deref(), Some("Brand has no stages"));
    }

    #[tokio::test]
    async fn bad_id_is_rejected() {
        let state = state().await;
        let reply = change_status(State(state), path4("brand", "abc", "1", "dev-token")).await;
        assert_eq!(reply.0.err_flag, 1);
        assert_eq!(reply.0.message.as_deref(), Some("Invalid id 'abc'"));
    }
}
