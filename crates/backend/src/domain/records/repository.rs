use chrono::Utc;
use contracts::domain::common::{EntityKind, RecordStatus};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde_json::{Map, Value};

/// One row per record of any entity; the entity's fields live in `data` as a JSON object.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub entity: String,
    pub status: i32,
    pub data: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn record_status(&self) -> RecordStatus {
        RecordStatus::from_flag(self.status as i64)
    }

    /// Stored fields; a corrupt blob reads as an empty object.
    pub fn fields(&self) -> Map<String, Value> {
        match serde_json::from_str::<Value>(&self.data) {
            Ok(Value::Object(map)) => map,
            _ => {
                tracing::warn!(id = self.id, entity = %self.entity, "record data is not a JSON object");
                Map::new()
            }
        }
    }
}

pub async fn list(db: &DatabaseConnection, kind: EntityKind) -> anyhow::Result<Vec<Model>> {
    let items = Entity::find()
        .filter(Column::Entity.eq(kind.path()))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(items)
}

pub async fn get(
    db: &DatabaseConnection,
    kind: EntityKind,
    id: i64,
) -> anyhow::Result<Option<Model>> {
    let found = Entity::find_by_id(id)
        .filter(Column::Entity.eq(kind.path()))
        .one(db)
        .await?;
    Ok(found)
}

pub async fn count(db: &DatabaseConnection) -> anyhow::Result<u64> {
    Ok(Entity::find().count(db).await?)
}

pub async fn insert(
    db: &DatabaseConnection,
    kind: EntityKind,
    fields: Map<String, Value>,
) -> anyhow::Result<Model> {
    let now = Utc::now();
    let active = ActiveModel {
        entity: Set(kind.path().to_string()),
        status: Set(RecordStatus::Active.as_flag() as i32),
        data: Set(Value::Object(fields).to_string()),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
        ..Default::default()
    };
    Ok(active.insert(db).await?)
}

/// Replace the stored fields of an existing record.
pub async fn update_fields(
    db: &DatabaseConnection,
    existing: Model,
    fields: Map<String, Value>,
) -> anyhow::Result<Model> {
    let mut active: ActiveModel = existing.into();
    active.data = Set(Value::Object(fields).to_string());
    active.updated_at = Set(Some(Utc::now()));
    Ok(active.update(db).await?)
}

pub async fn set_status(
    db: &DatabaseConnection,
    existing: Model,
    status: RecordStatus,
) -> anyhow::Result<Model> {
    let mut active: ActiveModel = existing.into();
    active.status = Set(status.as_flag() as i32);
    active.updated_at = Set(Some(Utc::now()));
    Ok(active.update(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn insert_then_list_by_entity() {
        let db = connect_in_memory().await.unwrap();
        insert(&db, EntityKind::Unit, fields(json!({"name": "Kilogram"})))
            .await
            .unwrap();
        insert(&db, EntityKind::Brand, fields(json!({"name": "Acme"})))
            .await
            .unwrap();

        let units = list(&db, EntityKind::Unit).await.unwrap();
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].fields()["name"], "Kilogram");
        assert_eq!(units[0].record_status(), RecordStatus::Active);
        assert_eq!(count(&db).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn get_is_scoped_to_entity() {
        let db = connect_in_memory().await.unwrap();
        let unit = insert(&db, EntityKind::Unit, Map::new()).await.unwrap();
        assert!(get(&db, EntityKind::Unit, unit.id).await.unwrap().is_some());
        assert!(get(&db, EntityKind::Brand, unit.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn status_and_fields_update() {
        let db = connect_in_memory().await.unwrap();
        let row = insert(&db, EntityKind::Brand, fields(json!({"name": "Old"})))
            .await
            .unwrap();
        let row = set_status(&db, row, RecordStatus::Inactive).await.unwrap();
        assert_eq!(row.status, 0);
        let row = update_fields(&db, row, fields(json!({"name": "New"})))
            .await
            .unwrap();
        let stored = get(&db, EntityKind::Brand, row.id).await.unwrap().unwrap();
        assert_eq!(stored.fields()["name"], "New");
        assert_eq!(stored.record_status(), RecordStatus::Inactive);
    }
}
