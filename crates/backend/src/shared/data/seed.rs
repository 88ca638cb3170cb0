use contracts::domain::common::EntityKind;
use contracts::shared::form::FormValues;
use sea_orm::DatabaseConnection;

use crate::domain::records::{repository, service};
use crate::shared::config::Config;

const UNITS: &[(&str, &str)] = &[("Kilogram", "kg"), ("Litre", "l"), ("Piece", "pc"), ("Metre", "m")];
const CATEGORIES: &[&str] = &["Raw Steel", "Packaging", "Furniture", "Electrical"];
const PAYMENT_TERMS: &[(&str, &str)] = &[("Advance", "0"), ("Net 15", "15"), ("Net 30", "30")];
const CLIENT_TYPES: &[&str] = &["Retail", "Wholesale", "Distributor"];

fn values(pairs: &[(&str, &str)]) -> FormValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Starter master data so the dropdowns of a fresh install are not empty.
/// Does nothing once the database holds any record.
pub async fn seed_master_data(db: &DatabaseConnection, config: &Config) -> anyhow::Result<bool> {
    if repository::count(db).await? > 0 {
        return Ok(false);
    }
    tracing::info!("Empty database, inserting starter master data");

    for &(name, symbol) in UNITS {
        add(db, EntityKind::Unit, &[("name", name), ("symbol", symbol)]).await?;
    }
    for &name in CATEGORIES {
        add(db, EntityKind::Category, &[("name", name)]).await?;
    }
    for &(name, days) in PAYMENT_TERMS {
        add(db, EntityKind::PaymentTerm, &[("name", name), ("days", days)]).await?;
    }
    for &name in CLIENT_TYPES {
        add(db, EntityKind::ClientType, &[("name", name)]).await?;
    }
    add(
        db,
        EntityKind::Location,
        &[("name", "Main Warehouse"), ("location_type", "Warehouse")],
    )
    .await?;

    let role_id = add(
        db,
        EntityKind::AdminRole,
        &[
            ("name", "Administrator"),
            ("permissions", "*"),
            ("description", "Full access"),
        ],
    )
    .await?;
    let role_id = role_id.to_string();
    let email = format!("{}@localhost", config.auth.username);
    add(
        db,
        EntityKind::AdminUser,
        &[
            ("username", config.auth.username.as_str()),
            ("full_name", "Administrator"),
            ("email", email.as_str()),
            ("role_id", role_id.as_str()),
        ],
    )
    .await?;

    Ok(true)
}

async fn add(db: &DatabaseConnection, kind: EntityKind, pairs: &[(&str, &str)]) -> anyhow::Result<i64> {
    service::add(db, kind, &values(pairs))
        .await
        .map_err(|e| anyhow::anyhow!("seeding {} failed: {}", kind, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::test_config;
    use crate::shared::data::db::connect_in_memory;

    #[tokio::test]
    async fn seeds_once() {
        let db = connect_in_memory().await.unwrap();
        let config = test_config();
        assert!(seed_master_data(&db, &config).await.unwrap());
        assert!(!seed_master_data(&db, &config).await.unwrap());

        let units = service::list(&db, EntityKind::Unit).await.unwrap();
        assert_eq!(units.len(), UNITS.len());

        let users = service::list(&db, EntityKind::AdminUser).await.unwrap();
        assert_eq!(users[0]["username"], "admin");
        assert_eq!(users[0]["role_name"], "Administrator");
    }
}
