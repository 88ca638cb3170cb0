//! Lookup tables edited through identical CRUD screens.

use serde::{Deserialize, Serialize};

use crate::domain::common::lenient::{de_i64, de_opt_id, de_string, id_to_input};
use crate::domain::common::{Entity, EntityKind, RecordStatus};
use crate::shared::form::{FieldKind, FieldSpec, FormValues};
use crate::shared::list_query::FilterSpec;

// ============================================================================
// Brand / Category / Client type: name + code + description
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    #[serde(deserialize_with = "de_string")]
    pub name: String,
    #[serde(deserialize_with = "de_string")]
    pub code: String,
    #[serde(deserialize_with = "de_string")]
    pub description: String,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    #[serde(deserialize_with = "de_string")]
    pub name: String,
    #[serde(deserialize_with = "de_string")]
    pub code: String,
    #[serde(deserialize_with = "de_string")]
    pub description: String,
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientType {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    #[serde(deserialize_with = "de_string")]
    pub name: String,
    #[serde(deserialize_with = "de_string")]
    pub code: String,
    #[serde(deserialize_with = "de_string")]
    pub description: String,
    pub status: RecordStatus,
}

const NAMED_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Name", FieldKind::Text),
    FieldSpec::optional("code", "Code", FieldKind::Text),
    FieldSpec::optional("description", "Description", FieldKind::TextArea),
];

fn named_values(name: &str, code: &str, description: &str) -> FormValues {
    FormValues::from([
        ("name".to_string(), name.to_string()),
        ("code".to_string(), code.to_string()),
        ("description".to_string(), description.to_string()),
    ])
}

impl Entity for Brand {
    const KIND: EntityKind = EntityKind::Brand;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.code.as_str()]
    }

    fn form_fields() -> &'static [FieldSpec] {
        NAMED_FIELDS
    }

    fn form_values(&self) -> FormValues {
        named_values(&self.name, &self.code, &self.description)
    }
}

impl Entity for Category {
    const KIND: EntityKind = EntityKind::Category;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.code.as_str()]
    }

    fn form_fields() -> &'static [FieldSpec] {
        NAMED_FIELDS
    }

    fn form_values(&self) -> FormValues {
        named_values(&self.name, &self.code, &self.description)
    }
}

impl Entity for ClientType {
    const KIND: EntityKind = EntityKind::ClientType;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.code.as_str()]
    }

    fn form_fields() -> &'static [FieldSpec] {
        NAMED_FIELDS
    }

    fn form_values(&self) -> FormValues {
        named_values(&self.name, &self.code, &self.description)
    }
}

// ============================================================================
// Location
// ============================================================================

pub const LOCATION_TYPES: &[&str] = &["Warehouse", "Factory", "Store"];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    #[serde(deserialize_with = "de_string")]
    pub name: String,
    #[serde(deserialize_with = "de_string", alias = "locationType")]
    pub location_type: String,
    #[serde(deserialize_with = "de_string")]
    pub address: String,
    pub status: RecordStatus,
}

const LOCATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Name", FieldKind::Text),
    FieldSpec::required("location_type", "Type", FieldKind::Select(LOCATION_TYPES)),
    FieldSpec::optional("address", "Address", FieldKind::TextArea),
];

impl Entity for Location {
    const KIND: EntityKind = EntityKind::Location;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.address.as_str()]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "location_type" => Some(self.location_type.clone()),
            _ => None,
        }
    }

    fn filters() -> &'static [FilterSpec] {
        const FILTERS: &[FilterSpec] = &[FilterSpec::fixed("location_type", "Type", LOCATION_TYPES)];
        FILTERS
    }

    fn form_fields() -> &'static [FieldSpec] {
        LOCATION_FIELDS
    }

    fn form_values(&self) -> FormValues {
        FormValues::from([
            ("name".to_string(), self.name.clone()),
            ("location_type".to_string(), self.location_type.clone()),
            ("address".to_string(), self.address.clone()),
        ])
    }
}

// ============================================================================
// Unit
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Unit {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    #[serde(deserialize_with = "de_string")]
    pub name: String,
    #[serde(deserialize_with = "de_string")]
    pub symbol: String,
    pub status: RecordStatus,
}

const UNIT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Name", FieldKind::Text),
    FieldSpec::required("symbol", "Symbol", FieldKind::Text),
];

impl Entity for Unit {
    const KIND: EntityKind = EntityKind::Unit;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn display_name(&self) -> String {
        if self.symbol.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.symbol)
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.symbol.as_str()]
    }

    fn form_fields() -> &'static [FieldSpec] {
        UNIT_FIELDS
    }

    fn form_values(&self) -> FormValues {
        FormValues::from([
            ("name".to_string(), self.name.clone()),
            ("symbol".to_string(), self.symbol.clone()),
        ])
    }
}

// ============================================================================
// Payment term
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentTerm {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    #[serde(deserialize_with = "de_string")]
    pub name: String,
    #[serde(deserialize_with = "de_i64", alias = "creditDays")]
    pub days: i64,
    #[serde(deserialize_with = "de_string")]
    pub description: String,
    pub status: RecordStatus,
}

const PAYMENT_TERM_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Name", FieldKind::Text),
    FieldSpec::required("days", "Credit Days", FieldKind::Number),
    FieldSpec::optional("description", "Description", FieldKind::TextArea),
];

impl Entity for PaymentTerm {
    const KIND: EntityKind = EntityKind::PaymentTerm;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn form_fields() -> &'static [FieldSpec] {
        PAYMENT_TERM_FIELDS
    }

    fn form_values(&self) -> FormValues {
        FormValues::from([
            ("name".to_string(), self.name.clone()),
            ("days".to_string(), self.days.to_string()),
            ("description".to_string(), self.description.clone()),
        ])
    }
}

// ============================================================================
// Admin users & roles
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminUser {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    #[serde(deserialize_with = "de_string")]
    pub username: String,
    #[serde(deserialize_with = "de_string", alias = "fullName")]
    pub full_name: String,
    #[serde(deserialize_with = "de_string")]
    pub email: String,
    #[serde(deserialize_with = "de_string")]
    pub phone: String,
    #[serde(deserialize_with = "de_opt_id", alias = "roleId")]
    pub role_id: Option<i64>,
    #[serde(deserialize_with = "de_string", alias = "roleName")]
    pub role_name: String,
    pub status: RecordStatus,
}

const ADMIN_USER_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("username", "Username", FieldKind::Text),
    FieldSpec::required("full_name", "Full Name", FieldKind::Text),
    FieldSpec::required("email", "Email", FieldKind::Email),
    FieldSpec::optional("phone", "Phone", FieldKind::Text),
    FieldSpec::required("role_id", "Role", FieldKind::Lookup(EntityKind::AdminRole)),
];

impl Entity for AdminUser {
    const KIND: EntityKind = EntityKind::AdminUser;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn display_name(&self) -> String {
        self.username.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.username.as_str(),
            self.full_name.as_str(),
            self.email.as_str(),
        ]
    }

    fn filter_value(&self, key: &str) -> Option<String> {
        match key {
            "role" => Some(self.role_name.clone()),
            _ => None,
        }
    }

    fn filters() -> &'static [FilterSpec] {
        const FILTERS: &[FilterSpec] = &[FilterSpec::from_data("role", "Role")];
        FILTERS
    }

    fn form_fields() -> &'static [FieldSpec] {
        ADMIN_USER_FIELDS
    }

    fn form_values(&self) -> FormValues {
        FormValues::from([
            ("username".to_string(), self.username.clone()),
            ("full_name".to_string(), self.full_name.clone()),
            ("email".to_string(), self.email.clone()),
            ("phone".to_string(), self.phone.clone()),
            ("role_id".to_string(), id_to_input(self.role_id)),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminRole {
    #[serde(deserialize_with = "de_i64")]
    pub id: i64,
    #[serde(deserialize_with = "de_string")]
    pub name: String,
    /// Comma-separated module keys the role may open.
    #[serde(deserialize_with = "de_string")]
    pub permissions: String,
    #[serde(deserialize_with = "de_string")]
    pub description: String,
    pub status: RecordStatus,
}

impl AdminRole {
    pub fn permission_list(&self) -> Vec<&str> {
        self.permissions
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

const ADMIN_ROLE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Role Name", FieldKind::Text),
    FieldSpec::optional("permissions", "Permissions", FieldKind::TextArea),
    FieldSpec::optional("description", "Description", FieldKind::TextArea),
];

impl Entity for AdminRole {
    const KIND: EntityKind = EntityKind::AdminRole;

    fn id(&self) -> i64 {
        self.id
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.permissions.as_str()]
    }

    fn form_fields() -> &'static [FieldSpec] {
        ADMIN_ROLE_FIELDS
    }

    fn form_values(&self) -> FormValues {
        FormValues::from([
            ("name".to_string(), self.name.clone()),
            ("permissions".to_string(), self.permissions.clone()),
            ("description".to_string(), self.description.clone()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_display_includes_symbol() {
        let unit = Unit {
            name: "Kilogram".into(),
            symbol: "kg".into(),
            ..Default::default()
        };
        assert_eq!(unit.display_name(), "Kilogram (kg)");
    }

    #[test]
    fn payment_term_days_from_string() {
        let term: PaymentTerm =
            serde_json::from_str(r#"{"id":2,"name":"Net 30","creditDays":"30"}"#).unwrap();
        assert_eq!(term.days, 30);
    }

    #[test]
    fn role_permissions_split() {
        let role = AdminRole {
            permissions: "client, vendor,,production ".into(),
            ..Default::default()
        };
        assert_eq!(role.permission_list(), vec!["client", "vendor", "production"]);
    }
}
