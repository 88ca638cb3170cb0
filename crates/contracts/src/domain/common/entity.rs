use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{EntityKind, RecordStatus};
use crate::shared::form::{FieldSpec, FormValues};
use crate::shared::list_query::FilterSpec;

/// A server-defined record rendered through the list / form / status-toggle template.
pub trait Entity: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> i64;

    fn status(&self) -> RecordStatus;

    /// Human readable label used in dialog titles and dropdowns.
    fn display_name(&self) -> String;

    /// Fields matched (case-insensitive substring) by the search box.
    fn search_fields(&self) -> Vec<&str>;

    /// Value compared by an exact-match dropdown filter with the given key.
    fn filter_value(&self, _key: &str) -> Option<String> {
        None
    }

    /// Dropdown filters shown above the table, besides status.
    fn filters() -> &'static [FilterSpec] {
        &[]
    }

    fn form_fields() -> &'static [FieldSpec];

    /// Current attribute values, used to pre-populate the edit dialog.
    fn form_values(&self) -> FormValues;
}
