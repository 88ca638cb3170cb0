use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Soft-delete flag carried by every record (`1` active, `0` inactive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum RecordStatus {
    Inactive,
    #[default]
    Active,
}

impl RecordStatus {
    pub fn from_flag(flag: i64) -> Self {
        if flag == 0 {
            RecordStatus::Inactive
        } else {
            RecordStatus::Active
        }
    }

    /// Numeric form used in URLs and storage.
    pub fn as_flag(self) -> u8 {
        match self {
            RecordStatus::Inactive => 0,
            RecordStatus::Active => 1,
        }
    }

    /// The value sent by the status-toggle action.
    pub fn toggled(self) -> Self {
        match self {
            RecordStatus::Inactive => RecordStatus::Active,
            RecordStatus::Active => RecordStatus::Inactive,
        }
    }

    pub fn is_active(self) -> bool {
        self == RecordStatus::Active
    }

    pub fn label(self) -> &'static str {
        match self {
            RecordStatus::Inactive => "Inactive",
            RecordStatus::Active => "Active",
        }
    }

    /// Parses the loose spellings the backend has been seen to emit.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "active" | "enabled" => Some(RecordStatus::Active),
            "0" | "false" | "inactive" | "disabled" => Some(RecordStatus::Inactive),
            _ => None,
        }
    }
}

impl Serialize for RecordStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_flag())
    }
}

impl<'de> Deserialize<'de> for RecordStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let status = match &value {
            Value::Number(n) => n.as_i64().map(RecordStatus::from_flag),
            Value::Bool(b) => Some(if *b {
                RecordStatus::Active
            } else {
                RecordStatus::Inactive
            }),
            Value::String(s) => RecordStatus::parse(s),
            Value::Null => Some(RecordStatus::default()),
            _ => None,
        };
        status.ok_or_else(|| serde::de::Error::custom(format!("invalid status: {}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_flag() {
        assert_eq!(RecordStatus::Active.toggled().as_flag(), 0);
        assert_eq!(RecordStatus::Inactive.toggled().as_flag(), 1);
    }

    #[test]
    fn deserializes_loose_spellings() {
        let parsed: Vec<RecordStatus> =
            serde_json::from_str(r#"[1, 0, "1", "0", true, false, "Active", "inactive", null]"#)
                .unwrap();
        assert_eq!(
            parsed,
            vec![
                RecordStatus::Active,
                RecordStatus::Inactive,
                RecordStatus::Active,
                RecordStatus::Inactive,
                RecordStatus::Active,
                RecordStatus::Inactive,
                RecordStatus::Active,
                RecordStatus::Inactive,
                RecordStatus::Active,
            ]
        );
    }

    #[test]
    fn rejects_unknown_text() {
        assert!(serde_json::from_str::<RecordStatus>(r#""archived""#).is_err());
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&RecordStatus::Inactive).unwrap(), "0");
    }
}
