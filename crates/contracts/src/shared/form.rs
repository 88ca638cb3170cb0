//! Form descriptors, required-field validation and multipart assembly.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::common::EntityKind;

/// Key → text value of every form input, mirroring a record's attributes.
pub type FormValues = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Email,
    Date,
    TextArea,
    /// Fixed option list; the first option is the default on create.
    Select(&'static [&'static str]),
    /// Id of a record of another entity, picked from its list.
    Lookup(EntityKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: true,
        }
    }

    pub const fn optional(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    Missing { key: &'static str, label: &'static str },
    #[error("{label} must be a number")]
    NotANumber { key: &'static str, label: &'static str },
    #[error("{label} must be a valid email address")]
    InvalidEmail { key: &'static str, label: &'static str },
}

impl ValidationError {
    pub fn key(&self) -> &'static str {
        match self {
            ValidationError::Missing { key, .. }
            | ValidationError::NotANumber { key, .. }
            | ValidationError::InvalidEmail { key, .. } => key,
        }
    }
}

/// Empty values for a create dialog; selects start on their first option.
pub fn blank_values(fields: &[FieldSpec]) -> FormValues {
    fields
        .iter()
        .map(|f| {
            let initial = match f.kind {
                FieldKind::Select(options) => options.first().copied().unwrap_or_default(),
                _ => "",
            };
            (f.key.to_string(), initial.to_string())
        })
        .collect()
}

/// Checks fields in declaration order and reports the first problem.
pub fn validate(fields: &[FieldSpec], values: &FormValues) -> Result<(), ValidationError> {
    for field in fields {
        let value = values.get(field.key).map(|v| v.trim()).unwrap_or_default();
        if value.is_empty() {
            if field.required {
                return Err(ValidationError::Missing {
                    key: field.key,
                    label: field.label,
                });
            }
            continue;
        }
        match field.kind {
            FieldKind::Number if value.parse::<f64>().is_err() => {
                return Err(ValidationError::NotANumber {
                    key: field.key,
                    label: field.label,
                });
            }
            FieldKind::Email if !value.contains('@') => {
                return Err(ValidationError::InvalidEmail {
                    key: field.key,
                    label: field.label,
                });
            }
            _ => {}
        }
    }
    Ok(())
}

/// Ordered `(name, value)` pairs of the multipart body.
///
/// `id` leads on update; form values follow in field order; `token` is last.
pub fn multipart_fields(
    fields: &[FieldSpec],
    mode: FormMode,
    values: &FormValues,
    token: &str,
) -> Vec<(String, String)> {
    let mut parts = Vec::with_capacity(fields.len() + 2);
    if let FormMode::Update(id) = mode {
        parts.push(("id".to_string(), id.to_string()));
    }
    for field in fields {
        let value = values
            .get(field.key)
            .map(|v| v.trim().to_string())
            .unwrap_or_default();
        parts.push((field.key.to_string(), value));
    }
    parts.push(("token".to_string(), token.to_string()));
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::required("name", "Name", FieldKind::Text),
        FieldSpec::optional("email", "Email", FieldKind::Email),
        FieldSpec::optional("credit_limit", "Credit Limit", FieldKind::Number),
        FieldSpec::required("grade", "Grade", FieldKind::Select(&["A", "B"])),
    ];

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_required_field_blocks_submission() {
        let form = blank_values(FIELDS);
        let err = validate(FIELDS, &form).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Missing {
                key: "name",
                label: "Name"
            }
        );
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn whitespace_counts_as_missing() {
        let form = values(&[("name", "   "), ("grade", "A")]);
        assert_eq!(validate(FIELDS, &form).unwrap_err().key(), "name");
    }

    #[test]
    fn optional_fields_are_checked_only_when_filled() {
        let ok = values(&[("name", "Acme"), ("grade", "B")]);
        assert!(validate(FIELDS, &ok).is_ok());

        let bad_email = values(&[("name", "Acme"), ("email", "acme.com"), ("grade", "B")]);
        assert_eq!(validate(FIELDS, &bad_email).unwrap_err().key(), "email");

        let bad_number = values(&[("name", "Acme"), ("credit_limit", "lots"), ("grade", "B")]);
        assert_eq!(
            validate(FIELDS, &bad_number).unwrap_err().key(),
            "credit_limit"
        );
    }

    #[test]
    fn select_defaults_to_first_option() {
        assert_eq!(blank_values(FIELDS).get("grade").map(String::as_str), Some("A"));
    }

    #[test]
    fn multipart_orders_id_fields_token() {
        let form = values(&[("name", " Acme "), ("grade", "A")]);
        let parts = multipart_fields(FIELDS, FormMode::Update(9), &form, "tok");
        let names: Vec<&str> = parts.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, ["id", "name", "email", "credit_limit", "grade", "token"]);
        assert_eq!(parts[0].1, "9");
        assert_eq!(parts[1].1, "Acme");
        assert_eq!(parts[5].1, "tok");
    }

    #[test]
    fn create_has_no_id() {
        let parts = multipart_fields(FIELDS, FormMode::Create, &FormValues::new(), "tok");
        assert_eq!(parts.first().map(|(k, _)| k.as_str()), Some("name"));
    }
}
