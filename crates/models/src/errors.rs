use std::fmt;

use serde::Serialize;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

pub const NO_ITEMS_PROVIDED: &str = "No items provided";

/// One violated constraint, addressed by a dotted/indexed field path
/// such as `items[0].quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {}", join_fields(.0))]
    Validation(Vec<FieldError>),
    #[error("malformed payload: {0}")]
    Malformed(String),
    #[error("{}", NO_ITEMS_PROVIDED)]
    EmptyOrder,
    #[error("invalid collection mapping: {0}")]
    Collection(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn fields(&self) -> &[FieldError] {
        match self {
            ModelError::Validation(fields) => fields,
            _ => &[],
        }
    }
}

impl From<ValidationErrors> for ModelError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Vec::new();
        flatten(&errors, "", &mut fields);
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        ModelError::Validation(fields)
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for ModelError {
    fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let field = e.path().to_string();
        let message = e.into_inner().to_string();
        if field.is_empty() || field == "." {
            return ModelError::Malformed(message);
        }
        ModelError::Validation(vec![FieldError { field, message }])
    }
}

fn join_fields(fields: &[FieldError]) -> String {
    fields.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

fn flatten(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldError>) {
    for (name, kind) in errors.errors() {
        let path = if prefix.is_empty() { name.to_string() } else { format!("{prefix}.{name}") };
        match kind {
            ValidationErrorsKind::Field(list) => {
                for err in list {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| describe(&err.code));
                    out.push(FieldError { field: path.clone(), message });
                }
            }
            ValidationErrorsKind::Struct(inner) => flatten(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (idx, inner) in items {
                    flatten(inner, &format!("{path}[{idx}]"), out);
                }
            }
        }
    }
}

fn describe(code: &str) -> String {
    match code {
        "email" => "value is not a valid email address".into(),
        "range" => "value is out of range".into(),
        "length" => "value has an invalid length".into(),
        other => format!("constraint `{other}` violated"),
    }
}
