use mongodb::bson::{self, Document};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::{errors::ModelError, kind::RecordKind};

/// A schema-checked record stored in the collection of its kind.
pub trait Record: Serialize + DeserializeOwned + Validate {
    const KIND: RecordKind;

    fn to_document(&self) -> Result<Document, ModelError> {
        bson::to_document(self).map_err(|e| ModelError::Malformed(e.to_string()))
    }
}

/// Build a record from untrusted JSON: deserialize, then check every
/// declared constraint. Either a fully valid value or an error naming the
/// offending fields. A wrongly typed value is reported at its path
/// (`items[0].quantity`); only errors without a path, such as a missing
/// top-level field, stay `Malformed`.
pub fn parse_record<T: Record>(value: Value) -> Result<T, ModelError> {
    let record: T = serde_path_to_error::deserialize(value)?;
    record.validate()?;
    Ok(record)
}
