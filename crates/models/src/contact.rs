use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{kind::RecordKind, record::Record};

/// Message sent through the website contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactInquiry {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub message: String,
    /// e.g. `ja` or `en`
    #[serde(default)]
    pub language: Option<String>,
}

impl Record for ContactInquiry {
    const KIND: RecordKind = RecordKind::ContactInquiry;
}
