use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{kind::RecordKind, product::default_true, record::Record};

/// Declared for the `user` collection; no route reads or writes it yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub address: String,
    #[validate(range(min = 0, max = 120))]
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Record for User {
    const KIND: RecordKind = RecordKind::User;
}
