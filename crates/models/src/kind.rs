use std::collections::HashSet;

use crate::errors::ModelError;

/// Every record kind the service knows about. The collection name of each
/// kind is fixed here rather than derived from type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Product,
    ContactInquiry,
    Order,
    User,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::Product,
        RecordKind::ContactInquiry,
        RecordKind::Order,
        RecordKind::User,
    ];

    pub const fn collection(self) -> &'static str {
        match self {
            RecordKind::Product => "product",
            RecordKind::ContactInquiry => "contactinquiry",
            RecordKind::Order => "order",
            RecordKind::User => "user",
        }
    }

    /// Startup check: names are non-empty lowercase ASCII and pairwise distinct.
    pub fn verify_collections() -> Result<(), ModelError> {
        verify(&Self::ALL)
    }
}

fn verify(kinds: &[RecordKind]) -> Result<(), ModelError> {
    let mut seen = HashSet::new();
    for kind in kinds {
        let name = kind.collection();
        if name.is_empty() {
            return Err(ModelError::Collection(format!("{kind:?} has an empty collection name")));
        }
        if !name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
            return Err(ModelError::Collection(format!("{kind:?} collection `{name}` is not lowercase")));
        }
        if !seen.insert(name) {
            return Err(ModelError::Collection(format!("collection `{name}` is used twice")));
        }
    }
    Ok(())
}
