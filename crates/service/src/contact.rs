use models::{parse_record, ContactInquiry, Record};
use serde_json::Value;
use tracing::instrument;

use crate::{errors::ServiceError, storage::StoreGateway};

/// Outcome of a write: `id` is `None` when no store is configured.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: Option<String>,
}

impl Submission {
    pub fn stored(&self) -> bool {
        self.id.is_some()
    }
}

/// Validate and store a contact inquiry. Nothing is written unless the
/// whole payload is valid.
#[instrument(skip_all)]
pub async fn submit_inquiry(store: &StoreGateway, payload: Value) -> Result<Submission, ServiceError> {
    let inquiry: ContactInquiry = parse_record(payload)?;
    let id = store.insert(ContactInquiry::KIND, inquiry.to_document()?).await?;
    Ok(Submission { id })
}
