use serde::Serialize;
use tracing::warn;

use crate::storage::StoreGateway;

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

/// Snapshot of backend and store health for the `/test` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnosis {
    pub backend: &'static str,
    pub database: String,
    pub database_url: &'static str,
    pub database_name: Option<String>,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

/// Probe the store. Failures are reported in the result, never returned.
pub async fn diagnose(store: &StoreGateway) -> Diagnosis {
    let mut out = Diagnosis {
        backend: "running",
        database: "not_configured".into(),
        database_url: "not_set",
        database_name: store.database_name().map(str::to_string),
        connection_status: "skipped",
        collections: Vec::new(),
    };
    let Some(listed) = store.list_collections().await else {
        return out;
    };
    out.database_url = "set";
    match listed {
        Ok(mut names) => {
            names.truncate(MAX_COLLECTIONS);
            out.collections = names;
            out.database = "connected".into();
            out.connection_status = "connected";
        }
        Err(e) => {
            warn!(error = %e, "store diagnostic failed");
            let msg: String = e.to_string().chars().take(MAX_ERROR_CHARS).collect();
            out.database = format!("error: {msg}");
            out.connection_status = "failed";
        }
    }
    out
}
