use configs::DatabaseConfig;
use mongodb::{options::ClientOptions, Client};
use tracing::info;

use crate::errors::ModelError;

/// Build a MongoDB client from config. Returns `Ok(None)` when no URL is
/// configured. The driver connects lazily, so this does not touch the
/// network beyond SRV/TXT resolution for `mongodb+srv://` URLs.
pub async fn connect(cfg: &DatabaseConfig) -> Result<Option<Client>, ModelError> {
    if !cfg.is_configured() {
        info!(event = "db_not_configured", "DATABASE_URL not set; running without persistence");
        return Ok(None);
    }
    let mut options = ClientOptions::parse(cfg.url.as_str())
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    options.app_name = Some(cfg.app_name.clone());
    options.connect_timeout = Some(cfg.connect_timeout());
    options.server_selection_timeout = Some(cfg.server_selection_timeout());
    let client = Client::with_options(options).map_err(|e| ModelError::Db(e.to_string()))?;
    info!(event = "db_client_ready", database = %cfg.name, "document store client created");
    Ok(Some(client))
}
