//! End-to-end scenarios run against a live server

pub mod core;
pub mod soft_delete;

use anyhow::bail;
use uuid::Uuid;

use crate::api_client::ApiClient;

/// Names accepted by [`run_scenario`]
pub const SCENARIOS: &[&str] = &["basic", "soft-delete", "all"];

/// Run a specific scenario by name
pub async fn run_scenario(name: &str, client: &ApiClient) -> anyhow::Result<()> {
    match name {
        "basic" => core::basic(client).await,
        "soft-delete" => soft_delete::soft_delete(client).await,
        "all" => {
            tracing::info!("🧪 Running full scenario suite");
            core::basic(client).await?;
            soft_delete::soft_delete(client).await
        }
        other => bail!("Unknown scenario '{}', expected one of {:?}", other, SCENARIOS),
    }
}

/// Short suffix that keeps emails unique across runs against one database
pub(crate) fn run_tag() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}
