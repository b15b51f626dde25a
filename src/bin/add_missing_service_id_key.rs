/*!
 * One-off maintenance tool that backfills `service_id` on aggregate
 * documents that predate the field, copying the value from `dashboard_slug`.
 *
 * Prints each patched document's original state as a JSON line, then the
 * number of documents patched. Safe to re-run; a second pass finds nothing
 * to patch.
 *
 * Usage: cargo run --bin add_missing_service_id_key
 */

use anyhow::Result;
use tracing::{info, warn};

use platform_read_api::{
    config::Config,
    db::{maintenance::AGGREGATES_COLLECTION, Database},
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let db = Database::new(&config.mongodb_url, &config.database_name).await?;

    info!(
        "Scanning {} for documents without a service_id...",
        AGGREGATES_COLLECTION
    );

    let outcome = db.backfill_missing_service_ids().await?;

    for document in &outcome.patched {
        println!("{}", serde_json::to_string(document)?);
    }
    println!("{}", outcome.patched.len());

    if !outcome.skipped.is_empty() {
        warn!(
            "{} document(s) had no dashboard_slug to copy from and were left untouched",
            outcome.skipped.len()
        );
    }
    info!(
        "Backfill complete: {} patched, {} skipped",
        outcome.patched.len(),
        outcome.skipped.len()
    );

    Ok(())
}
