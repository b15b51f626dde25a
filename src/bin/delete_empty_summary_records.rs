/*!
 * One-off maintenance tool that deletes transaction summaries whose
 * `service_id` is exactly the empty string, printing the collection's
 * document count before and after. Deletions are immediate, there is no
 * rollback. Safe to re-run; a second pass deletes nothing.
 *
 * Usage: cargo run --bin delete_empty_summary_records
 */

use anyhow::Result;
use serde_json::json;
use tracing::info;

use platform_read_api::{
    config::Config,
    db::{maintenance::SUMMARIES_COLLECTION, Database},
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let db = Database::new(&config.mongodb_url, &config.database_name).await?;

    info!(
        "Removing documents with an empty service_id from {}...",
        SUMMARIES_COLLECTION
    );

    let before = db.count_summary_records().await?;
    println!("{}", json!({ "Record count before remove": before }));

    let deleted = db.delete_empty_summary_records().await?;

    let after = db.count_summary_records().await?;
    println!("{}", json!({ "Record count after remove": after }));

    info!("Removed {deleted} document(s)");

    Ok(())
}
