//! One-off repair operations run by the maintenance binaries.

use anyhow::{Context, Result};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use tracing::warn;

use super::Database;

/// Aggregate documents that predate the `service_id` field live here.
pub const AGGREGATES_COLLECTION: &str = "service_aggregates_latest_dataset_values";

/// Transaction summaries, some of which were ingested with an empty
/// `service_id`.
pub const SUMMARIES_COLLECTION: &str = "transactional_services_summaries";

/// What the backfill pass did, for operator audit output.
#[derive(Debug, Default)]
pub struct BackfillOutcome {
    /// Original state of every document that received a `service_id`.
    pub patched: Vec<Document>,
    /// Documents left untouched because `dashboard_slug` was missing too.
    pub skipped: Vec<Document>,
}

pub fn needs_service_id(document: &Document) -> bool {
    !document.contains_key("service_id")
}

/// Update that copies `dashboard_slug` into `service_id`, or `None` when
/// there is no slug to copy. Documents without a slug are skipped rather
/// than given a null `service_id`.
pub fn service_id_update(document: &Document) -> Option<Document> {
    document
        .get("dashboard_slug")
        .map(|slug| doc! { "$set": { "service_id": slug.clone() } })
}

impl Database {
    /// Scans the aggregates collection once and sets `service_id` from
    /// `dashboard_slug` on every document that lacks it. The first failed
    /// update aborts the scan.
    pub async fn backfill_missing_service_ids(&self) -> Result<BackfillOutcome> {
        let collection = self.collection(AGGREGATES_COLLECTION);
        let mut outcome = BackfillOutcome::default();

        let mut cursor = collection.find(doc! {}).await?;
        while let Some(document) = cursor.try_next().await? {
            if !needs_service_id(&document) {
                continue;
            }
            match service_id_update(&document) {
                Some(update) => {
                    let id = document
                        .get("_id")
                        .cloned()
                        .context("stored document has no _id")?;
                    collection.update_one(doc! { "_id": id }, update).await?;
                    outcome.patched.push(document);
                }
                None => {
                    warn!(
                        "document {:?} has neither service_id nor dashboard_slug, leaving it untouched",
                        document.get("_id")
                    );
                    outcome.skipped.push(document);
                }
            }
        }

        Ok(outcome)
    }

    pub async fn count_summary_records(&self) -> Result<u64> {
        let count = self
            .collection(SUMMARIES_COLLECTION)
            .count_documents(doc! {})
            .await?;
        Ok(count)
    }

    /// Deletes every summary whose `service_id` is exactly the empty string.
    /// No trimming, no pattern matching; deletions are immediate.
    pub async fn delete_empty_summary_records(&self) -> Result<u64> {
        let result = self
            .collection(SUMMARIES_COLLECTION)
            .delete_many(doc! { "service_id": "" })
            .await?;
        Ok(result.deleted_count)
    }
}
