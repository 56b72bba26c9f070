use crate::models::{Collection, WriteMode};
use crate::seed::SeedBatch;
use anyhow::{Context, Result as AnyhowResult};
use bson::Document;
use log::info;
use std::future::Future;

/// A document database the seeder can write to.
///
/// Implementations map a [`Collection`] to their own storage; the seeding logic in
/// [`export_seed_plan`] only needs to clear a collection and append documents to it.
pub trait DocumentStore {
    /// Deletes every document in `collection`, returning how many were removed.
    fn clear(&self, collection: Collection) -> impl Future<Output = AnyhowResult<u64>> + Send;

    /// Inserts `documents` into `collection`, returning how many were written.
    fn insert(
        &self,
        collection: Collection,
        documents: Vec<Document>,
    ) -> impl Future<Output = AnyhowResult<usize>> + Send;
}

/// Outcome of seeding one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionReport {
    pub collection: Collection,
    /// Documents deleted beforehand; `None` for append-only collections.
    pub cleared: Option<u64>,
    pub inserted: usize,
}

/// Per-collection results of a completed seeding run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub collections: Vec<CollectionReport>,
}

impl SeedReport {
    pub fn total_inserted(&self) -> usize {
        self.collections.iter().map(|c| c.inserted).sum()
    }
}

/// Writes a seed plan to a document store, one batch at a time.
///
/// Batches are processed strictly in order and each operation is awaited before the
/// next one starts. A [`WriteMode::Replace`] batch clears its collection first. There is
/// no transaction: when a batch fails, the batches before it stay written and the ones
/// after it are never attempted.
///
/// # Arguments
///
/// * `store` - Destination database.
/// * `plan` - Batches produced by [`crate::seed::seed_plan`].
///
/// # Returns
///
/// * `Ok(SeedReport)` - Every batch was written.
/// * `Err(anyhow::Error)` - A clear or insert failed; the context names the collection.
pub async fn export_seed_plan<S: DocumentStore>(
    store: &S,
    plan: Vec<SeedBatch>,
) -> AnyhowResult<SeedReport> {
    let mut report = SeedReport::default();

    for batch in plan {
        let collection = batch.collection;

        let cleared = match batch.mode {
            WriteMode::Replace => {
                let deleted = store
                    .clear(collection)
                    .await
                    .context(format!("Failed to clear {}", collection))?;
                info!("Removed {} existing record(s) from {}", deleted, collection);
                Some(deleted)
            }
            WriteMode::Append => None,
        };

        let inserted = store
            .insert(collection, batch.documents)
            .await
            .context(format!("Failed to insert into {}", collection))?;
        info!("Inserted {} record(s) into {}", inserted, collection);

        report.collections.push(CollectionReport {
            collection,
            cleared,
            inserted,
        });
    }

    Ok(report)
}
