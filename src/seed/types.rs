use crate::models::{Collection, WriteMode};
use bson::Document;

/// The documents destined for one collection, ready for insertion.
#[derive(Debug, Clone)]
pub struct SeedBatch {
    /// Target collection.
    pub collection: Collection,
    /// Whether existing documents are removed first.
    pub mode: WriteMode,
    /// Serialized records in insertion order.
    pub documents: Vec<Document>,
}
