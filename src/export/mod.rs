//! Tools for writing the seed plan to a document database.
//!
//! This module provides the [`DocumentStore`] abstraction, the runner that applies a seed
//! plan to any store, and the MongoDB implementation used by the `seed_dummy_data`
//! binary. Writes are not transactional: each collection is committed on its own.
//!
//! ## Usage
//!
//! The main entry point is [`seed_mongodb`], which takes a connection string, seeds all
//! seven collections and disconnects.
//!
//! ## Submodules
//!
//! - **store**: The store trait, the seeding runner and its report types.
//! - **mongo**: MongoDB connection handling and the store implementation.

mod mongo;
mod store;
#[cfg(test)]
mod memory;

pub use mongo::{log_seed_failure, seed_mongodb, MongoStore, DEFAULT_DATABASE, SUCCESS_MESSAGE};
pub use store::{export_seed_plan, CollectionReport, DocumentStore, SeedReport};
