//! # Building the Dummy-Data Seed Plan
//!
//! This module turns the fixed sample records of every collection into BSON documents,
//! grouped into [`SeedBatch`]es in the order the seeder writes them.
//!
//! ## Usage
//!
//! The main entry point is [`seed_plan`], which takes the timestamp to stamp attendance
//! records with and returns one batch per collection.
//!
//! ## Submodules
//!
//! - **fixtures**: The hard-coded sample records and plan construction.
//! - **types**: Defines the batch structure handed to the exporter.

mod fixtures;
mod types;

pub use fixtures::seed_plan;
pub use types::SeedBatch;
