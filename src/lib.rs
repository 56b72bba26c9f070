//! Learner Report Seed Library
//!
//! Development tooling for the learner-report backend: the SHA-256 password hashing
//! used for stored administrator passwords, and the dummy-data seeder that fills the
//! seven MongoDB collections with fixed sample records.

pub mod export;
pub mod models;
pub mod seed;
pub mod utils;
