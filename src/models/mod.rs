//! # Learner Report Record Types
//!
//! This module defines the documents written by the seeder, one struct per collection,
//! along with the [`Collection`] enum that fixes collection names, processing order and
//! write policy.
//!
//! ## Submodules
//!
//! - **collection**: Collection names, ordering and write modes.
//! - **types**: Serde-serializable record structs.

mod collection;
mod types;

pub use collection::{Collection, WriteMode};
pub use types::{
    Administrator, Attendance, AttendanceStatus, BatchRegistration, CareerServiceUser, Faculty,
    QuestionUpload, Student,
};
