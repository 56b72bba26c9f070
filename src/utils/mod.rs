//! # Utility Functions for the Learner Report Tools
//!
//! This module provides general helpers shared by the binaries.
//!
//! ## Submodules
//!
//! - **digest**: SHA-256 password hashing used for the stored administrator passwords.

mod digest;

pub use digest::{hash_password, DUMMY_PASSWORD};
