//! Prints the SHA-256 hash of the dummy password.
//!
//! The output is the value stored in the `password` field of seeded administrator
//! records:
//!
//! ```sh
//! cargo run --bin hash_password
//! Hashed password: 869faf06a22b24b1746720cf2a7cb73264d4deece8b7c14c608b6a45fbf12aca
//! ```

use learner_report_seed::utils::{hash_password, DUMMY_PASSWORD};

fn main() {
  let hash = hash_password(DUMMY_PASSWORD);
  println!("Hashed password: {}", hash);
}
