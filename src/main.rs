//! Learner Report Dummy-Data Seeder
//!
//! Fills the learner-report MongoDB database with fixed sample records for local
//! development. Seven collections are written, in order: administrators, attendance,
//! batch registrations, career-service users, faculty, question uploads and students.
//!
//! ## Behaviour
//! - The `admins` collection is emptied first, then two administrators are inserted.
//! - Every other collection gets two new records appended; running the seeder again
//!   duplicates them.
//! - Writes are not transactional. If a collection fails, the ones before it keep their
//!   records and the ones after it are skipped.
//! - The connection is closed on success and on failure. Failures are logged to stderr
//!   and the process still exits normally.
//!
//! ## Usage
//! 1. Put the connection string in `config.env` in the working directory:
//!    ```env
//!    ATLAS_URI=mongodb://localhost:27017/learnerReport
//!    ```
//!    A `.env` file or an exported `ATLAS_URI` works as well, and `--atlas-uri` overrides
//!    all of them.
//! 2. Run the seeder:
//!    ```sh
//!    cargo run --bin seed_dummy_data
//!    ```
//! 3. Progress logging is controlled by `RUST_LOG`:
//!    ```sh
//!    RUST_LOG=info cargo run --bin seed_dummy_data
//!    ```

use anyhow::anyhow;
use clap::Parser;
use learner_report_seed::export::{log_seed_failure, seed_mongodb};
use log::info;

/// File the connection string is read from, relative to the working directory.
const CONFIG_FILE: &str = "config.env";

/// Command-line arguments for the seeder.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
  /// MongoDB connection string (e.g., "mongodb://localhost:27017/learnerReport").
  #[clap(long, env = "ATLAS_URI", hide_env_values = true)]
  atlas_uri: Option<String>,
}

/// Failures are logged, not turned into an exit status: the process exits normally
/// once the connection has been closed.
#[tokio::main]
async fn main() {
  // Initialize logging
  env_logger::init();

  // Existing environment variables win over both files
  dotenv::from_filename(CONFIG_FILE).ok();
  dotenv::dotenv().ok();

  let args = Args::parse();

  let Some(uri) = args.atlas_uri else {
    log_seed_failure(&anyhow!("ATLAS_URI is not set (checked {}, .env and the environment)", CONFIG_FILE));
    return;
  };

  // seed_mongodb reports success or failure itself, before disconnecting
  if let Ok(report) = seed_mongodb(&uri).await {
    info!("Inserted {} record(s) across {} collections", report.total_inserted(), report.collections.len());
  }
}
