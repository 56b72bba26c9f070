//! Runs the seeder binary against connection strings that cannot succeed.

use std::process::{Command, Output};

fn run_seeder(atlas_uri: Option<&str>) -> Output {
    let dir = std::env::temp_dir();
    let mut command = Command::new(env!("CARGO_BIN_EXE_seed_dummy_data"));
    command.current_dir(&dir).env_remove("RUST_LOG").env_remove("ATLAS_URI");
    if let Some(uri) = atlas_uri {
        command.env("ATLAS_URI", uri);
    }
    command.output().expect("failed to run seed_dummy_data")
}

/// An unparsable connection string is logged and the process still exits normally.
#[test]
fn test_invalid_uri_logs_error_and_exits_normally() {
    let output = run_seeder(Some("not-a-uri"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "exit status: {:?}", output.status);
    assert!(stderr.contains("Error inserting dummy data"), "stderr: {}", stderr);
    assert!(stderr.contains("Failed to parse MongoDB connection string"), "stderr: {}", stderr);
    assert!(!stdout.contains("Dummy data inserted successfully!"));
}

#[test]
fn test_unreachable_server_logs_error_and_exits_normally() {
    let output = run_seeder(Some(
        "mongodb://127.0.0.1:1/learnerReport?serverSelectionTimeoutMS=200&directConnection=true",
    ));
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "exit status: {:?}", output.status);
    assert!(stderr.contains("Failed to connect to MongoDB"), "stderr: {}", stderr);
    assert!(!String::from_utf8_lossy(&output.stdout).contains("inserted successfully"));
}

#[test]
fn test_missing_uri_logs_error_and_exits_normally() {
    let output = run_seeder(None);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success(), "exit status: {:?}", output.status);
    assert!(stderr.contains("ATLAS_URI is not set"), "stderr: {}", stderr);
}
