use circuit_core::{
    models::{InstallationDetails, Technician},
    params::StartSession,
    SessionBench, SessionBenchBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test bench over the built-in catalog
pub async fn create_test_bench() -> (TempDir, SessionBench) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let bench = SessionBenchBuilder::new()
        .with_database_path(&db_path)
        .build()
        .await
        .expect("Failed to create bench");
    (temp_dir, bench)
}

#[allow(dead_code)]
pub fn start_params(address: &str, technician: &str) -> StartSession {
    StartSession {
        installation: InstallationDetails {
            address: address.to_string(),
            client: None,
            description: None,
        },
        technician: Technician {
            name: technician.to_string(),
            registration: None,
        },
    }
}
