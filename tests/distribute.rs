//! Library-level tests for the distributor

use cert_deploy::{distributor, Settings, CERT_FILES};
use std::fs;
use tempfile::TempDir;

fn settings_with_archive(root: &TempDir, info_json: &str, src_dir_name: &str) -> Settings {
    let cert_root = root.path().join("system");
    let pkg_root = root.path().join("pkg");
    let archive = cert_root.join("_archive");

    fs::create_dir_all(&archive).unwrap();
    fs::write(archive.join("INFO"), info_json).unwrap();

    let src = archive.join(src_dir_name);
    fs::create_dir_all(&src).unwrap();
    for file in CERT_FILES {
        fs::write(src.join(file), file).unwrap();
    }

    Settings::with_overrides(Some(cert_root), Some(pkg_root))
}

#[test]
fn attempts_three_copies_per_descriptor_even_for_duplicates() {
    let root = TempDir::new().unwrap();
    // The same destination twice: duplicates are permitted and simply
    // overwrite each other.
    let settings = settings_with_archive(
        &root,
        r#"{"batch": {"services": [
            {"display_name": "a", "service": "same"},
            {"display_name": "b", "service": "same"}
        ]}}"#,
        "batch",
    );

    let summary = distributor::distribute(&settings, "batch").unwrap();

    assert_eq!(summary.attempted(), 3 * 2);
    assert_eq!(summary.copied(), 6);
    assert_eq!(summary.services[0].dest_dir, summary.services[1].dest_dir);
}

#[test]
fn summary_serializes_for_automation() {
    let root = TempDir::new().unwrap();
    let settings = settings_with_archive(
        &root,
        r#"{"batch": {"services": [{"display_name": "DSM", "service": "svc"}]}}"#,
        "batch",
    );

    let summary = distributor::distribute(&settings, "batch").unwrap();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["src_dir_name"], "batch");
    assert_eq!(json["services"][0]["display_name"], "DSM");
    assert_eq!(json["services"][0]["files"].as_array().unwrap().len(), 3);
}
