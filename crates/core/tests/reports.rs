//! Report directory scanning with synthetic runner logs

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use yoke_core::report::{collect_failures, ReportConfig, FALLBACK_SUITE_NAME};

fn config(dir: &Path) -> ReportConfig {
    ReportConfig {
        reports_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

fn write_suite_log(dir: &Path, file: &str, name: &str, errors: u32, failures: u32) {
    let content = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites>
  <testsuite name="{}" tests="3" errors="{}" failures="{}" time="4.2">
    <testcase name="case" time="1.0"/>
  </testsuite>
</testsuites>"#,
        name, errors, failures
    );
    fs::write(dir.join(file), content).unwrap();
}

#[test]
fn test_only_failing_suites_collected() {
    let dir = TempDir::new().unwrap();
    write_suite_log(dir.path(), "network.log", "NetworkSuite", 1, 0);
    write_suite_log(dir.path(), "login.log", "LoginSuite", 0, 0);
    assert_eq!(collect_failures(&config(dir.path())), vec!["NetworkSuite"]);
}

#[test]
fn test_unparseable_log_is_skipped() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("crash.log"), "runner died before xml").unwrap();
    write_suite_log(dir.path(), "sync.log", "SyncSuite", 0, 2);
    assert_eq!(collect_failures(&config(dir.path())), vec!["SyncSuite"]);
}

#[test]
fn test_wrong_root_surfaces_sentinel() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("odd.log"),
        r#"<report status="aborted"/>"#,
    )
    .unwrap();
    assert_eq!(
        collect_failures(&config(dir.path())),
        vec![FALLBACK_SUITE_NAME]
    );
}

#[test]
fn test_non_log_files_ignored() {
    let dir = TempDir::new().unwrap();
    write_suite_log(dir.path(), "network.txt", "NetworkSuite", 1, 0);
    fs::write(dir.path().join("notes.md"), "scratch").unwrap();
    assert!(collect_failures(&config(dir.path())).is_empty());
}

#[test]
fn test_missing_reports_directory_yields_empty() {
    let dir = TempDir::new().unwrap();
    let cfg = config(&dir.path().join("reports"));
    assert!(collect_failures(&cfg).is_empty());
}

#[test]
fn test_empty_directory_yields_empty() {
    let dir = TempDir::new().unwrap();
    assert!(collect_failures(&config(dir.path())).is_empty());
}

#[test]
fn test_custom_log_suffix() {
    let dir = TempDir::new().unwrap();
    write_suite_log(dir.path(), "network.xml", "NetworkSuite", 0, 1);
    let cfg = ReportConfig {
        reports_dir: dir.path().to_path_buf(),
        log_suffix: ".xml".to_string(),
    };
    assert_eq!(collect_failures(&cfg), vec!["NetworkSuite"]);
}
