//! Failure extraction from JUnit-style runner reports
//!
//! WebdriverIO's junit reporter writes one `.log` file per suite:
//! a `testsuites` root wrapping `testsuite` elements whose `name`,
//! `errors` and `failures` attributes carry the counts. Only those
//! attributes matter here, so the files are read with targeted
//! regexes rather than a full XML tree.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::error::{YokeError, YokeResult};

/// Configuration for report scanning
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory the runner writes its reports into
    pub reports_dir: PathBuf,

    /// Filename suffix identifying a report
    pub log_suffix: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            reports_dir: PathBuf::from("reports"),
            log_suffix: ".log".to_string(),
        }
    }
}

/// Name surfaced when a report is readable XML but lacks the expected
/// `testsuites` root.
pub const FALLBACK_SUITE_NAME: &str = "something went wrong";

/// First element start tag, skipping declarations and comments.
static ROOT_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<\s*([A-Za-z_][\w.-]*)").unwrap());

/// First `testsuite` start tag (but not `testsuites`), attributes captured.
static TESTSUITE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<testsuite((?:\s[^>]*)?)/?>").unwrap());

/// One `key="value"` attribute pair.
static ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([A-Za-z_][\w.:-]*)\s*=\s*"([^"]*)""#).unwrap());

/// Extract the failing-suite name from one report's content.
///
/// - No XML content at all: `Err`, the file carries no signal.
/// - Root element is not `testsuites`: the sentinel name, something
///   went wrong upstream of the reporter.
/// - First `testsuite` has `errors` or `failures` above zero: its
///   `name`, entities unescaped. Absent or non-numeric counts read as
///   zero; a failing suite without a name contributes nothing.
pub fn parse_log(content: &str) -> YokeResult<Option<String>> {
    let root = ROOT_TAG
        .captures(content)
        .ok_or_else(|| YokeError::LogParse("no XML content".to_string()))?;
    if &root[1] != "testsuites" {
        return Ok(Some(FALLBACK_SUITE_NAME.to_string()));
    }

    let attrs = TESTSUITE_TAG
        .captures(content)
        .ok_or_else(|| {
            YokeError::LogParse("no testsuite element under testsuites root".to_string())
        })?
        .get(1)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let mut name = None;
    let mut errors = 0u64;
    let mut failures = 0u64;
    for pair in ATTRIBUTE.captures_iter(&attrs) {
        match &pair[1] {
            "name" => name = Some(unescape_xml(&pair[2])),
            "errors" => errors = pair[2].parse().unwrap_or(0),
            "failures" => failures = pair[2].parse().unwrap_or(0),
            _ => {}
        }
    }

    if errors > 0 || failures > 0 {
        Ok(name)
    } else {
        Ok(None)
    }
}

/// Scan the reports directory and collect failing-suite names in
/// discovery order.
///
/// Summarization is a reporting aid, not a gate: a missing directory,
/// an unreadable file, or a malformed report is logged and skipped,
/// never escalated.
pub fn collect_failures(config: &ReportConfig) -> Vec<String> {
    let entries = match std::fs::read_dir(&config.reports_dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(
                "Cannot read reports directory {}: {}",
                config.reports_dir.display(),
                e
            );
            return Vec::new();
        }
    };

    let mut failing = Vec::new();
    for entry in entries.flatten() {
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !file_name.ends_with(&config.log_suffix) {
            continue;
        }
        let path = entry.path();
        match read_report(&path) {
            Ok(Some(name)) => failing.push(name),
            Ok(None) => debug!("No failures in {}", path.display()),
            Err(e) => warn!("Skipping report {}: {}", path.display(), e),
        }
    }
    failing
}

fn read_report(path: &Path) -> YokeResult<Option<String>> {
    let content = std::fs::read_to_string(path)?;
    parse_log(&content)
}

fn unescape_xml(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
