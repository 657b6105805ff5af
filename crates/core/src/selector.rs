//! Spec candidate construction and metadata filtering

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::{YokeError, YokeResult};
use crate::filter::{CiEnvironment, FilterTag};
use crate::metadata;

/// Configuration for spec selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Directory containing the spec files
    pub base_dir: PathBuf,

    /// Filename suffix identifying a spec
    pub spec_suffix: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("wdio/test"),
            spec_suffix: ".spec.ts".to_string(),
        }
    }
}

/// One selected spec: its path and a display name with the spec suffix
/// stripped. Immutable once selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRef {
    pub path: PathBuf,
    pub name: String,
}

impl SpecRef {
    fn new(path: PathBuf, spec_suffix: &str) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = file_name
            .strip_suffix(spec_suffix)
            .unwrap_or(&file_name)
            .to_string();
        Self { path, name }
    }
}

/// Select the ordered list of specs to run.
///
/// Explicit base-names switch selection to explicit-list mode: each
/// name gets the spec suffix appended (unconditionally, even if the
/// caller already wrote it), order preserved, duplicates kept.
/// Otherwise the base directory is scanned non-recursively for names
/// ending in the suffix, in filesystem enumeration order.
///
/// A candidate is kept iff none of its metadata tags excludes it for
/// `env`. An unreadable spec source is skipped with a warning; an
/// unknown tag aborts the whole selection.
pub fn select_specs(
    config: &SelectorConfig,
    explicit: &[String],
    env: &CiEnvironment,
) -> YokeResult<Vec<SpecRef>> {
    if !config.base_dir.is_dir() {
        let resolved = std::env::current_dir()
            .map(|cwd| cwd.join(&config.base_dir))
            .unwrap_or_else(|_| config.base_dir.clone());
        warn!("No such folder: {}", resolved.display());
        return Ok(Vec::new());
    }

    let candidates = if !explicit.is_empty() {
        explicit
            .iter()
            .map(|name| format!("{}{}", name, config.spec_suffix))
            .collect()
    } else {
        scan_spec_dir(&config.base_dir, &config.spec_suffix)?
    };

    let mut selected = Vec::new();
    for file_name in candidates {
        let path = config.base_dir.join(&file_name);
        match spec_passes(&path, env) {
            Ok(true) => selected.push(SpecRef::new(path, &config.spec_suffix)),
            Ok(false) => debug!("Excluded by metadata: {}", path.display()),
            Err(YokeError::Io(e)) => {
                warn!("Skipping unreadable spec {}: {}", path.display(), e);
            }
            Err(e) => {
                warn!("Aborting selection at {}: {}", path.display(), e);
                return Err(e);
            }
        }
    }
    Ok(selected)
}

/// Non-recursive scan for spec file names, in enumeration order.
fn scan_spec_dir(dir: &Path, spec_suffix: &str) -> YokeResult<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name.ends_with(spec_suffix) {
            names.push(file_name);
        }
    }
    Ok(names)
}

/// Whether a spec passes every applicable filter predicate.
///
/// All tag tokens are parsed before any predicate runs, so an unknown
/// tag fails the run regardless of its position in the list. The first
/// matching exclusion short-circuits the rest.
fn spec_passes(path: &Path, env: &CiEnvironment) -> YokeResult<bool> {
    let tags = metadata::read_tags(path)?
        .iter()
        .map(|token| FilterTag::from_str(token))
        .collect::<YokeResult<Vec<_>>>()?;

    for tag in tags {
        if tag.excludes(env) {
            debug!("Tag {} excludes {}", tag.as_str(), path.display());
            return Ok(false);
        }
    }
    Ok(true)
}
