//! Yoke E2E Harness Core
//!
//! This crate prepares and interprets a WebdriverIO run:
//! - Selects `.spec.ts` files from a spec directory or explicit arguments
//! - Filters them by `// @metadata` tags against the current CI environment
//! - Launches the WebdriverIO runner as a subprocess
//! - Parses the JUnit-style `.log` reports to name the failing suites
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Yoke (orchestrator)                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  select_specs(config, explicit, env) -> Vec<SpecRef>        │
//! │    ├── metadata::read_tags(path) -> Vec<String>             │
//! │    └── FilterTag::excludes(&CiEnvironment) -> bool          │
//! │  Launcher::run(specs) -> i32          (WdioLauncher: npx)   │
//! │  report::collect_failures(config) -> Vec<String>            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RunOutcome                                                 │
//! │    ├── NoSpecs                        (exit -1)             │
//! │    ├── LaunchFailed                   (exit  1)             │
//! │    └── Completed { code, failing }    (exit code, verbatim) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The library never terminates the process; every path reduces to a
//! [`RunOutcome`] and only the `yoke` binary calls `std::process::exit`.

pub mod error;
pub mod filter;
pub mod host;
pub mod launcher;
pub mod metadata;
pub mod orchestrator;
pub mod report;
pub mod selector;

pub use error::{YokeError, YokeResult};
pub use filter::{CiEnvironment, FilterTag};
pub use launcher::{Launcher, WdioLauncher};
pub use orchestrator::{RunOutcome, Yoke, YokeConfig};
pub use selector::{SelectorConfig, SpecRef};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
