#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # sift
//!
//! A library for turning include/exclude path patterns into the concrete list
//! of paths a static-analysis tool should visit.
//!
//! Patterns come in four dialects: direct paths, globs (with `{a,b}`
//! alternation), dependency-namespace patterns such as `acme/*` that expand
//! inside the project's dependency directory, and `!`-prefixed exclusions.
//! Resolution produces absolute, symlink-resolved, existing paths, sorted and
//! free of duplicates.
//!
//! ## Core Types
//!
//! - [`TargetResolver`]: resolution, validation and debug reports
//! - [`PatternKind`]: the dialect a pattern was classified as
//! - [`ResolvedPath`]: an absolute path verified to exist
//! - [`DependencyDetector`]: finds the dependency directory of a project
//! - [`Config`] and [`ConfigBuilder`]: layered YAML configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use sift::{DependencyDetector, TargetResolver};
//! use std::fs;
//!
//! let dir = tempfile::tempdir().unwrap();
//! fs::create_dir_all(dir.path().join("src/Legacy")).unwrap();
//! fs::create_dir_all(dir.path().join("vendor/acme/http")).unwrap();
//!
//! let mut detector = DependencyDetector::new();
//! let mut resolver = TargetResolver::new(dir.path()).unwrap();
//! resolver.set_dependency_root(detector.detect(dir.path()).as_deref());
//!
//! let resolved = resolver.resolve(&["src", "acme/*", "!src/Legacy", "!dependency/"]);
//! assert_eq!(resolved.len(), 2);
//! ```

pub mod config;
pub mod detect;
pub mod error;
pub mod logging;
pub mod path;
pub mod pattern;
pub mod resolver;

pub use config::{Config, ConfigBuilder, TargetSpec};
pub use detect::DependencyDetector;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::ResolvedPath;
pub use pattern::{classify, Pattern, PatternKind};
pub use resolver::{DebugReport, PatternReport, TargetResolver, ValidationReport};
