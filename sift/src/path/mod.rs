//! Path handling shared by the resolvers and the exclusion filter.
//!
//! # Normalization
//!
//! [`normalize`] is purely lexical: it anchors relative paths to a base
//! directory, expands `~`, and collapses `.`/`..` segments.
//!
//! # Canonicalization
//!
//! [`canonicalize`] consults the filesystem and follows symlinks.
//! [`canonicalize::resolve_existing`] is the one entry point that turns a
//! candidate path into a [`ResolvedPath`], or reports that it does not exist.
//!
//! # Containment
//!
//! [`is_within`] compares paths component-wise so exclusion rules can ask
//! whether a candidate lives beneath an excluded directory:
//!
//! ```
//! use sift::path::is_within;
//! use std::path::Path;
//!
//! let excluded = Path::new("/project/vendor");
//! let candidate = Path::new("/project/vendor/acme/http");
//!
//! assert!(is_within(candidate, excluded));
//! ```

pub mod canonicalize;
pub mod normalize;
pub mod relationship;
mod types;

pub use canonicalize::resolve_existing;
pub use relationship::is_within;
pub use types::ResolvedPath;
