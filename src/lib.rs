#![forbid(unsafe_code)]

//! upver: bump the latest semantic version tag of a git repository
//!
//! upver reads the repository's `v<major>.<minor>.<patch>` tags, bumps the
//! highest one, writes it to `share/version`, and commits, tags and pushes
//! the result.

pub mod cli;
pub mod error;
pub mod release;
pub mod types;
pub mod vcs;

// Re-export error types for convenient access
pub use error::{FormatError, UpverError, VcsError};

// Re-export core domain types for convenient access
pub use types::{BumpKind, Version};
pub use vcs::{Git, VersionControl};
