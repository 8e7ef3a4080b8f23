//! Error types for upver
//!
//! This module defines the error types used throughout upver, following
//! a hierarchical structure with specific error variants for different
//! error categories.

use crate::types::{BumpKind, Version};
use std::path::PathBuf;

/// Version string format errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The string does not start with `v`
    #[error("version '{0}' must start with 'v', expected something like v1.3.12")]
    MissingPrefix(String),

    /// The string does not have exactly three dot-separated segments
    #[error("version '{input}' has {found} segments, expected something like v1.3.12")]
    SegmentCount { input: String, found: usize },

    /// A segment is not a non-negative integer
    #[error("version '{input}' has invalid segment '{segment}'")]
    InvalidSegment { input: String, segment: String },
}

/// Errors reported by the version-control collaborator
#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    /// The command could not be started at all
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran but reported failure
    #[error("'{command}' failed with {status}{suffix}", suffix = stderr_suffix(.stderr))]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// The command output could not be decoded
    #[error("'{command}' produced non UTF-8 output")]
    InvalidOutput { command: String },
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

/// Top-level error type for upver
#[derive(Debug, thiserror::Error)]
pub enum UpverError {
    /// A tag did not parse as a version
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// A version-control step failed
    #[error("Version control error: {0}")]
    Vcs(#[from] VcsError),

    /// Writing the version file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bumped component would exceed `u64::MAX`
    #[error("Cannot apply {kind} bump to {version}: component is at its maximum")]
    Overflow { version: Version, kind: BumpKind },

    /// Writing the summary line to the terminal failed
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
