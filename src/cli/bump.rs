//! Bump command implementation
//!
//! This module implements `upver major`, `upver minor` and `upver patch`:
//! - Collects the repository's version tags and picks the highest
//! - Applies the requested transition
//! - Prints `<Kind> <old> to <new>`
//! - Publishes the new version (file, commit, tag, push)

use crate::cli::args::ColorChoice;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS};
use crate::error::UpverError;
use crate::release;
use crate::types::{BumpKind, Version};
use crate::vcs::{Git, VersionControl};
use std::path::Path;
use termcolor::{Color, WriteColor};

/// Old and new version of a completed bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpOutcome {
    pub previous: Version,
    pub next: Version,
}

/// Run the bump command in the current directory
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error (malformed tag, version at its maximum, failed git step,
///   version file not writable)
pub fn run_bump(kind: BumpKind, color: ColorChoice) -> i32 {
    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            super::common::report_error(color, &e);
            return EXIT_ERROR;
        }
    };

    let git = Git::new(&root);
    let mut out = super::common::stdout(color);

    match bump(&git, &root, kind, &mut out) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            super::common::report_error(color, &e);
            EXIT_ERROR
        }
    }
}

/// Bump against an arbitrary version-control backend
///
/// The summary line is written to `out` before publishing starts, so it is
/// still visible when a later git step fails.
pub fn bump<V, W>(
    vcs: &V,
    root: &Path,
    kind: BumpKind,
    out: &mut W,
) -> Result<BumpOutcome, UpverError>
where
    V: VersionControl,
    W: WriteColor,
{
    let versions = release::collect_versions(vcs)?;
    let previous = release::current_version(&versions);
    let next = previous.bump(kind).ok_or(UpverError::Overflow {
        version: previous,
        kind,
    })?;
    tracing::info!(%previous, %next, "bumping");

    write_summary(out, kind, previous, next).map_err(UpverError::Output)?;

    release::publish(vcs, root, next)?;

    Ok(BumpOutcome { previous, next })
}

fn write_summary<W: WriteColor>(
    out: &mut W,
    kind: BumpKind,
    previous: Version,
    next: Version,
) -> std::io::Result<()> {
    super::common::write_colored(out, Color::Green, &kind.to_string())?;
    writeln!(out, " {} to {}", previous, next)?;
    out.flush()
}
