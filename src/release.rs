//! Tag collection and the publish sequence
//!
//! This module turns the repository's tags into a current [`Version`] and
//! makes a new version durable:
//! - Every tag must parse; one malformed tag fails the whole collection
//! - With no tags the current version is `v0.0.0`
//! - Publishing writes the version file, then stages, commits, tags and
//!   pushes, stopping at the first failing step without rolling back

use crate::error::{FormatError, UpverError};
use crate::types::Version;
use crate::vcs::VersionControl;
use std::path::{Path, PathBuf};

/// Repository-relative path of the version file
pub const VERSION_FILE: &str = "share/version";

/// Remote the new tag is pushed to
pub const REMOTE: &str = "origin";

/// Parses newline-separated tag names into ascending versions
///
/// Blank lines are skipped. A trailing carriage return is ignored so output
/// produced on Windows parses the same.
///
/// # Errors
///
/// Returns the [`FormatError`] of the first tag that is not a version.
pub fn parse_tag_list(text: &str) -> Result<Vec<Version>, FormatError> {
    let mut versions = text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(Version::parse)
        .collect::<Result<Vec<_>, _>>()?;

    versions.sort();
    Ok(versions)
}

/// Returns the highest version, or `v0.0.0` when there are none
pub fn current_version(versions: &[Version]) -> Version {
    versions.iter().max().copied().unwrap_or(Version::ZERO)
}

/// Lists the repository's tags and parses them into ascending versions
pub fn collect_versions<V: VersionControl>(vcs: &V) -> Result<Vec<Version>, UpverError> {
    let tags = vcs.list_tags()?;
    let versions = parse_tag_list(&tags)?;
    tracing::debug!(count = versions.len(), "parsed version tags");
    Ok(versions)
}

/// Commit message used for a release of `version`
pub fn commit_message(version: Version) -> String {
    format!("bump version to {}", version)
}

/// Writes, commits, tags and pushes `version`
///
/// The steps run in this order and the first failure is returned as is:
/// 1. Overwrite [`VERSION_FILE`] under `root` with the canonical version
/// 2. Stage the version file
/// 3. Commit with `bump version to <version>`
/// 4. Tag the commit `<version>`
/// 5. Push the current branch
/// 6. Push the tag to [`REMOTE`]
///
/// Nothing is undone on failure; a local tag stays in place if a push fails.
pub fn publish<V: VersionControl>(
    vcs: &V,
    root: &Path,
    version: Version,
) -> Result<(), UpverError> {
    let tag = version.to_string();

    write_version_file(root, version)?;
    vcs.stage(Path::new(VERSION_FILE))?;
    vcs.commit(&commit_message(version))?;
    vcs.create_tag(&tag)?;
    vcs.push()?;
    vcs.push_tag(REMOTE, &tag)?;

    tracing::info!(version = %tag, "published");
    Ok(())
}

fn write_version_file(root: &Path, version: Version) -> Result<PathBuf, UpverError> {
    let path = root.join(VERSION_FILE);
    let io_error = |source| UpverError::Io {
        path: path.clone(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(&path, version.to_string()).map_err(io_error)?;

    tracing::debug!(path = %path.display(), "wrote version file");
    Ok(path)
}
