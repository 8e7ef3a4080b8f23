#![forbid(unsafe_code)]

//! Core domain types for upver
//!
//! This module defines the semantic [`Version`] value and the [`BumpKind`]
//! transitions applied to it.

use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A semantic version of the form `v<major>.<minor>.<patch>`
///
/// Versions order lexicographically over `(major, minor, patch)`, comparing
/// each component numerically, so `v1.10.0` sorts after `v1.9.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// The version assumed when a repository has no tags yet
    pub const ZERO: Version = Version::new(0, 0, 0);

    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parses a tag such as `v1.3.12`
    ///
    /// The input must start with `v`. Any run of `v` characters at either end
    /// is then trimmed before splitting on `.` into exactly three integers.
    /// Segments are plain ASCII digits; signs and whitespace are rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] when the prefix is missing, the segment count
    /// is not three, or a segment is not a non-negative integer.
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        if !input.starts_with('v') {
            return Err(FormatError::MissingPrefix(input.to_string()));
        }

        let segments: Vec<&str> = input.trim_matches('v').split('.').collect();
        if segments.len() != 3 {
            return Err(FormatError::SegmentCount {
                input: input.to_string(),
                found: segments.len(),
            });
        }

        let component = |segment: &str| {
            let invalid = || FormatError::InvalidSegment {
                input: input.to_string(),
                segment: segment.to_string(),
            };
            if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            segment.parse::<u64>().map_err(|_| invalid())
        };

        Ok(Version::new(
            component(segments[0])?,
            component(segments[1])?,
            component(segments[2])?,
        ))
    }

    /// Returns the next major version, resetting minor and patch
    ///
    /// `None` when the major component is already `u64::MAX`.
    pub fn bump_major(self) -> Option<Self> {
        Some(Version::new(self.major.checked_add(1)?, 0, 0))
    }

    /// Returns the next minor version, resetting patch
    pub fn bump_minor(self) -> Option<Self> {
        Some(Version::new(self.major, self.minor.checked_add(1)?, 0))
    }

    /// Returns the next patch version
    pub fn bump_patch(self) -> Option<Self> {
        Some(Version::new(self.major, self.minor, self.patch.checked_add(1)?))
    }

    /// Applies the transition selected by `kind`
    ///
    /// Every `Some` result is strictly greater than `self`.
    pub fn bump(self, kind: BumpKind) -> Option<Self> {
        match kind {
            BumpKind::Major => self.bump_major(),
            BumpKind::Minor => self.bump_minor(),
            BumpKind::Patch => self.bump_patch(),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Version::parse(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

/// Which component of a version to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BumpKind::Major => "Major",
            BumpKind::Minor => "Minor",
            BumpKind::Patch => "Patch",
        };
        f.write_str(label)
    }
}
