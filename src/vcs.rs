//! Version-control collaborator
//!
//! The release driver talks to version control only through the
//! [`VersionControl`] trait. [`Git`] implements it by running the `git`
//! binary inside a repository.

use crate::error::VcsError;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Operations the publish sequence needs from version control
pub trait VersionControl {
    /// Returns every tag name, newline separated
    fn list_tags(&self) -> Result<String, VcsError>;

    /// Stages a repository-relative path
    fn stage(&self, path: &Path) -> Result<(), VcsError>;

    /// Commits staged changes with `message`
    fn commit(&self, message: &str) -> Result<(), VcsError>;

    /// Creates a lightweight tag at the current commit
    fn create_tag(&self, name: &str) -> Result<(), VcsError>;

    /// Pushes the current branch to its configured remote
    fn push(&self) -> Result<(), VcsError>;

    /// Pushes a single tag to `remote`
    fn push_tag(&self, remote: &str, name: &str) -> Result<(), VcsError>;
}

/// [`VersionControl`] backed by the `git` command line
#[derive(Debug, Clone)]
pub struct Git {
    root: PathBuf,
}

impl Git {
    /// Creates a client that runs git with `root` as working directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Git { root: root.into() }
    }

    fn command(&self, args: &[&str]) -> (Command, String) {
        let mut command = Command::new("git");
        command.args(args).current_dir(&self.root);
        let command_line = std::iter::once("git")
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        (command, command_line)
    }

    /// Runs git with stdout captured, for commands whose output we read
    fn capture(&self, args: &[&str]) -> Result<Output, VcsError> {
        let (mut command, command_line) = self.command(args);
        tracing::debug!(command = %command_line, "running");

        let output = command
            .stdin(Stdio::null())
            .output()
            .map_err(|source| VcsError::Spawn {
                command: command_line.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(VcsError::CommandFailed {
                command: command_line,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(output)
    }

    /// Runs git with inherited stdio so the user sees its progress
    fn run(&self, args: &[&str]) -> Result<(), VcsError> {
        let (mut command, command_line) = self.command(args);
        tracing::debug!(command = %command_line, "running");

        let status = command.status().map_err(|source| VcsError::Spawn {
            command: command_line.clone(),
            source,
        })?;

        if !status.success() {
            return Err(VcsError::CommandFailed {
                command: command_line,
                status: status.to_string(),
                stderr: String::new(),
            });
        }

        Ok(())
    }
}

impl VersionControl for Git {
    fn list_tags(&self) -> Result<String, VcsError> {
        let output = self.capture(&["tag", "--list"])?;
        String::from_utf8(output.stdout).map_err(|_| VcsError::InvalidOutput {
            command: "git tag --list".to_string(),
        })
    }

    fn stage(&self, path: &Path) -> Result<(), VcsError> {
        let path = path.to_string_lossy();
        self.run(&["add", &*path])
    }

    fn commit(&self, message: &str) -> Result<(), VcsError> {
        self.run(&["commit", "-m", message])
    }

    fn create_tag(&self, name: &str) -> Result<(), VcsError> {
        self.run(&["tag", name])
    }

    fn push(&self) -> Result<(), VcsError> {
        self.run(&["push"])
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<(), VcsError> {
        self.run(&["push", remote, name])
    }
}
