//! Test utilities for upver integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::Path;
use upver::error::VcsError;
use upver::vcs::VersionControl;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// A publish step as seen by the version-control backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    ListTags,
    Stage(String),
    Commit(String),
    Tag(String),
    Push,
    PushTag(String, String),
}

impl Step {
    fn name(&self) -> &'static str {
        match self {
            Step::ListTags => "list_tags",
            Step::Stage(_) => "stage",
            Step::Commit(_) => "commit",
            Step::Tag(_) => "tag",
            Step::Push => "push",
            Step::PushTag(..) => "push_tag",
        }
    }
}

/// In-memory backend that records every call and can fail one step
pub struct RecordingVcs {
    tags: String,
    fail_on: Option<&'static str>,
    steps: RefCell<Vec<Step>>,
}

impl RecordingVcs {
    pub fn with_tags(tags: &[&str]) -> Self {
        RecordingVcs {
            tags: tags.join("\n"),
            fail_on: None,
            steps: RefCell::new(Vec::new()),
        }
    }

    /// Make the step with this name report failure
    pub fn failing_on(mut self, step: &'static str) -> Self {
        self.fail_on = Some(step);
        self
    }

    pub fn steps(&self) -> Vec<Step> {
        self.steps.borrow().clone()
    }

    fn record(&self, step: Step) -> Result<(), VcsError> {
        let name = step.name();
        self.steps.borrow_mut().push(step);
        if self.fail_on == Some(name) {
            return Err(VcsError::CommandFailed {
                command: name.to_string(),
                status: "exit status: 1".to_string(),
                stderr: String::new(),
            });
        }
        Ok(())
    }
}

impl VersionControl for RecordingVcs {
    fn list_tags(&self) -> Result<String, VcsError> {
        self.record(Step::ListTags)?;
        Ok(self.tags.clone())
    }

    fn stage(&self, path: &Path) -> Result<(), VcsError> {
        self.record(Step::Stage(path.to_string_lossy().into_owned()))
    }

    fn commit(&self, message: &str) -> Result<(), VcsError> {
        self.record(Step::Commit(message.to_string()))
    }

    fn create_tag(&self, name: &str) -> Result<(), VcsError> {
        self.record(Step::Tag(name.to_string()))
    }

    fn push(&self) -> Result<(), VcsError> {
        self.record(Step::Push)
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<(), VcsError> {
        self.record(Step::PushTag(remote.to_string(), name.to_string()))
    }
}
