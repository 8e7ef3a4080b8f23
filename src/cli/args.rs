//! CLI argument parsing using clap

use crate::types::BumpKind;
use clap::{Parser, Subcommand, ValueEnum};

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// upver CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "upver")]
#[command(about = "Bump the latest version tag, then commit, tag and push it")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,
}

/// Available upver subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Up major version (v1.4.9 -> v2.0.0)
    Major,

    /// Up minor version (v1.4.9 -> v1.5.0)
    Minor,

    /// Up patch version (v1.4.9 -> v1.4.10)
    Patch,
}

impl Command {
    /// The version transition this subcommand performs
    pub fn bump_kind(self) -> BumpKind {
        match self {
            Command::Major => BumpKind::Major,
            Command::Minor => BumpKind::Minor,
            Command::Patch => BumpKind::Patch,
        }
    }
}
