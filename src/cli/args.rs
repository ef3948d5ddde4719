//! CLI argument definitions using clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::config::ColorMode;

/// Build message trees and render them as colored box-drawing trees
#[derive(Parser, Debug)]
#[command(name = "msgtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// When to colorize output (overrides config and MSGTREE_COLOR)
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    /// Print author and version
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a built-in sample report
    Demo {
        /// Which report to render
        #[arg(value_enum, default_value_t = DemoName::Example)]
        name: DemoName,
    },

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Sample reports shipped with the binary.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoName {
    /// Info and debug branches with plain messages
    Example,
    /// Every severity label, nested four levels deep
    Levels,
    /// Spacer lines between messages
    Breaks,
    /// Plain groups inside groups
    Nested,
}
