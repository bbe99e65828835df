//! CLI argument definitions using clap.
//!
//! Flags override the `.missing-translations.json` config file, which in turn
//! overrides built-in defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{IgnoreMode, OutputFormat};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Android project's root directory
    #[arg(long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Output format [default: json] (overrides config file)
    #[arg(long, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Title for the Markdown report [default: "Missing Translations"] (overrides config file)
    #[arg(long)]
    pub markdown_title: Option<String>,

    /// Also publish the report as the `report` output of a GitHub Actions step
    #[arg(long)]
    pub github_actions: bool,

    /// How version-control ignore rules are applied [default: gitignore] (overrides config file)
    #[arg(long, value_enum)]
    pub ignore_mode: Option<IgnoreMode>,

    /// Exit with status 1 when missing translations are found
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
