use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use super::{args::Arguments, report::render};
use crate::{
    config::{IgnoreMode, OutputFormat, load_config},
    core::{
        FilterChain, GitCheckIgnore, GitignoreFilter, GlobFilter, ScanReport, scan_project,
    },
};

/// Effective settings for one run (CLI args > config file > defaults).
#[derive(Debug)]
pub struct Settings {
    pub project_dir: PathBuf,
    pub output_format: OutputFormat,
    pub markdown_title: String,
    pub ignore_mode: IgnoreMode,
    pub ignores: Vec<String>,
    pub github_actions: bool,
    pub strict: bool,
}

impl Settings {
    pub fn resolve(args: &Arguments) -> Result<Self> {
        let loaded = load_config(&args.project_dir)?;
        if let Some(path) = &loaded.path {
            debug!(path = %path.display(), "loaded config file");
        }
        let config = loaded.config;

        Ok(Self {
            project_dir: args.project_dir.clone(),
            output_format: args.output_format.unwrap_or(config.output_format),
            markdown_title: args
                .markdown_title
                .clone()
                .unwrap_or(config.markdown_title),
            ignore_mode: args.ignore_mode.unwrap_or(config.ignore_mode),
            ignores: config.ignores,
            github_actions: args.github_actions,
            strict: args.strict,
        })
    }
}

/// Build the path filter for discovery from the ignore mode and config globs.
pub fn build_filter(mode: IgnoreMode, ignores: &[String]) -> Result<FilterChain> {
    let mut chain = FilterChain::new();
    chain = match mode {
        IgnoreMode::Gitignore => chain.with(GitignoreFilter::new()),
        IgnoreMode::Git => chain.with(GitCheckIgnore::new()),
        IgnoreMode::None => chain,
    };

    let globs = GlobFilter::new(ignores)?;
    if !globs.is_empty() {
        chain = chain.with(globs);
    }
    Ok(chain)
}

/// Result of a completed run.
pub struct RunOutput {
    pub report: ScanReport,
    /// Report rendered in the requested output format.
    pub rendered: String,
}

pub fn run(settings: &Settings) -> Result<RunOutput> {
    let filter = build_filter(settings.ignore_mode, &settings.ignores)?;
    let report = scan_project(&settings.project_dir, &filter)?;
    let rendered = render(
        settings.output_format,
        &settings.markdown_title,
        &report.missing,
    )?;

    Ok(RunOutput { report, rendered })
}
