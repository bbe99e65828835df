//! Publishing the report as a GitHub Actions step output.
//!
//! Runners expose a `GITHUB_OUTPUT` file that steps append `key<<DELIM`
//! blocks to. Without it, the legacy `::set-output` workflow command is
//! printed instead.

use std::{
    env,
    fs::OpenOptions,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use colored::Colorize;

/// Environment variable naming the step output file.
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

const DELIMITER_BASE: &str = "MISSING_TRANSLATIONS_EOF";

/// Set the step output `key` to `value`.
pub fn set_output(key: &str, value: &str) -> Result<()> {
    match env::var_os(GITHUB_OUTPUT_ENV).filter(|v| !v.is_empty()) {
        Some(path) => append_output(Path::new(&path), key, value),
        None => {
            eprintln!(
                "{} {} is not set, falling back to the deprecated set-output command",
                "warning:".bold().yellow(),
                GITHUB_OUTPUT_ENV
            );
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", set_output_command(key, value))?;
            writeln!(stdout)?;
            Ok(())
        }
    }
}

/// Append a multi-line `key<<DELIM` block to the output file.
pub fn append_output(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open GitHub output file: {:?}", path))?;

    file.write_all(output_block(key, value).as_bytes())
        .with_context(|| format!("Failed to write GitHub output file: {:?}", path))
}

/// Heredoc-style block; the delimiter never occurs in `value`.
///
/// GitHub strips the line break right before the closing delimiter, so one is
/// always added and a trailing newline in `value` survives.
pub fn output_block(key: &str, value: &str) -> String {
    let delimiter = (0..)
        .map(|n| {
            if n == 0 {
                DELIMITER_BASE.to_string()
            } else {
                format!("{}_{}", DELIMITER_BASE, n)
            }
        })
        .find(|d| !value.contains(d.as_str()))
        .unwrap_or_else(|| DELIMITER_BASE.to_string());

    format!("{key}<<{delimiter}\n{value}\n{delimiter}\n")
}

/// `::set-output name=<key>::<value>` with the value escaped to one line.
pub fn set_output_command(key: &str, value: &str) -> String {
    let value = value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
        .replace(':', "%3A")
        .replace(',', "%2C");
    format!("::set-output name={}::{}", key, value)
}
