//! Path exclusion for file discovery.
//!
//! The discoverer asks a [`PathFilter`] about every entry before it decides to
//! include a file or descend into a directory, so an ignored directory is
//! pruned as a whole. Implementations:
//!
//! - [`GitignoreFilter`]: `.gitignore` semantics evaluated in-process (default)
//! - [`GitCheckIgnore`]: asks `git check-ignore`, with a timeout, failing open
//! - [`GlobFilter`]: `ignores` patterns from the config file
//! - [`NoFilter`]: nothing is ignored
//! - [`FilterChain`]: ignored if any member ignores the path
//!
//! Closures `Fn(&Path, &Path) -> bool` are filters too, which keeps tests free
//! of real repositories.

use std::{
    cell::{OnceCell, RefCell},
    collections::HashMap,
    io,
    path::{Path, PathBuf},
    process::{Command, Stdio},
    thread,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use glob::Pattern;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use tracing::debug;

/// Decides whether a path below `root` is excluded from discovery.
pub trait PathFilter {
    fn is_ignored(&self, root: &Path, path: &Path) -> bool;
}

impl<F> PathFilter for F
where
    F: Fn(&Path, &Path) -> bool,
{
    fn is_ignored(&self, root: &Path, path: &Path) -> bool {
        self(root, path)
    }
}

/// Accepts every path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl PathFilter for NoFilter {
    fn is_ignored(&self, _root: &Path, _path: &Path) -> bool {
        false
    }
}

/// Ignored if any member filter ignores the path.
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn PathFilter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, filter: impl PathFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl PathFilter for FilterChain {
    fn is_ignored(&self, root: &Path, path: &Path) -> bool {
        self.filters.iter().any(|f| f.is_ignored(root, path))
    }
}

// ============================================================
// .gitignore
// ============================================================

/// Evaluates `.gitignore` files in-process.
///
/// For an entry, the `.gitignore` of every directory from the entry's parent
/// up to the repository root is consulted, deepest first; the first file with
/// a matching rule (ignore or `!` whitelist) decides. The repository root is
/// the nearest ancestor of the scan root holding `.git`, so `.gitignore` files
/// above a project directory inside a repository still apply; outside a
/// repository the scan root is the top. The repository root additionally
/// honors `.git/info/exclude`, and the global excludes file
/// (`core.excludesFile`) is consulted last. The `.git` directory itself is
/// always ignored.
///
/// Matchers are built lazily and cached per directory.
#[derive(Debug, Default)]
pub struct GitignoreFilter {
    cache: RefCell<HashMap<PathBuf, Option<Gitignore>>>,
    scopes: RefCell<HashMap<PathBuf, Scope>>,
    global: OnceCell<Option<Gitignore>>,
}

/// Where the ignore files for one scan root live.
#[derive(Debug, Clone)]
struct Scope {
    /// Absolute scan root.
    base: PathBuf,
    /// Top-most directory whose `.gitignore` applies.
    top: PathBuf,
}

impl Scope {
    fn of(root: &Path) -> Self {
        let base = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        let top = base
            .ancestors()
            .find(|dir| dir.join(".git").exists())
            .unwrap_or(base.as_path())
            .to_path_buf();
        Self { base, top }
    }
}

impl GitignoreFilter {
    pub fn new() -> Self {
        Self::default()
    }

    fn scope(&self, root: &Path) -> Scope {
        self.scopes
            .borrow_mut()
            .entry(root.to_path_buf())
            .or_insert_with(|| Scope::of(root))
            .clone()
    }

    fn matcher_decision(&self, top: &Path, dir: &Path, path: &Path, is_dir: bool) -> Option<bool> {
        let mut cache = self.cache.borrow_mut();
        let matcher = cache
            .entry(dir.to_path_buf())
            .or_insert_with(|| build_matcher(dir, dir == top));

        decision(matcher.as_ref()?, path, is_dir)
    }

    fn global_decision(&self, path: &Path, is_dir: bool) -> Option<bool> {
        let global = self.global.get_or_init(|| {
            let (gitignore, err) = Gitignore::global();
            if let Some(err) = err {
                debug!(error = %err, "failed to read global excludes file");
            }
            (!gitignore.is_empty()).then_some(gitignore)
        });
        decision(global.as_ref()?, path, is_dir)
    }
}

fn decision(matcher: &Gitignore, path: &Path, is_dir: bool) -> Option<bool> {
    let matched = matcher.matched(path, is_dir);
    if matched.is_ignore() {
        Some(true)
    } else if matched.is_whitelist() {
        Some(false)
    } else {
        None
    }
}

fn build_matcher(dir: &Path, is_top: bool) -> Option<Gitignore> {
    let mut sources = vec![dir.join(".gitignore")];
    if is_top {
        sources.push(dir.join(".git").join("info").join("exclude"));
    }

    let mut builder = GitignoreBuilder::new(dir);
    let mut added = false;
    for source in sources.iter().filter(|p| p.is_file()) {
        match builder.add(source) {
            Some(err) => debug!(path = %source.display(), error = %err, "skipping unreadable ignore file"),
            None => added = true,
        }
    }
    if !added {
        return None;
    }

    match builder.build() {
        Ok(gitignore) => Some(gitignore),
        Err(err) => {
            debug!(dir = %dir.display(), error = %err, "failed to build ignore matcher");
            None
        }
    }
}

impl PathFilter for GitignoreFilter {
    fn is_ignored(&self, root: &Path, path: &Path) -> bool {
        if path.file_name().is_some_and(|name| name == ".git") {
            return true;
        }
        let Ok(relative) = path.strip_prefix(root) else {
            return false;
        };
        if relative.as_os_str().is_empty() {
            return false;
        }

        let scope = self.scope(root);
        let absolute = scope.base.join(relative);
        let is_dir = path.is_dir();
        for dir in absolute.ancestors().skip(1) {
            if let Some(ignored) = self.matcher_decision(&scope.top, dir, &absolute, is_dir) {
                return ignored;
            }
            if dir == scope.top {
                break;
            }
        }
        self.global_decision(&absolute, is_dir).unwrap_or(false)
    }
}

// ============================================================
// git check-ignore
// ============================================================

/// Default time allowed for one `git check-ignore` invocation.
pub const DEFAULT_GIT_TIMEOUT: Duration = Duration::from_secs(5);

const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Asks `git check-ignore` about each path, running inside the root.
///
/// Ignore checks only narrow the scan, so any failure (git missing, not a
/// repository, timeout) reports the path as not ignored.
#[derive(Debug, Clone)]
pub struct GitCheckIgnore {
    timeout: Duration,
}

impl Default for GitCheckIgnore {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_GIT_TIMEOUT,
        }
    }
}

impl GitCheckIgnore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn check(&self, root: &Path, relative: &Path) -> io::Result<bool> {
        let mut child = Command::new("git")
            .args(["check-ignore", "-q", "--"])
            .arg(relative)
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                // 0: ignored, 1: not ignored, 128: fatal error
                return Ok(status.success());
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    "git check-ignore timed out",
                ));
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl PathFilter for GitCheckIgnore {
    fn is_ignored(&self, root: &Path, path: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(root) else {
            return false;
        };

        match self.check(root, relative) {
            Ok(ignored) => ignored,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "git check-ignore failed, not ignoring");
                false
            }
        }
    }
}

// ============================================================
// Config globs
// ============================================================

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Ignore patterns from the config file.
///
/// Literal patterns (`build`, `app/src/debug`) prune that path relative to the
/// root. Glob patterns (`**/generated/**`) are matched against the path
/// relative to the root, using `/` separators.
#[derive(Debug, Clone, Default)]
pub struct GlobFilter {
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl GlobFilter {
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut filter = Self::default();
        for p in patterns {
            if is_glob_pattern(p) {
                let pattern = Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))?;
                filter.patterns.push(pattern);
            } else {
                filter.literal_paths.push(PathBuf::from(p));
            }
        }
        Ok(filter)
    }

    pub fn is_empty(&self) -> bool {
        self.literal_paths.is_empty() && self.patterns.is_empty()
    }
}

impl PathFilter for GlobFilter {
    fn is_ignored(&self, root: &Path, path: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(root) else {
            return false;
        };

        if self
            .literal_paths
            .iter()
            .any(|literal| relative.starts_with(literal))
        {
            return true;
        }

        let relative = relative.to_string_lossy().replace('\\', "/");
        self.patterns.iter().any(|p| p.matches(&relative))
    }
}
