use crate::config::CopyRepoConfig;
use crate::utils::normalize_path;
use glob::{MatchOptions, Pattern};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A single line of the ignore file.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pattern: Pattern,
    /// Pattern ended in `/`: matches directories only.
    dir_only: bool,
    /// Pattern had no inner `/`: also matches the basename at any depth.
    basename: bool,
}

impl PatternRule {
    /// Parses one ignore-file line. Blank lines, comments and negations yield `None`.
    pub fn parse(line: &str) -> Option<PatternRule> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        if line.starts_with('!') {
            warn!("Negated ignore pattern '{}' is not supported, skipping", line);
            return None;
        }

        let dir_only = line.ends_with('/');
        let trimmed = line.trim_end_matches('/');
        let anchored = trimmed.starts_with('/');
        let trimmed = trimmed.trim_start_matches('/');
        if trimmed.is_empty() {
            return None;
        }

        match Pattern::new(trimmed) {
            Ok(pattern) => Some(PatternRule {
                pattern,
                dir_only,
                basename: !anchored && !trimmed.contains('/'),
            }),
            Err(e) => {
                warn!("Invalid ignore pattern '{}': {}", line, e);
                None
            }
        }
    }

    pub fn matches(&self, relative: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }
        if self.pattern.matches_with(relative, MATCH_OPTIONS) {
            return true;
        }
        self.basename
            && relative
                .rsplit('/')
                .next()
                .is_some_and(|name| self.pattern.matches_with(name, MATCH_OPTIONS))
    }
}

/// Why a path was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Basename,
    Extension,
    Pattern,
}

/// Read-only rule set consulted by the selector. Rules are evaluated in a
/// fixed order: basenames, then extensions, then ignore-file patterns.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRuleSet {
    basenames: HashSet<String>,
    extensions: HashSet<String>,
    patterns: Vec<PatternRule>,
}

impl IgnoreRuleSet {
    pub fn new<B, E>(basenames: B, extensions: E, patterns: Vec<PatternRule>) -> Self
    where
        B: IntoIterator,
        B::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        IgnoreRuleSet {
            basenames: basenames.into_iter().map(Into::into).collect(),
            extensions: extensions
                .into_iter()
                .map(|ext| {
                    let ext: String = ext.into();
                    ext.trim_start_matches('.').to_ascii_lowercase()
                })
                .collect(),
            patterns,
        }
    }

    /// Builds the rule set for a run. The ignore file and the output artifact
    /// are always denied by name so a previous run's output is never fed back in.
    pub fn from_config(config: &CopyRepoConfig) -> Self {
        let mut basenames = config.ignored_basenames.clone();
        for own in [&config.ignore_file, &config.output_file] {
            if let Some(name) = own.file_name() {
                basenames.push(name.to_string_lossy().into_owned());
            }
        }
        let patterns = load_patterns(&config.ignore_file);
        let rules = IgnoreRuleSet::new(basenames, config.ignored_extensions.clone(), patterns);
        debug!(
            "Using {} basename, {} extension and {} pattern rules",
            rules.basenames.len(),
            rules.extensions.len(),
            rules.patterns.len()
        );
        rules
    }

    pub fn with_patterns<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.patterns
            .extend(lines.into_iter().filter_map(|l| PatternRule::parse(l.as_ref())));
        self
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Checks a directory. Only basename and pattern rules apply.
    pub fn check_dir(&self, relative: &Path) -> Option<IgnoreReason> {
        if self.denies_basename(relative) {
            return Some(IgnoreReason::Basename);
        }
        if self.denies_pattern(relative, true) {
            return Some(IgnoreReason::Pattern);
        }
        None
    }

    /// Checks a file against basename, extension and pattern rules, in that order.
    pub fn check_file(&self, relative: &Path) -> Option<IgnoreReason> {
        if self.denies_basename(relative) {
            return Some(IgnoreReason::Basename);
        }
        if self.denies_extension(relative) {
            return Some(IgnoreReason::Extension);
        }
        if self.denies_pattern(relative, false) {
            return Some(IgnoreReason::Pattern);
        }
        None
    }

    fn denies_basename(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.basenames.contains(&*name.to_string_lossy()))
    }

    fn denies_extension(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| {
            self.extensions
                .contains(&ext.to_string_lossy().to_ascii_lowercase())
        })
    }

    fn denies_pattern(&self, path: &Path, is_dir: bool) -> bool {
        let relative = normalize_path(path);
        self.patterns.iter().any(|rule| rule.matches(&relative, is_dir))
    }
}

/// Reads pattern rules from an ignore file. A missing or unreadable file means
/// no pattern rules; the run carries on with the built-in lists.
pub fn load_patterns(path: &Path) -> Vec<PatternRule> {
    match fs::read_to_string(path) {
        Ok(content) => content.lines().filter_map(PatternRule::parse).collect(),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No ignore file at {}, using built-in rules only", path.display());
            Vec::new()
        }
        Err(e) => {
            warn!(
                "Could not read ignore file {}: {}; using built-in rules only",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}
