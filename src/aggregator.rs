use crate::selector::FileEntry;
use crate::utils::{count_whitespace_tokens, dotted_extension, read_file_content};
use crate::CopyRepoError;
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

/// Counters accumulated over every file that made it into the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateStats {
    pub files: usize,
    pub lines: usize,
    pub words: usize,
    /// Bytes per line, line terminators excluded.
    pub chars: usize,
    /// Extension (with its dot, empty when absent) to number of files.
    pub extensions: BTreeMap<String, usize>,
    /// Whitespace-split token estimate over the whole output.
    pub tokens: usize,
}

impl AggregateStats {
    /// Estimated number of requests at `tokens_per_request` tokens each.
    pub fn estimated_requests(&self, tokens_per_request: usize) -> f64 {
        if tokens_per_request == 0 {
            return 0.0;
        }
        self.tokens as f64 / tokens_per_request as f64
    }

    fn record(&mut self, entry: &FileEntry, content: &str) {
        self.files += 1;
        for line in content.lines() {
            self.lines += 1;
            self.words += line.split_whitespace().count();
            self.chars += line.len();
        }
        *self
            .extensions
            .entry(dotted_extension(&entry.relative))
            .or_insert(0) += 1;
    }
}

/// The concatenated output together with its final counts.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    pub content: String,
    pub stats: AggregateStats,
}

/// Writes the header that introduces one file in the output.
pub fn file_header(entry: &FileEntry) -> String {
    let name = entry
        .relative
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("// {}\n// {}\n\n", entry.display_path(), name)
}

#[derive(Debug, Default)]
pub struct Aggregator {
    content: String,
    stats: AggregateStats,
}

impl Aggregator {
    pub fn new() -> Self {
        Aggregator::default()
    }

    /// Appends one file. Unreadable files are logged and left out.
    pub fn add(&mut self, entry: &FileEntry) -> Result<(), CopyRepoError> {
        let content = match read_file_content(&entry.path) {
            Ok(content) => content,
            Err(e) if e.is_recoverable() => {
                warn!("Skipping {}: {}", entry.display_path(), e);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        trace!("Appending {} ({} bytes)", entry.display_path(), content.len());
        self.content.push_str(&file_header(entry));
        self.content.push_str(&content);
        self.content.push_str("\n\n");
        self.stats.record(entry, &content);
        Ok(())
    }

    pub fn finish(mut self) -> Aggregate {
        self.stats.tokens = count_whitespace_tokens(&self.content);
        debug!(
            "Aggregated {} files, {} lines, {} tokens",
            self.stats.files, self.stats.lines, self.stats.tokens
        );
        Aggregate {
            content: self.content,
            stats: self.stats,
        }
    }
}

/// Reads every entry in order and builds the output and its statistics.
pub fn aggregate(entries: &[FileEntry]) -> Result<Aggregate, CopyRepoError> {
    let mut aggregator = Aggregator::new();
    for entry in entries {
        aggregator.add(entry)?;
    }
    Ok(aggregator.finish())
}
