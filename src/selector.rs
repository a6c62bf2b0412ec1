use crate::ignore::IgnoreRuleSet;
use crate::sniff::is_binary;
use crate::utils::normalize_path;
use crate::CopyRepoError;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

/// A regular file chosen for the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the walk root.
    pub relative: PathBuf,
    /// Path used for reading the file.
    pub path: PathBuf,
}

impl FileEntry {
    /// `/`-separated relative path, as written into file headers.
    pub fn display_path(&self) -> String {
        normalize_path(&self.relative)
    }
}

pub struct Selector<'a> {
    rules: &'a IgnoreRuleSet,
    sniff_len: usize,
}

impl<'a> Selector<'a> {
    pub fn new(rules: &'a IgnoreRuleSet, sniff_len: usize) -> Self {
        Selector { rules, sniff_len }
    }

    /// Walks `root` depth-first and returns the files to include. Siblings are
    /// visited in file-name order, so an unchanged tree always yields the same
    /// sequence. Excluded directories are pruned and never read.
    pub fn select(&self, root: &Path) -> Result<Vec<FileEntry>, CopyRepoError> {
        if !root.is_dir() {
            return Err(CopyRepoError::NotFoundError(root.to_path_buf()));
        }

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| self.keep_dir(root, entry));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = relative_to(root, entry.path());
            if self.keep_file(&relative, entry.path()) {
                trace!("Including {}", relative.display());
                files.push(FileEntry {
                    relative,
                    path: entry.into_path(),
                });
            }
        }

        debug!("Selected {} files under {}", files.len(), root.display());
        Ok(files)
    }

    fn keep_dir(&self, root: &Path, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        let relative = relative_to(root, entry.path());
        match self.rules.check_dir(&relative) {
            Some(reason) => {
                debug!("Pruning directory {} ({:?})", relative.display(), reason);
                false
            }
            None => true,
        }
    }

    fn keep_file(&self, relative: &Path, path: &Path) -> bool {
        if let Some(reason) = self.rules.check_file(relative) {
            trace!("Skipping {} ({:?})", relative.display(), reason);
            return false;
        }
        if is_binary(path, self.sniff_len) {
            debug!("Skipping binary file {}", relative.display());
            return false;
        }
        true
    }
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
