use crate::aggregator::{aggregate, Aggregate};
use crate::config::CopyRepoConfig;
use crate::ignore::IgnoreRuleSet;
use crate::selector::Selector;
use crate::CopyRepoError;
use arboard::Clipboard;
use std::fs;
use std::path::Path;
use tracing::{debug, info, trace};

/// Destination for the concatenated output.
pub trait ClipboardCopier {
    fn copy_text(&mut self, text: &str) -> Result<(), CopyRepoError>;
}

/// The operating system clipboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, CopyRepoError> {
        if self.clipboard.is_none() {
            debug!("Initializing clipboard");
            let clipboard =
                Clipboard::new().map_err(|e| CopyRepoError::ClipboardInitError(e.to_string()))?;
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| CopyRepoError::ClipboardInitError("clipboard unavailable".to_owned()))
    }
}

impl ClipboardCopier for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), CopyRepoError> {
        self.handle()?
            .set_text(text.to_owned())
            .map_err(|e| CopyRepoError::ClipboardWriteError(e.to_string()))
    }
}

/// Overwrites `path` with the output, creating it when absent.
pub fn write_artifact(path: &Path, content: &str) -> Result<(), CopyRepoError> {
    fs::write(path, content).map_err(|e| CopyRepoError::WriteError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Selects and concatenates the files under the configured root without
/// touching the artifact or the clipboard.
pub fn collect_repository(config: &CopyRepoConfig) -> Result<Aggregate, CopyRepoError> {
    let rules = IgnoreRuleSet::from_config(config);
    let files = Selector::new(&rules, config.sniff_len).select(&config.root)?;
    aggregate(&files)
}

/// Runs the whole pipeline: select, aggregate, write the artifact, then copy
/// the output to `clipboard`. Any failure after aggregation aborts the run.
pub fn copy_repository<C: ClipboardCopier>(
    config: &CopyRepoConfig,
    clipboard: &mut C,
) -> Result<Aggregate, CopyRepoError> {
    let aggregate = collect_repository(config)?;
    trace!("Final content length: {}", aggregate.content.len());

    write_artifact(&config.output_file, &aggregate.content)?;
    clipboard.copy_text(&aggregate.content)?;

    info!(
        "Codebase written to {} and copied to clipboard",
        config.output_file.display()
    );
    Ok(aggregate)
}
