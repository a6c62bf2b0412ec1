pub mod aggregator;
pub mod cli;
pub mod config;
pub mod copy;
pub mod errors;
pub mod ignore;
pub mod logger;
pub mod reporting;
pub mod selector;
pub mod sniff;
pub mod utils;

pub use aggregator::{Aggregate, AggregateStats};
pub use config::CopyRepoConfig;
pub use copy::{copy_repository, ClipboardCopier, SystemClipboard};
pub use errors::CopyRepoError;
pub use ignore::IgnoreRuleSet;
pub use selector::{FileEntry, Selector};
