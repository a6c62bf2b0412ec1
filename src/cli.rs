use crate::CopyRepoError;
use clap::Parser;
use std::ffi::OsString;

/// Concatenates the source files under the current directory into
/// codebase.txt and copies the result to the clipboard.
#[derive(Parser, Debug)]
#[command(name = "copy-repo", author, version, about, long_about = None)]
pub struct CliArgs {}

/// Accepts only a bare invocation. Every argument, `--help` and `--version`
/// included, is a usage error.
pub fn parse_invocation<I, T>(args: I) -> Result<CliArgs, CopyRepoError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() > 1 {
        return Err(CopyRepoError::UsageError);
    }
    CliArgs::try_parse_from(args).map_err(|_| CopyRepoError::UsageError)
}
