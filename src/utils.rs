use crate::CopyRepoError;
use std::fs;
use std::path::Path;

/// Turns a path into the `/`-separated form used in headers and pattern matching,
/// dropping a leading `./`.
pub fn normalize_path(path: &Path) -> String {
    let path = path.strip_prefix("./").unwrap_or(path);
    path.to_string_lossy().replace('\\', "/")
}

/// Suffix of the file name starting at its last dot, or an empty string when
/// there is no dot. A dotfile such as `.bashrc` is its own extension.
pub fn dotted_extension(path: &Path) -> String {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return String::new(),
    };
    name.rfind('.')
        .map(|dot| name[dot..].to_owned())
        .unwrap_or_default()
}

pub fn read_file_content(path: &Path) -> Result<String, CopyRepoError> {
    fs::read_to_string(path).map_err(|err| CopyRepoError::ReadError {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Whitespace-delimited token count. This approximates LLM tokenization; real
/// subword tokenizers usually produce more tokens than this.
pub fn count_whitespace_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}
