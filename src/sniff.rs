use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    Binary,
}

/// Leading byte signatures of common non-text formats.
const BINARY_SIGNATURES: &[(&[u8], &str)] = &[
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"\xff\xd8\xff", "image/jpeg"),
    (b"\x00\x00\x01\x00", "image/x-icon"),
    (b"II*\x00", "image/tiff"),
    (b"MM\x00*", "image/tiff"),
    (b"%PDF-", "application/pdf"),
    (b"PK\x03\x04", "application/zip"),
    (b"\x1f\x8b\x08", "application/gzip"),
    (b"7z\xbc\xaf\x27\x1c", "application/x-7z-compressed"),
    (b"Rar!\x1a\x07", "application/x-rar-compressed"),
    (b"\x7fELF", "application/x-elf"),
    (b"\xcf\xfa\xed\xfe", "application/x-mach-binary"),
    (b"\xca\xfe\xba\xbe", "application/java-vm"),
    (b"\x00asm", "application/wasm"),
    (b"wOFF\x00\x01\x00\x00", "font/woff"),
    (b"wOFFOTTO", "font/woff"),
    (b"wOF2\x00\x01\x00\x00", "font/woff2"),
    (b"wOF2OTTO", "font/woff2"),
    (b"OggS\x00", "application/ogg"),
];

/// RIFF containers are only recognised by the form type at offset 8.
const RIFF_FORMS: &[(&[u8], &str)] = &[
    (b"WAVE", "audio/wav"),
    (b"AVI ", "video/avi"),
    (b"WEBP", "image/webp"),
];

fn riff_form(head: &[u8]) -> Option<&'static str> {
    if !head.starts_with(b"RIFF") {
        return None;
    }
    let form = head.get(8..12)?;
    RIFF_FORMS
        .iter()
        .find(|(tag, _)| form == *tag)
        .map(|(_, mime)| *mime)
}

const TEXT_BOMS: &[&[u8]] = &[b"\xef\xbb\xbf", b"\xfe\xff", b"\xff\xfe"];

/// Control bytes that never appear in text. Tab, newlines, form feed and
/// escape are allowed.
fn is_binary_byte(b: u8) -> bool {
    matches!(b, 0x00..=0x08 | 0x0b | 0x0e..=0x1a | 0x1c..=0x1f)
}

/// Classifies a content prefix. Empty input counts as text.
pub fn classify(head: &[u8]) -> ContentKind {
    if TEXT_BOMS.iter().any(|bom| head.starts_with(bom)) {
        return ContentKind::Text;
    }
    if let Some((_, mime)) = BINARY_SIGNATURES
        .iter()
        .find(|(signature, _)| head.starts_with(signature))
    {
        trace!("Content matches {} signature", mime);
        return ContentKind::Binary;
    }
    if let Some(mime) = riff_form(head) {
        trace!("Content matches {} signature", mime);
        return ContentKind::Binary;
    }
    if head.iter().copied().any(is_binary_byte) {
        return ContentKind::Binary;
    }
    ContentKind::Text
}

/// Reads up to `limit` leading bytes of a file.
pub fn read_head(path: &Path, limit: usize) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut head = Vec::with_capacity(limit);
    file.take(limit as u64).read_to_end(&mut head)?;
    Ok(head)
}

/// Whether the file looks binary. Files that cannot be read are reported as
/// text so they stay in the selection.
pub fn is_binary(path: &Path, limit: usize) -> bool {
    match read_head(path, limit) {
        Ok(head) => classify(&head) == ContentKind::Binary,
        Err(e) => {
            debug!("Could not sniff {}: {}; treating as text", path.display(), e);
            false
        }
    }
}
