// Rust guideline compliant 2026-02-06

//! File type identification for `types`, `types_or` and `exclude_types`.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

/// Tag for files whose content looks like text.
pub const TEXT: &str = "text";
/// Tag for files whose content contains NUL bytes.
pub const BINARY: &str = "binary";
/// Tag for paths that exist as regular files.
pub const FILE: &str = "file";

/// Number of leading bytes inspected when sniffing for binary content.
const SNIFF_LEN: usize = 1024;

/// Extension to tags. The last tag decides text versus binary when the file
/// cannot be read.
const EXTENSIONS: &[(&str, &[&str])] = &[
    ("py", &["python", TEXT]),
    ("pyi", &["pyi", "python", TEXT]),
    ("ipynb", &["jupyter", "json", TEXT]),
    ("json", &["json", TEXT]),
    ("yaml", &["yaml", TEXT]),
    ("yml", &["yaml", TEXT]),
    ("toml", &["toml", TEXT]),
    ("md", &["markdown", TEXT]),
    ("markdown", &["markdown", TEXT]),
    ("sh", &["shell", TEXT]),
    ("bash", &["shell", "bash", TEXT]),
    ("rs", &["rust", TEXT]),
    ("js", &["javascript", TEXT]),
    ("ts", &["ts", TEXT]),
    ("html", &["html", TEXT]),
    ("css", &["css", TEXT]),
    ("ini", &["ini", TEXT]),
    ("cfg", &["cfg", TEXT]),
    ("xml", &["xml", TEXT]),
    ("txt", &["plain-text", TEXT]),
    ("csv", &["csv", TEXT]),
    ("sql", &["sql", TEXT]),
    ("r", &["r", TEXT]),
    ("lock", &[TEXT]),
    ("png", &["png", "image", BINARY]),
    ("jpg", &["jpeg", "image", BINARY]),
    ("jpeg", &["jpeg", "image", BINARY]),
    ("gif", &["gif", "image", BINARY]),
    ("pdf", &["pdf", BINARY]),
    ("zip", &["zip", BINARY]),
    ("gz", &["gzip", BINARY]),
];

/// Well-known file names without a meaningful extension.
const NAMES: &[(&str, &[&str])] = &[
    ("Dockerfile", &["dockerfile", TEXT]),
    ("Makefile", &["makefile", TEXT]),
    ("makefile", &["makefile", TEXT]),
    ("LICENSE", &["plain-text", TEXT]),
    ("README", &["plain-text", TEXT]),
    (".gitignore", &[TEXT]),
    (".gitattributes", &[TEXT]),
];

/// Returns every tag this module can produce.
pub fn known_tags() -> BTreeSet<&'static str> {
    let mut tags: BTreeSet<&'static str> = [TEXT, BINARY, FILE].into_iter().collect();
    for (_, list) in EXTENSIONS.iter().chain(NAMES.iter()) {
        tags.extend(list.iter().copied());
    }
    tags
}

/// Returns true when `tag` is recognised.
pub fn is_known_tag(tag: &str) -> bool {
    known_tags().contains(tag)
}

/// Tags derived from the path alone.
///
/// # Arguments
///
/// * `path` - Repository-relative path
///
/// # Returns
///
/// The name/extension tags, without `file` and with a text/binary guess only
/// when the extension implies one.
pub fn tags_from_path(path: &str) -> BTreeSet<&'static str> {
    let mut tags = BTreeSet::new();
    let file_name = path.rsplit('/').next().unwrap_or(path);

    if let Some((_, list)) = NAMES.iter().find(|(name, _)| *name == file_name) {
        tags.extend(list.iter().copied());
    }

    if let Some((_, ext)) = file_name.rsplit_once('.') {
        let ext = ext.to_ascii_lowercase();
        if let Some((_, list)) = EXTENSIONS.iter().find(|(known, _)| *known == ext) {
            tags.extend(list.iter().copied());
        }
    }

    tags
}

/// Tags for a path, consulting the file system under `root` when possible.
///
/// Existing files get `file` and a sniffed `text`/`binary` tag that replaces
/// any guess made from the extension. Missing files keep the extension guess,
/// defaulting to `text`.
pub fn tags_for(root: &Path, path: &str) -> BTreeSet<&'static str> {
    let mut tags = tags_from_path(path);
    let full = root.join(path);

    if full.is_file() {
        tags.insert(FILE);
        if let Some(is_binary) = sniff_binary(&full) {
            tags.remove(TEXT);
            tags.remove(BINARY);
            tags.insert(if is_binary { BINARY } else { TEXT });
        }
    } else if !tags.contains(BINARY) {
        tags.insert(TEXT);
    }

    tags
}

fn sniff_binary(path: &Path) -> Option<bool> {
    let mut file = std::fs::File::open(path).ok()?;
    let mut buf = [0u8; SNIFF_LEN];
    let read = file.read(&mut buf).ok()?;
    Some(buf[..read].contains(&0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_tags_from_extension() {
        let tags = tags_from_path("notebooks/analysis.ipynb");
        assert!(tags.contains("jupyter"));
        assert!(tags.contains("json"));
        assert!(tags.contains(TEXT));
        assert!(!tags.contains("python"));
    }

    #[test]
    fn test_tags_from_name() {
        let tags = tags_from_path("docker/Dockerfile");
        assert!(tags.contains("dockerfile"));
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert!(tags_from_path("README.MD").contains("markdown"));
    }

    #[test]
    fn test_missing_file_defaults_to_text() {
        let temp_dir = TempDir::new().unwrap();
        let tags = tags_for(temp_dir.path(), "unknown.ext");
        assert!(tags.contains(TEXT));
        assert!(!tags.contains(FILE));
    }

    #[test]
    fn test_sniff_overrides_extension_guess() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("data.json"), [b'{', 0, b'}']).unwrap();
        let tags = tags_for(temp_dir.path(), "data.json");
        assert!(tags.contains(FILE));
        assert!(tags.contains(BINARY));
        assert!(!tags.contains(TEXT));
    }

    #[test]
    fn test_known_tags() {
        assert!(is_known_tag("python"));
        assert!(is_known_tag("file"));
        assert!(!is_known_tag("cobol"));
    }
}
