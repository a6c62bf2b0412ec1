use copy_repo::config::{CopyRepoConfig, DEFAULT_IGNORED_EXTENSIONS, SNIFF_LEN};
use copy_repo::errors::CopyRepoError;
use copy_repo::ignore::{load_patterns, IgnoreReason, IgnoreRuleSet, PatternRule};
use copy_repo::selector::Selector;
use copy_repo::sniff::{classify, is_binary, ContentKind};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use tracing_test::traced_test;

fn write_file(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn default_rules() -> IgnoreRuleSet {
    let config = CopyRepoConfig::default();
    IgnoreRuleSet::new(
        config.ignored_basenames,
        config.ignored_extensions,
        Vec::new(),
    )
}

fn selected(root: &Path, rules: &IgnoreRuleSet) -> Vec<String> {
    Selector::new(rules, SNIFF_LEN)
        .select(root)
        .unwrap_or_else(|e| panic!("Selection failed: {:?}", e))
        .iter()
        .map(|entry| entry.display_path())
        .collect()
}

#[test]
fn test_pruned_directory_contributes_no_files() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_file(root, "main.go", b"package main\n");
    write_file(root, "generated/a/b/c/deep.go", b"package deep\n");
    write_file(root, "generated/top.go", b"package gen\n");
    write_file(root, "src/generated/nested.go", b"package nested\n");

    let rules = default_rules().with_patterns(["generated/"]);
    let files = selected(root, &rules);

    assert_eq!(files, vec!["main.go"]);
}

#[test]
fn test_default_basenames_prune_vcs_and_vendor_directories() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_file(root, ".git/config.rs", b"fn main() {}\n");
    write_file(root, "vendor/lib/dep.go", b"package dep\n");
    write_file(root, "web/node_modules/pkg/index.js", b"module.exports = 1;\n");
    write_file(root, "web/app.js", b"console.log(1);\n");
    write_file(root, "Cargo.lock", b"# lock\n");

    let files = selected(root, &default_rules());

    assert_eq!(files, vec!["web/app.js"]);
}

#[test]
fn test_selection_is_repeatable() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    for name in ["b.rs", "a.rs", "z/y.rs", "z/x.py", "m/n/o.c"] {
        write_file(root, name, b"// code\n");
    }

    let rules = default_rules();
    let first = selected(root, &rules);
    let second = selected(root, &rules);

    assert_eq!(first, second);
    assert_eq!(first, vec!["a.rs", "b.rs", "m/n/o.c", "z/x.py", "z/y.rs"]);
}

#[test]
fn test_extension_deny_list_applies_without_patterns() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_file(root, "README.md", b"# Title\n");
    write_file(root, "notes.TXT", b"notes\n");
    write_file(root, "config.yaml", b"key: value\n");
    write_file(root, "logo.svg", b"<svg></svg>\n");
    write_file(root, "lib.rs", b"pub fn f() {}\n");

    let rules = default_rules();
    assert_eq!(rules.pattern_count(), 0);
    assert_eq!(
        rules.check_file(Path::new("README.md")),
        Some(IgnoreReason::Extension)
    );
    assert_eq!(selected(root, &rules), vec!["lib.rs"]);
}

#[test]
fn test_every_denied_extension_is_excluded_in_any_case() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    for ext in DEFAULT_IGNORED_EXTENSIONS {
        write_file(root, &format!("lower.{}", ext), b"plain text\n");
        write_file(
            root,
            &format!("UPPER.{}", ext.to_ascii_uppercase()),
            b"plain text\n",
        );
    }

    let rules = default_rules();
    assert_eq!(rules.pattern_count(), 0);

    let files = selected(root, &rules);
    assert!(files.is_empty(), "Denied extensions leaked through: {:?}", files);
}

#[test]
fn test_rule_precedence_reports_first_match() {
    let rules = default_rules().with_patterns(["*.md", "*.go"]);

    assert_eq!(
        rules.check_file(Path::new("vendor")),
        Some(IgnoreReason::Basename)
    );
    assert_eq!(
        rules.check_file(Path::new("docs/guide.md")),
        Some(IgnoreReason::Extension)
    );
    assert_eq!(
        rules.check_file(Path::new("cmd/main.go")),
        Some(IgnoreReason::Pattern)
    );
    assert_eq!(rules.check_file(Path::new("cmd/main.rs")), None);
}

#[test]
fn test_pattern_glob_semantics() {
    let rules = IgnoreRuleSet::default().with_patterns([
        "# comment",
        "",
        "*.gen.go",
        "/root_only.rs",
        "docs/*.rs",
        "build/",
    ]);
    assert_eq!(rules.pattern_count(), 4);

    assert!(rules.check_file(Path::new("api/types.gen.go")).is_some());
    assert!(rules.check_file(Path::new("root_only.rs")).is_some());
    assert!(rules.check_file(Path::new("src/root_only.rs")).is_none());
    assert!(rules.check_file(Path::new("docs/example.rs")).is_some());
    assert!(rules.check_file(Path::new("docs/deep/example.rs")).is_none());
    // Directory patterns never match plain files.
    assert!(rules.check_file(Path::new("build")).is_none());
    assert_eq!(
        rules.check_dir(Path::new("tools/build")),
        Some(IgnoreReason::Pattern)
    );
}

#[test]
fn test_negated_and_invalid_patterns_are_skipped() {
    assert!(PatternRule::parse("!keep.rs").is_none());
    assert!(PatternRule::parse("[unclosed").is_none());
    assert!(PatternRule::parse("   ").is_none());
    assert!(PatternRule::parse("target/").is_some());
}

#[test]
#[traced_test]
fn test_missing_ignore_file_fails_open() {
    let dir = tempdir().unwrap();
    let patterns = load_patterns(&dir.path().join(".gitignore"));

    assert!(patterns.is_empty());
    assert!(logs_contain("No ignore file"));
}

#[test]
#[traced_test]
fn test_unreadable_ignore_file_fails_open() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir(root.join(".gitignore")).unwrap();
    write_file(root, "main.rs", b"fn main() {}\n");

    let patterns = load_patterns(&root.join(".gitignore"));
    assert!(patterns.is_empty());
    assert!(logs_contain("Could not read ignore file"));

    let config = CopyRepoConfig::for_root(root);
    let rules = IgnoreRuleSet::from_config(&config);
    assert_eq!(rules.pattern_count(), 0);
    assert_eq!(selected(root, &rules), vec!["main.rs"]);
}

#[test]
fn test_rules_from_config_deny_own_artifacts() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_file(root, ".gitignore", b"tmp/\n*.bak.rs\n");
    write_file(root, "codebase.txt", b"previous output\n");
    write_file(root, "tmp/scratch.rs", b"fn f() {}\n");
    write_file(root, "old.bak.rs", b"fn g() {}\n");
    write_file(root, "keep.rs", b"fn h() {}\n");

    let config = CopyRepoConfig::for_root(root);
    let rules = IgnoreRuleSet::from_config(&config);

    assert_eq!(rules.pattern_count(), 2);
    assert_eq!(
        rules.check_file(Path::new(".gitignore")),
        Some(IgnoreReason::Basename)
    );
    assert_eq!(selected(root, &rules), vec!["keep.rs"]);
}

#[test]
fn test_binary_content_is_excluded() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_file(root, "blob.dat", b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR");
    write_file(root, "nul.go", b"package main\x00\x01\x02");
    write_file(root, "small.go", b"package main\n\nfunc main() {}\n");

    let files = selected(root, &default_rules());

    assert_eq!(files, vec!["small.go"]);
}

#[test]
fn test_classify_content_prefixes() {
    assert_eq!(classify(b""), ContentKind::Text);
    assert_eq!(classify(b"plain ascii\twith tabs\r\n"), ContentKind::Text);
    assert_eq!(classify("héllo wörld".as_bytes()), ContentKind::Text);
    assert_eq!(classify(b"\xef\xbb\xbfbom text"), ContentKind::Text);
    assert_eq!(classify(b"%PDF-1.7\n"), ContentKind::Binary);
    assert_eq!(classify(b"GIF89a...."), ContentKind::Binary);
    assert_eq!(classify(b"text then \x00"), ContentKind::Binary);
}

#[test]
fn test_riff_requires_known_form_type() {
    assert_eq!(classify(b"RIFF\x24\x08\x00\x00WAVEfmt "), ContentKind::Binary);
    assert_eq!(classify(b"RIFF\x24\x08\x00\x00WEBPVP8 "), ContentKind::Binary);
    assert_eq!(classify(b"RIFF parser for media files\n"), ContentKind::Text);
    assert_eq!(classify(b"RIFF"), ContentKind::Text);
    assert_eq!(classify(b"OggSync helpers\n"), ContentKind::Text);
    assert_eq!(classify(b"wOFFset table\n"), ContentKind::Text);
}

#[test]
fn test_text_starting_with_container_letters_is_selected() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write_file(root, "riff.c", b"RIFF chunk reader\nint main(void) { return 0; }\n");

    assert_eq!(selected(root, &default_rules()), vec!["riff.c"]);
}

#[test]
fn test_sniff_only_reads_leading_bytes() {
    let dir = tempdir().unwrap();
    let mut content = vec![b'a'; SNIFF_LEN];
    content.extend_from_slice(b"\x00\x00\x00");
    let path = dir.path().join("late_nul.c");
    fs::write(&path, content).unwrap();

    assert!(!is_binary(&path, SNIFF_LEN));
}

#[test]
fn test_unreadable_file_sniffs_as_text() {
    let missing = PathBuf::from("/definitely/not/here.rs");
    assert!(!is_binary(&missing, SNIFF_LEN));
}

#[test]
fn test_missing_root_is_not_found() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let rules = default_rules();

    let result = Selector::new(&rules, SNIFF_LEN).select(&missing);

    assert!(
        matches!(result, Err(CopyRepoError::NotFoundError(ref p)) if p == &missing),
        "Expected NotFoundError, got {:?}",
        result
    );
}
