use std::fs;
use tempfile::TempDir;
use treepress::pattern::{load_ignore_file, Pattern};

// --- Directory-only patterns ---

#[test]
fn test_trailing_slash_never_matches_files() {
    let p = Pattern::compile("build/").unwrap();
    assert!(p.matches("build", true));
    assert!(!p.matches("build", false));
    assert!(!p.matches("build/output.txt", false));
}

#[test]
fn test_trailing_slash_matches_nested_directory() {
    let p = Pattern::compile("target/").unwrap();
    assert!(p.matches("target", true));
    // Only the named path itself; descendants are handled by pruning.
    assert!(!p.matches("sub/target", true));
}

// --- Double-star segments ---

#[test]
fn test_double_star_spans_any_depth() {
    let p = Pattern::compile("a/**/b").unwrap();
    assert!(p.matches("a/b", false));
    assert!(p.matches("a/x/b", false));
    assert!(p.matches("a/x/y/b", false));
    assert!(!p.matches("a/xb", false));
    assert!(!p.matches("ab", false));
}

#[test]
fn test_leading_double_star() {
    let p = Pattern::compile("**/target").unwrap();
    assert!(p.matches("target", true));
    assert!(p.matches("crates/app/target", true));
}

#[test]
fn test_trailing_double_star() {
    let p = Pattern::compile("logs/**").unwrap();
    assert!(p.matches("logs/today.log", false));
    assert!(p.matches("logs/2024/jan.log", false));
    assert!(!p.matches("logs", true));
}

// --- Single-segment wildcards ---

#[test]
fn test_star_stays_within_a_segment() {
    let p = Pattern::compile("*.log").unwrap();
    assert!(p.matches("debug.log", false));
    assert!(!p.matches("logs/debug.log", false));
}

#[test]
fn test_question_mark_is_one_character() {
    let p = Pattern::compile("v?").unwrap();
    assert!(p.matches("v1", true));
    assert!(!p.matches("v12", true));
    assert!(!p.matches("v", true));
}

// --- Leading-component rule ---

#[test]
fn test_pattern_matches_everything_beneath_it() {
    let p = Pattern::compile("node_modules").unwrap();
    assert!(p.matches("node_modules", true));
    assert!(p.matches("node_modules/pkg/index.js", false));
    assert!(!p.matches("my_node_modules", true));
}

#[test]
fn test_nested_pattern_prefix() {
    let p = Pattern::compile("src/generated").unwrap();
    assert!(p.matches("src/generated", true));
    assert!(p.matches("src/generated/api.rs", false));
    assert!(!p.matches("src/generated_old", true));
}

// --- Case policy ---

#[test]
fn test_matching_is_case_insensitive() {
    let p = Pattern::compile("Obj/**").unwrap();
    assert!(p.matches("obj/Debug/app.dll", false));
    let p = Pattern::compile("*.TMP").unwrap();
    assert!(p.matches("cache.tmp", false));
}

// --- No negation support ---

#[test]
fn test_negation_lines_are_literal() {
    let p = Pattern::compile("!important.log").unwrap();
    assert!(!p.matches("important.log", false));
    assert!(p.matches("!important.log", false));
}

// --- Ignore file loading ---

#[test]
fn test_ignore_file_skips_blanks_and_comments() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(".treepressignore");
    fs::write(&path, "# build output\n\n*.log\ndist/\n").unwrap();

    let patterns = load_ignore_file(&path);
    assert_eq!(patterns.len(), 2);
    assert_eq!(patterns[0].as_str(), "*.log");
    assert_eq!(patterns[1].as_str(), "dist/");
}

#[test]
fn test_ignore_file_preserves_order() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(".treepressignore");
    fs::write(&path, "a\nb\nc\n").unwrap();

    let patterns = load_ignore_file(&path);
    let raw: Vec<&str> = patterns.iter().map(|p| p.as_str()).collect();
    assert_eq!(raw, ["a", "b", "c"]);
}

#[test]
fn test_missing_ignore_file_yields_no_patterns() {
    let tmp = TempDir::new().unwrap();
    let patterns = load_ignore_file(&tmp.path().join("nope"));
    assert!(patterns.is_empty());
}

#[test]
fn test_crlf_lines_are_handled() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(".treepressignore");
    fs::write(&path, "*.log\r\ndist/\r\n").unwrap();

    let patterns = load_ignore_file(&path);
    assert_eq!(patterns.len(), 2);
    assert!(patterns[0].matches("debug.log", false));
}
