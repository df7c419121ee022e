use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Every literal translation key used in `src/` must exist in the fallback locale.
///
/// Only literal first arguments are recognised; direct `fl!` calls and
/// computed IDs are not scanned.
const FALLBACK_FTL: &str = include_str!("../../i18n/en-US/veil_ui.ftl");

fn fallback_keys() -> BTreeSet<String> {
    FALLBACK_FTL
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn rust_sources(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|e| e.path()));
            }
        } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
            files.push(path);
        }
    }
    files
}

fn referenced_keys(content: &str) -> HashSet<String> {
    const NEEDLE: &str = "t!(\"";
    let mut found = HashSet::new();
    let mut rest = content;
    while let Some(pos) = rest.find(NEEDLE) {
        rest = &rest[pos + NEEDLE.len()..];
        if let Some(end) = rest.find('"') {
            let key = &rest[..end];
            if !key.is_empty() && key.chars().all(valid_key_char) {
                found.insert(key.to_string());
            }
            rest = &rest[end..];
        }
    }
    found
}

#[test]
fn referenced_keys_exist_in_fallback() {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let known = fallback_keys();
    assert!(!known.is_empty(), "No message keys parsed from fallback FTL");

    let mut referenced = HashSet::new();
    for file in rust_sources(&src_root) {
        let Ok(content) = fs::read_to_string(&file) else {
            continue;
        };
        referenced.extend(referenced_keys(&content));
    }
    assert!(referenced.contains("nav-menu"), "navbar label lookup not found");

    let mut missing: Vec<_> = referenced.iter().filter(|k| !known.contains(*k)).collect();
    missing.sort();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in fallback:\n{}",
        missing
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    );
}

#[test]
fn scanner_reads_literal_keys_only() {
    let keys = referenced_keys(r#"t!("nav-menu") t!("home-title", site = x) t!(dynamic)"#);
    let mut keys: Vec<_> = keys.into_iter().collect();
    keys.sort();
    assert_eq!(keys, ["home-title", "nav-menu"]);
}
