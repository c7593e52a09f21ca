//! Hygiene: enforces coding standards at test time
//!
//! Scans the client crate's production sources for antipatterns. Browser calls
//! return `Result`s that must be logged or handled, never unwrapped or
//! silently dropped. Each budget is zero; `_test.rs` files are exempt.

use std::fs;
use std::path::Path;

/// (pattern, budget, why it matters)
const RULES: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on error"),
    (".expect(", 0, "panics on error"),
    ("panic!(", 0, "crashes the page"),
    ("unreachable!(", 0, "crashes the page"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discards a result without inspecting it"),
    (".ok()", 0, "discards the error value"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if path.extension().is_none_or(|e| e != "rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|f| (f.path.clone(), f.content.lines().filter(|line| line.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// Crate names listed under `[dependencies]` in the client manifest.
fn manifest_dependencies() -> Vec<String> {
    let manifest = fs::read_to_string("Cargo.toml").unwrap_or_default();
    let mut in_deps = false;
    let mut names = Vec::new();
    for line in manifest.lines().map(str::trim) {
        if line.starts_with('[') {
            in_deps = line == "[dependencies]";
            continue;
        }
        if !in_deps || line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((name, _)) = line.split_once('=') {
            names.push(name.trim().to_owned());
        }
    }
    names
}

/// Whether `content` uses `path` as a crate root, not as the tail of a
/// longer identifier (`console_log::` is not a use of `log::`).
fn references(content: &str, path: &str) -> bool {
    content.match_indices(path).any(|(at, _)| {
        content[..at].chars().next_back().is_none_or(|c| !(c.is_alphanumeric() || c == '_' || c == ':'))
    })
}

#[test]
fn sources_are_found() {
    assert!(!source_files().is_empty(), "no sources under src/; run from the client crate root");
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, why) in RULES {
        let found = hits(&files, pattern);
        let total: usize = found.iter().map(|(_, c)| c).sum();
        if total > *budget {
            let detail: Vec<String> = found.iter().map(|(p, c)| format!("    {p}: {c}")).collect();
            failures.push(format!("{pattern} ({why}): found {total}, max {budget}\n{}", detail.join("\n")));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn every_dependency_is_referenced() {
    let files = source_files();
    let deps = manifest_dependencies();
    assert!(!deps.is_empty(), "no [dependencies] found in Cargo.toml");
    let unused: Vec<&String> = deps
        .iter()
        .filter(|dep| {
            let path = format!("{}::", dep.replace('-', "_"));
            files.iter().all(|f| !references(&f.content, &path))
        })
        .collect();
    assert!(unused.is_empty(), "dependencies never referenced from src/: {unused:?}");
}

#[test]
fn modules_open_with_doc_header() {
    let files = source_files();
    let missing: Vec<&str> =
        files.iter().filter(|f| !f.content.trim_start().starts_with("//!")).map(|f| f.path.as_str()).collect();
    assert!(missing.is_empty(), "modules without a //! header: {missing:?}");
}
