//! Hygiene — enforces coding standards at test time
//!
//! Scans the surface crate's production sources for antipatterns. Every
//! pattern has a budget of zero, and the budget never grows: fix an
//! existing occurrence before adding another.

use std::fs;
use std::path::{Path, PathBuf};

/// (pattern, what it costs us)
const FORBIDDEN: &[(&str, &str)] = &[
    (".unwrap()", "panics instead of propagating"),
    (".expect(", "panics instead of propagating"),
    ("panic!(", "crashes the process"),
    ("unreachable!(", "crashes the process"),
    ("todo!(", "unfinished code path"),
    ("unimplemented!(", "unfinished code path"),
    ("let _ =", "discards a result without inspecting it"),
    (".ok()", "discards an error without inspecting it"),
    ("#[allow(dead_code)]", "hides unused code"),
];

/// Collect production `.rs` files under `src/`, excluding `_test.rs` files.
fn production_sources(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs")
            && !path.to_string_lossy().ends_with("_test.rs")
        {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

#[test]
fn production_sources_stay_clean() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found — run from the crate root");

    let mut violations = Vec::new();
    for (path, content) in &files {
        for (line_no, line) in content.lines().enumerate() {
            for (pattern, why) in FORBIDDEN {
                if line.contains(pattern) {
                    violations.push(format!(
                        "{}:{}: `{pattern}` ({why})",
                        path.display(),
                        line_no + 1
                    ));
                }
            }
        }
    }
    assert!(
        violations.is_empty(),
        "hygiene violations:\n{}",
        violations.join("\n")
    );
}
