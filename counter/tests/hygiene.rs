//! Source budgets for the code that runs inside the page.
//!
//! Two trees are scanned: `counter/src` and the natively compiled half of the
//! client (`state/`, `util/`, `config.rs`, `lib.rs`). The `client/src/dom`
//! binders are excluded; they only build under `hydrate` and report failures
//! through `log` instead.
//!
//! Budgets are exact. A count above its budget fails; a count below it also
//! fails until the budget is lowered to match, so the numbers only shrink.

use std::fs;
use std::path::{Path, PathBuf};

struct Rule {
    /// Human label used in failure messages.
    what: &'static str,
    /// Substring matched per line.
    pattern: &'static str,
    budget: usize,
}

const fn rule(what: &'static str, pattern: &'static str, budget: usize) -> Rule {
    Rule { what, pattern, budget }
}

// The animator runs in a frame callback; any panic kills the wasm module.
const COUNTER_RULES: &[Rule] = &[
    rule("unwrap", ".unwrap()", 0),
    rule("expect", ".expect(", 0),
    rule("panic", "panic!(", 0),
    rule("unreachable", "unreachable!(", 0),
    rule("todo", "todo!(", 0),
    rule("slice indexing", "[..", 0),
    rule("byte indexing", "bytes[", 0),
    rule("discarded value", "let _ =", 0),
    rule("discarded error", ".ok()", 0),
    rule("browser binding", "web_sys::", 0),
    rule("wasm binding", "wasm_bindgen", 0),
];

// `let _ =` silences the arguments of the three native no-op branches in
// `util/storage.rs` and `util/theme.rs`; `.ok()` covers the hydrate-only
// storage lookups that degrade to "nothing stored".
const CLIENT_RULES: &[Rule] = &[
    rule("unwrap", ".unwrap()", 0),
    rule("expect", ".expect(", 0),
    rule("panic", "panic!(", 0),
    rule("slice indexing", "[..", 0),
    rule("discarded value", "let _ =", 3),
    rule("discarded error", ".ok()", 3),
    rule("allow dead code", "#[allow(dead_code)]", 0),
];

struct SourceFile {
    path: PathBuf,
    content: String,
}

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Production `.rs` files under `dir`, skipping `*_test.rs` and any
/// directory named in `skip_dirs`.
fn collect(dir: &Path, skip_dirs: &[&str], out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let name = path.file_name().unwrap_or_default().to_string_lossy().into_owned();
        if path.is_dir() {
            if !skip_dirs.contains(&name.as_str()) {
                collect(&path, skip_dirs, out);
            }
        } else if name.ends_with(".rs") && !name.ends_with("_test.rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

fn counter_sources() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(&manifest_dir().join("src"), &[], &mut files);
    files
}

fn client_native_sources() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(&manifest_dir().join("../client/src"), &["dom"], &mut files);
    files
}

/// Compare every rule's hit count with its budget; returns one message per
/// mismatch.
fn audit(files: &[SourceFile], rules: &[Rule]) -> Vec<String> {
    let mut problems = Vec::new();
    for rule in rules {
        let hits = files
            .iter()
            .flat_map(|file| {
                file.content
                    .lines()
                    .enumerate()
                    .filter(|(_, line)| line.contains(rule.pattern))
                    .map(move |(n, _)| format!("{}:{}", file.path.display(), n + 1))
            })
            .collect::<Vec<_>>();

        if hits.len() > rule.budget {
            problems.push(format!(
                "{} over budget ({} > {}):\n  {}",
                rule.what,
                hits.len(),
                rule.budget,
                hits.join("\n  ")
            ));
        } else if hits.len() < rule.budget {
            problems.push(format!("{} budget is stale: found {}, lower it from {}", rule.what, hits.len(), rule.budget));
        }
    }
    problems
}

#[test]
fn scanned_trees_are_not_empty() {
    assert!(counter_sources().iter().any(|f| f.path.ends_with("animator.rs")));
    assert!(client_native_sources().iter().any(|f| f.path.ends_with("config.rs")));
    assert!(!client_native_sources().iter().any(|f| f.path.components().any(|c| c.as_os_str() == "dom")));
}

#[test]
fn counter_sources_within_budget() {
    let problems = audit(&counter_sources(), COUNTER_RULES);
    assert!(problems.is_empty(), "counter/src:\n{}", problems.join("\n"));
}

#[test]
fn client_native_sources_within_budget() {
    let problems = audit(&client_native_sources(), CLIENT_RULES);
    assert!(problems.is_empty(), "client/src:\n{}", problems.join("\n"));
}

#[test]
fn audit_reports_overrun_and_stale_budgets() {
    let files = vec![SourceFile { path: PathBuf::from("sample.rs"), content: "let _ = a;\nlet _ = b;\n".to_owned() }];
    let over = audit(&files, &[rule("discarded value", "let _ =", 1)]);
    assert_eq!(over.len(), 1);
    assert!(over[0].contains("sample.rs:2"));

    let stale = audit(&files, &[rule("discarded value", "let _ =", 5)]);
    assert!(stale[0].contains("stale"));

    assert!(audit(&files, &[rule("discarded value", "let _ =", 2)]).is_empty());
}
