// src/analysis/duplicates.rs
//! Near-duplicate logic detection via normalized structural hashing.
//!
//! Each window of consecutive statements is rendered back to text with
//! identifier names stripped, then digested. Equal digests mean the windows
//! are structurally identical modulo naming. Overlapping windows are all
//! recorded independently; the report leaves interpretation to the reader.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use sha2::{Digest, Sha256};
use tree_sitter::Node;

use crate::parse;

/// Window bounds, in consecutive top-level statements per function.
const MIN_WINDOW: usize = 2;
const MAX_WINDOW: usize = 6;

/// Groups structurally identical statement windows by digest. Only digests
/// with two or more occurrences survive; the occurrences may come from the
/// same function. Unparseable input yields an empty map.
#[must_use]
pub fn analyze_duplicates(source: &str) -> BTreeMap<String, Vec<(String, String)>> {
    let Some(tree) = parse::parse_module(source) else {
        return BTreeMap::new();
    };
    let lines: Vec<&str> = source.split('\n').collect();

    let mut blocks: Vec<(String, String, String)> = Vec::new();
    collect_windows(tree.root_node(), source, &lines, &mut blocks);

    let mut groups: BTreeMap<String, Vec<(String, String)>> = BTreeMap::new();
    for (digest, func, text) in blocks {
        groups.entry(digest).or_default().push((func, text));
    }
    groups.retain(|_, entries| entries.len() >= 2);
    groups
}

fn collect_windows(
    node: Node,
    source: &str,
    lines: &[&str],
    out: &mut Vec<(String, String, String)>,
) {
    if node.kind() == "function_definition" {
        if let Some(name_node) = node.child_by_field_name("name") {
            let func_name = parse::node_text(name_node, source);
            let stmts = parse::body_statements(node);
            scan_function(func_name, &stmts, source, lines, out);
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_windows(child, source, lines, out);
    }
}

fn scan_function(
    func_name: &str,
    stmts: &[Node],
    source: &str,
    lines: &[&str],
    out: &mut Vec<(String, String, String)>,
) {
    for width in MIN_WINDOW..=MAX_WINDOW {
        if stmts.len() < width {
            break;
        }
        for window in stmts.windows(width) {
            let raw = raw_text(window, lines);
            let normalized: Vec<String> = window
                .iter()
                .map(|stmt| normalize_statement(*stmt, source))
                .collect();
            let digest = structural_hash(&normalized.join("\n"));
            out.push((digest, func_name.to_string(), raw));
        }
    }
}

/// The original source lines spanned by a window, from the first
/// statement's start line through the last statement's end line.
fn raw_text(window: &[Node], lines: &[&str]) -> String {
    let (Some(first), Some(last)) = (window.first(), window.last()) else {
        return String::new();
    };
    let start = first.start_position().row;
    let end = last.end_position().row;
    lines
        .get(start..=end)
        .map(|span| span.join("\n"))
        .unwrap_or_default()
}

/// Renders one statement as a placeholder-normalized token stream:
/// attribute names become `<attr>`, function definition names `<func>`,
/// every other identifier `<var>`. Comments are dropped.
fn normalize_statement(stmt: Node, source: &str) -> String {
    let mut tokens = Vec::new();
    render(stmt, source, &mut tokens);
    tokens.join(" ")
}

fn render(node: Node, source: &str, tokens: &mut Vec<String>) {
    if node.child_count() == 0 {
        if node.kind() != "comment" {
            tokens.push(token_text(node, source));
        }
        return;
    }
    if node.kind() == "string" {
        // literal text kept intact, quotes included
        tokens.push(token_text(node, source));
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        render(child, source, tokens);
    }
}

/// A node whose text cannot be read falls back to a lossy raw rendering so
/// one bad node never aborts the scan.
fn token_text(node: Node, source: &str) -> String {
    if node.kind() == "identifier" {
        return placeholder(node).to_string();
    }
    match node.utf8_text(source.as_bytes()) {
        Ok(text) => text.to_string(),
        Err(_) => source
            .as_bytes()
            .get(node.byte_range())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default(),
    }
}

fn placeholder(node: Node) -> &'static str {
    let Some(parent) = node.parent() else {
        return "<var>";
    };
    let field_is = |field: &str| {
        parent
            .child_by_field_name(field)
            .map(|n| n.id() == node.id())
            .unwrap_or(false)
    };
    match parent.kind() {
        "attribute" if field_is("attribute") => "<attr>",
        "function_definition" if field_is("name") => "<func>",
        _ => "<var>",
    }
}

/// SHA-256 of the trimmed normalized text, hex-encoded.
fn structural_hash(text: &str) -> String {
    let digest = Sha256::digest(text.trim().as_bytes());
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}
