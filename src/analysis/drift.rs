// src/analysis/drift.rs
//! Docstring drift: docstrings that fell out of sync with the code.

use std::collections::{BTreeMap, BTreeSet};

use tree_sitter::Node;

use crate::parse;

/// Compares each module-level function against its docstring and reports
/// parameter and return-value mismatches, keyed by function name.
/// Unparseable input yields an empty map.
#[must_use]
pub fn analyze_comment_drift(source: &str) -> BTreeMap<String, String> {
    let Some(tree) = parse::parse_module(source) else {
        return BTreeMap::new();
    };

    let mut findings = BTreeMap::new();
    let root = tree.root_node();
    let mut cursor = root.walk();
    for stmt in root.named_children(&mut cursor) {
        let func = match stmt.kind() {
            "function_definition" => stmt,
            "decorated_definition" => match stmt.child_by_field_name("definition") {
                Some(def) if def.kind() == "function_definition" => def,
                _ => continue,
            },
            _ => continue,
        };
        if let Some((name, message)) = check_function(func, source) {
            findings.insert(name, message);
        }
    }
    findings
}

fn check_function(func: Node, source: &str) -> Option<(String, String)> {
    let name = parse::node_text(func.child_by_field_name("name")?, source).to_string();
    let doc = docstring(func, source).unwrap_or_default();

    let declared: BTreeSet<String> = parse::parameter_names(func, source).into_iter().collect();
    // Anything before a colon on a docstring line is taken as a documented
    // parameter name. Deliberately naive; section headers like "Args" show
    // up as extras on unconventional docstrings.
    let documented: BTreeSet<String> = doc
        .lines()
        .filter_map(|line| line.split_once(':').map(|(before, _)| before.trim().to_string()))
        .filter(|candidate| !candidate.is_empty())
        .collect();

    let missing: Vec<&String> = declared.difference(&documented).collect();
    let extra: Vec<&String> = documented.difference(&declared).collect();

    let mut messages = Vec::new();
    if !missing.is_empty() {
        messages.push(format!("Missing param docs: {}", join(&missing)));
    }
    if !extra.is_empty() {
        messages.push(format!(
            "Docstring mentions params not in code: {}",
            join(&extra)
        ));
    }

    let returns_value = has_value_return(func);
    let mentions_return = doc.to_lowercase().contains("return");
    if returns_value && !mentions_return {
        messages.push("Docstring missing return description.".to_string());
    }
    if !returns_value && mentions_return {
        messages.push("Docstring claims a return value but function returns nothing.".to_string());
    }

    if messages.is_empty() {
        None
    } else {
        Some((name, messages.join("\n")))
    }
}

fn join(names: &[&String]) -> String {
    names
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The leading string expression of the function body, quotes and prefixes
/// stripped.
fn docstring(func: Node, source: &str) -> Option<String> {
    let body = func.child_by_field_name("body")?;
    let first = parse::statements(body).into_iter().next()?;
    if first.kind() != "expression_statement" {
        return None;
    }
    let expr = first.named_child(0)?;
    if expr.kind() != "string" {
        return None;
    }
    Some(strip_quotes(parse::node_text(expr, source)))
}

fn strip_quotes(raw: &str) -> String {
    let trimmed =
        raw.trim_start_matches(|c: char| matches!(c, 'r' | 'R' | 'b' | 'B' | 'u' | 'U' | 'f' | 'F'));
    for quote in ["\"\"\"", "'''", "\"", "'"] {
        if trimmed.len() >= quote.len() * 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote)
        {
            return trimmed[quote.len()..trimmed.len() - quote.len()].to_string();
        }
    }
    trimmed.to_string()
}

/// True when any `return` in the subtree carries a value. Nested functions
/// are included; the heuristic walks the whole subtree on purpose.
fn has_value_return(node: Node) -> bool {
    if node.kind() == "return_statement" && node.named_child_count() > 0 {
        return true;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if has_value_return(child) {
            return true;
        }
    }
    false
}
