// src/parse.rs
//! Parser adapter and shared tree helpers for Python sources.

use tree_sitter::{Node, Parser, Tree};

/// Parses one Python module. Returns `None` when the grammar fails to load,
/// the parse is aborted, or the resulting tree contains syntax errors.
/// Callers treat all three as the same degraded case: no tree, no issues.
#[must_use]
pub fn parse_module(source: &str) -> Option<Tree> {
    let mut parser = Parser::new();
    parser.set_language(tree_sitter_python::language()).ok()?;
    let tree = parser.parse(source, None)?;
    if tree.root_node().has_error() {
        return None;
    }
    Some(tree)
}

/// Node text, degrading to an empty string on a bad byte range.
#[must_use]
pub fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Named statements of a block. Comments are "extra" nodes in the grammar
/// and would otherwise count as statements in window scans and sibling
/// checks, so they are filtered here once for every caller.
#[must_use]
pub fn statements(block: Node) -> Vec<Node> {
    let mut cursor = block.walk();
    block
        .named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .collect()
}

/// Top-level statements of a function body.
#[must_use]
pub fn body_statements(func: Node) -> Vec<Node> {
    func.child_by_field_name("body")
        .map(statements)
        .unwrap_or_default()
}

/// Declared parameter names of a function. Splat parameters (`*args`,
/// `**kwargs`) are excluded, mirroring the positional/keyword parameter
/// sets the checks care about.
#[must_use]
pub fn parameter_names(func: Node, source: &str) -> Vec<String> {
    let Some(params) = func.child_by_field_name("parameters") else {
        return Vec::new();
    };
    let mut names = Vec::new();
    let mut cursor = params.walk();
    for child in params.named_children(&mut cursor) {
        match child.kind() {
            "identifier" => names.push(node_text(child, source).to_string()),
            "typed_parameter" => {
                if let Some(inner) = child.named_child(0) {
                    if inner.kind() == "identifier" {
                        names.push(node_text(inner, source).to_string());
                    }
                }
            }
            "default_parameter" | "typed_default_parameter" => {
                if let Some(name) = child.child_by_field_name("name") {
                    if name.kind() == "identifier" {
                        names.push(node_text(name, source).to_string());
                    }
                }
            }
            _ => {}
        }
    }
    names
}
