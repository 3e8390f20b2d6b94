// src/analysis/naming.rs
//! Identifier casing checks for functions, parameters, classes, and
//! assignment targets.

use std::sync::LazyLock;

use regex::Regex;
use tree_sitter::Node;

use crate::parse;

static SNAKE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z_][a-z0-9_]*$").unwrap());
static PASCAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]+$").unwrap());
static SCREAMING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z0-9_]+$").unwrap());

/// Single-letter names accepted as loop indices.
const INDEX_NAMES: [&str; 3] = ["i", "j", "k"];

/// Reports casing violations. Each rule is evaluated independently, so one
/// construct can produce several issues. Unparseable input yields none.
#[must_use]
pub fn analyze_naming(source: &str) -> Vec<String> {
    let Some(tree) = parse::parse_module(source) else {
        return Vec::new();
    };
    let mut issues = Vec::new();
    visit(tree.root_node(), source, &mut issues);
    issues
}

fn visit(node: Node, source: &str, issues: &mut Vec<String>) {
    match node.kind() {
        "function_definition" => check_function(node, source, issues),
        "class_definition" => check_class(node, source, issues),
        "assignment" => check_assignment(node, source, issues),
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, source, issues);
    }
}

fn check_function(node: Node, source: &str, issues: &mut Vec<String>) {
    if let Some(name_node) = node.child_by_field_name("name") {
        let name = parse::node_text(name_node, source);
        if !SNAKE.is_match(name) {
            issues.push(format!("Function `{name}` is not snake_case."));
        }
    }

    // Short-name check takes precedence; the two are mutually exclusive.
    for pname in parse::parameter_names(node, source) {
        if pname.chars().count() <= 1 && !INDEX_NAMES.contains(&pname.as_str()) {
            issues.push(format!(
                "Parameter `{pname}` is too short. Prefer descriptive names."
            ));
        } else if !SNAKE.is_match(&pname) {
            issues.push(format!("Parameter `{pname}` is not snake_case."));
        }
    }
}

fn check_class(node: Node, source: &str, issues: &mut Vec<String>) {
    if let Some(name_node) = node.child_by_field_name("name") {
        let name = parse::node_text(name_node, source);
        if !PASCAL.is_match(name) {
            issues.push(format!("Class `{name}` is not PascalCase."));
        }
    }
}

/// Bare identifier targets only; destructuring, attribute, and subscript
/// targets are left alone. Constant / too-short / snake_case checks are
/// mutually exclusive, in that priority order.
fn check_assignment(node: Node, source: &str, issues: &mut Vec<String>) {
    let Some(target) = node.child_by_field_name("left") else {
        return;
    };
    if target.kind() != "identifier" {
        return;
    }
    let name = parse::node_text(target, source);

    if is_constant_style(name) {
        if !SCREAMING.is_match(name) {
            issues.push(format!("Constant `{name}` should be SCREAMING_SNAKE_CASE."));
        }
        return;
    }
    if name.chars().count() == 1 && !INDEX_NAMES.contains(&name) {
        issues.push(format!("Variable `{name}` is too short. Unclear purpose."));
        return;
    }
    if !SNAKE.is_match(name) {
        issues.push(format!("Variable `{name}` is not snake_case."));
    }
}

/// Mirrors Python's `str.isupper()` plus a length guard: at least one cased
/// character, no lowercase, and more than one character overall.
fn is_constant_style(name: &str) -> bool {
    let mut has_cased = false;
    for c in name.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased && name.chars().count() > 1
}
