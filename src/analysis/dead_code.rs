// src/analysis/dead_code.rs
//! Dead-code heuristics: unreachable statements, always-false conditionals,
//! and unused parameters, variables, and imports.
//!
//! Usage tracking is name-based and file-scoped: a name read anywhere in
//! the file suppresses the unused warning even when the read sits in an
//! unrelated function, and attribute names count as reads. Shadowing lowers
//! precision further. Acceptable for an advisory linter, not a compiler.

use std::collections::BTreeSet;

use tree_sitter::Node;

use crate::parse;

/// Visitor-local accumulator threaded through the traversal and consumed by
/// the finalization pass.
#[derive(Default)]
struct Usage {
    issues: Vec<String>,
    assigned: BTreeSet<String>,
    used: BTreeSet<String>,
    imported: BTreeSet<String>,
}

/// Reports dead-code findings for one module. Unparseable input yields no
/// issues.
#[must_use]
pub fn analyze_dead_code(source: &str) -> Vec<String> {
    let Some(tree) = parse::parse_module(source) else {
        return Vec::new();
    };
    let mut usage = Usage::default();
    visit(tree.root_node(), source, &mut usage);
    finalize(usage)
}

fn visit(node: Node, source: &str, usage: &mut Usage) {
    match node.kind() {
        "import_statement" | "import_from_statement" => {
            // module path identifiers are declarations, not reads
            record_imports(node, source, usage);
            return;
        }
        "function_definition" => {
            visit_function(node, source, usage);
            return;
        }
        "class_definition" => {
            // class name is a declaration; bases and body are normal code
            visit_children_except(node, source, usage, "name");
            return;
        }
        "assignment" => {
            visit_assignment(node, source, usage);
            return;
        }
        "if_statement" | "elif_clause" => {
            if let Some(test) = node.child_by_field_name("condition") {
                check_always_false(test, source, usage);
            }
        }
        "block" => check_unreachable(node, usage),
        "identifier" => {
            usage.used.insert(parse::node_text(node, source).to_string());
        }
        _ => {}
    }
    visit_children(node, source, usage);
}

fn visit_children(node: Node, source: &str, usage: &mut Usage) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, source, usage);
    }
}

fn visit_children_except(node: Node, source: &str, usage: &mut Usage, skip_field: &str) {
    let skipped = node.child_by_field_name(skip_field).map(|n| n.id());
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if Some(child.id()) == skipped {
            continue;
        }
        visit(child, source, usage);
    }
}

fn visit_function(node: Node, source: &str, usage: &mut Usage) {
    let name = node
        .child_by_field_name("name")
        .map(|n| parse::node_text(n, source).to_string())
        .unwrap_or_default();
    let params = parse::parameter_names(node, source);

    // Parameter names are declarations; defaults and annotations are reads.
    if let Some(parameters) = node.child_by_field_name("parameters") {
        visit_parameters(parameters, source, usage);
    }
    if let Some(ret) = node.child_by_field_name("return_type") {
        visit(ret, source, usage);
    }
    if let Some(body) = node.child_by_field_name("body") {
        visit(body, source, usage);
    }

    // Checked at definition exit against every read seen so far in the
    // file, not against the function's own scope.
    for param in &params {
        if !usage.used.contains(param) {
            usage.issues.push(format!(
                "Parameter `{param}` in function `{name}` is never used."
            ));
        }
    }
}

fn visit_parameters(parameters: Node, source: &str, usage: &mut Usage) {
    let mut cursor = parameters.walk();
    for child in parameters.named_children(&mut cursor) {
        match child.kind() {
            "identifier" | "list_splat_pattern" | "dictionary_splat_pattern" => {}
            "typed_parameter" => {
                if let Some(ty) = child.child_by_field_name("type") {
                    visit(ty, source, usage);
                }
            }
            "default_parameter" => {
                if let Some(value) = child.child_by_field_name("value") {
                    visit(value, source, usage);
                }
            }
            "typed_default_parameter" => {
                if let Some(ty) = child.child_by_field_name("type") {
                    visit(ty, source, usage);
                }
                if let Some(value) = child.child_by_field_name("value") {
                    visit(value, source, usage);
                }
            }
            _ => visit(child, source, usage),
        }
    }
}

fn visit_assignment(node: Node, source: &str, usage: &mut Usage) {
    if let Some(target) = node.child_by_field_name("left") {
        if target.kind() == "identifier" {
            usage
                .assigned
                .insert(parse::node_text(target, source).to_string());
        } else {
            // tuple/attribute/subscript targets keep their reads
            visit(target, source, usage);
        }
    }
    if let Some(ty) = node.child_by_field_name("type") {
        visit(ty, source, usage);
    }
    if let Some(right) = node.child_by_field_name("right") {
        visit(right, source, usage);
    }
}

fn record_imports(node: Node, source: &str, usage: &mut Usage) {
    let module = node.child_by_field_name("module_name").map(|n| n.id());
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if Some(child.id()) == module {
            continue;
        }
        match child.kind() {
            "dotted_name" => {
                if let Some(bound) = bound_name(child, source) {
                    usage.imported.insert(bound);
                }
            }
            "aliased_import" => {
                if let Some(alias) = child.child_by_field_name("alias") {
                    usage
                        .imported
                        .insert(parse::node_text(alias, source).to_string());
                }
            }
            _ => {}
        }
    }
}

/// The name an import binds: the first segment of a dotted path.
fn bound_name(dotted: Node, source: &str) -> Option<String> {
    let first = dotted.named_child(0)?;
    Some(parse::node_text(first, source).to_string())
}

fn check_always_false(test: Node, source: &str, usage: &mut Usage) {
    match test.kind() {
        "false" => usage
            .issues
            .push("Found `if False:` block, always unreachable.".to_string()),
        "integer" if parse::node_text(test, source) == "0" => usage
            .issues
            .push("Found `if 0:` block, always unreachable.".to_string()),
        "comparison_operator" => {
            if is_false_comparison(test, source) {
                usage
                    .issues
                    .push("Found always-false comparison such as `1 == 2`.".to_string());
            }
        }
        _ => {}
    }
}

/// `lhs == rhs` where both sides are distinct integer literals. Equal
/// literals, non-literal operands, and malformed comparisons are ignored.
fn is_false_comparison(test: Node, source: &str) -> bool {
    let Some(op) = test.child_by_field_name("operators") else {
        return false;
    };
    if op.kind() != "==" {
        return false;
    }
    let (Some(left), Some(right)) = (test.named_child(0), test.named_child(1)) else {
        return false;
    };
    if left.kind() != "integer" || right.kind() != "integer" {
        return false;
    }
    let lhs = parse::node_text(left, source).replace('_', "").parse::<i64>();
    let rhs = parse::node_text(right, source).replace('_', "").parse::<i64>();
    matches!((lhs, rhs), (Ok(a), Ok(b)) if a != b)
}

/// One issue per block, raised the first time a statement follows a bare
/// return/raise/break/continue sibling.
fn check_unreachable(block: Node, usage: &mut Usage) {
    let mut saw_terminal = false;
    for stmt in parse::statements(block) {
        if saw_terminal {
            usage
                .issues
                .push("Unreachable code detected after return/raise/break/continue.".to_string());
            break;
        }
        if matches!(
            stmt.kind(),
            "return_statement" | "raise_statement" | "break_statement" | "continue_statement"
        ) {
            saw_terminal = true;
        }
    }
}

fn finalize(mut usage: Usage) -> Vec<String> {
    for var in &usage.assigned {
        if !usage.used.contains(var) {
            usage
                .issues
                .push(format!("Variable `{var}` is assigned but never used."));
        }
    }
    for name in &usage.imported {
        if !usage.used.contains(name) {
            usage.issues.push(format!("Import `{name}` appears unused."));
        }
    }
    usage.issues
}
