// src/analysis/complexity.rs
//! Loop, conditional, and nesting-depth counting over statement sequences.

use tree_sitter::Node;

use crate::parse;

/// Counts produced by one walk over a statement sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub loops: usize,
    pub conditionals: usize,
    pub max_depth: usize,
}

/// Walks a statement sequence counting loops and conditionals and tracking
/// the deepest nesting level observed across all branches. A function body
/// starts at depth 1; entering a loop or conditional body moves to
/// depth + 1, and elif/else branches are analyzed at that same incremented
/// depth with their counts added to the running totals. Nested function and
/// class definitions are not descended into; they are measured when visited
/// on their own.
#[must_use]
pub fn compute_complexity(statements: &[Node], start_depth: usize) -> Complexity {
    let mut total = Complexity {
        loops: 0,
        conditionals: 0,
        max_depth: start_depth,
    };

    for stmt in statements {
        match stmt.kind() {
            "for_statement" | "while_statement" => {
                total.loops += 1;
                descend_body(*stmt, start_depth, &mut total);
                descend_loop_else(*stmt, start_depth, &mut total);
            }
            "if_statement" => {
                total.conditionals += 1;
                descend_field(*stmt, "consequence", start_depth, &mut total);
                descend_alternatives(*stmt, start_depth, &mut total);
            }
            _ => {}
        }
    }
    total
}

fn descend_body(stmt: Node, depth: usize, total: &mut Complexity) {
    descend_field(stmt, "body", depth, total);
}

fn descend_loop_else(stmt: Node, depth: usize, total: &mut Complexity) {
    if let Some(alt) = stmt.child_by_field_name("alternative") {
        descend_field(alt, "body", depth, total);
    }
}

fn descend_alternatives(stmt: Node, depth: usize, total: &mut Complexity) {
    let mut cursor = stmt.walk();
    for alt in stmt.children_by_field_name("alternative", &mut cursor) {
        match alt.kind() {
            "elif_clause" => {
                total.conditionals += 1;
                descend_field(alt, "consequence", depth, total);
            }
            "else_clause" => descend_field(alt, "body", depth, total),
            _ => {}
        }
    }
}

fn descend_field(node: Node, field: &str, depth: usize, total: &mut Complexity) {
    if let Some(block) = node.child_by_field_name(field) {
        merge(total, compute_complexity(&parse::statements(block), depth + 1));
    }
}

fn merge(total: &mut Complexity, branch: Complexity) {
    total.loops += branch.loops;
    total.conditionals += branch.conditionals;
    total.max_depth = total.max_depth.max(branch.max_depth);
}
