// src/analysis/magic.rs
//! Magic-number collection over a function subtree.

use std::collections::BTreeSet;

use tree_sitter::Node;

use crate::parse;

/// Integer values treated as idiomatic rather than magic.
const ALLOWED_INTS: [i64; 3] = [-1, 0, 1];

/// Collects the distinct numeric literals in a function subtree. Integer
/// literals equal to -1, 0, or 1 are skipped; floats are always collected.
/// Literals whose text fails to convert (radix prefixes, imaginary
/// suffixes) are silently dropped.
#[must_use]
pub fn collect_magic_numbers(function: Node, source: &str) -> BTreeSet<String> {
    let mut numbers = BTreeSet::new();
    walk(function, source, &mut numbers);
    numbers
}

fn walk(node: Node, source: &str, numbers: &mut BTreeSet<String>) {
    match node.kind() {
        "integer" => {
            let text = parse::node_text(node, source).replace('_', "");
            if let Ok(value) = text.parse::<i64>() {
                if !ALLOWED_INTS.contains(&value) {
                    numbers.insert(value.to_string());
                }
            }
        }
        "float" => {
            let text = parse::node_text(node, source).replace('_', "");
            if let Ok(value) = text.parse::<f64>() {
                numbers.insert(render_float(value));
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, source, numbers);
    }
}

/// Whole-valued floats keep a trailing `.0` so `2.0` never collides with
/// the integer `2`.
fn render_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
