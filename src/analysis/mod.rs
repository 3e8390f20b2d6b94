// src/analysis/mod.rs
//! Core analysis passes over one Python source file.
//!
//! Every entry point takes raw source text and performs its own parse, so
//! each analyzer stays independently testable. On unparseable input each
//! returns its empty result instead of an error; see `crate::parse`.

mod complexity;
mod dead_code;
mod drift;
mod duplicates;
mod magic;
mod naming;

pub use complexity::{compute_complexity, Complexity};
pub use dead_code::analyze_dead_code;
pub use drift::analyze_comment_drift;
pub use duplicates::analyze_duplicates;
pub use magic::collect_magic_numbers;
pub use naming::analyze_naming;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Serialize;
use tree_sitter::{Query, QueryCursor};

use crate::error::{Result, VibelintError};
use crate::parse;

/// Per-function metrics captured in one traversal. Never mutated after the
/// collection pass finishes.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionRecord {
    pub name: String,
    pub loop_count: usize,
    pub conditional_count: usize,
    pub max_nesting_depth: usize,
    pub statement_count: usize,
    pub magic_numbers: BTreeSet<String>,
}

/// Everything the analyzers produce for one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileAnalysis {
    pub filename: String,
    pub functions: Vec<FunctionRecord>,
    pub naming_issues: Vec<String>,
    pub dead_code_issues: Vec<String>,
    pub duplicates: BTreeMap<String, Vec<(String, String)>>,
    pub drift: BTreeMap<String, String>,
}

const FUNCTION_QUERY: &str = "(function_definition name: (identifier) @name) @func";

/// Collects metrics for every function definition in source order,
/// methods and nested functions included. Unparseable input yields an
/// empty list.
#[must_use]
pub fn collect_functions(source: &str) -> Vec<FunctionRecord> {
    let Some(tree) = parse::parse_module(source) else {
        return Vec::new();
    };
    let Ok(query) = Query::new(tree_sitter_python::language(), FUNCTION_QUERY) else {
        return Vec::new();
    };

    let mut records = Vec::new();
    let mut cursor = QueryCursor::new();
    for m in cursor.matches(&query, tree.root_node(), source.as_bytes()) {
        let mut func = None;
        let mut name = None;
        for capture in m.captures {
            match capture.node.kind() {
                "function_definition" => func = Some(capture.node),
                "identifier" => name = Some(parse::node_text(capture.node, source)),
                _ => {}
            }
        }
        let (Some(func), Some(name)) = (func, name) else {
            continue;
        };

        let stmts = parse::body_statements(func);
        let metrics = compute_complexity(&stmts, 1);
        records.push(FunctionRecord {
            name: name.to_string(),
            loop_count: metrics.loops,
            conditional_count: metrics.conditionals,
            max_nesting_depth: metrics.max_depth,
            statement_count: stmts.len(),
            magic_numbers: collect_magic_numbers(func, source),
        });
    }
    records
}

/// Runs every analyzer over in-memory source text.
#[must_use]
pub fn analyze_source(source: &str, filename: &str) -> FileAnalysis {
    FileAnalysis {
        filename: filename.to_string(),
        functions: collect_functions(source),
        naming_issues: analyze_naming(source),
        dead_code_issues: analyze_dead_code(source),
        duplicates: analyze_duplicates(source),
        drift: analyze_comment_drift(source),
    }
}

/// Reads a file and runs every analyzer over it.
pub fn analyze_path(path: &Path) -> Result<FileAnalysis> {
    let source = std::fs::read_to_string(path).map_err(|source| VibelintError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let filename = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("<unknown>");
    Ok(analyze_source(&source, filename))
}
