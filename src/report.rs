// src/report.rs
//! Markdown quality report assembly.

use crate::analysis::{self, FunctionRecord};
use crate::parse;

/// Advisory thresholds; each one independently adds a recommendation line.
const DEPTH_ADVISORY: usize = 4;
const LOOP_ADVISORY: usize = 3;
const CONDITIONAL_ADVISORY: usize = 5;
const STATEMENT_ADVISORY: usize = 15;

/// Renders the full quality report for one source file. Sections appear in
/// a fixed order: per-function metrics, naming, dead code, duplicate logic,
/// docstring drift. A section with no findings renders an explicit
/// "none detected" line. Unparseable input produces a one-line document.
#[must_use]
pub fn generate_report(source: &str, filename: &str) -> String {
    if parse::parse_module(source).is_none() {
        return "# Report Unavailable: Parsing Failed".to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("# Quality Report for `{filename}`\n"));

    for func in analysis::collect_functions(source) {
        push_function_section(&mut lines, &func);
    }

    push_issue_section(
        &mut lines,
        "## Naming Issues",
        &analysis::analyze_naming(source),
        "No naming issues detected.",
    );
    push_issue_section(
        &mut lines,
        "## Dead Code Issues",
        &analysis::analyze_dead_code(source),
        "No dead code detected.",
    );
    push_duplicate_section(&mut lines, source);
    push_drift_section(&mut lines, source);

    lines.join("\n")
}

fn push_function_section(lines: &mut Vec<String>, func: &FunctionRecord) {
    lines.push(format!("## Function: `{}`", func.name));
    lines.push(format!("- Loops: {}", func.loop_count));
    lines.push(format!("- Conditionals: {}", func.conditional_count));
    lines.push(format!("- Max Nesting Depth: {}", func.max_nesting_depth));
    lines.push(format!("- Total Statements: {}", func.statement_count));

    if func.magic_numbers.is_empty() {
        lines.push("- Magic Numbers: None".to_string());
    } else {
        let nums: Vec<&str> = func.magic_numbers.iter().map(String::as_str).collect();
        lines.push(format!("- Magic Numbers: {}", nums.join(", ")));
    }

    let mut recs: Vec<&str> = Vec::new();
    if func.max_nesting_depth >= DEPTH_ADVISORY {
        recs.push("High nesting. Consider splitting the logic.");
    }
    if func.loop_count >= LOOP_ADVISORY {
        recs.push("Loop-heavy. May indicate repeated patterns.");
    }
    if func.conditional_count >= CONDITIONAL_ADVISORY {
        recs.push("Many conditionals. May hide complex behavior.");
    }
    if func.statement_count >= STATEMENT_ADVISORY {
        recs.push("Function is long. Consider breaking it into helpers.");
    }
    if !recs.is_empty() {
        lines.push("\n### Recommendations".to_string());
        for rec in recs {
            lines.push(format!("- {rec}"));
        }
    }
    lines.push(String::new());
}

fn push_issue_section(lines: &mut Vec<String>, header: &str, issues: &[String], empty_line: &str) {
    lines.push(header.to_string());
    if issues.is_empty() {
        lines.push(empty_line.to_string());
    } else {
        for issue in issues {
            lines.push(format!("- {issue}"));
        }
    }
    lines.push(String::new());
}

fn push_duplicate_section(lines: &mut Vec<String>, source: &str) {
    lines.push("## Duplicate Logic".to_string());
    let groups = analysis::analyze_duplicates(source);
    if groups.is_empty() {
        lines.push("No duplicate logic detected.".to_string());
    } else {
        for (digest, entries) in &groups {
            let mut names: Vec<&str> = entries.iter().map(|(func, _)| func.as_str()).collect();
            names.sort_unstable();
            names.dedup();
            let prefix: String = digest.chars().take(6).collect();
            lines.push(format!(
                "- Duplicate block (hash `{prefix}`) found in functions: {}",
                names.join(", ")
            ));
        }
    }
    lines.push(String::new());
}

fn push_drift_section(lines: &mut Vec<String>, source: &str) {
    lines.push("## Docstring Drift".to_string());
    let findings = analysis::analyze_comment_drift(source);
    if findings.is_empty() {
        lines.push("No docstring drift detected.".to_string());
    } else {
        for (func, message) in &findings {
            let summary = message.replace('\n', "; ");
            lines.push(format!("- `{func}`: {summary}"));
        }
    }
    lines.push(String::new());
}
