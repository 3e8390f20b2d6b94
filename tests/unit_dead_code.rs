// tests/unit_dead_code.rs
use vibelint_core::analysis::analyze_dead_code;

#[test]
fn code_after_return_is_flagged_once() {
    let code = "def f():\n    return 1\n    print(2)\n    print(3)\n";
    let issues = analyze_dead_code(code);
    let count = issues
        .iter()
        .filter(|i| i.contains("Unreachable code"))
        .count();
    assert_eq!(count, 1);
}

#[test]
fn code_after_raise_is_flagged() {
    let code = "def f():\n    raise ValueError(\"boom\")\n    print(1)\n";
    let issues = analyze_dead_code(code);
    assert!(issues.iter().any(|i| i.contains("Unreachable code")));
}

#[test]
fn if_false_is_flagged() {
    let issues = analyze_dead_code("def f():\n    if False:\n        print(1)\n");
    assert!(issues.iter().any(|i| i.contains("`if False:`")));
}

#[test]
fn if_zero_is_flagged() {
    let issues = analyze_dead_code("def f():\n    if 0:\n        print(1)\n");
    assert!(issues.iter().any(|i| i.contains("`if 0:`")));
}

#[test]
fn distinct_literal_comparison_is_flagged() {
    let issues = analyze_dead_code("def f():\n    if 1 == 2:\n        print(1)\n");
    assert!(issues.iter().any(|i| i.contains("always-false comparison")));
}

#[test]
fn equal_literal_comparison_is_not_flagged() {
    let issues = analyze_dead_code("def f():\n    if 2 == 2:\n        print(1)\n");
    assert!(!issues.iter().any(|i| i.contains("always-false")));
}

#[test]
fn non_literal_comparison_is_not_flagged() {
    let issues = analyze_dead_code("def f(count):\n    if count == 2:\n        print(count)\n");
    assert!(!issues.iter().any(|i| i.contains("always-false")));
}

#[test]
fn unused_parameter_is_flagged() {
    let code = "def f(used, unused):\n    return used\n";
    let issues = analyze_dead_code(code);
    assert!(issues
        .iter()
        .any(|i| i.contains("`unused`") && i.contains("never used")));
    assert!(!issues
        .iter()
        .any(|i| i.contains("`used`") && i.contains("never used")));
}

#[test]
fn file_scope_usage_suppresses_parameter_warning() {
    // the read sits outside the function entirely; file-scope tracking
    // still counts it
    let code = "print(value)\n\ndef helper(value):\n    pass\n";
    let issues = analyze_dead_code(code);
    assert!(!issues.iter().any(|i| i.contains("never used")));
}

#[test]
fn unused_variable_is_flagged() {
    let code = "def f():\n    total = 1\n    return 2\n";
    let issues = analyze_dead_code(code);
    assert!(issues
        .iter()
        .any(|i| i.contains("`total`") && i.contains("assigned but never used")));
}

#[test]
fn used_variable_is_not_flagged() {
    let code = "def f():\n    total = 1\n    return total\n";
    assert!(analyze_dead_code(code).is_empty());
}

#[test]
fn unused_import_is_flagged() {
    let issues = analyze_dead_code("import os\n");
    assert!(issues
        .iter()
        .any(|i| i.contains("`os`") && i.contains("unused")));
}

#[test]
fn used_import_is_not_flagged() {
    let code = "import os\n\nprint(os.getcwd())\n";
    assert!(analyze_dead_code(code).is_empty());
}

#[test]
fn aliased_import_tracks_the_alias() {
    let issues = analyze_dead_code("import numpy as np\n");
    assert!(issues
        .iter()
        .any(|i| i.contains("`np`") && i.contains("unused")));
}

#[test]
fn from_import_tracks_the_imported_name() {
    let issues = analyze_dead_code("from os import path\n");
    assert!(issues
        .iter()
        .any(|i| i.contains("`path`") && i.contains("unused")));
    assert!(!issues.iter().any(|i| i.contains("`os`")));
}

#[test]
fn analyzer_is_deterministic() {
    let code = "import os\n\ndef f(ghost):\n    if False:\n        return 1\n    total = 1\n";
    assert_eq!(analyze_dead_code(code), analyze_dead_code(code));
}

#[test]
fn malformed_source_yields_no_issues() {
    assert!(analyze_dead_code("def broken(:\n").is_empty());
}
