// tests/unit_report.rs
use vibelint_core::report::generate_report;

#[test]
fn report_has_fixed_section_order() {
    let code = "def f():\n    return 1\n";
    let report = generate_report(code, "sample.py");
    assert!(report.starts_with("# Quality Report for `sample.py`"));
    let naming = report.find("## Naming Issues").unwrap();
    let dead = report.find("## Dead Code Issues").unwrap();
    let dupes = report.find("## Duplicate Logic").unwrap();
    let drift = report.find("## Docstring Drift").unwrap();
    assert!(naming < dead && dead < dupes && dupes < drift);
}

#[test]
fn clean_file_renders_none_detected_lines() {
    let code = "def add(left, right):\n    \"\"\"left: a\n    right: b\n    Returns sum.\"\"\"\n    return left + right\n";
    let report = generate_report(code, "clean.py");
    assert!(report.contains("No naming issues detected."));
    assert!(report.contains("No dead code detected."));
    assert!(report.contains("No duplicate logic detected."));
    assert!(report.contains("No docstring drift detected."));
}

#[test]
fn metrics_and_recommendations_render() {
    let code = "def busy(flag):\n    if flag:\n        if flag:\n            if flag:\n                for i in range(5):\n                    print(i)\n";
    let report = generate_report(code, "busy.py");
    assert!(report.contains("## Function: `busy`"));
    assert!(report.contains("- Max Nesting Depth: 5"));
    assert!(report.contains("- Magic Numbers: 5"));
    assert!(report.contains("### Recommendations"));
    assert!(report.contains("High nesting."));
}

#[test]
fn duplicate_groups_render_with_hash_prefix() {
    let code = "def first():\n    a = 0\n    b = a + 2\n    return b\n\ndef second():\n    c = 0\n    d = c + 2\n    return d\n";
    let report = generate_report(code, "dupes.py");
    assert!(report.contains("Duplicate block (hash `"));
    assert!(report.contains("found in functions: first, second"));
}

#[test]
fn unparseable_input_yields_placeholder_report() {
    let report = generate_report("def broken(:\n", "bad.py");
    assert_eq!(report, "# Report Unavailable: Parsing Failed");
}
