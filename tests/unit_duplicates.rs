// tests/unit_duplicates.rs
use vibelint_core::analysis::analyze_duplicates;

const TWIN_FUNCTIONS: &str = "\
def first(values):
    total = 0
    count = 0
    result = total + count
    return result

def second(numbers):
    amount = 0
    tally = 0
    outcome = amount + tally
    return outcome
";

#[test]
fn renamed_blocks_share_a_digest() {
    let groups = analyze_duplicates(TWIN_FUNCTIONS);
    assert!(!groups.is_empty());
    let spanning = groups.values().any(|entries| {
        let mut names: Vec<&str> = entries.iter().map(|(f, _)| f.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names == ["first", "second"]
    });
    assert!(spanning, "expected a duplicate group spanning both functions");
}

#[test]
fn every_group_has_at_least_two_entries() {
    let groups = analyze_duplicates(TWIN_FUNCTIONS);
    assert!(groups.values().all(|entries| entries.len() >= 2));
}

#[test]
fn group_entries_keep_raw_text() {
    let groups = analyze_duplicates(TWIN_FUNCTIONS);
    let has_raw = groups
        .values()
        .flatten()
        .any(|(_, text)| text.contains("total = 0"));
    assert!(has_raw, "raw window text should preserve original names");
}

#[test]
fn overlapping_windows_within_one_function_are_recorded() {
    let code = "def f():\n    a = 1\n    b = a + 1\n    c = 1\n    d = c + 1\n";
    let groups = analyze_duplicates(code);
    let same_function = groups.values().any(|entries| {
        entries.len() == 2 && entries.iter().all(|(func, _)| func == "f")
    });
    assert!(same_function, "expected a repeated window inside one function");
}

#[test]
fn unique_logic_produces_no_groups() {
    let code = "def f():\n    a = 1\n    return a\n\ndef g():\n    for i in range(3):\n        print(i)\n    return None\n";
    assert!(analyze_duplicates(code).is_empty());
}

#[test]
fn analyzer_is_deterministic() {
    assert_eq!(
        analyze_duplicates(TWIN_FUNCTIONS),
        analyze_duplicates(TWIN_FUNCTIONS)
    );
}

#[test]
fn malformed_source_yields_empty_map() {
    assert!(analyze_duplicates("def broken(:\n").is_empty());
}
