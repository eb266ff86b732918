//! Preprocessor behavior on realistic inputs.

use rstest::rstest;
use veriscan::syntax::{DefineSet, preprocess, sanitize};

use crate::helpers::source_fixtures::CONDITIONAL_TOP;

fn surviving_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn defines(names: &[&str]) -> DefineSet {
    names.iter().copied().collect()
}

#[rstest]
#[case(&[], vec!["B"])]
#[case(&["FOO"], vec!["A"])]
fn test_ifdef_else(#[case] defined: &[&str], #[case] expected: Vec<&str>) {
    let source = "`ifdef FOO\nA\n`else\nB\n`endif";
    let out = preprocess(source, &mut defines(defined));
    assert_eq!(out.len(), source.len());
    assert_eq!(surviving_lines(&out), expected);
}

#[rstest]
#[case(&[])]
#[case(&["INNER"])]
#[case(&["INNER", "OTHER"])]
fn test_nested_inside_inactive_never_activates(#[case] defined: &[&str]) {
    let source = "`ifdef OUTER\n`ifdef INNER\nX\n`else\nY\n`endif\n`endif\nZ\n";
    let out = preprocess(source, &mut defines(defined));
    assert_eq!(surviving_lines(&out), vec!["Z"]);
}

#[test]
fn test_defines_flow_between_calls() {
    let mut set = DefineSet::new();
    preprocess("`define USE_FAST\n", &mut set);
    let source = sanitize(CONDITIONAL_TOP);
    let out = preprocess(&source, &mut set);
    let lines = surviving_lines(&out);
    assert!(lines.contains(&"fast_core u_core (.clk(clk));"));
    assert!(!lines.iter().any(|l| l.contains("small_core")));
}

#[test]
fn test_directives_in_comments_are_ignored() {
    let source = "// `define HIDDEN\n`ifdef HIDDEN\nX\n`endif\n";
    let mut set = DefineSet::new();
    let out = preprocess(&sanitize(source), &mut set);
    assert!(surviving_lines(&out).is_empty());
    assert!(!set.contains("HIDDEN"));
}
