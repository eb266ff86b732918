//! Sanitizer properties over whole files.

use rstest::rstest;
use veriscan::syntax::sanitize;

use crate::helpers::source_fixtures::*;

#[rstest]
#[case("")]
#[case("module m; endmodule")]
#[case("// only a comment\n")]
#[case("/* unterminated\n block")]
#[case("\"unterminated string\n")]
#[case("wire a; // trailing é comment ü\r\nwire b;\r\n")]
#[case("(* keep = \"true\" *) reg r;\nalways @(*) r = 1;\n")]
#[case("assign s = \"esc \\\" quote\"; /* ∑ */ wire w;\n")]
#[case(SHARED_CLOCK)]
#[case(CONDITIONAL_TOP)]
fn test_length_and_lines_preserved(#[case] source: &str) {
    let clean = sanitize(source);
    assert_eq!(clean.len(), source.len());
    assert_eq!(clean.lines().count(), source.lines().count());
    let newlines = |s: &str| -> Vec<usize> {
        s.bytes()
            .enumerate()
            .filter(|(_, b)| *b == b'\n')
            .map(|(i, _)| i)
            .collect()
    };
    assert_eq!(newlines(&clean), newlines(source));
}

#[rstest]
#[case(CHAIN)]
#[case(TOP_WITH_ALU)]
#[case(SIMPLE_MODULE)]
#[case("always @(*) begin\n  x = a * b;\nend\n")]
fn test_clean_source_is_unchanged(#[case] source: &str) {
    assert_eq!(sanitize(source), source);
}

#[test]
fn test_removed_regions_become_spaces() {
    let source = "a /* b */ c // d\n\"e\" (* f *) g";
    let clean = sanitize(source);
    assert_eq!(clean, "a         c     \n            g");
}
