use super::*;

#[test]
fn line_stats_default() {
    let stats = LineStats::default();
    assert_eq!(stats, LineStats::new());
    assert_eq!(stats.total, 0);
    assert_eq!(stats.code, 0);
    assert_eq!(stats.comment, 0);
}

#[test]
fn count_empty_source() {
    let stats = count_lines("");

    assert_eq!(stats.total, 1);
    assert_eq!(stats.code, 0);
    assert_eq!(stats.blank(), 1);
}

#[test]
fn count_typescript_with_blank_line() {
    let stats = count_lines("const x = 1;\n\nconsole.log(x);\n");

    assert_eq!(stats.total, 4);
    assert_eq!(stats.code, 2);
    assert_eq!(stats.blank(), 2);
}

#[test]
fn trailing_newline_adds_empty_segment() {
    let stats = count_lines("hello\n");

    assert_eq!(stats.total, 2);
    assert_eq!(stats.code, 1);
}

#[test]
fn no_trailing_newline_keeps_last_segment() {
    let stats = count_lines("a\nb");

    assert_eq!(stats.total, 2);
    assert_eq!(stats.code, 2);
}

#[test]
fn whitespace_only_lines_count_as_code() {
    let stats = count_lines("fn main() {\n    \n\t\n}");

    assert_eq!(stats.total, 4);
    assert_eq!(stats.code, 4);
}

#[test]
fn carriage_return_is_not_stripped() {
    let stats = count_lines("a\r\n\r\nb");

    assert_eq!(stats.total, 3);
    assert_eq!(stats.code, 3);
}

#[test]
fn only_newlines() {
    let stats = count_lines("\n\n\n");

    assert_eq!(stats.total, 4);
    assert_eq!(stats.code, 0);
}

#[test]
fn comments_are_never_counted() {
    let stats = count_lines("// comment\n/* block */\n# hash\n");

    assert_eq!(stats.comment, 0);
    assert_eq!(stats.code, 3);
}

#[test]
fn code_never_exceeds_total() {
    for source in ["", "x", "\n", "x\n\ny", " \n \n", "\r"] {
        let stats = count_lines(source);
        assert!(stats.code <= stats.total, "source: {source:?}");
        assert!(stats.comment <= stats.total, "source: {source:?}");
        assert!(stats.total >= 1, "source: {source:?}");
    }
}

#[test]
fn blank_saturates_for_inconsistent_stats() {
    let stats = LineStats {
        total: 1,
        code: 2,
        comment: 0,
    };

    assert_eq!(stats.blank(), 0);
}
