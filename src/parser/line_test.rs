use super::*;

#[test]
fn classify_by_prefix() {
    assert_eq!(classify("[hugolib] Site: god"), LineKind::Header);
    assert_eq!(classify("files a b 1 c 2 d 0.5"), LineKind::Data);
    assert_eq!(classify(""), LineKind::Other);
    assert_eq!(classify("  [indented] X: y"), LineKind::Other);
    assert_eq!(classify("total 3 structs"), LineKind::Other);
}

#[test]
fn classify_data_prefix_is_literal() {
    // Only the prefix matters, matching the report writer.
    assert_eq!(classify("filesystem 1 2"), LineKind::Data);
    assert_eq!(classify(" files a b 1"), LineKind::Other);
}

#[test]
fn header_name_after_bracket() {
    let name = header_name("[hugolib] Site: 0.20 0.25", 1).unwrap();
    assert_eq!(name, "Site");
}

#[test]
fn header_name_stops_at_first_colon_after_bracket() {
    let name = header_name("[tpl] Namespace: a: b", 1).unwrap();
    assert_eq!(name, "Namespace");
}

#[test]
fn header_name_inside_brackets() {
    let name = header_name("[ClassA: some text]", 1).unwrap();
    assert_eq!(name, "ClassA");
}

#[test]
fn header_name_prefers_text_after_bracket() {
    let name = header_name("[pkg: x] Name: rest", 1).unwrap();
    assert_eq!(name, "Name");
}

#[test]
fn header_name_keeps_trailing_whitespace() {
    let name = header_name("[p]   Spaced  : x", 1).unwrap();
    assert_eq!(name, "Spaced  ");
}

#[test]
fn header_name_empty_identifier() {
    let name = header_name("[p]: x", 1).unwrap();
    assert_eq!(name, "");
}

#[test]
fn header_without_colon_fails() {
    let err = header_name("[BadClass no colon here]", 7).unwrap_err();
    match err {
        ReportError::Header { line, text } => {
            assert_eq!(line, 7);
            assert_eq!(text, "[BadClass no colon here]");
        }
        other => panic!("expected header error, got {other:?}"),
    }
}

#[test]
fn parse_snapshot_fixed_positions() {
    let s = parse_snapshot("files a b 52 c 8 d 0.25", 1).unwrap();
    assert_eq!(s.wmc, 52);
    assert_eq!(s.atfd, 8);
    assert!((s.tcc - 0.25).abs() < f64::EPSILON);
}

#[test]
fn parse_snapshot_counts_positions_after_keyword() {
    let s = parse_snapshot("files x y 7 z 8 w 0.5", 1).unwrap();
    assert_eq!((s.wmc, s.atfd), (7, 8));
    assert!((s.tcc - 0.5).abs() < f64::EPSILON);
}

#[test]
fn parse_snapshot_keyword_is_not_a_field() {
    // Seven tokens including `files` leave only six fields.
    let err = parse_snapshot("files 1 2 3 4 5 6", 3).unwrap_err();
    assert!(matches!(
        err,
        ReportError::MissingField {
            line: 3,
            index: TCC_FIELD
        }
    ));
}

#[test]
fn parse_snapshot_ignores_extra_tokens_and_spacing() {
    let s = parse_snapshot("files\tx  y 3 z -1 w 1e-1 trailing junk", 1).unwrap();
    assert_eq!(s.wmc, 3);
    assert_eq!(s.atfd, -1);
    assert!((s.tcc - 0.1).abs() < 1e-12);
}

#[test]
fn parse_snapshot_integer_tcc_is_accepted() {
    let s = parse_snapshot("files a b 1 c 2 d 7", 1).unwrap();
    assert!((s.tcc - 7.0).abs() < f64::EPSILON);
}

#[test]
fn parse_snapshot_too_few_tokens() {
    let err = parse_snapshot("files a b 1 c 2", 4).unwrap_err();
    match err {
        ReportError::MissingField { line, index } => {
            assert_eq!(line, 4);
            assert_eq!(index, TCC_FIELD);
        }
        other => panic!("expected missing field, got {other:?}"),
    }
}

#[test]
fn parse_snapshot_missing_first_field() {
    let err = parse_snapshot("files a", 2).unwrap_err();
    assert!(matches!(
        err,
        ReportError::MissingField {
            index: WMC_FIELD,
            ..
        }
    ));
}

#[test]
fn parse_snapshot_float_in_integer_field() {
    let err = parse_snapshot("files a b 1.5 c 2 d 0.1", 9).unwrap_err();
    match err {
        ReportError::InvalidNumber { line, index, token } => {
            assert_eq!(line, 9);
            assert_eq!(index, WMC_FIELD);
            assert_eq!(token, "1.5");
        }
        other => panic!("expected invalid number, got {other:?}"),
    }
}

#[test]
fn parse_snapshot_non_numeric_tcc() {
    let err = parse_snapshot("files a b 1 c 2 d --", 1).unwrap_err();
    assert!(matches!(
        err,
        ReportError::InvalidNumber {
            index: TCC_FIELD,
            ..
        }
    ));
}
