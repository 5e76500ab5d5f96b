use zxbasic::lang::{encode_number, tokenize, tokenize_line};

#[test]
fn test_line_layout() {
    assert_eq!(
        tokenize("10 PRINT 1"),
        vec![0x00, 0x0A, 0x09, 0x00, 0xF5, b'1', 0x0E, 0x00, 0x00, 0x01, 0x00, 0x00, 0x0D]
    );
    assert_eq!(&tokenize("1000 CLS")[..4], &[0x03, 0xE8, 0x02, 0x00]);
}

#[test]
fn test_format_is_one_token() {
    assert_eq!(
        tokenize("10 FORMAT \"a\""),
        vec![0x00, 0x0A, 0x05, 0x00, 0xD0, b'"', b'a', b'"', 0x0D]
    );
}

#[test]
fn test_rem_is_verbatim() {
    assert_eq!(tokenize_line("REM GO TO 5"), b"\xEAGO TO 5".to_vec());
    assert_eq!(tokenize_line("rem print 1:cls"), b"\xEAprint 1:cls".to_vec());
}

#[test]
fn test_strings_are_verbatim() {
    assert_eq!(tokenize_line("PRINT \"GO TO 10\""), b"\xF5\"GO TO 10\"".to_vec());
}

#[test]
fn test_keyword_needs_word_boundary() {
    assert_eq!(tokenize_line("LET total=0")[..6], [0xF1, b't', b'o', b't', b'a', b'l']);
    assert_eq!(tokenize_line("GO TO 1")[0], 0xEC);
    assert_eq!(tokenize_line("GO SUB 1")[0], 0xED);
    assert_eq!(tokenize_line("gosub")[..], b"gosub"[..]);
}

#[test]
fn test_operators() {
    assert_eq!(
        tokenize_line("IF a<>b THEN CLS"),
        vec![0xFA, b'a', 0xC9, b'b', b' ', 0xCB, 0xFB]
    );
}

#[test]
fn test_lower_case() {
    assert_eq!(tokenize("10 print \"x\""), tokenize("10 PRINT \"x\""));
}

#[test]
fn test_numbers() {
    let mut expected = b"\xF1a1=2.5\x0E".to_vec();
    expected.extend_from_slice(&[0x82, 0x20, 0x00, 0x00, 0x00]);
    assert_eq!(tokenize_line("LET a1=2.5"), expected);

    let mut expected = b"\xF51e3\x0E".to_vec();
    expected.extend_from_slice(&encode_number(1000.0));
    assert_eq!(tokenize_line("PRINT 1e3"), expected);
}

#[test]
fn test_bin() {
    let mut expected = b"\xF5\xC4101\x0E".to_vec();
    expected.extend_from_slice(&encode_number(5.0));
    assert_eq!(tokenize_line("PRINT BIN 101"), expected);
}

#[test]
fn test_def_fn_params() {
    assert_eq!(
        tokenize_line("DEF FN f(x)=x"),
        vec![0xCE, b'f', b'(', b'x', 0x0E, 0, 0, 0, 0, 0, b')', b'=', b'x']
    );
}

#[test]
fn test_lines_without_numbers_are_dropped() {
    assert_eq!(
        tokenize("PRINT 1\n\n   \n10 CLS\r\n"),
        vec![0x00, 0x0A, 0x02, 0x00, 0xFB, 0x0D]
    );
    assert!(tokenize("10000 CLS").is_empty());
}
