use zxbasic::lang::{auto_renumber, renumber, ErrorCode};

#[test]
fn test_renumber() {
    let text = "30 GO TO 10\n10 PRINT \"GO TO 30\"\n20 GO SUB 30";
    assert_eq!(
        renumber(text, 100, 10).unwrap(),
        "100 PRINT \"GO TO 30\"\n110 GO SUB 120\n120 GO TO 100"
    );
}

#[test]
fn test_renumber_keeps_other_numbers() {
    let text = "5 REM RUN 5\n6 RESTORE 5: PRINT 5: RUN 6";
    assert_eq!(
        renumber(text, 10, 5).unwrap(),
        "10 REM RUN 5\n15 RESTORE 10: PRINT 5: RUN 15"
    );
}

#[test]
fn test_renumber_drops_unnumbered_lines() {
    assert_eq!(renumber("PRINT 1\n7 CLS", 10, 10).unwrap(), "10 CLS");
}

#[test]
fn test_renumber_errors() {
    assert_eq!(
        renumber("1 CLS", 10, 0).unwrap_err().code(),
        ErrorCode::IntegerOutOfRange
    );
    assert_eq!(
        renumber("1 CLS\n2 CLS", 9999, 1).unwrap_err().code(),
        ErrorCode::NumberTooBig
    );
}

#[test]
fn test_auto_renumber() {
    let text = "10 CLS\n20 GO TO 30\n15 PRINT 1\n30 STOP";
    assert_eq!(
        auto_renumber(text),
        "10 CLS\n20 GO TO 40\n30 PRINT 1\n40 STOP"
    );
}

#[test]
fn test_auto_renumber_in_order() {
    let text = "10 CLS\nREM not a line\n20 STOP";
    assert_eq!(auto_renumber(text), text);
}
