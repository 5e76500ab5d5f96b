use zxbasic::lang::tokenize;
use zxbasic::mach::sysvar::{self, read_word, write_word};
use zxbasic::mach::{decode_variables, read_variables, write_program, Memory, Ram, Value};

#[test]
fn test_single_number() {
    let vars = decode_variables(&[0x61, 0x00, 0x00, 0x05, 0x00, 0x00, 0x80]);
    assert_eq!(vars.len(), 1);
    assert_eq!(vars[0].name, "a");
    assert_eq!(vars[0].value.kind(), "number");
    assert_eq!(vars[0].value, Value::Number(5.0));
    assert_eq!(vars[0].to_string(), "a = 5");
}

#[test]
fn test_stops_at_end_marker() {
    let vars = decode_variables(&[0x61, 0, 0, 1, 0, 0, 0x80, 0x62, 0, 0, 2, 0, 0]);
    assert_eq!(vars.len(), 1);
}

#[test]
fn test_truncated() {
    assert!(decode_variables(&[0x61, 0x00, 0x00, 0x05]).is_empty());
    assert!(decode_variables(&[]).is_empty());
    let vars = decode_variables(&[0x61, 0, 0, 1, 0, 0, 0x62, 0, 0]);
    assert_eq!(vars.len(), 1);
    let vars = decode_variables(&[0x61, 0, 0, 1, 0, 0, 0xE9, 0, 0, 1, 0, 0]);
    assert_eq!(vars.len(), 1);
}

#[test]
fn test_every_truncation_is_safe() {
    let mut bytes = vec![0x61, 0, 0, 1, 0, 0];
    bytes.extend_from_slice(&[0x42, 3, 0, b'a', b'b', b'c']);
    bytes.extend_from_slice(&[0xA3, b'a', b't' | 0x80, 0, 0, 7, 0, 0]);
    bytes.extend_from_slice(&[0x84, 8, 0, 1, 1, 0, 0, 0, 9, 0, 0]);
    bytes.extend_from_slice(&[0xC5, 6, 0, 1, 3, 0, b'x', b' ', b' ']);
    bytes.push(0x80);
    assert_eq!(decode_variables(&bytes).len(), 5);
    for len in 0..bytes.len() {
        assert!(decode_variables(&bytes[..len]).len() <= 5);
    }
}

#[test]
fn test_read_from_memory() {
    let mut ram = Ram::new();
    write_program(&mut ram, &tokenize("10 DEF FN f(x)=x*x\n20 PRINT FN f(2)")).unwrap();
    let vars = read_word(&ram, sysvar::VARS);
    ram.write_bytes(vars, &[0x61, 0x00, 0x00, 0x05, 0x00, 0x00, 0x80]);
    write_word(&mut ram, sysvar::E_LINE, vars + 7);

    let found = read_variables(&ram);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].to_string(), "a = 5");
    assert_eq!(found[1].name, "FN f(x)");
    assert_eq!(found[1].to_string(), "FN f(x) = x*x (line 10)");
}

#[test]
fn test_empty_memory() {
    assert!(read_variables(&Ram::new()).is_empty());
}
