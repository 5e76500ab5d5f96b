//! ## Renumbering
//!
//! Line numbers after `GO TO`, `GO SUB`, `RESTORE` and `RUN` follow
//! their lines. Numbers inside strings and after `REM` are left alone.

use super::lex::{lex, line_number, Lexeme};
use super::token;
use super::{Error, LineNumber, MAX_LINE_NUMBER};
use crate::error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// Renumbers every numbered line from `start` in steps of `step`.
/// Lines without a number are dropped.
pub fn renumber(text: &str, start: LineNumber, step: LineNumber) -> Result<String> {
    if step == 0 {
        return Err(error!(IntegerOutOfRange; "STEP MUST NOT BE ZERO"));
    }
    let mut lines: Vec<(LineNumber, &str)> = text.lines().filter_map(line_number).collect();
    lines.sort_by_key(|(number, _)| *number);
    let changes = assign(lines.iter().map(|(number, _)| *number), start, step)?;
    let mut next = start;
    let mut out: Vec<String> = vec![];
    for (_, body) in lines {
        out.push(format!("{} {}", next, update_references(body, &changes)));
        next = next.saturating_add(step);
    }
    Ok(out.join("\n"))
}

/// Maps each old line number to its new one. The first occurrence of a
/// duplicated number wins.
pub fn assign<I>(numbers: I, start: LineNumber, step: LineNumber) -> Result<HashMap<LineNumber, LineNumber>>
where
    I: IntoIterator<Item = LineNumber>,
{
    let mut changes: HashMap<LineNumber, LineNumber> = HashMap::default();
    let mut new_num = u32::from(start);
    for number in numbers {
        if new_num > u32::from(MAX_LINE_NUMBER) {
            return Err(error!(NumberTooBig, number; "LINE NUMBERS RUN PAST 9999"));
        }
        changes.entry(number).or_insert(new_num as LineNumber);
        new_num += u32::from(step);
    }
    Ok(changes)
}

/// Resolves an inserted line that collides with the lines after it by
/// moving those lines up in tens. Returns the text unchanged when the
/// numbers are already ascending.
pub fn auto_renumber(text: &str) -> String {
    let mut raw: Vec<String> = text.lines().map(|s| s.to_string()).collect();
    let mut parsed: Vec<(usize, LineNumber, String)> = raw
        .iter()
        .enumerate()
        .filter_map(|(index, s)| line_number(s).map(|(n, body)| (index, n, body.to_string())))
        .collect();

    let conflict = match (1..parsed.len()).find(|&i| parsed[i].1 <= parsed[i - 1].1) {
        Some(conflict) => conflict,
        None => return text.to_string(),
    };

    let mut changes: HashMap<LineNumber, LineNumber> = HashMap::default();
    let mut next_num = u32::from(parsed[conflict - 1].1) + 10;
    for entry in parsed.iter_mut().skip(conflict) {
        if u32::from(entry.1) >= next_num || next_num > u32::from(MAX_LINE_NUMBER) {
            break;
        }
        changes.insert(entry.1, next_num as LineNumber);
        entry.1 = next_num as LineNumber;
        next_num += 10;
    }
    if changes.is_empty() {
        return text.to_string();
    }

    for (index, number, body) in parsed {
        raw[index] = format!("{} {}", number, update_references(&body, &changes));
    }
    raw.join("\n")
}

fn is_line_reference(tok: u8) -> bool {
    matches!(tok, token::GO_TO | token::GO_SUB | token::RESTORE | token::RUN)
}

/// Rewrites the line number literal after each line-referencing keyword.
pub fn update_references(body: &str, changes: &HashMap<LineNumber, LineNumber>) -> String {
    if changes.is_empty() {
        return body.to_string();
    }
    let mut out = String::with_capacity(body.len());
    let mut copied = 0;
    let mut after_reference = false;
    for (column, lexeme) in lex(body) {
        match lexeme {
            Lexeme::Keyword(tok) => after_reference = is_line_reference(tok),
            Lexeme::Byte(b' ') => {}
            Lexeme::Number(value) if after_reference => {
                after_reference = false;
                let old = match as_line_number(value) {
                    Some(old) => old,
                    None => continue,
                };
                if let Some(new) = changes.get(&old) {
                    out.push_str(&body[copied..column.start]);
                    out.push_str(&new.to_string());
                    copied = column.end;
                }
            }
            _ => after_reference = false,
        }
    }
    out.push_str(&body[copied..]);
    out
}

fn as_line_number(value: f64) -> Option<LineNumber> {
    if value.fract() == 0.0 && value >= 0.0 && value <= f64::from(MAX_LINE_NUMBER) {
        Some(value as LineNumber)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_references() {
        let mut changes = HashMap::new();
        changes.insert(10, 100);
        assert_eq!(update_references("GO TO 10", &changes), "GO TO 100");
        assert_eq!(update_references("go sub   10:RUN 10", &changes), "go sub   100:RUN 100");
        assert_eq!(update_references("PRINT 10", &changes), "PRINT 10");
        assert_eq!(update_references("PRINT \"GO TO 10\"", &changes), "PRINT \"GO TO 10\"");
        assert_eq!(update_references("REM GO TO 10", &changes), "REM GO TO 10");
        assert_eq!(update_references("GO TO 20", &changes), "GO TO 20");
    }

    #[test]
    fn test_assign_overflow() {
        assert!(assign(vec![1, 2, 3], 9990, 5).is_err());
        assert_eq!(assign(vec![1, 2], 9990, 5).unwrap().get(&2), Some(&9995));
    }
}
