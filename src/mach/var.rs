//! ## Variables area
//!
//! Records follow each other from `VARS` up to an `0x80` end marker. The
//! top three bits of the lead byte select the record layout and the low
//! five bits hold the first letter of the name.

use super::sysvar::END_OF_VARIABLES;
use crate::lang::line::{bodies, detokenize_line};
use crate::lang::token::{DEF_FN, END_OF_LINE, NUMBER_MARKER};
use crate::lang::{decode_float, format_number, LineNumber};
use byteorder::{ByteOrder, LittleEndian};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    String(String),
    NumArray {
        dimensions: Vec<u16>,
        elements: Vec<f64>,
    },
    StrArray {
        dimensions: Vec<u16>,
        str_len: u16,
        elements: Vec<String>,
    },
    For(ForLoop),
    DefFn {
        params: String,
        line: LineNumber,
        expression: String,
    },
}

/// Control variable of a `FOR` loop. `line` and `statement` locate the
/// statement after the `FOR`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    pub value: f64,
    pub limit: f64,
    pub step: f64,
    pub line: u16,
    pub statement: u8,
}

impl Value {
    pub fn kind(&self) -> &'static str {
        use Value::*;
        match self {
            Number(_) => "number",
            String(_) => "string",
            NumArray { .. } => "numArray",
            StrArray { .. } => "strArray",
            For(_) => "for",
            DefFn { .. } => "defFn",
        }
    }
}

fn join<T, F: Fn(&T) -> String>(items: &[T], f: F) -> String {
    items.iter().map(f).collect::<Vec<_>>().join(",")
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Value::*;
        match &self.value {
            Number(n) => write!(f, "{} = {}", self.name, format_number(*n)),
            String(s) => write!(f, "{} = \"{}\"", self.name, s),
            NumArray {
                dimensions,
                elements,
            } => write!(
                f,
                "{} ({}) = [{}]",
                self.name,
                join(dimensions, u16::to_string),
                join(elements, |n| format_number(*n))
            ),
            StrArray {
                dimensions,
                str_len,
                elements,
            } => write!(
                f,
                "{} ({};{}) = [{}]",
                self.name,
                join(dimensions, u16::to_string),
                str_len,
                join(elements, |s| format!("\"{}\"", s))
            ),
            For(l) => write!(
                f,
                "{} = {} TO {} STEP {} (line {}:{})",
                self.name,
                format_number(l.value),
                format_number(l.limit),
                format_number(l.step),
                l.line,
                l.statement
            ),
            DefFn {
                line, expression, ..
            } => write!(f, "{} = {} (line {})", self.name, expression, line),
        }
    }
}

/// Decodes the variables area. Decoding stops at the end marker, at a
/// record it does not understand, or at a record that runs past the end
/// of `bytes`; everything before that point is returned.
pub fn decode_variables(bytes: &[u8]) -> Vec<Variable> {
    Heap { bytes, offset: 0 }.collect()
}

struct Heap<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Iterator for Heap<'a> {
    type Item = Variable;

    fn next(&mut self) -> Option<Variable> {
        let lead = *self.take(1)?.first()?;
        if lead == END_OF_VARIABLES {
            return None;
        }
        let letter = lead & 0x1F;
        if !(1..=26).contains(&letter) {
            return None;
        }
        let letter = (letter + 0x60) as char;
        let variable = match lead >> 5 {
            0b011 => Variable {
                name: letter.to_string(),
                value: Value::Number(self.number()?),
            },
            0b010 => {
                let len = self.word()? as usize;
                Variable {
                    name: format!("{}$", letter),
                    value: Value::String(text(self.take(len)?)),
                }
            }
            0b101 => {
                let mut name = letter.to_string();
                loop {
                    let b = *self.take(1)?.first()?;
                    name.push((b & 0x7F) as char);
                    if b & 0x80 != 0 {
                        break;
                    }
                }
                Variable {
                    name,
                    value: Value::Number(self.number()?),
                }
            }
            0b100 => {
                let (dimensions, payload) = self.array()?;
                let count = element_count(&dimensions);
                let elements = payload
                    .chunks_exact(5)
                    .take(count)
                    .filter_map(|chunk| decode_float(chunk, 0))
                    .collect();
                Variable {
                    name: format!("{}()", letter),
                    value: Value::NumArray {
                        dimensions,
                        elements,
                    },
                }
            }
            0b110 => {
                let (mut dimensions, payload) = self.array()?;
                let str_len = dimensions.pop().unwrap_or(0);
                let elements = if str_len == 0 {
                    vec![]
                } else {
                    payload
                        .chunks_exact(str_len as usize)
                        .take(element_count(&dimensions))
                        .map(|chunk| text(chunk).trim_end_matches(' ').to_string())
                        .collect()
                };
                Variable {
                    name: format!("{}$()", letter),
                    value: Value::StrArray {
                        dimensions,
                        str_len,
                        elements,
                    },
                }
            }
            0b111 => {
                let record = self.take(18)?;
                Variable {
                    name: letter.to_string(),
                    value: Value::For(ForLoop {
                        value: decode_float(record, 0)?,
                        limit: decode_float(record, 5)?,
                        step: decode_float(record, 10)?,
                        line: LittleEndian::read_u16(&record[15..17]),
                        statement: record[17],
                    }),
                }
            }
            _ => return None,
        };
        Some(variable)
    }
}

impl<'a> Heap<'a> {
    /// Consumes `len` bytes, or ends the heap if fewer remain.
    fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        let end = self.offset.checked_add(len)?;
        match self.bytes.get(self.offset..end) {
            Some(slice) => {
                self.offset = end;
                Some(slice)
            }
            None => {
                self.offset = self.bytes.len();
                None
            }
        }
    }

    fn word(&mut self) -> Option<u16> {
        self.take(2).map(LittleEndian::read_u16)
    }

    fn number(&mut self) -> Option<f64> {
        decode_float(self.take(5)?, 0)
    }

    /// Dimensions and element bytes of an array record.
    fn array(&mut self) -> Option<(Vec<u16>, &'a [u8])> {
        let len = self.word()? as usize;
        let body = self.take(len)?;
        let (&count, rest) = body.split_first()?;
        let dims_len = count as usize * 2;
        if rest.len() < dims_len {
            return None;
        }
        let dimensions = rest[..dims_len]
            .chunks_exact(2)
            .map(LittleEndian::read_u16)
            .collect();
        Some((dimensions, &rest[dims_len..]))
    }
}

fn element_count(dimensions: &[u16]) -> usize {
    dimensions
        .iter()
        .fold(1usize, |n, &d| n.saturating_mul(d as usize))
}

fn text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Finds the `DEF FN` definitions in a tokenized program. The ROM keeps
/// these inline in the program rather than in the variables area. Only
/// the first definition on each line is reported.
pub fn scan_def_fns(program: &[u8]) -> Vec<Variable> {
    bodies(program)
        .filter_map(|(number, body)| def_fn(number, body))
        .collect()
}

fn def_fn(number: LineNumber, body: &[u8]) -> Option<Variable> {
    let mut p = 0;
    let mut in_string = false;
    loop {
        match *body.get(p)? {
            END_OF_LINE => return None,
            b'"' => in_string = !in_string,
            _ if in_string => {}
            NUMBER_MARKER => p += 5,
            DEF_FN => break,
            _ => {}
        }
        p += 1;
    }
    p += 1;

    let skip_spaces = |p: &mut usize| {
        while body.get(*p) == Some(&b' ') {
            *p += 1;
        }
    };

    skip_spaces(&mut p);
    let letter = *body.get(p)?;
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    let mut name = format!("FN {}", letter as char);
    p += 1;
    if body.get(p) == Some(&b'$') {
        name.push('$');
        p += 1;
    }
    skip_spaces(&mut p);
    if body.get(p) != Some(&b'(') {
        return None;
    }
    p += 1;

    let mut params = String::new();
    while let Some(&b) = body.get(p) {
        match b {
            b')' | END_OF_LINE => break,
            NUMBER_MARKER => p += 6,
            _ if b.is_ascii_alphabetic() => {
                if !params.is_empty() {
                    params.push(',');
                }
                params.push(b as char);
                p += 1;
                if body.get(p) == Some(&b'$') {
                    params.push('$');
                    p += 1;
                }
            }
            _ => p += 1,
        }
    }
    if body.get(p) == Some(&b')') {
        p += 1;
    }
    skip_spaces(&mut p);
    if body.get(p) == Some(&b'=') {
        p += 1;
    }

    let start = p.min(body.len());
    let mut end = start;
    let mut in_string = false;
    while let Some(&b) = body.get(end) {
        match b {
            b'"' => in_string = !in_string,
            _ if in_string => {}
            END_OF_LINE | b':' => break,
            NUMBER_MARKER => end += 5,
            _ => {}
        }
        end += 1;
    }
    let expression = detokenize_line(&body[start..end.min(body.len())]);

    name.push_str(&format!("({})", params));
    Some(Variable {
        name,
        value: Value::DefFn {
            params,
            line: number,
            expression,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{encode_number, tokenize};

    fn number(lead: u8, value: f64) -> Vec<u8> {
        let mut v = vec![lead];
        v.extend_from_slice(&encode_number(value));
        v
    }

    #[test]
    fn test_number_and_string() {
        let mut bytes = number(0x61, 5.0);
        bytes.extend_from_slice(&[0x42, 0x02, 0x00, b'h', b'i', 0x80]);
        let vars = decode_variables(&bytes);
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].name, "a");
        assert_eq!(vars[0].value, Value::Number(5.0));
        assert_eq!(vars[1].name, "b$");
        assert_eq!(vars[1].value, Value::String("hi".into()));
        assert_eq!(vars[1].value.kind(), "string");
    }

    #[test]
    fn test_long_name() {
        let mut bytes = vec![0xA3, b'o', b'u', b'n', b't' | 0x80];
        bytes.extend_from_slice(&encode_number(-3.0));
        let vars = decode_variables(&bytes);
        assert_eq!(vars[0].name, "count");
        assert_eq!(vars[0].value, Value::Number(-3.0));
    }

    #[test]
    fn test_numeric_array() {
        // DIM c(2,2)
        let mut payload = vec![2, 2, 0, 2, 0];
        for n in 1..=4 {
            payload.extend_from_slice(&encode_number(n as f64));
        }
        let mut bytes = vec![0x83, payload.len() as u8, 0];
        bytes.extend(payload);
        bytes.push(0x80);
        let vars = decode_variables(&bytes);
        assert_eq!(vars.len(), 1);
        assert_eq!(vars[0].name, "c()");
        assert_eq!(
            vars[0].value,
            Value::NumArray {
                dimensions: vec![2, 2],
                elements: vec![1.0, 2.0, 3.0, 4.0],
            }
        );
    }

    #[test]
    fn test_string_array() {
        // DIM s$(2,3)
        let payload = [2, 2, 0, 3, 0, b'a', b'b', b' ', b' ', b' ', b' '];
        let mut bytes = vec![0xD3, payload.len() as u8, 0];
        bytes.extend_from_slice(&payload);
        let vars = decode_variables(&bytes);
        assert_eq!(vars[0].name, "s$()");
        assert_eq!(
            vars[0].value,
            Value::StrArray {
                dimensions: vec![2],
                str_len: 3,
                elements: vec!["ab".into(), "".into()],
            }
        );
    }

    #[test]
    fn test_for_loop() {
        let mut bytes = vec![0xE9];
        bytes.extend_from_slice(&encode_number(1.0));
        bytes.extend_from_slice(&encode_number(10.0));
        bytes.extend_from_slice(&encode_number(2.0));
        bytes.extend_from_slice(&[20, 0, 2, 0x80]);
        let vars = decode_variables(&bytes);
        assert_eq!(vars[0].name, "i");
        assert_eq!(
            vars[0].value,
            Value::For(ForLoop {
                value: 1.0,
                limit: 10.0,
                step: 2.0,
                line: 20,
                statement: 2,
            })
        );
        assert_eq!(vars[0].to_string(), "i = 1 TO 10 STEP 2 (line 20:2)");
    }

    #[test]
    fn test_stops_on_bad_records() {
        assert!(decode_variables(&[0x61, 0x00, 0x00]).is_empty());
        assert!(decode_variables(&[0x60, 0, 0, 1, 0, 0]).is_empty());
        assert!(decode_variables(&[0x42, 0x09, 0x00, b'x']).is_empty());
        assert!(decode_variables(&[0x83, 0xFF, 0xFF, 1]).is_empty());
        let mut bytes = number(0x61, 1.0);
        bytes.extend_from_slice(&[0xA2, b'x']);
        assert_eq!(decode_variables(&bytes).len(), 1);
    }

    #[test]
    fn test_def_fn() {
        let program = tokenize("10 PRINT \"DEF FN\"\n20 DEF FN f(x,y)=x*y: PRINT 1\n30 DEF FN s$(a$)=a$+\"!\"");
        let fns = scan_def_fns(&program);
        assert_eq!(fns.len(), 2);
        assert_eq!(fns[0].name, "FN f(x,y)");
        assert_eq!(
            fns[0].value,
            Value::DefFn {
                params: "x,y".into(),
                line: 20,
                expression: "x*y".into(),
            }
        );
        assert_eq!(fns[1].name, "FN s$(a$)");
        assert_eq!(fns[0].value.kind(), "defFn");
    }
}
