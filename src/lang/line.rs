use super::token::{self, END_OF_LINE, NUMBER_MARKER};
use super::{LineNumber, MAX_LINE_NUMBER};
use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// A program line as text, without the line number.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    pub number: LineNumber,
    pub text: String,
}

impl Line {
    pub fn new(number: LineNumber, text: &str) -> Line {
        Line {
            number,
            text: text.to_string(),
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.number)
        } else {
            write!(f, "{} {}", self.number, self.text)
        }
    }
}

/// Expands tokenized program bytes into lines, in the order they appear.
/// Decoding stops quietly at anything that does not look like a line.
pub fn detokenize(bytes: &[u8]) -> Vec<Line> {
    bodies(bytes)
        .map(|(number, body)| Line {
            number,
            text: detokenize_line(body),
        })
        .collect()
}

/// Iterates the `(line number, body)` pairs of a tokenized program.
pub fn bodies(bytes: &[u8]) -> Bodies<'_> {
    Bodies { bytes, offset: 0 }
}

pub struct Bodies<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Iterator for Bodies<'a> {
    type Item = (LineNumber, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let header = self.bytes.get(self.offset..self.offset + 4)?;
        let number = BigEndian::read_u16(&header[0..2]);
        let length = LittleEndian::read_u16(&header[2..4]) as usize;
        let start = self.offset + 4;
        let end = start + length;
        if number > MAX_LINE_NUMBER || length == 0 || end > self.bytes.len() {
            self.offset = self.bytes.len();
            return None;
        }
        self.offset = end;
        Some((number, &self.bytes[start..end]))
    }
}

/// Expands one line body. Number markers, colour codes and bytes that
/// have no printable form are dropped.
pub fn detokenize_line(body: &[u8]) -> String {
    let mut text = String::new();
    let mut i = 0;
    while let Some(&byte) = body.get(i) {
        match byte {
            END_OF_LINE => break,
            NUMBER_MARKER => i += 6,
            0x10..=0x15 => i += 2,
            0x16..=0x17 => i += 3,
            token::FIRST_TOKEN..=0xFF => {
                if let Some(keyword) = token::keyword(byte) {
                    if !text.is_empty() && !text.ends_with(' ') {
                        text.push(' ');
                    }
                    text.push_str(keyword);
                    if token::is_spaced(keyword) {
                        text.push(' ');
                    }
                }
                i += 1;
            }
            0x20..=0x7F => {
                text.push(byte as char);
                i += 1;
            }
            _ => i += 1,
        }
    }
    collapse_spaces(&text)
}

fn collapse_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.trim_matches(' ').chars() {
        if ch == ' ' && out.ends_with(' ') {
            continue;
        }
        out.push(ch);
    }
    out
}
