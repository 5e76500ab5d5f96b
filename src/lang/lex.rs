use super::float::encode_number;
use super::token::{self, END_OF_LINE, NUMBER_MARKER};
use super::{Column, LineNumber, MAX_LINE_NUMBER};
use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Tokenizes a whole program. Lines without a line number are dropped.
pub fn tokenize(text: &str) -> Vec<u8> {
    let mut program = vec![];
    for line in text.lines() {
        let line = line.trim_matches(|c| c == ' ' || c == '\t' || c == '\r');
        if line.is_empty() {
            continue;
        }
        let (number, body) = match line_number(line) {
            Some(split) => split,
            None => continue,
        };
        let body = tokenize_line(body);
        let length = match u16::try_from(body.len() + 1) {
            Ok(length) => length,
            Err(_) => continue,
        };
        let mut header = [0u8; 4];
        BigEndian::write_u16(&mut header[0..2], number);
        LittleEndian::write_u16(&mut header[2..4], length);
        program.extend_from_slice(&header);
        program.extend(body);
        program.push(END_OF_LINE);
    }
    program
}

/// Tokenizes the body of one line, without header or terminator.
pub fn tokenize_line(body: &str) -> Vec<u8> {
    let mut bytes = vec![];
    for (column, lexeme) in lex(body) {
        match lexeme {
            Lexeme::Keyword(tok) => bytes.push(tok),
            Lexeme::Byte(byte) => bytes.push(byte),
            Lexeme::Number(value) => {
                bytes.extend(body[column].bytes());
                bytes.push(NUMBER_MARKER);
                bytes.extend_from_slice(&encode_number(value));
            }
            Lexeme::Param => {
                bytes.extend(body[column].bytes());
                bytes.push(NUMBER_MARKER);
                bytes.extend_from_slice(&[0; 5]);
            }
        }
    }
    bytes
}

/// Splits a leading line number from the rest of a source line.
pub fn line_number(line: &str) -> Option<(LineNumber, &str)> {
    let line = line.trim_start();
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let number = line[..digits].parse::<LineNumber>().ok()?;
    if number > MAX_LINE_NUMBER {
        return None;
    }
    Some((number, line[digits..].trim_start_matches(' ')))
}

pub fn lex(body: &str) -> Lexer<'_> {
    Lexer {
        src: body,
        pos: 0,
        scan: Scan::Normal,
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Lexeme {
    /// A keyword token. Its column includes one trailing space.
    Keyword(u8),
    /// Digits kept as text and followed by their five byte value.
    Number(f64),
    /// A DEF FN parameter, followed by an empty five byte slot.
    Param,
    Byte(u8),
}

#[derive(Debug, PartialEq, Clone, Copy)]
enum Scan {
    Normal,
    InString,
    InRem,
    Bin,
    DefFn,
    Params,
}

pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    scan: Scan,
}

impl<'a> Iterator for Lexer<'a> {
    type Item = (Column, Lexeme);

    fn next(&mut self) -> Option<Self::Item> {
        let ch = self.peek()?;
        let start = self.pos;
        let lexeme = match self.scan {
            Scan::InRem => self.byte(ch),
            Scan::InString => {
                if ch == '"' {
                    self.scan = Scan::Normal;
                }
                self.byte(ch)
            }
            Scan::Bin => self.binary(ch),
            Scan::DefFn => self.def_fn(ch),
            Scan::Params => self.param(ch),
            Scan::Normal => self.normal(ch),
        };
        Some((start..self.pos, lexeme))
    }
}

impl<'a> Lexer<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.src.as_bytes().get(self.pos + offset).copied()
    }

    fn byte(&mut self, ch: char) -> Lexeme {
        self.pos += ch.len_utf8();
        if ch.is_ascii() {
            Lexeme::Byte(ch as u8)
        } else {
            Lexeme::Byte(b'?')
        }
    }

    fn normal(&mut self, ch: char) -> Lexeme {
        if ch == '"' {
            self.scan = Scan::InString;
            return self.byte(ch);
        }
        if let Some((len, tok)) = self.keyword() {
            self.pos += len;
            if self.peek() == Some(' ') {
                self.pos += 1;
            }
            self.scan = match tok {
                token::REM => Scan::InRem,
                token::BIN => Scan::Bin,
                token::DEF_FN => Scan::DefFn,
                _ => Scan::Normal,
            };
            return Lexeme::Keyword(tok);
        }
        let starts_number = ch.is_ascii_digit()
            || (ch == '.' && self.peek_byte(1).map_or(false, |b| b.is_ascii_digit()));
        if starts_number && !self.continues_identifier() {
            return self.number();
        }
        self.byte(ch)
    }

    fn keyword(&self) -> Option<(usize, u8)> {
        let rest = &self.src.as_bytes()[self.pos..];
        token::with_keywords_by_length(|keywords| {
            keywords
                .iter()
                .find(|(kw, _)| keyword_at(rest, kw.as_bytes()))
                .map(|(kw, tok)| (kw.len(), *tok))
        })
    }

    fn continues_identifier(&self) -> bool {
        self.pos > 0
            && self.src.as_bytes()[self.pos - 1].is_ascii_alphanumeric()
            && self.src.as_bytes()[..self.pos]
                .iter()
                .rev()
                .take_while(|b| b.is_ascii_alphanumeric())
                .any(|b| b.is_ascii_alphabetic())
    }

    fn number(&mut self) -> Lexeme {
        let bytes = self.src.as_bytes();
        let start = self.pos;
        let mut end = start;
        let mut decimal = false;
        while let Some(&b) = bytes.get(end) {
            if b.is_ascii_digit() {
                end += 1;
            } else if b == b'.' && !decimal {
                decimal = true;
                end += 1;
            } else {
                break;
            }
        }
        if let Some(b'e') | Some(b'E') = bytes.get(end) {
            let mut exp = end + 1;
            if let Some(b'+') | Some(b'-') = bytes.get(exp) {
                exp += 1;
            }
            if bytes.get(exp).map_or(false, |b| b.is_ascii_digit()) {
                end = exp;
                while bytes.get(end).map_or(false, |b| b.is_ascii_digit()) {
                    end += 1;
                }
            }
        }
        self.pos = end;
        Lexeme::Number(self.src[start..end].parse::<f64>().unwrap_or(0.0))
    }

    fn binary(&mut self, ch: char) -> Lexeme {
        if ch == ' ' {
            return self.byte(ch);
        }
        let mut value = 0.0;
        while let Some(b) = self.peek_byte(0) {
            match b {
                b'0' => value *= 2.0,
                b'1' => value = value * 2.0 + 1.0,
                _ => break,
            }
            self.pos += 1;
        }
        self.scan = Scan::Normal;
        Lexeme::Number(value)
    }

    fn def_fn(&mut self, ch: char) -> Lexeme {
        match ch {
            ' ' | '$' => self.byte(ch),
            '(' => {
                self.scan = Scan::Params;
                self.byte(ch)
            }
            _ if ch.is_ascii_alphabetic() => self.byte(ch),
            _ => {
                self.scan = Scan::Normal;
                self.normal(ch)
            }
        }
    }

    fn param(&mut self, ch: char) -> Lexeme {
        if ch == ')' {
            self.scan = Scan::Normal;
            return self.byte(ch);
        }
        if !ch.is_ascii_alphabetic() {
            return self.byte(ch);
        }
        self.pos += 1;
        if self.peek() == Some('$') {
            self.pos += 1;
        }
        Lexeme::Param
    }
}

/// Case insensitive match that refuses to split a word: a keyword
/// ending in a letter must not be followed by a letter or digit.
fn keyword_at(rest: &[u8], kw: &[u8]) -> bool {
    if rest.len() < kw.len() || !rest[..kw.len()].eq_ignore_ascii_case(kw) {
        return false;
    }
    match (kw.last(), rest.get(kw.len())) {
        (Some(last), Some(next)) => !(last.is_ascii_alphabetic() && next.is_ascii_alphanumeric()),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexemes(s: &str) -> Vec<Lexeme> {
        lex(s).map(|(_, l)| l).collect()
    }

    #[test]
    fn test_line_number() {
        assert_eq!(line_number("10 PRINT"), Some((10, "PRINT")));
        assert_eq!(line_number("  20   CLS"), Some((20, "CLS")));
        assert_eq!(line_number("9999"), Some((9999, "")));
        assert_eq!(line_number("10000 CLS"), None);
        assert_eq!(line_number("PRINT 10"), None);
        assert_eq!(line_number("99999999999999 CLS"), None);
    }

    #[test]
    fn test_keyword_column_includes_space() {
        let mut l = lex("GO TO 10");
        assert_eq!(l.next(), Some((0..6, Lexeme::Keyword(token::GO_TO))));
        assert_eq!(l.next(), Some((6..8, Lexeme::Number(10.0))));
        assert_eq!(l.next(), None);
    }

    #[test]
    fn test_identifier_digits() {
        assert_eq!(
            lexemes("a1=2"),
            vec![
                Lexeme::Byte(b'a'),
                Lexeme::Byte(b'1'),
                Lexeme::Byte(b'='),
                Lexeme::Number(2.0)
            ]
        );
    }

    #[test]
    fn test_fraction_and_exponent() {
        assert_eq!(lexemes(".5"), vec![Lexeme::Number(0.5)]);
        assert_eq!(lexemes("1.5e3"), vec![Lexeme::Number(1500.0)]);
        assert_eq!(
            lexemes("2e"),
            vec![Lexeme::Number(2.0), Lexeme::Byte(b'e')]
        );
    }

    #[test]
    fn test_lower_case_keywords() {
        assert_eq!(
            lexemes("print"),
            vec![Lexeme::Keyword(token::token("PRINT").unwrap())]
        );
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(lexemes("\"£\""), vec![
            Lexeme::Byte(b'"'),
            Lexeme::Byte(b'?'),
            Lexeme::Byte(b'"')
        ]);
    }
}
