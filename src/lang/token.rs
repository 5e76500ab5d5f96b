//! ## Token table
//!
//! Every byte from `0xA5` to `0xFF` stands for one keyword.

/// Precedes the five bytes of a number hidden after its digits.
pub const NUMBER_MARKER: u8 = 0x0E;
pub const END_OF_LINE: u8 = 0x0D;
pub const FIRST_TOKEN: u8 = 0xA5;

pub const BIN: u8 = 0xC4;
pub const DEF_FN: u8 = 0xCE;
pub const RESTORE: u8 = 0xE5;
pub const REM: u8 = 0xEA;
pub const GO_TO: u8 = 0xEC;
pub const GO_SUB: u8 = 0xED;
pub const RUN: u8 = 0xF7;

pub const KEYWORDS: [&str; 91] = [
    "RND", "INKEY$", "PI", "FN", "POINT", "SCREEN$", "ATTR", "AT", "TAB", "VAL$", "CODE", "VAL",
    "LEN", "SIN", "COS", "TAN", "ASN", "ACS", "ATN", "LN", "EXP", "INT", "SQR", "SGN", "ABS",
    "PEEK", "IN", "USR", "STR$", "CHR$", "NOT", "BIN", "OR", "AND", "<=", ">=", "<>", "LINE",
    "THEN", "TO", "STEP", "DEF FN", "CAT", "FORMAT", "MOVE", "ERASE", "OPEN #", "CLOSE #",
    "MERGE", "VERIFY", "BEEP", "CIRCLE", "INK", "PAPER", "FLASH", "BRIGHT", "INVERSE", "OVER",
    "OUT", "LPRINT", "LLIST", "STOP", "READ", "DATA", "RESTORE", "NEW", "BORDER", "CONTINUE",
    "DIM", "REM", "FOR", "GO TO", "GO SUB", "INPUT", "LOAD", "LIST", "LET", "PAUSE", "NEXT",
    "POKE", "PRINT", "PLOT", "RUN", "SAVE", "RANDOMIZE", "IF", "CLS", "DRAW", "CLEAR", "RETURN",
    "COPY",
];

thread_local!(
    static BY_LENGTH: Vec<(&'static str, u8)> = {
        let mut keywords: Vec<(&'static str, u8)> = KEYWORDS
            .iter()
            .zip(FIRST_TOKEN..=0xFF)
            .map(|(kw, byte)| (*kw, byte))
            .collect();
        keywords.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        keywords
    };
);

/// The keyword for a token byte.
pub fn keyword(byte: u8) -> Option<&'static str> {
    if byte < FIRST_TOKEN {
        return None;
    }
    KEYWORDS.get((byte - FIRST_TOKEN) as usize).copied()
}

/// The token byte for an upper case keyword.
pub fn token(keyword: &str) -> Option<u8> {
    KEYWORDS
        .iter()
        .position(|kw| *kw == keyword)
        .map(|index| FIRST_TOKEN + index as u8)
}

/// Runs `f` over all keywords, longest first, so that `FORMAT`
/// is offered before `FOR`.
pub fn with_keywords_by_length<F, R>(f: F) -> R
where
    F: FnOnce(&[(&'static str, u8)]) -> R,
{
    BY_LENGTH.with(|keywords| f(keywords))
}

/// Keywords ending in a letter, `$` or `#` are listed with a space after them.
pub fn is_spaced(keyword: &str) -> bool {
    match keyword.bytes().last() {
        Some(ch) => ch.is_ascii_alphabetic() || ch == b'$' || ch == b'#',
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_byte_is_mapped() {
        for byte in FIRST_TOKEN..=0xFF {
            assert!(keyword(byte).is_some());
        }
        assert_eq!(keyword(0xA4), None);
        assert_eq!(keyword(0xFF), Some("COPY"));
    }

    #[test]
    fn test_named_tokens() {
        assert_eq!(keyword(BIN), Some("BIN"));
        assert_eq!(keyword(DEF_FN), Some("DEF FN"));
        assert_eq!(keyword(RESTORE), Some("RESTORE"));
        assert_eq!(keyword(REM), Some("REM"));
        assert_eq!(keyword(GO_TO), Some("GO TO"));
        assert_eq!(keyword(GO_SUB), Some("GO SUB"));
        assert_eq!(keyword(RUN), Some("RUN"));
    }

    #[test]
    fn test_from_string() {
        assert_eq!(token("PRINT"), Some(0xF5));
        assert_eq!(token("<>"), Some(0xC9));
        assert_eq!(token("PICKLES"), None);
    }

    #[test]
    fn test_longest_first() {
        with_keywords_by_length(|keywords| {
            assert_eq!(keywords.len(), 91);
            for pair in keywords.windows(2) {
                assert!(pair[0].0.len() >= pair[1].0.len());
            }
            let format = keywords.iter().position(|k| k.0 == "FORMAT");
            let for_ = keywords.iter().position(|k| k.0 == "FOR");
            assert!(format < for_);
        });
    }
}
