/*!
# Rust Language Module

This Rust module converts Sinclair BASIC between source text and the
tokenized form the ROM keeps in memory.

*/

pub type LineNumber = u16;
pub type Column = std::ops::Range<usize>;

pub const MAX_LINE_NUMBER: LineNumber = 9999;

#[macro_use]
mod error;
pub mod float;
pub mod lex;
pub mod line;
pub mod renum;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use float::{decode_float, encode_float, encode_number, format_number, Float5};
pub use lex::{tokenize, tokenize_line};
pub use line::{detokenize, detokenize_line, Line};
pub use renum::{auto_renumber, renumber};
