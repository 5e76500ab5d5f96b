//! # ZX BASIC
//!
//! Sinclair BASIC as the ZX Spectrum keeps it in memory.
//!
//! This crate converts between program text and the tokenized bytes the
//! ROM stores, encodes and decodes the five byte number format, and reads
//! the variables area. The `mach` module applies all of this to a 64K
//! memory image through its system variables.
//!
//! ```
//! use zxbasic::lang::{detokenize, tokenize};
//!
//! let bytes = tokenize("10 PRINT \"HELLO\"\n20 GO TO 10");
//! assert_eq!(&bytes[..6], &[0x00, 0x0A, 0x09, 0x00, 0xF5, b'"']);
//! let lines = detokenize(&bytes);
//! assert_eq!(lines[1].to_string(), "20 GO TO 10");
//! ```
//!
//! Running the executable without arguments starts an interactive editor
//! on a memory image. See the
//! [introduction](_Introduction/index.html).

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
