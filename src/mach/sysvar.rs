//! ## System variables
//!
//! Addresses of the pointers the ROM uses to find the program,
//! the variables and the edit line.

use super::{Address, Memory};
use byteorder::{ByteOrder, LittleEndian};

pub const VARS: Address = 0x5C4B;
pub const PROG: Address = 0x5C53;
pub const NXTLIN: Address = 0x5C55;
pub const DATADD: Address = 0x5C57;
pub const E_LINE: Address = 0x5C59;
pub const K_CUR: Address = 0x5C5B;
pub const CH_ADD: Address = 0x5C5D;
pub const WORKSP: Address = 0x5C61;
pub const STKBOT: Address = 0x5C63;
pub const STKEND: Address = 0x5C65;
pub const RAMTOP: Address = 0x5CB2;
pub const P_RAMT: Address = 0x5CB4;

/// Start of the program area on a 48K machine without microdrives.
pub const DEFAULT_PROG: Address = 0x5CCB;
/// Nothing below the printer buffer can be part of BASIC.
pub const LOWEST_BASIC: Address = 0x5B00;

pub const END_OF_VARIABLES: u8 = 0x80;

pub fn read_word<M: Memory + ?Sized>(mem: &M, address: Address) -> Address {
    let bytes = mem.read_bytes(address, 2);
    if bytes.len() < 2 {
        return 0;
    }
    LittleEndian::read_u16(&bytes)
}

pub fn write_word<M: Memory + ?Sized>(mem: &mut M, address: Address, value: Address) {
    let mut bytes = [0u8; 2];
    LittleEndian::write_u16(&mut bytes, value);
    mem.write_bytes(address, &bytes);
}

/// Writes the end markers after a program of `len` bytes at `prog` and
/// points the system variables at the new layout. The caller checks
/// that everything fits.
pub(super) fn lay_out<M: Memory + ?Sized>(mem: &mut M, prog: Address, len: usize) {
    let vars = prog.wrapping_add(len as Address);
    let e_line = vars.wrapping_add(1);
    let worksp = e_line.wrapping_add(2);

    mem.write_bytes(vars, &[END_OF_VARIABLES]);
    mem.write_bytes(e_line, &[0x0D, END_OF_VARIABLES]);

    write_word(mem, VARS, vars);
    write_word(mem, NXTLIN, prog);
    write_word(mem, DATADD, prog.wrapping_sub(1));
    write_word(mem, E_LINE, e_line);
    write_word(mem, K_CUR, e_line);
    write_word(mem, CH_ADD, e_line.wrapping_sub(1));
    write_word(mem, WORKSP, worksp);
    write_word(mem, STKBOT, worksp);
    write_word(mem, STKEND, worksp);
}
