use super::sysvar::{self, read_word};
use super::var::{decode_variables, scan_def_fns, Variable};
use super::Memory;
use crate::error;
use crate::lang::{detokenize, Error, Line};

type Result<T> = std::result::Result<T, Error>;

/// The tokenized bytes between `PROG` and `VARS`.
pub fn program_bytes<M: Memory + ?Sized>(mem: &M) -> Vec<u8> {
    let prog = read_word(mem, sysvar::PROG);
    let vars = read_word(mem, sysvar::VARS);
    if vars <= prog {
        return vec![];
    }
    mem.read_bytes(prog, (vars - prog) as usize)
}

pub fn read_program<M: Memory + ?Sized>(mem: &M) -> Vec<Line> {
    detokenize(&program_bytes(mem))
}

/// Decodes the variables area, followed by any `DEF FN` definitions
/// found in the program. Empty when the system variables are not sane.
pub fn read_variables<M: Memory + ?Sized>(mem: &M) -> Vec<Variable> {
    let prog = read_word(mem, sysvar::PROG);
    let vars = read_word(mem, sysvar::VARS);
    let e_line = read_word(mem, sysvar::E_LINE);
    if prog < sysvar::LOWEST_BASIC || vars < prog || e_line <= vars {
        return vec![];
    }
    let mut variables = decode_variables(&mem.read_bytes(vars, (e_line - vars) as usize));
    variables.extend(scan_def_fns(&mem.read_bytes(prog, (vars - prog) as usize)));
    variables
}

/// Replaces the program at `PROG` and resets the variables area and the
/// edit line behind it. Memory is untouched when the program does not fit.
pub fn write_program<M: Memory + ?Sized>(mem: &mut M, program: &[u8]) -> Result<()> {
    let prog = read_word(mem, sysvar::PROG);
    if prog < sysvar::LOWEST_BASIC {
        return Err(error!(InternalError; "PROG DOES NOT POINT AT RAM"));
    }
    let ramtop = read_word(mem, sysvar::RAMTOP);
    let limit = if ramtop > prog { ramtop as usize } else { 0x10000 };
    // program, variables end marker, edit line
    let end = prog as usize + program.len() + 3;
    if end > limit {
        return Err(error!(OutOfMemory; &format!("{} BYTES WILL NOT FIT", program.len())));
    }
    mem.write_bytes(prog, program);
    sysvar::lay_out(mem, prog, program.len());
    Ok(())
}
