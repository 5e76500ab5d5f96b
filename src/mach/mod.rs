/*!
## Rust Machine Module

This Rust module connects the codec to a ZX Spectrum memory image: the
program and variables areas, the system variables that bound them, and an
editing session on top.

*/

pub type Address = u16;

mod listing;
mod memory;
mod program;
mod session;
pub mod sysvar;
mod var;

pub use listing::Listing;
pub use memory::{Memory, Ram};
pub use program::{program_bytes, read_program, read_variables, write_program};
pub use session::{Event, Session};
pub use var::{decode_variables, scan_def_fns, ForLoop, Value, Variable};
