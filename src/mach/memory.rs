use super::sysvar::{self, write_word};
use super::Address;

/// Byte access to the 64K address space. Addresses wrap at the top.
pub trait Memory {
    fn read_bytes(&self, address: Address, len: usize) -> Vec<u8>;
    fn write_bytes(&mut self, address: Address, bytes: &[u8]);
}

/// A flat 64K image with the system variables of a freshly reset 48K machine.
#[derive(Clone)]
pub struct Ram {
    bytes: Vec<u8>,
}

impl Ram {
    pub fn new() -> Ram {
        let mut ram = Ram {
            bytes: vec![0; 0x10000],
        };
        write_word(&mut ram, sysvar::RAMTOP, 0xFF57);
        write_word(&mut ram, sysvar::P_RAMT, 0xFFFF);
        write_word(&mut ram, sysvar::PROG, sysvar::DEFAULT_PROG);
        sysvar::lay_out(&mut ram, sysvar::DEFAULT_PROG, 0);
        ram
    }
}

impl Default for Ram {
    fn default() -> Ram {
        Ram::new()
    }
}

impl std::fmt::Debug for Ram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ram {{ {} bytes }}", self.bytes.len())
    }
}

impl Memory for Ram {
    fn read_bytes(&self, address: Address, len: usize) -> Vec<u8> {
        (0..len)
            .map(|i| self.bytes[(address as usize + i) & 0xFFFF])
            .collect()
    }

    fn write_bytes(&mut self, address: Address, bytes: &[u8]) {
        for (i, byte) in bytes.iter().enumerate() {
            self.bytes[(address as usize + i) & 0xFFFF] = *byte;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_at_top() {
        let mut ram = Ram::new();
        ram.write_bytes(0xFFFF, &[1, 2]);
        assert_eq!(ram.read_bytes(0xFFFF, 2), vec![1, 2]);
        assert_eq!(ram.read_bytes(0x0000, 1), vec![2]);
    }

    #[test]
    fn test_empty_program_layout() {
        let ram = Ram::new();
        assert_eq!(sysvar::read_word(&ram, sysvar::PROG), 0x5CCB);
        assert_eq!(sysvar::read_word(&ram, sysvar::VARS), 0x5CCB);
        assert_eq!(sysvar::read_word(&ram, sysvar::E_LINE), 0x5CCC);
        assert_eq!(ram.read_bytes(0x5CCB, 3), vec![0x80, 0x0D, 0x80]);
    }
}
