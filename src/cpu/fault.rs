/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::error::Error;
use std::fmt;

use super::flags::Flags;
use super::registers::Registers;

/// Snapshot taken when the engine fetches an opcode with no modeled
/// semantics. `registers.pc` points at the faulting opcode itself, not
/// past it.
///
/// A fault is terminal for the emulation but deliberately not for the
/// host process: the run loop decides whether to exit, so tests and
/// tooling can assert on the dump instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault {
    pub opcode: u8,
    pub registers: Registers,
    pub flags: Flags,
    pub interrupt_enabled: bool,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "unimplemented instruction")?;
        writeln!(f, "instruction 0x{:02x}", self.opcode)?;
        writeln!(f, "PC          0x{:04x}", self.registers.pc)?;
        writeln!(f, "SP          0x{:04x}", self.registers.sp)?;
        writeln!(f, "IE          {}", self.interrupt_enabled as u8)?;
        writeln!(f, "A           0x{:02x}", self.registers.a)?;
        writeln!(f, "B           0x{:02x}", self.registers.b)?;
        writeln!(f, "C           0x{:02x}", self.registers.c)?;
        writeln!(f, "D           0x{:02x}", self.registers.d)?;
        writeln!(f, "E           0x{:02x}", self.registers.e)?;
        writeln!(f, "H           0x{:02x}", self.registers.h)?;
        writeln!(f, "L           0x{:02x}", self.registers.l)?;
        writeln!(f, "sign        {}", self.flags.s as u8)?;
        writeln!(f, "zero        {}", self.flags.z as u8)?;
        writeln!(f, "aux carry   {}", self.flags.ac as u8)?;
        writeln!(f, "parity      {}", self.flags.p as u8)?;
        writeln!(f, "carry       {}", self.flags.cy as u8)
    }
}

impl Error for Fault {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_lists_every_register_and_flag() {
        let fault = Fault {
            opcode: 0xdd,
            registers: Registers { a: 0x42, pc: 0x0100, sp: 0xff00, ..Default::default() },
            flags: Flags { cy: true, ..Default::default() },
            interrupt_enabled: false,
        };
        let dump = fault.to_string();
        assert!(dump.contains("instruction 0xdd"));
        assert!(dump.contains("PC          0x0100"));
        assert!(dump.contains("SP          0xff00"));
        assert!(dump.contains("A           0x42"));
        assert!(dump.contains("carry       1"));
        assert!(dump.contains("zero        0"));
    }
}
