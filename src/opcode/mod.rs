/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Opcode metadata: operand selectors, tagged operation descriptors and the
//! dense 256-entry table indexed by opcode byte.
//!
//! The table is the single shared decoding resource: the execution engine
//! dispatches on [`OpcodeMeta::op`] while a disassembler only needs
//! [`OpcodeMeta::size`] and [`OpcodeMeta::mnemonic`] to walk a ROM image.

mod table;

pub use self::table::OPCODE_TABLE;

use std::fmt;

/// Selects the operand of a single-byte instruction: one of the seven
/// 8-bit registers, or `M`, the memory byte addressed by the HL pair.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Target {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
    M,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A 16-bit register pair. `B`, `D` and `H` name the pair by its high
/// register (BC, DE, HL); `SP` is the stack pointer.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Pair {
    B,
    D,
    H,
    SP,
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Branch condition for JMP/CALL/RET encodings. Each flag gives one
/// positive and one negative condition; `Always` covers the unconditional
/// forms.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Cond {
    Always,
    /// Z reset
    NonZero,
    /// Z set
    Zero,
    /// CY reset
    NoCarry,
    /// CY set
    Carry,
    /// P reset
    ParityOdd,
    /// P set
    ParityEven,
    /// S reset
    Plus,
    /// S set
    Minus,
}

/// Tagged operation descriptor. Immediate data and addresses are not part
/// of the descriptor; the engine fetches them from the instruction stream
/// according to [`OpcodeMeta::size`].
///
/// `Unimplemented` marks the undocumented non-NOP opcodes (0xCB, 0xD9,
/// 0xDD, 0xED, 0xFD): their table entries still carry the length the
/// hardware gives them, but executing one is a fault.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Op {
    Nop,
    Mov(Target, Target),
    Mvi(Target),
    Lxi(Pair),
    Stax(Pair),
    Ldax(Pair),
    Inx(Pair),
    Dcx(Pair),
    Inr(Target),
    Dcr(Target),
    Dad(Pair),
    Add(Target),
    Adc(Target),
    Sub(Target),
    Sbb(Target),
    Ana(Target),
    Xra(Target),
    Ora(Target),
    Cmp(Target),
    Adi,
    Aci,
    Sui,
    Sbi,
    Ani,
    Xri,
    Ori,
    Cpi,
    Rlc,
    Rrc,
    Ral,
    Rar,
    Daa,
    Cma,
    Stc,
    Cmc,
    Jmp(Cond),
    Call(Cond),
    Ret(Cond),
    Rst(u8),
    Pchl,
    Push(Pair),
    Pop(Pair),
    PushPsw,
    PopPsw,
    Xchg,
    Xthl,
    Sphl,
    Shld,
    Lhld,
    Sta,
    Lda,
    In,
    Out,
    Ei,
    Di,
    Hlt,
    Unimplemented,
}

impl Op {
    /// True when the 16-bit operand is an address rather than immediate
    /// data. Only meaningful for 3-byte encodings; a disassembler uses it
    /// to pick the `$addr` form over `#$data`.
    pub fn operand_is_address(&self) -> bool {
        matches!(
            self,
            Op::Jmp(_) | Op::Call(_) | Op::Shld | Op::Lhld | Op::Sta | Op::Lda
        )
    }
}

/// One entry of the 256-entry opcode table.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct OpcodeMeta {
    /// Operation descriptor dispatched on by the execution engine.
    pub op: Op,
    /// Assembly mnemonic, including the fixed register operand where the
    /// encoding has one (e.g. `"MOV    B,C"`).
    pub mnemonic: &'static str,
    /// Total instruction length in bytes, opcode included (1, 2 or 3).
    pub size: u16,
    /// Cycle-count baseline in 8080 states. Conditional CALL/RET encodings
    /// carry their not-taken count; the engine adds the taken surcharge.
    pub cycles: u32,
}

/// Looks up the table entry for an opcode byte.
pub fn metadata(opcode: u8) -> &'static OpcodeMeta {
    &OPCODE_TABLE[opcode as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_has_a_valid_size() {
        for (byte, meta) in OPCODE_TABLE.iter().enumerate() {
            assert!(
                (1..=3).contains(&meta.size),
                "opcode 0x{:02x} has size {}",
                byte,
                meta.size
            );
        }
    }

    #[test]
    fn unimplemented_opcodes_keep_their_hardware_length() {
        assert_eq!(metadata(0xcb).op, Op::Unimplemented);
        assert_eq!(metadata(0xcb).size, 3);
        assert_eq!(metadata(0xd9).op, Op::Unimplemented);
        assert_eq!(metadata(0xd9).size, 1);
        for byte in [0xdd, 0xed, 0xfd] {
            assert_eq!(metadata(byte).op, Op::Unimplemented);
            assert_eq!(metadata(byte).size, 3);
        }
    }

    #[test]
    fn undocumented_nops_are_nops() {
        for byte in [0x08, 0x10, 0x18, 0x20, 0x28, 0x30, 0x38] {
            assert_eq!(metadata(byte).op, Op::Nop);
            assert_eq!(metadata(byte).mnemonic, "NOP");
            assert_eq!(metadata(byte).size, 1);
        }
    }

    #[test]
    fn spot_checks() {
        assert_eq!(metadata(0x00).op, Op::Nop);
        assert_eq!(metadata(0x00).cycles, 4);
        assert_eq!(metadata(0x01).op, Op::Lxi(Pair::B));
        assert_eq!(metadata(0x01).size, 3);
        assert_eq!(metadata(0x36).op, Op::Mvi(Target::M));
        assert_eq!(metadata(0x36).size, 2);
        assert_eq!(metadata(0x76).op, Op::Hlt);
        assert_eq!(metadata(0x7e).op, Op::Mov(Target::A, Target::M));
        assert_eq!(metadata(0x7e).cycles, 7);
        assert_eq!(metadata(0xc3).op, Op::Jmp(Cond::Always));
        assert_eq!(metadata(0xcd).op, Op::Call(Cond::Always));
        assert_eq!(metadata(0xf7).op, Op::Rst(6));
        assert_eq!(metadata(0xf7).mnemonic, "RST    6");
        assert_eq!(metadata(0xff).op, Op::Rst(7));
    }

    #[test]
    fn address_operands_are_flagged() {
        assert!(metadata(0xc3).op.operand_is_address());
        assert!(metadata(0x32).op.operand_is_address());
        assert!(metadata(0x2a).op.operand_is_address());
        assert!(!metadata(0x01).op.operand_is_address());
        assert!(!metadata(0xc6).op.operand_is_address());
    }
}
