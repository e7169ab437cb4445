/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! The processor state and the fetch-decode-execute engine.

mod fault;
mod flags;
mod registers;

use std::fmt;

use log::{trace, warn};

use crate::opcode::{self, Cond, Op, Pair, Target};

pub use self::fault::Fault;
pub use self::flags::{parity, Flags};
pub use self::registers::Registers;

/// Size of the 8080 address space in bytes.
pub const MEMORY_SIZE: usize = 0x10000;

/// Interface used by [`Cpu8080`] for the `IN` and `OUT` instructions.
///
/// The 8080 talks to external devices through numbered ports: `IN` reads a
/// byte from a port into the accumulator and `OUT` writes the accumulator
/// to a port. What sits behind a port is entirely up to the embedder;
/// implementations must return synchronously and must not call back into
/// the processor.
pub trait DataBus {
    /// Called when the processor executes an `IN` instruction.
    fn read_port(&self, port: u8) -> u8;

    /// Called when the processor executes an `OUT` instruction.
    fn write_port(&mut self, port: u8, value: u8);
}

/// The emulated processor: registers, flags, interrupt-enable bit and the
/// full 65536-byte address space, all exclusively owned.
///
/// Everything starts zeroed. Load a ROM image with [`Cpu8080::load`], then
/// drive execution by calling [`Cpu8080::step`] until [`Cpu8080::halted`]
/// turns true or a step returns a [`Fault`].
pub struct Cpu8080<Bus: DataBus> {
    registers: Registers,
    flags: Flags,
    memory: Box<[u8]>,
    interrupt_enabled: bool,
    halted: bool,
    cycles: u64,
    bus: Bus,
}

impl<Bus: DataBus> Cpu8080<Bus> {
    /// Builds a processor with zeroed registers and memory.
    pub fn new(bus: Bus) -> Cpu8080<Bus> {
        Cpu8080 {
            registers: Default::default(),
            flags: Default::default(),
            memory: vec![0; MEMORY_SIZE].into_boxed_slice(),
            interrupt_enabled: false,
            halted: false,
            cycles: 0,
            bus,
        }
    }

    /// Copies a raw memory image into the address space starting at
    /// address 0, truncating at the end of the buffer. Call this before
    /// the first [`step`](Cpu8080::step).
    pub fn load(&mut self, image: &[u8]) {
        let len = image.len().min(MEMORY_SIZE);
        self.memory[..len].copy_from_slice(&image[..len]);
    }

    /// Borrows the registers immutably.
    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Borrows the condition codes immutably.
    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    /// Borrows the address space immutably.
    pub fn memory(&self) -> &[u8] {
        &self.memory
    }

    /// True once a HLT instruction has executed. The run loop should stop
    /// issuing further fetches.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// State of the interrupt-enable bit controlled by EI/DI.
    pub fn interrupt_enabled(&self) -> bool {
        self.interrupt_enabled
    }

    /// Cycles elapsed since the processor was created.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Executes the instruction at the program counter and returns the
    /// cycles it consumed.
    ///
    /// Fetching an opcode with no modeled semantics returns a [`Fault`]
    /// with the program counter rewound to the faulting opcode and no
    /// other state change. Once halted, `step` does nothing and returns
    /// 0 cycles.
    pub fn step(&mut self) -> Result<u32, Fault> {
        if self.halted {
            return Ok(0);
        }
        let op_byte = self.memory[self.registers.pc as usize];
        self.registers.pc = self.registers.pc.wrapping_add(1);
        let meta = opcode::metadata(op_byte);
        if meta.op == Op::Unimplemented {
            // Rewind the fetch pre-increment so the dump names the
            // faulting address.
            self.registers.pc = self.registers.pc.wrapping_sub(1);
            warn!(
                "unimplemented opcode 0x{:02x} at 0x{:04x}",
                op_byte, self.registers.pc
            );
            return Err(Fault {
                opcode: op_byte,
                registers: self.registers,
                flags: self.flags,
                interrupt_enabled: self.interrupt_enabled,
            });
        }
        let data = self.fetch_operand(meta.size);
        let extra = self.execute(meta.op, data);
        let elapsed = meta.cycles + extra;
        self.cycles += elapsed as u64;
        Ok(elapsed)
    }

    /// Reads the 0, 1 or 2 operand bytes following the opcode, advancing
    /// PC past them. Words are little-endian in the instruction stream.
    fn fetch_operand(&mut self, size: u16) -> u16 {
        match size {
            2 => {
                let value = self.memory[self.registers.pc as usize] as u16;
                self.registers.pc = self.registers.pc.wrapping_add(1);
                value
            }
            3 => {
                let low = self.memory[self.registers.pc as usize] as u16;
                let high = self.memory[self.registers.pc.wrapping_add(1) as usize] as u16;
                self.registers.pc = self.registers.pc.wrapping_add(2);
                (high << 8) | low
            }
            _ => 0,
        }
    }

    /// Applies one operation. PC already points past the whole
    /// instruction, so control-flow operations may overwrite it freely.
    /// Returns the extra cycles of a taken conditional CALL/RET.
    fn execute(&mut self, op: Op, data: u16) -> u32 {
        match op {
            Op::Nop => {}

            // Data transfer
            Op::Mov(dst, src) => {
                let value = self.read_target(src);
                self.write_target(dst, value);
            }
            Op::Mvi(target) => self.write_target(target, data as u8),
            Op::Lxi(pair) => self.registers.set_pair(pair, data),
            Op::Stax(pair) => {
                self.memory[self.registers.pair(pair) as usize] = self.registers.a
            }
            Op::Ldax(pair) => {
                self.registers.a = self.memory[self.registers.pair(pair) as usize]
            }
            Op::Lda => self.registers.a = self.memory[data as usize],
            Op::Sta => self.memory[data as usize] = self.registers.a,
            Op::Lhld => {
                let value = self.read_word(data);
                self.registers.set_pair(Pair::H, value);
            }
            Op::Shld => {
                let value = self.registers.pair(Pair::H);
                self.write_word(data, value);
            }
            Op::Xchg => {
                let de = self.registers.pair(Pair::D);
                let hl = self.registers.pair(Pair::H);
                self.registers.set_pair(Pair::D, hl);
                self.registers.set_pair(Pair::H, de);
            }

            // Arithmetic
            Op::Add(target) => {
                let value = self.read_target(target);
                self.add(value, false);
            }
            Op::Adc(target) => {
                let value = self.read_target(target);
                let carry = self.flags.cy;
                self.add(value, carry);
            }
            Op::Sub(target) => {
                let value = self.read_target(target);
                self.sub(value, false);
            }
            Op::Sbb(target) => {
                let value = self.read_target(target);
                let borrow = self.flags.cy;
                self.sub(value, borrow);
            }
            Op::Adi => self.add(data as u8, false),
            Op::Aci => {
                let carry = self.flags.cy;
                self.add(data as u8, carry);
            }
            Op::Sui => self.sub(data as u8, false),
            Op::Sbi => {
                let borrow = self.flags.cy;
                self.sub(data as u8, borrow);
            }
            Op::Inr(target) => self.increment(target),
            Op::Dcr(target) => self.decrement(target),
            Op::Inx(pair) => {
                let value = self.registers.pair(pair).wrapping_add(1);
                self.registers.set_pair(pair, value);
            }
            Op::Dcx(pair) => {
                let value = self.registers.pair(pair).wrapping_sub(1);
                self.registers.set_pair(pair, value);
            }
            Op::Dad(pair) => self.double_add(pair),
            Op::Daa => self.decimal_adjust(),

            // Logical
            Op::Ana(target) => {
                let value = self.read_target(target);
                self.and(value);
            }
            Op::Xra(target) => {
                let value = self.read_target(target);
                self.xor(value);
            }
            Op::Ora(target) => {
                let value = self.read_target(target);
                self.or(value);
            }
            Op::Cmp(target) => {
                let value = self.read_target(target);
                self.subtract_flags(value, false);
            }
            Op::Ani => self.and(data as u8),
            Op::Xri => self.xor(data as u8),
            Op::Ori => self.or(data as u8),
            Op::Cpi => {
                self.subtract_flags(data as u8, false);
            }
            Op::Rlc => {
                let a = self.registers.a;
                self.registers.a = a.rotate_left(1);
                self.flags.cy = (a & 0x80) != 0;
            }
            Op::Rrc => {
                let a = self.registers.a;
                self.registers.a = a.rotate_right(1);
                self.flags.cy = (a & 0x01) != 0;
            }
            Op::Ral => {
                let a = self.registers.a;
                self.registers.a = (a << 1) | self.flags.cy as u8;
                self.flags.cy = (a & 0x80) != 0;
            }
            Op::Rar => {
                let a = self.registers.a;
                self.registers.a = (a >> 1) | ((self.flags.cy as u8) << 7);
                self.flags.cy = (a & 0x01) != 0;
            }
            Op::Cma => self.registers.a = !self.registers.a,
            Op::Cmc => self.flags.cy = !self.flags.cy,
            Op::Stc => self.flags.cy = true,

            // Branch
            Op::Jmp(cond) => {
                if self.condition(cond) {
                    self.registers.pc = data;
                }
            }
            Op::Call(cond) => {
                if self.condition(cond) {
                    self.call(data);
                    if cond != Cond::Always {
                        return 6;
                    }
                }
            }
            Op::Ret(cond) => {
                if self.condition(cond) {
                    self.registers.pc = self.pop_word();
                    if cond != Cond::Always {
                        return 6;
                    }
                }
            }
            Op::Rst(vector) => self.call(vector as u16 * 8),
            Op::Pchl => self.registers.pc = self.registers.pair(Pair::H),

            // Stack, I/O and machine control
            Op::Push(pair) => {
                let value = self.registers.pair(pair);
                self.push_word(value);
            }
            Op::Pop(pair) => {
                let value = self.pop_word();
                self.registers.set_pair(pair, value);
            }
            Op::PushPsw => {
                let value = ((self.registers.a as u16) << 8) | self.flags.to_psw() as u16;
                self.push_word(value);
            }
            Op::PopPsw => {
                let value = self.pop_word();
                self.registers.a = (value >> 8) as u8;
                self.flags = Flags::from_psw(value as u8);
            }
            Op::Xthl => {
                let hl = self.registers.pair(Pair::H);
                let top = self.read_word(self.registers.sp);
                self.write_word(self.registers.sp, hl);
                self.registers.set_pair(Pair::H, top);
            }
            Op::Sphl => self.registers.sp = self.registers.pair(Pair::H),
            Op::In => {
                let port = data as u8;
                self.registers.a = self.bus.read_port(port);
                trace!("IN  port 0x{:02x} -> 0x{:02x}", port, self.registers.a);
            }
            Op::Out => {
                let port = data as u8;
                trace!("OUT port 0x{:02x} <- 0x{:02x}", port, self.registers.a);
                self.bus.write_port(port, self.registers.a);
            }
            Op::Ei => self.interrupt_enabled = true,
            Op::Di => self.interrupt_enabled = false,
            Op::Hlt => self.halted = true,

            // Rejected during fetch, before execute runs.
            Op::Unimplemented => {}
        }
        0
    }

    /// Reads an operand, resolving `M` to the byte addressed by HL.
    fn read_target(&self, target: Target) -> u8 {
        match target {
            Target::A => self.registers.a,
            Target::B => self.registers.b,
            Target::C => self.registers.c,
            Target::D => self.registers.d,
            Target::E => self.registers.e,
            Target::H => self.registers.h,
            Target::L => self.registers.l,
            Target::M => self.memory[self.registers.pair(Pair::H) as usize],
        }
    }

    fn write_target(&mut self, target: Target, value: u8) {
        match target {
            Target::A => self.registers.a = value,
            Target::B => self.registers.b = value,
            Target::C => self.registers.c = value,
            Target::D => self.registers.d = value,
            Target::E => self.registers.e = value,
            Target::H => self.registers.h = value,
            Target::L => self.registers.l = value,
            Target::M => self.memory[self.registers.pair(Pair::H) as usize] = value,
        }
    }

    fn condition(&self, cond: Cond) -> bool {
        match cond {
            Cond::Always => true,
            Cond::NonZero => !self.flags.z,
            Cond::Zero => self.flags.z,
            Cond::NoCarry => !self.flags.cy,
            Cond::Carry => self.flags.cy,
            Cond::ParityOdd => !self.flags.p,
            Cond::ParityEven => self.flags.p,
            Cond::Plus => !self.flags.s,
            Cond::Minus => self.flags.s,
        }
    }

    fn add(&mut self, value: u8, carry_in: bool) {
        let a = self.registers.a;
        let carry = carry_in as u16;
        let sum = a as u16 + value as u16 + carry;
        self.flags.cy = sum > 0xff;
        self.flags.ac = (a & 0x0f) + (value & 0x0f) + carry as u8 > 0x0f;
        self.registers.a = sum as u8;
        self.flags.set_zsp(sum as u8);
    }

    fn sub(&mut self, value: u8, borrow_in: bool) {
        self.registers.a = self.subtract_flags(value, borrow_in);
    }

    /// Computes `A - value - borrow` and sets all five flags from it.
    /// The accumulator is left untouched, which is exactly what CMP/CPI
    /// need; SUB/SBB store the returned result.
    fn subtract_flags(&mut self, value: u8, borrow_in: bool) -> u8 {
        let a = self.registers.a;
        let borrow = borrow_in as u16;
        let result = (a as u16).wrapping_sub(value as u16).wrapping_sub(borrow) as u8;
        self.flags.cy = value as u16 + borrow > a as u16;
        // Auxiliary carry on subtraction: set when the low nibble needs
        // no borrow.
        self.flags.ac = (a & 0x0f) as i16 - (value & 0x0f) as i16 - borrow as i16 >= 0;
        self.flags.set_zsp(result);
        result
    }

    fn increment(&mut self, target: Target) {
        let result = self.read_target(target).wrapping_add(1);
        self.write_target(target, result);
        self.flags.set_zsp(result);
        self.flags.ac = (result & 0x0f) == 0;
    }

    fn decrement(&mut self, target: Target) {
        let result = self.read_target(target).wrapping_sub(1);
        self.write_target(target, result);
        self.flags.set_zsp(result);
        self.flags.ac = (result & 0x0f) != 0x0f;
    }

    fn double_add(&mut self, pair: Pair) {
        let sum = self.registers.pair(Pair::H) as u32 + self.registers.pair(pair) as u32;
        self.registers.set_pair(Pair::H, sum as u16);
        self.flags.cy = sum > 0xffff;
    }

    fn decimal_adjust(&mut self) {
        let a = self.registers.a;
        let mut correction = 0u8;
        let mut carry = self.flags.cy;
        if self.flags.ac || (a & 0x0f) > 9 {
            correction |= 0x06;
        }
        if self.flags.cy || (a >> 4) > 9 || ((a >> 4) == 9 && (a & 0x0f) > 9) {
            correction |= 0x60;
            carry = true;
        }
        self.add(correction, false);
        self.flags.cy = carry;
    }

    fn and(&mut self, value: u8) {
        let a = self.registers.a;
        self.registers.a = a & value;
        self.flags.cy = false;
        // Documented 8080 quirk: ANA derives AC from bit 3 of either
        // operand.
        self.flags.ac = ((a | value) & 0x08) != 0;
        self.flags.set_zsp(self.registers.a);
    }

    fn xor(&mut self, value: u8) {
        self.registers.a ^= value;
        self.flags.cy = false;
        self.flags.ac = false;
        self.flags.set_zsp(self.registers.a);
    }

    fn or(&mut self, value: u8) {
        self.registers.a |= value;
        self.flags.cy = false;
        self.flags.ac = false;
        self.flags.set_zsp(self.registers.a);
    }

    fn call(&mut self, addr: u16) {
        let pc = self.registers.pc;
        self.push_word(pc);
        self.registers.pc = addr;
    }

    fn push_byte(&mut self, value: u8) {
        self.registers.sp = self.registers.sp.wrapping_sub(1);
        self.memory[self.registers.sp as usize] = value;
    }

    fn pop_byte(&mut self) -> u8 {
        let value = self.memory[self.registers.sp as usize];
        self.registers.sp = self.registers.sp.wrapping_add(1);
        value
    }

    /// High byte first so the word sits little-endian in memory with the
    /// stack growing toward low addresses.
    fn push_word(&mut self, value: u16) {
        self.push_byte((value >> 8) as u8);
        self.push_byte(value as u8);
    }

    fn pop_word(&mut self) -> u16 {
        let low = self.pop_byte() as u16;
        let high = self.pop_byte() as u16;
        (high << 8) | low
    }

    fn read_word(&self, addr: u16) -> u16 {
        let low = self.memory[addr as usize] as u16;
        let high = self.memory[addr.wrapping_add(1) as usize] as u16;
        (high << 8) | low
    }

    fn write_word(&mut self, addr: u16, value: u16) {
        self.memory[addr as usize] = value as u8;
        self.memory[addr.wrapping_add(1) as usize] = (value >> 8) as u8;
    }
}

impl<Bus: DataBus> fmt::Debug for Cpu8080<Bus> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cpu8080")
            .field("registers", &self.registers)
            .field("flags", &self.flags)
            .field("interrupt_enabled", &self.interrupt_enabled)
            .field("halted", &self.halted)
            .field("cycles", &self.cycles)
            .finish()
    }
}
