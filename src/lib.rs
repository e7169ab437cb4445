/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! An instruction-level emulator for the Intel 8080 microprocessor.
//!
//! The crate is split in two layers:
//!
//! - [`opcode`] describes the instruction set as data: a dense 256-entry
//!   table mapping every opcode byte to its operation, mnemonic, encoded
//!   size and base cycle count.
//! - [`cpu`] holds the processor state ([`cpu::Cpu8080`]) and executes
//!   instructions one [`cpu::Cpu8080::step`] at a time, driven by that
//!   table.
//!
//! Walking a raw image with the opcode table is enough to disassemble it:
//!
//! ```
//! use emu8080::opcode;
//!
//! let image = [0x21, 0x34, 0x12, 0x76]; // LXI H,#$1234 / HLT
//! let mut pc = 0;
//! while pc < image.len() {
//!     let meta = opcode::metadata(image[pc]);
//!     println!("{:04X} {}", pc, meta.mnemonic);
//!     pc += meta.size as usize;
//! }
//! ```
//!
//! Running a program takes a [`cpu::DataBus`] for the IN/OUT ports:
//!
//! ```
//! use emu8080::cpu::{Cpu8080, DataBus};
//!
//! struct NoDevices;
//!
//! impl DataBus for NoDevices {
//!     fn read_port(&self, _port: u8) -> u8 { 0 }
//!     fn write_port(&mut self, _port: u8, _value: u8) {}
//! }
//!
//! let mut cpu = Cpu8080::new(NoDevices);
//! cpu.load(&[0x3e, 0x2a, 0x76]); // MVI A,#$2a / HLT
//! while !cpu.halted() {
//!     cpu.step().expect("program hit an unimplemented opcode");
//! }
//! assert_eq!(cpu.registers().a, 0x2a);
//! ```

pub mod cpu;
pub mod opcode;
