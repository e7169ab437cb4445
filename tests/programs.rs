/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Whole-program tests driving the emulator through its public API only.

use emu8080::cpu::{Cpu8080, DataBus};

struct NullBus;

impl DataBus for NullBus {
    fn read_port(&self, _port: u8) -> u8 {
        0
    }

    fn write_port(&mut self, _port: u8, _value: u8) {}
}

fn run(image: &[u8]) -> Cpu8080<NullBus> {
    let mut cpu = Cpu8080::new(NullBus);
    cpu.load(image);
    while !cpu.halted() {
        cpu.step().expect("program faulted");
    }
    cpu
}

#[test]
fn countdown_loop_terminates() {
    let cpu = run(&[
        0x06, 0x05, // MVI B,#$05
        0x05, //       loop: DCR B
        0xc2, 0x02, 0x00, // JNZ loop
        0x76, //       HLT
    ]);
    assert_eq!(cpu.registers().b, 0);
    assert!(cpu.flags().z);
    assert_eq!(cpu.registers().pc, 0x0007);
    // MVI 7 + 5*(DCR 5 + JNZ 10) + HLT 7
    assert_eq!(cpu.cycles(), 89);
}

#[test]
fn subroutine_call_returns_past_the_operands() {
    let cpu = run(&[
        0x31, 0x00, 0xff, // LXI SP,#$ff00
        0xcd, 0x09, 0x00, // CALL $0009
        0x76, //             HLT
        0x00, 0x00, // padding
        0x3e, 0x2a, //       sub: MVI A,#$2a
        0xc9, //             RET
    ]);
    assert_eq!(cpu.registers().a, 0x2a);
    assert_eq!(cpu.registers().pc, 0x0007);
    assert_eq!(cpu.registers().sp, 0xff00);
}

#[test]
fn stack_survives_a_push_pop_pair() {
    let cpu = run(&[
        0x31, 0x00, 0xff, // LXI SP,#$ff00
        0x01, 0x12, 0xde, // LXI B,#$de12
        0xc5, //             PUSH B
        0xd1, //             POP D
        0x76, //             HLT
    ]);
    assert_eq!(cpu.registers().d, 0xde);
    assert_eq!(cpu.registers().e, 0x12);
    assert_eq!(cpu.registers().sp, 0xff00);
    // High byte above low in memory, stack growing downward.
    assert_eq!(cpu.memory()[0xfeff], 0xde);
    assert_eq!(cpu.memory()[0xfefe], 0x12);
}

#[test]
fn sums_an_array_through_memory() {
    let mut image = vec![
        0x21, 0x20, 0x00, // LXI H,#$0020
        0x06, 0x04, //       MVI B,#$04
        0xaf, //             XRA A
        0x86, //             loop: ADD M
        0x23, //             INX H
        0x05, //             DCR B
        0xc2, 0x06, 0x00, // JNZ loop
        0x32, 0x30, 0x00, // STA $0030
        0x76, //             HLT
    ];
    image.resize(0x20, 0);
    image.extend_from_slice(&[1, 2, 3, 4]);
    let cpu = run(&image);
    assert_eq!(cpu.memory()[0x0030], 10);
    assert_eq!(cpu.registers().a, 10);
}

#[test]
fn fault_reports_the_faulting_opcode_address() {
    let mut cpu = Cpu8080::new(NullBus);
    cpu.load(&[0x00, 0x00, 0xfd]); // NOP / NOP / undocumented CALL prefix
    cpu.step().unwrap();
    cpu.step().unwrap();
    let fault = cpu.step().expect_err("0xfd has no modeled semantics");
    assert_eq!(fault.opcode, 0xfd);
    assert_eq!(fault.registers.pc, 0x0002);
    let dump = fault.to_string();
    assert!(dump.contains("unimplemented instruction"));
    assert!(dump.contains("instruction 0xfd"));
    assert!(dump.contains("PC          0x0002"));
}

#[test]
fn processor_starts_fully_zeroed() {
    let cpu = Cpu8080::new(NullBus);
    assert_eq!(cpu.registers().pc, 0);
    assert_eq!(cpu.registers().sp, 0);
    assert_eq!(cpu.registers().a, 0);
    assert!(!cpu.interrupt_enabled());
    assert!(!cpu.halted());
    assert_eq!(cpu.cycles(), 0);
    assert!(cpu.memory().iter().all(|&byte| byte == 0));
}
