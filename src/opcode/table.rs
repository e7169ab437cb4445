/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use super::{Op, OpcodeMeta};
use super::Cond::*;
use super::Op::*;
use super::Pair as P;
use super::Target as T;

const fn def(op: Op, mnemonic: &'static str, size: u16, cycles: u32) -> OpcodeMeta {
    OpcodeMeta { op, mnemonic, size, cycles }
}

/// The full opcode space, indexed by opcode byte. Conditional CALL/RET
/// entries carry the not-taken state count; all others are unconditional.
/// 0x08/0x10/0x18/0x20/0x28/0x30/0x38 are the undocumented NOP
/// duplicates; 0xCB/0xD9/0xDD/0xED/0xFD keep the length the hardware
/// gives them but have no modeled semantics.
pub static OPCODE_TABLE: [OpcodeMeta; 256] = [
    def(Nop, "NOP", 1, 4),                       // 0x00
    def(Lxi(P::B), "LXI    B,", 3, 10),          // 0x01
    def(Stax(P::B), "STAX   B", 1, 7),           // 0x02
    def(Inx(P::B), "INX    B", 1, 5),            // 0x03
    def(Inr(T::B), "INR    B", 1, 5),            // 0x04
    def(Dcr(T::B), "DCR    B", 1, 5),            // 0x05
    def(Mvi(T::B), "MVI    B,", 2, 7),           // 0x06
    def(Rlc, "RLC", 1, 4),                       // 0x07
    def(Nop, "NOP", 1, 4),                       // 0x08
    def(Dad(P::B), "DAD    B", 1, 10),           // 0x09
    def(Ldax(P::B), "LDAX   B", 1, 7),           // 0x0a
    def(Dcx(P::B), "DCX    B", 1, 5),            // 0x0b
    def(Inr(T::C), "INR    C", 1, 5),            // 0x0c
    def(Dcr(T::C), "DCR    C", 1, 5),            // 0x0d
    def(Mvi(T::C), "MVI    C,", 2, 7),           // 0x0e
    def(Rrc, "RRC", 1, 4),                       // 0x0f
    def(Nop, "NOP", 1, 4),                       // 0x10
    def(Lxi(P::D), "LXI    D,", 3, 10),          // 0x11
    def(Stax(P::D), "STAX   D", 1, 7),           // 0x12
    def(Inx(P::D), "INX    D", 1, 5),            // 0x13
    def(Inr(T::D), "INR    D", 1, 5),            // 0x14
    def(Dcr(T::D), "DCR    D", 1, 5),            // 0x15
    def(Mvi(T::D), "MVI    D,", 2, 7),           // 0x16
    def(Ral, "RAL", 1, 4),                       // 0x17
    def(Nop, "NOP", 1, 4),                       // 0x18
    def(Dad(P::D), "DAD    D", 1, 10),           // 0x19
    def(Ldax(P::D), "LDAX   D", 1, 7),           // 0x1a
    def(Dcx(P::D), "DCX    D", 1, 5),            // 0x1b
    def(Inr(T::E), "INR    E", 1, 5),            // 0x1c
    def(Dcr(T::E), "DCR    E", 1, 5),            // 0x1d
    def(Mvi(T::E), "MVI    E,", 2, 7),           // 0x1e
    def(Rar, "RAR", 1, 4),                       // 0x1f
    def(Nop, "NOP", 1, 4),                       // 0x20
    def(Lxi(P::H), "LXI    H,", 3, 10),          // 0x21
    def(Shld, "SHLD   ", 3, 16),                 // 0x22
    def(Inx(P::H), "INX    H", 1, 5),            // 0x23
    def(Inr(T::H), "INR    H", 1, 5),            // 0x24
    def(Dcr(T::H), "DCR    H", 1, 5),            // 0x25
    def(Mvi(T::H), "MVI    H,", 2, 7),           // 0x26
    def(Daa, "DAA", 1, 4),                       // 0x27
    def(Nop, "NOP", 1, 4),                       // 0x28
    def(Dad(P::H), "DAD    H", 1, 10),           // 0x29
    def(Lhld, "LHLD   ", 3, 16),                 // 0x2a
    def(Dcx(P::H), "DCX    H", 1, 5),            // 0x2b
    def(Inr(T::L), "INR    L", 1, 5),            // 0x2c
    def(Dcr(T::L), "DCR    L", 1, 5),            // 0x2d
    def(Mvi(T::L), "MVI    L,", 2, 7),           // 0x2e
    def(Cma, "CMA", 1, 4),                       // 0x2f
    def(Nop, "NOP", 1, 4),                       // 0x30
    def(Lxi(P::SP), "LXI    SP,", 3, 10),        // 0x31
    def(Sta, "STA    ", 3, 13),                  // 0x32
    def(Inx(P::SP), "INX    SP", 1, 5),          // 0x33
    def(Inr(T::M), "INR    M", 1, 10),           // 0x34
    def(Dcr(T::M), "DCR    M", 1, 10),           // 0x35
    def(Mvi(T::M), "MVI    M,", 2, 10),          // 0x36
    def(Stc, "STC", 1, 4),                       // 0x37
    def(Nop, "NOP", 1, 4),                       // 0x38
    def(Dad(P::SP), "DAD    SP", 1, 10),         // 0x39
    def(Lda, "LDA    ", 3, 13),                  // 0x3a
    def(Dcx(P::SP), "DCX    SP", 1, 5),          // 0x3b
    def(Inr(T::A), "INR    A", 1, 5),            // 0x3c
    def(Dcr(T::A), "DCR    A", 1, 5),            // 0x3d
    def(Mvi(T::A), "MVI    A,", 2, 7),           // 0x3e
    def(Cmc, "CMC", 1, 4),                       // 0x3f
    def(Mov(T::B, T::B), "MOV    B,B", 1, 5),    // 0x40
    def(Mov(T::B, T::C), "MOV    B,C", 1, 5),    // 0x41
    def(Mov(T::B, T::D), "MOV    B,D", 1, 5),    // 0x42
    def(Mov(T::B, T::E), "MOV    B,E", 1, 5),    // 0x43
    def(Mov(T::B, T::H), "MOV    B,H", 1, 5),    // 0x44
    def(Mov(T::B, T::L), "MOV    B,L", 1, 5),    // 0x45
    def(Mov(T::B, T::M), "MOV    B,M", 1, 7),    // 0x46
    def(Mov(T::B, T::A), "MOV    B,A", 1, 5),    // 0x47
    def(Mov(T::C, T::B), "MOV    C,B", 1, 5),    // 0x48
    def(Mov(T::C, T::C), "MOV    C,C", 1, 5),    // 0x49
    def(Mov(T::C, T::D), "MOV    C,D", 1, 5),    // 0x4a
    def(Mov(T::C, T::E), "MOV    C,E", 1, 5),    // 0x4b
    def(Mov(T::C, T::H), "MOV    C,H", 1, 5),    // 0x4c
    def(Mov(T::C, T::L), "MOV    C,L", 1, 5),    // 0x4d
    def(Mov(T::C, T::M), "MOV    C,M", 1, 7),    // 0x4e
    def(Mov(T::C, T::A), "MOV    C,A", 1, 5),    // 0x4f
    def(Mov(T::D, T::B), "MOV    D,B", 1, 5),    // 0x50
    def(Mov(T::D, T::C), "MOV    D,C", 1, 5),    // 0x51
    def(Mov(T::D, T::D), "MOV    D,D", 1, 5),    // 0x52
    def(Mov(T::D, T::E), "MOV    D,E", 1, 5),    // 0x53
    def(Mov(T::D, T::H), "MOV    D,H", 1, 5),    // 0x54
    def(Mov(T::D, T::L), "MOV    D,L", 1, 5),    // 0x55
    def(Mov(T::D, T::M), "MOV    D,M", 1, 7),    // 0x56
    def(Mov(T::D, T::A), "MOV    D,A", 1, 5),    // 0x57
    def(Mov(T::E, T::B), "MOV    E,B", 1, 5),    // 0x58
    def(Mov(T::E, T::C), "MOV    E,C", 1, 5),    // 0x59
    def(Mov(T::E, T::D), "MOV    E,D", 1, 5),    // 0x5a
    def(Mov(T::E, T::E), "MOV    E,E", 1, 5),    // 0x5b
    def(Mov(T::E, T::H), "MOV    E,H", 1, 5),    // 0x5c
    def(Mov(T::E, T::L), "MOV    E,L", 1, 5),    // 0x5d
    def(Mov(T::E, T::M), "MOV    E,M", 1, 7),    // 0x5e
    def(Mov(T::E, T::A), "MOV    E,A", 1, 5),    // 0x5f
    def(Mov(T::H, T::B), "MOV    H,B", 1, 5),    // 0x60
    def(Mov(T::H, T::C), "MOV    H,C", 1, 5),    // 0x61
    def(Mov(T::H, T::D), "MOV    H,D", 1, 5),    // 0x62
    def(Mov(T::H, T::E), "MOV    H,E", 1, 5),    // 0x63
    def(Mov(T::H, T::H), "MOV    H,H", 1, 5),    // 0x64
    def(Mov(T::H, T::L), "MOV    H,L", 1, 5),    // 0x65
    def(Mov(T::H, T::M), "MOV    H,M", 1, 7),    // 0x66
    def(Mov(T::H, T::A), "MOV    H,A", 1, 5),    // 0x67
    def(Mov(T::L, T::B), "MOV    L,B", 1, 5),    // 0x68
    def(Mov(T::L, T::C), "MOV    L,C", 1, 5),    // 0x69
    def(Mov(T::L, T::D), "MOV    L,D", 1, 5),    // 0x6a
    def(Mov(T::L, T::E), "MOV    L,E", 1, 5),    // 0x6b
    def(Mov(T::L, T::H), "MOV    L,H", 1, 5),    // 0x6c
    def(Mov(T::L, T::L), "MOV    L,L", 1, 5),    // 0x6d
    def(Mov(T::L, T::M), "MOV    L,M", 1, 7),    // 0x6e
    def(Mov(T::L, T::A), "MOV    L,A", 1, 5),    // 0x6f
    def(Mov(T::M, T::B), "MOV    M,B", 1, 7),    // 0x70
    def(Mov(T::M, T::C), "MOV    M,C", 1, 7),    // 0x71
    def(Mov(T::M, T::D), "MOV    M,D", 1, 7),    // 0x72
    def(Mov(T::M, T::E), "MOV    M,E", 1, 7),    // 0x73
    def(Mov(T::M, T::H), "MOV    M,H", 1, 7),    // 0x74
    def(Mov(T::M, T::L), "MOV    M,L", 1, 7),    // 0x75
    def(Hlt, "HLT", 1, 7),                       // 0x76
    def(Mov(T::M, T::A), "MOV    M,A", 1, 7),    // 0x77
    def(Mov(T::A, T::B), "MOV    A,B", 1, 5),    // 0x78
    def(Mov(T::A, T::C), "MOV    A,C", 1, 5),    // 0x79
    def(Mov(T::A, T::D), "MOV    A,D", 1, 5),    // 0x7a
    def(Mov(T::A, T::E), "MOV    A,E", 1, 5),    // 0x7b
    def(Mov(T::A, T::H), "MOV    A,H", 1, 5),    // 0x7c
    def(Mov(T::A, T::L), "MOV    A,L", 1, 5),    // 0x7d
    def(Mov(T::A, T::M), "MOV    A,M", 1, 7),    // 0x7e
    def(Mov(T::A, T::A), "MOV    A,A", 1, 5),    // 0x7f
    def(Add(T::B), "ADD    B", 1, 4),            // 0x80
    def(Add(T::C), "ADD    C", 1, 4),            // 0x81
    def(Add(T::D), "ADD    D", 1, 4),            // 0x82
    def(Add(T::E), "ADD    E", 1, 4),            // 0x83
    def(Add(T::H), "ADD    H", 1, 4),            // 0x84
    def(Add(T::L), "ADD    L", 1, 4),            // 0x85
    def(Add(T::M), "ADD    M", 1, 7),            // 0x86
    def(Add(T::A), "ADD    A", 1, 4),            // 0x87
    def(Adc(T::B), "ADC    B", 1, 4),            // 0x88
    def(Adc(T::C), "ADC    C", 1, 4),            // 0x89
    def(Adc(T::D), "ADC    D", 1, 4),            // 0x8a
    def(Adc(T::E), "ADC    E", 1, 4),            // 0x8b
    def(Adc(T::H), "ADC    H", 1, 4),            // 0x8c
    def(Adc(T::L), "ADC    L", 1, 4),            // 0x8d
    def(Adc(T::M), "ADC    M", 1, 7),            // 0x8e
    def(Adc(T::A), "ADC    A", 1, 4),            // 0x8f
    def(Sub(T::B), "SUB    B", 1, 4),            // 0x90
    def(Sub(T::C), "SUB    C", 1, 4),            // 0x91
    def(Sub(T::D), "SUB    D", 1, 4),            // 0x92
    def(Sub(T::E), "SUB    E", 1, 4),            // 0x93
    def(Sub(T::H), "SUB    H", 1, 4),            // 0x94
    def(Sub(T::L), "SUB    L", 1, 4),            // 0x95
    def(Sub(T::M), "SUB    M", 1, 7),            // 0x96
    def(Sub(T::A), "SUB    A", 1, 4),            // 0x97
    def(Sbb(T::B), "SBB    B", 1, 4),            // 0x98
    def(Sbb(T::C), "SBB    C", 1, 4),            // 0x99
    def(Sbb(T::D), "SBB    D", 1, 4),            // 0x9a
    def(Sbb(T::E), "SBB    E", 1, 4),            // 0x9b
    def(Sbb(T::H), "SBB    H", 1, 4),            // 0x9c
    def(Sbb(T::L), "SBB    L", 1, 4),            // 0x9d
    def(Sbb(T::M), "SBB    M", 1, 7),            // 0x9e
    def(Sbb(T::A), "SBB    A", 1, 4),            // 0x9f
    def(Ana(T::B), "ANA    B", 1, 4),            // 0xa0
    def(Ana(T::C), "ANA    C", 1, 4),            // 0xa1
    def(Ana(T::D), "ANA    D", 1, 4),            // 0xa2
    def(Ana(T::E), "ANA    E", 1, 4),            // 0xa3
    def(Ana(T::H), "ANA    H", 1, 4),            // 0xa4
    def(Ana(T::L), "ANA    L", 1, 4),            // 0xa5
    def(Ana(T::M), "ANA    M", 1, 7),            // 0xa6
    def(Ana(T::A), "ANA    A", 1, 4),            // 0xa7
    def(Xra(T::B), "XRA    B", 1, 4),            // 0xa8
    def(Xra(T::C), "XRA    C", 1, 4),            // 0xa9
    def(Xra(T::D), "XRA    D", 1, 4),            // 0xaa
    def(Xra(T::E), "XRA    E", 1, 4),            // 0xab
    def(Xra(T::H), "XRA    H", 1, 4),            // 0xac
    def(Xra(T::L), "XRA    L", 1, 4),            // 0xad
    def(Xra(T::M), "XRA    M", 1, 7),            // 0xae
    def(Xra(T::A), "XRA    A", 1, 4),            // 0xaf
    def(Ora(T::B), "ORA    B", 1, 4),            // 0xb0
    def(Ora(T::C), "ORA    C", 1, 4),            // 0xb1
    def(Ora(T::D), "ORA    D", 1, 4),            // 0xb2
    def(Ora(T::E), "ORA    E", 1, 4),            // 0xb3
    def(Ora(T::H), "ORA    H", 1, 4),            // 0xb4
    def(Ora(T::L), "ORA    L", 1, 4),            // 0xb5
    def(Ora(T::M), "ORA    M", 1, 7),            // 0xb6
    def(Ora(T::A), "ORA    A", 1, 4),            // 0xb7
    def(Cmp(T::B), "CMP    B", 1, 4),            // 0xb8
    def(Cmp(T::C), "CMP    C", 1, 4),            // 0xb9
    def(Cmp(T::D), "CMP    D", 1, 4),            // 0xba
    def(Cmp(T::E), "CMP    E", 1, 4),            // 0xbb
    def(Cmp(T::H), "CMP    H", 1, 4),            // 0xbc
    def(Cmp(T::L), "CMP    L", 1, 4),            // 0xbd
    def(Cmp(T::M), "CMP    M", 1, 7),            // 0xbe
    def(Cmp(T::A), "CMP    A", 1, 4),            // 0xbf
    def(Ret(NonZero), "RNZ", 1, 5),              // 0xc0
    def(Pop(P::B), "POP    B", 1, 10),           // 0xc1
    def(Jmp(NonZero), "JNZ    ", 3, 10),         // 0xc2
    def(Jmp(Always), "JMP    ", 3, 10),          // 0xc3
    def(Call(NonZero), "CNZ    ", 3, 11),        // 0xc4
    def(Push(P::B), "PUSH   B", 1, 11),          // 0xc5
    def(Adi, "ADI    ", 2, 7),                   // 0xc6
    def(Rst(0), "RST    0", 1, 11),              // 0xc7
    def(Ret(Zero), "RZ", 1, 5),                  // 0xc8
    def(Ret(Always), "RET", 1, 10),              // 0xc9
    def(Jmp(Zero), "JZ     ", 3, 10),            // 0xca
    def(Unimplemented, "JMP    ", 3, 10),        // 0xcb
    def(Call(Zero), "CZ     ", 3, 11),           // 0xcc
    def(Call(Always), "CALL   ", 3, 17),         // 0xcd
    def(Aci, "ACI    ", 2, 7),                   // 0xce
    def(Rst(1), "RST    1", 1, 11),              // 0xcf
    def(Ret(NoCarry), "RNC", 1, 5),              // 0xd0
    def(Pop(P::D), "POP    D", 1, 10),           // 0xd1
    def(Jmp(NoCarry), "JNC    ", 3, 10),         // 0xd2
    def(Out, "OUT    ", 2, 10),                  // 0xd3
    def(Call(NoCarry), "CNC    ", 3, 11),        // 0xd4
    def(Push(P::D), "PUSH   D", 1, 11),          // 0xd5
    def(Sui, "SUI    ", 2, 7),                   // 0xd6
    def(Rst(2), "RST    2", 1, 11),              // 0xd7
    def(Ret(Carry), "RC", 1, 5),                 // 0xd8
    def(Unimplemented, "RET", 1, 10),            // 0xd9
    def(Jmp(Carry), "JC     ", 3, 10),           // 0xda
    def(In, "IN     ", 2, 10),                   // 0xdb
    def(Call(Carry), "CC     ", 3, 11),          // 0xdc
    def(Unimplemented, "CALL   ", 3, 17),        // 0xdd
    def(Sbi, "SBI    ", 2, 7),                   // 0xde
    def(Rst(3), "RST    3", 1, 11),              // 0xdf
    def(Ret(ParityOdd), "RPO", 1, 5),            // 0xe0
    def(Pop(P::H), "POP    H", 1, 10),           // 0xe1
    def(Jmp(ParityOdd), "JPO    ", 3, 10),       // 0xe2
    def(Xthl, "XTHL", 1, 18),                    // 0xe3
    def(Call(ParityOdd), "CPO    ", 3, 11),      // 0xe4
    def(Push(P::H), "PUSH   H", 1, 11),          // 0xe5
    def(Ani, "ANI    ", 2, 7),                   // 0xe6
    def(Rst(4), "RST    4", 1, 11),              // 0xe7
    def(Ret(ParityEven), "RPE", 1, 5),           // 0xe8
    def(Pchl, "PCHL", 1, 5),                     // 0xe9
    def(Jmp(ParityEven), "JPE    ", 3, 10),      // 0xea
    def(Xchg, "XCHG", 1, 4),                     // 0xeb
    def(Call(ParityEven), "CPE    ", 3, 11),     // 0xec
    def(Unimplemented, "CALL   ", 3, 17),        // 0xed
    def(Xri, "XRI    ", 2, 7),                   // 0xee
    def(Rst(5), "RST    5", 1, 11),              // 0xef
    def(Ret(Plus), "RP", 1, 5),                  // 0xf0
    def(PopPsw, "POP    PSW", 1, 10),            // 0xf1
    def(Jmp(Plus), "JP     ", 3, 10),            // 0xf2
    def(Di, "DI", 1, 4),                         // 0xf3
    def(Call(Plus), "CP     ", 3, 11),           // 0xf4
    def(PushPsw, "PUSH   PSW", 1, 11),           // 0xf5
    def(Ori, "ORI    ", 2, 7),                   // 0xf6
    def(Rst(6), "RST    6", 1, 11),              // 0xf7
    def(Ret(Minus), "RM", 1, 5),                 // 0xf8
    def(Sphl, "SPHL", 1, 5),                     // 0xf9
    def(Jmp(Minus), "JM     ", 3, 10),           // 0xfa
    def(Ei, "EI", 1, 4),                         // 0xfb
    def(Call(Minus), "CM     ", 3, 11),          // 0xfc
    def(Unimplemented, "CALL   ", 3, 17),        // 0xfd
    def(Cpi, "CPI    ", 2, 7),                   // 0xfe
    def(Rst(7), "RST    7", 1, 11),              // 0xff
];
