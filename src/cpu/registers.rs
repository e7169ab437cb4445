/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use crate::opcode::Pair;

/// The 8080 register file. BC, DE and HL are views over the byte
/// registers, composed as `(high << 8) | low`; they have no storage of
/// their own.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    pub fn pair(&self, pair: Pair) -> u16 {
        match pair {
            Pair::B => ((self.b as u16) << 8) | self.c as u16,
            Pair::D => ((self.d as u16) << 8) | self.e as u16,
            Pair::H => ((self.h as u16) << 8) | self.l as u16,
            Pair::SP => self.sp,
        }
    }

    pub fn set_pair(&mut self, pair: Pair, value: u16) {
        let high = (value >> 8) as u8;
        let low = value as u8;
        match pair {
            Pair::B => {
                self.b = high;
                self.c = low;
            }
            Pair::D => {
                self.d = high;
                self.e = low;
            }
            Pair::H => {
                self.h = high;
                self.l = low;
            }
            Pair::SP => self.sp = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_composition() {
        let regs = Registers { h: 0x12, l: 0x34, ..Default::default() };
        assert_eq!(regs.pair(Pair::H), 0x1234);
    }

    #[test]
    fn pair_round_trips() {
        let mut regs = Registers::default();
        for pair in [Pair::B, Pair::D, Pair::H, Pair::SP] {
            regs.set_pair(pair, 0xbeef);
            assert_eq!(regs.pair(pair), 0xbeef);
        }
        assert_eq!(regs.b, 0xbe);
        assert_eq!(regs.c, 0xef);
    }
}
