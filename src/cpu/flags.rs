/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

/// Even-parity predicate over a byte: true when the number of set bits is
/// even (zero set bits counts as even).
pub fn parity(mut byte: u8) -> bool {
    byte ^= byte >> 4;
    byte ^= byte >> 2;
    byte ^= byte >> 1;
    (byte & 1) == 0
}

/// The five 8080 condition-code bits, stored independently. The packed
/// PSW byte layout only matters for PUSH/POP PSW.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flags {
    pub z: bool,
    pub s: bool,
    pub p: bool,
    pub cy: bool,
    pub ac: bool,
}

impl Flags {
    /// Unpacks the flag byte popped by POP PSW.
    pub fn from_psw(psw: u8) -> Flags {
        Flags {
            cy: (psw & 1) != 0,
            p: (psw & (1 << 2)) != 0,
            ac: (psw & (1 << 4)) != 0,
            z: (psw & (1 << 6)) != 0,
            s: (psw & (1 << 7)) != 0,
        }
    }

    /// Packs the flag byte pushed by PUSH PSW. Bit 1 reads as 1 on the
    /// hardware; bits 3 and 5 read as 0.
    pub fn to_psw(self) -> u8 {
        (self.cy as u8)
            | 0b10
            | ((self.p as u8) << 2)
            | ((self.ac as u8) << 4)
            | ((self.z as u8) << 6)
            | ((self.s as u8) << 7)
    }

    /// Sets zero, sign and parity from an 8-bit result. Carry and
    /// auxiliary carry depend on the operands, so the engine computes
    /// them per instruction group.
    pub fn set_zsp(&mut self, result: u8) {
        self.z = result == 0;
        self.s = (result & 0x80) != 0;
        self.p = parity(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_counts_set_bits() {
        assert!(parity(0x00));
        assert!(!parity(0x01));
        assert!(parity(0xff));
        assert!(parity(0x81));
        assert!(!parity(0x07));
        assert!(parity(0x96));
    }

    #[test]
    fn zsp_of_zero() {
        let mut flags = Flags::default();
        flags.set_zsp(0);
        assert!(flags.z);
        assert!(!flags.s);
        assert!(flags.p);
    }

    #[test]
    fn zsp_of_negative_result() {
        let mut flags = Flags::default();
        flags.set_zsp(0x96);
        assert!(!flags.z);
        assert!(flags.s);
        assert!(flags.p);
    }

    #[test]
    fn psw_round_trip() {
        let flags = Flags { cy: true, s: true, ac: true, z: false, p: false };
        assert_eq!(flags.to_psw(), 0b1001_0011);
        assert_eq!(Flags::from_psw(flags.to_psw()), flags);
    }

    #[test]
    fn psw_bit_one_always_set() {
        assert_eq!(Flags::default().to_psw(), 0b10);
    }
}
