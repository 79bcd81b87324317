//! Flags register.
//!
//! Four sticky condition bits summarizing the last flag-affecting result.
//! Zero and sign are recomputed from every destination write; carry and
//! overflow only change when an operation defines them.

use std::fmt;

use serde::Serialize;

/// Sign bit of a 32-bit word.
pub const SIGN_BIT: u32 = 0x8000_0000;

/// Bit position of the zero flag in the packed representation.
const ZERO_BIT: u8 = 0b0001;
/// Bit position of the carry flag in the packed representation.
const CARRY_BIT: u8 = 0b0010;
/// Bit position of the overflow flag in the packed representation.
const OVERFLOW_BIT: u8 = 0b0100;
/// Bit position of the sign flag in the packed representation.
const SIGN_FLAG_BIT: u8 = 0b1000;

/// The processor flags register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Flags {
    /// Set when the last result was zero.
    pub zero: bool,
    /// Set when bit 31 of the last result was one.
    pub sign: bool,
    /// Unsigned carry out (or borrow, for subtraction).
    pub carry: bool,
    /// Signed overflow.
    pub overflow: bool,
}

impl Flags {
    /// Recomputes zero and sign from a freshly written register value.
    #[inline]
    pub fn update_zero_sign(&mut self, value: u32) {
        self.zero = value == 0;
        self.sign = value & SIGN_BIT != 0;
    }

    /// Applies carry and overflow where the operation defines them.
    ///
    /// `None` leaves the corresponding flag untouched.
    #[inline]
    pub fn apply(&mut self, carry: Option<bool>, overflow: Option<bool>) {
        if let Some(c) = carry {
            self.carry = c;
        }
        if let Some(v) = overflow {
            self.overflow = v;
        }
    }

    /// Packs the flags into a nibble: bit 0 Z, bit 1 C, bit 2 V, bit 3 S.
    pub fn bits(&self) -> u8 {
        let mut bits = 0;
        if self.zero {
            bits |= ZERO_BIT;
        }
        if self.carry {
            bits |= CARRY_BIT;
        }
        if self.overflow {
            bits |= OVERFLOW_BIT;
        }
        if self.sign {
            bits |= SIGN_FLAG_BIT;
        }
        bits
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Z={} S={} C={} V={}",
            u8::from(self.zero),
            u8::from(self.sign),
            u8::from(self.carry),
            u8::from(self.overflow)
        )
    }
}
