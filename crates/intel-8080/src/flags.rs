//! 8080 flag register bits.
//!
//! Bits 5, 3 and 1 of F are unused and left as they are.

/// Sign flag (bit 7) - set if bit 7 of the result is set.
pub const SF: u8 = 0b1000_0000;

/// Zero flag (bit 6) - set if the result is zero.
pub const ZF: u8 = 0b0100_0000;

/// Auxiliary carry flag (bit 4).
pub const ACF: u8 = 0b0001_0000;

/// Parity flag (bit 2) - set if the result has even parity.
pub const PF: u8 = 0b0000_0100;

/// Carry flag (bit 0).
pub const CF: u8 = 0b0000_0001;

/// A single status bit in F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Sign,
    Zero,
    AuxCarry,
    Parity,
    Carry,
}

impl Flag {
    pub const ALL: [Flag; 5] = [
        Flag::Sign,
        Flag::Zero,
        Flag::AuxCarry,
        Flag::Parity,
        Flag::Carry,
    ];

    /// Bit mask of this flag within F.
    #[must_use]
    pub const fn mask(self) -> u8 {
        match self {
            Flag::Sign => SF,
            Flag::Zero => ZF,
            Flag::AuxCarry => ACF,
            Flag::Parity => PF,
            Flag::Carry => CF,
        }
    }
}
