//! 8080 register file.
//!
//! All registers live in one packed byte buffer. Pairs are formed from two
//! adjacent bytes, high byte first, so a pair and its halves can never
//! disagree.

use std::fmt;

use crate::flags::Flag;

const B: usize = 0;
const C: usize = 1;
const D: usize = 2;
const E: usize = 3;
const H: usize = 4;
const L: usize = 5;
const A: usize = 6;
const F: usize = 7;
const SP: usize = 8;
const PC: usize = 10;
const W: usize = 12;
const Z: usize = 13;

const SIZE: usize = 14;

/// An 8-bit register.
///
/// `W` and `Z` are the internal latches that hold operand bytes between
/// fetch and execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reg {
    B,
    C,
    D,
    E,
    H,
    L,
    A,
    F,
    W,
    Z,
}

impl Reg {
    const fn index(self) -> usize {
        match self {
            Reg::B => B,
            Reg::C => C,
            Reg::D => D,
            Reg::E => E,
            Reg::H => H,
            Reg::L => L,
            Reg::A => A,
            Reg::F => F,
            Reg::W => W,
            Reg::Z => Z,
        }
    }

    /// Register named by a 3-bit opcode field (B=0 ... L=5, A=7).
    ///
    /// Returns `None` for 6, which names memory at (HL) rather than a
    /// register.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Reg> {
        match code & 7 {
            0 => Some(Reg::B),
            1 => Some(Reg::C),
            2 => Some(Reg::D),
            3 => Some(Reg::E),
            4 => Some(Reg::H),
            5 => Some(Reg::L),
            7 => Some(Reg::A),
            _ => None,
        }
    }
}

/// A 16-bit register pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pair {
    BC,
    DE,
    HL,
    SP,
    PC,
    WZ,
}

impl Pair {
    /// Index of the high byte.
    const fn index(self) -> usize {
        match self {
            Pair::BC => B,
            Pair::DE => D,
            Pair::HL => H,
            Pair::SP => SP,
            Pair::PC => PC,
            Pair::WZ => W,
        }
    }

    /// Pair named by a 2-bit opcode field (BC=0, DE=1, HL=2, SP=3).
    #[must_use]
    pub const fn from_code(code: u8) -> Pair {
        match code & 3 {
            0 => Pair::BC,
            1 => Pair::DE,
            2 => Pair::HL,
            _ => Pair::SP,
        }
    }
}

/// Packed register storage.
///
/// Pure storage: no arithmetic and no knowledge of instruction semantics.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RegisterFile {
    data: [u8; SIZE],
}

impl RegisterFile {
    #[must_use]
    pub const fn new() -> Self {
        Self { data: [0; SIZE] }
    }

    #[must_use]
    pub const fn get(&self, reg: Reg) -> u8 {
        self.data[reg.index()]
    }

    pub fn set(&mut self, reg: Reg, value: u8) {
        self.data[reg.index()] = value;
    }

    #[must_use]
    pub const fn pair(&self, pair: Pair) -> u16 {
        let i = pair.index();
        u16::from_be_bytes([self.data[i], self.data[i + 1]])
    }

    pub fn set_pair(&mut self, pair: Pair, value: u16) {
        let i = pair.index();
        let [hi, lo] = value.to_be_bytes();
        self.data[i] = hi;
        self.data[i + 1] = lo;
    }

    #[must_use]
    pub const fn flag(&self, flag: Flag) -> bool {
        self.data[F] & flag.mask() != 0
    }

    /// Set or clear one flag, leaving the other bits of F untouched.
    pub fn set_flag(&mut self, flag: Flag, on: bool) {
        if on {
            self.data[F] |= flag.mask();
        } else {
            self.data[F] &= !flag.mask();
        }
    }

    #[must_use]
    pub const fn a(&self) -> u8 {
        self.data[A]
    }

    #[must_use]
    pub const fn f(&self) -> u8 {
        self.data[F]
    }

    #[must_use]
    pub const fn bc(&self) -> u16 {
        self.pair(Pair::BC)
    }

    #[must_use]
    pub const fn de(&self) -> u16 {
        self.pair(Pair::DE)
    }

    #[must_use]
    pub const fn hl(&self) -> u16 {
        self.pair(Pair::HL)
    }

    #[must_use]
    pub const fn sp(&self) -> u16 {
        self.pair(Pair::SP)
    }

    #[must_use]
    pub const fn pc(&self) -> u16 {
        self.pair(Pair::PC)
    }

    #[must_use]
    pub const fn wz(&self) -> u16 {
        self.pair(Pair::WZ)
    }

    pub fn set_pc(&mut self, value: u16) {
        self.set_pair(Pair::PC, value);
    }
}

impl fmt::Debug for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A={:02X} F={:02X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X} WZ={:04X}",
            self.a(),
            self.f(),
            self.bc(),
            self.de(),
            self.hl(),
            self.sp(),
            self.pc(),
            self.wz(),
        )
    }
}
