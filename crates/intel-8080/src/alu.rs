//! Flag computation for 8080 ALU results.
//!
//! Pure functions: they inspect a value and the kind of operation that
//! produced it, and never touch CPU state.

#![allow(clippy::verbose_bit_mask)] // Clearer to read nibble comparisons.

/// The kind of operation a flag is being computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Increment,
    Decrement,
    Add,
    ShiftLeft,
    ShiftRight,
}

#[must_use]
pub const fn is_zero(value: u8) -> bool {
    value == 0
}

#[must_use]
pub const fn is_signed(value: u8) -> bool {
    value & 0x80 != 0
}

/// True if `value` has an even number of set bits.
#[must_use]
pub const fn has_even_parity(value: u8) -> bool {
    value.count_ones().is_multiple_of(2)
}

/// Auxiliary carry for an increment or decrement.
///
/// `value` is the register *after* the update: an increment sets the flag
/// when its low nibble is 0xF, a decrement when its low nibble is 0x0.
/// Other operations never set it.
#[must_use]
pub const fn auxiliary_carry(value: u8, op: AluOp) -> bool {
    match op {
        AluOp::Increment => value & 0x0F == 0x0F,
        AluOp::Decrement => value & 0x0F == 0x00,
        _ => false,
    }
}

/// Carry out of an addition or a rotate.
///
/// For `Add`, `value` is the raw (unmasked) sum and carry is set when it
/// exceeds 0xFF. For shifts, `value` is the operand before shifting and
/// carry is the bit shifted out.
#[must_use]
pub const fn carry(value: u32, op: AluOp) -> bool {
    match op {
        AluOp::Add => value > 0xFF,
        AluOp::ShiftLeft => value & 0x80 != 0,
        AluOp::ShiftRight => value & 0x01 != 0,
        AluOp::Increment | AluOp::Decrement => false,
    }
}
