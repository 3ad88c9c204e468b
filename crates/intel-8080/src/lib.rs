//! Cycle-accurate Intel 8080 execution core.
//!
//! Each call to `tick()` advances exactly one clock cycle. An instruction
//! declared with N cycles occupies N ticks: the first fetches the opcode and
//! stages its operand bytes, the last applies its effects.

mod alu;
mod cpu;
mod error;
mod flags;
mod instruction;
mod memory;
mod registers;

pub use alu::{auxiliary_carry, carry, has_even_parity, is_signed, is_zero, AluOp};
pub use cpu::I8080;
pub use error::Error;
pub use flags::{Flag, ACF, CF, PF, SF, ZF};
pub use instruction::{decode, length_of, Instruction};
pub use memory::{Memory, MEMORY_SIZE};
pub use registers::{Pair, Reg, RegisterFile};
