//! Faults raised by the execution core.

use thiserror::Error;

/// A fault that stops the emulated program.
///
/// There is no recovery: neither the length nor the timing of an unknown
/// opcode is known, so execution cannot safely continue past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The opcode fetched at `address` has no entry in the instruction table.
    #[error("unimplemented opcode {opcode:#04X} at {address:#06X}")]
    UnimplementedOpcode { opcode: u8, address: u16 },
}
