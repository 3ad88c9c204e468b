//! CPU core trait.

use crate::Ticks;

/// A CPU core.
///
/// CPUs are driven one clock tick at a time. A tick either makes progress
/// or reports a fault that stops the emulated program; there is no retry.
///
/// CPUs expose their internal state for observation and debugging.
pub trait Cpu {
    /// The type used for register inspection.
    type Registers;

    /// The fault a tick can raise.
    type Error;

    /// Advance the CPU by one clock tick.
    fn tick(&mut self) -> Result<(), Self::Error>;

    /// Advance the CPU by multiple ticks, stopping at the first fault.
    ///
    /// Implementations may override for efficiency, but must produce
    /// identical results.
    fn tick_n(&mut self, count: Ticks) -> Result<(), Self::Error> {
        for _ in 0..count.get() {
            self.tick()?;
        }
        Ok(())
    }

    /// Returns the current program counter.
    ///
    /// Returns `u32` so that cores of any address width share the trait.
    /// Narrower CPUs zero-extend.
    fn pc(&self) -> u32;

    /// Returns a snapshot of all registers for inspection.
    fn registers(&self) -> Self::Registers;

    /// Reset the CPU to its initial state.
    fn reset(&mut self);
}
