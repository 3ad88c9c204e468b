//! Core traits and types for cycle-accurate emulation.
//!
//! A CPU advances one clock tick at a time when driven by its host. All
//! timing is expressed in ticks; pacing against wall-clock time is the
//! host's job.

mod cpu;
mod observable;
mod ticks;

pub use cpu::Cpu;
pub use observable::{Observable, Value};
pub use ticks::Ticks;
