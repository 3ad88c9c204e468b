//! 8080 CPU core with per-cycle execution.

use emu_core::{Cpu, Observable, Ticks, Value};
use tracing::{trace, warn};

use crate::error::Error;
use crate::flags::Flag;
use crate::instruction::{self, Instruction};
use crate::memory::Memory;
use crate::registers::{Reg, RegisterFile};

/// An instruction between fetch and execute.
#[derive(Debug, Clone, Copy)]
struct InFlight {
    instruction: Instruction,
    /// Cycles consumed so far; the fetch cycle counts as 1.
    elapsed: u8,
}

impl InFlight {
    fn is_ready(&self) -> bool {
        self.elapsed >= self.instruction.cycles
    }
}

/// Intel 8080 CPU.
///
/// The CPU owns its memory and registers. Each `tick()` is one clock cycle:
/// - an idle tick fetches the opcode at PC, stages any operand bytes into
///   the Z and W latches and advances PC past the whole instruction;
/// - the tick on which the cycle budget runs out executes the instruction;
/// - every tick in between only counts.
pub struct I8080 {
    pub(crate) regs: RegisterFile,
    pub(crate) memory: Memory,

    /// Instruction register: the most recently fetched opcode.
    opcode: u8,
    /// Instruction waiting out its cycle budget, if any.
    in_flight: Option<InFlight>,
    /// Latched fault; once set, the CPU makes no further progress.
    fault: Option<Error>,

    /// Total cycles elapsed.
    total_ticks: Ticks,
}

impl I8080 {
    /// Create a CPU running the program held in `memory`, starting at 0x0000.
    #[must_use]
    pub fn new(memory: Memory) -> Self {
        Self {
            regs: RegisterFile::new(),
            memory,
            opcode: 0,
            in_flight: None,
            fault: None,
            total_ticks: Ticks::ZERO,
        }
    }

    /// Total cycles elapsed since creation or the last reset.
    #[must_use]
    pub const fn total_ticks(&self) -> Ticks {
        self.total_ticks
    }

    #[must_use]
    pub const fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    #[must_use]
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Give up the CPU and keep its memory.
    #[must_use]
    pub fn into_memory(self) -> Memory {
        self.memory
    }

    #[must_use]
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.memory.read_byte(addr)
    }

    #[must_use]
    pub const fn flag(&self, flag: Flag) -> bool {
        self.regs.flag(flag)
    }

    /// The most recently fetched opcode.
    #[must_use]
    pub const fn opcode(&self) -> u8 {
        self.opcode
    }

    /// True while an instruction is between fetch and execute.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The fault that stopped the CPU, if any.
    #[must_use]
    pub const fn fault(&self) -> Option<Error> {
        self.fault
    }

    /// Mutable registers.
    ///
    /// Only available in test builds.
    #[cfg(feature = "test-utils")]
    pub fn registers_mut(&mut self) -> &mut RegisterFile {
        &mut self.regs
    }

    /// Mutable memory.
    ///
    /// Only available in test builds.
    #[cfg(feature = "test-utils")]
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Set the program counter.
    ///
    /// Only available in test builds.
    #[cfg(feature = "test-utils")]
    pub fn set_pc(&mut self, value: u16) {
        self.regs.set_pc(value);
    }

    /// Run until the current (or next) instruction has executed.
    ///
    /// Returns the number of ticks consumed.
    /// Only available in test builds.
    #[cfg(feature = "test-utils")]
    pub fn step(&mut self) -> Result<u32, Error> {
        let mut ticks = 0;
        loop {
            self.tick()?;
            ticks += 1;
            if self.in_flight.is_none() {
                return Ok(ticks);
            }
        }
    }

    /// Fetch the opcode at PC and stage its operand bytes.
    ///
    /// An unknown opcode is rejected before any operand is read, so the
    /// opcode fetch and the PC step past it are the only changes made.
    fn fetch(&mut self) -> Result<InFlight, Error> {
        let address = self.regs.pc();
        self.opcode = self.memory.read_byte(address);
        self.regs.set_pc(address.wrapping_add(1));

        let instruction = match instruction::decode(self.opcode, address) {
            Ok(instruction) => instruction,
            Err(fault) => {
                warn!(%fault, "cpu halted");
                self.fault = Some(fault);
                return Err(fault);
            }
        };

        match instruction.length {
            2 => {
                let z = self.fetch_operand();
                self.regs.set(Reg::Z, z);
            }
            3 => {
                let z = self.fetch_operand();
                let w = self.fetch_operand();
                self.regs.set(Reg::Z, z);
                self.regs.set(Reg::W, w);
            }
            _ => {}
        }

        trace!(
            opcode = self.opcode,
            address,
            length = instruction.length,
            cycles = instruction.cycles,
            "fetched"
        );

        Ok(InFlight {
            instruction,
            elapsed: 1,
        })
    }

    fn fetch_operand(&mut self) -> u8 {
        let pc = self.regs.pc();
        let value = self.memory.read_byte(pc);
        self.regs.set_pc(pc.wrapping_add(1));
        value
    }
}

impl Default for I8080 {
    fn default() -> Self {
        Self::new(Memory::new())
    }
}

// Instruction execution split into separate file for readability
mod execute;

impl Cpu for I8080 {
    type Registers = RegisterFile;
    type Error = Error;

    fn tick(&mut self) -> Result<(), Error> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }
        self.total_ticks += Ticks::new(1);

        let current = match self.in_flight.take() {
            Some(mut current) => {
                current.elapsed += 1;
                current
            }
            None => self.fetch()?,
        };

        if current.is_ready() {
            current.instruction.execute(self);
        } else {
            self.in_flight = Some(current);
        }
        Ok(())
    }

    fn pc(&self) -> u32 {
        u32::from(self.regs.pc())
    }

    fn registers(&self) -> Self::Registers {
        self.regs
    }

    fn reset(&mut self) {
        self.regs = RegisterFile::new();
        self.opcode = 0;
        self.in_flight = None;
        self.fault = None;
        self.total_ticks = Ticks::ZERO;
    }
}

/// Fixed query paths supported by the 8080.
///
/// Memory cells are queried as `mem.XXXX` with a hex address.
const I8080_QUERY_PATHS: &[&str] = &[
    // Registers
    "a", "f", "b", "c", "d", "e", "h", "l",
    // Operand latches
    "w", "z",
    // Register pairs
    "bc", "de", "hl", "wz",
    "sp", "pc",
    // Flags (individual)
    "flags.s", "flags.z", "flags.ac", "flags.p", "flags.c",
    // CPU state
    "ticks", "opcode", "cycle", "busy", "faulted",
];

impl Observable for I8080 {
    fn query(&self, path: &str) -> Option<Value> {
        if let Some(addr) = path.strip_prefix("mem.") {
            let addr = u16::from_str_radix(addr.trim_start_matches("0x"), 16).ok()?;
            return Some(self.memory.read_byte(addr).into());
        }

        match path {
            "a" => Some(self.regs.get(Reg::A).into()),
            "f" => Some(self.regs.get(Reg::F).into()),
            "b" => Some(self.regs.get(Reg::B).into()),
            "c" => Some(self.regs.get(Reg::C).into()),
            "d" => Some(self.regs.get(Reg::D).into()),
            "e" => Some(self.regs.get(Reg::E).into()),
            "h" => Some(self.regs.get(Reg::H).into()),
            "l" => Some(self.regs.get(Reg::L).into()),
            "w" => Some(self.regs.get(Reg::W).into()),
            "z" => Some(self.regs.get(Reg::Z).into()),

            "bc" => Some(self.regs.bc().into()),
            "de" => Some(self.regs.de().into()),
            "hl" => Some(self.regs.hl().into()),
            "wz" => Some(self.regs.wz().into()),
            "sp" => Some(self.regs.sp().into()),
            "pc" => Some(self.regs.pc().into()),

            "flags.s" => Some(self.regs.flag(Flag::Sign).into()),
            "flags.z" => Some(self.regs.flag(Flag::Zero).into()),
            "flags.ac" => Some(self.regs.flag(Flag::AuxCarry).into()),
            "flags.p" => Some(self.regs.flag(Flag::Parity).into()),
            "flags.c" => Some(self.regs.flag(Flag::Carry).into()),

            "ticks" => Some(self.total_ticks.get().into()),
            "opcode" => Some(self.opcode.into()),
            "cycle" => Some(self.in_flight.map_or(0, |f| f.elapsed).into()),
            "busy" => Some(self.in_flight.is_some().into()),
            "faulted" => Some(self.fault.is_some().into()),

            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        I8080_QUERY_PATHS
    }
}
