//! Opcode table for the 8080.
//!
//! Each implemented opcode maps to its length in bytes, its total cycle
//! count, and the routine that applies its effects. The table is built at
//! compile time; lookups are a single index.

use crate::cpu::I8080;
use crate::error::Error;

/// Routine that applies an instruction's effects to the CPU.
pub type Execute = fn(&mut I8080);

/// Static metadata for one opcode.
#[derive(Debug, Clone, Copy)]
pub struct Instruction {
    pub opcode: u8,
    /// Length in bytes, including the opcode (1-3).
    pub length: u8,
    /// Total clock cycles, including the fetch cycle.
    pub cycles: u8,
    execute: Execute,
}

impl Instruction {
    const fn new(opcode: u8, length: u8, cycles: u8, execute: Execute) -> Self {
        Self {
            opcode,
            length,
            cycles,
            execute,
        }
    }

    /// Apply this instruction's effects.
    pub(crate) fn execute(&self, cpu: &mut I8080) {
        (self.execute)(cpu);
    }
}

/// Look up the instruction for `opcode`, fetched from `address`.
pub fn decode(opcode: u8, address: u16) -> Result<Instruction, Error> {
    TABLE[usize::from(opcode)].ok_or(Error::UnimplementedOpcode { opcode, address })
}

/// Length in bytes of `opcode`, or `None` if it is not implemented.
#[must_use]
pub fn length_of(opcode: u8) -> Option<u8> {
    TABLE[usize::from(opcode)].map(|i| i.length)
}

static TABLE: [Option<Instruction>; 256] = build_table();

const fn build_table() -> [Option<Instruction>; 256] {
    let mut t: [Option<Instruction>; 256] = [None; 256];

    t[0x00] = Some(Instruction::new(0x00, 1, 4, I8080::nop));

    // Register pair group: rp in bits 5-4.
    let mut rp = 0;
    while rp < 4 {
        let base = rp << 4;
        set(&mut t, base | 0x01, 3, 10, I8080::lxi);
        set(&mut t, base | 0x03, 1, 5, I8080::inx);
        set(&mut t, base | 0x09, 1, 10, I8080::dad);
        set(&mut t, base | 0x0B, 1, 5, I8080::dcx);
        rp += 1;
    }

    set(&mut t, 0x02, 1, 7, I8080::stax);
    set(&mut t, 0x12, 1, 7, I8080::stax);
    set(&mut t, 0x0A, 1, 7, I8080::ldax);
    set(&mut t, 0x1A, 1, 7, I8080::ldax);

    // Single register group: r in bits 5-3, 6 is memory at (HL).
    let mut r = 0;
    while r < 8 {
        let base = r << 3;
        let memory = r == 6;
        set(&mut t, base | 0x04, 1, if memory { 10 } else { 5 }, I8080::inr);
        set(&mut t, base | 0x05, 1, if memory { 10 } else { 5 }, I8080::dcr);
        set(&mut t, base | 0x06, 2, if memory { 10 } else { 7 }, I8080::mvi);
        r += 1;
    }

    set(&mut t, 0x07, 1, 4, I8080::rlc);
    set(&mut t, 0x0F, 1, 4, I8080::rrc);
    set(&mut t, 0x17, 1, 4, I8080::ral);
    set(&mut t, 0x1F, 1, 4, I8080::rar);

    set(&mut t, 0x22, 3, 16, I8080::shld);
    set(&mut t, 0x2A, 3, 16, I8080::lhld);
    set(&mut t, 0x32, 3, 13, I8080::sta);
    set(&mut t, 0x3A, 3, 13, I8080::lda);

    set(&mut t, 0x2F, 1, 4, I8080::cma);
    set(&mut t, 0x37, 1, 4, I8080::stc);
    set(&mut t, 0x3F, 1, 4, I8080::cmc);

    // MOV dst, src. 0x76 (MOV M, M) is HLT and stays out.
    let mut op = 0x40;
    while op < 0x80 {
        if op != 0x76 {
            let memory = (op >> 3) & 7 == 6 || op & 7 == 6;
            set(&mut t, op, 1, if memory { 7 } else { 5 }, I8080::mov);
        }
        op += 1;
    }

    set(&mut t, 0xC3, 3, 10, I8080::jmp);

    t
}

const fn set(
    table: &mut [Option<Instruction>; 256],
    opcode: usize,
    length: u8,
    cycles: u8,
    execute: Execute,
) {
    table[opcode] = Some(Instruction::new(opcode as u8, length, cycles, execute));
}
