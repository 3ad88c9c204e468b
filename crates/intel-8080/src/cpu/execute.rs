//! Instruction execution for the 8080.
//!
//! Each routine runs on the final cycle of its instruction. Operand bytes
//! are already in the W/Z latches and PC already points past the
//! instruction, so only control transfers write PC.

use crate::alu::{self, AluOp};
use crate::flags::Flag;
use crate::registers::{Pair, Reg};

use super::I8080;

/// Register field in bits 5-3.
const fn dst_code(opcode: u8) -> u8 {
    (opcode >> 3) & 7
}

/// Register field in bits 2-0.
const fn src_code(opcode: u8) -> u8 {
    opcode & 7
}

/// Pair field in bits 5-4.
const fn pair(opcode: u8) -> Pair {
    Pair::from_code(opcode >> 4)
}

impl I8080 {
    /// Read register by 3-bit encoding, where 6 is memory at (HL).
    fn get_reg8(&self, code: u8) -> u8 {
        match Reg::from_code(code) {
            Some(reg) => self.regs.get(reg),
            None => self.memory.read_byte(self.regs.hl()),
        }
    }

    /// Write register by 3-bit encoding, where 6 is memory at (HL).
    fn set_reg8(&mut self, code: u8, value: u8) {
        match Reg::from_code(code) {
            Some(reg) => self.regs.set(reg, value),
            None => self.memory.write_byte(self.regs.hl(), value),
        }
    }

    fn set_sign_zero_parity(&mut self, value: u8) {
        self.regs.set_flag(Flag::Sign, alu::is_signed(value));
        self.regs.set_flag(Flag::Zero, alu::is_zero(value));
        self.regs.set_flag(Flag::Parity, alu::has_even_parity(value));
    }

    // NOP
    #[allow(clippy::unused_self)]
    pub(crate) fn nop(&mut self) {}

    // LXI rp, d16
    pub(crate) fn lxi(&mut self) {
        let wz = self.regs.wz();
        self.regs.set_pair(pair(self.opcode), wz);
    }

    // STAX B / STAX D
    pub(crate) fn stax(&mut self) {
        let addr = self.regs.pair(pair(self.opcode));
        self.memory.write_byte(addr, self.regs.a());
    }

    // LDAX B / LDAX D
    pub(crate) fn ldax(&mut self) {
        let addr = self.regs.pair(pair(self.opcode));
        let value = self.memory.read_byte(addr);
        self.regs.set(Reg::A, value);
    }

    // INX rp - no flags
    pub(crate) fn inx(&mut self) {
        let rp = pair(self.opcode);
        self.regs.set_pair(rp, self.regs.pair(rp).wrapping_add(1));
    }

    // DCX rp - no flags
    pub(crate) fn dcx(&mut self) {
        let rp = pair(self.opcode);
        self.regs.set_pair(rp, self.regs.pair(rp).wrapping_sub(1));
    }

    // INR r / INR M - carry unaffected
    pub(crate) fn inr(&mut self) {
        let code = dst_code(self.opcode);
        let value = self.get_reg8(code).wrapping_add(1);
        self.set_reg8(code, value);
        self.set_sign_zero_parity(value);
        self.regs
            .set_flag(Flag::AuxCarry, alu::auxiliary_carry(value, AluOp::Increment));
    }

    // DCR r / DCR M - carry unaffected
    pub(crate) fn dcr(&mut self) {
        let code = dst_code(self.opcode);
        let value = self.get_reg8(code).wrapping_sub(1);
        self.set_reg8(code, value);
        self.set_sign_zero_parity(value);
        self.regs
            .set_flag(Flag::AuxCarry, alu::auxiliary_carry(value, AluOp::Decrement));
    }

    // MVI r, d8 / MVI M, d8
    pub(crate) fn mvi(&mut self) {
        let value = self.regs.get(Reg::Z);
        self.set_reg8(dst_code(self.opcode), value);
    }

    // RLC
    pub(crate) fn rlc(&mut self) {
        let a = self.regs.a();
        self.regs
            .set_flag(Flag::Carry, alu::carry(u32::from(a), AluOp::ShiftLeft));
        self.regs.set(Reg::A, a.rotate_left(1));
    }

    // RRC
    pub(crate) fn rrc(&mut self) {
        let a = self.regs.a();
        self.regs
            .set_flag(Flag::Carry, alu::carry(u32::from(a), AluOp::ShiftRight));
        self.regs.set(Reg::A, a.rotate_right(1));
    }

    // RAL - rotate through carry
    pub(crate) fn ral(&mut self) {
        let a = self.regs.a();
        let carry_in = u8::from(self.regs.flag(Flag::Carry));
        self.regs
            .set_flag(Flag::Carry, alu::carry(u32::from(a), AluOp::ShiftLeft));
        self.regs.set(Reg::A, (a << 1) | carry_in);
    }

    // RAR - rotate through carry
    pub(crate) fn rar(&mut self) {
        let a = self.regs.a();
        let carry_in = u8::from(self.regs.flag(Flag::Carry));
        self.regs
            .set_flag(Flag::Carry, alu::carry(u32::from(a), AluOp::ShiftRight));
        self.regs.set(Reg::A, (a >> 1) | (carry_in << 7));
    }

    // DAD rp - carry only
    pub(crate) fn dad(&mut self) {
        let sum = u32::from(self.regs.hl()) + u32::from(self.regs.pair(pair(self.opcode)));
        self.regs.set_pair(Pair::HL, sum as u16);
        self.regs.set_flag(Flag::Carry, alu::carry(sum, AluOp::Add));
    }

    // SHLD a16 - L to (a16), H to (a16 + 1)
    pub(crate) fn shld(&mut self) {
        self.memory.write_word(self.regs.wz(), self.regs.hl());
    }

    // LHLD a16
    pub(crate) fn lhld(&mut self) {
        let value = self.memory.read_word(self.regs.wz());
        self.regs.set_pair(Pair::HL, value);
    }

    // STA a16
    pub(crate) fn sta(&mut self) {
        self.memory.write_byte(self.regs.wz(), self.regs.a());
    }

    // LDA a16
    pub(crate) fn lda(&mut self) {
        let value = self.memory.read_byte(self.regs.wz());
        self.regs.set(Reg::A, value);
    }

    // CMA
    pub(crate) fn cma(&mut self) {
        self.regs.set(Reg::A, !self.regs.a());
    }

    // STC
    pub(crate) fn stc(&mut self) {
        self.regs.set_flag(Flag::Carry, true);
    }

    // CMC
    pub(crate) fn cmc(&mut self) {
        let carry = self.regs.flag(Flag::Carry);
        self.regs.set_flag(Flag::Carry, !carry);
    }

    // MOV r1, r2 / MOV r, M / MOV M, r
    pub(crate) fn mov(&mut self) {
        let value = self.get_reg8(src_code(self.opcode));
        self.set_reg8(dst_code(self.opcode), value);
    }

    // JMP a16
    pub(crate) fn jmp(&mut self) {
        self.regs.set_pc(self.regs.wz());
    }
}
