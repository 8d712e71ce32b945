//! Instruction Execution.
//!
//! This module applies one decoded [`Op`] to the CPU state. It performs the following:
//! 1. **Operand Fetch:** Reads source registers (`$zero` always reads 0).
//! 2. **Dispatch:** Routes the operation to the ALU, BRU or LSU.
//! 3. **Writeback:** Writes the destination register, HI/LO, or memory.
//! 4. **Control Flow:** Returns a [`Directive`]; the PC itself is only updated by
//!    [`Cpu::step`](super::Cpu::step).
//!
//! A trap leaves the destination untouched.

use super::{Cpu, Directive};
use crate::common::error::Trap;
use crate::core::units::alu::{Alu, AluOp, ArithOp, arithmetic};
use crate::core::units::bru::{BranchCond, Bru};
use crate::core::units::lsu::{LoadWidth, Lsu, StoreWidth, unaligned};
use crate::isa::abi;
use crate::isa::op::Op;
use crate::sim::syscall::{SyscallHandler, SyscallOutcome};

impl Cpu {
    /// Executes a single operation at the current PC.
    ///
    /// # Arguments
    ///
    /// * `op`       - The operation to apply.
    /// * `syscalls` - Bridge invoked by `syscall`.
    ///
    /// # Returns
    ///
    /// `Directive::Jump` for taken branches and jumps, `Directive::Advance` otherwise.
    ///
    /// # Errors
    ///
    /// `Trap::ArithmeticEdgeCase` for division by zero or trapping overflow,
    /// `Trap::MemoryFault` from strict memory, `Trap::Breakpoint` for `break`,
    /// `Trap::Exit` when the bridge requests exit.
    pub fn execute(
        &mut self,
        op: Op,
        syscalls: &mut dyn SyscallHandler,
    ) -> Result<Directive, Trap> {
        match op {
            Op::Add { rd, rs, rt } => self.add_sub(ArithOp::Add, rd, rs, self.regs.read(rt)),
            Op::Sub { rd, rs, rt } => self.add_sub(ArithOp::Sub, rd, rs, self.regs.read(rt)),
            Op::Addi { rt, rs, imm } => self.add_sub(ArithOp::Add, rt, rs, sext(imm)),
            Op::Addu { rd, rs, rt } => self.alu_rr(AluOp::Add, rd, rs, rt),
            Op::Subu { rd, rs, rt } => self.alu_rr(AluOp::Sub, rd, rs, rt),
            Op::And { rd, rs, rt } => self.alu_rr(AluOp::And, rd, rs, rt),
            Op::Or { rd, rs, rt } => self.alu_rr(AluOp::Or, rd, rs, rt),
            Op::Xor { rd, rs, rt } => self.alu_rr(AluOp::Xor, rd, rs, rt),
            Op::Nor { rd, rs, rt } => self.alu_rr(AluOp::Nor, rd, rs, rt),
            Op::Slt { rd, rs, rt } => self.alu_rr(AluOp::Slt, rd, rs, rt),
            Op::Sltu { rd, rs, rt } => self.alu_rr(AluOp::Sltu, rd, rs, rt),

            Op::Addiu { rt, rs, imm } => self.alu_ri(AluOp::Add, rt, rs, sext(imm)),
            Op::Slti { rt, rs, imm } => self.alu_ri(AluOp::Slt, rt, rs, sext(imm)),
            Op::Sltiu { rt, rs, imm } => self.alu_ri(AluOp::Sltu, rt, rs, sext(imm)),
            Op::Andi { rt, rs, imm } => self.alu_ri(AluOp::And, rt, rs, self.logical_imm(imm)),
            Op::Ori { rt, rs, imm } => self.alu_ri(AluOp::Or, rt, rs, self.logical_imm(imm)),
            Op::Xori { rt, rs, imm } => self.alu_ri(AluOp::Xor, rt, rs, self.logical_imm(imm)),
            Op::Lui { rt, imm } => {
                self.regs.write(rt, u32::from(imm) << 16);
                Ok(Directive::Advance)
            }

            Op::Sll { rd, rt, shamt } => self.shift(AluOp::Sll, rd, rt, shamt),
            Op::Srl { rd, rt, shamt } => self.shift(AluOp::Srl, rd, rt, shamt),
            Op::Sra { rd, rt, shamt } => self.shift(AluOp::Sra, rd, rt, shamt),
            Op::Sllv { rd, rt, rs } => self.shift(AluOp::Sll, rd, rt, self.regs.read(rs)),
            Op::Srlv { rd, rt, rs } => self.shift(AluOp::Srl, rd, rt, self.regs.read(rs)),
            Op::Srav { rd, rt, rs } => self.shift(AluOp::Sra, rd, rt, self.regs.read(rs)),

            Op::Mult { rs, rt } => self.multiply(rs, rt, true),
            Op::Multu { rs, rt } => self.multiply(rs, rt, false),
            Op::Div { rs, rt } => self.divide(rs, rt, true),
            Op::Divu { rs, rt } => self.divide(rs, rt, false),
            Op::Mfhi { rd } => {
                self.regs.write(rd, self.regs.hi());
                Ok(Directive::Advance)
            }
            Op::Mflo { rd } => {
                self.regs.write(rd, self.regs.lo());
                Ok(Directive::Advance)
            }
            Op::Mthi { rs } => {
                self.regs.set_hi(self.regs.read(rs));
                Ok(Directive::Advance)
            }
            Op::Mtlo { rs } => {
                self.regs.set_lo(self.regs.read(rs));
                Ok(Directive::Advance)
            }

            Op::Jr { rs } => Ok(Directive::Jump(self.regs.read(rs))),
            Op::Jalr { rd, rs } => {
                let target = self.regs.read(rs);
                self.regs.write(rd, Bru::link_address(self.pc));
                Ok(Directive::Jump(target))
            }
            Op::J { target } => Ok(Directive::Jump(Bru::jump_target(self.pc, target))),
            Op::Jal { target } => {
                self.regs.write(abi::REG_RA, Bru::link_address(self.pc));
                Ok(Directive::Jump(Bru::jump_target(self.pc, target)))
            }

            Op::Beq { rs, rt, offset } => self.branch(BranchCond::Eq, rs, rt, offset, false),
            Op::Bne { rs, rt, offset } => self.branch(BranchCond::Ne, rs, rt, offset, false),
            Op::Blez { rs, offset } => self.branch(BranchCond::Lez, rs, 0, offset, false),
            Op::Bgtz { rs, offset } => self.branch(BranchCond::Gtz, rs, 0, offset, false),
            Op::Bltz { rs, offset } => self.branch(BranchCond::Ltz, rs, 0, offset, false),
            Op::Bgez { rs, offset } => self.branch(BranchCond::Gez, rs, 0, offset, false),
            Op::Bltzal { rs, offset } => self.branch(BranchCond::Ltz, rs, 0, offset, true),
            Op::Bgezal { rs, offset } => self.branch(BranchCond::Gez, rs, 0, offset, true),

            Op::Lb { rt, base, offset } => self.load(LoadWidth::Byte, rt, base, offset),
            Op::Lbu { rt, base, offset } => self.load(LoadWidth::ByteUnsigned, rt, base, offset),
            Op::Lh { rt, base, offset } => self.load(LoadWidth::Half, rt, base, offset),
            Op::Lhu { rt, base, offset } => self.load(LoadWidth::HalfUnsigned, rt, base, offset),
            Op::Lw { rt, base, offset } => self.load(LoadWidth::Word, rt, base, offset),
            Op::Lwl { rt, base, offset } => {
                let addr = self.address(base, offset);
                let val = unaligned::load_left(&self.mem, addr, self.regs.read(rt))?;
                self.regs.write(rt, val);
                Ok(Directive::Advance)
            }
            Op::Lwr { rt, base, offset } => {
                let addr = self.address(base, offset);
                let val = unaligned::load_right(&self.mem, addr, self.regs.read(rt))?;
                self.regs.write(rt, val);
                Ok(Directive::Advance)
            }

            Op::Sb { rt, base, offset } => self.store(StoreWidth::Byte, rt, base, offset),
            Op::Sh { rt, base, offset } => self.store(StoreWidth::Half, rt, base, offset),
            Op::Sw { rt, base, offset } => self.store(StoreWidth::Word, rt, base, offset),
            Op::Swl { rt, base, offset } => {
                let addr = self.address(base, offset);
                unaligned::store_left(&mut self.mem, addr, self.regs.read(rt))?;
                Ok(Directive::Advance)
            }
            Op::Swr { rt, base, offset } => {
                let addr = self.address(base, offset);
                unaligned::store_right(&mut self.mem, addr, self.regs.read(rt))?;
                Ok(Directive::Advance)
            }

            Op::Syscall { .. } => self.syscall(syscalls),
            Op::Break { .. } => Err(Trap::Breakpoint(self.pc)),
        }
    }

    /// Trapping add/sub (`add`, `addi`, `sub`). Wraps unless overflow trapping is on.
    fn add_sub(&mut self, op: ArithOp, rd: usize, rs: usize, b: u32) -> Result<Directive, Trap> {
        let a = self.regs.read(rs);
        let val = if self.options.trap_on_overflow {
            arithmetic::execute_checked(op, a, b)?
        } else {
            arithmetic::execute(op, a, b)
        };
        self.regs.write(rd, val);
        Ok(Directive::Advance)
    }

    fn alu_rr(&mut self, op: AluOp, rd: usize, rs: usize, rt: usize) -> Result<Directive, Trap> {
        let val = Alu::execute(op, self.regs.read(rs), self.regs.read(rt));
        self.regs.write(rd, val);
        Ok(Directive::Advance)
    }

    fn alu_ri(&mut self, op: AluOp, rt: usize, rs: usize, imm: u32) -> Result<Directive, Trap> {
        let val = Alu::execute(op, self.regs.read(rs), imm);
        self.regs.write(rt, val);
        Ok(Directive::Advance)
    }

    fn shift(&mut self, op: AluOp, rd: usize, rt: usize, amount: u32) -> Result<Directive, Trap> {
        let val = Alu::execute(op, self.regs.read(rt), amount);
        self.regs.write(rd, val);
        Ok(Directive::Advance)
    }

    fn multiply(&mut self, rs: usize, rt: usize, signed: bool) -> Result<Directive, Trap> {
        let (hi, lo) = arithmetic::multiply(self.regs.read(rs), self.regs.read(rt), signed);
        self.regs.set_hi(hi);
        self.regs.set_lo(lo);
        Ok(Directive::Advance)
    }

    fn divide(&mut self, rs: usize, rt: usize, signed: bool) -> Result<Directive, Trap> {
        let (hi, lo) = arithmetic::divide(self.regs.read(rs), self.regs.read(rt), signed)?;
        self.regs.set_hi(hi);
        self.regs.set_lo(lo);
        Ok(Directive::Advance)
    }

    fn branch(
        &mut self,
        cond: BranchCond,
        rs: usize,
        rt: usize,
        offset: i16,
        link: bool,
    ) -> Result<Directive, Trap> {
        let taken = Bru::taken(cond, self.regs.read(rs), self.regs.read(rt));
        self.stats.record_branch(taken);
        if !taken {
            return Ok(Directive::Advance);
        }
        if link {
            self.regs.write(abi::REG_RA, Bru::link_address(self.pc));
        }
        Ok(Directive::Jump(Bru::branch_target(self.pc, offset)))
    }

    fn address(&self, base: usize, offset: i16) -> u32 {
        Lsu::effective_address(self.regs.read(base), offset)
    }

    fn load(
        &mut self,
        width: LoadWidth,
        rt: usize,
        base: usize,
        offset: i16,
    ) -> Result<Directive, Trap> {
        let val = Lsu::load(&self.mem, self.address(base, offset), width)?;
        self.regs.write(rt, val);
        Ok(Directive::Advance)
    }

    fn store(
        &mut self,
        width: StoreWidth,
        rt: usize,
        base: usize,
        offset: i16,
    ) -> Result<Directive, Trap> {
        let addr = self.address(base, offset);
        Lsu::store(&mut self.mem, addr, self.regs.read(rt), width)?;
        Ok(Directive::Advance)
    }

    fn syscall(&mut self, syscalls: &mut dyn SyscallHandler) -> Result<Directive, Trap> {
        let number = self.regs.read(abi::REG_V0);
        let args = [
            self.regs.read(abi::REG_A0),
            self.regs.read(abi::REG_A1),
            self.regs.read(abi::REG_A2),
            self.regs.read(abi::REG_A3),
        ];
        match syscalls.invoke(number, args, &mut self.mem)? {
            SyscallOutcome::Return(val) => {
                self.regs.write(abi::REG_V0, val);
                self.regs.write(abi::REG_A3, 0);
            }
            SyscallOutcome::Error(errno) => {
                self.regs.write(abi::REG_V0, errno);
                self.regs.write(abi::REG_A3, 1);
            }
            SyscallOutcome::Exit(code) => return Err(Trap::Exit(code)),
        }
        Ok(Directive::Advance)
    }

    fn logical_imm(&self, imm: u16) -> u32 {
        if self.options.zero_extend_logical_imm {
            u32::from(imm)
        } else {
            sext(imm as i16)
        }
    }
}

/// Sign-extends a 16-bit immediate to 32 bits.
#[inline]
fn sext(imm: i16) -> u32 {
    i32::from(imm) as u32
}
