//! Semantic instruction representation.
//!
//! Lowers a shape-level [`Decoded`] record into an [`Op`], one variant per
//! instruction kind with typed operands. The execution unit matches on `Op`
//! exhaustively, so an encoding without semantics can only surface as
//! [`Trap::UnimplementedOpcode`] at lowering time, never as a silent no-op.

use crate::common::error::Trap;
use crate::isa::abi;
use crate::isa::instruction::{Decoded, IType, JType, RType};
use crate::isa::mips32::{funct, opcodes, regimm};

/// Mask for the 20-bit code field of `syscall`/`break` after shifting out `funct`.
const CODE_MASK: u32 = 0xF_FFFF;

/// A fully classified MIPS instruction.
///
/// Register operands are indices 0-31. Signed immediates are stored as `i16`
/// and zero-extended immediates as `u16`, so the extension rule is part of
/// the type.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    // ── SPECIAL: register-register ALU ──
    Add { rd: usize, rs: usize, rt: usize },
    Addu { rd: usize, rs: usize, rt: usize },
    Sub { rd: usize, rs: usize, rt: usize },
    Subu { rd: usize, rs: usize, rt: usize },
    And { rd: usize, rs: usize, rt: usize },
    Or { rd: usize, rs: usize, rt: usize },
    Xor { rd: usize, rs: usize, rt: usize },
    Nor { rd: usize, rs: usize, rt: usize },
    Slt { rd: usize, rs: usize, rt: usize },
    Sltu { rd: usize, rs: usize, rt: usize },

    // ── SPECIAL: shifts ──
    Sll { rd: usize, rt: usize, shamt: u32 },
    Srl { rd: usize, rt: usize, shamt: u32 },
    Sra { rd: usize, rt: usize, shamt: u32 },
    Sllv { rd: usize, rt: usize, rs: usize },
    Srlv { rd: usize, rt: usize, rs: usize },
    Srav { rd: usize, rt: usize, rs: usize },

    // ── SPECIAL: multiply/divide and accumulators ──
    Mult { rs: usize, rt: usize },
    Multu { rs: usize, rt: usize },
    Div { rs: usize, rt: usize },
    Divu { rs: usize, rt: usize },
    Mfhi { rd: usize },
    Mflo { rd: usize },
    Mthi { rs: usize },
    Mtlo { rs: usize },

    // ── SPECIAL: register jumps and traps ──
    Jr { rs: usize },
    /// `rd` is already resolved: an encoded 0 becomes `$ra`.
    Jalr { rd: usize, rs: usize },
    Syscall { code: u32 },
    Break { code: u32 },

    // ── Immediate ALU ──
    Addi { rt: usize, rs: usize, imm: i16 },
    Addiu { rt: usize, rs: usize, imm: i16 },
    Slti { rt: usize, rs: usize, imm: i16 },
    Sltiu { rt: usize, rs: usize, imm: i16 },
    Andi { rt: usize, rs: usize, imm: u16 },
    Ori { rt: usize, rs: usize, imm: u16 },
    Xori { rt: usize, rs: usize, imm: u16 },
    Lui { rt: usize, imm: u16 },

    // ── Branches (offset in instructions, relative to PC + 4) ──
    Beq { rs: usize, rt: usize, offset: i16 },
    Bne { rs: usize, rt: usize, offset: i16 },
    Blez { rs: usize, offset: i16 },
    Bgtz { rs: usize, offset: i16 },
    Bltz { rs: usize, offset: i16 },
    Bgez { rs: usize, offset: i16 },
    Bltzal { rs: usize, offset: i16 },
    Bgezal { rs: usize, offset: i16 },

    // ── Absolute jumps ──
    J { target: u32 },
    Jal { target: u32 },

    // ── Loads ──
    Lb { rt: usize, base: usize, offset: i16 },
    Lbu { rt: usize, base: usize, offset: i16 },
    Lh { rt: usize, base: usize, offset: i16 },
    Lhu { rt: usize, base: usize, offset: i16 },
    Lw { rt: usize, base: usize, offset: i16 },
    Lwl { rt: usize, base: usize, offset: i16 },
    Lwr { rt: usize, base: usize, offset: i16 },

    // ── Stores ──
    Sb { rt: usize, base: usize, offset: i16 },
    Sh { rt: usize, base: usize, offset: i16 },
    Sw { rt: usize, base: usize, offset: i16 },
    Swl { rt: usize, base: usize, offset: i16 },
    Swr { rt: usize, base: usize, offset: i16 },
}

/// Coarse instruction category used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpClass {
    /// Arithmetic, logical, comparison and `lui`.
    Alu,
    /// Constant and variable shifts.
    Shift,
    /// Multiply, divide and HI/LO moves.
    MulDiv,
    /// Conditional branches.
    Branch,
    /// `j`, `jal`, `jr`, `jalr`.
    Jump,
    /// Memory loads.
    Load,
    /// Memory stores.
    Store,
    /// `syscall` and `break`.
    System,
}

impl Op {
    /// Returns the statistics category of this instruction.
    pub fn class(&self) -> OpClass {
        match self {
            Self::Add { .. }
            | Self::Addu { .. }
            | Self::Sub { .. }
            | Self::Subu { .. }
            | Self::And { .. }
            | Self::Or { .. }
            | Self::Xor { .. }
            | Self::Nor { .. }
            | Self::Slt { .. }
            | Self::Sltu { .. }
            | Self::Addi { .. }
            | Self::Addiu { .. }
            | Self::Slti { .. }
            | Self::Sltiu { .. }
            | Self::Andi { .. }
            | Self::Ori { .. }
            | Self::Xori { .. }
            | Self::Lui { .. } => OpClass::Alu,
            Self::Sll { .. }
            | Self::Srl { .. }
            | Self::Sra { .. }
            | Self::Sllv { .. }
            | Self::Srlv { .. }
            | Self::Srav { .. } => OpClass::Shift,
            Self::Mult { .. }
            | Self::Multu { .. }
            | Self::Div { .. }
            | Self::Divu { .. }
            | Self::Mfhi { .. }
            | Self::Mflo { .. }
            | Self::Mthi { .. }
            | Self::Mtlo { .. } => OpClass::MulDiv,
            Self::Beq { .. }
            | Self::Bne { .. }
            | Self::Blez { .. }
            | Self::Bgtz { .. }
            | Self::Bltz { .. }
            | Self::Bgez { .. }
            | Self::Bltzal { .. }
            | Self::Bgezal { .. } => OpClass::Branch,
            Self::J { .. } | Self::Jal { .. } | Self::Jr { .. } | Self::Jalr { .. } => {
                OpClass::Jump
            }
            Self::Lb { .. }
            | Self::Lbu { .. }
            | Self::Lh { .. }
            | Self::Lhu { .. }
            | Self::Lw { .. }
            | Self::Lwl { .. }
            | Self::Lwr { .. } => OpClass::Load,
            Self::Sb { .. }
            | Self::Sh { .. }
            | Self::Sw { .. }
            | Self::Swl { .. }
            | Self::Swr { .. } => OpClass::Store,
            Self::Syscall { .. } | Self::Break { .. } => OpClass::System,
        }
    }
}

impl TryFrom<Decoded> for Op {
    type Error = Trap;

    fn try_from(decoded: Decoded) -> Result<Self, Self::Error> {
        let op = match decoded {
            Decoded::R(r) => lower_special(r),
            Decoded::I(i) => lower_immediate(i),
            Decoded::J(j) => lower_jump(j),
        };
        op.ok_or_else(|| Trap::UnimplementedOpcode(decoded.raw()))
    }
}

/// Lowers an opcode-0 record by its function code.
fn lower_special(r: RType) -> Option<Op> {
    let RType {
        rs,
        rt,
        rd,
        shamt,
        funct,
        ..
    } = r;
    let code = (Decoded::R(r).raw() >> 6) & CODE_MASK;

    let op = match funct {
        funct::SLL => Op::Sll { rd, rt, shamt },
        funct::SRL => Op::Srl { rd, rt, shamt },
        funct::SRA => Op::Sra { rd, rt, shamt },
        funct::SLLV => Op::Sllv { rd, rt, rs },
        funct::SRLV => Op::Srlv { rd, rt, rs },
        funct::SRAV => Op::Srav { rd, rt, rs },
        funct::JR => Op::Jr { rs },
        funct::JALR => Op::Jalr {
            rd: if rd == abi::REG_ZERO { abi::REG_RA } else { rd },
            rs,
        },
        funct::SYSCALL => Op::Syscall { code },
        funct::BREAK => Op::Break { code },
        funct::MFHI => Op::Mfhi { rd },
        funct::MTHI => Op::Mthi { rs },
        funct::MFLO => Op::Mflo { rd },
        funct::MTLO => Op::Mtlo { rs },
        funct::MULT => Op::Mult { rs, rt },
        funct::MULTU => Op::Multu { rs, rt },
        funct::DIV => Op::Div { rs, rt },
        funct::DIVU => Op::Divu { rs, rt },
        funct::ADD => Op::Add { rd, rs, rt },
        funct::ADDU => Op::Addu { rd, rs, rt },
        funct::SUB => Op::Sub { rd, rs, rt },
        funct::SUBU => Op::Subu { rd, rs, rt },
        funct::AND => Op::And { rd, rs, rt },
        funct::OR => Op::Or { rd, rs, rt },
        funct::XOR => Op::Xor { rd, rs, rt },
        funct::NOR => Op::Nor { rd, rs, rt },
        funct::SLT => Op::Slt { rd, rs, rt },
        funct::SLTU => Op::Sltu { rd, rs, rt },
        _ => return None,
    };
    Some(op)
}

/// Lowers a register-immediate record by its opcode (and `rt` for REGIMM).
fn lower_immediate(i: IType) -> Option<Op> {
    let IType { opcode, rs, rt, imm } = i;
    let simm = imm as i16;

    let op = match opcode {
        opcodes::OP_REGIMM => match rt {
            regimm::BLTZ => Op::Bltz { rs, offset: simm },
            regimm::BGEZ => Op::Bgez { rs, offset: simm },
            regimm::BLTZAL => Op::Bltzal { rs, offset: simm },
            regimm::BGEZAL => Op::Bgezal { rs, offset: simm },
            _ => return None,
        },
        opcodes::OP_BEQ => Op::Beq {
            rs,
            rt,
            offset: simm,
        },
        opcodes::OP_BNE => Op::Bne {
            rs,
            rt,
            offset: simm,
        },
        opcodes::OP_BLEZ => Op::Blez { rs, offset: simm },
        opcodes::OP_BGTZ => Op::Bgtz { rs, offset: simm },
        opcodes::OP_ADDI => Op::Addi { rt, rs, imm: simm },
        opcodes::OP_ADDIU => Op::Addiu { rt, rs, imm: simm },
        opcodes::OP_SLTI => Op::Slti { rt, rs, imm: simm },
        opcodes::OP_SLTIU => Op::Sltiu { rt, rs, imm: simm },
        opcodes::OP_ANDI => Op::Andi { rt, rs, imm },
        opcodes::OP_ORI => Op::Ori { rt, rs, imm },
        opcodes::OP_XORI => Op::Xori { rt, rs, imm },
        opcodes::OP_LUI => Op::Lui { rt, imm },
        opcodes::OP_LB => Op::Lb {
            rt,
            base: rs,
            offset: simm,
        },
        opcodes::OP_LH => Op::Lh {
            rt,
            base: rs,
            offset: simm,
        },
        opcodes::OP_LWL => Op::Lwl {
            rt,
            base: rs,
            offset: simm,
        },
        opcodes::OP_LW => Op::Lw {
            rt,
            base: rs,
            offset: simm,
        },
        opcodes::OP_LBU => Op::Lbu {
            rt,
            base: rs,
            offset: simm,
        },
        opcodes::OP_LHU => Op::Lhu {
            rt,
            base: rs,
            offset: simm,
        },
        opcodes::OP_LWR => Op::Lwr {
            rt,
            base: rs,
            offset: simm,
        },
        opcodes::OP_SB => Op::Sb {
            rt,
            base: rs,
            offset: simm,
        },
        opcodes::OP_SH => Op::Sh {
            rt,
            base: rs,
            offset: simm,
        },
        opcodes::OP_SWL => Op::Swl {
            rt,
            base: rs,
            offset: simm,
        },
        opcodes::OP_SW => Op::Sw {
            rt,
            base: rs,
            offset: simm,
        },
        opcodes::OP_SWR => Op::Swr {
            rt,
            base: rs,
            offset: simm,
        },
        _ => return None,
    };
    Some(op)
}

/// Lowers a jump record.
fn lower_jump(j: JType) -> Option<Op> {
    match j.opcode {
        opcodes::OP_J => Some(Op::J { target: j.target }),
        opcodes::OP_JAL => Some(Op::Jal { target: j.target }),
        _ => None,
    }
}
