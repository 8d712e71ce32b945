//! Instruction Disassembler for MIPS32.
//!
//! Converts a 32-bit instruction word into a human-readable mnemonic
//! string for debug tracing, logging, and fault diagnostics.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! let text = disassemble(0x0085_1021); // ADDU $v0, $a0, $a1
//! assert_eq!(text, "addu $v0, $a0, $a1");
//! ```

use std::fmt;

use crate::isa::abi;
use crate::isa::decode::decode;
use crate::isa::op::Op;

/// Formats a register operand with its ABI name.
struct Reg(usize);

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", abi::name(self.0))
    }
}

/// Disassembles a 32-bit MIPS instruction into a human-readable string.
///
/// Returns a mnemonic like `"addu $v0, $a0, $a1"`, or `"unknown 0x........"`
/// for encodings without semantics.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction word.
pub fn disassemble(inst: u32) -> String {
    if inst == 0 {
        return "nop".to_string();
    }
    Op::try_from(decode(inst)).map_or_else(|_| format!("unknown {inst:#010x}"), |op| op.to_string())
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Add { rd, rs, rt } => rrr(f, "add", rd, rs, rt),
            Self::Addu { rd, rs, rt } => rrr(f, "addu", rd, rs, rt),
            Self::Sub { rd, rs, rt } => rrr(f, "sub", rd, rs, rt),
            Self::Subu { rd, rs, rt } => rrr(f, "subu", rd, rs, rt),
            Self::And { rd, rs, rt } => rrr(f, "and", rd, rs, rt),
            Self::Or { rd, rs, rt } => rrr(f, "or", rd, rs, rt),
            Self::Xor { rd, rs, rt } => rrr(f, "xor", rd, rs, rt),
            Self::Nor { rd, rs, rt } => rrr(f, "nor", rd, rs, rt),
            Self::Slt { rd, rs, rt } => rrr(f, "slt", rd, rs, rt),
            Self::Sltu { rd, rs, rt } => rrr(f, "sltu", rd, rs, rt),

            Self::Sll { rd, rt, shamt } => write!(f, "sll {}, {}, {shamt}", Reg(rd), Reg(rt)),
            Self::Srl { rd, rt, shamt } => write!(f, "srl {}, {}, {shamt}", Reg(rd), Reg(rt)),
            Self::Sra { rd, rt, shamt } => write!(f, "sra {}, {}, {shamt}", Reg(rd), Reg(rt)),
            Self::Sllv { rd, rt, rs } => rrr(f, "sllv", rd, rt, rs),
            Self::Srlv { rd, rt, rs } => rrr(f, "srlv", rd, rt, rs),
            Self::Srav { rd, rt, rs } => rrr(f, "srav", rd, rt, rs),

            Self::Mult { rs, rt } => write!(f, "mult {}, {}", Reg(rs), Reg(rt)),
            Self::Multu { rs, rt } => write!(f, "multu {}, {}", Reg(rs), Reg(rt)),
            Self::Div { rs, rt } => write!(f, "div {}, {}", Reg(rs), Reg(rt)),
            Self::Divu { rs, rt } => write!(f, "divu {}, {}", Reg(rs), Reg(rt)),
            Self::Mfhi { rd } => write!(f, "mfhi {}", Reg(rd)),
            Self::Mflo { rd } => write!(f, "mflo {}", Reg(rd)),
            Self::Mthi { rs } => write!(f, "mthi {}", Reg(rs)),
            Self::Mtlo { rs } => write!(f, "mtlo {}", Reg(rs)),

            Self::Jr { rs } => write!(f, "jr {}", Reg(rs)),
            Self::Jalr { rd, rs } => write!(f, "jalr {}, {}", Reg(rd), Reg(rs)),
            Self::Syscall { .. } => write!(f, "syscall"),
            Self::Break { code } => write!(f, "break {code}"),

            Self::Addi { rt, rs, imm } => write!(f, "addi {}, {}, {imm}", Reg(rt), Reg(rs)),
            Self::Addiu { rt, rs, imm } => write!(f, "addiu {}, {}, {imm}", Reg(rt), Reg(rs)),
            Self::Slti { rt, rs, imm } => write!(f, "slti {}, {}, {imm}", Reg(rt), Reg(rs)),
            Self::Sltiu { rt, rs, imm } => write!(f, "sltiu {}, {}, {imm}", Reg(rt), Reg(rs)),
            Self::Andi { rt, rs, imm } => write!(f, "andi {}, {}, {imm:#x}", Reg(rt), Reg(rs)),
            Self::Ori { rt, rs, imm } => write!(f, "ori {}, {}, {imm:#x}", Reg(rt), Reg(rs)),
            Self::Xori { rt, rs, imm } => write!(f, "xori {}, {}, {imm:#x}", Reg(rt), Reg(rs)),
            Self::Lui { rt, imm } => write!(f, "lui {}, {imm:#x}", Reg(rt)),

            Self::Beq { rs, rt, offset } => write!(f, "beq {}, {}, {offset}", Reg(rs), Reg(rt)),
            Self::Bne { rs, rt, offset } => write!(f, "bne {}, {}, {offset}", Reg(rs), Reg(rt)),
            Self::Blez { rs, offset } => write!(f, "blez {}, {offset}", Reg(rs)),
            Self::Bgtz { rs, offset } => write!(f, "bgtz {}, {offset}", Reg(rs)),
            Self::Bltz { rs, offset } => write!(f, "bltz {}, {offset}", Reg(rs)),
            Self::Bgez { rs, offset } => write!(f, "bgez {}, {offset}", Reg(rs)),
            Self::Bltzal { rs, offset } => write!(f, "bltzal {}, {offset}", Reg(rs)),
            Self::Bgezal { rs, offset } => write!(f, "bgezal {}, {offset}", Reg(rs)),

            Self::J { target } => write!(f, "j {:#x}", target << 2),
            Self::Jal { target } => write!(f, "jal {:#x}", target << 2),

            Self::Lb { rt, base, offset } => mem(f, "lb", rt, base, offset),
            Self::Lbu { rt, base, offset } => mem(f, "lbu", rt, base, offset),
            Self::Lh { rt, base, offset } => mem(f, "lh", rt, base, offset),
            Self::Lhu { rt, base, offset } => mem(f, "lhu", rt, base, offset),
            Self::Lw { rt, base, offset } => mem(f, "lw", rt, base, offset),
            Self::Lwl { rt, base, offset } => mem(f, "lwl", rt, base, offset),
            Self::Lwr { rt, base, offset } => mem(f, "lwr", rt, base, offset),
            Self::Sb { rt, base, offset } => mem(f, "sb", rt, base, offset),
            Self::Sh { rt, base, offset } => mem(f, "sh", rt, base, offset),
            Self::Sw { rt, base, offset } => mem(f, "sw", rt, base, offset),
            Self::Swl { rt, base, offset } => mem(f, "swl", rt, base, offset),
            Self::Swr { rt, base, offset } => mem(f, "swr", rt, base, offset),
        }
    }
}

/// Three-register form: `op a, b, c`.
fn rrr(f: &mut fmt::Formatter<'_>, name: &str, a: usize, b: usize, c: usize) -> fmt::Result {
    write!(f, "{name} {}, {}, {}", Reg(a), Reg(b), Reg(c))
}

/// Base-plus-offset memory form: `op rt, offset(base)`.
fn mem(f: &mut fmt::Formatter<'_>, name: &str, rt: usize, base: usize, offset: i16) -> fmt::Result {
    write!(f, "{name} {}, {offset}({})", Reg(rt), Reg(base))
}
