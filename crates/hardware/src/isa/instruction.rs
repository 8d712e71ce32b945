//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and the three operand-record shapes
//! (R, I, J) that a 32-bit MIPS instruction word decodes into.

/// Bit shift of the opcode field (bits 26-31).
pub const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the opcode field after shifting (6 bits).
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit shift of the `rs` field (bits 21-25).
pub const RS_SHIFT: u32 = 21;
/// Bit shift of the `rt` field (bits 16-20).
pub const RT_SHIFT: u32 = 16;
/// Bit shift of the `rd` field (bits 11-15).
pub const RD_SHIFT: u32 = 11;
/// Bit shift of the `shamt` field (bits 6-10).
pub const SHAMT_SHIFT: u32 = 6;
/// Bit mask for any 5-bit register or shift field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the `funct` field (bits 0-5).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit immediate (bits 0-15).
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump target (bits 0-25).
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every field is extracted regardless of format; which ones are meaningful
/// depends on the opcode.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 26-31).
    fn opcode(&self) -> u32;

    /// Extracts the `rs` register field (bits 21-25).
    fn rs(&self) -> usize;

    /// Extracts the `rt` register field (bits 16-20).
    fn rt(&self) -> usize;

    /// Extracts the `rd` register field (bits 11-15).
    fn rd(&self) -> usize;

    /// Extracts the shift amount (bits 6-10).
    fn shamt(&self) -> u32;

    /// Extracts the function code (bits 0-5).
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate (bits 0-15), not sign-extended.
    fn imm16(&self) -> u16;

    /// Extracts the raw 26-bit jump target (bits 0-25).
    fn target26(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u16 {
        (self & IMM_MASK) as u16
    }

    #[inline(always)]
    fn target26(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// Register-register operand record (opcode 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RType {
    /// Primary opcode (always 0 for decoded R-shapes).
    pub opcode: u32,
    /// First source register.
    pub rs: usize,
    /// Second source register.
    pub rt: usize,
    /// Destination register.
    pub rd: usize,
    /// Constant shift amount.
    pub shamt: u32,
    /// Function code selecting the operation.
    pub funct: u32,
}

/// Register-immediate operand record.
///
/// The immediate is stored raw; sign- or zero-extension is the consumer's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IType {
    /// Primary opcode.
    pub opcode: u32,
    /// Source / base register.
    pub rs: usize,
    /// Destination register, second source, or REGIMM selector.
    pub rt: usize,
    /// Raw 16-bit immediate.
    pub imm: u16,
}

/// Jump operand record (opcodes 2 and 3).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JType {
    /// Primary opcode.
    pub opcode: u32,
    /// Raw 26-bit word index of the target.
    pub target: u32,
}

/// A decoded instruction in one of the three MIPS encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// Register-register shape.
    R(RType),
    /// Register-immediate shape.
    I(IType),
    /// Jump shape.
    J(JType),
}

impl Decoded {
    /// Returns the primary opcode of the record.
    pub fn opcode(&self) -> u32 {
        match self {
            Self::R(r) => r.opcode,
            Self::I(i) => i.opcode,
            Self::J(j) => j.opcode,
        }
    }

    /// Re-encodes the record into the instruction word it was decoded from.
    pub fn raw(&self) -> u32 {
        match *self {
            Self::R(r) => {
                (r.opcode & OPCODE_MASK) << OPCODE_SHIFT
                    | (r.rs as u32 & REG_MASK) << RS_SHIFT
                    | (r.rt as u32 & REG_MASK) << RT_SHIFT
                    | (r.rd as u32 & REG_MASK) << RD_SHIFT
                    | (r.shamt & REG_MASK) << SHAMT_SHIFT
                    | (r.funct & FUNCT_MASK)
            }
            Self::I(i) => {
                (i.opcode & OPCODE_MASK) << OPCODE_SHIFT
                    | (i.rs as u32 & REG_MASK) << RS_SHIFT
                    | (i.rt as u32 & REG_MASK) << RT_SHIFT
                    | u32::from(i.imm)
            }
            Self::J(j) => (j.opcode & OPCODE_MASK) << OPCODE_SHIFT | (j.target & TARGET_MASK),
        }
    }
}
