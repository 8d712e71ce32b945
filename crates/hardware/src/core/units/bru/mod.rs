//! Branch Resolution Unit (BRU).
//!
//! Evaluates conditional branch predicates and computes branch and jump
//! targets. The interpreter has no delay slots and no prediction: a branch is
//! resolved in the same step that executes it.

use crate::common::constants::{INSTRUCTION_SIZE, JUMP_REGION_MASK};

/// Condition tested by a conditional branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCond {
    /// `rs == rt`.
    Eq,
    /// `rs != rt`.
    Ne,
    /// `rs <= 0` (signed).
    Lez,
    /// `rs > 0` (signed).
    Gtz,
    /// `rs < 0` (signed).
    Ltz,
    /// `rs >= 0` (signed).
    Gez,
}

/// Branch Resolution Unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Evaluates a branch condition.
    ///
    /// # Arguments
    ///
    /// * `cond` - The condition to test.
    /// * `a`    - Value of `rs`.
    /// * `b`    - Value of `rt` (ignored by the compare-against-zero forms).
    ///
    /// # Returns
    ///
    /// `true` if the branch is taken.
    pub fn taken(cond: BranchCond, a: u32, b: u32) -> bool {
        let sa = a as i32;
        match cond {
            BranchCond::Eq => a == b,
            BranchCond::Ne => a != b,
            BranchCond::Lez => sa <= 0,
            BranchCond::Gtz => sa > 0,
            BranchCond::Ltz => sa < 0,
            BranchCond::Gez => sa >= 0,
        }
    }

    /// Target of a taken branch: `pc + 4 + (offset << 2)`, wrapping.
    ///
    /// ```
    /// use mipsim_core::core::units::bru::Bru;
    /// assert_eq!(Bru::branch_target(0x0040_0000, 4), 0x0040_0014);
    /// assert_eq!(Bru::branch_target(0x0040_0010, -4), 0x0040_0004);
    /// ```
    pub fn branch_target(pc: u32, offset: i16) -> u32 {
        pc.wrapping_add(INSTRUCTION_SIZE)
            .wrapping_add((i32::from(offset) << 2) as u32)
    }

    /// Target of `j`/`jal`: the top four bits of `pc` joined with `target << 2`.
    ///
    /// ```
    /// use mipsim_core::core::units::bru::Bru;
    /// assert_eq!(Bru::jump_target(0x9000_0000, 0x10_0000), 0x9040_0000);
    /// ```
    pub fn jump_target(pc: u32, target: u32) -> u32 {
        (pc & JUMP_REGION_MASK) | (target << 2)
    }

    /// Return address written by linking branches and jumps.
    pub fn link_address(pc: u32) -> u32 {
        pc.wrapping_add(INSTRUCTION_SIZE)
    }
}
