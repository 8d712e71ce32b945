//! Load/Store Unit (LSU).
//!
//! This module provides the Load/Store Unit, responsible for memory access
//! operations. It includes:
//! - Effective address computation and the sized loads and stores
//!   (`lb lbu lh lhu lw sb sh sw`).
//! - [`unaligned`]: Partial-word merges for `lwl lwr swl swr`.

/// Partial-word (unaligned) load/store merging.
pub mod unaligned;

use crate::common::error::Trap;
use crate::soc::Memory;

/// Access width and extension rule of a load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadWidth {
    /// Signed byte.
    Byte,
    /// Unsigned byte.
    ByteUnsigned,
    /// Signed halfword.
    Half,
    /// Unsigned halfword.
    HalfUnsigned,
    /// Full word.
    Word,
}

/// Access width of a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreWidth {
    /// Low byte of the source register.
    Byte,
    /// Low halfword of the source register.
    Half,
    /// Full word.
    Word,
}

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Computes `base + sext(offset)`, wrapping modulo 2^32.
    pub fn effective_address(base: u32, offset: i16) -> u32 {
        base.wrapping_add(i32::from(offset) as u32)
    }

    /// Loads a value and extends it to 32 bits.
    ///
    /// # Errors
    ///
    /// Propagates `Trap::MemoryFault` from strict memory.
    pub fn load(mem: &Memory, addr: u32, width: LoadWidth) -> Result<u32, Trap> {
        Ok(match width {
            LoadWidth::Byte => i32::from(mem.read_u8(addr)? as i8) as u32,
            LoadWidth::ByteUnsigned => u32::from(mem.read_u8(addr)?),
            LoadWidth::Half => i32::from(mem.read_u16(addr)? as i16) as u32,
            LoadWidth::HalfUnsigned => u32::from(mem.read_u16(addr)?),
            LoadWidth::Word => mem.read_u32(addr)?,
        })
    }

    /// Stores the low `width` bytes of `val`.
    ///
    /// # Errors
    ///
    /// Propagates `Trap::MemoryFault` from strict memory.
    pub fn store(mem: &mut Memory, addr: u32, val: u32, width: StoreWidth) -> Result<(), Trap> {
        match width {
            StoreWidth::Byte => mem.write_u8(addr, val as u8),
            StoreWidth::Half => mem.write_u16(addr, val as u16),
            StoreWidth::Word => mem.write_u32(addr, val),
        }
    }
}
