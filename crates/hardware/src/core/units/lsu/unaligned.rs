//! Partial-word load/store handling.
//!
//! `lwl`/`lwr` merge part of the aligned word containing `addr` into the
//! destination register; `swl`/`swr` merge part of the source register into
//! that word. With `off = addr & 3` and `base = addr - off`:
//!
//! | op    | bytes moved      | position in the register      |
//! |-------|------------------|-------------------------------|
//! | `lwl` | `base..=addr`    | `off + 1` most-significant    |
//! | `lwr` | `addr..=base+3`  | `4 - off` least-significant   |
//! | `swl` | `base..=addr`    | `off + 1` most-significant    |
//! | `swr` | `addr..=base+3`  | `4 - off` least-significant   |
//!
//! Bytes outside the moved range are left untouched. All masks are integer
//! shifts.

use crate::common::error::Trap;
use crate::soc::Memory;

/// Mask of the `n` most-significant bytes of a word, `n` in `1..=4`.
fn high_bytes_mask(n: u32) -> u32 {
    !u32::MAX.checked_shr(8 * n).unwrap_or(0)
}

/// Mask of the `n` least-significant bytes of a word, `n` in `1..=4`.
fn low_bytes_mask(n: u32) -> u32 {
    !u32::MAX.checked_shl(8 * n).unwrap_or(0)
}

/// Splits an address into its aligned base and byte offset.
fn split(addr: u32) -> (u32, u32) {
    let off = addr & 3;
    (addr - off, off)
}

/// Merges the bytes `base..=addr` of `word` into the high bytes of `rt`.
///
/// # Arguments
///
/// * `word` - The aligned memory word containing `addr`.
/// * `rt`   - Prior value of the destination register.
/// * `off`  - `addr & 3`.
///
/// # Returns
///
/// The new destination register value.
pub fn merge_left(word: u32, rt: u32, off: u32) -> u32 {
    let mask = high_bytes_mask(off + 1);
    (word & mask) | (rt & !mask)
}

/// Merges the bytes `addr..=base+3` of `word` into the low bytes of `rt`.
pub fn merge_right(word: u32, rt: u32, off: u32) -> u32 {
    let mask = low_bytes_mask(4 - off);
    (word & mask) | (rt & !mask)
}

/// Executes `lwl`.
///
/// # Errors
///
/// Propagates `Trap::MemoryFault` from strict memory.
///
/// ```
/// use mipsim_core::core::units::lsu::unaligned::{load_left, load_right};
/// use mipsim_core::soc::Memory;
///
/// let mut mem = Memory::new();
/// mem.load_bytes(0x1000, &[0xAA, 0xBB, 0xCC, 0xDD]);
/// let left = load_left(&mem, 0x1002, 0x1234_5678).unwrap();
/// assert_eq!(left, 0xAABB_CC78);
/// assert_eq!(load_right(&mem, 0x1002, left).unwrap(), 0xAABB_CCDD);
/// ```
pub fn load_left(mem: &Memory, addr: u32, rt: u32) -> Result<u32, Trap> {
    let (base, off) = split(addr);
    Ok(merge_left(mem.read_u32(base)?, rt, off))
}

/// Executes `lwr`.
///
/// # Errors
///
/// Propagates `Trap::MemoryFault` from strict memory.
pub fn load_right(mem: &Memory, addr: u32, rt: u32) -> Result<u32, Trap> {
    let (base, off) = split(addr);
    Ok(merge_right(mem.read_u32(base)?, rt, off))
}

/// Executes `swl`: the `off + 1` high bytes of `rt` go to `base..=addr`.
///
/// # Errors
///
/// Propagates `Trap::MemoryFault` from strict memory, leaving memory untouched.
pub fn store_left(mem: &mut Memory, addr: u32, rt: u32) -> Result<(), Trap> {
    let (base, off) = split(addr);
    mem.write_bytes(base, &rt.to_be_bytes()[..=off as usize])
}

/// Executes `swr`: the `4 - off` low bytes of `rt` go to `addr..=base+3`.
///
/// # Errors
///
/// Propagates `Trap::MemoryFault` from strict memory, leaving memory untouched.
pub fn store_right(mem: &mut Memory, addr: u32, rt: u32) -> Result<(), Trap> {
    mem.write_bytes(addr, &rt.to_be_bytes()[(addr & 3) as usize..])
}
