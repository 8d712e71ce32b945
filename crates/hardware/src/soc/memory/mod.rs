//! Sparse Guest Memory.
//!
//! This module implements the flat 32-bit guest address space. It provides:
//! 1. **Lazy Paging:** 4 KiB pages allocated on first write (or explicit mapping),
//!    so the full 4 GiB range is never reserved up front.
//! 2. **Big-Endian Access:** Halfword and word accesses composed from byte
//!    accesses, most-significant byte at the lowest address.
//! 3. **Strict Mode:** Optional `MemoryFault` on any access to a page that was
//!    never mapped, instead of the tolerant read-as-zero behaviour.

use std::collections::HashMap;
use std::fmt;

use crate::common::constants::{PAGE_OFFSET_MASK, PAGE_SHIFT, PAGE_SIZE};
use crate::common::data::AccessType;
use crate::common::error::Trap;

/// One lazily allocated page of guest memory.
type Page = Box<[u8; PAGE_SIZE]>;

/// Byte-addressable sparse memory covering the whole 32-bit address space.
///
/// Addresses wrap modulo 2^32, so a word read at `0xFFFF_FFFE` touches
/// `0xFFFF_FFFE`, `0xFFFF_FFFF`, `0x0000_0000` and `0x0000_0001`.
#[derive(Default)]
pub struct Memory {
    pages: HashMap<u32, Page>,
    strict: bool,
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memory")
            .field("pages", &self.pages.len())
            .field("strict", &self.strict)
            .finish()
    }
}

impl Memory {
    /// Creates an empty tolerant memory: unmapped bytes read as zero and
    /// writes allocate pages on demand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty memory with strict mapping checks enabled or disabled.
    pub fn with_strict(strict: bool) -> Self {
        Self {
            pages: HashMap::new(),
            strict,
        }
    }

    /// Returns whether accesses to unmapped pages fault.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Enables or disables strict mapping checks.
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Returns the number of pages currently allocated.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns whether the page holding `addr` has been allocated.
    pub fn is_mapped(&self, addr: u32) -> bool {
        self.pages.contains_key(&(addr >> PAGE_SHIFT))
    }

    /// Allocates every page overlapping `[base, base + len)`.
    ///
    /// Existing contents are preserved. A zero-length region maps nothing.
    pub fn map_region(&mut self, base: u32, len: u32) {
        if len == 0 {
            return;
        }
        let first = base >> PAGE_SHIFT;
        let last = base.wrapping_add(len - 1) >> PAGE_SHIFT;
        let mut page = first;
        loop {
            let _ = self.page_mut(page);
            if page == last {
                break;
            }
            page = page.wrapping_add(1);
        }
    }

    /// Copies `data` into memory starting at `addr`, mapping pages as needed.
    pub fn load_bytes(&mut self, addr: u32, data: &[u8]) {
        for (i, byte) in data.iter().enumerate() {
            let a = addr.wrapping_add(i as u32);
            self.page_mut(a >> PAGE_SHIFT)[(a & PAGE_OFFSET_MASK) as usize] = *byte;
        }
    }

    /// Sets `len` bytes starting at `addr` to `val`, mapping pages as needed.
    ///
    /// Works a page at a time, so zeroing a large `.bss` allocates nothing
    /// beyond the pages themselves.
    pub fn fill(&mut self, addr: u32, len: u32, val: u8) {
        let mut addr = addr;
        let mut left = len;
        while left > 0 {
            let offset = (addr & PAGE_OFFSET_MASK) as usize;
            let chunk = left.min((PAGE_SIZE - offset) as u32);
            let page = self.page_mut(addr >> PAGE_SHIFT);
            page[offset..offset + chunk as usize].fill(val);
            addr = addr.wrapping_add(chunk);
            left -= chunk;
        }
    }

    /// Checks that a store of `len` bytes at `addr` would not fault.
    ///
    /// # Errors
    ///
    /// `Trap::MemoryFault` naming the first unmapped byte, in strict mode.
    pub fn check_writable(&self, addr: u32, len: u32) -> Result<(), Trap> {
        if !self.strict {
            return Ok(());
        }
        match (0..len)
            .map(|i| addr.wrapping_add(i))
            .find(|a| !self.is_mapped(*a))
        {
            Some(addr) => Err(Trap::MemoryFault {
                addr,
                access: AccessType::Write,
            }),
            None => Ok(()),
        }
    }

    /// Stores `data` at `addr` as one access: either every byte is written or,
    /// on a strict-mode fault, none is.
    ///
    /// # Errors
    ///
    /// `Trap::MemoryFault` if strict mode is on and any target byte is unmapped.
    pub fn write_bytes(&mut self, addr: u32, data: &[u8]) -> Result<(), Trap> {
        self.check_writable(addr, data.len() as u32)?;
        self.load_bytes(addr, data);
        Ok(())
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// `Trap::MemoryFault` if strict mode is on and the page is unmapped.
    pub fn read_u8(&self, addr: u32) -> Result<u8, Trap> {
        self.read_byte(addr, AccessType::Read)
    }

    /// Writes one byte.
    ///
    /// # Errors
    ///
    /// `Trap::MemoryFault` if strict mode is on and the page is unmapped.
    pub fn write_u8(&mut self, addr: u32, val: u8) -> Result<(), Trap> {
        let page = addr >> PAGE_SHIFT;
        if self.strict && !self.pages.contains_key(&page) {
            return Err(Trap::MemoryFault {
                addr,
                access: AccessType::Write,
            });
        }
        self.page_mut(page)[(addr & PAGE_OFFSET_MASK) as usize] = val;
        Ok(())
    }

    /// Reads a big-endian halfword from `addr` and `addr + 1`.
    ///
    /// # Errors
    ///
    /// `Trap::MemoryFault` if strict mode is on and either byte is unmapped.
    pub fn read_u16(&self, addr: u32) -> Result<u16, Trap> {
        let hi = self.read_u8(addr)?;
        let lo = self.read_u8(addr.wrapping_add(1))?;
        Ok(u16::from_be_bytes([hi, lo]))
    }

    /// Writes a big-endian halfword to `addr` and `addr + 1`.
    ///
    /// # Errors
    ///
    /// `Trap::MemoryFault` if strict mode is on and either byte is unmapped.
    /// Nothing is written when the access faults.
    pub fn write_u16(&mut self, addr: u32, val: u16) -> Result<(), Trap> {
        self.write_bytes(addr, &val.to_be_bytes())
    }

    /// Reads a big-endian word from the four bytes starting at `addr`.
    ///
    /// No alignment is required.
    ///
    /// # Errors
    ///
    /// `Trap::MemoryFault` if strict mode is on and any byte is unmapped.
    pub fn read_u32(&self, addr: u32) -> Result<u32, Trap> {
        self.read_word(addr, AccessType::Read)
    }

    /// Fetches an instruction word. Identical to [`Memory::read_u32`] except
    /// that faults are reported as `AccessType::Fetch`.
    ///
    /// # Errors
    ///
    /// `Trap::MemoryFault` if strict mode is on and any byte is unmapped.
    pub fn fetch_u32(&self, addr: u32) -> Result<u32, Trap> {
        self.read_word(addr, AccessType::Fetch)
    }

    /// Writes a big-endian word to the four bytes starting at `addr`.
    ///
    /// # Errors
    ///
    /// `Trap::MemoryFault` if strict mode is on and any byte is unmapped. Nothing
    /// is written in that case.
    pub fn write_u32(&mut self, addr: u32, val: u32) -> Result<(), Trap> {
        self.write_bytes(addr, &val.to_be_bytes())
    }

    fn read_word(&self, addr: u32, access: AccessType) -> Result<u32, Trap> {
        let mut bytes = [0u8; 4];
        for (i, slot) in bytes.iter_mut().enumerate() {
            *slot = self.read_byte(addr.wrapping_add(i as u32), access)?;
        }
        Ok(u32::from_be_bytes(bytes))
    }

    fn read_byte(&self, addr: u32, access: AccessType) -> Result<u8, Trap> {
        match self.pages.get(&(addr >> PAGE_SHIFT)) {
            Some(page) => Ok(page[(addr & PAGE_OFFSET_MASK) as usize]),
            None if self.strict => Err(Trap::MemoryFault { addr, access }),
            None => Ok(0),
        }
    }

    fn page_mut(&mut self, page: u32) -> &mut Page {
        self.pages
            .entry(page)
            .or_insert_with(|| Box::new([0; PAGE_SIZE]))
    }
}
