//! Executable Image Loader.
//!
//! This module turns an executable file into an [`ExecutableImage`] and installs it into
//! guest memory. It performs:
//! 1. **Validation:** Accepts only 32-bit, big-endian, `EM_MIPS` ELF files.
//! 2. **Segment Extraction:** Every `PT_LOAD` program header becomes a [`Segment`].
//! 3. **Process Layout:** Entry point, `_gp` (when the symbol exists), stack pointer and
//!    initial program break.
//!
//! Loading never touches a CPU. A failed load leaves the register file at its
//! all-zero baseline and executes nothing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use object::elf;
use object::read::elf::{ElfFile32, FileHeader, ProgramHeader};
use object::{Endianness, FileKind, Object, ObjectSymbol};
use thiserror::Error;

use crate::common::constants::{DEFAULT_STACK_SIZE, DEFAULT_STACK_TOP, PAGE_OFFSET_MASK};
use crate::soc::Memory;

/// Symbol holding the global pointer in MIPS executables.
const GP_SYMBOL: &str = "_gp";

/// Errors produced while reading or validating an executable.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The ELF structures are malformed.
    #[error("malformed ELF: {0}")]
    Parse(#[from] object::Error),

    /// The file is not an ELF file at all.
    #[error("not an ELF file")]
    NotElf,

    /// The ELF targets another architecture.
    #[error("not a MIPS executable (e_machine = {0})")]
    NotMips(u16),

    /// The ELF is 64-bit.
    #[error("not a 32-bit ELF")]
    WrongClass,

    /// The ELF is little-endian.
    #[error("not a big-endian ELF")]
    WrongEndian,

    /// No `PT_LOAD` segment exists.
    #[error("no loadable segments")]
    NoLoadableSegments,

    /// A segment's file range lies outside the file.
    #[error("segment at {addr:#010x} extends past the end of the file")]
    SegmentOutOfFile {
        /// Load address of the bad segment.
        addr: u32,
    },

    /// A segment's memory size is smaller than its file size, or its memory
    /// range runs past the top of the address space.
    #[error("segment at {addr:#010x} has invalid size (file {file_len:#x}, memory {mem_size:#x})")]
    BadSegmentSize {
        /// Load address of the bad segment.
        addr: u32,
        /// `p_filesz`.
        file_len: u32,
        /// `p_memsz`.
        mem_size: u32,
    },
}

/// Access permissions of a loadable segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SegmentFlags {
    /// `PF_R`.
    pub read: bool,
    /// `PF_W`.
    pub write: bool,
    /// `PF_X`.
    pub execute: bool,
}

impl SegmentFlags {
    /// Decodes ELF `p_flags`.
    pub fn from_elf(p_flags: u32) -> Self {
        Self {
            read: p_flags & elf::PF_R != 0,
            write: p_flags & elf::PF_W != 0,
            execute: p_flags & elf::PF_X != 0,
        }
    }
}

/// One loadable region of the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Offset of the segment's bytes in [`ExecutableImage::data`].
    pub file_offset: u32,
    /// Number of bytes copied from the file.
    pub file_len: u32,
    /// Guest address of the first byte.
    pub load_addr: u32,
    /// Size in memory; bytes past `file_len` are zero.
    pub mem_size: u32,
    /// Access permissions.
    pub flags: SegmentFlags,
}

/// A validated executable ready to be installed into guest memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutableImage {
    /// Entry point.
    pub entry: u32,
    /// Initial `$gp` (0 when the image has no `_gp` symbol).
    pub global_pointer: u32,
    /// Initial `$sp`.
    pub stack_pointer: u32,
    /// Bytes mapped below the stack pointer.
    pub stack_size: u32,
    /// Loadable segments in program-header order.
    pub segments: Vec<Segment>,
    /// Raw file contents the segments index into.
    pub data: Vec<u8>,
}

impl ExecutableImage {
    /// Copies every segment into `mem` and maps the stack.
    ///
    /// Segment pages are mapped so strict memory accepts them; the tail
    /// between `file_len` and `mem_size` is zeroed.
    pub fn install(&self, mem: &mut Memory) {
        for seg in &self.segments {
            let start = seg.file_offset as usize;
            let end = start + seg.file_len as usize;
            mem.map_region(seg.load_addr, seg.mem_size.max(seg.file_len));
            mem.load_bytes(seg.load_addr, self.data.get(start..end).unwrap_or_default());
            if seg.mem_size > seg.file_len {
                mem.fill(
                    seg.load_addr.wrapping_add(seg.file_len),
                    seg.mem_size - seg.file_len,
                    0,
                );
            }
            tracing::debug!(
                addr = format_args!("{:#010x}", seg.load_addr),
                file_len = seg.file_len,
                mem_size = seg.mem_size,
                "installed segment"
            );
        }
        let stack_base = self.stack_pointer.wrapping_sub(self.stack_size);
        mem.map_region(stack_base, self.stack_size.saturating_add(4));
    }

    /// First page-aligned address past the highest segment, used as the initial program break.
    pub fn break_start(&self) -> u32 {
        let end = self
            .segments
            .iter()
            .map(|s| s.load_addr.saturating_add(s.mem_size))
            .max()
            .unwrap_or(0);
        end.saturating_add(PAGE_OFFSET_MASK) & !PAGE_OFFSET_MASK
    }
}

/// Produces an [`ExecutableImage`] from a path.
pub trait ImageLoader {
    /// Reads and validates the file at `path`.
    ///
    /// # Errors
    ///
    /// Any [`LoaderError`]; nothing is installed on failure.
    fn load(&self, path: &Path) -> Result<ExecutableImage, LoaderError>;
}

/// Loader for ELF32 big-endian MIPS executables.
#[derive(Clone, Copy, Debug)]
pub struct ElfLoader {
    stack_pointer: u32,
    stack_size: u32,
}

impl Default for ElfLoader {
    fn default() -> Self {
        Self::new(DEFAULT_STACK_TOP, DEFAULT_STACK_SIZE)
    }
}

impl ElfLoader {
    /// Creates a loader that places the stack at `stack_pointer`, with
    /// `stack_size` bytes mapped below it.
    pub fn new(stack_pointer: u32, stack_size: u32) -> Self {
        Self {
            stack_pointer,
            stack_size,
        }
    }

    /// Validates an in-memory ELF file and extracts its segments.
    ///
    /// # Errors
    ///
    /// `NotElf`, `WrongClass`, `WrongEndian`, `NotMips`, `NoLoadableSegments`,
    /// `SegmentOutOfFile`, or `Parse` for structurally broken files.
    pub fn parse(&self, data: Vec<u8>) -> Result<ExecutableImage, LoaderError> {
        if !data.starts_with(&elf::ELFMAG) {
            return Err(LoaderError::NotElf);
        }
        match FileKind::parse(data.as_slice())? {
            FileKind::Elf32 => {}
            FileKind::Elf64 => return Err(LoaderError::WrongClass),
            _ => return Err(LoaderError::NotElf),
        }

        let (entry, global_pointer, segments) = {
            let file = ElfFile32::<Endianness>::parse(data.as_slice())?;
            Self::extract(&file, data.len())?
        };

        tracing::debug!(
            entry = format_args!("{entry:#010x}"),
            gp = format_args!("{global_pointer:#010x}"),
            segments = segments.len(),
            "parsed ELF image"
        );

        Ok(ExecutableImage {
            entry,
            global_pointer,
            stack_pointer: self.stack_pointer,
            stack_size: self.stack_size,
            segments,
            data,
        })
    }

    /// Reads the entry point, `_gp` and `PT_LOAD` segments out of a parsed file.
    fn extract(
        file: &ElfFile32<'_, Endianness>,
        file_len: usize,
    ) -> Result<(u32, u32, Vec<Segment>), LoaderError> {
        let endian = file.endian();
        let header = file.elf_header();
        if header.e_ident().data != elf::ELFDATA2MSB {
            return Err(LoaderError::WrongEndian);
        }
        let machine = header.e_machine(endian);
        if machine != elf::EM_MIPS {
            return Err(LoaderError::NotMips(machine));
        }
        let entry = header.e_entry(endian);

        let mut segments = Vec::new();
        for ph in file.elf_program_headers() {
            if ph.p_type(endian) != elf::PT_LOAD {
                continue;
            }
            let seg = Segment {
                file_offset: ph.p_offset(endian),
                file_len: ph.p_filesz(endian),
                load_addr: ph.p_vaddr(endian),
                mem_size: ph.p_memsz(endian),
                flags: SegmentFlags::from_elf(ph.p_flags(endian)),
            };
            let end = u64::from(seg.file_offset) + u64::from(seg.file_len);
            if end > file_len as u64 {
                return Err(LoaderError::SegmentOutOfFile {
                    addr: seg.load_addr,
                });
            }
            let mem_end = u64::from(seg.load_addr) + u64::from(seg.mem_size);
            if seg.mem_size < seg.file_len || mem_end > 1 << 32 {
                return Err(LoaderError::BadSegmentSize {
                    addr: seg.load_addr,
                    file_len: seg.file_len,
                    mem_size: seg.mem_size,
                });
            }
            segments.push(seg);
        }
        if segments.is_empty() {
            return Err(LoaderError::NoLoadableSegments);
        }

        let global_pointer = file
            .symbols()
            .find(|sym| matches!(sym.name(), Ok(GP_SYMBOL)))
            .map_or(0, |sym| sym.address() as u32);

        Ok((entry, global_pointer, segments))
    }
}

impl ImageLoader for ElfLoader {
    fn load(&self, path: &Path) -> Result<ExecutableImage, LoaderError> {
        let data = fs::read(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(data)
    }
}
