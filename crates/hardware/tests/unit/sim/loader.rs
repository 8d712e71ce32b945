//! ELF loader validation, segment extraction and installation.

use std::path::Path;

use crate::common::builder::elf::{EM_RISCV, ElfBuilder};
use crate::common::builder::instruction::asm;
use crate::common::harness::TEXT_BASE;
use mipsim_core::common::constants::{DEFAULT_STACK_SIZE, DEFAULT_STACK_TOP};
use mipsim_core::isa::abi::REG_V0;
use mipsim_core::sim::loader::SegmentFlags;
use mipsim_core::sim::{ElfLoader, ImageLoader, LoaderError};
use mipsim_core::soc::Memory;
use pretty_assertions::assert_eq;

const DATA_BASE: u32 = 0x1000_0000;

fn program() -> Vec<u32> {
    vec![
        asm().li(REG_V0, 4001).build(),
        asm().syscall().build(),
    ]
}

#[test]
fn parses_entry_and_segments() {
    let bytes = ElfBuilder::new(TEXT_BASE)
        .code(TEXT_BASE, &program())
        .data(DATA_BASE, vec![1, 2, 3, 4], 0x20)
        .build();
    let image = ElfLoader::default().parse(bytes).unwrap();

    assert_eq!(image.entry, TEXT_BASE);
    assert_eq!(image.stack_pointer, DEFAULT_STACK_TOP);
    assert_eq!(image.stack_size, DEFAULT_STACK_SIZE);
    assert_eq!(image.segments.len(), 2);

    let text = image.segments[0];
    assert_eq!(text.load_addr, TEXT_BASE);
    assert_eq!(text.file_len, 8);
    assert_eq!(
        text.flags,
        SegmentFlags {
            read: true,
            write: false,
            execute: true
        }
    );

    let data = image.segments[1];
    assert_eq!(data.load_addr, DATA_BASE);
    assert_eq!(data.file_len, 4);
    assert_eq!(data.mem_size, 0x20);
    assert!(data.flags.write && !data.flags.execute);
}

#[test]
fn global_pointer_comes_from_gp_symbol() {
    let bytes = ElfBuilder::new(TEXT_BASE)
        .code(TEXT_BASE, &program())
        .gp(0x1000_8000)
        .build();
    let image = ElfLoader::default().parse(bytes).unwrap();
    assert_eq!(image.global_pointer, 0x1000_8000);
}

#[test]
fn global_pointer_is_zero_without_symbol() {
    let bytes = ElfBuilder::new(TEXT_BASE).code(TEXT_BASE, &program()).build();
    let image = ElfLoader::default().parse(bytes).unwrap();
    assert_eq!(image.global_pointer, 0);
}

#[test]
fn custom_stack_placement_is_recorded() {
    let bytes = ElfBuilder::new(TEXT_BASE).code(TEXT_BASE, &program()).build();
    let image = ElfLoader::new(0x7000_0000, 0x2000).parse(bytes).unwrap();
    assert_eq!(image.stack_pointer, 0x7000_0000);
    assert_eq!(image.stack_size, 0x2000);
}

#[test]
fn install_copies_bytes_and_zeroes_bss() {
    let bytes = ElfBuilder::new(TEXT_BASE)
        .code(TEXT_BASE, &program())
        .data(DATA_BASE, vec![0xAA, 0xBB, 0xCC, 0xDD], 0x10)
        .build();
    let image = ElfLoader::default().parse(bytes).unwrap();

    let mut mem = Memory::new();
    mem.write_u32(DATA_BASE + 8, 0xFFFF_FFFF).unwrap();
    image.install(&mut mem);

    assert_eq!(mem.read_u32(TEXT_BASE).unwrap(), program()[0]);
    assert_eq!(mem.read_u32(TEXT_BASE + 4).unwrap(), program()[1]);
    assert_eq!(mem.read_u32(DATA_BASE).unwrap(), 0xAABB_CCDD);
    assert_eq!(mem.read_u32(DATA_BASE + 4).unwrap(), 0);
    assert_eq!(mem.read_u32(DATA_BASE + 8).unwrap(), 0);
    assert_eq!(mem.read_u32(DATA_BASE + 0xC).unwrap(), 0);
}

#[test]
fn install_maps_segments_and_stack_for_strict_memory() {
    let bytes = ElfBuilder::new(TEXT_BASE)
        .code(TEXT_BASE, &program())
        .data(DATA_BASE, Vec::new(), 0x3000)
        .build();
    let image = ElfLoader::default().parse(bytes).unwrap();

    let mut mem = Memory::with_strict(true);
    image.install(&mut mem);

    assert!(mem.is_mapped(TEXT_BASE));
    assert!(mem.is_mapped(DATA_BASE + 0x2FFF));
    assert!(mem.is_mapped(DEFAULT_STACK_TOP));
    assert!(mem.is_mapped(DEFAULT_STACK_TOP - DEFAULT_STACK_SIZE));
    assert!(mem.read_u32(DEFAULT_STACK_TOP).is_ok());
    assert!(!mem.is_mapped(0x2000_0000));
}

#[test]
fn break_starts_on_page_past_highest_segment() {
    let bytes = ElfBuilder::new(TEXT_BASE)
        .code(TEXT_BASE, &program())
        .data(DATA_BASE, vec![0; 4], 0x1804)
        .build();
    let image = ElfLoader::default().parse(bytes).unwrap();
    assert_eq!(image.break_start(), DATA_BASE + 0x2000);
}

#[test]
fn rejects_non_elf() {
    let err = ElfLoader::default()
        .parse(b"#!/bin/sh\necho hi\n".to_vec())
        .unwrap_err();
    assert!(matches!(err, LoaderError::NotElf));
}

#[test]
fn rejects_64_bit() {
    let bytes = ElfBuilder::new(TEXT_BASE).class64().build();
    let err = ElfLoader::default().parse(bytes).unwrap_err();
    assert!(matches!(err, LoaderError::WrongClass));
}

#[test]
fn rejects_little_endian() {
    let bytes = ElfBuilder::new(TEXT_BASE)
        .little_endian()
        .code(TEXT_BASE, &program())
        .build();
    let err = ElfLoader::default().parse(bytes).unwrap_err();
    assert!(matches!(err, LoaderError::WrongEndian));
}

#[test]
fn rejects_other_machine() {
    let bytes = ElfBuilder::new(TEXT_BASE)
        .machine(EM_RISCV)
        .code(TEXT_BASE, &program())
        .build();
    let err = ElfLoader::default().parse(bytes).unwrap_err();
    assert!(matches!(err, LoaderError::NotMips(EM_RISCV)));
}

#[test]
fn rejects_image_without_load_segments() {
    let bytes = ElfBuilder::new(TEXT_BASE).build();
    let err = ElfLoader::default().parse(bytes).unwrap_err();
    assert!(matches!(err, LoaderError::NoLoadableSegments));
}

#[test]
fn rejects_segment_past_end_of_file() {
    let bytes = ElfBuilder::new(TEXT_BASE)
        .code(TEXT_BASE, &program())
        .corrupt_first_segment(0x1_0000, 16)
        .build();
    let err = ElfLoader::default().parse(bytes).unwrap_err();
    assert!(matches!(err, LoaderError::SegmentOutOfFile { addr: TEXT_BASE }));
}

#[test]
fn rejects_memory_size_below_file_size() {
    let bytes = ElfBuilder::new(TEXT_BASE)
        .code(TEXT_BASE, &program())
        .data(DATA_BASE, vec![1; 8], 4)
        .build();
    let err = ElfLoader::default().parse(bytes).unwrap_err();
    assert!(matches!(
        err,
        LoaderError::BadSegmentSize {
            addr: DATA_BASE,
            file_len: 8,
            mem_size: 4
        }
    ));
}

#[test]
fn rejects_segment_wrapping_address_space() {
    let bytes = ElfBuilder::new(TEXT_BASE)
        .code(TEXT_BASE, &program())
        .data(0xFFFF_0000, Vec::new(), 0xFFFF_FFFF)
        .build();
    let err = ElfLoader::default().parse(bytes).unwrap_err();
    assert!(matches!(err, LoaderError::BadSegmentSize { addr: 0xFFFF_0000, .. }));
    assert!(err.to_string().contains("invalid size"));
}

#[test]
fn segment_ending_at_top_of_address_space_is_accepted() {
    let bytes = ElfBuilder::new(TEXT_BASE)
        .code(TEXT_BASE, &program())
        .data(0xFFFF_F000, vec![7], 0x1000)
        .build();
    let image = ElfLoader::default().parse(bytes).unwrap();
    let mut mem = Memory::with_strict(true);
    image.install(&mut mem);
    assert_eq!(mem.read_u8(0xFFFF_F000).unwrap(), 7);
    assert_eq!(mem.read_u8(0xFFFF_FFFF).unwrap(), 0);
}

#[test]
fn load_reads_from_disk() {
    let file = ElfBuilder::new(TEXT_BASE)
        .code(TEXT_BASE, &program())
        .write_temp();
    let image = ElfLoader::default().load(file.path()).unwrap();
    assert_eq!(image.entry, TEXT_BASE);
}

#[test]
fn load_reports_missing_file() {
    let path = Path::new("/nonexistent/mipsim/prog.elf");
    let err = ElfLoader::default().load(path).unwrap_err();
    assert!(err.to_string().starts_with("cannot read /nonexistent/mipsim/prog.elf"));
    match err {
        LoaderError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}
