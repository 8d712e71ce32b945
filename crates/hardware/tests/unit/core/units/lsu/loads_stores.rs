//! Aligned load/store Unit Tests.
//!
//! Verifies effective-address arithmetic, big-endian byte order, and the
//! sign/zero extension rule of each load width.

use mipsim_core::common::{AccessType, Trap};
use mipsim_core::core::units::lsu::{LoadWidth, Lsu, StoreWidth};
use mipsim_core::soc::Memory;
use rstest::rstest;

fn memory_with(addr: u32, bytes: &[u8]) -> Memory {
    let mut mem = Memory::new();
    mem.load_bytes(addr, bytes);
    mem
}

#[test]
fn effective_address_sign_extends_offset() {
    assert_eq!(Lsu::effective_address(0x1000, 8), 0x1008);
    assert_eq!(Lsu::effective_address(0x1000, -8), 0x0FF8);
    assert_eq!(Lsu::effective_address(0, -4), 0xFFFF_FFFC);
    assert_eq!(Lsu::effective_address(0xFFFF_FFFC, 8), 0x0000_0004);
}

#[rstest]
#[case(LoadWidth::Byte, 0xFFFF_FF80)]
#[case(LoadWidth::ByteUnsigned, 0x0000_0080)]
#[case(LoadWidth::Half, 0xFFFF_8001)]
#[case(LoadWidth::HalfUnsigned, 0x0000_8001)]
#[case(LoadWidth::Word, 0x8001_7F02)]
fn load_extension(#[case] width: LoadWidth, #[case] expected: u32) {
    let mem = memory_with(0x2000, &[0x80, 0x01, 0x7F, 0x02]);
    assert_eq!(Lsu::load(&mem, 0x2000, width).unwrap(), expected);
}

#[test]
fn positive_values_are_not_sign_extended() {
    let mem = memory_with(0x2000, &[0x7F, 0x7F]);
    assert_eq!(Lsu::load(&mem, 0x2000, LoadWidth::Byte).unwrap(), 0x7F);
    assert_eq!(Lsu::load(&mem, 0x2000, LoadWidth::Half).unwrap(), 0x7F7F);
}

#[test]
fn store_writes_big_endian_low_bytes() {
    let mut mem = Memory::new();
    Lsu::store(&mut mem, 0x3000, 0x1122_3344, StoreWidth::Word).unwrap();
    Lsu::store(&mut mem, 0x3004, 0x1122_3344, StoreWidth::Half).unwrap();
    Lsu::store(&mut mem, 0x3006, 0x1122_3344, StoreWidth::Byte).unwrap();

    let bytes: Vec<u8> = (0x3000..0x3007).map(|a| mem.read_u8(a).unwrap()).collect();
    assert_eq!(bytes, [0x11, 0x22, 0x33, 0x44, 0x33, 0x44, 0x44]);
}

#[test]
fn word_access_need_not_be_aligned() {
    let mut mem = Memory::new();
    Lsu::store(&mut mem, 0x4001, 0xCAFE_BABE, StoreWidth::Word).unwrap();
    assert_eq!(Lsu::load(&mem, 0x4001, LoadWidth::Word).unwrap(), 0xCAFE_BABE);
}

#[test]
fn strict_memory_faults_propagate() {
    let mut mem = Memory::with_strict(true);
    assert_eq!(
        Lsu::load(&mem, 0x5000, LoadWidth::Word),
        Err(Trap::MemoryFault {
            addr: 0x5000,
            access: AccessType::Read
        })
    );
    assert_eq!(
        Lsu::store(&mut mem, 0x5000, 0, StoreWidth::Byte),
        Err(Trap::MemoryFault {
            addr: 0x5000,
            access: AccessType::Write
        })
    );
}
