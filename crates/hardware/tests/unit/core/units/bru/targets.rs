//! Branch and jump target computation.

use mipsim_core::core::units::bru::Bru;

#[test]
fn branch_target_is_relative_to_next_instruction() {
    // beq at 0x400000 with offset 4 lands at 0x400000 + 4 + 16.
    assert_eq!(Bru::branch_target(0x0040_0000, 4), 0x0040_0014);
}

#[test]
fn branch_offset_zero_is_fall_through_address() {
    assert_eq!(Bru::branch_target(0x0040_0000, 0), 0x0040_0004);
}

#[test]
fn branch_offset_minus_one_loops_to_self() {
    assert_eq!(Bru::branch_target(0x0040_0010, -1), 0x0040_0010);
}

#[test]
fn branch_extremes() {
    assert_eq!(Bru::branch_target(0x0040_0000, i16::MAX), 0x0040_0004 + (0x7FFF << 2));
    assert_eq!(Bru::branch_target(0x0040_0000, i16::MIN), 0x0040_0004 - (0x8000 << 2));
}

#[test]
fn branch_target_wraps_modulo_2_32() {
    assert_eq!(Bru::branch_target(0xFFFF_FFF8, 1), 0x0000_0000);
    assert_eq!(Bru::branch_target(0x0000_0000, -2), 0xFFFF_FFFC);
}

#[test]
fn jump_keeps_top_four_pc_bits() {
    assert_eq!(Bru::jump_target(0x0040_0000, 0x0010_0004), 0x0040_0010);
    assert_eq!(Bru::jump_target(0x9FFF_FFFC, 0), 0x9000_0000);
    assert_eq!(Bru::jump_target(0xF000_0000, 0x03FF_FFFF), 0xFFFF_FFFC);
}

#[test]
fn link_address_is_pc_plus_four() {
    assert_eq!(Bru::link_address(0x0040_0000), 0x0040_0004);
    assert_eq!(Bru::link_address(0xFFFF_FFFC), 0);
}
