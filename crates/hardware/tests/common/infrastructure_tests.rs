use super::builder::elf::ElfBuilder;
use super::builder::instruction::asm;
use super::harness::{TEXT_BASE, TestContext};
use super::mocks::observer::RecordingObserver;
use mipsim_core::isa::abi::*;

// ─── InstructionBuilder: known encodings ───────────────────────────────────

#[test]
fn builder_matches_assembler_output() {
    // Words taken from `mips-linux-gnu-as` listings.
    assert_eq!(asm().addiu(REG_T0, REG_ZERO, 7).build(), 0x2408_0007);
    assert_eq!(asm().addu(REG_V0, REG_A0, REG_A1).build(), 0x0085_1021);
    assert_eq!(asm().lw(REG_T0, REG_SP, 4).build(), 0x8FA8_0004);
    assert_eq!(asm().sw(REG_RA, REG_SP, -4).build(), 0xAFBF_FFFC);
    assert_eq!(asm().jr(REG_RA).build(), 0x03E0_0008);
    assert_eq!(asm().syscall().build(), 0x0000_000C);
    assert_eq!(asm().brk().build(), 0x0000_000D);
    assert_eq!(asm().lui(REG_GP, 0x1234).build(), 0x3C1C_1234);
}

#[test]
fn builder_jump_keeps_low_28_bits() {
    assert_eq!(asm().j(0x0040_0010).build(), 0x0810_0004);
    assert_eq!(asm().jal(0x0040_0010).build(), 0x0C10_0004);
}

#[test]
fn builder_regimm_selects_rt() {
    let word = asm().bgezal(REG_T1, 3).build();
    assert_eq!(word >> 26, 1);
    assert_eq!((word >> 16) & 0x1F, 0x11);
    assert_eq!(word & 0xFFFF, 3);
}

#[test]
fn nop_is_zero_word() {
    assert_eq!(asm().nop().build(), 0);
}

// ─── TestContext ───────────────────────────────────────────────────────────

#[test]
fn load_program_sets_pc_and_words() {
    let ctx = TestContext::new().load_program(TEXT_BASE, &[0x1122_3344, 0x5566_7788]);
    assert_eq!(ctx.cpu().pc, TEXT_BASE);
    assert_eq!(ctx.cpu().mem.read_u32(TEXT_BASE + 4).unwrap(), 0x5566_7788);
}

#[test]
fn recording_observer_shares_log() {
    let observer = RecordingObserver::new();
    let log = observer.log();
    let mut ctx = TestContext::new().load_program(TEXT_BASE, &[asm().nop().build()]);
    ctx.sim.set_observer(Box::new(observer));
    let _ = ctx.run(1);
    assert_eq!(log.borrow().len(), 1);
}

// ─── ElfBuilder ────────────────────────────────────────────────────────────

#[test]
fn elf_builder_header_is_big_endian_mips() {
    let bytes = ElfBuilder::new(0x0040_0000).code(0x0040_0000, &[0]).build();
    assert_eq!(&bytes[..4], b"\x7fELF");
    assert_eq!(bytes[4], 1); // ELFCLASS32
    assert_eq!(bytes[5], 2); // ELFDATA2MSB
    assert_eq!(u16::from_be_bytes([bytes[18], bytes[19]]), 8);
    assert_eq!(
        u32::from_be_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]),
        0x0040_0000
    );
}
