//! `syscall` dispatch and the o32 return convention, using a mocked handler.

use crate::common::builder::instruction::asm;
use crate::common::harness::{TEXT_BASE, TestContext};
use crate::common::mocks::syscalls::{MockSyscalls, expect_once};
use mipsim_core::common::{SimError, Trap};
use mipsim_core::config::Config;
use mipsim_core::core::cpu::StopReason;
use mipsim_core::isa::abi::*;
use mipsim_core::sim::SyscallOutcome;
use mipsim_core::sim::syscall::numbers;
use mockall::predicate::*;

fn syscall_program(handler: MockSyscalls) -> TestContext {
    TestContext::with_syscalls(&Config::default(), Box::new(handler)).load_program(
        TEXT_BASE,
        &[asm().syscall().build(), asm().brk().build()],
    )
}

#[test]
fn number_and_arguments_come_from_v0_and_a0_a3() {
    let mut handler = MockSyscalls::new();
    let _ = handler
        .expect_invoke()
        .with(eq(4242), eq([10, 11, 12, 13]), always())
        .times(1)
        .returning(|_, _, _| Ok(SyscallOutcome::Return(0)));

    let mut ctx = syscall_program(handler);
    ctx.set_reg(REG_V0, 4242);
    ctx.set_reg(REG_A0, 10);
    ctx.set_reg(REG_A1, 11);
    ctx.set_reg(REG_A2, 12);
    ctx.set_reg(REG_A3, 13);
    let _ = ctx.run_ok(10);
}

#[test]
fn success_sets_v0_and_clears_a3() {
    let mut ctx = syscall_program(expect_once(numbers::GETPID, SyscallOutcome::Return(77)));
    ctx.set_reg(REG_V0, numbers::GETPID);
    ctx.set_reg(REG_A3, 5);
    assert_eq!(ctx.run_ok(10), StopReason::Breakpoint(TEXT_BASE + 4));
    assert_eq!(ctx.get_reg(REG_V0), 77);
    assert_eq!(ctx.get_reg(REG_A3), 0);
}

#[test]
fn failure_sets_errno_and_a3() {
    let mut ctx = syscall_program(expect_once(numbers::WRITE, SyscallOutcome::Error(9)));
    ctx.set_reg(REG_V0, numbers::WRITE);
    let _ = ctx.run_ok(10);
    assert_eq!(ctx.get_reg(REG_V0), 9);
    assert_eq!(ctx.get_reg(REG_A3), 1);
}

#[test]
fn exit_halts_with_status() {
    let mut ctx = syscall_program(expect_once(numbers::EXIT, SyscallOutcome::Exit(3)));
    ctx.set_reg(REG_V0, numbers::EXIT);
    assert_eq!(ctx.run_ok(10), StopReason::Exit(3));
    // The exit syscall retires but the PC stays on it.
    assert_eq!(ctx.cpu().pc, TEXT_BASE);
    assert_eq!(ctx.cpu().stats.instructions_retired, 1);
}

#[test]
fn handler_trap_becomes_fault_at_syscall() {
    let mut handler = MockSyscalls::new();
    let _ = handler
        .expect_invoke()
        .returning(|_, _, _| Err(Trap::UnimplementedOpcode(0x0000_000C)));
    let mut ctx = syscall_program(handler);
    let err = ctx.run(10).unwrap_err();
    assert!(matches!(err, SimError::Fault { pc: TEXT_BASE, inst: 0x0000_000C, .. }));
}

#[test]
fn handler_can_write_guest_memory() {
    let mut handler = MockSyscalls::new();
    let _ = handler.expect_invoke().times(1).returning(|_, args, mem| {
        mem.write_u32(args[0], 0x5EED_5EED)?;
        Ok(SyscallOutcome::Return(4))
    });
    let mut ctx = syscall_program(handler);
    ctx.set_reg(REG_A0, 0x1000_0000);
    let _ = ctx.run_ok(10);
    assert_eq!(ctx.cpu().mem.read_u32(0x1000_0000).unwrap(), 0x5EED_5EED);
}
