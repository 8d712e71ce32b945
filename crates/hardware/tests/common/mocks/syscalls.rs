use mockall::mock;
use mipsim_core::common::Trap;
use mipsim_core::sim::{SyscallHandler, SyscallOutcome};
use mipsim_core::soc::Memory;

mock! {
    pub Syscalls {}
    impl SyscallHandler for Syscalls {
        fn invoke(
            &mut self,
            number: u32,
            args: [u32; 4],
            mem: &mut Memory,
        ) -> Result<SyscallOutcome, Trap>;
    }
}

/// A handler that expects exactly one call with `number` and answers `outcome`.
pub fn expect_once(number: u32, outcome: SyscallOutcome) -> MockSyscalls {
    let mut mock = MockSyscalls::new();
    let _ = mock
        .expect_invoke()
        .withf(move |n, _, _| *n == number)
        .times(1)
        .returning(move |_, _, _| Ok(outcome));
    mock
}

/// A handler that fails the test if it is ever called.
pub fn never_called() -> MockSyscalls {
    let mut mock = MockSyscalls::new();
    let _ = mock.expect_invoke().never();
    mock
}
