//! System Call Bridge.
//!
//! The `syscall` instruction hands control to a [`SyscallHandler`]. The CPU
//! reads the call number from `$v0` and up to four arguments from `$a0`-`$a3`,
//! then writes the result back using the Linux o32 convention:
//! 1. **Success:** `$v0` = return value, `$a3` = 0.
//! 2. **Failure:** `$v0` = errno, `$a3` = 1.
//! 3. **Exit:** the run halts with the guest's status code.
//!
//! [`HostSyscalls`] implements the handful of calls a statically linked
//! program needs to print and exit. Its I/O streams are injectable so tests
//! can capture guest output.

use std::fmt;
use std::io::{self, Read, Write};

use crate::common::constants::PAGE_SIZE;
use crate::common::error::Trap;
use crate::soc::Memory;

/// Most bytes a single `read` or `write` moves. Larger requests complete
/// short, as they would on a pipe.
pub const MAX_TRANSFER: u32 = 1 << 20;

/// Most the heap may grow past the initial break. `brk` requests beyond it
/// fail and leave the break where it was.
pub const MAX_HEAP: u32 = 256 << 20;

/// Linux o32 system call numbers handled by [`HostSyscalls`].
pub mod numbers {
    /// `exit(status)`.
    pub const EXIT: u32 = 4001;
    /// `read(fd, buf, count)`.
    pub const READ: u32 = 4003;
    /// `write(fd, buf, count)`.
    pub const WRITE: u32 = 4004;
    /// `getpid()`.
    pub const GETPID: u32 = 4020;
    /// `getuid()`.
    pub const GETUID: u32 = 4024;
    /// `brk(addr)`.
    pub const BRK: u32 = 4045;
    /// `getgid()`.
    pub const GETGID: u32 = 4047;
    /// `geteuid()`.
    pub const GETEUID: u32 = 4049;
    /// `getegid()`.
    pub const GETEGID: u32 = 4050;
    /// `exit_group(status)`.
    pub const EXIT_GROUP: u32 = 4246;
}

/// MIPS errno values returned in `$v0` on failure.
pub mod errno {
    /// Bad file descriptor.
    pub const EBADF: u32 = 9;
    /// Bad address.
    pub const EFAULT: u32 = 14;
    /// I/O error.
    pub const EIO: u32 = 5;
    /// Function not implemented (MIPS numbering).
    pub const ENOSYS: u32 = 89;
}

/// Result of a system call as seen by the guest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyscallOutcome {
    /// Success with a return value for `$v0`.
    Return(u32),
    /// Failure with an errno for `$v0`.
    Error(u32),
    /// The guest asked to terminate with this status.
    Exit(i32),
}

/// Services `syscall` instructions on behalf of the guest.
pub trait SyscallHandler {
    /// Handles one system call.
    ///
    /// # Arguments
    ///
    /// * `number` - Call number from `$v0`.
    /// * `args`   - `$a0`-`$a3`.
    /// * `mem`    - Guest memory, for buffer arguments.
    ///
    /// # Errors
    ///
    /// A `Trap` aborts the run as a fault at the `syscall` instruction.
    fn invoke(&mut self, number: u32, args: [u32; 4], mem: &mut Memory)
    -> Result<SyscallOutcome, Trap>;
}

/// Minimal host-backed implementation of the Linux o32 calls used by static binaries.
pub struct HostSyscalls {
    stdin: Box<dyn Read>,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
    brk_start: u32,
    brk: u32,
    pid: u32,
}

impl fmt::Debug for HostSyscalls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostSyscalls")
            .field("brk", &format_args!("{:#010x}", self.brk))
            .field("pid", &self.pid)
            .finish_non_exhaustive()
    }
}

impl Default for HostSyscalls {
    fn default() -> Self {
        Self::new()
    }
}

impl HostSyscalls {
    /// Creates a bridge wired to the process's standard streams.
    pub fn new() -> Self {
        Self::with_io(
            Box::new(io::stdin()),
            Box::new(io::stdout()),
            Box::new(io::stderr()),
        )
    }

    /// Creates a bridge with custom streams for fds 0, 1 and 2.
    pub fn with_io(stdin: Box<dyn Read>, stdout: Box<dyn Write>, stderr: Box<dyn Write>) -> Self {
        Self {
            stdin,
            stdout,
            stderr,
            brk_start: 0,
            brk: 0,
            pid: std::process::id(),
        }
    }

    /// Sets the initial program break (end of the loaded image).
    pub fn set_brk(&mut self, brk: u32) {
        self.brk_start = brk;
        self.brk = brk;
    }

    /// Returns the current program break.
    pub fn brk(&self) -> u32 {
        self.brk
    }

    /// Copies the guest buffer to the sink a page at a time. A fault after
    /// some bytes went out returns the short count.
    fn write(&mut self, fd: u32, buf: u32, len: u32, mem: &Memory) -> SyscallOutcome {
        let sink: &mut dyn Write = match fd {
            1 => self.stdout.as_mut(),
            2 => self.stderr.as_mut(),
            _ => return SyscallOutcome::Error(errno::EBADF),
        };
        let len = len.min(MAX_TRANSFER);
        let mut chunk = [0u8; PAGE_SIZE];
        let mut done = 0u32;
        while done < len {
            let n = (len - done).min(PAGE_SIZE as u32) as usize;
            for (i, slot) in chunk[..n].iter_mut().enumerate() {
                match mem.read_u8(buf.wrapping_add(done + i as u32)) {
                    Ok(b) => *slot = b,
                    Err(_) if done == 0 => return SyscallOutcome::Error(errno::EFAULT),
                    Err(_) => return flushed(sink, done),
                }
            }
            if sink.write_all(&chunk[..n]).is_err() {
                return SyscallOutcome::Error(errno::EIO);
            }
            done += n as u32;
        }
        flushed(sink, done)
    }

    /// Reads stdin into the guest buffer a page at a time, stopping at the
    /// first short read so an interactive stdin never blocks for more.
    fn read(&mut self, fd: u32, buf: u32, len: u32, mem: &mut Memory) -> SyscallOutcome {
        if fd != 0 {
            return SyscallOutcome::Error(errno::EBADF);
        }
        let len = len.min(MAX_TRANSFER);
        let mut chunk = [0u8; PAGE_SIZE];
        let mut done = 0u32;
        while done < len {
            let want = (len - done).min(PAGE_SIZE as u32) as usize;
            let dest = buf.wrapping_add(done);
            if mem.check_writable(dest, want as u32).is_err() {
                return short_or(done, errno::EFAULT);
            }
            let n = match self.stdin.read(&mut chunk[..want]) {
                Ok(n) => n,
                Err(_) => return short_or(done, errno::EIO),
            };
            if mem.write_bytes(dest, &chunk[..n]).is_err() {
                return short_or(done, errno::EFAULT);
            }
            done += n as u32;
            if n < want {
                break;
            }
        }
        SyscallOutcome::Return(done)
    }

    /// `brk(0)` queries; a request above the current break grows the heap and
    /// maps the new range. Shrinking requests are accepted without unmapping.
    /// Growth past [`MAX_HEAP`] fails by returning the unchanged break.
    fn set_break(&mut self, requested: u32, mem: &mut Memory) -> SyscallOutcome {
        if requested > self.brk && requested.saturating_sub(self.brk_start) > MAX_HEAP {
            tracing::warn!(requested, brk = self.brk, "brk beyond heap limit refused");
            return SyscallOutcome::Return(self.brk);
        }
        if requested > self.brk {
            mem.map_region(self.brk, requested - self.brk);
            self.brk = requested;
        } else if requested != 0 {
            self.brk = requested;
        }
        SyscallOutcome::Return(self.brk)
    }
}

/// Flushes `sink` and reports `done` bytes written.
fn flushed(sink: &mut dyn Write, done: u32) -> SyscallOutcome {
    match sink.flush() {
        Ok(()) => SyscallOutcome::Return(done),
        Err(_) => SyscallOutcome::Error(errno::EIO),
    }
}

/// A partial transfer reports its count; an empty one reports `err`.
fn short_or(done: u32, err: u32) -> SyscallOutcome {
    if done == 0 {
        SyscallOutcome::Error(err)
    } else {
        SyscallOutcome::Return(done)
    }
}

impl SyscallHandler for HostSyscalls {
    fn invoke(
        &mut self,
        number: u32,
        args: [u32; 4],
        mem: &mut Memory,
    ) -> Result<SyscallOutcome, Trap> {
        let [a0, a1, a2, _] = args;
        let outcome = match number {
            numbers::EXIT | numbers::EXIT_GROUP => SyscallOutcome::Exit(a0 as i32),
            numbers::WRITE => self.write(a0, a1, a2, mem),
            numbers::READ => self.read(a0, a1, a2, mem),
            numbers::BRK => self.set_break(a0, mem),
            numbers::GETPID => SyscallOutcome::Return(self.pid),
            numbers::GETUID | numbers::GETGID | numbers::GETEUID | numbers::GETEGID => {
                SyscallOutcome::Return(0)
            }
            _ => {
                tracing::warn!(number, ?args, "unsupported syscall, returning ENOSYS");
                SyscallOutcome::Error(errno::ENOSYS)
            }
        };
        tracing::debug!(number, ?outcome, "syscall");
        Ok(outcome)
    }
}
