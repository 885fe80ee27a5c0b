//! Platform detection and the descriptor blocking-mode primitive.

use std::io;

/// Platforms rapport knows how to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Linux,
    Windows,
    OtherUnix,
    Other,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::MacOS => write!(f, "macOS"),
            Platform::Linux => write!(f, "Linux"),
            Platform::Windows => write!(f, "Windows"),
            Platform::OtherUnix => write!(f, "Unix"),
            Platform::Other => write!(f, "unknown"),
        }
    }
}

/// Returns the platform detected at compile time.
pub fn current_platform() -> Platform {
    if cfg!(target_os = "macos") {
        Platform::MacOS
    } else if cfg!(target_os = "linux") {
        Platform::Linux
    } else if cfg!(windows) {
        Platform::Windows
    } else if cfg!(unix) {
        Platform::OtherUnix
    } else {
        Platform::Other
    }
}

/// Returns `true` when descriptors expose a blocking-mode flag that can be
/// inspected and changed (`fcntl` with `O_NONBLOCK`).
pub fn has_blocking_toggle() -> bool {
    cfg!(unix)
}

/// Read and change whether a stream blocks on I/O.
pub trait BlockingToggle {
    fn is_blocking(&self) -> io::Result<bool>;
    fn set_blocking(&self, blocking: bool) -> io::Result<()>;
}

/// Toggles `O_NONBLOCK` on a raw file descriptor, leaving every other status
/// flag untouched.
#[cfg(unix)]
#[derive(Debug, Clone, Copy)]
pub struct FdToggle {
    fd: std::os::unix::io::RawFd,
}

#[cfg(unix)]
impl FdToggle {
    /// The descriptor must stay open for as long as the toggle is used.
    pub fn new(fd: std::os::unix::io::RawFd) -> Self {
        Self { fd }
    }

    fn flags(&self) -> io::Result<libc::c_int> {
        // SAFETY: F_GETFL reads the status flags and has no memory effects.
        let flags = unsafe { libc::fcntl(self.fd, libc::F_GETFL) };
        if flags == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(flags)
    }
}

#[cfg(unix)]
impl BlockingToggle for FdToggle {
    fn is_blocking(&self) -> io::Result<bool> {
        Ok(self.flags()? & libc::O_NONBLOCK == 0)
    }

    fn set_blocking(&self, blocking: bool) -> io::Result<()> {
        let flags = self.flags()?;
        let updated = if blocking {
            flags & !libc::O_NONBLOCK
        } else {
            flags | libc::O_NONBLOCK
        };
        if updated == flags {
            return Ok(());
        }
        // SAFETY: F_SETFL only changes status flags on a descriptor we were handed.
        if unsafe { libc::fcntl(self.fd, libc::F_SETFL, updated) } == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

/// Probes for a blocking-mode toggle on the process's stdout.
///
/// Returns `None` where the platform has no such primitive; callers then fall
/// back to plain writes.
pub fn stdout_toggle() -> Option<Box<dyn BlockingToggle>> {
    #[cfg(unix)]
    {
        use std::os::unix::io::AsRawFd;
        Some(Box::new(FdToggle::new(io::stdout().as_raw_fd())))
    }
    #[cfg(not(unix))]
    {
        None
    }
}
