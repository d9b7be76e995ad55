//! Kernel style error codes
//!
//! Stands in for `osl::error::Errno`, with the same mapping of each variant
//! onto a kernel errno.

/// Error number returned to the host bus framework
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Errno {
    /// EIO
    Io,
    /// ENODEV
    NoDevice,
    /// ENOENT
    NoEntry,
    /// EBUSY
    Busy,
    /// EINVAL
    InvalidArgs,
    /// EPROBE_DEFER
    ProbeDefer,
    /// Any other positive errno, kept as-is
    Other(i32),
}

impl Errno {
    const EIO: i32 = 5;
    const ENOENT: i32 = 2;
    const EBUSY: i32 = 16;
    const ENODEV: i32 = 19;
    const EINVAL: i32 = 22;
    const EPROBE_DEFER: i32 = 517;

    /// Negative errno as handed back to the kernel
    pub const fn to_errno(self) -> i32 {
        -match self {
            Errno::Io => Self::EIO,
            Errno::NoDevice => Self::ENODEV,
            Errno::NoEntry => Self::ENOENT,
            Errno::Busy => Self::EBUSY,
            Errno::InvalidArgs => Self::EINVAL,
            Errno::ProbeDefer => Self::EPROBE_DEFER,
            Errno::Other(errno) => errno,
        }
    }

    /// Build from a negative errno. Unknown codes land in `Other` unchanged.
    pub const fn from_errno(errno: i32) -> Errno {
        match -errno {
            Self::EIO => Errno::Io,
            Self::ENODEV => Errno::NoDevice,
            Self::ENOENT => Errno::NoEntry,
            Self::EBUSY => Errno::Busy,
            Self::EINVAL => Errno::InvalidArgs,
            Self::EPROBE_DEFER => Errno::ProbeDefer,
            other => Errno::Other(other),
        }
    }
}

/// Result with [`Errno`]
pub type Result<T> = core::result::Result<T, Errno>;
