#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,

    /// The results folder or a requested label has no files on disk.
    MissingInput = 1,

    /// Invalid CLI input (bad flags, non-numeric thread label, bad app
    /// version).
    InvalidInput = 2,

    /// IO, parse, aggregation, or render failure.
    RuntimeError = 3,
}

impl ExitCode {
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
