/// Classification of low-level write errors
///
/// The reliable writer only ever retries a write that was cut short by a
/// signal. Everything else, including genuine I/O errors that might succeed
/// on a second attempt, is treated as fatal for the current pass.
use std::fmt;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteErrorClass {
    /// The call was interrupted before transferring any data, retry from the same offset
    Transient,

    /// Any other failure, abort the pass
    Fatal,
}

impl WriteErrorClass {
    pub fn description(&self) -> &'static str {
        match self {
            WriteErrorClass::Transient => "Interrupted system call, retrying",
            WriteErrorClass::Fatal => "Unrecoverable write error",
        }
    }

    pub fn allows_retry(&self) -> bool {
        matches!(self, WriteErrorClass::Transient)
    }
}

impl fmt::Display for WriteErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

pub fn classify_write_error(err: &io::Error) -> WriteErrorClass {
    match err.kind() {
        io::ErrorKind::Interrupted => WriteErrorClass::Transient,
        _ => WriteErrorClass::Fatal,
    }
}
