//! Error types for the file wipe engine
//!
//! Every failure carries the 1-based pass number it occurred in (except the
//! initial size query), so callers can report how far the overwrite got
//! before the file was left in a partially wiped state.

pub mod classification;

pub use classification::{classify_write_error, WriteErrorClass};

use std::io;
use thiserror::Error;

use crate::crypto::EntropyError;

#[derive(Error, Debug)]
pub enum WipeError {
    #[error("Failed to determine file size: {0}")]
    Stat(#[source] io::Error),

    #[error("Pass {pass}: failed to seek to start of file: {source}")]
    Seek {
        pass: usize,
        #[source]
        source: io::Error,
    },

    #[error("Pass {pass}: write failed: {source}")]
    Write {
        pass: usize,
        #[source]
        source: io::Error,
    },

    #[error("Pass {pass}: durability flush failed: {source}")]
    Flush {
        pass: usize,
        #[source]
        source: io::Error,
    },

    #[error("Pass {pass}: pattern buffer is empty")]
    InvalidPattern { pass: usize },

    #[error("Pass {pass}: random source failed: {source}")]
    Entropy {
        pass: usize,
        #[source]
        source: EntropyError,
    },
}

/// Fieldless view of [`WipeError`] for policy decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WipeErrorKind {
    Stat,
    Seek,
    Write,
    Flush,
    InvalidPattern,
    Entropy,
}

impl WipeError {
    pub fn kind(&self) -> WipeErrorKind {
        match self {
            WipeError::Stat(_) => WipeErrorKind::Stat,
            WipeError::Seek { .. } => WipeErrorKind::Seek,
            WipeError::Write { .. } => WipeErrorKind::Write,
            WipeError::Flush { .. } => WipeErrorKind::Flush,
            WipeError::InvalidPattern { .. } => WipeErrorKind::InvalidPattern,
            WipeError::Entropy { .. } => WipeErrorKind::Entropy,
        }
    }

    /// The pass the failure happened in, `None` for the initial size query
    pub fn pass(&self) -> Option<usize> {
        match self {
            WipeError::Stat(_) => None,
            WipeError::Seek { pass, .. }
            | WipeError::Write { pass, .. }
            | WipeError::Flush { pass, .. }
            | WipeError::InvalidPattern { pass }
            | WipeError::Entropy { pass, .. } => Some(*pass),
        }
    }
}

pub type WipeResult<T> = Result<T, WipeError>;
