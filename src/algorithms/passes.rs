// Pass Primitives - One full overwrite of a file
//
// Both primitives rewind to offset 0, write exactly `size` bytes in scratch
// sized chunks through the reliable writer, then ask for a durability flush.
// `pass` is only used to label errors.

use crate::algorithms::gutmann::SCRATCH_SIZE;
use crate::crypto::EntropySource;
use crate::error::{WipeError, WipeResult};
use crate::io::{write_fully, WipeTarget};
use std::io::{self, SeekFrom};

/// Overwrite `size` bytes with fresh random data, refilled for every chunk
pub fn random_pass<T, R>(
    handle: &mut T,
    rng: &R,
    scratch: &mut [u8; SCRATCH_SIZE],
    size: u64,
    pass: usize,
) -> WipeResult<()>
where
    T: WipeTarget + ?Sized,
    R: EntropySource + ?Sized,
{
    rewind(handle, pass)?;

    let mut remaining = size;
    while remaining > 0 {
        let towrite = remaining.min(SCRATCH_SIZE as u64) as usize;
        let chunk = &mut scratch[..towrite];

        rng.fill_bytes(chunk)
            .map_err(|source| WipeError::Entropy { pass, source })?;
        write_fully(handle, chunk).map_err(|source| WipeError::Write { pass, source })?;

        remaining -= towrite as u64;
    }

    flush(handle, pass)
}

/// Overwrite `size` bytes by writing `pattern_buffer` over and over.
///
/// The buffer must already hold whole repetitions of the pattern so that
/// consecutive chunks line up; it is never modified.
pub fn pattern_pass<T>(
    handle: &mut T,
    pattern_buffer: &[u8],
    size: u64,
    pass: usize,
) -> WipeResult<()>
where
    T: WipeTarget + ?Sized,
{
    if pattern_buffer.is_empty() {
        return Err(WipeError::InvalidPattern { pass });
    }

    rewind(handle, pass)?;

    let mut remaining = size;
    while remaining > 0 {
        let towrite = remaining.min(pattern_buffer.len() as u64) as usize;

        write_fully(handle, &pattern_buffer[..towrite])
            .map_err(|source| WipeError::Write { pass, source })?;

        remaining -= towrite as u64;
    }

    flush(handle, pass)
}

fn rewind<T: WipeTarget + ?Sized>(handle: &mut T, pass: usize) -> WipeResult<()> {
    match handle.seek(SeekFrom::Start(0)) {
        Ok(0) => Ok(()),
        Ok(offset) => Err(WipeError::Seek {
            pass,
            source: io::Error::other(format!("seek to 0 landed at offset {}", offset)),
        }),
        Err(source) => Err(WipeError::Seek { pass, source }),
    }
}

fn flush<T: WipeTarget + ?Sized>(handle: &mut T, pass: usize) -> WipeResult<()> {
    tracing::debug!(pass, "Flushing pass to stable storage");
    handle
        .sync_data()
        .map_err(|source| WipeError::Flush { pass, source })
}
