// Reliable Writer - Pushes a whole buffer through a handle
//
// A single `write` may transfer fewer bytes than asked for, or be cut short by
// a signal. This loops until every byte is down, retrying interruptions and
// giving up on anything else.

use crate::error::classify_write_error;
use std::io::{self, Write};

/// Largest byte count handed to a single `write` call
pub const MAX_SINGLE_WRITE: usize = isize::MAX as usize;

/// Write all of `buf` to `handle` or fail
pub fn write_fully<W: Write + ?Sized>(handle: &mut W, buf: &[u8]) -> io::Result<()> {
    write_fully_capped(handle, buf, MAX_SINGLE_WRITE)
}

pub(crate) fn write_fully_capped<W: Write + ?Sized>(
    handle: &mut W,
    buf: &[u8],
    max_single_write: usize,
) -> io::Result<()> {
    let mut written = 0usize;

    while written < buf.len() {
        let towrite = (buf.len() - written).min(max_single_write);

        match handle.write(&buf[written..written + towrite]) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    format!(
                        "Handle accepted no data after {} of {} bytes",
                        written,
                        buf.len()
                    ),
                ));
            }
            Ok(n) => written += n,
            Err(e) => {
                let class = classify_write_error(&e);
                if !class.allows_retry() {
                    return Err(e);
                }
                tracing::trace!(offset = written, "{}", class);
            }
        }
    }

    Ok(())
}
