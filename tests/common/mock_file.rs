/// Mock file infrastructure for testing
///
/// `MockFile` is a real temp file pre-filled with a known byte so tests can
/// tell wiped content from original content. `FaultyTarget` is an in-memory
/// wipe target with scripted faults for the error paths.
use sayonara_shred::crypto::{EntropyError, EntropySource};
use sayonara_shred::WipeTarget;
use std::cell::Cell;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Byte the original content of every mock file is made of
pub const ORIGINAL_BYTE: u8 = 0xAB;

pub struct MockFile {
    pub temp_file: NamedTempFile,
    pub size: u64,
}

impl MockFile {
    pub fn new(size: u64) -> io::Result<Self> {
        let mut temp_file = NamedTempFile::new()?;

        let mut written = 0u64;
        let chunk = vec![ORIGINAL_BYTE; 64 * 1024];
        while written < size {
            let write_size = (size - written).min(chunk.len() as u64);
            temp_file.write_all(&chunk[..write_size as usize])?;
            written += write_size;
        }

        temp_file.flush()?;
        Ok(Self { temp_file, size })
    }

    pub fn path(&self) -> &Path {
        self.temp_file.path()
    }

    /// Open a fresh read-write handle, the way a caller of the wipe would
    pub fn open_rw(&self) -> io::Result<File> {
        OpenOptions::new().read(true).write(true).open(self.path())
    }

    pub fn contents(&self) -> io::Result<Vec<u8>> {
        std::fs::read(self.path())
    }
}

/// Fault injected into a single `write` call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fault {
    /// Fail with `Interrupted` without writing anything
    Interrupt,
    /// Accept at most this many bytes
    Short(usize),
    /// Report that zero bytes were written
    Zero,
    /// Fail with the given error kind
    Fail(io::ErrorKind),
}

/// In-memory target with per-call fault injection.
///
/// Write faults are keyed by the global index of the `write` call (0-based),
/// seek and flush faults by 1-based pass number (one seek and one flush per pass).
pub struct FaultyTarget {
    pub data: Vec<u8>,
    pos: usize,
    pub write_calls: usize,
    pub seeks: usize,
    pub syncs: usize,
    pub stat_calls: usize,
    pub bytes_per_pass: Vec<u64>,
    current_pass_bytes: u64,
    write_faults: HashMap<usize, Fault>,
    seek_faults: HashMap<usize, Option<u64>>,
    sync_faults: Vec<usize>,
    stat_fails: bool,
    truncate_after_pass: Option<(usize, usize)>,
}

impl FaultyTarget {
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![ORIGINAL_BYTE; size],
            pos: 0,
            write_calls: 0,
            seeks: 0,
            syncs: 0,
            stat_calls: 0,
            bytes_per_pass: Vec::new(),
            current_pass_bytes: 0,
            write_faults: HashMap::new(),
            seek_faults: HashMap::new(),
            sync_faults: Vec::new(),
            stat_fails: false,
            truncate_after_pass: None,
        }
    }

    pub fn fault_on_write(mut self, call: usize, fault: Fault) -> Self {
        self.write_faults.insert(call, fault);
        self
    }

    /// Make the seek of `pass` fail outright (`None`) or land on another offset
    pub fn fault_on_seek(mut self, pass: usize, lands_at: Option<u64>) -> Self {
        self.seek_faults.insert(pass, lands_at);
        self
    }

    pub fn fault_on_sync(mut self, pass: usize) -> Self {
        self.sync_faults.push(pass);
        self
    }

    pub fn failing_stat(mut self) -> Self {
        self.stat_fails = true;
        self
    }

    /// Shrink the backing data to `len` bytes once `pass` has been flushed
    pub fn truncate_after(mut self, pass: usize, len: usize) -> Self {
        self.truncate_after_pass = Some((pass, len));
        self
    }

    pub fn passes_flushed(&self) -> usize {
        self.syncs
    }
}

impl Write for FaultyTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let call = self.write_calls;
        self.write_calls += 1;

        let accepted = match self.write_faults.remove(&call) {
            None => buf.len(),
            Some(Fault::Interrupt) => return Err(io::Error::from(io::ErrorKind::Interrupted)),
            Some(Fault::Short(n)) => n.min(buf.len()),
            Some(Fault::Zero) => 0,
            Some(Fault::Fail(kind)) => return Err(io::Error::new(kind, "injected write fault")),
        };

        let end = self.pos + accepted;
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[self.pos..end].copy_from_slice(&buf[..accepted]);
        self.pos = end;
        self.current_pass_bytes += accepted as u64;
        Ok(accepted)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for FaultyTarget {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.seeks += 1;
        let target = match pos {
            SeekFrom::Start(offset) => offset,
            other => {
                return Err(io::Error::new(
                    io::ErrorKind::Unsupported,
                    format!("unexpected seek {:?}", other),
                ))
            }
        };

        match self.seek_faults.get(&self.seeks) {
            Some(None) => Err(io::Error::new(io::ErrorKind::Other, "injected seek fault")),
            Some(Some(lands_at)) => {
                self.pos = *lands_at as usize;
                Ok(*lands_at)
            }
            None => {
                self.pos = target as usize;
                Ok(target)
            }
        }
    }
}

impl WipeTarget for FaultyTarget {
    fn byte_len(&mut self) -> io::Result<u64> {
        self.stat_calls += 1;
        if self.stat_fails {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "injected stat fault"));
        }
        Ok(self.data.len() as u64)
    }

    fn sync_data(&mut self) -> io::Result<()> {
        self.syncs += 1;
        self.bytes_per_pass.push(self.current_pass_bytes);
        self.current_pass_bytes = 0;

        if let Some((pass, len)) = self.truncate_after_pass {
            if pass == self.syncs {
                self.data.truncate(len);
            }
        }

        if self.sync_faults.contains(&self.syncs) {
            return Err(io::Error::new(io::ErrorKind::Other, "injected sync fault"));
        }
        Ok(())
    }
}

/// Source that yields a fixed byte and counts how often it was asked
pub struct FixedSource {
    pub byte: u8,
    pub calls: Cell<usize>,
}

impl FixedSource {
    pub fn new(byte: u8) -> Self {
        Self {
            byte,
            calls: Cell::new(0),
        }
    }
}

impl EntropySource for FixedSource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.calls.set(self.calls.get() + 1);
        dest.fill(self.byte);
        Ok(())
    }

    fn name(&self) -> &str {
        "FixedSource"
    }
}
