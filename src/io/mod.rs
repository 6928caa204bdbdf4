pub mod reliable_writer;


// Re-exports
pub use reliable_writer::{write_fully, MAX_SINGLE_WRITE};

use std::fs::File;
use std::io::{self, Cursor, Seek, Write};

/// An open, writable handle the wipe engine can overwrite in place.
///
/// The engine never opens or closes the handle. Besides plain writes and
/// seeks it needs exactly two extra capabilities: a size query, taken once at
/// the start of a wipe, and a durability flush issued after every pass.
pub trait WipeTarget: Write + Seek {
    /// Current size of the underlying file in bytes
    fn byte_len(&mut self) -> io::Result<u64>;

    /// Ask the OS to make previously written data persistent
    fn sync_data(&mut self) -> io::Result<()>;
}

impl WipeTarget for File {
    fn byte_len(&mut self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn sync_data(&mut self) -> io::Result<()> {
        File::sync_data(self)
    }
}

/// In-memory target, handy for dry runs
impl WipeTarget for Cursor<Vec<u8>> {
    fn byte_len(&mut self) -> io::Result<u64> {
        Ok(self.get_ref().len() as u64)
    }

    fn sync_data(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: WipeTarget + ?Sized> WipeTarget for &mut T {
    fn byte_len(&mut self) -> io::Result<u64> {
        (**self).byte_len()
    }

    fn sync_data(&mut self) -> io::Result<()> {
        (**self).sync_data()
    }
}
