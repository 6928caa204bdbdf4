use std::fmt;

use PassDescriptor::{Pattern, Random};

/// Size of the scratch buffer every pass writes through
pub const SCRATCH_SIZE: usize = 4096;

/// Number of passes in the Gutmann sequence
pub const GUTMANN_PASSES: usize = 35;

/// What a single overwrite pass writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassDescriptor {
    /// Cryptographically secure random data
    Random,
    /// A short unit (1 or 3 bytes) repeated across the whole file
    Pattern(&'static [u8]),
}

impl PassDescriptor {
    pub fn is_random(&self) -> bool {
        matches!(self, Random)
    }

    pub fn pattern(&self) -> Option<&'static [u8]> {
        match *self {
            Random => None,
            Pattern(bytes) => Some(bytes),
        }
    }

    /// Short label for logs and progress output
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PassDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Random => f.write_str("random"),
            Pattern(bytes) => {
                f.write_str("pattern")?;
                for b in bytes.iter() {
                    write!(f, " {:02x}", b)?;
                }
                Ok(())
            }
        }
    }
}

/// The 35-pass Gutmann overwrite sequence, in execution order.
///
/// Passes 1-4 and 32-35 are random data. 0x55 and 0xAA open the pattern
/// block and show up again in the full single-byte sweep, and the first three
/// triple patterns run twice: once on their own and once as part of the full
/// RLL set.
pub const GUTMANN_PLAN: [PassDescriptor; GUTMANN_PASSES] = [
    Random,                          // Pass 1
    Random,                          // Pass 2
    Random,                          // Pass 3
    Random,                          // Pass 4
    Pattern(&[0x55]),                // Pass 5
    Pattern(&[0xAA]),                // Pass 6
    Pattern(&[0x92, 0x49, 0x24]),    // Pass 7
    Pattern(&[0x49, 0x24, 0x92]),    // Pass 8
    Pattern(&[0x24, 0x92, 0x49]),    // Pass 9
    Pattern(&[0x00]),                // Pass 10
    Pattern(&[0x11]),                // Pass 11
    Pattern(&[0x22]),                // Pass 12
    Pattern(&[0x33]),                // Pass 13
    Pattern(&[0x44]),                // Pass 14
    Pattern(&[0x55]),                // Pass 15
    Pattern(&[0x66]),                // Pass 16
    Pattern(&[0x77]),                // Pass 17
    Pattern(&[0x88]),                // Pass 18
    Pattern(&[0x99]),                // Pass 19
    Pattern(&[0xAA]),                // Pass 20
    Pattern(&[0xBB]),                // Pass 21
    Pattern(&[0xCC]),                // Pass 22
    Pattern(&[0xDD]),                // Pass 23
    Pattern(&[0xEE]),                // Pass 24
    Pattern(&[0xFF]),                // Pass 25
    Pattern(&[0x92, 0x49, 0x24]),    // Pass 26
    Pattern(&[0x49, 0x24, 0x92]),    // Pass 27
    Pattern(&[0x24, 0x92, 0x49]),    // Pass 28
    Pattern(&[0x6D, 0xB6, 0xDB]),    // Pass 29
    Pattern(&[0xB6, 0xDB, 0x6D]),    // Pass 30
    Pattern(&[0xDB, 0x6D, 0xB6]),    // Pass 31
    Random,                          // Pass 32
    Random,                          // Pass 33
    Random,                          // Pass 34
    Random,                          // Pass 35
];

/// Tile `pattern` across the front of `buf`.
///
/// Fills the longest prefix whose length is a whole multiple of the pattern
/// length and returns that prefix length. An empty pattern fills nothing.
pub fn tile_pattern(buf: &mut [u8], pattern: &[u8]) -> usize {
    if pattern.is_empty() {
        return 0;
    }

    let mut filled = 0;
    for chunk in buf.chunks_exact_mut(pattern.len()) {
        chunk.copy_from_slice(pattern);
        filled += pattern.len();
    }
    filled
}
