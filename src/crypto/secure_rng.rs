use ring::rand::{SecureRandom, SystemRandom};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntropyError {
    #[error("{source_name} failed to produce random bytes")]
    Unavailable { source_name: String },
}

/// Source of cryptographically strong random bytes used by the random passes
pub trait EntropySource {
    /// Fill buffer with random bytes
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
    /// Get source name for logging
    fn name(&self) -> &str;
}

impl<T: EntropySource + ?Sized> EntropySource for &T {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Ring-based system random (uses OS facilities)
pub struct RingSystemRNG {
    rng: SystemRandom,
}

impl Default for RingSystemRNG {
    fn default() -> Self {
        Self::new()
    }
}

impl RingSystemRNG {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl EntropySource for RingSystemRNG {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.rng
            .fill(dest)
            .map_err(|_| EntropyError::Unavailable {
                source_name: self.name().to_string(),
            })
    }

    fn name(&self) -> &str {
        "RingSystemRNG"
    }
}

/// Calculate Shannon entropy of data in bits per byte
pub fn calculate_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut counts = [0u64; 256];
    for &byte in data {
        counts[byte as usize] += 1;
    }

    let length = data.len() as f64;
    let mut entropy = 0.0;

    for &count in &counts {
        if count > 0 {
            let probability = count as f64 / length;
            entropy -= probability * probability.log2();
        }
    }

    entropy
}
