pub mod secure_rng;


// Re-export
pub use secure_rng::{
    calculate_entropy, EntropyError, EntropySource, RingSystemRNG,
};
