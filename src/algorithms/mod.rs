pub mod gutmann;
pub mod passes;


// Re-export the plan and the pass primitives
pub use gutmann::{tile_pattern, PassDescriptor, GUTMANN_PASSES, GUTMANN_PLAN, SCRATCH_SIZE};
pub use passes::{pattern_pass, random_pass};
