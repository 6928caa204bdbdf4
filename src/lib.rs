pub mod algorithms;
pub mod crypto;
pub mod error;
pub mod io;
pub mod settings;
pub mod ui;
pub mod wipe_orchestrator;

// Re-export the main entry points for convenience
pub use error::{WipeError, WipeErrorKind, WipeResult};
pub use io::WipeTarget;
pub use wipe_orchestrator::{
    wipe, wipe_with_rng, NoopObserver, PassObserver, WipeOrchestrator, WipeSummary,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WipeConfig {
    pub flush_policy: FlushPolicy,
    /// Unlink the file once every pass has completed (binary only)
    pub remove_after_wipe: bool,
    /// Unlink the file even if the wipe failed part way (binary only)
    pub remove_on_failure: bool,
}

impl Default for WipeConfig {
    fn default() -> Self {
        Self {
            flush_policy: FlushPolicy::Abort,
            remove_after_wipe: false,
            remove_on_failure: false,
        }
    }
}

/// What to do when the durability flush after a pass fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlushPolicy {
    /// Treat it like a write failure and stop the wipe
    Abort,
    /// Log it and carry on with the next pass
    BestEffort,
}

impl std::str::FromStr for FlushPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(FlushPolicy::Abort),
            "best-effort" | "besteffort" | "best_effort" => Ok(FlushPolicy::BestEffort),
            other => Err(format!(
                "unknown flush policy '{}' (expected 'abort' or 'best-effort')",
                other
            )),
        }
    }
}
