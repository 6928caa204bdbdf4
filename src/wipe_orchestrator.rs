// Wipe Orchestrator - Drives the 35-pass Gutmann plan over one open file
//
// The file size is sampled once, then every pass of the plan overwrites
// exactly that many bytes from offset 0. The first failing pass ends the
// wipe and the file is left partially overwritten.

use crate::algorithms::{
    pattern_pass, random_pass, tile_pattern, PassDescriptor, GUTMANN_PLAN, SCRATCH_SIZE,
};
use crate::crypto::{EntropySource, RingSystemRNG};
use crate::error::{WipeError, WipeResult};
use crate::io::WipeTarget;
use crate::{FlushPolicy, WipeConfig};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Callbacks fired around every pass, used for progress reporting
pub trait PassObserver {
    fn on_pass_start(&mut self, _pass: usize, _total: usize, _descriptor: &PassDescriptor) {}

    fn on_pass_complete(&mut self, _pass: usize, _total: usize, _bytes: u64) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PassObserver for NoopObserver {}

/// Outcome of a completed wipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WipeSummary {
    /// Size snapshot taken before the first pass
    pub file_size: u64,
    pub passes_completed: usize,
    pub bytes_written: u64,
    /// Flushes that failed but were tolerated under `FlushPolicy::BestEffort`
    pub flush_failures: usize,
    pub elapsed: Duration,
}

pub struct WipeOrchestrator<'a, R: EntropySource + ?Sized> {
    rng: &'a R,
    config: WipeConfig,
    observer: Box<dyn PassObserver + 'a>,
}

impl<'a, R: EntropySource + ?Sized> WipeOrchestrator<'a, R> {
    pub fn new(rng: &'a R, config: WipeConfig) -> Self {
        Self {
            rng,
            config,
            observer: Box::new(NoopObserver),
        }
    }

    pub fn with_observer(mut self, observer: impl PassObserver + 'a) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Run the full plan against `handle`
    pub fn run<T: WipeTarget + ?Sized>(&mut self, handle: &mut T) -> WipeResult<WipeSummary> {
        let start = Instant::now();
        let file_size = handle.byte_len().map_err(WipeError::Stat)?;

        let mut summary = WipeSummary {
            file_size,
            passes_completed: 0,
            bytes_written: 0,
            flush_failures: 0,
            elapsed: Duration::ZERO,
        };

        if file_size == 0 {
            tracing::info!("File is empty, nothing to overwrite");
            return Ok(summary);
        }

        tracing::info!(
            file_size,
            passes = GUTMANN_PLAN.len(),
            rng = self.rng.name(),
            "Starting Gutmann wipe"
        );

        // Reused by every pass; never outlives this call
        let mut scratch = [0u8; SCRATCH_SIZE];
        let total = GUTMANN_PLAN.len();

        for (index, descriptor) in GUTMANN_PLAN.iter().enumerate() {
            let pass = index + 1;
            let pass_start = Instant::now();

            self.observer.on_pass_start(pass, total, descriptor);
            tracing::info!(pass, total, kind = %descriptor, "Starting pass");

            let result = match descriptor.pattern() {
                None => random_pass(handle, self.rng, &mut scratch, file_size, pass),
                Some(pattern) => {
                    let len = tile_pattern(&mut scratch, pattern);
                    pattern_pass(handle, &scratch[..len], file_size, pass)
                }
            };

            match result {
                Ok(()) => {}
                Err(err @ WipeError::Flush { .. })
                    if self.config.flush_policy == FlushPolicy::BestEffort =>
                {
                    tracing::warn!(pass, error = %err, "Flush failed, continuing (best-effort)");
                    summary.flush_failures += 1;
                }
                Err(err) => {
                    tracing::error!(
                        pass,
                        completed = summary.passes_completed,
                        error = %err,
                        "Wipe aborted, file is partially overwritten"
                    );
                    return Err(err);
                }
            }

            summary.passes_completed += 1;
            summary.bytes_written += file_size;
            self.observer.on_pass_complete(pass, total, file_size);

            tracing::info!(
                pass,
                elapsed_ms = pass_start.elapsed().as_millis() as u64,
                "Pass completed"
            );
        }

        summary.elapsed = start.elapsed();
        tracing::info!(
            bytes_written = summary.bytes_written,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "Gutmann wipe completed"
        );

        Ok(summary)
    }
}

/// Overwrite the content of `handle` with the 35-pass plan, using OS randomness
pub fn wipe<T: WipeTarget + ?Sized>(handle: &mut T) -> WipeResult<()> {
    wipe_with_rng(handle, &RingSystemRNG::new())
}

/// Same as [`wipe`] with a caller-supplied random source
pub fn wipe_with_rng<T, R>(handle: &mut T, rng: &R) -> WipeResult<()>
where
    T: WipeTarget + ?Sized,
    R: EntropySource + ?Sized,
{
    WipeOrchestrator::new(rng, WipeConfig::default())
        .run(handle)
        .map(|_| ())
}
