//! Per-run state shared by every lint phase.

use std::time::{Duration, Instant};

use crate::domain::Diagnostics;

/// Owns the diagnostics sink and the start time of one lint run.
#[derive(Debug)]
pub struct RunContext {
    diagnostics: Diagnostics,
    started: Instant,
}

impl RunContext {
    /// Starts a new run; the timer begins now.
    pub fn new() -> Self {
        Self {
            diagnostics: Diagnostics::new(),
            started: Instant::now(),
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    /// Time since the run started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Consumes the context, returning everything that was recorded.
    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::new()
    }
}
