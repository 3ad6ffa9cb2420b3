use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How often a gated piece of work should run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Cadence {
    /// Open on every Nth invocation (N = 1 opens on every call).
    EveryNth(u32),
    /// Open each time the accumulated elapsed time crosses this interval.
    Interval(Duration),
}

impl Cadence {
    pub fn is_valid(&self) -> bool {
        match self {
            Cadence::EveryNth(n) => *n > 0,
            Cadence::Interval(interval) => !interval.is_zero(),
        }
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Cadence::EveryNth(1)
    }
}

/// A fixed-period scheduling gate.
///
/// Every call to [`CadenceGate::advance`] counts as one invocation and adds `dt` to the
/// time accumulated since the gate last opened. When the gate opens it returns that
/// accumulated span, so nested gates can be driven by the span of the outer one.
#[derive(Debug, Clone, PartialEq)]
pub struct CadenceGate {
    cadence: Cadence,
    invocations: u32,
    since_open: Duration,
}

impl CadenceGate {
    pub fn new(cadence: Cadence) -> Self {
        Self {
            cadence,
            invocations: 0,
            since_open: Duration::ZERO,
        }
    }

    /// Records one invocation. Returns `Some(span)` when the gate opens.
    pub fn advance(&mut self, dt: Duration) -> Option<Duration> {
        self.invocations = self.invocations.wrapping_add(1);
        self.since_open = self.since_open.saturating_add(dt);

        let open = match self.cadence {
            Cadence::EveryNth(n) => n > 0 && self.invocations % n == 0,
            Cadence::Interval(interval) => !interval.is_zero() && self.since_open >= interval,
        };

        if !open {
            return None;
        }

        let span = self.since_open;
        self.since_open = match self.cadence {
            // Keep the remainder so a slow frame does not drift the schedule.
            Cadence::Interval(interval) => span.saturating_sub(interval).min(interval),
            Cadence::EveryNth(_) => Duration::ZERO,
        };
        Some(span)
    }

    pub fn reset(&mut self) {
        self.invocations = 0;
        self.since_open = Duration::ZERO;
    }
}

impl Default for CadenceGate {
    fn default() -> Self {
        Self::new(Cadence::default())
    }
}
