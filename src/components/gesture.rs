use serde::{Deserialize, Serialize};

/// Tracks a sustained downward gaze.
///
/// Each sample with a negative vertical look component adds one to the counter; any
/// other sample clears it. Descent is permitted once the counter reaches the threshold
/// and stays permitted until the next clear, so permission is slow to grant and
/// instant to revoke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescentGesture {
    threshold: u32,
    samples: u32,
    permitted: bool,
}

impl DescentGesture {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            samples: 0,
            permitted: false,
        }
    }

    /// Feeds one sampled look direction's vertical component.
    pub fn sample(&mut self, vertical: f32) {
        if vertical < 0.0 {
            self.samples = self.samples.saturating_add(1);
            if self.samples >= self.threshold {
                self.permitted = true;
            }
        } else {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.samples = 0;
        self.permitted = false;
    }

    pub fn descent_permitted(&self) -> bool {
        self.permitted
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }
}
