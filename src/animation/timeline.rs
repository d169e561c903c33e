use crate::animation::ease::Ease;

/// Shortest duration a timeline runs for, in milliseconds.
///
/// Shorter requests are clamped so the blend never divides by zero; a zero-length timeline
/// still completes on its first non-empty tick.
pub const MIN_DURATION_MS: f64 = 1.0;

/// How many times a timeline runs before it is destroyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Loops {
    /// Run this many times (`0` is treated as `1`).
    Count(u32),
    /// Never finish on its own.
    Infinite,
}

impl Default for Loops {
    fn default() -> Self {
        Self::ONCE
    }
}

impl Loops {
    /// Run once.
    pub const ONCE: Self = Self::Count(1);

    fn normalized(self) -> Self {
        match self {
            Self::Count(0) => Self::ONCE,
            other => other,
        }
    }
}

/// Parameters of a timeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimelineSpec {
    /// Length of one loop in milliseconds.
    pub duration_ms: f64,
    /// Easing applied to the blend handed to the update callback.
    pub ease: Ease,
    /// Loop count.
    pub loops: Loops,
    /// Freeze while the engine is globally paused.
    pub pause_sensitive: bool,
}

impl Default for TimelineSpec {
    fn default() -> Self {
        Self {
            duration_ms: 0.0,
            ease: Ease::Linear,
            loops: Loops::ONCE,
            pause_sensitive: true,
        }
    }
}

impl TimelineSpec {
    /// Single run of `duration_ms` with `ease`.
    pub fn new(duration_ms: f64, ease: Ease) -> Self {
        Self {
            duration_ms,
            ease,
            ..Self::default()
        }
    }

    /// Copy with a different loop count.
    pub fn with_loops(self, loops: Loops) -> Self {
        Self { loops, ..self }
    }

    /// Copy with a different pause sensitivity.
    pub fn with_pause_sensitive(self, pause_sensitive: bool) -> Self {
        Self {
            pause_sensitive,
            ..self
        }
    }
}

/// Result of advancing a timeline by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    /// Paused; nothing happened.
    Skipped,
    /// Still inside the current loop.
    Running {
        /// Eased blend in the current loop.
        blend: f64,
    },
    /// The current loop reached its duration.
    LoopCompleted {
        /// Eased blend, `ease(1.0)`.
        blend: f64,
        /// No loops remain; the timeline must be destroyed.
        finished: bool,
    },
}

/// Clock and loop bookkeeping of one timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineState {
    duration_ms: f64,
    ease: Ease,
    loops: Loops,
    pause_sensitive: bool,
    paused: bool,
    current_ms: f64,
    completed_loops: u32,
}

impl TimelineState {
    /// Fresh state at time zero.
    pub fn new(spec: TimelineSpec) -> Self {
        let duration_ms = if spec.duration_ms.is_finite() {
            spec.duration_ms.max(MIN_DURATION_MS)
        } else {
            MIN_DURATION_MS
        };
        Self {
            duration_ms,
            ease: spec.ease,
            loops: spec.loops.normalized(),
            pause_sensitive: spec.pause_sensitive,
            paused: false,
            current_ms: 0.0,
            completed_loops: 0,
        }
    }

    /// Effective loop duration after clamping.
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Easing curve.
    pub fn ease(&self) -> Ease {
        self.ease
    }

    /// Time elapsed in the current loop.
    pub fn current_ms(&self) -> f64 {
        self.current_ms
    }

    /// Loops finished so far.
    pub fn completed_loops(&self) -> u32 {
        self.completed_loops
    }

    /// Linear progress through the current loop in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.current_ms.clamp(0.0, self.duration_ms) / self.duration_ms
    }

    /// Individually paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Freezes while the engine is globally paused.
    pub fn is_pause_sensitive(&self) -> bool {
        self.pause_sensitive
    }

    /// Stop advancing until resumed.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Continue advancing.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Flip the paused flag.
    pub fn toggle(&mut self) {
        self.paused = !self.paused;
    }

    /// Back to time zero with no completed loops.
    pub fn reset(&mut self) {
        self.current_ms = 0.0;
        self.completed_loops = 0;
    }

    /// Eased blend of the final frame.
    pub fn final_blend(&self) -> f64 {
        self.ease.apply(1.0)
    }

    /// Advance by `dt_ms` of wall time.
    pub fn advance(&mut self, dt_ms: f64, globally_paused: bool) -> Tick {
        if self.paused || (self.pause_sensitive && globally_paused) {
            return Tick::Skipped;
        }
        self.current_ms += dt_ms.max(0.0);
        let blend = self.ease.apply(self.progress());
        if self.current_ms < self.duration_ms {
            return Tick::Running { blend };
        }

        self.completed_loops = self.completed_loops.saturating_add(1);
        self.current_ms = 0.0;
        let finished = match self.loops {
            Loops::Infinite => false,
            Loops::Count(n) => self.completed_loops >= n,
        };
        Tick::LoopCompleted { blend, finished }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
