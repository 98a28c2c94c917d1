use crate::{
    animation::ease::Ease,
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{FrameloomError, FrameloomResult},
};

/// One named, half-open frame interval in an element's lifecycle.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PhaseSpec {
    pub name: String,
    pub range: FrameRange,
    pub ease: Ease,
}

impl PhaseSpec {
    pub fn new(name: impl Into<String>, range: FrameRange, ease: Ease) -> Self {
        Self {
            name: name.into(),
            range,
            ease,
        }
    }
}

/// Where a frame falls relative to an element's phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseAt {
    /// Before the first phase starts.
    Pending,
    /// Inside phase `index` (half-open `[start, end)`).
    Active { index: usize },
    /// At or past the end of the last phase.
    Done,
}

/// Ordered, contiguous phase table for one element.
///
/// Phase lookup is a pure function of the frame: rewinding behaves
/// identically to forward playback, and elements reported `Pending` or
/// `Done` are simply not visible.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PhaseTimeline {
    phases: Vec<PhaseSpec>,
}

impl PhaseTimeline {
    /// Validates that phases are non-empty and contiguous: each phase must
    /// start exactly where the previous one ends. Gaps and overlaps are
    /// authoring bugs.
    pub fn new(phases: Vec<PhaseSpec>) -> FrameloomResult<Self> {
        if phases.is_empty() {
            return Err(FrameloomError::config(
                "PhaseTimeline needs at least one phase",
            ));
        }
        for w in phases.windows(2) {
            if w[1].range.start != w[0].range.end {
                return Err(FrameloomError::config(format!(
                    "phase '{}' must start at frame {} where '{}' ends (starts at {})",
                    w[1].name, w[0].range.end.0, w[0].name, w[1].range.start.0
                )));
            }
        }
        Ok(Self { phases })
    }

    /// Build from `(name, start_frame, end_frame, ease)` tuples.
    pub fn from_bounds<S: Into<String>>(bounds: Vec<(S, u64, u64, Ease)>) -> FrameloomResult<Self> {
        let mut phases = Vec::with_capacity(bounds.len());
        for (name, start, end, ease) in bounds {
            let range = FrameRange::new(FrameIndex(start), FrameIndex(end))?;
            phases.push(PhaseSpec::new(name, range, ease));
        }
        Self::new(phases)
    }

    pub fn phases(&self) -> &[PhaseSpec] {
        &self.phases
    }

    pub fn phase(&self, index: usize) -> &PhaseSpec {
        &self.phases[index]
    }

    /// Full visible lifetime `[first.start, last.end)`.
    pub fn lifetime(&self) -> FrameRange {
        FrameRange {
            start: self.phases[0].range.start,
            end: self.phases[self.phases.len() - 1].range.end,
        }
    }

    pub fn is_visible(&self, frame: FrameIndex) -> bool {
        self.lifetime().contains(frame)
    }

    pub fn phase_at(&self, frame: FrameIndex) -> PhaseAt {
        let lifetime = self.lifetime();
        if frame.0 < lifetime.start.0 {
            return PhaseAt::Pending;
        }
        if frame.0 >= lifetime.end.0 {
            return PhaseAt::Done;
        }
        let index = self
            .phases
            .partition_point(|p| p.range.end.0 <= frame.0);
        debug_assert!(self.phases[index].range.contains(frame));
        PhaseAt::Active { index }
    }

    /// Progress within the active phase, clamped to `[0, 1]`. Outside the
    /// lifetime, and for zero-duration phases, this is 0.
    pub fn local_progress(&self, frame: FrameIndex) -> f64 {
        let PhaseAt::Active { index } = self.phase_at(frame) else {
            return 0.0;
        };
        let range = self.phases[index].range;
        let len = range.len_frames();
        if len == 0 {
            return 0.0;
        }
        (((frame.0 - range.start.0) as f64) / (len as f64)).clamp(0.0, 1.0)
    }

    /// `local_progress` shaped by the active phase's easing curve.
    pub fn eased_progress(&self, frame: FrameIndex) -> f64 {
        let PhaseAt::Active { index } = self.phase_at(frame) else {
            return 0.0;
        };
        self.phases[index].ease.apply(self.local_progress(frame))
    }
}
