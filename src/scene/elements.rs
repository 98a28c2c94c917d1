use crate::{
    animation::spring::SpringConfig, foundation::core::Point, timeline::phase::PhaseTimeline,
};

/// Closed set of renderable element kinds. The render layer dispatches on
/// this; the core only decides transforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ElementKind {
    TextBlock,
    Card,
    Particle,
    Decoration,
}

/// Motion grammar bound to an element. Parameters are precomputed absolute
/// frame numbers and NVU anchors, so per-frame evaluation touches no
/// scenario state.
#[derive(Clone, Debug)]
pub enum Motion {
    /// Word stack that holds center screen then rises off the top, with a
    /// small deterministic jitter.
    HookRise { anchor_y: f64, jitter_phase: f64 },
    /// Spring pop-in triggered `trigger` frames into the timeline.
    TitlePop {
        anchor_y: f64,
        trigger: u64,
        spring: SpringConfig,
    },
    /// Delayed fade-in panel.
    DetailsFade { anchor_y: f64, enter_start: u64 },
    /// Pane growing horizontally from zero width. The anchor is an NVU
    /// point (x, y fractions of the frame).
    BonusGrow { anchor: Point, grow_start: u64 },
    /// Media card: parked, then flip-docks at the CTA boundary, then
    /// scale-collapses into the outro.
    CardDock {
        anchor_y: f64,
        dock_start: u64,
        dock_len: u64,
        exit_start: u64,
        exit_end: u64,
    },
    /// Elastic scale pop at an offset into the CTA scene.
    CtaPop { anchor_y: f64, pop_start: u64 },
    /// Vertical slide from below the frame to its resting anchor.
    CtaSlide {
        from_y: f64,
        to_y: f64,
        slide_start: u64,
    },
    /// Continuous sinusoidal bounce around an NVU anchor point.
    PointerBounce { anchor: Point },
    /// Fade-in, optionally with a slow positional bob.
    OutroFade { anchor_y: f64, bob: bool },
    /// One particle of the seeded decoration field.
    Decor { index: usize },
}

/// One scheduled scene element: identity, kind, phase table, motion, and
/// whether the uniform exit fade applies to it.
#[derive(Clone, Debug)]
pub struct Element {
    pub id: String,
    pub kind: ElementKind,
    pub timeline: PhaseTimeline,
    pub motion: Motion,
    /// Elements that vanish by fading follow the shared exit grammar: a
    /// linear opacity ramp over the last `EXIT_FADE_FRAMES` frames of the
    /// lifetime. Elements that fly or scale off screen leave this unset.
    pub fade_out: bool,
}

impl Element {
    pub fn new(
        id: impl Into<String>,
        kind: ElementKind,
        timeline: PhaseTimeline,
        motion: Motion,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            timeline,
            motion,
            fade_out: false,
        }
    }

    pub fn with_fade_out(mut self) -> Self {
        self.fade_out = true;
        self
    }
}
