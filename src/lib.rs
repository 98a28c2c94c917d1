//! Frameloom is a deterministic animation timeline engine for short-form
//! video scenarios.
//!
//! An external render driver supplies a monotonically increasing (or
//! arbitrarily scrubbed) frame number; frameloom answers with the complete
//! per-element transform set for that frame:
//!
//! 1. **Scenario**: an immutable JSON-derived document of scene timings,
//!    content strings, and a theme seed (`Scenario`)
//! 2. **Compose**: `Scenario -> SceneComposer` (per-element phase tables,
//!    text fits, seeded decoration placement, safe-zone check)
//! 3. **Evaluate**: `SceneComposer::render_state(frame) -> map of
//!    element id -> Transform`, a pure function of the frame
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: every query is a pure function of
//!   `(frame, scenario, seed)`; no cross-call mutable state, so frames can
//!   be rendered out of order or split across worker processes.
//! - **No IO in the core**: asset loading, font measurement, and encoding
//!   are collaborator concerns behind narrow interfaces.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod layout;
mod scenario;
mod scene;
mod timeline;

pub use animation::ease::Ease;
pub use animation::interp::{Extrapolate, interpolate, ramp};
pub use animation::rng::SeedStream;
pub use animation::spring::{SpringConfig, spring_value};
pub use foundation::core::{
    DVec3, FrameIndex, FrameRange, Fps, Point, Rect, Resolution, Transform, Vec2, nvu_to_world_x,
    nvu_to_world_y,
};
pub use foundation::error::{FrameloomError, FrameloomResult};
pub use layout::decor::{DECOR_EXTENT, DecorField, DecorPlacement};
pub use layout::fit::{FitCache, FitOptions, LayoutResult, fit_text};
pub use scenario::dsl::ScenarioBuilder;
pub use scenario::model::{
    Assets, Content, CtaContent, Meta, OutroContent, Overrides, PosFraction, RenderConfig,
    Scenario, SceneTiming, Timings,
};
pub use scenario::theme::{Rgb, Theme};
pub use scene::composer::SceneComposer;
pub use scene::constants;
pub use scene::elements::{Element, ElementKind, Motion};
pub use scene::fingerprint::{FrameFingerprint, fingerprint_state};
pub use timeline::phase::{PhaseAt, PhaseSpec, PhaseTimeline};
