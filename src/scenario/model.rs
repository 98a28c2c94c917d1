use crate::foundation::{
    core::{FrameIndex, FrameRange, Fps, Resolution},
    error::{FrameloomError, FrameloomResult},
};

/// Immutable render-job input, deserialized once from a scenario JSON
/// document and passed by reference into the composer. Parsing/IO is a
/// collaborator concern; this module only defines shape and validation.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scenario {
    pub meta: Meta,
    pub assets: Assets,
    pub timings: Timings,
    pub content: Content,
    #[serde(default)]
    pub overrides: Overrides,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Meta {
    /// Single integer driving every pseudo-random decision for the render:
    /// theme choice, decorative placement, per-element jitter.
    pub theme_seed: u64,
    pub config: RenderConfig,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct RenderConfig {
    pub resolution: Resolution,
    pub fps: u32,
}

/// Asset references, resolved and loaded by external collaborators.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Assets {
    pub video_src: String,
    pub thumb_src: String,
    pub logo_src: String,
    pub audio_track: String,
}

/// One scene's placement on the wall clock, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneTiming {
    pub start_time: f64,
    pub duration: f64,
}

impl SceneTiming {
    pub fn end_time(self) -> f64 {
        self.start_time + self.duration
    }

    /// Snap to frames; start and duration round independently so a scene
    /// table authored on whole-frame boundaries survives exactly.
    pub fn to_range(self, fps: Fps) -> FrameRange {
        let start = fps.secs_to_frames_round(self.start_time);
        let dur = fps.secs_to_frames_round(self.duration);
        FrameRange {
            start: FrameIndex(start),
            end: FrameIndex(start + dur),
        }
    }
}

/// Named scene timing table. Scene order is fixed by the format: hook,
/// then the title/details/bonus block, then the CTA pair, then outro.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Timings {
    pub hook: SceneTiming,
    pub title: SceneTiming,
    pub details: SceneTiming,
    pub bonus: SceneTiming,
    pub cta_social: SceneTiming,
    pub cta_link: SceneTiming,
    pub outro: SceneTiming,
    pub total_duration: f64,
}

impl Timings {
    pub fn total_frames(&self, fps: Fps) -> FrameIndex {
        FrameIndex(fps.secs_to_frames_round(self.total_duration))
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Content {
    pub hook_text: String,
    pub title_text: String,
    pub details_text: String,
    pub bonus_text: String,
    pub cta: CtaContent,
    pub outro: OutroContent,
    #[serde(default)]
    pub watermark_text: String,
    #[serde(default)]
    pub copyright_text: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CtaContent {
    pub social_text: String,
    pub link_text: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct OutroContent {
    pub usp_line_1: String,
    pub usp_line_2: String,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PosFraction {
    pub x: f64,
    pub y: f64,
}

/// Optional per-scenario layout tweaks; defaults match the house template.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Overrides {
    #[serde(default = "Overrides::default_padding_x")]
    pub padding_x_fraction: f64,
    #[serde(default = "Overrides::default_safe_zone_b")]
    pub safe_zone_b_fraction: f64,
    #[serde(default = "Overrides::default_bonus_pos")]
    pub bonus_pos_fraction: PosFraction,
}

impl Overrides {
    fn default_padding_x() -> f64 {
        0.05
    }

    fn default_safe_zone_b() -> f64 {
        crate::scene::constants::SAFE_ZONE_BOTTOM
    }

    fn default_bonus_pos() -> PosFraction {
        PosFraction {
            x: crate::scene::constants::BONUS_X,
            y: crate::scene::constants::BONUS_Y,
        }
    }
}

impl Default for Overrides {
    fn default() -> Self {
        Self {
            padding_x_fraction: Self::default_padding_x(),
            safe_zone_b_fraction: Self::default_safe_zone_b(),
            bonus_pos_fraction: Self::default_bonus_pos(),
        }
    }
}

impl Scenario {
    pub fn fps(&self) -> FrameloomResult<Fps> {
        Fps::new(self.meta.config.fps, 1)
    }

    pub fn validate(&self) -> FrameloomResult<()> {
        let res = self.meta.config.resolution;
        if res.w == 0 || res.h == 0 {
            return Err(FrameloomError::config("resolution must be > 0 in both axes"));
        }
        self.fps()?;

        let t = &self.timings;
        if !t.total_duration.is_finite() || t.total_duration <= 0.0 {
            return Err(FrameloomError::config("total_duration must be > 0 seconds"));
        }
        for (name, scene) in self.named_scenes() {
            if !scene.start_time.is_finite() || scene.start_time < 0.0 {
                return Err(FrameloomError::config(format!(
                    "scene '{name}' start_time must be >= 0"
                )));
            }
            if !scene.duration.is_finite() || scene.duration < 0.0 {
                return Err(FrameloomError::config(format!(
                    "scene '{name}' duration must be >= 0"
                )));
            }
            if scene.end_time() > t.total_duration + 1e-9 {
                return Err(FrameloomError::config(format!(
                    "scene '{name}' runs past total_duration"
                )));
            }
        }

        // Scene-order invariants the composer's synchronization rules
        // depend on.
        if t.title.start_time < t.hook.start_time {
            return Err(FrameloomError::config("title must not start before hook"));
        }
        if t.details.start_time < t.title.start_time {
            return Err(FrameloomError::config("details must not start before title"));
        }
        if t.cta_social.start_time < t.title.start_time {
            return Err(FrameloomError::config(
                "cta_social must not start before title",
            ));
        }
        if t.outro.start_time < t.cta_social.start_time {
            return Err(FrameloomError::config(
                "outro must not start before cta_social",
            ));
        }

        let o = &self.overrides;
        if !(0.0..0.5).contains(&o.padding_x_fraction) {
            return Err(FrameloomError::config(
                "padding_x_fraction must be in [0, 0.5)",
            ));
        }
        if !(0.0..1.0).contains(&o.safe_zone_b_fraction) {
            return Err(FrameloomError::config(
                "safe_zone_b_fraction must be in [0, 1)",
            ));
        }

        Ok(())
    }

    fn named_scenes(&self) -> [(&'static str, SceneTiming); 7] {
        let t = &self.timings;
        [
            ("hook", t.hook),
            ("title", t.title),
            ("details", t.details),
            ("bonus", t.bonus),
            ("cta_social", t.cta_social),
            ("cta_link", t.cta_link),
            ("outro", t.outro),
        ]
    }
}
