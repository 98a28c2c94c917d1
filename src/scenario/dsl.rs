use crate::{
    foundation::core::Resolution,
    foundation::error::FrameloomResult,
    scenario::model::{
        Assets, Content, CtaContent, Meta, OutroContent, Overrides, RenderConfig, Scenario,
        SceneTiming, Timings,
    },
};

/// Programmatic scenario construction, mainly for tests and examples.
/// `build` runs the same validation as JSON-loaded scenarios.
pub struct ScenarioBuilder {
    seed: u64,
    resolution: Resolution,
    fps: u32,
    timings: Timings,
    content: Content,
    assets: Assets,
    overrides: Overrides,
}

impl ScenarioBuilder {
    pub fn new(resolution: Resolution, fps: u32, timings: Timings) -> Self {
        Self {
            seed: 0,
            resolution,
            fps,
            timings,
            content: Content {
                hook_text: String::new(),
                title_text: String::new(),
                details_text: String::new(),
                bonus_text: String::new(),
                cta: CtaContent {
                    social_text: String::new(),
                    link_text: String::new(),
                },
                outro: OutroContent {
                    usp_line_1: String::new(),
                    usp_line_2: String::new(),
                },
                watermark_text: String::new(),
                copyright_text: String::new(),
            },
            assets: Assets {
                video_src: "assets/clip.mp4".to_string(),
                thumb_src: "assets/thumb.png".to_string(),
                logo_src: "assets/logo.png".to_string(),
                audio_track: "assets/track.wav".to_string(),
            },
            overrides: Overrides::default(),
        }
    }

    /// A small, valid scenario used across the test suite: a 3 s hook, a
    /// 5 s title block, CTA at 8 s and outro at 12 s, 30 fps vertical frame.
    pub fn sample() -> Self {
        let timings = Timings {
            hook: SceneTiming {
                start_time: 0.0,
                duration: 3.0,
            },
            title: SceneTiming {
                start_time: 3.0,
                duration: 5.0,
            },
            details: SceneTiming {
                start_time: 3.5,
                duration: 4.5,
            },
            bonus: SceneTiming {
                start_time: 5.0,
                duration: 3.0,
            },
            cta_social: SceneTiming {
                start_time: 8.0,
                duration: 4.0,
            },
            cta_link: SceneTiming {
                start_time: 9.25,
                duration: 2.75,
            },
            outro: SceneTiming {
                start_time: 12.0,
                duration: 3.0,
            },
            total_duration: 15.0,
        };
        Self::new(Resolution { w: 1080, h: 1920 }, 30, timings)
            .hook_text("Stop losing easy marks")
            .title_text("The two-column revision trick")
            .details_text("Split every page: questions left, recall right. Cover and self-test.")
            .bonus_text("Works for formulas too")
            .cta("Follow for daily tips", "Full guide in bio")
            .outro("Revise smarter", "Score higher")
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn hook_text(mut self, text: impl Into<String>) -> Self {
        self.content.hook_text = text.into();
        self
    }

    pub fn title_text(mut self, text: impl Into<String>) -> Self {
        self.content.title_text = text.into();
        self
    }

    pub fn details_text(mut self, text: impl Into<String>) -> Self {
        self.content.details_text = text.into();
        self
    }

    pub fn bonus_text(mut self, text: impl Into<String>) -> Self {
        self.content.bonus_text = text.into();
        self
    }

    pub fn cta(mut self, social: impl Into<String>, link: impl Into<String>) -> Self {
        self.content.cta = CtaContent {
            social_text: social.into(),
            link_text: link.into(),
        };
        self
    }

    pub fn outro(mut self, line_1: impl Into<String>, line_2: impl Into<String>) -> Self {
        self.content.outro = OutroContent {
            usp_line_1: line_1.into(),
            usp_line_2: line_2.into(),
        };
        self
    }

    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn build(self) -> FrameloomResult<Scenario> {
        let scenario = Scenario {
            meta: Meta {
                theme_seed: self.seed,
                config: RenderConfig {
                    resolution: self.resolution,
                    fps: self.fps,
                },
            },
            assets: self.assets,
            timings: self.timings,
            content: self.content,
            overrides: self.overrides,
        };
        scenario.validate()?;
        Ok(scenario)
    }
}
