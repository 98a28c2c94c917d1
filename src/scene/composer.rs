use std::collections::BTreeMap;

use crate::{
    animation::{
        ease::Ease,
        interp::ramp,
        rng::SeedStream,
        spring::{SpringConfig, spring_value},
    },
    foundation::{
        core::{
            DVec3, FrameIndex, Fps, Point, Rect, Resolution, Transform, nvu_to_world_x,
            nvu_to_world_y,
        },
        error::{FrameloomError, FrameloomResult},
        math::stable_hash64,
    },
    layout::{
        decor::DecorField,
        fit::{FitOptions, LayoutResult, fit_text},
    },
    scenario::{model::Scenario, theme::Theme},
    scene::constants::*,
    scene::elements::{Element, ElementKind, Motion},
    timeline::phase::{PhaseAt, PhaseTimeline},
};

/// Orchestrates every scenario element into a coherent frame.
///
/// Built once per render job from a borrowed [`Scenario`]; construction
/// derives all per-element frame tables, resolves text fits, places the
/// decoration field, and runs the safe-zone check. After that,
/// [`SceneComposer::render_state`] is a pure function of the frame: no
/// query mutates the composer, so frames can be evaluated repeatedly, out
/// of order, or from parallel workers chunking the timeline.
#[derive(Debug)]
pub struct SceneComposer {
    fps: Fps,
    resolution: Resolution,
    theme: &'static Theme,
    total: FrameIndex,
    elements: Vec<Element>,
    decor: DecorField,
    text_layouts: BTreeMap<String, LayoutResult>,
}

impl SceneComposer {
    pub fn new(scenario: &Scenario) -> FrameloomResult<Self> {
        scenario.validate()?;

        let fps = scenario.fps()?;
        let resolution = scenario.meta.config.resolution;
        let theme = Theme::resolve(scenario.meta.theme_seed);
        let total = scenario.timings.total_frames(fps);
        if total.0 == 0 {
            return Err(FrameloomError::config("scenario rounds to zero frames"));
        }

        let mut builder = ElementSetBuilder::new(scenario, fps, resolution, total);
        builder.build_scene_elements()?;
        builder.check_safe_zone()?;

        let decor = DecorField::generate(
            stable_hash64(scenario.meta.theme_seed, "decor"),
            DECOR_COUNT,
            resolution.height_f64(),
        );
        builder.build_decor_elements(decor.len())?;

        Ok(Self {
            fps,
            resolution,
            theme,
            total,
            elements: builder.elements,
            decor,
            text_layouts: builder.text_layouts,
        })
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn total_frames(&self) -> FrameIndex {
        self.total
    }

    /// Theme colors resolved from the scenario seed, for the render layer.
    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    /// Static text-fit results keyed by element id, for the render layer.
    pub fn text_layouts(&self) -> &BTreeMap<String, LayoutResult> {
        &self.text_layouts
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Evaluate the full per-element transform set for one frame.
    ///
    /// Elements whose phase table reports `Pending` or `Done` are omitted:
    /// absent from the map means not visible. Frames at or past the
    /// scenario total are an evaluation error.
    #[tracing::instrument(skip(self))]
    pub fn render_state(&self, frame: FrameIndex) -> FrameloomResult<BTreeMap<String, Transform>> {
        if frame.0 >= self.total.0 {
            return Err(FrameloomError::evaluation(format!(
                "frame {} out of bounds (total {})",
                frame.0, self.total.0
            )));
        }

        let mut state = BTreeMap::new();
        for el in &self.elements {
            if !matches!(el.timeline.phase_at(frame), PhaseAt::Active { .. }) {
                continue;
            }
            let mut transform = self.transform_for(el, frame)?;
            if el.fade_out {
                let fade = self.exit_fade(&el.timeline, frame)?;
                transform.opacity = transform.opacity.min(fade);
            }
            transform.opacity = transform.opacity.clamp(0.0, 1.0);
            state.insert(el.id.clone(), transform);
        }
        Ok(state)
    }

    /// Shared exit grammar: linear opacity ramp over the final
    /// `EXIT_FADE_FRAMES` frames, hitting zero exactly at the lifetime end.
    fn exit_fade(&self, timeline: &PhaseTimeline, frame: FrameIndex) -> FrameloomResult<f64> {
        let lifetime = timeline.lifetime();
        let fade = EXIT_FADE_FRAMES.min(lifetime.len_frames());
        ramp(
            frame.0 as f64,
            (lifetime.end.0 - fade) as f64,
            lifetime.end.0 as f64,
            1.0,
            0.0,
            Ease::Linear,
        )
    }

    fn transform_for(&self, el: &Element, frame: FrameIndex) -> FrameloomResult<Transform> {
        let w = self.resolution.width_f64();
        let h = self.resolution.height_f64();
        let f = frame.0 as f64;

        match &el.motion {
            Motion::HookRise {
                anchor_y,
                jitter_phase,
            } => {
                let rise = match el.timeline.phase_at(frame) {
                    PhaseAt::Active { index } if el.timeline.phase(index).name == "rise" => {
                        el.timeline.local_progress(frame) * h
                    }
                    _ => 0.0,
                };
                let amp = HOOK_JITTER_AMPLITUDE * h;
                let angle = f * HOOK_JITTER_RATE + jitter_phase;
                let position = DVec3::new(
                    angle.sin() * amp,
                    nvu_to_world_y(*anchor_y, h) + rise + angle.cos() * amp,
                    0.0,
                );
                Ok(Transform::at(position))
            }

            Motion::TitlePop {
                anchor_y,
                trigger,
                spring,
            } => {
                let elapsed = frame.0 as i64 - *trigger as i64;
                let scale = spring_value(elapsed, self.fps, spring);
                Ok(Transform {
                    position: DVec3::new(0.0, nvu_to_world_y(*anchor_y, h), 0.0),
                    scale: DVec3::splat(scale),
                    ..Transform::default()
                })
            }

            Motion::DetailsFade {
                anchor_y,
                enter_start,
            } => {
                let opacity = ramp(
                    f,
                    *enter_start as f64,
                    (*enter_start + ENTER_FADE_FRAMES) as f64,
                    0.0,
                    1.0,
                    Ease::Linear,
                )?;
                Ok(Transform::at(DVec3::new(0.0, nvu_to_world_y(*anchor_y, h), 0.0))
                    .with_opacity(opacity))
            }

            Motion::BonusGrow { anchor, grow_start } => {
                let grow = ramp(
                    f,
                    *grow_start as f64,
                    (*grow_start + BONUS_GROW_FRAMES) as f64,
                    0.0,
                    1.0,
                    Ease::Linear,
                )?;
                Ok(Transform {
                    position: DVec3::new(
                        nvu_to_world_x(anchor.x, w),
                        nvu_to_world_y(anchor.y, h),
                        0.0,
                    ),
                    scale: DVec3::new(grow, 1.0, 1.0),
                    ..Transform::default()
                })
            }

            Motion::CardDock {
                anchor_y,
                dock_start,
                dock_len,
                exit_start,
                exit_end,
            } => {
                let rotation_x = ramp(
                    f,
                    *dock_start as f64,
                    (*dock_start + *dock_len) as f64,
                    0.0,
                    -std::f64::consts::PI,
                    Ease::Linear,
                )?;
                let scale = ramp(
                    f,
                    *exit_start as f64,
                    *exit_end as f64,
                    1.0,
                    0.0,
                    Ease::InExpo,
                )?;
                Ok(Transform {
                    position: DVec3::new(0.0, nvu_to_world_y(*anchor_y, h), 0.0),
                    scale: DVec3::splat(scale),
                    rotation: DVec3::new(rotation_x, 0.0, 0.0),
                    opacity: 1.0,
                })
            }

            Motion::CtaPop { anchor_y, pop_start } => {
                let scale = ramp(
                    f,
                    *pop_start as f64,
                    (*pop_start + CTA_POP_FRAMES) as f64,
                    0.0,
                    1.0,
                    Ease::OutElastic,
                )?;
                Ok(Transform {
                    position: DVec3::new(0.0, nvu_to_world_y(*anchor_y, h), 0.0),
                    scale: DVec3::splat(scale.max(0.0)),
                    ..Transform::default()
                })
            }

            Motion::CtaSlide {
                from_y,
                to_y,
                slide_start,
            } => {
                let y_frac = ramp(
                    f,
                    *slide_start as f64,
                    (*slide_start + CTA_SLIDE_FRAMES) as f64,
                    *from_y,
                    *to_y,
                    Ease::OutCubic,
                )?;
                Ok(Transform::at(DVec3::new(0.0, nvu_to_world_y(y_frac, h), 0.0)))
            }

            Motion::PointerBounce { anchor } => {
                let t = self.fps.frames_to_secs(frame.0);
                let bounce = (t * std::f64::consts::PI * 2.0 * POINTER_BOUNCE_HZ).sin()
                    * POINTER_BOUNCE_AMPLITUDE
                    * h;
                Ok(Transform::at(DVec3::new(
                    nvu_to_world_x(anchor.x, w),
                    nvu_to_world_y(anchor.y, h) + bounce,
                    0.0,
                )))
            }

            Motion::OutroFade { anchor_y, bob } => {
                let lifetime = el.timeline.lifetime();
                let opacity = ramp(
                    f,
                    lifetime.start.0 as f64,
                    (lifetime.start.0 + OUTRO_FADE_FRAMES) as f64,
                    0.0,
                    1.0,
                    Ease::Linear,
                )?;
                let mut y = nvu_to_world_y(*anchor_y, h);
                if *bob {
                    y += (f * OUTRO_BOB_RATE).sin() * OUTRO_BOB_AMPLITUDE * h;
                }
                Ok(Transform::at(DVec3::new(0.0, y, 0.0)).with_opacity(opacity))
            }

            Motion::Decor { index } => Ok(self.decor.transform_at(*index, frame, self.fps)),
        }
    }
}

/// Scratch state for composing the element set; narrow derived views of the
/// scenario are copied out once so the composer never re-reads it.
struct ElementSetBuilder<'a> {
    scenario: &'a Scenario,
    fps: Fps,
    resolution: Resolution,
    total: FrameIndex,
    scene2_exit: u64,
    scene3_exit: u64,
    elements: Vec<Element>,
    text_layouts: BTreeMap<String, LayoutResult>,
}

impl<'a> ElementSetBuilder<'a> {
    fn new(scenario: &'a Scenario, fps: Fps, resolution: Resolution, total: FrameIndex) -> Self {
        let t = &scenario.timings;
        Self {
            scenario,
            fps,
            resolution,
            total,
            scene2_exit: t.cta_social.to_range(fps).start.0,
            scene3_exit: t.outro.to_range(fps).start.0,
            elements: Vec::new(),
            text_layouts: BTreeMap::new(),
        }
    }

    fn secs(&self, s: f64) -> u64 {
        self.fps.secs_to_frames_round(s)
    }

    fn build_scene_elements(&mut self) -> FrameloomResult<()> {
        self.build_hook()?;
        self.build_title()?;
        self.build_details()?;
        self.build_bonus()?;
        self.build_card()?;
        self.build_cta()?;
        self.build_outro()?;
        Ok(())
    }

    fn build_hook(&mut self) -> FrameloomResult<()> {
        let range = self.scenario.timings.hook.to_range(self.fps);
        let rise_start = range.start.0
            + ((range.len_frames() as f64) * HOOK_EXIT_FRACTION).round() as u64;
        let rise_start = rise_start.min(range.end.0);
        let timeline = PhaseTimeline::from_bounds(vec![
            ("hold", range.start.0, rise_start, Ease::Linear),
            ("rise", rise_start, range.end.0, Ease::Linear),
        ])?;

        let mut jitter = SeedStream::new(stable_hash64(self.scenario.meta.theme_seed, "hook"));
        self.elements.push(
            Element::new(
                "hook",
                ElementKind::TextBlock,
                timeline,
                Motion::HookRise {
                    anchor_y: HOOK_STACK_Y,
                    jitter_phase: jitter.gen_range(0.0, 10.0),
                },
            )
            .with_fade_out(),
        );
        Ok(())
    }

    fn build_title(&mut self) -> FrameloomResult<()> {
        let start = self.scenario.timings.title.to_range(self.fps).start.0;
        // The CTA boundary truncates the title's own scene duration.
        let end = self.scene2_exit.max(start);
        let fade_start = end - EXIT_FADE_FRAMES.min(end - start);
        let trigger = start + self.secs(TITLE_DELAY_SEC);
        let pop_end = (trigger + self.secs(TITLE_POP_SEC)).clamp(start, fade_start);

        let timeline = PhaseTimeline::from_bounds(vec![
            ("pop", start, pop_end, Ease::Linear),
            ("hold", pop_end, fade_start, Ease::Linear),
            ("exit", fade_start, end, Ease::Linear),
        ])?;
        self.elements.push(
            Element::new(
                "title",
                ElementKind::TextBlock,
                timeline,
                Motion::TitlePop {
                    anchor_y: TITLE_Y,
                    trigger,
                    spring: SpringConfig::pop(),
                },
            )
            .with_fade_out(),
        );
        Ok(())
    }

    fn build_details(&mut self) -> FrameloomResult<()> {
        let overrides = &self.scenario.overrides;
        let pad = overrides.padding_x_fraction.max(DETAILS_MIN_SIDE_PADDING);
        let max_w = self.resolution.width_f64() * (1.0 - 2.0 * pad);
        let max_h = self.resolution.height_f64() * (DETAILS_BOTTOM - DETAILS_TOP);

        let fit = match fit_text(
            &self.scenario.content.details_text,
            max_w,
            max_h,
            &FitOptions::with_max_size(DETAILS_MAX_FONT_PX),
        ) {
            Ok(fit) => fit,
            Err(err @ FrameloomError::InvalidLayoutBounds(_)) => {
                tracing::warn!(element = "details", %err, "skipping element with unusable bounds");
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        self.text_layouts.insert("details".to_string(), fit);

        let start = self.scenario.timings.details.to_range(self.fps).start.0;
        let end = self.scene2_exit.max(start);
        let fade_start = end - EXIT_FADE_FRAMES.min(end - start);
        let enter_start = start + self.secs(DETAILS_DELAY_SEC);
        let enter_end = (enter_start + ENTER_FADE_FRAMES).clamp(start, fade_start);

        let timeline = PhaseTimeline::from_bounds(vec![
            ("fade_in", start, enter_end, Ease::Linear),
            ("hold", enter_end, fade_start, Ease::Linear),
            ("exit", fade_start, end, Ease::Linear),
        ])?;
        self.elements.push(
            Element::new(
                "details",
                ElementKind::TextBlock,
                timeline,
                Motion::DetailsFade {
                    anchor_y: (DETAILS_TOP + DETAILS_BOTTOM) / 2.0,
                    enter_start,
                },
            )
            .with_fade_out(),
        );
        Ok(())
    }

    fn build_bonus(&mut self) -> FrameloomResult<()> {
        let pos = self.scenario.overrides.bonus_pos_fraction;
        let pane_w = 2.0 * self.bonus_half_width() * self.resolution.width_f64();
        let pane_h = BONUS_PANE_H * self.resolution.height_f64();

        let fit = match fit_text(
            &self.scenario.content.bonus_text,
            pane_w,
            pane_h,
            &FitOptions::with_max_size(BONUS_MAX_FONT_PX),
        ) {
            Ok(fit) => fit,
            Err(err @ FrameloomError::InvalidLayoutBounds(_)) => {
                tracing::warn!(element = "bonus", %err, "skipping element with unusable bounds");
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        self.text_layouts.insert("bonus".to_string(), fit);

        let start = self.scenario.timings.bonus.to_range(self.fps).start.0;
        let end = self.scene2_exit.max(start);
        let fade_start = end - EXIT_FADE_FRAMES.min(end - start);
        let grow_end = (start + BONUS_GROW_FRAMES).clamp(start, fade_start);

        let timeline = PhaseTimeline::from_bounds(vec![
            ("grow", start, grow_end, Ease::Linear),
            ("hold", grow_end, fade_start, Ease::Linear),
            ("exit", fade_start, end, Ease::Linear),
        ])?;
        self.elements.push(
            Element::new(
                "bonus",
                ElementKind::Card,
                timeline,
                Motion::BonusGrow {
                    anchor: Point::new(pos.x, pos.y),
                    grow_start: start,
                },
            )
            .with_fade_out(),
        );
        Ok(())
    }

    fn build_card(&mut self) -> FrameloomResult<()> {
        let end = self.scene3_exit;
        let dock_start = self.scene2_exit.min(end);
        let flip = self.secs(CARD_FLIP_SEC);
        let exit_start = end
            .saturating_sub(self.secs(CENTRIPETAL_PRE_SEC))
            .max(dock_start);
        let dock_end = (dock_start + flip).min(exit_start);

        let timeline = PhaseTimeline::from_bounds(vec![
            ("present", 0, dock_start, Ease::Linear),
            ("dock", dock_start, dock_end, Ease::Linear),
            ("linger", dock_end, exit_start, Ease::Linear),
            ("exit", exit_start, end, Ease::InExpo),
        ])?;
        self.elements.push(Element::new(
            "card",
            ElementKind::Card,
            timeline,
            Motion::CardDock {
                anchor_y: CARD_PIVOT_Y,
                dock_start,
                dock_len: flip,
                exit_start,
                exit_end: end,
            },
        ));
        Ok(())
    }

    fn build_cta(&mut self) -> FrameloomResult<()> {
        let start = self.scene2_exit;
        let end = self.scene3_exit.max(start);
        let fade_start = end - EXIT_FADE_FRAMES.min(end - start);

        let pop_start = (start + self.secs(CTA_SOCIAL_OFFSET_SEC)).min(fade_start);
        let pop_end = (pop_start + CTA_POP_FRAMES).min(fade_start);
        let social_timeline = PhaseTimeline::from_bounds(vec![
            ("wait", start, pop_start, Ease::Linear),
            ("pop", pop_start, pop_end, Ease::Linear),
            ("hold", pop_end, fade_start, Ease::Linear),
            ("exit", fade_start, end, Ease::Linear),
        ])?;
        self.elements.push(
            Element::new(
                "cta.social",
                ElementKind::Card,
                social_timeline,
                Motion::CtaPop {
                    anchor_y: CTA_SOCIAL_Y,
                    pop_start,
                },
            )
            .with_fade_out(),
        );

        let link_scene = self.scenario.timings.cta_link.to_range(self.fps).start.0;
        let slide_start = link_scene.clamp(start, fade_start);
        let slide_end = (slide_start + CTA_SLIDE_FRAMES).min(fade_start);
        let link_timeline = PhaseTimeline::from_bounds(vec![
            ("wait", start, slide_start, Ease::Linear),
            ("slide", slide_start, slide_end, Ease::OutCubic),
            ("hold", slide_end, fade_start, Ease::Linear),
            ("exit", fade_start, end, Ease::Linear),
        ])?;
        self.elements.push(
            Element::new(
                "cta.link",
                ElementKind::Card,
                link_timeline,
                Motion::CtaSlide {
                    from_y: 1.0,
                    to_y: CTA_LINK_Y,
                    slide_start,
                },
            )
            .with_fade_out(),
        );

        let pointer_timeline = PhaseTimeline::from_bounds(vec![
            ("hold", start, fade_start, Ease::Linear),
            ("exit", fade_start, end, Ease::Linear),
        ])?;
        self.elements.push(
            Element::new(
                "cta.pointer",
                ElementKind::Decoration,
                pointer_timeline,
                Motion::PointerBounce {
                    anchor: Point::new(CTA_POINTER_X, CTA_POINTER_Y),
                },
            )
            .with_fade_out(),
        );
        Ok(())
    }

    fn build_outro(&mut self) -> FrameloomResult<()> {
        let start = self.scene3_exit;
        let end = self.total.0.max(start);
        let reveal_end = (start + OUTRO_FADE_FRAMES).min(end);

        for (id, anchor_y, bob) in [
            ("outro", OUTRO_TEXT_Y, false),
            ("outro.logo", OUTRO_LOGO_Y, true),
        ] {
            let timeline = PhaseTimeline::from_bounds(vec![
                ("reveal", start, reveal_end, Ease::Linear),
                ("hold", reveal_end, end, Ease::Linear),
            ])?;
            let kind = if bob {
                ElementKind::Decoration
            } else {
                ElementKind::TextBlock
            };
            self.elements.push(Element::new(
                id,
                kind,
                timeline,
                Motion::OutroFade { anchor_y, bob },
            ));
        }
        Ok(())
    }

    fn build_decor_elements(&mut self, count: usize) -> FrameloomResult<()> {
        for index in 0..count {
            let timeline =
                PhaseTimeline::from_bounds(vec![("drift", 0, self.total.0, Ease::Linear)])?;
            self.elements.push(Element::new(
                format!("decor.{index:03}"),
                ElementKind::Particle,
                timeline,
                Motion::Decor { index },
            ));
        }
        Ok(())
    }

    fn bonus_half_width(&self) -> f64 {
        BONUS_MAX_HALF_W.min(1.0 - BONUS_RIGHT_MARGIN - self.scenario.overrides.bonus_pos_fraction.x)
    }

    /// Hard invariant: no fit-derived block may drop into the safe zone.
    /// Violations refuse the whole job so the authoring data gets fixed,
    /// rather than silently clipping content. Rects are in NVU space.
    fn check_safe_zone(&self) -> FrameloomResult<()> {
        let safe_line = 1.0 - self.scenario.overrides.safe_zone_b_fraction;
        let w = self.resolution.width_f64();
        let h = self.resolution.height_f64();

        let mut blocks = Vec::new();
        if let Some(fit) = self.text_layouts.get("details") {
            let center = Point::new(0.5, (DETAILS_TOP + DETAILS_BOTTOM) / 2.0);
            let half_w = 0.5 * fit.width / w;
            let half_h = 0.5 * fit.height / h;
            blocks.push((
                "details",
                Rect::new(
                    center.x - half_w,
                    center.y - half_h,
                    center.x + half_w,
                    center.y + half_h,
                ),
            ));
        }
        if self.text_layouts.contains_key("bonus") {
            let pos = self.scenario.overrides.bonus_pos_fraction;
            let half_w = self.bonus_half_width();
            blocks.push((
                "bonus",
                Rect::new(
                    pos.x - half_w,
                    pos.y - BONUS_PANE_H / 2.0,
                    pos.x + half_w,
                    pos.y + BONUS_PANE_H / 2.0,
                ),
            ));
        }

        for (id, rect) in blocks {
            if rect.max_y() > safe_line {
                return Err(FrameloomError::safe_zone(format!(
                    "{id} block bottom {:.3} crosses safe line {safe_line:.3}",
                    rect.max_y()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::dsl::ScenarioBuilder;
    use crate::scenario::model::{Overrides, PosFraction};

    fn composer() -> SceneComposer {
        let scenario = ScenarioBuilder::sample().seed(7).build().unwrap();
        SceneComposer::new(&scenario).unwrap()
    }

    #[test]
    fn frame_out_of_bounds_is_evaluation_error() {
        let c = composer();
        let total = c.total_frames();
        assert!(matches!(
            c.render_state(total).unwrap_err(),
            FrameloomError::Evaluation(_)
        ));
        assert!(c.render_state(FrameIndex(total.0 - 1)).is_ok());
    }

    #[test]
    fn hook_visible_at_frame_zero_title_not_yet() {
        let c = composer();
        let state = c.render_state(FrameIndex(0)).unwrap();
        assert!(state.contains_key("hook"));
        assert!(!state.contains_key("title"));
    }

    #[test]
    fn title_truncated_exactly_at_cta_start() {
        // Sample: title scene is 3s..8s, cta at 8s => title's last visible
        // frame is 239, and frame 239 sits in its exit-fade window.
        let c = composer();
        let state = c.render_state(FrameIndex(239)).unwrap();
        let title = state.get("title").unwrap();
        assert!(title.opacity < 0.2);

        let state = c.render_state(FrameIndex(240)).unwrap();
        assert!(!state.contains_key("title"));
        assert!(state.contains_key("cta.social"));
    }

    #[test]
    fn details_and_bonus_share_the_cta_cutoff() {
        let c = composer();
        let before = c.render_state(FrameIndex(239)).unwrap();
        assert!(before.contains_key("details"));
        assert!(before.contains_key("bonus"));
        let after = c.render_state(FrameIndex(240)).unwrap();
        assert!(!after.contains_key("details"));
        assert!(!after.contains_key("bonus"));
    }

    #[test]
    fn card_docks_exactly_at_cta_start() {
        let c = composer();
        // One frame before the CTA boundary the card is still flat.
        let state = c.render_state(FrameIndex(239)).unwrap();
        assert_eq!(state.get("card").unwrap().rotation.x, 0.0);
        // From the boundary on it rotates toward -pi.
        let state = c.render_state(FrameIndex(270)).unwrap();
        let rot = state.get("card").unwrap().rotation.x;
        assert!(rot < 0.0 && rot > -std::f64::consts::PI);
    }

    #[test]
    fn card_scale_collapses_into_outro() {
        let c = composer();
        // Outro starts at 12s = frame 360; card is gone from there.
        let state = c.render_state(FrameIndex(359)).unwrap();
        let card = state.get("card").unwrap();
        assert!(card.scale.x < 0.5);
        let state = c.render_state(FrameIndex(360)).unwrap();
        assert!(!state.contains_key("card"));
        assert!(state.contains_key("outro"));
    }

    #[test]
    fn title_spring_pops_after_delay() {
        let c = composer();
        // Title starts at frame 90, trigger at 90 + 9 = 99.
        let at_start = c.render_state(FrameIndex(95)).unwrap();
        assert_eq!(at_start.get("title").unwrap().scale.x, 0.0);
        let later = c.render_state(FrameIndex(150)).unwrap();
        assert!(later.get("title").unwrap().scale.x > 0.5);
    }

    #[test]
    fn decor_population_is_complete_and_stable() {
        let c = composer();
        let state = c.render_state(FrameIndex(10)).unwrap();
        let decor: Vec<_> = state.keys().filter(|k| k.starts_with("decor.")).collect();
        assert_eq!(decor.len(), DECOR_COUNT);

        let again = c.render_state(FrameIndex(10)).unwrap();
        assert_eq!(state, again);
    }

    #[test]
    fn same_seed_same_state_different_seed_differs() {
        let a = ScenarioBuilder::sample().seed(5).build().unwrap();
        let b = ScenarioBuilder::sample().seed(5).build().unwrap();
        let c = ScenarioBuilder::sample().seed(6).build().unwrap();
        let sa = SceneComposer::new(&a).unwrap().render_state(FrameIndex(40)).unwrap();
        let sb = SceneComposer::new(&b).unwrap().render_state(FrameIndex(40)).unwrap();
        let sc = SceneComposer::new(&c).unwrap().render_state(FrameIndex(40)).unwrap();
        assert_eq!(sa, sb);
        assert_ne!(sa, sc);
    }

    #[test]
    fn safe_zone_violation_fails_fast() {
        let overrides = Overrides {
            safe_zone_b_fraction: 0.5,
            ..Overrides::default()
        };
        let scenario = ScenarioBuilder::sample().overrides(overrides).build().unwrap();
        assert!(matches!(
            SceneComposer::new(&scenario).unwrap_err(),
            FrameloomError::SafeZone(_)
        ));
    }

    #[test]
    fn unusable_bonus_bounds_skip_the_element() {
        let overrides = Overrides {
            bonus_pos_fraction: PosFraction { x: 0.98, y: 0.45 },
            ..Overrides::default()
        };
        let scenario = ScenarioBuilder::sample().overrides(overrides).build().unwrap();
        let c = SceneComposer::new(&scenario).unwrap();
        let state = c.render_state(FrameIndex(200)).unwrap();
        assert!(!state.contains_key("bonus"));
        assert!(state.contains_key("details"));
    }

    #[test]
    fn theme_follows_seed() {
        let a = ScenarioBuilder::sample().seed(0).build().unwrap();
        let b = ScenarioBuilder::sample().seed(5).build().unwrap();
        assert_eq!(
            SceneComposer::new(&a).unwrap().theme(),
            SceneComposer::new(&b).unwrap().theme()
        );
    }
}
