//! Tuned layout and timing constants for the house scene grammar.
//!
//! Vertical anchors are NVU fractions of frame height measured from the
//! top; see [`crate::foundation::core::nvu_to_world_y`]. Several of these
//! were hand-tuned against reference footage rather than derived, so they
//! live here as named values instead of inline literals.

/// Vertical anchor of the hook word stack.
pub const HOOK_STACK_Y: f64 = 0.50;
/// Vertical anchor of the title underline card.
pub const TITLE_Y: f64 = 0.40;
/// Details panel container, top and bottom edges.
pub const DETAILS_TOP: f64 = 0.47;
pub const DETAILS_BOTTOM: f64 = 0.75;
/// Default bonus pane center.
pub const BONUS_X: f64 = 0.75;
pub const BONUS_Y: f64 = 0.45;
/// Bonus pane height as a fraction of frame height.
pub const BONUS_PANE_H: f64 = 0.10;
/// Right screen margin the bonus pane must clear.
pub const BONUS_RIGHT_MARGIN: f64 = 0.05;
/// Media card pivot line (its bottom edge when parked).
pub const CARD_PIVOT_Y: f64 = 0.335;
/// CTA anchors: social pill, link pill slide target, pointer glyph.
pub const CTA_SOCIAL_Y: f64 = 0.20;
pub const CTA_LINK_Y: f64 = 0.80;
pub const CTA_POINTER_X: f64 = 0.70;
pub const CTA_POINTER_Y: f64 = 0.86;
/// Outro logo and copy anchors.
pub const OUTRO_LOGO_Y: f64 = 0.40;
pub const OUTRO_TEXT_Y: f64 = 0.55;
/// Bottom fraction of the frame reserved for platform UI. Layouts whose
/// text drops below `1 - SAFE_ZONE_BOTTOM` are refused outright.
pub const SAFE_ZONE_BOTTOM: f64 = 0.22;

/// Uniform exit grammar: every fading element's opacity ramps to zero over
/// this many final frames, ending exactly at its declared end frame.
pub const EXIT_FADE_FRAMES: u64 = 10;
/// Details panel fade-in window.
pub const ENTER_FADE_FRAMES: u64 = 20;
/// Bonus pane horizontal grow window.
pub const BONUS_GROW_FRAMES: u64 = 20;
/// Outro fade-in window.
pub const OUTRO_FADE_FRAMES: u64 = 15;
/// CTA pop/slide windows.
pub const CTA_POP_FRAMES: u64 = 10;
pub const CTA_SLIDE_FRAMES: u64 = 15;

/// Relative timings, in seconds, between a scene boundary and the motion it
/// triggers.
pub const TITLE_DELAY_SEC: f64 = 0.3;
pub const DETAILS_DELAY_SEC: f64 = 0.6;
pub const CTA_SOCIAL_OFFSET_SEC: f64 = 0.75;
pub const CTA_LINK_OFFSET_SEC: f64 = 1.25;
/// The card's scale-out exit starts this long before the outro.
pub const CENTRIPETAL_PRE_SEC: f64 = 0.75;
/// Card flip-dock duration.
pub const CARD_FLIP_SEC: f64 = 1.5;
/// Title spring settles within roughly a second; the pop phase is capped at
/// this long.
pub const TITLE_POP_SEC: f64 = 1.0;

/// Fraction of the hook scene after which the word stack rises off screen.
pub const HOOK_EXIT_FRACTION: f64 = 0.8;
/// Hook jitter: angular rate per frame and amplitude as a height fraction.
pub const HOOK_JITTER_RATE: f64 = 0.8;
pub const HOOK_JITTER_AMPLITUDE: f64 = 0.005;

/// Pointer bounce rate (full cycles per second) and amplitude.
pub const POINTER_BOUNCE_HZ: f64 = 3.0;
pub const POINTER_BOUNCE_AMPLITUDE: f64 = 0.01;
/// Outro logo bob: radians per frame and amplitude.
pub const OUTRO_BOB_RATE: f64 = 0.1;
pub const OUTRO_BOB_AMPLITUDE: f64 = 0.02;

/// Decorative background population.
pub const DECOR_COUNT: usize = 200;

/// Details panel: width fraction floor and fit ceiling.
pub const DETAILS_MIN_SIDE_PADDING: f64 = 0.1;
pub const DETAILS_MAX_FONT_PX: f64 = 40.0;
/// Bonus pane fit ceiling and max half-width.
pub const BONUS_MAX_FONT_PX: f64 = 32.0;
pub const BONUS_MAX_HALF_W: f64 = 0.20;
