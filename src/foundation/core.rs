use crate::foundation::error::{FrameloomError, FrameloomResult};

pub use glam::DVec3;
pub use kurbo::{Point, Rect, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    pub start: FrameIndex,
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    pub fn new(start: FrameIndex, end: FrameIndex) -> FrameloomResult<Self> {
        if start.0 > end.0 {
            return Err(FrameloomError::config("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    pub fn clamp(self, f: FrameIndex) -> FrameIndex {
        if self.is_empty() {
            return self.start;
        }
        let max_inclusive = self.end.0.saturating_sub(1);
        FrameIndex(f.0.clamp(self.start.0, max_inclusive))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> FrameloomResult<Self> {
        if den == 0 {
            return Err(FrameloomError::config("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(FrameloomError::config("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Scenario timings are authored in seconds; boundaries snap to the
    /// nearest frame.
    pub fn secs_to_frames_round(self, secs: f64) -> u64 {
        (secs * self.as_f64()).round().max(0.0) as u64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    pub w: u32,
    pub h: u32,
}

impl Resolution {
    pub fn width_f64(self) -> f64 {
        f64::from(self.w)
    }

    pub fn height_f64(self) -> f64 {
        f64::from(self.h)
    }
}

/// Per-element output record, recomputed fresh for every frame query.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform {
    pub position: DVec3,
    pub scale: DVec3,
    pub rotation: DVec3, // euler radians (x, y, z)
    pub opacity: f64,    // 0..1 clamped by the composer
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            scale: DVec3::ONE,
            rotation: DVec3::ZERO,
            opacity: 1.0,
        }
    }
}

impl Transform {
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

/// NVU (normalized vertical unit) anchors: 0..1 fractions of frame size,
/// measured from the top-left. World space is centered on the frame with +y
/// up, so an anchor of 0.5 lands at the origin.
pub fn nvu_to_world_y(fraction: f64, view_height: f64) -> f64 {
    (0.5 - fraction) * view_height
}

pub fn nvu_to_world_x(fraction: f64, view_width: f64) -> f64 {
    (fraction - 0.5) * view_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_range_contains_boundaries() {
        let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
        assert!(!r.contains(FrameIndex(1)));
        assert!(r.contains(FrameIndex(2)));
        assert!(r.contains(FrameIndex(4)));
        assert!(!r.contains(FrameIndex(5)));
    }

    #[test]
    fn frame_range_rejects_reversed() {
        assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    }

    #[test]
    fn secs_to_frames_rounds_to_nearest() {
        let fps = Fps::new(30, 1).unwrap();
        assert_eq!(fps.secs_to_frames_round(3.0), 90);
        assert_eq!(fps.secs_to_frames_round(0.016), 0);
        assert_eq!(fps.secs_to_frames_round(0.017), 1);
        assert_eq!(fps.secs_to_frames_round(-1.0), 0);
    }

    #[test]
    fn nvu_world_mapping_is_centered() {
        assert_eq!(nvu_to_world_y(0.5, 1920.0), 0.0);
        assert_eq!(nvu_to_world_y(0.0, 1920.0), 960.0);
        assert_eq!(nvu_to_world_y(1.0, 1920.0), -960.0);
        assert_eq!(nvu_to_world_x(0.5, 1080.0), 0.0);
        assert_eq!(nvu_to_world_x(1.0, 1080.0), 540.0);
    }

    #[test]
    fn default_transform_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, DVec3::ZERO);
        assert_eq!(t.scale, DVec3::ONE);
        assert_eq!(t.opacity, 1.0);
    }
}
