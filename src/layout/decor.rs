use crate::{
    animation::rng::SeedStream,
    foundation::core::{DVec3, Fps, FrameIndex, Transform},
};

/// Extent of the decorative particle volume, in multiples of the frame
/// height (x, y, z).
pub const DECOR_EXTENT: DVec3 = DVec3::new(1.5, 1.0, 2.0);

/// Per-particle drift amplitude as a fraction of frame height.
const DRIFT_AMPLITUDE: f64 = 0.025;
/// Base scale and pulse amplitude as fractions of frame height.
const SCALE_BASE: f64 = 0.002;
const SCALE_PULSE: f64 = 0.0015;
/// Slow tumble rates, radians per second.
const TUMBLE_X_RATE: f64 = 0.1;
const TUMBLE_Y_RATE: f64 = 0.2;

/// One decorative particle's immutable placement, drawn once from the seed
/// stream at field construction.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DecorPlacement {
    pub base: DVec3,
    /// Drift rate multiplier, cycles slower or faster per particle.
    pub speed: f64,
    /// Phase offset decorrelating neighboring particles.
    pub phase: f64,
}

/// A fixed population of background particles placed reproducibly in a
/// volume around the frame. Placement happens exactly once; per-frame
/// motion is a pure function of `(placement, frame)`, so scrubbing and
/// parallel chunked rendering see identical fields.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct DecorField {
    placements: Vec<DecorPlacement>,
    view_height: f64,
}

impl DecorField {
    pub fn generate(seed: u64, count: usize, view_height: f64) -> Self {
        let mut rng = SeedStream::new(seed);
        let half = DECOR_EXTENT * 0.5 * view_height;
        let mut placements = Vec::with_capacity(count);
        for _ in 0..count {
            let base = DVec3::new(
                rng.gen_range(-half.x, half.x),
                rng.gen_range(-half.y, half.y),
                rng.gen_range(-half.z, half.z),
            );
            let speed = 0.1 + rng.gen_f64() * 0.2;
            let phase = rng.gen_f64() * 10.0;
            placements.push(DecorPlacement { base, speed, phase });
        }
        Self {
            placements,
            view_height,
        }
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn placements(&self) -> &[DecorPlacement] {
        &self.placements
    }

    /// Evaluate one particle at a frame: slow sinusoidal drift around its
    /// base position, a gentle scale pulse, and a constant-rate tumble.
    pub fn transform_at(&self, index: usize, frame: FrameIndex, fps: Fps) -> Transform {
        let p = &self.placements[index];
        let t = fps.frames_to_secs(frame.0);
        let drift = DRIFT_AMPLITUDE * self.view_height;

        let position = DVec3::new(
            p.base.x + (t * p.speed + p.phase).sin() * drift,
            p.base.y + (t * p.speed + p.phase).cos() * drift,
            p.base.z,
        );
        let scale = (SCALE_BASE + (t + p.phase).sin().abs() * SCALE_PULSE) * self.view_height;

        Transform {
            position,
            scale: DVec3::splat(scale),
            rotation: DVec3::new(t * TUMBLE_X_RATE, t * TUMBLE_Y_RATE, 0.0),
            opacity: 0.4,
        }
    }
}
