use crate::foundation::core::Fps;

/// Damped harmonic oscillator parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
}

impl SpringConfig {
    pub fn new(mass: f64, stiffness: f64, damping: f64) -> Self {
        Self {
            mass,
            stiffness,
            damping,
        }
    }

    /// Underdamped pop-in used for title reveals.
    pub fn pop() -> Self {
        Self::new(1.0, 100.0, 12.0)
    }

    /// Critically damped settle with no overshoot.
    pub fn settle() -> Self {
        Self::new(1.0, 100.0, 20.0)
    }

    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(1.0, 100.0, 10.0)
    }
}

/// Evaluate the settling curve of a spring released from rest at 0 toward 1.
///
/// Closed-form in elapsed time, so evaluation is stateless and seekable:
/// the same `elapsed_frames` always yields bit-identical output regardless
/// of call order. Negative elapsed (not yet triggered) is exactly 0.
///
/// Degenerate parameters (non-positive mass, stiffness, or damping) resolve
/// to the settled value 1.0 rather than an error; an undamped spring would
/// oscillate forever, which no caller wants.
pub fn spring_value(elapsed_frames: i64, fps: Fps, cfg: &SpringConfig) -> f64 {
    if elapsed_frames < 0 {
        return 0.0;
    }
    if !(cfg.mass > 0.0) || !(cfg.stiffness > 0.0) || !(cfg.damping > 0.0) {
        return 1.0;
    }

    let t = fps.frames_to_secs(elapsed_frames as u64);
    let omega0 = (cfg.stiffness / cfg.mass).sqrt();
    let zeta = cfg.damping / (2.0 * (cfg.stiffness * cfg.mass).sqrt());

    const CRITICAL_BAND: f64 = 1e-6;
    if (zeta - 1.0).abs() < CRITICAL_BAND {
        // Critically damped.
        let e = (-omega0 * t).exp();
        1.0 - e * (1.0 + omega0 * t)
    } else if zeta < 1.0 {
        // Underdamped: decaying oscillation around the target.
        let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * omega0 * t).exp();
        1.0 - e * ((omega_d * t).cos() + (zeta * omega0 / omega_d) * (omega_d * t).sin())
    } else {
        // Overdamped: sum of two decaying exponentials.
        let s = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega0 * (zeta - s);
        let r2 = -omega0 * (zeta + s);
        1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fps30() -> Fps {
        Fps::new(30, 1).unwrap()
    }

    #[test]
    fn not_yet_triggered_is_exactly_zero() {
        assert_eq!(spring_value(-1, fps30(), &SpringConfig::default()), 0.0);
        assert_eq!(spring_value(-100, fps30(), &SpringConfig::pop()), 0.0);
    }

    #[test]
    fn starts_at_rest() {
        assert_eq!(spring_value(0, fps30(), &SpringConfig::default()), 0.0);
    }

    #[test]
    fn reference_config_converges_within_three_seconds() {
        let cfg = SpringConfig::new(1.0, 100.0, 20.0);
        let v = spring_value(90, fps30(), &cfg);
        assert!((v - 1.0).abs() < 0.01, "got {v}");
    }

    #[test]
    fn default_config_converges_within_three_seconds() {
        let v = spring_value(90, fps30(), &SpringConfig::default());
        assert!((v - 1.0).abs() < 0.01, "got {v}");
    }

    #[test]
    fn underdamped_overshoots() {
        let cfg = SpringConfig::pop();
        assert!(cfg.is_underdamped());
        let peak = (0..120)
            .map(|f| spring_value(f, fps30(), &cfg))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn overdamped_never_overshoots() {
        let cfg = SpringConfig::new(1.0, 100.0, 40.0);
        for f in 0..300 {
            let v = spring_value(f, fps30(), &cfg);
            assert!(v <= 1.0 + 1e-12, "frame {f}: {v}");
        }
        assert!((spring_value(300, fps30(), &cfg) - 1.0).abs() < 0.01);
    }

    #[test]
    fn evaluation_is_order_independent() {
        let cfg = SpringConfig::pop();
        let forward: Vec<f64> = (0..60).map(|f| spring_value(f, fps30(), &cfg)).collect();
        let backward: Vec<f64> = (0..60)
            .rev()
            .map(|f| spring_value(f, fps30(), &cfg))
            .collect();
        for (f, v) in backward.into_iter().rev().enumerate() {
            assert_eq!(v.to_bits(), forward[f].to_bits());
        }
    }

    #[test]
    fn zero_damping_clamps_to_settled() {
        let cfg = SpringConfig::new(1.0, 100.0, 0.0);
        assert_eq!(spring_value(10, fps30(), &cfg), 1.0);
        assert_eq!(spring_value(-1, fps30(), &cfg), 0.0);
    }
}
