use crate::{
    animation::ease::Ease,
    foundation::error::{FrameloomError, FrameloomResult},
};

/// Extrapolation policy for inputs outside the breakpoint range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Extrapolate {
    /// Pin to the first/last output value.
    Clamp,
    /// Continue linearly with the slope of the first/last segment. The
    /// segment easing is not applied outside the range.
    Extend,
}

/// Map `x` through piecewise-linear breakpoints with easing per segment.
///
/// `input` must be non-decreasing and the same length as `output`
/// (at least 2 entries); anything else is a `Config` error. At an exact
/// breakpoint the corresponding output value is returned bit-exactly.
pub fn interpolate(
    x: f64,
    input: &[f64],
    output: &[f64],
    left: Extrapolate,
    right: Extrapolate,
    ease: Ease,
) -> FrameloomResult<f64> {
    if input.len() != output.len() {
        return Err(FrameloomError::config(format!(
            "interpolate ranges differ in length ({} vs {})",
            input.len(),
            output.len()
        )));
    }
    if input.len() < 2 {
        return Err(FrameloomError::config(
            "interpolate needs at least 2 breakpoints",
        ));
    }
    if !input.windows(2).all(|w| w[0] <= w[1]) {
        return Err(FrameloomError::config(
            "interpolate input range must be non-decreasing",
        ));
    }
    if input.iter().chain(output.iter()).any(|v| !v.is_finite()) {
        return Err(FrameloomError::config(
            "interpolate breakpoints must be finite",
        ));
    }

    let n = input.len();
    if x < input[0] {
        return Ok(match left {
            Extrapolate::Clamp => output[0],
            Extrapolate::Extend => extend(x, input[0], input[1], output[0], output[1]),
        });
    }
    if x > input[n - 1] {
        return Ok(match right {
            Extrapolate::Clamp => output[n - 1],
            Extrapolate::Extend => {
                extend(x, input[n - 2], input[n - 1], output[n - 2], output[n - 1])
            }
        });
    }

    // Bracketing segment: input[idx-1] <= x < input[idx]. An exact hit on
    // the final breakpoint lands past every segment and returns the last
    // output value bit-exactly.
    let idx = input.partition_point(|&b| b <= x);
    if idx >= n {
        return Ok(output[n - 1]);
    }

    let (x0, x1) = (input[idx - 1], input[idx]);
    let (y0, y1) = (output[idx - 1], output[idx]);
    let denom = x1 - x0;
    if denom == 0.0 {
        // Zero-width segment degenerates to its left value.
        return Ok(y0);
    }
    if x == x0 {
        return Ok(y0);
    }

    let t = ease.apply((x - x0) / denom);
    Ok(y0 + (y1 - y0) * t)
}

// Linear continuation of a segment's slope, no easing.
fn extend(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    let denom = x1 - x0;
    if denom == 0.0 {
        return y0;
    }
    y0 + (y1 - y0) * ((x - x0) / denom)
}

/// Two-point clamp-both-sides interpolation, the overwhelmingly common call.
pub fn ramp(x: f64, x0: f64, x1: f64, y0: f64, y1: f64, ease: Ease) -> FrameloomResult<f64> {
    interpolate(
        x,
        &[x0, x1],
        &[y0, y1],
        Extrapolate::Clamp,
        Extrapolate::Clamp,
        ease,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let y0 = 3.25;
        let y1 = -7.5;
        let v0 = interpolate(
            1.0,
            &[1.0, 9.0],
            &[y0, y1],
            Extrapolate::Clamp,
            Extrapolate::Clamp,
            Ease::Linear,
        )
        .unwrap();
        let v1 = interpolate(
            9.0,
            &[1.0, 9.0],
            &[y0, y1],
            Extrapolate::Clamp,
            Extrapolate::Clamp,
            Ease::Linear,
        )
        .unwrap();
        assert_eq!(v0, y0);
        assert_eq!(v1, y1);
    }

    #[test]
    fn midpoint_blends_linearly() {
        let v = ramp(5.0, 0.0, 10.0, 0.0, 100.0, Ease::Linear).unwrap();
        assert_eq!(v, 50.0);
    }

    #[test]
    fn clamp_pins_outside_values() {
        assert_eq!(ramp(-5.0, 0.0, 10.0, 1.0, 2.0, Ease::Linear).unwrap(), 1.0);
        assert_eq!(ramp(50.0, 0.0, 10.0, 1.0, 2.0, Ease::Linear).unwrap(), 2.0);
    }

    #[test]
    fn extend_continues_segment_slope() {
        let v = interpolate(
            -1.0,
            &[0.0, 10.0],
            &[0.0, 100.0],
            Extrapolate::Extend,
            Extrapolate::Clamp,
            Ease::Linear,
        )
        .unwrap();
        assert_eq!(v, -10.0);

        let v = interpolate(
            12.0,
            &[0.0, 5.0, 10.0],
            &[0.0, 50.0, 100.0],
            Extrapolate::Clamp,
            Extrapolate::Extend,
            Ease::Linear,
        )
        .unwrap();
        assert_eq!(v, 120.0);
    }

    #[test]
    fn multi_segment_brackets_correctly() {
        let input = [0.0, 10.0, 20.0, 40.0];
        let output = [0.0, 1.0, 1.0, 0.0];
        let v = interpolate(
            30.0,
            &input,
            &output,
            Extrapolate::Clamp,
            Extrapolate::Clamp,
            Ease::Linear,
        )
        .unwrap();
        assert_eq!(v, 0.5);
        // Interior breakpoints are exact too.
        let v = interpolate(
            10.0,
            &input,
            &output,
            Extrapolate::Clamp,
            Extrapolate::Clamp,
            Ease::Linear,
        )
        .unwrap();
        assert_eq!(v, 1.0);
    }

    #[test]
    fn unsorted_input_is_config_error() {
        let err = interpolate(
            1.0,
            &[0.0, 10.0, 5.0],
            &[0.0, 1.0, 2.0],
            Extrapolate::Clamp,
            Extrapolate::Clamp,
            Ease::Linear,
        )
        .unwrap_err();
        assert!(matches!(err, FrameloomError::Config(_)));
    }

    #[test]
    fn mismatched_lengths_are_config_error() {
        let err = interpolate(
            1.0,
            &[0.0, 1.0],
            &[0.0, 1.0, 2.0],
            Extrapolate::Clamp,
            Extrapolate::Clamp,
            Ease::Linear,
        )
        .unwrap_err();
        assert!(matches!(err, FrameloomError::Config(_)));
    }

    #[test]
    fn zero_width_segment_takes_left_value() {
        let v = interpolate(
            5.0,
            &[0.0, 5.0, 5.0, 10.0],
            &[0.0, 1.0, 2.0, 3.0],
            Extrapolate::Clamp,
            Extrapolate::Clamp,
            Ease::Linear,
        )
        .unwrap();
        // partition_point skips past both 5.0 breakpoints; x == x0 of the
        // final segment, whose left value is 2.0.
        assert_eq!(v, 2.0);
    }

    #[test]
    fn easing_shapes_the_segment() {
        let lin = ramp(5.0, 0.0, 10.0, 0.0, 1.0, Ease::Linear).unwrap();
        let cub = ramp(5.0, 0.0, 10.0, 0.0, 1.0, Ease::InCubic).unwrap();
        assert!(cub < lin);
    }
}
