//! Periodic waveform shapes.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::SignalError;

/// The shape of a periodic waveform.
///
/// Each shape is evaluated in closed form as an ideal (not band-limited)
/// waveform. The square, triangle, and sawtooth forms are exact piecewise
/// expressions rather than truncated Fourier series, so their discontinuities
/// and corners are sharp.
///
/// # Examples
///
/// ```
/// use aliascope::Shape;
///
/// let shape: Shape = "sawtooth".parse().unwrap();
/// assert_eq!(shape, Shape::Sawtooth);
/// assert_eq!(shape.to_string(), "sawtooth");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Shape {
    /// Pure sinusoid: `sin(ωt)`.
    Sine,
    /// Square wave: `sign(sin(ωt))`, with `sign(0) = 0`.
    Square,
    /// Triangle wave: `(2/π)·asin(sin(ωt))`.
    Triangle,
    /// Sawtooth wave: `2·(t·f − floor(0.5 + t·f))`, rising through zero at
    /// `t = 0` and dropping at each half-period boundary.
    Sawtooth,
}

impl Shape {
    /// Evaluates the unit-amplitude waveform at time `t` for the given
    /// frequency in Hz.
    ///
    /// The result is always within `[-1.0, 1.0]`. Scaling and offsetting are
    /// the caller's concern (see [`SignalParams::value_at`]).
    ///
    /// [`SignalParams::value_at`]: crate::SignalParams::value_at
    ///
    /// # Arguments
    ///
    /// * `t` - Time in seconds
    /// * `frequency` - Waveform frequency in Hz
    ///
    /// # Examples
    ///
    /// ```
    /// use aliascope::Shape;
    ///
    /// // A sine starts at zero and peaks a quarter period in.
    /// assert_eq!(Shape::Sine.unit_value(0.0, 10.0), 0.0);
    /// assert!((Shape::Sine.unit_value(0.025, 10.0) - 1.0).abs() < 1e-12);
    /// ```
    pub fn unit_value(self, t: f64, frequency: f64) -> f64 {
        let omega = 2.0 * PI * frequency;
        match self {
            Shape::Sine => (omega * t).sin(),
            Shape::Square => {
                // sign(0) must be 0, which rules out f64::signum (it maps
                // +0.0 to 1.0).
                let s = (omega * t).sin();
                if s == 0.0 { 0.0 } else { s.signum() }
            }
            Shape::Triangle => (2.0 / PI) * (omega * t).sin().asin(),
            Shape::Sawtooth => 2.0 * (t * frequency - (0.5 + t * frequency).floor()),
        }
    }

    /// All shapes, in display order.
    pub const ALL: [Shape; 4] = [Shape::Sine, Shape::Square, Shape::Triangle, Shape::Sawtooth];

    /// Returns the lowercase name of the shape.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Sine => "sine",
            Shape::Square => "square",
            Shape::Triangle => "triangle",
            Shape::Sawtooth => "sawtooth",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = SignalError;

    /// Parses a lowercase shape name (`"sine"`, `"square"`, `"triangle"`,
    /// `"sawtooth"`).
    ///
    /// Anything else is a configuration error, not a silent default: a
    /// misspelled shape must fail loudly rather than render a flat line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sine" => Ok(Shape::Sine),
            "square" => Ok(Shape::Square),
            "triangle" => Ok(Shape::Triangle),
            "sawtooth" => Ok(Shape::Sawtooth),
            other => Err(SignalError::InvalidShape(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_starts_at_zero() {
        assert_eq!(Shape::Sine.unit_value(0.0, 440.0), 0.0);
    }

    #[test]
    fn test_sine_quarter_period_peak() {
        // Quarter period of a 1 Hz sine is t = 0.25.
        assert!((Shape::Sine.unit_value(0.25, 1.0) - 1.0).abs() < 1e-12);
        assert!((Shape::Sine.unit_value(0.75, 1.0) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sine_periodicity() {
        let f = 120.0;
        for i in 0..50 {
            let t = i as f64 * 0.00037;
            let a = Shape::Sine.unit_value(t, f);
            let b = Shape::Sine.unit_value(t + 1.0 / f, f);
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_square_is_zero_at_zero_crossing() {
        // sin(0) == 0 exactly, and sign(0) is defined as 0.
        assert_eq!(Shape::Square.unit_value(0.0, 50.0), 0.0);
    }

    #[test]
    fn test_square_takes_only_unit_values() {
        for i in 1..200 {
            let t = i as f64 * 0.0013;
            let v = Shape::Square.unit_value(t, 37.0);
            assert!(v == 1.0 || v == -1.0 || v == 0.0);
        }
    }

    #[test]
    fn test_square_alternates_each_half_period() {
        // 1 Hz square: first half period high, second half low.
        assert_eq!(Shape::Square.unit_value(0.25, 1.0), 1.0);
        assert_eq!(Shape::Square.unit_value(0.75, 1.0), -1.0);
    }

    #[test]
    fn test_triangle_corners() {
        // 1 Hz triangle: 0 at t=0, +1 at quarter period, 0 at half, -1 at
        // three quarters.
        assert!(Shape::Triangle.unit_value(0.0, 1.0).abs() < 1e-12);
        assert!((Shape::Triangle.unit_value(0.25, 1.0) - 1.0).abs() < 1e-9);
        assert!(Shape::Triangle.unit_value(0.5, 1.0).abs() < 1e-6);
        assert!((Shape::Triangle.unit_value(0.75, 1.0) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sawtooth_ramp() {
        // 1 Hz sawtooth: 0 at t=0, rises to +1 just before the half-period
        // drop, and sits at -1 right at it.
        assert_eq!(Shape::Sawtooth.unit_value(0.0, 1.0), 0.0);
        assert!((Shape::Sawtooth.unit_value(0.25, 1.0) - 0.5).abs() < 1e-12);
        assert!((Shape::Sawtooth.unit_value(0.4999, 1.0) - 0.9998).abs() < 1e-9);
        assert_eq!(Shape::Sawtooth.unit_value(0.5, 1.0), -1.0);
    }

    #[test]
    fn test_all_shapes_bounded() {
        for shape in Shape::ALL {
            for i in 0..500 {
                let t = i as f64 * 0.00021;
                let v = shape.unit_value(t, 113.0);
                assert!((-1.0..=1.0).contains(&v), "{shape} out of range at t={t}: {v}");
            }
        }
    }

    #[test]
    fn test_parse_known_shapes() {
        assert_eq!("sine".parse::<Shape>().unwrap(), Shape::Sine);
        assert_eq!("square".parse::<Shape>().unwrap(), Shape::Square);
        assert_eq!("triangle".parse::<Shape>().unwrap(), Shape::Triangle);
        assert_eq!("sawtooth".parse::<Shape>().unwrap(), Shape::Sawtooth);
    }

    #[test]
    fn test_parse_unknown_shape_fails() {
        let err = "cosine".parse::<Shape>().unwrap_err();
        assert_eq!(err, SignalError::InvalidShape("cosine".to_string()));
    }

    #[test]
    fn test_display_round_trips() {
        for shape in Shape::ALL {
            assert_eq!(shape.to_string().parse::<Shape>().unwrap(), shape);
        }
    }
}
