//! Time-series value type and time-grid construction.

/// An ordered sequence of (time, voltage) pairs.
///
/// Times are strictly increasing. Two instances exist per render: a dense
/// grid approximating the continuous signal and a sparse grid holding the
/// discrete samples.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSeries {
    /// Sample times in seconds, strictly increasing.
    pub times: Vec<f64>,
    /// Voltage at each time, same length and order as `times`.
    pub voltages: Vec<f64>,
}

impl TimeSeries {
    /// Builds a series by evaluating `f` at each time on the grid.
    pub fn from_fn<F: FnMut(f64) -> f64>(times: Vec<f64>, mut f: F) -> Self {
        let voltages = times.iter().map(|&t| f(t)).collect();
        Self { times, voltages }
    }

    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the series holds no points.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterates over (time, voltage) pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use aliascope::TimeSeries;
    ///
    /// let series = TimeSeries {
    ///     times: vec![0.0, 0.1],
    ///     voltages: vec![1.0, -1.0],
    /// };
    /// let points: Vec<_> = series.points().collect();
    /// assert_eq!(points, vec![(0.0, 1.0), (0.1, -1.0)]);
    /// ```
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.voltages.iter().copied())
    }
}

/// Returns `n` evenly spaced values over `[start, end]`, endpoint inclusive.
///
/// With `n == 1` the single value is `start`. The last value is forced to
/// `end` exactly so accumulated rounding cannot push the grid past the
/// window.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            values[n - 1] = end;
            values
        }
    }
}
