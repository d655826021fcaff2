use crate::Objective;

/// An objective sampled on an evenly spaced rectangular grid.
///
/// Rows follow `y` and columns follow `x`, so `z[i][j]` is the objective at
/// `(x[j], y[i])`. This is the layout contour and surface traces expect.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
}

impl Grid {
    /// Points per axis used for plotting.
    pub const RESOLUTION: usize = 100;

    /// Samples `objective` over its bounds with `resolution` points per axis.
    #[must_use]
    pub fn sample(objective: Objective, resolution: usize) -> Self {
        let bounds = objective.bounds();
        let f = objective.function();

        let x = linspace(bounds.x_min, bounds.x_max, resolution);
        let y = linspace(bounds.y_min, bounds.y_max, resolution);
        let z: Vec<Vec<f64>> = y
            .iter()
            .map(|&yi| x.iter().map(|&xj| f(xj, yi)).collect())
            .collect();

        Self { x, y, z }
    }

    /// Smallest sampled value, ignoring NaN.
    #[must_use]
    pub fn z_min(&self) -> Option<f64> {
        self.z
            .iter()
            .flatten()
            .copied()
            .filter(|v| !v.is_nan())
            .reduce(f64::min)
    }

    /// Largest sampled value, ignoring NaN.
    #[must_use]
    pub fn z_max(&self) -> Option<f64> {
        self.z
            .iter()
            .flatten()
            .copied()
            .filter(|v| !v.is_nan())
            .reduce(f64::max)
    }
}

/// Returns `n` evenly spaced values from `start` to `end`, both included.
///
/// The last value is exactly `end`. `n == 1` yields `[start]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = end;
            values
        }
    }
}
