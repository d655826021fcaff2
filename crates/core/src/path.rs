use thiserror::Error;

/// The horizontal position of every trajectory step.
///
/// Only the first two components of each coordinate vector are kept; any
/// further components are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanarPath {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Errors that can occur when projecting a trajectory onto the plane.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    #[error("trajectory has no steps")]
    Empty,

    #[error("step {step} has {len} component(s), at least 2 are required")]
    TooFewComponents { step: usize, len: usize },
}

impl PlanarPath {
    /// Projects coordinate vectors onto their first two components.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Empty`] if `steps` is empty, or
    /// [`PathError::TooFewComponents`] for the first step (0-based) with
    /// fewer than two components.
    pub fn from_steps(steps: &[Vec<f64>]) -> Result<Self, PathError> {
        if steps.is_empty() {
            return Err(PathError::Empty);
        }

        let mut path = Self {
            x: Vec::with_capacity(steps.len()),
            y: Vec::with_capacity(steps.len()),
        };

        for (step, coords) in steps.iter().enumerate() {
            let &[x, y, ..] = coords.as_slice() else {
                return Err(PathError::TooFewComponents {
                    step,
                    len: coords.len(),
                });
            };
            path.x.push(x);
            path.y.push(y);
        }

        Ok(path)
    }

    /// Number of points on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` if the path has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_two_components_in_order() {
        let steps = vec![vec![1.0, 1.0], vec![0.0, 0.0, 9.0], vec![-2.5, 3.0]];

        let path = PlanarPath::from_steps(&steps).unwrap();

        assert_eq!(path.x, vec![1.0, 0.0, -2.5]);
        assert_eq!(path.y, vec![1.0, 0.0, 3.0]);
        assert_eq!(path.len(), 3);
        assert!(!path.is_empty());
        assert!(PlanarPath::default().is_empty());
    }

    #[test]
    fn empty_trajectory_is_an_error() {
        assert_eq!(PlanarPath::from_steps(&[]), Err(PathError::Empty));
    }

    #[test]
    fn short_vector_is_an_error() {
        let steps = vec![vec![1.0, 2.0], vec![3.0]];

        assert_eq!(
            PlanarPath::from_steps(&steps),
            Err(PathError::TooFewComponents { step: 1, len: 1 })
        );
    }
}
