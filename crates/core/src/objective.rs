//! The four test objective functions a trajectory can be plotted over.
//!
//! Each [`Objective`] pairs a closed-form `f(x, y)` with the rectangular
//! domain it is sampled on. Names are matched exactly against the header a
//! log carries (`Objective Function: Rosenbrock`).

use std::{
    f64::consts::{E, PI},
    fmt,
    str::FromStr,
};

use thiserror::Error;

/// A pure function of two real inputs.
pub type ObjectiveFn = fn(f64, f64) -> f64;

/// A supported objective function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Objective {
    Quadratic,
    Rosenbrock,
    Ackley,
    Rastrigin,
}

/// Rectangular sampling domain of an objective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Returned when a name matches none of the supported objectives.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown objective function: {0:?}")]
pub struct UnknownObjective(pub String);

impl Bounds {
    /// Creates square bounds `[-half, half] × [-half, half]`.
    #[must_use]
    pub const fn symmetric(half: f64) -> Self {
        Self {
            x_min: -half,
            x_max: half,
            y_min: -half,
            y_max: half,
        }
    }
}

impl Objective {
    /// Every supported objective, in lookup order.
    pub const ALL: [Objective; 4] = [
        Objective::Quadratic,
        Objective::Rosenbrock,
        Objective::Ackley,
        Objective::Rastrigin,
    ];

    /// Resolves an objective by its exact, case-sensitive name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownObjective`] carrying `name` if nothing matches.
    pub fn from_name(name: &str) -> Result<Self, UnknownObjective> {
        Self::ALL
            .into_iter()
            .find(|objective| objective.name() == name)
            .ok_or_else(|| UnknownObjective(name.to_owned()))
    }

    /// The name written in log headers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Objective::Quadratic => "Quadratic",
            Objective::Rosenbrock => "Rosenbrock",
            Objective::Ackley => "Ackley",
            Objective::Rastrigin => "Rastrigin",
        }
    }

    /// The domain used for grid sampling.
    #[must_use]
    pub const fn bounds(self) -> Bounds {
        match self {
            Objective::Quadratic | Objective::Rosenbrock | Objective::Ackley => {
                Bounds::symmetric(5.0)
            }
            Objective::Rastrigin => Bounds::symmetric(5.12),
        }
    }

    /// The closed-form function itself.
    #[must_use]
    pub const fn function(self) -> ObjectiveFn {
        match self {
            Objective::Quadratic => quadratic,
            Objective::Rosenbrock => rosenbrock,
            Objective::Ackley => ackley,
            Objective::Rastrigin => rastrigin,
        }
    }

    /// The known global minimizer.
    #[must_use]
    pub const fn minimum(self) -> [f64; 2] {
        match self {
            Objective::Rosenbrock => [1.0, 1.0],
            Objective::Quadratic | Objective::Ackley | Objective::Rastrigin => [0.0, 0.0],
        }
    }

    /// Evaluates the objective at `(x, y)`.
    #[must_use]
    pub fn evaluate(self, x: f64, y: f64) -> f64 {
        (self.function())(x, y)
    }
}

impl FromStr for Objective {
    type Err = UnknownObjective;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `x² + y²`
#[must_use]
pub fn quadratic(x: f64, y: f64) -> f64 {
    x.powi(2) + y.powi(2)
}

/// `100(y − x²)² + (1 − x)²`
#[must_use]
pub fn rosenbrock(x: f64, y: f64) -> f64 {
    100.0 * (y - x.powi(2)).powi(2) + (1.0 - x).powi(2)
}

/// Two-dimensional Ackley function with `a = 20`, `b = 0.2`, `c = 2π`.
#[must_use]
pub fn ackley(x: f64, y: f64) -> f64 {
    -20.0 * (-0.2 * (0.5 * (x.powi(2) + y.powi(2))).sqrt()).exp()
        - (0.5 * ((2.0 * PI * x).cos() + (2.0 * PI * y).cos())).exp()
        + E
        + 20.0
}

/// Two-dimensional Rastrigin function with `A = 10`.
#[must_use]
pub fn rastrigin(x: f64, y: f64) -> f64 {
    const A: f64 = 10.0;
    A * 2.0 + (x.powi(2) - A * (2.0 * PI * x).cos()) + (y.powi(2) - A * (2.0 * PI * y).cos())
}
