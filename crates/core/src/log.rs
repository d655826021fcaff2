//! Parsing of optimizer step logs.
//!
//! A log is line-oriented text written by an external optimizer. Only lines
//! containing one of the known markers are significant; everything else is
//! skipped. A typical log looks like:
//!
//! ```text
//! Objective Function: Rosenbrock
//! Algorithm: Steepest Descent
//! Iteration 1:
//! Objective Function Value: 1.00000
//! x-values: 0.00000 0.00000
//! Convergence reached after 42 iterations.
//! ```
//!
//! Markers are checked in priority order and the first match decides how a
//! line is read. Parsing does not check that the step sequences line up; that
//! is left to whoever plots them.

mod error;


use std::{fs, path::Path};

pub use error::{LogError, ParseError, ResolveError};

use crate::{Objective, PathError, PlanarPath};

const HEADER: &str = "Objective Function:";
const X_VALUES: &str = "x-values";
const VALUE: &str = "Objective Function Value";
const ALGORITHM: &str = "Algorithm:";
const CONVERGED: &str = "Convergence reached after";
const MAX_ITERATIONS: &str = "Maximum iterations reached";

/// How the logged optimization run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The tolerance was met after `iterations` iterations.
    Converged { iterations: usize },

    /// The iteration limit was hit first.
    MaxIterations,
}

/// An optimization trajectory read from a step log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrajectoryLog {
    /// Name from the last `Objective Function:` header, if any.
    pub function_name: Option<String>,

    /// One coordinate vector per logged step, in file order.
    pub x_values: Vec<Vec<f64>>,

    /// One objective value per logged step, in file order.
    pub objective_values: Vec<f64>,

    /// Text of the last `Algorithm:` line, if any.
    pub algorithm: Option<String>,

    /// Termination line, if the log contains one.
    pub outcome: Option<Outcome>,
}

impl TrajectoryLog {
    /// Reads and parses the log at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Io`] if the file cannot be read and
    /// [`LogError::Parse`] if its contents are malformed.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|source| LogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&text).map_err(|source| LogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses log text.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] on the first marker line that has no `:`
    /// or carries a token that is not a number. Optional summary lines
    /// (`Algorithm:`, termination messages) never fail the parse.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut log = Self::default();

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;

            if line.contains(HEADER) {
                let name = after_colon(line, line_no)?.trim();
                log.function_name = Some(name.to_owned());
            } else if line.contains(X_VALUES) {
                let values = after_colon(line, line_no)?
                    .split_whitespace()
                    .map(|token| parse_number(token, line_no))
                    .collect::<Result<Vec<_>, _>>()?;
                log.x_values.push(values);
            } else if line.contains(VALUE) {
                let value = parse_number(after_colon(line, line_no)?.trim(), line_no)?;
                log.objective_values.push(value);
            } else if line.contains(ALGORITHM) {
                let algorithm = after_colon(line, line_no)?.trim();
                log.algorithm = Some(algorithm.to_owned());
            } else if let Some((_, rest)) = line.split_once(CONVERGED) {
                // A summary line without a readable count is skipped like any other.
                let iterations = rest.split_whitespace().next().and_then(|t| t.parse().ok());
                if let Some(iterations) = iterations {
                    log.outcome = Some(Outcome::Converged { iterations });
                }
            } else if line.contains(MAX_ITERATIONS) {
                log.outcome = Some(Outcome::MaxIterations);
            }
        }

        Ok(log)
    }

    /// Number of logged coordinate vectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    /// Returns `true` if no coordinate vectors were logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    /// The last logged objective value.
    #[must_use]
    pub fn final_value(&self) -> Option<f64> {
        self.objective_values.last().copied()
    }

    /// Resolves the objective named by the log header.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MissingName`] if the log had no header and
    /// [`ResolveError::Unknown`] if the name is not supported.
    pub fn objective(&self) -> Result<Objective, ResolveError> {
        let name = self
            .function_name
            .as_deref()
            .ok_or(ResolveError::MissingName)?;

        Ok(Objective::from_name(name)?)
    }

    /// The first two components of every logged step.
    ///
    /// # Errors
    ///
    /// See [`PlanarPath::from_steps`].
    pub fn planar_path(&self) -> Result<PlanarPath, PathError> {
        PlanarPath::from_steps(&self.x_values)
    }
}

fn after_colon(line: &str, line_no: usize) -> Result<&str, ParseError> {
    line.split_once(':')
        .map(|(_, rest)| rest)
        .ok_or(ParseError::MissingColon { line: line_no })
}

fn parse_number(token: &str, line_no: usize) -> Result<f64, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line: line_no,
        token: token.to_owned(),
    })
}
