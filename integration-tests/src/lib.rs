//! Shared fixtures for the end-to-end tests.

use std::path::PathBuf;

/// A two-step Rosenbrock log as written by a momentum descent run.
pub const ROSENBROCK_LOG: &str = "\
Objective Function: Rosenbrock
Algorithm: Momentum Descent (beta=0.900000)
Iteration 1:
Objective Function Value: 0.00000
x-values: 1.00000 1.00000

Iteration 2:
Objective Function Value: 2.00000
x-values: 0.00000 0.00000
Current Tolerance: 2.00000
";

/// Path to the sample log shipped with the repository.
#[must_use]
pub fn sample_log_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/output.txt")
}
