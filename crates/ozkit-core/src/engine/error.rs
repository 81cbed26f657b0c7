use crate::core::models::grid::GridError;
use crate::core::numeric::steffen::SplineError;
use crate::engine::solver::SolverError;
use thiserror::Error;

/// Errors surfaced by the compute pipeline.
///
/// Persistence failures are deliberately absent: writing the native series to
/// disk is best-effort and a failed write never invalidates the computed
/// numeric result (it is logged instead).
#[derive(Debug, Error)]
pub enum EngineError {
    /// The caller's output buffer does not match the query grid. Raised
    /// before the solver is invoked; the buffer is left untouched.
    #[error("Output buffer length {actual} does not match query grid length {expected}")]
    BufferShape { expected: usize, actual: usize },

    #[error("Query grid is empty")]
    EmptyQueryGrid,

    #[error("Invalid native grid series: {0}")]
    Grid(#[from] GridError),

    #[error("Interpolation failed: {0}")]
    Spline(#[from] SplineError),

    #[error("OZ solver failed: {0}")]
    Solver(#[from] SolverError),

    /// The inverse-structure-factor transform met an exactly-zero ordinate.
    #[error("Division by zero at native grid index {index} (abscissa {abscissa})")]
    DivisionByZero { index: usize, abscissa: f64 },
}
