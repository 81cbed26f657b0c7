use crate::core::models::grid::GridSeries;
use crate::core::models::species::SpeciesPair;
use thiserror::Error;

/// The closure relation supplementing the OZ equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClosureKind {
    /// Hypernetted Chain.
    Hnc,
    /// Rogers-Young.
    RogersYoung,
}

impl ClosureKind {
    /// Numeric closure id consumed by solver implementations, kept
    /// compatible with the historical convention (HNC = 2, RY = 3).
    pub fn closure_id(&self) -> u32 {
        match self {
            ClosureKind::Hnc => 2,
            ClosureKind::RogersYoung => 3,
        }
    }

    /// File-name stem of the persisted output series.
    pub fn file_stem(&self) -> &'static str {
        match self {
            ClosureKind::Hnc => "HNC",
            ClosureKind::RogersYoung => "RY",
        }
    }
}

#[derive(Debug, Error)]
pub enum SolverError {
    /// The OZ iteration could not reach self-consistency. Not retried by
    /// the pipeline; the failure is surfaced to the caller as-is.
    #[error("OZ iteration failed to converge after {iterations} iterations (residual {residual})")]
    NonConvergence { iterations: usize, residual: f64 },

    #[error("Invalid solver parameter: {0}")]
    InvalidParameter(String),

    #[error("Internal solver error: {0}")]
    Internal(String),
}

/// Full physical and numerical parameters of one OZ solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveRequest {
    /// Native grid resolution: every output series has this many points.
    pub nodes: usize,
    /// Number of density points of the solver's thermodynamic ramp.
    pub density_points: usize,
    /// Upper bound of the radial grid.
    pub r_max: f64,
    /// Interaction potential identifier; its valid range parameter domain is
    /// the solver's concern, not validated by the pipeline.
    pub potential_id: u32,
    pub closure: ClosureKind,
    pub pair: SpeciesPair,
    /// Packing fraction of the fluid.
    pub volume_factor: f64,
    pub diameter_scale: f64,
    /// Shape exponent of the interaction potential.
    pub shape_exponent: f64,
    /// Closure mixing parameter.
    pub alpha: f64,
    /// Convergence tolerance of the iteration.
    pub tolerance: f64,
    /// Opaque per-run label for solver diagnostics, derived from the
    /// wall-clock timestamp.
    pub run_label: String,
}

/// The three native-grid series a converged solve produces.
///
/// A solver returns either all three fully populated series or an error;
/// partial results are not part of the contract.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutput {
    /// Fourier transform of the direct correlation function, on the k-grid.
    pub direct_correlation_ft: GridSeries,
    /// Static structure factor S(k), on the k-grid.
    pub structure_factor: GridSeries,
    /// Radial distribution function g(r), on the r-grid.
    pub radial_distribution: GridSeries,
}

/// Contract of an Ornstein-Zernike solver implementation.
///
/// Implementations iterate the OZ equation to self-consistency under the
/// requested closure and must be deterministic for fixed inputs. The
/// pipeline treats the solver as opaque and blocking: there is no
/// cancellation, and a non-converging solve returns only when the
/// implementation itself gives up.
pub trait OzSolver {
    fn solve(&self, request: &SolveRequest) -> Result<SolveOutput, SolverError>;
}
