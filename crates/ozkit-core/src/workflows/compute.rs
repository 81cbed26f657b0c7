use crate::core::io::table;
use crate::core::models::species::SpeciesPair;
use crate::core::numeric::steffen::SteffenSpline;
use crate::engine::config::SolverConfig;
use crate::engine::error::EngineError;
use crate::engine::router::{self, OutputKind};
use crate::engine::run_id::new_run_id;
use crate::engine::solver::{ClosureKind, OzSolver, SolveRequest};
use nalgebra::DVector;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Per-call physical parameters of one structure computation.
#[derive(Debug, Clone, PartialEq)]
pub struct StateParams {
    /// Packing fraction of the fluid; must be positive.
    pub volume_factor: f64,
    /// Reduced temperature of the attractive branch.
    pub temperature: f64,
    /// Reduced temperature of the repulsive branch.
    pub temperature2: f64,
    /// Attraction range parameter of the potential.
    pub lambda_attract: f64,
    /// Repulsion range parameter of the potential.
    pub lambda_repel: f64,
    /// Interaction potential identifier; the valid domain of the range
    /// parameters depends on it and is checked by the solver, not here.
    pub potential_id: u32,
    /// Native grid resolution of the solve.
    pub nodes: usize,
}

/// What one pipeline run produced, besides the resampled output buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeOutcome {
    /// Timestamp-derived label the solve was tagged with.
    pub run_id: String,
    /// Length of the native-grid series (one persisted line per point).
    pub native_points: usize,
    /// Where the native series landed, if persistence succeeded.
    pub persisted_to: Option<PathBuf>,
}

/// Computes one structural quantity of the fluid.
///
/// The pipeline validates the caller's buffers, assembles the two-species
/// description (monodisperse: species 2 mirrors species 1), dispatches the
/// OZ solve, routes and transforms the requested native-grid series,
/// resamples it onto `query` via a Steffen spline into `out`, and persists
/// the native series under the configured output directory (working-directory
/// fallback; a failed write is logged, never fatal).
///
/// On a validation error `out` is left untouched and the solver is never
/// invoked. A non-converging solve is surfaced as
/// [`EngineError::Solver`] and is not retried. Query points are expected to
/// lie within the native grid's coordinate range; points outside it are
/// extrapolated by the spline's boundary rule.
///
/// The persisted file name is fixed per (closure, quantity) pair, so
/// concurrent runs of the same combination race on the same path; callers
/// needing concurrency must serialize writes or use distinct output
/// directories.
#[instrument(skip_all, fields(closure = ?closure, kind = ?kind))]
pub fn compute(
    closure: ClosureKind,
    kind: OutputKind,
    params: &StateParams,
    query: &DVector<f64>,
    out: &mut [f64],
    config: &SolverConfig,
    solver: &impl OzSolver,
) -> Result<ComputeOutcome, EngineError> {
    if query.is_empty() {
        return Err(EngineError::EmptyQueryGrid);
    }
    if out.len() != query.len() {
        return Err(EngineError::BufferShape {
            expected: query.len(),
            actual: out.len(),
        });
    }

    out.fill(0.0);

    let pair = SpeciesPair::build(
        config.sigma1,
        config.sigma2,
        params.temperature,
        params.temperature2,
        params.lambda_attract,
        params.lambda_repel,
        false,
    );

    let run_id = new_run_id();
    info!(
        run_id = %run_id,
        volume_factor = params.volume_factor,
        nodes = params.nodes,
        "Dispatching OZ solve"
    );

    let request = SolveRequest {
        nodes: params.nodes,
        density_points: config.density_points,
        r_max: config.r_max,
        potential_id: params.potential_id,
        closure,
        pair,
        volume_factor: params.volume_factor,
        diameter_scale: config.diameter_scale,
        shape_exponent: config.shape_exponent,
        alpha: config.alpha,
        tolerance: config.tolerance,
        run_label: run_id.clone(),
    };

    let solved = solver.solve(&request)?;

    let native = router::transform(kind, router::select(kind, &solved))?;
    debug!(native_points = native.len(), "Resampling native series onto query grid");

    let spline = SteffenSpline::fit(&native);
    spline.resample(query.as_slice(), out)?;

    let file_name = router::output_file_name(closure, kind);
    let persisted_to = table::save_with_fallback(&config.output_dir, &file_name, &native);

    Ok(ComputeOutcome {
        run_id,
        native_points: native.len(),
        persisted_to,
    })
}

macro_rules! entry_point {
    ($(#[$doc:meta])* $name:ident, $closure:expr, $kind:expr) => {
        $(#[$doc])*
        pub fn $name(
            params: &StateParams,
            query: &DVector<f64>,
            out: &mut [f64],
            config: &SolverConfig,
            solver: &impl OzSolver,
        ) -> Result<ComputeOutcome, EngineError> {
            compute($closure, $kind, params, query, out, config, solver)
        }
    };
}

entry_point!(
    /// Fourier-transformed direct correlation function c^(k), HNC closure.
    direct_correlation_hnc,
    ClosureKind::Hnc,
    OutputKind::DirectCorrelationFt
);
entry_point!(
    /// Inverse structure factor 1/S(k), HNC closure.
    inverse_structure_factor_hnc,
    ClosureKind::Hnc,
    OutputKind::InverseStructureFactor
);
entry_point!(
    /// Static structure factor S(k), HNC closure.
    structure_factor_hnc,
    ClosureKind::Hnc,
    OutputKind::StructureFactor
);
entry_point!(
    /// Radial distribution function g(r), HNC closure.
    radial_distribution_hnc,
    ClosureKind::Hnc,
    OutputKind::RadialDistribution
);
entry_point!(
    /// Fourier-transformed direct correlation function c^(k), Rogers-Young closure.
    direct_correlation_ry,
    ClosureKind::RogersYoung,
    OutputKind::DirectCorrelationFt
);
entry_point!(
    /// Inverse structure factor 1/S(k), Rogers-Young closure.
    inverse_structure_factor_ry,
    ClosureKind::RogersYoung,
    OutputKind::InverseStructureFactor
);
entry_point!(
    /// Static structure factor S(k), Rogers-Young closure.
    structure_factor_ry,
    ClosureKind::RogersYoung,
    OutputKind::StructureFactor
);
entry_point!(
    /// Radial distribution function g(r), Rogers-Young closure.
    radial_distribution_ry,
    ClosureKind::RogersYoung,
    OutputKind::RadialDistribution
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::grid::GridSeries;
    use crate::engine::solver::{SolveOutput, SolverError};
    use std::cell::{Cell, RefCell};
    use tempfile::tempdir;

    /// Deterministic stand-in for a converged OZ solve: smooth synthetic
    /// series on a dense native grid over [0, r_max].
    struct SyntheticSolver {
        calls: Cell<usize>,
        zero_structure_factor_at: Option<usize>,
    }

    impl SyntheticSolver {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
                zero_structure_factor_at: None,
            }
        }

        fn with_zero_structure_factor_at(index: usize) -> Self {
            Self {
                calls: Cell::new(0),
                zero_structure_factor_at: Some(index),
            }
        }
    }

    impl OzSolver for SyntheticSolver {
        fn solve(&self, request: &SolveRequest) -> Result<SolveOutput, SolverError> {
            self.calls.set(self.calls.get() + 1);

            let n = request.nodes;
            let dx = request.r_max / (n - 1) as f64;
            let x: Vec<f64> = (0..n).map(|i| i as f64 * dx).collect();

            let mut s_k: Vec<f64> = x.iter().map(|&v| 1.0 + 0.5 * (v * 0.8).cos()).collect();
            if let Some(i) = self.zero_structure_factor_at {
                s_k[i] = 0.0;
            }
            let c_k: Vec<f64> = x.iter().map(|&v| -(1.0 / (1.0 + v * v))).collect();
            let g_r: Vec<f64> = x.iter().map(|&v| 1.0 - (-v).exp()).collect();

            Ok(SolveOutput {
                direct_correlation_ft: GridSeries::new(x.clone(), c_k).unwrap(),
                structure_factor: GridSeries::new(x.clone(), s_k).unwrap(),
                radial_distribution: GridSeries::new(x, g_r).unwrap(),
            })
        }
    }

    /// Captures the request it was invoked with before delegating to the
    /// synthetic series.
    struct RecordingSolver {
        inner: SyntheticSolver,
        seen: RefCell<Option<SolveRequest>>,
    }

    impl RecordingSolver {
        fn new() -> Self {
            Self {
                inner: SyntheticSolver::new(),
                seen: RefCell::new(None),
            }
        }
    }

    impl OzSolver for RecordingSolver {
        fn solve(&self, request: &SolveRequest) -> Result<SolveOutput, SolverError> {
            *self.seen.borrow_mut() = Some(request.clone());
            self.inner.solve(request)
        }
    }

    struct DivergingSolver;

    impl OzSolver for DivergingSolver {
        fn solve(&self, _request: &SolveRequest) -> Result<SolveOutput, SolverError> {
            Err(SolverError::NonConvergence {
                iterations: 5000,
                residual: 0.37,
            })
        }
    }

    fn params() -> StateParams {
        StateParams {
            volume_factor: 0.3,
            temperature: 1.0,
            temperature2: 1.0,
            lambda_attract: 1.5,
            lambda_repel: 3.0,
            potential_id: 1,
            nodes: 512,
        }
    }

    fn config_in(dir: &std::path::Path) -> SolverConfig {
        SolverConfig {
            output_dir: dir.to_path_buf(),
            ..SolverConfig::default()
        }
    }

    fn evenly_spaced(n: usize, lo: f64, hi: f64) -> DVector<f64> {
        DVector::from_iterator(
            n,
            (0..n).map(|i| lo + (hi - lo) * i as f64 / (n - 1) as f64),
        )
    }

    #[test]
    fn every_closure_and_kind_fills_a_buffer_of_query_length() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let solver = SyntheticSolver::new();
        let query = evenly_spaced(17, 0.5, 9.5);

        for closure in [ClosureKind::Hnc, ClosureKind::RogersYoung] {
            for kind in [
                OutputKind::DirectCorrelationFt,
                OutputKind::InverseStructureFactor,
                OutputKind::StructureFactor,
                OutputKind::RadialDistribution,
            ] {
                let mut out = vec![f64::NAN; query.len()];
                let outcome =
                    compute(closure, kind, &params(), &query, &mut out, &config, &solver)
                        .unwrap();
                assert_eq!(out.len(), query.len());
                assert!(out.iter().all(|v| v.is_finite()));
                assert_eq!(outcome.native_points, params().nodes);
            }
        }
    }

    #[test]
    fn named_entry_points_delegate_to_their_combination() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let solver = SyntheticSolver::new();
        let query = evenly_spaced(9, 1.0, 9.0);
        let p = params();
        let mut out = vec![0.0; query.len()];

        let outcome = direct_correlation_hnc(&p, &query, &mut out, &config, &solver).unwrap();
        assert_eq!(outcome.persisted_to.unwrap(), dir.path().join("HNC_CdeK.dat"));

        let outcome =
            inverse_structure_factor_hnc(&p, &query, &mut out, &config, &solver).unwrap();
        assert_eq!(outcome.persisted_to.unwrap(), dir.path().join("HNC_FT_CdeK.dat"));

        let outcome = structure_factor_hnc(&p, &query, &mut out, &config, &solver).unwrap();
        assert_eq!(outcome.persisted_to.unwrap(), dir.path().join("HNC_SdeK.dat"));

        let outcome = radial_distribution_hnc(&p, &query, &mut out, &config, &solver).unwrap();
        assert_eq!(outcome.persisted_to.unwrap(), dir.path().join("HNC_GdeR.dat"));

        let outcome = direct_correlation_ry(&p, &query, &mut out, &config, &solver).unwrap();
        assert_eq!(outcome.persisted_to.unwrap(), dir.path().join("RY_CdeK.dat"));

        let outcome =
            inverse_structure_factor_ry(&p, &query, &mut out, &config, &solver).unwrap();
        assert_eq!(outcome.persisted_to.unwrap(), dir.path().join("RY_FT_CdeK.dat"));

        let outcome = structure_factor_ry(&p, &query, &mut out, &config, &solver).unwrap();
        assert_eq!(outcome.persisted_to.unwrap(), dir.path().join("RY_SdeK.dat"));

        let outcome = radial_distribution_ry(&p, &query, &mut out, &config, &solver).unwrap();
        assert_eq!(outcome.persisted_to.unwrap(), dir.path().join("RY_GdeR.dat"));
    }

    #[test]
    fn solve_request_carries_every_configured_parameter() {
        let dir = tempdir().unwrap();
        let config = SolverConfig {
            density_points: 64,
            diameter_scale: 1.1,
            shape_exponent: 9.5,
            alpha: 0.7,
            tolerance: 1.0e-6,
            sigma1: 0.9,
            sigma2: 0.9,
            r_max: 120.0,
            output_dir: dir.path().to_path_buf(),
        };
        let solver = RecordingSolver::new();
        let query = evenly_spaced(10, 0.0, 10.0);
        let mut out = vec![0.0; 10];

        structure_factor_hnc(&params(), &query, &mut out, &config, &solver).unwrap();

        let request = solver.seen.borrow().clone().unwrap();
        assert_eq!(request.density_points, 64);
        assert_eq!(request.diameter_scale, 1.1);
        assert_eq!(request.shape_exponent, 9.5);
        assert_eq!(request.alpha, 0.7);
        assert_eq!(request.tolerance, 1.0e-6);
        assert_eq!(request.r_max, 120.0);
        assert_eq!(request.pair.first.diameter, 0.9);
    }

    #[test]
    fn hnc_structure_factor_end_to_end_writes_native_series() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let solver = SyntheticSolver::new();
        let query = evenly_spaced(50, 0.0, 10.0);
        let mut out = vec![0.0; 50];

        let outcome =
            structure_factor_hnc(&params(), &query, &mut out, &config, &solver).unwrap();

        assert_eq!(out.len(), 50);
        assert!(out.iter().all(|v| v.is_finite()));

        let path = outcome.persisted_to.unwrap();
        assert_eq!(path, dir.path().join("HNC_SdeK.dat"));

        let contents = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), params().nodes);
        for line in lines {
            let fields: Vec<&str> = line.split('\t').collect();
            assert_eq!(fields.len(), 2);
            assert!(fields[0].parse::<f64>().is_ok());
            assert!(fields[1].parse::<f64>().is_ok());
        }
    }

    #[test]
    fn resampled_values_track_the_native_series() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let solver = SyntheticSolver::new();
        let query = evenly_spaced(40, 1.0, 20.0);
        let mut out = vec![0.0; 40];

        let dense = StateParams {
            nodes: 4096,
            ..params()
        };
        structure_factor_hnc(&dense, &query, &mut out, &config, &solver).unwrap();

        for (&xq, &computed) in query.as_slice().iter().zip(&out) {
            let expected = 1.0 + 0.5 * (xq * 0.8).cos();
            assert!((computed - expected).abs() < 1e-2);
        }
    }

    #[test]
    fn buffer_shape_violation_leaves_buffer_untouched_and_skips_solver() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let solver = SyntheticSolver::new();
        let query = evenly_spaced(10, 0.0, 10.0);
        let mut out = vec![7.0; 4];

        let err = structure_factor_hnc(&params(), &query, &mut out, &config, &solver)
            .unwrap_err();

        assert!(matches!(
            err,
            EngineError::BufferShape {
                expected: 10,
                actual: 4
            }
        ));
        assert!(out.iter().all(|&v| v == 7.0));
        assert_eq!(solver.calls.get(), 0);
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn empty_query_grid_is_rejected_before_the_solver_runs() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let solver = SyntheticSolver::new();
        let query = DVector::from_vec(vec![]);
        let mut out = vec![];

        let err =
            structure_factor_hnc(&params(), &query, &mut out, &config, &solver).unwrap_err();

        assert!(matches!(err, EngineError::EmptyQueryGrid));
        assert_eq!(solver.calls.get(), 0);
    }

    #[test]
    fn non_convergence_is_reported_distinctly_from_validation_errors() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let query = evenly_spaced(10, 0.0, 10.0);
        let mut out = vec![0.0; 10];

        let err = structure_factor_hnc(&params(), &query, &mut out, &config, &DivergingSolver)
            .unwrap_err();

        assert!(matches!(
            err,
            EngineError::Solver(SolverError::NonConvergence { .. })
        ));
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn zero_structure_factor_surfaces_division_by_zero() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let solver = SyntheticSolver::with_zero_structure_factor_at(3);
        let query = evenly_spaced(10, 0.0, 10.0);
        let mut out = vec![0.0; 10];

        let err = inverse_structure_factor_hnc(&params(), &query, &mut out, &config, &solver)
            .unwrap_err();

        assert!(matches!(err, EngineError::DivisionByZero { index: 3, .. }));
    }

    #[test]
    fn plain_structure_factor_ignores_the_zero_ordinate() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let solver = SyntheticSolver::with_zero_structure_factor_at(3);
        let query = evenly_spaced(10, 0.0, 10.0);
        let mut out = vec![0.0; 10];

        structure_factor_hnc(&params(), &query, &mut out, &config, &solver).unwrap();
        assert!(out.iter().all(|v| v.is_finite()));
    }
}
