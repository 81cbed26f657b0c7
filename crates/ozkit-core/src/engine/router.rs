use crate::core::models::grid::GridSeries;
use crate::engine::error::EngineError;
use crate::engine::solver::{ClosureKind, SolveOutput};

/// The physical quantity a caller requests from one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    /// Fourier transform of the direct correlation function, c^(k).
    DirectCorrelationFt,
    /// Inverse of the static structure factor, 1/S(k).
    InverseStructureFactor,
    /// Static structure factor, S(k).
    StructureFactor,
    /// Radial distribution function, g(r).
    RadialDistribution,
}

impl OutputKind {
    /// File-name suffix of the persisted series for this quantity.
    fn file_suffix(&self) -> &'static str {
        match self {
            OutputKind::DirectCorrelationFt => "CdeK",
            OutputKind::InverseStructureFactor => "FT_CdeK",
            OutputKind::StructureFactor => "SdeK",
            OutputKind::RadialDistribution => "GdeR",
        }
    }
}

/// The conventional output file name of a (closure, quantity) pair, e.g.
/// `HNC_SdeK.dat`.
///
/// The names carry no per-run component, so concurrent runs of the same
/// combination race on the same path; callers needing concurrency must
/// serialize or use distinct output directories.
pub fn output_file_name(closure: ClosureKind, kind: OutputKind) -> String {
    format!("{}_{}.dat", closure.file_stem(), kind.file_suffix())
}

/// Selects the native-grid series a quantity is derived from.
pub fn select(kind: OutputKind, output: &SolveOutput) -> &GridSeries {
    match kind {
        OutputKind::DirectCorrelationFt => &output.direct_correlation_ft,
        OutputKind::InverseStructureFactor | OutputKind::StructureFactor => {
            &output.structure_factor
        }
        OutputKind::RadialDistribution => &output.radial_distribution,
    }
}

/// Applies the quantity's ordinate transform to a selected series.
///
/// Identity for every kind except [`OutputKind::InverseStructureFactor`],
/// which maps each ordinate to its reciprocal and fails with
/// [`EngineError::DivisionByZero`] on an exactly-zero structure factor
/// rather than producing infinity. Abscissae are never transformed.
pub fn transform(kind: OutputKind, series: &GridSeries) -> Result<GridSeries, EngineError> {
    match kind {
        OutputKind::InverseStructureFactor => {
            let mut inverted = Vec::with_capacity(series.len());
            for (index, (abscissa, ordinate)) in series.points().enumerate() {
                if ordinate == 0.0 {
                    return Err(EngineError::DivisionByZero { index, abscissa });
                }
                inverted.push(1.0 / ordinate);
            }
            Ok(series.with_ordinates(inverted)?)
        }
        _ => Ok(series.clone()),
    }
}
