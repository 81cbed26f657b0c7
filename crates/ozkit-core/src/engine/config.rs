use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Solver-wide parameters, immutable for the duration of one solve.
///
/// Historically these lived as process-wide mutable globals; here they are an
/// explicit value passed to every entry point, so two runs with different
/// settings can never interfere. [`SolverConfig::default`] carries the
/// conventional values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Number of density points used by the solver's thermodynamic ramp.
    pub density_points: usize,
    /// Diameter scaling factor applied to both species.
    pub diameter_scale: f64,
    /// Shape exponent of the interaction potential.
    pub shape_exponent: f64,
    /// Mixing parameter of the closure relation.
    pub alpha: f64,
    /// Convergence tolerance of the OZ iteration.
    pub tolerance: f64,
    /// Hard-core diameter of species 1.
    pub sigma1: f64,
    /// Hard-core diameter of species 2 (consulted only for polydisperse
    /// assemblies; see [`crate::core::models::species::SpeciesPair::build`]).
    pub sigma2: f64,
    /// Upper bound of the radial grid.
    pub r_max: f64,
    /// Directory the native-grid series are persisted under; falls back to
    /// the working directory when unwritable.
    pub output_dir: PathBuf,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            density_points: 100,
            diameter_scale: 1.0,
            shape_exponent: 14.0,
            alpha: 1.0,
            tolerance: 1.0e-4,
            sigma1: 1.0,
            sigma2: 1.0,
            r_max: 160.0,
            output_dir: PathBuf::from("output"),
        }
    }
}

impl SolverConfig {
    /// Loads a configuration from a TOML file; absent keys keep their
    /// default values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_carries_conventional_values() {
        let config = SolverConfig::default();
        assert_eq!(config.density_points, 100);
        assert_eq!(config.diameter_scale, 1.0);
        assert_eq!(config.shape_exponent, 14.0);
        assert_eq!(config.alpha, 1.0);
        assert_eq!(config.tolerance, 1.0e-4);
        assert_eq!(config.sigma1, 1.0);
        assert_eq!(config.sigma2, 1.0);
        assert_eq!(config.r_max, 160.0);
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn load_overrides_only_present_keys() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "alpha = 0.5\ndensity_points = 40").unwrap();

        let config = SolverConfig::load(file.path()).unwrap();
        assert_eq!(config.alpha, 0.5);
        assert_eq!(config.density_points, 40);
        assert_eq!(config.r_max, 160.0);
    }

    #[test]
    fn load_rejects_unknown_keys() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not_a_parameter = 1").unwrap();

        assert!(matches!(
            SolverConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        assert!(matches!(
            SolverConfig::load(Path::new("/no/such/config.toml")),
            Err(ConfigError::Read { .. })
        ));
    }
}
