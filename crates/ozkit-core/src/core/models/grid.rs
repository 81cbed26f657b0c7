use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("Abscissa and ordinate lengths differ: {x_len} vs {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("A grid series requires at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("Abscissae must be strictly increasing (violation at index {index})")]
    NotStrictlyIncreasing { index: usize },
}

/// An ordered series of (abscissa, ordinate) pairs on a single grid.
///
/// Both the solver's native grid output (a dense r- or k-grid at solver
/// resolution) and synthetic test series use this representation. The
/// constructor enforces the invariants the interpolation service relies on:
/// matching lengths, at least two points, and strictly increasing abscissae.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSeries {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl GridSeries {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, GridError> {
        if x.len() != y.len() {
            return Err(GridError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(GridError::TooFewPoints(x.len()));
        }
        for i in 1..x.len() {
            if x[i] <= x[i - 1] {
                return Err(GridError::NotStrictlyIncreasing { index: i });
            }
        }
        Ok(Self { x, y })
    }

    /// Builds a series with the same abscissae but new ordinates.
    ///
    /// Used by ordinate-only transforms (e.g. the reciprocal of the structure
    /// factor); the abscissae of a routed series are never transformed.
    pub fn with_ordinates(&self, y: Vec<f64>) -> Result<Self, GridError> {
        if y.len() != self.x.len() {
            return Err(GridError::LengthMismatch {
                x_len: self.x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self {
            x: self.x.clone(),
            y,
        })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn min_x(&self) -> f64 {
        self.x[0]
    }

    pub fn max_x(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}
