//! # Core Models Module
//!
//! Fundamental data structures for the OZ structure pipeline.
//!
//! ## Key Components
//!
//! - [`species`] - Per-species interaction parameters and the two-species
//!   pair assembly with its monodisperse shortcut
//! - [`grid`] - Ordered (abscissa, ordinate) series on the solver's native
//!   grid, with strictly-increasing abscissae enforced at construction

pub mod grid;
pub mod species;
