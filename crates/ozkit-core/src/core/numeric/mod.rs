//! # Numerics Module
//!
//! Pure numerical routines shared by the pipeline.
//!
//! - [`steffen`] - Shape-preserving cubic spline interpolation (Steffen 1990),
//!   used to resample solver-native series onto caller-chosen query grids.

pub mod steffen;
