//! # Core Module
//!
//! This module provides the fundamental building blocks for the OZ structure
//! pipeline, serving as the stateless computational foundation of the library.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! aspects of the pipeline:
//!
//! - **Data Models** ([`models`]) - Species descriptions and native-grid
//!   series with constructor-enforced invariants
//! - **Numerics** ([`numeric`]) - Shape-preserving spline interpolation used
//!   to resample solver output onto caller-chosen grids
//! - **Tabular I/O** ([`io`]) - High-precision tab-separated series output
//!   with a working-directory fallback

pub mod io;
pub mod models;
pub mod numeric;
