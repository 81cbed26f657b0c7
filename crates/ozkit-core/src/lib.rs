//! # OZKit Core Library
//!
//! A library for computing the static structure of dense colloidal fluids by
//! solving the Ornstein-Zernike (OZ) integral equation under the Hypernetted
//! Chain (HNC) and Rogers-Young (RY) closure relations.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`Species`, `GridSeries`), pure numerics (the shape-preserving Steffen
//!   spline), and tabular I/O utilities.
//!
//! - **[`engine`]: The Logic Core.** Holds the solver configuration, the
//!   error taxonomy, the [`engine::solver::OzSolver`] contract that an actual
//!   OZ iteration scheme implements, and the routing of solver output series
//!   to the requested physical quantity.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level,
//!   user-facing layer. It packages physical parameters into a solver
//!   request, resamples the solver's native-grid result onto the caller's
//!   query grid, and persists the native series to disk. It provides one
//!   entry point per closure and quantity (direct correlation function,
//!   structure factor and its inverse, radial distribution function).

pub mod core;
pub mod engine;
pub mod workflows;
