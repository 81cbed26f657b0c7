//! # Engine Module
//!
//! The logic core of the OZ structure pipeline: per-run configuration, the
//! error taxonomy, the contract an actual Ornstein-Zernike iteration scheme
//! implements, and the routing of solver output to the requested quantity.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Immutable solver-wide parameters with
//!   the conventional defaults, loadable from TOML
//! - **Error Handling** ([`error`]) - Engine-level error types and
//!   propagation from the lower layers
//! - **Solver Contract** ([`solver`]) - The request/response types and the
//!   [`solver::OzSolver`] trait an OZ solver implementation fulfills
//! - **Result Routing** ([`router`]) - Selection and transformation of the
//!   native-grid series for a requested output kind
//! - **Run Identifiers** ([`run_id`]) - Timestamp-derived labels tagging one
//!   solver run

pub mod config;
pub mod error;
pub mod router;
pub mod run_id;
pub mod solver;
