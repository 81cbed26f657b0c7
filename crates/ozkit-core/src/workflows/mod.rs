//! # Workflows Module
//!
//! High-level entry points of the library.
//!
//! ## Overview
//!
//! Workflows package physical parameters into a solver request, dispatch the
//! OZ solve, route the returned native-grid series to the requested quantity,
//! resample it onto the caller's query grid, and persist the native series to
//! disk. One generic pipeline ([`compute::compute`]) backs eight convenience
//! entry points, one per (closure × quantity) combination.

pub mod compute;
