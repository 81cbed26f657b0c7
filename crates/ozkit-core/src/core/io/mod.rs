//! # Tabular I/O Module
//!
//! Output of native-grid series as plain-text tables.
//!
//! - [`table`] - Two-column, tab-separated, high-precision series writer with
//!   a working-directory fallback for unwritable output directories.

pub mod table;
