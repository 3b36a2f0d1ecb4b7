//! IO module for format-specific reading and writing operations.
//!
//! # Format Modules
//!
//! - `csv` - CSV format for region datasets and comparison tables (requires `tabular` feature)
//! - `json` - JSON format for region datasets, reports and parameter files

#[cfg(feature = "tabular")]
pub mod csv;
pub mod json;
