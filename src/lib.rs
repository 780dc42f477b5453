//! Monthly precipitation queries over CMIP scenario data.
//!
//! The [`data`] module holds everything the viewer draws from: loading,
//! the year index, per-year statistics and the monthly chart series.

pub mod data;
