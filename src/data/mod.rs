//! Data layer: core types, loading, indexing and the per-year queries.
//!
//! Architecture:
//! ```text
//!  .json / .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → Vec<PrecipRecord>
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │ PrecipDataset  │  flattened observations + YearIndex
//!   └───────────────┘
//!        │
//!        ├──────────────┐
//!        ▼              ▼
//!   ┌──────────┐   ┌──────────┐
//!   │  stats    │   │  filter   │  (model, year) → YearStats / monthly series
//!   └──────────┘   └──────────┘
//! ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
pub mod years;
