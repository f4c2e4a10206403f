//! Reconstructs clean, rectangular bank statement transaction tables from the
//! noisy cell grids produced by PDF table extractors.
//!
//! The flow through this crate is: [grid::CellGrid] (one per detected table)
//! into [assemble::assemble_grid], which yields a [record::StatementTable] in
//! the canonical schema, followed by a [variant::PreprocessVariant] that folds
//! continuation rows and splits merged date/description cells.

pub mod assemble;
pub mod config;
pub mod datesplit;
pub mod grid;
pub mod merge;
pub mod record;
pub mod table;
pub mod text;
pub mod variant;

pub use record::{Field, Record, StatementTable};
