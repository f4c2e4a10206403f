//! Runs a document through extraction, assembly and preprocessing.

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use statement::{
    StatementTable,
    assemble::assemble_grid,
    config::AssemblyConfig,
    grid::CellGrid,
    variant::PreprocessVariant,
};

use crate::{
    config::RunConfig,
    provider::{ExtractionRequest, GridProvider},
};

/// Result of processing one document.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct ProcessOutcome {
    pub table: StatementTable,
    /// Grids returned by the provider.
    pub tables_found: usize,
    /// Grids that could not be assembled into the statement schema.
    pub tables_excluded: usize,
}

/// Extracts, assembles and preprocesses the tables of one document.
///
/// Provider failures are fatal. Grids of the wrong shape are logged and
/// excluded.
pub fn process_document(
    provider: &dyn GridProvider,
    request: &ExtractionRequest,
    config: &RunConfig,
) -> Result<ProcessOutcome> {
    let grids = provider
        .extract_grids(request)
        .with_context(|| format!("extracting tables from {:?}", request.pdf_path))?;

    Ok(process_grids(&grids, &config.assembly, config.variant))
}

/// Assembles each grid, concatenates the results in order and applies
/// `variant` to the whole.
pub fn process_grids(
    grids: &[CellGrid],
    assembly: &AssemblyConfig,
    variant: PreprocessVariant,
) -> ProcessOutcome {
    log::info!("Processing {} extracted tables", grids.len());

    let mut tables = Vec::with_capacity(grids.len());
    let mut tables_excluded = 0;
    for (index, grid) in grids.iter().enumerate() {
        match assemble_grid(assembly, grid) {
            Ok(table) => {
                log::debug!("Table {index} assembled into {} records", table.len());
                tables.push(table);
            }
            Err(err) => {
                log::warn!("Excluding table {index}: {err}");
                tables_excluded += 1;
            }
        }
    }

    let table = variant.apply(StatementTable::concat(tables));
    log::info!(
        "Kept {} of {} tables, {} records after {variant} preprocessing",
        grids.len() - tables_excluded,
        grids.len(),
        table.len()
    );

    ProcessOutcome {
        table,
        tables_found: grids.len(),
        tables_excluded,
    }
}
