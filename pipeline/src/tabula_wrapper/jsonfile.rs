use std::{fs::File, io::BufReader, path::PathBuf};

use anyhow::{Context, Result};
use statement::grid::CellGrid;

use crate::{
    provider::{ExtractionRequest, GridProvider},
    tabula_wrapper::JsonTableSet,
};

/// [GridProvider] reading tables previously extracted by Tabula in JSON
/// format, such as the output of `tabula-java --format JSON`.
pub struct TabulaJsonFileProvider {
    path: PathBuf,
}

impl TabulaJsonFileProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl GridProvider for TabulaJsonFileProvider {
    fn extract_grids(&self, request: &ExtractionRequest) -> Result<Vec<CellGrid>> {
        request.validate()?;
        let file = File::open(&self.path)
            .with_context(|| format!("opening Tabula output {:?}", self.path))?;
        let tables: JsonTableSet = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing Tabula output {:?}", self.path))?;
        Ok(tables.into_grids(request))
    }
}
