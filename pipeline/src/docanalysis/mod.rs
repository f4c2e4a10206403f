//! Reads tables from a saved response of a cloud document-analysis service,
//! in the layout model's `analyzeResult` format.


use std::{
    fs::File,
    io::{BufReader, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use serde_derive::Deserialize;
use statement::grid::{CellGrid, RawCell};

use crate::provider::{ExtractionRequest, GridProvider, ProviderError};

const SUCCEEDED: &str = "succeeded";

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    #[serde(default)]
    status: String,
    analyze_result: Option<AnalyzeResult>,
}

#[derive(Deserialize, Debug)]
struct AnalyzeResult {
    #[serde(default)]
    tables: Vec<DocumentTable>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct DocumentTable {
    row_count: usize,
    column_count: usize,
    #[serde(default)]
    cells: Vec<DocumentTableCell>,
    #[serde(default)]
    bounding_regions: Vec<BoundingRegion>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct DocumentTableCell {
    row_index: usize,
    column_index: usize,
    #[serde(default)]
    content: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct BoundingRegion {
    page_number: i32,
}

impl DocumentTable {
    /// A table without bounding regions is kept regardless of page.
    fn on_requested_page(&self, request: &ExtractionRequest) -> bool {
        self.bounding_regions.is_empty()
            || self
                .bounding_regions
                .iter()
                .any(|region| request.includes_page(region.page_number))
    }

    fn into_grid(self) -> Result<CellGrid> {
        let cells = self
            .cells
            .into_iter()
            .map(|cell| RawCell::new(cell.row_index, cell.column_index, cell.content))
            .collect();
        Ok(CellGrid::new(self.row_count, self.column_count, cells)?)
    }
}

/// Parses a document-analysis response into grids, in response order.
pub fn parse_analysis<R: Read>(reader: R, request: &ExtractionRequest) -> Result<Vec<CellGrid>> {
    let response: AnalyzeResponse =
        serde_json::from_reader(reader).context("parsing document analysis response")?;

    if response.status != SUCCEEDED {
        return Err(anyhow::Error::from(ProviderError::AnalysisNotSucceeded))
            .with_context(|| format!("analysis status is {:?}", response.status));
    }
    let result = response
        .analyze_result
        .ok_or(ProviderError::MissingAnalysisResult)?;

    log::info!("Document analysis found {} tables", result.tables.len());

    result
        .tables
        .into_iter()
        .enumerate()
        .filter(|(_, table)| table.on_requested_page(request))
        .map(|(index, table)| {
            table
                .into_grid()
                .with_context(|| format!("reading analysed table {index}"))
        })
        .collect()
}

/// [GridProvider] reading a saved document-analysis response from a file.
pub struct DocumentAnalysisFileProvider {
    path: PathBuf,
}

impl DocumentAnalysisFileProvider {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl GridProvider for DocumentAnalysisFileProvider {
    fn extract_grids(&self, request: &ExtractionRequest) -> Result<Vec<CellGrid>> {
        request.validate()?;
        let file = File::open(&self.path)
            .with_context(|| format!("opening document analysis response {:?}", self.path))?;
        parse_analysis(BufReader::new(file), request)
            .with_context(|| format!("reading document analysis response {:?}", self.path))
    }
}
