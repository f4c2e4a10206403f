//! Boundary with the external table extractors that turn PDF pages into cell
//! grids.

use std::path::PathBuf;

use anyhow::Result;
use serde_derive::Deserialize;
use statement::grid::CellGrid;

/// Geometric tuning for stream (whitespace-aligned) extraction, in PDF points.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StreamTolerances {
    /// Vertical distance within which text is placed on the same row.
    pub row: f32,
    /// Horizontal distance within which text is placed in the same column.
    pub column: f32,
    /// Distance from text to the edge of the detected table area.
    pub edge: f32,
}

impl Default for StreamTolerances {
    fn default() -> Self {
        Self {
            row: 5.0,
            column: 1.0,
            edge: 50.0,
        }
    }
}

/// Single request to a [GridProvider] for the tables in a PDF file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExtractionRequest {
    pub pdf_path: PathBuf,
    /// One-based page numbers. Empty selects all pages.
    pub pages: Vec<i32>,
    pub tolerances: StreamTolerances,
}

impl ExtractionRequest {
    /// Returns true if tables from `page` were requested.
    pub fn includes_page(&self, page: i32) -> bool {
        self.pages.is_empty() || self.pages.contains(&page)
    }

    /// Checks the requested page numbers are usable.
    pub fn validate(&self) -> Result<(), ProviderError> {
        match self.pages.iter().find(|page| **page < 1) {
            Some(page) => Err(ProviderError::InvalidPage { page: *page }),
            None => Ok(()),
        }
    }
}

/// Required trait for extracting the tables of a PDF file as cell grids, in
/// page order.
pub trait GridProvider {
    fn extract_grids(&self, request: &ExtractionRequest) -> Result<Vec<CellGrid>>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("page number {page} is invalid, pages are numbered from 1")]
    InvalidPage { page: i32 },
    #[error("document analysis did not succeed")]
    AnalysisNotSucceeded,
    #[error("document analysis response has no analysis result")]
    MissingAnalysisResult,
}
