use anyhow::{Context, Result};
use statement::grid::CellGrid;

use crate::{
    provider::{ExtractionRequest, GridProvider},
    tabula_wrapper::JsonTableSet,
};

/// [GridProvider] running Tabula's stream extraction in an attached JVM.
///
/// Must be created and run on the thread that attached the environment.
pub struct TabulaStreamProvider<'env> {
    tabula_env: tabula::TabulaEnv<'env>,
}

impl<'env> TabulaStreamProvider<'env> {
    /// Creates a [TabulaStreamProvider] with the given [tabula::TabulaEnv].
    pub fn new(tabula_env: tabula::TabulaEnv<'env>) -> Self {
        Self { tabula_env }
    }

    fn extract_pages(
        &self,
        request: &ExtractionRequest,
        pages: Option<&[i32]>,
    ) -> Result<JsonTableSet> {
        let tabula = self
            .tabula_env
            .configure_tabula(
                None,
                pages,
                tabula::OutputFormat::Json,
                true,
                tabula::ExtractionMethod::Basic,
                false,
                None,
            )
            .context("configuring Tabula to extract tables")?;

        let extracted_file = tempfile::NamedTempFile::new()
            .context("creating temporary file for extracting PDF table data")?;
        tabula
            .parse_document_into(&request.pdf_path, extracted_file.path())
            .context("extracting PDF table data")?;

        serde_json::from_reader(extracted_file).context("parsing extracted PDF table data")
    }
}

impl<'env> GridProvider for TabulaStreamProvider<'env> {
    fn extract_grids(&self, request: &ExtractionRequest) -> Result<Vec<CellGrid>> {
        request.validate()?;
        // Tabula derives stream geometry itself.
        log::debug!(
            "Ignoring stream tolerances {:?} for Tabula extraction",
            request.tolerances
        );

        if request.pages.is_empty() {
            return Ok(self.extract_pages(request, None)?.into_grids(request));
        }

        let mut grids = Vec::new();
        for page in &request.pages {
            let tables = self
                .extract_pages(request, Some(&[*page]))
                .with_context(|| format!("extracting tables from page {page}"))?;
            grids.extend(tables.into_grids(request));
        }
        Ok(grids)
    }
}
