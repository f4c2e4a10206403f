pub mod jsonfile;
pub mod singlethreaded;

#[cfg(test)]
mod tests;

use serde_derive::Deserialize;
use statement::grid::CellGrid;

use crate::provider::ExtractionRequest;

/// A sequence of extracted tables from a PDF file, in Tabula's JSON output
/// format.
#[derive(Deserialize, Debug)]
#[serde(transparent)]
pub struct JsonTableSet(pub Vec<JsonTable>);

/// A single extracted table from a PDF file. Geometry fields are ignored.
#[derive(Deserialize, Debug)]
pub struct JsonTable {
    #[serde(default)]
    pub extraction_method: String,
    pub page_number: i32,
    pub data: Vec<JsonRow>,
}

/// A single extracted table row from a PDF file.
#[derive(Deserialize, Debug)]
pub struct JsonRow(pub Vec<JsonCell>);

/// A single extracted table cell from a PDF file.
#[derive(Deserialize, Debug)]
pub struct JsonCell {
    pub text: String,
}

impl JsonTableSet {
    /// Converts the tables on requested pages into grids, in output order.
    pub fn into_grids(self, request: &ExtractionRequest) -> Vec<CellGrid> {
        self.0
            .into_iter()
            .filter(|table| request.includes_page(table.page_number))
            .map(JsonTable::into_grid)
            .collect()
    }
}

impl JsonTable {
    pub fn into_grid(self) -> CellGrid {
        log::debug!(
            "Converting {} table from page {} with {} rows",
            self.extraction_method,
            self.page_number,
            self.data.len()
        );
        CellGrid::from_rows(
            self.data
                .into_iter()
                .map(|row| row.0.into_iter().map(|cell| cell.text)),
        )
    }
}
