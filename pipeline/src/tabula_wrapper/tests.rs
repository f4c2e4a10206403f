use std::io::Write;

use anyhow::Result;
use googletest::prelude::*;
use statement::grid::CellGrid;
use testutils::{DefaultForTest, anyhow_downcasts_to, error_chain_contains};

use crate::{
    provider::{ExtractionRequest, GridProvider, ProviderError},
    tabula_wrapper::{JsonTableSet, jsonfile::TabulaJsonFileProvider},
};

const TABULA_OUTPUT: &str = r#"[
  {
    "extraction_method": "stream",
    "page_number": 1,
    "top": 100.0, "left": 20.0, "width": 500.0, "height": 300.0,
    "right": 520.0, "bottom": 400.0,
    "data": [
      [
        {"top": 100.0, "left": 20.0, "width": 50.0, "height": 10.0, "text": "Date"},
        {"top": 100.0, "left": 70.0, "width": 50.0, "height": 10.0, "text": "Details"}
      ],
      [
        {"top": 110.0, "left": 20.0, "width": 50.0, "height": 10.0, "text": "1 Jan"},
        {"top": 110.0, "left": 70.0, "width": 50.0, "height": 10.0, "text": "CARD"}
      ]
    ]
  },
  {
    "extraction_method": "stream",
    "page_number": 2,
    "data": [
      [{"text": "2 Jan"}, {"text": "FEE"}, {"text": "1.00"}]
    ]
  }
]"#;

fn parse_output() -> JsonTableSet {
    serde_json::from_str(TABULA_OUTPUT).expect("should parse")
}

#[gtest]
fn converts_all_tables_in_order() {
    let grids = parse_output().into_grids(&ExtractionRequest::default_for_test());

    expect_that!(
        grids,
        elements_are![
            eq(&CellGrid::from_rows([["Date", "Details"], ["1 Jan", "CARD"]])),
            eq(&CellGrid::from_rows([["2 Jan", "FEE", "1.00"]])),
        ]
    );
}

#[gtest]
fn converts_requested_pages_only() {
    let request = ExtractionRequest {
        pages: vec![2],
        ..ExtractionRequest::default_for_test()
    };

    let grids = parse_output().into_grids(&request);

    expect_that!(
        grids,
        elements_are![eq(&CellGrid::from_rows([["2 Jan", "FEE", "1.00"]]))]
    );
}

#[gtest]
fn json_file_provider_reads_saved_output() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(TABULA_OUTPUT.as_bytes())?;
    let provider = TabulaJsonFileProvider::new(file.path().to_path_buf());

    let grids = provider.extract_grids(&ExtractionRequest::default_for_test())?;

    expect_that!(grids.len(), eq(2));
    Ok(())
}

#[gtest]
fn json_file_provider_reports_missing_file() {
    let provider = TabulaJsonFileProvider::new("does-not-exist.json".into());

    expect_that!(
        provider.extract_grids(&ExtractionRequest::default_for_test()),
        err(error_chain_contains("opening Tabula output"))
    );
}

#[gtest]
fn json_file_provider_rejects_invalid_page() {
    let provider = TabulaJsonFileProvider::new("unused.json".into());
    let request = ExtractionRequest {
        pages: vec![-1],
        ..ExtractionRequest::default_for_test()
    };

    expect_that!(
        provider.extract_grids(&request),
        err(anyhow_downcasts_to::<ProviderError, _>(eq(
            ProviderError::InvalidPage { page: -1 }
        )))
    );
}
