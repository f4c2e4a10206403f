use anyhow::anyhow;
use googletest::prelude::*;
use mockall::{mock, predicate};
use statement::{StatementTable, config::AssemblyConfig, grid::CellGrid, variant::PreprocessVariant};
use testutils::{DefaultForTest, error_chain_contains};

use crate::{
    config::RunConfig,
    process::{ProcessOutcome, process_document, process_grids},
    provider::{ExtractionRequest, GridProvider},
};

mock! {
    pub Provider {}

    impl GridProvider for Provider {
        fn extract_grids(&self, request: &ExtractionRequest) -> anyhow::Result<Vec<CellGrid>>;
    }
}

const HEADER: [&str; 5] = ["Date", "Description", "Money out", "Money in", "Balance"];

fn grid(rows: &[[&str; 5]]) -> CellGrid {
    CellGrid::from_rows(std::iter::once(HEADER).chain(rows.iter().copied()))
}

fn expected(rows: &[[&str; 5]]) -> StatementTable {
    rows.iter().copied().into()
}

#[gtest]
#[test_log::test]
fn concatenates_tables_and_excludes_misshapen_grids() -> anyhow::Result<()> {
    let mut provider = MockProvider::new();

    // GIVEN: a provider returning two statement pages with a narrow summary
    // table between them.
    let request = ExtractionRequest {
        pages: vec![1, 2],
        ..ExtractionRequest::default_for_test()
    };
    provider
        .expect_extract_grids()
        .with(predicate::eq(request.clone()))
        .times(1)
        .returning(|_| {
            Ok(vec![
                grid(&[["1 Jan", "CARD", "5.00", "", "95.00"]]),
                CellGrid::from_rows([["Summary", "Total"], ["Out", "5.00"]]),
                grid(&[
                    ["", "Balance brought forward", "", "", "95.00"],
                    ["2 Jan", "SALARY", "", "100.00", "195.00"],
                ]),
            ])
        });

    // WHEN: the document is processed without preprocessing.
    let outcome = process_document(&provider, &request, &RunConfig::default())?;

    // THEN: records from both pages are kept in order, minus boilerplate.
    expect_that!(
        outcome,
        eq(&ProcessOutcome {
            table: expected(&[
                ["1 Jan", "CARD", "5.00", "", "95.00"],
                ["2 Jan", "SALARY", "", "100.00", "195.00"],
            ]),
            tables_found: 3,
            tables_excluded: 1,
        })
    );
    Ok(())
}

#[gtest]
#[test_log::test]
fn applies_configured_variant_across_page_boundary() -> anyhow::Result<()> {
    let mut provider = MockProvider::new();

    // GIVEN: a transaction whose description wraps onto the next page.
    provider.expect_extract_grids().returning(|_| {
        Ok(vec![
            grid(&[["3 Jan", "DIRECT DEBIT", "20.00", "", "75.00"]]),
            grid(&[["", "ENERGY CO", "", "", ""]]),
        ])
    });
    let config = RunConfig {
        variant: PreprocessVariant::MergeOnDateAbsence,
        ..Default::default()
    };

    // WHEN:
    let outcome = process_document(&provider, &ExtractionRequest::default_for_test(), &config)?;

    // THEN: the continuation is merged into the previous page's record.
    expect_that!(
        outcome.table,
        eq(&expected(&[["3 Jan", "DIRECT DEBIT ENERGY CO", "20.00", "", "75.00"]]))
    );
    Ok(())
}

#[gtest]
#[test_log::test]
fn provider_failure_is_fatal() {
    let mut provider = MockProvider::new();

    // GIVEN: a provider that cannot read the document.
    provider
        .expect_extract_grids()
        .returning(|_| Err(anyhow!("document analysis service unavailable")));

    // WHEN:
    let result = process_document(
        &provider,
        &ExtractionRequest::default_for_test(),
        &RunConfig::default(),
    );

    // THEN: the error carries the provider's cause and the document path.
    expect_that!(
        result,
        err(all![
            error_chain_contains("service unavailable"),
            error_chain_contains("statement.pdf"),
        ])
    );
}

#[gtest]
#[test_log::test]
fn no_grids_gives_empty_table() -> anyhow::Result<()> {
    let mut provider = MockProvider::new();
    provider.expect_extract_grids().returning(|_| Ok(vec![]));

    let outcome = process_document(
        &provider,
        &ExtractionRequest::default_for_test(),
        &RunConfig::default(),
    )?;

    expect_that!(outcome, eq(&ProcessOutcome::default()));
    Ok(())
}

#[gtest]
#[test_log::test]
fn every_grid_excluded_gives_empty_table() {
    let grids = vec![
        CellGrid::from_rows([["a", "b", "c"]]),
        CellGrid::new(0, 6, vec![]).expect("empty grid is valid"),
    ];

    let outcome = process_grids(&grids, &AssemblyConfig::default(), PreprocessVariant::Generic);

    expect_that!(
        outcome,
        eq(&ProcessOutcome {
            table: StatementTable::default(),
            tables_found: 2,
            tables_excluded: 2,
        })
    );
}

#[gtest]
fn date_extraction_end_to_end() {
    let grids = vec![grid(&[
        ["5 March 5 March refund payment", "", "", "5.00", "105.00"],
        ["", "", "", "", "CR"],
        ["6 March", "\u{2022} CARD  PAYMENT", "1 2.00", "", "93.00"],
    ])];

    let outcome = process_grids(
        &grids,
        &AssemblyConfig::default(),
        PreprocessVariant::DateExtraction,
    );

    expect_that!(
        outcome.table,
        eq(&expected(&[
            ["5 March", "March refund payment", "", "5.00", "105.00 CR"],
            ["6 March", "CARD PAYMENT", "12.00", "", "93.00"],
        ]))
    );
}
