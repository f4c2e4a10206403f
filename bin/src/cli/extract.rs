use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use pipeline::{
    config::{RunConfig, load_config},
    docanalysis::DocumentAnalysisFileProvider,
    input::InputDocument,
    output::{OutputFormat, write_output_file},
    process::{ProcessOutcome, process_document},
    provider::ExtractionRequest,
    tabula_wrapper::{jsonfile::TabulaJsonFileProvider, singlethreaded::TabulaStreamProvider},
};
use statement::variant::PreprocessVariant;

/// Where table cells come from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
enum ProviderKind {
    /// Run Tabula's stream extraction on the PDF.
    Tabula,
    /// Read tables previously exported by Tabula as JSON, from --provider-file.
    TabulaJson,
    /// Read a saved document analysis response, from --provider-file.
    DocumentAnalysis,
}

/// Extracts the transaction table from a bank statement PDF.
#[derive(Args, Debug)]
pub struct Command {
    /// Path to input PDF, or "-" to read it from stdin.
    input: PathBuf,

    /// Path to write the table to.
    ///
    /// Defaults to the input's file name with the format's extension, in the
    /// current directory.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Output format: csv or json.
    #[arg(long, default_value = "csv")]
    format: OutputFormat,

    #[arg(long, value_enum, default_value = "tabula")]
    provider: ProviderKind,

    /// File read by the tabula-json and document-analysis providers.
    #[arg(long)]
    provider_file: Option<PathBuf>,

    /// Path to Tabula JAR file, for the tabula provider.
    #[arg(long)]
    tabula_libpath: Option<String>,

    /// Pages to extract tables from, numbered from 1. Defaults to all pages.
    #[arg(long, value_delimiter(','))]
    pages: Vec<i32>,

    /// Row tolerance for stream extraction, overriding the configuration.
    #[arg(long)]
    row_tol: Option<f32>,

    /// Column tolerance for stream extraction, overriding the configuration.
    #[arg(long)]
    column_tol: Option<f32>,

    /// Edge tolerance for stream extraction, overriding the configuration.
    #[arg(long)]
    edge_tol: Option<f32>,

    /// Preprocessing variant, overriding the configuration. See the variants
    /// subcommand.
    #[arg(long)]
    variant: Option<PreprocessVariant>,

    /// Path to a YAML run configuration.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Command {
    /// Loads the configuration file, if any, with flags taking precedence.
    fn run_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RunConfig::default(),
        };

        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(row) = self.row_tol {
            config.tolerances.row = row;
        }
        if let Some(column) = self.column_tol {
            config.tolerances.column = column;
        }
        if let Some(edge) = self.edge_tol {
            config.tolerances.edge = edge;
        }
        log::debug!("Run configuration: {config:?}");
        Ok(config)
    }

    fn open_input(&self) -> Result<InputDocument> {
        if self.input == Path::new("-") {
            InputDocument::from_reader(std::io::stdin().lock()).context("reading PDF from stdin")
        } else {
            Ok(InputDocument::from_path(self.input.clone()))
        }
    }

    fn provider_file(&self) -> Result<PathBuf> {
        self.provider_file.clone().with_context(|| {
            format!(
                "--provider-file is required for the {:?} provider",
                self.provider
            )
        })
    }

    fn output_path(&self, input: &InputDocument) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => format!("{}.{}", input.output_stem(), self.format.extension()).into(),
        }
    }

    fn process(&self, request: &ExtractionRequest, config: &RunConfig) -> Result<ProcessOutcome> {
        match self.provider {
            ProviderKind::Tabula => {
                let libpath = self
                    .tabula_libpath
                    .as_deref()
                    .context("--tabula-libpath is required for the tabula provider")?;
                let vm = tabula::TabulaVM::new(libpath, false)
                    .with_context(|| "initialising Tabula")?;
                let env = vm.attach().with_context(|| "attaching to TabulaVM")?;
                let provider = TabulaStreamProvider::new(env);
                process_document(&provider, request, config)
            }
            ProviderKind::TabulaJson => process_document(
                &TabulaJsonFileProvider::new(self.provider_file()?),
                request,
                config,
            ),
            ProviderKind::DocumentAnalysis => process_document(
                &DocumentAnalysisFileProvider::new(self.provider_file()?),
                request,
                config,
            ),
        }
    }
}

/// Runs the subcommand.
pub fn run(cmd: &Command) -> Result<()> {
    let config = cmd.run_config()?;
    let input = cmd.open_input()?;

    let request = ExtractionRequest {
        pdf_path: input.path().to_path_buf(),
        pages: cmd.pages.clone(),
        tolerances: config.tolerances,
    };
    let outcome = cmd.process(&request, &config)?;

    let output_path = cmd.output_path(&input);
    write_output_file(&output_path, cmd.format, &outcome.table)?;

    eprintln!(
        "Found {} tables, excluded {}. Wrote {} records to {:?}.",
        outcome.tables_found,
        outcome.tables_excluded,
        outcome.table.len(),
        output_path
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use anyhow::Result;
    use clap::Parser;
    use googletest::prelude::*;
    use pipeline::provider::StreamTolerances;

    use super::*;

    #[derive(Parser)]
    struct TestArgs {
        #[command(flatten)]
        cmd: Command,
    }

    fn parse(args: &[&str]) -> Command {
        TestArgs::parse_from(std::iter::once("stmtable").chain(args.iter().copied())).cmd
    }

    #[gtest]
    fn defaults() -> Result<()> {
        let cmd = parse(&["statement.pdf"]);

        expect_that!(cmd.format, eq(OutputFormat::Csv));
        expect_that!(cmd.provider, eq(ProviderKind::Tabula));
        expect_that!(cmd.pages, is_empty());
        expect_that!(cmd.run_config()?, eq(&RunConfig::default()));
        Ok(())
    }

    #[gtest]
    fn flags_override_config_file() -> Result<()> {
        let mut config_file = tempfile::NamedTempFile::new()?;
        writeln!(config_file, "variant: hsbc2\ntolerances:\n  row: 2.0\n  edge: 10.0")?;
        let config_path = config_file.path().to_string_lossy().into_owned();

        let cmd = parse(&[
            "-",
            "--config",
            &config_path,
            "--variant",
            "barclays",
            "--edge-tol",
            "20",
            "--pages",
            "1,3",
        ]);
        let config = cmd.run_config()?;

        expect_that!(config.variant, eq(PreprocessVariant::MergeOnDateAbsence));
        expect_that!(
            config.tolerances,
            eq(StreamTolerances {
                row: 2.0,
                column: 1.0,
                edge: 20.0,
            })
        );
        expect_that!(cmd.pages, elements_are![eq(&1), eq(&3)]);
        Ok(())
    }

    #[gtest]
    fn output_path_defaults_to_input_stem() {
        let cmd = parse(&["in/jan.statement.pdf", "--format", "json"]);
        let input = InputDocument::from_path(cmd.input.clone());

        expect_that!(cmd.output_path(&input), eq(Path::new("jan.json")));
    }

    #[gtest]
    fn file_providers_need_provider_file() {
        let cmd = parse(&["statement.pdf", "--provider", "document-analysis"]);

        expect_that!(cmd.provider_file(), err(anything()));
    }

    #[gtest]
    fn tabula_provider_needs_libpath() {
        let cmd = parse(&["statement.pdf"]);

        expect_that!(
            cmd.process(&ExtractionRequest::default(), &RunConfig::default()),
            err(anything())
        );
    }

    #[gtest]
    fn extracts_from_saved_analysis() -> Result<()> {
        let tempdir = tempfile::tempdir()?;
        let analysis_path = tempdir.path().join("analysis.json");
        std::fs::write(
            &analysis_path,
            r#"{"status": "succeeded", "analyzeResult": {"tables": [{
                "rowCount": 2, "columnCount": 5, "cells": [
                    {"rowIndex": 0, "columnIndex": 3, "content": "Paid in"},
                    {"rowIndex": 1, "columnIndex": 0, "content": "1 Jan"},
                    {"rowIndex": 1, "columnIndex": 1, "content": "REFUND"},
                    {"rowIndex": 1, "columnIndex": 3, "content": "3.00"},
                    {"rowIndex": 1, "columnIndex": 4, "content": "13.00"}
                ]}]}}"#,
        )?;
        let output_path = tempdir.path().join("out.csv");

        let cmd = parse(&[
            "unused.pdf",
            "--provider",
            "document-analysis",
            "--provider-file",
            analysis_path.to_str().context("temp path is UTF-8")?,
            "--output",
            output_path.to_str().context("temp path is UTF-8")?,
        ]);
        run(&cmd)?;

        expect_that!(
            std::fs::read_to_string(&output_path)?,
            eq("Date,Descriptions,Money out £,Money in £,Balance £\r\n\
                1 Jan,REFUND,,3.00,13.00\r\n")
        );
        Ok(())
    }
}
