//! Encoders for the final statement table.


use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde_derive::Serialize;
use statement::{Field, Record, StatementTable};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Comma separated values, with a header row.
    #[default]
    Csv,
    /// An array of objects keyed by column header.
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    pub fn write<W: Write>(self, table: &StatementTable, writer: W) -> Result<()> {
        match self {
            OutputFormat::Csv => write_csv(table, writer),
            OutputFormat::Json => write_json(table, writer),
        }
    }
}

pub fn write_csv<W: Write>(table: &StatementTable, writer: W) -> Result<()> {
    let mut output = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    output
        .write_record(StatementTable::header())
        .context("writing CSV header")?;
    for record in table.iter() {
        output
            .write_record(record.iter().map(|(_, text)| text))
            .context("writing CSV record")?;
    }

    output.flush().context("flushing CSV output")?;
    Ok(())
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "Descriptions")]
    description: &'a str,
    #[serde(rename = "Money out £")]
    money_out: &'a str,
    #[serde(rename = "Money in £")]
    money_in: &'a str,
    #[serde(rename = "Balance £")]
    balance: &'a str,
}

impl<'a> From<&'a Record> for JsonRecord<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            date: &record[Field::Date],
            description: &record[Field::Description],
            money_out: &record[Field::MoneyOut],
            money_in: &record[Field::MoneyIn],
            balance: &record[Field::Balance],
        }
    }
}

pub fn write_json<W: Write>(table: &StatementTable, mut writer: W) -> Result<()> {
    let records: Vec<JsonRecord> = table.iter().map(JsonRecord::from).collect();
    serde_json::to_writer_pretty(&mut writer, &records).context("writing JSON output")?;
    writer.write_all(b"\n").context("writing JSON output")?;
    writer.flush().context("flushing JSON output")?;
    Ok(())
}

/// Writes `table` to `path`, replacing any existing file only once the new
/// content is complete.
pub fn write_output_file(path: &Path, format: OutputFormat, table: &StatementTable) -> Result<()> {
    let mut file =
        AtomicWriteFile::open(path).with_context(|| format!("opening output file {path:?}"))?;
    format
        .write(table, &mut file)
        .with_context(|| format!("writing {format} output to {path:?}"))?;
    file.commit()
        .with_context(|| format!("committing output file {path:?}"))?;
    log::info!("Wrote {} records to {path:?}", table.len());
    Ok(())
}
