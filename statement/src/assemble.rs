//! Assembles a provider's cell grid into a table in the canonical statement
//! schema.

use lazy_regex::regex_is_match;
use strum::EnumCount;

use crate::{
    config::AssemblyConfig,
    grid::CellGrid,
    record::{Field, Record, StatementTable},
    table::Row,
    text::strip_noise,
};

/// Reasons a grid is excluded from the statement rather than assembled.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("{column_count} columns cannot hold a date, amounts and a balance")]
    TooFewColumns { column_count: usize },
    #[error("grid has no header row")]
    MissingHeader,
    #[error("{column_count} columns leave no description between the date and the amounts")]
    SchemaMismatch { column_count: usize },
}

/// Date, money out, money in and balance.
const MIN_COLUMNS: usize = 4;

/// Assembles `grid` into the canonical schema.
///
/// The first row is taken as the header. Columns map by position: first is
/// the date, the last three are money out, money in and balance, and any
/// columns in between are joined into the description. When the header of
/// the second-to-last column does not name incoming money, the last two
/// columns are taken to be one column split in two and are joined first.
/// A grid left without an interior column has no description and is
/// rejected.
pub fn assemble_grid(cfg: &AssemblyConfig, grid: &CellGrid) -> Result<StatementTable, ShapeError> {
    if grid.column_count() < MIN_COLUMNS {
        return Err(ShapeError::TooFewColumns {
            column_count: grid.column_count(),
        });
    }

    let mut table = grid.to_table();
    if table.is_empty() {
        return Err(ShapeError::MissingHeader);
    }

    let header = table.remove(0);
    table.retain(|row| !is_boilerplate(cfg, row));
    table.insert(0, header);

    for row in table.iter_mut() {
        for cell in row.iter_mut() {
            strip_noise(cell, &cfg.noise_substrings);
        }
    }
    table.clean();

    let column_count = table[0].len();
    let money_in_label = &table[0][column_count - 2];
    if !is_money_in_label(money_in_label) {
        log::debug!(
            "Column header {money_in_label:?} does not name money in, joining the last two columns"
        );
        table.join_columns(Some(column_count - 2), None, " ");
    }

    let column_count = table[0].len();
    if column_count < Field::COUNT {
        return Err(ShapeError::SchemaMismatch { column_count });
    }

    Ok(StatementTable(
        table.0.into_iter().skip(1).map(row_to_record).collect(),
    ))
}

fn is_boilerplate(cfg: &AssemblyConfig, row: &Row) -> bool {
    let text = row.join(" ");
    match cfg.find_marker(&text) {
        Some(marker) => {
            log::debug!("Dropping boilerplate row matching {marker:?}: {text:?}");
            true
        }
        None => false,
    }
}

fn is_money_in_label(label: &str) -> bool {
    regex_is_match!(r"(?i)\b(?:in|cr|credits?|deposits?|receipts?)\b", label)
}

fn row_to_record(mut row: Row) -> Record {
    let balance = row.pop().unwrap_or_default();
    let money_in = row.pop().unwrap_or_default();
    let money_out = row.pop().unwrap_or_default();

    let mut cells = row.0.into_iter();
    let date = cells.next().unwrap_or_default();
    let description = cells
        .filter(|cell| !cell.is_empty())
        .collect::<Vec<String>>()
        .join(" ");

    Record::new(date, description, money_out, money_in, balance)
}
