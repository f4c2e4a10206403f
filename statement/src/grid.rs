//! Sparse grids of extracted cells, as handed over by an extraction provider.

use crate::table::{Row, Table};

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error(
        "cell at row {row_index}, column {column_index} lies outside the \
         {row_count}x{column_count} grid"
    )]
    CellOutOfBounds {
        row_index: usize,
        column_index: usize,
        row_count: usize,
        column_count: usize,
    },
}

/// A single extracted text cell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawCell {
    pub row_index: usize,
    pub column_index: usize,
    pub text: String,
}

impl RawCell {
    pub fn new<S: Into<String>>(row_index: usize, column_index: usize, text: S) -> Self {
        Self {
            row_index,
            column_index,
            text: text.into(),
        }
    }
}

/// Cells of one detected table. Coordinates without a cell read as empty text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CellGrid {
    row_count: usize,
    column_count: usize,
    cells: Vec<RawCell>,
}

impl CellGrid {
    /// Creates a grid of the declared shape, rejecting cells outside it.
    pub fn new(
        row_count: usize,
        column_count: usize,
        cells: Vec<RawCell>,
    ) -> Result<Self, GridError> {
        if let Some(cell) = cells
            .iter()
            .find(|cell| cell.row_index >= row_count || cell.column_index >= column_count)
        {
            return Err(GridError::CellOutOfBounds {
                row_index: cell.row_index,
                column_index: cell.column_index,
                row_count,
                column_count,
            });
        }

        Ok(Self {
            row_count,
            column_count,
            cells,
        })
    }

    /// Creates a grid from row-major text. Rows may be ragged, the column count
    /// is that of the widest row.
    pub fn from_rows<R, C, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut grid = Self::default();
        for (row_index, row) in rows.into_iter().enumerate() {
            grid.row_count = row_index + 1;
            for (column_index, text) in row.into_iter().enumerate() {
                grid.column_count = grid.column_count.max(column_index + 1);
                grid.cells.push(RawCell::new(row_index, column_index, text));
            }
        }
        grid
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Converts into a dense row-major [Table] of `row_count` rows, each
    /// `column_count` wide. Later cells at a repeated coordinate win.
    pub fn to_table(&self) -> Table {
        let mut table = Table(
            (0..self.row_count)
                .map(|_| Row(vec![String::new(); self.column_count]))
                .collect(),
        );
        for cell in &self.cells {
            table[cell.row_index][cell.column_index].clone_from(&cell.text);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use testutils::anyhow_downcasts_to;

    use super::*;

    #[gtest]
    fn missing_cells_read_as_empty() {
        let grid = CellGrid::new(
            2,
            3,
            vec![RawCell::new(0, 0, "Date"), RawCell::new(1, 2, "10.00")],
        )
        .expect("cells are in bounds");

        let expected: Table = [["Date", "", ""], ["", "", "10.00"]].into();
        expect_that!(grid.to_table(), eq(&expected));
    }

    #[gtest]
    fn rejects_cells_outside_declared_shape() {
        let result = CellGrid::new(1, 2, vec![RawCell::new(0, 2, "stray")]);

        expect_that!(
            result,
            err(eq(&GridError::CellOutOfBounds {
                row_index: 0,
                column_index: 2,
                row_count: 1,
                column_count: 2,
            }))
        );
    }

    #[gtest]
    fn out_of_bounds_survives_anyhow_conversion() {
        let result = CellGrid::new(1, 1, vec![RawCell::new(3, 0, "x")]).map_err(anyhow::Error::from);

        expect_that!(
            result,
            err(anyhow_downcasts_to::<GridError, _>(eq(
                GridError::CellOutOfBounds {
                    row_index: 3,
                    column_index: 0,
                    row_count: 1,
                    column_count: 1,
                }
            )))
        );
    }

    #[gtest]
    fn from_rows_pads_ragged_rows() {
        let grid = CellGrid::from_rows(vec![vec!["a", "b", "c"], vec!["d"], vec![]]);

        expect_that!(grid.row_count(), eq(3));
        expect_that!(grid.column_count(), eq(3));
        let expected: Table = vec![vec!["a", "b", "c"], vec!["d", "", ""], vec!["", "", ""]].into();
        expect_that!(grid.to_table(), eq(&expected));
    }

    #[gtest]
    fn later_cell_wins_at_repeated_coordinate() {
        let grid = CellGrid::new(
            1,
            1,
            vec![RawCell::new(0, 0, "first"), RawCell::new(0, 0, "second")],
        )
        .expect("cells are in bounds");

        expect_that!(grid.to_table()[0][0], eq("second"));
    }
}
