//! Positional tables, as extracted before columns carry any meaning.

use std::{
    cmp::min,
    ops::{Deref, DerefMut, Range},
};

use crate::text::clean_text;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Table(pub Vec<Row>);

impl Table {
    /// Clean leading, trailing, and redundant sequences of whitespace within
    /// the `Table`, in-place.
    pub fn clean(&mut self) {
        for row in self.iter_mut() {
            for cell in row.iter_mut() {
                clean_text(cell);
            }
        }
    }

    /// Joins the cells in the columns `from..to` of each row into a single
    /// cell at `from`. Empty cells are skipped rather than delimited. Rows that
    /// do not reach `from` are left as-is.
    pub fn join_columns(&mut self, from: Option<usize>, to: Option<usize>, delim: &str) {
        // `joiner`'s allocation is reused to join cells.
        let mut joiner: Vec<String> = Vec::new();

        for row in self.iter_mut() {
            let Some(rng) = intersect_range(row.len(), from, to) else {
                continue;
            };
            joiner.extend(
                row.splice(rng.clone(), [String::new()])
                    .filter(|cell| !cell.is_empty()),
            );
            row[rng.start] = joiner.join(delim);
            joiner.clear();
        }
    }
}

impl Deref for Table {
    type Target = Vec<Row>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Table {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<C, R> From<C> for Table
where
    C: IntoIterator<Item = R>,
    R: Into<Row>,
{
    fn from(value: C) -> Self {
        Table(value.into_iter().map(Into::into).collect())
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Row(pub Vec<String>);

impl Deref for Row {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Row {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<C, S> From<C> for Row
where
    C: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from(value: C) -> Self {
        Row(value.into_iter().map(Into::into).collect())
    }
}

/// Clamps the optional `from..to` bounds to `0..len`, returning `None` when
/// the result is empty.
pub fn intersect_range(len: usize, from: Option<usize>, to: Option<usize>) -> Option<Range<usize>> {
    let from = min(len, from.unwrap_or(0));
    let to = min(len, to.unwrap_or(len));

    if from < to { Some(from..to) } else { None }
}
