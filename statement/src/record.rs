//! Canonical statement records, addressed by [Field] rather than position.

use std::ops::{Deref, DerefMut, Index, IndexMut};

use strum::{EnumCount, IntoEnumIterator};

use crate::text::is_blank;

/// Fields of the canonical statement schema, in output order.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    strum_macros::Display,
    strum_macros::EnumCount,
    strum_macros::EnumIter,
)]
pub enum Field {
    #[strum(to_string = "Date")]
    Date,
    #[strum(to_string = "Descriptions")]
    Description,
    #[strum(to_string = "Money out £")]
    MoneyOut,
    #[strum(to_string = "Money in £")]
    MoneyIn,
    #[strum(to_string = "Balance £")]
    Balance,
}

impl Field {
    /// Amount-carrying fields.
    pub const AMOUNTS: [Field; 3] = [Field::MoneyOut, Field::MoneyIn, Field::Balance];

    fn position(self) -> usize {
        self as usize
    }

    /// Header label used by output encoders.
    pub fn label(self) -> String {
        self.to_string()
    }
}

/// One transaction line of a statement.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Record([String; Field::COUNT]);

impl Record {
    pub fn new<S: Into<String>>(
        date: S,
        description: S,
        money_out: S,
        money_in: S,
        balance: S,
    ) -> Self {
        Self([
            date.into(),
            description.into(),
            money_out.into(),
            money_in.into(),
            balance.into(),
        ])
    }

    /// Returns true if every one of `fields` is empty or whitespace.
    pub fn all_blank(&self, fields: &[Field]) -> bool {
        fields.iter().all(|field| is_blank(&self[*field]))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::iter().map(|field| (field, self[field].as_str()))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Field, &mut String)> {
        Field::iter().zip(self.0.iter_mut())
    }
}

impl Index<Field> for Record {
    type Output = String;

    fn index(&self, field: Field) -> &Self::Output {
        &self.0[field.position()]
    }
}

impl IndexMut<Field> for Record {
    fn index_mut(&mut self, field: Field) -> &mut Self::Output {
        &mut self.0[field.position()]
    }
}

impl<S: Into<String>> From<[S; Field::COUNT]> for Record {
    fn from(value: [S; Field::COUNT]) -> Self {
        Self(value.map(Into::into))
    }
}

/// Records sharing the canonical schema.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StatementTable(pub Vec<Record>);

impl StatementTable {
    /// The canonical header labels.
    pub fn header() -> Vec<String> {
        Field::iter().map(Field::label).collect()
    }

    /// Concatenates the given tables into a single `StatementTable`.
    pub fn concat(tables: Vec<StatementTable>) -> Self {
        Self(tables.into_iter().flat_map(|table| table.0).collect())
    }
}

impl Deref for StatementTable {
    type Target = Vec<Record>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for StatementTable {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<C, R> From<C> for StatementTable
where
    C: IntoIterator<Item = R>,
    R: Into<Record>,
{
    fn from(value: C) -> Self {
        Self(value.into_iter().map(Into::into).collect())
    }
}
