//! Named preprocessing variants, one per bank statement layout.

use serde_derive::Deserialize;

use crate::{
    datesplit,
    merge::{self, ContinuationRule, MergeScope},
    record::{Field, StatementTable},
    text::{clean_text, repair_split_numbers},
};

/// Selects the cleanup applied to an assembled statement table.
///
/// Each variant also accepts the name of the bank layout it was written for.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
    strum_macros::VariantNames,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PreprocessVariant {
    /// Passes the table through unchanged.
    #[default]
    #[serde(alias = "type1")]
    #[strum(to_string = "generic", serialize = "type1")]
    Generic,
    /// Rows without a date or any amount continue the previous row's
    /// description.
    #[serde(alias = "barclays")]
    #[strum(to_string = "merge-on-date-absence", serialize = "barclays")]
    MergeOnDateAbsence,
    /// Splits a leading date out of the date cell, then rows with neither
    /// date nor description continue every field of the previous row.
    #[serde(alias = "hsbc1")]
    #[strum(to_string = "date-extraction", serialize = "hsbc1")]
    DateExtraction,
    /// Rows with neither date nor description continue every field of the
    /// previous row.
    #[serde(alias = "hsbc2")]
    #[strum(to_string = "continuation-merge", serialize = "hsbc2")]
    ContinuationMerge,
    /// Reserved for a future layout.
    #[serde(alias = "type5")]
    #[strum(to_string = "reserved5", serialize = "type5")]
    Reserved5,
    /// Reserved for a future layout.
    #[serde(alias = "type6")]
    #[strum(to_string = "reserved6", serialize = "type6")]
    Reserved6,
}

/// The steps a variant runs, in order of application.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Steps {
    pub split_dates: bool,
    /// Continuation merging followed by date forward-fill.
    pub continuation: Option<ContinuationRule>,
    /// Whitespace collapse, and digit joining in amount fields.
    pub repair_numbers: bool,
}

const DATE_AND_AMOUNTS_KEY: &[Field] = &[Field::Date, Field::MoneyOut, Field::MoneyIn, Field::Balance];
const DATE_AND_DESCRIPTION_KEY: &[Field] = &[Field::Date, Field::Description];

impl PreprocessVariant {
    pub fn steps(self) -> Steps {
        use PreprocessVariant::*;
        match self {
            Generic | Reserved5 | Reserved6 => Steps::default(),
            MergeOnDateAbsence => Steps {
                split_dates: false,
                continuation: Some(ContinuationRule {
                    key: DATE_AND_AMOUNTS_KEY,
                    scope: MergeScope::Description,
                }),
                repair_numbers: false,
            },
            DateExtraction => Steps {
                split_dates: true,
                ..ContinuationMerge.steps()
            },
            ContinuationMerge => Steps {
                split_dates: false,
                continuation: Some(ContinuationRule {
                    key: DATE_AND_DESCRIPTION_KEY,
                    scope: MergeScope::AllFields,
                }),
                repair_numbers: true,
            },
        }
    }

    /// Runs the variant's steps over `table`.
    pub fn apply(self, mut table: StatementTable) -> StatementTable {
        let steps = self.steps();
        log::debug!("Applying preprocessing variant {self} ({steps:?})");

        if steps.split_dates {
            datesplit::split_dates(&mut table);
        }

        if let Some(rule) = &steps.continuation {
            table = merge::merge_continuations(rule, table);
            merge::forward_fill_dates(&mut table);
        }

        if steps.repair_numbers {
            repair_numbers(&mut table);
        }

        table
    }
}

fn repair_numbers(table: &mut StatementTable) {
    for record in table.iter_mut() {
        for (field, text) in record.iter_mut() {
            clean_text(text);
            if Field::AMOUNTS.contains(&field) {
                repair_split_numbers(text);
            }
        }
    }
}
