//! Folds wrapped continuation rows back into the transaction they belong to.

use crate::{
    record::{Field, Record, StatementTable},
    text::{append_text, is_blank},
};

/// Which fields of a continuation row are appended to its anchor row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MergeScope {
    /// Only the description.
    Description,
    /// Every non-empty field, each onto the same field of the anchor.
    AllFields,
}

/// Identifies continuation rows and how they fold into their anchor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ContinuationRule {
    /// A row is a continuation when all of these fields are blank.
    pub key: &'static [Field],
    pub scope: MergeScope,
}

impl ContinuationRule {
    pub fn is_continuation(&self, record: &Record) -> bool {
        record.all_blank(self.key)
    }
}

/// Merges continuation rows into the nearest preceding non-continuation row,
/// top to bottom, and removes them. Continuation rows seen before any anchor
/// row are kept unmerged.
pub fn merge_continuations(rule: &ContinuationRule, table: StatementTable) -> StatementTable {
    let mut out = StatementTable(Vec::with_capacity(table.len()));
    let mut anchor: Option<usize> = None;
    let mut merged = 0usize;

    for record in table.0 {
        if !rule.is_continuation(&record) {
            anchor = Some(out.len());
            out.push(record);
            continue;
        }

        match anchor {
            Some(index) => {
                fold_into(rule.scope, &mut out[index], &record);
                merged += 1;
            }
            None => out.push(record),
        }
    }

    log::debug!("Merged {merged} continuation rows");
    out
}

fn fold_into(scope: MergeScope, anchor: &mut Record, continuation: &Record) {
    match scope {
        MergeScope::Description => append_text(
            &mut anchor[Field::Description],
            &continuation[Field::Description],
        ),
        MergeScope::AllFields => {
            for (field, text) in continuation.iter() {
                append_text(&mut anchor[field], text);
            }
        }
    }
}

/// Fills blank dates with the nearest preceding non-blank date. Leading rows
/// without any preceding date stay blank.
pub fn forward_fill_dates(table: &mut StatementTable) {
    let mut last_date: Option<String> = None;
    for record in table.iter_mut() {
        let date = &mut record[Field::Date];
        if is_blank(date) {
            if let Some(last_date) = &last_date {
                date.clone_from(last_date);
            }
        } else {
            last_date = Some(date.clone());
        }
    }
}
