//! Separates a leading date token from a combined date and description cell.
//!
//! The date token grammar is anchored at the start of the cell:
//!
//! ```text
//! <1-2 digits> <letters> [<digits>]
//! ```
//!
//! where the optional trailing digits must end the cell or be followed by
//! whitespace. The whole token is consumed from the cell, but the trailing
//! digits are only kept as part of the date when they look like a year (two
//! or four digits).
//!
//! Trailing digits of any other length are consumed and kept in neither
//! field, so `"12 Jan 123 HIGH ST STORE"` loses the `123`. Consuming them is
//! what lets `"5 March 5 March refund payment"` split as `"5 March"` and
//! `"March refund payment"`.

use lazy_regex::regex_captures;

use crate::record::{Field, Record, StatementTable};

/// A date token found at the start of a cell.
#[derive(Debug, Eq, PartialEq)]
pub struct LeadingDate<'a> {
    pub date: String,
    /// The text after the token, trimmed.
    pub remainder: &'a str,
}

/// Finds a date token at the start of `text`.
pub fn find_leading_date(text: &str) -> Option<LeadingDate<'_>> {
    let (token, day_month, trailing) =
        regex_captures!(r"^\s*(\d{1,2}\s+[A-Za-z]+)(?:\s+(\d+)(?:\s|$))?", text)?;

    let day_month = day_month.split_whitespace().collect::<Vec<_>>().join(" ");
    let date = match trailing.len() {
        2 | 4 => format!("{day_month} {trailing}"),
        _ => day_month,
    };

    Some(LeadingDate {
        date,
        remainder: text[token.len()..].trim(),
    })
}

/// Isolates the date in the record's Date field. The text following the
/// date becomes the description only when the description is blank.
/// Returns false when no date token was found, leaving the record unchanged.
pub fn split_date_description(record: &mut Record) -> bool {
    let Some(found) = find_leading_date(&record[Field::Date]) else {
        return false;
    };
    let LeadingDate { date, remainder } = found;

    if record[Field::Description].trim().is_empty() {
        record[Field::Description] = remainder.to_string();
    }
    record[Field::Date] = date;
    true
}

/// Applies [split_date_description] to every record.
pub fn split_dates(table: &mut StatementTable) {
    let mut misses = 0usize;
    for record in table.iter_mut() {
        if !record[Field::Date].trim().is_empty() && !split_date_description(record) {
            misses += 1;
        }
    }
    if misses > 0 {
        log::debug!("No leading date found in {misses} non-empty date cells");
    }
}
