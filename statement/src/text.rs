//! Cell text normalisation.

use lazy_regex::{regex_find, regex_is_match, regex_replace_all};

/// Cleans leading, trailing, and redundant whitespace from a string, in-place.
pub fn clean_text(s: &mut String) {
    let trimmed = s.trim();
    // Skip the copy/realloc if nothing to do.
    if trimmed.len() != s.len() || regex_find!(r"\s{2,}|[\t\r\n]", trimmed).is_some() {
        let new = regex_replace_all!(r"\s+", trimmed, " ");
        *s = new.to_string();
    }
}

/// Removes every occurrence of each of `noise` from `s`, in-place.
pub fn strip_noise<S: AsRef<str>>(s: &mut String, noise: &[S]) {
    for pattern in noise {
        let pattern = pattern.as_ref();
        if !pattern.is_empty() && s.contains(pattern) {
            *s = s.replace(pattern, "");
        }
    }
}

/// Joins digits separated by a single space, e.g. `"1 234.56"` becomes
/// `"1234.56"`.
pub fn repair_split_numbers(s: &mut String) {
    // Matches cannot overlap, so "1 2 3" needs more than one pass.
    while regex_is_match!(r"\d \d", s) {
        let joined = regex_replace_all!(r"(\d) (\d)", s, "${1}${2}");
        *s = joined.to_string();
    }
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Appends the trimmed `extra` to `dst`, space separated. Blank `extra` is
/// ignored.
pub fn append_text(dst: &mut String, extra: &str) {
    let extra = extra.trim();
    if extra.is_empty() {
        return;
    }
    dst.truncate(dst.trim_end().len());
    if !dst.is_empty() {
        dst.push(' ');
    }
    dst.push_str(extra);
}
