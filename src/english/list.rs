//! English list punctuation and plurals.

use std::borrow::Cow;

/// Separator written before entry `i` of `total`: `"first, second and third"`.
///
/// No Oxford comma.
#[inline]
pub fn separator(i: usize, total: usize) -> &'static str {
    match i {
        0 => "",
        i if i + 1 < total => ", ",
        _ => " and ",
    }
}

/// Joins items as `""`, `"A"`, `"A and B"` or `"A, B and C"`.
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        out.push_str(separator(i, items.len()));
        out.push_str(item.as_ref());
    }
    out
}

/// `noun` with an `s` appended when `count` is more than one.
///
/// Every noun this crate emits pluralizes regularly.
pub fn noun(word: &str, count: usize) -> Cow<'_, str> {
    if count > 1 {
        Cow::Owned(format!("{word}s"))
    } else {
        Cow::Borrowed(word)
    }
}
