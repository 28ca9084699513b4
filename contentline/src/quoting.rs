// SPDX-FileCopyrightText: 2026 The contentline developers
//
// SPDX-License-Identifier: Apache-2.0

//! Double-quoting of parameter values and quote-aware value lists.

use std::borrow::Cow;

/// Wrap `value` in double quotes when the grammar requires it.
///
/// A parameter value holding `,`, `;`, `:` or whitespace must be quoted
/// (RFC 5545 Section 3.2); any other value is returned borrowed and
/// unchanged. A value that itself contains `"` is outside the grammar:
/// no escape exists and none is applied.
#[must_use]
pub fn quote_if_needed(value: &str) -> Cow<'_, str> {
    if value.chars().any(needs_quoting) {
        Cow::Owned(format!("\"{value}\""))
    } else {
        Cow::Borrowed(value)
    }
}

fn needs_quoting(c: char) -> bool {
    matches!(c, ',' | ';' | ':') || c.is_whitespace()
}

/// Split a comma-separated value list, leaving quoted spans intact.
///
/// Each `"` toggles the in-quotes state; commas inside a quoted span do
/// not split. Quote characters are preserved verbatim in the output
/// tokens. The empty string splits to one empty token, not to nothing.
///
/// ```
/// use contentline::split_list;
///
/// let items = split_list(r#"Max,Moller,"Rasmussen, Max""#);
/// assert_eq!(items, ["Max", "Moller", r#""Rasmussen, Max""#]);
/// ```
#[must_use]
#[expect(clippy::indexing_slicing)] // ranges come from char_indices
pub fn split_list(s: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    for (i, c) in s.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                items.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&s[start..]);
    items
}

/// Join value-list items with commas, quoting any item that needs it.
///
/// ```
/// use contentline::join_list;
///
/// let joined = join_list(["Max", "Moller", "Rasmussen, Max"]);
/// assert_eq!(joined, r#"Max,Moller,"Rasmussen, Max""#);
/// ```
#[must_use = "joining allocates the serialized list"]
pub fn join_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&quote_if_needed(item.as_ref()));
    }
    out
}
