// SPDX-FileCopyrightText: 2026 The contentline developers
//
// SPDX-License-Identifier: Apache-2.0

//! Ordered sequences of logical lines.

use std::io::{self, Write};
use std::ops::Index;
use std::slice;

use crate::folding::{FoldOptions, fold, fold_unchecked, unfold};

/// An ordered sequence of logical lines.
///
/// This is the assembly point between transport text and per-line
/// parsing: [`from_ical`](Self::from_ical) unfolds a whole document into
/// logical lines, and [`to_ical`](Self::to_ical) folds each line and
/// joins with CRLF. By convention a sequence that is ready for transport
/// carries a final empty element, so the joined text ends with the
/// terminator; `from_ical` produces that shape whenever the input ends
/// with one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentLines {
    lines: Vec<String>,
}

impl ContentLines {
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Unfold transport text into a sequence of logical lines.
    #[must_use]
    pub fn from_ical(text: &str) -> Self {
        let lines = unfold(text);
        tracing::debug!(lines = lines.len(), "unfolded transport text");
        Self { lines }
    }

    /// Fold every line with default options and join with CRLF.
    #[must_use]
    pub fn to_ical(&self) -> String {
        let options = FoldOptions::default();
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push_str("\r\n");
            }
            out.push_str(&fold_unchecked(line, &options));
        }
        out
    }

    /// Stream the folded representation into a writer.
    ///
    /// # Errors
    ///
    /// Propagates writer errors; unworkable fold options surface as
    /// [`io::ErrorKind::InvalidInput`].
    pub fn write_to<W: Write>(&self, writer: &mut W, options: &FoldOptions) -> io::Result<()> {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writer.write_all(b"\r\n")?;
            }
            let folded =
                fold(line, options).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
            writer.write_all(folded.as_bytes())?;
        }
        Ok(())
    }

    /// Append a logical line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Number of logical lines, the trailing empty element included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the sequence holds no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the logical lines.
    #[must_use]
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.lines.iter()
    }

    /// The logical lines as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }
}

impl From<Vec<String>> for ContentLines {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl FromIterator<String> for ContentLines {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for ContentLines {
    type Output = String;

    #[expect(clippy::indexing_slicing)]
    fn index(&self, index: usize) -> &Self::Output {
        &self.lines[index]
    }
}

impl<'a> IntoIterator for &'a ContentLines {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ContentLines {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ical_keeps_the_trailing_empty_line() {
        let lines = ContentLines::from_ical("A short line\r\n");
        assert_eq!(lines.as_slice(), ["A short line", ""]);

        let lines = ContentLines::from_ical("A faked\r\n  long line\r\nAnd another lin\r\n\te that is folded\r\n");
        assert_eq!(
            lines.as_slice(),
            ["A faked long line", "And another line that is folded", ""]
        );
    }

    #[test]
    fn to_ical_folds_and_joins() {
        let mut lines = ContentLines::new();
        lines.push("BEGIN:VEVENT");
        lines.push("123456789 ".repeat(10));
        lines.push("");
        assert_eq!(
            lines.to_ical(),
            "BEGIN:VEVENT\r\n\
             123456789 123456789 123456789 123456789 123456789 123456789 \
             123456789 1234\r\n 56789 123456789 123456789 \r\n"
        );
    }

    #[test]
    fn join_then_split_is_identity() {
        let lines = ContentLines::from(vec![
            "BEGIN:VEVENT".to_owned(),
            "SUMMARY:Short".to_owned(),
            "END:VEVENT".to_owned(),
            String::new(),
        ]);
        assert_eq!(ContentLines::from_ical(&lines.to_ical()), lines);
    }

    #[test]
    fn write_to_matches_to_ical() {
        let lines = ContentLines::from(vec!["SUMMARY:Short".to_owned(), String::new()]);
        let mut buffer = Vec::new();
        lines
            .write_to(&mut buffer, &FoldOptions::default())
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), lines.to_ical());
    }

    #[test]
    fn write_to_rejects_unworkable_options() {
        let lines = ContentLines::from(vec!["SUMMARY:Short".to_owned()]);
        let mut buffer = Vec::new();
        let err = lines
            .write_to(&mut buffer, &FoldOptions::default().limit(2))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
