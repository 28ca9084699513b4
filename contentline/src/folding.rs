// SPDX-FileCopyrightText: 2026 The contentline developers
//
// SPDX-License-Identifier: Apache-2.0

//! Width-bounded folding of logical lines and its inverse.
//!
//! RFC 5545 Section 3.1 limits a physical line to 75 octets of content
//! and continues overlong lines on a following line prefixed with one
//! space or tab. Folding counts octets but never splits inside a
//! multi-octet UTF-8 sequence.

use thiserror::Error;

/// Default maximum octets of content per physical line (RFC 5545).
pub const DEFAULT_LIMIT: usize = 75;

/// Smallest workable limit: one continuation octet plus one maximal
/// 4-octet UTF-8 scalar.
const MIN_LIMIT: usize = 5;

/// Options for [`fold`].
///
/// Fold width and style travel with the call; there is no process-wide
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldOptions {
    /// Maximum line length in octets before folding.
    ///
    /// Default: [`DEFAULT_LIMIT`] for RFC 5545 compliance.
    pub limit: usize,

    /// Continuation whitespace after CRLF.
    ///
    /// Default: [`FoldingStyle::Space`].
    pub style: FoldingStyle,
}

impl Default for FoldOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            style: FoldingStyle::default(),
        }
    }
}

impl FoldOptions {
    /// Set the fold limit.
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the folding style.
    #[must_use]
    pub const fn style(mut self, style: FoldingStyle) -> Self {
        self.style = style;
        self
    }
}

/// Line folding style: CRLF followed by a space or a tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoldingStyle {
    /// CRLF + SPACE (RFC 5545 default)
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldingStyle {
    /// The terminator-plus-continuation sequence for this style.
    const fn separator(self) -> &'static str {
        match self {
            Self::Space => "\r\n ",
            Self::Tab => "\r\n\t",
        }
    }
}

/// Error raised when fold options cannot make progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FoldError {
    /// The limit cannot hold one continuation octet plus one encoded
    /// scalar value.
    #[error("fold limit {0} cannot fit a continuation prefix and one UTF-8 scalar")]
    LimitTooSmall(usize),
}

/// Fold a logical line into CRLF-joined physical lines.
///
/// A fold is emitted before the character whose addition would reach
/// `limit` octets on the current physical line, so content never lands
/// on a line already holding `limit - 1` octets and a continuation line
/// never exceeds `limit` octets including its whitespace prefix.
/// Iteration is per scalar value, which makes splitting a multi-octet
/// UTF-8 sequence impossible.
///
/// Embedded literal newlines are data: each one (LF, CRLF or lone CR)
/// is rewritten to the terminator plus one whitespace octet before
/// width folding proceeds. After unfolding, such a data continuation is
/// indistinguishable from a width fold; that loss is part of the wire
/// format, not of this implementation.
///
/// ```
/// use contentline::{FoldOptions, fold};
///
/// let folded = fold("123456789 ".repeat(10).as_str(), &FoldOptions::default())?;
/// assert_eq!(
///     folded,
///     "123456789 123456789 123456789 123456789 123456789 123456789 \
///      123456789 1234\r\n 56789 123456789 123456789 "
/// );
/// # Ok::<(), contentline::FoldError>(())
/// ```
///
/// # Errors
///
/// [`FoldError::LimitTooSmall`] if `options.limit` cannot hold one
/// continuation octet plus a maximal encoded scalar. The check is
/// content-independent: ASCII-only input could in principle fold at
/// limits as low as 2, but any limit below 5 would overflow on 4-octet
/// scalars, so such limits are rejected up front.
pub fn fold(line: &str, options: &FoldOptions) -> Result<String, FoldError> {
    if options.limit < MIN_LIMIT {
        return Err(FoldError::LimitTooSmall(options.limit));
    }
    Ok(fold_unchecked(line, options))
}

/// Folding loop, shared with callers that use statically valid options.
pub(crate) fn fold_unchecked(line: &str, options: &FoldOptions) -> String {
    let sep = options.style.separator();
    let mut out = String::with_capacity(line.len() + sep.len());
    let mut width = 0usize;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            // CR in a CRLF pair is consumed with the LF that follows
            '\r' if chars.peek() == Some(&'\n') => {}
            '\r' | '\n' => {
                out.push_str(sep);
                width = 0;
            }
            _ => {
                width += c.len_utf8();
                if width >= options.limit {
                    out.push_str(sep);
                    width = c.len_utf8();
                }
                out.push(c);
            }
        }
    }
    out
}

/// Unfold transport text into logical lines.
///
/// The text is split on CRLF (bare LF is tolerated); a line beginning
/// with a space or tab is a continuation and is merged into its
/// predecessor with exactly that one octet stripped. Input ending with a
/// terminator yields a final empty element, the convention
/// [`ContentLines`](crate::lines::ContentLines) relies on when joining;
/// a missing final terminator is tolerated.
///
/// ```
/// use contentline::unfold;
///
/// assert_eq!(unfold("A short line\r\n"), ["A short line", ""]);
/// assert_eq!(unfold("A faked\r\n  long line\r\n"), ["A faked long line", ""]);
/// ```
#[must_use]
pub fn unfold(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in text.split('\n') {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        match (raw.strip_prefix([' ', '\t']), lines.last_mut()) {
            (Some(rest), Some(previous)) => previous.push_str(rest),
            // a continuation with no predecessor is kept as-is
            _ => lines.push(raw.to_owned()),
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold_default(line: &str) -> String {
        fold(line, &FoldOptions::default()).unwrap()
    }

    #[test]
    fn short_line_is_untouched() {
        assert_eq!(fold_default("foo"), "foo");
        assert_eq!(fold_default(""), "");
    }

    #[test]
    fn folds_at_74_content_octets() {
        assert_eq!(
            fold_default(
                "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
                 Vestibulum convallis imperdiet dui posuere."
            ),
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
             Vestibulum conval\r\n lis imperdiet dui posuere."
        );
    }

    #[test]
    fn folds_long_property_line() {
        let line = "123456789 ".repeat(10);
        assert_eq!(
            fold_default(&line),
            "123456789 123456789 123456789 123456789 123456789 123456789 \
             123456789 1234\r\n 56789 123456789 123456789 "
        );
    }

    #[test]
    fn narrow_limit() {
        let options = FoldOptions::default().limit(5);
        assert_eq!(fold("foobar", &options).unwrap(), "foob\r\n ar");
    }

    #[test]
    fn rejects_unworkable_limit() {
        let options = FoldOptions::default().limit(4);
        assert_eq!(fold("foobar", &options), Err(FoldError::LimitTooSmall(4)));
    }

    #[test]
    fn never_splits_a_multi_octet_scalar() {
        // 73 ASCII octets, then a 2-octet scalar that must move to the
        // continuation line in one piece.
        let line = format!("{}ë{}", "x".repeat(73), "y".repeat(10));
        let folded = fold_default(&line);
        let physical: Vec<&str> = folded.split("\r\n").collect();
        assert_eq!(physical.len(), 2);
        assert_eq!(physical[0], "x".repeat(73));
        assert!(physical[1].starts_with(" ë"));
        assert!(folded.contains('ë'));
    }

    #[test]
    fn cyrillic_counts_octets_not_chars() {
        assert_eq!(
            fold_default("DESCRIPTION:АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЬЫЪЭЮЯ"),
            "DESCRIPTION:АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЬЫЪЭ\r\n ЮЯ"
        );
    }

    #[test]
    fn exact_multiple_of_the_window_is_fine() {
        // Must not panic or emit a dangling fold.
        let folded = fold_default(&"x".repeat(148));
        for physical in folded.split("\r\n") {
            assert!(physical.len() <= DEFAULT_LIMIT);
            assert!(!physical.is_empty());
        }
    }

    #[test]
    fn embedded_newlines_become_data_continuations() {
        assert_eq!(fold_default("1234\n\n1234"), "1234\r\n \r\n 1234");
        assert_eq!(fold_default("1234\r\n1234"), "1234\r\n 1234");
    }

    #[test]
    fn tab_style_continuation() {
        let options = FoldOptions::default().limit(5).style(FoldingStyle::Tab);
        assert_eq!(fold("foobar", &options).unwrap(), "foob\r\n\tar");
    }

    #[test]
    fn unfolds_simple_lines() {
        assert_eq!(unfold("A short line\r\n"), ["A short line", ""]);
        assert_eq!(unfold("A faked\r\n  long line\r\n"), ["A faked long line", ""]);
        assert_eq!(
            unfold("A faked\r\n  long line\r\nAnd another lin\r\n\te that is folded\r\n"),
            ["A faked long line", "And another line that is folded", ""]
        );
    }

    #[test]
    fn unfold_tolerates_missing_terminator_and_bare_lf() {
        assert_eq!(unfold("no terminator"), ["no terminator"]);
        assert_eq!(unfold("one\ntwo\n"), ["one", "two", ""]);
    }

    #[test]
    fn unfold_reverses_fold() {
        let line = "123456789 ".repeat(10);
        let folded = fold_default(&line);
        assert_eq!(unfold(&folded), [line.clone()]);
        assert_eq!(unfold(&format!("{folded}\r\n")), [line, String::new()]);
    }
}
