// SPDX-FileCopyrightText: 2026 The contentline developers
//
// SPDX-License-Identifier: Apache-2.0

//! Structural parsing and serialization of a single content line.
//!
//! A content line is `NAME *(";" PARAM ["=" PVALUE]) ":" VALUE`. Parsing
//! here is purely structural: the value after the separating `:` is
//! handed back verbatim, and mapping it to a typed representation is the
//! caller's concern. Serialization is the `Display` impl; folding for
//! transport is a separate pass (see [`crate::folding`]), so serialized
//! lines can be round-tripped and tested unfolded.

use std::fmt::{self, Display};

use logos::Logos;
use thiserror::Error;

use crate::lexer::Token;
use crate::parameter::Parameters;

/// A parsed content line: name, parameters and raw value.
///
/// The name is stored verbatim; callers compare it case-insensitively by
/// convention. The value is the unprocessed text after the separating
/// `:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property name, spelling preserved.
    pub name: String,
    /// Parameters in source order.
    pub params: Parameters,
    /// Raw value text.
    pub value: String,
}

/// Structural errors raised by [`ContentLine::parse`].
///
/// Always fatal to the single parse call; the offending text is carried
/// so callers can produce a precise diagnostic and decide whether to
/// skip, abort or report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No `:` outside a quoted span separates the name section from the
    /// value.
    #[error("content line could not be parsed into parts (no value separator): {line:?}")]
    MissingValueSeparator {
        /// The unparsable line.
        line: String,
    },

    /// The text before the first `;` or `:` is empty.
    #[error("content line could not be parsed into parts (empty name): {line:?}")]
    EmptyName {
        /// The unparsable line.
        line: String,
    },

    /// The name is not a token of word characters and `-`.
    #[error("content line could not be parsed into parts (bad name {name:?}): {line:?}")]
    InvalidName {
        /// The unparsable line.
        line: String,
        /// The rejected name segment.
        name: String,
    },

    /// A `;`-delimited segment matches neither `PARAM` nor
    /// `PARAM=PVALUE`.
    #[error("content line could not be parsed into parts (bad parameter {segment:?}): {line:?}")]
    MalformedParameter {
        /// The unparsable line.
        line: String,
        /// The parameter segment that failed.
        segment: String,
    },
}

impl ContentLine {
    /// Build a content line with no parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Parameters::new(),
            value: value.into(),
        }
    }

    /// Build a content line from a (name, parameters, value) triple.
    ///
    /// The value may be any external value type; its `Display` encoding
    /// is used verbatim.
    #[must_use]
    pub fn from_parts(name: impl Into<String>, params: Parameters, value: impl Display) -> Self {
        Self {
            name: name.into(),
            params,
            value: value.to_string(),
        }
    }

    /// Parse one unfolded logical line.
    ///
    /// The scanner walks the token stream looking for the first `:`
    /// outside a double-quoted span; everything before it is the name
    /// and `;`-delimited parameters, everything after it is the raw
    /// value. A parameter without `=` (or with an empty right-hand side)
    /// maps to the empty string. A quoted parameter value is stored
    /// without its quotes, case untouched.
    ///
    /// With `strict` set, unquoted parameter values are upper-cased:
    /// the grammar treats unquoted tokens as case-insensitive, so the
    /// canonical spelling is as valid as the source one. Pass `false`
    /// to keep the source spelling, e.g. for byte-faithful round trips.
    ///
    /// ```
    /// use contentline::ContentLine;
    ///
    /// let line = ContentLine::parse("dtstart;value=datetime:20050101T120000", false)?;
    /// assert_eq!(line.name, "dtstart");
    /// assert_eq!(line.params.get("VALUE"), Some("datetime"));
    /// assert_eq!(line.value, "20050101T120000");
    /// # Ok::<(), contentline::ParseError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// A [`ParseError`] describing the structural defect; see the
    /// variant docs.
    #[expect(clippy::indexing_slicing)] // slice bounds come from token spans
    pub fn parse(line: &str, strict: bool) -> Result<Self, ParseError> {
        let mut lexer = Token::lexer(line);
        let mut semis = Vec::new();
        let mut colon = None;
        while let Some(token) = lexer.next() {
            match token {
                Ok(Token::Colon) => {
                    colon = Some(lexer.span().start);
                    break;
                }
                Ok(Token::Semi) => semis.push(lexer.span().start),
                Ok(_) => {}
                // the only unmatchable input is an unterminated quote
                // (or a stray line break), which swallows any later `:`
                Err(()) => {
                    return Err(ParseError::MissingValueSeparator {
                        line: line.to_owned(),
                    });
                }
            }
        }
        let Some(colon) = colon else {
            return Err(ParseError::MissingValueSeparator {
                line: line.to_owned(),
            });
        };

        let name = &line[..semis.first().copied().unwrap_or(colon)];
        if name.is_empty() {
            return Err(ParseError::EmptyName {
                line: line.to_owned(),
            });
        }
        if !is_token(name) {
            return Err(ParseError::InvalidName {
                line: line.to_owned(),
                name: name.to_owned(),
            });
        }

        let mut params = Parameters::new();
        let mut bounds = semis.iter().copied().peekable();
        while let Some(start) = bounds.next() {
            let end = bounds.peek().copied().unwrap_or(colon);
            let segment = &line[start + 1..end];
            let (key, value) =
                parse_parameter(segment, strict).ok_or_else(|| ParseError::MalformedParameter {
                    line: line.to_owned(),
                    segment: segment.to_owned(),
                })?;
            params.insert(key, value);
        }

        let parsed = Self {
            name: name.to_owned(),
            params,
            value: line[colon + 1..].to_owned(),
        };
        tracing::trace!(name = %parsed.name, params = parsed.params.len(), "parsed content line");
        Ok(parsed)
    }

    /// Decompose into the (name, parameters, value) triple.
    #[must_use]
    pub fn into_parts(self) -> (String, Parameters, String) {
        (self.name, self.params, self.value)
    }
}

impl Display for ContentLine {
    /// The serialized logical line, unfolded.
    ///
    /// Parameters are emitted sorted by canonical name with values
    /// quoted as needed; the value is appended after `:` with no
    /// processing of its own.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.params.is_empty() {
            write!(f, ";{}", self.params)?;
        }
        write!(f, ":{}", self.value)
    }
}

/// Whether `s` is a name token: word characters and `-` only.
fn is_token(s: &str) -> bool {
    s.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Match one `;`-delimited segment as `PARAM` or `PARAM=PVALUE`.
#[expect(clippy::indexing_slicing)] // quote trimming is length-checked
fn parse_parameter(segment: &str, strict: bool) -> Option<(&str, String)> {
    let (key, value) = match segment.split_once('=') {
        Some((key, value)) => (key, value),
        None => (segment, ""),
    };
    if key.is_empty() || !is_token(key) {
        return None;
    }
    let value = if value.len() >= 2
        && value.starts_with('"')
        && value.ends_with('"')
        && !value[1..value.len() - 1].contains('"')
    {
        // quoted values keep their case even in strict mode
        value[1..value.len() - 1].to_owned()
    } else if strict {
        value.to_uppercase()
    } else {
        value.to_owned()
    };
    Some((key, value))
}
