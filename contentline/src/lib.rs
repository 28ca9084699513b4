// SPDX-FileCopyrightText: 2026 The contentline developers
//
// SPDX-License-Identifier: Apache-2.0

//! Codec for the content line grammar of RFC 5545.
//!
//! A calendar stream is a sequence of *content lines* of the shape
//! `NAME;PARAM=VALUE;...:VALUE`, folded into physical lines of at most 75
//! octets for transport. This crate implements exactly that layer and
//! nothing above it:
//!
//! - UTF-8 safe line [folding and unfolding](crate::folding),
//! - structural [parsing and serialization](crate::parser) of a single
//!   content line into a (name, parameters, value) triple,
//! - parameter-value [quoting](crate::quoting) and quote-aware splitting
//!   of comma-separated value lists,
//! - an ordered [sequence of logical lines](crate::lines) for assembling
//!   whole documents.
//!
//! Typed property values, calendar components and I/O belong to callers;
//! the codec hands them plain strings and takes plain strings back.
//!
//! # Example
//!
//! ```
//! use contentline::{ContentLine, ContentLines};
//!
//! let lines = ContentLines::from_ical("DTSTART;VALUE=DATE:20260301\r\n");
//! let line = ContentLine::parse(&lines[0], false)?;
//! assert_eq!(line.name, "DTSTART");
//! assert_eq!(line.params.get("value"), Some("DATE"));
//! assert_eq!(line.value, "20260301");
//! assert_eq!(line.to_string(), lines[0]);
//! # Ok::<(), contentline::ParseError>(())
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::single_match_else)]

pub mod folding;
pub mod lexer;
pub mod lines;
pub mod parameter;
pub mod parser;
pub mod quoting;

pub use crate::folding::{DEFAULT_LIMIT, FoldError, FoldOptions, FoldingStyle, fold, unfold};
pub use crate::lexer::{Token, lex};
pub use crate::lines::ContentLines;
pub use crate::parameter::{ParamKey, Parameters};
pub use crate::parser::{ContentLine, ParseError};
pub use crate::quoting::{join_list, quote_if_needed, split_list};
