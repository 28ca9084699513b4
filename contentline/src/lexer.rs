// SPDX-FileCopyrightText: 2026 The contentline developers
//
// SPDX-License-Identifier: Apache-2.0

//! Token stream over a single unfolded content line.

use logos::Logos;

/// Tokens of the content line grammar (RFC 5545 Section 3.1).
///
/// The lexer runs over one logical line, so there is no newline token:
/// carriage returns and line feeds are excluded from every pattern and
/// surface as lexing errors if they slip through.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Logos)]
pub enum Token<'a> {
    /// A run of value characters: everything except delimiters, quotes,
    /// horizontal whitespace and line breaks.
    #[regex(r#"[^;:,=" \t\r\n]+"#)]
    Word(&'a str),

    /// Semicolon (;), introduces a parameter.
    #[token(";")]
    Semi,

    /// Colon (:), separates the name-and-parameter section from the value.
    #[token(":")]
    Colon,

    /// Equal sign (=), separates a parameter name from its value.
    #[token("=")]
    Eq,

    /// Comma (,), separates entries of a multi-valued parameter.
    #[token(",")]
    Comma,

    /// Space, significant inside unquoted parameter values.
    #[token(" ")]
    Space,

    /// Tab, treated like a space inside parameter values.
    #[token("\t")]
    Tab,

    /// A double-quoted span, quotes included.
    ///
    /// The grammar has no escape for `"` inside a quoted value, so the
    /// span simply runs to the next quote. Delimiters inside the span
    /// carry no structural meaning.
    #[regex(r#""[^"\r\n]*""#)]
    Quoted(&'a str),
}

/// Tokenize one logical line.
pub fn lex<'a>(src: &'a str) -> logos::Lexer<'a, Token<'a>> {
    Token::lexer(src)
}
