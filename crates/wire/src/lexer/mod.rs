// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer for single lines of MI output.
//!
//! Every character must belong to some token; there is no whitespace
//! skipping and no error recovery.

pub mod cstring;

use std::iter::Peekable;
use std::str::CharIndices;

use super::token::{is_word_char, Prefix, Span, Token, TokenKind};
use crate::error::LexError;
use crate::parse_error::ParseError;

/// MI line lexer producing a gapless token sequence.
pub struct Lexer<'a> {
    /// The line being lexed.
    input: &'a str,
    /// Peekable iterator over character indices.
    chars: Peekable<CharIndices<'a>>,
    /// Whether the previous token was an integer (prefix markers may follow).
    after_integer: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given line.
    pub fn new(input: &'a str) -> Self {
        Self { input, chars: input.char_indices().peekable(), after_integer: false }
    }

    /// Tokenize the whole line.
    ///
    /// Fails with [`ParseError::Lex`] on the first unmatched character, or
    /// [`ParseError::Decode`] when a string literal has bad escapes.
    pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::with_capacity(input.len() / 4 + 1);
        while let Some(token) = lexer.next_token(tokens.is_empty())? {
            lexer.after_integer = matches!(token.kind, TokenKind::Integer(_));
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn next_token(&mut self, at_start: bool) -> Result<Option<Token>, ParseError> {
        let Some(&(pos, ch)) = self.chars.peek() else {
            return Ok(None);
        };

        let token = match ch {
            c if c.is_ascii_digit() => self.lex_number_or_word(pos)?,
            c if is_word_char(c) => self.lex_word(pos),
            '"' => self.lex_string(pos)?,
            '{' => self.lex_bracket(pos, '}', TokenKind::TupleEmpty, TokenKind::TupleBegin),
            '[' => self.lex_bracket(pos, ']', TokenKind::ListEmpty, TokenKind::ListBegin),
            '}' => self.single(pos, TokenKind::TupleEnd),
            ']' => self.single(pos, TokenKind::ListEnd),
            ',' => self.single(pos, TokenKind::Comma),
            c => match Prefix::from_char(c) {
                // Prefix is registered before `=`, so it wins where legal.
                Some(prefix) if at_start || self.after_integer => {
                    self.single(pos, TokenKind::Prefix(prefix))
                }
                _ if c == '=' => self.single(pos, TokenKind::Equals),
                _ => return Err(Self::unexpected(pos, c).into()),
            },
        };
        Ok(Some(token))
    }

    fn unexpected(pos: usize, ch: char) -> LexError {
        let span = Span::new(pos, pos + ch.len_utf8());
        if ch.is_ascii() {
            LexError::UnexpectedChar { ch, span }
        } else {
            let mut buf = [0u8; 4];
            let byte = ch.encode_utf8(&mut buf).as_bytes().first().copied().unwrap_or_default();
            LexError::NonAscii { byte, span }
        }
    }

    fn single(&mut self, pos: usize, kind: TokenKind) -> Token {
        self.chars.next();
        Token::new(kind, Span::new(pos, pos + 1))
    }

    /// `{}` and `[]` are single tokens; otherwise just the opener.
    fn lex_bracket(&mut self, pos: usize, close: char, empty: TokenKind, begin: TokenKind) -> Token {
        self.chars.next();
        if self.chars.peek().map(|&(_, c)| c) == Some(close) {
            self.chars.next();
            Token::new(empty, Span::new(pos, pos + 2))
        } else {
            Token::new(begin, Span::new(pos, pos + 1))
        }
    }

    /// Consume a run of word characters, returning its end offset.
    fn scan_word(&mut self) -> usize {
        let mut end = self.input.len();
        while let Some(&(pos, ch)) = self.chars.peek() {
            if !is_word_char(ch) {
                end = pos;
                break;
            }
            self.chars.next();
        }
        end
    }

    fn lex_word(&mut self, start: usize) -> Token {
        let end = self.scan_word();
        let word = self.input[start..end].replace('-', "_");
        Token::new(TokenKind::Word(word), Span::new(start, end))
    }

    /// Longest match: `123` is an integer, `123abc` is a word.
    fn lex_number_or_word(&mut self, start: usize) -> Result<Token, LexError> {
        let end = self.scan_word();
        let text = &self.input[start..end];
        let span = Span::new(start, end);
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Token::new(TokenKind::Word(text.replace('-', "_")), span));
        }
        text.parse::<u64>()
            .map(|n| Token::new(TokenKind::Integer(n), span))
            .map_err(|_| LexError::IntegerOverflow { span })
    }

    /// Lex a quoted literal and decode it in place.
    fn lex_string(&mut self, start: usize) -> Result<Token, ParseError> {
        self.chars.next();
        let mut escaped = false;
        while let Some((pos, ch)) = self.chars.next() {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                let span = Span::new(start, pos + 1);
                let bytes = cstring::decode(&self.input[start + 1..pos])
                    .map_err(|source| ParseError::Decode { source, span })?;
                return Ok(Token::new(TokenKind::Str(bytes), span));
            }
        }
        Err(LexError::UnterminatedString { span: Span::new(start, self.input.len()) }.into())
    }
}

#[cfg(test)]
#[path = "../lexer_tests/mod.rs"]
mod tests;
