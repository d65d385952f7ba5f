// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive-descent parser turning one line of MI output into a [`Record`].

use super::class::{AsyncClass, ResultClass};
use super::error::{ClassError, GrammarError, LexError};
use super::lexer::Lexer;
use super::parse_error::ParseError;
use super::record::{AsyncKind, Mapping, Record, StreamKind, Value, PROMPT};
use super::token::{Prefix, Span, Token, TokenKind};

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    line_len: usize,
}

impl Parser {
    /// Parse one line (without its line terminator) into a record.
    pub fn parse(line: &str) -> Result<Record, ParseError> {
        if line == PROMPT {
            return Ok(Record::Prompt);
        }
        let tokens = Lexer::tokenize(line)?;
        let mut parser = Parser { tokens, pos: 0, line_len: line.len() };
        parser.parse_record()
    }

    /// Parse a raw line as read from the debugger's stdout.
    pub fn parse_bytes(line: &[u8]) -> Result<Record, ParseError> {
        match std::str::from_utf8(line) {
            Ok(text) => Self::parse(text),
            Err(e) => {
                let pos = e.valid_up_to();
                let byte = line.get(pos).copied().unwrap_or_default();
                Err(LexError::NonAscii { byte, span: Span::new(pos, pos + 1) }.into())
            }
        }
    }

    /// Grammar: integer? prefix (string | class (',' result)*)
    fn parse_record(&mut self) -> Result<Record, ParseError> {
        let token = match self.peek_kind() {
            Some(&TokenKind::Integer(n)) => {
                let span = self.tokens[self.pos].span;
                self.pos += 1;
                Some((n, span))
            }
            _ => None,
        };

        let prefix = match self.peek_kind() {
            Some(&TokenKind::Prefix(p)) => {
                self.pos += 1;
                p
            }
            _ => return Err(self.unexpected_token("record prefix").into()),
        };

        let record = match prefix {
            Prefix::Console => self.parse_stream(StreamKind::Console, token)?,
            Prefix::Target => self.parse_stream(StreamKind::Target, token)?,
            Prefix::Log => self.parse_stream(StreamKind::Log, token)?,
            Prefix::Result => {
                let (name, span) = self.expect_word("result class")?;
                let class = ResultClass::from_parsed(&name)
                    .ok_or(ClassError { kind: "result", name, span })?;
                let fields = self.parse_fields()?;
                Record::Result { token: token.map(|(n, _)| n), class, fields }
            }
            Prefix::Exec => self.parse_async(AsyncKind::Exec, token)?,
            Prefix::Status => self.parse_async(AsyncKind::Status, token)?,
            Prefix::Notify => self.parse_async(AsyncKind::Notify, token)?,
        };

        if let Some(extra) = self.peek() {
            return Err(GrammarError::UnexpectedToken {
                found: extra.kind.to_string(),
                expected: "',' or end of line",
                span: extra.span,
            }
            .into());
        }
        Ok(record)
    }

    fn parse_stream(
        &mut self,
        kind: StreamKind,
        token: Option<(u64, Span)>,
    ) -> Result<Record, ParseError> {
        if let Some((_, span)) = token {
            return Err(GrammarError::TokenOnStream { span }.into());
        }
        let payload = match self.peek_kind() {
            Some(TokenKind::Str(payload)) => payload.clone(),
            _ => return Err(self.unexpected_token("string").into()),
        };
        self.pos += 1;
        Ok(Record::Stream { kind, payload })
    }

    fn parse_async(
        &mut self,
        kind: AsyncKind,
        token: Option<(u64, Span)>,
    ) -> Result<Record, ParseError> {
        let (name, span) = self.expect_word("async class")?;
        let class = AsyncClass::from_name(&name).ok_or(ClassError { kind: "async", name, span })?;
        let fields = self.parse_fields()?;
        Ok(Record::Async { kind, token: token.map(|(n, _)| n), class, fields })
    }

    /// Grammar: (',' result)*
    fn parse_fields(&mut self) -> Result<Mapping, ParseError> {
        let mut fields = Mapping::new();
        while matches!(self.peek_kind(), Some(TokenKind::Comma)) {
            self.pos += 1;
            self.parse_result_into(&mut fields)?;
        }
        Ok(fields)
    }

    /// Grammar: word '=' value, inserted into `into`; duplicates are rejected.
    fn parse_result_into(&mut self, into: &mut Mapping) -> Result<(), ParseError> {
        let (name, span) = self.expect_word("field name")?;
        self.expect(&TokenKind::Equals, "'='")?;
        let value = self.parse_value(false)?;
        if into.contains_key(&name) {
            return Err(GrammarError::DuplicateField { name, span }.into());
        }
        into.insert(name, value);
        Ok(())
    }

    /// Grammar: string | '{}' | '{' result (',' result)* '}' | '[]' | '[' value (',' value)* ']'
    ///
    /// List elements (`in_list`) may also be written `name=value`; the name
    /// is dropped.
    fn parse_value(&mut self, in_list: bool) -> Result<Value, ParseError> {
        if in_list && matches!(self.peek_kind(), Some(TokenKind::Word(_))) {
            self.pos += 1;
            self.expect(&TokenKind::Equals, "'='")?;
            return self.parse_value(false);
        }

        let value = match self.peek_kind() {
            Some(TokenKind::Str(bytes)) => Value::Bytes(bytes.clone()),
            Some(TokenKind::TupleEmpty) => Value::Mapping(Mapping::new()),
            Some(TokenKind::ListEmpty) => Value::Sequence(Vec::new()),
            Some(TokenKind::TupleBegin) => {
                self.pos += 1;
                return self.parse_tuple();
            }
            Some(TokenKind::ListBegin) => {
                self.pos += 1;
                return self.parse_list();
            }
            _ => return Err(self.unexpected_token("value").into()),
        };
        self.pos += 1;
        Ok(value)
    }

    fn parse_tuple(&mut self) -> Result<Value, ParseError> {
        let mut map = Mapping::new();
        loop {
            self.parse_result_into(&mut map)?;
            if !self.separator_or_close(&TokenKind::TupleEnd, "',' or '}'")? {
                return Ok(Value::Mapping(map));
            }
        }
    }

    fn parse_list(&mut self) -> Result<Value, ParseError> {
        let mut items = Vec::new();
        loop {
            items.push(self.parse_value(true)?);
            if !self.separator_or_close(&TokenKind::ListEnd, "',' or ']'")? {
                return Ok(Value::Sequence(items));
            }
        }
    }

    /// Consume `,` (returns true) or `close` (returns false).
    fn separator_or_close(
        &mut self,
        close: &TokenKind,
        expected: &'static str,
    ) -> Result<bool, GrammarError> {
        match self.peek_kind() {
            Some(TokenKind::Comma) => {
                self.pos += 1;
                Ok(true)
            }
            Some(k) if k == close => {
                self.pos += 1;
                Ok(false)
            }
            _ => Err(self.unexpected_token(expected)),
        }
    }

    fn expect_word(&mut self, expected: &'static str) -> Result<(String, Span), GrammarError> {
        match self.peek() {
            Some(Token { kind: TokenKind::Word(w), span }) => {
                let found = (w.clone(), *span);
                self.pos += 1;
                Ok(found)
            }
            _ => Err(self.unexpected_token(expected)),
        }
    }

    fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<(), GrammarError> {
        if self.peek_kind() == Some(kind) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.unexpected_token(expected))
        }
    }

    // Helper methods

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    /// Error for the token at the cursor, or end of line.
    fn unexpected_token(&self, expected: &'static str) -> GrammarError {
        match self.peek() {
            Some(token) => GrammarError::UnexpectedToken {
                found: token.kind.to_string(),
                expected,
                span: token.span,
            },
            None => GrammarError::UnexpectedEnd { expected, span: Span::empty(self.line_len) },
        }
    }
}

#[cfg(test)]
#[path = "parser_tests/mod.rs"]
mod tests;
