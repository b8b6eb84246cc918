//! Token cursor for navigating the token stream.
//!
//! Reads past the last token return an `Invalid` sentinel instead of
//! panicking, so every grammar routine can inspect `current()` freely and
//! leave end-of-input reporting to the `expect` family.

use idl_ir::{Span, Token, TokenKind};
use tracing::trace;

use crate::{ErrorContext, ParseError};

pub(crate) struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Returned for every read past the end, positioned after the last token.
    eof: Token,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        let end = tokens.last().map_or(0, |token| token.span.end);
        Cursor {
            tokens,
            pos: 0,
            eof: Token::invalid(end),
        }
    }

    /// Get the current token, or the sentinel at end of input.
    #[inline]
    pub(crate) fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Check if the current token is the identifier `word`.
    #[inline]
    pub(crate) fn check_word(&self, word: &str) -> bool {
        self.current().is_word(word)
    }

    /// Move to the next token that is not an end of line.
    pub(crate) fn advance(&mut self) {
        self.advance_raw();
        self.skip_newlines();
    }

    /// Move exactly one token, keeping end-of-line tokens visible.
    ///
    /// Only line-terminated constructs (`#define`) need this.
    pub(crate) fn advance_raw(&mut self) {
        if let Some(token) = self.tokens.get(self.pos) {
            trace!(pos = self.pos, token = ?token, "advance");
            self.pos += 1;
        }
    }

    pub(crate) fn skip_newlines(&mut self) {
        while self.check(TokenKind::EndLine) {
            self.advance_raw();
        }
    }

    /// Consume the current token if it is `kind`.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind` or fail with an error naming `context`.
    #[inline]
    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        context: ErrorContext,
    ) -> Result<Span, ParseError> {
        if self.check(kind) {
            let span = self.current_span();
            self.advance();
            Ok(span)
        } else {
            Err(ParseError::expected(self.current(), kind, context))
        }
    }

    /// Consume an identifier and return its text.
    pub(crate) fn expect_ident(&mut self, context: ErrorContext) -> Result<String, ParseError> {
        let text = self.ident_text(context)?;
        self.advance();
        Ok(text)
    }

    /// Like [`Cursor::expect_ident`], but stops on a following end of line.
    pub(crate) fn expect_ident_raw(
        &mut self,
        context: ErrorContext,
    ) -> Result<String, ParseError> {
        let text = self.ident_text(context)?;
        self.advance_raw();
        Ok(text)
    }

    fn ident_text(&self, context: ErrorContext) -> Result<String, ParseError> {
        let token = self.current();
        if token.kind == TokenKind::Identifier {
            Ok(token.text.clone())
        } else {
            Err(ParseError::expected(token, TokenKind::Identifier, context))
        }
    }
}
