//! Preprocessor directives.
//!
//! Directives are recorded on the module tree, never evaluated. `#define` is
//! line-terminated, so its optional value is only taken from the same line.

use idl_ir::{Directive, TokenKind};
use tracing::debug;

use crate::{ErrorContext, ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Entered on `#`.
    pub(crate) fn parse_directive(&mut self) -> Result<(), ParseError> {
        self.cursor.advance();
        let token = self.cursor.current();
        if token.kind != TokenKind::Identifier {
            return Err(ParseError::expected(
                token,
                TokenKind::Identifier,
                ErrorContext::Directive,
            ));
        }

        let (word, span) = (token.text.clone(), token.span);

        let directive = match word.as_str() {
            "define" => {
                self.cursor.advance();
                self.parse_define()?
            }
            "include" => {
                self.cursor.advance();
                self.parse_include()?
            }
            name => {
                return Err(ParseError::new(
                    ParseErrorKind::UnknownDirective {
                        name: name.to_owned(),
                    },
                    span,
                ));
            }
        };

        debug!(?directive, "directive");
        self.tree.push_directive(directive);
        Ok(())
    }

    /// `NAME [VALUE]` up to the end of the line.
    fn parse_define(&mut self) -> Result<Directive, ParseError> {
        let name = self.cursor.expect_ident_raw(ErrorContext::Directive)?;
        let value = if self.cursor.check(TokenKind::Identifier) {
            Some(self.cursor.expect_ident_raw(ErrorContext::Directive)?)
        } else {
            None
        };
        Ok(Directive::Define { name, value })
    }

    /// `"path"`
    fn parse_include(&mut self) -> Result<Directive, ParseError> {
        let token = self.cursor.current();
        if token.kind != TokenKind::StringLiteral {
            return Err(ParseError::expected(
                token,
                TokenKind::StringLiteral,
                ErrorContext::Directive,
            ));
        }
        let path = token.text.clone();
        self.cursor.advance();
        Ok(Directive::Include { path })
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
