//! Type, declarator and value parsing.

use idl_ir::{TokenKind, Type};

use crate::stack::ensure_sufficient_stack;
use crate::{ErrorContext, ParseError, Parser};

/// A declared name with its optional fixed-array size: `values[16]`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Declarator {
    /// The name, including any `A::B` qualification.
    pub name: String,
    pub quantity: Option<String>,
}

impl Declarator {
    /// The name as written, with the array size appended: `values[16]`.
    pub fn text(&self) -> String {
        match &self.quantity {
            Some(quantity) => format!("{}[{quantity}]", self.name),
            None => self.name.clone(),
        }
    }

    /// Attach the declarator to its type. The array size moves onto the type
    /// and the bare name is returned alongside it.
    pub fn bind(self, mut ty: Type) -> (String, Type) {
        if self.quantity.is_some() {
            ty.quantity = self.quantity;
        }
        (self.name, ty)
    }
}

impl Parser<'_> {
    /// Parse a type reference: `long`, `unsigned long`, `long long`,
    /// `sequence<T, N>`, `A::B`.
    ///
    /// Trailing punctuation is left for the caller.
    pub(crate) fn parse_type(&mut self, context: ErrorContext) -> Result<Type, ParseError> {
        ensure_sufficient_stack(|| self.parse_type_inner(context))
    }

    fn parse_type_inner(&mut self, context: ErrorContext) -> Result<Type, ParseError> {
        let mut name = self.cursor.expect_ident(context)?;

        let mut parameters = Vec::new();
        if self.cursor.eat(TokenKind::LessThan) {
            parameters.push(self.parse_type(ErrorContext::TemplateParameters)?);
            while self.cursor.eat(TokenKind::Comma) {
                parameters.push(self.parse_type(ErrorContext::TemplateParameters)?);
            }
            self.cursor
                .expect(TokenKind::GreaterThan, ErrorContext::TemplateParameters)?;
        }

        // Multi-word builtins.
        if name == "unsigned" {
            let word = self.cursor.expect_ident(context)?;
            name.push(' ');
            name.push_str(&word);
        }
        if matches!(name.as_str(), "long" | "unsigned long") && self.cursor.check_word("long") {
            self.cursor.advance();
            name.push_str(" long");
        }

        self.parse_path_segments(&mut name, context)?;
        Ok(Type::with_parameters(name, parameters))
    }

    /// Parse a declared name: `name`, `A::B`, `name[N]`.
    pub(crate) fn parse_identifier(
        &mut self,
        context: ErrorContext,
    ) -> Result<Declarator, ParseError> {
        let mut name = self.cursor.expect_ident(context)?;
        self.parse_path_segments(&mut name, context)?;

        let quantity = if self.cursor.eat(TokenKind::OpenSquareBracket) {
            let quantity = self.cursor.expect_ident(context)?;
            self.cursor
                .expect(TokenKind::CloseSquareBracket, context)?;
            Some(quantity)
        } else {
            None
        };

        Ok(Declarator { name, quantity })
    }

    /// Append `::Segment` for every namespace separator that follows.
    fn parse_path_segments(
        &mut self,
        name: &mut String,
        context: ErrorContext,
    ) -> Result<(), ParseError> {
        while self.cursor.eat(TokenKind::Namespace) {
            let segment = self.cursor.expect_ident(context)?;
            name.push_str("::");
            name.push_str(&segment);
        }
        Ok(())
    }

    /// Parse a constant's value as raw text.
    ///
    /// Consumes a run of identifiers, `<` and string literals and joins them.
    /// A value that starts with a string literal is returned quoted.
    pub(crate) fn parse_value(&mut self) -> Result<String, ParseError> {
        let first = self.cursor.current();
        if !matches!(
            first.kind,
            TokenKind::Identifier | TokenKind::StringLiteral
        ) {
            return Err(ParseError::expected(
                first,
                TokenKind::Identifier,
                ErrorContext::ConstantValue,
            ));
        }
        let quoted = first.kind == TokenKind::StringLiteral;

        let mut value = String::new();
        loop {
            let token = self.cursor.current();
            match token.kind {
                TokenKind::Identifier | TokenKind::StringLiteral => value.push_str(&token.text),
                TokenKind::LessThan => value.push('<'),
                _ => break,
            }
            self.cursor.advance();
        }

        if quoted {
            value = format!("\"{value}\"");
        }
        Ok(value)
    }
}
