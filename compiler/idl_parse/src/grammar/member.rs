//! Aggregate bodies.
//!
//! Entered with the cursor on the first identifier of a member. `index` is
//! the position of the open aggregate in the current module's collection.

use idl_ir::{Direction, EnumMember, Member, Method, MethodParameter, TokenKind, UnionMember};
use tracing::trace;

use crate::{ErrorContext, ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// `Type name;`
    pub(crate) fn parse_struct_member(&mut self, index: usize) -> Result<(), ParseError> {
        let ty = self.parse_type(ErrorContext::StructMember)?;
        let declarator = self.parse_identifier(ErrorContext::StructMember)?;
        self.cursor
            .expect(TokenKind::Semicolon, ErrorContext::StructMember)?;

        let (name, ty) = declarator.bind(ty);
        trace!(%name, %ty, "struct member");
        self.module_mut().structs[index]
            .members
            .push(Member::new(name, ty));
        Ok(())
    }

    /// `Name` followed by any number of commas.
    pub(crate) fn parse_enum_member(&mut self, index: usize) -> Result<(), ParseError> {
        let name = self.cursor.expect_ident(ErrorContext::EnumMember)?;
        while self.cursor.eat(TokenKind::Comma) {}

        trace!(%name, "enum member");
        self.module_mut().enums[index]
            .members
            .push(EnumMember { name });
        Ok(())
    }

    /// `Ret name();` or `Ret name(dir Type [name], ...)`.
    ///
    /// The empty form must end in `;`. After a parameter list the `;` is
    /// optional and the method ends at `)`.
    pub(crate) fn parse_interface_member(&mut self, index: usize) -> Result<(), ParseError> {
        let return_value = self.parse_type(ErrorContext::Method)?;
        let name = self.parse_identifier(ErrorContext::Method)?.text();
        self.cursor
            .expect(TokenKind::OpenBracket, ErrorContext::Method)?;

        let mut parameters = Vec::new();
        if self.cursor.eat(TokenKind::CloseBracket) {
            self.cursor
                .expect(TokenKind::Semicolon, ErrorContext::Method)?;
        } else {
            loop {
                parameters.push(self.parse_method_parameter()?);
                if self.cursor.eat(TokenKind::Comma) {
                    continue;
                }
                self.cursor
                    .expect(TokenKind::CloseBracket, ErrorContext::MethodParameter)?;
                break;
            }
            self.cursor.eat(TokenKind::Semicolon);
        }

        trace!(%name, %return_value, params = parameters.len(), "interface method");
        self.module_mut().interfaces[index].methods.push(Method {
            name,
            return_value,
            parameters,
        });
        Ok(())
    }

    /// `in Type name`, `out Type` or `inout Type name[N]`.
    fn parse_method_parameter(&mut self) -> Result<MethodParameter, ParseError> {
        let token = self.cursor.current();
        if token.kind != TokenKind::Identifier {
            return Err(ParseError::expected(
                token,
                TokenKind::Identifier,
                ErrorContext::MethodParameter,
            ));
        }
        let Some(direction) = Direction::from_keyword(&token.text) else {
            return Err(ParseError::new(
                ParseErrorKind::InvalidDirection {
                    found: token.to_string(),
                },
                token.span,
            ));
        };
        self.cursor.advance();

        let ty = self.parse_type(ErrorContext::MethodParameter)?;
        // The parameter name is optional.
        let (name, ty) = if self.cursor.check(TokenKind::Identifier) {
            let (name, ty) = self
                .parse_identifier(ErrorContext::MethodParameter)?
                .bind(ty);
            (Some(name), ty)
        } else {
            (None, ty)
        };

        Ok(MethodParameter {
            direction,
            ty,
            name,
        })
    }

    /// `case (Value): Type name;`
    pub(crate) fn parse_union_member(&mut self, index: usize) -> Result<(), ParseError> {
        if !self.cursor.check_word("case") {
            return Err(ParseError::mismatch(
                self.cursor.current(),
                TokenKind::Identifier,
                |found| ParseErrorKind::ExpectedCase { found },
            ));
        }
        self.cursor.advance();
        self.cursor
            .expect(TokenKind::OpenBracket, ErrorContext::UnionCase)?;
        let case_value = self.parse_type(ErrorContext::UnionCase)?;
        self.cursor
            .expect(TokenKind::CloseBracket, ErrorContext::UnionCase)?;
        self.cursor
            .expect(TokenKind::Colon, ErrorContext::UnionCase)?;
        let member_type = self.parse_type(ErrorContext::UnionCase)?;
        let declarator = self.parse_identifier(ErrorContext::UnionCase)?;
        self.cursor
            .expect(TokenKind::Semicolon, ErrorContext::UnionCase)?;

        let (member_name, member_type) = declarator.bind(member_type);
        trace!(%case_value, %member_type, %member_name, "union case");
        self.module_mut().unions[index].members.push(UnionMember {
            case_value,
            member_type,
            member_name,
        });
        Ok(())
    }
}
