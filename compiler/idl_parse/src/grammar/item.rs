//! Declarations at global or module scope.
//!
//! Each parser is entered with the cursor on its keyword. Constructs with a
//! body append their value to the current module and push a context; the
//! body is then filled by the member parsers until the matching `}`.

use idl_ir::{Constant, Enum, Interface, Member, Span, Struct, TokenKind, Union};
use tracing::debug;

use crate::context::{ContextFrame, Scope};
use crate::{ErrorContext, ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// `module Name {`
    pub(crate) fn parse_module(&mut self) -> Result<(), ParseError> {
        self.cursor.advance();
        let span = self.cursor.current_span();
        let name = self.parse_identifier(ErrorContext::ModuleName)?.text();
        self.cursor
            .expect(TokenKind::OpenBrace, ErrorContext::ModuleName)?;

        let id = self.tree.add_child(self.current_module, name.clone());
        debug!(module = %self.tree.path(id), "open module");
        self.push_context(ContextFrame {
            scope: Scope::Module(id),
            name,
            span,
        });
        Ok(())
    }

    /// `typedef Type name;`
    pub(crate) fn parse_typedef(&mut self) -> Result<(), ParseError> {
        self.cursor.advance();
        let ty = self.parse_type(ErrorContext::TypeDef)?;
        let declarator = self.parse_identifier(ErrorContext::TypeDef)?;
        self.cursor
            .expect(TokenKind::Semicolon, ErrorContext::TypeDef)?;

        let (name, ty) = declarator.bind(ty);
        debug!(%name, %ty, "typedef");
        self.module_mut().typedefs.push(Member::new(name, ty));
        Ok(())
    }

    /// `const Type name = value;`
    pub(crate) fn parse_const(&mut self) -> Result<(), ParseError> {
        self.cursor.advance();
        let ty = self.parse_type(ErrorContext::Constant)?;
        let declarator = self.parse_identifier(ErrorContext::Constant)?;
        self.cursor
            .expect(TokenKind::Equals, ErrorContext::Constant)?;
        let value = self.parse_value()?;
        self.cursor
            .expect(TokenKind::Semicolon, ErrorContext::Constant)?;

        let (name, ty) = declarator.bind(ty);
        debug!(%name, %ty, %value, "constant");
        self.module_mut().constants.push(Constant { name, ty, value });
        Ok(())
    }

    /// `struct Name [: Base, ...] {`
    pub(crate) fn parse_struct(&mut self) -> Result<(), ParseError> {
        self.cursor.advance();
        let span = self.cursor.current_span();
        let name = self.parse_identifier(ErrorContext::StructName)?.text();
        let inherits = if self.cursor.eat(TokenKind::Colon) {
            self.parse_inheritance(ErrorContext::StructInheritance)?
        } else {
            Vec::new()
        };
        self.cursor
            .expect(TokenKind::OpenBrace, ErrorContext::StructName)?;

        debug!(%name, ?inherits, "open struct");
        let structs = &mut self.module_mut().structs;
        structs.push(Struct {
            name: name.clone(),
            inherits,
            members: Vec::new(),
        });
        let index = structs.len() - 1;
        self.push_context(ContextFrame {
            scope: Scope::Struct(index),
            name,
            span,
        });
        Ok(())
    }

    /// `enum Name {`
    pub(crate) fn parse_enum(&mut self) -> Result<(), ParseError> {
        self.cursor.advance();
        let span = self.cursor.current_span();
        let name = self.parse_identifier(ErrorContext::EnumName)?.text();
        self.cursor
            .expect(TokenKind::OpenBrace, ErrorContext::EnumName)?;

        debug!(%name, "open enum");
        let enums = &mut self.module_mut().enums;
        enums.push(Enum::new(name.clone()));
        let index = enums.len() - 1;
        self.push_context(ContextFrame {
            scope: Scope::Enum(index),
            name,
            span,
        });
        Ok(())
    }

    /// `interface Name;`, `interface Name {` or `interface Name : Base, ... {`
    pub(crate) fn parse_interface(&mut self) -> Result<(), ParseError> {
        self.cursor.advance();
        let span = self.cursor.current_span();
        let name = self.parse_identifier(ErrorContext::InterfaceName)?.text();

        let inherits = match self.cursor.current_kind() {
            TokenKind::Semicolon => {
                // Forward declaration: registered empty, nothing to fill.
                self.cursor.advance();
                debug!(%name, "forward-declared interface");
                self.open_interface(name, Vec::new(), span);
                return self.pop_context();
            }
            TokenKind::OpenBrace => {
                self.cursor.advance();
                Vec::new()
            }
            TokenKind::Colon => {
                self.cursor.advance();
                let inherits = self.parse_inheritance(ErrorContext::InterfaceInheritance)?;
                self.cursor
                    .expect(TokenKind::OpenBrace, ErrorContext::InterfaceInheritance)?;
                inherits
            }
            _ => {
                return Err(ParseError::mismatch(
                    self.cursor.current(),
                    TokenKind::OpenBrace,
                    |found| ParseErrorKind::InvalidInterfaceDefinition { found },
                ));
            }
        };

        debug!(%name, ?inherits, "open interface");
        self.open_interface(name, inherits, span);
        Ok(())
    }

    fn open_interface(&mut self, name: String, inherits: Vec<String>, span: Span) {
        let interfaces = &mut self.module_mut().interfaces;
        interfaces.push(Interface {
            name: name.clone(),
            inherits,
            methods: Vec::new(),
        });
        let index = interfaces.len() - 1;
        self.push_context(ContextFrame {
            scope: Scope::Interface(index),
            name,
            span,
        });
    }

    /// `union Name switch (Discriminant) {`
    pub(crate) fn parse_union(&mut self) -> Result<(), ParseError> {
        self.cursor.advance();
        let span = self.cursor.current_span();
        let name = self.parse_identifier(ErrorContext::UnionName)?.text();

        if !self.cursor.check_word("switch") {
            return Err(ParseError::mismatch(
                self.cursor.current(),
                TokenKind::Identifier,
                |found| ParseErrorKind::ExpectedSwitch { found },
            ));
        }
        self.cursor.advance();
        self.cursor
            .expect(TokenKind::OpenBracket, ErrorContext::UnionDiscriminant)?;
        let discriminant = self.parse_type(ErrorContext::UnionDiscriminant)?;
        self.cursor
            .expect(TokenKind::CloseBracket, ErrorContext::UnionDiscriminant)?;
        self.cursor
            .expect(TokenKind::OpenBrace, ErrorContext::UnionDiscriminant)?;

        debug!(%name, %discriminant, "open union");
        let unions = &mut self.module_mut().unions;
        unions.push(Union::new(name.clone(), discriminant));
        let index = unions.len() - 1;
        self.push_context(ContextFrame {
            scope: Scope::Union(index),
            name,
            span,
        });
        Ok(())
    }

    /// `Base, Other::Base, ...` after a `:`.
    fn parse_inheritance(&mut self, context: ErrorContext) -> Result<Vec<String>, ParseError> {
        let mut inherits = vec![self.parse_identifier(context)?.text()];
        while self.cursor.eat(TokenKind::Comma) {
            inherits.push(self.parse_identifier(context)?.text());
        }
        Ok(inherits)
    }
}
