//! Context-stack recursive-descent parser for IDL.
//!
//! Turns the token stream from `idl_lexer` into a [`ModuleTree`]. The parser
//! is a small state machine: a stack of open scopes (global, module, struct,
//! enum, interface, union) decides what each identifier means. Keywords are
//! contextual; the lexer never classifies them.
//!
//! The first error aborts the parse. No partial tree is returned.

mod context;
mod cursor;
mod error;
mod grammar;
mod stack;

pub use context::ContextKind;
pub use error::{ErrorContext, FrontEndError, ParseError, ParseErrorKind};
pub use grammar::Declarator;

use idl_ir::{Module, ModuleId, ModuleTree, Token, TokenKind};
use tracing::{debug, trace};

use context::{ContextFrame, Scope};
use cursor::Cursor;

/// Parse a token stream into a module tree.
pub fn parse(tokens: &[Token]) -> Result<ModuleTree, ParseError> {
    Parser::new(tokens).parse()
}

/// Lex and parse `source` in one step.
pub fn parse_source(source: &str) -> Result<ModuleTree, FrontEndError> {
    let tokens = idl_lexer::lex(source)?;
    Ok(parse(&tokens)?)
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Open scopes, innermost last. The global frame is never popped.
    contexts: Vec<ContextFrame>,
    /// Module that new declarations are appended to.
    current_module: ModuleId,
    tree: ModuleTree,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            contexts: vec![ContextFrame::global()],
            current_module: ModuleId::ROOT,
            tree: ModuleTree::new(),
        }
    }

    /// Run the parser over the whole stream.
    pub fn parse(mut self) -> Result<ModuleTree, ParseError> {
        while !self.cursor.is_at_end() {
            match self.cursor.current_kind() {
                TokenKind::Hash => self.parse_directive()?,
                TokenKind::Identifier => self.parse_token_word()?,
                TokenKind::CloseBrace => {
                    self.pop_context()?;
                    self.cursor.advance();
                }
                // `;` after a closing brace, stray newlines and the like.
                _ => self.cursor.advance(),
            }
        }

        if let Some(open) = self.contexts.last().filter(|f| f.scope != Scope::Global) {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedScope {
                    kind: open.kind(),
                    name: open.name.clone(),
                },
                open.span,
            ));
        }

        debug!(
            modules = self.tree.module_count(),
            directives = self.tree.directives().len(),
            "parsed module tree"
        );
        Ok(self.tree)
    }

    /// An identifier in statement position. Its meaning depends on the
    /// innermost scope.
    fn parse_token_word(&mut self) -> Result<(), ParseError> {
        match self.top().scope {
            Scope::Global | Scope::Module(_) => {
                let token = self.cursor.current();
                let (word, span) = (token.text.clone(), token.span);
                match word.as_str() {
                    "module" => self.parse_module(),
                    "typedef" => self.parse_typedef(),
                    "struct" => self.parse_struct(),
                    "const" => self.parse_const(),
                    "enum" => self.parse_enum(),
                    "interface" => self.parse_interface(),
                    "union" => self.parse_union(),
                    keyword => Err(ParseError::new(
                        ParseErrorKind::UnexpectedKeyword {
                            keyword: keyword.to_owned(),
                            context: self.top().kind(),
                        },
                        span,
                    )),
                }
            }
            Scope::Struct(index) => self.parse_struct_member(index),
            Scope::Enum(index) => self.parse_enum_member(index),
            Scope::Interface(index) => self.parse_interface_member(index),
            Scope::Union(index) => self.parse_union_member(index),
        }
    }

    #[inline]
    fn top(&self) -> &ContextFrame {
        // The global frame is pushed in `new` and never popped.
        &self.contexts[self.contexts.len() - 1]
    }

    #[inline]
    fn module_mut(&mut self) -> &mut Module {
        self.tree.get_mut(self.current_module)
    }

    /// Open a scope. Modules are allocated here and become current;
    /// aggregates must already be appended to the current module.
    fn push_context(&mut self, frame: ContextFrame) {
        trace!(kind = %frame.kind(), name = %frame.name, depth = self.contexts.len(), "push context");
        if let Scope::Module(id) = frame.scope {
            self.current_module = id;
        }
        self.contexts.push(frame);
    }

    /// Close the innermost scope.
    fn pop_context(&mut self) -> Result<(), ParseError> {
        if self.contexts.len() <= 1 {
            return Err(ParseError::new(
                ParseErrorKind::UnmatchedCloseBrace,
                self.cursor.current_span(),
            ));
        }
        if let Some(frame) = self.contexts.pop() {
            trace!(kind = %frame.kind(), name = %frame.name, depth = self.contexts.len(), "pop context");
            if let Scope::Module(id) = frame.scope {
                self.current_module = self.tree.parent(id).unwrap_or(ModuleId::ROOT);
            }
        }
        Ok(())
    }
}
