//! Property tests for the IDL lexer.

use idl_ir::TokenKind;
use idl_lexer::{lex, LexErrorKind};
use proptest::prelude::*;

proptest! {
    #[test]
    fn lexing_is_deterministic(source in "\\PC{0,200}") {
        prop_assert_eq!(lex(&source), lex(&source));
    }

    #[test]
    fn lexing_arbitrary_bytes_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = idl_lexer::lex_bytes(&bytes);
    }

    #[test]
    fn identifier_runs_round_trip(words in proptest::collection::vec("[A-Za-z0-9_]{1,12}", 1..20)) {
        let source = format!("{};", words.join(" "));
        let tokens = lex(&source).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(tokens.len(), words.len() + 1);
        for (token, word) in tokens.iter().zip(&words) {
            prop_assert_eq!(token.kind, TokenKind::Identifier);
            prop_assert_eq!(&token.text, word);
        }
        prop_assert_eq!(tokens[words.len()].kind, TokenKind::Semicolon);
    }

    #[test]
    fn unterminated_string_discards_everything(prefix in "[a-z ;{}]{0,40}", body in "[^\"]{0,40}") {
        let source = format!("{prefix}\"{body}");
        let err = lex(&source).err();
        prop_assert_eq!(err.map(|e| e.kind), Some(LexErrorKind::UnterminatedString));
    }

    #[test]
    fn spans_slice_back_to_identifier_text(words in proptest::collection::vec("[a-z]{1,8}", 1..10)) {
        let source = format!("{}\n", words.join(" :: "));
        let tokens = lex(&source).map_err(|e| TestCaseError::fail(e.to_string()))?;
        for token in tokens.iter().filter(|t| t.kind == TokenKind::Identifier) {
            prop_assert_eq!(&source[token.span.to_range()], token.text.as_str());
        }
    }
}
