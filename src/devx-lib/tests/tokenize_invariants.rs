//! Property tests for the structural guarantees of `tokenize`:
//!
//! 1. Every token is non-empty and lies inside the source.
//! 2. Tokens are sorted by start and never overlap.
//! 3. Token bounds fall on char boundaries.
//! 4. Tokenizing twice gives the same result.

use devx_lib::syntax::{tokenize, Language, Token};
use proptest::prelude::*;

fn language_strategy() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

// Biased towards the characters the rules care about.
fn code_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_ \t\n\"'`#/*@().:=<>!+\\-\\\\éλ]{0,120}"
}

fn check_structure(source: &str, tokens: &[Token]) -> Result<(), TestCaseError> {
    for token in tokens {
        prop_assert!(token.start < token.end, "empty token {:?}", token);
        prop_assert!(token.end <= source.len(), "token past end {:?}", token);
        prop_assert!(source.is_char_boundary(token.start));
        prop_assert!(source.is_char_boundary(token.end));
    }
    for pair in tokens.windows(2) {
        prop_assert!(
            pair[0].end <= pair[1].start,
            "overlap or disorder: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }
    Ok(())
}

proptest! {
    #[test]
    fn code_like_input_is_well_formed(source in code_strategy(), lang in language_strategy()) {
        let tokens = tokenize(&source, lang);
        check_structure(&source, &tokens)?;
    }

    #[test]
    fn arbitrary_input_is_well_formed(source in any::<String>(), lang in language_strategy()) {
        let tokens = tokenize(&source, lang);
        check_structure(&source, &tokens)?;
    }

    #[test]
    fn tokenize_is_deterministic(source in code_strategy(), lang in language_strategy()) {
        prop_assert_eq!(tokenize(&source, lang), tokenize(&source, lang));
    }

    #[test]
    fn line_comment_swallows_rest_of_line(body in "[a-z 0-9]{0,20}(\"[a-z]{0,5}\")?[a-z ]{0,20}") {
        let source = format!("# {body}");
        let tokens = tokenize(&source, Language::Python);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].end, source.len());
    }
}
