use super::{
    language::Language,
    token::{Token, TokenType},
};
use bit_vec::BitVec;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use tracing::trace;

lazy_static! {
    // Unterminated triple-quoted strings and block comments run to end of input.
    static ref TRIPLE_STRING: Regex =
        Regex::new(r#""""[\s\S]*?(?:"""|\z)|'''[\s\S]*?(?:'''|\z)"#).unwrap();
    static ref COMMENT_BLOCK: Regex = Regex::new(r"/\*[\s\S]*?(?:\*/|\z)").unwrap();
    static ref COMMENT_HASH: Regex = Regex::new(r"#[^\r\n]*").unwrap();
    static ref COMMENT_SLASH: Regex = Regex::new(r"//[^\r\n]*").unwrap();
    static ref STRING_TICK: Regex = Regex::new(r"`(?:[^`\\]|\\.)*`").unwrap();
    static ref STRING_DQ: Regex = Regex::new(r#""(?:[^"\\]|\\.)*""#).unwrap();
    static ref STRING_SQ: Regex = Regex::new(r"'(?:[^'\\]|\\.)*'").unwrap();
    static ref UNCLOSED_TICK: Regex = Regex::new(r"`(?:[^`\\\r\n]|\\.)*").unwrap();
    static ref UNCLOSED_DQ: Regex = Regex::new(r#""(?:[^"\\\r\n]|\\.)*"#).unwrap();
    static ref UNCLOSED_SQ: Regex = Regex::new(r"'(?:[^'\\\r\n]|\\.)*").unwrap();
    static ref ANNOTATION: Regex = Regex::new(r"@[A-Za-z0-9_]+").unwrap();
    static ref NUMBER: Regex =
        Regex::new(r"\b[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?\b").unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"\b[A-Za-z_][A-Za-z0-9_]*\b").unwrap();
    static ref OPERATOR: Regex = Regex::new(r"[-+*/%=<>!&|^~?:]+|->|=>|\.\.").unwrap();
}

/// Classify `source` for highlighting in `language`.
///
/// Rules run in a fixed priority order over the whole input and the first
/// rule to claim a byte keeps it. Bytes no rule claims get no token; callers
/// render them with the plain style. The result is sorted by `start` and no
/// two tokens overlap.
pub fn tokenize(source: &str, language: Language) -> Vec<Token> {
    let mut claims = Claims::new(source);

    if language.is_hash_commented() {
        claims.apply(&TRIPLE_STRING, TokenType::String);
        claims.apply(&COMMENT_HASH, TokenType::Comment);
    } else {
        claims.apply(&COMMENT_BLOCK, TokenType::Comment);
        claims.apply(&COMMENT_SLASH, TokenType::Comment);
    }
    if language == Language::JavaScript {
        claims.apply(&STRING_TICK, TokenType::String);
    }
    claims.apply(&STRING_DQ, TokenType::String);
    claims.apply(&STRING_SQ, TokenType::String);

    // A quote nothing above claimed opens a string that runs to end of line.
    if language == Language::JavaScript {
        claims.apply_clipped(&UNCLOSED_TICK, TokenType::String);
    }
    claims.apply_clipped(&UNCLOSED_DQ, TokenType::String);
    claims.apply_clipped(&UNCLOSED_SQ, TokenType::String);

    claims.apply(&ANNOTATION, TokenType::Annotation);
    claims.apply(&NUMBER, TokenType::Number);
    claims.apply_identifiers(language.keywords());
    claims.apply(&OPERATOR, TokenType::Operator);

    let tokens = claims.finish();
    trace!(
        language = %language,
        bytes = source.len(),
        tokens = tokens.len(),
        "tokenized source"
    );
    tokens
}

/// Keyword first, then capitalised names, then call sites.
fn classify_identifier(word: &str, next: Option<u8>, keywords: &HashSet<&str>) -> TokenType {
    if keywords.contains(word) {
        TokenType::Keyword
    } else if word.starts_with(|c: char| c.is_ascii_uppercase()) {
        TokenType::Type
    } else if next == Some(b'(') {
        TokenType::Function
    } else {
        TokenType::Plain
    }
}

/// Per-call claim state: the tokens found so far and which bytes they cover.
struct Claims<'a> {
    source: &'a str,
    covered: BitVec,
    tokens: Vec<Token>,
}

impl<'a> Claims<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            covered: BitVec::from_elem(source.len(), false),
            tokens: Vec::new(),
        }
    }

    fn is_free(&self, start: usize, end: usize) -> bool {
        (start..end).all(|i| !self.covered[i])
    }

    fn claim(&mut self, start: usize, end: usize, token_type: TokenType) {
        if start >= end {
            return;
        }
        for i in start..end {
            self.covered.set(i, true);
        }
        self.tokens.push(Token::new(start, end, token_type));
    }

    /// Claim every match that lies entirely on unclaimed bytes.
    fn apply(&mut self, regex: &Regex, token_type: TokenType) {
        let source = self.source;
        for m in regex.find_iter(source) {
            if self.is_free(m.start(), m.end()) {
                self.claim(m.start(), m.end(), token_type);
            }
        }
    }

    /// Claim each match whose first byte is unclaimed, cut short at the first
    /// byte an earlier rule already owns.
    fn apply_clipped(&mut self, regex: &Regex, token_type: TokenType) {
        let source = self.source;
        for m in regex.find_iter(source) {
            if self.covered[m.start()] {
                continue;
            }
            let end = (m.start()..m.end())
                .find(|&i| self.covered[i])
                .unwrap_or(m.end());
            self.claim(m.start(), end, token_type);
        }
    }

    fn apply_identifiers(&mut self, keywords: &HashSet<&str>) {
        let source = self.source;
        for m in IDENTIFIER.find_iter(source) {
            if !self.is_free(m.start(), m.end()) {
                continue;
            }
            let next = source.as_bytes().get(m.end()).copied();
            let token_type = classify_identifier(m.as_str(), next, keywords);
            self.claim(m.start(), m.end(), token_type);
        }
    }

    fn finish(mut self) -> Vec<Token> {
        self.tokens.sort_by_key(|token| token.start);
        self.tokens
    }
}
