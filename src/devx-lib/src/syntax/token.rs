use serde::Serialize;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Keyword,
    String,
    Comment,
    Number,
    Function,
    Type,
    Operator,
    Annotation,
    Plain,
}

impl TokenType {
    pub const ALL: [TokenType; 9] = [
        TokenType::Keyword,
        TokenType::String,
        TokenType::Comment,
        TokenType::Number,
        TokenType::Function,
        TokenType::Type,
        TokenType::Operator,
        TokenType::Annotation,
        TokenType::Plain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Keyword => "keyword",
            TokenType::String => "string",
            TokenType::Comment => "comment",
            TokenType::Number => "number",
            TokenType::Function => "function",
            TokenType::Type => "type",
            TokenType::Operator => "operator",
            TokenType::Annotation => "annotation",
            TokenType::Plain => "plain",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified span of the source text.
///
/// `start` and `end` are byte offsets into the tokenized `&str` and always
/// fall on char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub token_type: TokenType,
}

impl Token {
    pub fn new(start: usize, end: usize, token_type: TokenType) -> Self {
        debug_assert!(start <= end, "token span must be ordered");
        Self {
            start,
            end,
            token_type,
        }
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Slice the token's text out of the source it was produced from.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span()]
    }
}
