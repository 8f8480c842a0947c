use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    Identifier,
    ReservedWord,
    SpecialSymbol,
    AssignOp,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::ReservedWord => "reserved word",
            TokenKind::SpecialSymbol => "special symbol",
            TokenKind::AssignOp => "assignment",
        };
        f.write_str(name)
    }
}

/// A single lexical unit: the text consumed and its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub lexeme: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            lexeme: lexeme.into(),
            kind,
        }
    }

    pub fn is(&self, lexeme: &str) -> bool {
        self.lexeme == lexeme
    }
}

/// Renders the `lexeme : kind` listing form.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.lexeme, self.kind)
    }
}
