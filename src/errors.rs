use std::io;
use thiserror::Error;

/// Compilation phase an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Io,
    Lexing,
    Parsing,
}

#[derive(Debug, Error)]
pub enum TinyError {
    // File and I/O errors
    #[error("File read error: {0}")]
    FileReadError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Output error: {0}")]
    OutputError(String),

    // Lexical analysis errors
    #[error("Lexer error at line {line}: {message}")]
    LexerError { message: String, line: usize },
    #[error("Unknown character '{character}' at line {line}")]
    UnknownCharacter { character: char, line: usize },
    #[error("Unterminated comment starting at line {line}")]
    UnterminatedComment { line: usize },

    // Parsing errors
    #[error("Syntax error at line {line} (token {position}): expected {expected}, found {found}")]
    SyntaxError {
        expected: String,
        found: String,
        position: usize,
        line: usize,
    },
    #[error("Malformed statement at line {line} (token {position}): found {found}")]
    MalformedStatement {
        found: String,
        position: usize,
        line: usize,
    },
}

impl TinyError {
    /// Create a lexer error with line information
    pub fn lexer_error(message: impl Into<String>, line: usize) -> Self {
        TinyError::LexerError {
            message: message.into(),
            line,
        }
    }

    /// Create a syntax error at the given token position
    pub fn syntax_error(
        expected: impl Into<String>,
        found: impl Into<String>,
        position: usize,
        line: usize,
    ) -> Self {
        TinyError::SyntaxError {
            expected: expected.into(),
            found: found.into(),
            position,
            line,
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            TinyError::FileReadError(_) | TinyError::IoError(_) | TinyError::OutputError(_) => {
                Stage::Io
            }
            TinyError::LexerError { .. }
            | TinyError::UnknownCharacter { .. }
            | TinyError::UnterminatedComment { .. } => Stage::Lexing,
            TinyError::SyntaxError { .. } | TinyError::MalformedStatement { .. } => Stage::Parsing,
        }
    }

    /// Source line the error points at, when there is one.
    pub fn line(&self) -> Option<usize> {
        match self {
            TinyError::FileReadError(_) | TinyError::IoError(_) | TinyError::OutputError(_) => {
                None
            }
            TinyError::LexerError { line, .. }
            | TinyError::UnknownCharacter { line, .. }
            | TinyError::UnterminatedComment { line }
            | TinyError::SyntaxError { line, .. }
            | TinyError::MalformedStatement { line, .. } => Some(*line),
        }
    }
}

// Type alias for Result with TinyError
pub type TinyResult<T> = Result<T, TinyError>;
