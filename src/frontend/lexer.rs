use crate::config::lexer::{
    is_digit, is_letter, is_reserved_word, is_special_symbol, ASSIGN_OP, ASSIGN_PREFIX,
    ASSIGN_SUFFIX, COMMENT_CLOSE, COMMENT_OPEN,
};
use crate::errors::{TinyError, TinyResult};
use crate::frontend::token::{Token, TokenKind};
use std::iter;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Comment,
    ScanningNumber,
    ScanningIdentifier,
    ScanningAssign,
    Emit,
    Error,
}

/// Finite state machine turning TINY source into tokens.
///
/// Each step looks at one character and either consumes it or leaves the
/// cursor in place so the same character is fed again in the next state.
/// That one-character pushback is what lets a number or identifier end on the
/// first character that does not belong to it.
pub struct Lexer {
    state: State,
    buffer: String,
    kind: TokenKind,
    line: usize,
    comment_line: usize,
    tokens: Vec<(Token, usize)>,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    pub fn new() -> Self {
        Self {
            state: State::Start,
            buffer: String::new(),
            kind: TokenKind::SpecialSymbol,
            line: 1,
            comment_line: 1,
            tokens: Vec::new(),
        }
    }

    pub fn scan(self, source: &str) -> TinyResult<Vec<(Token, usize)>> {
        self.scan_lines(source.lines())
    }

    /// Scans a sequence of lines. Every line is followed by a newline, so a
    /// token at the very end of the input is still terminated.
    pub fn scan_lines<I, S>(mut self, lines: I) -> TinyResult<Vec<(Token, usize)>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (index, line) in lines.into_iter().enumerate() {
            self.line = index + 1;
            let chars: Vec<char> = line.as_ref().chars().chain(iter::once('\n')).collect();
            let mut pos = 0;
            while pos < chars.len() {
                if self.step(chars[pos])? {
                    pos += 1;
                }
            }
        }
        self.finish()
    }

    /// Runs one transition. Returns whether the character was consumed.
    fn step(&mut self, ch: char) -> TinyResult<bool> {
        match self.state {
            State::Start => self.start(ch),
            State::Comment => {
                if ch == COMMENT_CLOSE {
                    self.buffer.clear();
                    self.state = State::Start;
                }
                Ok(true)
            }
            State::ScanningNumber => {
                if is_digit(ch) {
                    self.buffer.push(ch);
                    return Ok(true);
                }
                self.kind = TokenKind::Number;
                self.state = State::Emit;
                Ok(false)
            }
            State::ScanningIdentifier => {
                if is_letter(ch) {
                    self.buffer.push(ch);
                    return Ok(true);
                }
                self.kind = if is_reserved_word(&self.buffer) {
                    TokenKind::ReservedWord
                } else {
                    TokenKind::Identifier
                };
                self.state = State::Emit;
                Ok(false)
            }
            State::ScanningAssign => {
                if ch != ASSIGN_SUFFIX {
                    return Err(self.fail(TinyError::lexer_error(
                        format!("expected '{ASSIGN_SUFFIX}' after '{ASSIGN_PREFIX}', found {ch:?}"),
                        self.line,
                    )));
                }
                self.buffer = ASSIGN_OP.to_string();
                self.kind = TokenKind::AssignOp;
                self.state = State::Emit;
                Ok(true)
            }
            State::Emit => {
                self.emit();
                self.state = State::Start;
                Ok(false)
            }
            // scan_lines returns on the first error, so a failed lexer is never stepped again
            State::Error => unreachable!("lexer stepped after failing"),
        }
    }

    fn start(&mut self, ch: char) -> TinyResult<bool> {
        if ch == COMMENT_OPEN {
            self.comment_line = self.line;
            self.state = State::Comment;
        } else if is_digit(ch) {
            self.buffer.push(ch);
            self.state = State::ScanningNumber;
        } else if is_letter(ch) {
            self.buffer.push(ch);
            self.state = State::ScanningIdentifier;
        } else if ch == ASSIGN_PREFIX {
            self.state = State::ScanningAssign;
        } else if is_special_symbol(ch) {
            self.buffer.push(ch);
            self.kind = TokenKind::SpecialSymbol;
            self.state = State::Emit;
        } else if !ch.is_ascii_whitespace() {
            return Err(self.fail(TinyError::UnknownCharacter {
                character: ch,
                line: self.line,
            }));
        }
        Ok(true)
    }

    fn emit(&mut self) {
        let token = Token::new(std::mem::take(&mut self.buffer), self.kind);
        trace!(line = self.line, token = %token, "token emitted");
        self.tokens.push((token, self.line));
    }

    fn fail(&mut self, error: TinyError) -> TinyError {
        self.state = State::Error;
        error
    }

    fn finish(mut self) -> TinyResult<Vec<(Token, usize)>> {
        match self.state {
            State::Comment => Err(TinyError::UnterminatedComment {
                line: self.comment_line,
            }),
            State::Emit => {
                self.emit();
                Ok(self.tokens)
            }
            _ => Ok(self.tokens),
        }
    }
}

// Convenience function over a fresh lexer
pub fn scan(source: &str) -> TinyResult<Vec<(Token, usize)>> {
    Lexer::new().scan(source)
}
