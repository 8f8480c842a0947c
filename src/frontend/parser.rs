use crate::ast::AssignStmt;
use crate::ast::BinOp;
use crate::ast::Const;
use crate::ast::Expression;
use crate::ast::Ident;
use crate::ast::IfStmt;
use crate::ast::Operator;
use crate::ast::Program;
use crate::ast::Read;
use crate::ast::RepeatStmt;
use crate::ast::Statement;
use crate::ast::Write;
use crate::config::lexer::ASSIGN_OP;
use crate::config::parser::{
    ADDITIVE_OPERATORS, END_OF_INPUT, MAX_NESTING, MULTIPLICATIVE_OPERATORS,
    RELATIONAL_OPERATORS, STATEMENT_SEPARATOR,
};
use crate::errors::{TinyError, TinyResult};
use crate::frontend::token::{Token, TokenKind};
use tracing::debug;

type Alternative<'a> = fn(&mut Parser<'a>) -> TinyResult<Option<Statement>>;

/// Recursive-descent parser over a fully scanned token sequence.
///
/// The parser only ever moves forward: each routine looks at the current
/// token, consumes what belongs to its production and returns the subtree it
/// built. The first violation aborts the whole parse.
///
/// Nested statements and parenthesized expressions are limited to
/// `MAX_NESTING` levels, so hostile input fails with an error instead of
/// exhausting the stack.
pub struct Parser<'a> {
    tokens: &'a [(Token, usize)],
    position: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [(Token, usize)]) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    fn enter(&mut self) -> TinyResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(self.error(format!("nesting depth at most {MAX_NESTING}")));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.position).map(|(token, _)| token)
    }

    fn line_number(&self) -> usize {
        self.tokens
            .get(self.position)
            .or_else(|| self.tokens.last())
            .map(|(_, line)| *line)
            .unwrap_or(1)
    }

    fn found(&self) -> String {
        match self.current() {
            Some(token) => format!("'{}'", token.lexeme),
            None => END_OF_INPUT.to_string(),
        }
    }

    fn error(&self, expected: impl Into<String>) -> TinyError {
        TinyError::syntax_error(expected, self.found(), self.position, self.line_number())
    }

    fn check(&self, lexeme: &str) -> bool {
        self.current().is_some_and(|token| token.is(lexeme))
    }

    /// Consumes the current token if its lexeme is `lexeme`.
    fn match_lexeme(&mut self, lexeme: &str) -> bool {
        if self.check(lexeme) {
            self.position += 1;
            return true;
        }
        false
    }

    /// Consumes and returns the current token if it is of `kind`.
    fn match_kind(&mut self, kind: TokenKind) -> Option<&'a Token> {
        let token = self.current().filter(|token| token.kind == kind)?;
        self.position += 1;
        Some(token)
    }

    fn match_operator(&mut self, symbols: &[&str]) -> Option<Operator> {
        let token = self
            .current()
            .filter(|token| token.kind == TokenKind::SpecialSymbol)
            .filter(|token| symbols.contains(&token.lexeme.as_str()))?;
        let op = Operator::from_symbol(&token.lexeme)?;
        self.position += 1;
        Some(op)
    }

    fn expect(&mut self, lexeme: &str) -> TinyResult<()> {
        if !self.match_lexeme(lexeme) {
            return Err(self.error(format!("'{lexeme}'")));
        }
        Ok(())
    }

    fn starts_expression(&self) -> bool {
        match self.current() {
            Some(token) => {
                token.is("(")
                    || matches!(token.kind, TokenKind::Number | TokenKind::Identifier)
            }
            None => false,
        }
    }

    /// An expression that a keyword or `:=` demands, failing with the context
    /// it was required by.
    fn required_expression(&mut self, context: &str) -> TinyResult<Expression> {
        if !self.starts_expression() {
            return Err(self.error(format!("expression after {context}")));
        }
        self.expression()
    }

    /**
     * Parse a program:
     * program = stmt-sequence <end of input>
     */
    pub fn parse(&mut self) -> TinyResult<Program> {
        let stmts = self.stmt_sequence()?;
        if self.current().is_some() {
            return Err(self.error(format!("'{STATEMENT_SEPARATOR}' or {END_OF_INPUT}")));
        }
        debug!(statements = stmts.len(), "program found");
        Ok(Program::new(stmts))
    }

    /**
     * Parse a statement sequence:
     * stmt-sequence = statement { ";" statement }
     */
    fn stmt_sequence(&mut self) -> TinyResult<Vec<Statement>> {
        let mut stmts = vec![self.statement()?];
        while self.match_lexeme(STATEMENT_SEPARATOR) {
            stmts.push(self.statement()?);
        }
        debug!(statements = stmts.len(), "statement sequence found");
        Ok(stmts)
    }

    /**
     * Parse a statement, trying each alternative in turn:
     * statement = if-stmt | repeat-stmt | assign-stmt | read-stmt | write-stmt
     */
    fn statement(&mut self) -> TinyResult<Statement> {
        self.enter()?;
        let stmt = self.first_alternative();
        self.leave();
        stmt
    }

    fn first_alternative(&mut self) -> TinyResult<Statement> {
        let alternatives: [Alternative<'a>; 5] = [
            Self::if_stmt,
            Self::repeat_stmt,
            Self::assign_stmt,
            Self::read_stmt,
            Self::write_stmt,
        ];
        for alternative in alternatives {
            if let Some(stmt) = alternative(self)? {
                return Ok(stmt);
            }
        }
        Err(TinyError::MalformedStatement {
            found: self.found(),
            position: self.position,
            line: self.line_number(),
        })
    }

    // if-stmt = "if" exp "then" stmt-sequence [ "else" stmt-sequence ] "end"
    fn if_stmt(&mut self) -> TinyResult<Option<Statement>> {
        if !self.match_lexeme("if") {
            return Ok(None);
        }
        let condition = self.required_expression("'if'")?;
        self.expect("then")?;
        let then_branch = self.stmt_sequence()?;
        let else_branch = if self.match_lexeme("else") {
            Some(self.stmt_sequence()?)
        } else {
            None
        };
        self.expect("end")?;
        debug!("if statement found");
        Ok(Some(Statement::If(IfStmt::new(condition, then_branch, else_branch))))
    }

    // repeat-stmt = "repeat" stmt-sequence "until" exp
    fn repeat_stmt(&mut self) -> TinyResult<Option<Statement>> {
        if !self.match_lexeme("repeat") {
            return Ok(None);
        }
        let body = self.stmt_sequence()?;
        self.expect("until")?;
        let condition = self.required_expression("'until'")?;
        debug!("repeat statement found");
        Ok(Some(Statement::Repeat(RepeatStmt::new(body, condition))))
    }

    // assign-stmt = identifier ":=" exp
    fn assign_stmt(&mut self) -> TinyResult<Option<Statement>> {
        let Some(target) = self.match_kind(TokenKind::Identifier) else {
            return Ok(None);
        };
        self.expect(ASSIGN_OP)?;
        let expr = self.required_expression(&format!("'{ASSIGN_OP}'"))?;
        debug!(identifier = %target.lexeme, "assignment statement found");
        Ok(Some(Statement::Assign(AssignStmt::new(
            target.lexeme.clone(),
            expr,
        ))))
    }

    // read-stmt = "read" identifier
    fn read_stmt(&mut self) -> TinyResult<Option<Statement>> {
        if !self.match_lexeme("read") {
            return Ok(None);
        }
        let target = self
            .match_kind(TokenKind::Identifier)
            .ok_or_else(|| self.error("identifier after 'read'"))?;
        debug!(identifier = %target.lexeme, "read statement found");
        Ok(Some(Statement::Read(Read::new(target.lexeme.clone()))))
    }

    // write-stmt = "write" exp
    fn write_stmt(&mut self) -> TinyResult<Option<Statement>> {
        if !self.match_lexeme("write") {
            return Ok(None);
        }
        let expr = self.required_expression("'write'")?;
        debug!("write statement found");
        Ok(Some(Statement::Write(Write::new(expr))))
    }

    /**
     * Parse an expression. Relational operators do not chain:
     * exp = simple-exp [ ( "<" | "=" ) simple-exp ]
     */
    fn expression(&mut self) -> TinyResult<Expression> {
        let lhs = self.simple_expression()?;
        match self.match_operator(&RELATIONAL_OPERATORS) {
            Some(op) => {
                let rhs = self.simple_expression()?;
                Ok(BinOp::new(op, lhs, rhs).into())
            }
            None => Ok(lhs),
        }
    }

    /**
     * Parse a simple expression, folding to the left:
     * simple-exp = term { ( "+" | "-" ) term }
     */
    fn simple_expression(&mut self) -> TinyResult<Expression> {
        let mut lhs = self.term()?;
        while let Some(op) = self.match_operator(&ADDITIVE_OPERATORS) {
            let rhs = self.term()?;
            lhs = BinOp::new(op, lhs, rhs).into();
        }
        Ok(lhs)
    }

    /**
     * Parse a term, folding to the left:
     * term = factor { ( "*" | "/" ) factor }
     */
    fn term(&mut self) -> TinyResult<Expression> {
        let mut lhs = self.factor()?;
        while let Some(op) = self.match_operator(&MULTIPLICATIVE_OPERATORS) {
            let rhs = self.factor()?;
            lhs = BinOp::new(op, lhs, rhs).into();
        }
        Ok(lhs)
    }

    /**
     * Parse a factor:
     * factor = "(" exp ")" | number | identifier
     */
    fn factor(&mut self) -> TinyResult<Expression> {
        if self.check("(") {
            self.enter()?;
            self.position += 1;
            let expr = self.expression();
            self.leave();
            let expr = expr?;
            self.expect(")")?;
            return Ok(expr);
        }
        if let Some(token) = self.match_kind(TokenKind::Number) {
            return Ok(Const::new(token.lexeme.clone()).into());
        }
        if let Some(token) = self.match_kind(TokenKind::Identifier) {
            return Ok(Ident::new(token.lexeme.clone()).into());
        }
        Err(self.error("'(', number or identifier"))
    }
}

// Convenience function over a fresh parser
pub fn parse_tokens(tokens: &[(Token, usize)]) -> TinyResult<Program> {
    Parser::new(tokens).parse()
}
