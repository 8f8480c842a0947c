use crate::ast::{
    AssignStmt, BinOp, Const, Ident, IfStmt, Node, Program, Read, RepeatStmt, Statement, Write,
};
use crate::errors::{TinyError, TinyResult};
use crate::visiters::AstVisitor;
use std::fmt::Write as _;

const INDENT: &str = "  ";

/// Renders the tree as indented text, one node per line.
///
/// Branches of an `If` are introduced by `then:` / `else:` markers and the
/// body of a `Repeat` by `do:` / `until:`, so the grouping the flat child
/// list loses stays visible.
#[derive(Default)]
pub struct AstPrinter {
    output: String,
    depth: usize,
}

impl AstPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print(mut self, program: &Program) -> TinyResult<String> {
        program.accept(&mut self)?;
        Ok(self.output)
    }

    fn line(&mut self, text: &str) -> TinyResult<()> {
        writeln!(self.output, "{}{}", INDENT.repeat(self.depth), text)
            .map_err(|_| TinyError::OutputError("fmt error".to_string()))
    }

    fn nested(&mut self, node: &dyn Node) -> TinyResult<()> {
        self.depth += 1;
        let result = node.accept(self);
        self.depth -= 1;
        result
    }

    fn section(&mut self, marker: &str, stmts: &[Statement]) -> TinyResult<()> {
        self.depth += 1;
        self.line(marker)?;
        for stmt in stmts {
            self.nested(stmt)?;
        }
        self.depth -= 1;
        Ok(())
    }
}

impl AstVisitor for AstPrinter {
    fn visit_program(&mut self, program: &Program) -> TinyResult<()> {
        self.line(&program.label())?;
        for stmt in &program.stmts {
            self.nested(stmt)?;
        }
        Ok(())
    }

    fn visit_if(&mut self, stmt: &IfStmt) -> TinyResult<()> {
        self.line(&stmt.label())?;
        self.nested(&stmt.condition)?;
        self.section("then:", &stmt.then_branch)?;
        if let Some(else_branch) = &stmt.else_branch {
            self.section("else:", else_branch)?;
        }
        Ok(())
    }

    fn visit_repeat(&mut self, stmt: &RepeatStmt) -> TinyResult<()> {
        self.line(&stmt.label())?;
        self.section("do:", &stmt.body)?;
        self.depth += 1;
        self.line("until:")?;
        self.nested(&stmt.condition)?;
        self.depth -= 1;
        Ok(())
    }

    fn visit_assign(&mut self, stmt: &AssignStmt) -> TinyResult<()> {
        self.line(&stmt.label())?;
        self.nested(&stmt.expr)
    }

    fn visit_read(&mut self, stmt: &Read) -> TinyResult<()> {
        self.line(&stmt.label())
    }

    fn visit_write(&mut self, stmt: &Write) -> TinyResult<()> {
        self.line(&stmt.label())?;
        self.nested(&stmt.expr)
    }

    fn visit_binary_operation(&mut self, binary_operation: &BinOp) -> TinyResult<()> {
        self.line(&binary_operation.label())?;
        self.nested(binary_operation.lhs.as_ref())?;
        self.nested(binary_operation.rhs.as_ref())
    }

    fn visit_const(&mut self, constant: &Const) -> TinyResult<()> {
        self.line(&constant.label())
    }

    fn visit_ident(&mut self, ident: &Ident) -> TinyResult<()> {
        self.line(&ident.label())
    }
}

/// Counts every node reachable from the root, the root included.
#[derive(Default)]
pub struct NodeCounter {
    pub count: usize,
}

impl NodeCounter {
    pub fn count(program: &Program) -> TinyResult<usize> {
        let mut counter = Self::default();
        program.accept(&mut counter)?;
        Ok(counter.count)
    }

    fn children(&mut self, node: &dyn Node) -> TinyResult<()> {
        self.count += 1;
        for child in node.children() {
            child.accept(self)?;
        }
        Ok(())
    }
}

impl AstVisitor for NodeCounter {
    fn visit_program(&mut self, program: &Program) -> TinyResult<()> {
        self.children(program)
    }
    fn visit_if(&mut self, stmt: &IfStmt) -> TinyResult<()> {
        self.children(stmt)
    }
    fn visit_repeat(&mut self, stmt: &RepeatStmt) -> TinyResult<()> {
        self.children(stmt)
    }
    fn visit_assign(&mut self, stmt: &AssignStmt) -> TinyResult<()> {
        self.children(stmt)
    }
    fn visit_read(&mut self, stmt: &Read) -> TinyResult<()> {
        self.children(stmt)
    }
    fn visit_write(&mut self, stmt: &Write) -> TinyResult<()> {
        self.children(stmt)
    }
    fn visit_binary_operation(&mut self, binary_operation: &BinOp) -> TinyResult<()> {
        self.children(binary_operation)
    }
    fn visit_const(&mut self, constant: &Const) -> TinyResult<()> {
        self.children(constant)
    }
    fn visit_ident(&mut self, ident: &Ident) -> TinyResult<()> {
        self.children(ident)
    }
}
