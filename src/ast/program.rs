use crate::ast::{Node, NodeKind, Statement};
use crate::errors::TinyResult;
use crate::visiters::AstVisitor;

/// Root of every parsed TINY program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub stmts: Vec<Statement>,
}

impl Program {
    pub fn new(stmts: Vec<Statement>) -> Self {
        Self { stmts }
    }
}

impl Node for Program {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> TinyResult<()> {
        visitor.visit_program(self)
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Program
    }
    fn label(&self) -> String {
        "Program".to_string()
    }
    fn children(&self) -> Vec<&dyn Node> {
        self.stmts.iter().map(|stmt| stmt as &dyn Node).collect()
    }
}
