use crate::ast::{Expression, Node, NodeKind};
use crate::errors::TinyResult;
use crate::visiters::AstVisitor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Write {
    pub expr: Expression,
}

impl Write {
    pub fn new(expr: Expression) -> Self {
        Self { expr }
    }
}

impl Node for Write {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> TinyResult<()> {
        visitor.visit_write(self)
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Write
    }
    fn label(&self) -> String {
        "Write".to_string()
    }
    fn children(&self) -> Vec<&dyn Node> {
        vec![&self.expr]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Read {
    pub identifier: String,
}

impl Read {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

impl Node for Read {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> TinyResult<()> {
        visitor.visit_read(self)
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Read
    }
    fn label(&self) -> String {
        format!("Read({})", self.identifier)
    }
    fn value(&self) -> Option<String> {
        Some(self.identifier.clone())
    }
    fn children(&self) -> Vec<&dyn Node> {
        Vec::new()
    }
}
