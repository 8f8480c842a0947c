use crate::ast::{Node, NodeKind};
use crate::errors::TinyResult;
use crate::visiters::AstVisitor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Node for Ident {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> TinyResult<()> {
        visitor.visit_ident(self)
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Id
    }
    fn label(&self) -> String {
        format!("Id({})", self.name)
    }
    fn value(&self) -> Option<String> {
        Some(self.name.clone())
    }
    fn children(&self) -> Vec<&dyn Node> {
        Vec::new()
    }
}

/// Numeric literal, kept as the digits that were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Const {
    pub value: String,
}

impl Const {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl Node for Const {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> TinyResult<()> {
        visitor.visit_const(self)
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Const
    }
    fn label(&self) -> String {
        format!("Const({})", self.value)
    }
    fn value(&self) -> Option<String> {
        Some(self.value.clone())
    }
    fn children(&self) -> Vec<&dyn Node> {
        Vec::new()
    }
}
