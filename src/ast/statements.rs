use crate::ast::{Expression, Node, NodeKind, Read, Write};
use crate::errors::TinyResult;
use crate::visiters::AstVisitor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignStmt {
    pub identifier: String,
    pub expr: Expression,
}

impl AssignStmt {
    pub fn new(identifier: impl Into<String>, expr: Expression) -> Self {
        Self {
            identifier: identifier.into(),
            expr,
        }
    }
}

impl Node for AssignStmt {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> TinyResult<()> {
        visitor.visit_assign(self)
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Assign
    }
    fn label(&self) -> String {
        format!("Assign({})", self.identifier)
    }
    fn value(&self) -> Option<String> {
        Some(self.identifier.clone())
    }
    fn children(&self) -> Vec<&dyn Node> {
        vec![&self.expr]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    pub condition: Expression,
    pub then_branch: Vec<Statement>,
    pub else_branch: Option<Vec<Statement>>,
}

impl IfStmt {
    pub fn new(
        condition: Expression,
        then_branch: Vec<Statement>,
        else_branch: Option<Vec<Statement>>,
    ) -> Self {
        Self {
            condition,
            then_branch,
            else_branch,
        }
    }
}

impl Node for IfStmt {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> TinyResult<()> {
        visitor.visit_if(self)
    }
    fn kind(&self) -> NodeKind {
        NodeKind::If
    }
    fn label(&self) -> String {
        "If".to_string()
    }
    fn children(&self) -> Vec<&dyn Node> {
        let mut children: Vec<&dyn Node> = vec![&self.condition];
        children.extend(self.then_branch.iter().map(|stmt| stmt as &dyn Node));
        if let Some(else_branch) = &self.else_branch {
            children.extend(else_branch.iter().map(|stmt| stmt as &dyn Node));
        }
        children
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatStmt {
    pub body: Vec<Statement>,
    pub condition: Expression,
}

impl RepeatStmt {
    pub fn new(body: Vec<Statement>, condition: Expression) -> Self {
        Self { body, condition }
    }
}

impl Node for RepeatStmt {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> TinyResult<()> {
        visitor.visit_repeat(self)
    }
    fn kind(&self) -> NodeKind {
        NodeKind::Repeat
    }
    fn label(&self) -> String {
        "Repeat".to_string()
    }
    fn children(&self) -> Vec<&dyn Node> {
        let mut children: Vec<&dyn Node> =
            self.body.iter().map(|stmt| stmt as &dyn Node).collect();
        children.push(&self.condition);
        children
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    If(IfStmt),
    Repeat(RepeatStmt),
    Assign(AssignStmt),
    Read(Read),
    Write(Write),
}

impl Statement {
    fn inner(&self) -> &dyn Node {
        match self {
            Statement::If(node) => node,
            Statement::Repeat(node) => node,
            Statement::Assign(node) => node,
            Statement::Read(node) => node,
            Statement::Write(node) => node,
        }
    }
}

impl Node for Statement {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> TinyResult<()> {
        self.inner().accept(visitor)
    }
    fn kind(&self) -> NodeKind {
        self.inner().kind()
    }
    fn label(&self) -> String {
        self.inner().label()
    }
    fn value(&self) -> Option<String> {
        self.inner().value()
    }
    fn children(&self) -> Vec<&dyn Node> {
        self.inner().children()
    }
}
