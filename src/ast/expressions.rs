use crate::ast::{Const, Ident, Node, NodeKind};
use crate::errors::TinyResult;
use crate::visiters::AstVisitor;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    LessThan,
    Equal,
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "<" => Some(Operator::LessThan),
            "=" => Some(Operator::Equal),
            "+" => Some(Operator::Plus),
            "-" => Some(Operator::Minus),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::LessThan => "<",
            Operator::Equal => "=",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinOp {
    pub op: Operator,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
}

impl BinOp {
    pub fn new(op: Operator, lhs: Expression, rhs: Expression) -> Self {
        Self {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

impl Node for BinOp {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> TinyResult<()> {
        visitor.visit_binary_operation(self)
    }
    fn kind(&self) -> NodeKind {
        NodeKind::BinaryOp
    }
    fn label(&self) -> String {
        format!("Op({})", self.op)
    }
    fn value(&self) -> Option<String> {
        Some(self.op.symbol().to_string())
    }
    fn children(&self) -> Vec<&dyn Node> {
        vec![self.lhs.as_ref(), self.rhs.as_ref()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    BinOp(BinOp),
    Const(Const),
    Ident(Ident),
}

impl Expression {
    fn inner(&self) -> &dyn Node {
        match self {
            Expression::BinOp(node) => node,
            Expression::Const(node) => node,
            Expression::Ident(node) => node,
        }
    }
}

impl From<BinOp> for Expression {
    fn from(node: BinOp) -> Self {
        Expression::BinOp(node)
    }
}

impl From<Const> for Expression {
    fn from(node: Const) -> Self {
        Expression::Const(node)
    }
}

impl From<Ident> for Expression {
    fn from(node: Ident) -> Self {
        Expression::Ident(node)
    }
}

impl Node for Expression {
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
