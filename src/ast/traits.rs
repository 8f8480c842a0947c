/*
*                    tinyc -- TINY front end.
*
* stmt-sequence = statement { ";" statement } ;
* statement     = if-stmt | repeat-stmt | assign-stmt | read-stmt | write-stmt ;
* if-stmt       = "if" exp "then" stmt-sequence [ "else" stmt-sequence ] "end" ;
* repeat-stmt   = "repeat" stmt-sequence "until" exp ;
* assign-stmt   = identifier ":=" exp ;
* read-stmt     = "read" identifier ;
* write-stmt    = "write" exp ;
* exp           = simple-exp [ ( "<" | "=" ) simple-exp ] ;
* simple-exp    = term { ( "+" | "-" ) term } ;
* term          = factor { ( "*" | "/" ) factor } ;
* factor        = "(" exp ")" | number | identifier ;
*/

use crate::errors::TinyResult;
use crate::visiters::AstVisitor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    If,
    Repeat,
    Assign,
    Read,
    Write,
    BinaryOp,
    Const,
    Id,
}

impl NodeKind {
    pub fn is_expression(self) -> bool {
        matches!(self, NodeKind::BinaryOp | NodeKind::Const | NodeKind::Id)
    }

    /// Word a drawn syntax tree uses for this kind of node.
    pub fn keyword(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::If => "If",
            NodeKind::Repeat => "Repeat",
            NodeKind::Assign => "Assign",
            NodeKind::Read => "Read",
            NodeKind::Write => "Write",
            NodeKind::BinaryOp => "OP",
            NodeKind::Const => "const",
            NodeKind::Id => "Id",
        }
    }
}

/// Read-only view shared by every AST node.
pub trait Node {
    fn accept(&self, visitor: &mut dyn AstVisitor) -> TinyResult<()>;
    fn kind(&self) -> NodeKind;
    fn label(&self) -> String;
    /// Identifier, operator or literal the node carries, if any.
    fn value(&self) -> Option<String> {
        None
    }
    /// Children in source order.
    fn children(&self) -> Vec<&dyn Node>;
}
