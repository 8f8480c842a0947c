use crate::ast::AssignStmt;
use crate::ast::BinOp;
use crate::ast::Const;
use crate::ast::Ident;
use crate::ast::IfStmt;
use crate::ast::Program;
use crate::ast::Read;
use crate::ast::RepeatStmt;
use crate::ast::Write;
use crate::errors::TinyResult;

pub trait AstVisitor {
    fn visit_program(&mut self, program: &Program) -> TinyResult<()>;
    fn visit_if(&mut self, stmt: &IfStmt) -> TinyResult<()>;
    fn visit_repeat(&mut self, stmt: &RepeatStmt) -> TinyResult<()>;
    fn visit_assign(&mut self, stmt: &AssignStmt) -> TinyResult<()>;
    fn visit_read(&mut self, stmt: &Read) -> TinyResult<()>;
    fn visit_write(&mut self, stmt: &Write) -> TinyResult<()>;
    fn visit_binary_operation(&mut self, binary_operation: &BinOp) -> TinyResult<()>;
    fn visit_const(&mut self, constant: &Const) -> TinyResult<()>;
    fn visit_ident(&mut self, ident: &Ident) -> TinyResult<()>;
}
