// Abstract Syntax Tree definitions for the TINY front end
// This module contains all AST node types and related traits.

mod traits;
pub use traits::{Node, NodeKind};

// AST node modules
mod program;
mod statements;
mod expressions;
mod literals;
mod io;

pub use program::Program;
pub use statements::{AssignStmt, IfStmt, RepeatStmt, Statement};
pub use expressions::{BinOp, Expression, Operator};
pub use literals::{Const, Ident};
pub use io::{Read, Write};
