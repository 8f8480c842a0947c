use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod config;
pub mod errors;
pub mod frontend;
pub mod printer;
pub mod render;
pub mod visiters;

use crate::ast::Program;
use crate::config::cli::SOURCE_EXTENSIONS;
use crate::errors::{TinyError, TinyResult};
use crate::frontend::{lexer, parser};

/// Scans and parses TINY source text in one go.
pub fn parse(source: &str) -> TinyResult<Program> {
    let tokens = lexer::scan(source)?;
    parser::parse_tokens(&tokens)
}

pub fn read(path: &Path) -> TinyResult<String> {
    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext));
    if !accepted {
        return Err(TinyError::FileReadError(format!(
            "{} must have one of the extensions {:?}",
            path.display(),
            SOURCE_EXTENSIONS
        )));
    }
    // Open the path in read-only mode, returns `io::Result<File>`
    let mut file = File::open(path)?;
    // Read the file contents into a string, returns `io::Result<usize>`
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}
