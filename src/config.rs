// Lexer character classes and word sets
pub mod lexer {
    pub const RESERVED_WORDS: [&str; 8] = [
        "if", "then", "else", "end", "repeat", "until", "read", "write",
    ];
    pub const SPECIAL_SYMBOLS: [char; 9] = ['+', '-', '*', '/', '=', '<', '(', ')', ';'];

    pub const COMMENT_OPEN: char = '{';
    pub const COMMENT_CLOSE: char = '}';
    pub const ASSIGN_PREFIX: char = ':';
    pub const ASSIGN_SUFFIX: char = '=';
    pub const ASSIGN_OP: &str = ":=";

    // Only lowercase ASCII letters form identifiers
    pub fn is_letter(ch: char) -> bool {
        ch.is_ascii_lowercase()
    }

    pub fn is_digit(ch: char) -> bool {
        ch.is_ascii_digit()
    }

    pub fn is_special_symbol(ch: char) -> bool {
        SPECIAL_SYMBOLS.contains(&ch)
    }

    pub fn is_reserved_word(word: &str) -> bool {
        RESERVED_WORDS.contains(&word)
    }
}

// Parser vocabulary
pub mod parser {
    pub const STATEMENT_SEPARATOR: &str = ";";
    pub const RELATIONAL_OPERATORS: [&str; 2] = ["<", "="];
    pub const ADDITIVE_OPERATORS: [&str; 2] = ["+", "-"];
    pub const MULTIPLICATIVE_OPERATORS: [&str; 2] = ["*", "/"];
    pub const END_OF_INPUT: &str = "end of input";
    // Deepest nesting of statements and parentheses the parser descends into
    pub const MAX_NESTING: usize = 200;
}

// Command line defaults
pub mod cli {
    pub const SOURCE_EXTENSIONS: [&str; 2] = ["tiny", "txt"];
    pub const DOT_EXTENSION: &str = "dot";
    pub const DOT_GRAPH_NAME: &str = "syntax_tree";
}
