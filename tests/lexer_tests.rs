use tinyc::errors::{Stage, TinyError, TinyResult};
use tinyc::frontend::lexer::{scan, Lexer};
use tinyc::frontend::token::{Token, TokenKind};

fn reserved(lexeme: &str) -> Token {
    Token::new(lexeme, TokenKind::ReservedWord)
}

fn ident(lexeme: &str) -> Token {
    Token::new(lexeme, TokenKind::Identifier)
}

fn number(lexeme: &str) -> Token {
    Token::new(lexeme, TokenKind::Number)
}

fn symbol(lexeme: &str) -> Token {
    Token::new(lexeme, TokenKind::SpecialSymbol)
}

fn assign() -> Token {
    Token::new(":=", TokenKind::AssignOp)
}

#[test]
fn test_number_literals() -> TinyResult<()> {
    let tokens = scan("123 456 0 999999")?;
    assert_eq!(
        tokens,
        vec![
            (number("123"), 1),
            (number("456"), 1),
            (number("0"), 1),
            (number("999999"), 1),
        ]
    );
    Ok(())
}

#[test]
fn test_reserved_words_and_identifiers() -> TinyResult<()> {
    let tokens = scan("if then else end repeat until read write iff x")?;
    let expected: Vec<(Token, usize)> = [
        "if", "then", "else", "end", "repeat", "until", "read", "write",
    ]
    .iter()
    .map(|word| (reserved(word), 1))
    .chain([(ident("iff"), 1), (ident("x"), 1)])
    .collect();
    assert_eq!(tokens, expected);
    Ok(())
}

#[test]
fn test_all_special_symbols() -> TinyResult<()> {
    let tokens = scan("+-*/=<();")?;
    let lexemes: Vec<&str> = tokens.iter().map(|(t, _)| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["+", "-", "*", "/", "=", "<", "(", ")", ";"]);
    assert!(tokens.iter().all(|(t, _)| t.kind == TokenKind::SpecialSymbol));
    Ok(())
}

#[test]
fn test_maximal_munch_without_whitespace() -> TinyResult<()> {
    let tokens = scan("x:=x1+23*(y)")?;
    assert_eq!(
        tokens,
        vec![
            (ident("x"), 1),
            (assign(), 1),
            (ident("x"), 1),
            (number("1"), 1),
            (symbol("+"), 1),
            (number("23"), 1),
            (symbol("*"), 1),
            (symbol("("), 1),
            (ident("y"), 1),
            (symbol(")"), 1),
        ]
    );
    Ok(())
}

#[test]
fn test_round_trip_scenario_tokens() -> TinyResult<()> {
    let tokens = scan("read x; if x < 10 then write x else write 0 end")?;
    assert_eq!(
        tokens,
        vec![
            (reserved("read"), 1),
            (ident("x"), 1),
            (symbol(";"), 1),
            (reserved("if"), 1),
            (ident("x"), 1),
            (symbol("<"), 1),
            (number("10"), 1),
            (reserved("then"), 1),
            (reserved("write"), 1),
            (ident("x"), 1),
            (reserved("else"), 1),
            (reserved("write"), 1),
            (number("0"), 1),
            (reserved("end"), 1),
        ]
    );
    Ok(())
}

#[test]
fn test_token_at_end_of_input_without_newline() -> TinyResult<()> {
    let tokens = scan("write x")?;
    assert_eq!(tokens, vec![(reserved("write"), 1), (ident("x"), 1)]);
    let tokens = scan("x := 1;")?;
    assert_eq!(tokens.last(), Some(&(symbol(";"), 1)));
    Ok(())
}

#[test]
fn test_single_line_comment() -> TinyResult<()> {
    let tokens = scan("read x; { read y; write 12 } write x")?;
    assert_eq!(
        tokens,
        vec![
            (reserved("read"), 1),
            (ident("x"), 1),
            (symbol(";"), 1),
            (reserved("write"), 1),
            (ident("x"), 1),
        ]
    );
    Ok(())
}

#[test]
fn test_multi_line_comment() -> TinyResult<()> {
    let source = "
read x; { This is a
multi-line :
comment with @ and := inside } x := 1
";
    let tokens = scan(source)?;
    assert_eq!(
        tokens,
        vec![
            (reserved("read"), 2),
            (ident("x"), 2),
            (symbol(";"), 2),
            (ident("x"), 4),
            (assign(), 4),
            (number("1"), 4),
        ]
    );
    Ok(())
}

#[test]
fn test_comment_ends_identifier() -> TinyResult<()> {
    let tokens = scan("abc{comment}def")?;
    assert_eq!(tokens, vec![(ident("abc"), 1), (ident("def"), 1)]);
    Ok(())
}

#[test]
fn test_unterminated_comment() -> TinyResult<()> {
    let result = scan("read x;\n{ never closed\nwrite x");
    if let Err(TinyError::UnterminatedComment { line }) = result {
        assert_eq!(line, 2);
        Ok(())
    } else {
        panic!("Expected an UnterminatedComment error, but got: {:?}", result);
    }
}

#[test]
fn test_invalid_character() -> TinyResult<()> {
    let result = scan("read x;\nwrite @");
    if let Err(TinyError::UnknownCharacter { character, line }) = result {
        assert_eq!(character, '@');
        assert_eq!(line, 2);
        Ok(())
    } else {
        panic!("Expected an UnknownCharacter error, but got: {:?}", result);
    }
}

#[test]
fn test_scanning_stops_at_first_error() {
    let result = scan("read x # y;\nwrite @\nx : 1");
    assert!(matches!(
        result,
        Err(TinyError::UnknownCharacter { character: '#', line: 1 })
    ));
    let result = Lexer::new().scan_lines(["x : 1", "write @"]);
    assert!(matches!(result, Err(TinyError::LexerError { line: 1, .. })));
}

#[test]
fn test_uppercase_letters_are_rejected() {
    let result = scan("Read x");
    assert!(matches!(
        result,
        Err(TinyError::UnknownCharacter { character: 'R', line: 1 })
    ));
}

#[test]
fn test_lone_colon_is_an_error() -> TinyResult<()> {
    let result = scan("x := 1;\n\ny : 2");
    match result {
        Err(error @ TinyError::LexerError { .. }) => {
            assert_eq!(error.line(), Some(3));
            assert_eq!(error.stage(), Stage::Lexing);
            Ok(())
        }
        other => panic!("Expected a LexerError for a lone ':', but got: {:?}", other),
    }
}

#[test]
fn test_colon_at_end_of_line_is_an_error() {
    let result = scan("x :\n= 1");
    assert!(matches!(result, Err(TinyError::LexerError { line: 1, .. })));
}

#[test]
fn test_line_numbers_follow_newlines() -> TinyResult<()> {
    let tokens = scan("read x;\n\nwrite\nx")?;
    let lines: Vec<usize> = tokens.iter().map(|(_, line)| *line).collect();
    assert_eq!(lines, vec![1, 1, 1, 3, 4]);
    Ok(())
}

#[test]
fn test_scan_lines_matches_scan() -> TinyResult<()> {
    let lines = ["repeat", "  x := x - 1", "until x = 0"];
    let from_lines = Lexer::new().scan_lines(lines)?;
    let from_source = scan(&lines.join("\n"))?;
    assert_eq!(from_lines, from_source);
    assert_eq!(from_lines.len(), 10);
    Ok(())
}

#[test]
fn test_whitespace_and_empty_input() -> TinyResult<()> {
    assert!(scan("")?.is_empty());
    assert!(scan(" \t\r\n\n  ")?.is_empty());
    assert!(scan("{ only a comment }")?.is_empty());
    Ok(())
}

#[test]
fn test_token_listing_format() {
    assert_eq!(reserved("if").to_string(), "if : reserved word");
    assert_eq!(ident("x").to_string(), "x : identifier");
    assert_eq!(number("7").to_string(), "7 : number");
    assert_eq!(symbol(";").to_string(), "; : special symbol");
    assert_eq!(assign().to_string(), ":= : assignment");
}
