//! Integration tests for the lexer and the `cminus-lex` binary.
//!
//! These tests drive the public API the way a parser would, and run the
//! binary against files on disk to check the printed report.

use cminus_lexer::lexer::{
    lexer::{tokenize, Lexer, LexerOptions},
    report::write_report,
    tokens::TokenKind,
};
use std::{fs, path::PathBuf, process::Command};

const PROGRAM: &str = "\
/* gcd of two integers */
int gcd(int u, int v)
{
    if (v == 0) return u;
    else return gcd(v, u - u / v * v);
}

void main(void)
{
    int x; int y[10];
    x = input();
    while (x <= 10) { y[x] = x; x = x + 1; }
    output(gcd(x, y[2]));
}
";

fn write_fixture(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("cminus_lexer_tests");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_tokenize_program_like_a_parser() {
    let tokens = tokenize(PROGRAM.to_string(), Some("gcd.cm".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[1].value, "gcd");
    assert!(tokens.iter().all(|token| !token.is_error()));
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);

    let keywords = tokens.iter().filter(|token| token.kind.is_reserved()).count();
    // int int int if return else return void void int int while
    assert_eq!(keywords, 12);
}

#[test]
fn test_streaming_matches_batch() {
    let batch = tokenize(PROGRAM.to_string(), None).unwrap();

    let mut lexer = Lexer::for_reader(PROGRAM.as_bytes(), LexerOptions::default());
    let mut streamed = Vec::new();
    loop {
        let token = lexer.next_token().unwrap();
        let done = token.is_eof();
        streamed.push(token);
        if done {
            break;
        }
    }

    assert_eq!(streamed.len(), batch.len());
    for (left, right) in streamed.iter().zip(batch.iter()) {
        assert_eq!(left.kind, right.kind);
        assert_eq!(left.value, right.value);
    }
}

#[test]
fn test_report_for_worked_example() {
    let mut lexer = Lexer::for_str(
        "int x; /* set */ x = 10; if (x >= 5) return x;",
        LexerOptions::default(),
    );
    let mut out = Vec::new();
    write_report(&mut lexer, &mut out).unwrap();

    let expected = "\
Token: INT        | Lexeme: int
Token: ID         | Lexeme: x
Token: SEMI       | Lexeme: ;
Token: ID         | Lexeme: x
Token: ASSIGN     | Lexeme: =
Token: NUM        | Lexeme: 10
Token: SEMI       | Lexeme: ;
Token: IF         | Lexeme: if
Token: LPAREN     | Lexeme: (
Token: ID         | Lexeme: x
Token: GE         | Lexeme: >=
Token: NUM        | Lexeme: 5
Token: RPAREN     | Lexeme: )
Token: RETURN     | Lexeme: return
Token: ID         | Lexeme: x
Token: SEMI       | Lexeme: ;
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_binary_prints_report() {
    let path = write_fixture("report.cm", "a ! b != c\n");

    let output = Command::new(env!("CARGO_BIN_EXE_cminus-lex"))
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "\
Token: ID         | Lexeme: a
Token: ERROR      | Lexeme: !
Token: ID         | Lexeme: b
Token: NE         | Lexeme: !=
Token: ID         | Lexeme: c
"
    );
}

#[test]
fn test_binary_unterminated_comment() {
    let path = write_fixture("open_comment.cm", "int x;\nx = 1; /* open\n");

    let lenient = Command::new(env!("CARGO_BIN_EXE_cminus-lex"))
        .arg(&path)
        .output()
        .unwrap();
    assert!(lenient.status.success());
    assert_eq!(String::from_utf8(lenient.stdout).unwrap().lines().count(), 7);

    let strict = Command::new(env!("CARGO_BIN_EXE_cminus-lex"))
        .arg("--strict-comments")
        .arg(&path)
        .output()
        .unwrap();
    assert!(!strict.status.success());
    let stderr = String::from_utf8(strict.stderr).unwrap();
    assert!(stderr.contains("Error: UnterminatedComment"));
    assert!(stderr.contains("2 | x = 1; /* open"));
}

#[test]
fn test_binary_missing_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_cminus-lex"))
        .arg("/definitely/not/here.cm")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("Failed to open file"));
}
