use godecl_parser::lexer::{tokenize, Lexer, Tok};

fn injected_semis(input: &str) -> Vec<usize> {
    Lexer::new(input)
        .filter(|&(s, t, e)| t == Tok::Semi && s == e)
        .map(|(s, _, _)| s)
        .collect()
}

/// Token kinds as Go's scanner tests spell them; comments are not tokens.
fn lex_names(input: &str) -> String {
    let (toks, _) = tokenize(input);
    toks.iter()
        .map(|(_, t, _)| t.symbol())
        .collect::<Vec<_>>()
        .join(" ")
}

#[rustfmt::skip]
const SEMICOLON_TESTS: &[(&str, &str)] = &[
    ("", ""),
    ("\u{FEFF};", ";"),
    (";", ";"),

    ("foo\n", "IDENT ;"),
    ("123\n", "INT ;"),
    ("1.2\n", "FLOAT ;"),
    ("2i\n", "IMAG ;"),
    ("'x'\n", "CHAR ;"),
    ("\"x\"\n", "STRING ;"),
    ("`x`\n", "STRING ;"),

    ("+\n", "+"),
    ("*\n", "*"),
    ("&^\n", "&^"),
    ("+=\n", "+="),
    ("&^=\n", "&^="),
    ("<-\n", "<-"),
    ("++\n", "++ ;"),
    ("--\n", "-- ;"),
    (":=\n", ":="),
    ("...\n", "..."),

    ("(\n", "("),
    ("[\n", "["),
    ("{\n", "{"),
    (",\n", ","),
    (")\n", ") ;"),
    ("]\n", "] ;"),
    ("}\n", "} ;"),
    (";\n", ";"),

    ("break\n", "break ;"),
    ("continue\n", "continue ;"),
    ("fallthrough\n", "fallthrough ;"),
    ("return\n", "return ;"),
    ("func\n", "func"),
    ("var\n", "var"),
    ("chan\n", "chan"),

    ("foo//comment\n", "IDENT ;"),
    ("foo//comment", "IDENT ;"),
    ("foo/*comment*/\n", "IDENT ;"),
    ("foo/*\n*/", "IDENT ;"),
    ("foo    /*\n*/    ", "IDENT ;"),

    ("var (\n\tx int\n\ty string\n)", "var ( IDENT IDENT ; IDENT IDENT ; ) ;"),
    ("func Foo() {\n\treturn /* */ }\n", "func IDENT ( ) { return } ;"),
    ("x := 1", "IDENT := INT ;"),
];

#[test]
fn semicolons_like_go_scanner() {
    for &(input, want) in SEMICOLON_TESTS {
        assert_eq!(lex_names(input), want, "input={input:?}");

        // Trailing newlines never change the token stream.
        let trimmed = input.trim_end_matches('\n');
        assert_eq!(lex_names(trimmed), want, "input={trimmed:?}");
    }
}

#[test]
fn crlf_is_one_line_break() {
    assert_eq!(injected_semis("x\r\ny"), vec![1, 4]);
}

#[test]
fn block_comment_with_cr_acts_like_newline() {
    assert_eq!(injected_semis("x/*\r*/y"), vec![3, 7]);
}

#[test]
fn block_comment_newline_does_not_insert_after_if() {
    assert_eq!(injected_semis("if/*\n*/x"), vec![8]);
}

#[test]
fn line_comment_at_eof() {
    let src = "x//c";
    assert_eq!(injected_semis(src), vec![src.len()]);
}

#[test]
fn line_comment_before_crlf() {
    let src = "x//c\r\ny";
    let cr_pos = src.find('\r').unwrap();
    assert_eq!(injected_semis(src), vec![cr_pos, src.len()]);
}

#[test]
fn branch_keywords_end_statements() {
    assert_eq!(injected_semis("break\nx"), vec![5, 7]);
    assert_eq!(injected_semis("fallthrough\nx"), vec![11, 13]);
}

#[test]
fn inc_dec_and_imaginary_end_statements() {
    assert_eq!(injected_semis("x++\ny"), vec![3, 5]);
    assert_eq!(injected_semis("1i\nx"), vec![2, 4]);
}

#[test]
fn operator_at_line_end_continues_expression() {
    assert_eq!(injected_semis("a +\nb"), vec![5]);
}
