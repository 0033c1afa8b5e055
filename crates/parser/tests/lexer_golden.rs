use godecl_parser::error::{Diag, LexErrorKind};
use godecl_parser::lexer::{tokenize, Tok};

fn lex_all(input: &str) -> (Vec<(usize, Tok<'_>, usize)>, Vec<Diag>) {
    tokenize(input)
}

/// Token stream without spans; literals keep their text.
fn texts(input: &str) -> Vec<String> {
    let (toks, diags) = lex_all(input);
    assert!(diags.is_empty(), "input={input:?} diags={diags:?}");
    toks.iter().map(|(_, t, _)| t.to_string()).collect()
}

fn first_diag(input: &str) -> Diag {
    let (_, diags) = lex_all(input);
    diags
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("expected a diagnostic for {input:?}"))
}

#[test]
fn declaration_token_stream() {
    assert_eq!(
        texts("var x *[]map[int][2]string"),
        ["var", "x", "*", "[", "]", "map", "[", "int", "]", "[", "2", "]", "string", ";"]
    );
}

#[test]
fn signature_token_stream() {
    assert_eq!(
        texts("func(a ...int) (<-chan T, error)"),
        ["func", "(", "a", "...", "int", ")", "(", "<-", "chan", "T", ",", "error", ")", ";"]
    );
}

#[test]
fn literal_kinds() {
    let (toks, diags) = lex_all("0x1F 1.5e3 3i 'a' \"s\\n\" `raw`");
    assert!(diags.is_empty(), "{diags:?}");
    let kinds: Vec<_> = toks.iter().map(|(_, t, _)| t.symbol()).collect();
    assert_eq!(kinds, ["INT", "FLOAT", "IMAG", "CHAR", "STRING", "STRING", ";"]);
}

#[test]
fn spans_cover_source_text() {
    let src = "x := \"héllo\"";
    let (toks, _) = lex_all(src);
    let (s, t, e) = toks[2];
    assert_eq!(&src[s..e], "\"héllo\"");
    assert_eq!(t, Tok::StringLit("\"héllo\""));
}

#[test]
fn unicode_identifiers() {
    assert_eq!(texts("ñame := π"), ["ñame", ":=", "π", ";"]);
}

#[test]
fn longest_operator_wins() {
    assert_eq!(texts("a &^= b<<=c"), ["a", "&^=", "b", "<<=", "c", ";"]);
    assert_eq!(texts("x...y"), ["x", "...", "y", ";"]);
    assert_eq!(texts(".5"), [".5", ";"]);
}

#[test]
fn bom_only_at_start() {
    assert_eq!(texts("\u{FEFF}x"), ["x", ";"]);

    let (toks, diags) = lex_all("x\u{FEFF}");
    assert!(!diags.is_empty());
    assert!(toks.iter().any(|(_, t, _)| *t == Tok::Error));
}

#[test]
fn malformed_numbers() {
    for src in ["09", "0x", "1__0", "0b102", "1e"] {
        let diag = first_diag(src);
        assert_eq!(diag.message, LexErrorKind::InvalidNumber.to_string(), "{src}");
        assert_eq!(diag.span.start, 0, "{src}");
    }
    // Decimal imaginary literals may have leading zeros.
    assert_eq!(texts("0789i"), ["0789i", ";"]);
}

#[test]
fn bad_escapes() {
    for src in [r#""\q""#, r#""\x4""#, r#""\400""#, r#""\uD800""#, r"'\z'"] {
        assert_eq!(
            first_diag(src).message,
            LexErrorKind::InvalidEscape.to_string(),
            "{src}"
        );
    }
    assert_eq!(texts(r#""\x41é\U0001F600\101""#).len(), 2);
}

#[test]
fn multi_char_rune_is_invalid() {
    assert_eq!(first_diag("'ab'").message, LexErrorKind::InvalidToken.to_string());
}

#[test]
fn unterminated_block_comment() {
    let (toks, diags) = lex_all("x/*");
    assert_eq!(toks[0].1, Tok::Ident("x"));
    assert!(toks.iter().any(|(_, t, _)| *t == Tok::Error), "{toks:?}");
    assert_eq!(diags[0].message, LexErrorKind::UnterminatedComment.to_string());
}

#[test]
fn stray_character_is_reported_and_skipped() {
    let (toks, diags) = lex_all("a @ b");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].span.start, 2);
    assert_eq!(toks.last().map(|t| t.1), Some(Tok::Semi));
}
