use crate::error::{Diag, LexError, LexErrorKind, Span};
use logos::{Lexer as LogosLexer, Logos};
use std::fmt;
use std::ops::Range;

// =============================================================================
// 0. Byte classification
// =============================================================================

#[inline(always)]
pub const fn is_dec_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline(always)]
pub const fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

#[inline(always)]
const fn is_oct_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

#[inline(always)]
const fn hex_value(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => (b - b'0') as u32,
        b'a'..=b'f' => (b - b'a' + 10) as u32,
        b'A'..=b'F' => (b - b'A' + 10) as u32,
        _ => 0,
    }
}

#[inline(always)]
const fn is_valid_unicode_scalar(x: u32) -> bool {
    x <= 0x10_FFFF && !(x >= 0xD800 && x <= 0xDFFF)
}

// =============================================================================
// 1. Comment scanners
// =============================================================================

/// Consumes a `/* ... */` comment after its opening delimiter.
fn lex_block_comment(lex: &mut LogosLexer<'_, RawTok>) -> Result<(), LexErrorKind> {
    let rem = lex.remainder().as_bytes();
    let mut from = 0;

    while let Some(star) = memchr::memchr(b'*', &rem[from..]) {
        let at = from + star;
        if rem.get(at + 1) == Some(&b'/') {
            lex.bump(at + 2);
            return Ok(());
        }
        from = at + 1;
    }

    lex.bump(rem.len());
    Err(LexErrorKind::UnterminatedComment)
}

/// Consumes a `//` comment up to, not including, the line break.
fn lex_line_comment(lex: &mut LogosLexer<'_, RawTok>) {
    let rem = lex.remainder().as_bytes();
    let end = memchr::memchr2(b'\n', b'\r', rem).unwrap_or(rem.len());
    lex.bump(end);
}

// =============================================================================
// 2. Escape sequences (strings and runes)
// =============================================================================

/// Validates the escape starting right after a backslash; returns its length.
fn escape_len(body: &[u8], quote: u8) -> Result<usize, LexErrorKind> {
    let &c = body.first().ok_or(LexErrorKind::InvalidEscape)?;

    let hex_digits = match c {
        b'a' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' | b'\\' => return Ok(1),
        _ if c == quote => return Ok(1),
        b'x' => 2,
        b'u' => 4,
        b'U' => 8,
        b'0'..=b'7' => {
            let oct = body.get(..3).ok_or(LexErrorKind::InvalidEscape)?;
            if !oct.iter().all(|&b| is_oct_digit(b)) {
                return Err(LexErrorKind::InvalidEscape);
            }
            let value = oct.iter().fold(0u32, |acc, &b| acc * 8 + u32::from(b - b'0'));
            return if value > 255 {
                Err(LexErrorKind::InvalidEscape)
            } else {
                Ok(3)
            };
        }
        _ => return Err(LexErrorKind::InvalidEscape),
    };

    let digits = body
        .get(1..1 + hex_digits)
        .ok_or(LexErrorKind::InvalidEscape)?;
    if !digits.iter().all(|&b| is_hex_digit(b)) {
        return Err(LexErrorKind::InvalidEscape);
    }
    let value = digits.iter().fold(0u32, |acc, &b| (acc << 4) | hex_value(b));
    if c != b'x' && !is_valid_unicode_scalar(value) {
        return Err(LexErrorKind::InvalidEscape);
    }
    Ok(1 + hex_digits)
}

fn validate_interpreted_string(lex: &mut LogosLexer<'_, RawTok>) -> Result<(), LexErrorKind> {
    let s = lex.slice().as_bytes();
    let body = s
        .get(1..s.len().saturating_sub(1))
        .ok_or(LexErrorKind::UnterminatedString)?;

    let mut i = 0;
    while let Some(off) = memchr::memchr(b'\\', &body[i..]) {
        let at = i + off + 1;
        i = at + escape_len(&body[at..], b'"')?;
    }
    Ok(())
}

fn validate_rune(lex: &mut LogosLexer<'_, RawTok>) -> Result<(), LexErrorKind> {
    let s = lex.slice();
    let body = s.get(1..s.len().saturating_sub(1)).unwrap_or("");

    let consumed = match body.as_bytes() {
        [b'\\', rest @ ..] => 1 + escape_len(rest, b'\'')?,
        _ => body.chars().next().map_or(0, char::len_utf8),
    };

    if consumed == 0 || consumed != body.len() {
        return Err(LexErrorKind::InvalidToken);
    }
    Ok(())
}

// =============================================================================
// 3. Numbers: maximal munch in the callback, validation in the wrapper
// =============================================================================

mod num {
    use super::*;

    fn prefix_base(lit: &[u8]) -> u32 {
        match lit {
            [b'0', p, ..] => match p | 0x20 {
                b'x' => 16,
                b'o' => 8,
                b'b' => 2,
                _ => 10,
            },
            _ => 10,
        }
    }

    /// Extends a number token to its maximal munch.
    ///
    /// Digits outside the base stay inside the token (`0b2`, `09`) so that
    /// they are rejected as one malformed literal by `classify`.
    pub(super) fn lex_number(lex: &mut LogosLexer<'_, RawTok>) {
        let src = lex.source().as_bytes();
        let start = lex.span().start;
        let base = prefix_base(&src[start..]);
        let mut i = start + if base == 10 { 0 } else { 2 };

        let digits = |mut i: usize| {
            while i < src.len()
                && (src[i] == b'_'
                    || if base == 16 {
                        is_hex_digit(src[i])
                    } else {
                        is_dec_digit(src[i])
                    })
            {
                i += 1;
            }
            i
        };

        i = digits(i);
        if src.get(i) == Some(&b'.') && src.get(i + 1) != Some(&b'.') {
            i = digits(i + 1);
        }
        if src.get(i).is_some_and(|&e| matches!(e | 0x20, b'e' | b'p')) {
            i += 1;
            if matches!(src.get(i), Some(b'+' | b'-')) {
                i += 1;
            }
            while i < src.len() && (is_dec_digit(src[i]) || src[i] == b'_') {
                i += 1;
            }
        }

        let already = lex.span().end;
        if i > already {
            lex.bump(i - already);
        }
    }

    fn underscores_ok(lit: &[u8], base: u32) -> bool {
        let digit = |b: u8| {
            if base == 16 {
                is_hex_digit(b)
            } else {
                is_dec_digit(b)
            }
        };
        lit.iter().enumerate().all(|(i, &b)| {
            if b != b'_' {
                return true;
            }
            let after_prefix = base != 10 && i == 2;
            let prev_ok = after_prefix || (i > 0 && digit(lit[i - 1]));
            let next_ok = lit.get(i + 1).is_some_and(|&n| digit(n));
            prev_ok && next_ok
        })
    }

    /// Validates a numeric literal; `Ok(true)` for floats, `Ok(false)` for ints.
    pub fn classify(lit: &[u8]) -> Result<bool, LexErrorKind> {
        const BAD: Result<bool, LexErrorKind> = Err(LexErrorKind::InvalidNumber);

        let base = prefix_base(lit);
        if !underscores_ok(lit, base) {
            return BAD;
        }
        let body = if base == 10 { lit } else { &lit[2..] };
        let in_base = |b: u8| match base {
            2 => matches!(b, b'0' | b'1'),
            8 => is_oct_digit(b),
            16 => is_hex_digit(b),
            _ => is_dec_digit(b),
        };

        let mut i = 0;
        let mut mantissa = 0;
        let mut run = |i: &mut usize| {
            while *i < body.len() && (in_base(body[*i]) || body[*i] == b'_') {
                mantissa += usize::from(body[*i] != b'_');
                *i += 1;
            }
        };

        run(&mut i);
        let mut float = false;
        if body.get(i) == Some(&b'.') {
            if base == 2 || base == 8 {
                return BAD;
            }
            float = true;
            i += 1;
            run(&mut i);
        }
        if mantissa == 0 {
            return BAD;
        }

        let exp_char = if base == 16 { b'p' } else { b'e' };
        match body.get(i) {
            Some(&e) if base >= 10 && e | 0x20 == exp_char => {
                float = true;
                i += 1;
                if matches!(body.get(i), Some(b'+' | b'-')) {
                    i += 1;
                }
                let exp_start = i;
                while i < body.len() && (is_dec_digit(body[i]) || body[i] == b'_') {
                    i += 1;
                }
                if !body[exp_start..i].iter().any(|&b| is_dec_digit(b)) {
                    return BAD;
                }
            }
            _ if base == 16 && float => return BAD,
            _ => {}
        }

        if i != body.len() {
            return BAD;
        }

        // Legacy octal: a leading zero without fraction or exponent.
        let legacy_octal = base == 10 && !float && lit.len() > 1 && lit[0] == b'0';
        if legacy_octal && !lit.iter().all(|&b| is_oct_digit(b) || b == b'_') {
            return BAD;
        }

        Ok(float)
    }
}

// =============================================================================
// 4. Raw tokens (logos)
// =============================================================================

#[repr(u8)]
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\f]+")]
#[rustfmt::skip]
enum RawTok {
    #[token("\u{FEFF}")] Bom,

    // Trivia
    #[regex(r"\r\n|\n|\r")] Newline,
    #[token("//", lex_line_comment)] LineComment,
    #[token("/*", lex_block_comment)] BlockComment,

    // Keywords (before Ident)
    #[token("break")] KwBreak,
    #[token("case")] KwCase,
    #[token("chan")] KwChan,
    #[token("const")] KwConst,
    #[token("continue")] KwContinue,
    #[token("default")] KwDefault,
    #[token("defer")] KwDefer,
    #[token("else")] KwElse,
    #[token("fallthrough")] KwFallthrough,
    #[token("for")] KwFor,
    #[token("func")] KwFunc,
    #[token("go")] KwGo,
    #[token("goto")] KwGoto,
    #[token("if")] KwIf,
    #[token("import")] KwImport,
    #[token("interface")] KwInterface,
    #[token("map")] KwMap,
    #[token("package")] KwPackage,
    #[token("range")] KwRange,
    #[token("return")] KwReturn,
    #[token("select")] KwSelect,
    #[token("struct")] KwStruct,
    #[token("switch")] KwSwitch,
    #[token("type")] KwType,
    #[token("var")] KwVar,

    #[regex(r"[_\p{L}][_\p{L}\p{Nd}]*")] Ident,

    #[regex(r"[0-9]|\.[0-9]", num::lex_number)] Number,

    #[regex(r"`[^`]*`")] RawString,
    #[regex(r#""([^"\\\n\r]|\\.)*""#, validate_interpreted_string)] String,
    #[regex(r"'([^'\\\n\r]|\\.)+'", validate_rune)] Rune,

    // Operators
    #[token("...")] Ellipsis,
    #[token("<<=")] ShlAssign,
    #[token(">>=")] ShrAssign,
    #[token("&^=")] AndNotAssign,
    #[token("+=")] AddAssign,
    #[token("-=")] SubAssign,
    #[token("*=")] MulAssign,
    #[token("/=")] DivAssign,
    #[token("%=")] ModAssign,
    #[token("&=")] AndAssign,
    #[token("|=")] OrAssign,
    #[token("^=")] XorAssign,
    #[token("<<")] Shl,
    #[token(">>")] Shr,
    #[token("&^")] AndNot,
    #[token("&&")] LAnd,
    #[token("||")] LOr,
    #[token("==")] EqEq,
    #[token("!=")] NotEq,
    #[token("<=")] Le,
    #[token(">=")] Ge,
    #[token("++")] Inc,
    #[token("--")] Dec,
    #[token(":=")] Define,
    #[token("<-")] Arrow,
    #[token("=")] Assign,
    #[token("+")] Plus,
    #[token("-")] Minus,
    #[token("*")] Star,
    #[token("/")] Slash,
    #[token("%")] Percent,
    #[token("&")] Amp,
    #[token("|")] Pipe,
    #[token("^")] Caret,
    #[token("~")] Tilde,
    #[token("!")] Bang,
    #[token("<")] Lt,
    #[token(">")] Gt,

    // Delimiters
    #[token("(")] LParen,
    #[token(")")] RParen,
    #[token("[")] LBrack,
    #[token("]")] RBrack,
    #[token("{")] LBrace,
    #[token("}")] RBrace,
    #[token(",")] Comma,
    #[token(";")] Semi,
    #[token(":")] Colon,
    #[token(".")] Dot,
}

// =============================================================================
// 5. Lookup tables
// =============================================================================

macro_rules! gen_lookup_table {
    ($size:expr, $($variant:ident),* $(,)?) => {{
        let mut table = [false; $size];
        $(table[RawTok::$variant as usize] = true;)*
        table
    }};
}

/// Tokens after which a line break ends the statement.
const SEMI_INSERT_TABLE: [bool; 256] = gen_lookup_table!(
    256,
    Ident,
    Number,
    Rune,
    String,
    RawString,
    KwBreak,
    KwContinue,
    KwFallthrough,
    KwReturn,
    Inc,
    Dec,
    RParen,
    RBrack,
    RBrace,
);

impl RawTok {
    #[inline(always)]
    const fn can_insert_semicolon(self) -> bool {
        SEMI_INSERT_TABLE[self as usize]
    }

    /// Public token for every raw token except trivia and numbers.
    #[rustfmt::skip]
    fn to_token(self, slice: &str) -> Tok<'_> {
        macro_rules! simple_tok {
            ($($raw:ident),* $(,)?) => {
                match self {
                    Self::Ident => Tok::Ident(slice),
                    Self::Rune => Tok::RuneLit(slice),
                    Self::String => Tok::StringLit(slice),
                    Self::RawString => Tok::RawStringLit(slice),
                    $(Self::$raw => Tok::$raw,)*
                    Self::Bom | Self::Newline | Self::LineComment | Self::BlockComment
                    | Self::Number => Tok::Error,
                }
            };
        }

        simple_tok! {
            KwBreak, KwCase, KwChan, KwConst, KwContinue, KwDefault, KwDefer, KwElse,
            KwFallthrough, KwFor, KwFunc, KwGo, KwGoto, KwIf, KwImport, KwInterface,
            KwMap, KwPackage, KwRange, KwReturn, KwSelect, KwStruct, KwSwitch, KwType, KwVar,

            Ellipsis, ShlAssign, ShrAssign, AndNotAssign, AddAssign, SubAssign, MulAssign,
            DivAssign, ModAssign, AndAssign, OrAssign, XorAssign, Shl, Shr, AndNot, LAnd, LOr,
            EqEq, NotEq, Le, Ge, Inc, Dec, Define, Arrow, Assign, Plus, Minus, Star, Slash,
            Percent, Amp, Pipe, Caret, Tilde, Bang, Lt, Gt,

            LParen, RParen, LBrack, RBrack, LBrace, RBrace, Comma, Semi, Colon, Dot,
        }
    }
}

// =============================================================================
// 6. Public tokens (zero-copy)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tok<'input> {
    Ident(&'input str),
    IntLit(&'input str),
    FloatLit(&'input str),
    ImagLit(&'input str),
    RuneLit(&'input str),
    StringLit(&'input str),
    RawStringLit(&'input str),

    // Keywords
    KwBreak,
    KwCase,
    KwChan,
    KwConst,
    KwContinue,
    KwDefault,
    KwDefer,
    KwElse,
    KwFallthrough,
    KwFor,
    KwFunc,
    KwGo,
    KwGoto,
    KwIf,
    KwImport,
    KwInterface,
    KwMap,
    KwPackage,
    KwRange,
    KwReturn,
    KwSelect,
    KwStruct,
    KwSwitch,
    KwType,
    KwVar,

    // Operators / Delimiters
    Ellipsis,
    ShlAssign,
    ShrAssign,
    AndNotAssign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    AndAssign,
    OrAssign,
    XorAssign,
    Shl,
    Shr,
    AndNot,
    LAnd,
    LOr,
    EqEq,
    NotEq,
    Le,
    Ge,
    Inc,
    Dec,
    Define,
    Arrow,
    Assign,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Amp,
    Pipe,
    Caret,
    Tilde,
    Bang,
    Lt,
    Gt,
    LParen,
    RParen,
    LBrack,
    RBrack,
    LBrace,
    RBrace,
    Comma,
    Semi,
    Colon,
    Dot,

    Error,
    /// End of input. Never yielded by `Lexer`; the parser appends it.
    Eof,
}

impl Tok<'_> {
    /// Identifiers and basic literals, which are reported by their text.
    #[inline]
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            Tok::Ident(_)
                | Tok::IntLit(_)
                | Tok::FloatLit(_)
                | Tok::ImagLit(_)
                | Tok::RuneLit(_)
                | Tok::StringLit(_)
                | Tok::RawStringLit(_)
        )
    }

    /// Source spelling of non-literal tokens.
    #[rustfmt::skip]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Tok::Ident(_) => "IDENT",
            Tok::IntLit(_) => "INT",
            Tok::FloatLit(_) => "FLOAT",
            Tok::ImagLit(_) => "IMAG",
            Tok::RuneLit(_) => "CHAR",
            Tok::StringLit(_) | Tok::RawStringLit(_) => "STRING",

            Tok::KwBreak => "break", Tok::KwCase => "case", Tok::KwChan => "chan",
            Tok::KwConst => "const", Tok::KwContinue => "continue", Tok::KwDefault => "default",
            Tok::KwDefer => "defer", Tok::KwElse => "else", Tok::KwFallthrough => "fallthrough",
            Tok::KwFor => "for", Tok::KwFunc => "func", Tok::KwGo => "go", Tok::KwGoto => "goto",
            Tok::KwIf => "if", Tok::KwImport => "import", Tok::KwInterface => "interface",
            Tok::KwMap => "map", Tok::KwPackage => "package", Tok::KwRange => "range",
            Tok::KwReturn => "return", Tok::KwSelect => "select", Tok::KwStruct => "struct",
            Tok::KwSwitch => "switch", Tok::KwType => "type", Tok::KwVar => "var",

            Tok::Ellipsis => "...", Tok::ShlAssign => "<<=", Tok::ShrAssign => ">>=",
            Tok::AndNotAssign => "&^=", Tok::AddAssign => "+=", Tok::SubAssign => "-=",
            Tok::MulAssign => "*=", Tok::DivAssign => "/=", Tok::ModAssign => "%=",
            Tok::AndAssign => "&=", Tok::OrAssign => "|=", Tok::XorAssign => "^=",
            Tok::Shl => "<<", Tok::Shr => ">>", Tok::AndNot => "&^", Tok::LAnd => "&&",
            Tok::LOr => "||", Tok::EqEq => "==", Tok::NotEq => "!=", Tok::Le => "<=",
            Tok::Ge => ">=", Tok::Inc => "++", Tok::Dec => "--", Tok::Define => ":=",
            Tok::Arrow => "<-", Tok::Assign => "=", Tok::Plus => "+", Tok::Minus => "-",
            Tok::Star => "*", Tok::Slash => "/", Tok::Percent => "%", Tok::Amp => "&",
            Tok::Pipe => "|", Tok::Caret => "^", Tok::Tilde => "~", Tok::Bang => "!",
            Tok::Lt => "<", Tok::Gt => ">",

            Tok::LParen => "(", Tok::RParen => ")", Tok::LBrack => "[", Tok::RBrack => "]",
            Tok::LBrace => "{", Tok::RBrace => "}", Tok::Comma => ",", Tok::Semi => ";",
            Tok::Colon => ":", Tok::Dot => ".",

            Tok::Error => "ILLEGAL",
            Tok::Eof => "EOF",
        }
    }
}

impl fmt::Display for Tok<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Ident(s)
            | Tok::IntLit(s)
            | Tok::FloatLit(s)
            | Tok::ImagLit(s)
            | Tok::RuneLit(s)
            | Tok::StringLit(s)
            | Tok::RawStringLit(s) => f.write_str(s),
            other => f.write_str(other.symbol()),
        }
    }
}

// =============================================================================
// 7. Lexer wrapper: semicolon insertion + imaginary suffix + diags
// =============================================================================

pub struct Lexer<'src> {
    logos: LogosLexer<'src, RawTok>,
    pending: Option<(usize, Tok<'src>, usize)>,
    diags: Vec<Diag>,
    last_can_insert_semi: bool,
    src_len: usize,
    eof_done: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(input: &'src str) -> Self {
        Self {
            logos: RawTok::lexer(input),
            pending: None,
            diags: Vec::new(),
            last_can_insert_semi: false,
            src_len: input.len(),
            eof_done: false,
        }
    }

    pub fn take_diags(&mut self) -> Vec<Diag> {
        std::mem::take(&mut self.diags)
    }

    #[inline]
    fn push_lex_diag(&mut self, kind: LexErrorKind, span: Range<usize>) {
        let span = Span::new(span.start, span.end);
        self.diags.push(LexError { kind, span }.diag());
    }

    /// Queues a zero-width `;` standing in for a line break.
    #[inline]
    fn emit_semi_at(&mut self, pos: usize) {
        self.pending = Some((pos, Tok::Semi, pos));
    }

    fn handle_trivia(&mut self, raw: RawTok, span: &Range<usize>, slice: &str) -> bool {
        match raw {
            RawTok::Newline => {
                if self.last_can_insert_semi {
                    self.last_can_insert_semi = false;
                    self.emit_semi_at(span.start);
                }
                true
            }
            RawTok::BlockComment => {
                if self.last_can_insert_semi {
                    if let Some(off) = memchr::memchr2(b'\n', b'\r', slice.as_bytes()) {
                        self.last_can_insert_semi = false;
                        self.emit_semi_at(span.start + off);
                    }
                }
                true
            }
            RawTok::LineComment => true,
            _ => false,
        }
    }

    fn handle_eof(&mut self) {
        self.eof_done = true;
        if self.last_can_insert_semi {
            self.last_can_insert_semi = false;
            self.emit_semi_at(self.src_len);
        }
    }

    fn error_token(&mut self, kind: LexErrorKind, span: Range<usize>) -> (usize, Tok<'src>, usize) {
        self.push_lex_diag(kind, span.clone());
        self.last_can_insert_semi = false;
        (span.start, Tok::Error, span.end)
    }

    fn handle_number(&mut self, span: Range<usize>) -> (usize, Tok<'src>, usize) {
        let src = self.logos.source();
        let bytes = &src.as_bytes()[span.clone()];

        if src.as_bytes().get(span.end) == Some(&b'i') {
            self.logos.bump(1);
            let end = span.end + 1;
            let decimal = bytes.iter().all(|&b| is_dec_digit(b) || b == b'_');
            if num::classify(bytes).is_err() && !decimal {
                return self.error_token(LexErrorKind::InvalidNumber, span.start..end);
            }
            self.last_can_insert_semi = true;
            return (span.start, Tok::ImagLit(&src[span.start..end]), end);
        }

        match num::classify(bytes) {
            Ok(is_float) => {
                self.last_can_insert_semi = true;
                let lit = &src[span.clone()];
                let tok = if is_float {
                    Tok::FloatLit(lit)
                } else {
                    Tok::IntLit(lit)
                };
                (span.start, tok, span.end)
            }
            Err(kind) => self.error_token(kind, span),
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = (usize, Tok<'src>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(tok) = self.pending.take() {
                return Some(tok);
            }
            if self.eof_done {
                return None;
            }

            let raw = match self.logos.next() {
                None => {
                    // A final ';' may still be pending; loop to emit it.
                    self.handle_eof();
                    continue;
                }
                Some(Err(kind)) => {
                    let span = self.logos.span();
                    return Some(self.error_token(kind, span));
                }
                Some(Ok(raw)) => raw,
            };

            let span = self.logos.span();
            let slice = self.logos.slice();

            if raw == RawTok::Bom {
                if span.start == 0 {
                    continue;
                }
                return Some(self.error_token(LexErrorKind::InvalidToken, span));
            }
            if self.handle_trivia(raw, &span, slice) {
                continue;
            }
            if raw == RawTok::Number {
                return Some(self.handle_number(span));
            }

            self.last_can_insert_semi = raw.can_insert_semicolon();
            return Some((span.start, raw.to_token(slice), span.end));
        }
    }
}

/// Lexes a whole fragment, returning its tokens and lexical diagnostics.
pub fn tokenize(src: &str) -> (Vec<(usize, Tok<'_>, usize)>, Vec<Diag>) {
    let mut lexer = Lexer::new(src);
    let toks: Vec<_> = lexer.by_ref().collect();
    (toks, lexer.take_diags())
}

#[cfg(test)]
mod tests {
    use super::num::classify;

    #[test]
    fn classifies_go_numbers() {
        for ok in ["0", "42", "1_000", "0x_FF", "0o17", "0b1010", "017"] {
            assert_eq!(classify(ok.as_bytes()), Ok(false), "{ok}");
        }
        for ok in ["1.5", ".5", "1.", "1e10", "1E-3", "0x1p-2", "0x1.8p1", "09.5"] {
            assert_eq!(classify(ok.as_bytes()), Ok(true), "{ok}");
        }
        for bad in ["09", "0b2", "0o8", "1__0", "1_", "0x", "0x1.8", "1e", "0b1.0"] {
            assert!(classify(bad.as_bytes()).is_err(), "{bad}");
        }
    }
}
