use thiserror::Error;

pub use crate::ast::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagKind {
    Lex,
    Parse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diag {
    pub kind: DiagKind,
    pub span: Span,
    pub message: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    #[default]
    #[error("invalid token")]
    InvalidToken,
    #[error("invalid numeric literal")]
    InvalidNumber,
    #[error("invalid escape")]
    InvalidEscape,
    #[error("unterminated string")]
    UnterminatedString,
    #[error("unterminated comment")]
    UnterminatedComment,
}

#[derive(Debug, Error, Clone, PartialEq, Eq, Default)]
#[error("{kind}: {span:?}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    #[inline]
    pub fn diag(&self) -> Diag {
        Diag {
            kind: DiagKind::Lex,
            span: self.span,
            message: self.kind.to_string(),
        }
    }
}

/// 1-based line and column of a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Locates `offset` in `src`. Columns count bytes, as Go's scanner does.
    pub fn locate(src: &str, offset: u32) -> Self {
        let offset = (offset as usize).min(src.len());
        let before = &src.as_bytes()[..offset];
        let line = memchr::memchr_iter(b'\n', before).count() as u32 + 1;
        let line_start = memchr::memrchr(b'\n', before).map_or(0, |i| i + 1);
        Self {
            line,
            column: (offset - line_start) as u32 + 1,
        }
    }
}

/// A failed attempt to parse a fragment in one grammatical category.
///
/// Lexical diagnostics come first, then parse diagnostics in the order they
/// were raised. `Display` reports the first one the way `go/parser` does.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", describe(.position, .diags))]
pub struct ParseFailure {
    pub position: Position,
    pub diags: Vec<Diag>,
}

impl ParseFailure {
    /// Builds a failure from non-empty diagnostics.
    pub fn new(src: &str, diags: Vec<Diag>) -> Self {
        debug_assert!(!diags.is_empty());
        let start = diags.first().map_or(0, |d| d.span.start);
        Self {
            position: Position::locate(src, start),
            diags,
        }
    }

    /// Message of the first diagnostic.
    pub fn message(&self) -> &str {
        self.diags.first().map_or("", |d| d.message.as_str())
    }
}

fn describe(position: &Position, diags: &[Diag]) -> String {
    let first = diags.first().map_or("", |d| d.message.as_str());
    let more = match diags.len() {
        0 | 1 => String::new(),
        2 => " (and 1 more error)".to_string(),
        n => format!(" (and {} more errors)", n - 1),
    };
    format!("{}:{}: {first}{more}", position.line, position.column)
}
