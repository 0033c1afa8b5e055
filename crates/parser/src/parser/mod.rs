//! # Fragment Parser
//!
//! Recursive-descent parser for a single Go expression, declaration or
//! statement, following the structure of Go's own `go/parser`.
//!
//! Parsing stops at the first syntax error; lexical diagnostics collected
//! along the way are reported ahead of it.
//!
//! ## Example
//!
//! ```rust
//! use godecl_parser::{parse_expr, ast::Expr};
//!
//! let frag = parse_expr("*[]int").unwrap();
//! assert!(matches!(frag.expr(frag.root), Expr::Star { .. }));
//! ```

mod decls;
mod exprs;
mod stmts;
mod types;

use crate::ast::{
    AstArena, DeclId, Expr, ExprId, Field, FieldId, Fragment, IdentName, Interner, Span, Stmt,
    StmtId,
};
use crate::error::{Diag, DiagKind, ParseFailure};
use crate::lexer::{tokenize, Tok};

pub(crate) type PResult<T> = Result<T, Diag>;

/// Deepest nesting of expressions, types and statements a fragment may use.
/// Rendering recurses as deep as parsing, so the bound covers both.
const MAX_NEST_LEV: u32 = 256;

#[inline]
pub(crate) fn parse_diag(span: Span, message: impl Into<String>) -> Diag {
    Diag {
        kind: DiagKind::Parse,
        span,
        message: message.into(),
    }
}

// =============================================================================
// PARSER
// =============================================================================

pub(crate) struct Parser<'src> {
    tokens: Vec<(usize, Tok<'src>, usize)>,
    /// Current token index; never moves past the trailing `Eof`.
    current: usize,
    /// End offset of the last consumed token.
    prev_end: usize,
    /// < 0: in control clause, >= 0: in expression
    expr_lev: i32,
    /// Current nesting depth, bounded by `MAX_NEST_LEV`.
    nest_lev: u32,
    arena: AstArena,
    interner: Interner,
}

impl<'src> Parser<'src> {
    fn new(src: &'src str, mut tokens: Vec<(usize, Tok<'src>, usize)>) -> Self {
        tokens.push((src.len(), Tok::Eof, src.len()));
        Self {
            tokens,
            current: 0,
            prev_end: 0,
            expr_lev: 0,
            nest_lev: 0,
            arena: AstArena::new(),
            interner: Interner::new(),
        }
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    #[inline]
    fn tok(&self) -> Tok<'src> {
        self.tokens[self.current].1
    }

    #[inline]
    fn peek(&self, n: usize) -> Tok<'src> {
        self.tokens.get(self.current + n).map_or(Tok::Eof, |t| t.1)
    }

    #[inline]
    fn pos(&self) -> usize {
        self.tokens[self.current].0
    }

    #[inline]
    fn span(&self) -> Span {
        let (start, _, end) = self.tokens[self.current];
        Span::new(start, end)
    }

    #[inline]
    fn at(&self, tok: Tok<'_>) -> bool {
        self.tok() == tok
    }

    /// Consumes the current token and returns its span.
    fn next(&mut self) -> Span {
        let (start, tok, end) = self.tokens[self.current];
        if tok != Tok::Eof {
            self.current += 1;
        }
        self.prev_end = end;
        Span::new(start, end)
    }

    fn eat(&mut self, tok: Tok<'_>) -> Option<Span> {
        self.at(tok).then(|| self.next())
    }

    fn expect(&mut self, tok: Tok<'_>) -> PResult<Span> {
        match self.eat(tok) {
            Some(span) => Ok(span),
            None => Err(self.error_expected(&format!("'{}'", tok.symbol()))),
        }
    }

    /// Statement terminator: `;`, or nothing in front of a closing delimiter.
    fn expect_semi(&mut self) -> PResult<()> {
        match self.tok() {
            Tok::Semi => {
                self.next();
                Ok(())
            }
            Tok::RParen | Tok::RBrace | Tok::Eof => Ok(()),
            _ => Err(self.error_expected("';'")),
        }
    }

    /// Whether the current token is a semicolon inserted at a line break.
    #[inline]
    fn at_newline(&self) -> bool {
        let (start, tok, end) = self.tokens[self.current];
        tok == Tok::Semi && start == end
    }

    #[inline]
    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.prev_end.max(start))
    }

    // =========================================================================
    // NESTING
    // =========================================================================

    /// Descends one level; fails once the fragment nests too deeply.
    fn enter(&mut self) -> PResult<()> {
        if self.nest_lev >= MAX_NEST_LEV {
            return Err(parse_diag(self.span(), "exceeded max nesting depth"));
        }
        self.nest_lev += 1;
        Ok(())
    }

    /// Runs `f` one level deeper. Levels `f` enters itself are given back
    /// when it returns.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        let depth = self.nest_lev;
        let res = self.enter().and_then(|()| f(self));
        self.nest_lev = depth;
        res
    }

    // =========================================================================
    // ERRORS
    // =========================================================================

    /// How the current token reads in a diagnostic.
    fn found(&self) -> String {
        let tok = self.tok();
        if self.at_newline() {
            "newline".to_string()
        } else if tok.is_literal() {
            tok.to_string()
        } else {
            format!("'{tok}'")
        }
    }

    fn error_expected(&self, what: &str) -> Diag {
        parse_diag(self.span(), format!("expected {what}, found {}", self.found()))
    }

    // =========================================================================
    // NODES
    // =========================================================================

    #[inline]
    fn alloc(&mut self, expr: Expr, span: Span) -> ExprId {
        self.arena.exprs.alloc(expr, span)
    }

    #[inline]
    fn alloc_stmt(&mut self, stmt: Stmt, span: Span) -> StmtId {
        self.arena.stmts.alloc(stmt, span)
    }

    #[inline]
    fn alloc_field(&mut self, field: Field, span: Span) -> FieldId {
        self.arena.fields.alloc(field, span)
    }

    fn ident(&mut self) -> PResult<IdentName> {
        match self.tok() {
            Tok::Ident(name) => {
                let pos = self.next();
                let sym = self.interner.intern(name);
                Ok(IdentName { sym, pos })
            }
            _ => Err(self.error_expected("'IDENT'")),
        }
    }

    fn ident_list(&mut self) -> PResult<Vec<IdentName>> {
        let mut names = vec![self.ident()?];
        while self.eat(Tok::Comma).is_some() {
            names.push(self.ident()?);
        }
        Ok(names)
    }

    /// Strips `Expr::Paren` wrappers.
    fn unparen(&self, mut x: ExprId) -> ExprId {
        while let Expr::Paren { expr, .. } = self.arena.exprs[x] {
            x = expr;
        }
        x
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

fn run<'src, R>(
    src: &'src str,
    root: impl FnOnce(&mut Parser<'src>) -> PResult<R>,
) -> Result<Fragment<'src, R>, ParseFailure> {
    let (tokens, mut diags) = tokenize(src);
    let mut parser = Parser::new(src, tokens);

    match root(&mut parser) {
        Ok(root) if diags.is_empty() => Ok(Fragment {
            src,
            arena: parser.arena,
            interner: parser.interner,
            root,
        }),
        Ok(_) => Err(ParseFailure::new(src, diags)),
        Err(diag) => {
            diags.push(diag);
            Err(ParseFailure::new(src, diags))
        }
    }
}

/// Parses a single expression (types included).
///
/// A line break may follow the expression; anything else is an error.
pub fn parse_expr(src: &str) -> Result<Fragment<'_, ExprId>, ParseFailure> {
    run(src, |p| {
        let x = p.expr()?;
        if p.at_newline() {
            p.next();
        }
        p.expect(Tok::Eof)?;
        Ok(x)
    })
}

/// Parses a single top-level declaration: `import`, `const`, `type`, `var`
/// or a function/method declaration.
pub fn parse_decl(src: &str) -> Result<Fragment<'_, DeclId>, ParseFailure> {
    run(src, |p| {
        let decl = p.decl()?;
        p.expect_semi()?;
        while p.eat(Tok::Semi).is_some() {}
        p.expect(Tok::Eof)?;
        Ok(decl)
    })
}

/// Parses a single statement. Empty input is the empty statement.
pub fn parse_stmt(src: &str) -> Result<Fragment<'_, StmtId>, ParseFailure> {
    run(src, |p| {
        let stmt = p.stmt()?;
        p.expect_semi()?;
        while p.eat(Tok::Semi).is_some() {}
        p.expect(Tok::Eof)?;
        Ok(stmt)
    })
}
