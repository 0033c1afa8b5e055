//! Statements and blocks.

use super::{parse_diag, PResult, Parser};
use crate::ast::{
    AssignOp, Block, BranchKind, Expr, ExprId, IncDecOp, ListRef, Span, Stmt, StmtId,
};
use crate::error::Diag;
use crate::lexer::Tok;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Basic,
    LabelOk,
    RangeOk,
}

/// `[key [, value] (= | :=)] range expr` from a `for` header.
#[derive(Debug, Clone, Copy)]
struct RangeClause {
    key: Option<ExprId>,
    value: Option<ExprId>,
    op: Option<AssignOp>,
    expr: ExprId,
}

enum Header {
    Stmt(StmtId),
    Range(RangeClause),
}

fn assign_op(tok: Tok<'_>) -> Option<AssignOp> {
    Some(match tok {
        Tok::Define => AssignOp::Define,
        Tok::Assign => AssignOp::Assign,
        Tok::AddAssign => AssignOp::AddAssign,
        Tok::SubAssign => AssignOp::SubAssign,
        Tok::MulAssign => AssignOp::MulAssign,
        Tok::DivAssign => AssignOp::DivAssign,
        Tok::ModAssign => AssignOp::ModAssign,
        Tok::AndAssign => AssignOp::AndAssign,
        Tok::OrAssign => AssignOp::OrAssign,
        Tok::XorAssign => AssignOp::XorAssign,
        Tok::ShlAssign => AssignOp::ShlAssign,
        Tok::ShrAssign => AssignOp::ShrAssign,
        Tok::AndNotAssign => AssignOp::AndNotAssign,
        _ => return None,
    })
}

impl<'src> Parser<'src> {
    pub(super) fn block(&mut self) -> PResult<Block> {
        let l_brace = self.expect(Tok::LBrace)?;
        let stmts = self.stmt_list()?;
        let r_brace = self.expect(Tok::RBrace)?;
        Ok(Block {
            l_brace,
            stmts,
            r_brace,
        })
    }

    fn stmt_list(&mut self) -> PResult<ListRef<StmtId>> {
        let mut stmts = Vec::new();
        while !matches!(
            self.tok(),
            Tok::RBrace | Tok::Eof | Tok::KwCase | Tok::KwDefault
        ) {
            stmts.push(self.stmt()?);
            self.expect_semi()?;
        }
        Ok(self.arena.list_stmts(stmts))
    }

    /// One statement, without its terminating semicolon.
    ///
    /// An empty statement consumes nothing; the `;` in front of it is left
    /// for the caller.
    pub(super) fn stmt(&mut self) -> PResult<StmtId> {
        self.nested(Self::stmt_inner)
    }

    fn stmt_inner(&mut self) -> PResult<StmtId> {
        let start = self.pos();
        let stmt = match self.tok() {
            Tok::Semi | Tok::RBrace | Tok::Eof => {
                let at = Span::empty_at(start);
                return Ok(self.alloc_stmt(Stmt::Empty(at), at));
            }
            Tok::KwConst | Tok::KwType | Tok::KwVar => Stmt::Decl(self.gen_decl()?),
            Tok::KwGo => {
                let go_pos = self.next();
                let call = self.call_expr("go")?;
                Stmt::Go { go_pos, call }
            }
            Tok::KwDefer => {
                let defer_pos = self.next();
                let call = self.call_expr("defer")?;
                Stmt::Defer { defer_pos, call }
            }
            Tok::KwReturn => {
                let return_pos = self.next();
                let results = match self.tok() {
                    Tok::Semi | Tok::RBrace | Tok::Eof => ListRef::EMPTY,
                    _ => {
                        let results = self.expr_list()?;
                        self.arena.list_exprs(results)
                    }
                };
                Stmt::Return {
                    return_pos,
                    results,
                }
            }
            Tok::KwBreak | Tok::KwContinue | Tok::KwGoto | Tok::KwFallthrough => {
                let kind = match self.tok() {
                    Tok::KwBreak => BranchKind::Break,
                    Tok::KwContinue => BranchKind::Continue,
                    Tok::KwGoto => BranchKind::Goto,
                    _ => BranchKind::Fallthrough,
                };
                self.next();
                let label = match self.tok() {
                    Tok::Ident(_) if kind != BranchKind::Fallthrough => Some(self.ident()?),
                    _ => None,
                };
                Stmt::Branch { kind, label }
            }
            Tok::LBrace => Stmt::Block(self.block()?),
            Tok::KwIf => return self.if_stmt(),
            Tok::KwFor => return self.for_stmt(),
            Tok::KwSwitch => return self.switch_stmt(),
            Tok::KwSelect => {
                self.next();
                let l_brace = self.expect(Tok::LBrace)?;
                let mut clauses = Vec::new();
                while matches!(self.tok(), Tok::KwCase | Tok::KwDefault) {
                    clauses.push(self.comm_clause()?);
                }
                let r_brace = self.expect(Tok::RBrace)?;
                Stmt::Select {
                    body: Block {
                        l_brace,
                        stmts: self.arena.list_stmts(clauses),
                        r_brace,
                    },
                }
            }
            Tok::KwImport
            | Tok::KwPackage
            | Tok::KwElse
            | Tok::KwCase
            | Tok::KwDefault
            | Tok::RParen
            | Tok::RBrack
            | Tok::Comma
            | Tok::Colon
            | Tok::Error => return Err(self.error_expected("statement")),
            _ => return self.simple_stmt(Mode::LabelOk),
        };
        Ok(self.alloc_stmt(stmt, self.span_from(start)))
    }

    fn simple_stmt(&mut self, mode: Mode) -> PResult<StmtId> {
        match self.simple_or_range(mode)? {
            Header::Stmt(stmt) => Ok(stmt),
            Header::Range(clause) => Err(parse_diag(
                self.arena.exprs.span(clause.expr),
                "unexpected range clause",
            )),
        }
    }

    /// Expression, send, inc/dec, assignment, short variable declaration,
    /// labeled statement (`LabelOk`) or range clause (`RangeOk`).
    fn simple_or_range(&mut self, mode: Mode) -> PResult<Header> {
        let start = self.pos();
        let lhs = self.expr_list()?;

        if let Some(op) = assign_op(self.tok()) {
            let op_pos = self.next();
            let ranged = matches!(op, AssignOp::Define | AssignOp::Assign);
            if mode == Mode::RangeOk && ranged && self.eat(Tok::KwRange).is_some() {
                if let Some(&extra) = lhs.get(2) {
                    return Err(parse_diag(
                        self.arena.exprs.span(extra),
                        "range clause permits at most two iteration variables",
                    ));
                }
                let expr = self.expr()?;
                return Ok(Header::Range(RangeClause {
                    key: lhs.first().copied(),
                    value: lhs.get(1).copied(),
                    op: Some(op),
                    expr,
                }));
            }
            let rhs = self.expr_list()?;
            let stmt = Stmt::Assign {
                lhs: self.arena.list_exprs(lhs),
                op,
                op_pos,
                rhs: self.arena.list_exprs(rhs),
            };
            return Ok(Header::Stmt(self.alloc_stmt(stmt, self.span_from(start))));
        }

        let &[x] = lhs.as_slice() else {
            let first = self.arena.exprs.span(lhs[0]);
            return Err(parse_diag(first, "expected 1 expression"));
        };

        let stmt = match self.tok() {
            Tok::Colon if mode == Mode::LabelOk => match self.arena.exprs[x] {
                Expr::Ident(label) => {
                    self.next();
                    let stmt = self.stmt()?;
                    Stmt::Labeled { label, stmt }
                }
                _ => Stmt::Expr(x),
            },
            Tok::Arrow => {
                let op_pos = self.next();
                let value = self.expr()?;
                Stmt::Send {
                    chan: x,
                    op_pos,
                    value,
                }
            }
            Tok::Inc | Tok::Dec => {
                let op = if self.at(Tok::Inc) {
                    IncDecOp::Inc
                } else {
                    IncDecOp::Dec
                };
                let op_pos = self.next();
                Stmt::IncDec { expr: x, op, op_pos }
            }
            _ => Stmt::Expr(x),
        };
        Ok(Header::Stmt(self.alloc_stmt(stmt, self.span_from(start))))
    }

    fn call_expr(&mut self, keyword: &str) -> PResult<ExprId> {
        let x = self.expr()?;
        match self.arena.exprs[self.unparen(x)] {
            Expr::Call { .. } => Ok(x),
            _ => Err(parse_diag(
                self.arena.exprs.span(x),
                format!("expression in {keyword} must be function call"),
            )),
        }
    }

    /// Expression of an expression statement used as a condition or tag.
    fn make_expr(&self, stmt: StmtId, want: &str) -> PResult<ExprId> {
        let found = match self.arena.stmts[stmt] {
            Stmt::Expr(x) => return Ok(x),
            Stmt::Assign { .. } => "assignment",
            _ => "simple statement",
        };
        Err(parse_diag(
            self.arena.stmts.span(stmt),
            format!("expected {want}, found {found} (missing parentheses around composite literal?)"),
        ))
    }

    fn missing_condition(&self, what: &str) -> Diag {
        parse_diag(self.span(), format!("missing condition in {what} statement"))
    }

    // =========================================================================
    // CONTROL FLOW
    // =========================================================================

    fn if_stmt(&mut self) -> PResult<StmtId> {
        let start = self.pos();
        self.expect(Tok::KwIf)?;
        let (init, cond) = self.if_header()?;
        let then_block = self.block()?;

        let else_stmt = match self.eat(Tok::KwElse) {
            None => None,
            Some(_) => match self.tok() {
                Tok::KwIf => Some(self.nested(Self::if_stmt)?),
                Tok::LBrace => {
                    let else_start = self.pos();
                    let block = self.block()?;
                    Some(self.alloc_stmt(Stmt::Block(block), self.span_from(else_start)))
                }
                _ => return Err(self.error_expected("if statement or block")),
            },
        };

        let stmt = Stmt::If {
            init,
            cond,
            then_block,
            else_stmt,
        };
        Ok(self.alloc_stmt(stmt, self.span_from(start)))
    }

    fn if_header(&mut self) -> PResult<(Option<StmtId>, ExprId)> {
        if self.at(Tok::LBrace) {
            return Err(self.missing_condition("if"));
        }

        let outer = self.expr_lev;
        self.expr_lev = -1;

        let mut init = None;
        if !self.at(Tok::Semi) {
            init = Some(self.simple_stmt(Mode::Basic)?);
        }
        let cond = if self.eat(Tok::Semi).is_some() {
            if self.at(Tok::LBrace) {
                return Err(self.missing_condition("if"));
            }
            Some(self.simple_stmt(Mode::Basic)?)
        } else {
            init.take()
        };

        self.expr_lev = outer;
        match cond {
            Some(cond) => Ok((init, self.make_expr(cond, "boolean expression")?)),
            None => Err(self.missing_condition("if")),
        }
    }

    fn for_stmt(&mut self) -> PResult<StmtId> {
        let start = self.pos();
        self.expect(Tok::KwFor)?;

        let outer = self.expr_lev;
        self.expr_lev = -1;

        let (mut init, mut cond, mut post, mut range) = (None, None, None, None);
        if !self.at(Tok::LBrace) {
            if !self.at(Tok::Semi) {
                if self.eat(Tok::KwRange).is_some() {
                    // for range x
                    let expr = self.expr()?;
                    range = Some(RangeClause {
                        key: None,
                        value: None,
                        op: None,
                        expr,
                    });
                } else {
                    match self.simple_or_range(Mode::RangeOk)? {
                        Header::Stmt(stmt) => cond = Some(stmt),
                        Header::Range(clause) => range = Some(clause),
                    }
                }
            }

            if range.is_none() && self.eat(Tok::Semi).is_some() {
                init = cond.take();
                if !self.at(Tok::Semi) {
                    cond = Some(self.simple_stmt(Mode::Basic)?);
                }
                self.expect_semi()?;
                if !self.at(Tok::LBrace) {
                    post = Some(self.simple_stmt(Mode::Basic)?);
                }
            }
        }

        self.expr_lev = outer;
        let body = self.block()?;

        let stmt = match range {
            Some(RangeClause {
                key,
                value,
                op,
                expr,
            }) => Stmt::Range {
                key,
                value,
                op,
                expr,
                body,
            },
            None => {
                if let Some(post) = post {
                    if let Stmt::Assign {
                        op: AssignOp::Define,
                        ..
                    } = self.arena.stmts[post]
                    {
                        return Err(parse_diag(
                            self.arena.stmts.span(post),
                            "cannot declare in post statement of for loop",
                        ));
                    }
                }
                let cond = match cond {
                    Some(stmt) => Some(self.make_expr(stmt, "boolean or range expression")?),
                    None => None,
                };
                Stmt::For {
                    init,
                    cond,
                    post,
                    body,
                }
            }
        };
        Ok(self.alloc_stmt(stmt, self.span_from(start)))
    }

    fn switch_stmt(&mut self) -> PResult<StmtId> {
        let start = self.pos();
        self.expect(Tok::KwSwitch)?;

        let outer = self.expr_lev;
        self.expr_lev = -1;

        let (mut init, mut tag) = (None, None);
        if !self.at(Tok::LBrace) {
            if !self.at(Tok::Semi) {
                tag = Some(self.simple_stmt(Mode::Basic)?);
            }
            if self.eat(Tok::Semi).is_some() {
                init = tag.take();
                if !self.at(Tok::LBrace) {
                    tag = Some(self.simple_stmt(Mode::Basic)?);
                }
            }
        }
        self.expr_lev = outer;

        let type_switch = tag.is_some_and(|s| self.is_type_switch_guard(s));
        let l_brace = self.expect(Tok::LBrace)?;
        let mut clauses = Vec::new();
        while matches!(self.tok(), Tok::KwCase | Tok::KwDefault) {
            clauses.push(self.case_clause(type_switch)?);
        }
        let r_brace = self.expect(Tok::RBrace)?;
        let body = Block {
            l_brace,
            stmts: self.arena.list_stmts(clauses),
            r_brace,
        };

        let stmt = match tag {
            Some(assign) if type_switch => Stmt::TypeSwitch { init, assign, body },
            Some(tag) => Stmt::Switch {
                init,
                tag: Some(self.make_expr(tag, "switch expression")?),
                body,
            },
            None => Stmt::Switch {
                init,
                tag: None,
                body,
            },
        };
        Ok(self.alloc_stmt(stmt, self.span_from(start)))
    }

    /// `x.(type)` or `v := x.(type)`.
    fn is_type_switch_guard(&self, stmt: StmtId) -> bool {
        let guard = |x: ExprId| matches!(self.arena.exprs[x], Expr::TypeAssert { typ: None, .. });
        match self.arena.stmts[stmt] {
            Stmt::Expr(x) => guard(x),
            Stmt::Assign {
                lhs,
                op: AssignOp::Define,
                rhs,
                ..
            } => {
                let rhs = self.arena.exprs_list(rhs);
                lhs.len() == 1 && rhs.len() == 1 && guard(rhs[0])
            }
            _ => false,
        }
    }

    fn case_clause(&mut self, type_switch: bool) -> PResult<StmtId> {
        let start = self.pos();
        let list = if self.eat(Tok::KwCase).is_some() {
            if type_switch {
                let mut types = vec![self.parse_type()?];
                while self.eat(Tok::Comma).is_some() {
                    types.push(self.parse_type()?);
                }
                types
            } else {
                self.expr_list()?
            }
        } else {
            self.expect(Tok::KwDefault)?;
            Vec::new()
        };
        self.expect(Tok::Colon)?;
        let body = self.stmt_list()?;

        let stmt = Stmt::CaseClause {
            list: self.arena.list_exprs(list),
            body,
        };
        Ok(self.alloc_stmt(stmt, self.span_from(start)))
    }

    fn comm_clause(&mut self) -> PResult<StmtId> {
        let start = self.pos();
        let comm = if self.eat(Tok::KwCase).is_some() {
            Some(self.simple_stmt(Mode::Basic)?)
        } else {
            self.expect(Tok::KwDefault)?;
            None
        };
        self.expect(Tok::Colon)?;
        let body = self.stmt_list()?;
        Ok(self.alloc_stmt(Stmt::CommClause { comm, body }, self.span_from(start)))
    }
}
