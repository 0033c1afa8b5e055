//! Expressions: precedence climbing over unary and primary expressions.

use super::{PResult, Parser};
use crate::ast::{BasicLit, BasicLitKind, BinaryOp, ChanDir, Expr, ExprId, UnaryOp};
use crate::lexer::Tok;

fn binary_op(tok: Tok<'_>) -> Option<BinaryOp> {
    Some(match tok {
        Tok::Plus => BinaryOp::Add,
        Tok::Minus => BinaryOp::Sub,
        Tok::Star => BinaryOp::Mul,
        Tok::Slash => BinaryOp::Div,
        Tok::Percent => BinaryOp::Mod,
        Tok::Amp => BinaryOp::And,
        Tok::Pipe => BinaryOp::Or,
        Tok::Caret => BinaryOp::Xor,
        Tok::Shl => BinaryOp::Shl,
        Tok::Shr => BinaryOp::Shr,
        Tok::AndNot => BinaryOp::AndNot,
        Tok::LAnd => BinaryOp::LAnd,
        Tok::LOr => BinaryOp::LOr,
        Tok::EqEq => BinaryOp::Eq,
        Tok::NotEq => BinaryOp::Ne,
        Tok::Lt => BinaryOp::Lt,
        Tok::Le => BinaryOp::Le,
        Tok::Gt => BinaryOp::Gt,
        Tok::Ge => BinaryOp::Ge,
        _ => return None,
    })
}

fn unary_op(tok: Tok<'_>) -> Option<UnaryOp> {
    Some(match tok {
        Tok::Plus => UnaryOp::Add,
        Tok::Minus => UnaryOp::Sub,
        Tok::Bang => UnaryOp::Not,
        Tok::Caret => UnaryOp::Xor,
        Tok::Amp => UnaryOp::Addr,
        Tok::Tilde => UnaryOp::Tilde,
        _ => return None,
    })
}

pub(super) fn basic_lit_kind(tok: Tok<'_>) -> Option<BasicLitKind> {
    Some(match tok {
        Tok::IntLit(_) => BasicLitKind::Int,
        Tok::FloatLit(_) => BasicLitKind::Float,
        Tok::ImagLit(_) => BasicLitKind::Imag,
        Tok::RuneLit(_) => BasicLitKind::Rune,
        Tok::StringLit(_) | Tok::RawStringLit(_) => BasicLitKind::String,
        _ => return None,
    })
}

impl<'src> Parser<'src> {
    pub(super) fn expr(&mut self) -> PResult<ExprId> {
        self.nested(|p| p.binary_expr(1))
    }

    pub(super) fn expr_list(&mut self) -> PResult<Vec<ExprId>> {
        let mut list = vec![self.expr()?];
        while self.eat(Tok::Comma).is_some() {
            list.push(self.expr()?);
        }
        Ok(list)
    }

    /// Left-associative binary expressions binding at least as tight as `prec1`.
    fn binary_expr(&mut self, prec1: u8) -> PResult<ExprId> {
        let start = self.pos();
        let mut x = self.unary_expr()?;
        loop {
            let Some(op) = binary_op(self.tok()) else {
                return Ok(x);
            };
            if op.precedence() < prec1 {
                return Ok(x);
            }
            self.enter()?;
            let op_pos = self.next();
            let right = self.binary_expr(op.precedence() + 1)?;
            x = self.alloc(
                Expr::Binary {
                    left: x,
                    op,
                    op_pos,
                    right,
                },
                self.span_from(start),
            );
        }
    }

    pub(super) fn unary_expr(&mut self) -> PResult<ExprId> {
        let start = self.pos();

        if let Some(op) = unary_op(self.tok()) {
            let op_pos = self.next();
            let expr = self.nested(Self::unary_expr)?;
            return Ok(self.alloc(Expr::Unary { op, op_pos, expr }, self.span_from(start)));
        }

        let expr = match self.tok() {
            Tok::Arrow => {
                let op_pos = self.next();
                if self.eat(Tok::KwChan).is_some() {
                    // <-chan T
                    let elem = self.parse_type()?;
                    Expr::ChanType {
                        dir: ChanDir::Recv,
                        elem,
                    }
                } else {
                    let expr = self.nested(Self::unary_expr)?;
                    Expr::Unary {
                        op: UnaryOp::Recv,
                        op_pos,
                        expr,
                    }
                }
            }
            Tok::Star => {
                let star_pos = self.next();
                let expr = self.nested(Self::unary_expr)?;
                Expr::Star { star_pos, expr }
            }
            _ => return self.primary_expr(),
        };
        Ok(self.alloc(expr, self.span_from(start)))
    }

    fn primary_expr(&mut self) -> PResult<ExprId> {
        let start = self.pos();
        let mut x = self.operand()?;
        loop {
            let postfix = match self.tok() {
                Tok::Dot | Tok::LBrack | Tok::LParen => true,
                Tok::LBrace => self.is_literal_type(x),
                _ => false,
            };
            if postfix {
                self.enter()?;
            }
            x = match self.tok() {
                Tok::Dot => {
                    self.next();
                    match self.tok() {
                        Tok::Ident(_) => {
                            let sel = self.ident()?;
                            self.alloc(Expr::Selector { expr: x, sel }, self.span_from(start))
                        }
                        Tok::LParen => self.type_assertion(x, start)?,
                        _ => return Err(self.error_expected("selector or type assertion")),
                    }
                }
                Tok::LBrack => self.index_or_slice(x, start)?,
                Tok::LParen => self.call(x, start)?,
                Tok::LBrace if self.is_literal_type(x) => self.literal_value(Some(x), start)?,
                _ => return Ok(x),
            };
        }
    }

    fn operand(&mut self) -> PResult<ExprId> {
        let start = self.pos();
        match self.tok() {
            Tok::Ident(_) => {
                let name = self.ident()?;
                Ok(self.alloc(Expr::Ident(name), name.pos))
            }
            Tok::LParen => {
                let l_paren = self.next();
                self.expr_lev += 1;
                let expr = self.expr()?;
                self.expr_lev -= 1;
                let r_paren = self.expect(Tok::RParen)?;
                Ok(self.alloc(
                    Expr::Paren {
                        l_paren,
                        expr,
                        r_paren,
                    },
                    self.span_from(start),
                ))
            }
            Tok::KwFunc => self.func_type_or_lit(),
            tok => {
                if let Some(kind) = basic_lit_kind(tok) {
                    let raw = self.next();
                    return Ok(self.alloc(Expr::BasicLit(BasicLit { kind, raw }), raw));
                }
                match self.try_type()? {
                    Some(typ) => Ok(typ),
                    None => Err(self.error_expected("operand")),
                }
            }
        }
    }

    fn func_type_or_lit(&mut self) -> PResult<ExprId> {
        let start = self.pos();
        let typ = self.func_type()?;
        if !self.at(Tok::LBrace) {
            return Ok(typ);
        }
        self.expr_lev += 1;
        let body = self.block()?;
        self.expr_lev -= 1;
        Ok(self.alloc(Expr::FuncLit { typ, body }, self.span_from(start)))
    }

    /// Whether `{` after `x` opens a composite literal rather than a block.
    fn is_literal_type(&self, x: ExprId) -> bool {
        match self.arena.exprs[self.unparen(x)] {
            Expr::Bad(_)
            | Expr::Ident(_)
            | Expr::Selector { .. }
            | Expr::Index { .. }
            | Expr::IndexList { .. } => self.expr_lev >= 0,
            Expr::ArrayType { .. } | Expr::StructType { .. } | Expr::MapType { .. } => true,
            _ => false,
        }
    }

    fn type_assertion(&mut self, x: ExprId, start: usize) -> PResult<ExprId> {
        self.expect(Tok::LParen)?;
        let typ = if self.eat(Tok::KwType).is_some() {
            None
        } else {
            Some(self.parse_type()?)
        };
        self.expect(Tok::RParen)?;
        Ok(self.alloc(Expr::TypeAssert { expr: x, typ }, self.span_from(start)))
    }

    fn index_or_slice(&mut self, x: ExprId, start: usize) -> PResult<ExprId> {
        self.expect(Tok::LBrack)?;
        self.expr_lev += 1;
        let first = if self.at(Tok::Colon) {
            None
        } else {
            Some(self.expr()?)
        };

        let expr = match first {
            Some(first) if !self.at(Tok::Colon) => {
                let mut indices = vec![first];
                while self.eat(Tok::Comma).is_some() && !self.at(Tok::RBrack) {
                    indices.push(self.expr()?);
                }
                self.expr_lev -= 1;
                self.expect(Tok::RBrack)?;
                if indices.len() == 1 {
                    Expr::Index {
                        expr: x,
                        index: first,
                    }
                } else {
                    Expr::IndexList {
                        expr: x,
                        indices: self.arena.list_exprs(indices),
                    }
                }
            }
            _ => {
                let mut bounds = [first, None, None];
                let mut colons = 0;
                while colons < 2 && self.eat(Tok::Colon).is_some() {
                    colons += 1;
                    if !matches!(self.tok(), Tok::Colon | Tok::RBrack) {
                        bounds[colons] = Some(self.expr()?);
                    }
                }
                self.expr_lev -= 1;
                let r_brack = self.expect(Tok::RBrack)?;
                let slice3 = colons == 2;
                if slice3 && bounds[1].is_none() {
                    return Err(super::parse_diag(
                        r_brack,
                        "middle index required in 3-index slice",
                    ));
                }
                if slice3 && bounds[2].is_none() {
                    return Err(super::parse_diag(
                        r_brack,
                        "final index required in 3-index slice",
                    ));
                }
                Expr::Slice {
                    expr: x,
                    lo: bounds[0],
                    hi: bounds[1],
                    max: bounds[2],
                    slice3,
                }
            }
        };
        Ok(self.alloc(expr, self.span_from(start)))
    }

    /// Call or conversion; arguments may be types (`make([]int, n)`).
    fn call(&mut self, fun: ExprId, start: usize) -> PResult<ExprId> {
        self.expect(Tok::LParen)?;
        self.expr_lev += 1;
        let mut args = Vec::new();
        let mut ellipsis = None;
        while !self.at(Tok::RParen) && !self.at(Tok::Eof) && ellipsis.is_none() {
            args.push(self.expr()?);
            ellipsis = self.eat(Tok::Ellipsis);
            if self.eat(Tok::Comma).is_none() {
                break;
            }
        }
        self.expr_lev -= 1;
        self.expect(Tok::RParen)?;
        let args = self.arena.list_exprs(args);
        Ok(self.alloc(
            Expr::Call {
                fun,
                args,
                ellipsis,
            },
            self.span_from(start),
        ))
    }

    /// `{ elements }` of a composite literal; `typ` is `None` when elided.
    fn literal_value(&mut self, typ: Option<ExprId>, start: usize) -> PResult<ExprId> {
        let l_brace = self.expect(Tok::LBrace)?;
        self.expr_lev += 1;
        let mut elts = Vec::new();
        while !self.at(Tok::RBrace) && !self.at(Tok::Eof) {
            elts.push(self.element()?);
            if self.eat(Tok::Comma).is_none() {
                break;
            }
        }
        self.expr_lev -= 1;
        let r_brace = self.expect(Tok::RBrace)?;
        let elts = self.arena.list_exprs(elts);
        Ok(self.alloc(
            Expr::CompositeLit {
                typ,
                l_brace,
                elts,
                r_brace,
            },
            self.span_from(start),
        ))
    }

    fn element(&mut self) -> PResult<ExprId> {
        let start = self.pos();
        let key = self.element_value()?;
        let Some(colon) = self.eat(Tok::Colon) else {
            return Ok(key);
        };
        let value = self.element_value()?;
        Ok(self.alloc(Expr::KeyValue { key, colon, value }, self.span_from(start)))
    }

    fn element_value(&mut self) -> PResult<ExprId> {
        if self.at(Tok::LBrace) {
            let start = self.pos();
            self.nested(|p| p.literal_value(None, start))
        } else {
            self.expr()
        }
    }
}
