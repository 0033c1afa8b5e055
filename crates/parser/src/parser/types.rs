//! Types, signatures and parameter lists.

use super::{parse_diag, PResult, Parser};
use crate::ast::{
    BasicLit, BasicLitKind, BinaryOp, ChanDir, Expr, ExprId, Field, FieldId, ListRef, UnaryOp,
};
use crate::lexer::Tok;
use crate::parser_support::{resolve_param_list, MixedParams, ParamDecl};

impl<'src> Parser<'src> {
    pub(super) fn parse_type(&mut self) -> PResult<ExprId> {
        match self.try_type()? {
            Some(typ) => Ok(typ),
            None => Err(self.error_expected("type")),
        }
    }

    /// Parses a type if one starts at the current token.
    pub(super) fn try_type(&mut self) -> PResult<Option<ExprId>> {
        self.nested(Self::type_inner)
    }

    fn type_inner(&mut self) -> PResult<Option<ExprId>> {
        let start = self.pos();
        let typ = match self.tok() {
            Tok::Ident(_) => return self.type_name().map(Some),
            Tok::KwFunc => return self.func_type().map(Some),
            Tok::LBrack => self.array_type()?,
            Tok::KwStruct => self.struct_type()?,
            Tok::KwInterface => self.interface_type()?,
            Tok::Star => {
                let star_pos = self.next();
                let expr = self.parse_type()?;
                Expr::Star { star_pos, expr }
            }
            Tok::KwMap => {
                self.next();
                self.expect(Tok::LBrack)?;
                let key = self.parse_type()?;
                self.expect(Tok::RBrack)?;
                let value = self.parse_type()?;
                Expr::MapType { key, value }
            }
            Tok::KwChan => {
                self.next();
                let dir = match self.eat(Tok::Arrow) {
                    Some(_) => ChanDir::Send,
                    None => ChanDir::Both,
                };
                let elem = self.parse_type()?;
                Expr::ChanType { dir, elem }
            }
            Tok::Arrow => {
                self.next();
                self.expect(Tok::KwChan)?;
                let elem = self.parse_type()?;
                Expr::ChanType {
                    dir: ChanDir::Recv,
                    elem,
                }
            }
            Tok::LParen => {
                let l_paren = self.next();
                let expr = self.parse_type()?;
                let r_paren = self.expect(Tok::RParen)?;
                Expr::Paren {
                    l_paren,
                    expr,
                    r_paren,
                }
            }
            _ => return Ok(None),
        };
        Ok(Some(self.alloc(typ, self.span_from(start))))
    }

    /// `T`, `pkg.T`, optionally instantiated: `T[A, B]`.
    fn type_name(&mut self) -> PResult<ExprId> {
        let start = self.pos();
        let name = self.ident()?;
        let mut typ = self.alloc(Expr::Ident(name), name.pos);

        if self.eat(Tok::Dot).is_some() {
            let sel = self.ident()?;
            typ = self.alloc(Expr::Selector { expr: typ, sel }, self.span_from(start));
        }

        if self.eat(Tok::LBrack).is_none() {
            return Ok(typ);
        }
        let mut args = vec![self.parse_type()?];
        while self.eat(Tok::Comma).is_some() && !self.at(Tok::RBrack) {
            args.push(self.parse_type()?);
        }
        self.expect(Tok::RBrack)?;

        let inst = if args.len() == 1 {
            Expr::Index {
                expr: typ,
                index: args[0],
            }
        } else {
            Expr::IndexList {
                expr: typ,
                indices: self.arena.list_exprs(args),
            }
        };
        Ok(self.alloc(inst, self.span_from(start)))
    }

    /// `[N]T`, `[...]T` or `[]T`.
    fn array_type(&mut self) -> PResult<Expr> {
        self.expect(Tok::LBrack)?;
        let len = match self.tok() {
            Tok::RBrack => None,
            Tok::Ellipsis => {
                let pos = self.next();
                Some(self.alloc(Expr::Ellipsis { pos, elem: None }, pos))
            }
            _ => {
                self.expr_lev += 1;
                let len = self.expr()?;
                self.expr_lev -= 1;
                Some(len)
            }
        };
        self.expect(Tok::RBrack)?;
        let elem = self.parse_type()?;
        Ok(Expr::ArrayType { len, elem })
    }

    fn struct_type(&mut self) -> PResult<Expr> {
        self.expect(Tok::KwStruct)?;
        self.expect(Tok::LBrace)?;
        let mut fields = Vec::new();
        while !self.at(Tok::RBrace) && !self.at(Tok::Eof) {
            fields.push(self.field_decl()?);
            self.expect_semi()?;
        }
        self.expect(Tok::RBrace)?;
        Ok(Expr::StructType {
            fields: self.arena.list_fields(fields),
        })
    }

    fn field_decl(&mut self) -> PResult<FieldId> {
        let start = self.pos();
        let embedded = match self.tok() {
            Tok::Star => true,
            Tok::Ident(_) => matches!(
                self.peek(1),
                Tok::Dot | Tok::Semi | Tok::RBrace | Tok::StringLit(_) | Tok::RawStringLit(_)
            ),
            _ => return Err(self.error_expected("field name or embedded type")),
        };

        let (names, typ) = if embedded {
            (ListRef::EMPTY, self.parse_type()?)
        } else {
            let names = self.ident_list()?;
            let names = self.arena.list_ident_names(names);
            (names, self.parse_type()?)
        };

        let tag = match self.tok() {
            Tok::StringLit(_) | Tok::RawStringLit(_) => Some(BasicLit {
                kind: BasicLitKind::String,
                raw: self.next(),
            }),
            _ => None,
        };

        Ok(self.alloc_field(Field { names, typ, tag }, self.span_from(start)))
    }

    fn interface_type(&mut self) -> PResult<Expr> {
        self.expect(Tok::KwInterface)?;
        self.expect(Tok::LBrace)?;
        let mut methods = Vec::new();
        while !self.at(Tok::RBrace) && !self.at(Tok::Eof) {
            methods.push(self.interface_elem()?);
            self.expect_semi()?;
        }
        self.expect(Tok::RBrace)?;
        Ok(Expr::InterfaceType {
            methods: self.arena.list_fields(methods),
        })
    }

    /// A method (`Name(params) results`) or a type union (`~int | string`).
    fn interface_elem(&mut self) -> PResult<FieldId> {
        let start = self.pos();

        if matches!(self.tok(), Tok::Ident(_)) && self.peek(1) == Tok::LParen {
            let name = self.ident()?;
            let sig_start = self.pos();
            let (params, results) = self.signature()?;
            let typ = self.alloc(
                Expr::FuncType {
                    func_pos: None,
                    params,
                    results,
                },
                self.span_from(sig_start),
            );
            let names = self.arena.list_ident_names([name]);
            return Ok(self.alloc_field(
                Field {
                    names,
                    typ,
                    tag: None,
                },
                self.span_from(start),
            ));
        }

        let mut typ = self.type_term()?;
        while self.at(Tok::Pipe) {
            self.enter()?;
            let op_pos = self.next();
            let right = self.type_term()?;
            typ = self.alloc(
                Expr::Binary {
                    left: typ,
                    op: BinaryOp::Or,
                    op_pos,
                    right,
                },
                self.span_from(start),
            );
        }
        Ok(self.alloc_field(
            Field {
                names: ListRef::EMPTY,
                typ,
                tag: None,
            },
            self.span_from(start),
        ))
    }

    fn type_term(&mut self) -> PResult<ExprId> {
        let start = self.pos();
        let Some(op_pos) = self.eat(Tok::Tilde) else {
            return self.parse_type();
        };
        let expr = self.parse_type()?;
        Ok(self.alloc(
            Expr::Unary {
                op: UnaryOp::Tilde,
                op_pos,
                expr,
            },
            self.span_from(start),
        ))
    }

    // =========================================================================
    // SIGNATURES
    // =========================================================================

    pub(super) fn func_type(&mut self) -> PResult<ExprId> {
        let start = self.pos();
        let func_pos = self.expect(Tok::KwFunc)?;
        let (params, results) = self.signature()?;
        Ok(self.alloc(
            Expr::FuncType {
                func_pos: Some(func_pos),
                params,
                results,
            },
            self.span_from(start),
        ))
    }

    pub(super) fn signature(&mut self) -> PResult<(ListRef<FieldId>, ListRef<FieldId>)> {
        let params = self.parameters()?;
        let results = if self.at(Tok::LParen) {
            self.parameters()?
        } else {
            let start = self.pos();
            match self.try_type()? {
                Some(typ) => {
                    let field = Field {
                        names: ListRef::EMPTY,
                        typ,
                        tag: None,
                    };
                    let field = self.alloc_field(field, self.span_from(start));
                    self.arena.list_fields([field])
                }
                None => ListRef::EMPTY,
            }
        };
        Ok((params, results))
    }

    /// `( [ParameterList [","]] )`
    pub(super) fn parameters(&mut self) -> PResult<ListRef<FieldId>> {
        self.expect(Tok::LParen)?;
        let mut params = Vec::new();
        while !self.at(Tok::RParen) && !self.at(Tok::Eof) {
            params.push(self.param_decl()?);
            if self.eat(Tok::Comma).is_none() {
                break;
            }
        }
        self.expect(Tok::RParen)?;

        let fields = resolve_param_list(&mut self.arena, params).map_err(|MixedParams(span)| {
            parse_diag(span, "mixed named and unnamed parameters")
        })?;
        Ok(self.arena.list_fields(fields))
    }

    fn param_decl(&mut self) -> PResult<ParamDecl> {
        let start = self.pos();
        if !matches!(self.tok(), Tok::Ident(_)) {
            let typ = self.param_type()?;
            return Ok(ParamDecl::typed(None, typ, self.span_from(start)));
        }

        match self.peek(1) {
            Tok::Comma | Tok::RParen => Ok(ParamDecl::bare(self.ident()?)),
            Tok::Dot => {
                let typ = self.type_name()?;
                Ok(ParamDecl::typed(None, typ, self.span_from(start)))
            }
            _ => {
                let name = self.ident()?;
                let typ = self.param_type()?;
                Ok(ParamDecl::typed(Some(name), typ, self.span_from(start)))
            }
        }
    }

    /// A parameter type, possibly variadic (`...T`).
    fn param_type(&mut self) -> PResult<ExprId> {
        let Some(pos) = self.eat(Tok::Ellipsis) else {
            return self.parse_type();
        };
        let elem = self.parse_type()?;
        Ok(self.alloc(
            Expr::Ellipsis {
                pos,
                elem: Some(elem),
            },
            self.span_from(pos.start as usize),
        ))
    }
}
