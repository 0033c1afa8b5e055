//! Declarations and their specifications.

use super::{PResult, Parser};
use crate::ast::{
    BasicLit, BasicLitKind, Decl, DeclId, Expr, FuncDecl, GenDecl, GenDeclKind, ImportName,
    ImportSpec, Spec, TypeSpec, ValueSpec,
};
use crate::lexer::Tok;

impl<'src> Parser<'src> {
    pub(super) fn decl(&mut self) -> PResult<DeclId> {
        match self.tok() {
            Tok::KwFunc => self.func_decl(),
            _ => self.gen_decl(),
        }
    }

    /// `import`, `const`, `type` or `var`, single or parenthesized.
    pub(super) fn gen_decl(&mut self) -> PResult<DeclId> {
        let start = self.pos();
        let kind = match self.tok() {
            Tok::KwImport => GenDeclKind::Import,
            Tok::KwConst => GenDeclKind::Const,
            Tok::KwType => GenDeclKind::Type,
            Tok::KwVar => GenDeclKind::Var,
            _ => return Err(self.error_expected("declaration")),
        };
        let kw_pos = self.next();

        let mut specs = Vec::new();
        let (l_paren, r_paren) = match self.eat(Tok::LParen) {
            Some(l_paren) => {
                while !self.at(Tok::RParen) && !self.at(Tok::Eof) {
                    specs.push(self.spec(kind)?);
                    self.expect_semi()?;
                }
                (Some(l_paren), Some(self.expect(Tok::RParen)?))
            }
            None => {
                specs.push(self.spec(kind)?);
                (None, None)
            }
        };

        let decl = Decl::Gen(GenDecl {
            kw_pos,
            kind,
            l_paren,
            specs: self.arena.list_specs(specs),
            r_paren,
        });
        Ok(self.arena.decls.alloc(decl, self.span_from(start)))
    }

    fn spec(&mut self, kind: GenDeclKind) -> PResult<Spec> {
        match kind {
            GenDeclKind::Import => self.import_spec().map(Spec::Import),
            GenDeclKind::Const | GenDeclKind::Var => self.value_spec(kind).map(Spec::Value),
            GenDeclKind::Type => self.type_spec().map(Spec::Type),
        }
    }

    fn import_spec(&mut self) -> PResult<ImportSpec> {
        let name = match self.tok() {
            Tok::Dot => Some(ImportName::Dot(self.next())),
            Tok::Ident("_") => Some(ImportName::Blank(self.next())),
            Tok::Ident(_) => Some(ImportName::Name(self.ident()?)),
            _ => None,
        };
        let path = match self.tok() {
            Tok::StringLit(_) | Tok::RawStringLit(_) => BasicLit {
                kind: BasicLitKind::String,
                raw: self.next(),
            },
            _ => return Err(self.error_expected("import path")),
        };
        Ok(ImportSpec { name, path })
    }

    fn value_spec(&mut self, kind: GenDeclKind) -> PResult<ValueSpec> {
        let names = self.ident_list()?;
        let mut typ = None;
        let mut values = Vec::new();

        if kind == GenDeclKind::Const {
            // Type and values are both optional inside const groups.
            if !matches!(self.tok(), Tok::Eof | Tok::Semi | Tok::RParen) {
                typ = self.try_type()?;
                if self.eat(Tok::Assign).is_some() {
                    values = self.expr_list()?;
                }
            }
        } else {
            if !self.at(Tok::Assign) {
                typ = Some(self.parse_type()?);
            }
            if self.eat(Tok::Assign).is_some() {
                values = self.expr_list()?;
            }
        }

        Ok(ValueSpec {
            names: self.arena.list_ident_names(names),
            typ,
            values: self.arena.list_exprs(values),
        })
    }

    fn type_spec(&mut self) -> PResult<TypeSpec> {
        let name = self.ident()?;
        let assign_pos = self.eat(Tok::Assign);
        let typ = self.parse_type()?;
        Ok(TypeSpec {
            name,
            assign_pos,
            typ,
        })
    }

    /// `func [Receiver] Name Signature [Body]`
    fn func_decl(&mut self) -> PResult<DeclId> {
        let start = self.pos();
        let func_pos = self.expect(Tok::KwFunc)?;
        let recv = match self.tok() {
            Tok::LParen => Some(self.parameters()?),
            _ => None,
        };
        let name = self.ident()?;
        let (params, results) = self.signature()?;
        let typ = self.alloc(
            Expr::FuncType {
                func_pos: Some(func_pos),
                params,
                results,
            },
            self.span_from(start),
        );
        let body = match self.tok() {
            Tok::LBrace => Some(self.block()?),
            _ => None,
        };

        let decl = Decl::Func(FuncDecl {
            func_pos,
            recv,
            name,
            typ,
            body,
        });
        Ok(self.arena.decls.alloc(decl, self.span_from(start)))
    }
}
