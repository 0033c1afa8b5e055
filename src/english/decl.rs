//! Declarations and their specifications.

use godecl_parser::ast::{Decl, DeclId, Expr, GenDeclKind, ImportName, Spec};

use super::{list, English};

impl<R: Copy> English<'_, '_, R> {
    pub(crate) fn decl(&mut self, id: DeclId) {
        let frag = self.frag;
        match *frag.decl(id) {
            Decl::Gen(decl) => {
                let specs = frag.arena.specs_list(decl.specs);
                match decl.kind {
                    GenDeclKind::Import => {
                        self.push(&list::noun("import package", specs.len()));
                        self.push(" ");
                    }
                    _ => self.push("declare "),
                }
                self.list(specs, |en, spec| {
                    let noun = match decl.kind {
                        GenDeclKind::Var => "variable",
                        GenDeclKind::Const => "constant",
                        GenDeclKind::Type => "type",
                        GenDeclKind::Import => return en.spec(spec),
                    };
                    en.push(&list::noun(noun, spec.name_count()));
                    en.push(" ");
                    en.spec(spec);
                });
            }
            Decl::Func(decl) => {
                self.push("function ");
                self.push(frag.name(decl.name));
                // Receiver and body have no phrasing.
                if let Expr::FuncType {
                    params, results, ..
                } = *frag.expr(decl.typ)
                {
                    if !params.is_empty() || !results.is_empty() {
                        self.push(" ");
                    }
                    self.signature(params, results);
                }
            }
            Decl::Bad(_) => self.push("<TODO: BadDecl>"),
        }
    }

    fn spec(&mut self, spec: Spec) {
        let frag = self.frag;
        match spec {
            Spec::Value(v) => {
                self.list(frag.arena.ident_names(v.names), |en, name| {
                    en.push(frag.name(name))
                });
                if let Some(typ) = v.typ {
                    self.push(" as ");
                    self.expr(typ);
                }
                let values = frag.arena.exprs_list(v.values);
                if !values.is_empty() {
                    self.push(" with initial ");
                    self.push(&list::noun("value", values.len()));
                    self.push(" ");
                }
                self.list(values, Self::expr);
            }
            // Aliases read the same as definitions.
            Spec::Type(t) => {
                self.push(frag.name(t.name));
                self.push(" as ");
                self.expr(t.typ);
            }
            Spec::Import(i) => {
                self.push(frag.text(i.path.raw));
                match i.name {
                    None => {}
                    Some(ImportName::Name(name)) => {
                        self.push(" as ");
                        self.push(frag.name(name));
                    }
                    Some(ImportName::Dot(_)) => self.push(" as ."),
                    Some(ImportName::Blank(_)) => self.push(" for side-effects"),
                }
            }
        }
    }
}
