use crate::ast::{self, ExprId, FieldId, IdentName, Span};

/// One comma-separated entry of a parameter or result list, before it is
/// known whether the list uses parameter names.
#[derive(Clone, Debug)]
pub struct ParamDecl {
    pub name: Option<IdentName>,
    pub typ: Option<ExprId>,
    pub span: Span,
}

impl ParamDecl {
    /// A lone identifier: either a parameter name or a type name.
    pub fn bare(name: IdentName) -> Self {
        Self {
            name: Some(name),
            typ: None,
            span: name.pos,
        }
    }

    /// Either `name Type` or just `Type`.
    pub fn typed(name: Option<IdentName>, typ: ExprId, span: Span) -> Self {
        Self {
            name,
            typ: Some(typ),
            span,
        }
    }
}

/// Position of the entry that breaks Go's all-named-or-all-unnamed rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MixedParams(pub Span);

/// Groups parameter entries into fields.
///
/// If any entry is `name Type`, every entry must carry a name and lone
/// identifiers are names sharing the next type (`a, b int`). Otherwise all
/// entries are types, lone identifiers included (`string, bool`).
pub fn resolve_param_list(
    arena: &mut ast::AstArena,
    params: Vec<ParamDecl>,
) -> Result<Vec<FieldId>, MixedParams> {
    let named = params.iter().any(|p| p.name.is_some() && p.typ.is_some());
    let mut out = Vec::with_capacity(params.len());

    if !named {
        for param in params {
            let typ = match (param.typ, param.name) {
                (Some(typ), _) => typ,
                (None, Some(name)) => arena.exprs.alloc(ast::Expr::Ident(name), name.pos),
                (None, None) => return Err(MixedParams(param.span)),
            };
            let field = ast::Field {
                names: ast::ListRef::EMPTY,
                typ,
                tag: None,
            };
            out.push(arena.fields.alloc(field, param.span));
        }
        return Ok(out);
    }

    let mut pending: Vec<IdentName> = Vec::new();
    let mut pending_start: Option<u32> = None;
    let mut last_span = Span::default();

    for param in params {
        last_span = param.span;
        let Some(name) = param.name else {
            return Err(MixedParams(param.span));
        };

        match param.typ {
            None => {
                pending_start.get_or_insert(param.span.start);
                pending.push(name);
            }
            Some(typ) => {
                pending.push(name);
                let names = arena.list_ident_names(pending.drain(..));
                let start = pending_start.take().unwrap_or(param.span.start);
                let span = Span {
                    start,
                    end: param.span.end,
                };
                let field = ast::Field {
                    names,
                    typ,
                    tag: None,
                };
                out.push(arena.fields.alloc(field, span));
            }
        }
    }

    if !pending.is_empty() {
        return Err(MixedParams(last_span));
    }
    Ok(out)
}
