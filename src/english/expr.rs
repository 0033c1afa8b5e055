//! Expressions, types and signatures.

use godecl_parser::ast::{BinaryOp, Expr, ExprId, FieldId, ListRef};

use super::{English, BAD_EXPR};

impl<R: Copy> English<'_, '_, R> {
    /// Source parentheses survive as `Expr::Paren`, so none are added here.
    pub(crate) fn expr(&mut self, id: ExprId) {
        let frag = self.frag;
        match *frag.expr(id) {
            Expr::Ident(name) => self.push(frag.name(name)),
            Expr::BasicLit(lit) => self.push(frag.text(lit.raw)),
            Expr::Ellipsis { elem, .. } => {
                self.push("...");
                if let Some(elem) = elem {
                    self.expr(elem);
                }
            }
            Expr::FuncLit { typ, .. } => self.literal(Some(typ)),
            Expr::CompositeLit { typ, .. } => self.literal(typ),
            Expr::Paren { expr, .. } => {
                self.push("(");
                self.expr(expr);
                self.push(")");
            }
            Expr::Selector { expr, sel } => {
                self.expr(expr);
                self.push(".");
                self.push(frag.name(sel));
            }
            Expr::Index { expr, index } => {
                self.expr(expr);
                self.push("[");
                self.expr(index);
                self.push("]");
            }
            Expr::IndexList { expr, indices } => {
                self.expr(expr);
                self.push("[");
                self.joined(frag.arena.exprs_list(indices), ", ", Self::expr);
                self.push("]");
            }
            Expr::Slice {
                expr,
                lo,
                hi,
                max,
                slice3,
            } => {
                self.expr(expr);
                self.push("[");
                self.opt_expr(lo);
                self.push(":");
                self.opt_expr(hi);
                if slice3 {
                    self.push(":");
                    self.opt_expr(max);
                }
                self.push("]");
            }
            Expr::TypeAssert { expr, typ } => {
                self.expr(expr);
                self.push(".(");
                match typ {
                    Some(typ) => self.expr(typ),
                    None => self.push("type"),
                }
                self.push(")");
            }
            Expr::Call {
                fun,
                args,
                ellipsis,
            } => {
                self.expr(fun);
                self.push("(");
                self.joined(frag.arena.exprs_list(args), ", ", Self::expr);
                if ellipsis.is_some() {
                    self.push("...");
                }
                self.push(")");
            }
            Expr::Star { expr, .. } => {
                self.push("pointer to ");
                self.expr(expr);
            }
            Expr::Unary { op, expr, .. } => {
                self.push(op.as_str());
                self.expr(expr);
            }
            Expr::Binary {
                left, op, right, ..
            } => {
                self.expr(left);
                self.push(" ");
                self.push(match op {
                    BinaryOp::Add => "plus",
                    BinaryOp::Sub => "minus",
                    BinaryOp::Div => "divided by",
                    op => op.as_str(),
                });
                self.push(" ");
                self.expr(right);
            }
            Expr::ArrayType { len, elem } => {
                match len {
                    None => self.push("slice of "),
                    Some(len) => {
                        self.expr(len);
                        self.push("-element array of ");
                    }
                }
                self.expr(elem);
            }
            Expr::StructType { fields } => {
                self.push("struct{");
                self.field_list(fields, "; ", false);
                self.push("}");
            }
            Expr::FuncType {
                params, results, ..
            } => {
                self.push("function");
                if !params.is_empty() || !results.is_empty() {
                    self.push(" ");
                }
                self.signature(params, results);
            }
            Expr::InterfaceType { methods } => {
                self.push("interface{");
                self.field_list(methods, "; ", true);
                self.push("}");
            }
            Expr::MapType { key, value } => {
                self.push("map of ");
                self.expr(key);
                self.push(" to ");
                self.expr(value);
            }
            Expr::ChanType { dir, elem } => {
                self.push(dir.as_str());
                self.expr(elem);
            }
            Expr::KeyValue { .. } | Expr::Bad(_) => self.push(BAD_EXPR),
        }
    }

    fn opt_expr(&mut self, id: Option<ExprId>) {
        if let Some(id) = id {
            self.expr(id);
        }
    }

    /// `(T literal)` for function and composite literals.
    fn literal(&mut self, typ: Option<ExprId>) {
        self.push("(");
        match typ {
            Some(typ) => self.expr(typ),
            None => self.push(BAD_EXPR),
        }
        self.push(" literal)");
    }

    /// `taking A and B and returning C`; either half may be absent.
    pub(crate) fn signature(&mut self, params: ListRef<FieldId>, results: ListRef<FieldId>) {
        if !params.is_empty() {
            self.push("taking ");
            self.field_list(params, " and ", false);
        }
        if !params.is_empty() && !results.is_empty() {
            self.push(" and ");
        }
        if !results.is_empty() {
            self.push("returning ");
            self.field_list(results, " and ", false);
        }
    }

    fn field_list(&mut self, fields: ListRef<FieldId>, sep: &str, iface: bool) {
        let frag = self.frag;
        self.joined(frag.arena.fields_list(fields), sep, |en, id| {
            let field = *frag.field(id);
            let names = frag.arena.ident_names(field.names);
            en.joined(names, ", ", |en, name| en.push(frag.name(name)));

            // A method name is followed by a space and its signature: `Read taking ...`.
            if iface {
                if let Expr::FuncType {
                    params, results, ..
                } = *frag.expr(field.typ)
                {
                    if !params.is_empty() || !results.is_empty() {
                        en.push(" ");
                        en.signature(params, results);
                    }
                    return;
                }
            }

            if !names.is_empty() {
                en.push(" ");
            }
            en.expr(field.typ);
        });
    }
}

#[cfg(test)]
mod tests {
    use godecl_parser::parse_expr;

    use crate::english::expr_string;

    fn render(src: &str) -> String {
        let frag = parse_expr(src).unwrap();
        expr_string(&frag, frag.root)
    }

    #[test]
    fn pointers_slices_and_maps() {
        assert_eq!(render("*[]map[int]string"), "pointer to slice of map of int to string");
        assert_eq!(render("[...]int"), "...-element array of int");
    }

    #[test]
    fn channels_keep_direction() {
        assert_eq!(render("chan int"), "chan int");
        assert_eq!(render("chan<- int"), "chan<- int");
        assert_eq!(render("<-chan int"), "<-chan int");
        assert_eq!(render("<-ch"), "<-ch");
    }

    #[test]
    fn struct_and_interface_members() {
        assert_eq!(
            render("struct{a, b int; c string `json:\"c\"`; io.Reader}"),
            "struct{a, b int; c string; io.Reader}"
        );
        assert_eq!(
            render("interface{Read(p []byte) (int, error); Close() error; String()}"),
            "interface{Read taking p slice of byte and returning int and error; Close returning error; String}"
        );
        assert_eq!(render("interface{~int | string}"), "interface{~int | string}");
    }

    #[test]
    fn operators_and_parens() {
        assert_eq!(render("(2+5) / 3"), "(2 plus 5) divided by 3");
        assert_eq!(render("a - b*c"), "a minus b * c");
        assert_eq!(render("!ok && x >= 1"), "!ok && x >= 1");
        assert_eq!(render("&v"), "&v");
    }

    #[test]
    fn calls_and_accessors() {
        assert_eq!(render("fmt.Println(a, b...)"), "fmt.Println(a, b...)");
        assert_eq!(render("s[1:2:3]"), "s[1:2:3]");
        assert_eq!(render("s[:]"), "s[:]");
        assert_eq!(render("m[k]"), "m[k]");
        assert_eq!(render("Pair[int, string]"), "Pair[int, string]");
        assert_eq!(render("x.(fmt.Stringer)"), "x.(fmt.Stringer)");
        assert_eq!(render("x.(type)"), "x.(type)");
    }

    #[test]
    fn literals_are_simplified() {
        assert_eq!(render("[]int{1, 2}"), "(slice of int literal)");
        assert_eq!(render("func() {}"), "(function literal)");
        assert_eq!(render("map[string]int{\"a\": 1}"), "(map of string to int literal)");
        assert_eq!(render("1.5e3"), "1.5e3");
        assert_eq!(render("'x'"), "'x'");
    }

    #[test]
    fn variadic_signature() {
        assert_eq!(
            render("func(format string, args ...any)"),
            "function taking format string and args ...any"
        );
    }
}
