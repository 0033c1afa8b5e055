//! Statements.

use godecl_parser::ast::{AssignOp, Stmt, StmtId};

use super::{list, English};

impl<R: Copy> English<'_, '_, R> {
    pub(crate) fn stmt(&mut self, id: StmtId) {
        let frag = self.frag;
        let stmt = *frag.stmt(id);
        match stmt {
            Stmt::Empty(_) => {}
            Stmt::Decl(decl) => self.decl(decl),
            Stmt::Expr(x) => self.expr(x),
            Stmt::Assign { lhs, op, rhs, .. } => {
                let lhs = frag.arena.exprs_list(lhs);
                let rhs = frag.arena.exprs_list(rhs);
                let (lead, value) = match op {
                    AssignOp::Define => ("short declare ", " with initial "),
                    AssignOp::Assign => ("assign to ", " the "),
                    op => {
                        self.push(&format!("<TODO: '{}'>", op.as_str()));
                        return;
                    }
                };

                self.push(lead);
                if op == AssignOp::Define {
                    self.push(&list::noun("variable", lhs.len()));
                    self.push(" ");
                }
                self.list(lhs, Self::expr);
                if !rhs.is_empty() {
                    self.push(value);
                    self.push(&list::noun("value", rhs.len()));
                    self.push(" ");
                }
                self.list(rhs, Self::expr);
            }
            _ => self.push(&format!("<TODO: {}>", stmt.kind_name())),
        }
    }
}

#[cfg(test)]
mod tests {
    use godecl_parser::parse_stmt;

    use crate::english::stmt_string;

    fn render(src: &str) -> String {
        let frag = parse_stmt(src).unwrap();
        stmt_string(&frag, frag.root)
    }

    #[test]
    fn assignments() {
        assert_eq!(render("x := 1"), "short declare variable x with initial value 1");
        assert_eq!(
            render("a, b, c = 1, 2, 3"),
            "assign to a, b and c the values 1, 2 and 3"
        );
        assert_eq!(render("p.x = f()"), "assign to p.x the value f()");
    }

    #[test]
    fn compound_assignment_is_a_placeholder() {
        assert_eq!(render("x += 1"), "<TODO: '+='>");
        assert_eq!(render("x &^= mask"), "<TODO: '&^='>");
    }

    #[test]
    fn other_statements_are_placeholders() {
        assert_eq!(render("return x"), "<TODO: ReturnStmt>");
        assert_eq!(render("x++"), "<TODO: IncDecStmt>");
        assert_eq!(render("ch <- v"), "<TODO: SendStmt>");
        assert_eq!(render("for i := 0; i < n; i++ {}"), "<TODO: ForStmt>");
        assert_eq!(render("for k, v := range m {}"), "<TODO: RangeStmt>");
        assert_eq!(render("if err != nil { return err }"), "<TODO: IfStmt>");
        assert_eq!(render("switch x := v.(type) { case int: }"), "<TODO: TypeSwitchStmt>");
        assert_eq!(render("go f()"), "<TODO: GoStmt>");
        assert_eq!(render("L: break L"), "<TODO: LabeledStmt>");
    }

    #[test]
    fn empty_statement_renders_nothing() {
        assert_eq!(render(""), "");
        assert_eq!(render(";"), "");
    }

    #[test]
    fn declaration_statement() {
        assert_eq!(render("var x int"), "declare variable x as int");
    }
}
