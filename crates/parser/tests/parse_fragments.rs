use godecl_parser::ast::{
    AssignOp, BinaryOp, ChanDir, Decl, Expr, GenDeclKind, ImportName, Spec, Stmt,
};
use godecl_parser::{parse_decl, parse_expr, parse_stmt};

fn expr_error(src: &str) -> String {
    parse_expr(src).unwrap_err().to_string()
}

fn stmt_error(src: &str) -> String {
    parse_stmt(src).unwrap_err().to_string()
}

#[test]
fn binary_precedence() {
    let frag = parse_expr("a + b*c == d").unwrap();
    let Expr::Binary { left, op, .. } = *frag.expr(frag.root) else {
        panic!("not binary");
    };
    assert_eq!(op, BinaryOp::Eq);
    let Expr::Binary { op, right, .. } = *frag.expr(left) else {
        panic!("not binary");
    };
    assert_eq!(op, BinaryOp::Add);
    assert!(matches!(frag.expr(right), Expr::Binary { op: BinaryOp::Mul, .. }));
}

#[test]
fn parens_are_kept() {
    let frag = parse_expr("(x)").unwrap();
    assert!(matches!(frag.expr(frag.root), Expr::Paren { .. }));
}

#[test]
fn receive_channel_type() {
    let frag = parse_expr("<-chan <-chan int").unwrap();
    let Expr::ChanType { dir, elem } = *frag.expr(frag.root) else {
        panic!("not a channel");
    };
    assert_eq!(dir, ChanDir::Recv);
    assert!(matches!(
        frag.expr(elem),
        Expr::ChanType { dir: ChanDir::Recv, .. }
    ));
}

#[test]
fn params_resolve_names_and_types() {
    let frag = parse_expr("func(a, b int, c string)").unwrap();
    let Expr::FuncType { params, .. } = *frag.expr(frag.root) else {
        panic!("not a func type");
    };
    let fields = frag.arena.fields_list(params);
    assert_eq!(fields.len(), 2);
    let names: Vec<_> = frag
        .arena
        .ident_names(frag.field(fields[0]).names)
        .iter()
        .map(|&n| frag.name(n))
        .collect();
    assert_eq!(names, ["a", "b"]);
    assert_eq!(frag.arena.num_fields(params), 3);
}

#[test]
fn mixed_params_are_rejected() {
    assert_eq!(
        expr_error("func(a int, string)"),
        "1:13: mixed named and unnamed parameters"
    );
}

#[test]
fn grouped_import() {
    let frag = parse_decl("import (\n\t. \"math\"\n\t_ \"embed\"\n\tf \"fmt\"\n)").unwrap();
    let Decl::Gen(decl) = *frag.decl(frag.root) else {
        panic!("not a gen decl");
    };
    assert_eq!(decl.kind, GenDeclKind::Import);
    let names: Vec<_> = frag
        .arena
        .specs_list(decl.specs)
        .iter()
        .map(|s| match s {
            Spec::Import(i) => i.name,
            _ => panic!("not an import"),
        })
        .collect();
    assert!(matches!(names[0], Some(ImportName::Dot(_))));
    assert!(matches!(names[1], Some(ImportName::Blank(_))));
    assert!(matches!(names[2], Some(ImportName::Name(_))));
}

#[test]
fn type_alias_and_definition() {
    let frag = parse_decl("type T1 = T2").unwrap();
    let Decl::Gen(decl) = *frag.decl(frag.root) else {
        panic!("not a gen decl");
    };
    let Spec::Type(spec) = frag.arena.specs_list(decl.specs)[0] else {
        panic!("not a type spec");
    };
    assert!(spec.assign_pos.is_some());
    assert_eq!(frag.name(spec.name), "T1");
}

#[test]
fn method_declaration_keeps_receiver() {
    let frag = parse_decl("func (s *Stack) Push(v int) { s.items = append(s.items, v) }").unwrap();
    let Decl::Func(f) = *frag.decl(frag.root) else {
        panic!("not a func decl");
    };
    assert!(f.recv.is_some());
    assert!(f.body.is_some());
    assert_eq!(frag.name(f.name), "Push");
}

#[test]
fn statements_by_kind() {
    let cases = [
        ("x, y := 1, 2", "AssignStmt"),
        ("x <<= 2", "AssignStmt"),
        ("ch <- 1", "SendStmt"),
        ("i--", "IncDecStmt"),
        ("defer wg.Done()", "DeferStmt"),
        ("return", "ReturnStmt"),
        ("goto done", "BranchStmt"),
        ("{ x++ }", "BlockStmt"),
        ("if x := f(); x > 0 { } else if y { } else { }", "IfStmt"),
        ("for { }", "ForStmt"),
        ("for range ch { }", "RangeStmt"),
        ("for i := range 10 { }", "RangeStmt"),
        ("switch { case x > 1: default: }", "SwitchStmt"),
        ("switch v.(type) { case nil, error: }", "TypeSwitchStmt"),
        ("select { case v := <-ch: _ = v; case out <- 1: default: }", "SelectStmt"),
        ("var x int", "DeclStmt"),
        ("f(T{1})", "ExprStmt"),
    ];
    for (src, kind) in cases {
        let frag = parse_stmt(src).unwrap_or_else(|e| panic!("{src:?}: {e}"));
        assert_eq!(frag.stmt(frag.root).kind_name(), kind, "{src:?}");
    }
}

#[test]
fn compound_assignment_operator() {
    let frag = parse_stmt("x &^= y").unwrap();
    assert!(matches!(
        frag.stmt(frag.root),
        Stmt::Assign { op: AssignOp::AndNotAssign, .. }
    ));
}

#[test]
fn composite_literal_needs_parens_in_if_header() {
    assert!(parse_stmt("if x == (T{}) { }").is_ok());
    assert!(parse_stmt("if x == T{} { }").is_err());
}

#[test]
fn go_style_messages() {
    assert_eq!(expr_error(")"), "1:1: expected operand, found ')'");
    assert_eq!(expr_error("x;"), "1:2: expected 'EOF', found ';'");
    assert_eq!(stmt_error("if { }"), "1:4: missing condition in if statement");
    assert_eq!(stmt_error("go f"), "1:4: expression in go must be function call");
    assert_eq!(
        stmt_error("for i := 0; i < 3; j := 1 { }"),
        "1:20: cannot declare in post statement of for loop"
    );
    assert_eq!(stmt_error("a, b"), "1:1: expected 1 expression");
    assert_eq!(
        parse_decl("var x int y").unwrap_err().to_string(),
        "1:11: expected ';', found y"
    );
}

#[test]
fn lexical_errors_come_first() {
    let failure = parse_expr("x + 09").unwrap_err();
    assert_eq!(failure.to_string(), "1:5: invalid numeric literal (and 1 more error)");
}

#[test]
fn empty_input_is_empty_statement() {
    let frag = parse_stmt("").unwrap();
    assert!(matches!(frag.stmt(frag.root), Stmt::Empty(_)));
    assert!(parse_expr("").is_err());
    assert!(parse_decl("").is_err());
}

#[test]
fn only_one_fragment_at_a_time() {
    assert!(parse_stmt("x := 1; y := 2").is_err());
    assert!(parse_decl("var x int\nvar y int").is_err());
}

#[test]
fn nesting_depth_is_bounded() {
    let deep = format!("{}x{}", "(".repeat(1_000), ")".repeat(1_000));
    assert!(expr_error(&deep).ends_with("exceeded max nesting depth"));
    let deep_else = format!("if a {{}}{}", " else if a {}".repeat(1_000));
    assert!(stmt_error(&deep_else).ends_with("exceeded max nesting depth"));
    let deep_literal = format!("T{}{}", "{".repeat(1_000), "}".repeat(1_000));
    assert!(expr_error(&deep_literal).ends_with("exceeded max nesting depth"));

    let shallow = format!("{}x{}", "(".repeat(64), ")".repeat(64));
    assert!(parse_expr(&shallow).is_ok());
}

#[test]
fn block_statements_in_order() {
    let frag = parse_stmt("{ x := 1; y++\n\tz <- x }").unwrap();
    let Stmt::Block(block) = *frag.stmt(frag.root) else {
        panic!("expected block");
    };
    let kinds: Vec<_> = frag
        .arena
        .stmts_list(block.stmts)
        .iter()
        .map(|&id| frag.stmt(id).kind_name())
        .collect();
    assert_eq!(kinds, ["AssignStmt", "IncDecStmt", "SendStmt"]);
}
