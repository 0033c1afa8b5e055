use godecl::{go_to_english, Category, RenderError};
use proptest::prelude::*;

#[test]
fn renders_known_fragments() {
    let cases = [
        ("", ""),
        ("var x int", "declare variable x as int"),
        ("var x, y int", "declare variables x and y as int"),
        ("var x int = 1", "declare variable x as int with initial value 1"),
        (
            "var x, y int = 1, 2",
            "declare variables x and y as int with initial values 1 and 2",
        ),
        ("var x = 1", "declare variable x with initial value 1"),
        (
            "var x, y = 1, 2",
            "declare variables x and y with initial values 1 and 2",
        ),
        (
            "var (x int; y string)",
            "declare variable x as int and variable y as string",
        ),
        (
            "var (x, y int; a, b string)",
            "declare variables x and y as int and variables a and b as string",
        ),
        ("x := 1", "short declare variable x with initial value 1"),
        (
            "x, y := 1, 2",
            "short declare variables x and y with initial values 1 and 2",
        ),
        ("*[]map[int]string", "pointer to slice of map of int to string"),
        (
            "var x *[]map[int][2]string",
            "declare variable x as pointer to slice of map of int to 2-element array of string",
        ),
        (
            "**[][]*map[int32][][3]string",
            "pointer to pointer to slice of slice of pointer to map of int32 to slice of 3-element array of string",
        ),
        (
            "func(string, bool) (int, error)",
            "function taking string and bool and returning int and error",
        ),
        (
            "var x, y int = (2+5) / 3, 4",
            "declare variables x and y as int with initial values (2 plus 5) divided by 3 and 4",
        ),
        (
            "var x func() *[5]*func() rune",
            "declare variable x as function returning pointer to 5-element array of pointer to function returning rune",
        ),
        ("i = 5", "assign to i the value 5"),
        ("i, j = 5, 6", "assign to i and j the values 5 and 6"),
        ("import \"fmt\"", "import package \"fmt\""),
        ("import myfmt \"fmt\"", "import package \"fmt\" as myfmt"),
        (
            "import (\"fmt\"; \"net/http\"; _ \"image/png\")",
            "import packages \"fmt\", \"net/http\" and \"image/png\" for side-effects",
        ),
        ("func Foo()", "function Foo"),
        ("func Foo() {}", "function Foo"),
        (
            "func Foo(x int) string",
            "function Foo taking x int and returning string",
        ),
    ];

    for (input, want) in cases {
        match go_to_english(input) {
            Ok(got) => assert_eq!(got, want, "input {input:?}"),
            Err(e) => panic!("input {input:?}: unexpected error: {e}"),
        }
    }
}

#[test]
fn multiline_group_declaration() {
    let src = "var (\n\tx int\n\ty, z string\n)";
    assert_eq!(
        go_to_english(src).unwrap(),
        "declare variable x as int and variables y and z as string"
    );
}

#[test]
fn unparseable_fragment_reports_all_categories() {
    let err = go_to_english(")").unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("failed to parse fragment of Go code:\n"), "{msg}");
    assert!(msg.contains("\nas an expression: "), "{msg}");
    assert!(msg.contains("\nas a declaration: "), "{msg}");
    assert!(msg.contains("\nas a statement: "), "{msg}");

    let RenderError::Unparseable { attempts } = err;
    assert_eq!(attempts.len(), 3);
    assert_eq!(attempts[1].category, Category::Declaration);
}

#[test]
fn go_style_reasons() {
    let RenderError::Unparseable { attempts } = go_to_english("var x int y").unwrap_err();
    assert_eq!(attempts[0].failure.to_string(), "1:1: expected operand, found 'var'");
    assert_eq!(attempts[1].failure.to_string(), "1:11: expected ';', found y");
}

#[test]
fn trailing_newline_is_accepted() {
    assert_eq!(go_to_english("x\n").unwrap(), "x");
    assert_eq!(
        go_to_english("var x int\n").unwrap(),
        "declare variable x as int"
    );
}

#[test]
fn deep_nesting_fails_cleanly() {
    let n = 100_000;
    let fragments = [
        format!("{}x{}", "(".repeat(n), ")".repeat(n)),
        format!("{}x", "*".repeat(n)),
        format!("var x {}int", "[]".repeat(n)),
        format!("x = {}true", "!".repeat(n)),
        "{".repeat(n),
        format!("x{}", ".y".repeat(n)),
        format!("x{}", " + y".repeat(n)),
    ];
    for src in &fragments {
        let err = go_to_english(src).unwrap_err();
        assert!(
            err.to_string().contains("exceeded max nesting depth"),
            "{}",
            &src[..20]
        );
    }
}

#[test]
fn moderate_nesting_still_renders() {
    let src = format!("{}x{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(go_to_english(&src).unwrap(), src);
    assert_eq!(
        go_to_english(&format!("var p {}int", "*".repeat(50))).unwrap(),
        format!("declare variable p as {}int", "pointer to ".repeat(50))
    );
}

proptest! {
    #[test]
    fn never_panics(src in "\\PC{0,40}") {
        let _ = go_to_english(&src);
    }

    #[test]
    fn never_panics_on_go_alphabet(src in "[a-z0-9 ()\\[\\]{}*.,;:=+\\-/<>!&|^\"'`\n]{0,40}") {
        let _ = go_to_english(&src);
    }
}
