use godecl_parser::lexer::{Lexer, Tok};
use godecl_parser::{parse_decl, parse_expr, parse_stmt};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]
    #[test]
    fn lexer_never_panics_and_progresses(s in ".*") {
        // End of the last real (non-injected) token.
        let mut last_real_end = 0usize;
        let max_steps = s.len().saturating_mul(2) + 2;

        for (steps, (start, tok, end)) in Lexer::new(&s).enumerate() {
            prop_assert!(start <= end && end <= s.len(), "span ({start},{end}) tok={tok:?} input={s:?}");
            prop_assert!(steps <= max_steps, "possible hang at step {steps}, input={s:?}");

            if tok == Tok::Semi && start == end {
                prop_assert!(start >= last_real_end, "injected semi behind the cursor, input={s:?}");
            } else {
                prop_assert!(start >= last_real_end, "token moved backwards, input={s:?}");
                last_real_end = end;
            }
        }
    }

    #[test]
    fn parsers_never_panic(s in "[a-z0-9 ()\\[\\]{}*.,;:=+\\-<>!&|^~\"`'\n]{0,48}") {
        let _ = parse_expr(&s);
        let _ = parse_decl(&s);
        let _ = parse_stmt(&s);
    }

    #[test]
    fn failures_point_inside_the_source(s in "\\PC{0,32}") {
        if let Err(failure) = parse_stmt(&s) {
            prop_assert!(!failure.diags.is_empty());
            prop_assert!(failure.diags.iter().all(|d| d.span.end as usize <= s.len()));
        }
    }
}
