//! Built-in example fragments, kept in gofmt style.

/// Example inputs, one of which is shown to a user who asks for one.
pub const EXAMPLES: &[&str] = &[
    "var x *[]map[int][2]string",
    "var x func() *[5]*func() rune",
    "var x, y int = 1, 2",
    "var x = (2+5)/3.0 + 4",
    "type T1 = T2",
    "import _ \"image/png\"",
    "func(string, bool) (int, error)",
    "x, y := 1, 2",
];

/// The `n`th example, wrapping around the list.
pub fn example(n: usize) -> &'static str {
    EXAMPLES[n % EXAMPLES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::go_to_english;

    #[test]
    fn every_example_renders() {
        for src in EXAMPLES {
            let english = go_to_english(src).unwrap_or_else(|e| panic!("{src:?}: {e}"));
            assert!(!english.is_empty(), "{src:?} rendered empty");
        }
    }

    // gofmt would leave these alone: no stray or doubled blanks.
    #[test]
    fn examples_are_tidy() {
        for src in EXAMPLES {
            assert_eq!(src.trim(), *src, "{src:?} has surrounding whitespace");
            assert!(!src.contains("  "), "{src:?} has a double space");
            assert!(!src.contains('\t'), "{src:?} has a tab");
        }
    }

    #[test]
    fn example_wraps_around() {
        assert_eq!(example(0), EXAMPLES[0]);
        assert_eq!(example(EXAMPLES.len()), EXAMPLES[0]);
        assert_eq!(example(EXAMPLES.len() + 2), EXAMPLES[2]);
    }

    #[test]
    fn floating_division_example() {
        assert_eq!(
            go_to_english(example(3)).unwrap(),
            "declare variable x with initial value (2 plus 5) divided by 3.0 plus 4"
        );
    }
}
