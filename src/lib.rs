//! Like cdecl, but for Go.
//!
//! Converts a fragment of Go code (an expression, a declaration or a
//! statement) to a possibly simplified English description:
//!
//! ```rust
//! assert_eq!(
//!     godecl::go_to_english("var x, y int = 1, 2").unwrap(),
//!     "declare variables x and y as int with initial values 1 and 2",
//! );
//! ```

pub mod english;
pub mod examples;

use std::fmt;

use godecl_parser::{parse_decl, parse_expr, parse_stmt, ParseFailure};
use miette::Diagnostic;
use thiserror::Error;

pub use english::{decl_string, expr_string, stmt_string};
pub use examples::{example, EXAMPLES};

/// Grammatical category a fragment is tried as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Expression,
    Declaration,
    Statement,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Expression => "an expression",
            Category::Declaration => "a declaration",
            Category::Statement => "a statement",
        })
    }
}

/// Why a fragment failed to parse as one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub category: Category,
    pub failure: ParseFailure,
}

#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("failed to parse fragment of Go code:\n{}", reasons(.attempts))]
    #[diagnostic(
        code(godecl::unparseable),
        help(
            "The fragment must be a single Go expression, declaration or statement. \
             Check for unbalanced brackets or a missing operand."
        )
    )]
    Unparseable { attempts: Vec<Attempt> },
}

fn reasons(attempts: &[Attempt]) -> String {
    attempts
        .iter()
        .map(|a| format!("as {}: {}", a.category, a.failure))
        .collect::<Vec<_>>()
        .join("\n")
}

type Renderer = fn(&str) -> Result<String, ParseFailure>;

fn render_expr(src: &str) -> Result<String, ParseFailure> {
    let frag = parse_expr(src)?;
    Ok(expr_string(&frag, frag.root))
}

fn render_decl(src: &str) -> Result<String, ParseFailure> {
    let frag = parse_decl(src)?;
    Ok(decl_string(&frag, frag.root))
}

fn render_stmt(src: &str) -> Result<String, ParseFailure> {
    let frag = parse_stmt(src)?;
    Ok(stmt_string(&frag, frag.root))
}

/// Categories in the order they are tried.
const CASCADE: [(Category, Renderer); 3] = [
    (Category::Expression, render_expr),
    (Category::Declaration, render_decl),
    (Category::Statement, render_stmt),
];

/// Returns a (possibly simplified) English representation of the fragment.
///
/// The fragment is tried as an expression, then as a declaration, then as a
/// statement; the first category that parses wins. The empty fragment is the
/// empty statement and renders as `""`.
pub fn go_to_english(fragment: &str) -> Result<String, RenderError> {
    let mut attempts = Vec::with_capacity(CASCADE.len());
    for (category, render) in CASCADE {
        match render(fragment) {
            Ok(english) => {
                tracing::debug!(%category, "rendered fragment");
                return Ok(english);
            }
            Err(failure) => {
                tracing::trace!(%category, error = %failure, "fragment did not parse");
                attempts.push(Attempt { category, failure });
            }
        }
    }
    tracing::debug!(fragment, "fragment is not valid Go");
    Err(RenderError::Unparseable { attempts })
}
