//! Go fragment lexer + parser.
//!
//! - Lexer uses Logos and implements Go semicolon insertion.
//! - Parser is hand-written recursive descent over the token stream and
//!   accepts exactly one expression, declaration or statement.

pub mod ast;
pub mod error;
pub mod lexer;
mod parser;
mod parser_support;

// Re-exports for convenience
pub use ast::Fragment;
pub use error::ParseFailure;
pub use lexer::Lexer;
pub use parser::{parse_decl, parse_expr, parse_stmt};
