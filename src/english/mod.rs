//! Rendering of parsed Go fragments as English.
//!
//! Every renderer is total: constructs without an English phrasing become an
//! inline placeholder and rendering carries on.

mod decl;
mod expr;
pub mod list;
mod stmt;

use godecl_parser::ast::{DeclId, ExprId, Fragment, StmtId};

/// Placeholder for expressions with no phrasing (key-value elements, bad or
/// missing nodes).
pub const BAD_EXPR: &str = "(bad expr)";

/// Per-render accumulator over a parsed fragment.
pub(crate) struct English<'f, 'src, R> {
    frag: &'f Fragment<'src, R>,
    out: String,
}

impl<'f, 'src, R: Copy> English<'f, 'src, R> {
    pub(crate) fn new(frag: &'f Fragment<'src, R>) -> Self {
        Self {
            frag,
            out: String::with_capacity(frag.src.len() * 4),
        }
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }

    #[inline]
    fn push(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Writes `items` with list punctuation, rendering each through `each`.
    fn list<T: Copy>(&mut self, items: &[T], mut each: impl FnMut(&mut Self, T)) {
        for (i, &item) in items.iter().enumerate() {
            self.push(list::separator(i, items.len()));
            each(self, item);
        }
    }

    /// Writes `items` joined by a fixed separator.
    fn joined<T: Copy>(&mut self, items: &[T], sep: &str, mut each: impl FnMut(&mut Self, T)) {
        for (i, &item) in items.iter().enumerate() {
            if i > 0 {
                self.push(sep);
            }
            each(self, item);
        }
    }
}

/// English for the expression `id` of `frag`.
pub fn expr_string<R: Copy>(frag: &Fragment<'_, R>, id: ExprId) -> String {
    let mut en = English::new(frag);
    en.expr(id);
    en.finish()
}

/// English for the declaration `id` of `frag`.
pub fn decl_string<R: Copy>(frag: &Fragment<'_, R>, id: DeclId) -> String {
    let mut en = English::new(frag);
    en.decl(id);
    en.finish()
}

/// English for the statement `id` of `frag`.
pub fn stmt_string<R: Copy>(frag: &Fragment<'_, R>, id: StmtId) -> String {
    let mut en = English::new(frag);
    en.stmt(id);
    en.finish()
}
