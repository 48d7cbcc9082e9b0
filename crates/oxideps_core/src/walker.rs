//! Depth-first traversal over a parsed program.
//!
//! Nodes are reported in pre-order: a node is seen before any of its
//! children, and siblings are seen in source order. For non-overlapping
//! constructs this is the order they appear in the file.

use oxc_ast::{AstKind, ast::Program};
use oxc_ast_visit::Visit;

struct Walker<F> {
    callback: F,
}

impl<'a, F> Visit<'a> for Walker<F>
where
    F: FnMut(AstKind<'a>),
{
    fn enter_node(&mut self, kind: AstKind<'a>) {
        (self.callback)(kind);
    }
}

/// Call `callback` once for every node of `program`, in pre-order.
pub fn walk<'a, F>(program: &Program<'a>, callback: F)
where
    F: FnMut(AstKind<'a>),
{
    let mut walker = Walker { callback };
    walker.visit_program(program);
}
