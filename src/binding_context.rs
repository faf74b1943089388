//! Binding contexts: the ordered record of top-level `@ name = term` macro
//! definitions, shared between the named and de Bruijn parsers via a generic
//! term parameter.

use std::rc::Rc;

/// Context of macro bindings for the named term encoding.
pub type NamedContext = BindingContext<crate::named_tree_impl::named_tree_ast::ExprNode>;

/// Context of macro bindings for the de Bruijn term encoding.
pub type DeBruijnContext = BindingContext<crate::debruijn_tree_impl::debruijn_tree_ast::ExprNode>;

/// An ordered sequence of (name, term) pairs, one per macro definition, in
/// declaration order. The context owns one reference to each stored term; a
/// lookup hands out an additional shared reference without removing the
/// entry.
#[derive(Debug)]
pub struct BindingContext<T> {
    entries: Vec<(String, Rc<T>)>,
}

impl<T> BindingContext<T> {
    /// Creates an empty binding context.
    pub fn new() -> Self {
        return BindingContext {
            entries: Vec::new(),
        };
    }

    /// Appends a new (name, term) binding, taking ownership of one reference
    /// to the term. An existing binding for the same name is not replaced.
    pub fn push(&mut self, name: String, term: Rc<T>) {
        self.entries.push((name, term));
    }

    /// Scans the bindings front to back and returns a new shared reference to
    /// the first term bound to `name`, or None if the name is not bound.
    ///
    /// The scan order means the *earliest* definition of a name is the one
    /// later uses resolve to, even after a redefinition has been pushed.
    pub fn lookup(&self, name: &str) -> Option<Rc<T>> {
        for (bound_name, term) in self.entries.iter() {
            if bound_name == name {
                return Some(Rc::clone(term));
            }
        }

        return None;
    }

    /// Returns whether any binding for `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        return self.entries.iter().any(|(bound_name, _)| bound_name == name);
    }

    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }
}
