//! The de Bruijn term encoding: bound variables are integer indexes counting
//! enclosing binders, and abstractions bind anonymously.

pub mod debruijn_tree_ast;
pub mod debruijn_tree_recursive_descent_parsing;
