//! The named term encoding: bound variables are represented by the symbolic
//! names they were written with.

pub mod named_tree_ast;
pub mod named_tree_recursive_descent_parsing;
