//! Data structures to represent de Bruijn-encoded lambda-calculus terms, and
//! utility functions to display them.

use std::rc::Rc;

/// Shared-ownership handle to a de Bruijn term node. Same sharing discipline
/// as the named encoding.
pub type ExprRef = Rc<ExprNode>;

/// Represents a lambda-calculus expression in the de Bruijn encoding. A
/// variable is the number of abstractions between it and its binder
/// (0 = innermost enclosing binder); abstractions do not retain the bound
/// name. For a closed, well-formed term every index is strictly less than
/// the number of enclosing abstractions; the parsers and converters only
/// build such terms, but a hand-constructed value may violate this and is
/// treated as malformed when names are restored.
#[derive(Debug, PartialEq, Eq)]
pub enum ExprNode {
    FnDef {
        fn_body: ExprRef,
    },
    FnApp {
        fn_body: ExprRef,
        actual_arg: ExprRef,
    },
    Var {
        db_index: usize,
    },
}

// Helper function to produce a string representation of an ExprNode.
// Mirrors the named printer, except abstractions are a bare `\` and
// variables print their index in decimal.
fn expr_node_to_string_helper(expr_node: &ExprNode, string_so_far: &mut String) {
    match expr_node {
        ExprNode::Var { db_index } => {
            string_so_far.push_str(db_index.to_string().as_str());
        }
        ExprNode::FnDef { fn_body } => {
            string_so_far.push('\\');
            expr_node_to_string_helper(fn_body, string_so_far);
        }
        ExprNode::FnApp {
            fn_body,
            actual_arg,
        } => {
            string_so_far.push('(');
            expr_node_to_string_helper(fn_body, string_so_far);
            string_so_far.push(' ');
            expr_node_to_string_helper(actual_arg, string_so_far);
            string_so_far.push(')');
        }
    };
}

// Converts an expr node to a string.
pub fn expr_node_to_string(expr_node: &ExprNode) -> String {
    let mut out_string = String::new();
    expr_node_to_string_helper(expr_node, &mut out_string);
    return out_string;
}

// Display trait implementation for ExprNode using expr_node_to_string.
impl std::fmt::Display for ExprNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return write!(f, "{}", expr_node_to_string(self).as_str());
    }
}
