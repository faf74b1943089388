//! Data structures to represent named lambda-calculus terms, and utility
//! functions to display them.

use std::rc::Rc;

/// Shared-ownership handle to a named term node. Nodes are immutable once
/// built; a node stored in a binding context is shared (not copied) by every
/// use-site that resolved to it, so dropping the last handle releases the
/// whole subtree.
pub type ExprRef = Rc<ExprNode>;

/// Represents a lambda-calculus expression in the named encoding.
#[derive(Debug, PartialEq, Eq)]
pub enum ExprNode {
    FnDef {
        formal_param: String,
        fn_body: ExprRef,
    },
    FnApp {
        fn_body: ExprRef,
        actual_arg: ExprRef,
    },
    Var {
        var_name: String,
    },
}

// Helper function to produce a string representation of an ExprNode. The
// output is exactly the surface grammar the parsers read: `\x.body`,
// `(fn arg)` with mandatory parentheses, bare names for variables.
fn expr_node_to_string_helper(expr_node: &ExprNode, string_so_far: &mut String) {
    match expr_node {
        ExprNode::Var { var_name } => {
            string_so_far.push_str(var_name.as_str());
        }
        ExprNode::FnDef {
            formal_param,
            fn_body,
        } => {
            string_so_far.push('\\');
            string_so_far.push_str(formal_param.as_str());
            string_so_far.push('.');
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
