//! Translations between the named and de Bruijn term encodings. Both walks
//! borrow their input; the caller keeps full ownership of the original tree,
//! and the output never aliases nodes of the source.

use std::fmt::Display;
use std::rc::Rc;

use crate::debruijn_tree_impl::debruijn_tree_ast as debruijn_ast;
use crate::name_stack::NameStack;
use crate::named_tree_impl::named_tree_ast as named_ast;

/// Represents a conversion error.
#[derive(Debug, PartialEq, Eq)]
pub enum ConvertError {
    /// A named variable was bound nowhere in the name stack.
    UnboundVariable { var_name: String },
    /// The name stack ran out of names before every abstraction got one.
    OutOfNames,
    /// A de Bruijn index with no corresponding binder: the term is malformed.
    UnboundIndex { db_index: usize, depth: usize },
}

/// Display trait implementation for ConvertError.
impl Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { var_name } => {
                return write!(f, "Unbound variable {:?} during conversion.", var_name);
            }

            Self::OutOfNames => {
                return write!(f, "Ran out of names while restoring a de Bruijn term.");
            }

            Self::UnboundIndex { db_index, depth } => {
                return write!(
                    f,
                    "The de Bruijn index {} has no binder (only {} in scope). Malformed term.",
                    db_index, depth
                );
            }
        }
    }
}

/// Converts a named term to its de Bruijn encoding, resolving each variable
/// against the given stack of in-scope binder names (empty for a closed
/// top-level term).
///
/// Binder names are pushed as abstractions are entered and deliberately not
/// popped on the way out: after the call the stack holds, in binding order,
/// every name bound anywhere in the term. Keep the stack around and
/// `debruijn_to_named` can later reconstruct the symbolic names from it.
pub fn named_to_debruijn(
    expr_node: &named_ast::ExprNode,
    bound_names: &mut NameStack,
) -> Result<debruijn_ast::ExprRef, ConvertError> {
    match expr_node {
        named_ast::ExprNode::Var { var_name } => {
            match bound_names.index_of(var_name.as_str()) {
                Some(db_index) => {
                    return Ok(Rc::new(debruijn_ast::ExprNode::Var { db_index: db_index }))
                }
                None => {
                    return Err(ConvertError::UnboundVariable {
                        var_name: var_name.clone(),
                    })
                }
            };
        }

        named_ast::ExprNode::FnDef {
            formal_param,
            fn_body,
        } => {
            bound_names.push(formal_param.clone());
            let converted_body = named_to_debruijn(fn_body, bound_names)?;

            return Ok(Rc::new(debruijn_ast::ExprNode::FnDef {
                fn_body: converted_body,
            }));
        }

        named_ast::ExprNode::FnApp {
            fn_body,
            actual_arg,
        } => {
            let converted_fn_body = named_to_debruijn(fn_body, bound_names)?;
            let converted_actual_arg = named_to_debruijn(actual_arg, bound_names)?;

            return Ok(Rc::new(debruijn_ast::ExprNode::FnApp {
                fn_body: converted_fn_body,
                actual_arg: converted_actual_arg,
            }));
        }
    };
}

/// Convenience wrapper around `named_to_debruijn` for closed terms whose
/// names are not needed afterwards: allocates a scratch stack and discards
/// it.
pub fn named_to_debruijn_closed(
    expr_node: &named_ast::ExprNode,
) -> Result<debruijn_ast::ExprRef, ConvertError> {
    let mut scratch_names = NameStack::new();
    return named_to_debruijn(expr_node, &mut scratch_names);
}

// The walk under debruijn_to_named. `source_names` yields the next unassigned
// binder name by popping; `assigned_names` holds the names already assigned
// along the current path, so a variable's index is a plain distance-from-top
// lookup in it.
fn restore_names(
    expr_node: &debruijn_ast::ExprNode,
    source_names: &mut NameStack,
    assigned_names: &mut NameStack,
) -> Result<named_ast::ExprRef, ConvertError> {
    match expr_node {
        debruijn_ast::ExprNode::Var { db_index } => {
            match assigned_names.name_at(*db_index) {
                Some(var_name) => {
                    return Ok(Rc::new(named_ast::ExprNode::Var {
                        var_name: String::from(var_name),
                    }))
                }
                None => {
                    return Err(ConvertError::UnboundIndex {
                        db_index: *db_index,
                        depth: assigned_names.len(),
                    })
                }
            };
        }

        debruijn_ast::ExprNode::FnDef { fn_body } => {
            let formal_param = match source_names.pop() {
                Some(name) => name,
                None => return Err(ConvertError::OutOfNames),
            };
            assigned_names.push(formal_param.clone());

            let restored_body = restore_names(fn_body, source_names, assigned_names)?;

            return Ok(Rc::new(named_ast::ExprNode::FnDef {
                formal_param: formal_param,
                fn_body: restored_body,
            }));
        }

        debruijn_ast::ExprNode::FnApp {
            fn_body,
            actual_arg,
        } => {
            let restored_fn_body = restore_names(fn_body, source_names, assigned_names)?;
            let restored_actual_arg = restore_names(actual_arg, source_names, assigned_names)?;

            return Ok(Rc::new(named_ast::ExprNode::FnApp {
                fn_body: restored_fn_body,
                actual_arg: restored_actual_arg,
            }));
        }
    };
}

/// Converts a de Bruijn term back to named form, drawing binder names from
/// the given stack — typically the very stack a `named_to_debruijn` call (or
/// a de Bruijn parse) left behind, which holds the names in binding order.
///
/// The stack is reversed in place first: it arrives innermost-name-on-top,
/// and the walk assigns names to abstractions outermost first, so after the
/// reversal popping yields names in exactly the order the abstractions are
/// encountered.
pub fn debruijn_to_named(
    expr_node: &debruijn_ast::ExprNode,
    bound_names: &mut NameStack,
) -> Result<named_ast::ExprRef, ConvertError> {
    bound_names.reverse();

    let mut assigned_names = NameStack::new();
    return restore_names(expr_node, bound_names, &mut assigned_names);
}
