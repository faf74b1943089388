//! Recursive descent parsers that construct de Bruijn-encoded terms directly
//! from a vector of tokens, resolving variable names against a name stack as
//! they are read: a plain variant, and a declarative variant that also
//! recognizes `@ name = term` macro definitions against a binding context.
//!
//! Binder names are pushed onto the name stack before the abstraction body is
//! parsed and are deliberately *not* popped afterwards. After a top-level
//! parse the stack therefore holds every name bound anywhere in the term, in
//! binding order, which is exactly the dictionary `conversion::debruijn_to_named`
//! needs to reconstruct the symbolic names later. Callers that do not want
//! the trail can use `parse_closed_term`.

use std::rc::Rc;

use crate::binding_context::DeBruijnContext;
use crate::debruijn_tree_impl::debruijn_tree_ast::{ExprNode, ExprRef};
use crate::lexical_analysis::{Token, TokenClass};
use crate::name_stack::NameStack;
use crate::parsing_primitives::{peek_token, try_token_class, try_variable_name, ParseError};

/// Tries to parse an expression that looks like `\[IDENTIFIER].[EXPR]`,
/// pushing the bound name before the body is parsed (and leaving it pushed).
fn try_lambda_rule(
    tokens: &Vec<Token>,
    start_idx: usize,
    bound_names: &mut NameStack,
) -> Result<(ExprRef, usize), ParseError> {
    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::Lambda)?;
    let (formal_param, start_idx) = try_variable_name(tokens, start_idx)?;
    bound_names.push(formal_param);
    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::Dot)?;
    let (fn_body, start_idx) = parse_term(tokens, start_idx, bound_names)?;

    return Ok((Rc::new(ExprNode::FnDef { fn_body: fn_body }), start_idx));
}

/// Tries to parse an expression that looks like `([EXPR] [EXPR])`.
fn try_application_rule(
    tokens: &Vec<Token>,
    start_idx: usize,
    bound_names: &mut NameStack,
) -> Result<(ExprRef, usize), ParseError> {
    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::LParen)?;
    let (fn_body, start_idx) = parse_term(tokens, start_idx, bound_names)?;
    let (actual_arg, start_idx) = parse_term(tokens, start_idx, bound_names)?;
    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::RParen)?;

    return Ok((
        Rc::new(ExprNode::FnApp {
            fn_body: fn_body,
            actual_arg: actual_arg,
        }),
        start_idx,
    ));
}

/// Tries to parse a variable reference, resolving the name to its de Bruijn
/// index immediately. A name bound nowhere in the stack is an error.
fn try_var_rule(
    tokens: &Vec<Token>,
    start_idx: usize,
    bound_names: &NameStack,
) -> Result<(ExprRef, usize), ParseError> {
    let name_line_num = peek_token(tokens, start_idx)?.line_num;
    let (var_name, start_idx) = try_variable_name(tokens, start_idx)?;

    match bound_names.index_of(var_name.as_str()) {
        Some(db_index) => {
            return Ok((
                Rc::new(ExprNode::Var { db_index: db_index }),
                start_idx,
            ))
        }
        None => {
            return Err(ParseError::UnboundVariable {
                var_name: var_name,
                line_num: name_line_num,
            })
        }
    };
}

/// Parses one de Bruijn term starting at tokens[start_idx], accumulating
/// bound names into the given stack (see the module docs for the trail
/// contract).
pub fn parse_term(
    tokens: &Vec<Token>,
    start_idx: usize,
    bound_names: &mut NameStack,
) -> Result<(ExprRef, usize), ParseError> {
    let next_token = peek_token(tokens, start_idx)?;

    match next_token.token_class {
        TokenClass::Lambda => return try_lambda_rule(tokens, start_idx, bound_names),
        TokenClass::LParen => return try_application_rule(tokens, start_idx, bound_names),
        _ => return try_var_rule(tokens, start_idx, bound_names),
    };
}

/// Convenience wrapper around `parse_term` that allocates a scratch name
/// stack and discards it. The resulting term can still be printed in de
/// Bruijn form, but its symbolic names are gone for good.
pub fn parse_closed_term(
    tokens: &Vec<Token>,
    start_idx: usize,
) -> Result<(ExprRef, usize), ParseError> {
    let mut scratch_names = NameStack::new();
    return parse_term(tokens, start_idx, &mut scratch_names);
}

/// Tries to parse a declarative expression that looks like
/// `\[IDENTIFIER].[DECL-EXPR]`.
fn try_decl_lambda_rule(
    tokens: &Vec<Token>,
    start_idx: usize,
    bound_names: &mut NameStack,
    context: &mut DeBruijnContext,
) -> Result<(ExprRef, usize), ParseError> {
    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::Lambda)?;
    let (formal_param, start_idx) = try_variable_name(tokens, start_idx)?;
    bound_names.push(formal_param);
    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::Dot)?;
    let (fn_body, start_idx) = parse_decl_term(tokens, start_idx, bound_names, context)?;

    return Ok((Rc::new(ExprNode::FnDef { fn_body: fn_body }), start_idx));
}

/// Tries to parse a declarative expression that looks like
/// `([DECL-EXPR] [DECL-EXPR])`.
fn try_decl_application_rule(
    tokens: &Vec<Token>,
    start_idx: usize,
    bound_names: &mut NameStack,
    context: &mut DeBruijnContext,
) -> Result<(ExprRef, usize), ParseError> {
    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::LParen)?;
    let (fn_body, start_idx) = parse_decl_term(tokens, start_idx, bound_names, context)?;
    let (actual_arg, start_idx) = parse_decl_term(tokens, start_idx, bound_names, context)?;
    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::RParen)?;

    return Ok((
        Rc::new(ExprNode::FnApp {
            fn_body: fn_body,
            actual_arg: actual_arg,
        }),
        start_idx,
    ));
}

/// Tries to parse a definition that looks like `@ [IDENTIFIER] = [DECL-EXPR]`.
/// Same contract as the named variant: the body is pushed into the context,
/// the definition evaluates to the body, and a redefinition is reported on
/// stderr but still pushed.
fn try_definition_rule(
    tokens: &Vec<Token>,
    start_idx: usize,
    bound_names: &mut NameStack,
    context: &mut DeBruijnContext,
) -> Result<(ExprRef, usize), ParseError> {
    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::At)?;
    let (def_name, start_idx) = try_variable_name(tokens, start_idx)?;

    if context.contains(def_name.as_str()) {
        eprintln!("Variable {} already defined.", def_name);
    }

    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::Equals)?;
    let (def_body, start_idx) = parse_decl_term(tokens, start_idx, bound_names, context)?;

    context.push(def_name, Rc::clone(&def_body));

    return Ok((def_body, start_idx));
}

/// Tries to parse a declarative variable reference. The binding context is
/// consulted first (a hit shares the bound term); otherwise the name must
/// resolve through the name stack, and a miss in both is an error.
fn try_decl_var_rule(
    tokens: &Vec<Token>,
    start_idx: usize,
    bound_names: &NameStack,
    context: &DeBruijnContext,
) -> Result<(ExprRef, usize), ParseError> {
    let name_line_num = peek_token(tokens, start_idx)?.line_num;
    let (var_name, start_idx) = try_variable_name(tokens, start_idx)?;

    if let Some(bound_term) = context.lookup(var_name.as_str()) {
        return Ok((bound_term, start_idx));
    }

    match bound_names.index_of(var_name.as_str()) {
        Some(db_index) => {
            return Ok((
                Rc::new(ExprNode::Var { db_index: db_index }),
                start_idx,
            ))
        }
        None => {
            return Err(ParseError::UnboundVariable {
                var_name: var_name,
                line_num: name_line_num,
            })
        }
    };
}

/// Parses one declarative de Bruijn term starting at tokens[start_idx],
/// resolving names through both the name stack and the binding context.
pub fn parse_decl_term(
    tokens: &Vec<Token>,
    start_idx: usize,
    bound_names: &mut NameStack,
    context: &mut DeBruijnContext,
) -> Result<(ExprRef, usize), ParseError> {
    let next_token = peek_token(tokens, start_idx)?;

    match next_token.token_class {
        TokenClass::Lambda => {
            return try_decl_lambda_rule(tokens, start_idx, bound_names, context)
        }
        TokenClass::LParen => {
            return try_decl_application_rule(tokens, start_idx, bound_names, context)
        }
        TokenClass::At => return try_definition_rule(tokens, start_idx, bound_names, context),
        _ => return try_decl_var_rule(tokens, start_idx, bound_names, context),
    };
}
