//! Recursive descent parsers that construct named lambda-calculus terms from
//! a vector of tokens: a plain variant, and a declarative variant that also
//! recognizes `@ name = term` macro definitions against a binding context.
//!
//! Every entry point consumes exactly one top-level production starting at
//! `start_idx` and returns the index just past it, so repeated calls on the
//! same token vector retrieve successive terms.

use std::rc::Rc;

use crate::binding_context::NamedContext;
use crate::lexical_analysis::{Token, TokenClass};
use crate::named_tree_impl::named_tree_ast::{ExprNode, ExprRef};
use crate::parsing_primitives::{peek_token, try_token_class, try_variable_name, ParseError};

/// Tries to parse an expression that looks like `\[IDENTIFIER].[EXPR]`.
fn try_lambda_rule(tokens: &Vec<Token>, start_idx: usize) -> Result<(ExprRef, usize), ParseError> {
    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::Lambda)?;
    let (formal_param, start_idx) = try_variable_name(tokens, start_idx)?;
    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::Dot)?;
    let (fn_body, start_idx) = parse_term(tokens, start_idx)?;

    return Ok((
        Rc::new(ExprNode::FnDef {
            formal_param: formal_param,
            fn_body: fn_body,
        }),
        start_idx,
    ));
}

/// Tries to parse an expression that looks like `([EXPR] [EXPR])`. The
/// parentheses are mandatory and applications are exactly binary.
fn try_application_rule(
    tokens: &Vec<Token>,
    start_idx: usize,
) -> Result<(ExprRef, usize), ParseError> {
    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::LParen)?;
    let (fn_body, start_idx) = parse_term(tokens, start_idx)?;
    let (actual_arg, start_idx) = parse_term(tokens, start_idx)?;
    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::RParen)?;

    return Ok((
        Rc::new(ExprNode::FnApp {
            fn_body: fn_body,
            actual_arg: actual_arg,
        }),
        start_idx,
    ));
}

/// Tries to parse an expression that looks like `[IDENTIFIER]`. There is no
/// scope checking here: a free name simply becomes a Var node.
fn try_var_rule(tokens: &Vec<Token>, start_idx: usize) -> Result<(ExprRef, usize), ParseError> {
    let (var_name, start_idx) = try_variable_name(tokens, start_idx)?;

    return Ok((
        Rc::new(ExprNode::Var {
            var_name: var_name,
        }),
        start_idx,
    ));
}

/// Parses one named term starting at tokens[start_idx]. The grammar is
/// dispatched on a single token of lookahead.
pub fn parse_term(tokens: &Vec<Token>, start_idx: usize) -> Result<(ExprRef, usize), ParseError> {
    let next_token = peek_token(tokens, start_idx)?;

    match next_token.token_class {
        TokenClass::Lambda => return try_lambda_rule(tokens, start_idx),
        TokenClass::LParen => return try_application_rule(tokens, start_idx),
        _ => return try_var_rule(tokens, start_idx),
    };
}

/// Tries to parse a declarative expression that looks like
/// `\[IDENTIFIER].[DECL-EXPR]`.
fn try_decl_lambda_rule(
    tokens: &Vec<Token>,
    start_idx: usize,
    context: &mut NamedContext,
) -> Result<(ExprRef, usize), ParseError> {
    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::Lambda)?;
    let (formal_param, start_idx) = try_variable_name(tokens, start_idx)?;
    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::Dot)?;
    let (fn_body, start_idx) = parse_decl_term(tokens, start_idx, context)?;

    return Ok((
        Rc::new(ExprNode::FnDef {
            formal_param: formal_param,
            fn_body: fn_body,
        }),
        start_idx,
    ));
}

/// Tries to parse a declarative expression that looks like
/// `([DECL-EXPR] [DECL-EXPR])`.
fn try_decl_application_rule(
    tokens: &Vec<Token>,
    start_idx: usize,
    context: &mut NamedContext,
) -> Result<(ExprRef, usize), ParseError> {
    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::LParen)?;
    let (fn_body, start_idx) = parse_decl_term(tokens, start_idx, context)?;
    let (actual_arg, start_idx) = parse_decl_term(tokens, start_idx, context)?;
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
/// The parsed body is pushed into the binding context under the given name,
/// and the definition as a whole evaluates to that body. Redefining a name is
/// reported on stderr but is not an error; the second entry is pushed anyway,
/// and lookups keep resolving to the earliest one.
fn try_definition_rule(
    tokens: &Vec<Token>,
    start_idx: usize,
    context: &mut NamedContext,
) -> Result<(ExprRef, usize), ParseError> {
    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::At)?;
    let (def_name, start_idx) = try_variable_name(tokens, start_idx)?;

    if context.contains(def_name.as_str()) {
        eprintln!("Variable {} already defined.", def_name);
    }

    let (_, start_idx) = try_token_class(tokens, start_idx, TokenClass::Equals)?;
    let (def_body, start_idx) = parse_decl_term(tokens, start_idx, context)?;

    context.push(def_name, Rc::clone(&def_body));

    return Ok((def_body, start_idx));
}

/// Tries to parse a declarative variable reference. The binding context is
/// consulted first; a hit returns a new shared reference to the bound term,
/// and a miss falls back to a fresh Var node (a free variable or a forward
/// reference).
fn try_decl_var_rule(
    tokens: &Vec<Token>,
    start_idx: usize,
    context: &mut NamedContext,
) -> Result<(ExprRef, usize), ParseError> {
    let (var_name, start_idx) = try_variable_name(tokens, start_idx)?;

    if let Some(bound_term) = context.lookup(var_name.as_str()) {
        return Ok((bound_term, start_idx));
    }

    return Ok((
        Rc::new(ExprNode::Var {
            var_name: var_name,
        }),
        start_idx,
    ));
}

/// Parses one declarative named term starting at tokens[start_idx], reading
/// and extending the given binding context.
pub fn parse_decl_term(
    tokens: &Vec<Token>,
    start_idx: usize,
    context: &mut NamedContext,
) -> Result<(ExprRef, usize), ParseError> {
    let next_token = peek_token(tokens, start_idx)?;

    match next_token.token_class {
        TokenClass::Lambda => return try_decl_lambda_rule(tokens, start_idx, context),
        TokenClass::LParen => return try_decl_application_rule(tokens, start_idx, context),
        TokenClass::At => return try_definition_rule(tokens, start_idx, context),
        _ => return try_decl_var_rule(tokens, start_idx, context),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical_analysis::run_lexical_analysis;

    // Test if we can parse the identity function.
    #[test]
    fn test_parse_identity() {
        let tokens = run_lexical_analysis(r"\x.x", true);

        let expected_output = Rc::new(ExprNode::FnDef {
            formal_param: String::from("x"),
            fn_body: Rc::new(ExprNode::Var {
                var_name: String::from("x"),
            }),
        });

        let (generated_output, next_idx) =
            parse_term(&tokens, 0).expect("parse_term returned unexpected parse error");

        assert_eq!(generated_output, expected_output);
        assert_eq!(next_idx, tokens.len());
    }

    // Test if we can parse a parenthesized application of free variables.
    #[test]
    fn test_parse_application() {
        let tokens = run_lexical_analysis(r"(x y)", true);

        let expected_output = Rc::new(ExprNode::FnApp {
            fn_body: Rc::new(ExprNode::Var {
                var_name: String::from("x"),
            }),
            actual_arg: Rc::new(ExprNode::Var {
                var_name: String::from("y"),
            }),
        });

        let (generated_output, _) =
            parse_term(&tokens, 0).expect("parse_term returned unexpected parse error");

        assert_eq!(generated_output, expected_output);
    }

    // Test if we can parse nested abstractions over an application.
    #[test]
    fn test_parse_nested_abstractions() {
        let tokens = run_lexical_analysis(r"\x.\y.(x y)", true);

        let expected_output = Rc::new(ExprNode::FnDef {
            formal_param: String::from("x"),
            fn_body: Rc::new(ExprNode::FnDef {
                formal_param: String::from("y"),
                fn_body: Rc::new(ExprNode::FnApp {
                    fn_body: Rc::new(ExprNode::Var {
                        var_name: String::from("x"),
                    }),
                    actual_arg: Rc::new(ExprNode::Var {
                        var_name: String::from("y"),
                    }),
                }),
            }),
        });

        let (generated_output, _) =
            parse_term(&tokens, 0).expect("parse_term returned unexpected parse error");

        assert_eq!(generated_output, expected_output);
    }

    // Test that successive calls on the same token stream retrieve
    // successive top-level terms.
    #[test]
    fn test_parse_successive_terms() {
        let tokens = run_lexical_analysis("\\x.x \\y.y", true);

        let (first_term, next_idx) =
            parse_term(&tokens, 0).expect("parse_term returned unexpected parse error");
        let (second_term, next_idx) =
            parse_term(&tokens, next_idx).expect("parse_term returned unexpected parse error");

        assert_eq!(
            first_term,
            Rc::new(ExprNode::FnDef {
                formal_param: String::from("x"),
                fn_body: Rc::new(ExprNode::Var {
                    var_name: String::from("x"),
                }),
            })
        );
        assert_eq!(
            second_term,
            Rc::new(ExprNode::FnDef {
                formal_param: String::from("y"),
                fn_body: Rc::new(ExprNode::Var {
                    var_name: String::from("y"),
                }),
            })
        );
        assert_eq!(next_idx, tokens.len());
    }

    // Test that a missing dot after the bound name is reported.
    #[test]
    fn test_parse_missing_dot() {
        let tokens = run_lexical_analysis(r"\x x", true);

        let parse_error =
            parse_term(&tokens, 0).expect_err("Expected an UnexpectedTokenClass error");

        assert_eq!(
            parse_error,
            ParseError::UnexpectedTokenClass {
                expected_token_class: TokenClass::Dot,
                found_token_class: TokenClass::Identifier,
                line_num: 1,
            }
        );
    }

    // Test that a missing closing parenthesis is reported.
    #[test]
    fn test_parse_missing_rparen() {
        let tokens = run_lexical_analysis(r"(x y", true);

        let parse_error = parse_term(&tokens, 0).expect_err("Expected an error");
        assert_eq!(parse_error, ParseError::UnexpectedEndOfInput);
    }

    // Test that an over-long bound name is a parse failure, not a truncation.
    #[test]
    fn test_parse_variable_too_long() {
        let tokens = run_lexical_analysis(r"\a_very_long_variable.x", true);

        let parse_error = parse_term(&tokens, 0).expect_err("Expected a VariableTooLong error");
        assert_eq!(
            parse_error,
            ParseError::VariableTooLong {
                var_name: String::from("a_very_long_variable"),
                line_num: 1,
            }
        );
    }

    // Test that print followed by parse reproduces the same tree.
    #[test]
    fn test_parse_print_round_trip() {
        let tokens = run_lexical_analysis(r"\f.(\x.(f (x x)) \x.(f (x x)))", true);

        let (parsed_term, _) =
            parse_term(&tokens, 0).expect("parse_term returned unexpected parse error");

        let printed = format!("{}", parsed_term);
        let reparsed_tokens = run_lexical_analysis(printed.as_str(), true);
        let (reparsed_term, _) = parse_term(&reparsed_tokens, 0)
            .expect("parse_term returned unexpected parse error on printed output");

        assert_eq!(parsed_term, reparsed_term);
    }

    // Test that a definition binds its body in the context, evaluates to the
    // body, and that later uses share the same node.
    #[test]
    fn test_parse_decl_definition_and_uses() {
        let tokens = run_lexical_analysis("@ id = \\x.x (id id)", true);
        let mut context = NamedContext::new();

        let (def_term, next_idx) = parse_decl_term(&tokens, 0, &mut context)
            .expect("parse_decl_term returned unexpected parse error");
        let (use_term, next_idx) = parse_decl_term(&tokens, next_idx, &mut context)
            .expect("parse_decl_term returned unexpected parse error");
        assert_eq!(next_idx, tokens.len());

        // The definition evaluates to its body.
        assert_eq!(
            def_term,
            Rc::new(ExprNode::FnDef {
                formal_param: String::from("x"),
                fn_body: Rc::new(ExprNode::Var {
                    var_name: String::from("x"),
                }),
            })
        );

        // Both uses of `id` resolve to the very node held by the context.
        let context_term = context.lookup("id").expect("Expected `id` to be bound");
        match use_term.as_ref() {
            ExprNode::FnApp {
                fn_body,
                actual_arg,
            } => {
                assert!(Rc::ptr_eq(fn_body, &context_term));
                assert!(Rc::ptr_eq(actual_arg, &context_term));
            }
            other => panic!("Expected an application of `id` to `id`, got {}", other),
        }

        // One reference in the context, two at the use-sites, plus the locals
        // held by this test.
        drop(def_term);
        assert!(Rc::strong_count(&context_term) >= 3);
    }

    // Test that an undefined name in declarative mode becomes a fresh Var
    // node rather than an error.
    #[test]
    fn test_parse_decl_free_variable() {
        let tokens = run_lexical_analysis(r"free_name", true);
        let mut context = NamedContext::new();

        let (generated_output, _) = parse_decl_term(&tokens, 0, &mut context)
            .expect("parse_decl_term returned unexpected parse error");

        assert_eq!(
            generated_output,
            Rc::new(ExprNode::Var {
                var_name: String::from("free_name"),
            })
        );
        assert!(context.is_empty());
    }

    // Test that redefining a name pushes a second entry but leaves the
    // earliest definition winning subsequent lookups.
    #[test]
    fn test_parse_decl_redefinition() {
        let tokens = run_lexical_analysis("@ id = \\x.x @ id = \\y.y id", true);
        let mut context = NamedContext::new();

        let (_, next_idx) = parse_decl_term(&tokens, 0, &mut context)
            .expect("parse_decl_term returned unexpected parse error");
        let (_, next_idx) = parse_decl_term(&tokens, next_idx, &mut context)
            .expect("parse_decl_term returned unexpected parse error");
        let (use_term, _) = parse_decl_term(&tokens, next_idx, &mut context)
            .expect("parse_decl_term returned unexpected parse error");

        // Both entries are present.
        assert_eq!(context.len(), 2);

        // The use resolves to the first definition.
        assert_eq!(
            use_term,
            Rc::new(ExprNode::FnDef {
                formal_param: String::from("x"),
                fn_body: Rc::new(ExprNode::Var {
                    var_name: String::from("x"),
                }),
            })
        );
    }
}
