//! Error type and single-token helpers shared by the named and de Bruijn
//! recursive descent parsers.

use std::fmt::Display;

use crate::lexical_analysis::{Token, TokenClass};

/// Longest accepted variable name, in characters. Longer identifiers are a
/// parse error, never a silent truncation.
pub const MAX_VARIABLE_LEN: usize = 15;

/// Represents a parsing error.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    UnexpectedTokenClass {
        expected_token_class: TokenClass,
        found_token_class: TokenClass,
        line_num: usize,
    },
    VariableTooLong {
        var_name: String,
        line_num: usize,
    },
    UnboundVariable {
        var_name: String,
        line_num: usize,
    },
    UnexpectedEndOfInput,
}

/// Display trait implementation for ParseError.
impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedTokenClass {
                expected_token_class,
                found_token_class,
                line_num,
            } => {
                return write!(
                    f,
                    "Unexpected token class at line {}. Expected: {:?}, found: {:?}.",
                    line_num, expected_token_class, found_token_class
                );
            }

            Self::VariableTooLong { var_name, line_num } => {
                return write!(
                    f,
                    "Variable name {:?} at line {} is longer than {} characters.",
                    var_name, line_num, MAX_VARIABLE_LEN
                );
            }

            Self::UnboundVariable { var_name, line_num } => {
                return write!(f, "Unbound variable {:?} at line {}.", var_name, line_num);
            }

            Self::UnexpectedEndOfInput => {
                return write!(f, "Unexpected end of input.");
            }
        }
    }
}

/// Returns the token at tokens[start_idx] without consuming it.
pub fn peek_token(tokens: &Vec<Token>, start_idx: usize) -> Result<&Token, ParseError> {
    if start_idx >= tokens.len() {
        return Err(ParseError::UnexpectedEndOfInput);
    }

    return Ok(&tokens[start_idx]);
}

/// Tries to parse a token of the requested class at tokens[start_idx].
pub fn try_token_class(
    tokens: &Vec<Token>,
    start_idx: usize,
    token_class: TokenClass,
) -> Result<(&Token, usize), ParseError> {
    if start_idx >= tokens.len() {
        return Err(ParseError::UnexpectedEndOfInput);
    }

    match tokens[start_idx].token_class == token_class {
        true => return Ok((&tokens[start_idx], start_idx + 1)),
        false => {
            return Err(ParseError::UnexpectedTokenClass {
                expected_token_class: token_class,
                found_token_class: tokens[start_idx].token_class,
                line_num: tokens[start_idx].line_num,
            })
        }
    };
}

/// Tries to parse a variable name at tokens[start_idx], enforcing the
/// maximum name length.
pub fn try_variable_name(
    tokens: &Vec<Token>,
    start_idx: usize,
) -> Result<(String, usize), ParseError> {
    let (name_token, start_idx) = try_token_class(tokens, start_idx, TokenClass::Identifier)?;

    if name_token.token_text.len() > MAX_VARIABLE_LEN {
        return Err(ParseError::VariableTooLong {
            var_name: name_token.token_text.clone(),
            line_num: name_token.line_num,
        });
    }

    return Ok((name_token.token_text.clone(), start_idx));
}
