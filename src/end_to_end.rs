//! Code to configure and run the driver on an input source code file: lex
//! once, then parse and pretty-print successive top-level terms until the
//! input is exhausted.

use std::fs;

use clap::Parser;

use crate::binding_context::{DeBruijnContext, NamedContext};
use crate::conversion::{self, ConvertError};
use crate::debruijn_tree_impl::debruijn_tree_recursive_descent_parsing;
use crate::lexical_analysis::run_lexical_analysis;
use crate::name_stack::NameStack;
use crate::named_tree_impl::named_tree_recursive_descent_parsing;
use crate::parsing_primitives::ParseError;

/// Supported term encodings.
pub const SUPPORTED_ENCODINGS: [&str; 2] = ["named", "debruijn"];

/// Config for the driver. Instantiate via `DriverConfig::parse()`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct DriverConfig {
    /// The input filepath to read lambda terms from.
    #[arg(short, long)]
    pub src_filepath: String,

    /// Which term encoding to parse into. Must be present inside
    /// `SUPPORTED_ENCODINGS`.
    #[arg(short, long, default_value_t = String::from("named"))]
    pub encoding: String,

    /// Recognize top-level `@ name = term` macro definitions.
    #[arg(short, long, default_value_t = false)]
    pub declarative: bool,

    /// With the de Bruijn encoding, also translate each parsed term back to
    /// named form and print both renderings.
    #[arg(short, long, default_value_t = false)]
    pub restore_names: bool,
}

/// Errors that may be thrown when running the driver.
#[derive(Debug)]
pub enum RunError {
    ConfigError(String),
    InputFileError(std::io::Error),
    ParseError(ParseError),
    ConvertError(ConvertError),
}

/// Display trait implementation for RunError.
impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigError(config_err_string) => {
                return write!(f, "Driver configuration error: {}", config_err_string);
            }

            Self::InputFileError(io_err) => {
                return write!(f, "Input file error: {}", io_err);
            }

            Self::ParseError(parse_error) => {
                return write!(f, "Parse error: {}", parse_error);
            }

            Self::ConvertError(convert_error) => {
                return write!(f, "Convert error: {}", convert_error);
            }
        }
    }
}

/// Type conversions for errors.
impl From<std::io::Error> for RunError {
    fn from(value: std::io::Error) -> Self {
        return Self::InputFileError(value);
    }
}

impl From<ParseError> for RunError {
    fn from(value: ParseError) -> Self {
        return Self::ParseError(value);
    }
}

impl From<ConvertError> for RunError {
    fn from(value: ConvertError) -> Self {
        return Self::ConvertError(value);
    }
}

// Parses every top-level term in the named encoding and renders one per
// line.
fn run_named_driver(program_str: &str, declarative: bool) -> Result<String, RunError> {
    let tokens = run_lexical_analysis(program_str, true);
    let mut context = NamedContext::new();
    let mut output = String::new();

    let mut start_idx = 0;
    while start_idx < tokens.len() {
        let (term, next_idx) = match declarative {
            true => named_tree_recursive_descent_parsing::parse_decl_term(
                &tokens,
                start_idx,
                &mut context,
            )?,
            false => named_tree_recursive_descent_parsing::parse_term(&tokens, start_idx)?,
        };

        output.push_str(format!("{}\n", term).as_str());
        start_idx = next_idx;
    }

    return Ok(output);
}

// Parses every top-level term in the de Bruijn encoding. Each top-level term
// gets a fresh name stack: `debruijn_to_named` reverses and consumes the
// stack it is given, which does not compose across terms, so the per-term
// stack keeps restoration exact. The binding context is shared across the
// whole input. Restoration only has names for binders written in the term
// itself, so a term built from context lookups may fail to restore
// (OutOfNames), which is reported rather than papered over.
fn run_debruijn_driver(
    program_str: &str,
    declarative: bool,
    restore_names: bool,
) -> Result<String, RunError> {
    let tokens = run_lexical_analysis(program_str, true);
    let mut context = DeBruijnContext::new();
    let mut output = String::new();

    let mut start_idx = 0;
    while start_idx < tokens.len() {
        let mut bound_names = NameStack::new();

        let (term, next_idx) = match declarative {
            true => debruijn_tree_recursive_descent_parsing::parse_decl_term(
                &tokens,
                start_idx,
                &mut bound_names,
                &mut context,
            )?,
            false => debruijn_tree_recursive_descent_parsing::parse_term(
                &tokens,
                start_idx,
                &mut bound_names,
            )?,
        };

        output.push_str(format!("{}\n", term).as_str());

        if restore_names {
            let restored = conversion::debruijn_to_named(&term, &mut bound_names)?;
            output.push_str(format!("{}\n", restored).as_str());
        }

        start_idx = next_idx;
    }

    return Ok(output);
}

/// Run the driver (i.e. the lexer, a parser, and the pretty-printer) based
/// on the given config, returning the rendered terms one per line.
pub fn run_driver(config: &DriverConfig) -> Result<String, RunError> {
    if !SUPPORTED_ENCODINGS.contains(&config.encoding.as_str()) {
        return Err(RunError::ConfigError(format!(
            "Unrecognized encoding name {}. Supported encodings: {:?}.",
            config.encoding, SUPPORTED_ENCODINGS
        )));
    }

    let program_str = fs::read_to_string(&config.src_filepath)?;

    if config.encoding == "named" {
        return run_named_driver(program_str.as_str(), config.declarative);
    }

    return run_debruijn_driver(
        program_str.as_str(),
        config.declarative,
        config.restore_names,
    );
}
