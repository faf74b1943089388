//! A small library for representing, parsing, and converting untyped
//! lambda-calculus terms.
//!
//! Terms exist in two isomorphic encodings: a *named* form, where variables
//! are the symbols they were written with, and a *de Bruijn* form, where
//! variables are indexes counting enclosing binders. The surface syntax is
//!
//! - variables: runs of alphanumeric/underscore characters, at most 15 long;
//! - abstractions: `\x.term`;
//! - applications: `(fun arg)`, parentheses mandatory;
//! - definitions (declarative parsers only): `@ name = term`, binding `name`
//!   as an alias for `term` in the rest of the input.
//!
//! The crate contains recursive descent parsers into either encoding (with
//! and without definition support), converters between the encodings, and
//! pretty-printers back to the surface syntax — everything needed for an
//! interpreter or REPL except an evaluation algorithm, which is deliberately
//! out of scope. Terms bound by definitions are shared (`Rc`) between the
//! binding context and every use-site, so the crate is single-threaded by
//! design.
//!
//! Parsing and conversion recurse on term nesting with no explicit depth
//! guard; pathologically deep input can exhaust the call stack.

pub mod binding_context;
pub mod conversion;
pub mod debruijn_tree_impl;
pub mod end_to_end;
pub mod lexical_analysis;
pub mod name_stack;
pub mod named_tree_impl;
pub mod parsing_primitives;
