//! Regex-driven lexer for the lambda-calculus surface syntax. Turns an input
//! string into a vector of tokens that the recursive descent parsers consume.

use lazy_static::lazy_static;
use regex::Regex;

// The different classes of tokens that compose the language.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum TokenClass {
    At,
    Equals,
    Lambda,
    Dot,
    LParen,
    RParen,
    Identifier,
    Whitespace,
    Error,
}

// Represents a single token of the language.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Token {
    pub token_class: TokenClass,
    pub token_text: String,
    pub line_num: usize,
}

// Represents how to recognize a token class.
#[derive(Debug)]
struct TokenRule {
    token_class: TokenClass,
    regex: Regex,
}

// Vector of regex patterns that correspond to each token class. All patterns
// are anchored so a rule can only match at the start of the remaining input.
lazy_static! {
    static ref token_rules: Vec<TokenRule> = vec![
        TokenRule {
            token_class: TokenClass::At,
            regex: Regex::new(r"^@").expect("Unable to compile At rule regex."),
        },
        TokenRule {
            token_class: TokenClass::Equals,
            regex: Regex::new(r"^=").expect("Unable to compile Equals rule regex."),
        },
        TokenRule {
            token_class: TokenClass::Lambda,
            regex: Regex::new(r"^\\").expect("Unable to compile Lambda rule regex."),
        },
        TokenRule {
            token_class: TokenClass::Dot,
            regex: Regex::new(r"^\.").expect("Unable to compile Dot rule regex."),
        },
        TokenRule {
            token_class: TokenClass::LParen,
            regex: Regex::new(r"^\(").expect("Unable to compile LParen rule regex."),
        },
        TokenRule {
            token_class: TokenClass::RParen,
            regex: Regex::new(r"^\)").expect("Unable to compile RParen rule regex."),
        },
        TokenRule {
            token_class: TokenClass::Identifier,
            regex: Regex::new(r"^[a-zA-Z0-9_]+")
                .expect("Unable to compile Identifier rule regex."),
        },
        TokenRule {
            token_class: TokenClass::Whitespace,
            regex: Regex::new(r"^\s+").expect("Unable to compile Whitespace rule regex."),
        },
        TokenRule {
            token_class: TokenClass::Error,
            regex: Regex::new(r"^.").expect("Unable to compile Error rule regex."),
        },
    ];
}

// Gets the rule for a specific token class.
fn get_rule_for_token_class(token_class: TokenClass) -> Option<&'static TokenRule> {
    token_rules
        .iter()
        .find(|token_rule| token_rule.token_class == token_class)
}

// Finds the rule that matches the most characters from the start of the input
// string.
fn get_longest_matching_rule(input_str: &str) -> (&'static TokenRule, usize) {
    let mut longest_match_len: usize = 0;
    let mut longest_token_rule = get_rule_for_token_class(TokenClass::Error)
        .expect("Unable to find token rule for Error token class.");

    for token_rule in token_rules.iter() {
        match token_rule.regex.find(input_str) {
            None => continue,
            Some(match_obj) => {
                if match_obj.len() > longest_match_len {
                    longest_match_len = match_obj.len();
                    longest_token_rule = token_rule;
                }
            }
        };
    }

    (longest_token_rule, longest_match_len)
}

/// Given a string, returns the vector of tokens that comprise that string,
/// each tagged with the (1-based) line it starts on. If
/// `discard_uninteresting` is set, whitespace tokens are dropped from the
/// output; the parsers expect a token stream produced this way.
pub fn run_lexical_analysis(program_str: &str, discard_uninteresting: bool) -> Vec<Token> {
    let mut curr_idx: usize = 0;
    let mut curr_line: usize = 1;
    let mut out = Vec::new();

    while curr_idx < program_str.len() {
        let (token_rule, match_len) = get_longest_matching_rule(&program_str[curr_idx..]);
        let token_text = &program_str[curr_idx..curr_idx + match_len];

        let keep = !discard_uninteresting || token_rule.token_class != TokenClass::Whitespace;
        if keep {
            out.push(Token {
                token_class: token_rule.token_class,
                token_text: String::from(token_text),
                line_num: curr_line,
            });
        }

        curr_line += token_text.matches('\n').count();
        curr_idx += match_len;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test if get_rule_for_token_class returns the right rule.
    #[test]
    fn test_get_rule_for_token_class() {
        token_rules.iter().for_each(|token_rule| {
            let retrieved_rule = get_rule_for_token_class(token_rule.token_class)
                .expect("Unable to get rule for token class {token_rule.token_class}");

            assert!(std::ptr::eq(retrieved_rule, token_rule));
        });
    }

    // Test if get_longest_matching_rule returns the right rules.
    #[test]
    fn test_longest_matching_rule() {
        // Test cases formatted as (input_str, expected_token_rule, expected_match_len).
        let string_and_rule_vec = vec![
            (
                r"some_var.rest",
                get_rule_for_token_class(TokenClass::Identifier)
                    .expect("Unable to get rule for token class {TokenClass::Identifier}"),
                r"some_var".len(),
            ),
            (
                r"\x.x",
                get_rule_for_token_class(TokenClass::Lambda)
                    .expect("Unable to get rule for token class {TokenClass::Lambda}"),
                r"\".len(),
            ),
            (
                "  \n  (x y)",
                get_rule_for_token_class(TokenClass::Whitespace)
                    .expect("Unable to get rule for token class {TokenClass::Whitespace}"),
                "  \n  ".len(),
            ),
        ];

        string_and_rule_vec
            .iter()
            .for_each(|&(input_str, expected_rule, expected_len)| {
                let (retrieved_rule, match_len) = get_longest_matching_rule(input_str);
                assert!(std::ptr::eq(retrieved_rule, expected_rule));
                assert_eq!(match_len, expected_len);
            });
    }

    // Test if run_lexical_analysis returns the desired token stream for a
    // declaration.
    #[test]
    fn test_run_lexical_analysis_declaration() {
        let program_str = r"@ id = \x.x";

        let expected_token_stream = vec![
            Token {
                token_class: TokenClass::At,
                token_text: String::from("@"),
                line_num: 1,
            },
            Token {
                token_class: TokenClass::Identifier,
                token_text: String::from("id"),
                line_num: 1,
            },
            Token {
                token_class: TokenClass::Equals,
                token_text: String::from("="),
                line_num: 1,
            },
            Token {
                token_class: TokenClass::Lambda,
                token_text: String::from("\\"),
                line_num: 1,
            },
            Token {
                token_class: TokenClass::Identifier,
                token_text: String::from("x"),
                line_num: 1,
            },
            Token {
                token_class: TokenClass::Dot,
                token_text: String::from("."),
                line_num: 1,
            },
            Token {
                token_class: TokenClass::Identifier,
                token_text: String::from("x"),
                line_num: 1,
            },
        ];

        let produced_token_stream = run_lexical_analysis(program_str, true);

        assert_eq!(expected_token_stream, produced_token_stream);
    }

    // Test if line numbers are tracked across newlines.
    #[test]
    fn test_run_lexical_analysis_line_numbers() {
        let program_str = "\\x.\n\\y.\n(x y)";

        let produced_token_stream = run_lexical_analysis(program_str, true);

        let line_of = |text: &str| {
            produced_token_stream
                .iter()
                .find(|token| token.token_text == text)
                .map(|token| token.line_num)
        };

        assert_eq!(line_of("x"), Some(1));
        assert_eq!(line_of("y"), Some(2));
        assert_eq!(line_of("("), Some(3));
    }

    // Test that whitespace tokens are kept when discard_uninteresting is off.
    #[test]
    fn test_run_lexical_analysis_keeps_whitespace() {
        let program_str = r"\x. x";

        let produced_token_stream = run_lexical_analysis(program_str, false);

        assert!(produced_token_stream
            .iter()
            .any(|token| token.token_class == TokenClass::Whitespace));
    }
}
