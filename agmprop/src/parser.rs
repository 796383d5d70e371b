//! Parser for propositional formulas using chumsky.
//!
//! Two stages:
//! 1) Tokenisation from input string to a `Token` stream.
//! 2) Parsing tokens into a [`Formula`].
//!
//! Accepted syntax (round-trips with the [`Formula`] printer):
//! - Atoms: identifiers made of ASCII letters, digits and `_`, not starting
//!   with a digit. `true` and `false` are the constants.
//! - Negation: `!p` or `~p`.
//! - Conjunction: `p & q` or `p /\ q`.
//! - Disjunction: `p | q` or `p \/ q`.
//! - Implication: `p -> q` or `p => q` (right-associative).
//! - Equivalence: `p <-> q` or `p <=> q`.
//! - Comments start with `;` and run to the end of the line.
//!
//! Precedence, loosest first: equivalence < implication < disjunction <
//! conjunction < negation < atoms and parentheses.
use chumsky::{input::ValueInput, prelude::*};

use crate::formula::Formula;

type Span = SimpleSpan;
type Spanned<T> = (T, Span);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Token {
    LParen,
    RParen,

    Not,
    And,
    Or,
    Implies,
    Iff,

    True,
    False,
    Atom(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Not => write!(f, "!"),
            Token::And => write!(f, "&"),
            Token::Or => write!(f, "|"),
            Token::Implies => write!(f, "->"),
            Token::Iff => write!(f, "<->"),
            Token::True => write!(f, "true"),
            Token::False => write!(f, "false"),
            Token::Atom(name) => write!(f, "{name}"),
        }
    }
}

// ---------------- Lexer ----------------

fn lexer<'a>() -> impl Parser<'a, &'a str, Vec<Spanned<Token>>, extra::Err<Rich<'a, char>>> {
    // Multi-char operators first to avoid prefix capture
    let iff = choice((just("<->"), just("<=>"))).to(Token::Iff);
    let implies = choice((just("->"), just("=>"))).to(Token::Implies);
    let and_op = choice((just("/\\"), just("&"))).to(Token::And);
    let or_op = choice((just("\\/"), just("|"))).to(Token::Or);

    let word = any()
        .filter(|c: &char| c.is_ascii_alphabetic() || *c == '_')
        .then(
            any()
                .filter(|c: &char| c.is_ascii_alphanumeric() || *c == '_')
                .repeated(),
        )
        .to_slice()
        .map(|s: &str| match s {
            "true" => Token::True,
            "false" => Token::False,
            _ => Token::Atom(s.to_string()),
        });

    let punct = choice((
        just('(').to(Token::LParen),
        just(')').to(Token::RParen),
        just('!').to(Token::Not),
        just('~').to(Token::Not),
    ));

    let token = choice((iff, implies, and_op, or_op, word, punct));

    let comment = just(';')
        .then(any().and_is(just("\n").not()).repeated())
        .padded()
        .to(());

    token
        .map_with(|tok, e| (tok, e.span()))
        .padded_by(comment.repeated())
        .padded()
        .repeated()
        .collect()
        .then_ignore(end())
}

// ---------------- chumsky parser over tokens ----------------

fn formula_parser<'tokens, I>()
-> impl Parser<'tokens, I, Formula, extra::Err<Rich<'tokens, Token, Span>>> + Clone
where
    I: ValueInput<'tokens, Token = Token, Span = Span>,
{
    recursive(|formula| {
        let constant = select! {
            Token::True => Formula::Top,
            Token::False => Formula::Bottom,
            Token::Atom(name) => Formula::Atom(name),
        }
        .labelled("atom");

        let parens = formula
            .delimited_by(just(Token::LParen), just(Token::RParen))
            .labelled("parentheses");

        let primary = constant.or(parens);

        let negation = just(Token::Not)
            .repeated()
            .foldr(primary, |_, inner| Formula::negate(inner));

        let conjunction = negation
            .clone()
            .foldl(
                just(Token::And).ignore_then(negation).repeated(),
                Formula::and,
            )
            .labelled("conjunction");

        let disjunction = conjunction
            .clone()
            .foldl(
                just(Token::Or).ignore_then(conjunction).repeated(),
                Formula::or,
            )
            .labelled("disjunction");

        // Implication is right-assoc
        let implication = recursive(|imp| {
            disjunction
                .clone()
                .then(just(Token::Implies).ignore_then(imp).or_not())
                .map(|(lhs, rhs)| match rhs {
                    Some(rhs) => Formula::implies(lhs, rhs),
                    None => lhs,
                })
                .labelled("implication")
        });

        implication
            .clone()
            .foldl(
                just(Token::Iff).ignore_then(implication).repeated(),
                Formula::iff,
            )
            .labelled("equivalence")
    })
}

// ---------------- Public API ----------------

/// Parse a propositional formula.
///
/// Returns `Err(Vec<String>)` with human-readable diagnostics on failure.
///
/// ```
/// use agmprop::{formula::Formula, parser::parse};
/// let f = parse("a & !b -> c").unwrap();
/// assert_eq!(
///     f,
///     Formula::implies(Formula::atom("a") & !Formula::atom("b"), Formula::atom("c"))
/// );
/// ```
pub fn parse(src: &str) -> Result<Formula, Vec<String>> {
    let (tokens, lex_errs) = lexer().parse(src).into_output_errors();
    let mut errors: Vec<String> = lex_errs
        .into_iter()
        .map(|e| format!("lexing error: {e}"))
        .collect();

    let tokens = match tokens {
        Some(toks) => toks,
        None => return Err(errors),
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    let plain: Vec<Token> = tokens.into_iter().map(|(t, _s)| t).collect();
    let (formula, parse_errs) = formula_parser()
        .then_ignore(end())
        .parse(plain.as_slice())
        .into_output_errors();
    errors.extend(parse_errs.into_iter().map(|e| format!("parse error: {e}")));

    match formula {
        Some(formula) if errors.is_empty() => Ok(formula),
        _ => {
            if errors.is_empty() {
                errors.push("parse error: no formula".to_string());
            }
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str) -> Formula {
        Formula::atom(name)
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(
            parse("a | b & c").unwrap(),
            atom("a") | (atom("b") & atom("c"))
        );
        assert_eq!(
            parse("a -> b -> c").unwrap(),
            Formula::implies(atom("a"), Formula::implies(atom("b"), atom("c")))
        );
        assert_eq!(
            parse("a <-> b -> c").unwrap(),
            Formula::iff(atom("a"), Formula::implies(atom("b"), atom("c")))
        );
        assert_eq!(
            parse("!!a & b").unwrap(),
            !!atom("a") & atom("b")
        );
    }

    #[test]
    fn alternative_spellings() {
        assert_eq!(parse("a /\\ b").unwrap(), parse("a & b").unwrap());
        assert_eq!(parse("a \\/ b").unwrap(), parse("a | b").unwrap());
        assert_eq!(parse("a => b").unwrap(), parse("a -> b").unwrap());
        assert_eq!(parse("a <=> b").unwrap(), parse("a <-> b").unwrap());
        assert_eq!(parse("~a").unwrap(), parse("!a").unwrap());
    }

    #[test]
    fn constants_comments_and_identifiers() {
        assert_eq!(
            parse("true & rain_2 ; trailing comment").unwrap(),
            Formula::Top & atom("rain_2")
        );
        assert_eq!(parse("(false)").unwrap(), Formula::Bottom);
        assert_eq!(parse("truth").unwrap(), atom("truth"));
    }

    #[test]
    fn printing_round_trips() {
        for src in [
            "a & b | c",
            "a & (b | c)",
            "!(a -> b) <-> c",
            "(a -> b) -> c",
            "a -> b -> c",
            "a & (b & c)",
            "!!false | true",
        ] {
            let formula = parse(src).unwrap();
            assert_eq!(formula.to_string(), src);
            assert_eq!(parse(&formula.to_string()).unwrap(), formula);
        }
    }

    #[test]
    fn errors_are_reported() {
        assert!(parse("").is_err());
        assert!(parse("a &").is_err());
        assert!(parse("(a | b").is_err());
        assert!(parse("a $ b").is_err());
        assert!(parse("a b").is_err());
    }
}
