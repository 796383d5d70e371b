//! Propositional formulas.
//!
//! A [`Formula`] is a plain owned tree. Formulas are totally ordered so that
//! they can be used directly as axioms of an `agmcore` belief set, and they
//! print back in the syntax accepted by [`crate::parser::parse`]:
//!
//! | Connective | Printed as | Precedence |
//! |------------|------------|------------|
//! | negation | `!p` | highest |
//! | conjunction | `p & q` | left-assoc |
//! | disjunction | `p \| q` | left-assoc |
//! | implication | `p -> q` | right-assoc |
//! | equivalence | `p <-> q` | lowest, left-assoc |
//!
//! Operator sugar is available: `p & q`, `p | q` and `!p` build formulas.
use std::{collections::BTreeSet, fmt, str::FromStr};

use strum::{EnumIs, EnumTryAs};

use crate::{error::PropError, oracle::TruthTableOracle, parser::parse};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIs, EnumTryAs)]
pub enum Formula {
    Top,
    Bottom,
    Atom(String),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn atom(name: impl Into<String>) -> Self {
        Formula::Atom(name.into())
    }

    pub fn negate(inner: Formula) -> Self {
        Formula::Not(Box::new(inner))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Formula, right: Formula) -> Self {
        Formula::Implies(Box::new(left), Box::new(right))
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    /// Conjunction of every formula, `true` for none.
    pub fn conjunction(formulas: impl IntoIterator<Item = Formula>) -> Self {
        formulas
            .into_iter()
            .reduce(Formula::and)
            .unwrap_or(Formula::Top)
    }

    /// Direct children, left to right.
    pub fn children(&self) -> Vec<&Formula> {
        match self {
            Formula::Top | Formula::Bottom | Formula::Atom(_) => vec![],
            Formula::Not(inner) => vec![&**inner],
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => {
                vec![&**l, &**r]
            }
        }
    }

    /// Names of the atoms occurring in the formula.
    pub fn atoms(&self) -> BTreeSet<&str> {
        let mut atoms = BTreeSet::new();
        self.collect_atoms(&mut atoms);
        atoms
    }

    pub(crate) fn collect_atoms<'a>(&'a self, atoms: &mut BTreeSet<&'a str>) {
        match self {
            Formula::Atom(name) => {
                atoms.insert(name.as_str());
            }
            _ => self
                .children()
                .into_iter()
                .for_each(|child| child.collect_atoms(atoms)),
        }
    }

    /// Every subformula, the formula itself included.
    pub fn subformulas(&self) -> BTreeSet<&Formula> {
        let mut found = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(formula) = stack.pop() {
            if found.insert(formula) {
                stack.extend(formula.children());
            }
        }
        found
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        1 + self.children().into_iter().map(Formula::size).sum::<usize>()
    }

    /// Whether the bottom constant occurs anywhere in the formula.
    pub fn mentions_bottom(&self) -> bool {
        match self {
            Formula::Bottom => true,
            _ => self.children().into_iter().any(Formula::mentions_bottom),
        }
    }

    /// A valid formula built around `false`, such as `!(p & false)`.
    ///
    /// A meet never keeps these. A formula too wide for the truth table is
    /// never degenerate.
    pub fn is_degenerate(&self) -> bool {
        self.mentions_bottom() && matches!(TruthTableOracle::new().is_valid(self), Ok(true))
    }

    /// Truth value under `valuation`, which maps atom names to booleans.
    pub fn eval<V: Fn(&str) -> bool>(&self, valuation: &V) -> bool {
        match self {
            Formula::Top => true,
            Formula::Bottom => false,
            Formula::Atom(name) => valuation(name.as_str()),
            Formula::Not(inner) => !inner.eval(valuation),
            Formula::And(l, r) => l.eval(valuation) && r.eval(valuation),
            Formula::Or(l, r) => l.eval(valuation) || r.eval(valuation),
            Formula::Implies(l, r) => !l.eval(valuation) || r.eval(valuation),
            Formula::Iff(l, r) => l.eval(valuation) == r.eval(valuation),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Formula::Iff(..) => 1,
            Formula::Implies(..) => 2,
            Formula::Or(..) => 3,
            Formula::And(..) => 4,
            Formula::Not(_) => 5,
            Formula::Top | Formula::Bottom | Formula::Atom(_) => 6,
        }
    }

    fn fmt_at(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        let own = self.precedence();
        if own < min {
            write!(f, "(")?;
        }
        match self {
            Formula::Top => write!(f, "true")?,
            Formula::Bottom => write!(f, "false")?,
            Formula::Atom(name) => write!(f, "{name}")?,
            Formula::Not(inner) => {
                write!(f, "!")?;
                inner.fmt_at(f, own)?;
            }
            Formula::And(l, r) => binary(f, l, " & ", r, own, own + 1)?,
            Formula::Or(l, r) => binary(f, l, " | ", r, own, own + 1)?,
            Formula::Implies(l, r) => binary(f, l, " -> ", r, own + 1, own)?,
            Formula::Iff(l, r) => binary(f, l, " <-> ", r, own, own + 1)?,
        }
        if own < min {
            write!(f, ")")?;
        }
        Ok(())
    }
}

fn binary(
    f: &mut fmt::Formatter<'_>,
    left: &Formula,
    op: &str,
    right: &Formula,
    left_min: u8,
    right_min: u8,
) -> fmt::Result {
    left.fmt_at(f, left_min)?;
    write!(f, "{op}")?;
    right.fmt_at(f, right_min)
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at(f, 0)
    }
}

impl FromStr for Formula {
    type Err = PropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map_err(|errors| PropError::Parse {
            input: s.to_string(),
            errors,
        })
    }
}

impl std::ops::BitAnd for Formula {
    type Output = Formula;

    fn bitand(self, rhs: Formula) -> Formula {
        Formula::and(self, rhs)
    }
}

impl std::ops::BitOr for Formula {
    type Output = Formula;

    fn bitor(self, rhs: Formula) -> Formula {
        Formula::or(self, rhs)
    }
}

impl std::ops::Not for Formula {
    type Output = Formula;

    fn not(self) -> Formula {
        Formula::negate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> Formula {
        Formula::atom("a")
    }
    fn b() -> Formula {
        Formula::atom("b")
    }
    fn c() -> Formula {
        Formula::atom("c")
    }

    #[test]
    fn display_uses_minimal_parentheses() {
        assert_eq!((a() & b() | c()).to_string(), "a & b | c");
        assert_eq!((a() & (b() | c())).to_string(), "a & (b | c)");
        assert_eq!((!(a() & b())).to_string(), "!(a & b)");
        assert_eq!(
            Formula::implies(a(), Formula::implies(b(), c())).to_string(),
            "a -> b -> c"
        );
        assert_eq!(
            Formula::implies(Formula::implies(a(), b()), c()).to_string(),
            "(a -> b) -> c"
        );
        assert_eq!((a() & (b() & c())).to_string(), "a & (b & c)");
        assert_eq!(
            Formula::iff(a(), Formula::negate(Formula::Bottom)).to_string(),
            "a <-> !false"
        );
    }

    #[test]
    fn atoms_and_subformulas() {
        let formula = Formula::implies(a() & b(), a() | c());
        assert_eq!(formula.atoms(), BTreeSet::from(["a", "b", "c"]));
        assert_eq!(formula.subformulas().len(), 6);
        assert_eq!(formula.size(), 7);
    }

    #[test]
    fn evaluation() {
        let formula = Formula::iff(a(), !b());
        assert!(formula.eval(&|name: &str| name == "a"));
        assert!(!formula.eval(&|_: &str| true));
        assert!(Formula::implies(Formula::Bottom, a()).eval(&|_: &str| false));
    }

    #[test]
    fn bottom_detection() {
        assert!(Formula::implies(a(), Formula::Bottom).mentions_bottom());
        assert!(!(a() | Formula::Top).mentions_bottom());
    }

    #[test]
    fn only_valid_bottom_formulas_are_degenerate() {
        assert!(!Formula::implies(a(), Formula::Bottom).is_degenerate());
        assert!(!Formula::Bottom.is_degenerate());
        assert!(!(a() & Formula::Bottom).is_degenerate());
        assert!((!(a() & Formula::Bottom)).is_degenerate());
        assert!(Formula::implies(Formula::Bottom, b()).is_degenerate());
        assert!(!(a() | !a()).is_degenerate());
    }

    #[test]
    fn conjunction_of_nothing_is_top() {
        assert_eq!(Formula::conjunction([]), Formula::Top);
        assert_eq!(Formula::conjunction([a(), b()]), a() & b());
    }
}
