//! Truth-table reasoner for propositional belief bases.
use std::collections::BTreeSet;

use agmcore::{
    base::BeliefSet,
    oracle::Oracle,
    utils::error::{AgmError, AgmResult},
};

use crate::formula::Formula;

/// Signature size above which the oracle refuses to enumerate valuations.
pub const DEFAULT_MAX_ATOMS: usize = 20;

/// Decides entailment and consistency by enumerating every valuation of the
/// atoms involved.
///
/// The cost is exponential in the signature, which is capped by `max_atoms`;
/// larger problems fail with [`AgmError::Oracle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthTableOracle {
    max_atoms: usize,
}

impl Default for TruthTableOracle {
    fn default() -> Self {
        Self {
            max_atoms: DEFAULT_MAX_ATOMS,
        }
    }
}

impl TruthTableOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the signature size. Values above 63 are clamped.
    pub fn with_max_atoms(max_atoms: usize) -> Self {
        Self {
            max_atoms: max_atoms.min(63),
        }
    }

    pub fn max_atoms(&self) -> usize {
        self.max_atoms
    }

    /// Whether some valuation satisfies every formula.
    pub fn satisfiable<'a>(&self, formulas: impl IntoIterator<Item = &'a Formula>) -> AgmResult<bool> {
        let formulas: Vec<&Formula> = formulas.into_iter().collect();
        let mut signature = BTreeSet::new();
        for formula in formulas.iter().copied() {
            formula.collect_atoms(&mut signature);
        }
        if signature.len() > self.max_atoms {
            return Err(AgmError::oracle(format!(
                "{} atoms exceed the truth table limit of {}",
                signature.len(),
                self.max_atoms
            )));
        }

        let signature: Vec<&str> = signature.into_iter().collect();
        let rows = 1u64 << signature.len();
        log::trace!(
            "checking {} formulas over {} atoms ({rows} valuations)",
            formulas.len(),
            signature.len()
        );

        for row in 0..rows {
            let valuation = |name: &str| {
                signature
                    .binary_search_by(|atom| (*atom).cmp(name))
                    .is_ok_and(|index| (row >> index) & 1 == 1)
            };
            if formulas.iter().all(|formula| formula.eval(&valuation)) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether `formula` holds under every valuation.
    pub fn is_valid(&self, formula: &Formula) -> AgmResult<bool> {
        let negated = Formula::negate(formula.clone());
        Ok(!self.satisfiable([&negated])?)
    }
}

impl Oracle for TruthTableOracle {
    type Axiom = Formula;
    type Formula = Formula;

    fn entails(&self, base: &BeliefSet<Formula>, formula: &Formula) -> AgmResult<bool> {
        let negated = Formula::negate(formula.clone());
        Ok(!self.satisfiable(base.iter().chain([&negated]))?)
    }

    fn is_consistent(&self, base: &BeliefSet<Formula>) -> AgmResult<bool> {
        self.satisfiable(base.iter())
    }
}
