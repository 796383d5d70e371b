//! Finite fragments of the propositional consequence operator.
//!
//! `Cn(B)` is infinite, so operations that need a closed base work on a
//! finite slice of it: the formulas produced by the configured
//! [`Generator`]s that `B` entails, on top of `B` itself.
use std::collections::BTreeSet;

use agmcore::{
    base::BeliefSet,
    closure::ConsequenceOperator,
    oracle::Oracle,
    utils::error::AgmResult,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{
    error::{PropError, PropResult},
    formula::Formula,
    oracle::TruthTableOracle,
};

/// Candidate formulas considered for the closure.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Generator {
    /// Every atom of the signature and its negation.
    Literals,
    /// Every proper subformula of an asserted axiom.
    Subformulas,
}

impl Generator {
    fn candidates<'a>(&self, base: &'a BeliefSet<Formula>, out: &mut BTreeSet<Formula>) {
        match self {
            Generator::Literals => {
                let mut signature = BTreeSet::new();
                for axiom in base.iter() {
                    axiom.collect_atoms(&mut signature);
                }
                for atom in signature {
                    out.insert(Formula::atom(atom));
                    out.insert(Formula::negate(Formula::atom(atom)));
                }
            }
            Generator::Subformulas => {
                for axiom in base.iter() {
                    out.extend(axiom.subformulas().into_iter().cloned());
                }
            }
        }
    }
}

/// Closes a base under the entailed formulas of its [`Generator`]s.
///
/// Asserted axioms are always kept. The constants `true` and `false` are
/// never added.
#[derive(Debug, Clone, Default)]
pub struct SignatureClosure {
    generators: BTreeSet<Generator>,
    oracle: TruthTableOracle,
}

impl SignatureClosure {
    pub fn new(generators: impl IntoIterator<Item = Generator>) -> Self {
        Self {
            generators: generators.into_iter().collect(),
            oracle: TruthTableOracle::default(),
        }
    }

    /// Builds a closure from generator names such as `"literals"`.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> PropResult<Self> {
        let generators = names
            .iter()
            .map(|name| {
                name.as_ref()
                    .parse::<Generator>()
                    .map_err(|_| PropError::UnknownGenerator(name.as_ref().to_string()))
            })
            .collect::<PropResult<Vec<_>>>()?;
        Ok(Self::new(generators))
    }

    pub fn with_oracle(mut self, oracle: TruthTableOracle) -> Self {
        self.oracle = oracle;
        self
    }

    pub fn generators(&self) -> impl Iterator<Item = Generator> + '_ {
        self.generators.iter().copied()
    }

    /// Whether no generator is configured, making the closure the identity.
    pub fn is_identity(&self) -> bool {
        self.generators.is_empty()
    }
}

impl ConsequenceOperator<Formula> for SignatureClosure {
    fn close(&self, base: &BeliefSet<Formula>) -> AgmResult<BeliefSet<Formula>> {
        let mut candidates = BTreeSet::new();
        for generator in &self.generators {
            generator.candidates(base, &mut candidates);
        }

        let mut closed = base.clone();
        for candidate in candidates {
            if candidate.is_top() || candidate.is_bottom() || closed.contains(&candidate) {
                continue;
            }
            if self.oracle.entails(base, &candidate)? {
                closed.insert(candidate);
            }
        }

        log::debug!(
            "closed {} axioms into {} under {:?}",
            base.len(),
            closed.len(),
            self.generators
        );
        Ok(closed)
    }
}
