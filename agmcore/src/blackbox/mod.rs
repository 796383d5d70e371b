//! BlackBox extraction of a single kernel element.
//!
//! A kernel element is computed in two phases:
//! 1. an [`Expander`] grows (or takes) a subset of the input that satisfies the
//!    property;
//! 2. a [`Shrinker`] drops every axiom of that subset that is not needed to keep
//!    the property.
//!
//! The result is minimal: removing any one of its axioms breaks the property.
//! Which minimal subset is found depends on the iteration order, never on
//! anything else.
use crate::{
    base::BeliefSet,
    oracle::{Oracle, Probe},
    utils::error::AgmResult,
};

mod expand;
mod shrink;

pub use expand::{ExpansionStrategy, IncrementalExpander, WholeSetExpander};
pub use shrink::LinearShrinker;

/// First phase of the BlackBox algorithm.
pub trait Expander {
    /// Returns a subset of `base` satisfying the probed property, or the empty
    /// set when `base` itself does not satisfy it.
    fn expand<O: Oracle>(
        &self,
        probe: &Probe<'_, O>,
        base: &BeliefSet<O::Axiom>,
    ) -> AgmResult<BeliefSet<O::Axiom>>;
}

/// Second phase of the BlackBox algorithm.
pub trait Shrinker {
    /// Reduces `candidate`, which satisfies the probed property, to a minimal
    /// subset that still satisfies it.
    fn shrink<O: Oracle>(
        &self,
        probe: &Probe<'_, O>,
        candidate: &BeliefSet<O::Axiom>,
    ) -> AgmResult<BeliefSet<O::Axiom>>;
}

/// Expand-then-shrink extractor.
#[derive(Debug, Clone, Default)]
pub struct BlackBox<E = ExpansionStrategy, S = LinearShrinker> {
    expander: E,
    shrinker: S,
}

impl<E: Expander, S: Shrinker> BlackBox<E, S> {
    pub fn new(expander: E, shrinker: S) -> Self {
        Self { expander, shrinker }
    }

    /// Computes one kernel element of `base`, or the empty set if `base` does
    /// not satisfy the probed property.
    pub fn extract<O: Oracle>(
        &self,
        probe: &Probe<'_, O>,
        base: &BeliefSet<O::Axiom>,
    ) -> AgmResult<BeliefSet<O::Axiom>> {
        if base.is_empty() {
            return Ok(BeliefSet::new());
        }

        let expanded = self.expander.expand(probe, base)?;
        if expanded.is_empty() {
            return Ok(expanded);
        }

        self.shrinker.shrink(probe, &expanded)
    }
}
