use serde::{Deserialize, Serialize};
use strum::{Display, EnumIs, EnumIter, EnumString};

use crate::{
    base::BeliefSet,
    closure::{ConsequenceOperator, NoClosure, close_checked},
    ext::observe::{ObserverRef, default_observer},
    functions::Incisor,
    operations::{Operation, OperationOutcome},
    oracle::Oracle,
    search::{ConfiguredSearch, KernelSearch, RevisionKernelSearch},
    utils::error::AgmResult,
};

/// Whether the revising sentence is guaranteed to end up in the result.
///
/// Weak success and weak uniformity are not provided.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumIs,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SuccessPolicy {
    /// The sentence is re-asserted after the incision.
    #[default]
    Strong,
    /// The incision result is returned as is; the sentence may be removed.
    None,
}

/// Kernel revision `(B ∪ {α}) \ σ(Cn(B ∪ {α}) ⊥⊥ ⊥)`, then `∪ {α}` under
/// [`SuccessPolicy::Strong`].
///
/// With strong success and an incision that removes `α` itself, the result can
/// stay inconsistent.
#[derive(Clone)]
pub struct Revisor<I, C = NoClosure, S = ConfiguredSearch> {
    search: RevisionKernelSearch<S>,
    incisor: I,
    closure: C,
    success: SuccessPolicy,
    observer: ObserverRef,
}

impl<I, S: KernelSearch> Revisor<I, NoClosure, S> {
    pub fn new(search: S, incisor: I) -> Self {
        Self {
            search: RevisionKernelSearch::new(search),
            incisor,
            closure: NoClosure,
            success: SuccessPolicy::default(),
            observer: default_observer(),
        }
    }
}

impl<I, C, S: KernelSearch> Revisor<I, C, S> {
    pub fn with_closure<C2>(self, closure: C2) -> Revisor<I, C2, S> {
        Revisor {
            search: self.search,
            incisor: self.incisor,
            closure,
            success: self.success,
            observer: self.observer,
        }
    }

    pub fn with_success(mut self, success: SuccessPolicy) -> Self {
        self.success = success;
        self
    }

    pub fn with_observer(mut self, observer: ObserverRef) -> Self {
        self.observer = observer;
        self
    }

    pub fn revise<O>(
        &self,
        oracle: &O,
        original: &BeliefSet<O::Axiom>,
        sentence: &O::Axiom,
    ) -> AgmResult<OperationOutcome<O::Axiom>>
    where
        O: Oracle,
        I: Incisor<O::Axiom>,
        C: ConsequenceOperator<O::Axiom>,
    {
        let extended = original.with(sentence.clone());
        let closed = close_checked(&self.closure, &extended)?;
        let (_, found) = self.search.inconsistency_kernels(oracle, &closed, sentence)?;

        let incision = self.incisor.incise(&extended, &found.kernel_set);
        let mut result = extended.difference(&incision);
        if self.success.is_strong() {
            result.insert(sentence.clone());
        }

        Ok(OperationOutcome::new(
            Operation::Revision,
            original,
            result,
            &found,
            &self.observer,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        base::KernelSet,
        functions::{InciseAny, InciseGreedy},
        tests_utils::SubsetOracle,
    };

    #[test]
    fn consistent_revision_is_expansion() {
        let oracle = SubsetOracle::new().with_conflict(&["p", "not_p"]);
        let original = BeliefSet::from(["q", "r"]);

        let outcome = Revisor::new(ConfiguredSearch::default(), InciseGreedy)
            .revise(&oracle, &original, &"p")
            .unwrap();
        assert_eq!(outcome.result, BeliefSet::from(["p", "q", "r"]));
        assert!(outcome.removed.is_empty());
        assert_eq!(outcome.search.kernels, 0);
    }

    #[test]
    fn strong_success_keeps_the_sentence() {
        let oracle = SubsetOracle::new()
            .with_conflict(&["p", "not_p"])
            .with_conflict(&["not_p", "q"]);
        let original = BeliefSet::from(["p", "q", "r"]);

        let outcome = Revisor::new(ConfiguredSearch::default(), InciseGreedy)
            .revise(&oracle, &original, &"not_p")
            .unwrap();
        // Greedy removes the shared axiom, which is the sentence itself, and
        // strong success puts it back.
        assert!(outcome.result.contains(&"not_p"));
        assert!(!oracle.is_consistent(&outcome.result).unwrap());
    }

    #[test]
    fn no_success_policy() {
        let oracle = SubsetOracle::new().with_conflict(&["p", "not_p"]);
        let original = BeliefSet::from(["p"]);

        let strong = Revisor::new(ConfiguredSearch::default(), InciseAny)
            .revise(&oracle, &original, &"not_p")
            .unwrap();
        let none = Revisor::new(ConfiguredSearch::default(), InciseAny)
            .with_success(SuccessPolicy::None)
            .revise(&oracle, &original, &"not_p")
            .unwrap();

        assert_eq!(strong.result, BeliefSet::from(["not_p"]));
        assert!(none.result.is_empty());
    }

    #[test]
    fn incising_old_beliefs_restores_consistency() {
        let oracle = SubsetOracle::new()
            .with_conflict(&["p", "not_p"])
            .with_conflict(&["not_p", "q"]);
        let original = BeliefSet::from(["p", "q", "r"]);
        let old_beliefs_only = |_: &BeliefSet<&'static str>, kernels: &KernelSet<&'static str>| {
            kernels
                .iter()
                .flat_map(|kernel| kernel.iter().copied().filter(|axiom| *axiom != "not_p"))
                .collect::<BeliefSet<_>>()
        };

        let outcome = Revisor::new(ConfiguredSearch::default(), old_beliefs_only)
            .revise(&oracle, &original, &"not_p")
            .unwrap();
        assert_eq!(outcome.result, BeliefSet::from(["not_p", "r"]));
        assert!(oracle.is_consistent(&outcome.result).unwrap());
    }
}
