//! Belief change operators.
//!
//! Every operator follows the same pipeline:
//! 1. close the input base under the configured [`ConsequenceOperator`];
//! 2. enumerate kernel elements (or remainders) of the closed set for the
//!    operation's target property;
//! 3. apply a selection or incision function;
//! 4. apply the outcome to the *original* base (subtract, intersect, or
//!    subtract then re-assert).
//!
//! | Operator | Search | Function | Result |
//! |----------|--------|----------|--------|
//! | [`KernelContractor`] | entailment kernels | σ | `B \ σ` |
//! | [`PartialMeetContractor`] | remainders | γ | `B ∩ ⋂γ(Cn(B) ⊥ α)` |
//! | [`PseudoContractor`] | remainders | γ (full) | `⋂γ(Cn(B) ⊥ α)` |
//! | [`Revisor`] | inconsistency kernels of `B ∪ {α}` | σ | `(B ∪ {α}) \ σ`, then `∪ {α}` |
//!
//! [`ConsequenceOperator`]: crate::closure::ConsequenceOperator
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIs, EnumIter, EnumString};

use crate::{
    base::{Axiom, BeliefSet},
    ext::observe::{ObserverRef, SearchEvent},
    search::{KernelSearchResult, SearchRunInfo, SearchStatus},
};

mod contraction;
mod partial_meet;
mod pseudo;
mod revision;

pub use contraction::KernelContractor;
pub use partial_meet::PartialMeetContractor;
pub use pseudo::PseudoContractor;
pub use revision::{Revisor, SuccessPolicy};

/// The belief change operators.
#[derive(
    Debug,
    Clone,
    Copy,
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
pub enum Operation {
    KernelContraction,
    PartialMeetContraction,
    PseudoContraction,
    Revision,
}

/// Axioms an operator must never keep in a meet, e.g. axioms that only state
/// an inconsistency marker.
pub trait DegenerateAxioms<A> {
    fn is_degenerate(&self, axiom: &A) -> bool;
}

impl<A, F: Fn(&A) -> bool> DegenerateAxioms<A> for F {
    fn is_degenerate(&self, axiom: &A) -> bool {
        self(axiom)
    }
}

/// No axiom is degenerate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDegenerate;

impl<A> DegenerateAxioms<A> for NoDegenerate {
    fn is_degenerate(&self, _axiom: &A) -> bool {
        false
    }
}

/// What the underlying search reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    pub status: SearchStatus,
    pub run_info: SearchRunInfo,
    /// Number of kernel elements found.
    pub kernels: usize,
}

impl SearchSummary {
    fn of<A: Axiom>(result: &KernelSearchResult<A>) -> Self {
        Self {
            status: result.status.clone(),
            run_info: result.run_info.clone(),
            kernels: result.kernel_set.len(),
        }
    }
}

/// Result of a belief change operation.
#[derive(Debug, Clone)]
pub struct OperationOutcome<A> {
    pub operation: Operation,
    pub result: BeliefSet<A>,
    /// Axioms of the original base missing from the result.
    pub removed: BeliefSet<A>,
    pub search: SearchSummary,
}

impl<A: Axiom> OperationOutcome<A> {
    fn new(
        operation: Operation,
        original: &BeliefSet<A>,
        result: BeliefSet<A>,
        search: &KernelSearchResult<A>,
        observer: &ObserverRef,
    ) -> Self {
        let removed = original.difference(&result);
        observer.on_event(&SearchEvent::OperationApplied {
            operation,
            removed: removed.len(),
            result_size: result.len(),
        });
        Self {
            operation,
            result,
            removed,
            search: SearchSummary::of(search),
        }
    }

    /// Whether the search behind the result was exhaustive.
    pub fn is_complete(&self) -> bool {
        self.search.status.is_complete()
    }
}

/// `⋂ selected`, stripped of degenerate axioms. An empty selection meets to
/// the empty set.
fn meet<A: Axiom>(
    selected: &crate::base::SetFamily<A>,
    degenerate: &impl DegenerateAxioms<A>,
) -> BeliefSet<A> {
    let mut meet = selected.intersection().unwrap_or_default();
    meet.retain(|axiom| !degenerate.is_degenerate(axiom));
    meet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::SetFamily;

    #[test]
    fn meet_strips_degenerate_axioms() {
        let selected: SetFamily<&str> = [
            BeliefSet::from(["a", "b", "bottom"]),
            BeliefSet::from(["a", "bottom", "c"]),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            meet(&selected, &|axiom: &&str| *axiom == "bottom"),
            BeliefSet::from(["a"])
        );
        assert_eq!(meet(&selected, &NoDegenerate), BeliefSet::from(["a", "bottom"]));
        assert!(meet(&SetFamily::<&str>::new(), &NoDegenerate).is_empty());
    }
}
