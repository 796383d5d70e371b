use crate::{
    base::BeliefSet,
    closure::{ConsequenceOperator, NoClosure, close_checked},
    ext::observe::{ObserverRef, default_observer},
    functions::Selector,
    operations::{DegenerateAxioms, NoDegenerate, Operation, OperationOutcome, meet},
    oracle::{Oracle, Property},
    search::{ConfiguredSearch, KernelSearch},
    utils::error::AgmResult,
};

/// Partial meet contraction `B ∩ ⋂γ(Cn(B) ⊥ α)`.
///
/// The remainder set is derived from the cut set of the kernel search. Only
/// axioms of the original base survive.
#[derive(Clone)]
pub struct PartialMeetContractor<G, C = NoClosure, D = NoDegenerate, S = ConfiguredSearch> {
    search: S,
    selector: G,
    closure: C,
    degenerate: D,
    observer: ObserverRef,
}

impl<G, S: KernelSearch> PartialMeetContractor<G, NoClosure, NoDegenerate, S> {
    pub fn new(search: S, selector: G) -> Self {
        Self {
            search,
            selector,
            closure: NoClosure,
            degenerate: NoDegenerate,
            observer: default_observer(),
        }
    }
}

impl<G, C, D, S: KernelSearch> PartialMeetContractor<G, C, D, S> {
    pub fn with_closure<C2>(self, closure: C2) -> PartialMeetContractor<G, C2, D, S> {
        PartialMeetContractor {
            search: self.search,
            selector: self.selector,
            closure,
            degenerate: self.degenerate,
            observer: self.observer,
        }
    }

    pub fn with_degenerate<D2>(self, degenerate: D2) -> PartialMeetContractor<G, C, D2, S> {
        PartialMeetContractor {
            search: self.search,
            selector: self.selector,
            closure: self.closure,
            degenerate,
            observer: self.observer,
        }
    }

    pub fn with_observer(mut self, observer: ObserverRef) -> Self {
        self.observer = observer;
        self
    }

    pub fn contract<O>(
        &self,
        oracle: &O,
        original: &BeliefSet<O::Axiom>,
        formula: &O::Formula,
    ) -> AgmResult<OperationOutcome<O::Axiom>>
    where
        O: Oracle,
        G: Selector<O::Axiom>,
        C: ConsequenceOperator<O::Axiom>,
        D: DegenerateAxioms<O::Axiom>,
    {
        let closed = close_checked(&self.closure, original)?;
        let property = Property::EntailsFormula(formula.clone());
        let found = self.search.search(oracle, &closed, &property)?;

        let remainders = found.checked_remainders(oracle, &closed, &property)?;
        let selected = self.selector.select(original, &remainders);
        let result = original.intersection(&meet(&selected, &self.degenerate));

        Ok(OperationOutcome::new(
            Operation::PartialMeetContraction,
            original,
            result,
            &found,
            &self.observer,
        ))
    }
}
