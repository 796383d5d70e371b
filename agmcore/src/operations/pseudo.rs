use crate::{
    base::BeliefSet,
    closure::{ConsequenceOperator, NoClosure, close_checked},
    ext::observe::{ObserverRef, default_observer},
    functions::{SelectFull, Selector},
    operations::{DegenerateAxioms, NoDegenerate, Operation, OperationOutcome, meet},
    oracle::{Oracle, Property},
    search::{ConfiguredSearch, KernelSearch},
    utils::error::AgmResult,
};

/// SRW pseudo-contraction `⋂γ(Cn(B) ⊥ α)`, with γ = full meet by default.
///
/// Unlike [`PartialMeetContractor`](super::PartialMeetContractor), the meet is
/// not intersected with the original base: consequences inferred by the
/// closure that survive every selected remainder are kept.
#[derive(Clone)]
pub struct PseudoContractor<G = SelectFull, C = NoClosure, D = NoDegenerate, S = ConfiguredSearch> {
    search: S,
    selector: G,
    closure: C,
    degenerate: D,
    observer: ObserverRef,
}

impl<S: KernelSearch> PseudoContractor<SelectFull, NoClosure, NoDegenerate, S> {
    pub fn new(search: S) -> Self {
        Self {
            search,
            selector: SelectFull,
            closure: NoClosure,
            degenerate: NoDegenerate,
            observer: default_observer(),
        }
    }
}

impl<G, C, D, S: KernelSearch> PseudoContractor<G, C, D, S> {
    pub fn with_selector<G2>(self, selector: G2) -> PseudoContractor<G2, C, D, S> {
        PseudoContractor {
            search: self.search,
            selector,
            closure: self.closure,
            degenerate: self.degenerate,
            observer: self.observer,
        }
    }

    pub fn with_closure<C2>(self, closure: C2) -> PseudoContractor<G, C2, D, S> {
        PseudoContractor {
            search: self.search,
            selector: self.selector,
            closure,
            degenerate: self.degenerate,
            observer: self.observer,
        }
    }

    pub fn with_degenerate<D2>(self, degenerate: D2) -> PseudoContractor<G, C, D2, S> {
        PseudoContractor {
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

    pub fn pseudo_contract<O>(
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
        let selected = self.selector.select(&closed, &remainders);
        let result = meet(&selected, &self.degenerate);

        Ok(OperationOutcome::new(
            Operation::PseudoContraction,
            original,
            result,
            &found,
            &self.observer,
        ))
    }
}
