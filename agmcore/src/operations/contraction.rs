use crate::{
    base::BeliefSet,
    closure::{ConsequenceOperator, NoClosure, close_checked},
    ext::observe::{ObserverRef, default_observer},
    functions::Incisor,
    operations::{Operation, OperationOutcome},
    oracle::{Oracle, Property},
    search::{ConfiguredSearch, KernelSearch},
    utils::error::AgmResult,
};

/// Kernel contraction `B ÷σ α = B \ σ(Cn(B) ⊥⊥ α)`.
///
/// With an incision that hits every kernel element of a complete search, the
/// result no longer entails `α` through any asserted axiom.
#[derive(Clone)]
pub struct KernelContractor<I, C = NoClosure, S = ConfiguredSearch> {
    search: S,
    incisor: I,
    closure: C,
    observer: ObserverRef,
}

impl<I, S: KernelSearch> KernelContractor<I, NoClosure, S> {
    pub fn new(search: S, incisor: I) -> Self {
        Self {
            search,
            incisor,
            closure: NoClosure,
            observer: default_observer(),
        }
    }
}

impl<I, C, S: KernelSearch> KernelContractor<I, C, S> {
    pub fn with_closure<C2>(self, closure: C2) -> KernelContractor<I, C2, S> {
        KernelContractor {
            search: self.search,
            incisor: self.incisor,
            closure,
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
        I: Incisor<O::Axiom>,
        C: ConsequenceOperator<O::Axiom>,
    {
        let closed = close_checked(&self.closure, original)?;
        let property = Property::EntailsFormula(formula.clone());
        let found = self.search.search(oracle, &closed, &property)?;

        let incision = self.incisor.incise(original, &found.kernel_set);
        let result = original.difference(&incision);

        Ok(OperationOutcome::new(
            Operation::KernelContraction,
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
        functions::{InciseAny, InciseUnion},
        search::OptimizedSearch,
        tests_utils::SubsetOracle,
    };

    #[test]
    fn removes_every_cause() {
        let oracle = SubsetOracle::new();
        let formula = SubsetOracle::trigger(&[&["a", "b"], &["c"]]);
        let original = BeliefSet::from(["a", "b", "c", "d"]);

        let contractor = KernelContractor::new(ConfiguredSearch::default(), InciseUnion);
        let outcome = contractor.contract(&oracle, &original, &formula).unwrap();

        assert_eq!(outcome.result, BeliefSet::from(["d"]));
        assert_eq!(outcome.removed, BeliefSet::from(["a", "b", "c"]));
        assert_eq!(outcome.search.kernels, 2);
        assert!(outcome.is_complete());
        assert!(!oracle.entails(&outcome.result, &formula).unwrap());
    }

    #[test]
    fn nothing_to_remove() {
        let oracle = SubsetOracle::new();
        let formula = SubsetOracle::trigger(&[&["z"]]);
        let original = BeliefSet::from(["a", "b"]);

        let contractor = KernelContractor::new(OptimizedSearch::default(), InciseAny);
        let outcome = contractor.contract(&oracle, &original, &formula).unwrap();
        assert_eq!(outcome.result, original);
        assert!(outcome.removed.is_empty());
    }

    #[test]
    fn inferred_axioms_are_never_added() {
        let oracle = SubsetOracle::new();
        let formula = SubsetOracle::trigger(&[&["inferred"]]);
        let original = BeliefSet::from(["a"]);
        let closure = |base: &BeliefSet<&'static str>| -> AgmResult<BeliefSet<&'static str>> {
            Ok(base.with("inferred"))
        };

        let outcome = KernelContractor::new(ConfiguredSearch::default(), InciseUnion)
            .with_closure(closure)
            .contract(&oracle, &original, &formula)
            .unwrap();
        assert_eq!(outcome.result, original);
        assert_eq!(outcome.search.kernels, 1);
    }
}
