use crate::{
    base::BeliefSet,
    blackbox::Shrinker,
    oracle::{Oracle, Probe},
    utils::error::AgmResult,
};

/// Walks a snapshot of the candidate once, dropping each axiom whose removal
/// keeps the property and restoring the ones it depends on.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearShrinker;

impl Shrinker for LinearShrinker {
    fn shrink<O: Oracle>(
        &self,
        probe: &Probe<'_, O>,
        candidate: &BeliefSet<O::Axiom>,
    ) -> AgmResult<BeliefSet<O::Axiom>> {
        let mut accumulator = candidate.clone();
        for axiom in candidate.iter() {
            accumulator.remove(axiom);
            if !probe.holds(&accumulator)? {
                accumulator.insert(axiom.clone());
            }
        }

        Ok(accumulator)
    }
}
