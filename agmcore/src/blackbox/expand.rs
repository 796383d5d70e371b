use serde::{Deserialize, Serialize};
use strum::{Display, EnumIs, EnumIter, EnumString};

use crate::{
    base::BeliefSet,
    blackbox::Expander,
    oracle::{Oracle, Probe},
    utils::error::AgmResult,
};

/// Inserts the axioms of the base one at a time and stops as soon as the
/// accumulator satisfies the property.
///
/// Costs one oracle call per inserted axiom, but hands a small candidate to
/// the shrinking phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct IncrementalExpander;

impl Expander for IncrementalExpander {
    fn expand<O: Oracle>(
        &self,
        probe: &Probe<'_, O>,
        base: &BeliefSet<O::Axiom>,
    ) -> AgmResult<BeliefSet<O::Axiom>> {
        let mut accumulator = BeliefSet::new();
        for axiom in base.iter() {
            accumulator.insert(axiom.clone());
            if probe.holds(&accumulator)? {
                return Ok(accumulator);
            }
        }

        Ok(BeliefSet::new())
    }
}

/// Takes the whole base in one step.
///
/// A single oracle call; the shrinking phase then has to walk every axiom.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeSetExpander;

impl Expander for WholeSetExpander {
    fn expand<O: Oracle>(
        &self,
        probe: &Probe<'_, O>,
        base: &BeliefSet<O::Axiom>,
    ) -> AgmResult<BeliefSet<O::Axiom>> {
        if probe.holds(base)? {
            Ok(base.clone())
        } else {
            Ok(BeliefSet::new())
        }
    }
}

/// Expansion strategy picked at construction time, e.g. from configuration.
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
pub enum ExpansionStrategy {
    #[default]
    Incremental,
    WholeSet,
}

impl Expander for ExpansionStrategy {
    fn expand<O: Oracle>(
        &self,
        probe: &Probe<'_, O>,
        base: &BeliefSet<O::Axiom>,
    ) -> AgmResult<BeliefSet<O::Axiom>> {
        match self {
            ExpansionStrategy::Incremental => IncrementalExpander.expand(probe, base),
            ExpansionStrategy::WholeSet => WholeSetExpander.expand(probe, base),
        }
    }
}
