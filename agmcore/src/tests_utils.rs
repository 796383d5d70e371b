use std::cell::Cell;

use crate::{
    base::{BeliefSet, KernelSet},
    oracle::{Oracle, Probe, Property},
    utils::error::{AgmError, AgmResult},
};

/// Formula of a [`SubsetOracle`]: entailed by a set as soon as the set
/// contains one of the listed axiom groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger(pub Vec<BeliefSet<&'static str>>);

/// Oracle implemented as a literal, monotone predicate over subsets.
///
/// * `entails(S, t)` holds iff `S` includes one of the groups of `t`.
/// * `is_consistent(S)` fails iff `S` includes one of the conflict groups.
#[derive(Debug, Default)]
pub struct SubsetOracle {
    conflicts: Vec<BeliefSet<&'static str>>,
    failing: Option<BeliefSet<&'static str>>,
    calls: Cell<usize>,
}

impl SubsetOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trigger formula from axiom groups.
    pub fn trigger(groups: &[&[&'static str]]) -> Trigger {
        Trigger(
            groups
                .iter()
                .map(|group| group.iter().copied().collect())
                .collect(),
        )
    }

    /// Declares a group of axioms that cannot hold together.
    pub fn with_conflict(mut self, group: &[&'static str]) -> Self {
        self.conflicts.push(group.iter().copied().collect());
        self
    }

    /// Makes every call on exactly this set fail.
    pub fn failing_on(mut self, set: &[&'static str]) -> Self {
        self.failing = Some(set.iter().copied().collect());
        self
    }

    /// Total number of calls received.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn record(&self, base: &BeliefSet<&'static str>) -> AgmResult<()> {
        self.calls.set(self.calls.get() + 1);
        match &self.failing {
            Some(failing) if failing == base => {
                Err(AgmError::oracle(format!("no verdict for {base:?}")))
            }
            _ => Ok(()),
        }
    }
}

impl Oracle for SubsetOracle {
    type Axiom = &'static str;
    type Formula = Trigger;

    fn entails(&self, base: &BeliefSet<Self::Axiom>, formula: &Trigger) -> AgmResult<bool> {
        self.record(base)?;
        Ok(formula.0.iter().any(|group| group.is_subset(base)))
    }

    fn is_consistent(&self, base: &BeliefSet<Self::Axiom>) -> AgmResult<bool> {
        self.record(base)?;
        Ok(!self.conflicts.iter().any(|group| group.is_subset(base)))
    }
}

/// Enumerates every subset of `base` and keeps the minimal ones satisfying the
/// property. Exponential, meant for bases of a dozen axioms at most.
pub fn brute_force_kernels<O: Oracle>(
    oracle: &O,
    base: &BeliefSet<O::Axiom>,
    property: &Property<O::Formula>,
) -> AgmResult<KernelSet<O::Axiom>> {
    assert!(base.len() < 20, "brute force over too many axioms");

    let axioms: Vec<&O::Axiom> = base.iter().collect();
    let probe = Probe::new(oracle, property);
    let mut satisfying = KernelSet::new();
    for mask in 0u32..(1 << axioms.len()) {
        let subset: BeliefSet<O::Axiom> = axioms
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, axiom)| (*axiom).clone())
            .collect();
        if probe.holds(&subset)? {
            satisfying.insert(subset);
        }
    }

    Ok(satisfying.minimal())
}

/// Whether `element` satisfies the property and every one-axiom removal breaks it.
pub fn is_minimal<O: Oracle>(
    oracle: &O,
    element: &BeliefSet<O::Axiom>,
    property: &Property<O::Formula>,
) -> AgmResult<bool> {
    let probe = Probe::new(oracle, property);
    if !probe.holds(element)? {
        return Ok(false);
    }
    for axiom in element.iter() {
        let mut reduced = element.clone();
        reduced.remove(axiom);
        if probe.holds(&reduced)? {
            return Ok(false);
        }
    }
    Ok(true)
}
