use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIs, EnumIter, EnumString};

use crate::base::{Axiom, BeliefSet, KernelSet};

/// Incision function σ: the axioms a kernel operation removes.
///
/// An empty kernel set incises nothing.
pub trait Incisor<A: Axiom> {
    fn incise(&self, original: &BeliefSet<A>, kernel_set: &KernelSet<A>) -> BeliefSet<A>;
}

impl<A, F> Incisor<A> for F
where
    A: Axiom,
    F: Fn(&BeliefSet<A>, &KernelSet<A>) -> BeliefSet<A>,
{
    fn incise(&self, original: &BeliefSet<A>, kernel_set: &KernelSet<A>) -> BeliefSet<A> {
        self(original, kernel_set)
    }
}

/// Removes one kernel element verbatim, the first in iteration order.
///
/// Only hits every kernel element when the others share an axiom with it.
#[derive(Debug, Clone, Copy, Default)]
pub struct InciseAny;

impl<A: Axiom> Incisor<A> for InciseAny {
    fn incise(&self, _original: &BeliefSet<A>, kernel_set: &KernelSet<A>) -> BeliefSet<A> {
        kernel_set.first().cloned().unwrap_or_default()
    }
}

/// Removes every axiom of every kernel element.
#[derive(Debug, Clone, Copy, Default)]
pub struct InciseUnion;

impl<A: Axiom> Incisor<A> for InciseUnion {
    fn incise(&self, _original: &BeliefSet<A>, kernel_set: &KernelSet<A>) -> BeliefSet<A> {
        kernel_set.union()
    }
}

/// Builds a hitting set greedily: repeatedly removes the axiom shared by the
/// most kernel elements not hit yet. Ties go to the smallest axiom.
#[derive(Debug, Clone, Copy, Default)]
pub struct InciseGreedy;

impl<A: Axiom> Incisor<A> for InciseGreedy {
    fn incise(&self, _original: &BeliefSet<A>, kernel_set: &KernelSet<A>) -> BeliefSet<A> {
        let mut pending: Vec<&BeliefSet<A>> =
            kernel_set.iter().filter(|element| !element.is_empty()).collect();
        let mut incision = BeliefSet::new();

        while !pending.is_empty() {
            let mut occurrences: BTreeMap<&A, usize> = BTreeMap::new();
            for element in &pending {
                for axiom in element.iter() {
                    *occurrences.entry(axiom).or_default() += 1;
                }
            }

            let mut best: Option<(&A, usize)> = None;
            for (axiom, count) in occurrences {
                if best.is_none_or(|(_, best_count)| count > best_count) {
                    best = Some((axiom, count));
                }
            }
            let Some((axiom, _)) = best else { break };

            let axiom = axiom.clone();
            pending.retain(|element| !element.contains(&axiom));
            incision.insert(axiom);
        }

        incision
    }
}

/// Built-in incision policies by name.
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
pub enum IncisionStrategy {
    Any,
    #[default]
    Union,
    Greedy,
}

impl<A: Axiom> Incisor<A> for IncisionStrategy {
    fn incise(&self, original: &BeliefSet<A>, kernel_set: &KernelSet<A>) -> BeliefSet<A> {
        match self {
            IncisionStrategy::Any => InciseAny.incise(original, kernel_set),
            IncisionStrategy::Union => InciseUnion.incise(original, kernel_set),
            IncisionStrategy::Greedy => InciseGreedy.incise(original, kernel_set),
        }
    }
}
