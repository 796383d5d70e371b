use serde::{Deserialize, Serialize};
use strum::{Display, EnumIs, EnumIter, EnumString};

use crate::base::{Axiom, BeliefSet, SetFamily};

/// Selection function γ: picks which members of a family (kernel elements or
/// remainders) an operation acts on.
///
/// The result is a subfamily of `family`, non-empty whenever `family` is. An
/// empty family selects `{original}`: there is nothing to give up.
pub trait Selector<A: Axiom> {
    fn select(&self, original: &BeliefSet<A>, family: &SetFamily<A>) -> SetFamily<A>;
}

impl<A, F> Selector<A> for F
where
    A: Axiom,
    F: Fn(&BeliefSet<A>, &SetFamily<A>) -> SetFamily<A>,
{
    fn select(&self, original: &BeliefSet<A>, family: &SetFamily<A>) -> SetFamily<A> {
        self(original, family)
    }
}

fn fallback<A: Axiom>(original: &BeliefSet<A>) -> SetFamily<A> {
    [original.clone()].into_iter().collect()
}

/// Selects a single member, the first in iteration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectAny;

impl<A: Axiom> Selector<A> for SelectAny {
    fn select(&self, original: &BeliefSet<A>, family: &SetFamily<A>) -> SetFamily<A> {
        match family.first() {
            Some(member) => [member.clone()].into_iter().collect(),
            None => fallback(original),
        }
    }
}

/// Selects every member.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectFull;

impl<A: Axiom> Selector<A> for SelectFull {
    fn select(&self, original: &BeliefSet<A>, family: &SetFamily<A>) -> SetFamily<A> {
        if family.is_empty() {
            return fallback(original);
        }
        family.clone()
    }
}

/// Selects every member of minimum cardinality.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectSmallest;

impl<A: Axiom> Selector<A> for SelectSmallest {
    fn select(&self, original: &BeliefSet<A>, family: &SetFamily<A>) -> SetFamily<A> {
        let Some(smallest) = family.iter().map(BeliefSet::len).min() else {
            return fallback(original);
        };
        family
            .iter()
            .filter(|member| member.len() == smallest)
            .cloned()
            .collect()
    }
}

/// Built-in selection policies by name.
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
pub enum SelectionStrategy {
    #[default]
    Any,
    Full,
    Smallest,
}

impl<A: Axiom> Selector<A> for SelectionStrategy {
    fn select(&self, original: &BeliefSet<A>, family: &SetFamily<A>) -> SetFamily<A> {
        match self {
            SelectionStrategy::Any => SelectAny.select(original, family),
            SelectionStrategy::Full => SelectFull.select(original, family),
            SelectionStrategy::Smallest => SelectSmallest.select(original, family),
        }
    }
}
