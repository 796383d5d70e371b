use std::{
    collections::{BTreeSet, btree_set},
    fmt,
};

use crate::base::belief::{Axiom, BeliefSet};

/// A set of belief sets compared by content.
///
/// Two members holding the same axioms are the same member. The family is
/// used for kernel sets, cut sets and remainder sets alike, see the aliases
/// below.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SetFamily<A> {
    sets: BTreeSet<BeliefSet<A>>,
}

/// A minimal subset of a belief set responsible for a property.
pub type KernelElement<A> = BeliefSet<A>;

/// The kernel elements found by a search.
pub type KernelSet<A> = SetFamily<A>;

/// Hitting paths whose removal made the property fail.
pub type CutSet<A> = SetFamily<A>;

/// Maximal subsets of a belief set that do not satisfy a property.
pub type RemainderSet<A> = SetFamily<A>;

impl<A> Default for SetFamily<A> {
    fn default() -> Self {
        Self {
            sets: BTreeSet::new(),
        }
    }
}

impl<A: Axiom> SetFamily<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn contains(&self, set: &BeliefSet<A>) -> bool {
        self.sets.contains(set)
    }

    /// Inserts a member, returning `true` if no member with the same content existed.
    pub fn insert(&mut self, set: BeliefSet<A>) -> bool {
        self.sets.insert(set)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, BeliefSet<A>> {
        self.sets.iter()
    }

    /// First member in the family order, if any.
    pub fn first(&self) -> Option<&BeliefSet<A>> {
        self.sets.first()
    }

    /// Union of every member.
    pub fn union(&self) -> BeliefSet<A> {
        let mut union = BeliefSet::new();
        for set in self.sets.iter() {
            union.extend_from(set);
        }
        union
    }

    /// Intersection of every member, `None` for an empty family.
    pub fn intersection(&self) -> Option<BeliefSet<A>> {
        let mut iter = self.sets.iter();
        let mut meet = iter.next()?.clone();
        for set in iter {
            meet.retain(|axiom| set.contains(axiom));
        }
        Some(meet)
    }

    /// Members that have no proper subset in the family.
    pub fn minimal(&self) -> SetFamily<A> {
        self.sets
            .iter()
            .filter(|candidate| {
                !self
                    .sets
                    .iter()
                    .any(|other| other != *candidate && other.is_subset(candidate))
            })
            .cloned()
            .collect()
    }

    /// Whether no member is a proper subset of another member.
    pub fn is_antichain(&self) -> bool {
        self.minimal().len() == self.len()
    }

    /// Whether `set` shares at least one axiom with every non-empty member.
    pub fn is_hit_by(&self, set: &BeliefSet<A>) -> bool {
        self.sets
            .iter()
            .filter(|member| !member.is_empty())
            .all(|member| member.intersects(set))
    }

    /// Whether every member of this family is also a member of `other`.
    pub fn is_subfamily(&self, other: &SetFamily<A>) -> bool {
        self.sets.is_subset(&other.sets)
    }
}

impl<A: Axiom> FromIterator<BeliefSet<A>> for SetFamily<A> {
    fn from_iter<I: IntoIterator<Item = BeliefSet<A>>>(iter: I) -> Self {
        Self {
            sets: iter.into_iter().collect(),
        }
    }
}

impl<A> IntoIterator for SetFamily<A> {
    type Item = BeliefSet<A>;
    type IntoIter = btree_set::IntoIter<BeliefSet<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a SetFamily<A> {
    type Item = &'a BeliefSet<A>;
    type IntoIter = btree_set::Iter<'a, BeliefSet<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}

impl<A: fmt::Debug> fmt::Debug for SetFamily<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.sets.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family(sets: &[&[&'static str]]) -> SetFamily<&'static str> {
        sets.iter()
            .map(|set| set.iter().copied().collect())
            .collect()
    }

    #[test]
    fn structural_equality() {
        let mut kernels = family(&[&["a", "b"]]);
        assert!(!kernels.insert(BeliefSet::from(["b", "a"])));
        assert_eq!(kernels.len(), 1);
    }

    #[test]
    fn union_and_intersection() {
        let kernels = family(&[&["a", "b"], &["b", "c"]]);
        assert_eq!(kernels.union(), BeliefSet::from(["a", "b", "c"]));
        assert_eq!(kernels.intersection(), Some(BeliefSet::from(["b"])));
        assert_eq!(SetFamily::<&str>::new().intersection(), None);
    }

    #[test]
    fn minimal_members() {
        let cut = family(&[&["a"], &["a", "b"], &["b", "c"], &["c"]]);
        assert_eq!(cut.minimal(), family(&[&["a"], &["c"]]));
        assert!(!cut.is_antichain());
        assert!(cut.minimal().is_antichain());
    }

    #[test]
    fn hitting() {
        let kernels = family(&[&["a", "b"], &["c"]]);
        assert!(kernels.is_hit_by(&BeliefSet::from(["b", "c"])));
        assert!(!kernels.is_hit_by(&BeliefSet::from(["a", "b"])));
    }
}
