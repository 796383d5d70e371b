use std::{
    collections::{BTreeSet, btree_set},
    fmt,
};

/// Atomic unit of a belief base.
///
/// The engine never looks inside an axiom: only equality and the total order
/// (which fixes the iteration order of every set) are used.
pub trait Axiom: Clone + Ord + fmt::Debug {}
impl<T: Clone + Ord + fmt::Debug> Axiom for T {}

/// A finite, duplicate-free set of axioms.
///
/// Iteration follows the axiom order, so every algorithm that walks a belief
/// set does so in a fixed order for a given content.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BeliefSet<A> {
    axioms: BTreeSet<A>,
}

impl<A> Default for BeliefSet<A> {
    fn default() -> Self {
        Self {
            axioms: BTreeSet::new(),
        }
    }
}

impl<A: Axiom> BeliefSet<A> {
    /// Creates a new, empty [`BeliefSet`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a belief set holding a single axiom.
    pub fn singleton(axiom: A) -> Self {
        let mut set = Self::new();
        set.insert(axiom);
        set
    }

    pub fn len(&self) -> usize {
        self.axioms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }

    pub fn contains(&self, axiom: &A) -> bool {
        self.axioms.contains(axiom)
    }

    /// Inserts an axiom, returning `true` if it was not already present.
    pub fn insert(&mut self, axiom: A) -> bool {
        self.axioms.insert(axiom)
    }

    /// Removes an axiom, returning `true` if it was present.
    pub fn remove(&mut self, axiom: &A) -> bool {
        self.axioms.remove(axiom)
    }

    /// Adds every axiom of `other` to this set.
    pub fn extend_from(&mut self, other: &BeliefSet<A>) {
        self.axioms.extend(other.axioms.iter().cloned());
    }

    /// Removes every axiom of `other` from this set.
    pub fn subtract(&mut self, other: &BeliefSet<A>) {
        for axiom in other.iter() {
            self.axioms.remove(axiom);
        }
    }

    /// Keeps only the axioms matching the predicate.
    pub fn retain(&mut self, f: impl FnMut(&A) -> bool) {
        self.axioms.retain(f);
    }

    pub fn iter(&self) -> btree_set::Iter<'_, A> {
        self.axioms.iter()
    }

    /// Returns `self ∪ {axiom}` without modifying `self`.
    pub fn with(&self, axiom: A) -> Self {
        let mut set = self.clone();
        set.insert(axiom);
        set
    }

    pub fn union(&self, other: &BeliefSet<A>) -> Self {
        self.axioms.union(&other.axioms).cloned().collect()
    }

    pub fn intersection(&self, other: &BeliefSet<A>) -> Self {
        self.axioms.intersection(&other.axioms).cloned().collect()
    }

    pub fn difference(&self, other: &BeliefSet<A>) -> Self {
        self.axioms.difference(&other.axioms).cloned().collect()
    }

    pub fn is_disjoint(&self, other: &BeliefSet<A>) -> bool {
        self.axioms.is_disjoint(&other.axioms)
    }

    pub fn is_subset(&self, other: &BeliefSet<A>) -> bool {
        self.axioms.is_subset(&other.axioms)
    }

    pub fn is_superset(&self, other: &BeliefSet<A>) -> bool {
        self.axioms.is_superset(&other.axioms)
    }

    /// Whether this set shares at least one axiom with `other`.
    pub fn intersects(&self, other: &BeliefSet<A>) -> bool {
        !self.is_disjoint(other)
    }
}

impl<A: Axiom> FromIterator<A> for BeliefSet<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self {
            axioms: iter.into_iter().collect(),
        }
    }
}

impl<A: Axiom> Extend<A> for BeliefSet<A> {
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        self.axioms.extend(iter);
    }
}

impl<A> IntoIterator for BeliefSet<A> {
    type Item = A;
    type IntoIter = btree_set::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.axioms.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a BeliefSet<A> {
    type Item = &'a A;
    type IntoIter = btree_set::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.axioms.iter()
    }
}

impl<A: Axiom, const N: usize> From<[A; N]> for BeliefSet<A> {
    fn from(axioms: [A; N]) -> Self {
        axioms.into_iter().collect()
    }
}

impl<A: fmt::Debug> fmt::Debug for BeliefSet<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.axioms.iter()).finish()
    }
}

impl<A: fmt::Display> fmt::Display for BeliefSet<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, axiom) in self.axioms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{axiom}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_algebra() {
        let ab = BeliefSet::from(["a", "b"]);
        let bc = BeliefSet::from(["b", "c"]);

        assert_eq!(ab.union(&bc), BeliefSet::from(["a", "b", "c"]));
        assert_eq!(ab.intersection(&bc), BeliefSet::from(["b"]));
        assert_eq!(ab.difference(&bc), BeliefSet::from(["a"]));
        assert!(ab.intersects(&bc));
        assert!(ab.is_disjoint(&BeliefSet::from(["c"])));
        assert!(BeliefSet::from(["a"]).is_subset(&ab));
    }

    #[test]
    fn bulk_mutation() {
        let mut set = BeliefSet::from(["a", "b", "c"]);
        set.subtract(&BeliefSet::from(["a", "z"]));
        assert_eq!(set, BeliefSet::from(["b", "c"]));

        set.extend_from(&BeliefSet::from(["a"]));
        assert_eq!(set.len(), 3);
        assert!(!set.insert("a"));
    }

    #[test]
    fn display_is_ordered() {
        let set = BeliefSet::from(["c", "a", "b"]);
        assert_eq!(set.to_string(), "{a, b, c}");
        assert_eq!(BeliefSet::<&str>::new().to_string(), "{}");
    }
}
