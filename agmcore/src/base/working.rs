use std::ops::Deref;

use crate::base::belief::{Axiom, BeliefSet};

/// Mutable copy of a belief set shared by every node of one search.
///
/// Hitting paths are removed through [`WorkingSet::exclude`], which hands out
/// an [`Exclusion`] guard. The removed axioms are put back when the guard is
/// dropped, whether the node finished normally or an oracle error unwound it.
pub struct WorkingSet<A> {
    axioms: BeliefSet<A>,
}

impl<A: Axiom> WorkingSet<A> {
    pub fn new(axioms: BeliefSet<A>) -> Self {
        Self { axioms }
    }

    /// Temporarily removes every axiom of `path` present in the working set.
    pub fn exclude(&mut self, path: &BeliefSet<A>) -> Exclusion<'_, A> {
        let mut removed = Vec::with_capacity(path.len());
        for axiom in path.iter() {
            if self.axioms.remove(axiom) {
                removed.push(axiom.clone());
            }
        }
        Exclusion {
            working: self,
            removed,
        }
    }

    pub fn as_set(&self) -> &BeliefSet<A> {
        &self.axioms
    }

    pub fn into_inner(self) -> BeliefSet<A> {
        self.axioms
    }
}

/// Guard over a working set with a hitting path removed.
///
/// Dereferences to the reduced belief set.
pub struct Exclusion<'a, A: Axiom> {
    working: &'a mut WorkingSet<A>,
    removed: Vec<A>,
}

impl<'a, A: Axiom> Exclusion<'a, A> {
    /// Number of axioms actually removed from the working set.
    pub fn removed(&self) -> usize {
        self.removed.len()
    }
}

impl<'a, A: Axiom> Deref for Exclusion<'a, A> {
    type Target = BeliefSet<A>;

    fn deref(&self) -> &Self::Target {
        &self.working.axioms
    }
}

impl<'a, A: Axiom> Drop for Exclusion<'a, A> {
    fn drop(&mut self) {
        for axiom in self.removed.drain(..) {
            self.working.axioms.insert(axiom);
        }
    }
}
