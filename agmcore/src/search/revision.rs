use crate::{
    base::BeliefSet,
    oracle::{Oracle, Property},
    search::{ConfiguredSearch, KernelSearch, KernelSearchResult},
    utils::error::AgmResult,
};

/// Inconsistency kernels of a base revised by a new sentence.
///
/// Runs the wrapped search on `B ∪ {α}` with [`Property::IsInconsistent`]:
/// the kernel elements are the minimal inconsistent subsets of the extended
/// base. A consistent extension yields an empty kernel set.
#[derive(Debug, Clone, Default)]
pub struct RevisionKernelSearch<S = ConfiguredSearch> {
    inner: S,
}

impl<S: KernelSearch> RevisionKernelSearch<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Returns the extended base together with its inconsistency kernels.
    pub fn inconsistency_kernels<O: Oracle>(
        &self,
        oracle: &O,
        base: &BeliefSet<O::Axiom>,
        sentence: &O::Axiom,
    ) -> AgmResult<(BeliefSet<O::Axiom>, KernelSearchResult<O::Axiom>)> {
        let extended = base.with(sentence.clone());
        let result = self
            .inner
            .search(oracle, &extended, &Property::IsInconsistent)?;
        Ok((extended, result))
    }
}
