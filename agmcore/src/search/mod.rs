//! Kernel set enumeration.
//!
//! Every search follows Reiter's hitting-set-tree construction generalised to
//! an arbitrary flip [`Property`]:
//! 1. the root is labelled with one kernel element extracted by the BlackBox;
//! 2. each axiom of a node label opens a branch whose hitting path is the path
//!    of the parent plus that axiom;
//! 3. a branch whose reduced set (the base minus its hitting path) still
//!    satisfies the property is labelled with a kernel element of the reduced
//!    set; otherwise the hitting path is recorded in the cut set.
//!
//! ## Variants
//! * [`ClassicalSearch`] – FIFO frontier, every branch recomputed.
//! * [`OptimizedSearch`] – LIFO frontier, reuses cached kernel elements disjoint
//!   from the hitting path and skips duplicate or already-cut paths.
//! * [`RevisionKernelSearch`] – inconsistency kernels of a base extended with a
//!   new sentence, driven by either variant.
//!
//! ## Bounds
//! [`SearchLimits`] caps the frontier size and the number of kernel elements.
//! A bounded search never fails because of a bound: it returns the kernel
//! elements found so far and reports [`SearchStatus::Truncated`].
use std::{fmt, time::Duration, time::Instant};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIs, EnumIter, EnumString};

use crate::{
    base::{BeliefSet, CutSet, KernelElement, KernelSet, RemainderSet, WorkingSet},
    blackbox::{BlackBox, ExpansionStrategy, LinearShrinker},
    ext::observe::{ObserverRef, SearchEvent},
    functions::{InciseGreedy, Incisor},
    oracle::{Oracle, Probe, Property},
    utils::error::AgmResult,
};

mod classical;
mod optimized;
mod revision;

pub use classical::ClassicalSearch;
pub use optimized::OptimizedSearch;
pub use revision::RevisionKernelSearch;

/// Resource bounds of one search. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Maximum number of pending hitting paths. Paths beyond it are dropped.
    pub max_queue_size: Option<usize>,
    /// Maximum number of kernel elements. The search stops once reached.
    pub max_kernel_elements: Option<usize>,
}

impl SearchLimits {
    pub const UNBOUNDED: SearchLimits = SearchLimits {
        max_queue_size: None,
        max_kernel_elements: None,
    };

    pub fn with_queue_size(mut self, max: usize) -> Self {
        self.max_queue_size = Some(max);
        self
    }

    pub fn with_kernel_elements(mut self, max: usize) -> Self {
        self.max_kernel_elements = Some(max);
        self
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_queue_size.is_none() && self.max_kernel_elements.is_none()
    }
}

/// Whether a search explored the whole hitting-set tree.
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumIs)]
pub enum SearchStatus {
    Complete,
    /// A bound cut the search short: the kernel set holds *at least* these
    /// elements, possibly more.
    Truncated {
        /// Hitting paths discarded because the frontier was full.
        dropped_paths: usize,
        /// The kernel element limit was reached. Set as soon as the kernel set
        /// reaches the limit, even if no further element existed.
        kernel_limit_hit: bool,
    },
}

/// Snapshot metrics about a search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRunInfo {
    /// Calls that reached the oracle.
    pub oracle_calls: usize,
    /// Hitting-set-tree nodes processed, root included.
    pub nodes: usize,
    /// Kernel elements reused from the cache instead of being recomputed.
    pub cache_hits: usize,
    pub elapsed: Duration,
}

/// Output of a kernel search.
#[derive(Debug, Clone)]
pub struct KernelSearchResult<A> {
    pub kernel_set: KernelSet<A>,
    /// Hitting paths whose removal leaves no kernel element.
    pub cut_set: CutSet<A>,
    pub status: SearchStatus,
    pub run_info: SearchRunInfo,
}

impl<A: crate::base::Axiom> KernelSearchResult<A> {
    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }

    /// Minimal hitting sets of the kernel set.
    ///
    /// `{∅}` when the kernel set is empty: nothing has to be removed. Only
    /// exhaustive for a complete search.
    pub fn diagnoses(&self) -> CutSet<A> {
        if self.kernel_set.is_empty() {
            return [BeliefSet::new()].into_iter().collect();
        }
        self.cut_set.minimal()
    }

    /// Remainder set of `base`: the maximal subsets of `base` that do not
    /// satisfy the property, one per diagnosis.
    ///
    /// `base` must be the set the search ran on.
    pub fn remainders(&self, base: &BeliefSet<A>) -> RemainderSet<A> {
        remainders_of(base, &self.diagnoses())
    }

    /// Diagnoses a meet can rely on, even after truncation.
    ///
    /// Every recorded cut already breaks the property. A truncated search may
    /// stop before recording any cut; one diagnosis is then completed from the
    /// kernel elements found so far against the oracle.
    pub fn checked_diagnoses<O>(
        &self,
        oracle: &O,
        base: &BeliefSet<A>,
        property: &Property<O::Formula>,
    ) -> AgmResult<CutSet<A>>
    where
        O: Oracle<Axiom = A>,
    {
        if self.is_complete() || !self.cut_set.is_empty() {
            return Ok(self.diagnoses());
        }

        let probe = Probe::new(oracle, property);
        let diagnosis = complete_diagnosis(&probe, base, &self.kernel_set)?;
        log::debug!(
            target: "agmcore::search",
            "completed a diagnosis of {} axioms after truncation ({} oracle calls)",
            diagnosis.len(),
            probe.calls()
        );
        Ok([diagnosis].into_iter().collect())
    }

    /// Remainders of `base` built from [`checked_diagnoses`](Self::checked_diagnoses).
    pub fn checked_remainders<O>(
        &self,
        oracle: &O,
        base: &BeliefSet<A>,
        property: &Property<O::Formula>,
    ) -> AgmResult<RemainderSet<A>>
    where
        O: Oracle<Axiom = A>,
    {
        let diagnoses = self.checked_diagnoses(oracle, base, property)?;
        Ok(remainders_of(base, &diagnoses))
    }
}

fn remainders_of<A: crate::base::Axiom>(
    base: &BeliefSet<A>,
    diagnoses: &CutSet<A>,
) -> RemainderSet<A> {
    diagnoses
        .iter()
        .map(|diagnosis| base.difference(diagnosis))
        .collect()
}

/// A minimal diagnosis of `base` hitting every kernel element.
///
/// Starts from a greedy hitting set of `kernel_set`, adds one axiom of every
/// kernel element still left in the reduced set, then puts back each axiom
/// whose removal is not needed.
fn complete_diagnosis<O: Oracle>(
    probe: &Probe<'_, O>,
    base: &BeliefSet<O::Axiom>,
    kernel_set: &KernelSet<O::Axiom>,
) -> AgmResult<BeliefSet<O::Axiom>> {
    let blackbox = BlackBox::<ExpansionStrategy, LinearShrinker>::default();
    let mut diagnosis = InciseGreedy.incise(base, kernel_set);

    loop {
        let element = blackbox.extract(probe, &base.difference(&diagnosis))?;
        let Some(axiom) = element.iter().next() else {
            break;
        };
        diagnosis.insert(axiom.clone());
    }

    let candidates = diagnosis.clone();
    for axiom in candidates.iter() {
        diagnosis.remove(axiom);
        if probe.holds(&base.difference(&diagnosis))? {
            diagnosis.insert(axiom.clone());
        }
    }

    Ok(diagnosis)
}

/// Enumerates the kernel set of a base with respect to a property.
pub trait KernelSearch {
    fn search<O: Oracle>(
        &self,
        oracle: &O,
        base: &BeliefSet<O::Axiom>,
        property: &Property<O::Formula>,
    ) -> AgmResult<KernelSearchResult<O::Axiom>>;
}

/// Search variant picked at construction time, e.g. from configuration.
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
pub enum SearchStrategy {
    #[default]
    Classical,
    Optimized,
}

impl SearchStrategy {
    pub fn build(
        self,
        limits: SearchLimits,
        expansion: ExpansionStrategy,
        observer: ObserverRef,
    ) -> ConfiguredSearch {
        let blackbox = BlackBox::new(expansion, LinearShrinker);
        match self {
            SearchStrategy::Classical => ConfiguredSearch::Classical(
                ClassicalSearch::new(limits)
                    .with_blackbox(blackbox)
                    .with_observer(observer),
            ),
            SearchStrategy::Optimized => ConfiguredSearch::Optimized(
                OptimizedSearch::new(limits)
                    .with_blackbox(blackbox)
                    .with_observer(observer),
            ),
        }
    }
}

/// Either search variant behind one type.
#[derive(Clone)]
pub enum ConfiguredSearch {
    Classical(ClassicalSearch),
    Optimized(OptimizedSearch),
}

impl Default for ConfiguredSearch {
    fn default() -> Self {
        ConfiguredSearch::Classical(ClassicalSearch::default())
    }
}

impl fmt::Debug for ConfiguredSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfiguredSearch::Classical(search) => search.fmt(f),
            ConfiguredSearch::Optimized(search) => search.fmt(f),
        }
    }
}

impl KernelSearch for ConfiguredSearch {
    fn search<O: Oracle>(
        &self,
        oracle: &O,
        base: &BeliefSet<O::Axiom>,
        property: &Property<O::Formula>,
    ) -> AgmResult<KernelSearchResult<O::Axiom>> {
        match self {
            ConfiguredSearch::Classical(search) => search.search(oracle, base, property),
            ConfiguredSearch::Optimized(search) => search.search(oracle, base, property),
        }
    }
}

impl<S: KernelSearch> KernelSearch for &S {
    fn search<O: Oracle>(
        &self,
        oracle: &O,
        base: &BeliefSet<O::Axiom>,
        property: &Property<O::Formula>,
    ) -> AgmResult<KernelSearchResult<O::Axiom>> {
        (**self).search(oracle, base, property)
    }
}

/// Bookkeeping shared by both search variants for the duration of one call.
struct SearchState<'o, O: Oracle> {
    probe: Probe<'o, O>,
    working: WorkingSet<O::Axiom>,
    kernel_set: KernelSet<O::Axiom>,
    cut_set: CutSet<O::Axiom>,
    limits: SearchLimits,
    observer: &'o ObserverRef,
    dropped_paths: usize,
    kernel_limit_hit: bool,
    nodes: usize,
    cache_hits: usize,
    started: Instant,
}

/// What to do once the root has been examined.
enum Root<A> {
    /// Nothing left to explore.
    Done,
    /// Expand the tree from this seed element.
    Seed(KernelElement<A>),
}

impl<'o, O: Oracle> SearchState<'o, O> {
    fn new(
        oracle: &'o O,
        property: &'o Property<O::Formula>,
        base: &BeliefSet<O::Axiom>,
        limits: SearchLimits,
        strategy: SearchStrategy,
        observer: &'o ObserverRef,
    ) -> Self {
        observer.on_event(&SearchEvent::Started {
            strategy,
            base_size: base.len(),
        });
        Self {
            probe: Probe::new(oracle, property),
            working: WorkingSet::new(base.clone()),
            kernel_set: KernelSet::new(),
            cut_set: CutSet::new(),
            limits,
            observer,
            dropped_paths: 0,
            kernel_limit_hit: false,
            nodes: 0,
            cache_hits: 0,
            started: Instant::now(),
        }
    }

    /// Examines the root: returns the seed element, or `Done` when the base
    /// does not satisfy the property or no kernel element may be kept.
    fn root<E, S>(&mut self, blackbox: &BlackBox<E, S>) -> AgmResult<Root<O::Axiom>>
    where
        E: crate::blackbox::Expander,
        S: crate::blackbox::Shrinker,
    {
        self.nodes += 1;
        if !self.probe.holds(self.working.as_set())? {
            return Ok(Root::Done);
        }

        if let Some(limit @ 0) = self.limits.max_kernel_elements {
            self.kernel_limit_hit = true;
            self.observer
                .on_event(&SearchEvent::KernelLimitReached { limit });
            return Ok(Root::Done);
        }

        let seed = blackbox.extract(&self.probe, self.working.as_set())?;
        if self.record_kernel(seed.clone(), 0) {
            Ok(Root::Seed(seed))
        } else {
            Ok(Root::Done)
        }
    }

    /// Adds a kernel element. Returns `false` once the kernel limit is reached.
    fn record_kernel(&mut self, element: KernelElement<O::Axiom>, depth: usize) -> bool {
        let size = element.len();
        if self.kernel_set.insert(element) {
            self.observer.on_event(&SearchEvent::KernelFound {
                size,
                depth,
                total: self.kernel_set.len(),
            });
        }

        match self.limits.max_kernel_elements {
            Some(limit) if self.kernel_set.len() >= limit => {
                self.kernel_limit_hit = true;
                self.observer
                    .on_event(&SearchEvent::KernelLimitReached { limit });
                false
            }
            _ => true,
        }
    }

    fn record_cut(&mut self, path: BeliefSet<O::Axiom>) {
        self.observer
            .on_event(&SearchEvent::PathCut { depth: path.len() });
        self.cut_set.insert(path);
    }

    /// Whether a frontier of `pending` paths may take one more.
    fn admits(&mut self, pending: usize, depth: usize) -> bool {
        match self.limits.max_queue_size {
            Some(max) if pending >= max => {
                self.dropped_paths += 1;
                self.observer.on_event(&SearchEvent::PathDropped { depth });
                false
            }
            _ => true,
        }
    }

    fn finish(self) -> KernelSearchResult<O::Axiom> {
        let status = if self.dropped_paths == 0 && !self.kernel_limit_hit {
            SearchStatus::Complete
        } else {
            SearchStatus::Truncated {
                dropped_paths: self.dropped_paths,
                kernel_limit_hit: self.kernel_limit_hit,
            }
        };
        let run_info = SearchRunInfo {
            oracle_calls: self.probe.calls(),
            nodes: self.nodes,
            cache_hits: self.cache_hits,
            elapsed: self.started.elapsed(),
        };

        self.observer.on_event(&SearchEvent::Finished {
            status: status.clone(),
            kernels: self.kernel_set.len(),
            run_info: run_info.clone(),
        });

        KernelSearchResult {
            kernel_set: self.kernel_set,
            cut_set: self.cut_set,
            status,
            run_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{ext::observe::NoopObserver, tests_utils::SubsetOracle};

    fn family(sets: &[&[&'static str]]) -> KernelSet<&'static str> {
        sets.iter()
            .map(|set| set.iter().copied().collect())
            .collect()
    }

    #[test]
    fn diagnoses_of_empty_kernel_set() {
        let result = KernelSearchResult::<&str> {
            kernel_set: KernelSet::new(),
            cut_set: CutSet::new(),
            status: SearchStatus::Complete,
            run_info: SearchRunInfo::default(),
        };
        let base = BeliefSet::from(["a", "b"]);

        assert_eq!(result.diagnoses(), family(&[&[]]));
        assert_eq!(result.remainders(&base), family(&[&["a", "b"]]));
    }

    #[test]
    fn remainders_from_minimal_cuts() {
        let result = KernelSearchResult {
            kernel_set: family(&[&["a", "b"], &["a", "c"]]),
            cut_set: family(&[&["a"], &["b", "c"], &["a", "c"]]),
            status: SearchStatus::Complete,
            run_info: SearchRunInfo::default(),
        };
        let base = BeliefSet::from(["a", "b", "c", "d"]);

        assert_eq!(result.diagnoses(), family(&[&["a"], &["b", "c"]]));
        assert_eq!(
            result.remainders(&base),
            family(&[&["b", "c", "d"], &["a", "d"]])
        );
    }

    #[test]
    fn truncated_search_still_yields_a_diagnosis() {
        let oracle = SubsetOracle::new();
        let formula = SubsetOracle::trigger(&[&["a", "b"], &["c", "d"]]);
        let property = Property::EntailsFormula(formula.clone());
        let base = BeliefSet::from(["a", "b", "c", "d", "e"]);

        for strategy in [SearchStrategy::Classical, SearchStrategy::Optimized] {
            let search = strategy.build(
                SearchLimits::UNBOUNDED.with_kernel_elements(1),
                ExpansionStrategy::default(),
                Arc::new(NoopObserver),
            );
            let result = search.search(&oracle, &base, &property).unwrap();
            assert!(result.status.is_truncated());
            assert!(result.cut_set.is_empty());
            assert!(result.diagnoses().is_empty());

            let diagnoses = result.checked_diagnoses(&oracle, &base, &property).unwrap();
            assert_eq!(diagnoses, family(&[&["a", "c"]]));
            let remainders = result.checked_remainders(&oracle, &base, &property).unwrap();
            assert_eq!(remainders, family(&[&["b", "d", "e"]]));
            assert!(!oracle.entails(&BeliefSet::from(["b", "d", "e"]), &formula).unwrap());
        }
    }

    #[test]
    fn checked_diagnoses_without_any_kernel() {
        let oracle = SubsetOracle::new();
        let property = Property::EntailsFormula(SubsetOracle::trigger(&[&["a"]]));
        let base = BeliefSet::from(["a", "b"]);

        let result = SearchStrategy::Classical
            .build(
                SearchLimits::UNBOUNDED.with_kernel_elements(0),
                ExpansionStrategy::default(),
                Arc::new(NoopObserver),
            )
            .search(&oracle, &base, &property)
            .unwrap();
        assert!(result.kernel_set.is_empty());
        assert_eq!(
            result.checked_diagnoses(&oracle, &base, &property).unwrap(),
            family(&[&["a"]])
        );
    }

    #[test]
    fn both_strategies_agree_on_scenario() {
        let oracle = SubsetOracle::new();
        let property = Property::EntailsFormula(SubsetOracle::trigger(&[&["a", "b"]]));
        let base = BeliefSet::from(["a", "b", "c"]);

        for strategy in [SearchStrategy::Classical, SearchStrategy::Optimized] {
            let search = strategy.build(
                SearchLimits::UNBOUNDED,
                ExpansionStrategy::default(),
                Arc::new(NoopObserver),
            );
            let result = search.search(&oracle, &base, &property).unwrap();
            assert!(result.is_complete());
            assert_eq!(result.kernel_set, family(&[&["a", "b"]]));
            assert_eq!(result.diagnoses(), family(&[&["a"], &["b"]]));
        }
    }
}
