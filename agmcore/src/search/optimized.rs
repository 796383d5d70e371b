use std::{collections::BTreeSet, fmt};

use crate::{
    base::BeliefSet,
    blackbox::BlackBox,
    ext::observe::{ObserverRef, SearchEvent, default_observer},
    oracle::{Oracle, Property},
    search::{
        KernelSearch, KernelSearchResult, Root, SearchLimits, SearchState, SearchStrategy,
    },
    utils::error::AgmResult,
};

/// Depth-first hitting-set-tree search with kernel element reuse.
///
/// Before asking the oracle about a branch, the kernel elements found so far
/// are scanned for one disjoint from the hitting path. Such an element is still
/// a kernel element of the reduced set and labels the node without any oracle
/// call. Paths already visited, and supersets of a recorded cut, are skipped.
///
/// Produces the same kernel set as [`ClassicalSearch`](super::ClassicalSearch)
/// when unbounded, with at most as many oracle calls.
#[derive(Clone)]
pub struct OptimizedSearch {
    blackbox: BlackBox,
    limits: SearchLimits,
    observer: ObserverRef,
}

impl Default for OptimizedSearch {
    fn default() -> Self {
        Self::new(SearchLimits::UNBOUNDED)
    }
}

impl fmt::Debug for OptimizedSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptimizedSearch")
            .field("blackbox", &self.blackbox)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

impl OptimizedSearch {
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            blackbox: BlackBox::default(),
            limits,
            observer: default_observer(),
        }
    }

    pub fn with_blackbox(mut self, blackbox: BlackBox) -> Self {
        self.blackbox = blackbox;
        self
    }

    pub fn with_observer(mut self, observer: ObserverRef) -> Self {
        self.observer = observer;
        self
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }
}

impl KernelSearch for OptimizedSearch {
    fn search<O: Oracle>(
        &self,
        oracle: &O,
        base: &BeliefSet<O::Axiom>,
        property: &Property<O::Formula>,
    ) -> AgmResult<KernelSearchResult<O::Axiom>> {
        let mut state = SearchState::new(
            oracle,
            property,
            base,
            self.limits,
            SearchStrategy::Optimized,
            &self.observer,
        );

        let seed = match state.root(&self.blackbox)? {
            Root::Done => return Ok(state.finish()),
            Root::Seed(seed) => seed,
        };

        let mut frontier = Vec::new();
        let mut visited = BTreeSet::new();
        for axiom in seed.iter() {
            enqueue(&mut state, &mut frontier, &visited, BeliefSet::singleton(axiom.clone()));
        }

        while let Some(path) = frontier.pop() {
            if is_redundant(&state, &visited, &path) {
                continue;
            }
            visited.insert(path.clone());
            state.nodes += 1;

            let cached = state
                .kernel_set
                .iter()
                .find(|element| element.is_disjoint(&path))
                .cloned();

            let element = match cached {
                Some(element) => {
                    state.cache_hits += 1;
                    state.observer.on_event(&SearchEvent::KernelReused {
                        depth: path.len(),
                    });
                    element
                }
                None => {
                    let reduced = state.working.exclude(&path);
                    if !state.probe.holds(&reduced)? {
                        drop(reduced);
                        state.record_cut(path);
                        continue;
                    }
                    let element = self.blackbox.extract(&state.probe, &reduced)?;
                    drop(reduced);

                    if !state.record_kernel(element.clone(), path.len()) {
                        break;
                    }
                    element
                }
            };

            for axiom in element.iter() {
                enqueue(&mut state, &mut frontier, &visited, path.with(axiom.clone()));
            }
        }

        Ok(state.finish())
    }
}

/// Paths already visited, and supersets of a recorded cut, need no node.
fn is_redundant<O: Oracle>(
    state: &SearchState<'_, O>,
    visited: &BTreeSet<BeliefSet<O::Axiom>>,
    path: &BeliefSet<O::Axiom>,
) -> bool {
    visited.contains(path) || state.cut_set.iter().any(|cut| cut.is_subset(path))
}

/// Pushes `path` unless it is redundant or already pending. Only new paths
/// take frontier space.
fn enqueue<O: Oracle>(
    state: &mut SearchState<'_, O>,
    frontier: &mut Vec<BeliefSet<O::Axiom>>,
    visited: &BTreeSet<BeliefSet<O::Axiom>>,
    path: BeliefSet<O::Axiom>,
) {
    if is_redundant(state, visited, &path) || frontier.contains(&path) {
        return;
    }
    if state.admits(frontier.len(), path.len()) {
        frontier.push(path);
    }
}
