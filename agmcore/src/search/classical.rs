use std::{collections::VecDeque, fmt};

use crate::{
    base::BeliefSet,
    blackbox::BlackBox,
    ext::observe::{ObserverRef, default_observer},
    oracle::{Oracle, Property},
    search::{
        KernelSearch, KernelSearchResult, Root, SearchLimits, SearchState, SearchStrategy,
    },
    utils::error::AgmResult,
};

/// Breadth-first hitting-set-tree search.
///
/// Every branch whose reduced set still satisfies the property gets a freshly
/// extracted kernel element. No result is reused across branches.
#[derive(Clone)]
pub struct ClassicalSearch {
    blackbox: BlackBox,
    limits: SearchLimits,
    observer: ObserverRef,
}

impl Default for ClassicalSearch {
    fn default() -> Self {
        Self::new(SearchLimits::UNBOUNDED)
    }
}

impl fmt::Debug for ClassicalSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassicalSearch")
            .field("blackbox", &self.blackbox)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}

impl ClassicalSearch {
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

impl KernelSearch for ClassicalSearch {
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
            SearchStrategy::Classical,
            &self.observer,
        );

        let seed = match state.root(&self.blackbox)? {
            Root::Done => return Ok(state.finish()),
            Root::Seed(seed) => seed,
        };

        let mut frontier = VecDeque::new();
        for axiom in seed.iter() {
            if state.admits(frontier.len(), 1) {
                frontier.push_back(BeliefSet::singleton(axiom.clone()));
            }
        }

        while let Some(path) = frontier.pop_front() {
            state.nodes += 1;

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
            for axiom in element.iter() {
                if state.admits(frontier.len(), path.len() + 1) {
                    frontier.push_back(path.with(axiom.clone()));
                }
            }
        }

        Ok(state.finish())
    }
}
