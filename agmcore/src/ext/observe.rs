//! Injected observability hooks for searches and operations.
//!
//! Searches never log on their own: they report [`SearchEvent`]s to the
//! [`SearchObserver`] they were built with. [`LogObserver`] (the default)
//! forwards every event to the `log` facade under the `agmcore::search` target.
use std::sync::Arc;

use parking_lot::Mutex;
use strum::EnumIs;

use crate::{
    operations::Operation,
    search::{SearchRunInfo, SearchStatus, SearchStrategy},
};

/// Progress report emitted during a search or an operation.
#[derive(Debug, Clone, PartialEq, Eq, EnumIs)]
pub enum SearchEvent {
    Started {
        strategy: SearchStrategy,
        base_size: usize,
    },
    /// A new kernel element was added to the kernel set.
    KernelFound { size: usize, depth: usize, total: usize },
    /// A previously found kernel element disjoint from the path was reused.
    KernelReused { depth: usize },
    /// The hitting path removes every cause; recorded in the cut set.
    PathCut { depth: usize },
    /// The frontier was full and the path was dropped.
    PathDropped { depth: usize },
    KernelLimitReached { limit: usize },
    Finished {
        status: SearchStatus,
        kernels: usize,
        run_info: SearchRunInfo,
    },
    /// A belief change operation produced its result.
    OperationApplied {
        operation: Operation,
        removed: usize,
        result_size: usize,
    },
}

/// Receiver of [`SearchEvent`]s.
pub trait SearchObserver: Send + Sync {
    fn on_event(&self, event: &SearchEvent);
}

/// Shared handle to an observer.
pub type ObserverRef = Arc<dyn SearchObserver>;

/// Forwards events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn on_event(&self, event: &SearchEvent) {
        const TARGET: &str = "agmcore::search";
        match event {
            SearchEvent::Started {
                strategy,
                base_size,
            } => log::debug!(target: TARGET, "{strategy} search over {base_size} axioms"),
            SearchEvent::KernelFound { size, depth, total } => log::trace!(
                target: TARGET,
                "kernel element #{total} of size {size} at depth {depth}"
            ),
            SearchEvent::KernelReused { depth } => {
                log::trace!(target: TARGET, "reused cached kernel element at depth {depth}")
            }
            SearchEvent::PathCut { depth } => {
                log::trace!(target: TARGET, "closed hitting path at depth {depth}")
            }
            SearchEvent::PathDropped { depth } => {
                log::trace!(target: TARGET, "frontier full, dropped path at depth {depth}")
            }
            SearchEvent::KernelLimitReached { limit } => {
                log::debug!(target: TARGET, "kernel limit of {limit} reached")
            }
            SearchEvent::Finished {
                status,
                kernels,
                run_info,
            } => log::debug!(
                target: TARGET,
                "search finished ({status}): {kernels} kernel elements, {} oracle calls, {} nodes in {:?}",
                run_info.oracle_calls,
                run_info.nodes,
                run_info.elapsed
            ),
            SearchEvent::OperationApplied {
                operation,
                removed,
                result_size,
            } => log::info!(
                target: "agmcore::operations",
                "{operation}: removed {removed} axioms, {result_size} remain"
            ),
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_event(&self, _event: &SearchEvent) {}
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<SearchEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SearchEvent> {
        self.events.lock().clone()
    }

    pub fn count(&self, predicate: impl Fn(&SearchEvent) -> bool) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|&event| predicate(event))
            .count()
    }
}

impl SearchObserver for RecordingObserver {
    fn on_event(&self, event: &SearchEvent) {
        self.events.lock().push(event.clone());
    }
}

impl<T: SearchObserver + ?Sized> SearchObserver for Arc<T> {
    fn on_event(&self, event: &SearchEvent) {
        (**self).on_event(event)
    }
}

/// The default observer handle.
pub fn default_observer() -> ObserverRef {
    Arc::new(LogObserver)
}
