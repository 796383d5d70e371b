//! Belief sets, set families and the scoped working set used by searches.

mod belief;
mod family;
mod working;

pub use belief::{Axiom, BeliefSet};
pub use family::{CutSet, KernelElement, KernelSet, RemainderSet, SetFamily};
pub use working::{Exclusion, WorkingSet};
