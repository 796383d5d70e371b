//! Selection (γ) and incision (σ) functions.
//!
//! Both are pure strategy values picked when an operation is built. Any
//! closure of the right shape also implements the corresponding trait.

mod incision;
mod selection;

pub use incision::{InciseAny, InciseGreedy, InciseUnion, IncisionStrategy, Incisor};
pub use selection::{SelectAny, SelectFull, SelectSmallest, SelectionStrategy, Selector};
