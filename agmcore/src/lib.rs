//! Kernel and remainder enumeration engine for belief change.
//!
//! The crate finds the minimal subsets of a belief base responsible for a
//! property (entailing a formula, or being inconsistent) and builds the
//! classical belief change operators on top of them. Reasoning is delegated
//! to an [`oracle::Oracle`]; the engine only manipulates sets of axioms.
//!
//! Most consumers build a search from [`utils::conf::AgmConfig`] and hand it
//! to one of the operators in [`operations`].

pub mod base;
pub mod blackbox;
pub mod closure;
pub mod ext;
pub mod functions;
pub mod magic;
pub mod operations;
pub mod oracle;
pub mod search;
#[cfg(any(test, feature = "test-utils"))]
pub mod tests_utils;
pub mod utils;
