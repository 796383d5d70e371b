//! Agmprop: propositional logic for the `agmcore` belief change engine.
//!
//! The crate supplies everything an operation needs besides the engine:
//! formulas usable as axioms, a parser for them, a truth-table [`Oracle`],
//! a finite consequence operator and TOML belief documents.
//!
//! Example
//! ```
//! use agmcore::{base::BeliefSet, functions::IncisionStrategy, operations::KernelContractor};
//! use agmcore::search::ConfiguredSearch;
//! use agmprop::prelude::*;
//!
//! let base: BeliefSet<Formula> = ["rain -> wet", "rain"]
//!     .iter()
//!     .map(|src| src.parse().unwrap())
//!     .collect();
//! let wet: Formula = "wet".parse().unwrap();
//!
//! let outcome = KernelContractor::new(ConfiguredSearch::default(), IncisionStrategy::Union)
//!     .contract(&TruthTableOracle::new(), &base, &wet)
//!     .unwrap();
//! assert!(outcome.result.is_empty());
//! ```
//!
//! [`Oracle`]: agmcore::oracle::Oracle

/// Finite consequence operators.
pub mod closure;
/// TOML belief documents.
pub mod document;
pub mod error;
/// Formula tree, printing and evaluation.
pub mod formula;
/// Truth-table reasoner.
pub mod oracle;
/// Parser for the printed formula syntax.
pub mod parser;

pub mod prelude {
    //! Convenient re-exports for end users.
    pub use crate::closure::{Generator, SignatureClosure};
    pub use crate::document::{BeliefDocument, load_belief_set, save_belief_set};
    pub use crate::error::{PropError, PropResult};
    pub use crate::formula::Formula;
    pub use crate::oracle::TruthTableOracle;
    pub use crate::parser::parse;
}
