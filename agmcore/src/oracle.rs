//! Boundary with the external reasoner.
//!
//! The engine treats every reasoner call as the dominant cost of an operation.
//! Searches never talk to an [`Oracle`] directly: they evaluate a [`Property`]
//! through a [`Probe`], which also counts the calls that reached the oracle.
//!
//! ## Contract
//! * Both [`Oracle::entails`] and [`Oracle::is_consistent`] must be pure
//!   functions of their inputs for the lifetime of a search. Searches rely on
//!   this to reuse earlier verdicts.
//! * A call that cannot produce a verdict returns [`AgmError::Oracle`]; the
//!   running operation is abandoned.
//!
//! [`AgmError::Oracle`]: crate::utils::error::AgmError::Oracle
use std::{cell::Cell, fmt};

use strum::{EnumIs, EnumTryAs};

use crate::{
    base::{Axiom, BeliefSet},
    utils::error::AgmResult,
};

/// Entailment and consistency service.
pub trait Oracle {
    /// Unit of the belief bases handed to the oracle.
    type Axiom: Axiom;

    /// Target of entailment checks.
    type Formula: Clone + fmt::Debug;

    /// Whether `base` entails `formula`.
    fn entails(&self, base: &BeliefSet<Self::Axiom>, formula: &Self::Formula) -> AgmResult<bool>;

    /// Whether `base` is consistent.
    fn is_consistent(&self, base: &BeliefSet<Self::Axiom>) -> AgmResult<bool>;
}

impl<O: Oracle + ?Sized> Oracle for &O {
    type Axiom = O::Axiom;
    type Formula = O::Formula;

    fn entails(&self, base: &BeliefSet<Self::Axiom>, formula: &Self::Formula) -> AgmResult<bool> {
        (**self).entails(base, formula)
    }

    fn is_consistent(&self, base: &BeliefSet<Self::Axiom>) -> AgmResult<bool> {
        (**self).is_consistent(base)
    }
}

/// The flip condition a search hunts minimal causes for.
#[derive(Debug, Clone, PartialEq, Eq, EnumIs, EnumTryAs)]
pub enum Property<F> {
    /// The set entails the formula.
    EntailsFormula(F),
    /// The set is inconsistent.
    IsInconsistent,
}

/// An oracle bound to a property.
///
/// `P(∅)` is false for both properties and is answered without calling the
/// oracle.
pub struct Probe<'o, O: Oracle> {
    oracle: &'o O,
    property: &'o Property<O::Formula>,
    calls: Cell<usize>,
}

impl<'o, O: Oracle> Probe<'o, O> {
    pub fn new(oracle: &'o O, property: &'o Property<O::Formula>) -> Self {
        Self {
            oracle,
            property,
            calls: Cell::new(0),
        }
    }

    /// Evaluates the property on `set`.
    pub fn holds(&self, set: &BeliefSet<O::Axiom>) -> AgmResult<bool> {
        if set.is_empty() {
            return Ok(false);
        }

        self.calls.set(self.calls.get() + 1);
        match self.property {
            Property::EntailsFormula(formula) => self.oracle.entails(set, formula),
            Property::IsInconsistent => self.oracle.is_consistent(set).map(|ok| !ok),
        }
    }

    pub fn property(&self) -> &Property<O::Formula> {
        self.property
    }

    /// Number of calls that reached the oracle so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}
