//! Consequence operators.
//!
//! Operations first close the input base under a consequence operator `Cn`,
//! search the closed set, then apply the outcome to the original base. The
//! operator is external: the engine only checks that it behaved.
use crate::{
    base::{Axiom, BeliefSet},
    utils::error::{AgmError, AgmResult},
};

/// A (finite fragment of a) consequence operator.
///
/// Implementations must be extensive: every asserted axiom is part of the
/// closure.
pub trait ConsequenceOperator<A: Axiom> {
    fn close(&self, base: &BeliefSet<A>) -> AgmResult<BeliefSet<A>>;
}

impl<A, F> ConsequenceOperator<A> for F
where
    A: Axiom,
    F: Fn(&BeliefSet<A>) -> AgmResult<BeliefSet<A>>,
{
    fn close(&self, base: &BeliefSet<A>) -> AgmResult<BeliefSet<A>> {
        self(base)
    }
}

/// The identity: works on the asserted axioms only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClosure;

impl<A: Axiom> ConsequenceOperator<A> for NoClosure {
    fn close(&self, base: &BeliefSet<A>) -> AgmResult<BeliefSet<A>> {
        Ok(base.clone())
    }
}

/// Closes `base` and validates the result.
///
/// Fails with [`AgmError::EmptyClosure`] when a non-empty base closes to the
/// empty set, and with [`AgmError::Precondition`] when asserted axioms are
/// missing from the closure.
pub fn close_checked<A: Axiom>(
    operator: &impl ConsequenceOperator<A>,
    base: &BeliefSet<A>,
) -> AgmResult<BeliefSet<A>> {
    let closed = operator.close(base)?;
    if closed.is_empty() && !base.is_empty() {
        return Err(AgmError::EmptyClosure);
    }
    if !base.is_subset(&closed) {
        return Err(AgmError::Precondition(format!(
            "closure dropped asserted axioms {:?}",
            base.difference(&closed)
        )));
    }
    Ok(closed)
}
