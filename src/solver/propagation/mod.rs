//! Consistency propagation: computing the domain prunings an assignment
//! implies, or detecting that some domain would wipe out.
//!
//! Propagators are pure with respect to the live search state: they read the
//! network, assignment, and domain store, and hand back a pruning list for
//! the search loop to apply (and later undo). On failure nothing is exposed
//! at all, so there is never partial mutation to roll back.

mod arc_consistency;
mod forward_checking;

pub use arc_consistency::ArcConsistency;
pub use forward_checking::ForwardChecking;

use crate::{
    error::{Error, Inconsistency, Result},
    solver::{
        network::{Network, VariableId},
        solution::{Assignment, DomainStore, PruningList},
        value::ValueOrdering,
    },
};

/// A consistency-propagation procedure.
pub trait Propagator<V: ValueOrdering> {
    /// Computes the prunings implied by the current state.
    ///
    /// `var` is the variable that was just assigned, or `None` when the call
    /// is a preprocessing pass over the whole network. The returned list is
    /// exact and duplicate-free; applying it leaves every domain non-empty.
    /// If any domain would have been emptied instead, the whole call fails
    /// with [`Inconsistency`] and no pruning is reported.
    fn propagate(
        &self,
        var: Option<VariableId>,
        network: &Network<V>,
        assignment: &Assignment<V>,
        domains: &DomainStore<V>,
    ) -> Result<PruningList<V>, Inconsistency>;
}

/// The do-nothing propagator: search degrades to plain backtracking.
pub struct NoPropagation;

impl<V: ValueOrdering> Propagator<V> for NoPropagation {
    fn propagate(
        &self,
        _var: Option<VariableId>,
        _network: &Network<V>,
        _assignment: &Assignment<V>,
        _domains: &DomainStore<V>,
    ) -> Result<PruningList<V>, Inconsistency> {
        Ok(Vec::new())
    }
}

/// Resolves a propagator by its conventional name: `forward`, `arc`, or
/// `none`.
pub fn propagator_by_name<V: ValueOrdering>(name: &str) -> Result<Box<dyn Propagator<V>>> {
    match name {
        "forward" => Ok(Box::new(ForwardChecking)),
        "arc" => Ok(Box::new(ArcConsistency)),
        "none" => Ok(Box::new(NoPropagation)),
        _ => Err(Error::UnknownPropagator(name.to_owned())),
    }
}
