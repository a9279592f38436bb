//! Variable-selection heuristics: which unassigned variable the search
//! should branch on next.

use std::cell::RefCell;
use std::cmp::Reverse;

use rand::seq::IteratorRandom;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use crate::solver::{
    network::{Network, VariableId},
    solution::{Assignment, DomainStore},
    value::ValueOrdering,
};

/// A trait for variable-selection heuristics.
///
/// Implementors define a strategy for choosing which unassigned variable the
/// search should branch on next. A good heuristic can dramatically reduce
/// the size of the search tree.
///
/// # Contract
///
/// * Never return a variable that is already assigned.
/// * Return `None` exactly when every variable is assigned.
/// * Every deterministic variant breaks ties by the numeric order of
///   [`VariableId`]s — declaration order, the crate's fixed lexicographic
///   order.
pub trait VariableSelectionHeuristic<V: ValueOrdering> {
    /// Selects the next variable to be assigned, or `None` if there is
    /// nothing left to assign.
    fn select_variable(
        &self,
        network: &Network<V>,
        assignment: &Assignment<V>,
        domains: &DomainStore<V>,
    ) -> Option<VariableId>;
}

fn unassigned<'a, V: ValueOrdering>(
    network: &'a Network<V>,
    assignment: &'a Assignment<V>,
) -> impl Iterator<Item = VariableId> + 'a {
    network
        .variables()
        .iter()
        .copied()
        .filter(move |var| !assignment.contains_key(var))
}

/// How many of `var`'s neighbours are still unassigned.
fn unassigned_degree<V: ValueOrdering>(
    network: &Network<V>,
    assignment: &Assignment<V>,
    var: VariableId,
) -> usize {
    network
        .neighbours(var)
        .iter()
        .filter(|neighbour| !assignment.contains_key(neighbour))
        .count()
}

/// How many values of `var`'s current domain are conflict-free against the
/// live assignment.
///
/// Recomputed through the conflict table rather than read off the domain
/// size: a domain may still hold values that conflict with assignments
/// propagation has not pruned for.
fn consistent_domain_size<V: ValueOrdering>(
    network: &Network<V>,
    assignment: &Assignment<V>,
    domains: &DomainStore<V>,
    var: VariableId,
) -> usize {
    domains
        .domain(var)
        .iter()
        .filter(|val| network.count_conflicts(var, val, assignment) == 0)
        .count()
}

/// Selects the first unassigned variable in declaration order.
///
/// The baseline heuristic: deterministic and cheap, with no view of the
/// constraint structure.
pub struct SelectFirstHeuristic;

impl<V: ValueOrdering> VariableSelectionHeuristic<V> for SelectFirstHeuristic {
    fn select_variable(
        &self,
        network: &Network<V>,
        assignment: &Assignment<V>,
        _domains: &DomainStore<V>,
    ) -> Option<VariableId> {
        unassigned(network, assignment).next()
    }
}

/// The most-constraining-variable heuristic (MD).
///
/// Prefers the variable involved with the most unassigned neighbours, on the
/// theory that assigning it narrows the largest part of the problem at once.
pub struct MostConstrainingHeuristic;

impl<V: ValueOrdering> VariableSelectionHeuristic<V> for MostConstrainingHeuristic {
    fn select_variable(
        &self,
        network: &Network<V>,
        assignment: &Assignment<V>,
        _domains: &DomainStore<V>,
    ) -> Option<VariableId> {
        unassigned(network, assignment)
            .min_by_key(|&var| (Reverse(unassigned_degree(network, assignment, var)), var))
    }
}

/// The most-constrained-variable heuristic (MRV, minimum remaining values).
///
/// A "fail-first" strategy: prefer the variable with the fewest values still
/// consistent with the live assignment, so dead ends surface as early as
/// possible.
pub struct MinimumRemainingValuesHeuristic;

impl<V: ValueOrdering> VariableSelectionHeuristic<V> for MinimumRemainingValuesHeuristic {
    fn select_variable(
        &self,
        network: &Network<V>,
        assignment: &Assignment<V>,
        domains: &DomainStore<V>,
    ) -> Option<VariableId> {
        unassigned(network, assignment).min_by_key(|&var| {
            (consistent_domain_size(network, assignment, domains, var), var)
        })
    }
}

/// Most-constraining first, minimum remaining values to break ties.
pub struct MostConstrainingThenMrvHeuristic;

impl<V: ValueOrdering> VariableSelectionHeuristic<V> for MostConstrainingThenMrvHeuristic {
    fn select_variable(
        &self,
        network: &Network<V>,
        assignment: &Assignment<V>,
        domains: &DomainStore<V>,
    ) -> Option<VariableId> {
        unassigned(network, assignment).min_by_key(|&var| {
            (
                Reverse(unassigned_degree(network, assignment, var)),
                consistent_domain_size(network, assignment, domains, var),
                var,
            )
        })
    }
}

/// Minimum remaining values first, most-constraining (larger degree wins) to
/// break ties.
pub struct MrvThenMostConstrainingHeuristic;

impl<V: ValueOrdering> VariableSelectionHeuristic<V> for MrvThenMostConstrainingHeuristic {
    fn select_variable(
        &self,
        network: &Network<V>,
        assignment: &Assignment<V>,
        domains: &DomainStore<V>,
    ) -> Option<VariableId> {
        unassigned(network, assignment).min_by_key(|&var| {
            (
                consistent_domain_size(network, assignment, domains, var),
                Reverse(unassigned_degree(network, assignment, var)),
                var,
            )
        })
    }
}

/// Selects an unassigned variable uniformly at random.
///
/// Mainly useful together with a restart policy; seed it for reproducible
/// runs.
pub struct RandomVariableHeuristic {
    rng: RefCell<ChaCha8Rng>,
}

impl RandomVariableHeuristic {
    /// Seeds from system entropy.
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::from_entropy()),
        }
    }

    /// Seeds from `seed`, making every selection sequence reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomVariableHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ValueOrdering> VariableSelectionHeuristic<V> for RandomVariableHeuristic {
    fn select_variable(
        &self,
        network: &Network<V>,
        assignment: &Assignment<V>,
        _domains: &DomainStore<V>,
    ) -> Option<VariableId> {
        unassigned(network, assignment).choose(&mut *self.rng.borrow_mut())
    }
}
