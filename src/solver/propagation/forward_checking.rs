use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::{Inconsistency, Result},
    solver::{
        network::{Network, VariableId},
        propagation::Propagator,
        solution::{Assignment, DomainStore, PruningList},
        value::ValueOrdering,
    },
};

/// Forward checking: one-hop lookahead after an assignment.
///
/// For every unassigned neighbour of the just-assigned variable, collects
/// the removal of each domain value the conflict table marks incompatible
/// with the assignment. Propagation stops at the neighbours — prunings are
/// never chased transitively; that is [`ArcConsistency`]'s job.
///
/// [`ArcConsistency`]: crate::solver::propagation::ArcConsistency
pub struct ForwardChecking;

impl<V: ValueOrdering> Propagator<V> for ForwardChecking {
    fn propagate(
        &self,
        var: Option<VariableId>,
        network: &Network<V>,
        assignment: &Assignment<V>,
        domains: &DomainStore<V>,
    ) -> Result<PruningList<V>, Inconsistency> {
        // Forward checking is purely incremental; without a fresh assignment
        // there is nothing to check.
        let Some(var) = var else {
            return Ok(Vec::new());
        };
        let val = &assignment[&var];

        let mut prunings: PruningList<V> = Vec::new();
        // Remaining domain size per neighbour, carried across the whole call
        // so the wipeout is caught on exactly the removal that causes it
        // rather than by re-scanning after the fact.
        let mut remaining: HashMap<VariableId, usize> = HashMap::new();

        for neighbour in network.neighbours(var).iter().copied() {
            if assignment.contains_key(&neighbour) {
                continue;
            }
            let Some(conflicting) = network.conflict_set(var, val, neighbour) else {
                continue;
            };
            for candidate in domains.domain(neighbour).iter() {
                if !conflicting.contains(candidate) {
                    continue;
                }
                let left = remaining
                    .entry(neighbour)
                    .or_insert_with(|| domains.domain(neighbour).len());
                if *left == 1 {
                    debug!(variable = neighbour, "forward checking wiped out a neighbour");
                    return Err(Inconsistency { variable: neighbour });
                }
                *left -= 1;
                prunings.push((neighbour, candidate.clone()));
            }
        }
        Ok(prunings)
    }
}
