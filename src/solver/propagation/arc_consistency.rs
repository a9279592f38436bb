use tracing::debug;

use crate::{
    error::{Inconsistency, Result},
    solver::{
        network::{Network, VariableId},
        propagation::Propagator,
        solution::{Assignment, DomainStore, PruningList},
        value::ValueOrdering,
        work_list::WorkList,
    },
};

/// The AC-3 arc-consistency algorithm.
///
/// Runs either globally (`var = None`, as a preprocessing pass seeding every
/// arc in both directions) or incrementally from a just-assigned variable's
/// neighbourhood. All revision happens on a private scratch copy of the
/// domain store — cheap, since domains share structure — so a wipeout fails
/// the whole call without leaving anything to roll back.
///
/// The loop realizes the Working → Failed / Done state machine: pop an arc,
/// revise, fail on wipeout, re-enqueue the incoming arcs of any variable
/// that shrank, and finish with the full pruning list once the worklist
/// drains.
pub struct ArcConsistency;

/// Values of `xi` with no remaining support: a value survives only if some
/// value currently in `xj`'s domain is not conflict-marked against it.
fn revise<V: ValueOrdering>(
    network: &Network<V>,
    scratch: &DomainStore<V>,
    xi: VariableId,
    xj: VariableId,
) -> PruningList<V> {
    scratch
        .domain(xi)
        .iter()
        .filter(|val| {
            let supported = match network.conflict_set(xi, val, xj) {
                Some(conflicting) => scratch
                    .domain(xj)
                    .iter()
                    .any(|support| !conflicting.contains(support)),
                // No recorded conflicts: any value of xj supports `val`.
                None => !scratch.domain(xj).is_empty(),
            };
            !supported
        })
        .map(|val| (xi, val.clone()))
        .collect()
}

impl<V: ValueOrdering> Propagator<V> for ArcConsistency {
    fn propagate(
        &self,
        var: Option<VariableId>,
        network: &Network<V>,
        _assignment: &Assignment<V>,
        domains: &DomainStore<V>,
    ) -> Result<PruningList<V>, Inconsistency> {
        let mut scratch = domains.clone();
        let mut prunings: PruningList<V> = Vec::new();

        let mut worklist = WorkList::new();
        match var {
            // Preprocessing: every constrained pair, both directions.
            None => {
                for &x in network.variables() {
                    for neighbour in network.neighbours(x).iter().copied() {
                        worklist.push_back((x, neighbour));
                    }
                }
            }
            // Incremental: only the just-assigned variable has shrunk, so
            // only arcs pointing at it need revising to start with.
            Some(assigned) => {
                for neighbour in network.neighbours(assigned).iter().copied() {
                    worklist.push_back((neighbour, assigned));
                }
            }
        }

        while let Some((xi, xj)) = worklist.pop_front() {
            let removed = revise(network, &scratch, xi, xj);
            if removed.is_empty() {
                continue;
            }
            if removed.len() == scratch.domain(xi).len() {
                debug!(variable = xi, "arc consistency wiped out a domain");
                return Err(Inconsistency { variable: xi });
            }

            scratch.apply(&removed);
            // Xi shrank, so every arc into Xi (except from the revision
            // partner) is stale and must be reconsidered.
            for xk in network.neighbours(xi).iter().copied() {
                if xk != xj {
                    worklist.push_back((xk, xi));
                }
            }
            prunings.extend(removed);
        }

        debug!(pruned = prunings.len(), "arc consistency reached a fixpoint");
        Ok(prunings)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::network::NetworkBuilder;

    fn full(network: &Network<i64>, domains: &DomainStore<i64>) -> Result<PruningList<i64>, Inconsistency> {
        ArcConsistency.propagate(None, network, &Assignment::new(), domains)
    }

    #[test]
    fn an_arc_consistent_network_yields_no_prunings() {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_variable([1, 2]);
        let b = builder.add_variable([1, 2]);
        builder.add_constraint(a, b, |p, q| p != q).unwrap();
        let network = builder.build();

        let prunings = full(&network, &network.initial_domains()).unwrap();
        assert!(prunings.is_empty());
    }

    #[test]
    fn running_twice_is_idempotent() {
        let mut builder = NetworkBuilder::new();
        let x = builder.add_variable([1, 2, 3]);
        let y = builder.add_variable([1, 2, 3]);
        builder.add_constraint(x, y, |p, q| p < q).unwrap();
        let network = builder.build();

        let mut domains = network.initial_domains();
        let first = full(&network, &domains).unwrap();
        // x = 3 has no support (nothing in y is greater), y = 1 likewise.
        assert_eq!(first.len(), 2);
        assert!(first.contains(&(x, 3)));
        assert!(first.contains(&(y, 1)));

        domains.apply(&first);
        let second = full(&network, &domains).unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn pigeonhole_stays_arc_consistent() {
        // Three variables over {1, 2}, pairwise distinct: unsatisfiable, but
        // every single value still has a support, so arc revision alone
        // cannot see it. Search is what refutes this network.
        let mut builder = NetworkBuilder::new();
        let a = builder.add_variable([1, 2]);
        let b = builder.add_variable([1, 2]);
        let c = builder.add_variable([1, 2]);
        for (x, y) in [(a, b), (b, c), (a, c)] {
            builder.add_constraint(x, y, |p, q| p != q).unwrap();
        }
        let network = builder.build();

        let prunings = full(&network, &network.initial_domains()).unwrap();
        assert!(prunings.is_empty());
    }

    #[test]
    fn full_mode_fails_on_an_unsupportable_chain() {
        // x < y < z over {1, 2}: y would have to exceed x and be exceeded by
        // z, which no domain value manages.
        let mut builder = NetworkBuilder::new();
        let x = builder.add_variable([1, 2]);
        let y = builder.add_variable([1, 2]);
        let z = builder.add_variable([1, 2]);
        builder.add_constraint(x, y, |p, q| p < q).unwrap();
        builder.add_constraint(y, z, |p, q| p < q).unwrap();
        let network = builder.build();

        assert!(full(&network, &network.initial_domains()).is_err());
    }

    #[test]
    fn incremental_revision_cascades_through_re_enqueued_arcs() {
        // x < y < z over {1..4}. After the caller narrows x to {1}, the arc
        // (y, x) fires first; y's shrink re-enqueues (z, y), which prunes z
        // transitively.
        let mut builder = NetworkBuilder::new();
        let x = builder.add_variable([1, 2, 3, 4]);
        let y = builder.add_variable([1, 2, 3, 4]);
        let z = builder.add_variable([1, 2, 3, 4]);
        builder.add_constraint(x, y, |p, q| p < q).unwrap();
        builder.add_constraint(y, z, |p, q| p < q).unwrap();
        let network = builder.build();

        let mut assignment = Assignment::new();
        let _ = assignment.insert(x, 1);
        let mut domains = network.initial_domains();
        domains.apply(&vec![(x, 2), (x, 3), (x, 4)]);

        let mut prunings = ArcConsistency
            .propagate(Some(x), &network, &assignment, &domains)
            .unwrap();
        prunings.sort();
        assert_eq!(prunings, vec![(y, 1), (z, 1), (z, 2)]);
    }

    #[test]
    fn incremental_wipeout_reports_the_emptied_variable() {
        // y < z with y pinned to its maximum: z cannot exceed it.
        let mut builder = NetworkBuilder::new();
        let y = builder.add_variable([1, 2, 3]);
        let z = builder.add_variable([1, 2, 3]);
        builder.add_constraint(y, z, |p, q| p < q).unwrap();
        let network = builder.build();

        let mut assignment = Assignment::new();
        let _ = assignment.insert(y, 3);
        let mut domains = network.initial_domains();
        domains.apply(&vec![(y, 1), (y, 2)]);

        let result = ArcConsistency.propagate(Some(y), &network, &assignment, &domains);
        assert_eq!(result, Err(Inconsistency { variable: z }));
    }

    #[test]
    fn failure_leaves_the_live_store_untouched() {
        let mut builder = NetworkBuilder::new();
        let x = builder.add_variable([1, 2]);
        let y = builder.add_variable([1, 2]);
        let z = builder.add_variable([1, 2]);
        builder.add_constraint(x, y, |p, q| p < q).unwrap();
        builder.add_constraint(y, z, |p, q| p < q).unwrap();
        let network = builder.build();

        let domains = network.initial_domains();
        assert!(full(&network, &domains).is_err());

        for var in network.variables() {
            assert_eq!(domains.domain(*var).len(), 2);
        }
    }

    #[test]
    fn prunings_are_duplicate_free() {
        let mut builder = NetworkBuilder::new();
        let x = builder.add_variable([1, 2, 3]);
        let y = builder.add_variable([1, 2, 3]);
        let z = builder.add_variable([1, 2, 3]);
        builder.add_constraint(x, y, |p, q| p < q).unwrap();
        builder.add_constraint(y, z, |p, q| p < q).unwrap();
        let network = builder.build();

        let prunings = full(&network, &network.initial_domains()).unwrap();
        let mut deduped = prunings.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), prunings.len());
    }
}
