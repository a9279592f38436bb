use crate::solver::{
    network::{Network, VariableId},
    solution::{Assignment, DomainStore},
    value::ValueOrdering,
};

/// A trait for strategies that order a variable's current domain for trial.
///
/// The returned sequence is always a permutation of the variable's current
/// domain — heuristics reorder, they never add or drop values.
pub trait ValueOrderingHeuristic<V: ValueOrdering> {
    /// Returns the current domain of `var` in the order its values should be
    /// tried.
    fn order_values(
        &self,
        var: VariableId,
        network: &Network<V>,
        assignment: &Assignment<V>,
        domains: &DomainStore<V>,
    ) -> Vec<V>;
}

/// Orders values ascending in the explicit value order.
pub struct LexicographicValueHeuristic;

impl<V: ValueOrdering> ValueOrderingHeuristic<V> for LexicographicValueHeuristic {
    fn order_values(
        &self,
        var: VariableId,
        _network: &Network<V>,
        _assignment: &Assignment<V>,
        domains: &DomainStore<V>,
    ) -> Vec<V> {
        // Domains are ordered sets, so plain iteration is the value order.
        domains.domain(var).iter().cloned().collect()
    }
}

/// The least-constraining-value heuristic (LCV).
///
/// Tries the value that rules out the fewest choices for unassigned
/// neighbours first, keeping the subtree below the assignment as loose as
/// possible and reducing expected backtracking. Ties fall back to the value
/// order.
pub struct LeastConstrainingValueHeuristic;

/// How many `(neighbour, value)` options assigning `val` would rule out:
/// for each unassigned neighbour, the count of values currently in its
/// domain that the conflict table marks incompatible with `(var, val)`.
/// Neighbours count independently, so the same value appearing in two
/// neighbours' domains contributes once per neighbour.
fn value_cost<V: ValueOrdering>(
    network: &Network<V>,
    assignment: &Assignment<V>,
    domains: &DomainStore<V>,
    var: VariableId,
    val: &V,
) -> usize {
    network
        .neighbours(var)
        .iter()
        .copied()
        .filter(|neighbour| !assignment.contains_key(neighbour))
        .map(|neighbour| match network.conflict_set(var, val, neighbour) {
            Some(conflicting) => domains
                .domain(neighbour)
                .iter()
                .filter(|candidate| conflicting.contains(candidate))
                .count(),
            None => 0,
        })
        .sum()
}

impl<V: ValueOrdering> ValueOrderingHeuristic<V> for LeastConstrainingValueHeuristic {
    fn order_values(
        &self,
        var: VariableId,
        network: &Network<V>,
        assignment: &Assignment<V>,
        domains: &DomainStore<V>,
    ) -> Vec<V> {
        let mut costed: Vec<(usize, V)> = domains
            .domain(var)
            .iter()
            .map(|val| (value_cost(network, assignment, domains, var, val), val.clone()))
            .collect();
        costed.sort();
        costed.into_iter().map(|(_, val)| val).collect()
    }
}
