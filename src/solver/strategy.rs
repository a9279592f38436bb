use tracing::{debug, trace};

use crate::{
    error::Result,
    solver::{
        heuristics::{
            restart::RestartPolicy, value::ValueOrderingHeuristic,
            variable::VariableSelectionHeuristic,
        },
        network::Network,
        propagation::Propagator,
        solution::{Assignment, DomainStore, PruningList},
        stats::SearchStats,
        value::ValueOrdering,
    },
};

/// A complete search procedure over a network.
pub trait SearchStrategy<V: ValueOrdering> {
    /// Runs the search to completion.
    ///
    /// `Ok((None, stats))` means the network was proven unsatisfiable.
    fn solve(
        &self,
        network: &Network<V>,
        domains: DomainStore<V>,
    ) -> Result<(Option<Assignment<V>>, SearchStats)>;
}

/// Chronological backtracking search around pluggable heuristics and a
/// propagator.
///
/// The strategy owns the mutable search state — the assignment and the
/// domain store — and is the only thing that ever mutates domains: every
/// pruning list a propagation call returns is applied before recursing and
/// undone, exactly, before the next value is tried.
pub struct BacktrackingSearch<V: ValueOrdering> {
    variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
    value_heuristic: Box<dyn ValueOrderingHeuristic<V>>,
    propagator: Box<dyn Propagator<V>>,
}

impl<V: ValueOrdering> BacktrackingSearch<V> {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
        value_heuristic: Box<dyn ValueOrderingHeuristic<V>>,
        propagator: Box<dyn Propagator<V>>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
            propagator,
        }
    }

    fn search(
        &self,
        network: &Network<V>,
        assignment: &mut Assignment<V>,
        domains: &mut DomainStore<V>,
        stats: &mut SearchStats,
    ) -> Option<Assignment<V>> {
        stats.nodes_visited += 1;

        let Some(var) = self
            .variable_heuristic
            .select_variable(network, assignment, domains)
        else {
            // Every variable is assigned.
            return Some(assignment.clone());
        };

        for val in self
            .value_heuristic
            .order_values(var, network, assignment, domains)
        {
            // Values in open conflict with the live assignment cannot extend
            // it. Propagation normally prunes these before they are reached;
            // this check is what keeps plain backtracking sound.
            if network.count_conflicts(var, &val, assignment) > 0 {
                continue;
            }

            trace!(variable = var, value = ?val, "branching");
            let _ = assignment.insert(var, val.clone());

            // The branched variable's own domain narrows to the chosen
            // value, recorded as an ordinary pruning list so it is undone
            // the same way as everything else. Incremental arc consistency
            // relies on this shrink being visible.
            let restriction: PruningList<V> = domains
                .domain(var)
                .iter()
                .filter(|other| *other != &val)
                .map(|other| (var, other.clone()))
                .collect();
            domains.apply(&restriction);

            stats.propagation_calls += 1;
            match self
                .propagator
                .propagate(Some(var), network, assignment, domains)
            {
                Ok(prunings) => {
                    stats.values_pruned += prunings.len() as u64;
                    domains.apply(&prunings);
                    if let Some(solution) = self.search(network, assignment, domains, stats) {
                        return Some(solution);
                    }
                    domains.undo(&prunings);
                }
                Err(inconsistency) => {
                    trace!(wiped_out = inconsistency.variable, "propagation failed");
                    stats.wipeouts += 1;
                }
            }

            domains.undo(&restriction);
            let _ = assignment.remove(&var);
            stats.backtracks += 1;
        }

        None
    }
}

impl<V: ValueOrdering> SearchStrategy<V> for BacktrackingSearch<V> {
    fn solve(
        &self,
        network: &Network<V>,
        mut domains: DomainStore<V>,
    ) -> Result<(Option<Assignment<V>>, SearchStats)> {
        let mut stats = SearchStats::default();
        let mut assignment: Assignment<V> = Assignment::new();

        // Preprocessing pass over the whole network.
        stats.propagation_calls += 1;
        match self
            .propagator
            .propagate(None, network, &assignment, &domains)
        {
            Ok(prunings) => {
                stats.values_pruned += prunings.len() as u64;
                domains.apply(&prunings);
            }
            Err(inconsistency) => {
                debug!(
                    wiped_out = inconsistency.variable,
                    "network refuted during preprocessing"
                );
                stats.wipeouts += 1;
                return Ok((None, stats));
            }
        }

        let solution = self.search(network, &mut assignment, &mut domains, &mut stats);
        debug!(
            nodes = stats.nodes_visited,
            backtracks = stats.backtracks,
            solved = solution.is_some(),
            "search finished"
        );
        Ok((solution, stats))
    }
}

/// Wraps an inner strategy with a restart policy, re-running the whole
/// search until it succeeds or the policy gives up.
pub struct RestartingSearch<V: ValueOrdering> {
    inner_strategy: Box<dyn SearchStrategy<V>>,
    restart_policy: Box<dyn RestartPolicy>,
}

impl<V: ValueOrdering> RestartingSearch<V> {
    pub fn new(
        inner_strategy: Box<dyn SearchStrategy<V>>,
        restart_policy: Box<dyn RestartPolicy>,
    ) -> Self {
        Self {
            inner_strategy,
            restart_policy,
        }
    }
}

impl<V: ValueOrdering> SearchStrategy<V> for RestartingSearch<V> {
    fn solve(
        &self,
        network: &Network<V>,
        domains: DomainStore<V>,
    ) -> Result<(Option<Assignment<V>>, SearchStats)> {
        let mut cumulative_stats = SearchStats::default();

        loop {
            let (solution, attempt_stats) =
                self.inner_strategy.solve(network, domains.clone())?;

            cumulative_stats.nodes_visited += attempt_stats.nodes_visited;
            cumulative_stats.backtracks += attempt_stats.backtracks;
            cumulative_stats.propagation_calls += attempt_stats.propagation_calls;
            cumulative_stats.values_pruned += attempt_stats.values_pruned;
            cumulative_stats.wipeouts += attempt_stats.wipeouts;

            if solution.is_some() || !self.restart_policy.should_restart(&attempt_stats) {
                return Ok((solution, cumulative_stats));
            }
            debug!("restarting search");
        }
    }
}
