use crate::solver::stats::SearchStats;

/// A trait for strategies that decide when a search attempt should be
/// abandoned and started over.
///
/// Restarts only change anything when the search is randomized; a
/// deterministic search retries the identical tree.
pub trait RestartPolicy {
    /// Given the statistics of the most recent attempt, decides whether the
    /// search should restart.
    fn should_restart(&self, stats: &SearchStats) -> bool;
}

/// A policy that never restarts.
pub struct NoRestartPolicy;

impl RestartPolicy for NoRestartPolicy {
    fn should_restart(&self, _stats: &SearchStats) -> bool {
        false
    }
}

/// Restarts once an attempt has backtracked more than `max_backtracks`
/// times.
pub struct RestartAfterNBacktracks {
    pub max_backtracks: u64,
}

impl RestartPolicy for RestartAfterNBacktracks {
    fn should_restart(&self, stats: &SearchStats) -> bool {
        stats.backtracks >= self.max_backtracks
    }
}
