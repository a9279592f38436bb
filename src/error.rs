use crate::solver::network::VariableId;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while building a network or resolving components by name.
///
/// Once a network is built, the solver itself has no error outcomes besides
/// [`Inconsistency`]; querying a network with an identifier it never issued
/// is a precondition violation, not a checked error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown variable ?{0}")]
    UnknownVariable(VariableId),
    #[error("constraint endpoints must be distinct variables (got ?{0} on both sides)")]
    SelfConstraint(VariableId),
    #[error("unknown variable-selection heuristic '{0}'")]
    UnknownVariableHeuristic(String),
    #[error("unknown value-ordering heuristic '{0}'")]
    UnknownValueHeuristic(String),
    #[error("unknown propagator '{0}'")]
    UnknownPropagator(String),
}

/// A propagation step would have emptied the domain of `variable`.
///
/// This is the one failure a propagator can report. It travels only as a
/// return value: the propagator discards all of its work before returning,
/// so the caller never sees a partially pruned store and has nothing to roll
/// back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("domain wipeout on variable ?{variable}")]
pub struct Inconsistency {
    /// The variable whose domain would have been emptied.
    pub variable: VariableId,
}
