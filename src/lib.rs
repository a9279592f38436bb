//! Nexo is a finite-domain binary constraint solver.
//!
//! Problems are described once as a [`Network`]: variables with finite
//! domains, plus binary constraints compiled into a read-only conflict
//! table. Searching happens around three pluggable seams:
//!
//! - **[`VariableSelectionHeuristic`]**: which unassigned variable to branch
//!   on next (declaration order, most-constraining, minimum remaining
//!   values, their combinations, or random).
//! - **[`ValueOrderingHeuristic`]**: the order in which a variable's current
//!   domain is tried (value order or least-constraining-value).
//! - **[`Propagator`]**: the lookahead run after every assignment — forward
//!   checking, full AC-3 arc consistency, or nothing. Propagators return
//!   undoable pruning lists instead of mutating search state, so the
//!   backtracking strategy can restore domains exactly.
//!
//! [`Network`]: crate::solver::network::Network
//! [`VariableSelectionHeuristic`]: crate::solver::heuristics::variable::VariableSelectionHeuristic
//! [`ValueOrderingHeuristic`]: crate::solver::heuristics::value::ValueOrderingHeuristic
//! [`Propagator`]: crate::solver::propagation::Propagator
//!
//! # Example: `?A != ?B`
//!
//! `?A` ranges over `{1, 2}` while `?B` can only be `1`; the solver must
//! conclude that `?A` is `2`.
//!
//! ```
//! use nexo::solver::{
//!     heuristics::{
//!         value::LeastConstrainingValueHeuristic,
//!         variable::MinimumRemainingValuesHeuristic,
//!     },
//!     network::NetworkBuilder,
//!     propagation::ArcConsistency,
//!     strategy::{BacktrackingSearch, SearchStrategy},
//! };
//!
//! let mut builder = NetworkBuilder::new();
//! let a = builder.add_variable([1, 2]);
//! let b = builder.add_variable([1]);
//! builder.add_constraint(a, b, |x, y| x != y)?;
//! let network = builder.build();
//!
//! let search = BacktrackingSearch::new(
//!     Box::new(MinimumRemainingValuesHeuristic),
//!     Box::new(LeastConstrainingValueHeuristic),
//!     Box::new(ArcConsistency),
//! );
//! let (solution, _stats) = search.solve(&network, network.initial_domains())?;
//!
//! let solution = solution.expect("the network is satisfiable");
//! assert_eq!(solution[&a], 2);
//! assert_eq!(solution[&b], 1);
//! # Ok::<(), nexo::error::Error>(())
//! ```

pub mod error;
pub mod examples;
pub mod solver;
