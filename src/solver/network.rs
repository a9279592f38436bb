//! The constraint network: a read-only description of variables, their
//! neighbour relation, and the conflict table, built once per problem
//! instance.
//!
//! The network deliberately owns no mutable search state. Current domains
//! live in a separately owned [`DomainStore`], and the partial assignment
//! belongs to the search loop, so every heuristic and propagator reads
//! shared state through `&Network` without any hidden globals.

use std::collections::HashMap;

use im::OrdSet;

use crate::{
    error::{Error, Result},
    solver::{
        solution::{Assignment, DomainStore},
        value::ValueOrdering,
    },
};

/// Identifies one variable of a network.
///
/// Identifiers are handed out densely, in declaration order, by
/// [`NetworkBuilder::add_variable`]. Their numeric order is the fixed
/// "lexicographic" total order that every heuristic uses to break ties.
pub type VariableId = u32;

/// A binary constraint network over values of type `V`.
///
/// Constraints are stored in compiled form as a conflict table: for each
/// `(variable, value)` pair, the set of incompatible values per neighbouring
/// variable. The table is symmetric by construction and read-only after
/// [`NetworkBuilder::build`].
#[derive(Debug, Clone)]
pub struct Network<V: ValueOrdering> {
    variables: Vec<VariableId>,
    neighbours: HashMap<VariableId, OrdSet<VariableId>>,
    conflicts: HashMap<(VariableId, V), HashMap<VariableId, OrdSet<V>>>,
    original_domains: HashMap<VariableId, OrdSet<V>>,
}

impl<V: ValueOrdering> Network<V> {
    /// All variables, in declaration order.
    pub fn variables(&self) -> &[VariableId] {
        &self.variables
    }

    /// The static neighbour set of `var`: every variable it shares a
    /// constraint with.
    ///
    /// # Panics
    ///
    /// Panics if `var` was not declared on this network.
    pub fn neighbours(&self, var: VariableId) -> &OrdSet<VariableId> {
        &self.neighbours[&var]
    }

    /// The values of `neighbour` that conflict with `var` taking `val`, or
    /// `None` when no conflict between the pair is recorded.
    pub fn conflict_set(&self, var: VariableId, val: &V, neighbour: VariableId) -> Option<&OrdSet<V>> {
        self.conflicts
            .get(&(var, val.clone()))
            .and_then(|per_neighbour| per_neighbour.get(&neighbour))
    }

    /// Live conflict count: how many assigned neighbours of `var` currently
    /// hold a value the conflict table marks incompatible with `(var, val)`.
    ///
    /// This consults the assignment, not the domains, so it sees through
    /// stale domain values that propagation has not (yet) removed.
    pub fn count_conflicts(&self, var: VariableId, val: &V, assignment: &Assignment<V>) -> usize {
        let Some(per_neighbour) = self.conflicts.get(&(var, val.clone())) else {
            return 0;
        };
        per_neighbour
            .iter()
            .filter(|(neighbour, conflicting)| {
                assignment
                    .get(neighbour)
                    .map_or(false, |held| conflicting.contains(held))
            })
            .count()
    }

    /// A fresh domain store holding every variable's original domain.
    pub fn initial_domains(&self) -> DomainStore<V> {
        DomainStore::new(
            self.original_domains
                .iter()
                .map(|(var, domain)| (*var, domain.clone()))
                .collect(),
        )
    }
}

/// Builds a [`Network`] by declaring variables and posting binary
/// constraints.
///
/// Translating a problem into conflict entries happens here, once; the
/// search algorithms only ever see the compiled table.
#[derive(Debug)]
pub struct NetworkBuilder<V: ValueOrdering> {
    domains: Vec<OrdSet<V>>,
    neighbours: Vec<OrdSet<VariableId>>,
    conflicts: HashMap<(VariableId, V), HashMap<VariableId, OrdSet<V>>>,
}

impl<V: ValueOrdering> NetworkBuilder<V> {
    pub fn new() -> Self {
        Self {
            domains: Vec::new(),
            neighbours: Vec::new(),
            conflicts: HashMap::new(),
        }
    }

    /// Declares a new variable with its original domain and returns its id.
    ///
    /// Ids are dense and increase in declaration order.
    pub fn add_variable(&mut self, domain: impl IntoIterator<Item = V>) -> VariableId {
        let id = self.domains.len() as VariableId;
        self.domains.push(domain.into_iter().collect());
        self.neighbours.push(OrdSet::new());
        id
    }

    /// Posts a binary constraint between `x` and `y`, given an allowed-pair
    /// predicate over their declared domains.
    ///
    /// Every pair the predicate rejects becomes a conflict entry in both
    /// directions, and the two variables become neighbours.
    pub fn add_constraint(
        &mut self,
        x: VariableId,
        y: VariableId,
        relation: impl Fn(&V, &V) -> bool,
    ) -> Result<()> {
        self.check_declared(x)?;
        self.check_declared(y)?;
        if x == y {
            return Err(Error::SelfConstraint(x));
        }

        let x_domain: Vec<V> = self.domains[x as usize].iter().cloned().collect();
        let y_domain: Vec<V> = self.domains[y as usize].iter().cloned().collect();
        for vx in &x_domain {
            for vy in &y_domain {
                if !relation(vx, vy) {
                    self.record_conflict(x, vx.clone(), y, vy.clone());
                }
            }
        }
        self.link(x, y);
        Ok(())
    }

    /// Posts a single incompatible pair: `x = vx` conflicts with `y = vy`.
    ///
    /// Pairs mentioning values outside the declared domains are legal but
    /// inert — the solver only ever looks up values that domains contain.
    pub fn add_conflict(&mut self, x: VariableId, vx: V, y: VariableId, vy: V) -> Result<()> {
        self.check_declared(x)?;
        self.check_declared(y)?;
        if x == y {
            return Err(Error::SelfConstraint(x));
        }
        self.record_conflict(x, vx, y, vy);
        self.link(x, y);
        Ok(())
    }

    pub fn build(self) -> Network<V> {
        Network {
            variables: (0..self.domains.len() as VariableId).collect(),
            neighbours: self
                .neighbours
                .into_iter()
                .enumerate()
                .map(|(id, set)| (id as VariableId, set))
                .collect(),
            conflicts: self.conflicts,
            original_domains: self
                .domains
                .into_iter()
                .enumerate()
                .map(|(id, domain)| (id as VariableId, domain))
                .collect(),
        }
    }

    fn record_conflict(&mut self, x: VariableId, vx: V, y: VariableId, vy: V) {
        let _ = self
            .conflicts
            .entry((x, vx.clone()))
            .or_default()
            .entry(y)
            .or_default()
            .insert(vy.clone());
        let _ = self
            .conflicts
            .entry((y, vy))
            .or_default()
            .entry(x)
            .or_default()
            .insert(vx);
    }

    fn link(&mut self, x: VariableId, y: VariableId) {
        let _ = self.neighbours[x as usize].insert(y);
        let _ = self.neighbours[y as usize].insert(x);
    }

    fn check_declared(&self, var: VariableId) -> Result<()> {
        if (var as usize) < self.domains.len() {
            Ok(())
        } else {
            Err(Error::UnknownVariable(var))
        }
    }
}

impl<V: ValueOrdering> Default for NetworkBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn not_equal_pair() -> Network<i64> {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_variable([1, 2, 3]);
        let b = builder.add_variable([1, 2]);
        builder.add_constraint(a, b, |x, y| x != y).unwrap();
        builder.build()
    }

    #[test]
    fn ids_are_dense_and_in_declaration_order() {
        let mut builder: NetworkBuilder<i64> = NetworkBuilder::new();
        let a = builder.add_variable([1]);
        let b = builder.add_variable([1]);
        let c = builder.add_variable([1]);
        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(builder.build().variables(), &[0, 1, 2]);
    }

    #[test]
    fn constraints_fill_the_table_symmetrically() {
        let network = not_equal_pair();

        let from_a = network.conflict_set(0, &1, 1).unwrap();
        assert_eq!(from_a.iter().copied().collect::<Vec<_>>(), vec![1]);

        let from_b = network.conflict_set(1, &1, 0).unwrap();
        assert_eq!(from_b.iter().copied().collect::<Vec<_>>(), vec![1]);

        // 3 is outside b's domain entirely, so nothing conflicts with it.
        assert!(network.conflict_set(0, &3, 1).is_none());
    }

    #[test]
    fn constrained_variables_become_neighbours_both_ways() {
        let network = not_equal_pair();
        assert!(network.neighbours(0).contains(&1));
        assert!(network.neighbours(1).contains(&0));
    }

    #[test]
    fn count_conflicts_sees_the_live_assignment() {
        let network = not_equal_pair();

        let mut assignment = Assignment::new();
        assert_eq!(network.count_conflicts(0, &1, &assignment), 0);

        let _ = assignment.insert(1, 1);
        assert_eq!(network.count_conflicts(0, &1, &assignment), 1);
        assert_eq!(network.count_conflicts(0, &2, &assignment), 0);
    }

    #[test]
    fn builder_rejects_unknown_and_self_referential_constraints() {
        let mut builder: NetworkBuilder<i64> = NetworkBuilder::new();
        let a = builder.add_variable([1, 2]);

        assert!(matches!(
            builder.add_constraint(a, 7, |_, _| true),
            Err(Error::UnknownVariable(7))
        ));
        assert!(matches!(
            builder.add_constraint(a, a, |_, _| true),
            Err(Error::SelfConstraint(0))
        ));
    }

    #[test]
    fn initial_domains_match_the_declarations() {
        let network = not_equal_pair();
        let domains = network.initial_domains();
        assert_eq!(domains.domain(0).iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(domains.domain(1).iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }
}
