use im::OrdSet;

use crate::solver::{network::VariableId, value::ValueOrdering};

/// A partial assignment of values to variables.
///
/// Owned and mutated by the search loop; every heuristic and propagator
/// receives it read-only.
pub type Assignment<V> = std::collections::HashMap<VariableId, V>;

/// The current domain of one variable.
///
/// An ordered persistent set: iteration ascends in the explicit value order,
/// and clones share structure.
pub type Domain<V> = OrdSet<V>;

/// One `(variable, value)` removal requested by a propagation call.
pub type Pruning<V> = (VariableId, V);

/// The exact, duplicate-free list of removals one propagation call produced.
///
/// The caller applies the list before recursing and undoes it before trying
/// the next value; order is irrelevant, completeness is what makes the
/// restoration exact.
pub type PruningList<V> = Vec<Pruning<V>>;

/// The mutable half of the search state: every variable's current domain.
///
/// Separately owned from the read-only [`crate::solver::network::Network`],
/// and only ever mutated through [`apply`](DomainStore::apply) /
/// [`undo`](DomainStore::undo) by whoever drives the search. Each current
/// domain stays a subset of the variable's original domain because values
/// only leave via prunings and only return via their undo.
#[derive(Debug, Clone)]
pub struct DomainStore<V: ValueOrdering> {
    domains: im::HashMap<VariableId, Domain<V>>,
}

impl<V: ValueOrdering> DomainStore<V> {
    pub fn new(domains: im::HashMap<VariableId, Domain<V>>) -> Self {
        Self { domains }
    }

    /// The current domain of `var`.
    ///
    /// # Panics
    ///
    /// Panics if `var` does not belong to the network this store was created
    /// from.
    pub fn domain(&self, var: VariableId) -> &Domain<V> {
        &self.domains[&var]
    }

    /// Removes every listed value from its variable's domain.
    pub fn apply(&mut self, prunings: &PruningList<V>) {
        for (var, val) in prunings {
            if let Some(domain) = self.domains.get_mut(var) {
                let _ = domain.remove(val);
            }
        }
    }

    /// Reinstates every listed value, reversing a previous [`apply`] of the
    /// same list.
    ///
    /// [`apply`]: DomainStore::apply
    pub fn undo(&mut self, prunings: &PruningList<V>) {
        for (var, val) in prunings {
            if let Some(domain) = self.domains.get_mut(var) {
                let _ = domain.insert(val.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn store() -> DomainStore<i64> {
        DomainStore::new(im::hashmap! {
            0 => im::ordset![1, 2, 3],
            1 => im::ordset![4, 5],
        })
    }

    fn values(store: &DomainStore<i64>, var: VariableId) -> Vec<i64> {
        store.domain(var).iter().copied().collect()
    }

    #[test]
    fn apply_removes_exactly_the_listed_values() {
        let mut store = store();
        store.apply(&vec![(0, 2), (1, 4)]);

        assert_eq!(values(&store, 0), vec![1, 3]);
        assert_eq!(values(&store, 1), vec![5]);
    }

    #[test]
    fn undo_restores_the_store_exactly() {
        let mut store = store();
        let prunings = vec![(0, 1), (0, 3), (1, 5)];

        store.apply(&prunings);
        store.undo(&prunings);

        assert_eq!(values(&store, 0), vec![1, 2, 3]);
        assert_eq!(values(&store, 1), vec![4, 5]);
    }

    #[test]
    fn clones_do_not_observe_later_mutation() {
        let mut store = store();
        let scratch = store.clone();

        store.apply(&vec![(0, 1)]);

        assert_eq!(values(&store, 0), vec![2, 3]);
        assert_eq!(values(&scratch, 0), vec![1, 2, 3]);
    }
}
