/// The base trait for any value that can appear in a variable's domain.
///
/// This is a marker trait: any type that is cloneable, debuggable, equatable,
/// and hashable qualifies.
pub trait ValueEquality: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> ValueEquality for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}

/// A capability trait for values with a total order.
///
/// The order is load-bearing, not cosmetic: it is the explicit "lexicographic"
/// order over values that value-ordering heuristics and all tie-breaks use.
/// Domains iterate in this order, never in incidental container order.
pub trait ValueOrdering: ValueEquality + Ord {}
impl<T> ValueOrdering for T where T: ValueEquality + Ord {}
