//! N-queens as a binary constraint network.
//!
//! One variable per column whose value is the queen's row; queens must
//! differ in row and must not share a diagonal. Scales with `n`, which makes
//! it the benchmark workhorse.

use crate::solver::network::{Network, NetworkBuilder, VariableId};

/// Builds the `n`-queens network. Returns the network and the column
/// variables in board order.
pub fn n_queens(n: i64) -> (Network<i64>, Vec<VariableId>) {
    let mut builder = NetworkBuilder::new();
    let columns: Vec<VariableId> = (0..n).map(|_| builder.add_variable(0..n)).collect();

    for i in 0..columns.len() {
        for j in (i + 1)..columns.len() {
            let distance = (j - i) as i64;
            builder
                .add_constraint(columns[i], columns[j], move |a, b| {
                    a != b && (a - b).abs() != distance
                })
                .expect("columns are declared above");
        }
    }
    (builder.build(), columns)
}
