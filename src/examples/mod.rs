//! Built-in example problems, used by the tests, the benchmarks, and the
//! demo binary.

pub mod map_colouring;
pub mod n_queens;
