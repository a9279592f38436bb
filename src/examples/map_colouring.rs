//! Colouring the map of Australia: the canonical constraint-satisfaction
//! demo. Adjacent regions must receive different colours.

use crate::solver::network::{Network, NetworkBuilder, VariableId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Colour {
    Red,
    Green,
    Blue,
}

/// Builds the seven-region Australia network over three colours.
///
/// Returns the network and the region ids in declaration order:
/// WA, NT, SA, Q, NSW, V, T.
pub fn australia() -> (Network<Colour>, Vec<VariableId>) {
    let colours = [Colour::Red, Colour::Green, Colour::Blue];

    let mut builder = NetworkBuilder::new();
    let wa = builder.add_variable(colours);
    let nt = builder.add_variable(colours);
    let sa = builder.add_variable(colours);
    let q = builder.add_variable(colours);
    let nsw = builder.add_variable(colours);
    let v = builder.add_variable(colours);
    let t = builder.add_variable(colours);

    let adjacent = [
        (wa, nt),
        (wa, sa),
        (nt, sa),
        (nt, q),
        (sa, q),
        (sa, nsw),
        (sa, v),
        (q, nsw),
        (nsw, v),
    ];
    for (x, y) in adjacent {
        builder
            .add_constraint(x, y, |a, b| a != b)
            .expect("regions are declared above");
    }

    // Tasmania borders nothing; it stays an unconstrained variable.
    (builder.build(), vec![wa, nt, sa, q, nsw, v, t])
}
