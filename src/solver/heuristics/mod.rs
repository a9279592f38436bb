//! Pluggable search heuristics: variable selection, value ordering, and
//! restart policies.

pub mod restart;
pub mod value;
pub mod variable;

use crate::{
    error::{Error, Result},
    solver::value::ValueOrdering,
};

use self::{
    value::{LeastConstrainingValueHeuristic, LexicographicValueHeuristic, ValueOrderingHeuristic},
    variable::{
        MinimumRemainingValuesHeuristic, MostConstrainingHeuristic,
        MostConstrainingThenMrvHeuristic, MrvThenMostConstrainingHeuristic,
        RandomVariableHeuristic, SelectFirstHeuristic, VariableSelectionHeuristic,
    },
};

/// Resolves a variable-selection heuristic by its conventional name:
/// `lex`, `md`, `mrv`, `md-mrv`, `mrv-md`, or `random`.
pub fn variable_heuristic_by_name<V: ValueOrdering>(
    name: &str,
) -> Result<Box<dyn VariableSelectionHeuristic<V>>> {
    match name {
        "lex" => Ok(Box::new(SelectFirstHeuristic)),
        "md" => Ok(Box::new(MostConstrainingHeuristic)),
        "mrv" => Ok(Box::new(MinimumRemainingValuesHeuristic)),
        "md-mrv" => Ok(Box::new(MostConstrainingThenMrvHeuristic)),
        "mrv-md" => Ok(Box::new(MrvThenMostConstrainingHeuristic)),
        "random" => Ok(Box::new(RandomVariableHeuristic::new())),
        _ => Err(Error::UnknownVariableHeuristic(name.to_owned())),
    }
}

/// Resolves a value-ordering heuristic by its conventional name: `lex` or
/// `lcv`.
pub fn value_heuristic_by_name<V: ValueOrdering>(
    name: &str,
) -> Result<Box<dyn ValueOrderingHeuristic<V>>> {
    match name {
        "lex" => Ok(Box::new(LexicographicValueHeuristic)),
        "lcv" => Ok(Box::new(LeastConstrainingValueHeuristic)),
        _ => Err(Error::UnknownValueHeuristic(name.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_conventional_name_resolves() {
        for name in ["lex", "md", "mrv", "md-mrv", "mrv-md", "random"] {
            assert!(variable_heuristic_by_name::<i64>(name).is_ok(), "{name}");
        }
        for name in ["lex", "lcv"] {
            assert!(value_heuristic_by_name::<i64>(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(matches!(
            variable_heuristic_by_name::<i64>("degree"),
            Err(Error::UnknownVariableHeuristic(_))
        ));
        assert!(matches!(
            value_heuristic_by_name::<i64>("lcvf-ish"),
            Err(Error::UnknownValueHeuristic(_))
        ));
    }
}
