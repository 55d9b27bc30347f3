use crate::*;

// Simple brute-force implementation for use in proptest
#[cfg(test)]
pub(crate) fn solve_brute_force(f: &Formula) -> SatResult {
    let num_variables = f.num_variables();
    assert!(num_variables <= 15); // just for safety

    fn assignment_for(assignment: u32, literal: &Literal) -> bool {
        // variables are indexed from 1
        let value = assignment & (1 << (literal.idx() - 1)) != 0;
        value == literal.is_positive()
    }

    'search: for assignment in 0..2u32.pow(num_variables as u32) {
        for clause in f.clauses() {
            if !clause.literals().any(|literal| assignment_for(assignment, literal)) {
                // this clause is falsified, so this assignment is bogus
                continue 'search;
            }
        }
        // if we got here, every clause was satisfied, so we're done and satisfiable
        return SatResult::Satisfiable;
    }
    // no assignment is valid
    SatResult::Unsatisfiable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p};

    #[test]
    fn solve_unit_sat() {
        let f = Formula::new(vec![Clause::new(p(1), p(2)), Clause::unit(n(1))]);
        assert_eq!(solve_brute_force(&f), SatResult::Satisfiable);
    }

    #[test]
    fn solve_unit_unsat() {
        let c1 = Clause::new(p(1), p(2));
        let c2 = Clause::unit(n(1));
        let c3 = Clause::unit(n(2));
        let f = Formula::new(vec![c1, c2, c3]);
        assert_eq!(solve_brute_force(&f), SatResult::Unsatisfiable);
    }

    #[test]
    fn solve_no_variables() {
        let f = Formula::new(vec![]);
        assert_eq!(solve_brute_force(&f), SatResult::Satisfiable);
    }
}
