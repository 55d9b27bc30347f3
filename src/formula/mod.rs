pub mod dimacs;
pub mod pairs;

use crate::error::{FormulaError, ParseError};
use std::fmt::Debug;
use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Largest variable count a formula may declare, the range of a 32-bit signed literal.
pub const MAX_VARIABLES: usize = i32::MAX as usize;

/// A variable, indexed from 1.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub struct Variable(pub usize);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Literal {
    Positive(Variable),
    Negative(Variable),
}

impl Literal {
    /// The literal for a signed encoding: `v` is positive, `-v` is negative. `0` has no literal.
    pub fn from_signed(x: i64) -> Option<Self> {
        if x > 0 {
            Some(Literal::Positive(Variable(x as usize)))
        } else if x < 0 {
            Some(Literal::Negative(Variable(x.unsigned_abs() as usize)))
        } else {
            None
        }
    }

    pub fn to_signed(&self) -> i64 {
        match self {
            Literal::Positive(v) => v.0 as i64,
            Literal::Negative(v) => -(v.0 as i64),
        }
    }

    pub fn variable(&self) -> &Variable {
        match self {
            Literal::Positive(v) => v,
            Literal::Negative(v) => v,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Literal::Positive(_) => true,
            Literal::Negative(_) => false,
        }
    }

    pub fn idx(&self) -> usize {
        self.variable().0
    }

    pub fn negated(&self) -> Self {
        match self {
            Literal::Positive(v) => Literal::Negative(*v),
            Literal::Negative(v) => Literal::Positive(*v),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.to_signed())
    }
}

/// A binary disjunction `(a | b)`. A unit clause `(a)` is stored as `(a | a)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Clause {
    first: Literal,
    second: Literal,
}

impl Clause {
    pub fn new(first: Literal, second: Literal) -> Self {
        Self { first, second }
    }

    pub fn unit(literal: Literal) -> Self {
        Self::new(literal, literal)
    }

    pub fn first(&self) -> Literal {
        self.first
    }

    pub fn second(&self) -> Literal {
        self.second
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        std::iter::once(&self.first).chain(std::iter::once(&self.second))
    }

    pub fn swapped(&self) -> Self {
        Self::new(self.second, self.first)
    }
}

#[derive(Clone)]
pub struct Formula {
    num_variables: usize,
    clauses: Vec<Clause>,
}

impl Formula {
    /// Builds a formula over as many variables as the largest one mentioned.
    pub fn new(conjuncts: impl IntoIterator<Item = Clause>) -> Self {
        let clauses: Vec<Clause> = conjuncts.into_iter().collect();
        let num_variables = clauses
            .iter()
            .flat_map(|clause| clause.literals())
            .map(|literal| literal.idx())
            .max()
            .unwrap_or(0);
        Self { num_variables, clauses }
    }

    /// Builds a formula over exactly `num_variables` variables, some of which may be unused.
    pub fn with_variables(
        num_variables: usize,
        conjuncts: impl IntoIterator<Item = Clause>,
    ) -> Result<Self, FormulaError> {
        if num_variables > MAX_VARIABLES {
            return Err(FormulaError::TooManyVariables { num_variables });
        }
        let clauses: Vec<Clause> = conjuncts.into_iter().collect();
        for literal in clauses.iter().flat_map(|clause| clause.literals()) {
            if !(1..=num_variables).contains(&literal.idx()) {
                return Err(FormulaError::LiteralOutOfRange {
                    literal: *literal,
                    num_variables,
                });
            }
        }
        Ok(Self { num_variables, clauses })
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }
}

impl Debug for Formula {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let mut first_clause = true;
        for clause in &self.clauses {
            if first_clause {
                first_clause = false;
            } else {
                f.write_str(" & ")?;
            }
            write!(f, "({} | {})", clause.first, clause.second)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputFormat {
    /// A `n [m]` header followed by one `a b` pair per line.
    Pairs,
    Dimacs,
}

pub fn parse<R: Read>(reader: R, format: InputFormat) -> Result<Formula, ParseError> {
    match format {
        InputFormat::Pairs => pairs::parse(reader),
        InputFormat::Dimacs => dimacs::parse(reader),
    }
}

pub fn parse_file(path: impl AsRef<Path>, format: InputFormat) -> Result<Formula, ParseError> {
    let file = File::open(path)?;
    parse(file, format)
}

// Shared by both readers: undecodable text is malformed input on that line, anything else is I/O.
pub(crate) fn read_line(line: io::Result<String>, line_number: usize) -> Result<String, ParseError> {
    line.map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => ParseError::format(line_number, "line is not valid UTF-8"),
        _ => ParseError::Io(e),
    })
}

pub(crate) fn parse_variable_count(field: &str, line: usize) -> Result<usize, ParseError> {
    let num_variables = field
        .parse::<usize>()
        .map_err(|_| ParseError::format(line, format!("invalid variable count '{}'", field)))?;
    if num_variables > MAX_VARIABLES {
        return Err(ParseError::format(
            line,
            format!("variable count {} exceeds the maximum of {}", field, MAX_VARIABLES),
        ));
    }
    Ok(num_variables)
}

// Shared by both readers: a nonzero signed literal within the declared variable range.
pub(crate) fn parse_literal(token: &str, num_variables: usize, line: usize) -> Result<Literal, ParseError> {
    let x = token
        .parse::<i64>()
        .map_err(|_| ParseError::format(line, format!("invalid literal '{}'", token)))?;
    let literal = Literal::from_signed(x)
        .ok_or_else(|| ParseError::format(line, "literal 0 does not name a variable"))?;
    if num_variables == 0 {
        return Err(ParseError::format(
            line,
            format!("clause literal '{}' given but no variables were declared", token),
        ));
    }
    if literal.idx() > num_variables {
        return Err(ParseError::format(
            line,
            format!("literal '{}' exceeds the {} declared variables", token, num_variables),
        ));
    }
    Ok(literal)
}

#[cfg(test)]
pub(crate) fn p(x: usize) -> Literal {
    Literal::Positive(Variable(x))
}

#[cfg(test)]
pub(crate) fn n(x: usize) -> Literal {
    Literal::Negative(Variable(x))
}

/// Random 2-SAT formulas small enough to brute force.
#[cfg(test)]
pub(crate) fn formula_2sat_strategy() -> impl proptest::strategy::Strategy<Value = Formula> {
    use proptest::prelude::*;

    (1usize..=8).prop_flat_map(|num_variables| {
        let literal = (1..=num_variables, any::<bool>())
            .prop_map(|(x, positive)| if positive { p(x) } else { n(x) });
        let clause = (literal.clone(), literal).prop_map(|(a, b)| Clause::new(a, b));
        proptest::collection::vec(clause, 0..20).prop_map(move |clauses| {
            Formula::with_variables(num_variables, clauses).expect("strategy literals are in range")
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn signed_encoding() {
        assert_eq!(Literal::from_signed(3), Some(p(3)));
        assert_eq!(Literal::from_signed(-7), Some(n(7)));
        assert_eq!(Literal::from_signed(0), None);
        assert_eq!(n(7).to_signed(), -7);
        assert_eq!(p(2).negated(), n(2));
        assert_eq!(n(2).negated().negated(), n(2));
    }

    #[test]
    fn num_variables_inferred() {
        let f = Formula::new(vec![Clause::new(p(1), n(4)), Clause::unit(p(2))]);
        assert_eq!(f.num_variables(), 4);
        assert_eq!(Formula::new(vec![]).num_variables(), 0);
    }

    #[test]
    fn with_variables_checks_range() {
        let f = Formula::with_variables(5, vec![Clause::new(p(1), n(2))]).unwrap();
        assert_eq!(f.num_variables(), 5);

        let err = Formula::with_variables(2, vec![Clause::new(p(1), n(3))]).unwrap_err();
        assert_eq!(
            err,
            FormulaError::LiteralOutOfRange {
                literal: n(3),
                num_variables: 2
            }
        );
    }

    #[test]
    fn with_variables_checks_count() {
        let err = Formula::with_variables(MAX_VARIABLES + 1, vec![]).unwrap_err();
        assert_eq!(
            err,
            FormulaError::TooManyVariables {
                num_variables: MAX_VARIABLES + 1
            }
        );
        assert!(Formula::with_variables(MAX_VARIABLES, vec![]).is_ok());
    }

    #[test]
    fn parse_variable_count_bounds() {
        assert_eq!(parse_variable_count("0", 1).unwrap(), 0);
        assert_eq!(parse_variable_count("2147483647", 1).unwrap(), MAX_VARIABLES);
        assert!(matches!(
            parse_variable_count("2147483648", 3),
            Err(ParseError::Format { line: 3, .. })
        ));
        assert!(matches!(
            parse_variable_count("9223372036854775808", 1),
            Err(ParseError::Format { line: 1, .. })
        ));
        assert!(matches!(parse_variable_count("-1", 1), Err(ParseError::Format { .. })));
    }

    #[test]
    fn read_line_reports_bad_utf8() {
        let bad = io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        assert!(matches!(read_line(Err(bad), 7), Err(ParseError::Format { line: 7, .. })));

        let other = io::Error::new(io::ErrorKind::UnexpectedEof, "eof");
        assert!(matches!(read_line(Err(other), 7), Err(ParseError::Io(_))));
        assert_eq!(read_line(Ok("1 2".to_string()), 1).unwrap(), "1 2");
    }

    #[test]
    fn debug_format() {
        let f = Formula::new(vec![Clause::new(p(1), n(2)), Clause::unit(p(3))]);
        assert_eq!(format!("{:?}", f), "(1 | -2) & (3 | 3)");
    }

    #[test]
    fn parse_literal_rejects_bad_tokens() {
        assert_eq!(parse_literal("-2", 2, 1).unwrap(), n(2));
        assert!(matches!(parse_literal("x", 2, 4), Err(ParseError::Format { line: 4, .. })));
        assert!(matches!(parse_literal("0", 2, 1), Err(ParseError::Format { .. })));
        assert!(matches!(parse_literal("3", 2, 1), Err(ParseError::Format { .. })));
        assert!(matches!(parse_literal("1", 0, 2), Err(ParseError::Format { line: 2, .. })));
    }

    #[test]
    fn parse_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "2 2\n1 2\n-1 -2").unwrap();

        let f = parse_file(file.path(), InputFormat::Pairs).expect("failed to parse");
        assert_eq!(f.num_variables(), 2);
        assert_eq!(f.num_clauses(), 2);
    }

    #[test]
    fn parse_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_file(dir.path().join("missing.txt"), InputFormat::Dimacs).unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
