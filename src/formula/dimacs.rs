use crate::error::ParseError;
use crate::formula::{parse_literal, parse_variable_count, read_line, Clause, Formula};
use std::io::{BufRead, BufReader, Read};

/// Reads a DIMACS CNF whose clauses each hold one or two literals.
pub fn parse<R: Read>(reader: R) -> Result<Formula, ParseError> {
    let reader = BufReader::new(reader);

    let mut clauses = vec![];
    let mut header = None;

    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = read_line(line, line_number)?;
        let mut line = line.split_whitespace().peekable();

        match line.peek() {
            Some(&"c") | None => continue,
            Some(&"%") => break,
            Some(&"p") => {
                let _ = line.next();

                if line.next() != Some("cnf") {
                    return Err(ParseError::format(line_number, "missing 'cnf'"));
                }

                let num_variables = line
                    .next()
                    .ok_or_else(|| ParseError::format(line_number, "missing num_variables"))
                    .and_then(|c| parse_variable_count(c, line_number))?;

                let num_clauses = line
                    .next()
                    .and_then(|c| c.parse::<usize>().ok())
                    .ok_or_else(|| ParseError::format(line_number, "invalid num_clauses"))?;

                header = Some((num_variables, num_clauses));
            }
            Some(_) => {
                let (num_variables, num_clauses) = header.ok_or_else(|| {
                    ParseError::format(line_number, "missing 'p' line before clauses")
                })?;
                if clauses.len() >= num_clauses {
                    break;
                }

                let mut clause = vec![];
                for x in line {
                    if x == "0" {
                        break;
                    }
                    clause.push(parse_literal(x, num_variables, line_number)?);
                }
                let clause = match clause.as_slice() {
                    [] => return Err(ParseError::format(line_number, "empty clause")),
                    [a] => Clause::unit(*a),
                    [a, b] => Clause::new(*a, *b),
                    _ => {
                        return Err(ParseError::format(
                            line_number,
                            format!("clause has {} literals, at most 2 are supported", clause.len()),
                        ))
                    }
                };
                clauses.push(clause);
            }
        }
    }

    let (num_variables, _) = header.ok_or_else(|| ParseError::format(1, "missing 'p' line"))?;

    Ok(Formula::with_variables(num_variables, clauses)?)
}
