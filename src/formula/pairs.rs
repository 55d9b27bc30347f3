//! The plain clause-pair format.
//!
//! The first non-blank line holds the variable count `n`, optionally followed by the clause
//! count `m`. Every following non-blank line is one clause `a b`, two signed literals with
//! magnitudes in `1..=n`. Without `m`, clauses run to the end of the input.

use crate::error::ParseError;
use crate::formula::{parse_literal, parse_variable_count, read_line, Clause, Formula};
use std::io::{BufRead, BufReader, Read};

pub fn parse<R: Read>(reader: R) -> Result<Formula, ParseError> {
    let reader = BufReader::new(reader);

    let mut header: Option<(usize, Option<usize>)> = None;
    let mut clauses = vec![];

    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = read_line(line, line_number)?;
        let mut fields = line.split_whitespace();

        let first = match fields.next() {
            Some(field) => field,
            None => continue,
        };

        let (num_variables, num_clauses) = match header {
            Some(header) => header,
            None => {
                let num_variables = parse_variable_count(first, line_number)?;
                let num_clauses = fields
                    .next()
                    .map(|field| parse_clause_count(field, line_number))
                    .transpose()?;
                if let Some(field) = fields.next() {
                    return Err(ParseError::format(
                        line_number,
                        format!("unexpected field '{}' in header", field),
                    ));
                }
                header = Some((num_variables, num_clauses));
                continue;
            }
        };

        let second = fields
            .next()
            .ok_or_else(|| ParseError::format(line_number, "clause is missing its second literal"))?;
        if let Some(field) = fields.next() {
            return Err(ParseError::format(
                line_number,
                format!("unexpected field '{}' after two literals", field),
            ));
        }

        if let Some(declared) = num_clauses {
            if clauses.len() == declared {
                return Err(ParseError::format(
                    line_number,
                    format!("clause beyond the {} declared in the header", declared),
                ));
            }
        }

        let a = parse_literal(first, num_variables, line_number)?;
        let b = parse_literal(second, num_variables, line_number)?;
        clauses.push(Clause::new(a, b));
    }

    let (num_variables, num_clauses) =
        header.ok_or_else(|| ParseError::format(1, "missing variable count header"))?;

    if let Some(declared) = num_clauses {
        if clauses.len() != declared {
            return Err(ParseError::ClauseCount {
                declared,
                found: clauses.len(),
            });
        }
    }

    Ok(Formula::with_variables(num_variables, clauses)?)
}

fn parse_clause_count(field: &str, line: usize) -> Result<usize, ParseError> {
    field
        .parse::<usize>()
        .map_err(|_| ParseError::format(line, format!("invalid clause count '{}'", field)))
}
