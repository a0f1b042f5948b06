/*!
Reading DIMACS formulas into a context.

The accepted dialect:
- Lines beginning `c` are comments.
- An optional problem line `p cnf <atoms> <clauses>`; the counts are read
  (and logged) but the formula is built from what the input actually
  contains.
- Clauses are whitespace-separated non-zero integer literals, terminated by
  a literal `0`. A clause may span lines.
- A line beginning `%` ends the formula (some benchmark suites trail
  metadata after one).

```rust
# use stoat_sat::config::Config;
# use stoat_sat::context::Context;
# use std::io::Write;
let mut the_context = Context::from_config(Config::default());

let mut dimacs = vec![];
let _ = dimacs.write(b"
c An example pair of clauses.
p cnf 2 2
 1  2 0
-1 -2 0
");

assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
assert_eq!(the_context.formula.clause_count(), 2);
```
*/

use std::io::BufRead;

use crate::{
    context::GenericContext,
    structures::clause::CClause,
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + rand::SeedableRng> GenericContext<R> {
    /// Reads a DIMACS formula into the context.
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<(), ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();
        let mut line_counter = 0;

        'line_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'line_loop,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(ErrorKind::from(err::ParseError::Line(line_counter))),
            }

            match buffer.chars().next() {
                Some('c') => continue 'line_loop,

                Some('%') => break 'line_loop,

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace().skip(2);
                    let atom_count: usize = match problem_details.next().map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
                    };
                    let clause_count: usize = match problem_details.next().map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(ErrorKind::from(err::ParseError::ProblemSpecification)),
                    };
                    log::info!("Expecting {atom_count} atoms over {clause_count} clauses");
                }

                _ => {
                    for item in buffer.split_whitespace() {
                        match item {
                            "0" => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                if self.add_clause(the_clause).is_err() {
                                    return Err(ErrorKind::from(err::ParseError::Line(
                                        line_counter,
                                    )));
                                }
                            }

                            _ => match item.parse::<i32>() {
                                Ok(int) => match crate::structures::literal::CLiteral::from_int(int)
                                {
                                    Some(literal) => clause_buffer.push(literal),
                                    None => {
                                        return Err(ErrorKind::from(err::ParseError::Line(
                                            line_counter,
                                        )))
                                    }
                                },
                                Err(_) => {
                                    return Err(ErrorKind::from(err::ParseError::Line(
                                        line_counter,
                                    )))
                                }
                            },
                        }
                    }
                }
            }
        }

        // A final clause missing its terminating zero is accepted.
        if !clause_buffer.is_empty() {
            log::warn!("Unterminated final clause");
            self.add_clause(clause_buffer)
                .map_err(|_| ErrorKind::from(err::ParseError::Line(line_counter)))?;
        }

        Ok(())
    }
}
