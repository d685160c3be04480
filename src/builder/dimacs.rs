use std::{fs::File, io::BufRead, io::BufReader, path::Path};

use crate::{
    builder::ParserInfo,
    context::Context,
    misc::log::targets::{self},
    structures::literal::IntLiteral,
    types::err::{self},
};

/// A line of a DIMACS file, as read.
#[derive(Debug, PartialEq, Eq)]
enum Line {
    /// A line with no clause.
    Skip,

    /// A problem line, with the stated count of atoms and clauses.
    Problem(usize, usize),

    /// A clause, with a note of whether the line ended with a `0`.
    Clause(Vec<IntLiteral>, bool),

    /// A line which could not be read as a clause.
    Malformed,
}

/// Reads a single line.
fn read_line(line: &str) -> Line {
    let line = line.trim();

    match line.chars().next() {
        None | Some('c') | Some('%') | Some('0') => Line::Skip,

        Some('p') => {
            let mut details = line.split_whitespace().skip(1);
            match (details.next(), details.next(), details.next()) {
                (Some("cnf"), Some(atoms), Some(clauses)) => {
                    match (atoms.parse(), clauses.parse()) {
                        (Ok(atoms), Ok(clauses)) => Line::Problem(atoms, clauses),
                        _ => Line::Skip,
                    }
                }
                _ => Line::Skip,
            }
        }

        Some(_) => {
            let mut literals = Vec::default();
            for token in line.split_whitespace() {
                match token.parse::<IntLiteral>() {
                    Ok(literal) => literals.push(literal),
                    Err(_) => return Line::Malformed,
                }
            }

            let terminated = literals.last() == Some(&0);
            if terminated {
                literals.pop();
            }

            match literals.contains(&0) {
                true => Line::Malformed,
                false => Line::Clause(literals, terminated),
            }
        }
    }
}

impl Context {
    /// Reads a DIMACS formula into the context.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// Malformed lines are skipped, with the number of each noted in the returned [ParserInfo].
    /// An error is returned only if reading from the reader fails.
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let mut info = ParserInfo::default();
        let mut buffer: Vec<u8> = Vec::with_capacity(1024);
        let mut line_counter = 0;

        loop {
            buffer.clear();
            match reader.read_until(b'\n', &mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(err::ParseError::Line(line_counter + 1))),
            }

            let line = String::from_utf8_lossy(&buffer);

            match read_line(&line) {
                Line::Skip => {}

                Line::Problem(atoms, clauses) => {
                    log::debug!(target: targets::PARSE, "Expecting {atoms} atoms and {clauses} clauses.");
                    info.expected_atoms = Some(atoms);
                    info.expected_clauses = Some(clauses);
                }

                Line::Clause(literals, terminated) => {
                    if !terminated {
                        log::debug!(target: targets::PARSE, "Line {line_counter} has no terminating 0.");
                    }

                    match self.add_clause(literals) {
                        Ok(_) => info.added_clauses += 1,
                        Err(e) => {
                            log::warn!(target: targets::PARSE, "Skipping line {line_counter}: {e:?}");
                            info.skipped_lines.push(line_counter);
                        }
                    }
                }

                Line::Malformed => {
                    log::warn!(target: targets::PARSE, "Skipping malformed line {line_counter}: {}", line.trim());
                    info.skipped_lines.push(line_counter);
                }
            }
        }

        info.added_atoms = self.formula.atom_count();

        if let Some(expected) = info.expected_clauses {
            if expected != info.added_clauses {
                log::info!(target: targets::PARSE, "Expected {expected} clauses, read {}.", info.added_clauses);
            }
        }
        log::info!(target: targets::PARSE, "Parse complete: {info}");

        Ok(info)
    }

    /// Reads a DIMACS file into the context.
    ///
    /// With the `xz` feature, a file with the extension `xz` is decompressed as it is read.
    pub fn read_dimacs_file(&mut self, path: &Path) -> Result<ParserInfo, err::ErrorKind> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(err::ErrorKind::from(err::ParseError::NoFile))
            }
            Err(e) => return Err(err::ErrorKind::from(e)),
        };

        match path.extension().and_then(|extension| extension.to_str()) {
            #[cfg(feature = "xz")]
            Some("xz") => self.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(file))),

            #[cfg(not(feature = "xz"))]
            Some("xz") => Err(err::ErrorKind::from(err::ParseError::UnknownExtension(
                "xz".to_string(),
            ))),

            _ => self.read_dimacs(BufReader::new(file)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn skipped_lines() {
        assert_eq!(read_line(""), Line::Skip);
        assert_eq!(read_line("   "), Line::Skip);
        assert_eq!(read_line("c 1 2 0"), Line::Skip);
        assert_eq!(read_line("%"), Line::Skip);
        assert_eq!(read_line("0"), Line::Skip);
        assert_eq!(read_line("  0 1"), Line::Skip);
        assert_eq!(read_line("p dnf 2 2"), Line::Skip);
    }

    #[test]
    fn problem_line() {
        assert_eq!(read_line("p cnf 20 91"), Line::Problem(20, 91));
        assert_eq!(read_line("p  cnf  3\t7 "), Line::Problem(3, 7));
        assert_eq!(read_line("p cnf x 7"), Line::Skip);
    }

    #[test]
    fn clause_lines() {
        assert_eq!(read_line("1 -2 3 0"), Line::Clause(vec![1, -2, 3], true));
        assert_eq!(read_line("\t-4   5 0\r\n"), Line::Clause(vec![-4, 5], true));
        assert_eq!(read_line("1 -2 3"), Line::Clause(vec![1, -2, 3], false));
    }

    #[test]
    fn malformed_lines() {
        assert_eq!(read_line("1 two 0"), Line::Malformed);
        assert_eq!(read_line("1 0 2 0"), Line::Malformed);
        assert_eq!(read_line("1 2.5 0"), Line::Malformed);
        assert_eq!(read_line("1 99999999999 0"), Line::Malformed);
    }

    #[test]
    fn duplicates_collapse() {
        let mut the_context = Context::from_config(Config::default());
        let info = the_context.read_dimacs(b"1 1 -2 1 0\n".as_slice());

        assert!(info.is_ok());
        assert_eq!(the_context.formula.clauses(), &[vec![1, -2]]);
    }

    #[test]
    fn unrepresentable_atom() {
        let mut the_context = Context::from_config(Config::default());
        let info = the_context
            .read_dimacs(b"1 2 0\n-2147483648 0\n".as_slice())
            .unwrap();

        assert_eq!(info.added_clauses, 1);
        assert_eq!(info.skipped_lines, vec![2]);
    }

    #[test]
    fn large_atoms() {
        let mut the_context = Context::from_config(Config::default());
        let info = the_context
            .read_dimacs(b"2147483647 0\n1 0\n".as_slice())
            .unwrap();

        assert_eq!(info.added_clauses, 2);
        assert_eq!(info.added_atoms, 2);
        assert_eq!(the_context.formula.max_atom(), 2147483647);
    }

    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("unreadable"))
        }
    }

    #[test]
    fn unreadable_line() {
        use std::io::Read;

        let mut the_context = Context::from_config(Config::default());
        let reader = BufReader::new(b"1 -2 0\n".as_slice().chain(FailingReader));
        let result = the_context.read_dimacs(reader);

        assert_eq!(result, Err(err::ErrorKind::Parse(err::ParseError::Line(2))));
        assert_eq!(the_context.formula.clauses(), &[vec![1, -2]]);
    }

    #[test]
    fn missing_file() {
        let mut the_context = Context::from_config(Config::default());
        let result = the_context.read_dimacs_file(Path::new("no/such/formula.cnf"));

        assert_eq!(result, Err(err::ErrorKind::Parse(err::ParseError::NoFile)));
    }
}
