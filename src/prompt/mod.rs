//! Interactive prompts for the CLI frontend.
//!
//! Reads one answer per line. Resistances are entered in shorthand,
//! voltages and currents as plain numbers.

use std::io::{self, BufRead, Write};

use crate::error::{CalcError, Result};
use crate::notation::parse_shorthand;

/// Line-oriented question/answer session over any reader and writer.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout and read answers from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `label` and read one trimmed line.
    ///
    /// End of input is reported as an I/O error.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        let context = || format!("answer to '{}'", label.trim_end());

        write!(self.writer, "{label}")
            .and_then(|_| self.writer.flush())
            .map_err(|e| CalcError::Io {
                context: context(),
                source: e,
            })?;

        let mut line = String::new();
        let bytes_read = self.reader.read_line(&mut line).map_err(|e| CalcError::Io {
            context: context(),
            source: e,
        })?;

        if bytes_read == 0 {
            return Err(CalcError::Io {
                context: context(),
                source: io::Error::from(io::ErrorKind::UnexpectedEof),
            });
        }

        Ok(line.trim().to_string())
    }

    /// Ask for a resistance in shorthand.
    pub fn ask_resistance(&mut self, label: &str) -> Result<f64> {
        let answer = self.ask(label)?;
        parse_shorthand(&answer)
    }

    /// Ask for a plain number.
    pub fn ask_number(&mut self, label: &str) -> Result<f64> {
        let answer = self.ask(label)?;
        parse_number(&answer)
    }

    /// Ask for a number where an empty answer means "none".
    pub fn ask_optional_number(&mut self, label: &str) -> Result<Option<f64>> {
        let answer = self.ask(label)?;
        if answer.is_empty() {
            return Ok(None);
        }
        parse_number(&answer).map(Some)
    }
}

fn parse_number(text: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber {
            input: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_writes_label_and_trims() {
        let mut p = prompter("  hello \n");
        assert_eq!(p.ask("Say: ").unwrap(), "hello");
        assert_eq!(String::from_utf8(p.writer).unwrap(), "Say: ");
    }

    #[test]
    fn test_ask_resistance() {
        let mut p = prompter("4k7\n");
        assert_eq!(p.ask_resistance("Enter target resistance: ").unwrap(), 4700.0);
    }

    #[test]
    fn test_divider_session() {
        let mut p = prompter("5\n3.3\n\n");
        assert_eq!(p.ask_number("Enter Vin: ").unwrap(), 5.0);
        assert_eq!(p.ask_number("Enter Vout: ").unwrap(), 3.3);
        assert_eq!(p.ask_optional_number("Enter maximum current (mA): ").unwrap(), None);
    }

    #[test]
    fn test_bad_number() {
        let mut p = prompter("five\n");
        assert!(matches!(
            p.ask_number("Enter Vin: "),
            Err(CalcError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_end_of_input() {
        let mut p = prompter("");
        assert!(matches!(p.ask("Enter Vin: "), Err(CalcError::Io { .. })));
    }
}
