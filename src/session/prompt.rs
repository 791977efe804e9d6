//! Line-oriented console prompts
//!
//! Every read consumes one whole line. Malformed numbers are answered with a
//! re-prompt rather than an error; only genuine I/O failures propagate.
//! End of input is reported as `None` so callers can wind down instead of
//! re-prompting a closed stream forever.

use std::io::{BufRead, Write};

use crate::error::InvoiceResult;
use crate::models::Money;

/// Reads operator input and writes prompts
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line
    pub fn say(&mut self, line: &str) -> InvoiceResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Write text without a newline and flush, for inline prompts
    pub fn write(&mut self, text: &str) -> InvoiceResult<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one trimmed line, `None` at end of input
    pub fn read_line(&mut self) -> InvoiceResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for free text; end of input reads as empty
    pub fn prompt_string(&mut self, prompt: &str) -> InvoiceResult<String> {
        self.write(prompt)?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Read a whole number, re-prompting until one is entered
    pub fn read_int(&mut self) -> InvoiceResult<Option<i64>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    tracing::debug!(input = %line, "rejected non-integer input");
                    self.write("Enter a valid whole number: ")?;
                }
            }
        }
    }

    /// Read a money amount, re-prompting until one parses
    ///
    /// `$` and the given currency symbol are stripped before parsing.
    pub fn read_money(&mut self, symbol: &str) -> InvoiceResult<Option<Money>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match Money::parse_with_symbol(&line, symbol) {
                Ok(amount) => return Ok(Some(amount)),
                Err(e) => {
                    tracing::debug!(error = %e, "rejected money input");
                    self.write(&format!("Enter a valid number (e.g., 250 or 250.00): {}", symbol))?;
                }
            }
        }
    }

    /// Ask a yes/no question; only `y` (any case) counts as yes
    pub fn confirm(&mut self, prompt: &str) -> InvoiceResult<bool> {
        let answer = self.prompt_string(prompt)?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    /// Give back the underlying reader and writer
    #[cfg(test)]
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_inner().1).unwrap()
    }

    #[test]
    fn test_prompt_string_trims() {
        let mut p = prompter("  Alex  \n");
        assert_eq!(p.prompt_string("Customer: ").unwrap(), "Alex");
        assert_eq!(output(p), "Customer: ");
    }

    #[test]
    fn test_prompt_string_eof_is_empty() {
        let mut p = prompter("");
        assert_eq!(p.prompt_string("Vehicle: ").unwrap(), "");
    }

    #[test]
    fn test_read_int_reprompts() {
        let mut p = prompter("abc\n2.5\n\n 3 \n");
        assert_eq!(p.read_int().unwrap(), Some(3));
        assert_eq!(output(p).matches("Enter a valid whole number: ").count(), 3);
    }

    #[test]
    fn test_read_int_eof() {
        let mut p = prompter("nope\n");
        assert_eq!(p.read_int().unwrap(), None);
    }

    #[test]
    fn test_read_money_reprompts_and_rounds() {
        let mut p = prompter("two fifty\n\n$250.005\n");
        assert_eq!(p.read_money("$").unwrap(), Some(Money::from_cents(25001)));
        assert_eq!(
            output(p).matches("Enter a valid number (e.g., 250 or 250.00): $").count(),
            2
        );
    }

    #[test]
    fn test_read_money_never_defaults_on_eof() {
        let mut p = prompter("garbage\n");
        assert_eq!(p.read_money("$").unwrap(), None);
    }

    #[test]
    fn test_confirm_only_accepts_y() {
        for (input, expected) in [
            ("y\n", true),
            ("Y\n", true),
            (" y \n", true),
            ("yes\n", false),
            ("n\n", false),
            ("\n", false),
            ("", false),
        ] {
            let mut p = prompter(input);
            assert_eq!(p.confirm("? ").unwrap(), expected, "input {input:?}");
        }
    }
}
