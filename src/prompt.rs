use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use std::num::{NonZeroUsize, ParseIntError};
use thiserror::Error;

const LENGTH_PROMPT: &str = "Enter the sequence length (positive integer): ";
const ID_PROMPT: &str = "Enter the sequence ID: ";
const DESCRIPTION_PROMPT: &str = "Provide a description of the sequence: ";
const ANNOTATION_PROMPT: &str = "Enter your name: ";

/// Reasons a length answer is rejected. These are reported back to the user, who is then asked
/// again; they never end the program.
#[derive(Debug, Error, PartialEq)]
pub enum LengthError {
    #[error("'{input}' is not an integer: {source}")]
    NotAnInteger { input: String, source: ParseIntError },

    #[error("must be > 0")]
    NotPositive,

    #[error("{0} is too large")]
    TooLarge(String),
}

/// Everything asked of the user before a record is generated.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub length: NonZeroUsize,
    pub id: String,
    pub description: String,
    pub annotation: String,
}

/// Parses a length answer. Surrounding whitespace is ignored.
pub fn parse_length(input: &str) -> Result<NonZeroUsize, LengthError> {
    let input = input.trim();
    let value = input.parse::<i128>().map_err(|source| LengthError::NotAnInteger {
        input: input.to_string(),
        source,
    })?;

    if value <= 0 {
        return Err(LengthError::NotPositive);
    }

    usize::try_from(value)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| LengthError::TooLarge(input.to_string()))
}

// writes the prompt, then reads one line. EOF is an error, since nothing more can be asked.
fn ask(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .context("Unable to read from input")?;
    if n == 0 {
        bail!("unexpected end of input while waiting for: {}", prompt.trim_end());
    }
    Ok(line)
}

/// Asks for a length until a positive integer is given. There is no limit on the number of
/// attempts.
pub fn read_positive_length(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<NonZeroUsize> {
    loop {
        let line = ask(input, output, prompt)?;
        match parse_length(&line) {
            Ok(v) => return Ok(v),
            Err(e) => {
                debug!("Rejected length {:?}", line.trim_end());
                writeln!(output, "Invalid input ({e}), please enter a positive integer.")?;
            }
        }
    }
}

/// Asks once and returns the answer with surrounding whitespace removed. Empty answers are
/// accepted.
pub fn read_trimmed(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<String> {
    Ok(ask(input, output, prompt)?.trim().to_string())
}

/// Collects the length, ID, description and annotation, in that order.
pub fn collect_request(input: &mut impl BufRead, output: &mut impl Write) -> Result<Request> {
    let length = read_positive_length(input, output, LENGTH_PROMPT)?;
    let id = read_trimmed(input, output, ID_PROMPT)?;
    let description = read_trimmed(input, output, DESCRIPTION_PROMPT)?;
    let annotation = read_trimmed(input, output, ANNOTATION_PROMPT)?;

    Ok(Request {
        length,
        id,
        description,
        annotation,
    })
}
