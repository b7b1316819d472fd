//! Flush-then-read prompt helpers for the interactive loop.
//!
//! Integer prompts implement the input-recovery contract: a malformed
//! number is reported and the pending operation abandoned (`None`) before
//! the store is touched. End of input also yields `None`, quietly, so the
//! caller can wind down.

use std::io::{self, BufRead, Write};

/// Print `text`, flush, and read one line. `None` on end of input.
///
/// The trailing line terminator is stripped; interior and leading
/// whitespace is kept verbatim.
pub fn line<R, W>(
  input: &mut R,
  output: &mut W,
  text: &str,
) -> io::Result<Option<String>>
where
  R: BufRead,
  W: Write,
{
  write!(output, "{text}")?;
  output.flush()?;

  let mut buf = String::new();
  if input.read_line(&mut buf)? == 0 {
    return Ok(None);
  }
  Ok(Some(
    buf
      .trim_end_matches('\n')
      .trim_end_matches('\r')
      .to_string(),
  ))
}

/// Prompt for a whole number. On malformed input, report it and return
/// `None` so the caller abandons the operation.
pub fn integer<R, W>(
  input: &mut R,
  output: &mut W,
  text: &str,
) -> io::Result<Option<i64>>
where
  R: BufRead,
  W: Write,
{
  let Some(raw) = line(input, output, text)? else {
    return Ok(None);
  };
  match raw.trim().parse::<i64>() {
    Ok(n) => Ok(Some(n)),
    Err(_) => {
      writeln!(output, "Invalid input! Please enter a whole number.")?;
      Ok(None)
    }
  }
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use super::*;

  fn cursor(s: &str) -> Cursor<&[u8]> { Cursor::new(s.as_bytes()) }

  #[test]
  fn line_strips_the_terminator_only() {
    let mut out = Vec::new();
    let got = line(&mut cursor("  Ada \r\n"), &mut out, "? ").unwrap();
    assert_eq!(got.as_deref(), Some("  Ada "));
  }

  #[test]
  fn line_returns_none_at_end_of_input() {
    let mut out = Vec::new();
    assert_eq!(line(&mut cursor(""), &mut out, "? ").unwrap(), None);
  }

  #[test]
  fn integer_tolerates_surrounding_whitespace() {
    let mut out = Vec::new();
    let got = integer(&mut cursor(" 42 \n"), &mut out, "? ").unwrap();
    assert_eq!(got, Some(42));
  }

  #[test]
  fn malformed_integer_reports_and_abandons() {
    let mut out = Vec::new();
    let got = integer(&mut cursor("forty-two\n"), &mut out, "? ").unwrap();
    assert_eq!(got, None);

    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.contains("Invalid input! Please enter a whole number."));
  }

  #[test]
  fn prompts_are_written_before_reading() {
    let mut out = Vec::new();
    line(&mut cursor("x\n"), &mut out, "Enter first name: ").unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Enter first name: ");
  }
}
