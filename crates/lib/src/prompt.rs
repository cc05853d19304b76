use std::io::{self, BufRead, Write};

pub const HOLD_MESSAGE: &str = "Press 'Enter' to exit...";

/// Print the hold message and block until one line (or EOF) is read.
///
/// Keeps a terminal window open after a failed build when the tool was
/// launched outside a shell.
pub fn wait_for_enter<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
  write!(out, "\n{}", HOLD_MESSAGE)?;
  out.flush()?;

  let mut line = String::new();
  input.read_line(&mut line)?;
  Ok(())
}
