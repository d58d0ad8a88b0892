use std::io::{self, Write};

use cadenza_core::ports::ReplySink;

/// Escribe cada respuesta en consola con el prefijo `Chatbot: `.
pub struct ConsoleSink<W: Write> {
  out: W,
}

impl ConsoleSink<io::Stdout> {
  pub fn stdout() -> Self {
    Self { out: io::stdout() }
  }
}

impl<W: Write> ConsoleSink<W> {
  pub fn new(out: W) -> Self {
    Self { out }
  }

  pub fn into_inner(self) -> W {
    self.out
  }
}

impl<W: Write> ReplySink for ConsoleSink<W> {
  type Error = io::Error;

  fn deliver(&mut self, reply: &str) -> Result<(), Self::Error> {
    writeln!(self.out, "Chatbot: {reply}")?;
    self.out.flush()
  }
}
