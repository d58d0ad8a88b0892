/// Destino de las respuestas del chatbot (consola, UI, tests...).
///
/// Recibe un bloque de texto ya formateado por turno.
pub trait ReplySink {
  type Error: std::error::Error;

  fn deliver(&mut self, reply: &str) -> Result<(), Self::Error>;
}

/// Sink en memoria; guarda cada respuesta en orden.
#[derive(Debug, Default)]
pub struct CollectingSink {
  pub replies: Vec<String>,
}

impl ReplySink for CollectingSink {
  type Error = std::convert::Infallible;

  fn deliver(&mut self, reply: &str) -> Result<(), Self::Error> {
    self.replies.push(reply.to_string());
    Ok(())
  }
}
