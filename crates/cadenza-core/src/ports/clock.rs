use chrono::{Local, NaiveDate};

/// Fuente de "hoy" para la ventana de canciones recientes.
pub trait Clock: Send + Sync {
  fn today(&self) -> NaiveDate;
}

/// Reloj del sistema en hora local.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn today(&self) -> NaiveDate {
    Local::now().date_naive()
  }
}

/// Reloj congelado en una fecha, para tests y reproducciones.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
  fn today(&self) -> NaiveDate {
    self.0
  }
}
