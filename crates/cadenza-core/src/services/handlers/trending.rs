use chrono::{Months, NaiveDate};

use crate::catalog::Catalog;
use crate::domain::{CatalogSchema, Track};
use crate::services::format;

pub const NOT_ENOUGH_DATA_REPLY: &str = "Sorry, I don't have enough data to determine trending songs.";

/// De dónde salen las canciones listadas; solo cambia la cabecera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendingScope {
  /// Publicadas dentro de la ventana reciente.
  Recent,
  /// No había nada reciente: las más populares de todo el catálogo.
  AllTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trending<'a> {
  pub scope: TrendingScope,
  pub tracks: Vec<&'a Track>,
}

impl<'a> Trending<'a> {
  /// Top-`n` por popularidad de lo publicado desde `today - window_months`.
  ///
  /// La comparación es por día y el límite entra: con `today` = 31 de marzo y
  /// un mes de ventana cuenta lo publicado el 29 de febrero (restar meses
  /// ajusta al último día válido). Sin columnas de popularidad o de fecha
  /// devuelve `None`.
  pub fn compute(catalog: &'a Catalog, today: NaiveDate, window_months: u32, n: usize) -> Option<Self> {
    let schema = catalog.schema();
    if !schema.popularity || !schema.release_date {
      return None;
    }

    let cutoff = today.checked_sub_months(Months::new(window_months)).unwrap_or(NaiveDate::MIN);
    let recent = catalog.find(|t| t.release_date.is_some_and(|d| d >= cutoff));

    let (scope, pool) = if recent.is_empty() { (TrendingScope::AllTime, catalog.all()) } else { (TrendingScope::Recent, recent) };

    Some(Self { scope, tracks: Catalog::top_by_popularity(pool, n) })
  }

  pub fn render(&self, schema: &CatalogSchema) -> String {
    let header = match self.scope {
      TrendingScope::Recent => "Here are the current trending songs:",
      TrendingScope::AllTime => "No recent songs found in the database. Here are the most popular songs of all time:",
    };

    let mut lines = vec![header.to_string()];
    lines.extend(self.tracks.iter().map(|t| {
      let popularity = t.popularity.map(format::number).unwrap_or_else(|| "unknown".to_string());
      format!("{} (Popularity: {popularity})", format::song_line(t, schema, true))
    }));
    lines.join("\n")
  }
}

pub fn answer(catalog: &Catalog, today: NaiveDate, window_months: u32, n: usize) -> String {
  if !catalog.schema().name {
    return format::NO_TITLES_REPLY.to_string();
  }
  match Trending::compute(catalog, today, window_months, n) {
    Some(trending) => trending.render(catalog.schema()),
    None => NOT_ENOUGH_DATA_REPLY.to_string(),
  }
}
