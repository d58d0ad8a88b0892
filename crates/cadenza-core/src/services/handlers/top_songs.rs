use crate::catalog::Catalog;
use crate::services::format;

pub const NO_POPULARITY_REPLY: &str = "Sorry, I don't have popularity data to make recommendations.";

/// Recomendación rápida: las `n` más populares, sin preguntar nada.
pub fn answer(catalog: &Catalog, n: usize) -> String {
  let schema = catalog.schema();
  if !schema.name {
    return format::NO_TITLES_REPLY.to_string();
  }
  if !schema.popularity {
    return NO_POPULARITY_REPLY.to_string();
  }

  let mut lines = vec!["Here are some song recommendations:".to_string()];
  lines.extend(Catalog::top_by_popularity(catalog.all(), n).into_iter().map(|t| format::song_line(t, schema, false)));
  lines.join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::CatalogSchema;
  use crate::test_support::{catalog, catalog_with, track};

  #[test]
  fn lists_most_popular_first_with_stable_ties() {
    let catalog = catalog(vec![track("A", "X", 50.0), track("B", "Y", 90.0), track("C", "Z", 50.0)]);
    assert_eq!(answer(&catalog, 5), "Here are some song recommendations:\n- B by Y\n- A by X\n- C by Z");
    assert_eq!(answer(&catalog, 1), "Here are some song recommendations:\n- B by Y");
  }

  #[test]
  fn requires_popularity_column() {
    let catalog = catalog_with(vec![track("A", "X", 50.0)], CatalogSchema::minimal());
    assert_eq!(answer(&catalog, 5), NO_POPULARITY_REPLY);
  }

  #[test]
  fn catalog_without_titles_lists_nothing() {
    let mut schema = CatalogSchema::minimal();
    schema.name = false;
    schema.artists = false;
    schema.popularity = true;
    let catalog = catalog_with(vec![track("", "", 50.0), track("", "", 40.0)], schema);

    let reply = answer(&catalog, 5);
    assert_eq!(reply, format::NO_TITLES_REPLY);
    assert!(!reply.contains(" by "));
  }

  #[test]
  fn catalog_without_artists_lists_titles_only() {
    let mut schema = CatalogSchema::minimal();
    schema.artists = false;
    schema.popularity = true;
    let catalog = catalog_with(vec![track("A", "", 50.0), track("B", "", 90.0)], schema);
    assert_eq!(answer(&catalog, 5), "Here are some song recommendations:\n- B\n- A");
  }
}
