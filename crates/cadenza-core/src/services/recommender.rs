use tracing::{debug, warn};

use crate::catalog::{Catalog, within_band};
use crate::domain::{CatalogSchema, ParameterSpec, PreferenceVector, Track};
use crate::services::format;

pub const NO_MATCHES_REPLY: &str = "Sorry, I couldn't find any songs matching your preferences.";

/// Resultado del filtrado por preferencias.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation<'a> {
  Matches(Vec<&'a Track>),
  NoMatches,
}

/// Estrecha el catálogo con una banda de tolerancia por preferencia, en el
/// orden en que se contestaron, y devuelve las `n` más populares.
///
/// Las preferencias sobre columnas que el catálogo no tiene se ignoran.
pub fn recommend<'a>(catalog: &'a Catalog, preferences: &PreferenceVector, n: usize) -> Recommendation<'a> {
  let mut pool = catalog.all();

  for (feature, value) in preferences.iter() {
    if !catalog.schema().has_feature(feature) {
      warn!(%feature, "feature not in catalog, skipping filter");
      continue;
    }
    let Some(spec) = ParameterSpec::for_feature(feature) else {
      warn!(%feature, "no tolerance defined for feature, skipping filter");
      continue;
    };

    let band = spec.band(value);
    let in_band = within_band(feature, band);
    pool.retain(|t| in_band(*t));
    debug!(%feature, lo = band.lo, hi = band.hi, remaining = pool.len(), "preference filter applied");
  }

  if pool.is_empty() {
    return Recommendation::NoMatches;
  }
  Recommendation::Matches(Catalog::top_by_popularity(pool, n))
}

impl Recommendation<'_> {
  pub fn render(&self, schema: &CatalogSchema) -> String {
    match self {
      Recommendation::NoMatches => NO_MATCHES_REPLY.to_string(),
      Recommendation::Matches(tracks) => {
        let mut lines = vec!["Here are some songs that match your preferences:".to_string()];
        lines.extend(tracks.iter().map(|t| format::song_line(t, schema, true)));
        lines.join("\n")
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{AudioFeature, CatalogSchema};
  use crate::test_support::{catalog, catalog_with, track};

  fn with_valence(name: &str, popularity: f64, valence: f64) -> Track {
    let mut t = track(name, "Artist", popularity);
    t.features.valence = valence;
    t
  }

  fn names(rec: &Recommendation<'_>) -> Vec<String> {
    match rec {
      Recommendation::Matches(tracks) => tracks.iter().map(|t| t.name.clone()).collect(),
      Recommendation::NoMatches => Vec::new(),
    }
  }

  #[test]
  fn valence_band_keeps_rows_within_tolerance() {
    let catalog = catalog(vec![with_valence("A", 50.0, 0.85), with_valence("B", 90.0, 0.30), with_valence("C", 70.0, 0.75)]);
    let prefs: PreferenceVector = [(AudioFeature::Valence, 0.8)].into_iter().collect();

    let rec = recommend(&catalog, &prefs, 5);
    assert_eq!(names(&rec), ["C", "A"]);
    assert_eq!(rec.render(catalog.schema()), "Here are some songs that match your preferences:\n- \"C\" by Artist\n- \"A\" by Artist");
  }

  #[test]
  fn every_result_lies_inside_every_band() {
    let tracks: Vec<_> = (0..=20)
      .map(|i| {
        let mut t = with_valence(&format!("T{i}"), f64::from(i), f64::from(i) / 20.0);
        t.features.tempo = 100.0 + f64::from(i) * 3.0;
        t
      })
      .collect();
    let catalog = catalog(tracks);
    let prefs: PreferenceVector = [(AudioFeature::Valence, 0.5), (AudioFeature::Tempo, 130.0)].into_iter().collect();

    let Recommendation::Matches(found) = recommend(&catalog, &prefs, 50) else { panic!("expected matches") };
    assert!(!found.is_empty());
    for t in found {
      assert!((0.4..=0.6).contains(&t.features.valence));
      assert!((120.0..=140.0).contains(&t.features.tempo));
    }
  }

  #[test]
  fn same_input_gives_same_output() {
    let catalog = catalog(vec![with_valence("A", 10.0, 0.5), with_valence("B", 10.0, 0.5), with_valence("C", 10.0, 0.5)]);
    let prefs: PreferenceVector = [(AudioFeature::Valence, 0.5)].into_iter().collect();
    let first = recommend(&catalog, &prefs, 5);
    assert_eq!(names(&first), ["A", "B", "C"]);
    assert_eq!(recommend(&catalog, &prefs, 5), first);
  }

  #[test]
  fn no_matches_is_reported() {
    let catalog = catalog(vec![with_valence("A", 10.0, 0.1)]);
    let prefs: PreferenceVector = [(AudioFeature::Valence, 0.9)].into_iter().collect();
    let rec = recommend(&catalog, &prefs, 5);
    assert_eq!(rec, Recommendation::NoMatches);
    assert_eq!(rec.render(catalog.schema()), NO_MATCHES_REPLY);
  }

  #[test]
  fn artistless_catalog_renders_titles_only() {
    let mut schema = CatalogSchema::minimal();
    schema.artists = false;
    let catalog = catalog_with(vec![with_valence("A", 10.0, 0.5)], schema);
    let prefs: PreferenceVector = [(AudioFeature::Valence, 0.5)].into_iter().collect();
    let rec = recommend(&catalog, &prefs, 5);
    assert_eq!(rec.render(catalog.schema()), "Here are some songs that match your preferences:\n- \"A\"");
  }

  #[test]
  fn optional_features_without_tolerance_are_skipped() {
    let catalog = catalog_with(vec![with_valence("A", 10.0, 0.5)], CatalogSchema::complete());
    let prefs: PreferenceVector = [(AudioFeature::Loudness, -5.0)].into_iter().collect();
    assert_eq!(names(&recommend(&catalog, &prefs, 5)), ["A"]);
  }
}
