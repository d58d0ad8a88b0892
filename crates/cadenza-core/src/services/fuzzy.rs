//! Similitud por conjuntos de tokens en escala 0–100.

use std::collections::BTreeSet;

/// Minúsculas, todo lo que no sea alfanumérico pasa a espacio.
fn preprocess(text: &str) -> String {
  text.to_lowercase().chars().map(|c| if c.is_alphanumeric() { c } else { ' ' }).collect()
}

/// Longitud de la subsecuencia común más larga, por caracteres.
fn lcs_len(a: &[char], b: &[char]) -> usize {
  let mut prev = vec![0usize; b.len() + 1];
  let mut row = vec![0usize; b.len() + 1];
  for ca in a {
    for (j, cb) in b.iter().enumerate() {
      row[j + 1] = if ca == cb { prev[j] + 1 } else { row[j].max(prev[j + 1]) };
    }
    std::mem::swap(&mut prev, &mut row);
  }
  prev[b.len()]
}

/// Similitud Indel normalizada: `100 * (1 - dist / (la + lb))`, donde la
/// distancia sólo cuenta inserciones y borrados (`la + lb - 2 * lcs`).
fn ratio(a: &str, b: &str) -> f64 {
  let a: Vec<char> = a.chars().collect();
  let b: Vec<char> = b.chars().collect();
  let total = a.len() + b.len();
  if total == 0 {
    return 100.0;
  }
  let dist = total - 2 * lcs_len(&a, &b);
  100.0 * (1.0 - dist as f64 / total as f64)
}

fn join(tokens: &[&str]) -> String {
  tokens.join(" ")
}

fn with_prefix(sect: &str, rest: &str) -> String {
  match (sect.is_empty(), rest.is_empty()) {
    (true, _) => rest.to_string(),
    (false, true) => sect.to_string(),
    (false, false) => format!("{sect} {rest}"),
  }
}

/// Compara dos textos ignorando orden y repetición de palabras.
///
/// Si los tokens de uno están contenidos en los del otro la puntuación es 100;
/// si no, se toma la mejor similitud entre la intersección y cada texto
/// reconstruido (intersección + diferencia).
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
  let a = preprocess(a);
  let b = preprocess(b);
  let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
  let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

  if tokens_a.is_empty() || tokens_b.is_empty() {
    return 0.0;
  }

  let common: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
  let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
  let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

  if !common.is_empty() && (only_a.is_empty() || only_b.is_empty()) {
    return 100.0;
  }

  let sect = join(&common);
  let combined_a = with_prefix(&sect, &join(&only_a));
  let combined_b = with_prefix(&sect, &join(&only_b));

  let mut best = ratio(&combined_a, &combined_b);
  if !sect.is_empty() {
    best = best.max(ratio(&sect, &combined_a)).max(ratio(&sect, &combined_b));
  }

  best
}

/// Mejor candidato para `query`: índice y puntuación.
///
/// Ante empate gana el primero en el orden recibido.
pub fn best_match<'a, I>(query: &str, candidates: I) -> Option<(usize, f64)>
where
  I: IntoIterator<Item = &'a str>,
{
  let mut best: Option<(usize, f64)> = None;
  for (idx, candidate) in candidates.into_iter().enumerate() {
    let score = token_set_ratio(query, candidate);
    match best {
      Some((_, best_score)) if score <= best_score => {}
      _ => best = Some((idx, score)),
    }
  }
  best
}

#[cfg(test)]
mod tests {
  use super::*;

  fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
  }

  #[test]
  fn identical_and_reordered_texts_score_100() {
    assert_eq!(token_set_ratio("how are you", "how are you"), 100.0);
    assert_eq!(token_set_ratio("you are how", "How are you?"), 100.0);
  }

  #[test]
  fn subset_of_tokens_scores_100() {
    assert_eq!(token_set_ratio("hello there", "hello"), 100.0);
    assert_eq!(token_set_ratio("fuzzy was a bear", "fuzzy fuzzy was a bear"), 100.0);
  }

  #[test]
  fn ratio_only_counts_insertions_and_deletions() {
    // "hel" común: 1 - 2/8
    assert!(close(ratio("hepl", "help"), 75.0));
    assert!(close(ratio("this is a test", "this is a test!"), 2800.0 / 29.0));
    assert!(close(ratio("", ""), 100.0));
    assert!(close(ratio("abc", "xyz"), 0.0));
  }

  #[test]
  fn transposed_letters_keep_a_high_score() {
    assert!(close(token_set_ratio("hepl", "help"), 75.0));
    assert!(close(token_set_ratio("Hepl?", "help"), 75.0));
  }

  #[test]
  fn intersection_is_compared_against_each_side() {
    // sect = "are", resto "how you" frente a "hw yu"
    let score = token_set_ratio("how are you", "hw are yu");
    assert!(score > 70.0 && score < 100.0, "{score}");
  }

  #[test]
  fn unrelated_short_input_scores_low() {
    assert!(token_set_ratio("thx", "thank you") < 70.0);
    assert!(token_set_ratio("thx", "hello") < 70.0);
    assert!(token_set_ratio("thx", "hi") < 70.0);
  }

  #[test]
  fn empty_input_scores_zero() {
    assert_eq!(token_set_ratio("", "hello"), 0.0);
    assert_eq!(token_set_ratio("?!", "hello"), 0.0);
  }

  #[test]
  fn best_match_prefers_first_on_ties() {
    let candidates = ["hello", "hello", "goodbye"];
    assert_eq!(best_match("hello", candidates), Some((0, 100.0)));
  }

  #[test]
  fn best_match_on_empty_table_is_none() {
    assert_eq!(best_match("hello", std::iter::empty()), None);
  }
}
