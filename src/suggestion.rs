use super::*;

/// Formats an optional "did you mean" suggestion as an error message suffix.
pub(crate) fn suffix(suggestion: &Option<String>) -> String {
  match suggestion {
    Some(candidate) => format!(", did you mean `{candidate}`?"),
    None => String::new(),
  }
}

/// The maximum edit distance at which a candidate module id is considered a
/// plausible typo of the requested name.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Picks the closest candidate to `name` by edit distance, if any candidate
/// is close enough to be a useful suggestion.
pub(crate) fn closest<'a>(name: &str, candidates: impl Iterator<Item = &'a str>) -> Option<String> {
  candidates
    .map(|candidate| (candidate, edit_distance::edit_distance(name, candidate)))
    .filter(|(_, distance)| *distance <= MAX_SUGGESTION_DISTANCE)
    .min_by_key(|(_, distance)| *distance)
    .map(|(candidate, _)| candidate.to_owned())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn finds_close_candidate() {
    let candidates = vec!["openssl", "zlib", "glib-2.0"];
    assert_eq!(
      closest("opensssl", candidates.into_iter()),
      Some("openssl".to_owned())
    );
  }

  #[test]
  fn ignores_distant_candidates() {
    let candidates = vec!["zlib"];
    assert_eq!(closest("openssl", candidates.into_iter()), None);
  }

  #[test]
  fn suffix_formats_when_present() {
    assert_eq!(suffix(&Some("foo".to_owned())), ", did you mean `foo`?");
    assert_eq!(suffix(&None), "");
  }
}
