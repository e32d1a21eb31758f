use super::*;

/// An ordered `key -> value` store.
///
/// Declaration order is preserved for listing operations (`--print-variables`).
/// Lookup scans from the end so that a later redefinition of the same key
/// shadows an earlier one, matching the reference tool's "last definition
/// wins" interpolation behavior.
#[derive(Clone, Debug, Default)]
pub(crate) struct TupleList {
  tuples: Vec<Tuple>,
}

impl TupleList {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
    self.tuples.push(Tuple::new(key, value));
  }

  pub(crate) fn get(&self, key: &str) -> Option<&str> {
    self
      .tuples
      .iter()
      .rev()
      .find(|tuple| tuple.key == key)
      .map(|tuple| tuple.value.as_str())
  }

  pub(crate) fn iter(&self) -> impl Iterator<Item = &Tuple> {
    self.tuples.iter()
  }

  /// Keys in declaration order, without duplicates, last-wins discarded.
  pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
    let mut seen = BTreeSet::new();
    self.tuples.iter().filter_map(move |tuple| {
      if seen.insert(tuple.key.as_str()) {
        Some(tuple.key.as_str())
      } else {
        None
      }
    })
  }
}
