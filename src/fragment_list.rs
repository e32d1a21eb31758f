use super::*;

/// An ordered, partially-deduplicated sequence of fragments.
///
/// `I`, `L`, and `l` fragments are deduplicated by `(kind, data)`, keeping the
/// first occurrence; raw (`Other`) fragments always append, preserving
/// multiplicity, matching the reference tool's `pkg_fragment_add` behavior.
#[derive(Clone, Debug, Default)]
pub(crate) struct FragmentList {
  fragments: Vec<Fragment>,
}

impl FragmentList {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  pub(crate) fn push(&mut self, fragment: Fragment) {
    if fragment.kind == FragmentKind::Other {
      self.fragments.push(fragment);
      return;
    }

    let already_present = self
      .fragments
      .iter()
      .any(|existing| existing.kind == fragment.kind && existing.data == fragment.data);

    if !already_present {
      self.fragments.push(fragment);
    }
  }

  pub(crate) fn extend(&mut self, other: &FragmentList) {
    for fragment in &other.fragments {
      self.push(fragment.clone());
    }
  }

  pub(crate) fn iter(&self) -> impl Iterator<Item = &Fragment> {
    self.fragments.iter()
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.fragments.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn typed_fragments_dedup_to_first_occurrence() {
    let mut list = FragmentList::new();
    list.push(Fragment::new(FragmentKind::Include, "/a"));
    list.push(Fragment::new(FragmentKind::Include, "/b"));
    list.push(Fragment::new(FragmentKind::Include, "/a"));
    assert_eq!(
      list.iter().map(|f| f.data.as_str()).collect::<Vec<_>>(),
      vec!["/a", "/b"]
    );
  }

  #[test]
  fn raw_fragments_preserve_multiplicity() {
    let mut list = FragmentList::new();
    list.push(Fragment::new(FragmentKind::Other, "-DFOO"));
    list.push(Fragment::new(FragmentKind::Other, "-DFOO"));
    assert_eq!(list.iter().count(), 2);
  }

  #[test]
  fn extend_preserves_child_before_parent_order() {
    let mut child = FragmentList::new();
    child.push(Fragment::new(FragmentKind::Library, "b"));

    let mut parent = FragmentList::new();
    parent.extend(&child);
    parent.push(Fragment::new(FragmentKind::Library, "a"));

    assert_eq!(
      parent.iter().map(|f| f.data.as_str()).collect::<Vec<_>>(),
      vec!["b", "a"]
    );
  }
}
