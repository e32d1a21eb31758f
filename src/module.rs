use super::*;

/// The in-memory form of a loaded `.pc` descriptor.
#[derive(Clone, Debug)]
pub(crate) struct Module {
  /// Stable identifier: the filename stem used to key the resolution cache.
  pub(crate) id: String,
  pub(crate) name: String,
  pub(crate) description: String,
  pub(crate) url: String,
  pub(crate) version: Version,
  pub(crate) uninstalled: bool,
  pub(crate) path: Utf8PathBuf,
  pub(crate) tuples: TupleList,
  pub(crate) requires: Vec<Dependency>,
  pub(crate) requires_private: Vec<Dependency>,
  pub(crate) conflicts: Vec<Dependency>,
  pub(crate) cflags: FragmentList,
  pub(crate) libs: FragmentList,
  pub(crate) libs_private: FragmentList,
}

impl Module {
  /// Builds the synthetic root module. It owns no tuples and no fragments of
  /// its own; its `requires` is the user's parsed request list.
  pub(crate) fn world(requires: Vec<Dependency>) -> Self {
    Module {
      id: String::new(),
      name: String::new(),
      description: String::new(),
      url: String::new(),
      version: Version::new(""),
      uninstalled: false,
      path: Utf8PathBuf::new(),
      tuples: TupleList::new(),
      requires,
      requires_private: Vec::new(),
      conflicts: Vec::new(),
      cflags: FragmentList::new(),
      libs: FragmentList::new(),
      libs_private: FragmentList::new(),
    }
  }

  pub(crate) fn is_world(&self) -> bool {
    self.id.is_empty() && self.path.as_str().is_empty()
  }
}
