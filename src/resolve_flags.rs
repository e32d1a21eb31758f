use super::*;

/// Traversal policy, threaded through every resolver call. See §4.5.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ResolveFlags {
  pub(crate) search_private: bool,
  pub(crate) merge_private_fragments: bool,
  pub(crate) env_only: bool,
  pub(crate) no_uninstalled: bool,
  pub(crate) skip_conflicts: bool,
  pub(crate) skip_root_virtual: bool,
}

impl ResolveFlags {
  /// `--static`: be aggressive for static linking.
  pub(crate) fn with_static(mut self, enabled: bool) -> Self {
    if enabled {
      self.search_private = true;
      self.merge_private_fragments = true;
    }
    self
  }
}
