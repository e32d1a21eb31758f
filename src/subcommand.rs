use super::*;

/// The CLI's primary mode, selected by exactly one of the flags in §6.1's
/// mode table (barring the combinable emission flags, which nest under
/// [`EmitFlags`]).
#[derive(Clone, Debug)]
pub(crate) enum Subcommand {
  Help,
  Version,
  About,
  ListAll,
  Simulate,
  AtLeastPkgconfigVersion(String),
  AtLeastVersion(String),
  ExactVersion(String),
  MaxVersion(String),
  Exists,
  Uninstalled,
  ModVersion,
  Variable(String),
  PrintVariables,
  PrintRequires { private: bool },
  Digraph,
  Emit(EmitFlags),
}

/// The combinable `--cflags*`/`--libs*` emission flags, after the
/// mode-interaction suppression rules of §6.1 have been applied.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct EmitFlags {
  cflags: bool,
  cflags_only_include: bool,
  cflags_only_other: bool,
  libs: bool,
  libs_only_libraries: bool,
  libs_only_library_paths: bool,
  libs_only_other: bool,
}

impl EmitFlags {
  #[allow(clippy::too_many_arguments)]
  pub(crate) fn new(
    cflags: bool,
    cflags_only_include: bool,
    cflags_only_other: bool,
    libs: bool,
    libs_only_libraries: bool,
    libs_only_library_paths: bool,
    libs_only_other: bool,
  ) -> Self {
    // `cflags-only-I` suppresses `cflags-only-other`.
    let cflags_only_other = cflags_only_other && !cflags_only_include;

    // `libs-only-l` suppresses `libs-only-L` and `libs-only-other`;
    // `libs-only-L` suppresses `libs-only-other`.
    let (libs_only_library_paths, libs_only_other) = if libs_only_libraries {
      (false, false)
    } else {
      (libs_only_library_paths, libs_only_other && !libs_only_library_paths)
    };

    Self {
      cflags,
      cflags_only_include,
      cflags_only_other,
      libs,
      libs_only_libraries,
      libs_only_library_paths,
      libs_only_other,
    }
  }

  pub(crate) fn wants_cflags(&self) -> bool {
    self.cflags || self.cflags_only_include || self.cflags_only_other
  }

  pub(crate) fn wants_libs(&self) -> bool {
    self.libs || self.libs_only_libraries || self.libs_only_library_paths || self.libs_only_other
  }

  /// Whether any `-only-` restriction narrows the cflags output, as opposed
  /// to plain `--cflags`, which emits everything.
  fn cflags_restricted(&self) -> bool {
    self.cflags_only_include || self.cflags_only_other
  }

  fn libs_restricted(&self) -> bool {
    self.libs_only_libraries || self.libs_only_library_paths || self.libs_only_other
  }

  /// Filters a resolved `Cflags` fragment list down to what this
  /// combination of flags requests.
  pub(crate) fn filter_cflags(&self, fragments: &FragmentList) -> FragmentList {
    let mut filtered = FragmentList::new();

    for fragment in fragments.iter() {
      let include = if !self.cflags_restricted() {
        true
      } else {
        match fragment.kind {
          FragmentKind::Include => self.cflags_only_include,
          _ => self.cflags_only_other,
        }
      };

      if include {
        filtered.push(fragment.clone());
      }
    }

    filtered
  }

  /// Filters a resolved `Libs` fragment list down to what this combination
  /// of flags requests.
  pub(crate) fn filter_libs(&self, fragments: &FragmentList) -> FragmentList {
    let mut filtered = FragmentList::new();

    for fragment in fragments.iter() {
      let include = if !self.libs_restricted() {
        true
      } else {
        match fragment.kind {
          FragmentKind::Library => self.libs_only_libraries,
          FragmentKind::LibraryPath => self.libs_only_library_paths,
          FragmentKind::Include | FragmentKind::Other => self.libs_only_other,
        }
      };

      if include {
        filtered.push(fragment.clone());
      }
    }

    filtered
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn libs_only_l_suppresses_the_rest() {
    let flags = EmitFlags::new(false, false, false, false, true, true, true);
    assert!(!flags.libs_only_library_paths);
    assert!(!flags.libs_only_other);
  }

  #[test]
  fn cflags_only_i_suppresses_other() {
    let flags = EmitFlags::new(false, true, true, false, false, false, false);
    assert!(!flags.cflags_only_other);
  }

  #[test]
  fn plain_cflags_emits_every_kind() {
    let mut fragments = FragmentList::new();
    fragments.push(Fragment::new(FragmentKind::Include, "/a"));
    fragments.push(Fragment::new(FragmentKind::Other, "-DFOO"));

    let flags = EmitFlags::new(true, false, false, false, false, false, false);
    let filtered = flags.filter_cflags(&fragments);
    assert_eq!(filtered.iter().count(), 2);
  }
}
