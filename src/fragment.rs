use super::*;

/// The type tag of a compiler/linker fragment, as used by the reference tool's
/// single-character fragment kind (`'I'`, `'L'`, `'l'`, or `'\0'` for raw).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub(crate) enum FragmentKind {
  Include,
  LibraryPath,
  Library,
  /// Anything that didn't match `-I`, `-L`, or `-l`; emitted verbatim.
  Other,
}

impl FragmentKind {
  /// The single-character flag this kind is rendered with, or `None` for
  /// raw/other fragments, which are emitted verbatim.
  pub(crate) fn flag_char(self) -> Option<char> {
    match self {
      FragmentKind::Include => Some('I'),
      FragmentKind::LibraryPath => Some('L'),
      FragmentKind::Library => Some('l'),
      FragmentKind::Other => None,
    }
  }

  pub(crate) fn classify(token: &str) -> (FragmentKind, Option<&str>) {
    if let Some(rest) = token.strip_prefix("-I") {
      (FragmentKind::Include, Some(rest))
    } else if let Some(rest) = token.strip_prefix("-L") {
      (FragmentKind::LibraryPath, Some(rest))
    } else if let Some(rest) = token.strip_prefix("-l") {
      (FragmentKind::Library, Some(rest))
    } else {
      (FragmentKind::Other, None)
    }
  }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Fragment {
  pub(crate) kind: FragmentKind,
  pub(crate) data: String,
}

impl Fragment {
  pub(crate) fn new(kind: FragmentKind, data: impl Into<String>) -> Self {
    Self {
      kind,
      data: data.into(),
    }
  }

  /// Whether this fragment should be suppressed as a system directory entry.
  ///
  /// Matches the reference tool's asymmetry: fragment de-duplication is
  /// case-sensitive, but system-directory detection is case-insensitive.
  pub(crate) fn is_system_dir(&self, system_includedir: &str, system_libdir: &str) -> bool {
    match self.kind {
      FragmentKind::Include => self.data.eq_ignore_ascii_case(system_includedir),
      FragmentKind::LibraryPath => self.data.eq_ignore_ascii_case(system_libdir),
      FragmentKind::Library | FragmentKind::Other => false,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn classify_include() {
    assert_eq!(
      FragmentKind::classify("-I/opt/foo/include"),
      (FragmentKind::Include, Some("/opt/foo/include"))
    );
  }

  #[test]
  fn classify_raw() {
    assert_eq!(FragmentKind::classify("-DFOO"), (FragmentKind::Other, None));
  }

  #[test]
  fn system_dir_is_case_insensitive() {
    let fragment = Fragment::new(FragmentKind::Include, "/USR/Include");
    assert!(fragment.is_system_dir("/usr/include", "/usr/lib"));
  }
}
