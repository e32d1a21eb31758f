use super::*;

/// A single dependency predicate, e.g. `foo`, `bar >= 1.2`, or `qux != 2`.
#[derive(Clone, Debug)]
pub(crate) struct Dependency {
  pub(crate) package: String,
  pub(crate) version: Option<(Comparator, Version)>,
}

impl Dependency {
  pub(crate) fn new(package: impl Into<String>) -> Self {
    Self {
      package: package.into(),
      version: None,
    }
  }

  pub(crate) fn with_version(
    package: impl Into<String>,
    comparator: Comparator,
    version: impl Into<String>,
  ) -> Self {
    Self {
      package: package.into(),
      version: Some((comparator, Version::new(version))),
    }
  }

  /// Whether `found` satisfies this predicate's version clause, if any.
  pub(crate) fn satisfied_by(&self, found: &Version) -> bool {
    match &self.version {
      None => true,
      Some((comparator, wanted)) => comparator.satisfied_by(found, wanted),
    }
  }
}

impl Display for Dependency {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match &self.version {
      None => write!(f, "{}", self.package),
      Some((comparator, version)) => write!(f, "{} {} {}", self.package, comparator, version),
    }
  }
}
