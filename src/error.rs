use super::*;

/// Every failure kind the resolver can produce, mapped 1:1 to exit code `1`
/// by `run.rs`.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum Error {
  #[snafu(display("{path}:{line}: {message}"))]
  ParseError {
    path: Utf8PathBuf,
    line: usize,
    message: String,
  },

  #[snafu(display("Package `{name}` was not found{}", suggestion::suffix(suggestion)))]
  UnknownModule {
    name: String,
    suggestion: Option<String>,
  },

  #[snafu(display(
    "Package `{package}` requires version {comparator} {wanted} of itself, found {found}"
  ))]
  VersionMismatch {
    package: String,
    comparator: Comparator,
    wanted: Version,
    found: Version,
  },

  #[snafu(display(
    "Package `{package}` conflicts with `{conflicting}` ({comparator} {version}) which is also in the dependency graph"
  ))]
  Conflict {
    package: String,
    conflicting: String,
    comparator: Comparator,
    version: Version,
  },

  #[snafu(display("{path}: variable expansion exceeded maximum depth while expanding `{key}`"))]
  CyclicExpansion { path: Utf8PathBuf, key: String },

  #[snafu(display("{message}"))]
  ArgumentError { message: String },

  #[snafu(display("could not read `{path}`: {source}"))]
  Io {
    path: Utf8PathBuf,
    source: std::io::Error,
  },

  #[snafu(display("{source}"))]
  Config { source: ConfigError },
}

impl From<ConfigError> for Error {
  fn from(source: ConfigError) -> Self {
    Error::Config { source }
  }
}
