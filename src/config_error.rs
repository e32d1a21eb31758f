use super::*;

/// Errors produced while parsing process arguments into a [`Config`], before
/// any resolution is attempted.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum ConfigError {
  #[snafu(display("Please specify at least one package name on the command line."))]
  NoModulesRequested,

  #[snafu(display("malformed value `{value}` for `--{option}`"))]
  MalformedOption { option: String, value: String },

  /// Not a failure: carries help/version text clap already rendered, so
  /// `run.rs` can print it to stdout and exit `0` instead of `1`.
  #[snafu(display("{message}"))]
  Help { message: String },
}
