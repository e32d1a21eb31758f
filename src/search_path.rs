use super::*;

/// The ordered list of directories consulted by the locator.
pub(crate) struct SearchPath;

const BUILTIN_SEARCH_DIRS: [&str; 2] = ["/usr/lib/pkgconfig", "/usr/share/pkgconfig"];

impl SearchPath {
  /// Builds the search path per §4.2:
  ///
  /// 1. `env-only` set: only `PKG_CONFIG_PATH`.
  /// 2. Otherwise: `PKG_CONFIG_PATH`, then `PKG_CONFIG_LIBDIR` if set,
  ///    else the compiled-in built-in directories.
  pub(crate) fn build(env_only: bool) -> Vec<Utf8PathBuf> {
    let mut dirs: Vec<Utf8PathBuf> = split_path_var("PKG_CONFIG_PATH");

    if env_only {
      return dirs;
    }

    match env::var_os("PKG_CONFIG_LIBDIR") {
      Some(_) => dirs.extend(split_path_var("PKG_CONFIG_LIBDIR")),
      None => dirs.extend(BUILTIN_SEARCH_DIRS.iter().map(Utf8PathBuf::from)),
    }

    dirs
  }
}

fn split_path_var(name: &str) -> Vec<Utf8PathBuf> {
  env::var(name)
    .ok()
    .map(|value| {
      value
        .split(':')
        .filter(|entry| !entry.is_empty())
        .map(Utf8PathBuf::from)
        .collect()
    })
    .unwrap_or_default()
}
