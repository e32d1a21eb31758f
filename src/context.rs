use super::*;

/// The state threaded through a single `run()` invocation: global variables,
/// the search path, sysroot, and the module cache. Replaces the reference
/// tool's process-wide globals with an explicit value (see §9 Design Notes).
#[derive(Debug)]
pub(crate) struct Context {
  pub(crate) global: TupleList,
  pub(crate) search_path: Vec<Utf8PathBuf>,
  pub(crate) sysroot: Option<Utf8PathBuf>,
  pub(crate) system_includedir: String,
  pub(crate) system_libdir: String,
  pub(crate) flags: ResolveFlags,
  pub(crate) cache: Cache,
}

impl Context {
  /// Builds a context from environment variables and CLI-derived flags,
  /// mirroring `main()`'s environment handling in the reference tool.
  pub(crate) fn new(flags: ResolveFlags, defines: &BTreeMap<String, String>) -> Self {
    let mut global = TupleList::new();

    let top_builddir = env::var("PKG_CONFIG_TOP_BUILD_DIR").unwrap_or_else(|_| "$(top_builddir)".to_owned());
    global.insert("pc_top_builddir", top_builddir);

    let sysroot = env::var("PKG_CONFIG_SYSROOT_DIR").ok().map(Utf8PathBuf::from);
    global.insert(
      "pc_sysrootdir",
      sysroot
        .as_ref()
        .map_or_else(|| "/".to_owned(), |path| path.to_string()),
    );

    for (key, value) in defines {
      global.insert(key.clone(), value.clone());
    }

    Context {
      global,
      search_path: SearchPath::build(flags.env_only),
      sysroot,
      system_includedir: "/usr/include".to_owned(),
      system_libdir: "/usr/lib".to_owned(),
      flags,
      cache: Cache::new(),
    }
  }

  /// Whether uninstalled descriptor variants should be attempted.
  pub(crate) fn uninstalled_allowed(&self) -> bool {
    !self.flags.no_uninstalled && env::var_os("PKG_CONFIG_DISABLE_UNINSTALLED").is_none()
  }
}
