use super::*;

/// The `pkg-config` protocol version this implementation reports for
/// `--version` and checks against for `--atleast-pkgconfig-version`.
pub(crate) const PKGCONFIG_PROTOCOL_VERSION: &str = "0.29.2";

/// Parsed process arguments, per §4.7 and §6.1. Every derived-flag rule
/// (print-errors defaulting, `--static` implying private-dependency
/// resolution, environment-driven flag promotion) is applied once, here,
/// before resolution begins.
#[derive(Debug)]
pub(crate) struct Config {
  pub(crate) subcommand: Subcommand,
  pub(crate) requests: Vec<String>,
  pub(crate) flags: ResolveFlags,
  pub(crate) maxdepth: usize,
  pub(crate) keep_system_cflags: bool,
  pub(crate) keep_system_libs: bool,
  pub(crate) defines: BTreeMap<String, String>,
  pub(crate) errors_to_stdout: bool,
  pub(crate) silence_errors: bool,
  pub(crate) print_errors: bool,
}

impl Config {
  pub(crate) fn from_args<I, T>(args: I) -> ConfigResult<Self>
  where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
  {
    let matches = match app().get_matches_from_safe(args) {
      Ok(matches) => matches,
      Err(error)
        if matches!(
          error.kind,
          clap::ErrorKind::HelpDisplayed | clap::ErrorKind::VersionDisplayed
        ) =>
      {
        return Err(ConfigError::Help { message: error.message });
      }
      Err(error) => {
        return Err(ConfigError::MalformedOption {
          option: "arguments".to_owned(),
          value: error.message,
        })
      }
    };

    let defines = parse_defines(&matches)?;

    let maxdepth = match matches.value_of("maximum-traverse-depth") {
      Some(value) => value.parse().map_err(|_| ConfigError::MalformedOption {
        option: "maximum-traverse-depth".to_owned(),
        value: value.to_owned(),
      })?,
      None => usize::MAX,
    };

    let env_only = matches.is_present("env-only");
    let no_uninstalled = matches.is_present("no-uninstalled") || env::var_os("PKG_CONFIG_DISABLE_UNINSTALLED").is_some();
    let ignore_conflicts = matches.is_present("ignore-conflicts") || env::var_os("PKG_CONFIG_IGNORE_CONFLICTS").is_some();
    let is_static = matches.is_present("static");

    let flags = ResolveFlags {
      search_private: is_static,
      merge_private_fragments: is_static,
      env_only,
      no_uninstalled,
      skip_conflicts: ignore_conflicts,
      skip_root_virtual: true,
    }
    .with_static(is_static);

    let keep_system_cflags = matches.is_present("keep-system-cflags") || env::var_os("PKG_CONFIG_ALLOW_SYSTEM_CFLAGS").is_some();
    let keep_system_libs = matches.is_present("keep-system-libs") || env::var_os("PKG_CONFIG_ALLOW_SYSTEM_LIBS").is_some();

    // Absent `--print-errors` and absent `PKG_CONFIG_DEBUG_SPEW`: errors are
    // silenced unless the caller explicitly asked to see them.
    let print_errors = matches.is_present("print-errors") || env::var_os("PKG_CONFIG_DEBUG_SPEW").is_some();

    let requests = matches
      .values_of("package")
      .map(|values| values.map(str::to_owned).collect())
      .unwrap_or_default();

    let subcommand = Self::subcommand(&matches);

    Ok(Config {
      subcommand,
      requests,
      flags,
      maxdepth,
      keep_system_cflags,
      keep_system_libs,
      defines,
      errors_to_stdout: matches.is_present("errors-to-stdout"),
      silence_errors: matches.is_present("silence-errors"),
      print_errors,
    })
  }

  fn subcommand(matches: &clap::ArgMatches) -> Subcommand {
    if matches.is_present("version") {
      return Subcommand::Version;
    }
    if matches.is_present("about") {
      return Subcommand::About;
    }
    if matches.is_present("list-all") {
      return Subcommand::ListAll;
    }
    if matches.is_present("simulate") {
      return Subcommand::Simulate;
    }
    if let Some(version) = matches.value_of("atleast-pkgconfig-version") {
      return Subcommand::AtLeastPkgconfigVersion(version.to_owned());
    }
    if let Some(version) = matches.value_of("atleast-version") {
      return Subcommand::AtLeastVersion(version.to_owned());
    }
    if let Some(version) = matches.value_of("exact-version") {
      return Subcommand::ExactVersion(version.to_owned());
    }
    if let Some(version) = matches.value_of("max-version") {
      return Subcommand::MaxVersion(version.to_owned());
    }
    if matches.is_present("exists") {
      return Subcommand::Exists;
    }
    if matches.is_present("uninstalled") {
      return Subcommand::Uninstalled;
    }
    if matches.is_present("modversion") {
      return Subcommand::ModVersion;
    }
    if let Some(name) = matches.value_of("variable") {
      return Subcommand::Variable(name.to_owned());
    }
    if matches.is_present("print-variables") {
      return Subcommand::PrintVariables;
    }
    if matches.is_present("print-requires-private") {
      return Subcommand::PrintRequires { private: true };
    }
    if matches.is_present("print-requires") {
      return Subcommand::PrintRequires { private: false };
    }
    if matches.is_present("digraph") {
      return Subcommand::Digraph;
    }

    Subcommand::Emit(EmitFlags::new(
      matches.is_present("cflags"),
      matches.is_present("cflags-only-I"),
      matches.is_present("cflags-only-other"),
      matches.is_present("libs"),
      matches.is_present("libs-only-l"),
      matches.is_present("libs-only-L"),
      matches.is_present("libs-only-other"),
    ))
  }
}

fn parse_defines(matches: &clap::ArgMatches) -> ConfigResult<BTreeMap<String, String>> {
  let mut defines = BTreeMap::new();

  for raw in matches.values_of("define-variable").into_iter().flatten() {
    let (key, value) = raw.split_once('=').ok_or_else(|| ConfigError::MalformedOption {
      option: "define-variable".to_owned(),
      value: raw.to_owned(),
    })?;

    defines.insert(key.to_owned(), value.to_owned());
  }

  Ok(defines)
}

fn app() -> clap::App<'static, 'static> {
  use clap::Arg;

  clap::App::new("pkgconf")
    .about("A compatibility-preserving implementation of the pkg-config dependency resolver")
    .setting(clap::AppSettings::DisableVersion)
    .arg(Arg::with_name("package").multiple(true).index(1))
    .arg(Arg::with_name("version").long("version"))
    .arg(Arg::with_name("about").long("about"))
    .arg(Arg::with_name("list-all").long("list-all"))
    .arg(Arg::with_name("simulate").long("simulate"))
    .arg(Arg::with_name("exists").long("exists"))
    .arg(Arg::with_name("uninstalled").long("uninstalled"))
    .arg(Arg::with_name("modversion").long("modversion"))
    .arg(
      Arg::with_name("atleast-pkgconfig-version")
        .long("atleast-pkgconfig-version")
        .takes_value(true),
    )
    .arg(Arg::with_name("atleast-version").long("atleast-version").takes_value(true))
    .arg(Arg::with_name("exact-version").long("exact-version").takes_value(true))
    .arg(Arg::with_name("max-version").long("max-version").takes_value(true))
    .arg(Arg::with_name("variable").long("variable").takes_value(true))
    .arg(Arg::with_name("print-variables").long("print-variables"))
    .arg(Arg::with_name("print-requires").long("print-requires"))
    .arg(Arg::with_name("print-requires-private").long("print-requires-private"))
    .arg(Arg::with_name("digraph").long("digraph"))
    .arg(Arg::with_name("cflags").long("cflags"))
    .arg(Arg::with_name("cflags-only-I").long("cflags-only-I"))
    .arg(Arg::with_name("cflags-only-other").long("cflags-only-other"))
    .arg(Arg::with_name("libs").long("libs"))
    .arg(Arg::with_name("libs-only-L").long("libs-only-L"))
    .arg(Arg::with_name("libs-only-l").long("libs-only-l"))
    .arg(Arg::with_name("libs-only-other").long("libs-only-other"))
    .arg(Arg::with_name("static").long("static"))
    .arg(Arg::with_name("env-only").long("env-only"))
    .arg(Arg::with_name("no-uninstalled").long("no-uninstalled"))
    .arg(Arg::with_name("ignore-conflicts").long("ignore-conflicts"))
    .arg(
      Arg::with_name("maximum-traverse-depth")
        .long("maximum-traverse-depth")
        .takes_value(true),
    )
    .arg(Arg::with_name("keep-system-cflags").long("keep-system-cflags"))
    .arg(Arg::with_name("keep-system-libs").long("keep-system-libs"))
    .arg(
      Arg::with_name("define-variable")
        .long("define-variable")
        .takes_value(true)
        .multiple(true)
        .number_of_values(1),
    )
    .arg(Arg::with_name("errors-to-stdout").long("errors-to-stdout"))
    .arg(Arg::with_name("silence-errors").long("silence-errors"))
    .arg(Arg::with_name("print-errors").long("print-errors"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn static_implies_private_search_and_merge() {
    let config = Config::from_args(["pkgconf", "--static", "--libs", "foo"]).unwrap();
    assert!(config.flags.search_private);
    assert!(config.flags.merge_private_fragments);
  }

  #[test]
  fn define_variable_is_collected() {
    let config = Config::from_args(["pkgconf", "--define-variable=prefix=/opt", "--cflags", "foo"]).unwrap();
    assert_eq!(config.defines.get("prefix"), Some(&"/opt".to_owned()));
  }

  #[test]
  fn emit_flags_suppress_according_to_rules() {
    let config = Config::from_args(["pkgconf", "--libs-only-l", "--libs-only-other", "foo"]).unwrap();
    match config.subcommand {
      Subcommand::Emit(emit) => {
        assert!(emit.wants_libs());
        let mut fragments = FragmentList::new();
        fragments.push(Fragment::new(FragmentKind::Other, "-pthread"));
        fragments.push(Fragment::new(FragmentKind::Library, "foo"));
        let filtered = emit.filter_libs(&fragments);
        assert_eq!(filtered.iter().map(|f| f.data.as_str()).collect::<Vec<_>>(), vec!["foo"]);
      }
      _ => panic!("expected Emit subcommand"),
    }
  }

  #[test]
  fn malformed_define_variable_is_an_error() {
    assert!(Config::from_args(["pkgconf", "--define-variable=oops", "foo"]).is_err());
  }
}
