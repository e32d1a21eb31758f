use super::*;

/// Wires [`Config`] parsing, [`Context`] construction, resolution, and
/// output together, mirroring the reference tool's `main()`. The only place
/// in the crate that touches stdout/stderr directly.
pub fn run() -> i32 {
  let config = match Config::from_args(env::args_os()) {
    Ok(config) => config,
    Err(ConfigError::Help { message }) => {
      println!("{message}");
      return 0;
    }
    Err(error) => {
      eprintln!("{error}");
      return libc::EXIT_FAILURE;
    }
  };

  match execute(&config) {
    Ok(()) => 0,
    Err(error) => {
      report_error(&config, &error);
      libc::EXIT_FAILURE
    }
  }
}

fn report_error(config: &Config, error: &Error) {
  if config.silence_errors || !config.print_errors {
    return;
  }

  if config.errors_to_stdout {
    println!("{error}");
  } else {
    eprintln!("{error}");
  }
}

fn execute(config: &Config) -> ResolveResult<()> {
  let context = Context::new(config.flags, &config.defines);

  match &config.subcommand {
    Subcommand::Help => Ok(()),

    Subcommand::Version => {
      println!("{}", config::PKGCONFIG_PROTOCOL_VERSION);
      Ok(())
    }

    Subcommand::About => {
      println!("A compatibility-preserving implementation of the pkg-config dependency resolver");
      Ok(())
    }

    Subcommand::ListAll => {
      for (id, name, description) in Locator::list_all(&context)? {
        println!("{}", Output::list_all_line(&id, &name, &description));
      }
      Ok(())
    }

    Subcommand::Simulate => {
      let world = World::build(&config.requests)?;
      for id in Resolver::simulate(&world, config.maxdepth, config.flags, &context)? {
        println!("{id}");
      }
      Ok(())
    }

    Subcommand::AtLeastPkgconfigVersion(wanted) => {
      let supported = Version::new(config::PKGCONFIG_PROTOCOL_VERSION);
      let wanted = Version::new(wanted.clone());
      if supported.compare(&wanted) == Ordering::Less {
        return Err(Error::VersionMismatch {
          package: "pkg-config".to_owned(),
          comparator: Comparator::GreaterEqual,
          wanted,
          found: supported,
        });
      }
      Ok(())
    }

    Subcommand::AtLeastVersion(wanted) => check_module_version(config, &context, wanted, Comparator::GreaterEqual),
    Subcommand::ExactVersion(wanted) => check_module_version(config, &context, wanted, Comparator::Equal),
    Subcommand::MaxVersion(wanted) => check_module_version(config, &context, wanted, Comparator::LessEqual),

    Subcommand::Exists => {
      let world = World::build(&config.requests)?;
      Resolver::validate(&world, config.maxdepth, config.flags, &context)
    }

    Subcommand::Uninstalled => {
      let world = World::build(&config.requests)?;
      if !Resolver::any_uninstalled(&world, config.maxdepth, config.flags, &context)? {
        return Err(Error::ArgumentError {
          message: "no uninstalled packages found in the dependency graph".to_owned(),
        });
      }
      Ok(())
    }

    Subcommand::ModVersion => {
      let world = World::build(&config.requests)?;
      for dependency in &world.requires {
        let module = Locator::resolve(&dependency.package, &context)?;
        println!("{}", module.version);
      }
      Ok(())
    }

    Subcommand::Variable(name) => {
      let world = World::build(&config.requests)?;
      let value = Resolver::variable(&world, name, config.maxdepth, config.flags, &context)?;
      println!("{value}");
      Ok(())
    }

    Subcommand::PrintVariables => {
      let world = World::build(&config.requests)?;
      for line in Resolver::print_variables(&world, config.maxdepth, config.flags, &context)? {
        println!("{line}");
      }
      Ok(())
    }

    Subcommand::PrintRequires { private } => {
      let world = World::build(&config.requests)?;
      for line in Resolver::print_requires(&world, *private, &context)? {
        println!("{line}");
      }
      Ok(())
    }

    Subcommand::Digraph => {
      let world = World::build(&config.requests)?;
      let (nodes, edges) = Resolver::digraph(&world, config.maxdepth, config.flags, &context)?;
      println!("{}", Digraph::render(&nodes, &edges));
      Ok(())
    }

    Subcommand::Emit(emit) => {
      let world = World::build(&config.requests)?;

      if !emit.wants_cflags() && !emit.wants_libs() {
        return Resolver::validate(&world, config.maxdepth, config.flags, &context);
      }

      let mut line = String::new();

      if emit.wants_cflags() {
        let cflags = Resolver::cflags(&world, config.maxdepth, config.flags, &context)?;
        let filtered = emit.filter_cflags(&cflags);
        line.push_str(&Output::fragment_line(&filtered, &context, config.keep_system_cflags));
      }

      if emit.wants_libs() {
        let libs = Resolver::libs(&world, config.maxdepth, config.flags, &context)?;
        let filtered = emit.filter_libs(&libs);
        line.push_str(&Output::fragment_line(&filtered, &context, config.keep_system_libs));
      }

      println!("{line}");
      Ok(())
    }
  }
}

fn check_module_version(config: &Config, context: &Context, wanted: &str, comparator: Comparator) -> ResolveResult<()> {
  let world = World::build(&config.requests)?;

  for dependency in &world.requires {
    let module = Locator::resolve(&dependency.package, context)?;
    let wanted_version = Version::new(wanted.to_owned());

    if !comparator.satisfied_by(&module.version, &wanted_version) {
      return Err(Error::VersionMismatch {
        package: module.id.clone(),
        comparator,
        wanted: wanted_version,
        found: module.version.clone(),
      });
    }
  }

  Ok(())
}
