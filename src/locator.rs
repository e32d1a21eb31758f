use super::*;

/// Resolves a module name to a descriptor path and loads it. See §4.2.
pub(crate) struct Locator;

/// Joins `dir` and `name`, lexically cleaning the result so search-path
/// entries like `/usr/lib/pkgconfig/../pkgconfig` compare and display sanely.
fn clean_join(dir: &Utf8Path, name: &str) -> Utf8PathBuf {
  let cleaned = dir.join(name).as_std_path().lexiclean();
  Utf8PathBuf::from_path_buf(cleaned).unwrap_or_else(|path| Utf8PathBuf::from(path.to_string_lossy().into_owned()))
}

impl Locator {
  /// Locates and loads the module named `name`, consulting the cache first.
  pub(crate) fn resolve(name: &str, context: &Context) -> ResolveResult<Rc<Module>> {
    if let Some(cached) = context.cache.get(name) {
      return Ok(cached);
    }

    let (path, id, uninstalled) = Self::find(name, context)?;
    let module = Descriptor::load(&path, &id, uninstalled, &context.global)?;
    Ok(context.cache.insert(module))
  }

  /// Finds the descriptor for `name` without loading it, returning its path,
  /// derived id, and whether it was an `-uninstalled` variant.
  fn find(name: &str, context: &Context) -> ResolveResult<(Utf8PathBuf, String, bool)> {
    if name.contains('/') {
      let path = Utf8PathBuf::from(name);
      if path.is_file() {
        let id = path
          .file_stem()
          .map(str::to_owned)
          .unwrap_or_else(|| name.to_owned());
        return Ok((path, id, false));
      }
    }

    let try_uninstalled = context.uninstalled_allowed();

    for dir in &context.search_path {
      if try_uninstalled {
        let uninstalled_path = clean_join(dir, &format!("{name}-uninstalled.pc"));
        if uninstalled_path.is_file() {
          return Ok((uninstalled_path, name.to_owned(), true));
        }
      }

      let path = clean_join(dir, &format!("{name}.pc"));
      if path.is_file() {
        return Ok((path, name.to_owned(), false));
      }
    }

    let suggestion = suggestion::closest(name, Self::visible_ids(context).iter().map(String::as_str));

    Err(Error::UnknownModule {
      name: name.to_owned(),
      suggestion,
    })
  }

  /// All module ids visible on the search path, for `--list-all` and for
  /// "did you mean" suggestions.
  pub(crate) fn visible_ids(context: &Context) -> Vec<String> {
    let mut ids = Vec::new();

    for dir in &context.search_path {
      let Ok(entries) = fs::read_dir(dir) else {
        continue;
      };

      for entry in entries.flatten() {
        let Ok(file_name) = entry.file_name().into_string() else {
          continue;
        };
        if let Some(id) = file_name.strip_suffix(".pc") {
          ids.push(id.to_owned());
        }
      }
    }

    ids
  }

  /// Enumerates `(id, name, description)` for every descriptor on the search
  /// path, skipping Cflags/Libs expansion as the reference tool does.
  pub(crate) fn list_all(context: &Context) -> ResolveResult<Vec<(String, String, String)>> {
    let mut entries = Vec::new();
    let mut seen = BTreeSet::new();

    for dir in &context.search_path {
      let Ok(read_dir) = fs::read_dir(dir) else {
        continue;
      };

      for entry in read_dir.flatten() {
        let Ok(file_name) = entry.file_name().into_string() else {
          continue;
        };
        let Some(id) = file_name.strip_suffix(".pc") else {
          continue;
        };
        if id.ends_with("-uninstalled") || !seen.insert(id.to_owned()) {
          continue;
        }

        let path = clean_join(dir, &file_name);
        let module = Descriptor::load(&path, id, false, &context.global)?;
        entries.push((module.id.clone(), module.name.clone(), module.description.clone()));
      }
    }

    Ok(entries)
  }
}
