use super::*;

/// Reads one `.pc` file into a [`Module`]. See §4.1.
pub(crate) struct Descriptor;

/// Variable names match `[A-Za-z_][A-Za-z0-9_.]*`.
fn is_valid_variable_name(name: &str) -> bool {
  let mut chars = name.chars();
  match chars.next() {
    Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
    _ => return false,
  }
  chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

impl Descriptor {
  /// Loads and parses the descriptor at `path`, expanding `Cflags`/`Libs`
  /// into fragment lists and `Requires`/`Requires.private`/`Conflicts` into
  /// dependency lists. `global` supplies the fallback scope for expansion.
  pub(crate) fn load(path: &Utf8Path, id: &str, uninstalled: bool, global: &TupleList) -> ResolveResult<Module> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
      path: path.to_owned(),
      source,
    })?;

    Self::parse(&contents, path, id, uninstalled, global)
  }

  pub(crate) fn parse(
    contents: &str,
    path: &Utf8Path,
    id: &str,
    uninstalled: bool,
    global: &TupleList,
  ) -> ResolveResult<Module> {
    let mut tuples = TupleList::new();
    let mut name = String::new();
    let mut description = String::new();
    let mut url = String::new();
    let mut version = String::new();
    let mut requires_raw = String::new();
    let mut requires_private_raw = String::new();
    let mut conflicts_raw = String::new();
    let mut cflags_raw = String::new();
    let mut libs_raw = String::new();
    let mut libs_private_raw = String::new();

    for (number, line) in contents.lines().enumerate() {
      let line_number = number + 1;
      let trimmed = line.trim();

      if trimmed.is_empty() || trimmed.starts_with('#') {
        continue;
      }

      if let Some((key, raw_value)) = split_directive(trimmed) {
        let value = expand(raw_value.trim(), &tuples, global, path)?;

        match key {
          "Name" => name = value,
          "Description" => description = value,
          "URL" => url = value,
          "Version" => version = value,
          "Requires" => requires_raw = value,
          "Requires.private" => requires_private_raw = value,
          "Conflicts" => conflicts_raw = value,
          "Cflags" => cflags_raw = value,
          "Libs" => libs_raw = value,
          "Libs.private" => libs_private_raw = value,
          other => tuples.insert(other, value),
        }
      } else if let Some((key, raw_value)) = split_assignment(trimmed) {
        if !is_valid_variable_name(key) {
          return Err(Error::ParseError {
            path: path.to_owned(),
            line: line_number,
            message: format!("invalid variable name `{key}`"),
          });
        }

        let value = expand(raw_value.trim(), &tuples, global, path)?;
        tuples.insert(key, value);
      } else {
        return Err(Error::ParseError {
          path: path.to_owned(),
          line: line_number,
          message: format!("unrecognized descriptor line: `{trimmed}`"),
        });
      }
    }

    Ok(Module {
      id: id.to_owned(),
      name,
      description,
      url,
      version: Version::new(version),
      uninstalled,
      path: path.to_owned(),
      cflags: fragments_from(&cflags_raw, path)?,
      libs: fragments_from(&libs_raw, path)?,
      libs_private: fragments_from(&libs_private_raw, path)?,
      requires: DependencyParser::parse(&requires_raw)?,
      requires_private: DependencyParser::parse(&requires_private_raw)?,
      conflicts: DependencyParser::parse(&conflicts_raw)?,
      tuples,
    })
  }
}

/// Splits a `Key: value` directive line. Only known descriptor keys (the
/// Capitalized, possibly dotted, set from §4.1) are treated as directives;
/// everything else falls through to assignment parsing.
fn split_directive(line: &str) -> Option<(&str, &str)> {
  const DIRECTIVES: &[&str] = &[
    "Name",
    "Description",
    "URL",
    "Version",
    "Requires.private",
    "Requires",
    "Conflicts",
    "Cflags",
    "Libs.private",
    "Libs",
  ];

  let (candidate, rest) = line.split_once(':')?;
  let candidate = candidate.trim();

  DIRECTIVES
    .iter()
    .find(|known| **known == candidate)
    .map(|known| (*known, rest))
}

fn split_assignment(line: &str) -> Option<(&str, &str)> {
  line.split_once('=')
}

fn fragments_from(raw: &str, path: &Utf8Path) -> ResolveResult<FragmentList> {
  let mut list = FragmentList::new();

  let mut tokens = split_shell_words(raw, path)?.into_iter().peekable();

  while let Some(token) = tokens.next() {
    let (kind, data) = FragmentKind::classify(&token);

    match (kind, data) {
      (FragmentKind::Other, _) => list.push(Fragment::new(FragmentKind::Other, token)),
      (kind, Some(data)) if !data.is_empty() => list.push(Fragment::new(kind, data.to_owned())),
      (kind, _) => {
        // Bare `-I`/`-L`/`-l` with the value as a separate following token.
        if let Some(next) = tokens.next() {
          list.push(Fragment::new(kind, next));
        }
      }
    }
  }

  Ok(list)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(contents: &str) -> Module {
    let global = TupleList::new();
    Descriptor::parse(contents, Utf8Path::new("foo.pc"), "foo", false, &global).unwrap()
  }

  #[test]
  fn parses_basic_fields() {
    let module = parse("Name: foo\nVersion: 1.0\nCflags: -I/opt/foo/include -DFOO\n");
    assert_eq!(module.name, "foo");
    assert_eq!(module.version.as_str(), "1.0");
    let data: Vec<_> = module.cflags.iter().map(|f| f.data.as_str()).collect();
    assert_eq!(data, vec!["/opt/foo/include", "FOO"]);
  }

  #[test]
  fn expands_variables_defined_earlier_in_the_file() {
    let module = parse("prefix=/usr\nincludedir=${prefix}/include\nCflags: -I${includedir}\n");
    assert_eq!(module.tuples.get("includedir"), Some("/usr/include"));
    let fragment = module.cflags.iter().next().unwrap();
    assert_eq!(fragment.data, "/usr/include");
  }

  #[test]
  fn requires_are_parsed_into_dependencies() {
    let module = parse("Requires: bar >= 2.0, baz\n");
    assert_eq!(module.requires.len(), 2);
    assert_eq!(module.requires[0].package, "bar");
    assert_eq!(module.requires[1].package, "baz");
  }

  #[test]
  fn comments_and_blank_lines_are_ignored() {
    let module = parse("# a comment\n\nName: foo\n");
    assert_eq!(module.name, "foo");
  }

  #[test]
  fn unrecognized_directive_is_stored_as_a_tuple() {
    let module = parse("Foo: bar\n");
    assert_eq!(module.tuples.get("Foo"), Some("bar"));
  }

  #[test]
  fn invalid_variable_name_is_an_error() {
    let global = TupleList::new();
    let result = Descriptor::parse("1bad=oops\n", Utf8Path::new("foo.pc"), "foo", false, &global);
    assert!(result.is_err());
  }
}
