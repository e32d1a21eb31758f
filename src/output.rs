use super::*;

/// Renders resolver results to the strings `run.rs` writes to stdout. See
/// §4.8 and §6.4; grounded in the reference tool's `print_fragment` and
/// `fragment_has_system_dir`.
pub(crate) struct Output;

impl Output {
  /// Renders a fragment list as a line with each fragment followed by a
  /// trailing space, applying sysroot prefixing to `I`/`L` fragments and
  /// suppressing system directories unless `keep_system` is set. Matches the
  /// reference tool's `printf("...%s ", …)` rendering, trailing space and
  /// all, so callers can concatenate a cflags line directly onto a libs line.
  pub(crate) fn fragment_line(fragments: &FragmentList, context: &Context, keep_system: bool) -> String {
    fragments
      .iter()
      .filter(|fragment| keep_system || !fragment.is_system_dir(&context.system_includedir, &context.system_libdir))
      .fold(String::new(), |mut line, fragment| {
        line.push_str(&Self::render_fragment(fragment, context));
        line.push(' ');
        line
      })
  }

  fn render_fragment(fragment: &Fragment, context: &Context) -> String {
    match fragment.kind.flag_char() {
      Some(flag) => {
        let data = match fragment.kind {
          FragmentKind::Include | FragmentKind::LibraryPath => Self::with_sysroot(&fragment.data, context),
          FragmentKind::Library | FragmentKind::Other => fragment.data.clone(),
        };
        format!("-{flag}{data}")
      }
      None => fragment.data.clone(),
    }
  }

  fn with_sysroot(data: &str, context: &Context) -> String {
    match &context.sysroot {
      Some(sysroot) if !data.starts_with(sysroot.as_str()) => format!("{sysroot}{data}"),
      _ => data.to_owned(),
    }
  }

  /// Renders one `--list-all` line: `id` padded, then `name - description`.
  pub(crate) fn list_all_line(id: &str, name: &str, description: &str) -> String {
    format!("{id:<31}{name} - {description}")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn context_with_sysroot(sysroot: Option<&str>) -> Context {
    Context {
      global: TupleList::new(),
      search_path: Vec::new(),
      sysroot: sysroot.map(Utf8PathBuf::from),
      system_includedir: "/usr/include".to_owned(),
      system_libdir: "/usr/lib".to_owned(),
      flags: ResolveFlags::default(),
      cache: Cache::new(),
    }
  }

  #[test]
  fn renders_typed_and_raw_fragments() {
    let mut fragments = FragmentList::new();
    fragments.push(Fragment::new(FragmentKind::Include, "/opt/foo/include"));
    fragments.push(Fragment::new(FragmentKind::Other, "-DFOO"));
    let context = context_with_sysroot(None);
    assert_eq!(
      Output::fragment_line(&fragments, &context, false),
      "-I/opt/foo/include -DFOO "
    );
  }

  #[test]
  fn suppresses_system_include_dir_by_default() {
    let mut fragments = FragmentList::new();
    fragments.push(Fragment::new(FragmentKind::Include, "/usr/include"));
    fragments.push(Fragment::new(FragmentKind::Include, "/opt/foo/include"));
    let context = context_with_sysroot(None);
    assert_eq!(Output::fragment_line(&fragments, &context, false), "-I/opt/foo/include ");
    assert_eq!(
      Output::fragment_line(&fragments, &context, true),
      "-I/usr/include -I/opt/foo/include "
    );
  }

  #[test]
  fn prefixes_include_and_library_paths_with_sysroot() {
    let mut fragments = FragmentList::new();
    fragments.push(Fragment::new(FragmentKind::Include, "/opt/foo/include"));
    fragments.push(Fragment::new(FragmentKind::Library, "foo"));
    let context = context_with_sysroot(Some("/sysroot"));
    assert_eq!(
      Output::fragment_line(&fragments, &context, false),
      "-I/sysroot/opt/foo/include -lfoo "
    );
  }
}
