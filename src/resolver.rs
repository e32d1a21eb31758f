use super::*;

/// The central algorithm of §4.5: a depth-first, cycle-safe walk over the
/// transitive `Requires` graph, invoking a caller-supplied [`Visitor`] in
/// post-order so fragment accumulation yields child-before-parent link order.
pub(crate) struct Resolver;

impl Resolver {
  /// Walks `root`'s dependency graph, calling `visitor` for every module and
  /// edge encountered, then checking conflicts across everything resolved.
  pub(crate) fn traverse(
    root: &Module,
    visitor: &mut dyn Visitor,
    maxdepth: usize,
    flags: ResolveFlags,
    context: &Context,
  ) -> ResolveResult<()> {
    let mut visited = BTreeSet::new();
    let mut resolved: BTreeMap<String, Rc<Module>> = BTreeMap::new();

    Self::visit(root, 0, maxdepth, flags, context, &mut visited, &mut resolved, visitor)?;

    if !flags.skip_conflicts {
      Self::check_conflicts(&resolved)?;
    }

    Ok(())
  }

  /// Resolves and accumulates the `Cflags` fragment list for `root`.
  pub(crate) fn cflags(root: &Module, maxdepth: usize, flags: ResolveFlags, context: &Context) -> ResolveResult<FragmentList> {
    let mut visitor = FragmentVisitor::cflags();
    Self::traverse(root, &mut visitor, maxdepth, flags, context)?;
    Ok(visitor.into_fragments())
  }

  /// Resolves and accumulates the `Libs` (and, if `merge_private_fragments`
  /// is set, `Libs.private`) fragment list for `root`.
  pub(crate) fn libs(root: &Module, maxdepth: usize, flags: ResolveFlags, context: &Context) -> ResolveResult<FragmentList> {
    let mut visitor = FragmentVisitor::libs(flags.merge_private_fragments);
    Self::traverse(root, &mut visitor, maxdepth, flags, context)?;
    Ok(visitor.into_fragments())
  }

  /// Looks up `name` across every module in the graph, space-joining matches
  /// in traversal order.
  pub(crate) fn variable(
    root: &Module,
    name: &str,
    maxdepth: usize,
    flags: ResolveFlags,
    context: &Context,
  ) -> ResolveResult<String> {
    let mut visitor = VariableVisitor::new(name);
    Self::traverse(root, &mut visitor, maxdepth, flags, context)?;
    Ok(visitor.into_value())
  }

  /// Performs a dry resolution to confirm every predicate in the graph is
  /// satisfiable, without accumulating any output.
  pub(crate) fn validate(root: &Module, maxdepth: usize, flags: ResolveFlags, context: &Context) -> ResolveResult<()> {
    let mut visitor = NullVisitor;
    Self::traverse(root, &mut visitor, maxdepth, flags, context)
  }

  /// Renders `key=value` for every tuple in every resolved module.
  pub(crate) fn print_variables(root: &Module, maxdepth: usize, flags: ResolveFlags, context: &Context) -> ResolveResult<Vec<String>> {
    let mut visitor = PrintVariablesVisitor::new();
    Self::traverse(root, &mut visitor, maxdepth, flags, context)?;
    Ok(visitor.into_lines())
  }

  /// Renders one `Requires`/`Requires.private` line per clause of every
  /// directly requested package, without descending into their dependencies.
  pub(crate) fn print_requires(root: &Module, private: bool, context: &Context) -> ResolveResult<Vec<String>> {
    let mut lines = Vec::new();

    for dependency in &root.requires {
      let module = Locator::resolve(&dependency.package, context)?;
      let clauses = if private { &module.requires_private } else { &module.requires };
      lines.extend(clauses.iter().map(ToString::to_string));
    }

    Ok(lines)
  }

  /// Builds the node/edge set for `--digraph`.
  pub(crate) fn digraph(
    root: &Module,
    maxdepth: usize,
    flags: ResolveFlags,
    context: &Context,
  ) -> ResolveResult<(BTreeSet<String>, Vec<(String, String)>)> {
    let mut visitor = DigraphVisitor::new();
    Self::traverse(root, &mut visitor, maxdepth, flags, context)?;
    Ok(visitor.into_parts())
  }

  /// Records visitation order for `--simulate`, without emitting fragments.
  pub(crate) fn simulate(root: &Module, maxdepth: usize, flags: ResolveFlags, context: &Context) -> ResolveResult<Vec<String>> {
    let mut visitor = SimulateVisitor::new();
    Self::traverse(root, &mut visitor, maxdepth, flags, context)?;
    Ok(visitor.visited)
  }

  /// Whether any module in the graph was resolved from an `-uninstalled.pc`
  /// variant, for `--uninstalled`.
  pub(crate) fn any_uninstalled(root: &Module, maxdepth: usize, flags: ResolveFlags, context: &Context) -> ResolveResult<bool> {
    let mut visitor = UninstalledVisitor::new();
    Self::traverse(root, &mut visitor, maxdepth, flags, context)?;
    Ok(visitor.any_uninstalled)
  }

  #[allow(clippy::too_many_arguments)]
  fn visit(
    module: &Module,
    depth: usize,
    maxdepth: usize,
    flags: ResolveFlags,
    context: &Context,
    visited: &mut BTreeSet<String>,
    resolved: &mut BTreeMap<String, Rc<Module>>,
    visitor: &mut dyn Visitor,
  ) -> ResolveResult<()> {
    if depth > maxdepth {
      return Ok(());
    }

    for dependency in &module.requires {
      Self::visit_dependency(dependency, module, depth, maxdepth, flags, context, visited, resolved, visitor)?;
    }

    if flags.search_private {
      for dependency in &module.requires_private {
        Self::visit_dependency(dependency, module, depth, maxdepth, flags, context, visited, resolved, visitor)?;
      }
    }

    if !(module.is_world() && flags.skip_root_virtual) {
      visitor.visit_module(module);
    }

    Ok(())
  }

  #[allow(clippy::too_many_arguments)]
  fn visit_dependency(
    dependency: &Dependency,
    parent: &Module,
    depth: usize,
    maxdepth: usize,
    flags: ResolveFlags,
    context: &Context,
    visited: &mut BTreeSet<String>,
    resolved: &mut BTreeMap<String, Rc<Module>>,
    visitor: &mut dyn Visitor,
  ) -> ResolveResult<()> {
    let child = Locator::resolve(&dependency.package, context)?;
    Self::check_version(dependency, &child)?;
    visitor.visit_edge(parent, &child);

    if visited.contains(&child.id) {
      debug!("already visited `{}`, skipping", child.id);
      return Ok(());
    }

    visited.insert(child.id.clone());
    resolved.insert(child.id.clone(), Rc::clone(&child));

    Self::visit(&child, depth + 1, maxdepth, flags, context, visited, resolved, visitor)
  }

  fn check_version(dependency: &Dependency, found: &Module) -> ResolveResult<()> {
    if dependency.satisfied_by(&found.version) {
      return Ok(());
    }

    let (comparator, wanted) = dependency
      .version
      .clone()
      .expect("satisfied_by only fails when a version clause is present");

    Err(Error::VersionMismatch {
      package: dependency.package.clone(),
      comparator,
      wanted,
      found: found.version.clone(),
    })
  }

  /// A `Conflicts` clause in module `A` fails the traversal if the named
  /// module is also present in the resolved graph and its version matches.
  /// Checked for every visited node regardless of `search_private` (see
  /// Open Question resolution).
  fn check_conflicts(resolved: &BTreeMap<String, Rc<Module>>) -> ResolveResult<()> {
    for module in resolved.values() {
      for conflict in &module.conflicts {
        let Some(candidate) = resolved.get(&conflict.package) else {
          continue;
        };

        if conflict.satisfied_by(&candidate.version) {
          let (comparator, version) = conflict
            .version
            .clone()
            .unwrap_or((Comparator::Equal, candidate.version.clone()));

          return Err(Error::Conflict {
            package: module.id.clone(),
            conflicting: candidate.id.clone(),
            comparator,
            version,
          });
        }
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_fixtures::fixture_context;

  #[test]
  fn resolves_transitive_cflags_in_child_before_parent_order() {
    let (context, _dir) = fixture_context(&[
      ("foo", "Name: foo\nVersion: 1.0\nRequires: bar\nCflags: -Ifoo\n"),
      ("bar", "Name: bar\nVersion: 1.0\nCflags: -Ibar\n"),
    ]);

    let world = World::build(&["foo".to_owned()]).unwrap();
    let fragments = Resolver::cflags(&world, 64, ResolveFlags::default(), &context).unwrap();
    let data: Vec<_> = fragments.iter().map(|f| f.data.as_str()).collect();
    assert_eq!(data, vec!["bar", "foo"]);
  }

  #[test]
  fn unsatisfied_version_is_an_error() {
    let (context, _dir) = fixture_context(&[("foo", "Name: foo\nVersion: 1.0\n")]);

    let world = World::build(&["foo >= 2.0".to_owned()]).unwrap();
    let result = Resolver::validate(&world, 64, ResolveFlags::default(), &context);
    assert!(matches!(result, Err(Error::VersionMismatch { .. })));
  }

  #[test]
  fn cyclic_requires_terminates_and_visits_once() {
    let (context, _dir) = fixture_context(&[
      ("foo", "Name: foo\nVersion: 1.0\nRequires: bar\n"),
      ("bar", "Name: bar\nVersion: 1.0\nRequires: foo\n"),
    ]);

    let world = World::build(&["foo".to_owned()]).unwrap();
    let mut visitor = SimulateVisitor::new();
    Resolver::traverse(&world, &mut visitor, 64, ResolveFlags::default(), &context).unwrap();
    assert_eq!(visitor.visited.len(), 2);
  }

  #[test]
  fn conflicting_module_in_graph_is_an_error() {
    let (context, _dir) = fixture_context(&[
      ("foo", "Name: foo\nVersion: 1.0\nRequires: bar\nConflicts: baz\n"),
      ("bar", "Name: bar\nVersion: 1.0\nRequires: baz\n"),
      ("baz", "Name: baz\nVersion: 1.0\n"),
    ]);

    let world = World::build(&["foo".to_owned()]).unwrap();
    let result = Resolver::validate(&world, 64, ResolveFlags::default(), &context);
    assert!(matches!(result, Err(Error::Conflict { .. })));
  }

  #[test]
  fn print_requires_does_not_descend_past_the_directly_named_package() {
    let (context, _dir) = fixture_context(&[
      ("foo", "Name: foo\nVersion: 1.0\nRequires: bar\n"),
      ("bar", "Name: bar\nVersion: 1.0\nRequires: baz\n"),
      ("baz", "Name: baz\nVersion: 1.0\n"),
    ]);

    let world = World::build(&["foo".to_owned()]).unwrap();
    let lines = Resolver::print_requires(&world, false, &context).unwrap();
    assert_eq!(lines, vec!["bar".to_owned()]);
  }

  #[test]
  fn maxdepth_prunes_deep_modules_silently() {
    let (context, _dir) = fixture_context(&[
      ("foo", "Name: foo\nVersion: 1.0\nRequires: bar\nCflags: -Ifoo\n"),
      ("bar", "Name: bar\nVersion: 1.0\nCflags: -Ibar\n"),
    ]);

    let world = World::build(&["foo".to_owned()]).unwrap();
    let fragments = Resolver::cflags(&world, 0, ResolveFlags::default(), &context).unwrap();
    assert!(fragments.is_empty());
  }
}
