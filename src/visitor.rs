use super::*;

/// Callback invoked by [`Resolver::traverse`] as it walks the dependency
/// graph. See §9 Design Notes: implemented as a trait rather than a C-style
/// function pointer, with concrete accumulators below for each CLI mode.
pub(crate) trait Visitor {
  /// Called once per module, post-order (after its own dependencies).
  fn visit_module(&mut self, _module: &Module) {}

  /// Called for every traversed `Requires`/`Requires.private` edge, before
  /// the child is recursed into. Only [`DigraphVisitor`] currently cares.
  fn visit_edge(&mut self, _from: &Module, _to: &Module) {}
}

/// Discards everything; used by `validate` for a dry resolution pass.
pub(crate) struct NullVisitor;

impl Visitor for NullVisitor {}

enum FragmentMode {
  Cflags,
  Libs { merge_private: bool },
}

/// Accumulates `cflags` or `libs` fragment lists in traversal order.
pub(crate) struct FragmentVisitor {
  mode: FragmentMode,
  fragments: FragmentList,
}

impl FragmentVisitor {
  pub(crate) fn cflags() -> Self {
    Self {
      mode: FragmentMode::Cflags,
      fragments: FragmentList::new(),
    }
  }

  pub(crate) fn libs(merge_private: bool) -> Self {
    Self {
      mode: FragmentMode::Libs { merge_private },
      fragments: FragmentList::new(),
    }
  }

  pub(crate) fn into_fragments(self) -> FragmentList {
    self.fragments
  }
}

impl Visitor for FragmentVisitor {
  fn visit_module(&mut self, module: &Module) {
    match self.mode {
      FragmentMode::Cflags => self.fragments.extend(&module.cflags),
      FragmentMode::Libs { merge_private } => {
        self.fragments.extend(&module.libs);
        if merge_private {
          self.fragments.extend(&module.libs_private);
        }
      }
    }
  }
}

/// Accumulates the space-joined value of a named tuple across every visited
/// module that defines it.
pub(crate) struct VariableVisitor {
  name: String,
  values: Vec<String>,
}

impl VariableVisitor {
  pub(crate) fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      values: Vec::new(),
    }
  }

  pub(crate) fn into_value(self) -> String {
    self.values.join(" ")
  }
}

impl Visitor for VariableVisitor {
  fn visit_module(&mut self, module: &Module) {
    if let Some(value) = module.tuples.get(&self.name) {
      self.values.push(value.to_owned());
    }
  }
}

/// Collects Graphviz `dot` edges for `--digraph`.
pub(crate) struct DigraphVisitor {
  edges: Vec<(String, String)>,
  nodes: BTreeSet<String>,
}

impl DigraphVisitor {
  pub(crate) fn new() -> Self {
    Self {
      edges: Vec::new(),
      nodes: BTreeSet::new(),
    }
  }

  pub(crate) fn into_parts(self) -> (BTreeSet<String>, Vec<(String, String)>) {
    (self.nodes, self.edges)
  }
}

impl Visitor for DigraphVisitor {
  fn visit_module(&mut self, module: &Module) {
    if !module.is_world() {
      self.nodes.insert(module.id.clone());
    }
  }

  fn visit_edge(&mut self, from: &Module, to: &Module) {
    if !from.is_world() {
      self.edges.push((from.id.clone(), to.id.clone()));
    }
    self.nodes.insert(to.id.clone());
  }
}

/// Accumulates `key=value` lines across every visited module's tuples, for
/// `--print-variables`.
pub(crate) struct PrintVariablesVisitor {
  lines: Vec<String>,
}

impl PrintVariablesVisitor {
  pub(crate) fn new() -> Self {
    Self { lines: Vec::new() }
  }

  pub(crate) fn into_lines(self) -> Vec<String> {
    self.lines
  }
}

impl Visitor for PrintVariablesVisitor {
  fn visit_module(&mut self, module: &Module) {
    if module.is_world() {
      return;
    }

    for key in module.tuples.keys() {
      if let Some(value) = module.tuples.get(key) {
        self.lines.push(format!("{key}={value}"));
      }
    }
  }
}

/// Records whether any visited module was resolved from an `-uninstalled.pc`
/// variant, for `--uninstalled`.
pub(crate) struct UninstalledVisitor {
  pub(crate) any_uninstalled: bool,
}

impl UninstalledVisitor {
  pub(crate) fn new() -> Self {
    Self {
      any_uninstalled: false,
    }
  }
}

impl Visitor for UninstalledVisitor {
  fn visit_module(&mut self, module: &Module) {
    if module.uninstalled {
      self.any_uninstalled = true;
    }
  }
}

/// Records the order modules would be visited in, without accumulating any
/// output, for `--simulate`.
pub(crate) struct SimulateVisitor {
  pub(crate) visited: Vec<String>,
}

impl SimulateVisitor {
  pub(crate) fn new() -> Self {
    Self { visited: Vec::new() }
  }
}

impl Visitor for SimulateVisitor {
  fn visit_module(&mut self, module: &Module) {
    if !module.is_world() {
      self.visited.push(module.id.clone());
    }
  }
}
