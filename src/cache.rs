use super::*;

use std::{cell::RefCell, rc::Rc};

/// The resolution-scoped module cache described in §3 Lifecycles: modules
/// are created on demand by the locator, owned by this cache keyed by
/// identifier, and released when the owning [`Context`] is dropped.
#[derive(Debug, Default)]
pub(crate) struct Cache {
  modules: RefCell<BTreeMap<String, Rc<Module>>>,
}

impl Cache {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Returns the cached module for `id`, if one has already been loaded.
  pub(crate) fn get(&self, id: &str) -> Option<Rc<Module>> {
    self.modules.borrow().get(id).cloned()
  }

  /// Inserts a freshly loaded module, returning the shared handle to it.
  pub(crate) fn insert(&self, module: Module) -> Rc<Module> {
    let id = module.id.clone();
    let module = Rc::new(module);
    self.modules.borrow_mut().insert(id, module.clone());
    module
  }

}
