use super::*;

use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A scratch directory removed when dropped, so unit tests across the crate
/// can write throwaway `.pc` files without reaching for a dev-dependency.
pub(crate) struct FixtureDir {
  pub(crate) path: Utf8PathBuf,
}

impl Drop for FixtureDir {
  fn drop(&mut self) {
    let _ = fs::remove_dir_all(&self.path);
  }
}

fn fixture_dir() -> FixtureDir {
  let n = COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
  let path = Utf8PathBuf::from_path_buf(std::env::temp_dir())
    .unwrap()
    .join(format!("pkgconf-test-{}-{n}", std::process::id()));
  fs::create_dir_all(&path).unwrap();
  FixtureDir { path }
}

/// Writes `descriptors` (id, contents) as `<id>.pc` files into a fresh
/// directory and returns a [`Context`] whose search path is exactly that
/// directory, independent of the host environment's `PKG_CONFIG_PATH`.
pub(crate) fn fixture_context(descriptors: &[(&str, &str)]) -> (Context, FixtureDir) {
  let dir = fixture_dir();

  for (id, contents) in descriptors {
    fs::write(dir.path.join(format!("{id}.pc")), contents).unwrap();
  }

  let context = Context {
    global: TupleList::new(),
    search_path: vec![dir.path.clone()],
    sysroot: None,
    system_includedir: "/usr/include".to_owned(),
    system_libdir: "/usr/lib".to_owned(),
    flags: ResolveFlags::default(),
    cache: Cache::new(),
  };

  (context, dir)
}
