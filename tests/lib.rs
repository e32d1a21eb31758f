use {
  cradle::prelude::*,
  executable_path::executable_path,
  pretty_assertions::assert_eq,
  std::path::Path,
  temptree::temptree,
};

fn pkgconf(args: &[&str], search_dir: &Path) -> (String, String) {
  let (StdoutUntrimmed(stdout), StderrUntrimmed(stderr), Exit(_)): (StdoutUntrimmed, StderrUntrimmed, Exit) = cmd!(
    executable_path("pkgconf"),
    args,
    Env("PKG_CONFIG_PATH", search_dir.to_str().unwrap()),
    Env("PKG_CONFIG_LIBDIR", ""),
  );

  (stdout, stderr)
}

#[test]
fn cflags_for_a_single_module() {
  let tree = temptree! {
    "foo.pc": "prefix=/opt/foo\nName: foo\nVersion: 1.0\nCflags: -I${prefix}/include\n",
  };

  let (stdout, _stderr) = pkgconf(&["--cflags", "foo"], tree.path());
  assert_eq!(stdout, "-I/opt/foo/include \n");
}

#[test]
fn transitive_libs_are_ordered_child_before_parent() {
  let tree = temptree! {
    "foo.pc": "Name: foo\nVersion: 1.0\nRequires: bar\nLibs: -lfoo\n",
    "bar.pc": "Name: bar\nVersion: 1.0\nLibs: -lbar\n",
  };

  let (stdout, _stderr) = pkgconf(&["--libs", "foo"], tree.path());
  assert_eq!(stdout, "-lbar -lfoo \n");
}

#[test]
fn sysroot_prefixes_include_and_library_paths() {
  let tree = temptree! {
    "foo.pc": "Name: foo\nVersion: 1.0\nCflags: -I/opt/foo/include\nLibs: -L/opt/foo/lib -lfoo\n",
  };

  let (StdoutUntrimmed(stdout), Exit(_)): (StdoutUntrimmed, Exit) = cmd!(
    executable_path("pkgconf"),
    &["--cflags", "--libs", "foo"],
    Env("PKG_CONFIG_PATH", tree.path().to_str().unwrap()),
    Env("PKG_CONFIG_LIBDIR", ""),
    Env("PKG_CONFIG_SYSROOT_DIR", "/sysroot"),
  );

  assert_eq!(stdout, "-I/sysroot/opt/foo/include -L/sysroot/opt/foo/lib -lfoo \n");
}

#[test]
fn version_mismatch_fails_with_a_nonzero_exit_code() {
  let tree = temptree! {
    "foo.pc": "Name: foo\nVersion: 1.0\n",
  };

  let (Exit(status),): (Exit,) = cmd!(
    executable_path("pkgconf"),
    &["--exists", "foo >= 2.0"],
    Env("PKG_CONFIG_PATH", tree.path().to_str().unwrap()),
    Env("PKG_CONFIG_LIBDIR", ""),
  );

  assert!(!status.success());
}

#[test]
fn cyclic_requires_still_terminates() {
  let tree = temptree! {
    "foo.pc": "Name: foo\nVersion: 1.0\nRequires: bar\n",
    "bar.pc": "Name: bar\nVersion: 1.0\nRequires: foo\n",
  };

  let (Exit(status),): (Exit,) = cmd!(
    executable_path("pkgconf"),
    &["--exists", "foo"],
    Env("PKG_CONFIG_PATH", tree.path().to_str().unwrap()),
    Env("PKG_CONFIG_LIBDIR", ""),
  );

  assert!(status.success());
}

#[test]
fn variable_query_expands_module_variables() {
  let tree = temptree! {
    "foo.pc": "prefix=/opt/foo\nName: foo\nVersion: 1.0\nincludedir=${prefix}/include\n",
  };

  let (stdout, _stderr) = pkgconf(&["--variable=includedir", "foo"], tree.path());
  assert_eq!(stdout, "/opt/foo/include\n");
}

#[test]
fn modversion_prints_the_bare_version() {
  let tree = temptree! {
    "foo.pc": "Name: foo\nVersion: 3.2.1\n",
  };

  let (stdout, _stderr) = pkgconf(&["--modversion", "foo"], tree.path());
  assert_eq!(stdout, "3.2.1\n");
}

#[test]
fn unknown_module_reports_the_package_name() {
  let tree = temptree! {
    "foo.pc": "Name: foo\nVersion: 1.0\n",
  };

  let (_stdout, stderr) = pkgconf(&["--print-errors", "--exists", "fooo"], tree.path());
  assert!(stderr.contains("fooo"));
}
