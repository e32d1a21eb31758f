fn main() {
  env_logger::init();
  std::process::exit(pkgconf::run());
}
