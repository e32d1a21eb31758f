#![deny(clippy::all)]
#![allow(
  clippy::module_name_repetitions,
  clippy::must_use_candidate,
  clippy::missing_errors_doc
)]

pub(crate) use {
  crate::{
    cache::Cache, comparator::Comparator, config::Config, config_error::ConfigError,
    context::Context, dependency::Dependency, dependency_parser::DependencyParser,
    descriptor::Descriptor, digraph::Digraph, error::Error, expand::expand,
    expand::split_shell_words, fragment::Fragment, fragment::FragmentKind,
    fragment_list::FragmentList, locator::Locator, module::Module, output::Output,
    resolve_flags::ResolveFlags, resolver::Resolver, search_path::SearchPath,
    subcommand::EmitFlags, subcommand::Subcommand, tuple::Tuple, tuple_list::TupleList,
    version::Version, visitor::DigraphVisitor, visitor::FragmentVisitor, visitor::NullVisitor,
    visitor::PrintVariablesVisitor, visitor::SimulateVisitor, visitor::UninstalledVisitor,
    visitor::VariableVisitor, visitor::Visitor, world::World,
  },
  std::{
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet},
    env,
    fmt::{self, Display, Formatter},
    fs,
    rc::Rc,
  },
  camino::{Utf8Path, Utf8PathBuf},
  lexiclean::Lexiclean,
  log::{debug, warn},
  snafu::Snafu,
};

pub(crate) type ResolveResult<T> = Result<T, Error>;
pub(crate) type ConfigResult<T> = Result<T, ConfigError>;

pub use crate::run::run;

mod cache;
mod comparator;
mod config;
mod config_error;
mod context;
mod dependency;
mod dependency_parser;
mod descriptor;
mod digraph;
mod error;
mod expand;
mod fragment;
mod fragment_list;
mod locator;
mod module;
mod output;
mod resolve_flags;
mod resolver;
mod run;
mod search_path;
mod subcommand;
mod suggestion;
mod tuple;
mod tuple_list;
mod version;
mod visitor;
mod world;

#[cfg(test)]
mod test_fixtures;
