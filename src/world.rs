use super::*;

/// The queue/world component of §4.6: turns the user's raw request strings
/// into the synthetic root module's `requires` list.
pub(crate) struct World;

impl World {
  /// Parses every request string as a dependency clause and concatenates the
  /// results, preserving left-to-right order across requests.
  pub(crate) fn build(requests: &[String]) -> ResolveResult<Module> {
    let mut requires = Vec::new();

    for request in requests {
      let trimmed = request.trim();
      if trimmed.is_empty() {
        continue;
      }
      requires.extend(DependencyParser::parse(trimmed)?);
    }

    if requires.is_empty() {
      return Err(ConfigError::NoModulesRequested.into());
    }

    Ok(Module::world(requires))
  }
}
