use super::*;

/// Tokenizes a `Requires`/`Requires.private`/`Conflicts` value, or a
/// command-line module request, into an ordered list of predicates.
///
/// ```text
/// deplist  := pred (sep pred)*
/// pred     := name (op version)?
/// op       := '=' | '<' | '>' | '<=' | '>=' | '!='
/// sep      := ',' | whitespace
/// ```
pub(crate) struct DependencyParser;

impl DependencyParser {
  pub(crate) fn parse(input: &str) -> ResolveResult<Vec<Dependency>> {
    let tokens = tokenize(input);
    let mut tokens = tokens.iter().peekable();
    let mut dependencies = Vec::new();

    while let Some(token) = tokens.next() {
      if is_operator(token) {
        return Err(Error::ArgumentError {
          message: format!("dependency clause `{input}` has an operator with no preceding name"),
        });
      }

      let package = (*token).to_owned();

      let version = if let Some(next) = tokens.peek() {
        if is_operator(next) {
          let operator_token = tokens.next().unwrap();
          let comparator =
            Comparator::parse(operator_token).ok_or_else(|| Error::ArgumentError {
              message: format!("unknown comparison operator `{operator_token}` in `{input}`"),
            })?;

          let version_token = tokens.next().ok_or_else(|| Error::ArgumentError {
            message: format!("dependency clause `{input}` has an operator with no version"),
          })?;

          Some((comparator, (*version_token).to_owned()))
        } else {
          None
        }
      } else {
        None
      };

      dependencies.push(match version {
        Some((comparator, version)) => Dependency::with_version(package, comparator, version),
        None => Dependency::new(package),
      });
    }

    Ok(dependencies)
  }
}

fn is_operator(token: &str) -> bool {
  token
    .chars()
    .next()
    .map_or(false, |c| Comparator::OPERATOR_CHARS.contains(&c))
}

/// Splits on commas and whitespace, keeping operator characters as their own
/// tokens so `foo>=1.2` and `foo >= 1.2` tokenize identically.
fn tokenize(input: &str) -> Vec<String> {
  let mut tokens = Vec::new();
  let mut current = String::new();
  let mut current_is_operator = false;

  for c in input.chars() {
    if c == ',' || c.is_whitespace() {
      if !current.is_empty() {
        tokens.push(std::mem::take(&mut current));
        current_is_operator = false;
      }
      continue;
    }

    let is_operator_char = Comparator::OPERATOR_CHARS.contains(&c);

    if !current.is_empty() && is_operator_char != current_is_operator {
      tokens.push(std::mem::take(&mut current));
    }

    current_is_operator = is_operator_char;
    current.push(c);
  }

  if !current.is_empty() {
    tokens.push(current);
  }

  tokens
}
