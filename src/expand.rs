use super::*;

/// Maximum `${var}` expansion recursion depth before a cyclic-expansion error
/// is reported, per §4.1.
const MAX_EXPANSION_DEPTH: usize = 64;

/// Expands every `${name}` reference in `value`, looking the name up first in
/// `local`, then in `global`. Returns an error on an unbalanced `${` or on
/// exceeding [`MAX_EXPANSION_DEPTH`].
pub(crate) fn expand(
  value: &str,
  local: &TupleList,
  global: &TupleList,
  path: &Utf8Path,
) -> ResolveResult<String> {
  expand_at_depth(value, local, global, path, 0)
}

fn expand_at_depth(
  value: &str,
  local: &TupleList,
  global: &TupleList,
  path: &Utf8Path,
  depth: usize,
) -> ResolveResult<String> {
  if depth > MAX_EXPANSION_DEPTH {
    return Err(Error::CyclicExpansion {
      path: path.to_owned(),
      key: value.to_owned(),
    });
  }

  let mut output = String::with_capacity(value.len());
  let mut chars = value.chars().peekable();

  while let Some(c) = chars.next() {
    if c != '$' {
      output.push(c);
      continue;
    }

    match chars.peek() {
      Some('{') => {
        chars.next();
        let mut name = String::new();
        let mut closed = false;

        for next in chars.by_ref() {
          if next == '}' {
            closed = true;
            break;
          }
          name.push(next);
        }

        if !closed {
          return Err(Error::ParseError {
            path: path.to_owned(),
            line: 0,
            message: format!("unterminated variable reference `${{{name}`"),
          });
        }

        let looked_up = local
          .get(&name)
          .or_else(|| global.get(&name))
          .unwrap_or_default();

        output.push_str(&expand_at_depth(looked_up, local, global, path, depth + 1)?);
      }
      _ => {
        // A bare `$` not followed by `{` is passed through unchanged; the
        // reference tool only treats `${...}` as an expansion token.
        output.push('$');
      }
    }
  }

  Ok(output)
}

/// Shell-like whitespace splitting with single/double quote and backslash
/// escape support, used to tokenize `Cflags`/`Libs` values after expansion.
pub(crate) fn split_shell_words(value: &str, path: &Utf8Path) -> ResolveResult<Vec<String>> {
  let mut words = Vec::new();
  let mut current = String::new();
  let mut in_word = false;
  let mut chars = value.chars().peekable();

  while let Some(c) = chars.next() {
    match c {
      c if c.is_whitespace() => {
        if in_word {
          words.push(std::mem::take(&mut current));
          in_word = false;
        }
      }
      '\'' => {
        in_word = true;
        for next in chars.by_ref() {
          if next == '\'' {
            break;
          }
          current.push(next);
        }
      }
      '"' => {
        in_word = true;
        loop {
          match chars.next() {
            Some('"') => break,
            Some('\\') => {
              if let Some(escaped) = chars.next() {
                current.push(escaped);
              }
            }
            Some(other) => current.push(other),
            None => {
              return Err(Error::ParseError {
                path: path.to_owned(),
                line: 0,
                message: "unterminated double-quoted string".to_owned(),
              })
            }
          }
        }
      }
      '\\' => {
        in_word = true;
        if let Some(escaped) = chars.next() {
          current.push(escaped);
        }
      }
      other => {
        in_word = true;
        current.push(other);
      }
    }
  }

  if in_word {
    words.push(current);
  }

  Ok(words)
}
