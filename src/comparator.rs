use super::*;

/// The comparison operator in a dependency predicate such as `foo >= 1.2`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
pub(crate) enum Comparator {
  #[strum(serialize = "=")]
  Equal,
  #[strum(serialize = "<")]
  Less,
  #[strum(serialize = ">")]
  Greater,
  #[strum(serialize = "<=")]
  LessEqual,
  #[strum(serialize = ">=")]
  GreaterEqual,
  #[strum(serialize = "!=")]
  NotEqual,
}

impl Comparator {
  /// The set of characters that may begin an operator token.
  pub(crate) const OPERATOR_CHARS: [char; 4] = ['<', '>', '=', '!'];

  pub(crate) fn parse(token: &str) -> Option<Comparator> {
    match token {
      "=" => Some(Comparator::Equal),
      "<" => Some(Comparator::Less),
      ">" => Some(Comparator::Greater),
      "<=" => Some(Comparator::LessEqual),
      ">=" => Some(Comparator::GreaterEqual),
      "!=" => Some(Comparator::NotEqual),
      _ => None,
    }
  }

  /// Whether `found` compared against `wanted` satisfies this operator.
  pub(crate) fn satisfied_by(self, found: &Version, wanted: &Version) -> bool {
    let ordering = found.compare(wanted);
    match self {
      Comparator::Equal => ordering == Ordering::Equal,
      Comparator::Less => ordering == Ordering::Less,
      Comparator::Greater => ordering == Ordering::Greater,
      Comparator::LessEqual => ordering != Ordering::Greater,
      Comparator::GreaterEqual => ordering != Ordering::Less,
      Comparator::NotEqual => ordering != Ordering::Equal,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_every_operator() {
    assert_eq!(Comparator::parse("="), Some(Comparator::Equal));
    assert_eq!(Comparator::parse(">="), Some(Comparator::GreaterEqual));
    assert_eq!(Comparator::parse("!="), Some(Comparator::NotEqual));
    assert_eq!(Comparator::parse("~"), None);
  }

  #[test]
  fn satisfied_by_matches_semantics() {
    let one = Version::new("1.0");
    let two = Version::new("2.0");
    assert!(Comparator::GreaterEqual.satisfied_by(&two, &one));
    assert!(!Comparator::Less.satisfied_by(&two, &one));
    assert!(Comparator::NotEqual.satisfied_by(&two, &one));
  }
}
