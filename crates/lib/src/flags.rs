//! Ordered compiler flag lists.

use std::fmt;

/// Tokens handed verbatim to the toolchain, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet(Vec<String>);

impl FlagSet {
  /// Concatenate a mode's base flags, the collection flags and the shared extras.
  pub fn compose<B, C, E>(base: B, collections: C, extras: E) -> Self
  where
    B: IntoIterator,
    B::Item: Into<String>,
    C: IntoIterator,
    C::Item: Into<String>,
    E: IntoIterator,
    E::Item: Into<String>,
  {
    let mut tokens: Vec<String> = base.into_iter().map(Into::into).collect();
    tokens.extend(collections.into_iter().map(Into::into));
    tokens.extend(extras.into_iter().map(Into::into));
    Self(tokens)
  }

  pub fn as_slice(&self) -> &[String] {
    &self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, String> {
    self.0.iter()
  }
}

impl<'a> IntoIterator for &'a FlagSet {
  type Item = &'a String;
  type IntoIter = std::slice::Iter<'a, String>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

impl fmt::Display for FlagSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.join(" "))
  }
}
