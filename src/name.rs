//! The name resource: storage, default value and input rules.
//!
//! The stored name is the only mutable application state on the device. Its
//! backing buffer's capacity is the length bound, so a name that breaks the
//! bound is unrepresentable rather than merely checked-for.

use toad_string::String;

use crate::payload::Text;

/// Maximum length of a stored name, in bytes.
pub const MAX_LEN: usize = 19;

/// Value reported before any PUT, and restored by DELETE.
pub const DEFAULT: &str = "Sin nombre";

/// Why a candidate name was rejected.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum InvalidName {
  /// The request body was longer than [`MAX_LEN`] bytes.
  TooLong {
    /// length of the rejected body
    len: usize,
  },
  /// The body contained a byte that is neither ASCII-alphabetic nor
  /// whitespace.
  Character {
    /// index of the first offending byte
    index: usize,
  },
}

/// Validate a candidate name token.
///
/// Names must fit in [`MAX_LEN`] bytes and contain only ASCII-alphabetic
/// characters and whitespace. The scan stops at the first offending byte.
///
/// ```
/// use polliwog::name::{validate, InvalidName};
/// use polliwog::payload::Text;
/// use polliwog::req::Req;
///
/// let mut req = Req::put("nombre");
/// req.set_payload("Ana77".bytes());
///
/// assert_eq!(validate(&Text::from_req(&req)),
///            Err(InvalidName::Character { index: 3 }));
/// ```
pub fn validate(text: &Text<MAX_LEN>) -> Result<(), InvalidName> {
  if text.body_len() > MAX_LEN {
    return Err(InvalidName::TooLong { len: text.body_len() });
  }

  match text.as_bytes()
            .iter()
            .position(|b| !b.is_ascii_alphabetic() && !b.is_ascii_whitespace())
  {
    | Some(index) => Err(InvalidName::Character { index }),
    | None => Ok(()),
  }
}

/// The stored name and the default it resets to.
///
/// Reads go through [`Name::as_str`]; the only mutations are a validated
/// [`Name::set`] and [`Name::reset`].
#[derive(Copy, Clone, Debug)]
pub struct Name {
  value: String<MAX_LEN>,
  default: String<MAX_LEN>,
}

impl Default for Name {
  fn default() -> Self {
    Self::with_default(String::from(DEFAULT))
  }
}

impl Name {
  /// Create a store that starts as (and resets to) `default`
  pub fn with_default(default: String<MAX_LEN>) -> Self {
    Self { value: default,
           default }
  }

  /// The current value
  pub fn as_str(&self) -> &str {
    self.value.as_str()
  }

  /// Validate `text` and, only if it passes, replace the stored value.
  ///
  /// On rejection the stored value is untouched.
  pub fn set(&mut self, text: &Text<MAX_LEN>) -> Result<(), InvalidName> {
    validate(text)?;

    self.value.clear();
    for b in text.as_bytes() {
      self.value.push(*b as char);
    }

    Ok(())
  }

  /// Restore the default value, unconditionally.
  pub fn reset(&mut self) -> () {
    self.value = self.default;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::req::Req;

  fn text(body: &str) -> Text<MAX_LEN> {
    let mut req = Req::put("nombre");
    req.set_payload(body.bytes());
    Text::from_req(&req)
  }

  #[test]
  fn accepts_alpha_and_spaces() {
    assert_eq!(validate(&text("Ana Maria")), Ok(()));
    assert_eq!(validate(&text("")), Ok(()));
  }

  #[test]
  fn accepts_names_at_the_bound() {
    assert_eq!(validate(&text(&"a".repeat(MAX_LEN))), Ok(()));
  }

  #[test]
  fn rejects_names_past_the_bound() {
    assert_eq!(validate(&text(&"a".repeat(MAX_LEN + 1))),
               Err(InvalidName::TooLong { len: MAX_LEN + 1 }));
  }

  #[test]
  fn rejects_the_first_bad_byte() {
    assert_eq!(validate(&text("Ana77")),
               Err(InvalidName::Character { index: 3 }));
    assert_eq!(validate(&text("!Ana")),
               Err(InvalidName::Character { index: 0 }));
  }

  #[test]
  fn starts_at_and_resets_to_the_default() {
    let mut name = Name::default();
    assert_eq!(name.as_str(), DEFAULT);

    name.set(&text("Rana")).unwrap();
    assert_eq!(name.as_str(), "Rana");

    name.reset();
    assert_eq!(name.as_str(), DEFAULT);
  }

  #[test]
  fn rejection_leaves_the_value_alone() {
    let mut name = Name::default();
    assert!(name.set(&text("Rana 2")).is_err());
    assert_eq!(name.as_str(), DEFAULT);
  }
}
