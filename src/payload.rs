//! Bounded decoding of request bodies into text tokens.
//!
//! Handlers never look at a request body directly; they copy it through
//! [`Text`], which caps the number of bytes read and remembers how long the
//! body actually was, so an oversized body can be detected without ever
//! overrunning the destination buffer.

use tinyvec::ArrayVec;

use crate::req::Req;

/// A text token copied out of a request body, at most `N` bytes of it.
///
/// ```
/// use polliwog::payload::Text;
/// use polliwog::req::Req;
///
/// let mut req = Req::put("nombre");
/// req.set_payload("Ana Maria".bytes());
///
/// let text = Text::<19>::from_req(&req);
/// assert_eq!(text.as_bytes(), b"Ana Maria");
/// assert_eq!(text.len(), 9);
/// assert!(!text.truncated());
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Text<const N: usize> {
  buf: ArrayVec<[u8; N]>,
  body_len: usize,
}

impl<const N: usize> Text<N> {
  /// Copy at most `N` bytes of the request's body.
  ///
  /// The portion of the body that fits is copied; the rest is left behind
  /// and shows up in [`Text::body_len`] so callers can tell a truncated
  /// token from a complete one.
  pub fn from_req(req: &Req) -> Self {
    let body = req.payload();

    Self { buf: body.iter().copied().take(N).collect(),
           body_len: body.len() }
  }

  /// The copied bytes
  pub fn as_bytes(&self) -> &[u8] {
    &self.buf
  }

  /// Count of bytes actually copied (at most `N`)
  pub fn len(&self) -> usize {
    self.buf.len()
  }

  /// Whether nothing was copied
  pub fn is_empty(&self) -> bool {
    self.buf.is_empty()
  }

  /// Length of the body the token was copied from
  pub fn body_len(&self) -> usize {
    self.body_len
  }

  /// Whether the body was longer than this token's capacity
  pub fn truncated(&self) -> bool {
    self.body_len > N
  }

  /// The first copied byte, if any
  pub fn first(&self) -> Option<u8> {
    self.buf.first().copied()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn put(body: &str) -> Req {
    let mut req = Req::put("nombre");
    req.set_payload(body.bytes());
    req
  }

  #[test]
  fn body_within_bound_is_copied_whole() {
    let text = Text::<9>::from_req(&put("hello"));
    assert_eq!(text.as_bytes(), b"hello");
    assert_eq!(text.len(), 5);
    assert_eq!(text.body_len(), 5);
    assert!(!text.truncated());
  }

  #[test]
  fn oversized_body_is_cut_at_the_bound() {
    let text = Text::<4>::from_req(&put("overflowing"));
    assert_eq!(text.as_bytes(), b"over");
    assert_eq!(text.len(), 4);
    assert_eq!(text.body_len(), "overflowing".len());
    assert!(text.truncated());
  }

  #[test]
  fn empty_body() {
    let text = Text::<4>::from_req(&put(""));
    assert!(text.is_empty());
    assert_eq!(text.first(), None);
    assert!(!text.truncated());
  }
}
