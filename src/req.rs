//! Requests

use toad_string::String;

use crate::msg::{code, Code, Id, Payload, Token, Type};

/// Longest URI path a request will carry, in bytes.
pub const PATH_CAPACITY: usize = 32;

/// Request methods
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Method {
  /// `0.01` GET
  Get,
  /// `0.02` POST
  Post,
  /// `0.03` PUT
  Put,
  /// `0.04` DELETE
  Delete,
}

impl Method {
  /// The [`Code`] for this method
  pub fn code(&self) -> Code {
    match self {
      | Method::Get => code::GET,
      | Method::Post => code::POST,
      | Method::Put => code::PUT,
      | Method::Delete => code::DELETE,
    }
  }

  /// Classify a message code as a request method.
  ///
  /// Yields `None` for response codes, the empty code, and request codes
  /// this crate does not speak (`0.05` FETCH and friends).
  ///
  /// ```
  /// use polliwog::msg::{code, Code};
  /// use polliwog::req::Method;
  ///
  /// assert_eq!(Method::from_code(code::PUT), Some(Method::Put));
  /// assert_eq!(Method::from_code(Code::new(0, 7)), None);
  /// ```
  pub fn from_code(code: Code) -> Option<Self> {
    match (code.class, code.detail) {
      | (0, 1) => Some(Method::Get),
      | (0, 2) => Some(Method::Post),
      | (0, 3) => Some(Method::Put),
      | (0, 4) => Some(Method::Delete),
      | _ => None,
    }
  }
}

/// A CoAP request
///
/// ```
/// use polliwog::req::{Method, Req};
///
/// let mut req = Req::put("nombre");
/// req.set_payload("Ana".bytes());
///
/// assert_eq!(req.method(), Some(Method::Put));
/// assert_eq!(req.path(), "nombre");
/// assert_eq!(req.payload_str().unwrap(), "Ana");
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Req {
  ty: Type,
  id: Id,
  token: Token,
  code: Code,
  path: String<PATH_CAPACITY>,
  payload: Payload,
}

impl Req {
  /// Create a request
  ///
  /// A leading `/` is stripped and at most [`PATH_CAPACITY`] bytes of the
  /// path are kept.
  pub fn new(method: Method, path: impl AsRef<str>) -> Self {
    let mut buf = String::new();
    for c in path.as_ref().trim_start_matches('/').chars() {
      if buf.len() + c.len_utf8() > PATH_CAPACITY {
        break;
      }

      buf.push(c);
    }

    Self { ty: Type::Con,
           id: Id(Default::default()),
           token: Token(Default::default()),
           code: method.code(),
           path: buf,
           payload: Payload(Default::default()) }
  }

  /// Creates a new GET request
  ///
  /// ```
  /// use polliwog::req::Req;
  ///
  /// let _req = Req::get("/sensor");
  /// ```
  pub fn get(path: impl AsRef<str>) -> Self {
    Self::new(Method::Get, path)
  }

  /// Creates a new POST request
  pub fn post(path: impl AsRef<str>) -> Self {
    Self::new(Method::Post, path)
  }

  /// Creates a new PUT request
  ///
  /// ```
  /// use polliwog::req::Req;
  ///
  /// let mut req = Req::put("/nombre");
  /// req.set_payload("Ana".bytes());
  /// ```
  pub fn put(path: impl AsRef<str>) -> Self {
    Self::new(Method::Put, path)
  }

  /// Creates a new DELETE request
  pub fn delete(path: impl AsRef<str>) -> Self {
    Self::new(Method::Delete, path)
  }

  /// Get the request method, if the message code is one
  pub fn method(&self) -> Option<Method> {
    Method::from_code(self.code)
  }

  /// Get the raw message code
  pub fn code(&self) -> Code {
    self.code
  }

  /// Get the request path
  pub fn path(&self) -> &str {
    self.path.as_str()
  }

  /// Get the request type (confirmable, non-confirmable)
  pub fn msg_type(&self) -> Type {
    self.ty
  }

  /// Set this request to be non-confirmable
  pub fn non(&mut self) -> () {
    self.ty = Type::Non;
  }

  #[cfg(test)]
  pub(crate) fn set_msg_type(&mut self, ty: Type) {
    self.ty = ty;
  }

  /// Get a copy of the message id for this request
  pub fn msg_id(&self) -> Id {
    self.id
  }

  /// Updates the message id for this request
  pub fn set_msg_id(&mut self, id: Id) {
    self.id = id;
  }

  /// Get a copy of the message token for this request
  pub fn msg_token(&self) -> Token {
    self.token
  }

  /// Updates the message token for this request
  pub fn set_msg_token(&mut self, token: Token) {
    self.token = token;
  }

  /// Add a payload to this request
  ///
  /// ```
  /// use polliwog::req::Req;
  ///
  /// let mut req = Req::put("/nombre");
  /// req.set_payload("Ana".bytes());
  /// ```
  pub fn set_payload<Bytes: IntoIterator<Item = u8>>(&mut self, payload: Bytes) {
    self.payload = Payload(payload.into_iter().collect());
  }

  /// Get the payload's raw bytes
  pub fn payload(&self) -> &[u8] {
    &self.payload.0
  }

  /// Get the payload and attempt to interpret it as an ASCII string
  pub fn payload_str(&self) -> Result<&str, core::str::Utf8Error> {
    core::str::from_utf8(self.payload())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn path_is_normalized() {
    assert_eq!(Req::get("/led").path(), "led");
    assert_eq!(Req::get("led").path(), "led");
  }

  #[test]
  fn long_paths_are_cut_at_capacity() {
    let path = "p".repeat(PATH_CAPACITY + 10);
    assert_eq!(Req::get(&path).path().len(), PATH_CAPACITY);
  }

  #[test]
  fn defaults() {
    let req = Req::get("sensor");
    assert_eq!(req.msg_type(), Type::Con);
    assert_eq!(req.msg_id(), Id(0));
    assert!(req.payload().is_empty());
  }
}
