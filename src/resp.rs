//! Responses

use crate::msg::{code, Code, Id, Payload, Token, Type};
use crate::req::Req;

/// A CoAP response
///
/// Created from the request it answers so that correlation (message type,
/// id, token) can never be wrong by construction.
///
/// ```
/// use polliwog::msg::code;
/// use polliwog::req::Req;
/// use polliwog::resp::Resp;
///
/// let req = Req::get("sensor");
///
/// let mut resp = Resp::for_request(&req).unwrap();
/// resp.set_code(code::CONTENT);
/// resp.set_payload("23".bytes());
///
/// assert_eq!(resp.msg_id(), req.msg_id());
/// assert_eq!(resp.token(), req.msg_token());
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Resp {
  ty: Type,
  id: Id,
  token: Token,
  code: Code,
  payload: Payload,
}

impl Resp {
  /// Create a new response for a given request.
  ///
  /// If the request is CONfirmable, this will return Some(ACK).
  ///
  /// If the request is NONconfirmable, this will return Some(NON).
  ///
  /// If the request is an ACK or RESET, no response can be built and this
  /// will return None.
  pub fn for_request(req: &Req) -> Option<Self> {
    match req.msg_type() {
      | Type::Con => Some(Self::ack(req)),
      | Type::Non => Some(Self::non(req)),
      | _ => None,
    }
  }

  /// Create a response ACKnowledging an incoming request.
  ///
  /// The ACK shares the request's id and token, so the reply it carries is
  /// piggybacked on the delivery receipt.
  pub fn ack(req: &Req) -> Self {
    Self { ty: Type::Ack,
           id: req.msg_id(),
           token: req.msg_token(),
           code: code::CONTENT,
           payload: Payload(Default::default()) }
  }

  /// Create a NONconfirmable response for an incoming request.
  ///
  /// Shares the request's token but gets its own id; used when the
  /// requester didn't ask for a delivery receipt.
  pub fn non(req: &Req) -> Self {
    Self { ty: Type::Non,
           id: Id(Default::default()),
           token: req.msg_token(),
           code: code::CONTENT,
           payload: Payload(Default::default()) }
  }

  /// Get the response code
  pub fn code(&self) -> Code {
    self.code
  }

  /// Change the response code
  ///
  /// ```
  /// use polliwog::msg::code;
  /// use polliwog::req::Req;
  /// use polliwog::resp::Resp;
  ///
  /// let req = Req::get("sensor");
  /// let mut resp = Resp::for_request(&req).unwrap();
  ///
  /// resp.set_code(code::INTERNAL_SERVER_ERROR);
  /// ```
  pub fn set_code(&mut self, code: Code) {
    self.code = code;
  }

  /// Add a payload to this response
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

  /// Get the message type
  pub fn msg_type(&self) -> Type {
    self.ty
  }

  /// Get the message id
  pub fn msg_id(&self) -> Id {
    self.id
  }

  /// Get the message token
  pub fn token(&self) -> Token {
    self.token
  }
}
