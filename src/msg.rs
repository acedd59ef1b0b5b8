//! The handful of CoAP message primitives the server surface is built from.
//!
//! Parsing and serializing these to the wire format is the transport layer's
//! concern; here they exist so handlers can correlate responses to requests
//! and speak in RFC 7252 codes.

use core::fmt;

use tinyvec::ArrayVec;

/// Indicates if a message is Confirmable, Non-confirmable, an
/// Acknowledgement, or a Reset.
///
/// See [RFC7252 - Message Details](https://datatracker.ietf.org/doc/html/rfc7252#section-3) for context
#[derive(Copy, Clone, Hash, Eq, Ord, PartialEq, PartialOrd, Debug)]
pub enum Type {
  /// The sender expects an [`Type::Ack`]; when no packets are lost each
  /// Confirmable message elicits exactly one Acknowledgement or Reset.
  Con,
  /// No acknowledgement required; used for messages that are repeated
  /// regularly anyway, such as sensor readings.
  Non,
  /// Acknowledges that a specific Confirmable message arrived. May carry a
  /// piggybacked response.
  Ack,
  /// The message was received but some context required to process it is
  /// missing.
  Reset,
}

/// # Message ID
///
/// 16-bit unsigned integer in network byte order. Used to detect message
/// duplication and to match Acknowledgement/Reset messages to the
/// Confirmable/Non-confirmable message they answer.
///
/// See [RFC7252 - Message Details](https://datatracker.ietf.org/doc/html/rfc7252#section-3) for context
#[derive(Copy, Clone, Hash, PartialEq, PartialOrd, Debug, Eq, Ord)]
pub struct Id(pub u16);

/// # Token
///
/// Opaque client-chosen bytes (up to 8) used to correlate a response with
/// the request it answers, independently of [`Id`].
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
pub struct Token(pub ArrayVec<[u8; 8]>);

/// Whether a [`Code`] names a request method, a response status, or the
/// empty message.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Kind {
  /// class 0, nonzero detail
  Request,
  /// class 2, 4 or 5
  Response,
  /// `0.00`
  Empty,
}

/// # Message Code
///
/// A `class.detail` pair identifying a message as a request method
/// (`0.01` GET), a response status (`2.05` Content), or empty (`0.00`).
///
/// ```
/// use polliwog::msg::Code;
///
/// assert_eq!(Code::new(2, 5).to_string(), "2.05".to_string());
/// ```
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Code {
  /// The class of the code:
  ///
  /// |class|meaning|
  /// |---|---|
  /// |`0`|request|
  /// |`2`|success response|
  /// |`4`|client error response|
  /// |`5`|server error response|
  pub class: u8,

  /// 2-digit integer (range `[0, 32)`) qualifying the class.
  pub detail: u8,
}

impl Code {
  /// Create a new Code
  ///
  /// ```
  /// use polliwog::msg::Code;
  ///
  /// let content = Code::new(2, 05);
  /// ```
  #[allow(clippy::zero_prefixed_literal)]
  pub const fn new(class: u8, detail: u8) -> Self {
    Self { class, detail }
  }

  /// Classify this code as a request method, response status, or empty.
  ///
  /// ```
  /// use polliwog::msg::{code, Code, Kind};
  ///
  /// assert_eq!(code::GET.kind(), Kind::Request);
  /// assert_eq!(code::CONTENT.kind(), Kind::Response);
  /// assert_eq!(Code::new(0, 0).kind(), Kind::Empty);
  /// ```
  pub fn kind(&self) -> Kind {
    match (self.class, self.detail) {
      | (0, 0) => Kind::Empty,
      | (0, _) => Kind::Request,
      | _ => Kind::Response,
    }
  }

  /// Get the human string representation of a message code as a `char`
  /// array, avoiding any heap allocation.
  ///
  /// ```
  /// use polliwog::msg::Code;
  ///
  /// let chars = Code { class: 2, detail: 5 }.to_human();
  /// assert_eq!(String::from_iter(chars), "2.05".to_string());
  /// ```
  pub fn to_human(&self) -> [char; 4] {
    let to_char = |d: u8| char::from_digit(d.into(), 10).unwrap_or('?');
    [to_char(self.class),
     '.',
     to_char(self.detail / 10),
     to_char(self.detail % 10)]
  }
}

impl fmt::Display for Code {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let [a, b, c, d] = self.to_human();
    write!(f, "{}{}{}{}", a, b, c, d)
  }
}

/// Message body bytes.
///
/// On the wire the body is delimited by the payload marker `0xFF`; that
/// bookkeeping belongs to the transport, so here the body is just bytes.
#[derive(Clone, PartialEq, PartialOrd, Debug, Default)]
pub struct Payload(pub Vec<u8>);

/// Request method and response status [`Code`]s used by this crate.
pub mod code {
  use super::Code;

  /// `0.01` GET
  pub const GET: Code = Code::new(0, 1);
  /// `0.02` POST
  pub const POST: Code = Code::new(0, 2);
  /// `0.03` PUT
  pub const PUT: Code = Code::new(0, 3);
  /// `0.04` DELETE
  pub const DELETE: Code = Code::new(0, 4);

  /// `2.02` Deleted
  pub const DELETED: Code = Code::new(2, 2);
  /// `2.04` Changed
  pub const CHANGED: Code = Code::new(2, 4);
  /// `2.05` Content
  pub const CONTENT: Code = Code::new(2, 5);

  /// `4.00` Bad Request
  pub const BAD_REQUEST: Code = Code::new(4, 0);
  /// `4.04` Not Found
  pub const NOT_FOUND: Code = Code::new(4, 4);
  /// `4.05` Method Not Allowed
  pub const METHOD_NOT_ALLOWED: Code = Code::new(4, 5);

  /// `5.00` Internal Server Error
  pub const INTERNAL_SERVER_ERROR: Code = Code::new(5, 0);
}
