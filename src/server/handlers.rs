//! The three resource handlers.
//!
//! Each one is a small state machine from (method, body) to (side effect,
//! response code). They all answer through [`Resp::for_request`] so the
//! response type, id and token are correct by construction.

use super::Server;
use crate::msg::code;
use crate::name::{self, InvalidName};
use crate::net::Addrd;
use crate::payload::Text;
use crate::platform::Peripherals;
use crate::req::{Method, Req};
use crate::resp::Resp;

/// Longest LED command body worth looking at; only the first byte matters.
const LED_CMD_LEN: usize = 9;

/// `led` — payload-driven actuator control.
///
/// Body `"1"` drives the LED on, `"0"` drives it off, anything else does
/// nothing. Always answers `2.04 Changed`: unrecognized commands are
/// accepted and ignored.
pub(crate) fn led<P>(server: &mut Server<P>, req: &Addrd<Req>) -> Option<Resp>
  where P: Peripherals
{
  let mut resp = Resp::for_request(req.data())?;
  let cmd = Text::<LED_CMD_LEN>::from_req(req.data());

  match cmd.first() {
    | Some(b'1') => {
      log::debug!("led: on");
      server.peripherals_mut().led_on();
    },
    | Some(b'0') => {
      log::debug!("led: off");
      server.peripherals_mut().led_off();
    },
    | _ => log::debug!("led: ignoring command {:?}", cmd.as_bytes()),
  }

  resp.set_code(code::CHANGED);
  Some(resp)
}

/// `sensor` — read-only temperature resource.
///
/// GET samples the sensor and answers `2.05 Content` with the reading
/// rendered as a decimal integer, truncated toward zero. A failed read
/// answers `5.00`; any other method answers `4.05`.
pub(crate) fn sensor<P>(server: &mut Server<P>, req: &Addrd<Req>) -> Option<Resp>
  where P: Peripherals
{
  let mut resp = Resp::for_request(req.data())?;

  match req.data().method() {
    | Some(Method::Get) => match server.peripherals_mut().read_temperature() {
      | Ok(celsius) => {
        log::debug!("sensor: {}", celsius as i32);
        resp.set_code(code::CONTENT);
        resp.set_payload(format!("{}", celsius as i32).into_bytes());
      },
      | Err(e) => {
        log::error!("sensor: read failed: {:?}", e);
        resp.set_code(code::INTERNAL_SERVER_ERROR);
      },
    },
    | _ => resp.set_code(code::METHOD_NOT_ALLOWED),
  }

  Some(resp)
}

/// `nombre` — read/write/reset state machine over the name store.
///
/// GET answers `2.05 Content` with the current value. PUT replaces it when
/// the body passes validation (`2.04`), and answers `4.00 Bad Request`
/// without touching the store when it doesn't. DELETE restores the default
/// (`2.02`). Any other method answers `4.05`.
pub(crate) fn nombre<P>(server: &mut Server<P>, req: &Addrd<Req>) -> Option<Resp>
  where P: Peripherals
{
  let mut resp = Resp::for_request(req.data())?;

  match req.data().method() {
    | Some(Method::Get) => {
      resp.set_code(code::CONTENT);
      resp.set_payload(server.name().as_str().bytes());
    },
    | Some(Method::Put) => {
      let text = Text::<{ name::MAX_LEN }>::from_req(req.data());

      match server.name_mut().set(&text) {
        | Ok(()) => {
          log::debug!("nombre: now {:?}", server.name().as_str());
          resp.set_code(code::CHANGED);
        },
        | Err(InvalidName::TooLong { len }) => {
          log::warn!("nombre: rejected {} byte body (max {})", len, name::MAX_LEN);
          resp.set_code(code::BAD_REQUEST);
        },
        | Err(InvalidName::Character { index }) => {
          log::warn!("nombre: rejected, invalid character at {}", index);
          resp.set_code(code::BAD_REQUEST);
        },
      }
    },
    | Some(Method::Delete) => {
      server.name_mut().reset();
      log::debug!("nombre: reset to {:?}", server.name().as_str());
      resp.set_code(code::DELETED);
    },
    | _ => resp.set_code(code::METHOD_NOT_ALLOWED),
  }

  Some(resp)
}
