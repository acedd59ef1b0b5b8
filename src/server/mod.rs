//! Resource registration & request dispatch.
//!
//! A [`Server`] is wired once at startup: each URI path is bound to the
//! handler that owns it, mirroring a static resource table. After that the
//! transport layer feeds it one request at a time through
//! [`Server::handle`], which produces at most one response addressed back
//! to the requester.
//!
//! Dispatch is strictly sequential (`handle` takes `&mut self`), so a
//! handler always observes the fully-applied effects of every request
//! before it; no locking is needed around the name store.

use crate::config::Config;
use crate::msg::code;
use crate::name::Name;
use crate::net::Addrd;
use crate::platform::Peripherals;
use crate::req::Req;
use crate::resp::Resp;

mod handlers;

/// A function bound to a URI path.
///
/// Handlers yield `None` only when no response can be constructed for the
/// request's message type; the dispatcher logs those.
pub type Handler<P> = fn(&mut Server<P>, &Addrd<Req>) -> Option<Resp>;

/// One entry of the resource table: a URI path and its handler.
pub struct Resource<P>
  where P: Peripherals
{
  path: &'static str,
  handler: Handler<P>,
}

impl<P> core::fmt::Debug for Resource<P> where P: Peripherals
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Resource").field("path", &self.path).finish()
  }
}

impl<P> Clone for Resource<P> where P: Peripherals
{
  fn clone(&self) -> Self {
    *self
  }
}

impl<P> Copy for Resource<P> where P: Peripherals {}

/// The device server: configuration, the name store, the peripherals and
/// the resource table.
///
/// See [`Server::device`] for a server with the board's resources bound,
/// and the crate docs for a full example.
pub struct Server<P>
  where P: Peripherals
{
  config: Config,
  name: Name,
  peripherals: P,
  resources: Vec<Resource<P>>,
}

impl<P> core::fmt::Debug for Server<P> where P: Peripherals
{
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Server")
     .field("config", &self.config)
     .field("name", &self.name)
     .field("resources", &self.resources)
     .finish_non_exhaustive()
  }
}

impl<P> Server<P> where P: Peripherals
{
  /// Create a server with nothing bound.
  ///
  /// Brings the peripherals up ([`Peripherals::init`]) and seeds the name
  /// store with the configured default.
  pub fn new(config: Config, mut peripherals: P) -> Self {
    peripherals.init();

    Self { name: Name::with_default(config.default_name),
           config,
           peripherals,
           resources: Vec::new() }
  }

  /// Create a server with the board's three resources bound:
  /// `led`, `sensor` and `nombre`.
  pub fn device(config: Config, peripherals: P) -> Self {
    let mut server = Self::new(config, peripherals);
    server.bind("led", handlers::led);
    server.bind("sensor", handlers::sensor);
    server.bind("nombre", handlers::nombre);
    server
  }

  /// Bind `path` to `handler`.
  ///
  /// One-time wiring; paths are expected to be unique and the binding
  /// order doesn't matter. The first binding wins if a path is repeated.
  pub fn bind(&mut self, path: &'static str, handler: Handler<P>) -> () {
    self.resources.push(Resource { path, handler });
  }

  /// The runtime configuration this server was created with
  pub fn config(&self) -> &Config {
    &self.config
  }

  /// The name resource's current state
  pub fn name(&self) -> &Name {
    &self.name
  }

  pub(crate) fn name_mut(&mut self) -> &mut Name {
    &mut self.name
  }

  pub(crate) fn peripherals_mut(&mut self) -> &mut P {
    &mut self.peripherals
  }

  /// Dispatch one inbound request, yielding at most one response addressed
  /// to the requester.
  ///
  /// Requests for paths nothing is bound to are answered `4.04 Not Found`;
  /// every bound handler answers every method it is offered. The only
  /// requests that go unanswered are message types that cannot carry a
  /// response (an inbound ACK or RESET), and those are logged and dropped.
  pub fn handle(&mut self, req: Addrd<Req>) -> Option<Addrd<Resp>> {
    log::trace!("{} /{} <- {}",
                req.data().code(),
                req.data().path(),
                req.addr());

    let bound = self.resources
                    .iter()
                    .find(|r| r.path == req.data().path())
                    .map(|r| r.handler);

    let resp = match bound {
      | Some(handler) => handler(self, &req),
      | None => self.not_found(&req),
    };

    match resp {
      | Some(resp) => {
        log::trace!("{} -> {}", resp.code(), req.addr());
        Some(req.map(|_| resp))
      },
      | None => {
        log::warn!("{:?} from {} cannot be answered, dropping",
                   req.data().msg_type(),
                   req.addr());
        None
      },
    }
  }

  fn not_found(&self, req: &Addrd<Req>) -> Option<Resp> {
    let mut resp = Resp::for_request(req.data())?;
    resp.set_code(code::NOT_FOUND);
    resp.set_payload(format!("resource {} not found", req.data().path()).into_bytes());
    Some(resp)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::msg::{code, Id, Token, Type};
  use crate::name;
  use crate::test::{exchange, PeripheralsMock};

  fn device() -> Server<PeripheralsMock> {
    Server::device(Config::default(), PeripheralsMock::default())
  }

  fn put_name(body: &str) -> Req {
    let mut req = Req::put("nombre");
    req.set_payload(body.bytes());
    req
  }

  fn led(body: &str) -> Req {
    let mut req = Req::put("led");
    req.set_payload(body.bytes());
    req
  }

  #[test]
  fn init_runs_once_at_startup() {
    let server = device();
    assert_eq!(server.peripherals.inits, 1);
  }

  #[test]
  fn get_name_yields_the_default() {
    let mut server = device();
    let resp = exchange(&mut server, Req::get("nombre")).unwrap();

    assert_eq!(resp.code(), code::CONTENT);
    assert_eq!(resp.payload_str().unwrap(), name::DEFAULT);
  }

  #[test]
  fn get_name_is_idempotent() {
    let mut server = device();

    let a = exchange(&mut server, Req::get("nombre")).unwrap();
    let b = exchange(&mut server, Req::get("nombre")).unwrap();

    assert_eq!(a.payload_str().unwrap(), b.payload_str().unwrap());
    assert_eq!(server.name().as_str(), name::DEFAULT);
  }

  #[test]
  fn put_then_get_round_trips() {
    let mut server = device();

    let put = exchange(&mut server, put_name("Rana Jose")).unwrap();
    assert_eq!(put.code(), code::CHANGED);
    assert!(put.payload().is_empty());

    let get = exchange(&mut server, Req::get("nombre")).unwrap();
    assert_eq!(get.payload_str().unwrap(), "Rana Jose");
  }

  #[test]
  fn delete_resets_to_the_default() {
    let mut server = device();

    exchange(&mut server, put_name("Rana")).unwrap();

    let del = exchange(&mut server, Req::delete("nombre")).unwrap();
    assert_eq!(del.code(), code::DELETED);

    let get = exchange(&mut server, Req::get("nombre")).unwrap();
    assert_eq!(get.payload_str().unwrap(), name::DEFAULT);
  }

  #[test]
  fn delete_restores_a_configured_default() {
    let config = Config { default_name: toad_string::String::from("zero") };
    let mut server = Server::device(config, PeripheralsMock::default());

    exchange(&mut server, put_name("Rana")).unwrap();
    exchange(&mut server, Req::delete("nombre")).unwrap();

    assert_eq!(server.name().as_str(), "zero");
  }

  #[test]
  fn put_at_the_length_bound_is_accepted() {
    let mut server = device();
    let body = "a".repeat(name::MAX_LEN);

    let resp = exchange(&mut server, put_name(&body)).unwrap();
    assert_eq!(resp.code(), code::CHANGED);
    assert_eq!(server.name().as_str(), body);
  }

  #[test]
  fn put_past_the_length_bound_is_rejected() {
    let mut server = device();
    let body = "a".repeat(name::MAX_LEN + 1);

    let resp = exchange(&mut server, put_name(&body)).unwrap();
    assert_eq!(resp.code(), code::BAD_REQUEST);
    assert_eq!(server.name().as_str(), name::DEFAULT);
  }

  #[test]
  fn put_with_bad_characters_is_rejected() {
    let mut server = device();

    for body in ["Rana7", "na-me", "¡hola!"] {
      let resp = exchange(&mut server, put_name(body)).unwrap();
      assert_eq!(resp.code(), code::BAD_REQUEST);
    }

    assert_eq!(server.name().as_str(), name::DEFAULT);
  }

  #[test]
  fn post_name_is_not_allowed() {
    let mut server = device();
    let resp = exchange(&mut server, Req::post("nombre")).unwrap();

    assert_eq!(resp.code(), code::METHOD_NOT_ALLOWED);
    assert_eq!(server.name().as_str(), name::DEFAULT);
  }

  #[test]
  fn led_one_drives_the_actuator_on() {
    let mut server = device();
    let resp = exchange(&mut server, led("1")).unwrap();

    assert_eq!(resp.code(), code::CHANGED);
    assert_eq!(server.peripherals.on_count, 1);
    assert_eq!(server.peripherals.off_count, 0);
  }

  #[test]
  fn led_zero_drives_the_actuator_off() {
    let mut server = device();
    let resp = exchange(&mut server, led("0")).unwrap();

    assert_eq!(resp.code(), code::CHANGED);
    assert_eq!(server.peripherals.on_count, 0);
    assert_eq!(server.peripherals.off_count, 1);
  }

  #[test]
  fn unrecognized_led_command_is_accepted_but_inert() {
    let mut server = device();
    let resp = exchange(&mut server, led("2")).unwrap();

    assert_eq!(resp.code(), code::CHANGED);
    assert_eq!(server.peripherals.on_count, 0);
    assert_eq!(server.peripherals.off_count, 0);
  }

  #[test]
  fn led_answers_changed_to_any_method() {
    let mut server = device();

    for req in [Req::get("led"), Req::post("led"), Req::delete("led")] {
      let resp = exchange(&mut server, req).unwrap();
      assert_eq!(resp.code(), code::CHANGED);
    }
  }

  #[test]
  fn sensor_renders_the_sample_truncated_toward_zero() {
    let mut server = Server::device(Config::default(),
                                    PeripheralsMock { temperature: 23.7,
                                                      ..Default::default() });

    let resp = exchange(&mut server, Req::get("sensor")).unwrap();
    assert_eq!(resp.code(), code::CONTENT);
    assert_eq!(resp.payload_str().unwrap(), "23");
  }

  #[test]
  fn sensor_renders_negative_samples_toward_zero() {
    let mut server = Server::device(Config::default(),
                                    PeripheralsMock { temperature: -5.5,
                                                      ..Default::default() });

    let resp = exchange(&mut server, Req::get("sensor")).unwrap();
    assert_eq!(resp.payload_str().unwrap(), "-5");
  }

  #[test]
  fn sensor_read_failure_is_a_server_error() {
    let mut server = Server::device(Config::default(),
                                    PeripheralsMock { broken: true,
                                                      ..Default::default() });

    let resp = exchange(&mut server, Req::get("sensor")).unwrap();
    assert_eq!(resp.code(), code::INTERNAL_SERVER_ERROR);
  }

  #[test]
  fn put_sensor_is_not_allowed() {
    let mut server = device();
    let resp = exchange(&mut server, Req::put("sensor")).unwrap();

    assert_eq!(resp.code(), code::METHOD_NOT_ALLOWED);
  }

  #[test]
  fn unknown_paths_are_not_found() {
    let mut server = device();
    let resp = exchange(&mut server, Req::get("dial")).unwrap();

    assert_eq!(resp.code(), code::NOT_FOUND);
    assert_eq!(resp.payload_str().unwrap(), "resource dial not found");
  }

  #[test]
  fn responses_are_correlated_to_the_request() {
    let mut server = device();

    let mut req = Req::get("nombre");
    req.set_msg_id(Id(1234));
    req.set_msg_token(Token(tinyvec::array_vec!([u8; 8] => 9, 9)));
    let token = req.msg_token();

    let resp = exchange(&mut server, req).unwrap();
    assert_eq!(resp.msg_type(), Type::Ack);
    assert_eq!(resp.msg_id(), Id(1234));
    assert_eq!(resp.token(), token);
  }

  #[test]
  fn inbound_acks_are_dropped() {
    let mut server = device();

    let mut req = Req::get("nombre");
    req.set_msg_type(Type::Ack);

    assert!(exchange(&mut server, req).is_none());
  }

  #[test]
  fn custom_binding_is_dispatched() {
    fn teapot<P: Peripherals>(_: &mut Server<P>, req: &Addrd<Req>) -> Option<Resp> {
      let mut resp = Resp::for_request(req.data())?;
      resp.set_code(crate::msg::Code::new(4, 18));
      Some(resp)
    }

    let mut server = Server::new(Config::default(), PeripheralsMock::default());
    server.bind("teapot", teapot);

    let resp = exchange(&mut server, Req::get("teapot")).unwrap();
    assert_eq!(resp.code(), crate::msg::Code::new(4, 18));
  }
}
