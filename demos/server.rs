//! Drive the device server through the exchanges a CoAP client on the
//! network would produce, against a stub board that logs what it's told to
//! do.
//!
//! ```sh
//! cargo run --example server
//! ```

use polliwog::config::Config;
use polliwog::msg::Id;
use polliwog::net::Addrd;
use polliwog::platform::Peripherals;
use polliwog::req::Req;
use polliwog::server::Server;

struct Board;

impl Peripherals for Board {
  type Error = &'static str;

  fn init(&mut self) {
    log::info!("[board] pins + i2c + sensor up");
  }

  fn led_on(&mut self) {
    log::info!("[board] LED on");
  }

  fn led_off(&mut self) {
    log::info!("[board] LED off");
  }

  fn read_temperature(&mut self) -> Result<f64, Self::Error> {
    Ok(23.7)
  }
}

pub fn main() {
  std::env::set_var("RUST_LOG", "trace");
  simple_logger::init_with_env().unwrap();

  let peer = "127.0.0.1:2222".parse().unwrap();
  let mut server = Server::device(Config::default(), Board);

  let mut id = 0u16;
  let mut send = |server: &mut Server<Board>, req: Req| {
    let mut req = req;
    id += 1;
    req.set_msg_id(Id(id));

    let resp = server.handle(Addrd(req, peer)).unwrap();
    log::info!("<- {} {:?}",
               resp.data().code(),
               resp.data().payload_str().unwrap_or("<bytes>"));
  };

  let with_body = |req: Req, body: &str| {
    let mut req = req;
    req.set_payload(body.bytes());
    req
  };

  send(&mut server, Req::get("sensor"));
  send(&mut server, Req::get("nombre"));

  send(&mut server, with_body(Req::put("nombre"), "Rana Jose"));
  send(&mut server, Req::get("nombre"));

  send(&mut server, with_body(Req::put("nombre"), "R2D2"));
  send(&mut server, with_body(Req::put("nombre"), "unnombredemasiadolargo"));

  send(&mut server, Req::delete("nombre"));
  send(&mut server, Req::get("nombre"));

  send(&mut server, with_body(Req::put("led"), "1"));
  send(&mut server, with_body(Req::put("led"), "0"));
  send(&mut server, with_body(Req::put("led"), "2"));

  send(&mut server, Req::get("dial"));
}
