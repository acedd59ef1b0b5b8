//! `polliwog` is a small CoAP device server for constrained boards: it binds
//! a handful of URI paths to the peripherals behind them and answers every
//! request with exactly one correctly-typed response.
//!
//! ## Resources
//!
//! | path     | methods            | behavior                                            |
//! |----------|--------------------|-----------------------------------------------------|
//! | `led`    | any                | body `"1"`/`"0"` drives the LED; always 2.04 Changed |
//! | `sensor` | GET                | 2.05 Content with the temperature as a decimal integer |
//! | `nombre` | GET / PUT / DELETE | read / replace / reset a short stored name          |
//!
//! The transport is not part of this crate: something else (a UDP socket, a
//! Thread radio stack, a test harness) parses datagrams into [`req::Req`]s
//! and writes the [`resp::Resp`]s the server hands back. Peripherals sit
//! behind the [`platform::Peripherals`] trait the same way.
//!
//! ```
//! use polliwog::config::Config;
//! use polliwog::net::Addrd;
//! use polliwog::platform::Peripherals;
//! use polliwog::req::Req;
//! use polliwog::server::Server;
//!
//! struct Board;
//!
//! impl Peripherals for Board {
//!   type Error = ();
//!
//!   fn led_on(&mut self) {}
//!
//!   fn led_off(&mut self) {}
//!
//!   fn read_temperature(&mut self) -> Result<f64, ()> {
//!     Ok(23.7)
//!   }
//! }
//!
//! let mut server = Server::device(Config::default(), Board);
//!
//! let req = Req::get("nombre");
//! let resp = server.handle(Addrd(req, "127.0.0.1:5683".parse().unwrap()))
//!                  .unwrap();
//!
//! assert_eq!(resp.data().payload_str().unwrap(), "Sin nombre");
//! ```
// -
// style
#![allow(clippy::unused_unit)]
// -
// deny
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![deny(missing_copy_implementations)]
#![cfg_attr(not(test), deny(unsafe_code))]
// -
// warnings
#![cfg_attr(not(test), warn(unreachable_pub))]


/// message primitives: types, ids, tokens, codes
pub mod msg;

/// network addressing
pub mod net;

/// requests
pub mod req;

/// responses
pub mod resp;

/// bounded decoding of request bodies
pub mod payload;

/// the name resource: storage and input rules
pub mod name;

/// peripherals consumed by the request handlers
pub mod platform;

/// resource registration & request dispatch
pub mod server;

/// configuring runtime behavior
pub mod config;
