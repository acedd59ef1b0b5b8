//! The peripherals the request handlers drive.
//!
//! Everything board-specific (GPIO, I2C, the sensor part on the other end)
//! hides behind [`Peripherals`]; the server only ever toggles the LED and
//! asks for a temperature.

use core::fmt::Debug;

/// LED and temperature-sensor drivers consumed by the server.
///
/// ```
/// use polliwog::platform::Peripherals;
///
/// struct Board {
///   led: bool,
/// }
///
/// impl Peripherals for Board {
///   type Error = ();
///
///   fn led_on(&mut self) {
///     self.led = true;
///   }
///
///   fn led_off(&mut self) {
///     self.led = false;
///   }
///
///   fn read_temperature(&mut self) -> Result<f64, ()> {
///     Ok(21.0)
///   }
/// }
/// ```
pub trait Peripherals {
  /// Error produced by a failed sensor read
  type Error: Debug;

  /// Bring the hardware up.
  ///
  /// Called exactly once, when the server is created. The default does
  /// nothing, for boards whose drivers are ready as constructed.
  fn init(&mut self) {}

  /// Drive the LED on. Fire-and-forget.
  fn led_on(&mut self);

  /// Drive the LED off. Fire-and-forget.
  fn led_off(&mut self);

  /// Sample the temperature sensor, in degrees Celsius.
  fn read_temperature(&mut self) -> Result<f64, Self::Error>;
}
