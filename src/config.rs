//! Configuring runtime behavior

use toad_string::String;

use crate::name;

/// Runtime config
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Config {
  /// Name the `nombre` resource reports before any PUT, and restores on
  /// DELETE.
  ///
  /// Defaults to `"Sin nombre"`:
  /// ```
  /// use polliwog::config::Config;
  ///
  /// assert_eq!(Config::default().default_name.as_str(), "Sin nombre");
  /// ```
  pub default_name: String<{ name::MAX_LEN }>,
}

impl Default for Config {
  fn default() -> Self {
    Config { default_name: String::from(name::DEFAULT) }
  }
}
