#![cfg_attr(not(feature = "std"), no_std)]

//! # Morse Core
//!
//! Morse code encoder and transmitter for embedded systems.
//! Turns text into timed on/off transitions on any boolean output line.

pub mod types;
pub mod error;
pub mod table;
pub mod encode;
pub mod transmitter;
pub mod hal;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;


pub use types::*;
pub use error::*;
pub use table::*;
pub use encode::*;
pub use transmitter::*;
pub use hal::{Duration, HalError, KeyOutput, SignalSink, hold};

#[cfg(feature = "std")]
pub use hal::ThreadDelay;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration: 60ms unit, 20 WPM
pub fn default_config() -> TransmitterConfig {
    TransmitterConfig::default()
}
