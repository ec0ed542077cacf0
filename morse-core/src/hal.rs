//! Hardware abstraction for the transmit line and its timing base

// Re-export time types based on feature
#[cfg(feature = "embassy-time")]
pub use embassy_time::Duration;

#[cfg(not(feature = "embassy-time"))]
pub use self::mock_time::Duration;

#[cfg(not(feature = "embassy-time"))]
mod mock_time {
    /// Mock duration type with microsecond resolution
    ///
    /// Arithmetic saturates at `u64::MAX` microseconds instead of wrapping.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct Duration(u64);

    impl Duration {
        pub const fn from_millis(ms: u64) -> Self {
            Self(ms.saturating_mul(1_000))
        }

        pub const fn from_micros(us: u64) -> Self {
            Self(us)
        }

        pub const fn as_millis(&self) -> u64 {
            self.0 / 1_000
        }

        pub const fn as_micros(&self) -> u64 {
            self.0
        }
    }

    impl core::ops::Div<u32> for Duration {
        type Output = Duration;

        fn div(self, rhs: u32) -> Duration {
            Duration(self.0 / rhs as u64)
        }
    }

    impl core::ops::Mul<u32> for Duration {
        type Output = Duration;

        fn mul(self, rhs: u32) -> Duration {
            Duration(self.0.saturating_mul(rhs as u64))
        }
    }

    impl core::ops::Add for Duration {
        type Output = Duration;

        fn add(self, rhs: Duration) -> Duration {
            Duration(self.0.saturating_add(rhs.0))
        }
    }

    impl core::ops::AddAssign for Duration {
        fn add_assign(&mut self, rhs: Duration) {
            self.0 = self.0.saturating_add(rhs.0);
        }
    }
}

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Error types for HAL operations
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HalError {
    /// GPIO operation failed
    GpioError,
}

impl core::fmt::Display for HalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HalError::GpioError => write!(f, "GPIO operation failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HalError {}

/// Boolean output line driven by the transmitter
///
/// `true` means the line is active (key down, LED lit, buzzer sounding).
/// Implementations are called synchronously from inside `send` and must
/// return quickly relative to one unit duration.
pub trait SignalSink {
    /// Drive the line to the given state
    fn set_active(&mut self, active: bool);
}

impl<F> SignalSink for F
where
    F: FnMut(bool),
{
    fn set_active(&mut self, active: bool) {
        self(active)
    }
}

/// Signal sink backed by an embedded-hal output pin
///
/// Pin errors cannot travel back through `SignalSink`, so the first failure
/// is latched and kept until the caller collects it with [`KeyOutput::take_fault`].
pub struct KeyOutput<P> {
    pin: P,
    inverted: bool,
    fault: Option<HalError>,
}

impl<P> KeyOutput<P>
where
    P: OutputPin,
{
    /// Wrap a pin. With `inverted` set the line is active low.
    pub fn new(pin: P, inverted: bool) -> Self {
        Self {
            pin,
            inverted,
            fault: None,
        }
    }

    /// First pin failure since the last `take_fault`, if any
    pub fn fault(&self) -> Option<HalError> {
        self.fault
    }

    /// Collect and clear the latched pin failure
    pub fn take_fault(&mut self) -> Option<HalError> {
        self.fault.take()
    }

    /// Give the pin back to the caller
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> SignalSink for KeyOutput<P>
where
    P: OutputPin,
{
    fn set_active(&mut self, active: bool) {
        let level = if self.inverted { !active } else { active };
        let result = if level {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if result.is_err() && self.fault.is_none() {
            self.fault = Some(HalError::GpioError);
        }
    }
}

/// Block for `duration` on the given delay provider
///
/// `DelayNs` takes 32-bit arguments, so long holds are issued in chunks.
pub fn hold<D: DelayNs>(delay: &mut D, duration: Duration) {
    let mut remaining = duration.as_micros();
    while remaining > 0 {
        let step = remaining.min(u32::MAX as u64) as u32;
        delay.delay_us(step);
        remaining -= step as u64;
    }
}

/// `unit * count`, saturating at `u64::MAX` microseconds
pub fn scale(unit: Duration, count: u64) -> Duration {
    Duration::from_micros(unit.as_micros().saturating_mul(count))
}

/// Delay provider that sleeps the current OS thread
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug, Default)]
pub struct ThreadDelay;

#[cfg(feature = "std")]
impl DelayNs for ThreadDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
    }

    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(std::time::Duration::from_micros(us as u64));
    }
}
