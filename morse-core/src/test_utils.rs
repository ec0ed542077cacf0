//! Test utilities for transmitter timing
//!
//! A [`VirtualClock`] hands out a recording sink and a delay provider that
//! share one simulated timeline, so a full transmission runs instantly and
//! every line transition is stamped with its virtual time.

use core::cell::{Cell, RefCell};

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::hal::{Duration, SignalSink};

/// Maximum number of recorded transitions
pub const CAPACITY: usize = 256;

/// One line change seen by the sink
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub at: Duration,
    pub active: bool,
}

/// A keyed mark followed by the silence before the next mark
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pulse {
    pub on: Duration,
    pub off: Duration,
}

/// Simulated time base shared by a [`RecordingSink`] and a [`VirtualDelay`]
#[derive(Default)]
pub struct VirtualClock {
    now_ns: Cell<u64>,
    active: Cell<bool>,
    transitions: RefCell<Vec<Transition, CAPACITY>>,
    overflowed: Cell<bool>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink that records transitions against this clock
    pub fn sink(&self) -> RecordingSink<'_> {
        RecordingSink { clock: self }
    }

    /// Delay provider that advances this clock instead of sleeping
    pub fn delay(&self) -> VirtualDelay<'_> {
        VirtualDelay { clock: self }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        Duration::from_micros(self.now_ns.get() / 1_000)
    }

    /// Last state written to the sink
    pub fn line_active(&self) -> bool {
        self.active.get()
    }

    /// Every sink invocation so far, in order
    pub fn transitions(&self) -> Vec<Transition, CAPACITY> {
        self.transitions.borrow().clone()
    }

    /// True if transitions were dropped because the buffer was full
    pub fn overflowed(&self) -> bool {
        self.overflowed.get()
    }

    /// Forget recorded transitions and rewind to zero
    pub fn reset(&self) {
        self.now_ns.set(0);
        self.active.set(false);
        self.transitions.borrow_mut().clear();
        self.overflowed.set(false);
    }

    /// Pair every mark with the silence that follows it
    ///
    /// Release edges without a preceding mark (word gaps) only lengthen the
    /// silence. The last pulse's silence runs to the current time.
    pub fn pulses(&self) -> Vec<Pulse, { CAPACITY / 2 }> {
        let mut pulses = Vec::new();
        let mut rising: Option<u64> = None;
        let mut pending: Option<(u64, u64)> = None;

        for transition in self.transitions.borrow().iter() {
            let at = transition.at.as_micros();
            if transition.active {
                if let Some((on, fall)) = pending.take() {
                    pulses.push(pulse(on, at - fall)).ok();
                }
                rising = Some(at);
            } else if let Some(start) = rising.take() {
                pending = Some((at - start, at));
            }
        }
        if let Some((on, fall)) = pending {
            pulses.push(pulse(on, self.now().as_micros() - fall)).ok();
        }
        pulses
    }

    fn record(&self, active: bool) {
        self.active.set(active);
        let transition = Transition {
            at: self.now(),
            active,
        };
        if self.transitions.borrow_mut().push(transition).is_err() {
            self.overflowed.set(true);
        }
    }

    fn advance_ns(&self, ns: u64) {
        self.now_ns.set(self.now_ns.get() + ns);
    }
}

fn pulse(on_us: u64, off_us: u64) -> Pulse {
    Pulse {
        on: Duration::from_micros(on_us),
        off: Duration::from_micros(off_us),
    }
}

/// Sink half of a [`VirtualClock`]
pub struct RecordingSink<'a> {
    clock: &'a VirtualClock,
}

impl SignalSink for RecordingSink<'_> {
    fn set_active(&mut self, active: bool) {
        self.clock.record(active);
    }
}

/// Delay half of a [`VirtualClock`]
pub struct VirtualDelay<'a> {
    clock: &'a VirtualClock,
}

impl DelayNs for VirtualDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance_ns(ns as u64);
    }

    fn delay_us(&mut self, us: u32) {
        self.clock.advance_ns(us as u64 * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.clock.advance_ns(ms as u64 * 1_000_000);
    }
}
