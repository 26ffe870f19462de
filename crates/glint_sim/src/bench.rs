//! The bench harness: a clocked loop around one synchronous design.

use glint_common::Frequency;
use glint_logic::Synchronous;

use crate::error::SimError;

/// Number of whole ticks a clock completes in `seconds` of wall time.
pub fn ticks_in(clock: Frequency, seconds: f64) -> u64 {
    (clock.hz() * seconds) as u64
}

/// Steps a [`Synchronous`] design one clock edge at a time.
///
/// The bench owns the design and a tick counter, and maps ticks to
/// nanoseconds through the clock period so trace timestamps line up with
/// real hardware timing.
#[derive(Debug)]
pub struct Bench<M: Synchronous> {
    module: M,
    period_ns: f64,
    ticks: u64,
}

impl<M: Synchronous> Bench<M> {
    /// Wraps `module` in a bench clocked at `clock`.
    pub fn new(module: M, clock: Frequency) -> Result<Self, SimError> {
        if !clock.is_positive() {
            return Err(SimError::InvalidClock(clock));
        }
        Ok(Self {
            module,
            period_ns: clock.period_ns(),
            ticks: 0,
        })
    }

    /// Number of ticks stepped so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Elapsed simulated time in nanoseconds.
    pub fn time_ns(&self) -> u64 {
        (self.ticks as f64 * self.period_ns).round() as u64
    }

    /// The design under test.
    pub fn module(&self) -> &M {
        &self.module
    }

    /// Applies one clock edge with the given input.
    pub fn step(&mut self, input: M::Input) -> M::Output {
        self.ticks += 1;
        self.module.tick(input)
    }

    /// Runs `count` ticks, computing the input for each tick with
    /// `input_fn` and handing every output to `observe` along with the
    /// tick's timestamp in nanoseconds.
    pub fn run(
        &mut self,
        count: u64,
        mut input_fn: impl FnMut(u64) -> M::Input,
        mut observe: impl FnMut(u64, &M::Output),
    ) {
        for _ in 0..count {
            let tick = self.ticks;
            let out = self.step(input_fn(tick));
            observe(self.time_ns(), &out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{TraceSink, VcdTrace};
    use glint_logic::{Blinker, DisplayController};

    #[test]
    fn rejects_non_positive_clock() {
        let blinker = Blinker::new(Frequency::from_hz(100.0), Frequency::from_hz(5.0)).unwrap();
        let err = Bench::new(blinker, Frequency::from_hz(0.0)).unwrap_err();
        assert!(matches!(err, SimError::InvalidClock(_)));
    }

    #[test]
    fn tick_to_time_mapping() {
        let clock = Frequency::from_mhz(12.0);
        let blinker = Blinker::new(clock, Frequency::from_hz(3.0)).unwrap();
        let mut bench = Bench::new(blinker, clock).unwrap();
        assert_eq!(bench.time_ns(), 0);
        bench.step(false);
        // One 12 MHz period is 83.33 ns, rounded.
        assert_eq!(bench.time_ns(), 83);
        for _ in 0..11_999_999 {
            bench.step(false);
        }
        assert_eq!(bench.ticks(), 12_000_000);
        assert_eq!(bench.time_ns(), 1_000_000_000);
    }

    #[test]
    fn run_feeds_inputs_and_observes_outputs() {
        let clock = Frequency::from_hz(100.0);
        let blinker = Blinker::new(clock, Frequency::from_hz(5.0)).unwrap();
        let mut bench = Bench::new(blinker, clock).unwrap();
        let mut toggles = 0u32;
        bench.run(
            100,
            |_| false,
            |_, out| {
                if out.toggled {
                    toggles += 1;
                }
            },
        );
        assert_eq!(bench.ticks(), 100);
        assert_eq!(toggles, 10);
    }

    #[test]
    fn ticks_in_scales_with_clock() {
        assert_eq!(ticks_in(Frequency::from_mhz(12.0), 1.0), 12_000_000);
        assert_eq!(ticks_in(Frequency::from_hz(100.0), 0.5), 50);
    }

    // 12 MHz clock, 250 Hz refresh, two digits showing 0x4F: the select
    // line alternates every 24000 ticks and the segment lines carry the
    // glyphs for F and 4.
    #[test]
    fn two_digit_display_end_to_end() {
        let clock = Frequency::from_mhz(12.0);
        let ctrl =
            DisplayController::new(clock, Frequency::from_hz(250.0), 2, 8).unwrap();
        assert_eq!(ctrl.refresh_interval(), 24_000);

        let mut bench = Bench::new(ctrl, clock).unwrap();
        let mut trace = VcdTrace::new(Vec::new(), "display");
        let segments = trace.add_line("segments", 7).unwrap();
        let select = trace.add_line("select", 1).unwrap();

        let mut seen = [None::<u8>; 2];
        bench.run(
            96_000,
            |_| 0x4F,
            |time_ns, frame| {
                trace.record(time_ns, segments, frame.segments.bits() as u64).unwrap();
                trace.record(time_ns, select, frame.select as u64).unwrap();
                seen[frame.select as usize] = Some(frame.segments.bits());
            },
        );
        trace.finish().unwrap();

        // Low nibble 0xF on digit 0, high nibble 0x4 on digit 1.
        assert_eq!(seen[0], Some(0b0111000));
        assert_eq!(seen[1], Some(0b1001100));

        let out = String::from_utf8(trace.into_inner()).unwrap();
        assert!(out.contains("$var wire 7 ! segments $end"));
        assert!(out.contains("b0111000 !"));
        assert!(out.contains("b1001100 !"));
        // Each select alternation lands 24000 ticks (2 ms) apart.
        assert!(out.contains("#2000000"));
        assert!(out.contains("#4000000"));
    }
}
