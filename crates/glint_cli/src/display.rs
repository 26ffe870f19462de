//! `glint display` and `glint display-two` — multiplexed digit demos.
//!
//! `display` drives one bank of N digits, showing either a fixed hex value
//! or a running BCD count. `display-two` reproduces the split four-digit
//! arrangement of the reference design: one BCD counter feeding two
//! independent two-digit banks, low digits on one, high digits on the
//! other.

use glint_common::Frequency;
use glint_logic::{BcdCounter, DisplayController, Synchronous};
use glint_sim::{Bench, TraceSink};

use crate::runner;
use crate::{DisplayArgs, DisplayTwoArgs, GlobalArgs};

/// Runs the `glint display` command.
pub fn run(args: &DisplayArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (_profile, clock) = runner::resolve_board(&args.bench, global)?;
    let refresh: Frequency = args.refresh.parse()?;

    let mut controller = DisplayController::new(clock, refresh, args.digits, 4 * args.digits)?;
    let fixed = match &args.value {
        Some(text) => Some(parse_hex_value(text, args.digits)?),
        None => None,
    };
    let mut counter = match fixed {
        Some(_) => None,
        None => Some(BcdCounter::new(clock, args.count_rate.parse()?, args.digits)?),
    };
    if !global.quiet {
        eprintln!(
            "   Driving {} digits at {refresh} (advance every {} ticks)",
            args.digits,
            controller.refresh_interval()
        );
    }

    let ticks = runner::run_ticks(&args.bench, clock)?;
    let mut trace = runner::open_trace(&args.bench, "display")?;
    let lines = match trace.as_mut() {
        Some(t) => Some((
            t.add_line("segments", 7)?,
            t.add_line("select", args.digits)?,
        )),
        None => None,
    };

    let mut advances = 0u64;
    let mut value = fixed.unwrap_or(0);
    let mut tick_count = 0u64;
    for _ in 0..ticks {
        if let Some(ctr) = counter.as_mut() {
            value = ctr.tick(()).value;
        }
        let frame = controller.tick(value);
        tick_count += 1;
        let time_ns = tick_time_ns(clock, tick_count);
        if frame.advanced {
            advances += 1;
            if global.verbose {
                eprintln!(
                    "   t={time_ns}ns digit={} segments={:#09b}",
                    frame.select,
                    frame.segments.bits()
                );
            }
        }
        if let (Some(t), Some((seg_line, sel_line))) = (trace.as_mut(), lines) {
            t.record(time_ns, seg_line, u64::from(frame.segments.bits()))?;
            t.record(time_ns, sel_line, u64::from(frame.select_one_hot()))?;
        }
    }
    if let Some(t) = trace.as_mut() {
        t.finish()?;
    }
    runner::report_trace(&args.bench, global);

    if args.bench.summary {
        println!(
            "display: ticks={tick_count} advances={advances} final_value={value:#x}"
        );
    }
    Ok(0)
}

/// Runs the `glint display-two` command.
pub fn run_two(
    args: &DisplayTwoArgs,
    global: &GlobalArgs,
) -> Result<i32, Box<dyn std::error::Error>> {
    let (_profile, clock) = runner::resolve_board(&args.bench, global)?;
    let refresh: Frequency = args.refresh.parse()?;

    let mut low_bank = DisplayController::new(clock, refresh, 2, 8)?;
    let mut high_bank = DisplayController::new(clock, refresh, 2, 8)?;
    let counter = BcdCounter::new(clock, args.count_rate.parse()?, 4)?;
    if !global.quiet {
        eprintln!(
            "   Driving two 2-digit banks at {refresh} (advance every {} ticks)",
            low_bank.refresh_interval()
        );
    }

    let ticks = runner::run_ticks(&args.bench, clock)?;
    // The bench owns the counter; the banks tick in lockstep with it.
    let mut bench = Bench::new(counter, clock)?;

    let mut trace = runner::open_trace(&args.bench, "display_two")?;
    let lines = match trace.as_mut() {
        Some(t) => Some((
            t.add_line("segments_low", 7)?,
            t.add_line("select_low", 2)?,
            t.add_line("segments_high", 7)?,
            t.add_line("select_high", 2)?,
        )),
        None => None,
    };

    let mut value = 0u64;
    for _ in 0..ticks {
        let count = bench.step(());
        value = count.value;
        let low = low_bank.tick(value & 0xff);
        let high = high_bank.tick((value >> 8) & 0xff);
        if let (Some(t), Some((seg_lo, sel_lo, seg_hi, sel_hi))) = (trace.as_mut(), lines) {
            let time_ns = bench.time_ns();
            t.record(time_ns, seg_lo, u64::from(low.segments.bits()))?;
            t.record(time_ns, sel_lo, u64::from(low.select_one_hot()))?;
            t.record(time_ns, seg_hi, u64::from(high.segments.bits()))?;
            t.record(time_ns, sel_hi, u64::from(high.select_one_hot()))?;
        }
    }
    if let Some(t) = trace.as_mut() {
        t.finish()?;
    }
    runner::report_trace(&args.bench, global);

    if args.bench.summary {
        println!("display-two: ticks={} final_value={value:#06x}", bench.ticks());
    }
    Ok(0)
}

/// Nanosecond timestamp of the `ticks`-th edge of `clock`.
fn tick_time_ns(clock: Frequency, ticks: u64) -> u64 {
    (ticks as f64 * clock.period_ns()).round() as u64
}

/// Parses a fixed display value given in hex, e.g. "4F" or "0x4F".
fn parse_hex_value(text: &str, digits: u32) -> Result<u64, Box<dyn std::error::Error>> {
    let trimmed = text.trim_start_matches("0x").trim_start_matches("0X");
    let value = u64::from_str_radix(trimmed, 16)
        .map_err(|e| format!("bad hex value '{text}': {e}"))?;
    let width = 4 * digits;
    if width < 64 && value >> width != 0 {
        return Err(format!("value {text} does not fit in {digits} digits").into());
    }
    Ok(value)
}
