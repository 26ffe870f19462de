//! `glint blink` — run the two-LED blinker on the bench.

use glint_logic::Blinker;
use glint_sim::{Bench, TraceSink};

use crate::runner;
use crate::{BlinkArgs, GlobalArgs};

/// Runs the `glint blink` command.
pub fn run(args: &BlinkArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (_profile, clock) = runner::resolve_board(&args.bench, global)?;
    let rate = args.rate.parse()?;

    let blinker = Blinker::new(clock, rate)?;
    let interval = blinker.toggle_interval();
    if !global.quiet {
        eprintln!("   Blinking at {rate} (toggle every {interval} ticks)");
    }

    let ticks = runner::run_ticks(&args.bench, clock)?;
    let mut bench = Bench::new(blinker, clock)?;

    let mut trace = runner::open_trace(&args.bench, "blink")?;
    let lines = match trace.as_mut() {
        Some(t) => Some((t.add_line("red", 1)?, t.add_line("green", 1)?)),
        None => None,
    };

    let held = args.hold_button;
    let mut toggles = 0u64;
    let mut red = false;
    for _ in 0..ticks {
        let frame = bench.step(held);
        red = frame.red;
        if frame.toggled {
            toggles += 1;
            if global.verbose {
                eprintln!("   t={}ns red={}", bench.time_ns(), u8::from(frame.red));
            }
        }
        if let (Some(t), Some((red_line, green_line))) = (trace.as_mut(), lines) {
            t.record(bench.time_ns(), red_line, u64::from(frame.red))?;
            t.record(bench.time_ns(), green_line, u64::from(frame.green))?;
        }
    }
    if let Some(t) = trace.as_mut() {
        t.finish()?;
    }
    runner::report_trace(&args.bench, global);

    if args.bench.summary {
        println!(
            "blink: ticks={} toggles={toggles} final_red={}",
            bench.ticks(),
            u8::from(red)
        );
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn global() -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
        }
    }

    fn bench_args(seconds: f64, vcd: Option<String>) -> crate::BenchArgs {
        crate::BenchArgs {
            board: "icebreaker-bitsy".into(),
            seconds,
            vcd,
            summary: false,
        }
    }

    #[test]
    fn blink_run_succeeds() {
        let args = BlinkArgs {
            rate: "3Hz".into(),
            hold_button: false,
            bench: bench_args(0.01, None),
        };
        assert_eq!(run(&args, &global()).unwrap(), 0);
    }

    #[test]
    fn blink_writes_vcd() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blink.vcd");
        let args = BlinkArgs {
            rate: "3Hz".into(),
            hold_button: false,
            // One second covers several toggle edges at 3 Hz.
            bench: bench_args(1.0, Some(path.to_str().unwrap().into())),
        };
        assert_eq!(run(&args, &global()).unwrap(), 0);

        let mut out = String::new();
        std::fs::File::open(&path)
            .unwrap()
            .read_to_string(&mut out)
            .unwrap();
        assert!(out.contains("$var wire 1 ! red $end"));
        assert!(out.contains("1!"));
    }

    #[test]
    fn blink_rejects_bad_rate() {
        let args = BlinkArgs {
            rate: "fast".into(),
            hold_button: false,
            bench: bench_args(0.01, None),
        };
        assert!(run(&args, &global()).is_err());
    }

    #[test]
    fn blink_rejects_unknown_board() {
        let mut bench = bench_args(0.01, None);
        bench.board = "no-such-board".into();
        let args = BlinkArgs {
            rate: "3Hz".into(),
            hold_button: false,
            bench,
        };
        assert!(run(&args, &global()).is_err());
    }

    #[test]
    fn blink_rejects_zero_seconds() {
        let args = BlinkArgs {
            rate: "3Hz".into(),
            hold_button: false,
            bench: bench_args(0.0, None),
        };
        assert!(run(&args, &global()).is_err());
    }
}
