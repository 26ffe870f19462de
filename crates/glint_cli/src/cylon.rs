//! `glint cylon` — run the bouncing LED chaser on the bench.

use glint_logic::Chaser;
use glint_sim::{Bench, TraceSink};

use crate::runner;
use crate::{CylonArgs, GlobalArgs};

/// Runs the `glint cylon` command.
pub fn run(args: &CylonArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (_profile, clock) = runner::resolve_board(&args.bench, global)?;
    let rate = args.rate.parse()?;

    let chaser = Chaser::new(clock, rate, args.lanes)?;
    let interval = chaser.step_interval();
    if !global.quiet {
        eprintln!(
            "   Sweeping {} lanes at {rate} (step every {interval} ticks)",
            args.lanes
        );
    }

    let ticks = runner::run_ticks(&args.bench, clock)?;
    let mut bench = Bench::new(chaser, clock)?;

    let mut trace = runner::open_trace(&args.bench, "cylon")?;
    let lanes_line = match trace.as_mut() {
        Some(t) => Some(t.add_line("lanes", args.lanes)?),
        None => None,
    };

    let mut steps = 0u64;
    let mut last = 0u32;
    for _ in 0..ticks {
        let pattern = bench.step(());
        if pattern != last {
            steps += 1;
            if global.verbose {
                eprintln!("   t={}ns lanes={pattern:0width$b}", bench.time_ns(), width = args.lanes as usize);
            }
            last = pattern;
        }
        if let (Some(t), Some(line)) = (trace.as_mut(), lanes_line) {
            t.record(bench.time_ns(), line, u64::from(pattern))?;
        }
    }
    if let Some(t) = trace.as_mut() {
        t.finish()?;
    }
    runner::report_trace(&args.bench, global);

    if args.bench.summary {
        println!(
            "cylon: ticks={} steps={steps} final_lanes={last:#b}",
            bench.ticks()
        );
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global() -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
        }
    }

    fn args(lanes: u32) -> CylonArgs {
        CylonArgs {
            rate: "25Hz".into(),
            lanes,
            bench: crate::BenchArgs {
                board: "icebreaker-bitsy".into(),
                seconds: 0.05,
                vcd: None,
                summary: false,
            },
        }
    }

    #[test]
    fn cylon_run_succeeds() {
        assert_eq!(run(&args(8), &global()).unwrap(), 0);
    }

    #[test]
    fn cylon_rejects_one_lane() {
        assert!(run(&args(1), &global()).is_err());
    }

    #[test]
    fn cylon_rejects_bad_rate() {
        let mut a = args(8);
        a.rate = "sometimes".into();
        assert!(run(&a, &global()).is_err());
    }
}
