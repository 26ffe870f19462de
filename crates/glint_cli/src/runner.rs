//! Shared bench plumbing for the demo subcommands.

use std::fs::File;
use std::io::BufWriter;

use glint_board::BoardProfile;
use glint_common::Frequency;
use glint_sim::VcdTrace;

use crate::{BenchArgs, GlobalArgs};

/// Resolves the board argument and reports the bench clock.
pub fn resolve_board(
    args: &BenchArgs,
    global: &GlobalArgs,
) -> Result<(BoardProfile, Frequency), Box<dyn std::error::Error>> {
    let profile = glint_board::resolve_profile(&args.board)?;
    let clock = profile.clock_frequency()?;
    if !global.quiet {
        eprintln!("   Board {} clocked at {clock}", profile.board.name);
    }
    Ok((profile, clock))
}

/// Number of ticks the requested run length covers.
pub fn run_ticks(args: &BenchArgs, clock: Frequency) -> Result<u64, Box<dyn std::error::Error>> {
    if !args.seconds.is_finite() || args.seconds <= 0.0 {
        return Err(format!("run length must be positive, got {}", args.seconds).into());
    }
    Ok(glint_sim::ticks_in(clock, args.seconds))
}

/// Opens the optional VCD output requested on the command line.
pub fn open_trace(
    args: &BenchArgs,
    scope: &str,
) -> Result<Option<VcdTrace<BufWriter<File>>>, Box<dyn std::error::Error>> {
    match &args.vcd {
        Some(path) => {
            let file = File::create(path)?;
            Ok(Some(VcdTrace::new(BufWriter::new(file), scope)))
        }
        None => Ok(None),
    }
}

/// Reports where the waveform went, after a successful run.
pub fn report_trace(args: &BenchArgs, global: &GlobalArgs) {
    if let Some(path) = &args.vcd {
        if !global.quiet {
            eprintln!("   Waveform: {path}");
        }
    }
}
