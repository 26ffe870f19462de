//! Glint CLI — bench runner for the Glint demo designs.
//!
//! Provides `glint blink` for the two-LED blinker, `glint cylon` for the
//! bouncing LED chaser, `glint display` for the multiplexed seven-segment
//! display, `glint display-two` for the split four-digit variant, and
//! `glint boards` for inspecting board profiles.

#![warn(missing_docs)]

mod blink;
mod boards;
mod cylon;
mod display;
mod runner;

use std::process;

use clap::{Parser, Subcommand};

/// Glint — synchronous logic demos on a simulated bench.
#[derive(Parser, Debug)]
#[command(name = "glint", version, about = "Glint logic bench")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print each recorded edge as it happens.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the two-LED blinker.
    Blink(BlinkArgs),
    /// Run the bouncing LED chaser.
    Cylon(CylonArgs),
    /// Run the multiplexed seven-segment display.
    Display(DisplayArgs),
    /// Run the four-digit display split across two banks.
    DisplayTwo(DisplayTwoArgs),
    /// List built-in boards or show one profile.
    Boards(BoardsArgs),
}

/// Bench settings shared by every demo.
#[derive(Parser, Debug)]
pub struct BenchArgs {
    /// Board profile: a built-in name or a TOML file path.
    #[arg(short, long, default_value = "icebreaker-bitsy")]
    pub board: String,

    /// Simulated run length in seconds.
    #[arg(short, long, default_value_t = 1.0)]
    pub seconds: f64,

    /// Record a VCD waveform to this path.
    #[arg(long)]
    pub vcd: Option<String>,

    /// Print a one-line run summary to stdout.
    #[arg(long)]
    pub summary: bool,
}

/// Arguments for the `glint blink` subcommand.
#[derive(Parser, Debug)]
pub struct BlinkArgs {
    /// Blink frequency (e.g. "3Hz").
    #[arg(short, long, default_value = "3Hz")]
    pub rate: String,

    /// Hold the button for the whole run, inverting the green LED.
    #[arg(long)]
    pub hold_button: bool,

    /// Shared bench settings.
    #[command(flatten)]
    pub bench: BenchArgs,
}

/// Arguments for the `glint cylon` subcommand.
#[derive(Parser, Debug)]
pub struct CylonArgs {
    /// Step frequency of the moving lamp (e.g. "25Hz").
    #[arg(short, long, default_value = "25Hz")]
    pub rate: String,

    /// Number of LED lanes to sweep across.
    #[arg(short, long, default_value_t = 16)]
    pub lanes: u32,

    /// Shared bench settings.
    #[command(flatten)]
    pub bench: BenchArgs,
}

/// Arguments for the `glint display` subcommand.
#[derive(Parser, Debug)]
pub struct DisplayArgs {
    /// Number of multiplexed digits.
    #[arg(short, long, default_value_t = 2)]
    pub digits: u32,

    /// Digit refresh frequency (e.g. "250Hz").
    #[arg(short, long, default_value = "250Hz")]
    pub refresh: String,

    /// Fixed hex value to show instead of a running counter.
    #[arg(long)]
    pub value: Option<String>,

    /// Count frequency when no fixed value is given (e.g. "5Hz").
    #[arg(long, default_value = "5Hz")]
    pub count_rate: String,

    /// Shared bench settings.
    #[command(flatten)]
    pub bench: BenchArgs,
}

/// Arguments for the `glint display-two` subcommand.
#[derive(Parser, Debug)]
pub struct DisplayTwoArgs {
    /// Digit refresh frequency for both banks.
    #[arg(short, long, default_value = "250Hz")]
    pub refresh: String,

    /// Count frequency of the four-digit counter.
    #[arg(long, default_value = "10Hz")]
    pub count_rate: String,

    /// Shared bench settings.
    #[command(flatten)]
    pub bench: BenchArgs,
}

/// Arguments for the `glint boards` subcommand.
#[derive(Parser, Debug)]
pub struct BoardsArgs {
    /// Board to show as TOML. Lists built-in names when omitted.
    pub name: Option<String>,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print per-edge detail.
    pub verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Command::Blink(ref args) => blink::run(args, &global),
        Command::Cylon(ref args) => cylon::run(args, &global),
        Command::Display(ref args) => display::run(args, &global),
        Command::DisplayTwo(ref args) => display::run_two(args, &global),
        Command::Boards(ref args) => boards::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
