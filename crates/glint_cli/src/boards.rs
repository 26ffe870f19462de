//! `glint boards` — list built-in boards or dump one profile.

use crate::{BoardsArgs, GlobalArgs};

/// Runs the `glint boards` command.
///
/// With no argument, lists the built-in board names with their clock and
/// description. With a name or path, prints the resolved profile as TOML.
pub fn run(args: &BoardsArgs, _global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    match &args.name {
        Some(name) => {
            let profile = glint_board::resolve_profile(name)?;
            print!("{}", profile.to_toml()?);
        }
        None => {
            for name in glint_board::builtin_names() {
                let profile = glint_board::builtin_profile(name)?;
                println!(
                    "{name}  {}  {}",
                    profile.clock.frequency, profile.board.description
                );
            }
        }
    }
    Ok(0)
}
