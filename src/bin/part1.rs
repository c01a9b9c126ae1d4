use anyhow::{Context, Result};
use clap::Parser;
use pipe_maze::CLIArgs;

fn main() -> Result<()> {
    env_logger::init();
    let args = CLIArgs::parse();
    let grid = pipe_maze::read_grid(&args.input_path).with_context(|| {
        format!(
            "Failed to read pipe map from given file({}).",
            args.input_path.display()
        )
    })?;

    let distance = pipe_maze::farthest_distance(&grid)
        .context("Failed to trace the loop through the start position.")?;
    println!(
        "The farthest point of the loop is {} step(s) away from the start.",
        distance
    );

    Ok(())
}
