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

    let enclosed_n = pipe_maze::enclosed_tiles(&grid)
        .context("Failed to trace the loop through the start position.")?;
    println!("There are {} tile(s) enclosed by the loop.", enclosed_n);

    Ok(())
}
