//! Daedal — finds the shortest path through an encoded maze.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use daedal_lib::{CliArgs, decode, format_path};
use labrys_paths::Pathfinder;

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let encoding = match args.encoding {
        Some(encoding) => encoding,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read the maze encoding from stdin")?;
            buf
        }
    };

    let maze = decode(&encoding).context("invalid maze encoding")?;
    println!("This maze's size is {} x {}", maze.width(), maze.height());
    println!("The goal is at position {}", maze.goal());

    let mut pathfinder = Pathfinder::new(maze.width(), maze.height());
    match pathfinder.astar_path(&maze, maze.start(), maze.goal()) {
        Some(path) => {
            log::debug!("shortest path has {} cells", path.len());
            println!("Solution path: {}", format_path(&path));
        }
        None => eprintln!("The goal cannot be reached from {}.", maze.start()),
    }

    Ok(())
}
