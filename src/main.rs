use docopt::Docopt;
use mazes::{
    units::{Height, Width},
    GenerationOptionsBuilder, Maze,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use std::io::{self, Write};
use tracing::warn;

const USAGE: &str = "Mazes

Usage:
    maze_driver -h | --help
    maze_driver [(--grid-size=<n>|[--grid-width=<w> --grid-height=<h>])] [--seed=<s>] [--attempts=<n>] [--no-markers]

Options:
    -h --help              Show this screen.
    --grid-size=<n>        The grid size is n * n.
    --grid-width=<w>       The grid width in a w*h grid [default: 10].
    --grid-height=<h>      The grid height in a w*h grid [default: 10].
    --seed=<s>             Seed the random generator to carve a reproducible maze.
    --attempts=<n>         How many times to carve the maze looking for an end cell [default: 10].
    --no-markers           Do not draw an 'S' (start) and 'E' (end) in the maze.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_grid_size: Option<usize>,
    flag_grid_width: usize,
    flag_grid_height: usize,
    flag_seed: Option<u64>,
    flag_attempts: usize,
    flag_no_markers: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::mazes::errors::Error, ::mazes::errors::ErrorKind);
        }

        foreign_links {
            Io(::std::io::Error);
            LogFilter(::tracing_subscriber::filter::ParseError);
            LogSubscriber(::tracing::subscriber::SetGlobalDefaultError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    init_tracing()?;

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let (width, height) = if let Some(square_grid_size) = args.flag_grid_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_grid_width, args.flag_grid_height)
    };

    let options = GenerationOptionsBuilder::new().max_attempts(args.flag_attempts).build();
    let (width, height) = (Width(width), Height(height));
    let maze = match args.flag_seed {
        Some(seed) => {
            let mut rng = XorShiftRng::seed_from_u64(seed);
            Maze::with_options(width, height, &options, &mut rng)?
        }
        None => Maze::with_options(width, height, &options, &mut rand::thread_rng())?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", maze.display(!args.flag_no_markers))?;

    if let Err(e) = maze.require_end() {
        // Still a playable maze, it just has nowhere marked to finish.
        warn!("{}", e);
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` if it is set.
fn init_tracing() -> Result<()> {
    use tracing_log::LogTracer;
    use tracing_subscriber::{prelude::*, registry::Registry, EnvFilter};

    if LogTracer::init().is_ok() {
        let filter_layer = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("OFF,mazes=WARN,maze_driver=INFO"))?;
        let fmt_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
        let subscriber = Registry::default().with(filter_layer).with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}
