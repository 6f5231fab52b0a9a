use std::error::Error;
use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use log::info;

use maze_carver::{new_generator, GeneratorKind, WallGrid};

const DEFAULT_DIMS: (i64, i64) = (15, 15);

/// Carves a maze one wall at a time and prints it to the terminal.
#[derive(Debug, Parser)]
#[command(name = "maze-carver", version)]
struct Args {
    #[arg(long, default_value_t = DEFAULT_DIMS.0, allow_negative_numbers = true)]
    width: i64,

    #[arg(long, default_value_t = DEFAULT_DIMS.1, allow_negative_numbers = true)]
    height: i64,

    /// `backtracker` or `kruskal`
    #[arg(long, default_value_t = GeneratorKind::Backtracker)]
    generator: GeneratorKind,

    /// Fixed seed for a reproducible maze
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between ticks, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Redraw the maze after every carved wall
    #[arg(long)]
    animate: bool,

    /// Print carved walls as JSON lines instead of drawing
    #[arg(long, conflicts_with = "animate")]
    json: bool,
}

fn redraw(stdout: &mut Stdout, walls: &WallGrid) -> io::Result<()> {
    stdout.queue(Clear(ClearType::All))?;
    stdout.queue(MoveTo(0, 0))?;
    stdout.queue(Print(walls))?;
    stdout.flush()
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut generator = new_generator(args.generator, args.width, args.height, args.seed)?;
    let mut walls = WallGrid::new(*generator.dims());
    let delay = Duration::from_millis(args.delay_ms);
    let mut stdout = io::stdout();

    let mut ticks = 0usize;
    while !generator.is_done() {
        ticks += 1;
        if let Some(edge) = generator.tick() {
            walls.carve(&edge)?;

            if args.json {
                println!("{}", serde_json::to_string(&edge)?);
            } else if args.animate {
                redraw(&mut stdout, &walls)?;
            }
        }

        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    info!(
        "{} finished a {}x{} maze in {} ticks, {} passages",
        args.generator,
        args.width,
        args.height,
        ticks,
        walls.passage_count()
    );

    if !args.json && !args.animate {
        print!("{}", walls);
    }
    Ok(())
}
