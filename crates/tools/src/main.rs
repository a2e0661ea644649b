use anyhow::{Context, Result};
use clap::Parser;
use maze_core::{Difficulty, MazeSession, Pos};

/// Diagnostics shell for the maze engine: generates a maze, prints it, and
/// optionally solves or auto-plays it.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Difficulty tier: easy, medium, hard, or expert
    #[arg(short, long, default_value = "easy")]
    tier: String,
    /// Generation seed; the same seed and tier always yield the same maze
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Print the shortest route as a coordinate list
    #[arg(long)]
    solve: bool,
    /// Replay the shortest route and report the final session state
    #[arg(long)]
    walk: bool,
    /// Dump the generated maze as JSON instead of the ASCII view
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let tier: Difficulty =
        args.tier.parse().map_err(|e| anyhow::anyhow!("{e}")).context("invalid --tier")?;
    let mut session = MazeSession::new(args.seed, tier);

    if args.json {
        println!("{}", serde_json::to_string_pretty(session.maze())?);
        return Ok(());
    }

    print_maze(&session);
    print_stats(&session);

    if args.solve {
        let route = session.solve();
        if route.is_empty() {
            println!("No route from the current position.");
        } else {
            let rendered: Vec<String> =
                route.iter().map(|pos| format!("({}, {})", pos.x, pos.y)).collect();
            println!("Shortest route ({} cells): {}", route.len(), rendered.join(" -> "));
        }
    }

    if args.walk {
        let route = session.play_back_solution();
        println!(
            "Auto-play walked {} cells in {} steps; finished: {}",
            route.len(),
            session.steps(),
            session.is_finished()
        );
    }

    Ok(())
}

fn print_maze(session: &MazeSession) {
    let maze = session.maze();
    let size = maze.size as i32;
    for y in 0..size {
        let mut line = String::new();
        for x in 0..size {
            let pos = Pos { y, x };
            if pos == session.agent() {
                line.push_str("@ ");
            } else if pos == maze.end {
                line.push_str("E ");
            } else if maze.is_open(pos) {
                line.push_str("  ");
            } else {
                line.push_str("█ ");
            }
        }
        println!("{line}");
    }
}

fn print_stats(session: &MazeSession) {
    let maze = session.maze();
    let total = maze.size * maze.size;
    let open = maze.open_cell_count();
    let walls = total - open;

    println!();
    println!("Tier:       {:?}", session.tier());
    println!("Size:       {0}x{0}", maze.size);
    println!("Open cells: {} ({}%)", open, open * 100 / total);
    println!("Wall cells: {} ({}%)", walls, walls * 100 / total);
    println!("Routes:     {} distinct (attempts: {})", maze.route_count, maze.attempts);
    if !maze.has_multiple_routes() {
        println!("Warning: generation gave up before finding a second route.");
    }
    println!("Solution:   {} cells", session.solve().len());
    println!();
}
