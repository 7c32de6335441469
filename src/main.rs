#[macro_use]
extern crate prettytable;

use std::process;

use clap::{App, Arg};
use prettytable::format;
use prettytable::Table;

use sokoban_bot::config::Limits;
use sokoban_bot::solver::{Outcome, Stats};
use sokoban_bot::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-bot")
        .about("Solves Sokoban puzzles using heuristic best-first search")
        .arg(
            Arg::with_name("max-states")
                .long("max-states")
                .value_name("N")
                .takes_value(true)
                .help("Abort the search after creating this many states"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("Don't print progress and per-depth stats"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let quiet = matches.is_present("quiet");

    let mut limits = Limits::default();
    if let Some(max) = matches.value_of("max-states") {
        let max = max.parse().unwrap_or_else(|err| {
            eprintln!("Invalid --max-states: {}", err);
            process::exit(1);
        });
        limits.max_created = Some(max);
    }

    let path = matches.value_of("file").unwrap();
    let level = path.load_level().unwrap_or_else(|err| {
        eprintln!("Can't load level {}: {}", path, err);
        process::exit(1);
    });

    println!("Solving {}...", path);
    let solver_ok = level.solve(limits, !quiet).unwrap_or_else(|err| {
        eprintln!("Can't solve level: {}", err);
        process::exit(1);
    });

    if !quiet {
        print_depth_table(&solver_ok.stats);
    }
    print!("{}", solver_ok.stats);

    match solver_ok.outcome {
        Outcome::Solved(moves) => {
            println!("Solution found:");
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
        Outcome::NoSolution => println!("No solution"),
        Outcome::Aborted => println!("Search aborted (state budget exhausted)"),
    }
}

fn print_depth_table(stats: &Stats) {
    let created = stats.created_per_depth();
    let visited = stats.visited_per_depth();
    let duplicates = stats.duplicates_per_depth();

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(row!["Depth", "Created", "Visited", "Duplicates"]);
    for depth in 0..created.len() {
        table.add_row(row![
            depth,
            created[depth],
            visited.get(depth).cloned().unwrap_or(0),
            duplicates.get(depth).cloned().unwrap_or(0),
        ]);
    }
    table.printstd();
}
