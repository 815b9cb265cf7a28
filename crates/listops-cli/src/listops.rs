//! List operations CLI
//!
//! Usage: listops <command> [args]
//!
//! Commands:
//!   parity <list>                      Interleave odd and even values
//!   arrange <list>                     Sort first half descending, second half ascending
//!   progression <first> <second> <size>
//!                                      Interleaved powers of two bases
//!   batch <parity|arrange>             Apply an operation to each stdin line
//!
//! Example: listops arrange "2,2,3,3,4,null,8"

use listops::app::batch::{sort_even_odd_batch, split_and_arrange_batch};
use listops::infra::list_text::parse_value;
use listops::{
    format_list, format_values, geometric_progression, parse_list, sort_even_odd_by_index,
    split_and_arrange,
};
use std::env;
use std::io::{self, BufRead};
use std::time::Instant;

enum Command {
    Parity(String),
    Arrange(String),
    Progression {
        first: String,
        second: String,
        size: String,
    },
    Batch(BatchOp),
}

#[derive(Clone, Copy)]
enum BatchOp {
    Parity,
    Arrange,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [args]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  parity <list>                        Odd values at even indices, even values at odd indices");
    eprintln!("  arrange <list>                       First half descending, second half ascending");
    eprintln!("  progression <first> <second> <size>  Interleaved powers of two bases");
    eprintln!("  batch <parity|arrange>               Apply an operation to each line of stdin");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Lists are comma or space separated; null, none, - and _ mark absent values.");
    eprintln!("Example: {} arrange \"2,2,3,3,4,null,8\"", program);
}

fn parse_args() -> Result<Command, String> {
    let args: Vec<String> = env::args().collect();

    if args.iter().skip(1).any(|a| a == "--help" || a == "-h") {
        print_usage(&args[0]);
        std::process::exit(0);
    }

    let rest = args.get(2..).unwrap_or_default();
    let command = args.get(1).ok_or("Missing command")?;

    match (command.as_str(), rest) {
        ("parity", [list]) => Ok(Command::Parity(list.clone())),
        ("arrange", [list]) => Ok(Command::Arrange(list.clone())),
        ("progression", [first, second, size]) => Ok(Command::Progression {
            first: first.clone(),
            second: second.clone(),
            size: size.clone(),
        }),
        ("batch", [op]) => match op.as_str() {
            "parity" => Ok(Command::Batch(BatchOp::Parity)),
            "arrange" => Ok(Command::Batch(BatchOp::Arrange)),
            other => Err(format!("Unknown batch operation: {}", other)),
        },
        ("parity" | "arrange" | "progression" | "batch", _) => {
            Err(format!("Wrong number of arguments for '{}'", command))
        }
        (other, _) => Err(format!("Unknown command: {}", other)),
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Parity(text) => {
            let list = parse_list(&text).map_err(|e| e.to_string())?;
            println!("{}", format_list(&sort_even_odd_by_index(Some(&list))));
        }
        Command::Arrange(text) => {
            let list = parse_list(&text).map_err(|e| e.to_string())?;
            let arranged = split_and_arrange(Some(&list)).map_err(|e| e.to_string())?;
            println!("{}", format_values(&arranged));
        }
        Command::Progression {
            first,
            second,
            size,
        } => {
            let first = parse_value(&first, 1).map_err(|e| e.to_string())?;
            let second = parse_value(&second, 2).map_err(|e| e.to_string())?;
            let size = parse_value(&size, 3).map_err(|e| e.to_string())?;
            println!("{}", format_values(&geometric_progression(first, second, size)));
        }
        Command::Batch(op) => run_batch(op)?,
    }

    Ok(())
}

fn run_batch(op: BatchOp) -> Result<(), String> {
    let mut lists = Vec::new();
    for (i, line) in io::stdin().lock().lines().enumerate() {
        let line = line.map_err(|e| format!("Error reading input: {}", e))?;
        let list = parse_list(&line).map_err(|e| format!("Line {}: {}", i + 1, e))?;
        lists.push(list);
    }

    let start = Instant::now();
    let mut failed = 0;

    match op {
        BatchOp::Parity => {
            for result in sort_even_odd_batch(&lists) {
                println!("{}", format_list(&result));
            }
        }
        BatchOp::Arrange => {
            for (i, result) in split_and_arrange_batch(&lists).into_iter().enumerate() {
                match result {
                    Ok(values) => println!("{}", format_values(&values)),
                    Err(e) => {
                        eprintln!("Line {}: {}", i + 1, e);
                        failed += 1;
                    }
                }
            }
        }
    }

    log::info!(
        "processed {} lists in {:.3} seconds",
        lists.len(),
        start.elapsed().as_secs_f64()
    );

    if failed > 0 {
        return Err(format!("{} of {} lists failed", failed, lists.len()));
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let command = match parse_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
