use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use linecalc::evaluate;

/// linecalc evaluates single-line arithmetic expressions made of integers
/// and the operators `+ - * /`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells linecalc to evaluate a file of expressions, one per line,
    /// instead of a single expression.
    #[arg(short, long)]
    file: bool,

    /// The expression to evaluate (or a file path with --file). Starts the
    /// interactive prompt when omitted.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.expression else {
        repl();
        return;
    };

    if args.file {
        let script = fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &contents);
            std::process::exit(1);
        });

        for line in script.lines().filter(|l| !l.trim().is_empty()) {
            print_outcome(line);
        }
    } else {
        print_outcome(&contents);
    }
}

/// Reads expressions from stdin until end of input, one evaluation per line.
///
/// Blank lines are skipped without evaluation. A faulting line prints its
/// error and the loop continues with the next prompt.
fn repl() {
    let stdin = io::stdin();

    loop {
        print!("calc> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {},
            Err(e) => {
                eprintln!("{e}");
                break;
            },
        }

        if line.trim().is_empty() {
            continue;
        }

        print_outcome(&line);
    }
}

fn print_outcome(line: &str) {
    match evaluate(line) {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}
