use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use mapa::{MathParser, Options};
use tracing_subscriber::EnvFilter;

/// mapa-calc evaluates math expressions, either once from the command line
/// or line by line from standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Switch on complex number mode.
    #[arg(long)]
    complex: bool,

    /// Allow expressions with unknown variables; they are printed back
    /// instead of failing.
    #[arg(long)]
    unknown: bool,

    /// Switch off the use of variables.
    #[arg(long = "no-vars")]
    no_vars: bool,

    /// Treat the program argument as a path to read the program from.
    #[arg(short, long, requires = "program")]
    file: bool,

    /// Program to evaluate. Without it, an interactive session reads one
    /// program per line.
    program: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let parser = MathParser::new(Options { complex_mode:    args.complex,
                                           allow_variables: !args.no_vars,
                                           allow_unknown:   args.unknown, });

    match args.program {
        Some(contents) => {
            let source = if args.file {
                match fs::read_to_string(&contents) {
                    Ok(source) => source,
                    Err(_) => {
                        eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                        return ExitCode::FAILURE;
                    },
                }
            } else {
                contents
            };
            if evaluate(&parser, &source) { ExitCode::SUCCESS } else { ExitCode::FAILURE }
        },
        None => {
            interactive(&parser);
            ExitCode::SUCCESS
        },
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` and quiet by default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .compact()
                             .init();
}

/// Evaluates one program and prints its result. Returns `false` on error.
fn evaluate(parser: &MathParser, source: &str) -> bool {
    match parser.parse(source) {
        Ok(Some(outcome)) => {
            println!("{outcome}");
            true
        },
        Ok(None) => true,
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}

/// Reads programs line by line until end of input.
///
/// `:vars` lists the variables, `:reset` removes them.
fn interactive(parser: &MathParser) {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }
        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        match line.trim() {
            ":vars" => {
                for (name, binding) in parser.environment().variables() {
                    println!("{name} = {binding}");
                }
            },
            ":reset" => parser.clear_variables(),
            source => {
                evaluate(parser, source);
            },
        }
    }

    println!("\nGoodbye");
}
