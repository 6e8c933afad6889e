use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use lox::{
    ast::printer::AstPrinter,
    errors::diagnostics::Diagnostics,
    init_tracing,
    interpreter::interpreter::Interpreter,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

/// Evaluates expressions from a file, or interactively when no file is given.
#[derive(Parser, Debug)]
#[command(name = "lox", version, about, long_about = None)]
struct Args {
    /// Path to a source file. Starts a prompt when omitted.
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Print every scanned token before parsing.
    #[arg(long)]
    tokens: bool,

    /// Print the parsed expression tree before evaluating.
    #[arg(long)]
    ast: bool,
}

/// How far a run got before failing.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Outcome {
    Ok,
    StaticError,
    RuntimeError,
}

const EXIT_STATIC_ERROR: u8 = 65;
const EXIT_NO_INPUT: u8 = 66;
const EXIT_RUNTIME_ERROR: u8 = 70;

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match &args.path {
        Some(path) => run_file(path, &args),
        None => run_prompt(&args),
    }
}

fn run_file(path: &Path, args: &Args) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read '{}': {}", path.display(), error);
            return ExitCode::from(EXIT_NO_INPUT);
        }
    };

    match run(&source, args) {
        Outcome::Ok => ExitCode::SUCCESS,
        Outcome::StaticError => ExitCode::from(EXIT_STATIC_ERROR),
        Outcome::RuntimeError => ExitCode::from(EXIT_RUNTIME_ERROR),
    }
}

fn run_prompt(args: &Args) -> ExitCode {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        match lines.next() {
            Some(Ok(line)) => {
                // Errors are printed and the session carries on.
                run(&line, args);
            }
            Some(Err(error)) => {
                eprintln!("Failed to read input: {}", error);
                return ExitCode::FAILURE;
            }
            None => {
                println!();
                return ExitCode::SUCCESS;
            }
        }
    }
}

fn run(source: &str, args: &Args) -> Outcome {
    let mut diagnostics = Diagnostics::new();

    let tokens = tokenize(source, &mut diagnostics);
    if args.tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }
    if diagnostics.has_errors() {
        eprint!("{}", diagnostics.render(source));
        return Outcome::StaticError;
    }

    let Some(expr) = parse(tokens, &mut diagnostics) else {
        eprint!("{}", diagnostics.render(source));
        return Outcome::StaticError;
    };

    if args.ast {
        println!("{}", AstPrinter::new().print(&expr));
    }

    match Interpreter::new().interpret(&expr, &mut diagnostics) {
        Some(value) => {
            println!("{}", value);
            Outcome::Ok
        }
        None => {
            eprint!("{}", diagnostics.render(source));
            Outcome::RuntimeError
        }
    }
}
