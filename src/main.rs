use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Write;
use std::io::{self, BufRead};
use std::path::Path;
use std::path::PathBuf;
use std::process;

use tlox as lox;

use clap::error::ErrorKind;
use clap::Parser as ClapParser;

use lox::expr::ExprId;
use lox::interpreter::Interpreter;
use lox::parser::Parser;
use lox::resolver::Resolver;
use lox::scanner::Scanner;

#[derive(ClapParser, Debug)]
#[command(version, about = "Tree-walking interpreter for the Lox language", long_about = None)]
pub struct Cli {
    /// Script to execute; omit to start the interactive prompt
    script: Option<PathBuf>,
}

/// Error flags for one run; the driver maps them to exit codes.  In the REPL
/// a fresh `Outcome` per line is what clears the flags between inputs.
#[derive(Debug, Default)]
struct Outcome {
    had_error: bool,
    had_runtime_error: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,

        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }

        Err(_) => {
            println!("Usage: tlox [script]");
            process::exit(64);
        }
    };

    match cli.script {
        Some(path) => run_file(&path),

        None => run_prompt(),
    }
}

fn run_file(path: &Path) -> anyhow::Result<()> {
    let mut source = String::new();
    let mut reader: BufReader<File> = BufReader::new(File::open(path)?);
    reader.read_to_string(&mut source)?;

    let mut interpreter = Interpreter::new();
    let outcome = run(&source, &mut interpreter, &mut 0);

    if outcome.had_error {
        process::exit(65);
    }
    if outcome.had_runtime_error {
        process::exit(70);
    }

    Ok(())
}

fn run_prompt() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut interpreter = Interpreter::new();
    let mut next_id: ExprId = 0;
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF.
            break;
        }

        let input = line.trim_end_matches(['\n', '\r']);
        if input.is_empty() {
            continue;
        }
        if input == "exit" {
            break;
        }

        run(input, &mut interpreter, &mut next_id);
    }

    Ok(())
}

/// One pass through the pipeline.  Each stage reports its diagnostics to
/// stderr; a compile-time error in any stage stops the run before execution.
/// `next_id` carries the node-id counter across REPL lines.
fn run<W: Write>(source: &str, interpreter: &mut Interpreter<W>, next_id: &mut ExprId) -> Outcome {
    let mut outcome = Outcome::default();

    let mut tokens = Vec::new();
    for result in Scanner::new(source.as_bytes()) {
        match result {
            Ok(token) => tokens.push(token),

            Err(e) => {
                eprintln!("{}", e);
                outcome.had_error = true;
            }
        }
    }

    let mut parser = Parser::with_first_id(tokens, *next_id);
    let statements = parser.parse();
    *next_id = parser.next_id();
    for e in parser.take_errors() {
        eprintln!("{}", e);
        outcome.had_error = true;
    }

    if outcome.had_error {
        return outcome;
    }

    let resolve_errors = Resolver::new(interpreter).resolve(&statements);
    if !resolve_errors.is_empty() {
        for e in &resolve_errors {
            eprintln!("{}", e);
        }
        outcome.had_error = true;
        return outcome;
    }

    if let Err(e) = interpreter.interpret(&statements) {
        eprintln!("{}", e);
        outcome.had_runtime_error = true;
    }

    outcome
}
