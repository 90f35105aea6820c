use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use stackto::{ast::Program, parse_content, run_source};
use tracing_subscriber::EnvFilter;

/// stackto runs StackTo programs: `;`-separated statements over bracketed
/// RPN expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as a path to a source file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Only parse the program and print its statements in canonical form.
    #[arg(short, long)]
    statements: bool,

    /// Keep comments when printing statements.
    #[arg(short, long, requires = "statements")]
    comments: bool,

    contents: String,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .init();
}

fn print_statements(program: &Program) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for statement in program {
        writeln!(out, "{statement}")?;
    }
    out.flush()
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the source file '{}': {e}", args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let result = if args.statements {
        parse_content(&source, args.comments).and_then(|program| print_statements(&program).map_err(Into::into))
    } else {
        run_source(&source, io::stdin().lock(), io::stdout().lock())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
