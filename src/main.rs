use std::{
    io::{self, BufRead, IsTerminal},
    ops::ControlFlow,
    process::ExitCode,
};

use clap::Parser;
use reckon::{
    Error, Number,
    interpreter::{
        evaluator::Evaluator,
        parser::{DEFAULT_MAX_DEPTH, parse_with_limit},
    },
    repl::{BANNER, Line, classify_line},
};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use tracing_subscriber::{EnvFilter, fmt};

/// reckon evaluates arithmetic expressions safely: numbers, parentheses and
/// `+ - * / // % **`, nothing else.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maximum nesting of parentheses, signs and exponents.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the parsed tree before the result.
    #[arg(long)]
    debug_parse: bool,

    /// Expression to evaluate. The words are joined with spaces; without any,
    /// expressions are read line by line from stdin.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    expression: Vec<String>,
}

/// Exit status of a one-shot evaluation that failed.
const FAILURE_STATUS: u8 = 2;

impl Args {
    /// The positional words as one expression, if any were given.
    fn source(&self) -> Option<String> {
        (!self.expression.is_empty()).then(|| self.expression.join(" "))
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG controls verbosity, warnings only by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(io::stderr)
         .with_target(false)
         .init();

    if let Some(source) = args.source() {
        return ExitCode::from(one_shot(&args, &source));
    }

    if io::stdin().is_terminal() {
        interactive(&args);
    } else {
        piped(&args);
    }
    ExitCode::SUCCESS
}

/// Parses and evaluates one expression with the configured limits.
fn run(args: &Args, source: &str) -> Result<Number, Error> {
    let tree = parse_with_limit(source, args.max_depth)?;
    if args.debug_parse {
        println!("{tree:#?}");
    }
    Ok(Evaluator::for_parse_limit(args.max_depth).evaluate(&tree)?)
}

/// Evaluates the command-line expression, prints the outcome and returns the
/// exit status.
fn one_shot(args: &Args, source: &str) -> u8 {
    match run(args, source) {
        Ok(value) => {
            println!("{value}");
            0
        },
        Err(e) => {
            eprintln!("Error: {e}");
            FAILURE_STATUS
        },
    }
}

/// Handles one REPL line, printing its result or error.
fn respond(args: &Args, line: &str) -> ControlFlow<()> {
    match classify_line(line) {
        Line::Empty => {},
        Line::Quit => return ControlFlow::Break(()),
        Line::Expression(source) => match run(args, source) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("Error: {e}"),
        },
    }
    ControlFlow::Continue(())
}

fn interactive(args: &Args) {
    let mut line_editor = Reedline::create();
    let prompt = DefaultPrompt::new(DefaultPromptSegment::Basic("reckon".to_string()),
                                    DefaultPromptSegment::Empty);

    println!("{BANNER}");

    loop {
        let signal = match line_editor.read_line(&prompt) {
            Ok(signal) => signal,
            Err(e) => {
                eprintln!("Error: {e}");
                return;
            },
        };

        match signal {
            Signal::Success(buffer) => {
                if respond(args, &buffer).is_break() {
                    return;
                }
            },
            Signal::CtrlD | Signal::CtrlC => return,
        }
    }
}

fn piped(args: &Args) {
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error: could not read stdin: {e}");
                return;
            },
        };

        if respond(args, &line).is_break() {
            return;
        }
    }
}
