use clap::{Parser, ValueEnum};
use std::io;
use std::process::ExitCode;
use tmstep::{by_name, write_trace, Style, Verdict, DEFAULT_STEP_LIMIT, PROGRAM_NAMES};

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// The input to the Turing machine; each character is one tape symbol
    #[clap(short, long)]
    input: String,

    /// The embedded machine to run
    #[clap(short, long, default_value = "w-hash-w")]
    program: String,

    /// Maximum number of steps to execute
    #[clap(short, long, default_value_t = DEFAULT_STEP_LIMIT)]
    steps: usize,

    /// When to highlight the head cell with ANSI colors
    #[clap(long, value_enum, default_value_t = Color::Auto)]
    color: Color,
}

#[derive(Clone, Copy, ValueEnum)]
enum Color {
    Auto,
    Always,
    Never,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(machine) = by_name(&cli.program) else {
        eprintln!(
            "Unknown program '{}'. Available programs: {}",
            cli.program,
            PROGRAM_NAMES.join(", ")
        );
        return ExitCode::FAILURE;
    };

    let colored = match cli.color {
        Color::Always => true,
        Color::Never => false,
        Color::Auto => atty::is(atty::Stream::Stdout),
    };
    let style = if colored { Style::Colored } else { Style::Plain };

    let mut stdout = io::stdout();
    if let Err(e) = write_trace(machine, cli.input.as_str(), cli.steps, style, &mut stdout) {
        eprintln!("Failed to write trace: {}", e);
        return ExitCode::FAILURE;
    }

    match machine.accepts_within(cli.input.as_str(), cli.steps) {
        Verdict::Accepted => println!("\nAccepted."),
        Verdict::Rejected => println!("\nRejected."),
        Verdict::Undetermined => {
            println!("\nUndetermined: no halting state within {} steps.", cli.steps)
        }
    }

    ExitCode::SUCCESS
}
