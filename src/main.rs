use std::{fs, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use linecalc::{
    Context, QUIT_SENTINEL, evaluate_lines,
    interpreter::value::format::{Base, FormatMode, Precision},
};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing_subscriber::EnvFilter;

/// linecalc evaluates arithmetic one line at a time, keeping variables and
/// output settings between lines.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output base to start in.
    #[arg(long, value_enum, default_value_t = BaseArg::Dec)]
    base: BaseArg,

    /// Output precision to start in.
    #[arg(long, value_enum, default_value_t = PrecisionArg::Float)]
    precision: PrecisionArg,

    /// Evaluates a line instead of starting the prompt. May be repeated.
    #[arg(short, long = "eval", value_name = "LINE")]
    eval: Vec<String>,

    /// Evaluates every line of a file instead of starting the prompt.
    #[arg(short, long, conflicts_with = "eval")]
    file: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum BaseArg {
    Dec,
    Hex,
    Oct,
    Bin,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PrecisionArg {
    Float,
    Int,
}

impl From<BaseArg> for Base {
    fn from(arg: BaseArg) -> Self {
        match arg {
            BaseArg::Dec => Self::Decimal,
            BaseArg::Hex => Self::Hexadecimal,
            BaseArg::Oct => Self::Octal,
            BaseArg::Bin => Self::Binary,
        }
    }
}

impl From<PrecisionArg> for Precision {
    fn from(arg: PrecisionArg) -> Self {
        match arg {
            PrecisionArg::Float => Self::Floating,
            PrecisionArg::Int => Self::Integer,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();
    let mut session = Context::with_mode(FormatMode::new(args.base.into(), args.precision.into()));

    if let Some(path) = &args.file {
        let script = fs::read_to_string(path).with_context(|| {
                                                 format!("failed to read the input file '{}'",
                                                         path.display())
                                             })?;
        print_all(&evaluate_lines(&mut session, script.lines()));
    } else if !args.eval.is_empty() {
        print_all(&evaluate_lines(&mut session, args.eval.iter().map(String::as_str)));
    } else {
        repl(&mut session)?;
    }

    Ok(())
}

fn print_all(output: &[String]) {
    for line in output {
        println!("{line}");
    }
}

/// Reads lines from the terminal until `:q`, Ctrl-C or Ctrl-D.
fn repl(session: &mut Context) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;

                let output = session.evaluate(&line);
                if output == QUIT_SENTINEL {
                    break;
                }
                println!("{output}");
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
