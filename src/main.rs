use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process,
};

use annota::{annotate, interpreter::printer};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// annota parses an arithmetic expression and prints its syntax tree, with
/// every node annotated by the derivation of its value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells annota to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Number of spaces to indent each level of the printed tree.
    #[arg(short, long, default_value_t = printer::DEFAULT_INDENT)]
    indent: usize,

    /// Log more detail to stderr; repeat for more. Ignored when `RUST_LOG` is
    /// set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression, or a path when `--file` is given. Prompts on stdin when
    /// omitted.
    contents: Option<String>,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn read_expression(args: &Args) -> io::Result<String> {
    match &args.contents {
        Some(path) if args.file => fs::read_to_string(PathBuf::from(path)),
        Some(expr) => Ok(expr.clone()),
        None => {
            print!("Enter an arithmetic expression: ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line)
        },
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!(?args, "starting");

    let source = read_expression(&args).unwrap_or_else(|e| {
                                           eprintln!("Failed to read the expression: {e}");
                                           process::exit(1);
                                       });

    match annotate(source.trim_end_matches(['\n', '\r'])) {
        Ok(tree) => {
            println!("Annotated syntax tree:");
            print!("{}", printer::render(&tree, args.indent));
        },
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
