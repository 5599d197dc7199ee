use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use clap::Parser;
use serde::Serialize;

use uast_engine::{convert, Scheme};

#[derive(Parser)]
#[command(
    name = "uast",
    version,
    about = "Transliterate between UAST, IAST, SLP1 and Indic scripts"
)]
struct Cli {
    /// Source scheme (uast, uast-io, devanāgarī, iast, slp, gu, or, ta, te, ml, kn)
    #[arg(long, default_value = "uast-io")]
    from: String,

    /// Target scheme (uast, devanāgarī, iast, gu, ta, ml, kn, te, or)
    #[arg(long, default_value = "devanāgarī")]
    to: String,

    /// Input file; requires -o
    #[arg(short = 'i', value_name = "FILE")]
    input: Option<String>,

    /// Output file; requires -i
    #[arg(short = 'o', value_name = "FILE")]
    output: Option<String>,

    /// Emit one JSON object per converted line
    #[arg(long)]
    json: bool,
}

/// One converted line in `--json` mode.
#[derive(Serialize)]
struct LineRecord<'a> {
    from: Scheme,
    to: Scheme,
    input: &'a str,
    output: &'a str,
}

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn emit(out: &mut impl Write, cli: &Cli, from: Scheme, to: Scheme, input: &str, output: &str) {
    if cli.json {
        let record = LineRecord {
            from,
            to,
            input,
            output,
        };
        let line = die!(serde_json::to_string(&record), "Error encoding JSON: {}");
        die!(writeln!(out, "{line}"), "Error writing output: {}");
    } else {
        die!(writeln!(out, "{output}"), "Error writing output: {}");
    }
}

fn main() {
    let cli = Cli::parse();

    let from: Scheme = die!(cli.from.parse(), "Bad `from` value: {}");
    let to: Scheme = die!(cli.to.parse(), "Bad `to` value: {}");
    if matches!(to, Scheme::Raw | Scheme::Slp1) {
        eprintln!("Bad `to` value: {to} is a source-only scheme");
        process::exit(1);
    }

    uast_engine::trace_init::init_tracing(&std::env::temp_dir());

    match (&cli.input, &cli.output) {
        (Some(input), Some(output)) => {
            let text = die!(fs::read_to_string(input), "Error reading input file: {}");
            let converted = convert(from, to, &text);
            if cli.json {
                let mut buf = Vec::new();
                for (src, dst) in text.lines().zip(converted.lines()) {
                    emit(&mut buf, &cli, from, to, src, dst);
                }
                die!(fs::write(output, buf), "Error writing output file: {}");
            } else {
                die!(fs::write(output, converted), "Error writing output file: {}");
            }
        }
        (None, None) => {
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            for line in stdin.lock().lines() {
                let line = die!(line, "Error reading stdin: {}");
                let trimmed = line.trim();
                let converted = convert(from, to, trimmed);
                emit(&mut stdout, &cli, from, to, trimmed, &converted);
                die!(stdout.flush(), "Error writing output: {}");
            }
        }
        _ => {
            eprintln!("Either of `-i` or `-o` was missing");
            process::exit(1);
        }
    }
}
