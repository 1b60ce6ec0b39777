use anyhow::Context as _;
use clap::Parser;
use rotcalc::{lexer::Lexer, util::display_tokens};
use std::{
    fs,
    io::{self, BufRead, BufReader, Write as _},
    path::PathBuf,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Evaluate the given expression instead of reading lines.
    #[arg(short, long = "expr", value_name = "EXPR")]
    exprs: Vec<String>,

    /// Print the token stream of each line to stderr.
    #[arg(long)]
    dump_tokens: bool,

    /// Print the parsed tree of each line to stderr.
    #[arg(long)]
    dump_tree: bool,

    /// The file to read expressions from, one per line. Reads stdin if omitted.
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!("parsed CLI args = {:?}", args);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.exprs.is_empty() {
        for expr in &args.exprs {
            process_line(&args, expr, &mut out)?;
        }
        return Ok(());
    }

    let reader: Box<dyn BufRead> = match args.input {
        Some(ref path) => {
            let file = fs::File::open(path)
                .with_context(|| format!("failed to open input file: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    for (lineno, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", lineno + 1))?;
        process_line(&args, &line, &mut out)?;
    }

    Ok(())
}

fn process_line(args: &Args, line: &str, out: &mut impl io::Write) -> anyhow::Result<()> {
    if line.trim().is_empty() {
        return Ok(());
    }

    if args.dump_tokens {
        let tokens: Vec<_> = Lexer::new(line).map(|(_, t, _)| t).collect();
        eprintln!("tokens: {}", display_tokens(&tokens));
    }

    match rotcalc::parse_input(line) {
        Ok(tree) => {
            if args.dump_tree {
                eprintln!("tree: {}", tree);
            }
            writeln!(out, "{}", rotcalc::evaluate(&tree)).context("failed to write result")?;
        }
        Err(err) => {
            tracing::debug!("rejected line {:?}: {:?}", line, err);
            eprintln!("rotcalc: syntax error: {}", err);
        }
    }

    Ok(())
}
