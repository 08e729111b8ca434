// mustfacts: MustScript AST fact exporter

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mustfacts::constants::{FACTS_EXTENSION, MAX_NESTING_DEPTH};
use mustfacts::facts::{export, RenderOptions};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// MustScript source file
    input: PathBuf,

    /// Output file path (default: the input path with its extension replaced by `facts.P`)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the facts to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Write relation names without surrounding quotes
    #[arg(long)]
    bare_relations: bool,

    /// Deepest statement/expression nesting the parser accepts
    #[arg(long, default_value_t = MAX_NESTING_DEPTH)]
    max_depth: usize,
}

fn default_output(input: &Path) -> PathBuf {
    input.with_extension(FACTS_EXTENSION)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    info!("Parsing...");
    let ast = mustfacts::parser::Parser::new(&source)
        .and_then(|parser| parser.with_max_depth(cli.max_depth).parse_program())
        .context("Parsing Error")?;

    info!("Generating facts...");
    let facts = export(&ast);
    let options = RenderOptions {
        quote_relations: !cli.bare_relations,
    };

    if cli.stdout {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        facts.write_to(&mut out, options)?;
        out.flush()?;
        return Ok(());
    }

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output(&cli.input));
    fs::write(&output, facts.render(options))
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!("Wrote {} facts to {}", facts.len(), output.display());

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mustfacts=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
