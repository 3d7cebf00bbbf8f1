//! bucketquery CLI entry point.

use bucketquery_foundation::Dialect;
use bucketquery_runtime::{Repl, RuntimeConfig, Session, exit_status, init_logging, render_once};
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;

/// Render `||` / `&&` term lists as bucket query expressions.
#[derive(Debug, Parser)]
#[command(name = "bucketquery", version, about)]
struct Cli {
    /// Raw argument string; multiple words are joined with single spaces.
    args: Vec<String>,

    /// Output dialect: category or monster.
    #[arg(short, long, default_value_t = Dialect::Category)]
    dialect: Dialect,

    /// Render under every dialect.
    #[arg(short, long)]
    all: bool,

    /// Start the REPL even when arguments are given.
    #[arg(short, long)]
    interactive: bool,

    /// Send notifications to the log instead of stderr.
    #[arg(short, long)]
    quiet: bool,

    /// Raise the log level (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> RuntimeConfig {
        RuntimeConfig::default()
            .with_dialect(self.dialect)
            .with_render_all(self.all)
            .with_quiet(self.quiet)
            .with_verbosity(self.verbose)
            .with_banner(self.args.is_empty())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config();
    init_logging(&config);
    debug!(?config, "starting");

    let result = run(&cli, &config);
    if let Err(e) = &result {
        eprintln!("\x1b[31mError: {e}\x1b[0m");
        if let Some(context) = &e.context {
            eprintln!("  {context}");
        }
    }
    ExitCode::from(exit_status(&result))
}

fn run(cli: &Cli, config: &RuntimeConfig) -> bucketquery_foundation::Result<()> {
    if !cli.args.is_empty() {
        let session = Session::new(config);
        for line in render_once(&session, &cli.args.join(" "))? {
            println!("{line}");
        }

        if !cli.interactive {
            return Ok(());
        }
    }

    Repl::new(config)?.run()
}
