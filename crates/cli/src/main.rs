use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::info;

use claimcheck::report::{self, Summary};
use claimcheck::{HarnessConfig, Registry};

mod suite;

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(
    name = "claimcheck",
    about = "claimcheck — generative claim checking with random specifiers"
)]
struct Cli {
    /// env_logger-style filter string (e.g. "claimcheck=debug"); overrides RUST_LOG
    #[arg(long, global = true)]
    log_filter: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check the built-in claim suite and print a report.
    Run {
        /// JSON config file (`{"repetitions": N, "seed": S}`).
        #[arg(long)]
        config: Option<PathBuf>,
        /// Trials per claim. Overrides the config file.
        #[arg(long)]
        reps: Option<u32>,
        /// Random seed. Overrides the config file.
        #[arg(long)]
        seed: Option<u64>,
        /// Check and report only this group.
        #[arg(short, long)]
        group: Option<String>,
        /// Report format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Write the report to this file instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// List groups and claims without running them.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
}

fn init_logging(cli_filter: Option<&str>) {
    let env = Env::default().default_filter_or(DEFAULT_LOG_FILTER);
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(filter) = cli_filter {
        builder.parse_filters(filter);
    }
    builder.format(|buf, record| {
        writeln!(buf, "[{:<5} {}] {}", record.level(), record.target(), record.args())
    });
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_filter.as_deref());

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Run { config, reps, seed, group, format, out } => {
            let mut settings = match config {
                Some(path) => HarnessConfig::load(&path)?,
                None => HarnessConfig::default(),
            };
            if let Some(n) = reps {
                settings = settings.with_repetitions(n);
            }
            if let Some(s) = seed {
                settings = settings.with_seed(s);
            }

            let mut registry = Registry::with_config(settings)?;
            suite::register(&mut registry)?;
            info!("running suite with seed {}", registry.seed());
            registry.check(group.as_deref())?;

            let reports = registry.raw(group.as_deref())?;
            let rendered = match format {
                Format::Text => report::render_text(&reports),
                Format::Html => report::render_html(&reports) + "\n",
                Format::Json => report::to_json(&reports) + "\n",
            };
            match out {
                Some(path) => {
                    fs::write(&path, &rendered)?;
                    println!("report written to {}", path.display());
                }
                None => print!("{rendered}"),
            }

            let summary = Summary::from_reports(&reports);
            eprintln!(
                "{} passed, {} failed, {} untested (seed {})",
                summary.passed,
                summary.failed,
                summary.untested,
                registry.seed()
            );
            if !summary.all_passed() {
                process::exit(1);
            }
        }
        Command::List { json } => {
            let mut registry = Registry::new();
            suite::register(&mut registry)?;
            let reports = registry.raw(None)?;
            if json {
                println!("{}", report::to_json(&reports));
            } else {
                for group in reports.iter().filter(|g| !g.claims.is_empty()) {
                    println!("{}", group.name);
                    for claim in &group.claims {
                        println!("  {}", claim.name);
                    }
                }
            }
        }
    }
    Ok(())
}
