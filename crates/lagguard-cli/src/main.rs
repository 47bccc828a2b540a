//! CLI entry point for lagguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging, and exit codes.
//! All business logic lives in the `lagguard-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, Subcommand};
use lagguard_app::{
    FilterInput, format_policies, parse_report_json, render_markdown, run_filter, run_policies,
    serialize_feed, serialize_report, verdict_exit_code, write_text,
};
use lagguard_settings::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "lagguard",
    version,
    about = "Hold back package updates until they have aged a configured number of days"
)]
struct Cli {
    /// Path to lagguard config TOML (missing file means defaults).
    #[arg(long, default_value = "lagguard.toml")]
    config: Utf8PathBuf,

    /// Exclude updates newer than DAYS; overrides global and per-repo config values.
    #[arg(long, value_name = "DAYS", allow_negative_numbers = true, global = true)]
    exclude_newer_than: Option<i64>,

    /// Override check mode for every repository (file|build|newest|oldest).
    #[arg(long, value_name = "MODE", global = true)]
    check_mode: Option<String>,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Filter a feed and write the report.
    Filter {
        /// Feed file, or a directory of `*.json` feed files.
        #[arg(long)]
        feed: Utf8PathBuf,

        /// Evaluate as if the current time were EPOCH (Unix seconds).
        #[arg(long, value_name = "EPOCH")]
        now: Option<i64>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/lagguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write the feed with excluded packages removed.
        #[arg(long)]
        kept_out: Option<Utf8PathBuf>,

        /// Write a Markdown summary alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown summary (if enabled).
        #[arg(long, default_value = "artifacts/lagguard/summary.md")]
        markdown_out: Utf8PathBuf,

        /// Exit with status 2 when any package was excluded.
        #[arg(long)]
        fail_on_excluded: bool,
    },

    /// Print the resolved policy for each repository in a feed.
    Policies {
        /// Feed file, or a directory of `*.json` feed files.
        #[arg(long)]
        feed: Utf8PathBuf,
    },

    /// Render Markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/lagguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("lagguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.cmd {
        Commands::Filter {
            feed,
            now,
            report_out,
            kept_out,
            write_markdown,
            markdown_out,
            fail_on_excluded,
        } => {
            let config_text = read_config(cli)?;
            let output = run_filter(FilterInput {
                feed_path: feed,
                config_text: &config_text,
                overrides: overrides(cli),
                now: *now,
            })?;

            write_text(report_out, &serialize_report(&output.report)?)
                .context("write report json")?;
            if let Some(kept_out) = kept_out {
                write_text(kept_out, &serialize_feed(&output.kept_feed)?)
                    .context("write kept feed")?;
            }
            if *write_markdown {
                write_text(markdown_out, &render_markdown(&output.report))
                    .context("write markdown")?;
            }

            Ok(verdict_exit_code(output.report.verdict, *fail_on_excluded))
        }
        Commands::Policies { feed } => {
            let config_text = read_config(cli)?;
            let output = run_policies(feed, &config_text, &overrides(cli))?;
            print!("{}", format_policies(&output));
            Ok(0)
        }
        Commands::Md { report, output } => {
            let text =
                std::fs::read_to_string(report).with_context(|| format!("read {}", report))?;
            let parsed = parse_report_json(&text)?;
            let md = render_markdown(&parsed);
            match output {
                Some(path) => write_text(path, &md).context("write markdown")?,
                None => print!("{md}"),
            }
            Ok(0)
        }
    }
}

/// A missing config file is allowed (defaults apply); any other read error is not.
fn read_config(cli: &Cli) -> anyhow::Result<String> {
    match std::fs::read_to_string(&cli.config) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(config = %cli.config, "config file not found; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read {}", cli.config)),
    }
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        exclude_newer_than: cli.exclude_newer_than,
        check_mode: cli.check_mode.clone(),
    }
}
