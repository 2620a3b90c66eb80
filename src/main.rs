//! esperf-collapse CLI
//!
//! Prepares Elasticsearch "profile" data for flamegraph.pl.
//! Reads one or more JSON files (or a single document from stdin) and
//! writes folded stacks, one nanosecond per sample.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use esperf_collapse::aggregator::{CollapseOptions, DetailSpec, QueryLabel};
use esperf_collapse::commands::{execute_collapse, validate_args, CollapseArgs};
use esperf_collapse::utils::config::{env_flag_set, DEFAULT_DETAIL, NO_WARNING_ENV};

/// Prepare Elasticsearch 'profile' data for flamegraph.pl
#[derive(Parser, Debug)]
#[command(name = "esperf-collapse")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Shard prefixes to show, outermost first: c=cluster n=node i=index s=shard
    #[arg(short, long, default_value = DEFAULT_DETAIL, value_name = "CNIS")]
    detail: DetailSpec,

    /// Label queries with their (truncated) description; may contain query data!
    #[arg(long)]
    descr: bool,

    /// Don't expand per-node breakdown timings
    #[arg(long)]
    no_breakdown: bool,

    /// Don't warn when --descr is used (or set ESPERF_NO_WARNING)
    #[arg(long)]
    no_warning: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Profile JSON files; a single document is read from stdin if none
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging (stderr; stdout carries only folded lines)
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let query_label = if cli.descr {
        QueryLabel::Description
    } else {
        QueryLabel::Type
    };

    let args = CollapseArgs {
        inputs: cli.files,
        output: cli.output,
        options: CollapseOptions::new()
            .with_detail(cli.detail)
            .with_query_label(query_label)
            .with_breakdown(!cli.no_breakdown),
        no_warning: cli.no_warning || env_flag_set(std::env::var_os(NO_WARNING_ENV).as_deref()),
    };

    // Validate args first
    validate_args(&args)?;

    execute_collapse(&args)?;

    Ok(())
}
