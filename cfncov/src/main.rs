//! # cfncov
//!
//! A CLI tool that updates the CloudFormation resource coverage tables in the
//! docs from a coverage catalog.
//!
//! ## Overview
//!
//! cfncov is built on top of cfncovlib. It reads the catalog JSON, renders the
//! community and pro tables, and rewrites the two table regions of the docs
//! page. The page is only written when its content changes.
//!
//! ## Usage
//!
//! ```bash
//! # Update the default docs page
//! cfncov --cfn-json artifacts/iac-catalog-assets/cfn_resources.json
//!
//! # Update a specific page
//! cfncov --cfn-json cfn_resources.json --md-file docs/cloudformation.mdx
//!
//! # Show what was located and written
//! RUST_LOG=cfncovlib=debug cfncov --cfn-json cfn_resources.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use cfncovlib::{update_document, UpdateConfig, UpdateOptions, UpdateOutcome, DEFAULT_DOCUMENT_PATH};
use clap::{value_parser, Arg, ArgMatches, Command};
use console::style;
use tracing_subscriber::EnvFilter;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("cfncov")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Update CloudFormation Resources tables in docs")
        .arg(
            Arg::new("cfn-json")
                .long("cfn-json")
                .required(true)
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Path to iac-catalog-assets/cfn_resources.json in downloaded artifacts"),
        )
        .arg(
            Arg::new("md-file")
                .long("md-file")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_DOCUMENT_PATH)
                .help("Markdown file which needs to be updated"),
        )
}

/// Build update options from matches
fn extract_options(matches: &ArgMatches) -> UpdateOptions {
    let mut options = UpdateOptions::new(
        matches
            .get_one::<PathBuf>("cfn-json")
            .cloned()
            .unwrap_or_default(),
    );
    if let Some(path) = matches.get_one::<PathBuf>("md-file") {
        options = options.document(path.clone());
    }
    options
}

/// Install the stderr log subscriber, filtered by RUST_LOG
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(matches: &ArgMatches) -> Result<UpdateOutcome, anyhow::Error> {
    let options = extract_options(matches);
    let outcome = update_document(&options, &UpdateConfig::default())?;
    Ok(outcome)
}

fn main() -> ExitCode {
    init_tracing();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(outcome) => {
            tracing::debug!(?outcome, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e}", style("Error:").for_stderr().red().bold());
            ExitCode::FAILURE
        }
    }
}
