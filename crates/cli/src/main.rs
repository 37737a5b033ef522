//! Kwalign command line binary.
//!
//! Feeds a file through an editor session as if `:` had been typed at a
//! given position, or reports the verdict for a colon already present.

mod cli;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kwalign_primitives::Position;

use crate::cli::{Cli, Command, Target};

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	match cli.command {
		Command::Insert {
			target,
			grammar,
			config,
			in_place,
			json,
		} => {
			let config = report::load_config(config.as_deref())?;
			let source = read_target(&target)?;
			let report = report::insert(&source, position(&target), &grammar, config.align)?;
			tracing::info!(outcome = report.outcome, column = ?report.column, "insert handled");
			if json {
				println!("{}", serde_json::to_string_pretty(&report)?);
			} else if in_place {
				std::fs::write(&target.file, &report.text)
					.with_context(|| format!("writing {}", target.file.display()))?;
			} else {
				print!("{}", report.text);
			}
		}
		Command::Resolve { target, config, json } => {
			let config = report::load_config(config.as_deref())?;
			let source = read_target(&target)?;
			let report = report::resolve(&source, position(&target), config.align.search_lines)?;
			if json {
				println!("{}", serde_json::to_string_pretty(&report)?);
			} else {
				println!("{}", report.summary());
			}
		}
	}

	Ok(())
}

fn read_target(target: &Target) -> anyhow::Result<String> {
	std::fs::read_to_string(&target.file).with_context(|| format!("reading {}", target.file.display()))
}

fn position(target: &Target) -> Position {
	Position::new(target.row, target.column)
}

fn setup_tracing(verbose: bool) {
	use std::fs::OpenOptions;

	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::fmt::format::FmtSpan;
	use tracing_subscriber::prelude::*;

	let default_filter = || {
		if verbose {
			EnvFilter::new("kwalign_indent=trace,kwalign_session=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	};

	// KWALIGN_LOG_DIR redirects logs to a per-process file
	if let Some(log_dir) = std::env::var_os("KWALIGN_LOG_DIR").map(PathBuf::from) {
		if std::fs::create_dir_all(&log_dir).is_ok() {
			let log_path = log_dir.join(format!("kwalign.{}.log", std::process::id()));
			if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
				let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());
				let file_layer = tracing_subscriber::fmt::layer()
					.with_writer(file)
					.with_ansi(false)
					.with_span_events(FmtSpan::CLOSE)
					.with_target(true);

				tracing_subscriber::registry().with(filter).with(file_layer).init();
				tracing::info!(path = ?log_path, "tracing initialized");
				return;
			}
		}
	}

	// stdout carries results
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter()))
		.with_writer(std::io::stderr)
		.init();
}
