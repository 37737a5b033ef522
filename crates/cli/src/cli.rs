use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "kwalign")]
#[command(about = "Align keyword-message colons in Objective-C sources")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Type a `:` at a position and print the aligned text
	Insert {
		#[command(flatten)]
		target: Target,

		/// Grammar scope of the file
		#[arg(long, short = 'g', default_value = "source.objc")]
		grammar: String,

		/// Configuration file (defaults to the user config)
		#[arg(long, short = 'c', value_name = "PATH")]
		config: Option<PathBuf>,

		/// Write the result back to FILE instead of printing it
		#[arg(long, short = 'i', conflicts_with = "json")]
		in_place: bool,

		/// Print a JSON report
		#[arg(long)]
		json: bool,
	},
	/// Report the alignment verdict for an existing colon
	Resolve {
		#[command(flatten)]
		target: Target,

		/// Configuration file (defaults to the user config)
		#[arg(long, short = 'c', value_name = "PATH")]
		config: Option<PathBuf>,

		/// Print a JSON report
		#[arg(long)]
		json: bool,
	},
}

/// A file and a zero-based position inside it.
#[derive(Args, Debug)]
pub struct Target {
	/// Source file
	pub file: PathBuf,

	/// Zero-based row
	#[arg(long, short = 'r')]
	pub row: usize,

	/// Zero-based column, in characters
	#[arg(long)]
	pub column: usize,
}
