use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wordfreq::{Config, DEFAULT_MAX_WORD_LEN, DEFAULT_WORKERS};

/// Count word frequencies in a text file, ranked by count
#[derive(Parser)]
#[command(name = "wordfreq", version)]
struct Cli {
	/// Input text file
	input: PathBuf,

	/// Destination for the ranked listing
	output: PathBuf,

	/// Worker thread count; 0 means one per logical CPU
	#[arg(short = 'j', long, default_value_t = DEFAULT_WORKERS)]
	workers: usize,

	/// Longest word kept, in bytes; longer runs are truncated
	#[arg(long, default_value_t = DEFAULT_MAX_WORD_LEN)]
	max_word_len: usize,

	/// Omit the trailing "Total words" line
	#[arg(long)]
	no_total: bool,

	/// Show a progress bar while counting
	#[cfg(feature = "progression")]
	#[arg(long)]
	progress: bool,

	/// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn init_tracing(verbose: u8) {
	let default_level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};

	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
		)
		.with_writer(std::io::stderr)
		.with_target(verbose >= 2)
		.init();
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	let config = Config {
		workers: cli.workers,
		max_word_len: cli.max_word_len,
		print_total: !cli.no_total,
		#[cfg(feature = "progression")]
		progress_bar: cli.progress,
		..Config::default()
	};

	if let Err(err) = wordfreq::run(&cli.input, &cli.output, &config) {
		eprintln!("wordfreq: {err}");
		process::exit(1);
	}
}
