use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Seek, SeekFrom};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use tracing::{debug, info};

pub mod chunk;
pub mod error;
pub mod rank;
pub mod table;
pub mod token;

pub use chunk::{partition, Chunk};
pub use error::{Error, Result};
pub use rank::{rank, write_ranked, Entry};
pub use table::FreqTable;
pub use token::Tokenizer;

pub const DEFAULT_WORKERS: usize = 4;
pub const DEFAULT_MAX_WORD_LEN: usize = 127;

pub struct Config<'a> {
	/// Worker thread count; `0` means one per logical CPU.
	pub workers: usize,
	/// Longest word kept, in bytes; longer runs are truncated.
	pub max_word_len: usize,
	/// Append a `Total words: <sum>` line after the ranked entries.
	pub print_total: bool,
	#[cfg(feature = "progression")]
	pub progress_bar: bool,
	#[cfg(feature = "progression")]
	pub bar_config: progression::Config<'a>,
	#[cfg(not(feature = "progression"))]
	pub _phantom: std::marker::PhantomData<&'a ()>,
}

impl Default for Config<'_> {
	fn default() -> Self {
		Self {
			workers: DEFAULT_WORKERS,
			max_word_len: DEFAULT_MAX_WORD_LEN,
			print_total: true,
			#[cfg(feature = "progression")]
			progress_bar: false,
			#[cfg(feature = "progression")]
			bar_config: progression::Config::default(),
			#[cfg(not(feature = "progression"))]
			_phantom: std::marker::PhantomData,
		}
	}
}

impl Config<'_> {
	fn worker_count(&self) -> usize {
		if self.workers == 0 { num_cpus::get().max(1) } else { self.workers }
	}
}

/// Maps the file chunk-by-chunk on private worker threads, then reduces the
/// partial tables into one global table. Workers share nothing mutable; the
/// scope join is the only barrier, and the reducer runs after it.
pub fn count_file(path: &Path, config: &Config<'_>) -> Result<FreqTable> {
	let file_size = fs::metadata(path)
		.map_err(|source| Error::input(path, source))?
		.len();
	let workers = config.worker_count();
	let max_word_len = config.max_word_len.max(1);
	let chunks = partition(file_size, workers);
	debug!(file_size, workers, "mapping chunks");

	#[cfg(feature = "progression")]
	let bar = config.progress_bar.then(|| progression::Bar::new(file_size, config.bar_config.clone()));

	thread::scope(|scope| {
		let (sender, receiver) = mpsc::channel();

		for (index, chunk) in chunks.into_iter().enumerate() {
			let sender = sender.clone();
			#[cfg(feature = "progression")]
			let bar = &bar;

			scope.spawn(move || {
				let partial = map_chunk(path, chunk, max_word_len);

				if let Ok(table) = &partial {
					debug!(index, start = chunk.start, end = chunk.end, words = table.total(), "chunk mapped");
				}

				#[cfg(feature = "progression")]
				if let Some(bar) = bar {
					bar.inc(chunk.len());
				}

				sender.send(partial).unwrap()
			});
		}

		drop(sender);
		reduce(receiver)
	})
}

/// One worker: own file handle, own cursor, own table.
fn map_chunk(path: &Path, chunk: Chunk, max_word_len: usize) -> Result<FreqTable> {
	let mut file = File::open(path).map_err(|source| Error::input(path, source))?;

	// Land one byte early so the tokenizer can see whether the chunk starts
	// inside a word begun by the previous one.
	file.seek(SeekFrom::Start(chunk.start.saturating_sub(1)))
		.map_err(|source| Error::input(path, source))?;

	let mut table = FreqTable::new();

	for word in Tokenizer::new(BufReader::new(file), chunk, max_word_len) {
		table.insert(word.map_err(|source| Error::input(path, source))?);
	}

	Ok(table)
}

/// Sequential merge of the partial tables. Merge order does not matter; the
/// channel is drained completely before reporting so no worker is left
/// sending into a closed channel.
fn reduce(receiver: mpsc::Receiver<Result<FreqTable>>) -> Result<FreqTable> {
	let mut global = FreqTable::new();
	let mut failed = None;

	for partial in receiver {
		match partial {
			Ok(table) => global.merge(table),
			Err(err) => failed = failed.or(Some(err)),
		}
	}

	match failed {
		Some(err) => Err(err),
		None => Ok(global),
	}
}

/// Counts `input`, ranks the result, and writes the listing to `output`.
pub fn run(input: &Path, output: &Path, config: &Config<'_>) -> Result<()> {
	let table = count_file(input, config)?;
	info!(distinct = table.len(), total = table.total(), "reduce complete");

	let entries = rank(table);
	let file = File::create(output).map_err(|source| Error::output(output, source))?;

	write_ranked(BufWriter::new(file), &entries, config.print_total)
		.map_err(|source| Error::output(output, source))
}
