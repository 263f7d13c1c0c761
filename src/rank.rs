use std::io::{self, Write};

use crate::table::FreqTable;

/// One line of the final listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
	pub word: String,
	pub count: u64,
}

/// Orders the merged table by count descending, then word ascending. Words
/// are unique, so the order is total and the output deterministic even when
/// many words share a count.
pub fn rank(table: FreqTable) -> Vec<Entry> {
	let mut entries: Vec<_> = table
		.into_iter()
		.map(|(word, count)| Entry { word, count })
		.collect();

	entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
	entries
}

/// Writes `<word> <count>` lines in ranked order, optionally followed by a
/// `Total words: <sum>` line summing occurrences.
pub fn write_ranked<W: Write>(mut out: W, entries: &[Entry], print_total: bool) -> io::Result<()> {
	let mut total: u64 = 0;

	for entry in entries {
		writeln!(out, "{} {}", entry.word, entry.count)?;
		total += entry.count;
	}

	if print_total {
		writeln!(out, "Total words: {total}")?;
	}

	out.flush()
}
