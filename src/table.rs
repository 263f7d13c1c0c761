use rustc_hash::FxHashMap;

/// Word → occurrence count. Grows with the distinct-word count; merge is
/// commutative and associative, so partial tables can be combined in any
/// order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FreqTable {
	counts: FxHashMap<String, u64>,
}

impl FreqTable {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, word: String) {
		*self.counts.entry(word).or_insert(0) += 1;
	}

	pub fn add(&mut self, word: String, count: u64) {
		*self.counts.entry(word).or_insert(0) += count;
	}

	pub fn merge(&mut self, other: FreqTable) {
		for (word, count) in other {
			self.add(word, count);
		}
	}

	pub fn count(&self, word: &str) -> u64 {
		self.counts.get(word).copied().unwrap_or(0)
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Total occurrences across all words.
	pub fn total(&self) -> u64 {
		self.counts.values().sum()
	}
}

impl IntoIterator for FreqTable {
	type Item = (String, u64);
	type IntoIter = std::collections::hash_map::IntoIter<String, u64>;

	fn into_iter(self) -> Self::IntoIter {
		self.counts.into_iter()
	}
}

impl FromIterator<String> for FreqTable {
	fn from_iter<I: IntoIterator<Item = String>>(words: I) -> Self {
		let mut table = FreqTable::new();

		for word in words {
			table.insert(word);
		}

		table
	}
}
