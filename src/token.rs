use std::io::{self, Read};

use crate::chunk::Chunk;

/// Lazy word iterator over the bytes of one chunk. A word is a maximal run of
/// ASCII alphabetic bytes, folded to lowercase; runs longer than `max_len`
/// are truncated but still count as one word.
///
/// The reader must be positioned at `chunk.start`, or at `chunk.start - 1`
/// when `chunk.start > 0` so the tokenizer can see the byte just before the
/// chunk. Single consuming pass; not restartable.
pub struct Tokenizer<R: Read> {
	bytes: io::Bytes<R>,
	pos: u64,
	end: u64,
	max_len: usize,
	word: String,
	skip: bool,
	done: bool,
}

impl<R: Read> Tokenizer<R> {
	pub fn new(reader: R, chunk: Chunk, max_len: usize) -> Self {
		Self {
			bytes: reader.bytes(),
			pos: chunk.start.saturating_sub(1),
			end: chunk.end,
			max_len,
			word: String::new(),
			skip: chunk.start > 0,
			done: false,
		}
	}

	fn read_byte(&mut self) -> io::Result<Option<u8>> {
		match self.bytes.next() {
			Some(Ok(byte)) => {
				self.pos += 1;
				Ok(Some(byte))
			}
			Some(Err(err)) => Err(err),
			None => Ok(None),
		}
	}

	/// A word straddling the lower chunk boundary belongs to the previous
	/// worker, which finishes it past its own `end`. If the byte just before
	/// `start` is alphabetic, the run it opens is dropped here. When the
	/// boundary falls exactly on a word boundary, nothing is skipped.
	fn skip_partial_word(&mut self) -> io::Result<()> {
		match self.read_byte()? {
			Some(byte) if byte.is_ascii_alphabetic() => loop {
				match self.read_byte()? {
					Some(byte) if byte.is_ascii_alphabetic() => {}
					Some(_) => return Ok(()),
					None => {
						self.done = true;
						return Ok(());
					}
				}
			},
			Some(_) => Ok(()),
			None => {
				self.done = true;
				Ok(())
			}
		}
	}

	fn next_word(&mut self) -> io::Result<Option<String>> {
		if self.skip {
			self.skip = false;
			self.skip_partial_word()?;
		}

		while !self.done {
			// Never start a word at or past `end`; a word already in
			// progress there is read to completion.
			if self.word.is_empty() && self.pos >= self.end {
				break;
			}

			match self.read_byte()? {
				Some(byte) if byte.is_ascii_alphabetic() => {
					if self.word.len() < self.max_len {
						self.word.push(byte.to_ascii_lowercase() as char);
					}
				}
				Some(_) => {
					if !self.word.is_empty() {
						return Ok(Some(std::mem::take(&mut self.word)));
					}
				}
				None => self.done = true,
			}
		}

		if self.word.is_empty() {
			Ok(None)
		} else {
			Ok(Some(std::mem::take(&mut self.word)))
		}
	}
}

impl<R: Read> Iterator for Tokenizer<R> {
	type Item = io::Result<String>;

	fn next(&mut self) -> Option<Self::Item> {
		match self.next_word() {
			Ok(Some(word)) => Some(Ok(word)),
			Ok(None) => None,
			Err(err) => Some(Err(err)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Cursor;

	fn words_in(text: &str, chunk: Chunk) -> Vec<String> {
		let mut cursor = Cursor::new(text.as_bytes());
		cursor.set_position(chunk.start.saturating_sub(1));

		Tokenizer::new(cursor, chunk, crate::DEFAULT_MAX_WORD_LEN)
			.collect::<io::Result<Vec<_>>>()
			.unwrap()
	}

	fn whole(text: &str) -> Vec<String> {
		words_in(text, Chunk { start: 0, end: text.len() as u64 })
	}

	#[test]
	fn it_should_split_on_non_alphabetic_bytes() {
		assert_eq!(whole("Hello, WORLD!"), ["hello", "world"]);
		assert_eq!(whole("cat9dog\ncow"), ["cat", "dog", "cow"]);
	}

	#[test]
	fn it_should_emit_nothing_for_empty_or_letterless_input() {
		assert!(whole("").is_empty());
		assert!(whole("123 ... \n\t").is_empty());
	}

	#[test]
	fn it_should_finish_a_word_in_progress_at_its_end_boundary() {
		// "defgh" starts at 4, the boundary at 6 falls inside it.
		let text = "abc defgh ijk";
		assert_eq!(words_in(text, Chunk { start: 0, end: 6 }), ["abc", "defgh"]);
		assert_eq!(words_in(text, Chunk { start: 6, end: 13 }), ["ijk"]);
	}

	#[test]
	fn it_should_not_skip_when_the_boundary_starts_a_word() {
		let text = "abc def";
		assert_eq!(words_in(text, Chunk { start: 0, end: 4 }), ["abc"]);
		assert_eq!(words_in(text, Chunk { start: 4, end: 7 }), ["def"]);
	}

	#[test]
	fn it_should_drop_a_run_finished_by_the_previous_chunk() {
		let text = "abc def";
		assert_eq!(words_in(text, Chunk { start: 0, end: 3 }), ["abc"]);
		assert_eq!(words_in(text, Chunk { start: 3, end: 7 }), ["def"]);
	}

	#[test]
	fn it_should_attribute_a_word_spanning_a_whole_chunk_to_its_first_letter() {
		let text = "aaaaaaaaaa";
		assert_eq!(words_in(text, Chunk { start: 0, end: 5 }), ["aaaaaaaaaa"]);
		assert!(words_in(text, Chunk { start: 5, end: 10 }).is_empty());
	}

	#[test]
	fn it_should_truncate_overlong_runs_to_max_len() {
		let mut cursor = Cursor::new(&b"abcdefgh xyz"[..]);
		let words: Vec<_> = Tokenizer::new(&mut cursor, Chunk { start: 0, end: 12 }, 4)
			.collect::<io::Result<_>>()
			.unwrap();

		assert_eq!(words, ["abcd", "xyz"]);
	}

	#[test]
	fn it_should_handle_an_empty_interior_chunk() {
		assert!(words_in("abc def", Chunk { start: 3, end: 3 }).is_empty());
	}
}
