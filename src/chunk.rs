/// A half-open byte range `[start, end)` of the input owned by one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
	pub start: u64,
	pub end: u64,
}

impl Chunk {
	#[inline]
	pub fn len(&self) -> u64 {
		self.end - self.start
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}
}

/// Splits `[0, file_size)` into `workers` contiguous, disjoint chunks of
/// `file_size / workers` bytes each; the last chunk absorbs the remainder.
/// When `file_size < workers`, the leading chunks come out empty.
pub fn partition(file_size: u64, workers: usize) -> Vec<Chunk> {
	assert!(workers >= 1, "at least one worker required");
	let chunk = file_size / workers as u64;

	(0..workers as u64)
		.map(|i| Chunk {
			start: i * chunk,
			end: if i == workers as u64 - 1 { file_size } else { (i + 1) * chunk },
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn assert_covers(file_size: u64, workers: usize) {
		let chunks = partition(file_size, workers);
		assert_eq!(chunks.len(), workers);
		assert_eq!(chunks[0].start, 0);
		assert_eq!(chunks[workers - 1].end, file_size);

		for pair in chunks.windows(2) {
			assert_eq!(pair[0].end, pair[1].start);
		}
	}

	#[test]
	fn it_should_cover_without_gaps_or_overlaps() {
		for file_size in [0, 1, 3, 4, 100, 101, 102, 103, 1 << 20] {
			for workers in [1, 2, 3, 4, 7, 64] {
				assert_covers(file_size, workers);
			}
		}
	}

	#[test]
	fn it_should_give_the_remainder_to_the_last_chunk() {
		let chunks = partition(10, 4);
		assert_eq!(chunks, [
			Chunk { start: 0, end: 2 },
			Chunk { start: 2, end: 4 },
			Chunk { start: 4, end: 6 },
			Chunk { start: 6, end: 10 },
		]);
	}

	#[test]
	fn it_should_partition_an_empty_file_into_empty_chunks() {
		assert!(partition(0, 4).iter().all(|chunk| chunk.is_empty()));
	}

	#[test]
	fn it_should_leave_leading_chunks_empty_when_workers_exceed_bytes() {
		let chunks = partition(3, 5);
		assert!(chunks[..4].iter().all(|chunk| chunk.is_empty()));
		assert_eq!(chunks[4], Chunk { start: 0, end: 3 });
	}
}
