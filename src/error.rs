use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure is fatal for the run; nothing is retried and no partial
/// output is written.
#[derive(Error, Debug)]
pub enum Error {
	#[error("cannot read {}: {source}", path.display())]
	Input {
		path: PathBuf,
		source: io::Error,
	},

	#[error("cannot write {}: {source}", path.display())]
	Output {
		path: PathBuf,
		source: io::Error,
	},
}

impl Error {
	pub fn input(path: &Path, source: io::Error) -> Self {
		Error::Input { path: path.to_path_buf(), source }
	}

	pub fn output(path: &Path, source: io::Error) -> Self {
		Error::Output { path: path.to_path_buf(), source }
	}
}
