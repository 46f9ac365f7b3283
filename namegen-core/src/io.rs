use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NameGenError, Result};

/// Reads a corpus file, one raw name per line.
///
/// Lines are returned untouched; trimming and filtering belong to the trainer.
pub(crate) fn read_lines<P: AsRef<Path>>(corpus: P) -> Result<Vec<String>> {
	let contents = fs::read_to_string(corpus)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Path of the cached model that belongs to a corpus file.
///
/// Example:
/// `data/european.txt` + `"bin"` → `data/european.bin`
pub(crate) fn sibling_with_extension<P: AsRef<Path>>(corpus: P, extension: &str) -> Result<PathBuf> {
	let corpus = corpus.as_ref();
	if corpus.file_stem().is_none() {
		return Err(NameGenError::InvalidPath(format!("{} has no file name", corpus.display())));
	}
	Ok(corpus.with_extension(extension))
}

/// Identifier of a corpus: its file name without directory or extension.
///
/// `"./data/arabic.txt"` → `"arabic"`
pub(crate) fn corpus_key<P: AsRef<Path>>(corpus: P) -> Result<String> {
	let corpus = corpus.as_ref();
	corpus
		.file_stem()
		.map(|stem| stem.to_string_lossy().into_owned())
		.ok_or_else(|| NameGenError::InvalidPath(format!("{} has no file name", corpus.display())))
}

/// Resolves `"."` and `"./"` to the working directory, keeps anything else as given.
pub(crate) fn resolve_folder(input: &Path) -> PathBuf {
	if input == Path::new(".") || input == Path::new("./") {
		std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Full paths of the regular files in `dir` carrying `extension`, sorted.
pub(crate) fn files_with_extension<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
	let mut files = Vec::new();
	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(OsStr::new(extension)) {
			files.push(path);
		}
	}
	files.sort();
	Ok(files)
}
