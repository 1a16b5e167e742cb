//! Resolving the path argument to the files to tag

use crate::pattern::Glob;

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Collect the files to tag
///
/// A file is returned as is, regardless of `glob`. For a directory, the regular files
/// directly inside of it matching `glob` are returned, sorted by name.
///
/// A path that is neither is an [`io::ErrorKind::NotFound`] error.
pub fn collect(path: &Path, glob: &Glob) -> io::Result<Vec<PathBuf>> {
	if path.is_file() {
		return Ok(vec![path.to_path_buf()]);
	}

	if !path.is_dir() {
		return Err(io::Error::new(
			io::ErrorKind::NotFound,
			"Given file or directory not found.",
		));
	}

	let mut files = Vec::new();
	for entry in WalkDir::new(path)
		.min_depth(1)
		.max_depth(1)
		.sort_by_file_name()
	{
		let entry = entry?;
		if !entry.file_type().is_file() {
			continue;
		}

		let Some(name) = entry.file_name().to_str() else {
			log::warn!("Skipping non UTF-8 file name {:?}", entry.file_name());
			continue;
		};

		if glob.is_match(name) {
			files.push(entry.into_path());
		} else {
			log::debug!("\"{name}\" doesn't match \"{}\"", glob.as_str());
		}
	}

	Ok(files)
}
