//! Whole-file helpers for the in-place edits
//!
//! Files are abstracted through [`FileLike`](lofty::io::FileLike), so a [`File`](std::fs::File)
//! and an in-memory `Cursor<Vec<u8>>` are edited the exact same way.

use crate::error::{Result, TagError};
use crate::macros::err;

use std::io::{Read, Seek};

use lofty::io::{FileLike, Length, Truncate};

/// Read the entire contents of `file`, refusing anything larger than `limit` bytes
pub(crate) fn read_bounded<F>(file: &mut F, limit: u64) -> Result<Vec<u8>>
where
	F: Read + Seek + Length,
	TagError: From<<F as Length>::Error>,
{
	let len = file.len()?;
	if len > limit {
		log::debug!("Refusing to buffer {len} bytes (limit: {limit})");
		err!(@INVALID "File is too large to be read into memory");
	}

	let mut content = Vec::new();
	content.try_reserve_exact(len as usize).map_err(|_| {
		std::io::Error::new(
			std::io::ErrorKind::OutOfMemory,
			"Unable to allocate a buffer for the file",
		)
	})?;

	file.rewind()?;
	file.read_to_end(&mut content)?;

	Ok(content)
}

/// Replace the entire contents of `file` with `content`
pub(crate) fn overwrite<F>(file: &mut F, content: &[u8]) -> Result<()>
where
	F: FileLike,
	TagError: From<<F as Truncate>::Error>,
	TagError: From<<F as Length>::Error>,
{
	file.rewind()?;
	file.write_all(content)?;
	file.truncate(content.len() as u64)?;
	file.flush()?;

	Ok(())
}
