//! Direct binary edits of a tagged file
//!
//! * [`patch_genre_byte`] overwrites the final byte of the legacy tag trailer
//! * [`strip_leading_header`] removes everything before the first frame sync byte
//!
//! Neither operation rolls back on failure. If a [`TagContainer`](crate::container::TagContainer)
//! succeeded but the patch fails, the file keeps the new text frames with its old genre byte.

use crate::container::{GENRE_OFFSET_FROM_END, TRAILER_MARKER, TRAILER_SIZE};
use crate::error::{Result, TagError};
use crate::genre::Genre;
use crate::id3v2::{ID3V2_MARKER, LeadingHeader};
use crate::macros::err;
use crate::util::io::{overwrite, read_bounded};

use std::io::SeekFrom;

use byteorder::WriteBytesExt;
use lofty::io::{FileLike, Length, Truncate};

/// The first byte of an MPEG audio frame sync marker
pub const FRAME_SYNC_BYTE: u8 = 0xFF;

/// Overwrite the genre byte of the legacy tag trailer
///
/// The trailer must occupy the final [`TRAILER_SIZE`] bytes of `file`. The byte at
/// `len - GENRE_OFFSET_FROM_END` is set to the genre's code, or
/// [`GENRE_UNSET`](crate::genre::GENRE_UNSET) if `genre` is `None`.
///
/// # Errors
///
/// * `file` is shorter than a trailer, or doesn't end in one
/// * [`std::io::Error`]
///
/// # Examples
///
/// ```rust
/// use id3_autogen::container::TRAILER_SIZE;
/// use id3_autogen::genre::Genre;
/// use id3_autogen::patch::patch_genre_byte;
/// use std::io::Cursor;
///
/// # fn main() -> id3_autogen::error::Result<()> {
/// let mut trailer = vec![0; TRAILER_SIZE as usize];
/// trailer[..3].copy_from_slice(b"TAG");
///
/// let mut file = Cursor::new(trailer);
/// patch_genre_byte(&mut file, Some(Genre::from_name("Rock")?))?;
///
/// assert_eq!(file.get_ref().last(), Some(&17));
/// # Ok(()) }
/// ```
pub fn patch_genre_byte<F>(file: &mut F, genre: Option<Genre>) -> Result<()>
where
	F: FileLike,
	TagError: From<<F as Truncate>::Error>,
	TagError: From<<F as Length>::Error>,
{
	let len = file.len()?;
	if len < TRAILER_SIZE {
		err!(@INVALID "File is too small to hold a legacy tag trailer");
	}

	file.seek(SeekFrom::Start(len - TRAILER_SIZE))?;

	let mut marker = [0; 3];
	file.read_exact(&mut marker)?;
	if marker != TRAILER_MARKER {
		err!(@INVALID "File doesn't end in a legacy tag trailer");
	}

	let byte = Genre::byte_for(genre);
	log::debug!("Patching genre byte to {byte:#04X}");

	file.seek(SeekFrom::Start(len - GENRE_OFFSET_FROM_END))?;
	file.write_u8(byte)?;
	file.flush()?;

	Ok(())
}

/// Remove everything preceding the first [`FRAME_SYNC_BYTE`]
///
/// The whole file is read into memory, scanned from offset 0, and rewritten starting at the
/// first `0xFF` byte. Returns the number of bytes removed, or `None` if the file was left
/// untouched, either because it already starts with `0xFF` or because it contains none.
///
/// NOTE: The boundary is a plain byte scan. The size field of a leading ID3v2 header is
/// never used, so a `0xFF` byte inside that header's content results in a cut that is too
/// early. A warning is logged when a parseable header disagrees with the scan.
///
/// # Errors
///
/// * The file is larger than `size_limit`
/// * [`std::io::Error`]
///
/// # Examples
///
/// ```rust
/// use id3_autogen::patch::strip_leading_header;
/// use std::io::Cursor;
///
/// # fn main() -> id3_autogen::error::Result<()> {
/// let mut file = Cursor::new(vec![0x49, 0x44, 0x33, 0x00, 0xFF, 0xFB]);
///
/// assert_eq!(strip_leading_header(&mut file, u64::MAX)?, Some(4));
/// assert_eq!(file.get_ref(), &[0xFF, 0xFB]);
/// # Ok(()) }
/// ```
pub fn strip_leading_header<F>(file: &mut F, size_limit: u64) -> Result<Option<u64>>
where
	F: FileLike,
	TagError: From<<F as Truncate>::Error>,
	TagError: From<<F as Length>::Error>,
{
	let content = read_bounded(file, size_limit)?;

	let Some(boundary) = content.iter().position(|b| *b == FRAME_SYNC_BYTE) else {
		log::warn!("No frame sync byte found, leaving the file untouched");
		return Ok(None);
	};

	if boundary == 0 {
		log::debug!("File starts with a frame sync byte, nothing to strip");
		return Ok(None);
	}

	check_boundary(&content, boundary);
	overwrite(file, &content[boundary..])?;

	log::debug!("Stripped {boundary} leading bytes");

	Ok(Some(boundary as u64))
}

fn check_boundary(content: &[u8], boundary: usize) {
	if !content.starts_with(&ID3V2_MARKER) {
		log::warn!("Removing {boundary} leading bytes that don't start with an ID3v2 header");
		return;
	}

	let Some(header) = LeadingHeader::parse(content) else {
		log::warn!("Removing {boundary} leading bytes with an unreadable ID3v2 header");
		return;
	};

	let declared = header.full_tag_size();
	if declared != boundary as u64 {
		log::warn!(
			"ID3v2 header declares {declared} bytes, but the first frame sync byte is at offset \
			 {boundary}"
		);
	}
}
