//! The tag container collaborator
//!
//! A [`TagContainer`] serializes the textual frames of a [`FrameSet`] into a file.
//! It is handed already validated and trimmed values, and reports only success or failure.
//!
//! The genre is deliberately absent from [`FrameSet`], it is patched into the trailer
//! separately. See [`patch`](crate::patch).

mod id3v1;

pub use id3v1::{GENRE_OFFSET_FROM_END, Id3v1Container, TRAILER_MARKER, TRAILER_SIZE};

use crate::error::ContainerError;
use crate::record::MetadataRecord;

use lofty::error::LoftyError;
use lofty::io::{FileLike, Length, Truncate};

/// The frames handed to a [`TagContainer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSet<'a> {
	/// Track artist
	pub artist: &'a str,
	/// Track title
	pub title: &'a str,
	/// Album title
	pub album: Option<&'a str>,
	/// Release year, within [`YEAR_RANGE`](crate::record::YEAR_RANGE)
	pub year: Option<u16>,
	/// A short comment
	pub comment: Option<&'a str>,
}

impl<'a> FrameSet<'a> {
	/// Borrow the frames of a normalized record
	///
	/// A record without an artist produces an empty artist frame.
	pub fn from_record(record: &'a MetadataRecord) -> Self {
		Self {
			artist: record.artist().unwrap_or_default(),
			title: record.title(),
			album: record.album(),
			year: record.year(),
			comment: record.comment(),
		}
	}
}

/// Writes a [`FrameSet`] into a file
///
/// The stream position is unspecified on entry and on return, implementors and callers
/// both seek before accessing `file`.
pub trait TagContainer {
	/// Write `frames` into `file`, replacing any tag of the same kind
	///
	/// # Errors
	///
	/// Any failure to encode or write the frames
	fn write_tag<F>(&mut self, file: &mut F, frames: &FrameSet<'_>) -> Result<(), ContainerError>
	where
		F: FileLike,
		LoftyError: From<<F as Truncate>::Error>,
		LoftyError: From<<F as Length>::Error>;
}

impl<T> TagContainer for &mut T
where
	T: TagContainer,
{
	fn write_tag<F>(&mut self, file: &mut F, frames: &FrameSet<'_>) -> Result<(), ContainerError>
	where
		F: FileLike,
		LoftyError: From<<F as Truncate>::Error>,
		LoftyError: From<<F as Length>::Error>,
	{
		(**self).write_tag(file, frames)
	}
}
