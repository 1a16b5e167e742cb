use super::{FrameSet, TagContainer};
use crate::error::ContainerError;

use lofty::config::WriteOptions;
use lofty::error::LoftyError;
use lofty::id3::v1::Id3v1Tag;
use lofty::io::{FileLike, Length, Truncate};
use lofty::tag::TagExt;

/// The size of the legacy tag trailer at the end of a file
pub const TRAILER_SIZE: u64 = 128;

/// The identifier at the start of the legacy tag trailer
pub const TRAILER_MARKER: [u8; 3] = *b"TAG";

/// Position of the genre byte, counted back from the end of the file
///
/// The genre is the final byte of the trailer, and the trailer is the final
/// [`TRAILER_SIZE`] bytes of the file.
pub const GENRE_OFFSET_FROM_END: u64 = 1;

/// Writes frames as an ID3v1.1 trailer through [`lofty`]
///
/// Layout of the 128 bytes:
///
/// | Offset | Size | Field                      |
/// |--------|------|----------------------------|
/// | 0      | 3    | `TAG`                      |
/// | 3      | 30   | Title                      |
/// | 33     | 30   | Artist                     |
/// | 63     | 30   | Album                      |
/// | 93     | 4    | Year (ASCII digits)        |
/// | 97     | 28   | Comment                    |
/// | 125    | 1    | Zero                       |
/// | 126    | 1    | Track number (always 0)    |
/// | 127    | 1    | Genre (always unset, 0xFF) |
///
/// Text longer than its field is cut off, shorter text is padded with NUL bytes.
/// An existing trailer is overwritten in place, otherwise a new one is appended.
///
/// The file has to be recognizable as MPEG audio, optionally preceded by an ID3v2 tag
/// or a few junk bytes. Anything else is rejected without being written to.
#[derive(Debug, Clone, Copy)]
pub struct Id3v1Container {
	lossy_text_encoding: bool,
}

impl Id3v1Container {
	/// Create a new `Id3v1Container`
	///
	/// With `lossy_text_encoding`, characters outside of Latin-1 are written as `?`.
	/// Otherwise they fail the write.
	pub fn new(lossy_text_encoding: bool) -> Self {
		Self {
			lossy_text_encoding,
		}
	}

	fn tag(frames: &FrameSet<'_>) -> Id3v1Tag {
		let mut tag = Id3v1Tag::new();
		tag.title = Some(frames.title.to_owned());
		tag.artist = Some(frames.artist.to_owned());
		tag.album = frames.album.map(str::to_owned);
		tag.year = frames.year;
		tag.comment = frames.comment.map(str::to_owned);

		// The genre byte is patched separately
		tag
	}
}

impl Default for Id3v1Container {
	fn default() -> Self {
		Self::new(true)
	}
}

impl TagContainer for Id3v1Container {
	fn write_tag<F>(&mut self, file: &mut F, frames: &FrameSet<'_>) -> Result<(), ContainerError>
	where
		F: FileLike,
		LoftyError: From<<F as Truncate>::Error>,
		LoftyError: From<<F as Length>::Error>,
	{
		// The file type is probed from the current position
		file.rewind()?;

		let write_options = WriteOptions::new().lossy_text_encoding(self.lossy_text_encoding);
		Self::tag(frames)
			.save_to(file, write_options)
			.map_err(|e| ContainerError::with_source("Unable to save the ID3v1 tag", e))?;

		file.flush()?;

		log::debug!("Saved ID3v1 trailer for \"{}\"", frames.title);
		Ok(())
	}
}
