//! The fixed ID3v1 genre table
//!
//! The legacy trailer stores the genre as a single byte indexing into [`GENRES`].
//! Codes `0..=79` are the original ID3v1 set, the rest are the Winamp extensions.
//! A byte of [`GENRE_UNSET`] means no genre has been set.

use crate::error::ValidationError;

use std::fmt::{Display, Formatter};

/// All genres that can be expressed in the legacy trailer, indexed by code
pub use lofty::id3::v1::GENRES;

/// The byte written when no genre is set
pub const GENRE_UNSET: u8 = 0xFF;

/// A genre from [`GENRES`]
///
/// This can only be constructed from a valid code or name, so writing it into the
/// trailer's genre byte is always well-defined.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Genre(u8);

impl Genre {
	/// Look up a genre by its numeric code
	///
	/// # Errors
	///
	/// [`ValidationError::UnknownGenreCode`] if `code` isn't an index into [`GENRES`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3_autogen::genre::Genre;
	///
	/// # fn main() -> Result<(), id3_autogen::error::ValidationError> {
	/// let rock = Genre::from_code(17)?;
	/// assert_eq!(rock.name(), "Rock");
	///
	/// assert!(Genre::from_code(200).is_err());
	/// # Ok(()) }
	/// ```
	pub fn from_code(code: u8) -> Result<Self, ValidationError> {
		if usize::from(code) < GENRES.len() {
			return Ok(Self(code));
		}

		Err(ValidationError::UnknownGenreCode(code))
	}

	/// Look up a genre by name
	///
	/// Names are compared case-insensitively. A decimal code (ex. `"17"`) is accepted as well.
	///
	/// # Errors
	///
	/// [`ValidationError::UnknownGenre`] if the name isn't in [`GENRES`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3_autogen::genre::Genre;
	///
	/// # fn main() -> Result<(), id3_autogen::error::ValidationError> {
	/// let genre = Genre::from_name("classic rock")?;
	/// assert_eq!(genre.code(), 1);
	/// # Ok(()) }
	/// ```
	pub fn from_name(name: &str) -> Result<Self, ValidationError> {
		let name = name.trim();

		if let Some(position) = GENRES.iter().position(|g| g.eq_ignore_ascii_case(name)) {
			return Ok(Self(position as u8));
		}

		match name.parse::<u8>() {
			Ok(code) if usize::from(code) < GENRES.len() => Ok(Self(code)),
			_ => Err(ValidationError::UnknownGenre(name.to_owned())),
		}
	}

	/// The numeric code written to the trailer
	pub fn code(self) -> u8 {
		self.0
	}

	/// The display name from [`GENRES`]
	pub fn name(self) -> &'static str {
		GENRES[usize::from(self.0)]
	}

	/// The byte to write for an optional genre, [`GENRE_UNSET`] if there is none
	pub fn byte_for(genre: Option<Self>) -> u8 {
		genre.map_or(GENRE_UNSET, Self::code)
	}
}

impl Display for Genre {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// All genre names, sorted alphabetically (case-insensitive)
pub fn sorted_names() -> Vec<&'static str> {
	let mut names = GENRES.to_vec();
	names.sort_by_key(|name| name.to_ascii_lowercase());
	names
}
