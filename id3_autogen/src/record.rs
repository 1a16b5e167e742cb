//! The metadata record threaded through the tagging pipeline

use crate::error::{Result, ValidationError};
use crate::genre::Genre;

use std::ops::RangeInclusive;

macro_rules! impl_accessor {
	($($name:ident,)+) => {
		paste::paste! {
			$(
				#[doc = "Returns the " $name ", if set"]
				pub fn $name(&self) -> Option<&str> {
					self.$name.as_deref()
				}

				#[doc = "Sets the " $name]
				pub fn [<set_ $name>](&mut self, value: impl Into<String>) {
					self.$name = Some(value.into())
				}

				#[doc = "Builder-style [`Self::set_" $name "`]"]
				pub fn [<with_ $name>](mut self, value: impl Into<String>) -> Self {
					self.[<set_ $name>](value);
					self
				}

				#[doc = "Removes the " $name]
				pub fn [<remove_ $name>](&mut self) {
					self.$name = None
				}
			)+
		}
	}
}

/// The allowed range for [`MetadataRecord::year`]
pub const YEAR_RANGE: RangeInclusive<u16> = 1..=9999;

/// All metadata written to a single file
///
/// A record is built once as a *template* from the caller's options. Every file gets its
/// own deep copy (`Clone`), into which the artist and title derived from the filename
/// are filled. The template itself is never mutated.
///
/// The title is always taken from the filename, so it can't be set from outside the crate.
///
/// # Examples
///
/// ```rust
/// use id3_autogen::genre::Genre;
/// use id3_autogen::record::MetadataRecord;
///
/// # fn main() -> id3_autogen::error::Result<()> {
/// let template = MetadataRecord::new()
/// 	.with_album("Master of Puppets")
/// 	.with_year(1986)?
/// 	.with_genre(Genre::from_name("Metal")?);
///
/// assert_eq!(template.year(), Some(1986));
/// assert!(template.title().is_empty());
/// # Ok(()) }
/// ```
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct MetadataRecord {
	artist: Option<String>,
	pub(crate) title: String,
	album: Option<String>,
	year: Option<u16>,
	comment: Option<String>,
	genre: Option<Genre>,
}

impl MetadataRecord {
	/// Create a new empty `MetadataRecord`
	pub fn new() -> Self {
		Self::default()
	}

	impl_accessor!(artist, album, comment,);

	/// Returns the title
	///
	/// This is empty until the record has been filled from a filename.
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Returns the year, if set
	pub fn year(&self) -> Option<u16> {
		self.year
	}

	/// Sets the year
	///
	/// # Errors
	///
	/// [`ValidationError::YearOutOfRange`] if `year` isn't within [`YEAR_RANGE`].
	/// The record is left unchanged in that case.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3_autogen::record::MetadataRecord;
	///
	/// let mut record = MetadataRecord::new();
	/// assert!(record.set_year(0).is_err());
	/// assert!(record.set_year(10000).is_err());
	/// assert!(record.set_year(1986).is_ok());
	/// ```
	pub fn set_year(&mut self, year: u16) -> Result<()> {
		if !YEAR_RANGE.contains(&year) {
			return Err(ValidationError::YearOutOfRange(year).into());
		}

		self.year = Some(year);
		Ok(())
	}

	/// Builder-style [`Self::set_year`]
	pub fn with_year(mut self, year: u16) -> Result<Self> {
		self.set_year(year)?;
		Ok(self)
	}

	/// Removes the year
	pub fn remove_year(&mut self) {
		self.year = None;
	}

	/// Returns the genre, if set
	pub fn genre(&self) -> Option<Genre> {
		self.genre
	}

	/// Sets the genre
	pub fn set_genre(&mut self, genre: Genre) {
		self.genre = Some(genre);
	}

	/// Builder-style [`Self::set_genre`]
	pub fn with_genre(mut self, genre: Genre) -> Self {
		self.set_genre(genre);
		self
	}

	/// Removes the genre
	pub fn remove_genre(&mut self) {
		self.genre = None;
	}

	/// Fill in the names derived from a filename
	///
	/// A caller-supplied artist is kept, the title is always replaced.
	pub(crate) fn fill_names(&mut self, artist: String, title: String) {
		if self.artist.is_none() {
			self.artist = Some(artist);
		}

		self.title = title;
	}

	/// Trim all text fields, and verify the title isn't empty
	pub(crate) fn normalize(&mut self) -> Result<()> {
		fn trim_in_place(value: &mut String) {
			let trimmed = value.trim();
			if trimmed.len() != value.len() {
				*value = trimmed.to_owned();
			}
		}

		trim_in_place(&mut self.title);
		for value in [&mut self.artist, &mut self.album, &mut self.comment]
			.into_iter()
			.flatten()
		{
			trim_in_place(value);
		}

		if self.title.is_empty() {
			return Err(ValidationError::EmptyTitle.into());
		}

		Ok(())
	}
}
