//! Deriving artist and title from a filename
//!
//! A stem like `Jimi Hendrix - Hey Joe` is split on the first `" - "` that is preceded
//! only by characters allowed in an artist name. The artist part is matched lazily,
//! the title part greedily, so `AC-DC - Back - In Black` yields the artist `AC-DC` and
//! the title `Back - In Black`.
//!
//! The title segment stops at the first character outside of its class, it isn't anchored
//! to the end of the stem. `Artist - Title [Live]` yields the title `Title`.

use crate::error::{Result, ValidationError};
use crate::macros::err;

use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

// Artist: letters, digits, whitespace and . ' , + - &
// Title: letters, digits, whitespace and ( ) . ' , - ! &
static STEM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^([\w\s\.',\+\-&]+?) - ([\(\)\w\s\.',\-!&]+)").unwrap()
});

/// An ordered set of literal words to remove from the artist and title
///
/// Each word is removed case-insensitively, one after another, so earlier removals
/// can create or break matches for later ones.
///
/// # Examples
///
/// ```rust
/// use id3_autogen::extract::FilterSet;
///
/// # fn main() -> id3_autogen::error::Result<()> {
/// let filters = FilterSet::new(["the "])?;
/// assert_eq!(filters.apply("The prologue"), "prologue");
///
/// // Filters are literals, not patterns
/// let filters = FilterSet::new(["(live)"])?;
/// assert_eq!(filters.apply("Hey Joe (LIVE)"), "Hey Joe ");
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
	words: Vec<String>,
	patterns: Vec<Regex>,
}

impl FilterSet {
	/// Create a new `FilterSet` from filter words, in the order they should be applied
	///
	/// # Errors
	///
	/// [`ValidationError::EmptyFilter`] if any word is empty or only whitespace
	pub fn new<I, S>(words: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut set = Self::default();

		for word in words {
			let word = word.into();
			if word.trim().is_empty() {
				err!(ValidationFailure(ValidationError::EmptyFilter));
			}

			// An escaped literal is always a valid pattern
			let pattern = RegexBuilder::new(&regex::escape(&word))
				.case_insensitive(true)
				.build()
				.map_err(|_| ValidationError::EmptyFilter)?;

			set.words.push(word);
			set.patterns.push(pattern);
		}

		Ok(set)
	}

	/// Whether the set contains no filters
	pub fn is_empty(&self) -> bool {
		self.patterns.is_empty()
	}

	/// The filter words, in application order
	pub fn words(&self) -> impl Iterator<Item = &str> {
		self.words.iter().map(String::as_str)
	}

	/// Remove every filter word from `text`, left to right
	///
	/// The text is returned untouched (and unallocated) when the set is empty.
	pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
		let mut text = Cow::Borrowed(text);

		for pattern in &self.patterns {
			let replaced = pattern.replace_all(&text, "");
			if let Cow::Owned(replaced) = replaced {
				text = Cow::Owned(replaced);
			}
		}

		text
	}
}

/// The artist and title derived from a filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
	/// The artist, filtered and trimmed
	pub artist: String,
	/// The title, filtered and trimmed
	pub title: String,
}

/// Derives artist and title from filename stems
///
/// # Examples
///
/// ```rust
/// use id3_autogen::extract::{FilterSet, MetadataExtractor};
///
/// # fn main() -> id3_autogen::error::Result<()> {
/// let extractor = MetadataExtractor::new(FilterSet::default());
///
/// let names = extractor.extract("Jimi Hendrix - Hey Joe")?;
/// assert_eq!(names.artist, "Jimi Hendrix");
/// assert_eq!(names.title, "Hey Joe");
///
/// assert!(extractor.extract("Hey Joe").is_err());
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetadataExtractor {
	filters: FilterSet,
}

impl MetadataExtractor {
	/// Create a new `MetadataExtractor` applying `filters` to every match
	pub fn new(filters: FilterSet) -> Self {
		Self { filters }
	}

	/// Split a filename stem (no extension) into artist and title
	///
	/// # Errors
	///
	/// [`ErrorKind::ParseFailure`](crate::error::ErrorKind::ParseFailure) if the stem doesn't
	/// have the `ARTIST - TITLE` shape
	pub fn extract(&self, stem: &str) -> Result<Extraction> {
		let Some(captures) = STEM_PATTERN.captures(stem) else {
			log::debug!("No artist/title separator found in \"{stem}\"");
			err!(ParseFailure(stem.to_owned()));
		};

		let artist = self.filters.apply(&captures[1]).trim().to_owned();
		let title = self.filters.apply(&captures[2]).trim().to_owned();

		log::debug!("Extracted artist \"{artist}\" and title \"{title}\" from \"{stem}\"");

		Ok(Extraction { artist, title })
	}

	/// Same as [`Self::extract`], taking the stem from a path
	///
	/// # Errors
	///
	/// See [`Self::extract`]. A path without a (UTF-8) file name is a parse failure as well.
	pub fn extract_from_path(&self, path: &Path) -> Result<Extraction> {
		match path.file_stem().and_then(|stem| stem.to_str()) {
			Some(stem) => self.extract(stem),
			None => err!(ParseFailure(path.display().to_string())),
		}
	}
}
