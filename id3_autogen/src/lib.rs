//! Derive artist and title from MP3 filenames, and write them as a legacy tag trailer.
//!
//! A file named `Jimi Hendrix - Hey Joe.mp3` gets the artist `Jimi Hendrix` and the title
//! `Hey Joe`. Album, year, comment, and genre come from a template record shared by every
//! file of an invocation.
//!
//! # Examples
//!
//! ## Tagging a path
//!
//! ```rust,no_run
//! # fn main() -> id3_autogen::error::Result<()> {
//! use id3_autogen::prelude::*;
//! use std::path::Path;
//!
//! let template = MetadataRecord::new()
//! 	.with_album("Are You Experienced")
//! 	.with_year(1967)?
//! 	.with_genre(Genre::from_name("Rock")?);
//!
//! // Remove " (Remastered)" from artists and titles
//! let filters = FilterSet::new([" (remastered)"])?;
//!
//! let mut tagger = Tagger::new(template, filters, WriteOptions::default());
//! let written = tagger.tag_path(Path::new("Jimi Hendrix - Hey Joe (Remastered).mp3"))?;
//!
//! assert_eq!(written.record.title(), "Hey Joe");
//! # Ok(())
//! # }
//! ```
//!
//! ## Only extracting names
//!
//! ```rust
//! # fn main() -> id3_autogen::error::Result<()> {
//! use id3_autogen::extract::{FilterSet, MetadataExtractor};
//!
//! let extractor = MetadataExtractor::new(FilterSet::default());
//! let names = extractor.extract("AC-DC - Back - In Black")?;
//!
//! // The artist ends at the first separator
//! assert_eq!(names.artist, "AC-DC");
//! assert_eq!(names.title, "Back - In Black");
//! # Ok(())
//! # }
//! ```
//!
//! # Important format notes
//!
//! The trailer is a 128 byte ID3v1.1 block at the very end of the file, with the genre in
//! its final byte. See [`container`] and [`patch`] for how these bytes get written.
//!
//! Removing a leading ID3v2 tag ([`WriteOptions::strip_leading_header`](config::WriteOptions::strip_leading_header))
//! cuts the file at the first `0xFF` byte, which may be inside the ID3v2 tag itself.

pub mod config;
pub mod container;
pub mod error;
pub mod extract;
pub mod genre;
pub mod id3v2;
pub(crate) mod macros;
pub mod patch;
pub mod record;
pub mod tagger;
mod util;

pub use lofty::io;

pub mod prelude {
	//! A prelude for commonly used items in the library.
	//!
	//! This module is intended to be wildcard imported.
	//!
	//! ```rust
	//! use id3_autogen::prelude::*;
	//! ```

	pub use crate::config::WriteOptions;
	pub use crate::container::TagContainer;
	pub use crate::extract::{FilterSet, MetadataExtractor};
	pub use crate::genre::Genre;
	pub use crate::record::MetadataRecord;
	pub use crate::tagger::{TagWriter, Tagger};
}
