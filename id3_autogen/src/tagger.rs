//! Writing a complete record into a file
//!
//! [`TagWriter`] works on an already open file and already extracted names.
//! [`Tagger`] wraps it, going from a path to a [`WrittenRecord`].

use crate::config::WriteOptions;
use crate::container::{FrameSet, Id3v1Container, TagContainer};
use crate::error::{Result, TagError};
use crate::extract::{Extraction, FilterSet, MetadataExtractor};
use crate::patch::{patch_genre_byte, strip_leading_header};
use crate::record::MetadataRecord;

use std::fs::OpenOptions;
use std::path::Path;

use lofty::error::LoftyError;
use lofty::io::{FileLike, Length, Truncate};

/// The outcome of tagging a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenRecord {
	/// The record as it was (or, in a dry run, would have been) written
	pub record: MetadataRecord,
	/// Whether the file was left untouched
	pub dry_run: bool,
	/// The number of leading bytes removed, if a header was stripped
	pub stripped_header: Option<u64>,
}

/// Writes records through a [`TagContainer`], then patches and strips the file
///
/// The steps for every file are:
///
/// 1. Copy the template
/// 2. Fill in the extracted artist (unless the template has one) and title
/// 3. Trim all text fields
/// 4. Hand the frames to the container
/// 5. Patch the genre byte of the trailer
/// 6. Strip the leading header, if requested
///
/// Steps 4 to 6 are skipped in a [dry run](WriteOptions::dry_run). Step 5 only happens with
/// [`WriteOptions::patch_genre`] or a genre in the record.
pub struct TagWriter<C = Id3v1Container> {
	container: C,
	options: WriteOptions,
}

impl TagWriter<Id3v1Container> {
	/// Create a new `TagWriter` writing ID3v1 trailers
	pub fn new(options: WriteOptions) -> Self {
		Self::with_container(Id3v1Container::new(options.lossy_text_encoding), options)
	}
}

impl<C> TagWriter<C>
where
	C: TagContainer,
{
	/// Create a new `TagWriter` with a custom container
	pub fn with_container(container: C, options: WriteOptions) -> Self {
		Self { container, options }
	}

	/// The options used for every write
	pub fn options(&self) -> WriteOptions {
		self.options
	}

	/// Write `template`, completed with `names`, into `file`
	///
	/// `template` is never modified, every call works on its own copy.
	///
	/// # Errors
	///
	/// * [`ErrorKind::ValidationFailure`](crate::error::ErrorKind::ValidationFailure) if the
	///   title is empty after trimming
	/// * [`ErrorKind::WriteFailure`](crate::error::ErrorKind::WriteFailure) if the container
	///   rejects the frames
	/// * [`ErrorKind::IoFailure`](crate::error::ErrorKind::IoFailure) if the patch or strip fails
	///
	/// # Examples
	///
	/// ```rust
	/// use id3_autogen::config::WriteOptions;
	/// use id3_autogen::extract::Extraction;
	/// use id3_autogen::record::MetadataRecord;
	/// use id3_autogen::tagger::TagWriter;
	/// use std::io::Cursor;
	///
	/// # fn main() -> id3_autogen::error::Result<()> {
	/// let mut file = Cursor::new(vec![0xFF, 0xFB, 0x90, 0x64]);
	/// let names = Extraction {
	/// 	artist: String::from("Jimi Hendrix"),
	/// 	title: String::from("Hey Joe"),
	/// };
	///
	/// let mut writer = TagWriter::new(WriteOptions::default());
	/// let written = writer.write(&mut file, &MetadataRecord::new(), names)?;
	///
	/// assert_eq!(written.record.artist(), Some("Jimi Hendrix"));
	/// assert_eq!(file.get_ref().len(), 4 + 128);
	/// # Ok(()) }
	/// ```
	pub fn write<F>(
		&mut self,
		file: &mut F,
		template: &MetadataRecord,
		names: Extraction,
	) -> Result<WrittenRecord>
	where
		F: FileLike,
		TagError: From<<F as Truncate>::Error>,
		TagError: From<<F as Length>::Error>,
		LoftyError: From<<F as Truncate>::Error>,
		LoftyError: From<<F as Length>::Error>,
	{
		let mut record = template.clone();
		record.fill_names(names.artist, names.title);
		record.normalize()?;

		if self.options.dry_run {
			log::debug!("Dry run, skipping the write of \"{}\"", record.title());
			return Ok(WrittenRecord {
				record,
				dry_run: true,
				stripped_header: None,
			});
		}

		self.container
			.write_tag(file, &FrameSet::from_record(&record))?;

		if self.options.patch_genre || record.genre().is_some() {
			patch_genre_byte(file, record.genre())?;
		}

		let mut stripped_header = None;
		if self.options.strip_leading_header {
			stripped_header = strip_leading_header(file, self.options.strip_size_limit)?;
		}

		Ok(WrittenRecord {
			record,
			dry_run: false,
			stripped_header,
		})
	}
}

/// Tags files by path
///
/// # Examples
///
/// ```rust,no_run
/// use id3_autogen::config::WriteOptions;
/// use id3_autogen::extract::FilterSet;
/// use id3_autogen::record::MetadataRecord;
/// use id3_autogen::tagger::Tagger;
/// use std::path::Path;
///
/// # fn main() -> id3_autogen::error::Result<()> {
/// let template = MetadataRecord::new().with_album("Are You Experienced");
/// let mut tagger = Tagger::new(template, FilterSet::default(), WriteOptions::default());
///
/// let written = tagger.tag_path(Path::new("Jimi Hendrix - Hey Joe.mp3"))?;
/// assert_eq!(written.record.title(), "Hey Joe");
/// # Ok(()) }
/// ```
pub struct Tagger<C = Id3v1Container> {
	template: MetadataRecord,
	extractor: MetadataExtractor,
	writer: TagWriter<C>,
}

impl Tagger<Id3v1Container> {
	/// Create a new `Tagger` writing ID3v1 trailers
	pub fn new(template: MetadataRecord, filters: FilterSet, options: WriteOptions) -> Self {
		Self {
			template,
			extractor: MetadataExtractor::new(filters),
			writer: TagWriter::new(options),
		}
	}
}

impl<C> Tagger<C>
where
	C: TagContainer,
{
	/// Create a new `Tagger` with a custom container
	pub fn with_container(
		template: MetadataRecord,
		filters: FilterSet,
		options: WriteOptions,
		container: C,
	) -> Self {
		Self {
			template,
			extractor: MetadataExtractor::new(filters),
			writer: TagWriter::with_container(container, options),
		}
	}

	/// The record every file starts from
	pub fn template(&self) -> &MetadataRecord {
		&self.template
	}

	/// Derive the names from the file name of `path`, and write the record into it
	///
	/// The file is only opened once the names were extracted, and only for reading in a
	/// dry run. It is closed again before returning.
	///
	/// # Errors
	///
	/// * [`ErrorKind::ParseFailure`](crate::error::ErrorKind::ParseFailure) if the file name
	///   doesn't have the `ARTIST - TITLE` shape
	/// * [`ErrorKind::IoFailure`](crate::error::ErrorKind::IoFailure) if the file can't be opened
	/// * See [`TagWriter::write`]
	pub fn tag_path(&mut self, path: &Path) -> Result<WrittenRecord> {
		let names = self.extractor.extract_from_path(path)?;

		let mut file = OpenOptions::new()
			.read(true)
			.write(!self.writer.options().dry_run)
			.open(path)?;

		log::debug!("Tagging \"{}\"", path.display());
		self.writer.write(&mut file, &self.template, names)
	}
}
