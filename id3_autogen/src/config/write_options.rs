/// Options to control how a file is written
///
/// This is best used as an invocation-wide config that gets set once and copied into
/// every [`TagWriter`](crate::tagger::TagWriter).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct WriteOptions {
	pub(crate) dry_run: bool,
	pub(crate) strip_leading_header: bool,
	pub(crate) patch_genre: bool,
	pub(crate) lossy_text_encoding: bool,
	pub(crate) strip_size_limit: u64,
}

impl WriteOptions {
	/// Default upper bound for files read into memory by the header strip
	pub const DEFAULT_STRIP_SIZE_LIMIT: u64 = 256 * 1024 * 1024;

	/// Creates a new `WriteOptions`, alias for `Default` implementation
	///
	/// See also: [`WriteOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3_autogen::config::WriteOptions;
	///
	/// let write_options = WriteOptions::new();
	/// ```
	pub const fn new() -> Self {
		Self {
			dry_run: false,
			strip_leading_header: false,
			patch_genre: true,
			lossy_text_encoding: true,
			strip_size_limit: Self::DEFAULT_STRIP_SIZE_LIMIT,
		}
	}

	/// Whether to leave files untouched
	///
	/// In a dry run, the full record is still built and returned, but no byte of the file
	/// is written.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3_autogen::config::WriteOptions;
	///
	/// // I only want to see what would be written
	/// let options = WriteOptions::new().dry_run(true);
	/// ```
	pub fn dry_run(mut self, dry_run: bool) -> Self {
		self.dry_run = dry_run;
		self
	}

	/// Whether to remove everything preceding the first `0xFF` byte
	///
	/// This is meant for removing a leading ID3v2 tag. The boundary is found by a plain byte
	/// scan, and a `0xFF` byte *inside* the leading tag will cut it short. See
	/// [`strip_leading_header`](crate::patch::strip_leading_header).
	///
	/// # Examples
	///
	/// ```rust
	/// use id3_autogen::config::WriteOptions;
	///
	/// let options = WriteOptions::new().strip_leading_header(true);
	/// ```
	pub fn strip_leading_header(mut self, strip_leading_header: bool) -> Self {
		self.strip_leading_header = strip_leading_header;
		self
	}

	/// Whether to patch the trailer's genre byte, even when no genre is set
	///
	/// With no genre, the byte is set to [`GENRE_UNSET`](crate::genre::GENRE_UNSET).
	/// A record *with* a genre is always patched.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3_autogen::config::WriteOptions;
	///
	/// // Only touch the genre byte if a genre was given
	/// let options = WriteOptions::new().patch_genre(false);
	/// ```
	pub fn patch_genre(mut self, patch_genre: bool) -> Self {
		self.patch_genre = patch_genre;
		self
	}

	/// Whether to replace characters outside of Latin-1 with `?`
	///
	/// If disabled, such characters fail the write instead.
	///
	/// # Examples
	///
	/// ```rust
	/// use id3_autogen::config::WriteOptions;
	///
	/// let options = WriteOptions::new().lossy_text_encoding(false);
	/// ```
	pub fn lossy_text_encoding(mut self, lossy_text_encoding: bool) -> Self {
		self.lossy_text_encoding = lossy_text_encoding;
		self
	}

	/// The largest file (in bytes) the header strip will read into memory
	///
	/// # Examples
	///
	/// ```rust
	/// use id3_autogen::config::WriteOptions;
	///
	/// // I have hour-long mixes
	/// let options = WriteOptions::new().strip_size_limit(1024 * 1024 * 1024);
	/// ```
	pub fn strip_size_limit(mut self, strip_size_limit: u64) -> Self {
		self.strip_size_limit = strip_size_limit;
		self
	}
}

impl Default for WriteOptions {
	/// The default implementation for `WriteOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// WriteOptions {
	/// 	dry_run: false,
	/// 	strip_leading_header: false,
	/// 	patch_genre: true,
	/// 	lossy_text_encoding: true,
	/// 	strip_size_limit: Self::DEFAULT_STRIP_SIZE_LIMIT,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}
