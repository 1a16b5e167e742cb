//! Contains the errors that can arise while tagging a file
//!
//! The primary error is [`TagError`]. The type of error is determined by [`ErrorKind`].
//! Every kind is recoverable at the granularity of a single file.

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, TagError>`
pub type Result<T> = std::result::Result<T, TagError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// The filename stem does not have the `ARTIST - TITLE` shape
	///
	/// Holds the offending stem.
	ParseFailure(String),
	/// A field value is outside of its allowed domain
	ValidationFailure(ValidationError),
	/// The tag container rejected the write
	WriteFailure(ContainerError),
	/// Patching the trailer or stripping the leading header failed
	IoFailure(std::io::Error),
	/// This should **never** be encountered
	Infallible(std::convert::Infallible),
}

/// Field-domain violations, raised when the value is assigned
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
	/// A year outside of `1..=9999`
	YearOutOfRange(u16),
	/// A genre name that isn't in [`GENRES`](crate::genre::GENRES)
	UnknownGenre(String),
	/// A genre code that isn't a valid index into [`GENRES`](crate::genre::GENRES)
	UnknownGenreCode(u8),
	/// The title is empty after filtering and trimming
	EmptyTitle,
	/// A filter word is empty or only whitespace
	EmptyFilter,
}

impl Display for ValidationError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::YearOutOfRange(year) => {
				write!(f, "Year {year} is out of range, expected 1 to 9999")
			},
			Self::UnknownGenre(name) => write!(f, "Unknown genre \"{name}\""),
			Self::UnknownGenreCode(code) => write!(f, "Unknown genre code {code}"),
			Self::EmptyTitle => write!(f, "Title is empty"),
			Self::EmptyFilter => write!(f, "Filter words must not be empty"),
		}
	}
}

/// An error reported by a [`TagContainer`](crate::container::TagContainer)
pub struct ContainerError {
	description: &'static str,
	source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ContainerError {
	/// Create a `ContainerError` from a description
	#[must_use]
	pub const fn new(description: &'static str) -> Self {
		Self {
			description,
			source: None,
		}
	}

	/// Create a `ContainerError` caused by another error
	pub fn with_source<E>(description: &'static str, source: E) -> Self
	where
		E: std::error::Error + Send + Sync + 'static,
	{
		Self {
			description,
			source: Some(Box::new(source)),
		}
	}

	/// Returns the error description
	pub fn description(&self) -> &str {
		self.description
	}
}

impl Debug for ContainerError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.source {
			Some(source) => write!(f, "{:?}: {source:?}", self.description),
			None => write!(f, "{:?}", self.description),
		}
	}
}

impl Display for ContainerError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.source {
			Some(source) => write!(f, "{}: {source}", self.description),
			None => write!(f, "{}", self.description),
		}
	}
}

impl std::error::Error for ContainerError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		self.source
			.as_deref()
			.map(|e| -> &(dyn std::error::Error + 'static) { e })
	}
}

impl From<std::io::Error> for ContainerError {
	fn from(input: std::io::Error) -> Self {
		Self::with_source("I/O error while writing the tag", input)
	}
}

/// Errors that could occur while tagging a file
pub struct TagError {
	pub(crate) kind: ErrorKind,
}

impl TagError {
	/// Create a `TagError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use id3_autogen::error::{ErrorKind, TagError};
	///
	/// let parse_failure = TagError::new(ErrorKind::ParseFailure(String::from("no separator")));
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}

	pub(crate) fn invalid_data(message: &'static str) -> Self {
		Self::new(ErrorKind::IoFailure(std::io::Error::new(
			std::io::ErrorKind::InvalidData,
			message,
		)))
	}
}

impl std::error::Error for TagError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match &self.kind {
			ErrorKind::WriteFailure(err) => Some(err),
			ErrorKind::IoFailure(err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for TagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<ValidationError> for TagError {
	fn from(input: ValidationError) -> Self {
		Self {
			kind: ErrorKind::ValidationFailure(input),
		}
	}
}

impl From<ContainerError> for TagError {
	fn from(input: ContainerError) -> Self {
		Self {
			kind: ErrorKind::WriteFailure(input),
		}
	}
}

impl From<std::io::Error> for TagError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::IoFailure(input),
		}
	}
}

impl From<std::convert::Infallible> for TagError {
	fn from(input: std::convert::Infallible) -> Self {
		Self {
			kind: ErrorKind::Infallible(input),
		}
	}
}

impl Display for TagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			ErrorKind::ParseFailure(ref stem) => {
				write!(f, "Could not detect artist & title in \"{stem}\"")
			},
			ErrorKind::ValidationFailure(ref err) => write!(f, "Validation: {err}"),
			ErrorKind::WriteFailure(ref err) => write!(f, "Writing the tag failed: {err}"),
			ErrorKind::IoFailure(ref err) => write!(f, "{err}"),
			ErrorKind::Infallible(_) => write!(f, "A expected condition was not upheld"),
		}
	}
}
