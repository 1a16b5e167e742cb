//! Shell-style globs for file names

use regex::{Regex, RegexBuilder};

/// A file name glob supporting `*` and `?`
///
/// The whole name has to match, ignoring case.
#[derive(Debug, Clone)]
pub struct Glob {
	pattern: String,
	regex: Regex,
}

impl Glob {
	/// Compile a glob
	///
	/// `*` matches any number of characters, `?` exactly one. Everything else is literal.
	pub fn new(pattern: &str) -> Result<Self, regex::Error> {
		let mut expr = String::with_capacity(pattern.len() + 2);
		expr.push('^');

		for c in pattern.chars() {
			match c {
				'*' => expr.push_str(".*"),
				'?' => expr.push('.'),
				_ => expr.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
			}
		}

		expr.push('$');

		let regex = RegexBuilder::new(&expr).case_insensitive(true).build()?;
		Ok(Self {
			pattern: pattern.to_owned(),
			regex,
		})
	}

	/// Whether `name` matches the entire glob
	pub fn is_match(&self, name: &str) -> bool {
		self.regex.is_match(name)
	}

	/// The glob as given
	pub fn as_str(&self) -> &str {
		&self.pattern
	}
}
