//! Per-file result lines

use id3_autogen::extract::FilterSet;
use id3_autogen::tagger::WrittenRecord;

use std::io::{self, Write};

/// Print the success line for `name`, plus every field in verbose mode
pub fn success(
	out: &mut impl Write,
	name: &str,
	written: &WrittenRecord,
	verbose: bool,
) -> io::Result<()> {
	if !verbose {
		return writeln!(out, "Tag for \"{name}\" set.");
	}

	let record = &written.record;

	writeln!(out, "Tag for \"{name}\" set:")?;
	writeln!(out, "\tArtist: {}", record.artist().unwrap_or_default())?;
	writeln!(out, "\tTitle: {}", record.title())?;
	writeln!(out, "\tAlbum: {}", record.album().unwrap_or_default())?;
	match record.year() {
		Some(year) => writeln!(out, "\tYear: {year}")?,
		None => writeln!(out, "\tYear: ")?,
	}
	writeln!(out, "\tComment: {}", record.comment().unwrap_or_default())?;
	match record.genre() {
		Some(genre) => writeln!(out, "\tGenre: {genre}")?,
		None => writeln!(out, "\tGenre: None")?,
	}

	if let Some(size) = written.stripped_header {
		writeln!(out, "\tRemoved header: {size} bytes")?;
	}

	Ok(())
}

const THIRD_PARTY: [(&str, &str); 5] = [
	("env_logger", "MIT OR Apache-2.0"),
	("lofty", "MIT OR Apache-2.0"),
	("regex", "MIT OR Apache-2.0"),
	("structopt", "Apache-2.0 OR MIT"),
	("walkdir", "Unlicense OR MIT"),
];

/// Print the license of this program and the libraries it is built on
pub fn license(out: &mut impl Write) -> io::Result<()> {
	writeln!(
		out,
		"id3-autogen {}, licensed under {}",
		env!("CARGO_PKG_VERSION"),
		env!("CARGO_PKG_LICENSE")
	)?;

	writeln!(out)?;
	writeln!(out, "This program uses:")?;
	for (name, license) in THIRD_PARTY {
		writeln!(out, "\t{name}: {license}")?;
	}

	Ok(())
}

/// Print the filter words, in the order they are applied
pub fn filters(out: &mut impl Write, filters: &FilterSet) -> io::Result<()> {
	let words = filters
		.words()
		.map(|word| format!("\"{word}\""))
		.collect::<Vec<_>>();

	writeln!(out, "Filtering: {}", words.join(", "))
}
