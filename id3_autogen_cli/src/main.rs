//! `id3-autogen`: tag MP3 files from their `ARTIST - TITLE` file names
//!
//! Set `RUST_LOG=debug` for a trace of every step.

mod pattern;
mod report;
mod targets;

use id3_autogen::config::WriteOptions;
use id3_autogen::error::Result;
use id3_autogen::extract::FilterSet;
use id3_autogen::genre::{self, Genre};
use id3_autogen::record::MetadataRecord;
use id3_autogen::tagger::Tagger;

use pattern::Glob;

use structopt::StructOpt;

use std::path::PathBuf;
use std::process::exit;

#[derive(Debug, StructOpt)]
#[structopt(
	name = "id3-autogen",
	about = "Sets ID3 tags from file names in the form \"ARTIST - TITLE.mp3\""
)]
struct Opt {
	/// Comment for every file
	#[structopt(short, long)]
	comment: Option<String>,

	/// Album for every file
	#[structopt(short, long)]
	album: Option<String>,

	/// Release year for every file (1 to 9999)
	#[structopt(short, long)]
	year: Option<u16>,

	/// Genre name or code for every file, see --genres
	#[structopt(short, long)]
	genre: Option<String>,

	/// Glob for the files to tag inside of a directory
	#[structopt(short, long, default_value = "*.mp3")]
	pattern: String,

	/// Artist for every file, instead of the one in the file name
	#[structopt(long)]
	artist: Option<String>,

	/// Show what would be written, without changing any file
	#[structopt(long)]
	dry_run: bool,

	/// Print every written field
	#[structopt(long)]
	verbose: bool,

	/// Word to remove from artists and titles (repeatable)
	#[structopt(long = "filter", number_of_values = 1)]
	filters: Vec<String>,

	/// Remove everything before the first audio frame, like an ID3v2 tag
	#[structopt(long = "remove-id3v2")]
	remove_id3v2: bool,

	/// List all genres and exit
	#[structopt(long)]
	genres: bool,

	/// Show license information and exit
	#[structopt(long)]
	license: bool,

	/// A file, or a directory to tag all matching files in
	#[structopt(parse(from_os_str), required_unless_one = &["genres", "license"])]
	path: Option<PathBuf>,
}

fn template(opt: &Opt) -> Result<MetadataRecord> {
	let mut template = MetadataRecord::new();

	if let Some(artist) = &opt.artist {
		template.set_artist(artist.as_str());
	}

	if let Some(album) = &opt.album {
		template.set_album(album.as_str());
	}

	if let Some(comment) = &opt.comment {
		template.set_comment(comment.as_str());
	}

	if let Some(year) = opt.year {
		template.set_year(year)?;
	}

	if let Some(name) = &opt.genre {
		template.set_genre(Genre::from_name(name)?);
	}

	Ok(template)
}

fn main() {
	env_logger::init();

	let opt = Opt::from_args();

	if opt.license {
		if let Err(e) = report::license(&mut std::io::stdout().lock()) {
			log::error!("Unable to write to stdout: {e}");
			exit(1);
		}

		return;
	}

	if opt.genres {
		for name in genre::sorted_names() {
			println!("{name}");
		}

		return;
	}

	let template = template(&opt).unwrap_or_else(|e| {
		eprintln!("ERROR: {e}");
		exit(1);
	});

	let filters = FilterSet::new(opt.filters.iter().cloned()).unwrap_or_else(|e| {
		eprintln!("ERROR: {e}");
		exit(1);
	});

	let glob = Glob::new(&opt.pattern).unwrap_or_else(|e| {
		eprintln!("ERROR: Invalid pattern \"{}\": {e}", opt.pattern);
		exit(1);
	});

	let Some(path) = opt.path.as_deref() else {
		eprintln!("ERROR: No file or directory given");
		exit(1);
	};

	let files = targets::collect(path, &glob).unwrap_or_else(|e| {
		if e.kind() == std::io::ErrorKind::NotFound {
			eprintln!("Given file or directory not found.");
		} else {
			eprintln!("ERROR: Unable to list \"{}\": {e}", path.display());
		}

		exit(1);
	});

	if opt.dry_run {
		println!("Dry run active. No file will be changed.");
	}

	let mut stdout = std::io::stdout().lock();

	if opt.verbose && !filters.is_empty() {
		if let Err(e) = report::filters(&mut stdout, &filters) {
			log::error!("Unable to write to stdout: {e}");
			exit(1);
		}
	}

	let options = WriteOptions::new()
		.dry_run(opt.dry_run)
		.strip_leading_header(opt.remove_id3v2);
	let mut tagger = Tagger::new(template, filters, options);

	for file in files {
		let name = file
			.file_name()
			.map(|name| name.to_string_lossy().into_owned())
			.unwrap_or_default();

		match tagger.tag_path(&file) {
			Ok(written) => {
				if let Err(e) = report::success(&mut stdout, &name, &written, opt.verbose) {
					log::error!("Unable to write to stdout: {e}");
					exit(1);
				}
			},
			Err(e) => eprintln!("Tagging of \"{name}\" failed: {e}"),
		}
	}
}
