use crate::util::{audio_payload, create, id3v2_prefix, read_trailer, trailer_text};

use id3_autogen::config::WriteOptions;
use id3_autogen::container::TRAILER_SIZE;
use id3_autogen::error::{ErrorKind, ValidationError};
use id3_autogen::extract::FilterSet;
use id3_autogen::genre::Genre;
use id3_autogen::record::MetadataRecord;
use id3_autogen::tagger::Tagger;

use std::path::Path;

#[test_log::test]
fn jimi_hendrix() {
	let dir = tempfile::tempdir().unwrap();
	let path = create(dir.path(), "Jimi Hendrix - Hey Joe.mp3", &audio_payload());

	let mut tagger = Tagger::new(
		MetadataRecord::new(),
		FilterSet::default(),
		WriteOptions::default(),
	);
	let written = tagger.tag_path(&path).unwrap();

	assert_eq!(written.record.artist(), Some("Jimi Hendrix"));
	assert_eq!(written.record.title(), "Hey Joe");
	assert!(!written.dry_run);

	let content = std::fs::read(&path).unwrap();
	assert_eq!(content.len(), audio_payload().len() + TRAILER_SIZE as usize);
	assert_eq!(content[..audio_payload().len()], audio_payload());
	assert_eq!(content.last(), Some(&0xFF));

	let trailer = read_trailer(&path);
	assert_eq!(&trailer[..3], b"TAG");
	assert_eq!(trailer_text(&trailer, 3, 30), "Hey Joe");
	assert_eq!(trailer_text(&trailer, 33, 30), "Jimi Hendrix");
}

#[test_log::test]
fn all_fields_written() {
	let dir = tempfile::tempdir().unwrap();
	let path = create(dir.path(), "Metallica - Battery.mp3", &audio_payload());

	let template = MetadataRecord::new()
		.with_album("Master of Puppets")
		.with_year(1986)
		.unwrap()
		.with_comment("Remastered")
		.with_genre(Genre::from_name("metal").unwrap());

	let mut tagger = Tagger::new(template, FilterSet::default(), WriteOptions::default());
	let written = tagger.tag_path(&path).unwrap();

	assert_eq!(written.record.album(), Some("Master of Puppets"));
	assert_eq!(written.record.year(), Some(1986));
	assert_eq!(written.record.genre().map(Genre::code), Some(9));

	let trailer = read_trailer(&path);
	assert_eq!(trailer_text(&trailer, 63, 30), "Master of Puppets");
	assert_eq!(&trailer[93..97], b"1986");
	assert_eq!(trailer_text(&trailer, 97, 28), "Remastered");
	assert_eq!(trailer[127], 9);
}

#[test_log::test]
fn genre_code_patched() {
	let dir = tempfile::tempdir().unwrap();

	for code in [0, 17, 79, 147] {
		let path = create(dir.path(), "Artist - Title.mp3", &audio_payload());
		let template = MetadataRecord::new().with_genre(Genre::from_code(code).unwrap());

		Tagger::new(template, FilterSet::default(), WriteOptions::default())
			.tag_path(&path)
			.unwrap();

		let content = std::fs::read(&path).unwrap();
		assert_eq!(content.last(), Some(&code));
	}
}

#[test_log::test]
fn dry_run_leaves_file_untouched() {
	let dir = tempfile::tempdir().unwrap();

	let mut content = id3v2_prefix(100);
	content.extend(audio_payload());
	let path = create(dir.path(), "Jimi Hendrix - Hey Joe.mp3", &content);

	let template = MetadataRecord::new()
		.with_album("Are You Experienced")
		.with_genre(Genre::from_name("Rock").unwrap());
	let options = WriteOptions::new()
		.dry_run(true)
		.strip_leading_header(true);

	let written = Tagger::new(template, FilterSet::default(), options)
		.tag_path(&path)
		.unwrap();

	assert!(written.dry_run);
	assert_eq!(written.stripped_header, None);
	assert_eq!(written.record.artist(), Some("Jimi Hendrix"));
	assert_eq!(written.record.title(), "Hey Joe");
	assert_eq!(written.record.album(), Some("Are You Experienced"));
	assert_eq!(written.record.genre().map(Genre::name), Some("Rock"));

	assert_eq!(std::fs::read(&path).unwrap(), content);
}

#[test_log::test]
fn parse_failure_leaves_file_untouched() {
	let dir = tempfile::tempdir().unwrap();
	let path = create(dir.path(), "Hey Joe.mp3", &audio_payload());

	let err = Tagger::new(
		MetadataRecord::new(),
		FilterSet::default(),
		WriteOptions::default(),
	)
	.tag_path(&path)
	.unwrap_err();

	assert!(matches!(err.kind(), ErrorKind::ParseFailure(stem) if stem == "Hey Joe"));
	assert_eq!(err.to_string(), "Could not detect artist & title in \"Hey Joe\"");
	assert_eq!(std::fs::read(&path).unwrap(), audio_payload());
}

#[test_log::test]
fn names_are_extracted_before_opening() {
	let mut tagger = Tagger::new(
		MetadataRecord::new(),
		FilterSet::default(),
		WriteOptions::default(),
	);

	// An unparsable name is rejected without touching the filesystem
	let err = tagger
		.tag_path(Path::new("/does/not/exist/Hey Joe.mp3"))
		.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::ParseFailure(_)));

	let err = tagger
		.tag_path(Path::new("/does/not/exist/Jimi Hendrix - Hey Joe.mp3"))
		.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::IoFailure(_)));
}

#[test_log::test]
fn template_is_not_shared_between_files() {
	let dir = tempfile::tempdir().unwrap();
	let first = create(dir.path(), "Jimi Hendrix - Hey Joe.mp3", &audio_payload());
	let second = create(dir.path(), "The Doors - Riders on the Storm.mp3", &audio_payload());

	let template = MetadataRecord::new().with_comment("Compilation");
	let mut tagger = Tagger::new(template, FilterSet::default(), WriteOptions::default());

	let first = tagger.tag_path(&first).unwrap();
	let second = tagger.tag_path(&second).unwrap();

	assert_eq!(first.record.artist(), Some("Jimi Hendrix"));
	assert_eq!(second.record.artist(), Some("The Doors"));
	assert_eq!(second.record.title(), "Riders on the Storm");
	assert_eq!(second.record.comment(), Some("Compilation"));

	assert_eq!(tagger.template().artist(), None);
	assert_eq!(tagger.template().title(), "");
}

#[test_log::test]
fn caller_artist_wins() {
	let dir = tempfile::tempdir().unwrap();
	let path = create(dir.path(), "Hendrix - Hey Joe.mp3", &audio_payload());

	let template = MetadataRecord::new().with_artist("The Jimi Hendrix Experience");
	let written = Tagger::new(template, FilterSet::default(), WriteOptions::default())
		.tag_path(&path)
		.unwrap();

	assert_eq!(
		written.record.artist(),
		Some("The Jimi Hendrix Experience")
	);
	assert_eq!(written.record.title(), "Hey Joe");
	assert_eq!(
		trailer_text(&read_trailer(&path), 33, 30),
		"The Jimi Hendrix Experience"
	);
}

#[test_log::test]
fn filters_applied() {
	let dir = tempfile::tempdir().unwrap();
	let path = create(dir.path(), "The Doors - The End (Live).mp3", &audio_payload());

	let filters = FilterSet::new(["the ", "(live)"]).unwrap();
	let written = Tagger::new(MetadataRecord::new(), filters, WriteOptions::default())
		.tag_path(&path)
		.unwrap();

	assert_eq!(written.record.artist(), Some("Doors"));
	assert_eq!(written.record.title(), "End");
}

#[test_log::test]
fn filtered_to_empty_title() {
	let dir = tempfile::tempdir().unwrap();
	let path = create(dir.path(), "Artist - Live.mp3", &audio_payload());

	let filters = FilterSet::new(["live"]).unwrap();
	let err = Tagger::new(MetadataRecord::new(), filters, WriteOptions::default())
		.tag_path(&path)
		.unwrap_err();

	assert!(matches!(
		err.kind(),
		ErrorKind::ValidationFailure(ValidationError::EmptyTitle)
	));
	assert_eq!(std::fs::read(&path).unwrap(), audio_payload());
}

#[test_log::test]
fn retagging_overwrites_trailer() {
	let dir = tempfile::tempdir().unwrap();
	let path = create(dir.path(), "Jimi Hendrix - Hey Joe.mp3", &audio_payload());

	Tagger::new(
		MetadataRecord::new().with_genre(Genre::from_code(17).unwrap()),
		FilterSet::default(),
		WriteOptions::default(),
	)
	.tag_path(&path)
	.unwrap();

	Tagger::new(
		MetadataRecord::new().with_album("Woodstock"),
		FilterSet::default(),
		WriteOptions::default(),
	)
	.tag_path(&path)
	.unwrap();

	let content = std::fs::read(&path).unwrap();
	assert_eq!(content.len(), audio_payload().len() + TRAILER_SIZE as usize);

	let trailer = read_trailer(&path);
	assert_eq!(trailer_text(&trailer, 63, 30), "Woodstock");
	assert_eq!(trailer[127], 0xFF);
}

#[test_log::test]
fn strict_text_encoding() {
	let dir = tempfile::tempdir().unwrap();
	let path = create(dir.path(), "Motörhead - Ace of Spades.mp3", &audio_payload());

	// ö is Latin-1
	Tagger::new(
		MetadataRecord::new(),
		FilterSet::default(),
		WriteOptions::new().lossy_text_encoding(false),
	)
	.tag_path(&path)
	.unwrap();
	assert_eq!(read_trailer(&path)[33..42], *b"Mot\xF6rhead");

	let path = create(dir.path(), "Sigur Rós - Hoppípolla.mp3", &audio_payload());
	let template = MetadataRecord::new().with_comment("\u{3042}");

	let err = Tagger::new(
		template.clone(),
		FilterSet::default(),
		WriteOptions::new().lossy_text_encoding(false),
	)
	.tag_path(&path)
	.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::WriteFailure(_)));
	assert_eq!(std::fs::read(&path).unwrap(), audio_payload());

	Tagger::new(template, FilterSet::default(), WriteOptions::new())
		.tag_path(&path)
		.unwrap();
	assert_eq!(read_trailer(&path)[97], b'?');
}
