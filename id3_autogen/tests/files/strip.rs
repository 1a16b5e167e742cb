use crate::util::{audio_payload, create, id3v2_prefix, read_trailer, trailer_text};

use id3_autogen::config::WriteOptions;
use id3_autogen::container::TRAILER_SIZE;
use id3_autogen::error::ErrorKind;
use id3_autogen::extract::FilterSet;
use id3_autogen::genre::Genre;
use id3_autogen::record::MetadataRecord;
use id3_autogen::tagger::Tagger;

fn stripping_tagger() -> Tagger {
	Tagger::new(
		MetadataRecord::new().with_genre(Genre::from_name("Psychedelic Rock").unwrap()),
		FilterSet::default(),
		WriteOptions::new().strip_leading_header(true),
	)
}

#[test_log::test]
fn strip_id3v2() {
	let dir = tempfile::tempdir().unwrap();

	for content_len in [0, 10, 1000] {
		let prefix = id3v2_prefix(content_len);
		let mut content = prefix.clone();
		content.extend(audio_payload());
		let path = create(dir.path(), "Jimi Hendrix - Purple Haze.mp3", &content);

		let written = stripping_tagger().tag_path(&path).unwrap();
		assert_eq!(written.stripped_header, Some(prefix.len() as u64));

		let content = std::fs::read(&path).unwrap();
		assert_eq!(content.len(), audio_payload().len() + TRAILER_SIZE as usize);
		assert_eq!(content[..audio_payload().len()], audio_payload());

		let trailer = read_trailer(&path);
		assert_eq!(trailer_text(&trailer, 3, 30), "Purple Haze");
		assert_eq!(trailer[127], 93);
	}
}

#[test_log::test]
fn strip_arbitrary_prefix() {
	let dir = tempfile::tempdir().unwrap();

	let mut content = b"RIFF junk".to_vec();
	content.extend(audio_payload());
	let path = create(dir.path(), "Artist - Title.mp3", &content);

	let written = stripping_tagger().tag_path(&path).unwrap();
	assert_eq!(written.stripped_header, Some(9));
	assert_eq!(std::fs::read(&path).unwrap()[..4], [0xFF, 0xFB, 0x90, 0x64]);
}

#[test_log::test]
fn strip_without_prefix() {
	let dir = tempfile::tempdir().unwrap();
	let path = create(dir.path(), "Artist - Title.mp3", &audio_payload());

	let written = stripping_tagger().tag_path(&path).unwrap();
	assert_eq!(written.stripped_header, None);

	let content = std::fs::read(&path).unwrap();
	assert_eq!(content.len(), audio_payload().len() + TRAILER_SIZE as usize);
	assert_eq!(content[..audio_payload().len()], audio_payload());
}

#[test_log::test]
fn strip_twice() {
	let dir = tempfile::tempdir().unwrap();

	let mut content = id3v2_prefix(32);
	content.extend(audio_payload());
	let path = create(dir.path(), "Artist - Title.mp3", &content);

	let first = stripping_tagger().tag_path(&path).unwrap();
	let after_first = std::fs::read(&path).unwrap();

	let second = stripping_tagger().tag_path(&path).unwrap();
	let after_second = std::fs::read(&path).unwrap();

	assert_eq!(first.stripped_header, Some(42));
	assert_eq!(second.stripped_header, None);
	assert_eq!(after_first, after_second);
}

#[test_log::test]
fn strip_size_limit() {
	let dir = tempfile::tempdir().unwrap();

	let mut content = id3v2_prefix(32);
	content.extend(audio_payload());
	let path = create(dir.path(), "Artist - Title.mp3", &content);

	let options = WriteOptions::new()
		.strip_leading_header(true)
		.strip_size_limit(64);
	let err = Tagger::new(MetadataRecord::new(), FilterSet::default(), options)
		.tag_path(&path)
		.unwrap_err();

	// The trailer was already written, only the strip failed
	assert!(matches!(err.kind(), ErrorKind::IoFailure(_)));

	let after = std::fs::read(&path).unwrap();
	assert_eq!(after[..content.len()], content);
	assert_eq!(after.len(), content.len() + TRAILER_SIZE as usize);
}
