use std::path::{Path, PathBuf};

use id3_autogen::container::TRAILER_SIZE;

/// A few fake MPEG frames, starting with a frame sync
pub fn audio_payload() -> Vec<u8> {
	let mut payload = Vec::new();
	for _ in 0..4 {
		payload.extend([0xFF, 0xFB, 0x90, 0x64]);
		payload.extend([0x00; 60]);
	}

	payload
}

/// An ID3v2.3 tag with `content_len` zeroed bytes of content
pub fn id3v2_prefix(content_len: u32) -> Vec<u8> {
	let mut prefix = b"ID3\x03\x00\x00".to_vec();
	prefix.extend([
		((content_len >> 21) & 0x7F) as u8,
		((content_len >> 14) & 0x7F) as u8,
		((content_len >> 7) & 0x7F) as u8,
		(content_len & 0x7F) as u8,
	]);
	prefix.resize(prefix.len() + content_len as usize, 0);
	prefix
}

/// Write `content` to `dir/name`
pub fn create(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
	let path = dir.join(name);
	std::fs::write(&path, content).unwrap();
	path
}

/// The final 128 bytes of the file at `path`
pub fn read_trailer(path: &Path) -> Vec<u8> {
	let content = std::fs::read(path).unwrap();
	assert!(content.len() as u64 >= TRAILER_SIZE);
	content[content.len() - TRAILER_SIZE as usize..].to_vec()
}

/// Read a NUL padded text field of a trailer
pub fn trailer_text(trailer: &[u8], offset: usize, size: usize) -> String {
	let field = &trailer[offset..offset + size];
	let end = field.iter().position(|b| *b == 0).unwrap_or(size);
	String::from_utf8(field[..end].to_vec()).unwrap()
}
